use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("A menu needs at least one option.")]
    EmptyOptions,

    #[error("Terminal error: {}", _0)]
    Terminal(#[from] std::io::Error),

    #[error("The menu needs an interactive terminal, but {} is not a TTY.", .0)]
    NotInteractive(String),

    #[error("Interrupted.")]
    Interrupted,

    #[error("Error {} {} file at `{}`: {}", .action, .file_description, .path, .original)]
    Yaml {
        action: String,
        file_description: String,
        path: String,
        original: serde_yaml::Error,
    },

    #[error("For a color, only one of `rgb`, `ansi` or `name` should be defined.")]
    MultipleColorTypes,

    #[error("Unknown color name: \"{}\"", _0)]
    UnknownColorName(String),

    #[error("No menus were found in the menu definition YAML. Is `{}` empty?", .path)]
    EmptyMenuDefinition { path: String },

    #[error("Menu {} has no options.", .0)]
    MenuWithoutOptions(String),

    #[error("IO error with {} file at path `{}`: {}", .file_description, .path, .original)]
    Io {
        file_description: String,
        path: String,
        original: std::io::Error,
    },

    #[error("No menu found with ID or index `{}`", .0)]
    MenuNotFound(String),

    #[error("Found a non-unique menu ID: `{}`", .0)]
    NonUniqueMenuId(String),

    #[error("Invalid ID: ID may not be empty")]
    EmptyId,

    #[error("Invalid ID `{}`: ID may not contain spaces", .0)]
    IdWithSpace(String),

    #[error("Invalid ID `{}`: ID may not contain a colon (reserved for future use)", .0)]
    IdWithColon(String),

    #[error("Invalid ID `{}`: ID cannot be purely numeric", .0)]
    NumericId(String),
}

impl Error {
    pub fn empty_menu_definition(path: String) -> Self {
        Self::EmptyMenuDefinition { path }
    }

    pub fn yaml_error(
        action: String,
        file_description: String,
        path: String,
        original: serde_yaml::Error,
    ) -> Self {
        Self::Yaml {
            action,
            file_description,
            path,
            original,
        }
    }

    pub fn io_error(file_description: String, path: String, original: std::io::Error) -> Self {
        Self::Io {
            file_description,
            path,
            original,
        }
    }
}
