//! Reading and validation of menu definition files.

use std::collections::HashSet;
use std::fs::File;
use std::path::Path;

use log::debug;

use crate::error::Error::{
    EmptyId, IdWithColon, IdWithSpace, MenuWithoutOptions, NonUniqueMenuId, NumericId,
};
use crate::error::{Error, Result};
use crate::menu_definitions::MenuDefinition;

fn get_reader(file_description: &str, path: &str) -> Result<File> {
    match File::open(path) {
        Ok(reader) => Ok(reader),
        Err(e) => Err(Error::io_error(
            file_description.to_string(),
            path.to_string(),
            e,
        )),
    }
}

/// Whether a definitions file exists at `path`.
pub fn definitions_exist(path: &str) -> bool {
    Path::exists(Path::new(path))
}

fn validate_id(id: &str) -> Result<()> {
    if id.is_empty() {
        return Err(EmptyId);
    }

    if id.contains(' ') {
        return Err(IdWithSpace(id.to_string()));
    }

    if id.contains(':') {
        return Err(IdWithColon(id.to_string()));
    }

    if id.chars().all(|c| c.is_numeric()) {
        return Err(NumericId(id.to_string()));
    }

    Ok(())
}

fn validate_menus(menus: &[MenuDefinition]) -> Result<()> {
    let mut ids = HashSet::new();

    for menu in menus.iter() {
        if let Some(id) = &menu.id {
            validate_id(id)?;

            if !ids.insert(id.clone()) {
                return Err(NonUniqueMenuId(id.clone()));
            }
        }

        if menu.options.is_empty() {
            return Err(MenuWithoutOptions(format!("{menu}")));
        }
    }

    Ok(())
}

/// Loads and validates menu definitions from a YAML file.
///
/// # Errors
///
/// Returns an error if:
/// - The file cannot be read
/// - The YAML is malformed or doesn't match the expected structure
/// - The file contains no menus, or a menu has no options
/// - Menu IDs are invalid or non-unique
///
/// # Examples
///
/// ```no_run
/// use console_menu_core::file_handling::get_menu_definitions;
///
/// let menus = get_menu_definitions("/home/me/.console-menu/menus.yml")?;
/// println!("Loaded {} menus", menus.len());
/// # Ok::<(), console_menu_core::error::Error>(())
/// ```
pub fn get_menu_definitions(definitions_path: &str) -> Result<Vec<MenuDefinition>> {
    let reader = get_reader("menu definitions", definitions_path)?;

    let menus: Vec<MenuDefinition> = serde_yaml::from_reader(reader).map_err(|e| {
        Error::yaml_error(
            "reading".to_string(),
            "menu definitions".to_string(),
            definitions_path.to_string(),
            e,
        )
    })?;

    if menus.is_empty() {
        return Err(Error::empty_menu_definition(definitions_path.to_string()));
    }

    validate_menus(&menus)?;

    debug!("Loaded {} menus from `{}`", menus.len(), definitions_path);

    Ok(menus)
}
