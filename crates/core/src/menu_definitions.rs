use std::fmt::{Display, Formatter};

use serde::Deserialize;

#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ColorDefinition {
    pub rgb: Option<(u8, u8, u8)>,
    pub ansi: Option<u8>,
    pub name: Option<String>,
}

#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct MenuMetadata {
    pub selected_color: Option<ColorDefinition>,
    pub unselected_color: Option<ColorDefinition>,
}

#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct MenuDefinition {
    pub id: Option<String>,
    pub prompt: String,
    pub options: Vec<String>,
    pub metadata: Option<MenuMetadata>,
}

impl MenuDefinition {
    pub fn new(id: Option<&str>, prompt: &str, options: &[&str]) -> Self {
        Self {
            id: id.map(ToString::to_string),
            prompt: prompt.to_string(),
            options: options.iter().map(ToString::to_string).collect(),
            metadata: None,
        }
    }
}

impl Display for MenuDefinition {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        match &self.id {
            Some(id) => write!(formatter, "`{id}`"),
            // Fall back to the prompt itself
            None => write!(formatter, "\"{}\"", self.prompt),
        }
    }
}

/// The menus shown when no definitions file exists: a main menu followed by
/// a sub menu.
pub fn default_menu_definitions() -> Vec<MenuDefinition> {
    vec![
        MenuDefinition::new(
            Some("main"),
            "Main menu: choose an option with the arrow keys and press Enter.",
            &["Main menu option 1", "Main menu option 2", "Main menu option 3"],
        ),
        MenuDefinition::new(
            Some("sub"),
            "Sub menu: choose an option with the arrow keys and press Enter.",
            &["Sub menu option 1", "Sub menu option 2"],
        ),
    ]
}
