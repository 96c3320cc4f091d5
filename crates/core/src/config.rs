//! Configuration path utilities for console-menu.
//!
//! This module resolves the menu definitions file path and expands shell
//! variables like `~` in it.

/// Default path for the menu definitions file
pub const DEFAULT_DEFINITIONS_PATH: &str = "~/.console-menu/menus.yml";

/// Resolves the menu definitions file path.
///
/// If a custom path is provided, uses that path. Otherwise, uses the default
/// definitions path. Shell expansions like `~` are resolved.
///
/// # Arguments
///
/// * `definitions_path_arg` - Optional custom definitions file path
///
/// # Returns
///
/// The resolved path to the definitions file
///
/// # Examples
///
/// ```
/// use console_menu_core::config::get_definitions_path;
///
/// // Use default path
/// let default_path = get_definitions_path(&None);
///
/// // Use custom path
/// let custom_path = get_definitions_path(&Some("/path/to/menus.yml".to_string()));
/// assert_eq!(custom_path, "/path/to/menus.yml");
/// ```
pub fn get_definitions_path(definitions_path_arg: &Option<String>) -> String {
    let definitions_path = match definitions_path_arg {
        Some(definitions_path) => definitions_path,
        None => DEFAULT_DEFINITIONS_PATH,
    };

    shellexpand::tilde(definitions_path).to_string()
}
