//! Console Menu Core Library
//!
//! This crate provides an interactive console menu: a prompt followed by a list
//! of options, a highlighted selection moved with the arrow keys, and the chosen
//! index returned once the user presses Enter.
//!
//! # Key Features
//!
//! - **Incremental Redraw**: Navigation repaints only the two lines that changed
//! - **Injected Terminal**: All terminal access goes through the [`terminal::Terminal`] trait
//! - **Menu Definitions**: Load prompts, options and colors from a YAML file
//! - **Error Handling**: A single error type for terminal and configuration failures
//!
//! # Examples
//!
//! Running a menu on the current terminal:
//!
//! ```no_run
//! use console_menu_core::menu::Menu;
//!
//! let options = vec!["Start".to_string(), "Settings".to_string(), "Quit".to_string()];
//! let menu = Menu::new("What would you like to do?", options)?;
//! let selected = menu.run()?;
//! println!("Selected option {selected}");
//! # Ok::<(), console_menu_core::error::Error>(())
//! ```

pub mod config;
pub mod error;
pub mod file_handling;
pub mod menu;
pub mod menu_definitions;
pub mod terminal;
