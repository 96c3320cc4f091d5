//! Console Menu CLI Library
//!
//! This crate provides the `menu` binary: it runs one or more interactive
//! console menus in sequence and prints what was selected in each.
//!
//! # Architecture
//!
//! - [`cli_args`]: Command-line argument parsing
//! - [`colors`]: Conversion of configured colors to terminal colors
//! - [`session`]: Choosing the menus to run and running them in order
//!
//! # Examples
//!
//! ```bash
//! # Run every menu from ~/.console-menu/menus.yml (or the built-in menus)
//! menu
//!
//! # Run a single menu by ID or index
//! menu main
//!
//! # Ad-hoc menu, printing the chosen index
//! menu --print-index -p "Continue?" -o Yes -o No
//! ```

pub mod cli_args;
pub mod colors;
pub mod session;
