//! Command-line argument parsing.
//!
//! This module defines the command-line interface structure using the `clap`
//! crate.

use clap::Parser;

/// Command-line arguments for the `menu` binary.
///
/// Menus come from a definitions file (or the built-in menus when the default
/// file does not exist), or from a single ad-hoc menu given with `--prompt` and
/// `--option`.
///
/// # Examples
///
/// ```rust
/// use clap::Parser;
/// use console_menu_cli::cli_args::Args;
///
/// let args = Args::parse_from(["menu", "-p", "Continue?", "-o", "Yes", "-o", "No"]);
/// assert_eq!(args.options.len(), 2);
/// ```
#[derive(Parser, Debug)] // requires `derive` feature
#[command(term_width = 0)] // Just to make testing across clap features easier
pub struct Args {
    /// Path to the menu definitions YAML file.
    ///
    /// If not provided, defaults to `~/.console-menu/menus.yml`, falling back to
    /// the built-in menus when that file does not exist.
    #[arg(long, short = 'c')]
    pub config_path: Option<String>,

    /// Prompt of a single ad-hoc menu. Requires at least one `--option`.
    #[arg(
        long,
        short = 'p',
        requires = "options",
        conflicts_with_all = ["config_path", "menu_id_or_index"]
    )]
    pub prompt: Option<String>,

    /// An option of the ad-hoc menu. Repeat for every option, in order.
    #[arg(long = "option", short = 'o', action = clap::ArgAction::Append, requires = "prompt")]
    pub options: Vec<String>,

    /// Print the bare index of each selection instead of the selected text.
    #[arg(long, short = 'i', action)]
    pub print_index: bool,

    /// The menu ID or index to run on its own.
    ///
    /// If not provided, every defined menu runs in order. Can be either:
    /// - A menu ID (string identifier)
    /// - A numeric index (0-based position in the definitions file)
    #[arg(num_args(1))]
    pub menu_id_or_index: Option<String>,
}
