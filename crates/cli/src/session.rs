//! Choosing which menus to run and running them one after another.

use std::io::Write;

use console_menu_core::config;
use console_menu_core::error::{Error, Result};
use console_menu_core::file_handling::{definitions_exist, get_menu_definitions};
use console_menu_core::menu::Menu;
use console_menu_core::menu_definitions::{default_menu_definitions, MenuDefinition};
use log::{debug, info};

use crate::cli_args::Args;
use crate::colors::style_for;

/// Collects the menus described by the arguments.
///
/// An ad-hoc `--prompt` menu wins. Otherwise the definitions file is read,
/// and when no custom path was given and the default file is missing, the
/// built-in menus are used.
pub fn load_definitions(args: &Args) -> Result<Vec<MenuDefinition>> {
    if let Some(prompt) = &args.prompt {
        if args.options.is_empty() {
            return Err(Error::EmptyOptions);
        }

        return Ok(vec![MenuDefinition {
            id: None,
            prompt: prompt.clone(),
            options: args.options.clone(),
            metadata: None,
        }]);
    }

    let definitions_path = config::get_definitions_path(&args.config_path);
    debug!("Definitions path: `{}`", definitions_path);

    if args.config_path.is_none() && !definitions_exist(&definitions_path) {
        info!(
            "No menu definitions at `{}`, using the built-in menus",
            definitions_path
        );
        return Ok(default_menu_definitions());
    }

    get_menu_definitions(&definitions_path)
}

/// Narrows the definitions down to a single menu when an ID or index is given.
pub fn select_definitions(
    definitions: Vec<MenuDefinition>,
    menu_id_or_index: Option<&str>,
) -> Result<Vec<MenuDefinition>> {
    let Some(menu_id_or_index) = menu_id_or_index else {
        return Ok(definitions);
    };

    let found = if let Ok(index) = menu_id_or_index.parse::<usize>() {
        definitions.into_iter().nth(index)
    } else {
        definitions
            .into_iter()
            .find(|definition| definition.id.as_deref() == Some(menu_id_or_index))
    };

    found
        .map(|definition| vec![definition])
        .ok_or_else(|| Error::MenuNotFound(menu_id_or_index.to_string()))
}

/// Runs each menu in turn and reports every selection to `out`.
///
/// `run_menu` drives a single menu; the binary passes [`Menu::run`].
pub fn run_definitions<F, W>(
    definitions: &[MenuDefinition],
    mut run_menu: F,
    out: &mut W,
    print_index: bool,
) -> Result<Vec<usize>>
where
    F: FnMut(Menu) -> Result<usize>,
    W: Write,
{
    let mut selections = Vec::with_capacity(definitions.len());

    for definition in definitions {
        debug!("Running menu {}", definition);

        let style = style_for(definition)?;
        let menu =
            Menu::new(definition.prompt.clone(), definition.options.clone())?.with_style(style);

        let selected = run_menu(menu)?;

        if print_index {
            writeln!(out, "{selected}")?;
        } else {
            writeln!(out, "You have selected: {}", definition.options[selected])?;
        }
        out.flush()?;

        selections.push(selected);
    }

    Ok(selections)
}
