use console_menu_core::error::{Error, Result};
use console_menu_core::menu::MenuStyle;
use console_menu_core::menu_definitions::{ColorDefinition, MenuDefinition};
use crossterm::style::Color;

fn named_color(name: &str) -> Result<Color> {
    let color = match name.to_lowercase().as_str() {
        "black" => Color::Black,
        "darkgrey" => Color::DarkGrey,
        "red" => Color::Red,
        "darkred" => Color::DarkRed,
        "green" => Color::Green,
        "darkgreen" => Color::DarkGreen,
        "yellow" => Color::Yellow,
        "darkyellow" => Color::DarkYellow,
        "blue" => Color::Blue,
        "darkblue" => Color::DarkBlue,
        "magenta" => Color::Magenta,
        "darkmagenta" => Color::DarkMagenta,
        "cyan" => Color::Cyan,
        "darkcyan" => Color::DarkCyan,
        "white" => Color::White,
        "grey" => Color::Grey,
        _ => return Err(Error::UnknownColorName(name.to_string())),
    };

    Ok(color)
}

/// Resolves a configured color, or `fallback` when the definition is missing
/// or empty. Only one of `rgb`, `ansi` and `name` may be set.
fn resolve_color(color_definition: Option<&ColorDefinition>, fallback: Color) -> Result<Color> {
    let Some(definition) = color_definition else {
        return Ok(fallback);
    };

    match (definition.rgb, definition.ansi, definition.name.as_deref()) {
        (None, None, None) => Ok(fallback),
        (Some((r, g, b)), None, None) => Ok(Color::Rgb { r, g, b }),
        (None, Some(ansi), None) => Ok(Color::AnsiValue(ansi)),
        (None, None, Some(name)) => named_color(name),
        _ => Err(Error::MultipleColorTypes),
    }
}

/// Builds the menu style from a definition's metadata, keeping the default
/// colors for anything left out.
pub fn style_for(definition: &MenuDefinition) -> Result<MenuStyle> {
    let defaults = MenuStyle::default();

    let Some(metadata) = &definition.metadata else {
        return Ok(defaults);
    };

    Ok(MenuStyle {
        selected: resolve_color(metadata.selected_color.as_ref(), defaults.selected)?,
        unselected: resolve_color(metadata.unselected_color.as_ref(), defaults.unselected)?,
    })
}
