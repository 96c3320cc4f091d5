#[cfg(test)]
mod tests {
    use clap::Parser;
    use console_menu_cli::cli_args::Args;
    use console_menu_cli::session::{load_definitions, run_definitions, select_definitions};
    use console_menu_core::error::Error;
    use console_menu_core::menu::{Menu, MenuStyle};
    use console_menu_core::menu_definitions::{ColorDefinition, MenuDefinition, MenuMetadata};
    use crossterm::style::Color;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn output_of(buffer: Vec<u8>) -> String {
        String::from_utf8(buffer).unwrap()
    }

    #[test]
    fn test_ad_hoc_menu_definition() {
        let args = Args::parse_from(["menu", "-p", "Continue?", "-o", "Yes", "-o", "No"]);
        let definitions = load_definitions(&args).unwrap();

        assert_eq!(definitions.len(), 1);
        assert_eq!(definitions[0].prompt, "Continue?");
        assert_eq!(definitions[0].options, vec!["Yes", "No"]);
    }

    #[test]
    fn test_missing_custom_definitions_file() {
        let args = Args::parse_from(["menu", "-c", "/nonexistent/menus.yml"]);
        let result = load_definitions(&args);
        assert!(matches!(result, Err(Error::Io { .. })));
    }

    #[test]
    fn test_custom_definitions_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        write!(
            temp_file,
            r#"
- id: "main"
  prompt: "Main"
  options: ["A", "B"]
- id: "sub"
  prompt: "Sub"
  options: ["C"]
"#
        )
        .unwrap();
        let path = temp_file.path().to_str().unwrap();

        let args = Args::parse_from(["menu", "-c", path, "sub"]);
        let definitions = load_definitions(&args).unwrap();
        let selected = select_definitions(definitions, args.menu_id_or_index.as_deref()).unwrap();

        assert_eq!(selected.len(), 1);
        assert_eq!(selected[0].prompt, "Sub");
    }

    #[test]
    fn test_menus_run_in_order() {
        let definitions = vec![
            MenuDefinition::new(Some("main"), "Main", &["A", "B", "C"]),
            MenuDefinition::new(Some("sub"), "Sub", &["D", "E"]),
        ];
        let mut prompts = Vec::new();
        let mut out: Vec<u8> = Vec::new();

        // Always pick the last option
        let selections = run_definitions(
            &definitions,
            |menu: Menu| {
                prompts.push(menu.prompt().to_string());
                Ok(menu.options().len() - 1)
            },
            &mut out,
            false,
        )
        .unwrap();

        assert_eq!(selections, vec![2, 1]);
        assert_eq!(prompts, vec!["Main", "Sub"]);
        assert_eq!(
            output_of(out),
            "You have selected: C\nYou have selected: E\n"
        );
    }

    #[test]
    fn test_print_index() {
        let definitions = vec![MenuDefinition::new(None, "Main", &["A", "B"])];
        let mut out: Vec<u8> = Vec::new();

        run_definitions(&definitions, |_| Ok(1), &mut out, true).unwrap();

        assert_eq!(output_of(out), "1\n");
    }

    #[test]
    fn test_menus_start_at_first_option_with_configured_style() {
        let mut definition = MenuDefinition::new(None, "Main", &["A", "B"]);
        definition.metadata = Some(MenuMetadata {
            selected_color: Some(ColorDefinition {
                rgb: None,
                ansi: None,
                name: Some("yellow".to_string()),
            }),
            unselected_color: None,
        });
        let mut styles = Vec::new();
        let mut out: Vec<u8> = Vec::new();

        run_definitions(
            &[definition],
            |menu: Menu| {
                styles.push(menu.style());
                Ok(menu.selected_index())
            },
            &mut out,
            false,
        )
        .unwrap();

        assert_eq!(output_of(out), "You have selected: A\n");
        assert_eq!(
            styles,
            vec![MenuStyle {
                selected: Color::Yellow,
                unselected: MenuStyle::default().unselected,
            }]
        );
    }

    #[test]
    fn test_error_stops_the_chain() {
        let definitions = vec![
            MenuDefinition::new(None, "First", &["A"]),
            MenuDefinition::new(None, "Second", &["B"]),
        ];
        let mut calls = 0;
        let mut out: Vec<u8> = Vec::new();

        let result = run_definitions(
            &definitions,
            |_| {
                calls += 1;
                Err(Error::NotInteractive("stdout".to_string()))
            },
            &mut out,
            false,
        );

        assert!(matches!(result, Err(Error::NotInteractive(_))));
        assert_eq!(calls, 1);
        assert!(out.is_empty());
    }

    #[test]
    fn test_interrupt_stops_the_chain() {
        let definitions = vec![
            MenuDefinition::new(None, "First", &["A", "B"]),
            MenuDefinition::new(None, "Second", &["C"]),
        ];
        let mut results = vec![Ok(1), Err(Error::Interrupted)].into_iter();
        let mut out: Vec<u8> = Vec::new();

        let result = run_definitions(
            &definitions,
            |_| results.next().unwrap_or(Ok(0)),
            &mut out,
            false,
        );

        assert!(matches!(result, Err(Error::Interrupted)));
        assert_eq!(String::from_utf8(out).unwrap(), "You have selected: B\n");
    }
}
