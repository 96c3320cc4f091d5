use clap::Parser;
use console_menu_cli::cli_args::Args;
use console_menu_cli::session;
use console_menu_core::error::Result;
use console_menu_core::menu::Menu;
use log::debug;
use std::io::stdout;
use std::process::ExitCode;

fn execute() -> Result<()> {
    let args = Args::parse();

    let definitions = session::load_definitions(&args)?;
    let definitions = session::select_definitions(definitions, args.menu_id_or_index.as_deref())?;

    let selections =
        session::run_definitions(&definitions, Menu::run, &mut stdout(), args.print_index)?;
    debug!("Selections: {:?}", selections);

    Ok(())
}

fn main() -> ExitCode {
    env_logger::init();

    match execute() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}
