mod cli;
mod commands;
mod logging;

use cli::{CompileParams, ModulesParams, build_cli};

fn main() {
    let matches = build_cli().get_matches();

    match matches.subcommand() {
        Some(("compile", m)) => {
            let params = CompileParams::from_matches(m);
            logging::init(params.verbose);
            commands::compile::run(params.into());
        }
        Some(("modules", m)) => {
            let params = ModulesParams::from_matches(m);
            logging::init(params.verbose);
            commands::modules::run(params.into());
        }
        _ => unreachable!("clap should have caught this"),
    }
}
