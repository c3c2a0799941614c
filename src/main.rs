use std::process;
use log::{debug, error, LevelFilter};

use projkit::api::ProjKit;
use projkit::commands::{build_cli, CommandFactory, ProjkitCommandFactory};
use projkit::utils::logger::Logger;

fn main() {
    let matches = build_cli().get_matches();

    let level = if matches.get_flag("verbose") { LevelFilter::Debug } else { LevelFilter::Warn };

    if let Some(log_file) = matches.get_one::<String>("log-file") {
        if let Err(e) = Logger::init_global_logger(log_file, level) {
            eprintln!("Error setting up global logger: {}", e);
            process::exit(1);
        }
    } else {
        env_logger::Builder::new()
            .filter_level(level)
            .parse_default_env()
            .init();
    }

    let kit = match matches.get_one::<String>("registry") {
        Some(path) => match ProjKit::with_registry_file(path) {
            Ok(kit) => kit,
            Err(e) => {
                error!("Failed to load registry {}: {}", path, e);
                eprintln!("Error: {}", e);
                process::exit(1);
            }
        },
        None => ProjKit::new(),
    };
    debug!("CRS registry holds {} definitions", kit.engine().registry().len());

    let factory = ProjkitCommandFactory::new();

    match factory.create_command(&matches, &kit) {
        Ok(command) => {
            if let Err(e) = command.execute() {
                error!("Command execution error: {}", e);
                eprintln!("Error: {}", e);
                process::exit(1);
            }
        },
        Err(e) => {
            error!("Failed to create command: {}", e);
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };
}
