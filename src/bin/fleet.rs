use std::env;
use std::mem;
use std::path::PathBuf;
use std::process::ExitCode;

use colored::Colorize;
use inline_erasure::{Fleet, FleetConfig, FleetError, Vehicle};

fn run() -> Result<(), FleetError> {
    let config = match env::args_os().nth(1).map(PathBuf::from) {
        Some(path) => FleetConfig::load(&path)?,
        None => FleetConfig::default(),
    };

    println!(
        "{} {}",
        "size of Vehicle container :".bold(),
        mem::size_of::<Vehicle>()
    );

    let fleet = Fleet::from_config(&config);
    for change in fleet.accelerate_all(config.throttle) {
        println!("{change}");
    }

    Ok(())
}

/// One-line, user-facing description of a failure.
fn describe(err: &FleetError) -> String {
    format!("error: {err}")
}

fn main() -> ExitCode {
    env_logger::init();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{}", describe(&err).red());
            ExitCode::FAILURE
        }
    }
}
