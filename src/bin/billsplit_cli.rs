use std::process::ExitCode;

use billsplit_core::cli;
use billsplit_core::config::ConfigManager;

fn main() -> ExitCode {
    billsplit_core::init();

    let mut args = std::env::args().skip(1);
    if let Some(flag) = args.next() {
        match flag.as_str() {
            "--version" | "-V" => {
                println!("billsplit_cli {}", env!("CARGO_PKG_VERSION"));
                return ExitCode::SUCCESS;
            }
            "--help" | "-h" => {
                print_usage();
                return ExitCode::SUCCESS;
            }
            other => {
                eprintln!("unknown option: {other}");
                print_usage();
                return ExitCode::FAILURE;
            }
        }
    }

    let config = match ConfigManager::new().and_then(|manager| manager.load()) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("failed to load configuration: {err}");
            return ExitCode::FAILURE;
        }
    };

    match cli::run_cli(config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}

fn print_usage() {
    println!("Usage: billsplit_cli [--version | --help]");
    println!();
    println!("Interactive bill-splitting wizard. The backend origin is read");
    println!("from the config file or the BILLSPLIT_BACKEND_URL variable.");
}
