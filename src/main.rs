mod application;
mod domain;
mod infrastructure;
mod utils;

use std::env;

use crate::application::cli::{help, run_config, run_report, run_workspaces};
use crate::utils::version::build_version;

fn main() {
    dotenvy::dotenv().ok();

    let args: Vec<String> = env::args().collect();
    let bin = args.first().map(String::as_str).unwrap_or("weekly-report");
    let result = match args.get(1).map(String::as_str) {
        None => run_report(&[]),
        Some("report") => run_report(&args[2..]),
        Some(flag) if flag.starts_with("--") && !matches!(flag, "--help" | "--version") => {
            run_report(&args[1..])
        }
        Some("workspaces") => run_workspaces(&args[2..]),
        Some("config") => run_config(&args[2..]),
        Some("-h") | Some("--help") | Some("help") => {
            print_help(bin);
            Ok(())
        }
        Some("-V") | Some("--version") | Some("version") => {
            println!("weekly-report {}", build_version());
            Ok(())
        }
        Some(other) => {
            eprintln!("Unknown command: {other}\n");
            print_help(bin);
            std::process::exit(1);
        }
    };

    if let Err(error) = result {
        eprintln!("{error}");
        std::process::exit(1);
    }
}

fn print_help(bin: &str) {
    println!(
        "Weekly Toggl report, copied to the clipboard.\n\nCommands:\n  {bin} [report]\n  {bin} workspaces\n  {bin} config\n  {bin} version\n\n{}",
        help()
    );
}
