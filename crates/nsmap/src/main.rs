//! nsmap CLI
//!
//! Resolves namespaced identifiers against `--map` registrations.

use nsmap::args::{parse_args, Command};
use nsmap::commands::{print_usage, run_candidates, run_resolve};

fn main() {
    nsmap::init_tracing();

    let args: Vec<String> = std::env::args().skip(1).collect();

    let command = match parse_args(&args) {
        Ok(command) => command,
        Err(e) => {
            eprintln!("error: {e}");
            eprintln!();
            print_usage();
            std::process::exit(2);
        }
    };

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    let result = match command {
        Command::Help => {
            print_usage();
            return;
        }
        Command::Resolve(options) => run_resolve(&options, &mut out),
        Command::Candidates(options) => run_candidates(&options, &mut out),
    };

    match result {
        Ok(true) => {}
        Ok(false) => std::process::exit(1),
        Err(e) => {
            eprintln!("error: {e}");
            std::process::exit(1);
        }
    }
}
