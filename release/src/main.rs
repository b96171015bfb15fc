//! lk release builder CLI entrypoint.
//!
//! This binary cross-compiles lk for every supported platform and
//! architecture, stopping at the first failed build.

use clap::Parser;
use lk_release::cli::Cli;
use lk_release::executor::SystemCommandExecutor;
use lk_release::logging;
use lk_release::pipeline::{exit_code_for_run_result, run};

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbosity);

    let mut stdout = std::io::stdout();
    let mut stderr = std::io::stderr();
    let result = run(&cli, &SystemCommandExecutor, &mut stdout);
    let exit_code = exit_code_for_run_result(&result, &mut stdout, &mut stderr);
    if exit_code != 0 {
        std::process::exit(exit_code);
    }
}
