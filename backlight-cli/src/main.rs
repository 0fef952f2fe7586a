mod cli;

use backlight::{git_commit, init_subscriber_with_config, version_info, version_short, Backlight};
use clap::Parser;

use cli::{Cli, Response};

fn main() {
    // 0. Parse arguments (clap prints usage and exits on malformed input)
    let cli = Cli::parse();

    if cli.version {
        println!("{}", version_info());
        return;
    }

    // 1. Initialize tracing (stderr; -v or RUST_LOG)
    init_subscriber_with_config(cli.tracing_config());
    tracing::debug!(
        version = version_short(),
        commit = git_commit().unwrap_or("unknown"),
        "Starting backlight"
    );

    // 2. Read, decide, authorize, write
    let command = cli.command();
    let backlight = Backlight::native();
    tracing::debug!(?command, path = %backlight.config().path().display(), "Running command");

    let result = backlight.run(&command);
    if let Err(e) = &result {
        tracing::debug!(error = %e, fatal = e.is_fatal(), "Command rejected");
    }

    // 3. Report
    let response = Response::from_result(result);
    response.print();
    std::process::exit(response.exit_code);
}
