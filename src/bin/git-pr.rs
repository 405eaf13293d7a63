//! `git-pr`: publish the current branch as a pull request.

use gitship::cli::PrCli;
use gitship::exec::ProcessEnv;
use gitship::{commands, logging};
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = PrCli::parse_args();
    let env = ProcessEnv::capture();
    logging::init(&env, cli.verbose);

    gitship::finish(commands::cmd_pr(env))
}
