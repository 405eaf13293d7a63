//! `git-feat`: create a feature branch from the upstream trunk branch.

use gitship::cli::FeatCli;
use gitship::exec::ProcessEnv;
use gitship::{commands, logging};
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = FeatCli::parse_args();
    let env = ProcessEnv::capture();
    logging::init(&env, cli.verbose);

    gitship::finish(commands::cmd_feat(env, cli.branch))
}
