use super::args::{Cli, Command};
use crate::exit_codes;

pub mod normalize;
pub mod pair;
pub mod run;

pub async fn dispatch(cli: Cli) -> anyhow::Result<i32> {
    match cli.cmd {
        Command::Run(args) => run::run(args, cli.verbose).await,
        Command::Pair(args) => pair::run(args),
        Command::Normalize(args) => Ok(normalize::run(args)),
        Command::Version => {
            println!("{}", env!("CARGO_PKG_VERSION"));
            Ok(exit_codes::OK)
        }
    }
}
