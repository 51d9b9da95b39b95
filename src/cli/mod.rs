mod handlers;
pub mod parse;
pub mod rc;

use clap::Parser;
pub use parse::Cli;

use crate::core::error::CalError;

pub fn run() -> Result<(), CalError> {
    let cli = parse::Cli::parse();
    if cli.list_colors {
        handlers::colors();
        return Ok(());
    }
    handlers::calendar(&cli)
}
