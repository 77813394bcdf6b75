//! CLI command implementations
//!
//! Each subcommand has its own module with:
//! - Args struct for command-line arguments
//! - `run()` function to execute the command

use crate::app::AppContext;
use crate::cli::Commands;
use crate::error::Result;

pub mod downgrade;
pub mod migrate;
pub mod verify;

pub fn run(ctx: &AppContext, command: &Commands) -> Result<()> {
    match command {
        Commands::Migrate(args) => migrate::run(ctx, args),
        Commands::Verify(args) => verify::run(ctx, args),
        Commands::Downgrade(args) => downgrade::run(ctx, args),
    }
}
