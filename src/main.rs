//! reelcut video command builder
//!
//! Trim, resize, crop and concatenate videos by building ffmpeg command lines.
//!
//! # Usage
//!
//! ```bash
//! reelcut probe -i video.mp4
//! reelcut edit -i video.mp4 -o short.mov -e trim=10-20 -e size=400x300 -e fps=48
//! reelcut edit -i video.mp4 -e crop=0:0:200:200 -e mute --print
//! reelcut concat -o joined.mov part1.mov part2.mov
//! ```

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{error, info};

use reelcut::adapters::init_logging;
use reelcut::cli::{commands, Cli, Commands};
use reelcut::config_initialization::initialize_configuration;
use reelcut::Toolchain;

/// Main entry point for the reelcut CLI application
fn main() -> Result<()> {
    // Parse command line arguments
    let cli = Cli::parse();

    let config = initialize_configuration(&cli).context("Failed to load configuration")?;
    init_logging(&config.log_level, config.log_format).context("Failed to initialize logging")?;

    info!("Starting reelcut");
    let toolchain = Toolchain::from_config(&config);

    // Execute the requested command
    let result = match cli.command {
        Commands::Probe(args) => {
            info!("Executing probe command");
            commands::probe(args, &toolchain)
        }
        Commands::Edit(args) => {
            info!("Executing edit command");
            commands::edit(args, &toolchain)
        }
        Commands::Concat(args) => {
            info!("Executing concat command");
            commands::concat(args, &toolchain)
        }
    };

    if let Err(e) = &result {
        error!("reelcut failed: {:#}", e);
    }
    result
}
