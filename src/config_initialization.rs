//! Configuration initialization and hierarchy management

use crate::adapters::toml_config::{LogFormat, ReelConfig, TomlConfigAdapter};
use crate::cli::Cli;
use crate::error::ReelResult;

/// Build the effective configuration. Precedence: CLI > Env > File > Defaults.
///
/// Environment variables reach us through clap's `env` attributes, so they
/// already sit in the CLI values with lower priority than explicit flags.
pub fn initialize_configuration(cli: &Cli) -> ReelResult<ReelConfig> {
    let mut config = load_config_file(cli)?;
    apply_cli_overrides(&mut config, cli)?;
    TomlConfigAdapter::validate(&config)?;
    Ok(config)
}

/// An explicit `--config` must exist; the default file is optional
fn load_config_file(cli: &Cli) -> ReelResult<ReelConfig> {
    if let Some(path) = &cli.config {
        return TomlConfigAdapter::load(path);
    }

    let default_path = TomlConfigAdapter::default_config_path();
    if default_path.exists() {
        return TomlConfigAdapter::load(&default_path);
    }
    Ok(ReelConfig::default())
}

fn apply_cli_overrides(config: &mut ReelConfig, cli: &Cli) -> ReelResult<()> {
    if let Some(ffmpeg) = &cli.ffmpeg {
        config.ffmpeg = ffmpeg.clone();
    }
    if let Some(ffprobe) = &cli.ffprobe {
        config.ffprobe = ffprobe.clone();
    }
    if let Some(fps) = cli.default_fps {
        config.default_frame_rate = fps;
    }
    if let Some(level) = &cli.log_level {
        config.log_level = level.clone();
    }
    if let Some(format) = &cli.log_format {
        config.log_format = LogFormat::parse(format)?;
    }
    Ok(())
}
