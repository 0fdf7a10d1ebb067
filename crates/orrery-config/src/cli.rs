//! Command-line argument parsing.

use std::path::PathBuf;

use clap::Parser;

use crate::Config;

/// Orrery viewer command-line arguments.
///
/// CLI values override settings loaded from `config.ron`.
#[derive(Parser, Debug)]
#[command(name = "orrery", about = "Animated planet scene viewer")]
pub struct CliArgs {
    /// Window width.
    #[arg(long)]
    pub width: Option<u32>,

    /// Window height.
    #[arg(long)]
    pub height: Option<u32>,

    /// Directory holding scene image assets.
    #[arg(long)]
    pub asset_dir: Option<PathBuf>,

    /// Star field placement seed.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Log level (error, warn, info, debug, trace).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Path to config directory (overrides default location).
    #[arg(long)]
    pub config: Option<PathBuf>,
}

impl Config {
    /// Apply CLI overrides to a loaded config.
    pub fn apply_cli_overrides(&mut self, args: &CliArgs) {
        if let Some(w) = args.width {
            self.window.width = w;
        }
        if let Some(h) = args.height {
            self.window.height = h;
        }
        if let Some(ref dir) = args.asset_dir {
            self.scene.asset_dir = dir.clone();
        }
        if let Some(seed) = args.seed {
            self.scene.star_seed = seed;
        }
        if let Some(ref level) = args.log_level {
            self.debug.log_level = level.clone();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_override() {
        let mut config = Config::default();
        let args = CliArgs {
            width: Some(1920),
            height: None,
            asset_dir: Some(PathBuf::from("/tmp/orrery-assets")),
            seed: Some(99),
            log_level: None,
            config: None,
        };
        config.apply_cli_overrides(&args);

        assert_eq!(config.window.width, 1920);
        assert_eq!(config.window.height, 720, "unset args leave config alone");
        assert_eq!(config.scene.asset_dir, PathBuf::from("/tmp/orrery-assets"));
        assert_eq!(config.scene.star_seed, 99);
    }

    #[test]
    fn test_no_overrides_is_noop() {
        let mut config = Config::default();
        let args = CliArgs {
            width: None,
            height: None,
            asset_dir: None,
            seed: None,
            log_level: None,
            config: None,
        };
        config.apply_cli_overrides(&args);
        assert_eq!(config, Config::default());
    }
}
