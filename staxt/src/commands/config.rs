//! Config command implementation.
//!
//! Prints the effective configuration as TOML, or writes it to a file so it
//! can be edited.

use std::path::PathBuf;

use crate::commands::common::error_messages;
use crate::config::Config;
use crate::error::{Result, StaxtError};

/// Arguments for the config command.
#[derive(Debug, Clone, Default)]
pub struct ConfigArgs {
    /// Write to this file instead of printing.
    pub write: Option<PathBuf>,
    /// Overwrite an existing file.
    pub force: bool,
    /// Enable verbose output.
    pub verbose: bool,
}

/// Config command handler.
pub struct ConfigCommand {
    args: ConfigArgs,
    config: Config,
}

impl ConfigCommand {
    /// Create a new ConfigCommand.
    pub fn new(args: ConfigArgs, config: Config) -> Self {
        Self { args, config }
    }

    /// Execute the command.
    pub fn run(&self) -> Result<()> {
        let Some(path) = &self.args.write else {
            print!("{}", self.config.to_toml()?);
            return Ok(());
        };

        if path.exists() && !self.args.force {
            return Err(StaxtError::Validation(format!(
                "{} {}",
                error_messages::FILE_EXISTS,
                path.display()
            )));
        }

        self.config.save_to_path(path)?;

        if self.args.verbose {
            eprintln!("✅ Wrote configuration to {}", path.display());
        }

        Ok(())
    }
}

/// Run the config command with the given arguments.
pub fn run_config(args: ConfigArgs, config: Config) -> Result<()> {
    ConfigCommand::new(args, config).run()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_config_write_creates_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("staxt.toml");

        let args = ConfigArgs {
            write: Some(path.clone()),
            ..ConfigArgs::default()
        };
        run_config(args, Config::default()).unwrap();

        assert_eq!(Config::load_from_path(&path).unwrap(), Config::default());
    }

    #[test]
    fn test_config_write_refuses_overwrite() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("staxt.toml");
        std::fs::write(&path, "verbose = true\n").unwrap();

        let args = ConfigArgs {
            write: Some(path.clone()),
            ..ConfigArgs::default()
        };
        assert!(matches!(
            run_config(args, Config::default()),
            Err(StaxtError::Validation(_))
        ));
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "verbose = true\n");
    }

    #[test]
    fn test_config_write_force_overwrites() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("staxt.toml");
        std::fs::write(&path, "verbose = true\n").unwrap();

        let args = ConfigArgs {
            write: Some(path.clone()),
            force: true,
            ..ConfigArgs::default()
        };
        run_config(args, Config::default()).unwrap();
        assert!(!Config::load_from_path(&path).unwrap().verbose);
    }
}
