//! Configuration management for the identifier validator.
//!
//! Handles:
//! - Command-line argument parsing
//! - Optional TOML configuration file
//! - Merging: defaults < config file < command line

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::category::Category;
use crate::validation::{AdvisoryKind, SplitPolicy, Validator, ValidatorOptions};

/// File name looked up under the user config directory
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Command-line arguments for the identifier validator
#[derive(Debug, Parser)]
#[command(name = "idv")]
#[command(about = "Check whether strings are legal Java identifiers")]
#[command(version)]
pub struct Args {
    /// Configuration file to load instead of the default location
    #[arg(long, help = "Path to a TOML configuration file")]
    pub config: Option<PathBuf>,

    #[arg(long, help = "Log level (trace, debug, info, warn, error)")]
    pub log_level: Option<String>,

    #[arg(long, help = "Suppress all naming-convention advisories")]
    pub no_advisories: bool,

    #[arg(long, value_enum, help = "How empty package segments are treated")]
    pub split_policy: Option<SplitPolicy>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Validate identifiers without the interactive menu
    Check {
        #[arg(value_enum)]
        category: Category,

        #[arg(required = true)]
        identifiers: Vec<String>,

        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
}

/// Output format of the `check` subcommand
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Contents of a configuration file
#[derive(Debug, Default, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    pub log_level: Option<String>,
    #[serde(default)]
    pub validation: ValidationSection,
}

#[derive(Debug, Default, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ValidationSection {
    pub split_policy: Option<SplitPolicy>,
    #[serde(default)]
    pub disabled_advisories: Vec<AdvisoryKind>,
}

impl FileConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        Self::parse(&text)
            .with_context(|| format!("Failed to parse config file {}", path.display()))
    }

    pub fn parse(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }
}

/// Combined configuration from all sources
#[derive(Debug, Clone)]
pub struct Config {
    pub log_level: String,
    pub validator_options: ValidatorOptions,
    /// Config file that was loaded, if any
    pub config_path: Option<PathBuf>,
    pub command: Option<Command>,
}

impl Config {
    /// Create configuration from command-line arguments
    pub fn from_args_and_env() -> Result<Self> {
        Self::from_args(Args::parse())
    }

    /// Create configuration from explicit arguments (useful for testing)
    pub fn from_args(args: Args) -> Result<Self> {
        let Args {
            config,
            log_level,
            no_advisories,
            split_policy,
            command,
        } = args;

        // An explicit path must exist; the default location is optional
        let config_path = match config {
            Some(path) => Some(path),
            None => default_config_path().filter(|path| path.is_file()),
        };

        let file = match &config_path {
            Some(path) => FileConfig::load(path)?,
            None => FileConfig::default(),
        };

        let overrides = ArgOverrides {
            log_level,
            no_advisories,
            split_policy,
            command,
        };
        Ok(Self::merge(overrides, file, config_path))
    }

    fn merge(args: ArgOverrides, file: FileConfig, config_path: Option<PathBuf>) -> Self {
        let split_policy = args
            .split_policy
            .or(file.validation.split_policy)
            .unwrap_or_default();

        let disabled_advisories = if args.no_advisories {
            AdvisoryKind::ALL.to_vec()
        } else {
            file.validation.disabled_advisories
        };

        Config {
            log_level: args
                .log_level
                .or(file.log_level)
                .unwrap_or_else(|| "warn".to_string()),
            validator_options: ValidatorOptions {
                split_policy,
                disabled_advisories,
            },
            config_path,
            command: args.command,
        }
    }

    /// Build the validator described by this configuration
    pub fn validator(&self) -> Validator {
        Validator::new(self.validator_options.clone())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::merge(ArgOverrides::default(), FileConfig::default(), None)
    }
}

#[derive(Debug, Default)]
struct ArgOverrides {
    log_level: Option<String>,
    no_advisories: bool,
    split_policy: Option<SplitPolicy>,
    command: Option<Command>,
}

/// `<user config dir>/idv/config.toml`
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("idv").join(CONFIG_FILE_NAME))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_file() {
        let file = FileConfig::parse(
            r#"
log_level = "debug"

[validation]
split_policy = "drop-trailing"
disabled_advisories = ["contains-underscore", "not-all-lowercase"]
"#,
        )
        .expect("parse config");

        assert_eq!(file.log_level.as_deref(), Some("debug"));
        assert_eq!(file.validation.split_policy, Some(SplitPolicy::DropTrailing));
        assert_eq!(
            file.validation.disabled_advisories,
            vec![AdvisoryKind::ContainsUnderscore, AdvisoryKind::NotAllLowercase]
        );
    }

    #[test]
    fn test_unknown_keys_are_rejected() {
        assert!(FileConfig::parse("colour = true").is_err());
        assert!(FileConfig::parse("[validation]\nsplit_policy = \"loose\"").is_err());
    }

    #[test]
    fn test_command_line_overrides_file() {
        let file = FileConfig::parse(
            "log_level = \"debug\"\n[validation]\nsplit_policy = \"drop-trailing\"",
        )
        .unwrap();
        let args = ArgOverrides {
            log_level: Some("trace".to_string()),
            no_advisories: true,
            split_policy: Some(SplitPolicy::Strict),
            command: None,
        };

        let config = Config::merge(args, file, None);
        assert_eq!(config.log_level, "trace");
        assert_eq!(config.validator_options.split_policy, SplitPolicy::Strict);
        assert_eq!(
            config.validator_options.disabled_advisories,
            AdvisoryKind::ALL.to_vec()
        );
    }

    #[test]
    fn test_from_args_with_config_file_keeps_flags() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let path = dir.path().join("idv.toml");
        std::fs::write(&path, "log_level = \"info\"\n").expect("write config");

        let args = Args::try_parse_from([
            "idv",
            "--config",
            path.to_str().unwrap(),
            "--split-policy",
            "drop-trailing",
            "check",
            "class",
            "Widget",
        ])
        .expect("parse args");
        let config = Config::from_args(args).expect("build config");

        assert_eq!(config.config_path.as_deref(), Some(path.as_path()));
        assert_eq!(config.log_level, "info");
        assert_eq!(
            config.validator_options.split_policy,
            SplitPolicy::DropTrailing
        );
        assert!(matches!(
            config.command,
            Some(Command::Check { category: Category::Class, .. })
        ));
    }

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.log_level, "warn");
        assert_eq!(config.validator_options, ValidatorOptions::default());
        assert!(config.command.is_none());
    }

    #[test]
    fn test_check_subcommand_parses() {
        let args = Args::try_parse_from([
            "idv",
            "check",
            "package",
            "com.example",
            "--format",
            "json",
        ])
        .expect("parse args");
        match args.command {
            Some(Command::Check {
                category,
                identifiers,
                format,
            }) => {
                assert_eq!(category, Category::PackageSegment);
                assert_eq!(identifiers, vec!["com.example".to_string()]);
                assert_eq!(format, OutputFormat::Json);
            }
            other => panic!("Expected check command, got {:?}", other),
        }
    }
}
