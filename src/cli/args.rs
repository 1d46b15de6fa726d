//! CLI argument definitions using clap derive

use crate::cache::CachePurpose;
use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// lic - cache layout and tool paths for LIC instruction books
///
/// Resolves the per-model cache directories used when rendering
/// instruction books and manages the LDraw, L3P and POV-Ray locations.
#[derive(Parser, Debug)]
#[command(name = "lic")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity (-v info, -vv debug)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    /// Configuration file path
    #[arg(short, long, global = true, env = "LIC_CONFIG")]
    pub config: Option<PathBuf>,

    /// Application data directory holding the cache tree
    #[arg(long, global = true, env = "LIC_DATA_DIR")]
    pub data_dir: Option<PathBuf>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Resolve and list cache directories
    Cache(CacheArgs),

    /// Show, check or change tool paths
    Tools(ToolsArgs),

    /// Show or edit configuration
    Config(ConfigArgs),
}

/// Arguments for the cache command
#[derive(Parser, Debug)]
pub struct CacheArgs {
    /// Subcommand for cache
    #[command(subcommand)]
    pub action: CacheAction,
}

/// Cache subcommands
#[derive(Subcommand, Debug)]
pub enum CacheAction {
    /// Print a cache directory, creating it if needed
    Path {
        /// `root`, `model`, or a purpose tag (PNGs, POVs, DATs, PDFs,
        /// Final_Images, GL_Images, parts, templates)
        #[arg(value_parser = parse_cache_target)]
        target: CacheTarget,

        /// Model file whose cache to use
        #[arg(short, long)]
        model: Option<PathBuf>,
    },

    /// Create every cache directory for a model
    Init {
        /// Model file
        #[arg(short, long)]
        model: PathBuf,
    },

    /// List model cache directories
    List {
        /// Output format
        #[arg(short, long, default_value = "table")]
        format: OutputFormat,
    },
}

/// What `cache path` resolves
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CacheTarget {
    Root,
    Model,
    Purpose(CachePurpose),
}

/// Arguments for the tools command
#[derive(Parser, Debug)]
pub struct ToolsArgs {
    /// Subcommand for tools
    #[command(subcommand)]
    pub action: Option<ToolsAction>,
}

/// Tools subcommands
#[derive(Subcommand, Debug)]
pub enum ToolsAction {
    /// Show configured paths and whether they are valid
    Show {
        /// Output format
        #[arg(short, long, default_value = "table")]
        format: OutputFormat,
    },

    /// Exit with failure if any configured path is invalid
    Check,

    /// Change tool paths; nothing is saved unless every path is valid
    Set {
        /// LDraw library directory
        #[arg(long)]
        ldraw: Option<PathBuf>,

        /// L3P executable
        #[arg(long)]
        l3p: Option<PathBuf>,

        /// POV-Ray executable
        #[arg(long)]
        povray: Option<PathBuf>,
    },
}

/// Arguments for the config command
#[derive(Parser, Debug)]
pub struct ConfigArgs {
    /// Subcommand for config
    #[command(subcommand)]
    pub action: Option<ConfigAction>,
}

/// Config subcommands
#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Show current configuration
    Show,

    /// Show configuration file path
    Path,

    /// Initialize default configuration
    Init {
        /// Overwrite existing configuration
        #[arg(short, long)]
        force: bool,
    },

    /// Set a configuration value
    Set {
        /// Configuration key (e.g., render.l3p_access_log)
        key: String,
        /// Value to set
        value: String,
    },
}

/// Output format for listings
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable table
    Table,
    /// JSON output
    Json,
    /// Simple text (one per line)
    Plain,
}

fn parse_cache_target(s: &str) -> Result<CacheTarget, String> {
    match s.to_ascii_lowercase().as_str() {
        "root" => Ok(CacheTarget::Root),
        "model" => Ok(CacheTarget::Model),
        _ => s
            .parse::<CachePurpose>()
            .map(CacheTarget::Purpose)
            .map_err(|e| e.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_targets() {
        assert_eq!(parse_cache_target("root").unwrap(), CacheTarget::Root);
        assert_eq!(parse_cache_target("Model").unwrap(), CacheTarget::Model);
        assert_eq!(
            parse_cache_target("POVs").unwrap(),
            CacheTarget::Purpose(CachePurpose::Povs)
        );
        assert!(parse_cache_target("nope")
            .unwrap_err()
            .contains("Unknown cache purpose"));
    }

    #[test]
    fn cli_parses_cache_path() {
        let cli = Cli::parse_from(["lic", "cache", "path", "parts", "--model", "car.mpd"]);
        match cli.command {
            Commands::Cache(CacheArgs {
                action: CacheAction::Path { target, model },
            }) => {
                assert_eq!(target, CacheTarget::Purpose(CachePurpose::Parts));
                assert_eq!(model, Some(PathBuf::from("car.mpd")));
            }
            _ => panic!("expected cache path command"),
        }
    }

    #[test]
    fn cli_parses_tools_set() {
        let cli = Cli::parse_from(["lic", "tools", "set", "--ldraw", "/ldraw"]);
        match cli.command {
            Commands::Tools(ToolsArgs {
                action: Some(ToolsAction::Set { ldraw, l3p, povray }),
            }) => {
                assert_eq!(ldraw, Some(PathBuf::from("/ldraw")));
                assert!(l3p.is_none());
                assert!(povray.is_none());
            }
            _ => panic!("expected tools set command"),
        }
    }

    #[test]
    fn cli_global_data_dir() {
        let cli = Cli::parse_from(["lic", "cache", "list", "--data-dir", "/tmp/lic"]);
        assert_eq!(cli.data_dir, Some(PathBuf::from("/tmp/lic")));
    }

    #[test]
    fn cli_verbose_levels() {
        let cli = Cli::parse_from(["lic", "-vv", "tools"]);
        assert_eq!(cli.verbose, 2);
    }
}
