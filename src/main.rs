//! `dirpicker` command line entry point.
//!
//! Shows the picker on stderr and prints the chosen absolute path to stdout,
//! so the binary composes with shell substitution:
//!
//! ```text
//! cd "$(dirpicker ~/code)"
//! ```
//!
//! # Exit Codes
//!
//! - `0`: a path was printed
//! - `1`: configuration or terminal error
//! - `130`: the user aborted with `Ctrl+c`

use anyhow::{Context, Result};
use clap::Parser;
use dirpicker::{ChoiceLayout, Config, MatchStrategy};
use std::path::PathBuf;

const ABORT_EXIT_CODE: i32 = 130;

#[derive(Debug, Parser)]
#[command(name = "dirpicker", version)]
#[command(about = "Interactively pick a directory (or file) and print its absolute path")]
struct Args {
    /// Directory to start from. Defaults to the current directory.
    base_path: Option<PathBuf>,

    /// TOML configuration file. Command line flags take precedence.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// List regular files as well as directories.
    #[arg(short = 'f', long)]
    include_files: bool,

    /// Only accept a file as the answer. Implies --include-files.
    #[arg(long)]
    only_one_file: bool,

    /// Allow going back above the base directory.
    #[arg(long = "allow-above-base")]
    allow_navigation_above_base_dir: bool,

    /// Number of visible list rows.
    #[arg(long, value_parser = clap::value_parser!(u16).range(1..))]
    page_size: Option<u16>,

    /// Show "choose this directory" and "go back" entries in the list.
    #[arg(long)]
    guided: bool,

    /// Use fuzzy matching for search instead of prefix matching.
    #[arg(long)]
    fuzzy: bool,

    /// Question shown above the list.
    #[arg(short, long)]
    message: Option<String>,

    /// Built-in theme (catppuccin-mocha, catppuccin-latte).
    #[arg(long)]
    theme: Option<String>,

    /// Custom theme file.
    #[arg(long)]
    theme_file: Option<PathBuf>,

    /// Trace filter written to the trace file, e.g. "debug".
    #[arg(long)]
    trace_level: Option<String>,
}

impl Args {
    /// Layers the flags over `config`.
    fn apply(self, mut config: Config) -> Config {
        if let Some(path) = self.base_path {
            config.base_path = Some(path);
        }
        if config.base_path.is_none() {
            config.base_path = Some(PathBuf::from("."));
        }
        config.include_files |= self.include_files || self.only_one_file;
        config.only_one_file |= self.only_one_file;
        config.allow_navigation_above_base_dir |= self.allow_navigation_above_base_dir;
        if let Some(size) = self.page_size {
            config.page_size = usize::from(size);
        }
        if self.guided {
            config.layout = ChoiceLayout::Guided;
        }
        if self.fuzzy {
            config.search_strategy = MatchStrategy::Fuzzy;
        }
        if let Some(message) = self.message {
            config.message = message;
        }
        if self.theme.is_some() {
            config.theme_name = self.theme;
        }
        if self.theme_file.is_some() {
            config.theme_file = self.theme_file;
        }
        if self.trace_level.is_some() {
            config.trace_level = self.trace_level;
        }
        config
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    let base = match &args.config {
        Some(path) => Config::from_file(path)
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => Config::default(),
    };
    let config = args.apply(base);

    dirpicker::observability::init_tracing(&config);
    tracing::info!(base_path = ?config.base_path, "starting dirpicker");

    let answer = dirpicker::prompt(&config).context("running picker")?;

    match answer {
        Some(path) => {
            println!("{}", path.display());
            Ok(())
        }
        None => {
            tracing::info!("aborted");
            std::process::exit(ABORT_EXIT_CODE);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_override_config() {
        let args = Args::parse_from([
            "dirpicker",
            "/srv",
            "--only-one-file",
            "--page-size",
            "3",
            "--guided",
            "--fuzzy",
        ]);
        let config = args.apply(Config::default());

        assert_eq!(config.base_path, Some(PathBuf::from("/srv")));
        assert!(config.include_files);
        assert!(config.only_one_file);
        assert_eq!(config.page_size, 3);
        assert_eq!(config.layout, ChoiceLayout::Guided);
        assert_eq!(config.search_strategy, MatchStrategy::Fuzzy);
    }

    #[test]
    fn base_path_defaults_to_working_directory() {
        let config = Args::parse_from(["dirpicker"]).apply(Config::default());
        assert_eq!(config.base_path, Some(PathBuf::from(".")));
    }

    #[test]
    fn config_file_base_path_survives_without_positional() {
        let file = Config {
            base_path: Some(PathBuf::from("/opt")),
            ..Default::default()
        };
        let config = Args::parse_from(["dirpicker", "--theme", "catppuccin-latte"]).apply(file);
        assert_eq!(config.base_path, Some(PathBuf::from("/opt")));
        assert_eq!(config.theme_name.as_deref(), Some("catppuccin-latte"));
    }

    #[test]
    fn zero_page_size_is_rejected() {
        assert!(Args::try_parse_from(["dirpicker", "--page-size", "0"]).is_err());
    }
}
