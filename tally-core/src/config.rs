use anyhow::{Context, Result};
use directories::BaseDirs;
use serde::Deserialize;
use std::{
    fs,
    path::{Path, PathBuf},
};

/// Indent width assumed when no config file sets one.
const DEFAULT_TAB_WIDTH: usize = 4;
/// Icon embedded in inline duration labels unless overridden.
const DEFAULT_TIMER_LABEL: &str = "⏱️";

#[derive(Debug, Clone)]
pub struct Config {
    /// Spaces per indent level when scanning list items (a literal tab
    /// counts as one level).
    pub tab_width: usize,
    /// Icon used in inline labels, e.g. `" — ⏱️ 30 mins"`.
    pub timer_label: String,
}

#[derive(Debug, Deserialize)]
struct FileConfig {
    tab_width: Option<usize>,
    timer_label: Option<String>,
}

impl Config {
    /// Public entrypoint: load config from disk (first XDG path, then
    /// native) and apply defaults. A missing or unreadable file is not an
    /// error; defaults cover everything.
    pub fn load() -> Result<Self> {
        let file_config = Self::read_file_config().unwrap_or(FileConfig {
            tab_width: None,
            timer_label: None,
        });
        Ok(Self::from_file_config(file_config))
    }

    /// Loads config from an explicit path. Used by tests and by hosts that
    /// manage their own settings location.
    pub fn load_from(path: &Path) -> Result<Self> {
        let s = fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
        let file_config =
            Self::parse_file(&s).with_context(|| format!("parsing {}", path.display()))?;
        Ok(Self::from_file_config(file_config))
    }

    fn from_file_config(file_config: FileConfig) -> Self {
        Self {
            tab_width: file_config
                .tab_width
                .filter(|&w| w > 0)
                .unwrap_or(DEFAULT_TAB_WIDTH),
            timer_label: file_config
                .timer_label
                .unwrap_or_else(|| DEFAULT_TIMER_LABEL.to_string()),
        }
    }

    fn config_file_paths() -> Vec<PathBuf> {
        let mut v = Vec::new();
        if let Some(b) = BaseDirs::new() {
            let xdg = b
                .home_dir()
                .join(".config")
                .join("tally")
                .join("config.toml");
            v.push(xdg);
            let native = b.config_dir().join("tally").join("config.toml");
            v.push(native);
        }
        v
    }

    /// Read the first existing config file and parse it.
    fn read_file_config() -> Result<FileConfig> {
        for path in Self::config_file_paths() {
            if !path.exists() {
                continue;
            }
            let s =
                fs::read_to_string(&path).with_context(|| format!("reading {}", path.display()))?;
            return Self::parse_file(&s).with_context(|| format!("parsing {}", path.display()));
        }
        Ok(FileConfig {
            tab_width: None,
            timer_label: None,
        })
    }

    /// Parse a TOML string into `FileConfig`.
    fn parse_file(s: &str) -> Result<FileConfig> {
        Ok(toml::from_str::<FileConfig>(s)?)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            tab_width: DEFAULT_TAB_WIDTH,
            timer_label: DEFAULT_TIMER_LABEL.to_string(),
        }
    }
}
