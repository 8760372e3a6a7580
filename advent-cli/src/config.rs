//! Configuration resolution from the config file and environment

use crate::error::CliError;
use advent_http_client::{AdventClient, EmphasisStyle};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use zeroize::Zeroizing;

pub const SESSION_ENV: &str = "ADVENT_SESSION_COOKIE";
pub const PRIVATE_BOARDS_ENV: &str = "ADVENT_PRIV_BOARDS";
pub const DISABLE_COLOR_ENV: &str = "ADVENT_DISABLE_TERMCOLOR";
pub const EMPHASIS_ENV: &str = "ADVENT_MARKDOWN_EM";

/// Contents of `config.toml`; every key is optional
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    pub session_cookie: Option<String>,
    pub private_leaderboards: Vec<String>,
    pub disable_color: Option<bool>,
}

/// Resolved runtime configuration
pub struct Config {
    /// Session cookie, empty when not configured (zeroized on drop)
    pub session: Zeroizing<String>,
    /// Private leaderboard ids to show with `stats --private`
    pub private_leaderboards: Vec<String>,
    pub disable_color: bool,
    /// How emphasis in code blocks is written to `prompt.md`
    pub emphasis: EmphasisStyle,
    /// Directory holding the `{year}/{day}` puzzle tree
    pub root: PathBuf,
}

impl Config {
    /// Load the config file (if any) and apply environment overrides
    pub fn load(root: PathBuf) -> Result<Self, CliError> {
        let file = match config_path() {
            Some(path) if path.exists() => read_file_config(&path)?,
            _ => FileConfig::default(),
        };
        Ok(Self::resolve(file, |key| std::env::var(key).ok(), root))
    }

    /// Merge file settings with environment lookups; the environment wins
    pub fn resolve(
        file: FileConfig,
        env: impl Fn(&str) -> Option<String>,
        root: PathBuf,
    ) -> Self {
        let session = env(SESSION_ENV)
            .or(file.session_cookie)
            .map(|s| s.trim().to_string())
            .unwrap_or_default();

        let private_leaderboards = match env(PRIVATE_BOARDS_ENV) {
            Some(boards) => boards
                .split(',')
                .map(str::trim)
                .filter(|id| !id.is_empty())
                .map(str::to_string)
                .collect(),
            None => file.private_leaderboards,
        };

        let disable_color = match env(DISABLE_COLOR_ENV) {
            Some(value) => is_truthy(&value),
            None => file.disable_color.unwrap_or(false),
        };

        let emphasis = env(EMPHASIS_ENV)
            .map(|name| EmphasisStyle::from_name(&name))
            .unwrap_or_default();

        Config {
            session: Zeroizing::new(session),
            private_leaderboards,
            disable_color,
            emphasis,
            root,
        }
    }

    /// Directory of one puzzle under the root
    pub fn puzzle_dir(&self, coordinate: advent_runner::PuzzleCoordinate) -> PathBuf {
        self.root.join(coordinate.dir())
    }

    /// Build an authenticated client, prompting for the session if none is configured
    pub fn client(&mut self) -> Result<AdventClient, CliError> {
        if self.session.is_empty() {
            self.session = prompt_session(&format!(
                "No session cookie configured (set {SESSION_ENV} or session_cookie in {}).",
                config_path()
                    .map(|p| p.display().to_string())
                    .unwrap_or_else(|| "config.toml".to_string())
            ))?;
        }
        Ok(AdventClient::builder()
            .session(self.session.as_str())
            .build()?)
    }
}

/// `$CONFIG_DIR/advent/config.toml`
pub fn config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("advent").join("config.toml"))
}

fn read_file_config(path: &Path) -> Result<FileConfig, CliError> {
    tracing::debug!(path = %path.display(), "reading config file");
    let content = Zeroizing::new(std::fs::read_to_string(path)?);
    toml::from_str(&content).map_err(|source| CliError::ConfigFile {
        path: path.to_path_buf(),
        source,
    })
}

fn is_truthy(value: &str) -> bool {
    matches!(value.trim().to_ascii_lowercase().as_str(), "1" | "true")
}

/// Prompt user for the session cookie
pub fn prompt_session(reason: &str) -> Result<Zeroizing<String>, CliError> {
    println!("{}", reason);
    let s = Zeroizing::new(
        rpassword::prompt_password("Enter session cookie: ")
            .map_err(|e| CliError::Config(format!("Failed to read session: {}", e)))?,
    );
    if s.trim().is_empty() {
        return Err(CliError::Config("Session cookie is required.".to_string()));
    }
    Ok(Zeroizing::new(s.trim().to_string()))
}
