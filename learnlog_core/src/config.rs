use log::{debug, info};
use serde::{Deserialize, Serialize};
use snafu::{ResultExt, Snafu};
use std::{
    fs::{self, File},
    path::{Path, PathBuf},
};

#[derive(Snafu, Debug)]
pub enum Error {
    #[snafu(display("malformed config: {source}"))]
    Json { source: serde_json::Error },

    #[snafu(display("config file: {source}"))]
    Io { source: std::io::Error },

    #[snafu(display("config has no file to be saved to"))]
    PathNotSet,
}
type Result<T> = std::result::Result<T, Error>;

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    #[serde(skip)]
    config_path: Option<PathBuf>,

    pub log_level: String,
    /// Empty means console only.
    pub log_file: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            config_path: None,
            log_level: "info".to_string(),
            log_file: "".to_string(),
        }
    }
}

impl Config {
    /// `$HOME/.learnlog/config.json`
    pub fn default_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_default()
            .join(".learnlog")
            .join("config.json")
    }

    /// Load the config at `path`, starting from the defaults if the file
    /// does not exist yet. The result is written back so that keys missing
    /// from the file show up with their defaults.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Config> {
        let path = path.as_ref();
        let mut config: Config = if path.exists() {
            let file = File::open(path).context(IoSnafu)?;
            serde_json::from_reader(file).context(JsonSnafu)?
        } else {
            info!("no config at {}, writing defaults", path.display());
            Config::default()
        };
        config.config_path = Some(path.to_owned());
        config.save()?;

        debug!(
            "config {}: log_level {}, log_file {}",
            path.display(),
            config.log_level,
            if config.log_file.is_empty() {
                "(console only)"
            } else {
                config.log_file.as_str()
            }
        );
        Ok(config)
    }

    pub fn save(&self) -> Result<()> {
        let path = self.path().ok_or_else(|| PathNotSetSnafu.build())?;
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir).context(IoSnafu)?;
        }
        let json = serde_json::to_string_pretty(self).context(JsonSnafu)?;
        fs::write(path, json).context(IoSnafu)
    }

    pub fn path(&self) -> Option<&Path> {
        self.config_path.as_deref()
    }
}
