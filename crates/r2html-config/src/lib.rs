use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file at {config_path}: {source}")]
    ConfigReadError {
        config_path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {config_path}: {source}")]
    ConfigParseError {
        config_path: PathBuf,
        source: toml::de::Error,
    },
}

/// Default length of the random hex tag used in temporary file names.
pub const DEFAULT_TAG_LENGTH: usize = 6;

/// The extra CSS is inserted right after the first occurrence of this
/// pattern in the knitted html.
const DEFAULT_INSERT_AFTER_PATTERN: &str = "

   h2, h3 {
      page-break-after: avoid;
   }
}
</style>
";

/// Floating table of contents, cf. http://rpubs.com/stevepowell99/floating-css
const DEFAULT_EXTRA_CSS: &str = r##"

<style type="text/css">
#toc {
  position: fixed;
  left: 0;
  top: 0;
  width: 300px;
  height: 100%;
  overflow:auto;
  padding-left: 10px;
  padding-top: 5px;
  background: #111111;
  color: #888888;
}

#toc-header {
  text-align: center;
}

#toc a {
  color: #888888;
  text-decoration: none;
}

#toc ul {
  color: #888888;
  margin-left: 0px;
  padding-left: 7px;
  list-style-type: disc;
}

#toc ul a {
  text-decoration: underline;
  color: #BAE4BC;
}

#toc ul ul a {
  text-decoration: none;
  color: #7BCCC4;
}

#toc ul ul ul a {
  color: #43A2CA;
}

#toc ul ul ul ul a {
  color: #0868AC;
}

#toc ul ul ul ul ul a {
  color: #F0F9E8;
}

body {
	margin-left: 310px;
}

table {
  margin: auto;
    border-collapse: collapse;
}

th,td {
  padding-left: 10px;
  padding-right: 10px;
  text-align: center;
}

thead {

  border-bottom: 1pt solid black;
}


</style>

"##;

/// Knobs for the conversion driver.
///
/// Defaults reproduce the stock styling; a config file only needs to
/// override the fields it changes.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Length of the random hex tag appended to temporary file names.
    pub tag_length: usize,
    /// Pattern after which the extra CSS is inserted into the html output.
    pub insert_after_pattern: String,
    /// Stylesheet block inserted into the html output.
    pub extra_css: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            tag_length: DEFAULT_TAG_LENGTH,
            insert_after_pattern: DEFAULT_INSERT_AFTER_PATTERN.to_string(),
            extra_css: DEFAULT_EXTRA_CSS.to_string(),
        }
    }
}

impl Config {
    pub fn load_from_path<P: AsRef<Path>>(config_path: P) -> Result<Option<Self>, ConfigError> {
        let config_path = config_path.as_ref();
        if !config_path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(config_path).map_err(|source| {
            ConfigError::ConfigReadError {
                config_path: config_path.to_path_buf(),
                source,
            }
        })?;

        let config: Config =
            toml::from_str(&content).map_err(|source| ConfigError::ConfigParseError {
                config_path: config_path.to_path_buf(),
                source,
            })?;

        Ok(Some(config))
    }

    pub fn load() -> Result<Option<Self>, ConfigError> {
        let config_path = Self::config_path();
        Self::load_from_path(&config_path)
    }

    pub fn config_path() -> PathBuf {
        let config_dir = shellexpand::tilde("~/.config/r2html");
        PathBuf::from(config_dir.as_ref()).join("config.toml")
    }
}
