//! Run settings, loadable from TOML/JSON/YAML through `sln_fs::ConfigStore`.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// How the model is rendered for inspection after loading.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DumpFormat {
    #[default]
    Text,
    Json,
    None,
}

/// Line terminator used by the native writer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LineEnding {
    #[default]
    Crlf,
    Lf,
}

impl LineEnding {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Crlf => "\r\n",
            Self::Lf => "\n",
        }
    }
}

/// Settings for one sanitizer run. Every field has a default.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SanitizerSettings {
    /// Directory project paths in an XML definition are resolved against
    pub base_dir: Option<String>,
    /// Apply canonical ordering before writing
    pub reorder: bool,
    pub dump: DumpFormat,
    pub line_ending: LineEnding,
}

impl Default for SanitizerSettings {
    fn default() -> Self {
        Self {
            base_dir: None,
            reorder: true,
            dump: DumpFormat::default(),
            line_ending: LineEnding::default(),
        }
    }
}

impl FromStr for DumpFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            "none" => Ok(Self::None),
            other => Err(format!("unknown dump format '{other}' (expected text, json or none)")),
        }
    }
}

impl fmt::Display for DumpFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Text => "text",
            Self::Json => "json",
            Self::None => "none",
        };
        f.write_str(name)
    }
}

impl FromStr for LineEnding {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "crlf" => Ok(Self::Crlf),
            "lf" => Ok(Self::Lf),
            other => Err(format!("unknown line ending '{other}' (expected crlf or lf)")),
        }
    }
}
