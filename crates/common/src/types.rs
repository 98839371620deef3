use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::Level;

#[derive(Debug, Clone, Copy, ValueEnum, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Network {
    #[default]
    Mainnet,
    Preprod,
    Preview,
}

impl Network {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Mainnet => "mainnet",
            Self::Preprod => "preprod",
            Self::Preview => "preview",
        }
    }

    /// Hosted API endpoint for this network, without a trailing slash.
    pub fn base_url(&self) -> String {
        format!("https://{}.gomaestro-api.org/v1", self.as_str())
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Network {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "mainnet" => Ok(Self::Mainnet),
            "preprod" => Ok(Self::Preprod),
            "preview" => Ok(Self::Preview),
            other => Err(format!("unknown network: {other}")),
        }
    }
}

#[derive(Debug, Clone, ValueEnum, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Debug,
    Info,
    Warn,
    Error,
    Trace,
}

// Implement conversion from LogLevel enum to tracing::Level
impl From<LogLevel> for Level {
    fn from(log_level: LogLevel) -> Self {
        match log_level {
            LogLevel::Debug => Level::DEBUG,
            LogLevel::Info => Level::INFO,
            LogLevel::Warn => Level::WARN,
            LogLevel::Error => Level::ERROR,
            LogLevel::Trace => Level::TRACE,
        }
    }
}

/// Chain point the indexer had reached when it served the response.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct LastUpdated {
    pub timestamp: String,
    pub block_hash: String,
    pub block_slot: u64,
}

/// Envelope of every single-item response.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct TimestampedResponse<T = serde_json::Value> {
    pub data: T,
    pub last_updated: LastUpdated,
}

/// Envelope of every list response. `next_cursor` is `None` on the last page.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct PaginatedResponse<T = serde_json::Value> {
    pub data: Vec<T>,
    pub last_updated: LastUpdated,
    #[serde(default)]
    pub next_cursor: Option<String>,
}
