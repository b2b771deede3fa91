use std::{path::PathBuf, str::FromStr};

use log::LevelFilter;
use reqwest::Url;

use crate::error::{Error, Result};

/// Base url of the intent API.
pub const API_URL_VAR: &str = "INTENTLINK_API_URL";
/// Optional path of the log file.
pub const LOG_FILE_VAR: &str = "INTENTLINK_LOG_FILE";
/// Optional log level, `info` when unset.
pub const LOG_LEVEL_VAR: &str = "INTENTLINK_LOG_LEVEL";

/// ## Configuration
/// This struct contains the configuration for Intentlink. It contains the following fields:
/// - `api_url`: Base url orders are submitted to
/// - `log_file`: Where to write logs. Logging stays off when `None`
/// - `log_level`: Maximum level written to the log file
#[derive(Clone, Debug)]
pub struct Configuration {
    pub api_url: Url,
    pub log_file: Option<PathBuf>,
    pub log_level: LevelFilter,
}

impl Configuration {
    /// Creates a configuration with logging disabled.
    ///
    /// ```rust
    /// use intentlink::config::Configuration;
    ///
    /// let configuration = Configuration::try_new("https://intents.example.com").unwrap();
    /// assert!(configuration.log_file.is_none());
    /// ```
    pub fn try_new(api_url: &str) -> Result<Self> {
        Ok(Configuration {
            api_url: Url::from_str(api_url)?,
            log_file: None,
            log_level: LevelFilter::Info,
        })
    }

    pub fn with_log_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.log_file = Some(path.into());
        self
    }

    pub fn with_log_level(mut self, level: LevelFilter) -> Self {
        self.log_level = level;
        self
    }

    /// Reads the configuration from the environment, loading a `.env` file
    /// first if one is present.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        let api_url = std::env::var(API_URL_VAR)
            .map_err(|_| Error::Config(format!("{} is not set", API_URL_VAR)))?;
        let mut configuration = Configuration::try_new(&api_url)?;

        if let Ok(path) = std::env::var(LOG_FILE_VAR) {
            configuration = configuration.with_log_file(path);
        }
        if let Ok(level) = std::env::var(LOG_LEVEL_VAR) {
            let level = LevelFilter::from_str(&level)
                .map_err(|_| Error::Config(format!("invalid log level: {}", level)))?;
            configuration = configuration.with_log_level(level);
        }
        Ok(configuration)
    }
}

/// Sends log output to `path`. Only the first successful call in a process
/// installs the logger; later calls leave it in place.
#[cfg(not(target_arch = "wasm32"))]
pub fn init_logger(path: &std::path::Path, level: LevelFilter) -> Result<()> {
    use log4rs::{
        append::file::FileAppender,
        config::{Appender, Root},
        encode::pattern::PatternEncoder,
        Config,
    };

    let logfile = FileAppender::builder()
        .encoder(Box::new(PatternEncoder::new("{l} - {m}\n")))
        .build(path)
        .map_err(|error| Error::Logger(error.to_string()))?;

    let config = Config::builder()
        .appender(Appender::builder().build("logfile", Box::new(logfile)))
        .build(Root::builder().appender("logfile").build(level))
        .map_err(|error| Error::Logger(error.to_string()))?;

    // Tests and embedding applications may have installed a logger already.
    if log4rs::init_config(config).is_err() {
        println!("Logger already initialized.");
    }
    Ok(())
}
