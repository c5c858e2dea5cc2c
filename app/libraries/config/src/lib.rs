use app_log::LogLevel;
use dotenv::dotenv;
use log::*;
use serde::{Deserialize, Serialize};
use std::{env, fs, path::Path};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub backend_bind: String,  // 0.0.0.0:9000
    pub log_level: LogLevel,   // Debug, Info, Warn, Error, Trace
    pub pg_connection: usize,  // max pool connections
    pub artifact_path: String, // artifacts/tenure_model.json
}

impl AppConfig {
    /// Startup-only entry point: a missing or malformed config file means
    /// the service must not come up.
    pub fn new() -> Self {
        dotenv().ok();
        match env::var("APP_CONFIG") {
            Err(e) => {
                debug!("{}", &e);
                panic!(
                    "Cannot locate config file; please set APP_CONFIG env variable! {}",
                    &e
                );
            }
            Ok(config_file_path) => match Self::from_file(&config_file_path) {
                Err(e) => panic!("Cannot load config file! {}", &e),
                Ok(config) => config,
            },
        }
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, String> {
        let config_file = fs::File::open(path).map_err(|e| e.to_string())?;
        serde_json::from_reader(config_file).map_err(|e| e.to_string())
    }
}
