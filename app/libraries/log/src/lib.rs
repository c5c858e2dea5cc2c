use serde::{Deserialize, Serialize};
use tracing_subscriber::filter::LevelFilter;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum LogLevel {
    Off,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<&LogLevel> for LevelFilter {
    fn from(level: &LogLevel) -> Self {
        match level {
            LogLevel::Off => LevelFilter::OFF,
            LogLevel::Error => LevelFilter::ERROR,
            LogLevel::Warn => LevelFilter::WARN,
            LogLevel::Info => LevelFilter::INFO,
            LogLevel::Debug => LevelFilter::DEBUG,
            LogLevel::Trace => LevelFilter::TRACE,
        }
    }
}

pub fn init_tracing(level: &LogLevel) {
    tracing_subscriber::fmt()
        .with_target(false)
        .with_max_level(LevelFilter::from(level))
        .init();
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn check_level_mapping() {
        assert_eq!(LevelFilter::from(&LogLevel::Off), LevelFilter::OFF);
        assert_eq!(LevelFilter::from(&LogLevel::Warn), LevelFilter::WARN);
        assert_eq!(LevelFilter::from(&LogLevel::Trace), LevelFilter::TRACE);
    }
}
