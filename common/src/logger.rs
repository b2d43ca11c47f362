use std::sync::OnceLock;
use chrono::{DateTime, Local};

static LOGGER: OnceLock<Logger> = OnceLock::new();

pub struct Logger {
    prefix: Option<String>,
}

impl Logger {
    fn new(prefix: Option<String>) -> Self {
        Self { prefix }
    }

    fn format_line(&self, timestamp: DateTime<Local>, message: &str) -> String {
        let timestamp = timestamp.format("%Y-%m-%d %H:%M:%S%.3f");
        match self.prefix.as_deref() {
            Some(prefix) => format!("[{}][{}] {}", timestamp, prefix, message),
            None => format!("[{}] {}", timestamp, message),
        }
    }

    pub fn log(&self, message: &str) {
        println!("{}", self.format_line(Local::now(), message));
    }
}

/// Installs the process-wide logger. Only the first call has an effect.
pub fn init_logger(prefix: Option<String>) {
    LOGGER.get_or_init(|| Logger::new(prefix));
}

pub fn log(message: &str) {
    // Library code (and its tests) may log before the binary installs a logger.
    LOGGER.get_or_init(|| Logger::new(None)).log(message);
}

#[macro_export]
macro_rules! log {
    ($($arg:tt)*) => {
        $crate::logger::log(&format!($($arg)*))
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_format_line_with_prefix() {
        let logger = Logger::new(Some("Client".to_string()));
        let timestamp = Local.with_ymd_and_hms(2024, 3, 1, 12, 30, 5).unwrap();

        let line = logger.format_line(timestamp, "round over");

        assert_eq!(line, "[2024-03-01 12:30:05.000][Client] round over");
    }

    #[test]
    fn test_format_line_without_prefix() {
        let logger = Logger::new(None);
        let timestamp = Local.with_ymd_and_hms(2024, 3, 1, 12, 30, 5).unwrap();

        let line = logger.format_line(timestamp, "hello");

        assert_eq!(line, "[2024-03-01 12:30:05.000] hello");
    }
}
