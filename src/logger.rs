use std::fs::OpenOptions;
use std::io::Write;
use std::sync::{Arc, Mutex};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    Debug = 0,
    Info = 1,
    Warning = 2,
    Error = 3,
}

impl LogLevel {
    fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Debug => "DEBUG",
            LogLevel::Info => "INFO",
            LogLevel::Warning => "WARNING",
            LogLevel::Error => "ERROR",
        }
    }
}

type SharedWriter = Arc<Mutex<Box<dyn Write + Send>>>;

/// Levelled diagnostics for a coffee machine session.
///
/// Stdout belongs to the prompt/answer protocol, so console output
/// always goes to stderr.
pub struct Logger {
    min_level: LogLevel,
    sink: Option<SharedWriter>,
    console_output: bool,
}

impl Logger {
    /// Creates a new logger writing to stderr only
    pub fn new(min_level: LogLevel) -> Self {
        Logger {
            min_level,
            sink: None,
            console_output: true,
        }
    }

    /// Creates a logger that also appends every line to `file_path`
    pub fn with_file(min_level: LogLevel, file_path: &str) -> std::io::Result<Self> {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(file_path)?;

        Ok(Self::with_writer(min_level, file))
    }

    /// Creates a logger that also copies every line into `writer`
    pub fn with_writer(min_level: LogLevel, writer: impl Write + Send + 'static) -> Self {
        Logger {
            min_level,
            sink: Some(Arc::new(Mutex::new(Box::new(writer)))),
            console_output: true,
        }
    }

    pub fn set_console_output(&mut self, enabled: bool) {
        self.console_output = enabled;
    }

    pub fn set_min_level(&mut self, level: LogLevel) {
        self.min_level = level;
    }

    pub fn enabled(&self, level: LogLevel) -> bool {
        level >= self.min_level
    }

    fn log(&self, level: LogLevel, message: &str) {
        if !self.enabled(level) {
            return;
        }

        let timestamp = chrono::Local::now().format("%Y-%m-%d %H:%M:%S%.3f");
        let formatted = format!("[{}] [{}] {}", timestamp, level.as_str(), message);

        if self.console_output {
            eprintln!("{}", formatted);
        }

        if let Some(sink) = &self.sink {
            if let Ok(mut w) = sink.lock() {
                let _ = writeln!(w, "{}", formatted);
            }
        }
    }

    pub fn debug(&self, message: &str) {
        self.log(LogLevel::Debug, message);
    }

    pub fn info(&self, message: &str) {
        self.log(LogLevel::Info, message);
    }

    pub fn warning(&self, message: &str) {
        self.log(LogLevel::Warning, message);
    }

    pub fn error(&self, message: &str) {
        self.log(LogLevel::Error, message);
    }
}

impl Default for Logger {
    fn default() -> Self {
        Logger::new(LogLevel::Warning)
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    /// In-memory sink shared between a logger and the test reading it back
    #[derive(Clone, Default)]
    pub(crate) struct Captured(pub Arc<Mutex<Vec<u8>>>);

    impl Captured {
        pub(crate) fn text(&self) -> String {
            String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
        }
    }

    impl Write for Captured {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    pub(crate) fn quiet_logger(level: LogLevel) -> (Logger, Captured) {
        let captured = Captured::default();
        let mut logger = Logger::with_writer(level, captured.clone());
        logger.set_console_output(false);
        (logger, captured)
    }

    #[test]
    fn test_log_level_ordering() {
        assert!(LogLevel::Debug < LogLevel::Info);
        assert!(LogLevel::Info < LogLevel::Warning);
        assert!(LogLevel::Warning < LogLevel::Error);
    }

    #[test]
    fn test_logger_default_hides_chatter() {
        let logger = Logger::default();
        assert_eq!(logger.min_level, LogLevel::Warning);
        assert!(!logger.enabled(LogLevel::Info));
        assert!(logger.enabled(LogLevel::Error));
    }

    #[test]
    fn filters_below_min_level() {
        let (logger, captured) = quiet_logger(LogLevel::Info);
        logger.debug("state ChoosingAction -> ChoosingCoffee");
        logger.info("sold espresso");
        logger.error("unknown action 'brew'");

        let text = captured.text();
        assert!(!text.contains("ChoosingCoffee"));
        assert!(text.contains("[INFO] sold espresso"));
        assert!(text.contains("[ERROR] unknown action 'brew'"));
        assert_eq!(text.lines().count(), 2);
    }

    #[test]
    fn set_min_level_takes_effect() {
        let (mut logger, captured) = quiet_logger(LogLevel::Error);
        logger.warning("dropped");
        logger.set_min_level(LogLevel::Debug);
        logger.debug("kept");

        let text = captured.text();
        assert!(!text.contains("dropped"));
        assert!(text.contains("[DEBUG] kept"));
    }

    #[test]
    fn appends_to_log_file() {
        let path = std::env::temp_dir().join(format!(
            "coffee_machine_log_{}.log",
            chrono::Local::now().timestamp_nanos_opt().unwrap_or_default()
        ));
        let mut logger = Logger::with_file(LogLevel::Info, path.to_str().unwrap()).unwrap();
        logger.set_console_output(false);
        logger.info("I gave you $550");
        drop(logger);

        let contents = std::fs::read_to_string(&path).unwrap();
        assert!(contents.contains("[INFO] I gave you $550"));
        let _ = std::fs::remove_file(path);
    }
}
