pub const LOG_PATH_VAR: &str = "WEEKLY_REPORT_LOG";

#[macro_export]
macro_rules! log {
    ($($arg:tt)*) => ({
        use std::io::Write;
        let now = chrono::Local::now().format("%Y-%m-%d %H:%M:%S");
        let path = std::env::var($crate::utils::logging::LOG_PATH_VAR)
            .unwrap_or_else(|_| "debug.log".to_string());
        if let Ok(mut file) = std::fs::OpenOptions::new().create(true).append(true).open(path) {
            let _ = writeln!(file, "[{}] {}", now, format!($($arg)*));
        }
    })
}
