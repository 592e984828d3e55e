const DEVELOPMENT_VERSION: &str = concat!(env!("CARGO_PKG_VERSION"), "-development");

pub fn build_version() -> &'static str {
    match option_env!("WEEKLY_REPORT_RELEASE_VERSION") {
        Some(version) if !version.trim().is_empty() => version,
        _ => DEVELOPMENT_VERSION,
    }
}
