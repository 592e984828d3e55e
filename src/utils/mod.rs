pub mod logging;
pub mod parsing;
pub mod version;
