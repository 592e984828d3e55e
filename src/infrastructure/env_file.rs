use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;

use crate::domain::config::Credentials;
use crate::log;

pub const TOKEN_VAR: &str = "API_TOKEN";
pub const WORKSPACE_VAR: &str = "WORKSPACE_ID";
pub const ENV_FILE: &str = ".env";

/// Lines to append for credentials that came from the prompt. Values already
/// present in the environment are never written back.
pub fn pending_lines(credentials: &Credentials) -> Vec<String> {
    let mut lines = Vec::new();
    if credentials.token_from_prompt && !credentials.token.is_empty() {
        lines.push(format!("{TOKEN_VAR}={}", credentials.token));
    }
    if credentials.workspace_from_prompt {
        if let Some(id) = credentials.workspace_id {
            lines.push(format!("{WORKSPACE_VAR}={id}"));
        }
    }
    lines
}

/// Appends one line per pending credential. Each append is independent; a
/// failure after the first one leaves the earlier line in place.
pub fn persist_credentials(path: &Path, credentials: &Credentials) -> Result<usize, String> {
    let lines = pending_lines(credentials);
    for line in &lines {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .map_err(|e| format!("Cannot open {}: {}", path.display(), e))?;
        writeln!(file)
            .and_then(|_| write!(file, "{line}"))
            .map_err(|e| format!("Cannot write {}: {}", path.display(), e))?;
        log!("Persisted {} to {}", line.split('=').next().unwrap_or(""), path.display());
    }
    Ok(lines.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn credentials(token_from_prompt: bool, workspace_from_prompt: bool) -> Credentials {
        Credentials {
            token: "tok".to_string(),
            token_from_prompt,
            workspace_id: Some(99),
            workspace_from_prompt,
        }
    }

    #[test]
    fn only_prompted_values_are_pending() {
        assert!(pending_lines(&credentials(false, false)).is_empty());
        assert_eq!(pending_lines(&credentials(true, false)), vec!["API_TOKEN=tok"]);
        assert_eq!(
            pending_lines(&credentials(true, true)),
            vec!["API_TOKEN=tok", "WORKSPACE_ID=99"]
        );
    }

    #[test]
    fn appends_to_existing_env_file() {
        let path = std::env::temp_dir().join(format!("weekly-report-env-{}", std::process::id()));
        std::fs::write(&path, "OTHER=1").expect("fixture should be written");

        let written = persist_credentials(&path, &credentials(false, true))
            .expect("credentials should persist");
        let contents = std::fs::read_to_string(&path).expect("env file should be readable");
        let _ = std::fs::remove_file(&path);

        assert_eq!(written, 1);
        assert_eq!(contents, "OTHER=1\nWORKSPACE_ID=99");
    }
}
