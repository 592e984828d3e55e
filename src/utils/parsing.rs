/// Strips quotes and surrounding whitespace from env/config values, returning
/// `None` when nothing is left.
pub fn clean_value(raw: &str) -> Option<String> {
    let value = raw.replace('"', "").trim().to_string();
    if value.is_empty() { None } else { Some(value) }
}

pub fn parse_workspace_id(raw: &str) -> Result<i64, String> {
    let parsed = raw
        .trim()
        .parse::<i64>()
        .map_err(|_| format!("Invalid workspace id: {raw}"))?;
    if parsed <= 0 {
        return Err("workspace id must be greater than 0".to_string());
    }
    Ok(parsed)
}

pub fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "y" => Some(true),
        "0" | "false" | "no" | "n" => Some(false),
        _ => None,
    }
}
