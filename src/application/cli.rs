use std::env;
use std::path::Path;

use serde::Serialize;

use crate::application::input::TerminalPrompt;
use crate::application::report::{
    KnownCredentials, generate_report, resolve_period, resolve_token, resolve_workspace,
};
use crate::domain::config::AppConfig;
use crate::domain::models::{Report, Workspace};
use crate::domain::period::{PeriodSelector, ReportTimezone, resolve};
use crate::domain::report::format_report;
use crate::infrastructure::api_client::{ApiClient, TimeTrackingApi};
use crate::infrastructure::clipboard::copy_to_clipboard;
use crate::infrastructure::config::{config_path, load_config, save_config};
use crate::infrastructure::env_file::{ENV_FILE, TOKEN_VAR, WORKSPACE_VAR, persist_credentials};
use crate::utils::parsing::{clean_value, parse_bool, parse_workspace_id};

const REPORT_HELP: &str = "Usage:\n  report [--period <this-week|last-week>] [--workspace <ID>] [--json] [--pretty] [--no-clipboard]";

const WORKSPACES_HELP: &str = "Usage:\n  workspaces [--pretty]";

const CONFIG_HELP: &str = "Usage:\n  config\n  config set <api_base_url|reports_base_url|user_agent|timezone|request_timeout_secs|copy_to_clipboard> <VALUE>";

#[derive(Debug, Default, PartialEq)]
struct ReportOptions {
    period: Option<PeriodSelector>,
    workspace_id: Option<i64>,
    json: bool,
    pretty: bool,
    no_clipboard: bool,
}

#[derive(Serialize)]
struct PeriodOutput {
    since: String,
    until: String,
}

#[derive(Serialize)]
struct ReportOutput<'a> {
    workspace_id: i64,
    period: PeriodOutput,
    report: &'a Report,
}

#[derive(Serialize)]
struct ConfigOutput<'a> {
    path: String,
    config: &'a AppConfig,
}

pub fn help() -> String {
    format!("{REPORT_HELP}\n\n{WORKSPACES_HELP}\n\n{CONFIG_HELP}")
}

pub fn run_report(args: &[String]) -> Result<(), String> {
    if contains_help(args) {
        println!("{REPORT_HELP}");
        return Ok(());
    }

    let options = parse_report_options(args)?;
    let config = load_config();
    let timezone: ReportTimezone = config.timezone.parse()?;
    let mut input = TerminalPrompt::stdio();

    let mut known = known_credentials()?;
    if options.workspace_id.is_some() {
        known.workspace_id = options.workspace_id;
    }

    let credentials = resolve_token(&known, &mut input)?;
    let client = ApiClient::new(&config, &credentials.token).map_err(|e| e.to_string())?;
    let credentials = resolve_workspace(&client, &mut input, &known, credentials)?;

    if let Err(error) = persist_credentials(Path::new(ENV_FILE), &credentials) {
        eprintln!("Warning: {error}");
    }

    let workspace_id = credentials
        .workspace_id
        .ok_or_else(|| "The variables are not valid.".to_string())?;
    let period = resolve_period(options.period, &mut input)?;
    let range = resolve(period, &timezone.now());

    if options.json {
        let generated = generate_report(&client, workspace_id, range).map_err(|e| e.to_string())?;
        let output = ReportOutput {
            workspace_id,
            period: PeriodOutput {
                since: generated.range.since_param(),
                until: generated.range.until_param(),
            },
            report: &generated.report,
        };
        return print_json(&output, options.pretty);
    }

    println!("period: {}", range.label());
    let generated = generate_report(&client, workspace_id, range).map_err(|e| e.to_string())?;
    let text = format_report(&generated.report);

    println!("This is your report:\n\n");
    println!("{text}");

    if options.no_clipboard || !config.copy_to_clipboard {
        return Ok(());
    }
    match copy_to_clipboard(&text) {
        Ok(_) => println!("\n\nYour report has been copied to your clipboard!"),
        Err(error) => eprintln!("\n\nCould not copy the report to the clipboard ({error})."),
    }
    Ok(())
}

pub fn run_workspaces(args: &[String]) -> Result<(), String> {
    if contains_help(args) {
        println!("{WORKSPACES_HELP}");
        return Ok(());
    }

    let pretty = parse_pretty_flag(args)?;
    let config = load_config();
    let known = known_credentials()?;
    let mut input = TerminalPrompt::stdio();
    let credentials = resolve_token(&known, &mut input)?;
    let client = ApiClient::new(&config, &credentials.token).map_err(|e| e.to_string())?;
    let workspaces: Vec<Workspace> = client.list_workspaces().map_err(|e| e.to_string())?;

    print_json(&workspaces, pretty)
}

pub fn run_config(args: &[String]) -> Result<(), String> {
    if contains_help(args) {
        println!("{CONFIG_HELP}");
        return Ok(());
    }

    let mut config = load_config();
    match args {
        [] => {
            let path = config_path()?;
            let output = ConfigOutput {
                path: path.display().to_string(),
                config: &config,
            };
            print_json(&output, true)
        }
        [set, key, value] if set == "set" => {
            apply_setting(&mut config, key, value)?;
            save_config(&config)?;
            println!("{key} = {value}");
            Ok(())
        }
        _ => Err(format!("Unknown config arguments\n\n{CONFIG_HELP}")),
    }
}

fn known_credentials() -> Result<KnownCredentials, String> {
    let token = env::var(TOKEN_VAR).ok().and_then(|value| clean_value(&value));
    let workspace_id = env::var(WORKSPACE_VAR)
        .ok()
        .and_then(|value| clean_value(&value))
        .map(|value| parse_workspace_id(&value))
        .transpose()?;
    Ok(KnownCredentials {
        token,
        workspace_id,
    })
}

fn apply_setting(config: &mut AppConfig, key: &str, value: &str) -> Result<(), String> {
    match key {
        "api_base_url" => config.api_base_url = value.trim().to_string(),
        "reports_base_url" => config.reports_base_url = value.trim().to_string(),
        "user_agent" => config.user_agent = value.trim().to_string(),
        "timezone" => {
            value.parse::<ReportTimezone>()?;
            config.timezone = value.trim().to_string();
        }
        "request_timeout_secs" => {
            let secs = value
                .trim()
                .parse::<u64>()
                .map_err(|_| format!("Invalid timeout: {value}"))?;
            if secs == 0 {
                return Err("request_timeout_secs must be greater than 0".to_string());
            }
            config.request_timeout_secs = secs;
        }
        "copy_to_clipboard" => {
            config.copy_to_clipboard =
                parse_bool(value).ok_or_else(|| format!("Invalid value for {key}: {value}"))?;
        }
        unknown => return Err(format!("Unknown config key: {unknown}\n\n{CONFIG_HELP}")),
    }
    Ok(())
}

fn parse_report_options(args: &[String]) -> Result<ReportOptions, String> {
    let mut options = ReportOptions::default();

    let mut i = 0usize;
    while i < args.len() {
        match args[i].as_str() {
            "--period" => {
                i += 1;
                let value = args.get(i).ok_or("Missing value for --period")?;
                options.period = Some(
                    value
                        .parse::<PeriodSelector>()
                        .map_err(|error| error.to_string())?,
                );
            }
            "--workspace" => {
                i += 1;
                let value = args.get(i).ok_or("Missing value for --workspace")?;
                options.workspace_id = Some(parse_workspace_id(value)?);
            }
            "--json" => options.json = true,
            "--pretty" => options.pretty = true,
            "--no-clipboard" => options.no_clipboard = true,
            unknown => {
                return Err(format!("Unknown flag: {unknown}\n\n{REPORT_HELP}"));
            }
        }
        i += 1;
    }

    Ok(options)
}

fn parse_pretty_flag(args: &[String]) -> Result<bool, String> {
    let mut pretty = false;
    for arg in args {
        match arg.as_str() {
            "--pretty" => pretty = true,
            unknown => {
                return Err(format!("Unknown flag: {unknown}\n\n{WORKSPACES_HELP}"));
            }
        }
    }
    Ok(pretty)
}

fn print_json<T: Serialize>(value: &T, pretty: bool) -> Result<(), String> {
    let json = if pretty {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    }
    .map_err(|error| error.to_string())?;
    println!("{json}");
    Ok(())
}

fn is_help(value: &str) -> bool {
    matches!(value, "-h" | "--help" | "help")
}

fn contains_help(args: &[String]) -> bool {
    args.iter().any(|value| is_help(value.as_str()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(values: &[&str]) -> Vec<String> {
        values.iter().map(|value| value.to_string()).collect()
    }

    #[test]
    fn parses_report_flags() {
        let options = parse_report_options(&args(&[
            "--period",
            "last-week",
            "--workspace",
            "77",
            "--json",
            "--no-clipboard",
        ]))
        .expect("flags should parse");

        assert_eq!(
            options,
            ReportOptions {
                period: Some(PeriodSelector::LastWeek),
                workspace_id: Some(77),
                json: true,
                pretty: false,
                no_clipboard: true,
            }
        );
    }

    #[test]
    fn rejects_invalid_report_flags() {
        let error = parse_report_options(&args(&["--period", "yesterday"]))
            .expect_err("unknown period should fail");
        assert!(error.contains("yesterday"));
        assert!(parse_report_options(&args(&["--period"])).is_err());
        assert!(parse_report_options(&args(&["--workspace", "-1"])).is_err());
        assert!(parse_report_options(&args(&["--csv"])).is_err());
    }

    #[test]
    fn applies_config_settings() {
        let mut config = AppConfig::default();
        apply_setting(&mut config, "timezone", "+01:00").expect("valid timezone");
        apply_setting(&mut config, "copy_to_clipboard", "no").expect("valid bool");
        apply_setting(&mut config, "request_timeout_secs", "30").expect("valid timeout");

        assert_eq!(config.timezone, "+01:00");
        assert!(!config.copy_to_clipboard);
        assert_eq!(config.request_timeout_secs, 30);
        assert!(apply_setting(&mut config, "timezone", "Mars/Olympus").is_err());
        assert!(apply_setting(&mut config, "request_timeout_secs", "0").is_err());
        assert!(apply_setting(&mut config, "theme", "dark").is_err());
    }

    #[test]
    fn report_json_shape() {
        let report = Report {
            total_hours: 2,
            total_minutes: 5,
            projects: Vec::new(),
        };
        let output = ReportOutput {
            workspace_id: 3,
            period: PeriodOutput {
                since: "2026-10-12".to_string(),
                until: "2026-10-18".to_string(),
            },
            report: &report,
        };
        let json = serde_json::to_value(&output).expect("output should serialize");
        assert_eq!(json["period"]["since"], "2026-10-12");
        assert_eq!(json["report"]["total_minutes"], 5);
    }
}
