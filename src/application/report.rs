use crate::application::input::InputProvider;
use crate::domain::config::Credentials;
use crate::domain::error::ReportError;
use crate::domain::models::{DateRange, Report, Workspace};
use crate::domain::period::PeriodSelector;
use crate::domain::report::aggregate;
use crate::infrastructure::api_client::TimeTrackingApi;
use crate::log;

/// Credential values found before any prompting happens.
#[derive(Clone, Debug, Default)]
pub struct KnownCredentials {
    pub token: Option<String>,
    pub workspace_id: Option<i64>,
}

pub fn resolve_token(
    known: &KnownCredentials,
    input: &mut dyn InputProvider,
) -> Result<Credentials, String> {
    let (token, token_from_prompt) = match &known.token {
        Some(token) => (token.clone(), false),
        None => (input.token()?, true),
    };

    Ok(Credentials {
        token,
        token_from_prompt,
        workspace_id: None,
        workspace_from_prompt: false,
    })
}

/// Lists the workspaces (which also validates the token) and settles on one,
/// prompting only when no id is known yet.
pub fn resolve_workspace(
    api: &dyn TimeTrackingApi,
    input: &mut dyn InputProvider,
    known: &KnownCredentials,
    credentials: Credentials,
) -> Result<Credentials, String> {
    let workspaces = api.list_workspaces().map_err(|e| e.to_string())?;

    if let Some(id) = known.workspace_id {
        if !workspaces.iter().any(|workspace| workspace.id == id) {
            log!("Workspace {} not in the {} listed for this token", id, workspaces.len());
        }
        return Ok(Credentials {
            workspace_id: Some(id),
            workspace_from_prompt: false,
            ..credentials
        });
    }

    let selected: Workspace = input.select_workspace(&workspaces)?;
    log!("Selected workspace {}", selected.label());
    Ok(Credentials {
        workspace_id: Some(selected.id),
        workspace_from_prompt: true,
        ..credentials
    })
}

pub fn resolve_period(
    requested: Option<PeriodSelector>,
    input: &mut dyn InputProvider,
) -> Result<PeriodSelector, String> {
    match requested {
        Some(period) => Ok(period),
        None => input.select_period(),
    }
}

pub struct GeneratedReport {
    pub range: DateRange,
    pub report: Report,
}

/// Fetches and aggregates the summary for an already resolved range.
pub fn generate_report(
    api: &dyn TimeTrackingApi,
    workspace_id: i64,
    range: DateRange,
) -> Result<GeneratedReport, ReportError> {
    log!("Report period {} for workspace {}", range.label(), workspace_id);

    let raw = api.fetch_summary(workspace_id, &range)?;
    let report = aggregate(raw)?;
    Ok(GeneratedReport { range, report })
}
