use base64::prelude::*;
use reqwest::StatusCode;
use reqwest::blocking::{Client, Response};
use serde_json::Value;
use std::time::Duration;

use crate::domain::config::AppConfig;
use crate::domain::error::ReportError;
use crate::domain::models::*;
use crate::log;

/// The two reads the report pipeline needs from the time-tracking service.
pub trait TimeTrackingApi {
    fn list_workspaces(&self) -> Result<Vec<Workspace>, ReportError>;

    fn fetch_summary(
        &self,
        workspace_id: i64,
        range: &DateRange,
    ) -> Result<RawSummary, ReportError>;
}

pub struct ApiClient {
    pub api_base_url: String,
    pub reports_base_url: String,
    pub user_agent: String,
    auth_header: String,
    client: Client,
}

impl ApiClient {
    pub fn new(config: &AppConfig, token: &str) -> Result<Self, ReportError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()
            .map_err(|error| ReportError::Network(error.to_string()))?;

        log!("API client for {} (token len {})", config.api_base_url, token.len());

        Ok(Self {
            api_base_url: config.api_base_url.trim_end_matches('/').to_string(),
            reports_base_url: config.reports_base_url.trim_end_matches('/').to_string(),
            user_agent: config.user_agent.clone(),
            auth_header: basic_auth_header(token),
            client,
        })
    }

    fn get(&self, url: &str, query: &[(&str, String)]) -> Result<String, ReportError> {
        log!("GET Request URL: {}", url);
        let response = self
            .client
            .get(url)
            .header(reqwest::header::AUTHORIZATION, &self.auth_header)
            .query(query)
            .send()
            .map_err(|e| {
                log!("GET transport error: {}", e);
                ReportError::Network(e.to_string())
            })?;

        read_body(response)
    }
}

impl TimeTrackingApi for ApiClient {
    fn list_workspaces(&self) -> Result<Vec<Workspace>, ReportError> {
        let url = format!("{}/workspaces", self.api_base_url);
        let body = self.get(&url, &[])?;
        let workspaces = parse_workspaces(&body)?;
        log!("Fetched {} workspaces", workspaces.len());
        Ok(workspaces)
    }

    fn fetch_summary(
        &self,
        workspace_id: i64,
        range: &DateRange,
    ) -> Result<RawSummary, ReportError> {
        let url = format!("{}/summary", self.reports_base_url);
        let query = [
            ("workspace_id", workspace_id.to_string()),
            ("since", range.since_param()),
            ("until", range.until_param()),
            ("user_agent", self.user_agent.clone()),
        ];
        let body = self.get(&url, &query)?;
        let summary = parse_summary(&body)?;
        log!("Fetched summary with {} project groups", summary.data.len());
        Ok(summary)
    }
}

pub fn basic_auth_header(token: &str) -> String {
    format!("Basic {}", BASE64_STANDARD.encode(format!("{token}:api_token")))
}

fn read_body(response: Response) -> Result<String, ReportError> {
    let status = response.status();
    log!("Response Status: {}", status);
    let body = response
        .text()
        .map_err(|e| ReportError::Network(e.to_string()))?;
    check_status(status, &body)?;
    Ok(body)
}

fn check_status(status: StatusCode, body: &str) -> Result<(), ReportError> {
    if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
        return Err(ReportError::Auth {
            status: status.as_u16(),
        });
    }
    if !status.is_success() {
        log!("Error Body: {}", body);
        return Err(ReportError::Network(format!(
            "{} {}",
            status.as_u16(),
            body.lines().next().unwrap_or("")
        )));
    }
    Ok(())
}

fn parse_json(body: &str) -> Result<Value, ReportError> {
    serde_json::from_str(body).map_err(|error| {
        log!("Error parsing JSON: {}", error);
        ReportError::UnexpectedResponseShape(format!(
            "invalid json ({}) | Response start: {:.50}",
            error, body
        ))
    })
}

fn parse_workspaces(body: &str) -> Result<Vec<Workspace>, ReportError> {
    let value = parse_json(body)?;
    let Value::Array(items) = value else {
        return Err(ReportError::UnexpectedResponseShape(
            "workspaces response is not a list".to_string(),
        ));
    };

    items
        .into_iter()
        .enumerate()
        .map(|(index, item)| {
            let id = item.get("id").and_then(Value::as_i64);
            let name = item.get("name").and_then(Value::as_str);
            match (id, name) {
                (Some(id), Some(name)) => Ok(Workspace {
                    id,
                    name: name.to_string(),
                }),
                _ => Err(ReportError::UnexpectedResponseShape(format!(
                    "workspace [{index}] has no integer id and string name"
                ))),
            }
        })
        .collect()
}

fn parse_summary(body: &str) -> Result<RawSummary, ReportError> {
    let value = parse_json(body)?;
    if !value.is_object() {
        return Err(ReportError::UnexpectedResponseShape(
            "summary response is not an object".to_string(),
        ));
    }
    serde_json::from_value(value)
        .map_err(|error| ReportError::UnexpectedResponseShape(format!("summary: {error}")))
}
