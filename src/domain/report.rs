use crate::domain::error::ReportError;
use crate::domain::models::{ProjectReport, RawSummary, Report};

const MS_PER_MINUTE: u64 = 60_000;
const MS_PER_HOUR: u64 = 3_600_000;

/// Flattens the summary payload into one block per project. Fails as a whole
/// on the first malformed group.
pub fn aggregate(raw: RawSummary) -> Result<Report, ReportError> {
    let total_grand = raw.total_grand.unwrap_or(0);

    let projects = raw
        .data
        .into_iter()
        .enumerate()
        .map(|(index, group)| -> Result<ProjectReport, ReportError> {
            let group = group
                .ok_or_else(|| ReportError::MalformedSummary(format!("data[{index}] is null")))?;
            let project_name = group
                .title
                .and_then(|title| title.project)
                .ok_or_else(|| {
                    ReportError::MalformedSummary(format!("data[{index}] has no title.project"))
                })?;
            let items = group.items.ok_or_else(|| {
                ReportError::MalformedSummary(format!("data[{index}] ({project_name}) has no items"))
            })?;

            let entries = items
                .into_iter()
                .enumerate()
                .map(|(item_index, item)| {
                    item.title.and_then(|title| title.time_entry).ok_or_else(|| {
                        ReportError::MalformedSummary(format!(
                            "data[{index}].items[{item_index}] has no title.time_entry"
                        ))
                    })
                })
                .collect::<Result<Vec<_>, _>>()?;

            Ok(ProjectReport {
                project_name,
                entries,
            })
        })
        .collect::<Result<Vec<_>, ReportError>>()?;

    Ok(Report {
        total_hours: total_grand / MS_PER_HOUR,
        total_minutes: (total_grand / MS_PER_MINUTE) % 60,
        projects,
    })
}

pub fn format_report(report: &Report) -> String {
    let blocks: Vec<String> = report
        .projects
        .iter()
        .map(|project| {
            let entries: String = project
                .entries
                .iter()
                .map(|entry| format!("- {entry}\n"))
                .collect();
            format!("PROJECT: {}\n\n{}", project.project_name, entries)
        })
        .collect();

    format!(
        "Total Hours: {}:{:02}\n\n{}",
        report.total_hours,
        report.total_minutes,
        blocks.join("\n")
    )
}
