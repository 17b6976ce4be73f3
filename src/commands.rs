//! Tauri commands for the applications list, dashboard stats, and export.

use serde::{Deserialize, Serialize};
use tauri::State;

use crate::{
    models::{ApplicationInput, ApplicationRecord},
    query::{self, FilterSpec, SortKey},
    stats::{self, ApplicationStats, CountEntry},
    AppState,
};

#[tauri::command]
pub async fn get_applications(state: State<'_, AppState>) -> Result<Vec<ApplicationRecord>, String> {
    Ok(state.store.all().to_vec())
}

#[tauri::command]
pub async fn get_application(
    state: State<'_, AppState>,
    id: i64,
) -> Result<Option<ApplicationRecord>, String> {
    Ok(state.store.get(id).cloned())
}

#[tauri::command]
pub async fn get_application_stats(state: State<'_, AppState>) -> Result<ApplicationStats, String> {
    Ok(state.stats.compute_stats(state.store.all()).await)
}

#[tauri::command]
pub async fn get_status_breakdown(state: State<'_, AppState>) -> Result<Vec<CountEntry>, String> {
    let current = state.stats.compute_stats(state.store.all()).await;
    Ok(stats::status_breakdown(&current))
}

#[tauri::command]
pub async fn get_applications_by_month(
    state: State<'_, AppState>,
) -> Result<Vec<CountEntry>, String> {
    Ok(stats::applications_by_month(state.store.all()))
}

#[tauri::command]
pub async fn get_top_companies(
    state: State<'_, AppState>,
    limit: Option<usize>,
) -> Result<Vec<CountEntry>, String> {
    Ok(stats::top_companies(state.store.all(), limit.unwrap_or(5)))
}

#[tauri::command]
pub async fn query_applications(
    state: State<'_, AppState>,
    search: Option<String>,
    status: Option<String>,
    sort_by: Option<SortKey>,
) -> Result<Vec<ApplicationRecord>, String> {
    Ok(query::query_applications(
        state.store.all(),
        search.as_deref().unwrap_or(""),
        status.as_deref().unwrap_or(query::STATUS_ALL),
        sort_by.unwrap_or_default(),
    ))
}

#[tauri::command]
pub async fn filter_applications(
    state: State<'_, AppState>,
    spec: FilterSpec,
) -> Result<Vec<ApplicationRecord>, String> {
    Ok(state.filters.filter_records(state.store.all(), &spec).await)
}

/// Invalidation hook for both derived-state caches. The record store has no
/// write path today, so nothing calls this automatically; it exists for the
/// frontend to invoke if the sequence is ever swapped.
#[tauri::command]
pub async fn clear_derived_caches(state: State<'_, AppState>) -> Result<(), String> {
    state.stats.clear().await;
    state.filters.clear().await;
    Ok(())
}

/// Add/edit form submission. Validates the input and echoes the record that
/// would be created; the record store stays untouched.
#[tauri::command]
pub async fn submit_application(
    state: State<'_, AppState>,
    input: ApplicationInput,
) -> Result<ApplicationRecord, String> {
    let company = input.company.trim();
    let position = input.position.trim();
    if company.is_empty() {
        return Err("company is required".to_string());
    }
    if position.is_empty() {
        return Err("position is required".to_string());
    }

    let vocabulary = state.settings.snapshot().custom_statuses;
    if !vocabulary.iter().any(|label| *label == input.status) {
        return Err(format!("unknown status '{}'", input.status));
    }

    let record = ApplicationRecord {
        id: state.store.next_id(),
        company: company.to_string(),
        position: position.to_string(),
        date_applied: input.date_applied,
        status: input.status,
        cv_submitted: input.cv_submitted,
        cover_letter_submitted: input.cover_letter_submitted,
        portfolio_submitted: input.portfolio_submitted,
        job_link: input.job_link.filter(|link| !link.is_empty()),
        location: input.location,
        notes: input.notes,
        last_updated: chrono::Utc::now().date_naive(),
    };

    log::info!(
        "validated application {} at {} (store is read-only, nothing persisted)",
        record.position,
        record.company
    );
    Ok(record)
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum ExportFormat {
    Json,
    Csv,
}

#[tauri::command]
pub async fn export_applications(
    state: State<'_, AppState>,
    format: ExportFormat,
) -> Result<String, String> {
    let records = state.store.all();
    match format {
        ExportFormat::Json => {
            serde_json::to_string_pretty(records).map_err(|e| e.to_string())
        }
        ExportFormat::Csv => Ok(render_csv(records)),
    }
}

const CSV_HEADER: &str = "id,company,position,dateApplied,status,cvSubmitted,\
coverLetterSubmitted,portfolioSubmitted,jobLink,location,notes,lastUpdated";

fn render_csv(records: &[ApplicationRecord]) -> String {
    let mut out = String::from(CSV_HEADER);
    out.push('\n');

    for record in records {
        let fields = [
            record.id.to_string(),
            record.company.clone(),
            record.position.clone(),
            record.date_applied.to_string(),
            record.status.clone(),
            record.cv_submitted.to_string(),
            record.cover_letter_submitted.to_string(),
            record.portfolio_submitted.to_string(),
            record.job_link.clone().unwrap_or_default(),
            record.location.clone(),
            record.notes.clone(),
            record.last_updated.to_string(),
        ];
        let row: Vec<String> = fields.iter().map(|field| csv_escape(field)).collect();
        out.push_str(&row.join(","));
        out.push('\n');
    }

    out
}

fn csv_escape(field: &str) -> String {
    if field.contains(',') || field.contains('"') || field.contains('\n') {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}
