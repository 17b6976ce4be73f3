mod commands;
mod models;
mod query;
mod settings;
mod stats;
mod store;

use commands::{
    clear_derived_caches, export_applications, filter_applications, get_application,
    get_application_stats, get_applications, get_applications_by_month, get_status_breakdown,
    get_top_companies, query_applications, submit_application,
};
use query::FilterEvaluator;
use settings::{SettingsStore, UserSettings};
use stats::StatsAggregator;
use store::RecordStore;
use tauri::{Emitter, Manager, State};

pub(crate) struct AppState {
    pub(crate) store: RecordStore,
    pub(crate) stats: StatsAggregator,
    pub(crate) filters: FilterEvaluator,
    pub(crate) settings: SettingsStore,
}

#[tauri::command]
async fn get_settings(state: State<'_, AppState>) -> Result<UserSettings, String> {
    Ok(state.settings.snapshot())
}

#[tauri::command]
async fn update_settings(
    settings: UserSettings,
    state: State<'_, AppState>,
    app_handle: tauri::AppHandle,
) -> Result<(), String> {
    state
        .settings
        .update(settings.clone())
        .map_err(|e| e.to_string())?;

    app_handle
        .emit("settings-updated", &settings)
        .map_err(|e| e.to_string())?;

    Ok(())
}

#[tauri::command]
async fn add_custom_status(
    label: String,
    state: State<'_, AppState>,
    app_handle: tauri::AppHandle,
) -> Result<UserSettings, String> {
    let settings = state
        .settings
        .add_status(&label)
        .map_err(|e| e.to_string())?;

    app_handle
        .emit("settings-updated", &settings)
        .map_err(|e| e.to_string())?;

    Ok(settings)
}

#[tauri::command]
async fn remove_custom_status(
    label: String,
    state: State<'_, AppState>,
    app_handle: tauri::AppHandle,
) -> Result<UserSettings, String> {
    let settings = state
        .settings
        .remove_status(&label)
        .map_err(|e| e.to_string())?;

    app_handle
        .emit("settings-updated", &settings)
        .map_err(|e| e.to_string())?;

    Ok(settings)
}

#[cfg_attr(mobile, tauri::mobile_entry_point)]
pub fn run() {
    // Initialize logging (reads RUST_LOG env var)
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    log::info!("JobTrack starting up...");

    tauri::Builder::default()
        .plugin(tauri_plugin_opener::init())
        .setup(|app| {
            let result = (|| -> anyhow::Result<()> {
                let app_data_dir = app
                    .path()
                    .app_data_dir()
                    .map_err(|err| anyhow::anyhow!(err))?;
                std::fs::create_dir_all(&app_data_dir)?;

                let settings_path = app_data_dir.join("settings.json");
                let settings_store = SettingsStore::new(settings_path)?;

                let store = RecordStore::seeded();
                log::info!("record store seeded with {} applications", store.len());

                app.manage(AppState {
                    store,
                    stats: StatsAggregator::new(),
                    filters: FilterEvaluator::new(),
                    settings: settings_store,
                });

                Ok(())
            })();

            result.map_err(|err| err.into())
        })
        .invoke_handler(tauri::generate_handler![
            get_applications,
            get_application,
            get_application_stats,
            get_status_breakdown,
            get_applications_by_month,
            get_top_companies,
            query_applications,
            filter_applications,
            clear_derived_caches,
            submit_application,
            export_applications,
            get_settings,
            update_settings,
            add_custom_status,
            remove_custom_status,
        ])
        .run(tauri::generate_context!())
        .expect("error while running tauri application");
}
