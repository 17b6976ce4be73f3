use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::{fs, path::PathBuf, sync::RwLock};

use crate::models::ApplicationStatus;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum ThemePreference {
    Light,
    Dark,
    System,
}

impl Default for ThemePreference {
    fn default() -> Self {
        ThemePreference::System
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UserSettings {
    pub theme: ThemePreference,
    pub email_notifications: bool,
    pub browser_notifications: bool,
    /// Status vocabulary shown in the UI. Starts as the five first-class
    /// statuses; labels added here count toward stats totals but get no
    /// dedicated bucket.
    pub custom_statuses: Vec<String>,
}

impl Default for UserSettings {
    fn default() -> Self {
        Self {
            theme: ThemePreference::default(),
            email_notifications: true,
            browser_notifications: true,
            custom_statuses: ApplicationStatus::ALL
                .iter()
                .map(|status| status.as_str().to_string())
                .collect(),
        }
    }
}

pub struct SettingsStore {
    path: PathBuf,
    data: RwLock<UserSettings>,
}

impl SettingsStore {
    pub fn new(path: PathBuf) -> Result<Self> {
        let data = if path.exists() {
            let contents = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read settings from {}", path.display()))?;
            serde_json::from_str(&contents).unwrap_or_default()
        } else {
            UserSettings::default()
        };

        Ok(Self {
            path,
            data: RwLock::new(data),
        })
    }

    pub fn snapshot(&self) -> UserSettings {
        self.data.read().unwrap().clone()
    }

    pub fn update(&self, settings: UserSettings) -> Result<()> {
        let mut guard = self.data.write().unwrap();
        *guard = settings;
        self.persist(&guard)
    }

    /// Adds a status label to the vocabulary. Empty and duplicate labels are
    /// rejected.
    pub fn add_status(&self, label: &str) -> Result<UserSettings> {
        let label = label.trim();
        if label.is_empty() {
            bail!("status label must not be empty");
        }

        let mut guard = self.data.write().unwrap();
        if guard.custom_statuses.iter().any(|existing| existing == label) {
            bail!("status label '{label}' already exists");
        }

        guard.custom_statuses.push(label.to_string());
        self.persist(&guard)?;
        Ok(guard.clone())
    }

    pub fn remove_status(&self, label: &str) -> Result<UserSettings> {
        let mut guard = self.data.write().unwrap();
        guard.custom_statuses.retain(|existing| existing != label);
        self.persist(&guard)?;
        Ok(guard.clone())
    }

    fn persist(&self, data: &UserSettings) -> Result<()> {
        let serialized = serde_json::to_string_pretty(data)?;
        fs::write(&self.path, serialized)
            .with_context(|| format!("Failed to write settings to {}", self.path.display()))
    }
}
