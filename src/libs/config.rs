//! Configuration management for ticklist.
//!
//! The configuration is a small JSON document kept next to the default task
//! file in the platform data directory. It records where the task list lives
//! and which record shape it uses. Everything has a default, so a missing
//! file is never an error.
//!
//! ## Configuration Structure
//!
//! ```json
//! {
//!   "file": "/home/me/todo_list.txt",
//!   "variant": "rich"
//! }
//! ```
//!
//! ## Resolution Order
//!
//! Command-line flags override the file: `--file` beats `file`, `--plain`
//! beats `variant`. Without either, the task list is
//! [`DEFAULT_TASK_FILE_NAME`] inside the data directory.
//!
//! ## Usage Examples
//!
//! ```rust,no_run
//! use ticklist::libs::config::Config;
//! use ticklist::libs::data_storage::DataStorage;
//!
//! let config = Config::read()?;
//! let path = config.task_file_path(&DataStorage::new())?;
//! println!("Tasks are kept in {}", path.display());
//! # Ok::<(), anyhow::Error>(())
//! ```

use super::data_storage::DataStorage;
use super::task::Variant;
use crate::libs::messages::Message;
use crate::msg_print;
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Input, Select};
use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::path::{Path, PathBuf};

pub const CONFIG_FILE_NAME: &str = "config.json";
pub const DEFAULT_TASK_FILE_NAME: &str = "todo_list.txt";

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct Config {
    /// Task file location. `None` means the data directory default.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file: Option<PathBuf>,

    /// Record shape used when no `--plain` flag is given.
    #[serde(default)]
    pub variant: Variant,
}

impl Config {
    /// Reads the configuration from the data directory, or returns the
    /// default when no file exists yet.
    pub fn read() -> Result<Config> {
        Self::read_in(&DataStorage::new())
    }

    /// Reads the configuration kept in `storage`. Never creates directories.
    pub fn read_in(storage: &DataStorage) -> Result<Config> {
        Self::read_from(&storage.path(CONFIG_FILE_NAME))
    }

    pub fn read_from(path: &Path) -> Result<Config> {
        if !path.exists() {
            return Ok(Config::default());
        }

        let config_str = fs::read_to_string(path)?;
        let config: Config = serde_json::from_str(&config_str)?;
        Ok(config)
    }

    pub fn save(&self) -> Result<()> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;
        self.save_to(&config_file_path)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let config_file = File::create(path)?;
        serde_json::to_writer_pretty(&config_file, &self)?;
        Ok(())
    }

    /// Removes the configuration file. Returns `false` if there was none.
    pub fn delete() -> Result<bool> {
        let config_file_path = DataStorage::new().path(CONFIG_FILE_NAME);
        if !config_file_path.exists() {
            return Ok(false);
        }
        fs::remove_file(config_file_path)?;
        Ok(true)
    }

    /// Path of the task file this configuration points at. The data
    /// directory is created by the first save, not here.
    pub fn task_file_path(&self, storage: &DataStorage) -> Result<PathBuf> {
        match &self.file {
            Some(path) => Ok(path.clone()),
            None => Ok(storage.path(DEFAULT_TASK_FILE_NAME)),
        }
    }

    /// Interactive setup wizard. Current values are offered as defaults.
    pub fn init() -> Result<Self> {
        let current = Self::read().unwrap_or_default();
        let storage = DataStorage::new();

        msg_print!(Message::ConfigModuleTaskFile);

        let default_path = current.task_file_path(&storage)?;
        let file: String = Input::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptTaskFile.to_string())
            .default(default_path.display().to_string())
            .interact_text()?;

        let variants = [Variant::Rich, Variant::Plain];
        let selected = Select::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptVariant.to_string())
            .items(&variants)
            .default(variants.iter().position(|v| *v == current.variant).unwrap_or(0))
            .interact()?;

        let file = PathBuf::from(file);
        let file = if file == storage.path(DEFAULT_TASK_FILE_NAME) { None } else { Some(file) };

        Ok(Config {
            file,
            variant: variants[selected],
        })
    }
}
