//! # scopefs Configuration System
//!
//! File: cli/src/core/config.rs
//!
//! ## Overview
//!
//! This module is the configuration collaborator of the access layer. It supplies
//! the Working Root every relative path resolves against, the Fixture Path Prefix
//! that marks read-only templates, and optionally the directory those fixture
//! references resolve into.
//!
//! ## Architecture
//!
//! Configuration sources (in order of precedence):
//! 1. Project-specific `.scopefs.toml` in the current directory or its ancestors
//!    (the search stops at a directory containing `.git`)
//! 2. User-specific `<config dir>/scopefs/config.toml`
//! 3. Default values defined in the code
//!
//! After merging, `~` is expanded, a relative working root is anchored at the
//! process current directory, and the result is validated.
//!
//! ## Examples
//!
//! ```rust,no_run
//! use scopefs::core::config;
//!
//! # fn run() -> scopefs::core::error::Result<()> {
//! let cfg = config::load_config()?;
//! let scope = cfg.to_scope();
//! println!("working root: {}", scope.working_root().display());
//! # Ok(())
//! # }
//! ```
//!
use crate::access::scope::Scope;
use crate::core::error::{FilesystemError, Result};
use anyhow::{anyhow, Context};
use directories::ProjectDirs;
use serde::Deserialize;
use std::{
    fs,
    path::{Path, PathBuf},
};
use tracing::{debug, info, warn};

/// Represents the main configuration structure, loaded from TOML files.
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct ScopeConfig {
    /// Directory all relative paths resolve against (can use ~).
    #[serde(default = "default_working_root")]
    pub working_root: String,
    /// Prefix marking read-only fixture references.
    #[serde(default = "default_fixtures_prefix")]
    pub fixtures_prefix: String,
    /// Directory fixture references resolve into (can use ~).
    #[serde(default)]
    pub fixtures_directory: Option<String>,
}

impl Default for ScopeConfig {
    fn default() -> Self {
        ScopeConfig {
            working_root: default_working_root(),
            fixtures_prefix: default_fixtures_prefix(),
            fixtures_directory: None,
        }
    }
}

impl ScopeConfig {
    /// Builds the resolution context handed to the access layer.
    pub fn to_scope(&self) -> Scope {
        let scope = Scope::new(&self.working_root, self.fixtures_prefix.clone());
        match &self.fixtures_directory {
            Some(dir) => scope.with_fixtures_directory(dir),
            None => scope,
        }
    }
}

fn default_working_root() -> String {
    "tmp/scopefs".to_string()
}
fn default_fixtures_prefix() -> String {
    "%".to_string()
}

const PROJECT_CONFIG_FILENAME: &str = ".scopefs.toml";

/// Values given on the command line or in the environment, applied last.
#[derive(Debug, Default, Clone)]
pub struct ConfigOverrides {
    pub working_root: Option<String>,
    pub fixtures_prefix: Option<String>,
    pub fixtures_directory: Option<String>,
}

/// Loads, merges, expands and validates the configuration.
pub fn load_config() -> Result<ScopeConfig> {
    load_config_with(&ConfigOverrides::default())
}

/// Like `load_config`, with `overrides` taking precedence over every file.
pub fn load_config_with(overrides: &ConfigOverrides) -> Result<ScopeConfig> {
    let user_config = load_user_config()?;
    let project_config = load_project_config()?;
    let mut merged_config = merge_configs(user_config.unwrap_or_default(), project_config);
    apply_overrides(&mut merged_config, overrides);
    expand_config_paths(&mut merged_config).context("Failed to expand paths in configuration")?;
    validate_config(&merged_config).context("Configuration validation failed")?;
    debug!("Final loaded configuration: {:?}", merged_config);
    Ok(merged_config)
}

fn load_user_config() -> Result<Option<ScopeConfig>> {
    if let Some(proj_dirs) = ProjectDirs::from("org", "scopefs", "scopefs") {
        let config_path = proj_dirs.config_dir().join("config.toml");
        if config_path.exists() {
            info!("Loading user configuration from: {}", config_path.display());
            load_config_from_path(&config_path).map(Some)
        } else {
            debug!(
                "User configuration file not found at {}",
                config_path.display()
            );
            Ok(None)
        }
    } else {
        warn!("Could not determine user config directory.");
        Ok(None)
    }
}

fn load_project_config() -> Result<Option<ScopeConfig>> {
    let current_dir = std::env::current_dir().context("Failed to get current directory")?;
    if let Some(project_config_path) = find_project_config_path(&current_dir) {
        info!(
            "Loading project configuration from: {}",
            project_config_path.display()
        );
        load_config_from_path(&project_config_path).map(Some)
    } else {
        debug!("No project configuration file (.scopefs.toml) found in current directory or ancestors.");
        Ok(None)
    }
}

fn find_project_config_path(start: &Path) -> Option<PathBuf> {
    let mut path = start;
    loop {
        let project_config = path.join(PROJECT_CONFIG_FILENAME);
        if project_config.is_file() {
            return Some(project_config);
        }
        if path.join(".git").is_dir() {
            debug!(
                "Found .git directory at {}, stopping project config search.",
                path.display()
            );
            return None;
        }
        path = path.parent()?;
    }
}

fn load_config_from_path(path: &Path) -> Result<ScopeConfig> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read configuration file: {}", path.display()))?;
    toml::from_str(&content)
        .with_context(|| format!("Failed to parse TOML from file: {}", path.display()))
}

fn merge_configs(user: ScopeConfig, project: Option<ScopeConfig>) -> ScopeConfig {
    let project_cfg = match project {
        Some(p) => p,
        None => return user,
    };
    ScopeConfig {
        working_root: if project_cfg.working_root != default_working_root() {
            project_cfg.working_root
        } else {
            user.working_root
        },
        fixtures_prefix: if project_cfg.fixtures_prefix != default_fixtures_prefix() {
            project_cfg.fixtures_prefix
        } else {
            user.fixtures_prefix
        },
        fixtures_directory: project_cfg.fixtures_directory.or(user.fixtures_directory),
    }
}

fn apply_overrides(config: &mut ScopeConfig, overrides: &ConfigOverrides) {
    if let Some(root) = &overrides.working_root {
        debug!("Working root overridden: {}", root);
        config.working_root = root.clone();
    }
    if let Some(prefix) = &overrides.fixtures_prefix {
        config.fixtures_prefix = prefix.clone();
    }
    if let Some(dir) = &overrides.fixtures_directory {
        config.fixtures_directory = Some(dir.clone());
    }
}

fn expand_config_paths(config: &mut ScopeConfig) -> Result<()> {
    debug!("Expanding paths in configuration...");
    let cwd = std::env::current_dir().context("Failed to get current directory")?;
    config.working_root = anchor(&cwd, &config.working_root);
    debug!("Expanded working root: {}", config.working_root);
    if let Some(dir) = config.fixtures_directory.as_mut() {
        *dir = anchor(&cwd, dir);
        debug!("Expanded fixtures directory: {}", dir);
    }
    Ok(())
}

/// Expands `~` and makes `raw` absolute against `base`.
fn anchor(base: &Path, raw: &str) -> String {
    let expanded = shellexpand::tilde(raw).into_owned();
    let path = Path::new(&expanded);
    if path.is_absolute() {
        expanded
    } else {
        base.join(path).to_string_lossy().into_owned()
    }
}

fn validate_config(config: &ScopeConfig) -> Result<()> {
    info!("Validating final configuration...");
    if config.fixtures_prefix.is_empty() {
        return Err(anyhow!(FilesystemError::InvalidArgument(
            "The fixtures prefix must not be empty.".to_string()
        )));
    }
    let root = PathBuf::from(&config.working_root);
    if !root.exists() {
        warn!(
            "Configured working root '{}' does not exist yet.",
            root.display()
        );
    } else if !root.is_dir() {
        return Err(anyhow!(FilesystemError::InvalidArgument(format!(
            "Configured working root '{}' exists but is not a directory.",
            root.display()
        ))));
    }
    if let Some(dir) = &config.fixtures_directory {
        if !Path::new(dir).is_dir() {
            warn!("Configured fixtures directory '{}' is not a directory.", dir);
        }
        if root.starts_with(dir) {
            return Err(anyhow!(FilesystemError::InvalidArgument(format!(
                "Working root '{}' must not lie inside the fixtures directory '{}'.",
                root.display(),
                dir
            ))));
        }
    }
    info!("Configuration validation successful.");
    Ok(())
}
