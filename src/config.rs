//! Configuration handling for the auth screen

use crate::auth::{ControllerSettings, FailedResetPolicy, PolicyPreset};
use crate::gateway::SimulatedSettings;
use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Environment variable pointing at an alternative config file
const CONFIG_PATH_ENV: &str = "ALGORHYTHM_AUTH_CONFIG";

const DEFAULT_APP_NAME: &str = "AlgoRhythm";
const DEFAULT_REDIRECT_DELAY_MS: u64 = 2000;

/// User configuration; every field is optional and falls back to a default
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AuthConfig {
    /// Password rules preset ("lenient" or "strict")
    pub password_policy: Option<PolicyPreset>,
    /// Overrides the preset's minimum password length
    pub min_password_length: Option<usize>,
    /// Require the terms checkbox on registration
    pub require_terms_acceptance: Option<bool>,
    /// When a failed submission returns to idle
    pub failed_reset: Option<FailedResetPolicy>,
    /// Upper bound on a single backend call
    pub gateway_timeout_ms: Option<u64>,
    /// Simulated latency of email/password calls
    pub auth_latency_ms: Option<u64>,
    /// Simulated latency of social sign-in
    pub social_latency_ms: Option<u64>,
    /// Probability that a simulated social sign-in fails
    pub social_failure_rate: Option<f64>,
    /// Pause between the success modal and the dashboard
    pub redirect_delay_ms: Option<u64>,
    /// Product name shown in titles and messages
    pub app_name: Option<String>,
}

fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("io", "algorhythm", "algorhythm-auth")
}

impl AuthConfig {
    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        Self::resolve_path(std::env::var_os(CONFIG_PATH_ENV))
    }

    /// An explicit override wins over the platform config directory
    fn resolve_path(override_path: Option<OsString>) -> Option<PathBuf> {
        override_path
            .filter(|path| !path.is_empty())
            .map(PathBuf::from)
            .or_else(|| project_dirs().map(|dirs| dirs.config_dir().join("config.json")))
    }

    /// Directory for the log file
    pub fn data_dir() -> Option<PathBuf> {
        project_dirs().map(|dirs| dirs.data_dir().to_path_buf())
    }

    /// Load configuration from file
    pub fn load() -> Result<Self> {
        Self::load_optional(Self::config_path())
    }

    /// Defaults when there is no file; an unreadable file is an error
    fn load_optional(path: Option<PathBuf>) -> Result<Self> {
        match path {
            Some(path) if path.exists() => Self::load_from(&path),
            _ => Ok(Self::default()),
        }
    }

    fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?;
        let config: AuthConfig = serde_json::from_str(&content)
            .with_context(|| format!("parsing {}", path.display()))?;
        tracing::info!(path = %path.display(), "loaded configuration");
        Ok(config)
    }

    pub fn app_name(&self) -> String {
        self.app_name
            .clone()
            .unwrap_or_else(|| DEFAULT_APP_NAME.to_string())
    }

    pub fn redirect_delay(&self) -> Duration {
        Duration::from_millis(self.redirect_delay_ms.unwrap_or(DEFAULT_REDIRECT_DELAY_MS))
    }

    /// Rules for the submission controller
    pub fn controller_settings(&self) -> ControllerSettings {
        let mut password_policy = self.password_policy.unwrap_or_default().policy();
        if let Some(min) = self.min_password_length {
            password_policy.min_length = min;
        }

        let defaults = ControllerSettings::default();
        ControllerSettings {
            password_policy,
            require_terms_acceptance: self
                .require_terms_acceptance
                .unwrap_or(defaults.require_terms_acceptance),
            failed_reset: self.failed_reset.unwrap_or(defaults.failed_reset),
            gateway_timeout: self.gateway_timeout_ms.map(Duration::from_millis),
            app_name: self.app_name(),
        }
    }

    /// Timing for the simulated backend
    pub fn simulated_settings(&self) -> SimulatedSettings {
        let defaults = SimulatedSettings::default();
        SimulatedSettings {
            auth_latency: self
                .auth_latency_ms
                .map(Duration::from_millis)
                .unwrap_or(defaults.auth_latency),
            social_latency: self
                .social_latency_ms
                .map(Duration::from_millis)
                .unwrap_or(defaults.social_latency),
            social_failure_rate: self
                .social_failure_rate
                .unwrap_or(defaults.social_failure_rate),
        }
    }
}
