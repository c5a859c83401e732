use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

use crate::consent::CookieCategory;

/// Root configuration container.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub dialog: DialogConfig,
    #[serde(default = "default_categories")]
    pub categories: Vec<CategoryConfig>,
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub transition: TransitionConfig,
    #[serde(default)]
    pub host: HostConfig,
}

/// Text and assets shown by the dialog.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DialogConfig {
    /// Identifier the decision is recorded under (e.g. "shop-frontend").
    #[serde(default = "default_app_id")]
    pub app_id: String,
    /// Collapsed view text. Falls back to [`DEFAULT_PROMPT`].
    #[serde(default)]
    pub small_text: Option<String>,
    /// Expanded view text. Falls back to [`DEFAULT_PROMPT`].
    #[serde(default)]
    pub large_text: Option<String>,
    /// Header image reference (path or URL).
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub privacy_policy_url: Option<String>,
}

pub const DEFAULT_PROMPT: &str = "Please accept our cookie policy";

impl DialogConfig {
    pub fn collapsed_text(&self) -> &str {
        self.small_text.as_deref().unwrap_or(DEFAULT_PROMPT)
    }

    pub fn expanded_text(&self) -> &str {
        self.large_text.as_deref().unwrap_or(DEFAULT_PROMPT)
    }
}

/// One offered cookie category.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryConfig {
    pub id: String,
    pub label: String,
    #[serde(default)]
    pub description: Option<String>,
}

impl From<&CategoryConfig> for CookieCategory {
    fn from(config: &CategoryConfig) -> Self {
        let category = CookieCategory::new(config.id.clone(), config.label.clone());
        match &config.description {
            Some(description) => category.with_description(description.clone()),
            None => category,
        }
    }
}

/// Where consent records are written.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Defaults to `FileConsentStore::default_path()`.
    #[serde(default)]
    pub path: Option<PathBuf>,
}

/// Entrance animation for the rendering layer.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct TransitionConfig {
    #[serde(default = "default_transition_ms")]
    pub duration_ms: u64,
    #[serde(default)]
    pub easing: Easing,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Easing {
    Linear,
    #[default]
    EaseOut,
}

impl TransitionConfig {
    /// Progress in `[0.0, 1.0]` after `elapsed`.
    pub fn progress(&self, elapsed: Duration) -> f64 {
        if self.duration_ms == 0 {
            return 1.0;
        }
        let t = (elapsed.as_secs_f64() * 1000.0 / self.duration_ms as f64).clamp(0.0, 1.0);
        match self.easing {
            Easing::Linear => t,
            Easing::EaseOut => 1.0 - (1.0 - t).powi(3),
        }
    }
}

/// Behavior of the host application around the dialog.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct HostConfig {
    /// Unmount the dialog and exit once consent is recorded.
    #[serde(default = "default_dismiss_on_commit")]
    pub dismiss_on_commit: bool,
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,
}

impl HostConfig {
    pub fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.tick_rate_ms.max(1))
    }
}

fn default_app_id() -> String {
    "default".to_string()
}

fn default_transition_ms() -> u64 {
    400
}

fn default_dismiss_on_commit() -> bool {
    true
}

fn default_tick_rate_ms() -> u64 {
    50
}

fn default_categories() -> Vec<CategoryConfig> {
    vec![
        CategoryConfig {
            id: "necessary".to_string(),
            label: "Strictly Necessary".to_string(),
            description: Some("Required for the site to function".to_string()),
        },
        CategoryConfig {
            id: "analytics".to_string(),
            label: "Analytics".to_string(),
            description: Some("Help us understand how the site is used".to_string()),
        },
        CategoryConfig {
            id: "marketing".to_string(),
            label: "Marketing".to_string(),
            description: Some("Personalised advertising".to_string()),
        },
    ]
}

impl Default for DialogConfig {
    fn default() -> Self {
        Self {
            app_id: default_app_id(),
            small_text: None,
            large_text: None,
            image: None,
            privacy_policy_url: None,
        }
    }
}

impl Default for TransitionConfig {
    fn default() -> Self {
        Self {
            duration_ms: default_transition_ms(),
            easing: Easing::default(),
        }
    }
}

impl Default for HostConfig {
    fn default() -> Self {
        Self {
            dismiss_on_commit: default_dismiss_on_commit(),
            tick_rate_ms: default_tick_rate_ms(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            dialog: DialogConfig::default(),
            categories: default_categories(),
            storage: StorageConfig::default(),
            transition: TransitionConfig::default(),
            host: HostConfig::default(),
        }
    }
}

impl Config {
    /// Offered categories, in configured order.
    pub fn cookie_categories(&self) -> Vec<CookieCategory> {
        self.categories.iter().map(CookieCategory::from).collect()
    }
}
