mod loader;
mod types;

pub use loader::ConfigError;
pub use types::{
    CategoryConfig, Config, DialogConfig, Easing, HostConfig, StorageConfig, TransitionConfig,
    DEFAULT_PROMPT,
};
