use std::sync::Arc;

use http::Version;

pub type Settings = Arc<ResolverSettings>;

/// Initial state for a resolver and the writers built on top of it.
#[derive(Debug, Clone)]
pub struct ResolverSettings {
    /// Whether responses should go through the shifted custom lookup.
    pub custom_rule_enabled: bool,

    /// Entries preloaded into the global overlay.
    pub global_statuses: Vec<(i32, String)>,

    /// Entries preloaded into the custom overlay.
    pub custom_statuses: Vec<(i32, String)>,

    /// The protocol version written on status lines.
    pub version: Version,
}

impl Default for ResolverSettings {
    fn default() -> Self {
        Self {
            custom_rule_enabled: false,
            global_statuses: Vec::new(),
            custom_statuses: Vec::new(),
            version: Version::HTTP_11,
        }
    }
}

impl ResolverSettings {
    pub fn with_custom_rule(mut self, enabled: bool) -> Self {
        self.custom_rule_enabled = enabled;
        self
    }

    pub fn with_global_status(mut self, code: i32, text: impl Into<String>) -> Self {
        self.global_statuses.push((code, text.into()));
        self
    }

    pub fn with_custom_status(mut self, code: i32, text: impl Into<String>) -> Self {
        self.custom_statuses.push((code, text.into()));
        self
    }

    pub fn with_version(mut self, version: Version) -> Self {
        self.version = version;
        self
    }

    /// Wraps the settings in a cheaply cloneable handle.
    pub fn build(self) -> Settings {
        Arc::new(self)
    }
}
