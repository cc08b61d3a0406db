//! Extension configuration.

use tracing::warn;

use crate::TOOLBOX_RESOURCE;

/// Default nesting limit for a program thread's call stack.
pub const DEFAULT_MAX_CALL_DEPTH: usize = 1024;

const ENV_LOG: &str = "VIZZYPP_LOG";
const ENV_TOOLBOX_RESOURCE: &str = "VIZZYPP_TOOLBOX_RESOURCE";
const ENV_MAX_CALL_DEPTH: &str = "VIZZYPP_MAX_CALL_DEPTH";

/// Settings read once at bootstrap.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExtensionConfig {
    /// Resource name of the extension toolbox.
    pub toolbox_resource: String,
    /// `EnvFilter` directives. `None` defers to `RUST_LOG`.
    pub log_filter: Option<String>,
    /// Call stack limit per thread. `None` is unlimited.
    pub max_call_depth: Option<usize>,
}

impl Default for ExtensionConfig {
    fn default() -> Self {
        ExtensionConfig {
            toolbox_resource: TOOLBOX_RESOURCE.to_string(),
            log_filter: None,
            max_call_depth: Some(DEFAULT_MAX_CALL_DEPTH),
        }
    }
}

impl ExtensionConfig {
    /// Defaults overridden by `VIZZYPP_LOG`, `VIZZYPP_TOOLBOX_RESOURCE` and
    /// `VIZZYPP_MAX_CALL_DEPTH`.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Like `from_env`, reading variables through `lookup`.
    ///
    /// A call depth of `0` means unlimited; an unparsable one is ignored.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = ExtensionConfig::default();
        if let Some(filter) = lookup(ENV_LOG).filter(|f| !f.trim().is_empty()) {
            config.log_filter = Some(filter);
        }
        if let Some(resource) = lookup(ENV_TOOLBOX_RESOURCE).filter(|r| !r.trim().is_empty()) {
            config.toolbox_resource = resource;
        }
        if let Some(depth) = lookup(ENV_MAX_CALL_DEPTH) {
            match depth.trim().parse::<usize>() {
                Ok(0) => config.max_call_depth = None,
                Ok(n) => config.max_call_depth = Some(n),
                Err(err) => warn!(
                    variable = ENV_MAX_CALL_DEPTH,
                    value = depth.as_str(),
                    %err,
                    "ignoring malformed call depth"
                ),
            }
        }
        config
    }

    #[must_use]
    pub fn with_toolbox_resource(mut self, resource: impl Into<String>) -> Self {
        self.toolbox_resource = resource.into();
        self
    }

    #[must_use]
    pub fn with_log_filter(mut self, filter: impl Into<String>) -> Self {
        self.log_filter = Some(filter.into());
        self
    }

    #[must_use]
    pub fn with_max_call_depth(mut self, max_call_depth: Option<usize>) -> Self {
        self.max_call_depth = max_call_depth;
        self
    }
}
