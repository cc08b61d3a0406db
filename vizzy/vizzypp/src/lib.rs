//! Vizzy++ - extra expressions and instructions for the Vizzy block language.
//!
//! The host calls `Extension::bootstrap` once at startup. Bootstrapping
//! registers every extension node with the host's `NodeRegistry` and
//! prepares the bundled toolbox, which is merged into the host palette when
//! the program editor loads (`Extension::on_user_interface_loading`).
//!
//! `Extension::is_required_for_craft` tells the host whether a saved craft
//! has flight programs that need the extension to load.
//!
//! # Tracing
//!
//! Set `RUST_LOG` (or `VIZZYPP_LOG`) to enable log output:
//!
//! ```bash
//! VIZZYPP_LOG=vizzy_eval=debug,vizzypp=info host-game
//! ```

mod bootstrap;
mod config;
mod craft;
mod nodes;
mod resources;

use std::sync::Once;

use tracing_subscriber::filter::ParseError;
use tracing_subscriber::EnvFilter;

pub use bootstrap::{Extension, VIZZY_INTERFACE_ID};
pub use config::{ExtensionConfig, DEFAULT_MAX_CALL_DEPTH};
pub use craft::{Assembly, CraftData, FlightProgramData, PartData};
pub use nodes::{extension_nodes, register_extension_nodes};
pub use resources::{BundledResources, TOOLBOX_RESOURCE};

static TRACING_INIT: Once = Once::new();

/// Filter used when configured directives cannot be parsed and `RUST_LOG`
/// is unset.
pub const DEFAULT_LOG_FILTER: &str = "warn";

/// Install a global tracing subscriber.
///
/// Uses the configured filter, falling back to `RUST_LOG`. Does nothing
/// when neither is set or a subscriber is already installed. Only the
/// first call has any effect.
pub fn init_tracing(config: &ExtensionConfig) {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*};

        let (filter, rejected) = match config.log_filter.as_deref() {
            Some(directives) => {
                let (filter, err) = configured_filter(directives);
                (Some(filter), err.map(|err| (directives, err)))
            }
            None if std::env::var("RUST_LOG").is_ok() => {
                (Some(EnvFilter::from_default_env()), None)
            }
            None => (None, None),
        };
        if let Some(filter) = filter {
            // Another subscriber may already own the global slot.
            let _ = tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_level(true))
                .with(filter)
                .try_init();
        }
        if let Some((directives, err)) = rejected {
            tracing::warn!(directives, %err, "invalid log filter, using the default");
        }
    });
}

/// Parse configured directives. Invalid ones fall back to `RUST_LOG`, then
/// to [`DEFAULT_LOG_FILTER`], and return the parse error.
fn configured_filter(directives: &str) -> (EnvFilter, Option<ParseError>) {
    match EnvFilter::try_new(directives) {
        Ok(filter) => (filter, None),
        Err(err) => {
            let fallback = EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
            (fallback, Some(err))
        }
    }
}
