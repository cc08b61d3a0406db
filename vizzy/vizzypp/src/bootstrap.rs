//! The extension object the host holds for its lifetime.

use std::fmt;

use tracing::{debug, info, warn};
use vizzy_eval::{CraftContext, Program, ThreadContext};
use vizzy_registry::{ProgramSerializer, SerializeError, SharedMutableRegistry};
use vizzy_scan::program_uses_extension;
use vizzy_toolbox::{merge_toolbox, LazyToolbox, MergeReport, ResourceDatabase, Toolbox};

use crate::{init_tracing, register_extension_nodes, BundledResources, CraftData, ExtensionConfig};

/// Interface id of the program editor.
pub const VIZZY_INTERFACE_ID: &str = "Vizzy";

/// The installed extension.
pub struct Extension {
    config: ExtensionConfig,
    registry: SharedMutableRegistry,
    resources: Box<dyn ResourceDatabase>,
    toolbox: LazyToolbox,
}

impl Extension {
    /// Install the extension into `registry`.
    ///
    /// Extension tags replace any creator already registered under the same
    /// name; the registry logs each replacement.
    #[tracing::instrument(level = "debug", skip_all)]
    pub fn bootstrap(
        config: ExtensionConfig,
        registry: impl Into<SharedMutableRegistry>,
        resources: impl ResourceDatabase + 'static,
    ) -> Self {
        init_tracing(&config);

        let registry: SharedMutableRegistry = registry.into();
        register_extension_nodes(&mut registry.write());

        info!(
            toolbox = config.toolbox_resource.as_str(),
            max_call_depth = ?config.max_call_depth,
            "extension installed"
        );
        Extension {
            toolbox: LazyToolbox::new(config.toolbox_resource.as_str()),
            config,
            registry,
            resources: Box::new(resources),
        }
    }

    /// Install with configuration from the environment and bundled resources.
    pub fn bootstrap_from_env(registry: impl Into<SharedMutableRegistry>) -> Self {
        Extension::bootstrap(ExtensionConfig::from_env(), registry, BundledResources)
    }

    pub fn config(&self) -> &ExtensionConfig {
        &self.config
    }

    pub fn registry(&self) -> &SharedMutableRegistry {
        &self.registry
    }

    /// The extension toolbox, loaded on first use.
    pub fn toolbox(&self) -> Option<&Toolbox> {
        self.toolbox.get(self.resources.as_ref())
    }

    /// Hook for the host's interface-loading event.
    ///
    /// Merges the extension toolbox into `host_toolbox` when the program
    /// editor loads. Returns `None` when nothing was merged.
    pub fn on_user_interface_loading(
        &self,
        interface_id: &str,
        host_toolbox: Option<&mut Toolbox>,
    ) -> Option<MergeReport> {
        if interface_id != VIZZY_INTERFACE_ID {
            return None;
        }
        let Some(extension) = self.toolbox() else {
            info!("extension toolbox unavailable, skipping merge");
            return None;
        };
        let Some(host) = host_toolbox else {
            info!("host toolbox is not loaded yet, skipping merge");
            return None;
        };
        Some(merge_toolbox(host, extension))
    }

    /// A thread context honoring the configured call depth.
    pub fn thread_context<'a>(
        &self,
        program: &'a Program,
        craft: &'a dyn CraftContext,
    ) -> ThreadContext<'a> {
        ThreadContext::new(program, craft).with_max_call_depth(self.config.max_call_depth)
    }

    /// Read program text with the shared registry.
    pub fn deserialize_program(&self, text: &str) -> Result<Program, SerializeError> {
        let registry = self.registry.read();
        ProgramSerializer::new(&registry).deserialize_str(text)
    }

    /// Write a program with the shared registry.
    pub fn serialize_program(&self, program: &Program) -> Result<String, SerializeError> {
        let registry = self.registry.read();
        ProgramSerializer::new(&registry).serialize_to_string(program)
    }

    /// Whether any flight program on `craft` uses an extension node.
    ///
    /// Programs only available as text are read on demand; one that cannot
    /// be read counts as not using the extension.
    #[tracing::instrument(level = "debug", skip_all, fields(craft = craft.name.as_str()))]
    pub fn is_required_for_craft(&self, craft: &CraftData) -> bool {
        let Some(assembly) = &craft.assembly else {
            warn!("craft has no assembly, cannot check for extension usage");
            return false;
        };

        for part in &assembly.parts {
            let Some(data) = &part.flight_program else {
                continue;
            };
            let parsed;
            let program = match &data.program {
                Some(program) => program,
                None => match self.deserialize_program(&data.program_xml) {
                    Ok(program) => {
                        parsed = program;
                        &parsed
                    }
                    Err(err) => {
                        warn!(part = part.name.as_str(), %err, "flight program could not be read");
                        continue;
                    }
                },
            };

            if program_uses_extension(program) {
                info!(part = part.name.as_str(), "flight program uses the extension");
                return true;
            }
            debug!(part = part.name.as_str(), "flight program does not use the extension");
        }
        false
    }
}

impl fmt::Debug for Extension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Extension")
            .field("config", &self.config)
            .field("toolbox_loaded", &self.toolbox.is_loaded())
            .finish_non_exhaustive()
    }
}
