//! Reconciliation of a desired extension list against the host

use crate::registry::{parse_extensions, HostRegistrar, RegisteredSet};
use crate::types::Result;
use tracing::{debug, info};

/// View type extensions are registered as unless told otherwise.
pub const MARKDOWN_KIND: &str = "markdown";

/// Applies extension lists to a host, registering each extension once.
pub struct ExtensionRegistry<R> {
    /// Host registration surface
    registrar: R,

    /// View type every extension is bound to
    kind: String,

    /// Everything the host has accepted so far
    registered: RegisteredSet,
}

impl<R: HostRegistrar> ExtensionRegistry<R> {
    pub fn new(registrar: R) -> Self {
        Self::with_kind(registrar, MARKDOWN_KIND)
    }

    pub fn with_kind(registrar: R, kind: impl Into<String>) -> Self {
        Self {
            registrar,
            kind: kind.into(),
            registered: RegisteredSet::new(),
        }
    }

    /// Register the extensions in `raw` the host does not have yet.
    ///
    /// The new extensions go to the host in a single batch and are returned
    /// in ascending order. Extensions missing from `raw` but registered
    /// earlier stay registered. If the host fails, nothing is recorded and
    /// the same call can be retried.
    pub async fn reconcile(&mut self, raw: &str) -> Result<Vec<String>> {
        let desired = parse_extensions(raw);
        let delta = self.registered.missing_from(&desired);
        debug!(
            "Reconciling {} desired extension(s), {} new",
            desired.len(),
            delta.len()
        );

        if delta.is_empty() {
            return Ok(Vec::new());
        }

        self.registrar.register(&delta, &self.kind).await?;
        self.registered.commit(&delta);

        let delta: Vec<String> = delta.into_iter().collect();
        info!(
            "Registered new extensions as {}: [{}]. All registered: [{}]",
            self.kind,
            delta.join(", "),
            self.registered.pretty()
        );

        Ok(delta)
    }

    /// Registered extensions, sorted and joined with `", "`.
    pub fn registered_pretty(&self) -> String {
        self.registered.pretty()
    }

    pub fn registered(&self) -> &RegisteredSet {
        &self.registered
    }

    pub fn registrar(&self) -> &R {
        &self.registrar
    }

    pub fn registrar_mut(&mut self) -> &mut R {
        &mut self.registrar
    }

    pub fn kind(&self) -> &str {
        &self.kind
    }
}
