//! Extension registration against an append-only host
//!
//! The host offers no way to unregister an extension, so everything here
//! only ever grows:
//! 1. `parse_extensions` turns a raw comma-delimited list into tokens
//! 2. `ExtensionRegistry::reconcile` hands the host only the tokens it has
//!    never seen, in one batch
//! 3. `RegisteredSet` remembers what the host accepted for the life of the
//!    process

mod reconciler;
mod registered;
mod registrar;
mod tokens;

pub use reconciler::{ExtensionRegistry, MARKDOWN_KIND};
pub use registered::RegisteredSet;
pub use registrar::{HostRegistrar, JournalRegistrar, RecordingRegistrar, RegistrationBatch};
pub use tokens::parse_extensions;
