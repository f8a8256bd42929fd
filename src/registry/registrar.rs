//! Host registration surface
//!
//! A `HostRegistrar` binds file extensions to a view type inside the host.
//! Registration is irreversible, and the host makes no promise about what
//! happens when the same extension is registered twice.

use crate::types::RegistrationError;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use tokio::io::{AsyncWrite, AsyncWriteExt};
use tracing::debug;

#[async_trait]
pub trait HostRegistrar: Send {
    /// Bind every extension in `extensions` to the `kind` view.
    ///
    /// Must not return until the host has applied the batch.
    async fn register(
        &mut self,
        extensions: &BTreeSet<String>,
        kind: &str,
    ) -> Result<(), RegistrationError>;
}

/// One accepted `register` call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistrationBatch {
    pub kind: String,
    pub extensions: Vec<String>,
}

/// In-memory host that keeps every batch it accepted.
///
/// Any extension handed over a second time is rejected with
/// `RegistrationError::AlreadyRegistered`.
#[derive(Debug, Default)]
pub struct RecordingRegistrar {
    batches: Vec<RegistrationBatch>,
    seen: BTreeSet<String>,
    fail_next: Option<String>,
}

impl RecordingRegistrar {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make the next `register` call fail with `reason`.
    pub fn fail_next(&mut self, reason: impl Into<String>) {
        self.fail_next = Some(reason.into());
    }

    pub fn batches(&self) -> &[RegistrationBatch] {
        &self.batches
    }

    pub fn call_count(&self) -> usize {
        self.batches.len()
    }

    /// Every extension accepted so far, ascending.
    pub fn extensions(&self) -> impl Iterator<Item = &str> {
        self.seen.iter().map(String::as_str)
    }
}

#[async_trait]
impl HostRegistrar for RecordingRegistrar {
    async fn register(
        &mut self,
        extensions: &BTreeSet<String>,
        kind: &str,
    ) -> Result<(), RegistrationError> {
        if let Some(reason) = self.fail_next.take() {
            return Err(RegistrationError::Rejected {
                kind: kind.to_string(),
                reason,
            });
        }

        if let Some(duplicate) = extensions.iter().find(|e| self.seen.contains(*e)) {
            return Err(RegistrationError::AlreadyRegistered(duplicate.clone()));
        }

        self.seen.extend(extensions.iter().cloned());
        self.batches.push(RegistrationBatch {
            kind: kind.to_string(),
            extensions: extensions.iter().cloned().collect(),
        });

        Ok(())
    }
}

/// Host that writes each batch as one line of JSON to a writer.
pub struct JournalRegistrar<W> {
    writer: W,

    /// A failed write may have left a partial record without its newline
    dirty: bool,
}

impl<W> JournalRegistrar<W>
where
    W: AsyncWrite + Unpin + Send,
{
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            dirty: false,
        }
    }

    pub fn get_ref(&self) -> &W {
        &self.writer
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl JournalRegistrar<tokio::io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(tokio::io::stdout())
    }
}

#[async_trait]
impl<W> HostRegistrar for JournalRegistrar<W>
where
    W: AsyncWrite + Unpin + Send,
{
    async fn register(
        &mut self,
        extensions: &BTreeSet<String>,
        kind: &str,
    ) -> Result<(), RegistrationError> {
        let batch = RegistrationBatch {
            kind: kind.to_string(),
            extensions: extensions.iter().cloned().collect(),
        };

        let rejected = |reason: String| RegistrationError::Rejected {
            kind: kind.to_string(),
            reason,
        };

        let mut line = Vec::new();
        if self.dirty {
            // Terminate the fragment so this record starts on its own line
            line.push(b'\n');
        }
        serde_json::to_writer(&mut line, &batch).map_err(|e| rejected(e.to_string()))?;
        line.push(b'\n');

        let written = match self.writer.write_all(&line).await {
            Ok(()) => self.writer.flush().await,
            Err(e) => Err(e),
        };
        if let Err(e) = written {
            self.dirty = true;
            return Err(rejected(e.to_string()));
        }
        self.dirty = false;

        debug!("Journaled {} extension(s) as {}", batch.extensions.len(), kind);
        Ok(())
    }
}
