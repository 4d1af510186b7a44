//! # Audit Sink
//!
//! Outbound port for audit events. Each service emits its own event enum.

use parking_lot::RwLock;
use std::fmt::Debug;
use std::sync::Arc;
use tracing::info;

/// Receives audit events from a service.
pub trait AuditSink<E>: Send + Sync {
    /// Record one event.
    fn emit(&self, event: E);
}

impl<E, S: AuditSink<E> + ?Sized> AuditSink<E> for Arc<S> {
    fn emit(&self, event: E) {
        (**self).emit(event)
    }
}

/// Writes every event to the `audit` tracing target.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingAuditSink;

impl<E: Debug> AuditSink<E> for TracingAuditSink {
    fn emit(&self, event: E) {
        info!(target: "audit", event = ?event);
    }
}

/// Keeps events in memory for inspection.
#[derive(Debug)]
pub struct InMemoryAuditLog<E> {
    events: RwLock<Vec<E>>,
}

impl<E: Clone> InMemoryAuditLog<E> {
    /// Create an empty log.
    pub fn new() -> Self {
        Self {
            events: RwLock::new(Vec::new()),
        }
    }

    /// Copy of all recorded events, oldest first.
    pub fn events(&self) -> Vec<E> {
        self.events.read().clone()
    }

    /// Number of recorded events.
    pub fn len(&self) -> usize {
        self.events.read().len()
    }

    /// True when nothing was recorded.
    pub fn is_empty(&self) -> bool {
        self.events.read().is_empty()
    }

    /// Drop all recorded events.
    pub fn clear(&self) {
        self.events.write().clear();
    }
}

impl<E: Clone> Default for InMemoryAuditLog<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: Clone + Send + Sync> AuditSink<E> for InMemoryAuditLog<E> {
    fn emit(&self, event: E) {
        self.events.write().push(event);
    }
}
