//! Data-changed listener trait and registry.
//!
//! The wallet pushes a best-effort notification whenever wallet or token
//! data changes on the platform side. This module provides the
//! subscription surface:
//!
//! - [`DataChangedListener`] - The callback trait; invoked zero or more
//!   times per registration, with no ordering guarantee relative to
//!   in-flight operations
//! - [`ListenerRegistry`] - Holds the live registrations; shared between
//!   the caller-facing plugin and the native event source
//!
//! # Teardown
//!
//! Registration returns a [`ListenerHandle`], but teardown is deliberately
//! coarse: [`ListenerRegistry::remove_all`] is the only teardown primitive
//! and clears every live registration regardless of handle identity.
//! Handles remain valid but inert afterwards. This mirrors the bridge
//! contract, which exposes a global `removeAllListeners` and nothing
//! per-handle.

use std::fmt::{self, Debug};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, PoisonError};

/// The single event name the plugin emits.
pub const DATA_CHANGED_EVENT: &str = "registerDataChangedListener";

/// Events a listener can subscribe to.
///
/// The bridge exposes exactly one event; the enum keeps the
/// registration call shape uniform with the native surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PluginEvent {
    /// Wallet or token data changed on the platform side.
    DataChanged,
}

impl PluginEvent {
    /// Returns the wire event name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::DataChanged => DATA_CHANGED_EVENT,
        }
    }
}

/// Notification payload delivered to data-changed listeners.
///
/// The platform attaches no structured payload today; the type exists so
/// the callback signature survives one being added.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DataChangedEvent;

/// Callback invoked when wallet or token data changes.
///
/// A registration may see an unbounded number of notifications over the
/// process lifetime. Delivery is best-effort: a notification can race an
/// in-flight operation and observe either token set.
pub trait DataChangedListener: Send + Sync {
    /// Called once per emitted data-change notification.
    fn on_data_changed(&self, event: &DataChangedEvent);
}

impl<F> DataChangedListener for F
where
    F: Fn(&DataChangedEvent) + Send + Sync,
{
    fn on_data_changed(&self, event: &DataChangedEvent) {
        self(event);
    }
}

/// Opaque identifier for one listener registration.
///
/// There is no per-handle removal; the handle only identifies the
/// registration (registering the same listener twice yields two handles
/// and two deliveries per event).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerHandle(u64);

impl ListenerHandle {
    /// Returns the numeric registration id.
    #[must_use]
    pub const fn id(self) -> u64 {
        self.0
    }
}

type Listeners = Vec<(ListenerHandle, Arc<dyn DataChangedListener>)>;

/// Registry of live data-changed registrations.
///
/// Shared via [`Arc`] between the plugin implementation (which emits) and
/// callers (which register). All methods take `&self`; the registry is
/// safe to use from concurrent callers.
#[derive(Default)]
pub struct ListenerRegistry {
    listeners: Mutex<Listeners>,
    next_id: AtomicU64,
}

impl Debug for ListenerRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ListenerRegistry")
            .field("listeners", &self.len())
            .finish_non_exhaustive()
    }
}

impl ListenerRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a listener and returns its handle.
    pub fn add(&self, listener: Arc<dyn DataChangedListener>) -> ListenerHandle {
        let handle = ListenerHandle(self.next_id.fetch_add(1, Ordering::Relaxed));
        self.lock().push((handle, listener));
        #[cfg(feature = "telemetry")]
        tracing::debug!(handle = handle.id(), "data-changed listener registered");
        handle
    }

    /// Removes every live registration.
    ///
    /// Global by contract: there is no per-handle removal. Previously
    /// issued handles stay valid but inert.
    pub fn remove_all(&self) {
        let removed = {
            let mut listeners = self.lock();
            let removed = listeners.len();
            listeners.clear();
            removed
        };
        #[cfg(feature = "telemetry")]
        tracing::debug!(removed, "all data-changed listeners removed");
        #[cfg(not(feature = "telemetry"))]
        let _ = removed;
    }

    /// Delivers an event to every live listener, in registration order.
    pub fn emit(&self, event: &DataChangedEvent) {
        let listeners: Vec<Arc<dyn DataChangedListener>> = self
            .lock()
            .iter()
            .map(|(_, listener)| Arc::clone(listener))
            .collect();
        #[cfg(feature = "telemetry")]
        tracing::debug!(listeners = listeners.len(), "emitting data-changed event");
        for listener in listeners {
            listener.on_data_changed(event);
        }
    }

    /// Returns the number of live registrations.
    #[must_use]
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    /// Returns `true` when no registration is live.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Listeners> {
        self.listeners
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }
}
