//! Refresh signalling between mutations and list synchronization
//!
//! The browser original toggled a boolean whose value carried no meaning —
//! only the change was observed. Modeled here as a monotonic generation
//! counter: mutation handlers bump it, consumers remember the generation
//! they last synchronized against and refetch when it moved.

use std::sync::atomic::{AtomicU64, Ordering};

/// Monotonic "resynchronize now" signal
#[derive(Debug, Default)]
pub struct RefreshSignal {
    generation: AtomicU64,
}

impl RefreshSignal {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record that dependents must resynchronize. Returns the new generation.
    pub fn notify(&self) -> u64 {
        self.generation.fetch_add(1, Ordering::SeqCst) + 1
    }

    /// The current generation
    pub fn generation(&self) -> u64 {
        self.generation.load(Ordering::SeqCst)
    }
}
