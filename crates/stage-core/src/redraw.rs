//! Repaint request hook.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Asks the rendering collaborator to repaint.
///
/// Assumed idempotent and coalescing: several requests within one frame
/// collapse to a single redraw on the host side.
pub trait RedrawRequester: Send + Sync {
    fn request_update(&mut self);
}

/// Requester that does nothing. Default for headless stages.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullRedraw;

impl RedrawRequester for NullRedraw {
    fn request_update(&mut self) {}
}

/// Requester that counts calls through a shared handle.
///
/// Lets a host (or a test) verify that every resumption asked for exactly
/// one repaint.
#[derive(Clone, Debug, Default)]
pub struct RedrawCounter {
    count: Arc<AtomicUsize>,
}

impl RedrawCounter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Shared handle observing the same counter.
    pub fn handle(&self) -> Arc<AtomicUsize> {
        Arc::clone(&self.count)
    }

    pub fn count(&self) -> usize {
        self.count.load(Ordering::Relaxed)
    }
}

impl RedrawRequester for RedrawCounter {
    fn request_update(&mut self) {
        self.count.fetch_add(1, Ordering::Relaxed);
    }
}
