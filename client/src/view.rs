//! Stale-response guard for superseded views
//!
//! There is no request cancellation: a fetch started for a view that has
//! since been replaced still resolves. Without a guard, that late result
//! would overwrite newer state. Callers take a [`ViewToken`] before
//! starting a fetch and check [`ViewToken::is_current`] when it resolves;
//! a stale token means the result belongs to a superseded view and must
//! be discarded.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

/// Tracks which view generation is current.
#[derive(Debug, Clone, Default)]
pub struct ViewGuard {
    current: Arc<AtomicU64>,
}

impl ViewGuard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new view, invalidating every previously issued token.
    pub fn begin(&self) -> ViewToken {
        let id = self.current.fetch_add(1, Ordering::Relaxed) + 1;
        ViewToken {
            id,
            current: Arc::clone(&self.current),
        }
    }
}

/// Identity of one fetch sequence. Cheap to clone and safe to move into
/// spawned tasks.
#[derive(Debug, Clone)]
pub struct ViewToken {
    id: u64,
    current: Arc<AtomicU64>,
}

impl ViewToken {
    /// True while no newer view has been started.
    pub fn is_current(&self) -> bool {
        self.current.load(Ordering::Relaxed) == self.id
    }
}
