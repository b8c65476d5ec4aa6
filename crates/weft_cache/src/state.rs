//! The cache-enable state machine.

use tracing::debug;
use weft_config::CacheMode;

/// Heuristic cache-enable state.
///
/// Caching is off by default. It turns on the first time the host signals an
/// incremental or watch build, or — the repeat-build heuristic — at the end
/// of a completed build the machine arms itself so the *next* build starts
/// with caching on: a plugin instance that survives to build twice is
/// assumed to be rebuilding.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CacheState {
    /// Caching disabled.
    #[default]
    Off,
    /// A build completed with caching off; the next build enables it.
    PendingUpgrade,
    /// Caching enabled.
    On,
}

/// Pairs the heuristic state machine with the user's explicit cache mode.
///
/// An explicit setting always wins over the heuristics.
#[derive(Clone, Copy, Debug)]
pub struct CachePolicy {
    explicit: Option<CacheMode>,
    state: CacheState,
}

impl CachePolicy {
    /// Creates a policy; `explicit` is the user-supplied mode, if any.
    pub fn new(explicit: Option<CacheMode>) -> Self {
        Self {
            explicit,
            state: CacheState::Off,
        }
    }

    /// The host signalled an incremental or watch build.
    pub fn watch_signal(&mut self) {
        if self.state != CacheState::On {
            debug!("watch build signalled; enabling cache");
        }
        self.state = CacheState::On;
    }

    /// A new build is starting; a pending upgrade takes effect now.
    pub fn build_started(&mut self) {
        if self.state == CacheState::PendingUpgrade {
            debug!("repeat build detected; enabling cache");
            self.state = CacheState::On;
        }
    }

    /// A build completed; arm the repeat-build heuristic.
    pub fn build_finished(&mut self) {
        if self.state == CacheState::Off {
            self.state = CacheState::PendingUpgrade;
        }
    }

    /// Whether results should be cached right now.
    pub fn caching_enabled(&self) -> bool {
        match self.explicit {
            Some(CacheMode::Off) => false,
            Some(CacheMode::On | CacheMode::Aggressive) => true,
            None => self.state == CacheState::On,
        }
    }

    /// Whether end-of-build import-graph enrichment should run.
    pub fn aggressive(&self) -> bool {
        self.explicit == Some(CacheMode::Aggressive)
    }

    /// The current heuristic state.
    pub fn state(&self) -> CacheState {
        self.state
    }
}
