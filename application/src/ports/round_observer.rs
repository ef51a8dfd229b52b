//! Round lifecycle notification port
//!
//! Defines the interface for reporting round events (start, votes,
//! decision, reset) to the outside world. Implementations live in the
//! infrastructure layer (JSONL event log) and the presentation layer
//! (console reporter).
//!
//! Callbacks are invoked after the coordinator's state lock is released, so
//! an implementation may safely read status from the coordinator.

use lobby_domain::{RoundId, RoundOutcome, Vote, VoteDisposition};
use std::sync::Arc;

/// Callback for round lifecycle events
pub trait RoundObserver: Send + Sync {
    /// Called when the first vote opens a round
    fn on_round_started(&self, _round: RoundId, _first_vote: &Vote) {}

    /// Called for every vote taken into a round (including the first)
    fn on_vote_recorded(&self, _round: RoundId, _vote: &Vote, _disposition: VoteDisposition) {}

    /// Called once per round when the decision deadline has been evaluated
    fn on_round_decided(&self, _outcome: &RoundOutcome) {}

    /// Called once per round when state is cleared at the reset deadline
    fn on_round_reset(&self, _round: RoundId) {}
}

/// No-op observer for when notifications are not needed
pub struct NoRoundObserver;

impl RoundObserver for NoRoundObserver {}

/// An observer that delegates to multiple inner observers.
///
/// ```text
/// RoundCoordinator ──▶ CompositeRoundObserver
///                          ├──▶ JsonlRoundLogger      (event file)
///                          └──▶ ConsoleRoundReporter  (REPL output)
/// ```
#[derive(Default)]
pub struct CompositeRoundObserver {
    delegates: Vec<Arc<dyn RoundObserver>>,
}

impl CompositeRoundObserver {
    pub fn new(delegates: Vec<Arc<dyn RoundObserver>>) -> Self {
        Self { delegates }
    }

    pub fn push(&mut self, observer: Arc<dyn RoundObserver>) {
        self.delegates.push(observer);
    }

    pub fn is_empty(&self) -> bool {
        self.delegates.is_empty()
    }
}

/// Macro to delegate a method call to all inner observers.
macro_rules! delegate {
    ($self:ident, $method:ident $(, $arg:expr)*) => {
        for d in &$self.delegates {
            d.$method($($arg),*);
        }
    };
}

impl RoundObserver for CompositeRoundObserver {
    fn on_round_started(&self, round: RoundId, first_vote: &Vote) {
        delegate!(self, on_round_started, round, first_vote);
    }

    fn on_vote_recorded(&self, round: RoundId, vote: &Vote, disposition: VoteDisposition) {
        delegate!(self, on_vote_recorded, round, vote, disposition);
    }

    fn on_round_decided(&self, outcome: &RoundOutcome) {
        delegate!(self, on_round_decided, outcome);
    }

    fn on_round_reset(&self, round: RoundId) {
        delegate!(self, on_round_reset, round);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[derive(Default)]
    struct ResetCounter(AtomicUsize);

    impl RoundObserver for ResetCounter {
        fn on_round_reset(&self, _round: RoundId) {
            self.0.fetch_add(1, Ordering::SeqCst);
        }
    }

    #[test]
    fn test_composite_fans_out() {
        let a = Arc::new(ResetCounter::default());
        let b = Arc::new(ResetCounter::default());
        let mut composite = CompositeRoundObserver::new(vec![a.clone()]);
        composite.push(b.clone());

        composite.on_round_reset(RoundId::FIRST);
        composite.on_round_decided(&RoundOutcome::rejected(RoundId::FIRST, chrono::Utc::now()));

        assert_eq!(a.0.load(Ordering::SeqCst), 1);
        assert_eq!(b.0.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_empty_composite() {
        let composite = CompositeRoundObserver::default();
        assert!(composite.is_empty());
        composite.on_round_reset(RoundId::FIRST);
    }
}
