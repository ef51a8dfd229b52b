//! Append-only history of decided rounds

use super::outcome::RoundOutcome;
use std::collections::VecDeque;

/// Ordered record of round outcomes, oldest first
///
/// Entries are never modified after they are appended. When a retention
/// limit is set, appending to a full log evicts the oldest entry.
#[derive(Debug, Clone, Default)]
pub struct HistoryLog {
    entries: VecDeque<RoundOutcome>,
    limit: Option<usize>,
}

impl HistoryLog {
    /// Create an unbounded log
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a log that retains at most `limit` entries (`0` = unbounded)
    pub fn with_limit(limit: Option<usize>) -> Self {
        Self {
            entries: VecDeque::new(),
            limit: limit.filter(|l| *l > 0),
        }
    }

    /// Append an outcome, returning the evicted entry if the log was full
    pub fn append(&mut self, outcome: RoundOutcome) -> Option<RoundOutcome> {
        let evicted = match self.limit {
            Some(limit) if self.entries.len() >= limit => self.entries.pop_front(),
            _ => None,
        };
        self.entries.push_back(outcome);
        evicted
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn limit(&self) -> Option<usize> {
        self.limit
    }

    /// Most recently appended outcome
    pub fn latest(&self) -> Option<&RoundOutcome> {
        self.entries.back()
    }

    /// Entries in decision order (oldest first)
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &RoundOutcome> {
        self.entries.iter()
    }

    /// Entries for display with the newest game on top
    pub fn newest_first(&self) -> impl Iterator<Item = &RoundOutcome> {
        self.entries.iter().rev()
    }

    /// Owned copy of the entries, oldest first
    pub fn snapshot(&self) -> Vec<RoundOutcome> {
        self.entries.iter().cloned().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::round::outcome::RoundId;
    use chrono::Utc;

    fn accepted(round: u64, lobby: &str) -> RoundOutcome {
        RoundOutcome::accepted(RoundId::new(round), lobby, Utc::now())
    }

    #[test]
    fn test_append_preserves_decision_order() {
        let mut log = HistoryLog::new();
        log.append(accepted(1, "L1"));
        log.append(accepted(2, "L2"));
        log.append(accepted(3, "L3"));

        let lobbies: Vec<_> = log.iter().map(|o| o.lobby_id.clone().unwrap()).collect();
        assert_eq!(lobbies, vec!["L1", "L2", "L3"]);
        assert_eq!(log.latest().unwrap().round, RoundId::new(3));
    }

    #[test]
    fn test_newest_first_view() {
        let mut log = HistoryLog::new();
        log.append(accepted(1, "L1"));
        log.append(accepted(2, "L2"));

        let rounds: Vec<_> = log.newest_first().map(|o| o.round.value()).collect();
        assert_eq!(rounds, vec![2, 1]);
    }

    #[test]
    fn test_bounded_log_evicts_oldest() {
        let mut log = HistoryLog::with_limit(Some(2));
        assert!(log.append(accepted(1, "L1")).is_none());
        assert!(log.append(accepted(2, "L2")).is_none());

        let evicted = log.append(accepted(3, "L3")).unwrap();
        assert_eq!(evicted.round, RoundId::new(1));
        assert_eq!(log.len(), 2);

        let rounds: Vec<_> = log.iter().map(|o| o.round.value()).collect();
        assert_eq!(rounds, vec![2, 3]);
    }

    #[test]
    fn test_zero_limit_is_unbounded() {
        let mut log = HistoryLog::with_limit(Some(0));
        assert!(log.limit().is_none());
        for round in 1..=10 {
            log.append(accepted(round, "L"));
        }
        assert_eq!(log.len(), 10);
    }

    #[test]
    fn test_snapshot_is_detached() {
        let mut log = HistoryLog::new();
        log.append(accepted(1, "L1"));
        let snapshot = log.snapshot();
        log.append(accepted(2, "L2"));

        assert_eq!(snapshot.len(), 1);
        assert_eq!(log.len(), 2);
    }
}
