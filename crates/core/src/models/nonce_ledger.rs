use crate::prelude::*;

use std::collections::HashMap;

const FIRST_SEQUENCE: Sequence = 1;

/// Next sequence number per input address, in memory for the lifetime of
/// the run.
///
/// Allocation is synchronous and takes `&mut self`, so overlapping sends in
/// fixed-rate mode still see strictly increasing, gap-free values: the
/// envelope is built (and the sequence consumed) before the send is spawned.
#[derive(Debug, Clone, Default)]
pub struct NonceLedger {
    next: HashMap<Address, Sequence>,
}

impl NonceLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// The sequence number to use for the next transaction of `sender`,
    /// seeding unseen senders at `1`. Does not advance.
    pub fn next_sequence(&mut self, sender: &Address) -> Sequence {
        *self.next.entry(sender.clone()).or_insert(FIRST_SEQUENCE)
    }

    /// Marks the current sequence of `sender` as consumed.
    pub fn advance(&mut self, sender: &Address) {
        *self.next.entry(sender.clone()).or_insert(FIRST_SEQUENCE) += 1;
    }

    /// Returns the current sequence of `sender` and advances it in one step.
    pub fn allocate(&mut self, sender: &Address) -> Sequence {
        let sequence = self.next_sequence(sender);
        self.advance(sender);
        sequence
    }

    pub fn peek(&self, sender: &Address) -> Option<Sequence> {
        self.next.get(sender).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unseen_sender_starts_at_one() {
        let mut ledger = NonceLedger::new();
        let sender = Address::from("A");
        assert_eq!(ledger.peek(&sender), None);
        assert_eq!(ledger.next_sequence(&sender), 1);
        assert_eq!(ledger.next_sequence(&sender), 1);
        assert_eq!(ledger.peek(&sender), Some(1));
    }

    #[test]
    fn allocations_are_gap_free_and_strictly_increasing() {
        let mut ledger = NonceLedger::new();
        let sender = Address::from("A");
        let issued = (0..100).map(|_| ledger.allocate(&sender)).collect::<Vec<_>>();
        assert_eq!(issued, (1..=100).collect::<Vec<_>>());
        assert_eq!(ledger.peek(&sender), Some(101));
    }

    #[test]
    fn senders_are_tracked_independently() {
        let mut ledger = NonceLedger::new();
        let a = Address::from("A");
        let b = Address::from("B");
        assert_eq!(ledger.allocate(&a), 1);
        assert_eq!(ledger.allocate(&a), 2);
        assert_eq!(ledger.allocate(&b), 1);
        assert_eq!(ledger.allocate(&a), 3);
        assert_eq!(ledger.peek(&b), Some(2));
    }
}
