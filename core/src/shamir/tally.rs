use std::collections::HashMap;

use num_bigint::BigUint;

/// Vote counts per candidate secret, preserving first-seen order.
pub(super) struct VoteTally {
    entries: Vec<(BigUint, usize)>,
    slots: HashMap<BigUint, usize>,
}

impl VoteTally {
    pub(super) fn new() -> Self {
        VoteTally {
            entries: Vec::new(),
            slots: HashMap::new(),
        }
    }

    pub(super) fn record(&mut self, candidate: BigUint) {
        match self.slots.get(&candidate) {
            Some(&slot) => self.entries[slot].1 += 1,
            None => {
                self.slots.insert(candidate.clone(), self.entries.len());
                self.entries.push((candidate, 1));
            }
        }
    }

    /// The candidate with the strictly highest count. A tie keeps the
    /// candidate recorded first; an empty tally has no winner.
    pub(super) fn into_winner(self) -> Option<BigUint> {
        let mut winner: Option<(BigUint, usize)> = None;
        for (candidate, votes) in self.entries {
            match &winner {
                Some((_, best)) if votes <= *best => {}
                _ => winner = Some((candidate, votes)),
            }
        }
        winner.map(|(candidate, _)| candidate)
    }
}
