//! Debounce
//!
//! Generation counter behind the search box. Every keystroke arms a new
//! generation; a delayed task only acts if its generation is still current.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DebounceGate {
    generation: u64,
}

impl DebounceGate {
    /// Start a new generation, invalidating all earlier tickets
    pub fn arm(&mut self) -> u64 {
        self.generation += 1;
        self.generation
    }

    pub fn is_current(&self, ticket: u64) -> bool {
        self.generation == ticket
    }
}

pub fn arm(gate: StoredValue<DebounceGate>) -> u64 {
    let mut ticket = 0;
    gate.update_value(|g| ticket = g.arm());
    ticket
}

/// Arm `gate` and wait `delay_ms`. Returns the ticket if nothing re-armed it meanwhile.
pub async fn settle(gate: StoredValue<DebounceGate>, delay_ms: u32) -> Option<u64> {
    let ticket = arm(gate);
    TimeoutFuture::new(delay_ms).await;
    still_current(gate, ticket).then_some(ticket)
}

pub fn still_current(gate: StoredValue<DebounceGate>, ticket: u64) -> bool {
    gate.with_value(|g| g.is_current(ticket))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_latest_ticket_is_current() {
        let mut gate = DebounceGate::default();
        let first = gate.arm();
        let second = gate.arm();
        assert!(!gate.is_current(first));
        assert!(gate.is_current(second));
    }

    /// Keystrokes that re-arm before the delay leave only the final query current
    #[test]
    fn test_burst_leaves_only_final_query_current() {
        let owner = Owner::new();
        owner.with(|| {
            let gate = StoredValue::new(DebounceGate::default());
            let tickets: Vec<(u64, &str)> =
                ["w", "wa", "wal", "wall"].into_iter().map(|q| (arm(gate), q)).collect();

            let fired: Vec<&str> = tickets
                .iter()
                .filter(|(ticket, _)| still_current(gate, *ticket))
                .map(|(_, q)| *q)
                .collect();
            assert_eq!(fired, vec!["wall"]);

            // a later keystroke fences the response of the previous search
            let (last, _) = tickets[3];
            let next = arm(gate);
            assert!(!still_current(gate, last));
            assert!(still_current(gate, next));
        });
    }
}
