//! Last-wins tickets for deferred work.
//!
//! The logo glitch clear and the scroll-settle debounce both restart on every
//! trigger. The host cancels the superseded browser timer, and each callback
//! also carries a [`Ticket`]; only the most recently armed ticket may settle.
//! A stale callback that slipped past cancellation is a no-op.

#[cfg(test)]
#[path = "timer_test.rs"]
mod timer_test;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket(u64);

#[derive(Debug, Clone, Copy, Default)]
pub struct LatestWins {
    generation: u64,
    armed: bool,
}

impl LatestWins {
    /// Arm a new deferred action, superseding any pending one.
    pub fn arm(&mut self) -> Ticket {
        self.generation = self.generation.wrapping_add(1);
        self.armed = true;
        Ticket(self.generation)
    }

    /// Consume the pending action if `ticket` is still the latest.
    pub fn settle(&mut self, ticket: Ticket) -> bool {
        if self.armed && ticket.0 == self.generation {
            self.armed = false;
            return true;
        }
        false
    }

    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.armed
    }
}
