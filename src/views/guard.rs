use std::sync::atomic::{AtomicU64, Ordering};

/// Token identifying one issued request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket(u64);

/// Stale-response guard
///
/// Every request takes a ticket when it starts. When its response arrives it
/// may only touch view state if no newer ticket was issued in the meantime and
/// the view was not invalidated.
#[derive(Debug, Default)]
pub struct RequestGuard {
    generation: AtomicU64,
}

impl RequestGuard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn issue(&self) -> Ticket {
        Ticket(self.generation.fetch_add(1, Ordering::SeqCst) + 1)
    }

    pub fn is_current(&self, ticket: Ticket) -> bool {
        self.generation.load(Ordering::SeqCst) == ticket.0
    }

    /// Make every outstanding ticket stale
    pub fn invalidate(&self) {
        self.generation.fetch_add(1, Ordering::SeqCst);
    }
}
