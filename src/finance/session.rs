use std::sync::atomic::{AtomicU64, Ordering};

use tracing::debug;

/// Last-request-wins guard for asynchronous finance retrievals.
///
/// The core pipeline is synchronous; only the finance fetch runs off the
/// interactive thread. Each retrieval takes a ticket, and issuing a new
/// ticket invalidates every prior one, so a late result for a superseded
/// person or reference date is dropped instead of overwriting fresh state.
#[derive(Debug, Default)]
pub struct RequestSession {
    current: AtomicU64,
}

/// Token identifying one in-flight retrieval.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestTicket {
    generation: u64,
}

impl RequestSession {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a new retrieval, invalidating all previously issued tickets.
    pub fn begin(&self) -> RequestTicket {
        let generation = self.current.fetch_add(1, Ordering::SeqCst) + 1;
        RequestTicket { generation }
    }

    #[must_use]
    pub fn is_current(&self, ticket: RequestTicket) -> bool {
        self.current.load(Ordering::SeqCst) == ticket.generation
    }

    /// Passes `value` through only when the ticket is still the latest.
    pub fn accept<T>(&self, ticket: RequestTicket, value: T) -> Option<T> {
        if self.is_current(ticket) {
            Some(value)
        } else {
            debug!(generation = ticket.generation, "stale finance result discarded");
            None
        }
    }
}
