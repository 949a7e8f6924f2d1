// ============================================================================
// In-flight request slot — newest request wins
// ============================================================================

/// Ticket identifying one started request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestTicket {
    generation: u64,
}

/// A single in-flight request slot per data source.
///
/// The embedding host starts a request with [`begin`], performs the fetch,
/// and hands the result back with [`complete`]. Starting a newer request
/// invalidates every earlier ticket, so a stale response can never
/// overwrite a newer selection.
///
/// [`begin`]: InFlightSlot::begin
/// [`complete`]: InFlightSlot::complete
#[derive(Debug, Default)]
pub struct InFlightSlot<T> {
    generation: u64,
    latest: Option<T>,
}

impl<T> InFlightSlot<T> {
    pub fn new() -> Self {
        InFlightSlot {
            generation: 0,
            latest: None,
        }
    }

    /// Start a new request, invalidating any earlier ticket.
    pub fn begin(&mut self) -> RequestTicket {
        self.generation += 1;
        RequestTicket {
            generation: self.generation,
        }
    }

    /// Whether the ticket still belongs to the newest request.
    pub fn is_current(&self, ticket: RequestTicket) -> bool {
        ticket.generation == self.generation
    }

    /// Store a completed result. Stale tickets are rejected and their value
    /// dropped; returns whether the result was accepted.
    pub fn complete(&mut self, ticket: RequestTicket, value: T) -> bool {
        if self.is_current(ticket) {
            self.latest = Some(value);
            true
        } else {
            false
        }
    }

    /// The most recently accepted result, if any.
    pub fn latest(&self) -> Option<&T> {
        self.latest.as_ref()
    }

    /// Drop the stored result without invalidating tickets.
    pub fn clear(&mut self) {
        self.latest = None;
    }
}
