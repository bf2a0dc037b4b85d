//! Request ordering for overlapping renders
//!
//! Every render takes a ticket when it starts. A finished render is shown
//! only if its ticket is newer than the one currently displayed, so a slow
//! stale render can never replace a newer result. Failed renders leave the
//! display untouched.

use crate::io::error::Result;
use crate::pipeline::render::{RenderRequest, Rendered, render};
use crate::raster::surface::RasterBuffer;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// Position of a render in request order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RenderTicket(u64);

impl RenderTicket {
    /// Sequence number, starting at 1
    pub const fn get(self) -> u64 {
        self.0
    }
}

/// What happened to a submitted result
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Submission {
    /// Result is now displayed
    Applied,
    /// A newer result was already displayed; this one was dropped
    Stale,
}

#[derive(Default)]
struct DisplaySlot {
    ticket: Option<RenderTicket>,
    frame: Option<Arc<Rendered>>,
}

/// Issues tickets and holds the most recent displayed render
#[derive(Default)]
pub struct RenderSequencer {
    issued: AtomicU64,
    slot: Mutex<DisplaySlot>,
}

impl RenderSequencer {
    /// Create a sequencer with nothing displayed
    pub fn new() -> Self {
        Self::default()
    }

    /// Reserve the next position in request order
    pub fn issue(&self) -> RenderTicket {
        RenderTicket(self.issued.fetch_add(1, Ordering::SeqCst) + 1)
    }

    /// Offer a finished render for display
    pub fn submit(&self, ticket: RenderTicket, rendered: Rendered) -> Submission {
        let mut slot = self.lock_slot();
        if slot.ticket.is_some_and(|shown| shown >= ticket) {
            log::warn!("Dropping stale render #{}", ticket.get());
            return Submission::Stale;
        }

        slot.ticket = Some(ticket);
        slot.frame = Some(Arc::new(rendered));
        Submission::Applied
    }

    /// Currently displayed render, if any
    pub fn displayed(&self) -> Option<Arc<Rendered>> {
        self.lock_slot().frame.clone()
    }

    /// Ticket of the currently displayed render, if any
    pub fn displayed_ticket(&self) -> Option<RenderTicket> {
        self.lock_slot().ticket
    }

    /// Take a ticket, render, and submit the result
    ///
    /// # Errors
    ///
    /// Propagates render failures; the displayed render is kept
    pub fn render(&self, source: &RasterBuffer, request: &RenderRequest) -> Result<Submission> {
        let ticket = self.issue();
        let rendered = render(source, request)?;
        Ok(self.submit(ticket, rendered))
    }

    // The slot holds plain data, so a panic elsewhere cannot leave it torn
    fn lock_slot(&self) -> MutexGuard<'_, DisplaySlot> {
        self.slot.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
