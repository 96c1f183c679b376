//! Generation session state
//!
//! A session owns the current field list and the busy flag. Every
//! submission takes a [`Ticket`] carrying a sequence number; only the
//! completion of the most recent ticket is applied, once. Completions of
//! superseded tickets are reported as [`Applied::Stale`] and change nothing.

use crate::error::GenerationError;
use crate::field::FormFieldList;
use crate::render::{render_form, RenderedForm};

/// Trigger label while a request is outstanding
pub const BUSY_LABEL: &str = "Generating...";
/// Trigger label otherwise
pub const IDLE_LABEL: &str = "Generate Form";

/// Sequence number handed out by [`FormSession::begin`]
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Ticket(u64);

impl Ticket {
    pub fn sequence(&self) -> u64 {
        self.0
    }
}

/// Where the session is in its lifecycle
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Submitting,
    Rendered,
    ErrorNotice,
}

/// User-visible notice raised by a failed generation
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub message: &'static str,
    pub error: GenerationError,
}

impl From<GenerationError> for Notice {
    fn from(error: GenerationError) -> Self {
        Self {
            message: error.user_message(),
            error,
        }
    }
}

/// Outcome of [`FormSession::complete`]
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Applied {
    /// The field list was replaced
    Rendered,
    /// The request failed; the field list was kept
    Notice(Notice),
    /// A newer submission exists; the result was dropped
    Stale,
}

#[derive(Clone, Debug)]
pub struct FormSession {
    fields: FormFieldList,
    phase: Phase,
    notice: Option<Notice>,
    next_sequence: u64,
    latest: Option<Ticket>,
    busy: bool,
}

impl Default for FormSession {
    fn default() -> Self {
        Self::new()
    }
}

impl FormSession {
    pub fn new() -> Self {
        Self {
            fields: FormFieldList::default(),
            phase: Phase::Idle,
            notice: None,
            next_sequence: 0,
            latest: None,
            busy: false,
        }
    }

    /// Start a submission. The prompt itself is not inspected.
    pub fn begin(&mut self) -> Ticket {
        let ticket = Ticket(self.next_sequence);
        self.next_sequence += 1;
        self.latest = Some(ticket);
        self.busy = true;
        self.phase = Phase::Submitting;
        self.notice = None;
        ticket
    }

    /// Apply the result of the request started with `ticket`
    pub fn complete(
        &mut self,
        ticket: Ticket,
        result: Result<FormFieldList, GenerationError>,
    ) -> Applied {
        if self.latest != Some(ticket) {
            return Applied::Stale;
        }

        // A ticket is applied at most once
        self.latest = None;
        self.busy = false;
        match result {
            Ok(fields) => {
                self.fields = fields;
                self.phase = Phase::Rendered;
                Applied::Rendered
            }
            Err(error) => {
                let notice = Notice::from(error);
                self.notice = Some(notice.clone());
                self.phase = Phase::ErrorNotice;
                Applied::Notice(notice)
            }
        }
    }

    /// True while the most recent submission is outstanding
    pub fn is_busy(&self) -> bool {
        self.busy
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn button_label(&self) -> &'static str {
        if self.busy {
            BUSY_LABEL
        } else {
            IDLE_LABEL
        }
    }

    pub fn fields(&self) -> &FormFieldList {
        &self.fields
    }

    pub fn rendered(&self) -> RenderedForm {
        render_form(&self.fields)
    }

    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    /// Take the pending notice once it has been shown
    pub fn take_notice(&mut self) -> Option<Notice> {
        self.notice.take()
    }
}
