//! Demo contact form.
//!
//! DESIGN
//! ======
//! Submission never leaves the page. `submit` shows an in-progress status and
//! hands back a [`Submission`] ticket; the host schedules `complete(ticket)`
//! after the configured delay. Each submit supersedes the previous ticket, so
//! a double submit completes exactly once, and `cancel` makes any scheduled
//! completion inert on teardown.
//!
//! The status element is looked up again whenever it is written. If the page
//! no longer has one the text update is skipped with a warning; the form is
//! still reset.

#[cfg(test)]
#[path = "contact_test.rs"]
mod contact_test;

use std::cell::Cell;

use crate::consts::{FORM_SENDING_TEXT, FORM_SENT_TEXT};
use crate::dom::{Node, Page};

/// Ticket for one pending completion.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Submission(u64);

/// Simulated submit flow for one form.
pub struct ContactForm<P: Page> {
    page: P,
    form: P::Node,
    status_id: String,
    generation: Cell<u64>,
    pending: Cell<Option<Submission>>,
}

impl<P: Page + Clone> ContactForm<P> {
    /// Attach to `#form_id`. Returns `None` when the form is absent.
    pub fn attach(page: &P, form_id: &str, status_id: &str) -> Option<Self> {
        let form = page.element_by_id(form_id)?;
        log::debug!("contact form #{form_id} attached");
        Some(Self {
            page: page.clone(),
            form,
            status_id: status_id.to_owned(),
            generation: Cell::new(0),
            pending: Cell::new(None),
        })
    }

    /// Show the in-progress status and start a new pending completion,
    /// replacing any earlier one.
    pub fn submit(&self) -> Submission {
        let ticket = Submission(self.generation.get() + 1);
        self.generation.set(ticket.0);
        if self.pending.replace(Some(ticket)).is_some() {
            log::debug!("contact form resubmitted; earlier completion superseded");
        }
        self.set_status(FORM_SENDING_TEXT);
        ticket
    }

    /// Finish `ticket` if it is still the pending submission: show the
    /// success message and clear the form. Returns whether it applied.
    pub fn complete(&self, ticket: Submission) -> bool {
        if self.pending.get() != Some(ticket) {
            log::debug!("ignoring stale contact form completion {}", ticket.0);
            return false;
        }
        self.pending.set(None);
        self.set_status(FORM_SENT_TEXT);
        self.form.reset_form();
        log::info!("contact form submission {} completed", ticket.0);
        true
    }

    /// Drop the pending completion, if any.
    pub fn cancel(&self) {
        self.pending.set(None);
    }

    #[must_use]
    pub fn pending(&self) -> Option<Submission> {
        self.pending.get()
    }

    #[must_use]
    pub fn form(&self) -> &P::Node {
        &self.form
    }

    fn set_status(&self, text: &str) {
        match self.page.element_by_id(&self.status_id) {
            Some(status) => status.set_text(text),
            None => log::warn!("contact form status #{} missing; skipping \"{text}\"", self.status_id),
        }
    }
}
