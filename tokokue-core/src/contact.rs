//! Contact form simulator.
//!
//! Submitting moves the form into `Sending`; the caller completes it after
//! [`crate::constants::CONTACT_SEND_MS`]. No request is ever made and the
//! submission always succeeds.

use crate::notice::Notice;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub message: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactField {
    Name,
    Email,
    Phone,
    Message,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ContactPhase {
    #[default]
    Idle,
    Sending,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactState {
    pub form: ContactForm,
    pub phase: ContactPhase,
}

impl ContactState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_field(&mut self, field: ContactField, value: String) {
        let slot = match field {
            ContactField::Name => &mut self.form.name,
            ContactField::Email => &mut self.form.email,
            ContactField::Phone => &mut self.form.phone,
            ContactField::Message => &mut self.form.message,
        };
        *slot = value;
    }

    /// Start a submission. Returns `false` if one is already in flight.
    pub fn submit(&mut self) -> bool {
        if self.is_sending() {
            return false;
        }
        self.phase = ContactPhase::Sending;
        true
    }

    /// Finish the in-flight submission: reset the fields and report success.
    pub fn complete(&mut self) -> Option<Notice> {
        if !self.is_sending() {
            return None;
        }
        self.form = ContactForm::default();
        self.phase = ContactPhase::Idle;
        Some(Notice::MessageSent)
    }

    #[must_use]
    pub fn is_sending(&self) -> bool {
        self.phase == ContactPhase::Sending
    }
}
