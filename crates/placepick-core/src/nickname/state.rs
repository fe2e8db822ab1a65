//! Nickname validation state machine.

use super::rules::{DuplicateStatus, RuleStatus, is_content_valid, is_length_valid};
use crate::freshness::Freshness;

/// Request context captured when a duplicate check or submission is
/// dispatched.
///
/// `revision` changes on every edit, including edits that land back on an
/// earlier text, so a ticket is only honoured for the exact edit it was
/// issued for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RevisionTicket {
    revision: u64,
    text: String,
}

impl RevisionTicket {
    /// Text the request was issued for.
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn is_current(&self, state: &NicknameState) -> bool {
        self.revision == state.revision && self.text == state.text
    }
}

/// State of the nickname field.
///
/// Every transition consumes the state and returns the next one. Text can
/// only change through [`set_text`](Self::set_text) and
/// [`clear`](Self::clear), both of which drop any previous duplicate-check
/// knowledge.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NicknameState {
    text: String,
    length_valid: bool,
    content_valid: bool,
    touched: bool,
    duplicate_checked: bool,
    is_duplicate: bool,
    revision: u64,
}

impl NicknameState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the text and re-runs the local rules.
    ///
    /// Always resets the duplicate check, even if `input` equals the current
    /// text.
    pub fn set_text(self, input: impl Into<String>) -> Self {
        let text = input.into();
        Self {
            length_valid: is_length_valid(&text),
            content_valid: is_content_valid(&text),
            text,
            touched: true,
            duplicate_checked: false,
            is_duplicate: false,
            revision: self.revision + 1,
        }
    }

    /// The field lost focus.
    pub fn blur(self) -> Self {
        Self {
            touched: true,
            ..self
        }
    }

    /// Empties the field and hides feedback again.
    pub fn clear(self) -> Self {
        Self {
            revision: self.revision + 1,
            ..Self::default()
        }
    }

    /// Captures the request context for a duplicate check of the current text.
    pub fn begin_duplicate_check(&self) -> RevisionTicket {
        RevisionTicket {
            revision: self.revision,
            text: self.text.clone(),
        }
    }

    /// Captures the request context for registering the current text, or
    /// `None` if it may not be submitted.
    pub fn begin_submit(&self) -> Option<RevisionTicket> {
        self.can_submit().then(|| self.begin_duplicate_check())
    }

    /// Applies a server verdict if `ticket` still matches this state.
    ///
    /// A stale verdict leaves the state untouched.
    pub fn apply_duplicate_check(
        self,
        ticket: &RevisionTicket,
        is_duplicate: bool,
    ) -> (Self, Freshness) {
        if !ticket.is_current(&self) {
            return (self, Freshness::Stale);
        }
        let next = Self {
            duplicate_checked: true,
            is_duplicate,
            ..self
        };
        (next, Freshness::Current)
    }

    /// Submission requires both local rules and a completed, negative
    /// duplicate check for the current text.
    pub fn can_submit(&self) -> bool {
        self.length_valid && self.content_valid && self.duplicate_checked && !self.is_duplicate
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn length_valid(&self) -> bool {
        self.length_valid
    }

    pub fn content_valid(&self) -> bool {
        self.content_valid
    }

    pub fn touched(&self) -> bool {
        self.touched
    }

    pub fn duplicate_checked(&self) -> bool {
        self.duplicate_checked
    }

    /// Meaningless unless [`duplicate_checked`](Self::duplicate_checked).
    pub fn is_duplicate(&self) -> bool {
        self.is_duplicate
    }

    pub fn length_status(&self) -> RuleStatus {
        RuleStatus::from_check(self.touched, self.length_valid)
    }

    pub fn content_status(&self) -> RuleStatus {
        RuleStatus::from_check(self.touched, self.content_valid)
    }

    pub fn duplicate_status(&self) -> DuplicateStatus {
        match (self.duplicate_checked, self.is_duplicate) {
            (false, _) => DuplicateStatus::Unchecked,
            (true, false) => DuplicateStatus::Available,
            (true, true) => DuplicateStatus::Taken,
        }
    }
}
