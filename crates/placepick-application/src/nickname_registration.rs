//! Nickname registration use case.
//!
//! Drives [`NicknameState`] from text input, one duplicate-check round-trip
//! and the final submission.

use crate::state_cell::StateCell;
use placepick_core::api::UserAccountClient;
use placepick_core::nickname::{NicknameState, RevisionTicket};
use placepick_core::{Freshness, Notice, NoticeSink};
use std::sync::Arc;

/// Where the caller should navigate after a successful submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NextStep {
    PreferenceSelection,
}

/// Result of a duplicate check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckOutcome {
    /// The verdict was applied to the current text.
    Checked { is_duplicate: bool },
    /// The text changed while the request was in flight; nothing was applied.
    Stale,
    /// The request failed; the field stays unchecked.
    Failed,
}

/// Result of a submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Saved on the server; hand control to the navigator.
    Advanced(NextStep),
    /// Local rules or the duplicate check do not allow submitting. No request
    /// was made.
    NotSubmittable,
    /// The server answered `success: false`.
    Declined,
    /// Saved on the server, but the field was edited while the request was in
    /// flight. The caller stays on this screen; the new text needs its own
    /// check and submission.
    Superseded,
    /// The request failed.
    Failed,
}

/// Nickname screen controller.
///
/// Cheap to clone; clones share the same state.
#[derive(Clone)]
pub struct NicknameRegistration {
    client: UserAccountClient,
    notices: Arc<dyn NoticeSink>,
    state: StateCell<NicknameState>,
}

impl NicknameRegistration {
    pub fn new(client: UserAccountClient, notices: Arc<dyn NoticeSink>) -> Self {
        Self {
            client,
            notices,
            state: StateCell::new(NicknameState::new()),
        }
    }

    pub async fn state(&self) -> NicknameState {
        self.state.snapshot().await
    }

    pub async fn set_text(&self, input: &str) -> NicknameState {
        self.state.update(|state| state.set_text(input)).await
    }

    pub async fn blur(&self) -> NicknameState {
        self.state.update(NicknameState::blur).await
    }

    pub async fn clear(&self) -> NicknameState {
        self.state.update(NicknameState::clear).await
    }

    pub async fn can_submit(&self) -> bool {
        self.state.inspect(NicknameState::can_submit).await
    }

    /// Checks the current text against the server.
    ///
    /// The verdict is applied only if the text has not been edited since
    /// dispatch. Stale verdicts and stale failures produce no notice.
    pub async fn check_duplicate(&self) -> CheckOutcome {
        let ticket = self
            .state
            .inspect(NicknameState::begin_duplicate_check)
            .await;
        tracing::debug!(
            target: "placepick::nickname",
            text = %ticket.text(),
            "Dispatching duplicate check"
        );

        match self.client.check_nickname(ticket.text()).await {
            Ok(is_duplicate) => {
                let freshness = self
                    .state
                    .transition(|state| state.apply_duplicate_check(&ticket, is_duplicate))
                    .await;
                if freshness.is_stale() {
                    tracing::debug!(
                        target: "placepick::nickname",
                        text = %ticket.text(),
                        "Ignoring stale duplicate check result"
                    );
                    return CheckOutcome::Stale;
                }

                self.notices.notify(if is_duplicate {
                    Notice::nickname_taken()
                } else {
                    Notice::nickname_available()
                });
                CheckOutcome::Checked { is_duplicate }
            }
            Err(e) => {
                if self.freshness(&ticket).await.is_stale() {
                    tracing::debug!(
                        target: "placepick::nickname",
                        error = %e,
                        "Ignoring stale duplicate check failure"
                    );
                    return CheckOutcome::Stale;
                }

                tracing::warn!(target: "placepick::nickname", error = %e, "Duplicate check failed");
                self.notices.notify(Notice::nickname_check_failed());
                CheckOutcome::Failed
            }
        }
    }

    /// Registers the current text as the user's nickname.
    ///
    /// Never retries. On failure the state is left as it was so the user can
    /// try again. If the field is edited while the request is in flight the
    /// caller is not advanced.
    pub async fn submit(&self) -> SubmitOutcome {
        let Some(ticket) = self.state.inspect(NicknameState::begin_submit).await else {
            tracing::debug!(
                target: "placepick::nickname",
                "Submit ignored: nickname not submittable"
            );
            return SubmitOutcome::NotSubmittable;
        };

        match self.client.register_nickname(ticket.text()).await {
            Ok(()) => {
                if self.freshness(&ticket).await.is_stale() {
                    tracing::info!(
                        target: "placepick::nickname",
                        nickname = %ticket.text(),
                        "Nickname registered, but the field changed meanwhile"
                    );
                    return SubmitOutcome::Superseded;
                }
                tracing::info!(
                    target: "placepick::nickname",
                    nickname = %ticket.text(),
                    "Nickname registered"
                );
                SubmitOutcome::Advanced(NextStep::PreferenceSelection)
            }
            Err(e) if e.is_rejected() => {
                tracing::warn!(
                    target: "placepick::nickname",
                    nickname = %ticket.text(),
                    "Server declined nickname"
                );
                self.notices.notify(Notice::nickname_declined());
                SubmitOutcome::Declined
            }
            Err(e) => {
                tracing::warn!(
                    target: "placepick::nickname",
                    error = %e,
                    "Nickname submission failed"
                );
                self.notices.notify(Notice::network_failure());
                SubmitOutcome::Failed
            }
        }
    }

    async fn freshness(&self, ticket: &RevisionTicket) -> Freshness {
        self.state
            .inspect(|state| {
                if ticket.is_current(state) {
                    Freshness::Current
                } else {
                    Freshness::Stale
                }
            })
            .await
    }
}

impl std::fmt::Debug for NicknameRegistration {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NicknameRegistration").finish_non_exhaustive()
    }
}
