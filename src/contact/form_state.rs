//! Contact form state: `Idle -> Submitting -> Succeeded | Failed -> Idle`.
//!
//! The submit control stays disabled until the result has been on screen for
//! [`RESET_DELAY_MS`], so a second attempt can't start while the previous one is
//! still being reported.

use crate::contact::relay::{RelayError, RelayPayload};

pub const RESET_DELAY_MS: u32 = 4_000;

pub const IDLE_LABEL: &str = "Wyślij";
pub const SUBMITTING_LABEL: &str = "Wysyłanie…";
pub const SUCCESS_LABEL: &str = "Wysłano ✓";
pub const REJECTED_FALLBACK_LABEL: &str = "Coś poszło nie tak";
pub const NETWORK_ERROR_LABEL: &str = "Błąd sieci – spróbuj ponownie";

pub fn subject_for(name: &str) -> String {
    format!("Od {}", name.trim())
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Field {
    Name,
    Tel,
    Email,
    Message,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactFields {
    pub name: String,
    pub tel: String,
    pub email: String,
    pub message: String,
}

impl ContactFields {
    pub fn set(&mut self, field: Field, value: String) {
        match field {
            Field::Name => self.name = value,
            Field::Tel => self.tel = value,
            Field::Email => self.email = value,
            Field::Message => self.message = value,
        }
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// What the relay said about an attempt that reached it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmissionOutcome {
    Accepted,
    Rejected(Option<String>),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FailureReason {
    Rejected(Option<String>),
    Network,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum FormSubmissionState {
    #[default]
    Idle,
    Submitting,
    Succeeded,
    Failed(FailureReason),
}

impl FormSubmissionState {
    pub fn label(&self) -> String {
        match self {
            FormSubmissionState::Idle => IDLE_LABEL.to_string(),
            FormSubmissionState::Submitting => SUBMITTING_LABEL.to_string(),
            FormSubmissionState::Succeeded => SUCCESS_LABEL.to_string(),
            FormSubmissionState::Failed(FailureReason::Rejected(Some(message))) => {
                format!("Błąd: {}", message)
            }
            FormSubmissionState::Failed(FailureReason::Rejected(None)) => {
                REJECTED_FALLBACK_LABEL.to_string()
            }
            FormSubmissionState::Failed(FailureReason::Network) => NETWORK_ERROR_LABEL.to_string(),
        }
    }
}

/// A started attempt: its number and the body to post.
#[derive(Clone, Debug, PartialEq)]
pub struct Submission {
    pub attempt: u64,
    pub payload: RelayPayload,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct FormModel {
    pub fields: ContactFields,
    state: FormSubmissionState,
    attempt: u64,
}

impl FormModel {
    pub fn state(&self) -> &FormSubmissionState {
        &self.state
    }

    pub fn control_disabled(&self) -> bool {
        self.state != FormSubmissionState::Idle
    }

    /// Starts an attempt. Returns `None` while a previous attempt is still running
    /// or being displayed.
    pub fn begin_submit(&mut self) -> Option<Submission> {
        if self.control_disabled() {
            return None;
        }
        self.attempt += 1;
        self.state = FormSubmissionState::Submitting;
        Some(Submission {
            attempt: self.attempt,
            payload: RelayPayload::from_fields(&self.fields),
        })
    }

    /// Applies the relay's answer. Fields are cleared only on success.
    ///
    /// Returns the delay in milliseconds after which `reset` must fire, or `None`
    /// when the answer belongs to an older attempt and was ignored.
    pub fn settle(
        &mut self,
        attempt: u64,
        result: Result<SubmissionOutcome, RelayError>,
    ) -> Option<u32> {
        if attempt != self.attempt || self.state != FormSubmissionState::Submitting {
            return None;
        }
        self.state = match result {
            Ok(SubmissionOutcome::Accepted) => {
                self.fields.clear();
                FormSubmissionState::Succeeded
            }
            Ok(SubmissionOutcome::Rejected(message)) => {
                FormSubmissionState::Failed(FailureReason::Rejected(message))
            }
            Err(_) => FormSubmissionState::Failed(FailureReason::Network),
        };
        Some(RESET_DELAY_MS)
    }

    /// Fired [`RESET_DELAY_MS`] after `settle`. Ignored if it belongs to an older attempt.
    pub fn reset(&mut self, attempt: u64) -> bool {
        if attempt != self.attempt {
            return false;
        }
        match self.state {
            FormSubmissionState::Succeeded | FormSubmissionState::Failed(_) => {
                self.state = FormSubmissionState::Idle;
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> FormModel {
        let mut model = FormModel::default();
        model.fields.set(Field::Name, "  Jan  ".to_string());
        model.fields.set(Field::Tel, "600100200".to_string());
        model.fields.set(Field::Email, "jan@example.com".to_string());
        model.fields.set(Field::Message, "Wyspa z blatem kamiennym".to_string());
        model
    }

    #[test]
    fn subject_is_trimmed() {
        assert_eq!(subject_for("  Jan  "), "Od Jan");
        assert_eq!(subject_for(""), "Od ");
        assert_eq!(subject_for("   "), "Od ");
    }

    #[test]
    fn successful_attempt_clears_fields_then_resets() {
        let mut model = filled();
        let submission = model.begin_submit().expect("idle form accepts a submit");
        assert_eq!(submission.payload.subject, "Od Jan");
        assert_eq!(model.state(), &FormSubmissionState::Submitting);
        assert_eq!(model.state().label(), SUBMITTING_LABEL);
        assert!(model.control_disabled());

        assert_eq!(
            model.settle(submission.attempt, Ok(SubmissionOutcome::Accepted)),
            Some(4000)
        );
        assert_eq!(model.state().label(), SUCCESS_LABEL);
        assert_eq!(model.fields, ContactFields::default());
        assert!(model.control_disabled(), "stays disabled while the result is shown");

        assert!(model.reset(submission.attempt));
        assert_eq!(model.state(), &FormSubmissionState::Idle);
        assert_eq!(model.state().label(), IDLE_LABEL);
        assert!(!model.control_disabled());
    }

    #[test]
    fn every_settled_attempt_schedules_the_reset() {
        let outcomes = [
            Ok(SubmissionOutcome::Accepted),
            Ok(SubmissionOutcome::Rejected(Some("X".to_string()))),
            Err(RelayError::Decode("not json".to_string())),
        ];
        for outcome in outcomes {
            let mut model = filled();
            let submission = model.begin_submit().unwrap();
            assert_eq!(model.settle(submission.attempt, outcome), Some(RESET_DELAY_MS));
            assert!(model.reset(submission.attempt));
            assert_eq!(model.state(), &FormSubmissionState::Idle);
        }
        assert_eq!(RESET_DELAY_MS, 4000);
    }

    #[test]
    fn rejected_attempt_shows_server_message_and_keeps_fields() {
        let mut model = filled();
        let submission = model.begin_submit().unwrap();
        model.settle(
            submission.attempt,
            Ok(SubmissionOutcome::Rejected(Some("X".to_string()))),
        );

        assert!(model.state().label().contains('X'));
        assert_eq!(model.fields.name, "  Jan  ");
        assert_eq!(model.fields.message, "Wyspa z blatem kamiennym");
    }

    #[test]
    fn rejection_without_message_uses_fallback() {
        let mut model = filled();
        let submission = model.begin_submit().unwrap();
        model.settle(submission.attempt, Ok(SubmissionOutcome::Rejected(None)));
        assert_eq!(model.state().label(), REJECTED_FALLBACK_LABEL);
    }

    #[test]
    fn network_error_asks_to_retry() {
        let mut model = filled();
        let submission = model.begin_submit().unwrap();
        model.settle(
            submission.attempt,
            Err(RelayError::Transport("offline".to_string())),
        );
        assert_eq!(
            model.state(),
            &FormSubmissionState::Failed(FailureReason::Network)
        );
        assert_eq!(model.state().label(), NETWORK_ERROR_LABEL);
        assert_ne!(model.fields, ContactFields::default());
    }

    #[test]
    fn no_second_attempt_while_result_is_displayed() {
        let mut model = filled();
        let first = model.begin_submit().unwrap();
        assert!(model.begin_submit().is_none());
        model.settle(first.attempt, Ok(SubmissionOutcome::Rejected(None)));
        assert!(model.begin_submit().is_none());

        model.reset(first.attempt);
        let second = model.begin_submit().unwrap();
        assert_eq!(second.attempt, first.attempt + 1);
    }

    #[test]
    fn stale_reset_and_settle_are_ignored() {
        let mut model = filled();
        let first = model.begin_submit().unwrap();
        model.settle(first.attempt, Ok(SubmissionOutcome::Rejected(None)));
        model.reset(first.attempt);

        let second = model.begin_submit().unwrap();
        assert!(!model.reset(first.attempt));
        assert_eq!(model.settle(first.attempt, Ok(SubmissionOutcome::Accepted)), None);
        assert_eq!(model.state(), &FormSubmissionState::Submitting);

        assert!(model.settle(second.attempt, Ok(SubmissionOutcome::Accepted)).is_some());
        assert_eq!(model.settle(second.attempt, Ok(SubmissionOutcome::Accepted)), None);
    }

    #[test]
    fn reset_before_settle_does_nothing() {
        let mut model = filled();
        let submission = model.begin_submit().unwrap();
        assert!(!model.reset(submission.attempt));
        assert_eq!(model.state(), &FormSubmissionState::Submitting);
    }
}
