//! Contact form orchestration: validation across all fields plus the
//! submit-flow state machine.

use super::field::{FieldName, FieldState};
use super::transport::{SubmissionPayload, SubmissionTransport};
use super::validator::{validate, ValidationResult};
use std::collections::HashMap;

/// Phase of the submit flow
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmitPhase {
    /// Nothing in flight
    #[default]
    Idle,
    /// Running field rules for a submit attempt
    Validating,
    /// At least one field failed; settled until the next attempt
    Rejected,
    /// Payload handed to the transport, waiting on its ack
    Submitting,
    /// Transport acknowledged; fields cleared, success notice showing
    Succeeded,
    /// Transport reported an error; settled until the next attempt
    Failed,
}

/// Result of one submit attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionOutcome {
    /// Validation failed; no submission occurred
    Rejected {
        field_errors: HashMap<FieldName, String>,
    },
    /// Transport acknowledged the payload
    Succeeded,
    /// Transport reported an error
    Failed { message: String },
}

/// Owns the four field states and drives the submit state machine
#[derive(Debug)]
pub struct FormController {
    fields: HashMap<FieldName, FieldState>,
    phase: SubmitPhase,
    notice_visible: bool,
}

impl FormController {
    pub fn new() -> Self {
        let fields = FieldName::ALL
            .iter()
            .map(|&name| (name, FieldState::empty(name)))
            .collect();
        Self {
            fields,
            phase: SubmitPhase::Idle,
            notice_visible: false,
        }
    }

    pub fn phase(&self) -> SubmitPhase {
        self.phase
    }

    pub fn notice_visible(&self) -> bool {
        self.notice_visible
    }

    pub fn field(&self, name: FieldName) -> &FieldState {
        &self.fields[&name]
    }

    /// Record a new raw value and revalidate that one field, as on an
    /// input or blur event.
    pub fn set_field_value(&mut self, name: FieldName, value: impl Into<String>) -> ValidationResult {
        let state = self.fields.get_mut(&name).expect("all fields present");
        state.set_value(value);
        Self::apply_rules(state)
    }

    /// Revalidate a field against its current value, as on a blur event
    /// with no value change.
    pub fn revalidate_field(&mut self, name: FieldName) -> ValidationResult {
        let state = self.fields.get_mut(&name).expect("all fields present");
        Self::apply_rules(state)
    }

    fn apply_rules(state: &mut FieldState) -> ValidationResult {
        let result = validate(state.name, &state.raw_value);
        state.is_valid = result.is_valid;
        state.error = result.message.clone();
        result
    }

    /// Snapshot the current values for the transport
    pub fn payload(&self) -> SubmissionPayload {
        SubmissionPayload {
            name: self.fields[&FieldName::Name].raw_value.clone(),
            email: self.fields[&FieldName::Email].raw_value.clone(),
            subject: self.fields[&FieldName::Subject].raw_value.clone(),
            message: self.fields[&FieldName::Message].raw_value.clone(),
        }
    }

    /// Run one submit attempt: validate every field, then hand the payload
    /// to the transport if all pass.
    ///
    /// Rejected and Failed are settled per attempt; the next attempt starts
    /// fresh from Validating. On success the fields are cleared and the
    /// success notice is marked visible until [`dismiss_notice`] runs.
    ///
    /// [`dismiss_notice`]: FormController::dismiss_notice
    pub async fn submit(&mut self, transport: &dyn SubmissionTransport) -> SubmissionOutcome {
        self.notice_visible = false;
        self.phase = SubmitPhase::Validating;

        let mut field_errors = HashMap::new();
        for &name in FieldName::ALL.iter() {
            let result = self.revalidate_field(name);
            if let Some(message) = result.message {
                field_errors.insert(name, message);
            }
        }

        if !field_errors.is_empty() {
            self.phase = SubmitPhase::Rejected;
            tracing::debug!(errors = field_errors.len(), "submit attempt rejected");
            return SubmissionOutcome::Rejected { field_errors };
        }

        self.phase = SubmitPhase::Submitting;
        let payload = self.payload();

        match transport.submit(&payload).await {
            Ok(_) => {
                self.phase = SubmitPhase::Succeeded;
                self.notice_visible = true;
                for state in self.fields.values_mut() {
                    state.clear();
                }
                tracing::debug!("submission acknowledged");
                SubmissionOutcome::Succeeded
            }
            Err(err) => {
                self.phase = SubmitPhase::Failed;
                tracing::warn!(error = %err, "submission transport failed");
                SubmissionOutcome::Failed {
                    message: err.to_string(),
                }
            }
        }
    }

    /// Hide the success notice (the auto-dismiss timer's target)
    pub fn dismiss_notice(&mut self) {
        self.notice_visible = false;
        if self.phase == SubmitPhase::Succeeded {
            self.phase = SubmitPhase::Idle;
        }
    }
}

impl Default for FormController {
    fn default() -> Self {
        Self::new()
    }
}
