//! Validation-and-submission flow
//!
//! The flow is split around the single network call so the UI loop can keep
//! drawing while the request is in flight:
//!
//! - [`SubmissionFlow::begin`] validates every field, renders the errors and,
//!   when the form is valid, puts the view into its busy state and hands back
//!   the payload to send.
//! - [`SubmissionFlow::finish`] takes the outcome of that request, resets the
//!   form only on confirmed success, always leaves the busy state, and returns
//!   the overlay to show.
//!
//! Both work against [`FormView`], so the flow runs without a terminal.

use crate::contact::{ApiReply, ContactPayload, SubmitError};
use crate::state::{validate_all, ContactForm, FieldName, PopupContent, ValidationReport};
use chrono::{DateTime, Utc};
use uuid::Uuid;

/// What the flow needs from whatever displays the form
pub trait FormView {
    /// Raw, untrimmed value of a field
    fn field_value(&self, field: FieldName) -> &str;
    /// Replace all field errors with the result of a validation pass
    fn render_errors(&mut self, report: &ValidationReport);
    /// Hide one field's error without clearing it
    #[allow(dead_code)]
    fn hide_error(&mut self, field: FieldName);
    /// Disable or re-enable the submit control
    fn set_busy(&mut self, busy: bool);
    fn is_busy(&self) -> bool;
    /// Clear all values and errors
    fn reset(&mut self);
}

impl FormView for ContactForm {
    fn field_value(&self, field: FieldName) -> &str {
        &self.field(field).value
    }

    fn render_errors(&mut self, report: &ValidationReport) {
        self.errors.apply_report(report);
        self.errors.show_all();
    }

    fn hide_error(&mut self, field: FieldName) {
        self.errors.hide(field);
    }

    fn set_busy(&mut self, busy: bool) {
        if busy {
            self.submit.set_busy();
        } else {
            self.submit.set_idle();
        }
    }

    fn is_busy(&self) -> bool {
        self.submit.disabled
    }

    fn reset(&mut self) {
        ContactForm::reset(self);
    }
}

/// Run every rule against the view's values
pub fn validate_view<V: FormView + ?Sized>(view: &V) -> ValidationReport {
    validate_all(
        view.field_value(FieldName::Name),
        view.field_value(FieldName::Email),
        view.field_value(FieldName::Message),
    )
}

/// Validate the whole form, render the errors, and report overall validity
pub fn validate_form<V: FormView + ?Sized>(view: &mut V) -> bool {
    let report = validate_view(&*view);
    view.render_errors(&report);
    report.is_valid()
}

/// Clear every value and error
pub fn reset_form<V: FormView + ?Sized>(view: &mut V) {
    view.reset();
}

/// Where the submission state machine currently is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmitPhase {
    #[default]
    Idle,
    Validating,
    Invalid,
    Submitting,
    Success,
    Failed,
}

/// Identity of one submission attempt, for logs and the status line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attempt {
    pub id: Uuid,
    pub started_at: DateTime<Utc>,
}

impl Attempt {
    fn start() -> Self {
        Self {
            id: Uuid::new_v4(),
            started_at: Utc::now(),
        }
    }
}

/// A request ready to be sent
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dispatch {
    pub attempt: Attempt,
    pub payload: ContactPayload,
}

/// Summary of the most recent finished attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttemptSummary {
    pub attempt: Attempt,
    pub finished_at: DateTime<Utc>,
    pub outcome: SubmitPhase,
}

/// Why `begin` did not produce a request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotSent {
    /// A request is already in flight
    Busy,
    /// At least one field failed validation
    Invalid(ValidationReport),
}

/// The submission state machine
#[derive(Debug, Clone)]
pub struct SubmissionFlow {
    source: String,
    phase: SubmitPhase,
    in_flight: Option<Attempt>,
    last: Option<AttemptSummary>,
}

impl SubmissionFlow {
    pub fn new(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            phase: SubmitPhase::Idle,
            in_flight: None,
            last: None,
        }
    }

    pub fn phase(&self) -> SubmitPhase {
        self.phase
    }

    pub fn is_submitting(&self) -> bool {
        self.phase == SubmitPhase::Submitting
    }

    pub fn last_attempt(&self) -> Option<&AttemptSummary> {
        self.last.as_ref()
    }

    /// Validate everything and, if valid, go busy and return the request to send
    pub fn begin<V: FormView + ?Sized>(&mut self, view: &mut V) -> Result<Dispatch, NotSent> {
        if self.is_submitting() || view.is_busy() {
            tracing::debug!("submit ignored while a request is in flight");
            return Err(NotSent::Busy);
        }

        self.phase = SubmitPhase::Validating;
        let report = validate_view(&*view);
        view.render_errors(&report);

        if !report.is_valid() {
            self.phase = SubmitPhase::Invalid;
            tracing::debug!(failed = ?report.failed_fields(), "contact form invalid");
            self.phase = SubmitPhase::Idle;
            return Err(NotSent::Invalid(report));
        }

        let payload = ContactPayload::new(
            view.field_value(FieldName::Name),
            view.field_value(FieldName::Email),
            view.field_value(FieldName::Message),
            &self.source,
        );
        let attempt = Attempt::start();
        view.set_busy(true);
        self.phase = SubmitPhase::Submitting;
        self.in_flight = Some(attempt.clone());
        tracing::info!(attempt = %attempt.id, "submitting contact form");

        Ok(Dispatch { attempt, payload })
    }

    /// Apply the outcome of the in-flight request and return the overlay to show
    pub fn finish<V: FormView + ?Sized>(
        &mut self,
        view: &mut V,
        outcome: Result<ApiReply, SubmitError>,
    ) -> PopupContent {
        let attempt = self.in_flight.take().unwrap_or_else(Attempt::start);

        let popup = match outcome {
            Ok(reply) => {
                self.phase = SubmitPhase::Success;
                tracing::info!(
                    attempt = %attempt.id,
                    elapsed_ms = (Utc::now() - attempt.started_at).num_milliseconds(),
                    status = reply.status,
                    message = ?reply.message,
                    "contact form sent"
                );
                view.reset();
                PopupContent::success()
            }
            Err(err) => {
                self.phase = SubmitPhase::Failed;
                match &err {
                    SubmitError::Transport(cause) => {
                        tracing::warn!(attempt = %attempt.id, %cause, "contact request failed")
                    }
                    other => {
                        tracing::warn!(attempt = %attempt.id, error = ?other, "contact form rejected")
                    }
                }
                PopupContent::error(err.to_string())
            }
        };

        self.last = Some(AttemptSummary {
            attempt,
            finished_at: Utc::now(),
            outcome: self.phase,
        });
        view.set_busy(false);
        self.phase = SubmitPhase::Idle;
        popup
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contact::{ContactApi, MockContactApi, RATE_LIMITED_MESSAGE, TRANSPORT_MESSAGE};
    use crate::state::{FormFocus, PopupKind, BUSY_LABEL};
    use mockall::predicate::eq;
    use pretty_assertions::assert_eq;

    fn valid_form() -> ContactForm {
        let mut form = ContactForm::new("Send");
        form.name.value = " Jo-Anne O'Neil ".to_string();
        form.email.value = "jo@example.com".to_string();
        form.message.value = "  Hello there  ".to_string();
        form
    }

    fn expected_payload() -> ContactPayload {
        ContactPayload {
            name: "Jo-Anne O'Neil".to_string(),
            email: "jo@example.com".to_string(),
            message: "Hello there".to_string(),
            source: "website_contact_form".to_string(),
        }
    }

    /// Run begin, the request, and finish the way the app does
    async fn run<A: ContactApi + ?Sized>(
        flow: &mut SubmissionFlow,
        form: &mut ContactForm,
        api: &A,
    ) -> Option<PopupContent> {
        let dispatch = flow.begin(form).ok()?;
        let outcome = api.submit(&dispatch.payload).await;
        Some(flow.finish(form, outcome))
    }

    #[test]
    fn test_created_reply_counts_as_success() {
        let mut api = MockContactApi::new();
        api.expect_submit().times(1).returning(|_| {
            Ok(ApiReply {
                status: 201,
                message: Some("Created".to_string()),
            })
        });
        let mut flow = SubmissionFlow::new("website_contact_form");
        let mut form = valid_form();

        let popup = tokio_test::block_on(run(&mut flow, &mut form, &api));

        assert_eq!(popup, Some(PopupContent::success()));
        assert_eq!(
            flow.last_attempt().map(|s| s.outcome),
            Some(SubmitPhase::Success)
        );
    }

    #[test]
    fn test_validate_form_renders_all_errors() {
        let mut form = ContactForm::default();
        assert!(!validate_form(&mut form));
        for field in FieldName::ALL {
            assert!(form.errors.displayed(field).is_some());
        }
    }

    #[test]
    fn test_reset_form_clears_everything() {
        let mut form = valid_form();
        form.errors.set(FieldName::Name, Some("x"));
        reset_form(&mut form);
        assert!(form.name.value.is_empty());
        assert!(!form.errors.has_errors());
    }

    #[test]
    fn test_hide_error_through_view() {
        let mut form = ContactForm::default();
        validate_form(&mut form);
        FormView::hide_error(&mut form, FieldName::Email);
        assert_eq!(form.errors.displayed(FieldName::Email), None);
        assert!(form.errors.displayed(FieldName::Name).is_some());
    }

    #[test]
    fn test_begin_invalid_sends_nothing_and_shows_errors() {
        let mut flow = SubmissionFlow::new("website_contact_form");
        let mut form = ContactForm::default();
        form.name.value = "Jo".to_string();
        form.email.value = "not-an-email".to_string();
        form.message.value = "Hello".to_string();

        let result = flow.begin(&mut form);

        match result {
            Err(NotSent::Invalid(report)) => {
                assert_eq!(report.failed_fields(), vec![FieldName::Name, FieldName::Email]);
            }
            other => panic!("expected invalid, got {other:?}"),
        }
        assert_eq!(flow.phase(), SubmitPhase::Idle);
        assert!(!form.submit.disabled);
        assert_eq!(
            form.errors.displayed(FieldName::Name),
            Some("Name must be at least 5 characters")
        );
        assert_eq!(
            form.errors.displayed(FieldName::Email),
            Some("Please enter a valid email address")
        );
        assert_eq!(form.errors.displayed(FieldName::Message), None);
    }

    #[test]
    fn test_begin_valid_goes_busy_with_trimmed_payload() {
        let mut flow = SubmissionFlow::new("website_contact_form");
        let mut form = valid_form();

        let dispatch = flow.begin(&mut form).unwrap();

        assert_eq!(dispatch.payload, expected_payload());
        assert_eq!(flow.phase(), SubmitPhase::Submitting);
        assert!(form.submit.disabled);
        assert_eq!(form.submit.label, BUSY_LABEL);
    }

    #[test]
    fn test_begin_rejects_email_with_trailing_space() {
        let mut flow = SubmissionFlow::new("website_contact_form");
        let mut form = valid_form();
        form.email.value = "jo@example.com ".to_string();

        match flow.begin(&mut form) {
            Err(NotSent::Invalid(report)) => {
                assert_eq!(report.failed_fields(), vec![FieldName::Email]);
            }
            other => panic!("expected invalid, got {other:?}"),
        }
        assert!(!form.submit.disabled);
    }

    #[test]
    fn test_begin_while_in_flight_is_refused() {
        let mut flow = SubmissionFlow::new("website_contact_form");
        let mut form = valid_form();
        flow.begin(&mut form).unwrap();
        assert_eq!(flow.begin(&mut form), Err(NotSent::Busy));
    }

    #[tokio::test]
    async fn test_valid_form_posts_exactly_once() {
        let mut api = MockContactApi::new();
        api.expect_submit()
            .with(eq(expected_payload()))
            .times(1)
            .returning(|_| {
                Ok(ApiReply {
                    status: 201,
                    message: None,
                })
            });

        let mut flow = SubmissionFlow::new("website_contact_form");
        let mut form = valid_form();
        let popup = run(&mut flow, &mut form, &api).await.unwrap();

        assert_eq!(popup, PopupContent::success());
    }

    #[tokio::test]
    async fn test_invalid_form_never_posts() {
        let mut api = MockContactApi::new();
        api.expect_submit().times(0);

        let mut flow = SubmissionFlow::new("website_contact_form");
        let mut form = ContactForm::default();
        assert!(run(&mut flow, &mut form, &api).await.is_none());
    }

    #[tokio::test]
    async fn test_success_resets_form_and_clears_errors() {
        let mut api = MockContactApi::new();
        api.expect_submit().returning(|_| {
            Ok(ApiReply {
                status: 200,
                message: Some("Thanks".to_string()),
            })
        });

        let mut flow = SubmissionFlow::new("website_contact_form");
        let mut form = valid_form();
        form.focus = FormFocus::Submit;
        let popup = run(&mut flow, &mut form, &api).await.unwrap();

        assert_eq!(popup.kind, PopupKind::Success);
        for field in FieldName::ALL {
            assert!(form.field(field).value.is_empty());
        }
        assert!(!form.errors.has_errors());
        assert!(!form.submit.disabled);
        assert_eq!(form.submit.label, "Send");
        assert_eq!(flow.phase(), SubmitPhase::Idle);
        assert_eq!(flow.last_attempt().unwrap().outcome, SubmitPhase::Success);
    }

    #[tokio::test]
    async fn test_rate_limited_keeps_values() {
        let mut api = MockContactApi::new();
        api.expect_submit()
            .times(1)
            .returning(|_| Err(SubmitError::RateLimited));

        let mut flow = SubmissionFlow::new("website_contact_form");
        let mut form = valid_form();
        let popup = run(&mut flow, &mut form, &api).await.unwrap();

        assert_eq!(popup.kind, PopupKind::Error);
        assert_eq!(popup.message, RATE_LIMITED_MESSAGE);
        assert_eq!(form.name.value, " Jo-Anne O'Neil ");
        assert_eq!(form.email.value, "jo@example.com");
        assert_eq!(form.message.value, "  Hello there  ");
        assert!(!form.submit.disabled);
        assert_eq!(form.submit.label, "Send");
        assert_eq!(flow.last_attempt().unwrap().outcome, SubmitPhase::Failed);
    }

    #[tokio::test]
    async fn test_server_validation_message_is_shown() {
        let mut api = MockContactApi::new();
        api.expect_submit()
            .returning(|_| Err(SubmitError::Validation("Email domain not accepted".to_string())));

        let mut flow = SubmissionFlow::new("website_contact_form");
        let mut form = valid_form();
        let popup = run(&mut flow, &mut form, &api).await.unwrap();

        assert_eq!(popup.message, "Email domain not accepted");
        assert_eq!(form.email.value, "jo@example.com");
    }

    #[tokio::test]
    async fn test_transport_failure_reenables_submit() {
        let mut api = MockContactApi::new();
        api.expect_submit()
            .returning(|_| Err(SubmitError::Transport("connection refused".to_string())));

        let mut flow = SubmissionFlow::new("website_contact_form");
        let mut form = valid_form();
        let popup = run(&mut flow, &mut form, &api).await.unwrap();

        assert_eq!(popup.message, TRANSPORT_MESSAGE);
        assert!(!form.submit.disabled);
        assert!(!form.name.value.is_empty());
    }

    #[test]
    fn test_submit_disabled_only_while_in_flight() {
        let mut flow = SubmissionFlow::new("website_contact_form");
        let mut form = valid_form();
        assert!(!form.submit.disabled);

        let dispatch = flow.begin(&mut form).unwrap();
        assert!(form.submit.disabled);
        assert!(flow.is_submitting());

        flow.finish(&mut form, Err(SubmitError::Server("Server error".to_string())));
        assert!(!form.submit.disabled);
        assert!(!flow.is_submitting());
        assert_eq!(flow.last_attempt().unwrap().attempt, dispatch.attempt);
    }

    #[test]
    fn test_custom_source_tag() {
        let mut flow = SubmissionFlow::new("landing_page");
        let mut form = valid_form();
        let dispatch = flow.begin(&mut form).unwrap();
        assert_eq!(dispatch.payload.source, "landing_page");
    }
}
