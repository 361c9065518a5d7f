//! Contact form state, validation, and the transport seam submissions go through.

use std::collections::BTreeMap;
use std::future::Future;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const MIN_MESSAGE_LEN: usize = 10;

pub const DEFAULT_SUBJECTS: &[&str] = &[
    "General inquiry",
    "Project proposal",
    "Consulting",
    "Speaking",
    "Other",
];

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern should compile")
});

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    Name,
    Email,
    Subject,
    Message,
    /// Hidden from people; bots fill it in.
    Honeypot,
}

impl Field {
    pub fn as_str(self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Subject => "subject",
            Field::Message => "message",
            Field::Honeypot => "company",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ContactFields {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
    pub honeypot: String,
}

impl ContactFields {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Subject => &self.subject,
            Field::Message => &self.message,
            Field::Honeypot => &self.honeypot,
        }
    }

    fn slot(&mut self, field: Field) -> &mut String {
        match field {
            Field::Name => &mut self.name,
            Field::Email => &mut self.email,
            Field::Subject => &mut self.subject,
            Field::Message => &mut self.message,
            Field::Honeypot => &mut self.honeypot,
        }
    }
}

pub type FieldErrors = BTreeMap<Field, &'static str>;

/// Checks every visible field. An empty `subjects` list makes the subject optional.
pub fn validate(fields: &ContactFields, subjects: &[String]) -> FieldErrors {
    let mut errors = FieldErrors::new();

    if fields.name.trim().is_empty() {
        errors.insert(Field::Name, "Please enter your name.");
    }

    let email = fields.email.trim();
    if email.is_empty() {
        errors.insert(Field::Email, "Please enter your email.");
    } else if !is_valid_email(email) {
        errors.insert(Field::Email, "Please enter a valid email address.");
    }

    if !subjects.is_empty() && !subjects.iter().any(|s| *s == fields.subject) {
        errors.insert(Field::Subject, "Please choose a subject.");
    }

    if fields.message.trim().chars().count() < MIN_MESSAGE_LEN {
        errors.insert(
            Field::Message,
            "Please provide a few details (at least 10 characters).",
        );
    }

    errors
}

/// What actually leaves the page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactPayload {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactPayload {
    fn from_fields(fields: &ContactFields) -> Self {
        Self {
            name: fields.name.trim().to_string(),
            email: fields.email.trim().to_string(),
            subject: fields.subject.clone(),
            message: fields.message.trim().to_string(),
        }
    }

    /// `application/x-www-form-urlencoded` body.
    pub fn to_form_body(&self) -> String {
        [
            ("name", &self.name),
            ("email", &self.email),
            ("subject", &self.subject),
            ("message", &self.message),
        ]
        .iter()
        .map(|(k, v)| format!("{}={}", k, urlencoding::encode(v)))
        .collect::<Vec<_>>()
        .join("&")
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TransportError {
    /// The endpoint answered with a non-success status.
    #[error("{detail}")]
    Rejected { status: u16, detail: String },
    #[error("{0}")]
    Network(String),
}

/// Shown when the endpoint rejects a submission without saying why.
pub const REJECTED_FALLBACK: &str = "Failed to send your message.";

/// Maps a non-success response to an error, preferring the endpoint's own text.
pub fn rejection(status: u16, body: &str) -> TransportError {
    let detail = match body.trim() {
        "" => REJECTED_FALLBACK.to_string(),
        text => text.to_string(),
    };
    TransportError::Rejected { status, detail }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ContactError {
    #[error("Spam detected.")]
    Spam,
    #[error("Please fix the errors and try again.")]
    Invalid(FieldErrors),
    #[error("Your message is already on its way.")]
    InFlight,
    #[error(transparent)]
    Transport(#[from] TransportError),
}

/// Delivers a validated submission somewhere.
pub trait ContactTransport {
    fn send(&self, payload: ContactPayload) -> impl Future<Output = Result<(), TransportError>>;
}

/// Field values, per-field errors, and the single in-flight submission of one form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactForm {
    fields: ContactFields,
    errors: FieldErrors,
    general: Option<String>,
    in_flight: bool,
    subjects: Vec<String>,
}

impl Default for ContactForm {
    fn default() -> Self {
        Self::new(DEFAULT_SUBJECTS.iter().copied())
    }
}

impl ContactForm {
    pub fn new<S: Into<String>>(subjects: impl IntoIterator<Item = S>) -> Self {
        Self {
            fields: ContactFields::default(),
            errors: FieldErrors::new(),
            general: None,
            in_flight: false,
            subjects: subjects.into_iter().map(Into::into).collect(),
        }
    }

    pub fn fields(&self) -> &ContactFields {
        &self.fields
    }

    pub fn value(&self, field: Field) -> &str {
        self.fields.get(field)
    }

    pub fn error(&self, field: Field) -> Option<&'static str> {
        self.errors.get(&field).copied()
    }

    pub fn general_error(&self) -> Option<&str> {
        self.general.as_deref()
    }

    pub fn is_submitting(&self) -> bool {
        self.in_flight
    }

    pub fn subjects(&self) -> &[String] {
        &self.subjects
    }

    /// Updates a field and clears that field's error.
    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        *self.fields.slot(field) = value.into();
        self.errors.remove(&field);
    }

    /// Runs the synchronous checks and, if they pass, marks the form in flight.
    ///
    /// Nothing is handed to a transport unless this returns `Ok`.
    pub fn begin_submit(&mut self) -> Result<ContactPayload, ContactError> {
        if self.in_flight {
            return Err(ContactError::InFlight);
        }
        self.general = None;

        if !self.fields.honeypot.trim().is_empty() {
            self.errors.clear();
            self.general = Some(ContactError::Spam.to_string());
            log::debug!("contact form honeypot filled, dropping submission");
            return Err(ContactError::Spam);
        }

        self.errors = validate(&self.fields, &self.subjects);
        if !self.errors.is_empty() {
            log::debug!("contact form invalid: {:?}", self.errors.keys());
            return Err(ContactError::Invalid(self.errors.clone()));
        }

        self.in_flight = true;
        Ok(ContactPayload::from_fields(&self.fields))
    }

    /// Records the transport outcome: success resets the form, failure keeps the values.
    pub fn finish_submit(&mut self, result: Result<(), TransportError>) -> Result<(), ContactError> {
        self.in_flight = false;
        match result {
            Ok(()) => {
                self.reset();
                Ok(())
            }
            Err(e) => {
                log::warn!("contact submission failed: {e}");
                self.general = Some(e.to_string());
                Err(e.into())
            }
        }
    }

    pub fn reset(&mut self) {
        self.fields = ContactFields::default();
        self.errors.clear();
        self.general = None;
    }
}

/// Validates, sends through `transport`, and records the outcome on `form`.
pub async fn submit<T: ContactTransport>(
    form: &mut ContactForm,
    transport: &T,
) -> Result<(), ContactError> {
    let payload = form.begin_submit()?;
    let result = transport.send(payload).await;
    form.finish_submit(result)
}

#[cfg(test)]
mod tests {
    use std::cell::{Cell, RefCell};

    use futures::executor::block_on;

    use super::*;

    #[derive(Default)]
    struct RecordingTransport {
        calls: Cell<usize>,
        last: RefCell<Option<ContactPayload>>,
        fail_with: Option<TransportError>,
    }

    impl ContactTransport for RecordingTransport {
        fn send(&self, payload: ContactPayload) -> impl Future<Output = Result<(), TransportError>> {
            self.calls.set(self.calls.get() + 1);
            *self.last.borrow_mut() = Some(payload);
            let result = match &self.fail_with {
                Some(e) => Err(e.clone()),
                None => Ok(()),
            };
            async move { result }
        }
    }

    fn filled_form() -> ContactForm {
        let mut form = ContactForm::default();
        form.set(Field::Name, "  Ada Lovelace ");
        form.set(Field::Email, "ada@example.com");
        form.set(Field::Subject, "Consulting");
        form.set(Field::Message, "Let's build an engine together.");
        form
    }

    #[test]
    fn test_email_pattern() {
        assert!(!is_valid_email("not-an-email"));
        assert!(is_valid_email("user@example.com"));
        assert!(!is_valid_email("user@example"));
        assert!(!is_valid_email("us er@example.com"));
        assert!(!is_valid_email("a@b@c.com"));
    }

    #[test]
    fn test_message_length_boundary() {
        let mut fields = ContactFields {
            name: "Ada".to_string(),
            email: "user@example.com".to_string(),
            subject: "Other".to_string(),
            message: "a".repeat(9),
            honeypot: String::new(),
        };
        let subjects = vec!["Other".to_string()];
        assert!(validate(&fields, &subjects).contains_key(&Field::Message));

        fields.message = "a".repeat(10);
        assert!(validate(&fields, &subjects).is_empty());

        // surrounding whitespace does not count
        fields.message = format!("  {}  ", "a".repeat(9));
        assert!(validate(&fields, &subjects).contains_key(&Field::Message));
    }

    #[test]
    fn test_empty_form_reports_every_field() {
        let mut form = ContactForm::default();
        let err = form.begin_submit().unwrap_err();
        let ContactError::Invalid(errors) = err else {
            panic!("expected validation errors");
        };
        assert_eq!(
            errors.keys().copied().collect::<Vec<_>>(),
            vec![Field::Name, Field::Email, Field::Subject, Field::Message]
        );
        assert_eq!(form.error(Field::Email), Some("Please enter your email."));
        assert!(!form.is_submitting());
    }

    #[test]
    fn test_subject_must_be_listed() {
        let mut form = filled_form();
        form.set(Field::Subject, "Pizza");
        assert!(form.begin_submit().is_err());
        assert_eq!(form.error(Field::Subject), Some("Please choose a subject."));

        // no list configured, no requirement
        let mut open = ContactForm::new(Vec::<String>::new());
        open.set(Field::Name, "Ada");
        open.set(Field::Email, "ada@example.com");
        open.set(Field::Message, "Long enough message");
        assert!(open.begin_submit().is_ok());
    }

    #[test]
    fn test_every_offered_subject_is_accepted() {
        let form = ContactForm::default();
        assert_eq!(form.subjects(), DEFAULT_SUBJECTS);

        for subject in form.subjects() {
            let mut form = filled_form();
            form.set(Field::Subject, subject.clone());
            assert!(form.begin_submit().is_ok(), "{subject} was offered but rejected");
            assert_eq!(form.value(Field::Subject), subject);
        }
    }

    #[test]
    fn test_rejection_detail() {
        assert_eq!(
            rejection(500, ""),
            TransportError::Rejected {
                status: 500,
                detail: REJECTED_FALLBACK.to_string()
            }
        );
        assert_eq!(rejection(502, " \n\t ").to_string(), REJECTED_FALLBACK);

        let err = rejection(422, "  Email address is blocked.\n");
        assert_eq!(
            err,
            TransportError::Rejected {
                status: 422,
                detail: "Email address is blocked.".to_string()
            }
        );
        // the banner shows the endpoint's text verbatim
        assert_eq!(ContactError::from(err).to_string(), "Email address is blocked.");
    }

    #[test]
    fn test_editing_a_field_clears_its_error() {
        let mut form = ContactForm::default();
        form.set(Field::Email, "not-an-email");
        let _ = form.begin_submit();
        assert!(form.error(Field::Email).is_some());
        assert!(form.error(Field::Name).is_some());

        form.set(Field::Email, "user@example.com");
        assert_eq!(form.error(Field::Email), None);
        assert!(form.error(Field::Name).is_some());
    }

    #[test]
    fn test_honeypot_never_reaches_transport() {
        let transport = RecordingTransport::default();
        let mut form = filled_form();
        form.set(Field::Honeypot, "ACME Corp");

        let res = block_on(submit(&mut form, &transport));
        assert_eq!(res, Err(ContactError::Spam));
        assert_eq!(transport.calls.get(), 0);
        assert_eq!(form.general_error(), Some("Spam detected."));
        assert!(!form.is_submitting());
    }

    #[test]
    fn test_invalid_form_never_reaches_transport() {
        let transport = RecordingTransport::default();
        let mut form = filled_form();
        form.set(Field::Email, "not-an-email");

        let res = block_on(submit(&mut form, &transport));
        assert!(matches!(res, Err(ContactError::Invalid(_))));
        assert_eq!(transport.calls.get(), 0);
    }

    #[test]
    fn test_success_sends_trimmed_payload_and_resets() {
        let transport = RecordingTransport::default();
        let mut form = filled_form();

        block_on(submit(&mut form, &transport)).unwrap();
        assert_eq!(transport.calls.get(), 1);
        let sent = transport.last.borrow().clone().unwrap();
        assert_eq!(sent.name, "Ada Lovelace");
        assert_eq!(sent.subject, "Consulting");

        assert_eq!(form.fields(), &ContactFields::default());
        assert_eq!(form.general_error(), None);
        assert!(!form.is_submitting());
    }

    #[test]
    fn test_failure_keeps_values_and_surfaces_detail() {
        let transport = RecordingTransport {
            fail_with: Some(TransportError::Rejected {
                status: 502,
                detail: "Upstream mailer unavailable".to_string(),
            }),
            ..Default::default()
        };
        let mut form = filled_form();

        let res = block_on(submit(&mut form, &transport));
        assert!(matches!(res, Err(ContactError::Transport(_))));
        assert_eq!(form.general_error(), Some("Upstream mailer unavailable"));
        assert_eq!(form.value(Field::Email), "ada@example.com");
        assert!(!form.is_submitting());

        // manual retry clears the banner before trying again
        let retry = RecordingTransport::default();
        block_on(submit(&mut form, &retry)).unwrap();
        assert_eq!(form.general_error(), None);
    }

    #[test]
    fn test_only_one_submission_in_flight() {
        let mut form = filled_form();
        let payload = form.begin_submit().unwrap();
        assert!(form.is_submitting());
        assert_eq!(payload.email, "ada@example.com");

        assert_eq!(form.begin_submit(), Err(ContactError::InFlight));

        form.finish_submit(Ok(())).unwrap();
        assert!(!form.is_submitting());
    }

    #[test]
    fn test_form_body_encoding() {
        let payload = ContactPayload {
            name: "Ada L".to_string(),
            email: "ada+site@example.com".to_string(),
            subject: "General inquiry".to_string(),
            message: "Hi & bye".to_string(),
        };
        assert_eq!(
            payload.to_form_body(),
            "name=Ada%20L&email=ada%2Bsite%40example.com&subject=General%20inquiry&message=Hi%20%26%20bye"
        );
    }
}
