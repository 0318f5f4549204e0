//! Generic contact form: validation, simulated submission, success state.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use log::{debug, info};

use super::page_fields::read_text;
use super::widget_traits::Widget;
use crate::config::SiteConfig;
use crate::contact::{validate_contact_form, ContactField, FieldKind};
use crate::errors::ValidationError;
use crate::page::PageHandle;

/// Node ids used by the contact form. Field `x` lives at `contact-x`, its
/// group at `contact-x-group` and its message at `contact-x-error`.
pub mod contact_nodes {
    pub const FORM: &str = "contact-form";
    pub const FIELD_PREFIX: &str = "contact-";
    pub const SUBMIT: &str = "contact-submit";

    pub const SUCCESS: &str = "contact-success";
    pub const SUCCESS_TITLE: &str = "contact-success-title";
    pub const SUCCESS_TEXT: &str = "contact-success-text";

    pub const ERROR_CLASS: &str = "error";
    pub const LOADING_CLASS: &str = "loading";

    pub const SUCCESS_TITLE_TEXT: &str = "Message Sent!";
    pub const SUCCESS_BODY_TEXT: &str =
        "Thank you for reaching out. I'll get back to you shortly.";

    pub fn field(name: &str) -> String {
        format!("{}{}", FIELD_PREFIX, name)
    }

    pub fn group(name: &str) -> String {
        format!("{}{}-group", FIELD_PREFIX, name)
    }

    pub fn error(name: &str) -> String {
        format!("{}{}-error", FIELD_PREFIX, name)
    }
}

use contact_nodes as nodes;

/// What happened to a submission attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Passed validation and reached the success state
    Sent,
    /// Failed validation; every failing field is listed
    Rejected(Vec<ValidationError>),
    /// Ignored because a previous submission is still in flight
    InFlight,
}

pub struct ContactWidget {
    page: Arc<dyn PageHandle>,
    fields: Vec<ContactField>,
    submission_delay: Duration,
    submitting: AtomicBool,
}

impl ContactWidget {
    /// `fields` are templates; their values are read from the page on submit.
    pub fn new(page: Arc<dyn PageHandle>, fields: Vec<ContactField>, config: &SiteConfig) -> Self {
        Self {
            page,
            fields,
            submission_delay: config.submission_delay,
            submitting: AtomicBool::new(false),
        }
    }

    /// Name, email, phone (all required) and an optional message.
    pub fn default_fields() -> Vec<ContactField> {
        vec![
            ContactField::new("name", FieldKind::Text, true),
            ContactField::new("email", FieldKind::Email, true),
            ContactField::new("phone", FieldKind::Tel, true),
            ContactField::new("message", FieldKind::Textarea, false),
        ]
    }

    /// Field templates filled with the values currently on the page.
    pub fn read_fields(&self) -> Vec<ContactField> {
        self.fields
            .iter()
            .map(|field| {
                let value = read_text(self.page.as_ref(), &nodes::field(&field.name), "");
                field.clone().with_value(value)
            })
            .collect()
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting.load(Ordering::SeqCst)
    }

    /// Validates, waits out the simulated latency, then swaps the form for
    /// the success message.
    pub async fn submit(&self) -> SubmitOutcome {
        if self
            .submitting
            .compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
            .is_err()
        {
            debug!("Contact form submission already in flight");
            return SubmitOutcome::InFlight;
        }
        // Released on every exit, including when this future is dropped mid-delay.
        let in_flight = InFlightGuard { widget: self };

        self.clear_errors();
        if let Err(errors) = validate_contact_form(&self.read_fields()) {
            self.show_errors(&errors);
            return SubmitOutcome::Rejected(errors);
        }

        let page = self.page.as_ref();
        page.set_class(nodes::SUBMIT, nodes::LOADING_CLASS, true);
        tokio::time::sleep(self.submission_delay).await;
        drop(in_flight);

        page.set_visible(nodes::FORM, false);
        page.set_visible(nodes::SUCCESS, true);
        page.set_text(nodes::SUCCESS_TITLE, nodes::SUCCESS_TITLE_TEXT);
        page.set_text(nodes::SUCCESS_TEXT, nodes::SUCCESS_BODY_TEXT);

        info!("Contact form submitted");
        SubmitOutcome::Sent
    }

    /// Clears a field's error mark as soon as the user edits it.
    pub fn on_field_input(&self, name: &str) {
        self.page
            .set_class(&nodes::group(name), nodes::ERROR_CLASS, false);
    }

    fn clear_errors(&self) {
        for field in &self.fields {
            self.page
                .set_class(&nodes::group(&field.name), nodes::ERROR_CLASS, false);
        }
    }

    fn show_errors(&self, errors: &[ValidationError]) {
        for err in errors {
            self.page
                .set_class(&nodes::group(err.field()), nodes::ERROR_CLASS, true);
            self.page
                .set_text(&nodes::error(err.field()), err.user_message());
        }
    }
}

/// Clears the loading state and the in-flight flag when dropped.
struct InFlightGuard<'a> {
    widget: &'a ContactWidget,
}

impl Drop for InFlightGuard<'_> {
    fn drop(&mut self) {
        self.widget
            .page
            .set_class(nodes::SUBMIT, nodes::LOADING_CLASS, false);
        self.widget.submitting.store(false, Ordering::SeqCst);
    }
}

impl Widget for ContactWidget {
    fn name(&self) -> &'static str {
        "contact"
    }

    fn root_node(&self) -> &'static str {
        nodes::FORM
    }
}
