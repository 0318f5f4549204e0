//! Multi-step home valuation tool with a lead-capture gate.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use log::debug;

use super::page_fields::{read_integer, read_number};
use super::widget_traits::Widget;
use crate::config::SiteConfig;
use crate::formatting::format_whole_currency;
use crate::page::PageHandle;
use crate::step_form::{StepForm, StepState};
use crate::valuation::{
    estimate_value_as_of, validate_lead, LeadSubmission, PropertyCondition, ValuationInput,
    ValuationResult,
};

/// Node ids used by the valuation tool.
pub mod valuation_nodes {
    pub const FORM: &str = "valuation-form";

    /// Step panels are `val-step-0`, `val-step-1`, ...
    pub const STEP_PREFIX: &str = "val-step-";
    /// Progress dots are `val-progress-0`, `val-progress-1`, ...
    pub const PROGRESS_PREFIX: &str = "val-progress-";
    /// Condition cards are `condition-excellent`, `condition-good`, ...
    pub const CONDITION_PREFIX: &str = "condition-";

    pub const SQFT: &str = "val-sqft";
    pub const BEDS: &str = "val-beds";
    pub const BATHS: &str = "val-baths";
    pub const YEAR: &str = "val-year";

    pub const GATE: &str = "email-gate";
    pub const GATE_NAME: &str = "email-gate-name";
    pub const GATE_EMAIL: &str = "email-gate-email";

    pub const RESULT_PANEL: &str = "valuation-result";
    pub const RESULT_LOW: &str = "result-low";
    pub const RESULT_HIGH: &str = "result-high";

    pub const ACTIVE_CLASS: &str = "active";
    pub const COMPLETED_CLASS: &str = "completed";
    pub const SELECTED_CLASS: &str = "selected";
}

use valuation_nodes as nodes;

struct ValuationState {
    steps: StepForm,
    condition: PropertyCondition,
    result: Option<ValuationResult>,
}

/// Drives the step form, the condition cards and the gated estimate.
pub struct ValuationWidget {
    page: Arc<dyn PageHandle>,
    valuation_year: i64,
    progress_dots: usize,
    state: Mutex<ValuationState>,
}

impl ValuationWidget {
    /// Counts the step panels and progress dots present on the page and
    /// shows the first step.
    pub fn new(page: Arc<dyn PageHandle>, config: &SiteConfig) -> Self {
        let step_count = count_indexed_nodes(page.as_ref(), nodes::STEP_PREFIX);
        let progress_dots = count_indexed_nodes(page.as_ref(), nodes::PROGRESS_PREFIX);
        let widget = Self {
            page,
            valuation_year: config.valuation_year,
            progress_dots,
            state: Mutex::new(ValuationState {
                steps: StepForm::new(step_count),
                condition: PropertyCondition::default(),
                result: None,
            }),
        };
        widget.show_current_step(&widget.lock().steps);
        widget
    }

    pub fn current_step(&self) -> usize {
        self.lock().steps.current()
    }

    pub fn step_count(&self) -> usize {
        self.lock().steps.step_count()
    }

    /// Advances the form; a no-op on the last step.
    pub fn next(&self) -> bool {
        let mut state = self.lock();
        let moved = state.steps.next();
        if moved {
            self.show_current_step(&state.steps);
        }
        moved
    }

    /// Goes back one step; a no-op on the first step.
    pub fn prev(&self) -> bool {
        let mut state = self.lock();
        let moved = state.steps.prev();
        if moved {
            self.show_current_step(&state.steps);
        }
        moved
    }

    /// Marks one condition card as selected.
    pub fn select_condition(&self, value: &str) -> PropertyCondition {
        let condition = PropertyCondition::from_value(value);
        self.lock().condition = condition;
        for card in PropertyCondition::selectable() {
            self.page.set_class(
                &format!("{}{}", nodes::CONDITION_PREFIX, card.as_str()),
                nodes::SELECTED_CLASS,
                card == condition,
            );
        }
        condition
    }

    pub fn condition(&self) -> PropertyCondition {
        self.lock().condition
    }

    /// Property attributes as currently entered.
    pub fn read_input(&self) -> ValuationInput {
        let page = self.page.as_ref();
        ValuationInput {
            square_footage: read_number(page, nodes::SQFT, "1500"),
            bedrooms: read_integer(page, nodes::BEDS, "3"),
            bathrooms: read_integer(page, nodes::BATHS, "2"),
            year_built: read_integer(page, nodes::YEAR, "1990"),
            condition: self.condition(),
        }
    }

    /// Reads the gate fields and submits them. Returns `None` when the gate
    /// fields are missing or the lead is invalid.
    pub fn submit_gate(&self) -> Option<ValuationResult> {
        let page = self.page.as_ref();
        let name = page.field_value(nodes::GATE_NAME)?;
        let email = page.field_value(nodes::GATE_EMAIL)?;
        self.submit_lead(&LeadSubmission::new(name, email))
    }

    /// Validates the lead and, only if it passes, computes and reveals the
    /// estimate. An invalid lead changes nothing.
    pub fn submit_lead(&self, lead: &LeadSubmission) -> Option<ValuationResult> {
        if let Err(err) = validate_lead(lead) {
            debug!("Valuation gate rejected: {}", err);
            return None;
        }

        let result = estimate_value_as_of(&self.read_input(), self.valuation_year);
        self.lock().result = Some(result);

        let page = self.page.as_ref();
        page.set_visible(nodes::GATE, false);
        page.set_visible(nodes::RESULT_PANEL, true);
        page.set_text(nodes::RESULT_LOW, &format_whole_currency(result.low));
        page.set_text(nodes::RESULT_HIGH, &format_whole_currency(result.high));
        Some(result)
    }

    /// Last revealed estimate.
    pub fn result(&self) -> Option<ValuationResult> {
        self.lock().result
    }

    fn show_current_step(&self, steps: &StepForm) {
        let page = self.page.as_ref();
        for index in 0..steps.step_count() {
            page.set_class(
                &format!("{}{}", nodes::STEP_PREFIX, index),
                nodes::ACTIVE_CLASS,
                steps.state_of(index) == StepState::Active,
            );
        }
        for (index, dot_state) in steps.states(self.progress_dots).into_iter().enumerate() {
            let id = format!("{}{}", nodes::PROGRESS_PREFIX, index);
            page.set_class(&id, nodes::COMPLETED_CLASS, dot_state == StepState::Completed);
            page.set_class(&id, nodes::ACTIVE_CLASS, dot_state == StepState::Active);
        }
    }

    fn lock(&self) -> MutexGuard<'_, ValuationState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Widget for ValuationWidget {
    fn name(&self) -> &'static str {
        "valuation"
    }

    fn root_node(&self) -> &'static str {
        nodes::FORM
    }
}

/// Number of consecutive `{prefix}0`, `{prefix}1`, ... nodes on the page.
fn count_indexed_nodes(page: &dyn PageHandle, prefix: &str) -> usize {
    (0..)
        .take_while(|index| page.has_node(&format!("{}{}", prefix, index)))
        .count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::page::MemoryPage;

    const YEAR: i64 = 2025;

    fn valuation_page() -> Arc<MemoryPage> {
        Arc::new(
            MemoryPage::new()
                .with_nodes([
                    nodes::FORM,
                    "val-step-0",
                    "val-step-1",
                    "val-step-2",
                    "val-progress-0",
                    "val-progress-1",
                    "val-progress-2",
                    "condition-excellent",
                    "condition-good",
                    "condition-fair",
                    "condition-needs-work",
                    nodes::GATE,
                    nodes::RESULT_PANEL,
                    nodes::RESULT_LOW,
                    nodes::RESULT_HIGH,
                ])
                .with_field(nodes::SQFT, "2,000")
                .with_field(nodes::BEDS, "3")
                .with_field(nodes::BATHS, "2")
                .with_field(nodes::YEAR, "2025")
                .with_field(nodes::GATE_NAME, "Jordan")
                .with_field(nodes::GATE_EMAIL, "jordan@example.com"),
        )
    }

    fn widget(page: &Arc<MemoryPage>) -> ValuationWidget {
        let config = SiteConfig {
            valuation_year: YEAR,
            ..SiteConfig::default()
        };
        ValuationWidget::new(page.clone(), &config)
    }

    #[test]
    fn test_mount_shows_first_step() {
        let page = valuation_page();
        let widget = widget(&page);

        assert_eq!(widget.step_count(), 3);
        assert_eq!(widget.current_step(), 0);
        assert!(page.has_class("val-step-0", "active"));
        assert!(!page.has_class("val-step-1", "active"));
        assert!(page.has_class("val-progress-0", "active"));
        assert!(!page.has_class("val-progress-0", "completed"));
    }

    #[test]
    fn test_navigation_updates_progress() {
        let page = valuation_page();
        let widget = widget(&page);

        assert!(widget.next());
        assert!(widget.next());
        assert!(!widget.next());
        assert_eq!(widget.current_step(), 2);
        assert!(page.has_class("val-step-2", "active"));
        assert!(!page.has_class("val-step-0", "active"));
        assert!(page.has_class("val-progress-0", "completed"));
        assert!(page.has_class("val-progress-1", "completed"));
        assert!(page.has_class("val-progress-2", "active"));

        assert!(widget.prev());
        assert!(page.has_class("val-step-1", "active"));
        assert!(!page.has_class("val-progress-1", "completed"));
        assert!(page.has_class("val-progress-1", "active"));
        assert!(!page.has_class("val-progress-2", "active"));
    }

    #[test]
    fn test_select_condition_marks_single_card() {
        let page = valuation_page();
        let widget = widget(&page);

        widget.select_condition("fair");
        widget.select_condition("excellent");
        assert_eq!(widget.condition(), PropertyCondition::Excellent);
        assert!(page.has_class("condition-excellent", "selected"));
        assert!(!page.has_class("condition-fair", "selected"));
        assert!(!page.has_class("condition-good", "selected"));
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let page = Arc::new(MemoryPage::new().with_nodes([nodes::FORM]));
        let widget = ValuationWidget::new(page, &SiteConfig::default());
        assert_eq!(widget.read_input(), ValuationInput::default());
    }

    #[test]
    fn test_valid_gate_reveals_estimate() {
        let page = valuation_page();
        let widget = widget(&page);

        let result = widget.submit_gate().unwrap();
        assert_eq!(result.low, 376_000.0);
        assert_eq!(result.high, 460_000.0);
        assert_eq!(widget.result(), Some(result));
        assert_eq!(page.is_visible(nodes::GATE), Some(false));
        assert_eq!(page.is_visible(nodes::RESULT_PANEL), Some(true));
        assert_eq!(page.text(nodes::RESULT_LOW).as_deref(), Some("$376,000"));
        assert_eq!(page.text(nodes::RESULT_HIGH).as_deref(), Some("$460,000"));
    }

    #[test]
    fn test_invalid_gate_does_nothing() {
        let page = valuation_page();
        page.set_field(nodes::GATE_EMAIL, "jordan@example");
        let widget = widget(&page);
        widget.next();
        let writes = page.write_count();

        assert!(widget.submit_gate().is_none());
        assert_eq!(widget.result(), None);
        assert_eq!(widget.current_step(), 1);
        assert_eq!(page.write_count(), writes);
        assert_eq!(page.text(nodes::RESULT_LOW), None);
    }

    #[test]
    fn test_gate_without_fields_is_ignored() {
        let page = valuation_page();
        page.remove_node(nodes::GATE_NAME);
        let widget = widget(&page);
        assert!(widget.submit_gate().is_none());
    }

    #[test]
    fn test_condition_feeds_estimate() {
        let page = valuation_page();
        let widget = widget(&page);
        widget.select_condition("needs-work");
        let result = widget
            .submit_lead(&LeadSubmission::new("Jordan", "jordan@example.com"))
            .unwrap();
        // 2000 * 185 * 0.7 + 48000 = 307000 -> 276300 / 337700
        assert_eq!(result.low, 276_000.0);
        assert_eq!(result.high, 338_000.0);
    }
}
