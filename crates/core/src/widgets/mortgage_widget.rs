//! Mortgage calculator bound to the page.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use log::debug;

use super::page_fields::{read_integer, read_number, read_text};
use super::widget_traits::Widget;
use crate::config::SiteConfig;
use crate::constants::MAX_TERM_YEARS;
use crate::formatting::{format_currency_with_cents, format_whole_currency};
use crate::mortgage::{
    estimate_mortgage, AmortizationRow, DownPaymentKind, MortgageInput, MortgageResult,
};
use crate::page::PageHandle;
use crate::trigger::Debouncer;

/// Node ids used by the mortgage calculator.
pub mod mortgage_nodes {
    pub const FORM: &str = "mortgage-form";
    pub const RESULT_PANEL: &str = "mortgage-result";

    pub const PRICE: &str = "mort-price";
    pub const DOWN: &str = "mort-down";
    pub const DOWN_TYPE: &str = "mort-down-type";
    pub const TERM: &str = "mort-term";
    pub const RATE: &str = "mort-rate";

    pub const RES_TOTAL_MONTHLY: &str = "res-total-monthly";
    pub const RES_PI: &str = "res-pi";
    pub const RES_TAX: &str = "res-tax";
    pub const RES_INSURANCE: &str = "res-insurance";
    pub const RES_LOAN_AMOUNT: &str = "res-loan-amount";

    pub const CHART: &str = "mortgage-chart";
    pub const AMORT_BODY: &str = "amort-body";
    pub const AMORT_SECTION: &str = "amort-section";
    pub const AMORT_TOGGLE: &str = "amort-toggle";

    pub const SHOW_SCHEDULE_LABEL: &str = "Show Amortization Schedule";
    pub const HIDE_SCHEDULE_LABEL: &str = "Hide Amortization Schedule";
}

use mortgage_nodes as nodes;

struct MortgageView {
    page: Arc<dyn PageHandle>,
}

impl MortgageView {
    fn read_input(&self) -> MortgageInput {
        let page = self.page.as_ref();
        let term_years = read_integer(page, nodes::TERM, "30").clamp(0, i64::from(MAX_TERM_YEARS));
        MortgageInput {
            home_price: read_number(page, nodes::PRICE, "0"),
            down_payment: read_number(page, nodes::DOWN, "20"),
            down_payment_kind: DownPaymentKind::from_value(&read_text(
                page,
                nodes::DOWN_TYPE,
                "percent",
            )),
            term_years: term_years as u32,
            annual_rate_pct: read_number(page, nodes::RATE, "7"),
        }
    }

    fn recompute(&self) -> Option<MortgageResult> {
        if !self.page.has_node(nodes::FORM) {
            debug!("Mortgage form is detached; skipping recompute");
            return None;
        }
        let result = estimate_mortgage(&self.read_input())?;
        self.render(&result);
        Some(result)
    }

    fn render(&self, result: &MortgageResult) {
        let page = self.page.as_ref();
        page.set_visible(nodes::RESULT_PANEL, true);

        page.set_text(
            nodes::RES_TOTAL_MONTHLY,
            &format_currency_with_cents(result.total_monthly),
        );
        page.set_text(
            nodes::RES_PI,
            &format_currency_with_cents(result.monthly_principal_interest),
        );
        page.set_text(nodes::RES_TAX, &format_currency_with_cents(result.monthly_tax));
        page.set_text(
            nodes::RES_INSURANCE,
            &format_currency_with_cents(result.monthly_insurance),
        );
        page.set_text(nodes::RES_LOAN_AMOUNT, &format_whole_currency(result.loan_amount));

        page.render_chart(nodes::CHART, &result.payment_segments());

        if page.has_node(nodes::AMORT_BODY) {
            let rows = result
                .amortization_schedule
                .iter()
                .map(schedule_cells)
                .collect();
            page.replace_table_rows(nodes::AMORT_BODY, rows);
        }
    }
}

fn schedule_cells(row: &AmortizationRow) -> Vec<String> {
    vec![
        row.period.to_string(),
        format_currency_with_cents(row.payment),
        format_currency_with_cents(row.principal_portion),
        format_currency_with_cents(row.interest_portion),
        format_whole_currency(row.remaining_balance),
    ]
}

/// Live mortgage calculator with a collapsible amortization table.
pub struct MortgageWidget {
    view: Arc<MortgageView>,
    trigger: Debouncer<()>,
    schedule_visible: AtomicBool,
}

impl MortgageWidget {
    pub fn new(page: Arc<dyn PageHandle>, config: &SiteConfig) -> Self {
        let view = Arc::new(MortgageView { page });
        let target = Arc::clone(&view);
        let trigger = Debouncer::new(config.debounce_window, move |_: ()| {
            target.recompute();
        });
        Self {
            view,
            trigger,
            schedule_visible: AtomicBool::new(false),
        }
    }

    pub fn read_input(&self) -> MortgageInput {
        self.view.read_input()
    }

    /// Recomputes immediately, bypassing the debounce. A non-positive home
    /// price leaves the page untouched and returns `None`.
    pub fn recompute_now(&self) -> Option<MortgageResult> {
        self.view.recompute()
    }

    pub fn is_pending(&self) -> bool {
        self.trigger.is_pending()
    }

    pub fn is_schedule_visible(&self) -> bool {
        self.schedule_visible.load(Ordering::SeqCst)
    }

    /// Shows or hides the amortization section. Returns the new visibility.
    pub fn toggle_schedule(&self) -> bool {
        let visible = !self.schedule_visible.fetch_xor(true, Ordering::SeqCst);
        let page = self.view.page.as_ref();
        page.set_visible(nodes::AMORT_SECTION, visible);
        page.set_text(
            nodes::AMORT_TOGGLE,
            if visible {
                nodes::HIDE_SCHEDULE_LABEL
            } else {
                nodes::SHOW_SCHEDULE_LABEL
            },
        );
        visible
    }
}

impl Widget for MortgageWidget {
    fn name(&self) -> &'static str {
        "mortgage"
    }

    fn root_node(&self) -> &'static str {
        nodes::FORM
    }

    fn on_input(&self) {
        self.trigger.trigger(());
    }

    fn teardown(&self) {
        self.trigger.cancel();
    }
}
