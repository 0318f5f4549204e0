//! Net proceeds calculator bound to the page.

use std::sync::Arc;

use log::debug;

use super::page_fields::{read_number, read_percent_fraction};
use super::widget_traits::Widget;
use crate::config::SiteConfig;
use crate::formatting::format_whole_currency;
use crate::page::PageHandle;
use crate::proceeds::{estimate_proceeds, ProceedsInput, ProceedsResult};
use crate::trigger::Debouncer;

/// Node ids used by the proceeds calculator.
pub mod proceeds_nodes {
    pub const FORM: &str = "proceeds-form";
    pub const RESULT_PANEL: &str = "proceeds-result";

    pub const SALE_PRICE: &str = "proc-sale-price";
    pub const MORTGAGE: &str = "proc-mortgage";
    pub const COMMISSION: &str = "proc-commission";
    pub const CLOSING: &str = "proc-closing";
    pub const HOA: &str = "proc-hoa";
    pub const REPAIRS: &str = "proc-repairs";

    pub const RES_SALE_PRICE: &str = "res-sale-price";
    pub const RES_MORTGAGE: &str = "res-mortgage";
    pub const RES_COMMISSION: &str = "res-commission";
    pub const RES_CLOSING: &str = "res-closing";
    pub const RES_HOA: &str = "res-hoa";
    pub const RES_REPAIRS: &str = "res-repairs";
    pub const RES_NET: &str = "res-net";

    pub const BAR_PROCEEDS: &str = "res-bar-proceeds";
    pub const BAR_COSTS: &str = "res-bar-costs";
    pub const KEEP_LABEL: &str = "res-keep-label";
    pub const COST_LABEL: &str = "res-cost-label";

    /// Flag set on the net figure when it is below zero
    pub const NEGATIVE_CLASS: &str = "is-negative";
}

use proceeds_nodes as nodes;

struct ProceedsView {
    page: Arc<dyn PageHandle>,
}

impl ProceedsView {
    fn read_input(&self) -> ProceedsInput {
        let page = self.page.as_ref();
        ProceedsInput {
            sale_price: read_number(page, nodes::SALE_PRICE, "0"),
            mortgage_balance: read_number(page, nodes::MORTGAGE, "0"),
            commission_pct: read_percent_fraction(page, nodes::COMMISSION, "6"),
            closing_pct: read_percent_fraction(page, nodes::CLOSING, "2"),
            hoa_payoff: read_number(page, nodes::HOA, "0"),
            repairs: read_number(page, nodes::REPAIRS, "0"),
        }
    }

    fn recompute(&self) -> Option<ProceedsResult> {
        if !self.page.has_node(nodes::FORM) {
            debug!("Proceeds form is detached; skipping recompute");
            return None;
        }
        let input = self.read_input();
        let result = estimate_proceeds(&input)?;
        self.render(&input, &result);
        Some(result)
    }

    fn render(&self, input: &ProceedsInput, result: &ProceedsResult) {
        let page = self.page.as_ref();
        page.set_visible(nodes::RESULT_PANEL, true);

        page.set_text(nodes::RES_SALE_PRICE, &format_whole_currency(input.sale_price));
        for (id, amount) in [
            (nodes::RES_MORTGAGE, input.mortgage_balance),
            (nodes::RES_COMMISSION, result.commission_amount),
            (nodes::RES_CLOSING, result.closing_amount),
            (nodes::RES_HOA, input.hoa_payoff),
            (nodes::RES_REPAIRS, input.repairs),
        ] {
            page.set_text(id, &format!("-{}", format_whole_currency(amount)));
        }

        page.set_text(nodes::RES_NET, &format_whole_currency(result.net_proceeds));
        page.set_class(nodes::RES_NET, nodes::NEGATIVE_CLASS, result.is_negative());

        page.set_width_percent(nodes::BAR_PROCEEDS, result.keep_pct);
        page.set_width_percent(nodes::BAR_COSTS, result.cost_pct);
        page.set_text(nodes::KEEP_LABEL, &format!("You keep {}%", result.keep_pct));
        page.set_text(nodes::COST_LABEL, &format!("Costs {}%", result.cost_pct));
    }
}

/// Live net proceeds calculator.
pub struct ProceedsWidget {
    view: Arc<ProceedsView>,
    trigger: Debouncer<()>,
}

impl ProceedsWidget {
    pub fn new(page: Arc<dyn PageHandle>, config: &SiteConfig) -> Self {
        let view = Arc::new(ProceedsView { page });
        let target = Arc::clone(&view);
        let trigger = Debouncer::new(config.debounce_window, move |_: ()| {
            target.recompute();
        });
        Self { view, trigger }
    }

    /// Snapshot of the form as the estimator would see it right now.
    pub fn read_input(&self) -> ProceedsInput {
        self.view.read_input()
    }

    /// Recomputes immediately, bypassing the debounce. A non-positive sale
    /// price leaves the page untouched and returns `None`.
    pub fn recompute_now(&self) -> Option<ProceedsResult> {
        self.view.recompute()
    }

    pub fn is_pending(&self) -> bool {
        self.trigger.is_pending()
    }
}

impl Widget for ProceedsWidget {
    fn name(&self) -> &'static str {
        "proceeds"
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
