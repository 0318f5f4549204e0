//! Explicit registry of the widgets mounted on a page.

use std::sync::Arc;

use log::debug;

use super::contact_widget::ContactWidget;
use super::mortgage_widget::MortgageWidget;
use super::proceeds_widget::ProceedsWidget;
use super::valuation_widget::ValuationWidget;
use super::widget_traits::Widget;
use super::{contact_nodes, mortgage_nodes, proceeds_nodes, valuation_nodes};
use crate::config::SiteConfig;
use crate::page::PageHandle;

/// Independent widget instances, one per form found on the page.
#[derive(Default)]
pub struct WidgetRegistry {
    valuation: Option<ValuationWidget>,
    proceeds: Option<ProceedsWidget>,
    mortgage: Option<MortgageWidget>,
    contact: Option<ContactWidget>,
}

impl WidgetRegistry {
    /// Builds a widget for every form root present on the page. The live
    /// calculators compute once straight away from their default values.
    pub fn mount(page: Arc<dyn PageHandle>, config: &SiteConfig) -> Self {
        let mut registry = Self::default();

        if page.has_node(valuation_nodes::FORM) {
            registry.valuation = Some(ValuationWidget::new(Arc::clone(&page), config));
        }
        if page.has_node(proceeds_nodes::FORM) {
            let widget = ProceedsWidget::new(Arc::clone(&page), config);
            widget.recompute_now();
            registry.proceeds = Some(widget);
        }
        if page.has_node(mortgage_nodes::FORM) {
            let widget = MortgageWidget::new(Arc::clone(&page), config);
            widget.recompute_now();
            registry.mortgage = Some(widget);
        }
        if page.has_node(contact_nodes::FORM) {
            registry.contact = Some(ContactWidget::new(
                Arc::clone(&page),
                ContactWidget::default_fields(),
                config,
            ));
        }

        debug!("Mounted widgets: {:?}", registry.mounted());
        registry
    }

    pub fn valuation(&self) -> Option<&ValuationWidget> {
        self.valuation.as_ref()
    }

    pub fn proceeds(&self) -> Option<&ProceedsWidget> {
        self.proceeds.as_ref()
    }

    pub fn mortgage(&self) -> Option<&MortgageWidget> {
        self.mortgage.as_ref()
    }

    pub fn contact(&self) -> Option<&ContactWidget> {
        self.contact.as_ref()
    }

    pub fn widgets(&self) -> Vec<&dyn Widget> {
        let mut widgets: Vec<&dyn Widget> = Vec::new();
        if let Some(widget) = &self.valuation {
            widgets.push(widget);
        }
        if let Some(widget) = &self.proceeds {
            widgets.push(widget);
        }
        if let Some(widget) = &self.mortgage {
            widgets.push(widget);
        }
        if let Some(widget) = &self.contact {
            widgets.push(widget);
        }
        widgets
    }

    /// Names of the mounted widgets, in mount order.
    pub fn mounted(&self) -> Vec<&'static str> {
        self.widgets().iter().map(|widget| widget.name()).collect()
    }

    /// Routes an input event from the form rooted at `form_id`. Returns
    /// `false` if no mounted widget owns that form.
    pub fn notify_input(&self, form_id: &str) -> bool {
        match self
            .widgets()
            .into_iter()
            .find(|widget| widget.root_node() == form_id)
        {
            Some(widget) => {
                widget.on_input();
                true
            }
            None => false,
        }
    }

    /// Releases every pending timer and drops the widgets.
    pub fn unmount(self) {
        for widget in self.widgets() {
            widget.teardown();
        }
        debug!("Unmounted widgets");
    }
}
