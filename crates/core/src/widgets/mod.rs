//! Widgets module - thin adapters between estimators and the page.
//!
//! Each widget owns its page handle, its own state and (for the live
//! calculators) its own debounce timer. Nothing is shared between widgets.

mod contact_widget;
mod mortgage_widget;
mod page_fields;
mod proceeds_widget;
mod registry;
mod valuation_widget;
mod widget_traits;

pub use contact_widget::{contact_nodes, ContactWidget, SubmitOutcome};
pub use mortgage_widget::{mortgage_nodes, MortgageWidget};
pub use proceeds_widget::{proceeds_nodes, ProceedsWidget};
pub use registry::WidgetRegistry;
pub use valuation_widget::{valuation_nodes, ValuationWidget};
pub use widget_traits::Widget;
