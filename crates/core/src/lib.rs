//! Agent Site Core - client-side estimators for the marketing site.
//!
//! Three calculators (home value range, seller net proceeds, mortgage
//! payment with amortization) as pure functions over explicit input and
//! result records, plus thin widgets that bind them to a hosting page
//! through the [`page::PageHandle`] trait.

pub mod config;
pub mod constants;
pub mod contact;
pub mod errors;
pub mod formatting;
pub mod mortgage;
pub mod page;
pub mod proceeds;
pub mod step_form;
pub mod trigger;
pub mod valuation;
pub mod widgets;

// Re-export the estimator entry points
pub use mortgage::estimate_mortgage;
pub use proceeds::estimate_proceeds;
pub use valuation::estimate_value;

// Re-export error types
pub use errors::Error;
pub use errors::Result;
