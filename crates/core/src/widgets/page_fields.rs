//! Field readers that fall back to defaults instead of failing.

use crate::formatting::{parse_loose_integer, parse_loose_number};
use crate::page::PageHandle;

/// Field text, or `default` when the node is absent.
pub(crate) fn read_text(page: &dyn PageHandle, id: &str, default: &str) -> String {
    page.field_value(id).unwrap_or_else(|| default.to_string())
}

pub(crate) fn read_number(page: &dyn PageHandle, id: &str, default: &str) -> f64 {
    parse_loose_number(&read_text(page, id, default))
}

pub(crate) fn read_integer(page: &dyn PageHandle, id: &str, default: &str) -> i64 {
    parse_loose_integer(&read_text(page, id, default))
}

/// Whole-number percent field converted to a fraction.
pub(crate) fn read_percent_fraction(page: &dyn PageHandle, id: &str, default: &str) -> f64 {
    read_number(page, id, default) / 100.0
}
