//! Formatting module - currency/number display and loose numeric parsing.

mod number_format;


pub use number_format::{
    finite_or_zero, format_currency_with_cents, format_integer, format_whole_currency,
    parse_loose_integer, parse_loose_number, round_half_up, to_display_decimal,
};
