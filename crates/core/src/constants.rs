/// Base price per square foot used by the valuation heuristic
pub const BASE_PRICE_PER_SQFT: f64 = 185.0;

/// Flat bonus per bedroom
pub const BEDROOM_BONUS: f64 = 8_000.0;

/// Flat bonus per bathroom
pub const BATHROOM_BONUS: f64 = 12_000.0;

/// Value lost per year of building age
pub const AGE_PENALTY_PER_YEAR: f64 = 0.003;

/// Lower bound of the age adjustment (age penalty caps at 25%)
pub const MIN_AGE_ADJUSTMENT: f64 = 0.75;

/// Spread applied below and above the base price
pub const VALUATION_LOW_FACTOR: f64 = 0.9;
pub const VALUATION_HIGH_FACTOR: f64 = 1.1;

/// Estimates are rounded to the nearest multiple of this amount
pub const VALUATION_ROUNDING_STEP: f64 = 1_000.0;

/// Annual property tax as a fraction of home price
pub const ANNUAL_PROPERTY_TAX_RATE: f64 = 0.0125;

/// Annual homeowner's insurance as a fraction of home price
pub const ANNUAL_INSURANCE_RATE: f64 = 0.004;

pub const MONTHS_PER_YEAR: u32 = 12;

/// Longest loan term accepted; longer terms are capped to it
pub const MAX_TERM_YEARS: u32 = 50;

/// Default quiet period before a recompute fires (milliseconds)
pub const DEFAULT_DEBOUNCE_MS: u64 = 200;

/// Default simulated latency between contact submission and success (milliseconds)
pub const DEFAULT_SUBMISSION_DELAY_MS: u64 = 1_200;

/// Decimal places for itemized currency display
pub const DISPLAY_DECIMAL_PRECISION: u32 = 2;
