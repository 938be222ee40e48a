use serde::Serialize;
use std::fmt;

pub const QUOTE_COUNT: usize = 5;

// Percentage points, ascending
pub const RATE_OFFSETS: [f64; QUOTE_COUNT] = [-0.25, -0.125, 0.0, 0.125, 0.25];

pub const TERM_MONTHS: u32 = 30 * 12;

pub const INVALID_INPUT: &str = "Invalid input";

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RateQuote {
    pub rate: f64,
    pub payment: f64,
    pub valid: bool,
}

impl fmt::Display for RateQuote {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.valid {
            write!(f, "{:.3}% | ${:.2} + fees", self.rate, self.payment)
        } else {
            write!(f, "{:.3}% | Invalid rate", self.rate)
        }
    }
}

/// Monthly payment for a fixed-rate loan, `annual_rate` in percent.
///
/// Uses `r / (1 - (1+r)^-n)` through `ln_1p`/`exp_m1` so that rates below f64
/// precision tend to straight-line repayment instead of dividing by zero, and
/// large rates tend to `loan * r` instead of overflowing.
pub fn monthly_payment(loan_amount: f64, annual_rate: f64, months: u32) -> f64 {
    let monthly_rate = annual_rate / (12.0 * 100.0);
    if monthly_rate == 0.0 {
        return loan_amount / months as f64;
    }
    let paid_down = -(-(months as f64) * monthly_rate.ln_1p()).exp_m1();
    loan_amount * monthly_rate / paid_down
}

fn parse_number(text: &str) -> Option<f64> {
    text.parse::<f64>().ok().filter(|value| value.is_finite())
}

/// Builds the five quotes around `rate_text`, or `None` when any input fails
/// to parse or is out of range. Validation is all-or-nothing.
pub fn quote_table(
    budget_text: &str,
    down_payment_text: &str,
    rate_text: &str,
) -> Option<[RateQuote; QUOTE_COUNT]> {
    let budget = parse_number(budget_text)?;
    let down_payment_percent = parse_number(down_payment_text)?;
    let rate = parse_number(rate_text)?;

    if budget <= 0.0 || !(0.0..=100.0).contains(&down_payment_percent) || rate < 0.0 {
        return None;
    }

    let down_payment = budget * (down_payment_percent / 100.0);
    let loan_amount = budget - down_payment;

    Some(RATE_OFFSETS.map(|offset| {
        let candidate = rate + offset;
        if candidate < 0.0 {
            RateQuote {
                rate: candidate,
                payment: 0.0,
                valid: false,
            }
        } else {
            let payment = monthly_payment(loan_amount, candidate, TERM_MONTHS);
            // Only absurd rates overflow here
            let valid = payment.is_finite();
            RateQuote {
                rate: candidate,
                payment: if valid { payment } else { 0.0 },
                valid,
            }
        }
    }))
}

pub fn calculate(
    budget_text: &str,
    down_payment_text: &str,
    rate_text: &str,
) -> [String; QUOTE_COUNT] {
    match quote_table(budget_text, down_payment_text, rate_text) {
        Some(quotes) => quotes.map(|quote| quote.to_string()),
        None => std::array::from_fn(|_| INVALID_INPUT.to_string()),
    }
}
