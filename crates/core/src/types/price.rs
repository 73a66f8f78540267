//! EUR price formatting.
//!
//! Prices are decimal euro amounts; display follows Italian conventions:
//! `.` groups thousands, `,` separates cents, and whole-euro amounts omit
//! the cents entirely (`€1.250` rather than `€1.250,00`).

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

/// Format a euro amount for display, e.g. `€12.500` or `€95,50`.
#[must_use]
pub fn format_eur(amount: Decimal) -> String {
    let cents = (amount * Decimal::from(100))
        .round()
        .to_i128()
        .unwrap_or(0);
    let negative = cents < 0;
    let cents = cents.unsigned_abs();

    let euros = group_thousands(cents / 100);
    let fraction = cents % 100;

    let mut out = String::from("€");
    if negative {
        out.insert(0, '-');
    }
    out.push_str(&euros);
    if fraction != 0 {
        out.push_str(&format!(",{fraction:02}"));
    }
    out
}

/// Group a non-negative integer with `.` thousands separators.
fn group_thousands(mut value: u128) -> String {
    let mut groups = Vec::new();
    loop {
        let chunk = value % 1000;
        value /= 1000;
        if value == 0 {
            groups.push(chunk.to_string());
            break;
        }
        groups.push(format!("{chunk:03}"));
    }
    groups.reverse();
    groups.join(".")
}
