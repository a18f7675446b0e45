//! Text rendering of cost breakdowns

use std::fmt::Write;

use crate::pricing::CostBreakdown;

pub const DISCLAIMER: &str =
    "This calculator provides estimated costs based on inputs and platform pricing details.";

/// Format an amount as dollars with two decimals and thousands separators
///
/// ```
/// assert_eq!(costcalc::format::currency(1234567.891), "$1,234,567.89");
/// assert_eq!(costcalc::format::currency(0.0), "$0.00");
/// ```
pub fn currency(amount: f64) -> String {
    let fixed = format!("{:.2}", amount.abs());
    let (whole, cents) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (idx, ch) in whole.chars().enumerate() {
        if idx > 0 && (whole.len() - idx) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    // "-0.00" is not worth a sign
    let sign = if amount < 0.0 && fixed != "0.00" { "-" } else { "" };
    format!("{}${}.{}", sign, grouped, cents)
}

/// Render a breakdown as labeled lines, ending with the disclaimer
pub fn render_breakdown(breakdown: &CostBreakdown) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Platform: {}", breakdown.platform());
    let _ = writeln!(out, "Plan: {}", breakdown.label());
    for item in breakdown.line_items() {
        let _ = writeln!(out, "  {}: {}", item.name, currency(item.amount));
    }
    if !breakdown.details().is_empty() {
        let details: Vec<String> = breakdown
            .details()
            .iter()
            .map(|d| format!("{} = {:.2}", d.name, d.value))
            .collect();
        let _ = writeln!(out, "  ({})", details.join(", "));
    }
    let _ = writeln!(out, "Monthly Cost: {}", currency(breakdown.monthly_cost()));
    let _ = writeln!(out, "Annual Cost: {}", currency(breakdown.annual_cost()));
    let _ = writeln!(out, "Initial Setup Cost: {}", breakdown.initial_setup());
    let _ = write!(out, "\n{}", DISCLAIMER);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pricing::{InitialSetup, LineItem, Platform};

    #[test]
    fn test_currency_grouping() {
        assert_eq!(currency(0.5), "$0.50");
        assert_eq!(currency(999.999), "$1,000.00");
        assert_eq!(currency(4944.4), "$4,944.40");
        assert_eq!(currency(24996.0), "$24,996.00");
        assert_eq!(currency(100000.0), "$100,000.00");
        assert_eq!(currency(-1500.0), "-$1,500.00");
        assert_eq!(currency(-0.001), "$0.00");
    }

    #[test]
    fn test_render_breakdown() {
        let breakdown = CostBreakdown::new(
            Platform::Rivery,
            "Base subscription",
            vec![LineItem::new("Base subscription", 2083.0)],
            InitialSetup::included("Free initial load of up to 4TB"),
        );

        let rendered = render_breakdown(&breakdown);
        assert_eq!(
            rendered,
            "Platform: Rivery\n\
             Plan: Base subscription\n  \
             Base subscription: $2,083.00\n\
             Monthly Cost: $2,083.00\n\
             Annual Cost: $24,996.00\n\
             Initial Setup Cost: Free initial load of up to 4TB\n\n\
             This calculator provides estimated costs based on inputs and platform pricing details."
        );
        assert!(rendered.ends_with(DISCLAIMER));
    }
}
