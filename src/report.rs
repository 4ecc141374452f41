//! Text rendering of EOQ results shared by the CLI and the GUI.

use std::fmt::Write;

use crate::config::Config;
use crate::inventory::{EoqResult, InventoryParameters};

/// Unit labels printed next to amounts and quantities.
#[derive(Debug, Clone, Copy)]
pub struct Labels<'a> {
    pub currency: &'a str,
    pub quantity: &'a str,
}

impl<'a> Labels<'a> {
    pub fn from_config(cfg: &'a Config) -> Self {
        Self {
            currency: &cfg.currency_label,
            quantity: &cfg.quantity_label,
        }
    }

    /// "Rp 1,234.50"
    pub fn money(&self, value: f64, decimals: usize) -> String {
        if self.currency.is_empty() {
            format_amount(value, decimals)
        } else {
            format!("{} {}", self.currency, format_amount(value, decimals))
        }
    }
}

impl Default for Labels<'static> {
    fn default() -> Self {
        Self {
            currency: "Rp",
            quantity: "unit",
        }
    }
}

/// Fixed-point formatting with `,` grouping of the integer digits.
pub fn format_amount(value: f64, decimals: usize) -> String {
    if !value.is_finite() {
        return value.to_string();
    }
    let raw = format!("{:.*}", decimals, value.abs());
    let (int_part, frac_part) = match raw.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (raw.as_str(), None),
    };
    let mut grouped = String::with_capacity(raw.len() + int_part.len() / 3 + 1);
    // "-0.00" reads badly; only keep the sign when a non-zero digit survives rounding
    if value < 0.0 && raw.bytes().any(|b| matches!(b, b'1'..=b'9')) {
        grouped.push('-');
    }
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    if let Some(f) = frac_part {
        grouped.push('.');
        grouped.push_str(f);
    }
    grouped
}

/// Full text report: result, base costs, yearly cost breakdown and interpretation.
pub fn render_report(params: &InventoryParameters, result: &EoqResult, labels: Labels<'_>) -> String {
    let mut out = String::new();
    // writing into a String cannot fail
    let _ = write_report(&mut out, params, result, labels);
    out
}

fn write_report(
    out: &mut String,
    params: &InventoryParameters,
    result: &EoqResult,
    labels: Labels<'_>,
) -> std::fmt::Result {
    let q = labels.quantity;
    writeln!(out, "== EOQ result ==")?;
    writeln!(out, "Economic order quantity (EOQ): {:.2} {q}", result.eoq)?;
    writeln!(out, "Orders per year: {:.2}", result.orders_per_year)?;
    writeln!(out)?;
    writeln!(out, "== Base costs ==")?;
    writeln!(out, "Cost per order: {}", labels.money(params.order_cost(), 2))?;
    writeln!(
        out,
        "Holding cost per {q} per year: {}",
        labels.money(params.holding_cost(), 2)
    )?;
    writeln!(out)?;
    writeln!(out, "== Yearly inventory cost ==")?;
    writeln!(out, "Total ordering cost: {}", labels.money(result.ordering_cost_total, 2))?;
    writeln!(out, "Total holding cost: {}", labels.money(result.holding_cost_total, 2))?;
    writeln!(
        out,
        "Total inventory cost (ordering + holding): {}",
        labels.money(result.total_cost, 2)
    )?;
    writeln!(out)?;
    writeln!(out, "== Interpretation ==")?;
    write!(out, "{}", interpretation(params, result, labels))?;
    Ok(())
}

/// Plain-language reading of the result.
pub fn interpretation(params: &InventoryParameters, result: &EoqResult, labels: Labels<'_>) -> String {
    format!(
        "Ordering {eoq:.2} {q} each time minimizes the yearly inventory cost for a demand of {d} {q}/year.\n\
         That means about {n:.2} orders per year. At this quantity the ordering cost \
         ({oc}) and the holding cost ({hc}) balance, for a total of {tc}.\n",
        eoq = result.eoq,
        q = labels.quantity,
        d = format_amount(params.demand(), 0),
        n = result.orders_per_year,
        oc = labels.money(result.ordering_cost_total, 2),
        hc = labels.money(result.holding_cost_total, 2),
        tc = labels.money(result.total_cost, 2),
    )
}

/// Legend sentence explaining the chart's marks and colors.
pub fn chart_key() -> &'static str {
    "On the chart, the X marker is the optimal EOQ point with the lowest total cost and the \
     dotted vertical line marks the EOQ. Blue is the total cost, red the ordering cost and \
     green the holding cost.\n"
}

/// Label attached to the optimum marker on the chart.
pub fn chart_annotation(result: &EoqResult, labels: Labels<'_>) -> String {
    format!(
        "EOQ = {:.0} {}\nTotal Cost = {}",
        result.eoq,
        labels.quantity,
        labels.money(result.total_cost, 0)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn groups_thousands() {
        assert_eq!(format_amount(223_606.797_75, 2), "223,606.80");
        assert_eq!(format_amount(1_234_567.0, 0), "1,234,567");
        assert_eq!(format_amount(999.994, 2), "999.99");
        assert_eq!(format_amount(100.0, 2), "100.00");
    }

    #[test]
    fn keeps_sign_of_negative_amounts() {
        assert_eq!(format_amount(-1234.5, 1), "-1,234.5");
        assert_eq!(format_amount(-0.001, 2), "0.00");
    }

    #[test]
    fn money_without_currency_label() {
        let labels = Labels {
            currency: "",
            quantity: "pcs",
        };
        assert_eq!(labels.money(5000.0, 2), "5,000.00");
    }

    #[test]
    fn annotation_rounds_to_whole_numbers() {
        let p = InventoryParameters::new(1000.0, 50_000.0, 2000.0).unwrap();
        let text = chart_annotation(&p.compute(), Labels::default());
        assert_eq!(text, "EOQ = 224 unit\nTotal Cost = Rp 447,214");
    }

    #[test]
    fn chart_key_names_the_marker_and_every_curve() {
        let key = chart_key();
        for needle in [
            "X marker is the optimal EOQ point with the lowest total cost",
            "dotted vertical line marks the EOQ",
            "Blue is the total cost",
            "red the ordering cost",
            "green the holding cost",
        ] {
            assert!(key.contains(needle), "missing {needle:?} in {key:?}");
        }
    }

    #[test]
    fn report_contains_every_section() {
        let p = InventoryParameters::new(1000.0, 50_000.0, 2000.0).unwrap();
        let text = render_report(&p, &p.compute(), Labels::default());
        for needle in [
            "Economic order quantity (EOQ): 223.61 unit",
            "Orders per year: 4.47",
            "Cost per order: Rp 50,000.00",
            "Holding cost per unit per year: Rp 2,000.00",
            "Total ordering cost: Rp 223,606.80",
            "Total holding cost: Rp 223,606.80",
            "Total inventory cost (ordering + holding): Rp 447,213.60",
            "== Interpretation ==",
        ] {
            assert!(text.contains(needle), "missing {needle:?} in\n{text}");
        }
    }
}
