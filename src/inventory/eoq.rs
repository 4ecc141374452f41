use super::params::{EoqError, InventoryParameters};

/// EOQ calculation result. All cost figures are per year.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EoqResult {
    /// Economic order quantity [unit/order]
    pub eoq: f64,
    /// Order frequency [orders/year]
    pub orders_per_year: f64,
    /// Total ordering cost [currency/year]
    pub ordering_cost_total: f64,
    /// Total holding cost [currency/year]
    pub holding_cost_total: f64,
    /// ordering_cost_total + holding_cost_total [currency/year]
    pub total_cost: f64,
}

/// Cost breakdown at an arbitrary (possibly non-integer) order quantity.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CostPoint {
    /// Order quantity [unit/order]
    pub quantity: f64,
    /// (q / 2) * H
    pub holding_cost: f64,
    /// (D / q) * S
    pub ordering_cost: f64,
    pub total_cost: f64,
}

/// Computes EOQ = sqrt(2DS/H) and the cost breakdown at that quantity.
pub fn compute_eoq(demand: f64, order_cost: f64, holding_cost: f64) -> Result<EoqResult, EoqError> {
    let params = InventoryParameters::new(demand, order_cost, holding_cost)?;
    Ok(params.compute())
}

impl InventoryParameters {
    /// Closed-form EOQ for already validated parameters. Never fails.
    pub fn compute(&self) -> EoqResult {
        let (d, s, h) = (self.demand(), self.order_cost(), self.holding_cost());
        let eoq = (2.0 * d * s / h).sqrt();
        let orders_per_year = d / eoq;
        let ordering_cost_total = orders_per_year * s;
        let holding_cost_total = (eoq / 2.0) * h;
        EoqResult {
            eoq,
            orders_per_year,
            ordering_cost_total,
            holding_cost_total,
            total_cost: ordering_cost_total + holding_cost_total,
        }
    }
}

/// Holding cost of carrying an average inventory of q/2 for a year.
pub(crate) fn holding_cost(params: &InventoryParameters, quantity: f64) -> f64 {
    (quantity / 2.0) * params.holding_cost()
}

/// Ordering cost of placing D/q orders per year.
pub(crate) fn ordering_cost(params: &InventoryParameters, quantity: f64) -> f64 {
    (params.demand() / quantity) * params.order_cost()
}

/// Evaluates the cost curves at order quantity `quantity` (> 0).
pub fn cost_at(params: &InventoryParameters, quantity: f64) -> CostPoint {
    let holding = holding_cost(params, quantity);
    let ordering = ordering_cost(params, quantity);
    CostPoint {
        quantity,
        holding_cost: holding,
        ordering_cost: ordering,
        total_cost: holding + ordering,
    }
}

/// The optimum marker drawn on the chart: the curves evaluated at the continuous EOQ.
pub fn optimal_point(params: &InventoryParameters) -> CostPoint {
    cost_at(params, params.compute().eoq)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rel_close(a: f64, b: f64, tol: f64) -> bool {
        (a - b).abs() <= tol * a.abs().max(b.abs()).max(1.0)
    }

    #[test]
    fn textbook_case() {
        let r = compute_eoq(1000.0, 50_000.0, 2000.0).unwrap();
        assert!((r.eoq - 223.6068).abs() < 1e-3, "eoq={}", r.eoq);
        assert!((r.orders_per_year - 4.4721).abs() < 1e-3);
        assert!((r.ordering_cost_total - 223_606.798).abs() < 1e-2);
        assert!((r.holding_cost_total - 223_606.798).abs() < 1e-2);
        assert!((r.total_cost - 447_213.595).abs() < 1e-2);
    }

    #[test]
    fn unit_inputs_give_sqrt_two() {
        let r = compute_eoq(1.0, 1.0, 1.0).unwrap();
        assert!((r.eoq - std::f64::consts::SQRT_2).abs() < 1e-12);
        assert!((r.orders_per_year - std::f64::consts::FRAC_1_SQRT_2).abs() < 1e-12);
        assert!((r.ordering_cost_total - 0.70710678).abs() < 1e-8);
        assert!((r.holding_cost_total - 0.70710678).abs() < 1e-8);
        assert!((r.total_cost - 1.41421356).abs() < 1e-8);
    }

    #[test]
    fn zero_or_negative_inputs_are_rejected() {
        for (d, s, h) in [
            (0.0, 1.0, 1.0),
            (1.0, 0.0, 1.0),
            (1.0, 1.0, 0.0),
            (-5.0, 1.0, 1.0),
            (1.0, -5.0, 1.0),
            (1.0, 1.0, -5.0),
        ] {
            assert!(
                matches!(compute_eoq(d, s, h), Err(EoqError::InvalidParameter { .. })),
                "D={d} S={s} H={h}"
            );
        }
    }

    #[test]
    fn extreme_inputs_never_yield_non_finite_results() {
        for (d, s, h) in [(1e200, 1e200, 1.0), (1e-200, 1e-200, 1e200), (f64::MAX, 2.0, 1.0)] {
            match compute_eoq(d, s, h) {
                Err(EoqError::OutOfRange { .. }) => {}
                other => panic!("D={d} S={s} H={h}: expected OutOfRange, got {other:?}"),
            }
        }
    }

    #[test]
    fn optimal_point_matches_result() {
        let p = InventoryParameters::new(1200.0, 75.0, 3.5).unwrap();
        let r = p.compute();
        let pt = optimal_point(&p);
        assert_eq!(pt.quantity, r.eoq);
        assert!(rel_close(pt.total_cost, r.total_cost, 1e-12));
        assert!(rel_close(pt.holding_cost, pt.ordering_cost, 1e-9));
    }

    #[test]
    fn integer_neighbours_cost_at_least_the_optimum() {
        let p = InventoryParameters::new(1000.0, 50_000.0, 2000.0).unwrap();
        let r = p.compute();
        let lo = cost_at(&p, r.eoq.floor());
        let hi = cost_at(&p, r.eoq.ceil());
        assert!(lo.total_cost >= r.total_cost);
        assert!(hi.total_cost >= r.total_cost);
    }
}
