use serde::Serialize;

use super::eoq::{holding_cost, ordering_cost};
use super::params::{EoqError, InventoryParameters};

/// One point of the sampled cost curves.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CostCurveSample {
    /// Order quantity [unit/order], starting at 1
    pub quantity: u64,
    /// (q / 2) * H [currency/year]
    pub holding_cost: f64,
    /// (D / q) * S [currency/year]
    pub ordering_cost: f64,
    /// holding + ordering [currency/year]
    pub total_cost: f64,
}

/// Lazily evaluated cost curves, one sample per integer quantity in `1..=floor(D)`.
///
/// Consuming the whole curve is O(D). Demand figures in the hundreds of
/// thousands are fine for interactive use; collect only when the caller
/// really needs every sample in memory, and use `step_by`/`nth`/`last` to
/// thin it out, which skip ahead in O(1). Cloning the curve restarts it.
///
/// The last quantity is capped at `u64::MAX - 1` so the length and the
/// cursor never overflow.
#[derive(Debug, Clone)]
pub struct CostCurve {
    params: InventoryParameters,
    next: u64,
    last: u64,
}

impl CostCurve {
    pub fn new(params: InventoryParameters) -> Self {
        // saturating float->int cast; demand is already finite and positive
        let last = (params.demand().floor() as u64).min(u64::MAX - 1);
        Self {
            params,
            next: 1,
            last,
        }
    }

    pub fn params(&self) -> &InventoryParameters {
        &self.params
    }

    fn sample(&self, quantity: u64) -> CostCurveSample {
        let q = quantity as f64;
        let holding = holding_cost(&self.params, q);
        let ordering = ordering_cost(&self.params, q);
        CostCurveSample {
            quantity,
            holding_cost: holding,
            ordering_cost: ordering,
            total_cost: holding + ordering,
        }
    }

    fn remaining(&self) -> u64 {
        // last < u64::MAX, so last + 1 cannot overflow
        (self.last + 1).saturating_sub(self.next)
    }
}

impl Iterator for CostCurve {
    type Item = CostCurveSample;

    fn next(&mut self) -> Option<Self::Item> {
        if self.next > self.last {
            return None;
        }
        let s = self.sample(self.next);
        // next <= last < u64::MAX here
        self.next += 1;
        Some(s)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = usize::try_from(self.remaining()).unwrap_or(usize::MAX);
        (n, Some(n))
    }

    fn nth(&mut self, n: usize) -> Option<Self::Item> {
        let skip = u64::try_from(n).unwrap_or(u64::MAX);
        self.next = self.next.saturating_add(skip);
        self.next()
    }

    fn last(self) -> Option<Self::Item> {
        if self.next > self.last {
            None
        } else {
            Some(self.sample(self.last))
        }
    }

    fn count(self) -> usize {
        self.len()
    }
}

impl ExactSizeIterator for CostCurve {}

impl std::iter::FusedIterator for CostCurve {}

/// Samples holding, ordering and total cost for q = 1..=D.
pub fn sample_cost_curve(
    demand: f64,
    order_cost: f64,
    holding_cost: f64,
) -> Result<CostCurve, EoqError> {
    let params = InventoryParameters::new(demand, order_cost, holding_cost)?;
    Ok(params.cost_curve())
}

impl InventoryParameters {
    pub fn cost_curve(&self) -> CostCurve {
        CostCurve::new(*self)
    }
}
