/// Input validation error for the EOQ engine.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EoqError {
    /// An input that is zero, negative or not finite
    InvalidParameter {
        /// Offending input (demand / order_cost / holding_cost)
        name: &'static str,
        /// Value as given
        value: f64,
    },
    /// Valid inputs whose EOQ or cost figures overflow or underflow an f64
    OutOfRange {
        demand: f64,
        order_cost: f64,
        holding_cost: f64,
    },
}

impl std::fmt::Display for EoqError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EoqError::InvalidParameter { name, value } => {
                write!(f, "invalid parameter: {name} must be a finite value > 0 (got {value})")
            }
            EoqError::OutOfRange {
                demand,
                order_cost,
                holding_cost,
            } => write!(
                f,
                "inputs out of range: D={demand}, S={order_cost}, H={holding_cost} \
                 give an EOQ or cost outside the representable number range"
            ),
        }
    }
}

impl std::error::Error for EoqError {}

/// Inputs of the single-item inventory model.
///
/// Constructed through [`InventoryParameters::new`], so every value held by
/// this type is finite and strictly positive, and the EOQ figures derived
/// from it are normal (finite, non-zero, not subnormal) floats.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InventoryParameters {
    demand: f64,
    order_cost: f64,
    holding_cost: f64,
}

impl InventoryParameters {
    /// Validates D, S and H.
    /// - demand: annual demand [unit/year]
    /// - order_cost: fixed cost per order [currency/order]
    /// - holding_cost: holding cost [currency/unit/year]
    pub fn new(demand: f64, order_cost: f64, holding_cost: f64) -> Result<Self, EoqError> {
        let params = Self {
            demand: positive("demand", demand)?,
            order_cost: positive("order_cost", order_cost)?,
            holding_cost: positive("holding_cost", holding_cost)?,
        };
        let r = params.compute();
        // 2DS and 2DS/H are the intermediates that are not reported figures themselves
        let representable = [
            2.0 * demand * order_cost,
            2.0 * demand * order_cost / holding_cost,
            r.eoq,
            r.orders_per_year,
            r.ordering_cost_total,
            r.holding_cost_total,
            r.total_cost,
        ]
        .iter()
        .all(|v| v.is_normal());
        if representable {
            Ok(params)
        } else {
            Err(EoqError::OutOfRange {
                demand,
                order_cost,
                holding_cost,
            })
        }
    }

    /// Annual demand D.
    pub fn demand(&self) -> f64 {
        self.demand
    }

    /// Fixed cost per order S.
    pub fn order_cost(&self) -> f64 {
        self.order_cost
    }

    /// Holding cost per unit per year H.
    pub fn holding_cost(&self) -> f64 {
        self.holding_cost
    }
}

fn positive(name: &'static str, value: f64) -> Result<f64, EoqError> {
    // NaN fails the comparison as well
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(EoqError::InvalidParameter { name, value })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_positive_inputs() {
        let p = InventoryParameters::new(1000.0, 50_000.0, 2000.0).unwrap();
        assert_eq!(p.demand(), 1000.0);
        assert_eq!(p.order_cost(), 50_000.0);
        assert_eq!(p.holding_cost(), 2000.0);
    }

    #[test]
    fn names_the_first_offending_input() {
        let err = InventoryParameters::new(10.0, -1.0, 0.0).unwrap_err();
        assert_eq!(
            err,
            EoqError::InvalidParameter {
                name: "order_cost",
                value: -1.0
            }
        );
    }

    #[test]
    fn rejects_non_finite_inputs() {
        assert!(InventoryParameters::new(f64::NAN, 1.0, 1.0).is_err());
        assert!(InventoryParameters::new(1.0, f64::INFINITY, 1.0).is_err());
        assert!(InventoryParameters::new(1.0, 1.0, f64::NEG_INFINITY).is_err());
    }

    #[test]
    fn overflowing_eoq_is_out_of_range() {
        let err = InventoryParameters::new(1e200, 1e200, 1.0).unwrap_err();
        assert!(matches!(err, EoqError::OutOfRange { .. }), "{err}");
    }

    #[test]
    fn underflowing_eoq_is_out_of_range() {
        let err = InventoryParameters::new(1e-200, 1e-200, 1e200).unwrap_err();
        assert!(matches!(err, EoqError::OutOfRange { .. }), "{err}");
    }

    #[test]
    fn error_message_mentions_parameter() {
        let err = InventoryParameters::new(0.0, 1.0, 1.0).unwrap_err();
        assert!(err.to_string().contains("demand"), "{err}");
    }
}
