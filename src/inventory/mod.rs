//! Economic order quantity engine: closed-form EOQ and the sampled cost curves.

pub mod cost_curve;
pub mod eoq;
pub mod params;

pub use cost_curve::{sample_cost_curve, CostCurve, CostCurveSample};
pub use eoq::{compute_eoq, cost_at, optimal_point, CostPoint, EoqResult};
pub use params::{EoqError, InventoryParameters};
