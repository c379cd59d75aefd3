//! 전기 요금 계산과 화면 상태.

pub mod cost;
pub mod state;

pub use cost::{compute_cost, cost_breakdown, cost_for, parse_decimal, CostBreakdown, CostInput};
pub use state::{CalculatorState, InputEvent};
