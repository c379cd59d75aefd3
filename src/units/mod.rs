//! 계산기 입력값 타입 모음.

pub mod consumption;
pub mod price;
pub mod vat;

pub use consumption::ConsumptionAmount;
pub use price::UnitPrice;
pub use vat::VatRate;
