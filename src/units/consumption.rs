use std::str::FromStr;

use bigdecimal::{BigDecimal, Zero};

/// 사용자가 입력한 전력 사용량 [kWh].
///
/// 자유 입력 문자열에서 만들어지며 해석할 수 없는 입력은 0으로 취급한다.
/// 자릿수 제한이 없는 십진수로 보관하므로 입력한 값이 그대로 계산에 쓰인다.
/// 부호는 숫자 해석 결과 그대로 유지한다(숫자 해석 외의 검증은 하지 않는다).
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct ConsumptionAmount(BigDecimal);

impl ConsumptionAmount {
    pub fn zero() -> Self {
        Self(BigDecimal::zero())
    }

    pub fn new(kwh: BigDecimal) -> Self {
        Self(kwh)
    }

    /// 입력 문자열을 십진수로 해석한다. 빈 문자열이나 형식 오류는 0.
    pub fn parse_or_zero(text: &str) -> Self {
        Self::parse(text).unwrap_or_else(Self::zero)
    }

    /// 입력 문자열을 십진수로 해석한다. 지수 표기(`1e3`)도 허용하며 공백은 제거하지 않는다.
    pub fn parse(text: &str) -> Option<Self> {
        if text.is_empty() {
            return None;
        }
        BigDecimal::from_str(text).ok().map(Self)
    }

    pub fn kwh(&self) -> &BigDecimal {
        &self.0
    }
}

impl From<BigDecimal> for ConsumptionAmount {
    fn from(value: BigDecimal) -> Self {
        Self::new(value)
    }
}
