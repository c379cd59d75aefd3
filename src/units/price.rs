use bigdecimal::{BigDecimal, RoundingMode, ToPrimitive, Zero};

/// kWh 당 단가 [€/kWh]. 내부적으로 센트 단위 정수로 보관하여 항상 소수 둘째 자리까지 정확하다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct UnitPrice {
    cents: i64,
}

impl UnitPrice {
    /// 슬라이더 하한 (-0.05 €)
    pub const MIN_CENTS: i64 = -5;
    /// 슬라이더 상한 (1.00 €)
    pub const MAX_CENTS: i64 = 100;
    /// 초기값 0.05 €/kWh
    pub const DEFAULT: Self = Self { cents: 5 };
    pub const MIN: Self = Self {
        cents: Self::MIN_CENTS,
    };
    pub const MAX: Self = Self {
        cents: Self::MAX_CENTS,
    };

    /// 센트 값으로 만든다. 범위를 벗어나면 경계값으로 고정한다.
    pub fn from_cents(cents: i64) -> Self {
        Self {
            cents: cents.clamp(Self::MIN_CENTS, Self::MAX_CENTS),
        }
    }

    /// 연속 슬라이더 값을 가장 가까운 센트로 맞춘다.
    ///
    /// 반올림은 `Math.round`와 같이 절반을 +∞ 쪽으로 올린다(-2.5센트 → -2센트).
    /// NaN/무한대는 기본값으로 대체한다.
    pub fn from_slider(value: f32) -> Self {
        if !value.is_finite() {
            return Self::DEFAULT;
        }
        let cents = (value * 100.0 + 0.5).floor();
        let bounded = cents.clamp(Self::MIN_CENTS as f32, Self::MAX_CENTS as f32);
        Self::from_cents(bounded as i64)
    }

    /// 정확한 십진 단가를 센트 단위로 반올림(0.5센트는 0에서 멀어지는 쪽)한 뒤 범위 안으로 고정한다.
    pub fn from_decimal(value: &BigDecimal) -> Self {
        let cents = (value * BigDecimal::from(100_i64)).with_scale_round(0, RoundingMode::HalfUp);
        match cents.to_i64() {
            Some(c) => Self::from_cents(c),
            None if cents > BigDecimal::zero() => Self::MAX,
            None => Self::MIN,
        }
    }

    pub fn cents(&self) -> i64 {
        self.cents
    }

    /// €/kWh 값 (scale 2)
    pub fn per_kwh(&self) -> BigDecimal {
        BigDecimal::new(self.cents.into(), 2)
    }

    /// 슬라이더 위젯에 넘길 값
    pub fn as_f32(&self) -> f32 {
        self.cents as f32 / 100.0
    }

    pub fn slider_range() -> std::ops::RangeInclusive<f32> {
        Self::MIN.as_f32()..=Self::MAX.as_f32()
    }
}

impl Default for UnitPrice {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl std::fmt::Display for UnitPrice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let sign = if self.cents < 0 { "-" } else { "" };
        let abs = self.cents.unsigned_abs();
        write!(f, "{sign}{}.{:02}", abs / 100, abs % 100)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(text: &str) -> BigDecimal {
        BigDecimal::from_str(text).expect("decimal literal")
    }

    #[test]
    fn default_is_five_cents() {
        assert_eq!(UnitPrice::default().per_kwh(), dec("0.05"));
    }

    #[test]
    fn slider_snaps_to_cents() {
        assert_eq!(UnitPrice::from_slider(0.123).cents(), 12);
        assert_eq!(UnitPrice::from_slider(0.126).cents(), 13);
        assert_eq!(UnitPrice::from_slider(0.05).cents(), 5);
        assert_eq!(UnitPrice::from_slider(-0.049).cents(), -5);
    }

    #[test]
    fn slider_half_cent_rounds_toward_positive_infinity() {
        assert_eq!(UnitPrice::from_slider(-0.025).cents(), -2);
    }

    #[test]
    fn slider_is_clamped() {
        assert_eq!(UnitPrice::from_slider(-1.0), UnitPrice::MIN);
        assert_eq!(UnitPrice::from_slider(3.0), UnitPrice::MAX);
        assert_eq!(UnitPrice::from_slider(f32::NAN), UnitPrice::DEFAULT);
    }

    #[test]
    fn decimal_input_is_rounded_and_clamped() {
        assert_eq!(UnitPrice::from_decimal(&dec("0.10")).cents(), 10);
        assert_eq!(UnitPrice::from_decimal(&dec("0.125")).cents(), 13);
        assert_eq!(UnitPrice::from_decimal(&dec("0.5")).cents(), 50);
        assert_eq!(UnitPrice::from_decimal(&dec("7")), UnitPrice::MAX);
        assert_eq!(UnitPrice::from_decimal(&dec("-0.3")), UnitPrice::MIN);
        assert_eq!(UnitPrice::from_decimal(&dec("1e40")), UnitPrice::MAX);
    }

    #[test]
    fn display_keeps_two_decimals() {
        assert_eq!(UnitPrice::from_cents(100).to_string(), "1.00");
        assert_eq!(UnitPrice::from_cents(-5).to_string(), "-0.05");
        assert_eq!(UnitPrice::from_cents(0).to_string(), "0.00");
    }
}
