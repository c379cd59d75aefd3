use std::str::FromStr;

use bigdecimal::{BigDecimal, RoundingMode};

use crate::units::{ConsumptionAmount, UnitPrice, VatRate};

/// 전기 요금 계산 입력.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CostInput {
    /// 사용량 [kWh]
    pub consumption: ConsumptionAmount,
    /// 단가 [€/kWh]
    pub unit_price: UnitPrice,
    /// 부가세율
    pub vat: VatRate,
}

/// 전기 요금 계산 결과. 중간 값은 모두 자릿수 손실 없는 십진수로 보관한다.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CostBreakdown {
    /// 사용량 [kWh]
    pub consumption_kwh: BigDecimal,
    /// 단가 [€/kWh]
    pub unit_price: BigDecimal,
    pub vat: VatRate,
    /// 세전 금액 [€]
    pub pre_tax: BigDecimal,
    /// 부가세 포함 금액 [€]
    pub with_vat: BigDecimal,
    /// 올림 처리된 최종 금액 [€, 정수]
    pub rounded: BigDecimal,
}

/// 사용량 문자열, 단가, 10% 부가세 선택 여부로 요금을 계산한다.
///
/// 사용량을 해석할 수 없으면 0 kWh로 계산하며 오류를 내지 않는다.
/// 결과는 부가세 적용 후 정확한 십진 값에서 +∞ 방향으로 올림한 정수 유로 금액이다.
pub fn compute_cost(
    consumption_text: &str,
    unit_price: &BigDecimal,
    vat10_selected: bool,
) -> BigDecimal {
    let consumption = ConsumptionAmount::parse_or_zero(consumption_text);
    breakdown_exact(
        consumption.kwh(),
        unit_price,
        VatRate::from_vat10_selected(vat10_selected),
    )
    .rounded
}

/// 타입이 정해진 입력으로 요금을 계산한다.
pub fn cost_for(consumption: &ConsumptionAmount, unit_price: UnitPrice, vat: VatRate) -> BigDecimal {
    breakdown_exact(consumption.kwh(), &unit_price.per_kwh(), vat).rounded
}

/// 세전/세후/올림 금액을 모두 계산한다.
pub fn cost_breakdown(input: &CostInput) -> CostBreakdown {
    breakdown_exact(input.consumption.kwh(), &input.unit_price.per_kwh(), input.vat)
}

fn breakdown_exact(consumption_kwh: &BigDecimal, unit_price: &BigDecimal, vat: VatRate) -> CostBreakdown {
    let pre_tax = consumption_kwh * unit_price;
    let with_vat = &pre_tax * vat.multiplier();
    let rounded = round_up_to_whole(&with_vat);
    CostBreakdown {
        consumption_kwh: consumption_kwh.clone(),
        unit_price: unit_price.clone(),
        vat,
        pre_tax,
        with_vat,
        rounded,
    }
}

/// 소수점 이하를 +∞ 방향으로 올려 정수 금액으로 만든다(-0.3 → 0, 5.5 → 6).
pub fn round_up_to_whole(amount: &BigDecimal) -> BigDecimal {
    amount.with_scale_round(0, RoundingMode::Ceiling)
}

/// 십진 문자열을 그대로 해석한다(형식 오류는 None).
pub fn parse_decimal(text: &str) -> Option<BigDecimal> {
    BigDecimal::from_str(text).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dec(text: &str) -> BigDecimal {
        parse_decimal(text).expect("decimal literal")
    }

    #[test]
    fn ceiling_goes_toward_positive_infinity() {
        assert_eq!(round_up_to_whole(&dec("5.5")), dec("6"));
        assert_eq!(round_up_to_whole(&dec("6.0000")), dec("6"));
        assert_eq!(round_up_to_whole(&dec("6.0001")), dec("7"));
        assert_eq!(round_up_to_whole(&dec("-2.75")), dec("-2"));
        assert_eq!(round_up_to_whole(&dec("-0.3")), dec("0"));
    }

    #[test]
    fn rounded_zero_prints_without_sign() {
        assert_eq!(round_up_to_whole(&dec("-0.3")).to_string(), "0");
    }

    #[test]
    fn breakdown_keeps_exact_intermediates() {
        let b = cost_breakdown(&CostInput {
            consumption: ConsumptionAmount::new(dec("100")),
            unit_price: UnitPrice::from_cents(5),
            vat: VatRate::Standard24,
        });
        assert_eq!(b.pre_tax, dec("5.00"));
        assert_eq!(b.with_vat, dec("6.20"));
        assert_eq!(b.rounded, dec("7"));
    }

    #[test]
    fn result_has_no_fraction_digits() {
        let cost = compute_cost("12.345", &dec("0.37"), true);
        assert_eq!(cost, dec("6"));
        assert_eq!(cost.to_string(), "6");
    }

    #[test]
    fn tiny_positive_amount_still_rounds_up() {
        // 1e-28 kWh × 0.05 × 1.10 = 5.5e-30 € → 1 €
        assert_eq!(compute_cost("0.0000000000000000000000000001", &dec("0.05"), true), dec("1"));
        // 29 자리 이상의 소수도 잘리지 않는다
        assert_eq!(compute_cost("0.00000000000000000000000000000001", &dec("1.00"), false), dec("1"));
        assert_eq!(compute_cost("-0.0000000000000000000000000001", &dec("0.05"), true), dec("0"));
    }

    #[test]
    fn typed_core_agrees_with_text_contract() {
        for text in ["", "abc", "0", "1", "33.33", "50", "1e3", "0.0000000000000000000000000001"] {
            for cents in [-5, 0, 5, 37, 100] {
                let price = UnitPrice::from_cents(cents);
                for vat in [VatRate::Reduced10, VatRate::Standard24] {
                    assert_eq!(
                        cost_for(&ConsumptionAmount::parse_or_zero(text), price, vat),
                        compute_cost(text, &price.per_kwh(), vat.is_vat10()),
                        "text={text:?} cents={cents} vat={vat:?}"
                    );
                }
            }
        }
    }
}
