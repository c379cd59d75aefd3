//! 해석할 수 없는 사용량 입력은 오류 없이 0 kWh로 계산된다.
use std::str::FromStr;

use bigdecimal::BigDecimal;
use cost_of_electricity::electricity::compute_cost;

fn dec(text: &str) -> BigDecimal {
    BigDecimal::from_str(text).expect("decimal literal")
}

fn prices() -> Vec<BigDecimal> {
    ["-0.05", "0.00", "0.05", "0.37", "1.00"].into_iter().map(dec).collect()
}

#[test]
fn invalid_text_matches_zero_consumption() {
    for text in ["", "abc", "1.2.3", "kWh", "12a", "1,5", "--3", "."] {
        for price in prices() {
            for vat10 in [true, false] {
                assert_eq!(
                    compute_cost(text, &price, vat10),
                    compute_cost("0", &price, vat10),
                    "text={text:?} price={price} vat10={vat10}"
                );
            }
        }
    }
}

#[test]
fn zero_consumption_is_always_zero() {
    for text in ["0", "0.000", "-0"] {
        for price in prices() {
            for vat10 in [true, false] {
                let cost = compute_cost(text, &price, vat10);
                assert_eq!(cost, dec("0"));
                assert_eq!(cost.to_string(), "0", "text={text:?} price={price}");
            }
        }
    }
}

#[test]
fn very_large_consumption_is_computed_exactly() {
    // 1e30 kWh × 0.05 × 1.10 = 5.5e28
    assert_eq!(
        compute_cost("1e30", &dec("0.05"), true),
        dec("55000000000000000000000000000")
    );
    let huge = "9".repeat(40);
    // (10^40 - 1) × 0.01 × 1.24 의 올림
    let expected = dec(&huge) * dec("0.0124");
    let cost = compute_cost(&huge, &dec("0.01"), false);
    assert!(cost >= expected);
    assert!(cost - expected < dec("1"));
}

#[test]
fn scientific_notation_is_a_number() {
    // 1e3 kWh × 0.05 × 1.10 = 55
    assert_eq!(compute_cost("1e3", &dec("0.05"), true), dec("55"));
}
