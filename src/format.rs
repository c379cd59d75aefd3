//! 결과/단가 표시 문자열.

use bigdecimal::BigDecimal;

use crate::units::UnitPrice;

/// 표시용 통화 기호(단일 통화만 지원).
pub const CURRENCY_SYMBOL: &str = "€";

/// 정수 유로 금액을 `6 €` 형태로 만든다.
pub fn format_cost(amount: &BigDecimal) -> String {
    format!("{amount} {CURRENCY_SYMBOL}")
}

/// 단가를 소수 둘째 자리까지 `0.05 €` 형태로 만든다.
pub fn format_price(price: UnitPrice) -> String {
    format!("{price} {CURRENCY_SYMBOL}")
}

/// `{key}` 자리표시자를 채운다.
pub fn fill_template(template: &str, vars: &[(&str, String)]) -> String {
    let mut out = template.to_string();
    for (k, v) in vars {
        out = out.replace(&format!("{{{k}}}"), v);
    }
    out
}
