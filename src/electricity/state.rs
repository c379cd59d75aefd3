use bigdecimal::BigDecimal;

use crate::electricity::cost::{cost_breakdown, cost_for, CostBreakdown, CostInput};
use crate::format;
use crate::units::{ConsumptionAmount, UnitPrice, VatRate};

/// 화면에서 발생하는 입력 이벤트.
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    /// 사용량 입력란이 수정됨(원문 그대로)
    ConsumptionEdited(String),
    /// 단가 슬라이더가 움직임(연속값, 센트로 맞춘다)
    PriceSlid(f32),
    /// 단가를 정확한 값으로 지정(CLI 입력)
    PriceSet(UnitPrice),
    /// 10% 부가세 체크박스가 바뀜
    Vat10Toggled(bool),
}

/// 계산기 화면의 세 가지 입력값을 보관한다.
///
/// 결과 금액은 따로 저장하지 않고 조회할 때마다 입력값에서 다시 계산한다.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CalculatorState {
    consumption_text: String,
    unit_price: UnitPrice,
    vat: VatRate,
}

impl CalculatorState {
    pub fn new() -> Self {
        Self::default()
    }

    /// 입력 이벤트를 반영한다. 상태를 바꾸는 유일한 경로.
    pub fn apply(&mut self, event: InputEvent) {
        match event {
            InputEvent::ConsumptionEdited(text) => self.consumption_text = text,
            InputEvent::PriceSlid(value) => self.unit_price = UnitPrice::from_slider(value),
            InputEvent::PriceSet(price) => self.unit_price = price,
            InputEvent::Vat10Toggled(selected) => self.vat = VatRate::from_vat10_selected(selected),
        }
        tracing::debug!(
            consumption = %self.consumption_text,
            unit_price = %self.unit_price,
            vat = self.vat.percent(),
            cost = %self.cost(),
            "input applied"
        );
    }

    pub fn consumption_text(&self) -> &str {
        &self.consumption_text
    }

    pub fn unit_price(&self) -> UnitPrice {
        self.unit_price
    }

    pub fn vat(&self) -> VatRate {
        self.vat
    }

    pub fn vat10_selected(&self) -> bool {
        self.vat.is_vat10()
    }

    /// 현재 입력에 대한 최종 금액.
    pub fn cost(&self) -> BigDecimal {
        cost_for(&self.consumption(), self.unit_price, self.vat)
    }

    fn consumption(&self) -> ConsumptionAmount {
        ConsumptionAmount::parse_or_zero(&self.consumption_text)
    }

    pub fn breakdown(&self) -> CostBreakdown {
        cost_breakdown(&CostInput {
            consumption: self.consumption(),
            unit_price: self.unit_price,
            vat: self.vat,
        })
    }

    /// 결과 표시 문자열(예: `6 €`)
    pub fn result_label(&self) -> String {
        format::format_cost(&self.cost())
    }

    /// 단가 표시 문자열(예: `0.05 €`)
    pub fn price_label(&self) -> String {
        format::format_price(self.unit_price)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bigdecimal::Zero;

    #[test]
    fn defaults_match_initial_screen() {
        let state = CalculatorState::new();
        assert_eq!(state.consumption_text(), "");
        assert_eq!(state.unit_price(), UnitPrice::DEFAULT);
        assert!(state.vat10_selected());
        assert!(state.cost().is_zero());
        assert_eq!(state.result_label(), "0 €");
        assert_eq!(state.price_label(), "0.05 €");
    }

    #[test]
    fn breakdown_agrees_with_cost() {
        let mut state = CalculatorState::new();
        state.apply(InputEvent::ConsumptionEdited("abc".into()));
        assert_eq!(state.breakdown().rounded, state.cost());
        state.apply(InputEvent::ConsumptionEdited("250.5".into()));
        state.apply(InputEvent::PriceSlid(0.17));
        assert_eq!(state.breakdown().rounded, state.cost());
    }
}
