use bigdecimal::BigDecimal;

/// 적용 가능한 부가가치세율. 체크박스 하나로 두 값 중 하나를 고른다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum VatRate {
    /// 10% (기본값)
    #[default]
    Reduced10,
    /// 24%
    Standard24,
}

impl VatRate {
    /// 체크박스 상태에서 세율을 고른다. 체크되어 있으면 10%.
    pub fn from_vat10_selected(selected: bool) -> Self {
        if selected {
            VatRate::Reduced10
        } else {
            VatRate::Standard24
        }
    }

    pub fn is_vat10(&self) -> bool {
        matches!(self, VatRate::Reduced10)
    }

    /// 세전 금액에 곱할 정확한 배율(1.10 / 1.24).
    pub fn multiplier(&self) -> BigDecimal {
        let hundredths: i64 = match self {
            VatRate::Reduced10 => 110,
            VatRate::Standard24 => 124,
        };
        BigDecimal::new(hundredths.into(), 2)
    }

    pub fn percent(&self) -> u32 {
        match self {
            VatRate::Reduced10 => 10,
            VatRate::Standard24 => 24,
        }
    }

    pub fn toggled(&self) -> Self {
        Self::from_vat10_selected(!self.is_vat10())
    }
}
