use std::io::{self, BufRead, Write};

use crate::app::AppError;
use crate::electricity::{parse_decimal, CalculatorState, InputEvent};
use crate::format::{self, fill_template};
use crate::i18n::{keys, Translator};
use crate::units::UnitPrice;

/// 메인 메뉴 선택지를 표현한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Consumption,
    Price,
    ToggleVat,
    Exit,
}

/// 프롬프트 입출력. 테스트에서는 메모리 버퍼를 넣는다.
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl Console<io::StdinLock<'static>, io::Stdout> {
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn into_output(self) -> W {
        self.output
    }

    pub fn println(&mut self, line: &str) -> Result<(), AppError> {
        writeln!(self.output, "{line}")?;
        Ok(())
    }

    /// 프롬프트를 출력하고 한 줄을 읽는다. 입력이 끝났으면 None.
    /// 줄바꿈 문자만 제거하고 나머지 내용은 그대로 돌려준다.
    pub fn read_line(&mut self, prompt: &str) -> Result<Option<String>, AppError> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;
        let mut buf = String::new();
        if self.input.read_line(&mut buf)? == 0 {
            return Ok(None);
        }
        let line = buf.strip_suffix('\n').unwrap_or(&buf);
        let line = line.strip_suffix('\r').unwrap_or(line);
        Ok(Some(line.to_string()))
    }
}

/// 메인 메뉴를 표시하고 선택값을 반환한다. 입력이 끝나면 종료로 본다.
pub fn main_menu<R: BufRead, W: Write>(
    tr: &Translator,
    console: &mut Console<R, W>,
) -> Result<MenuChoice, AppError> {
    console.println(&tr.t(keys::MAIN_MENU_TITLE))?;
    console.println(&tr.t(keys::MAIN_MENU_CONSUMPTION))?;
    console.println(&tr.t(keys::MAIN_MENU_PRICE))?;
    console.println(&tr.t(keys::MAIN_MENU_VAT))?;
    console.println(&tr.t(keys::MAIN_MENU_EXIT))?;
    loop {
        let Some(sel) = console.read_line(&tr.t(keys::PROMPT_MENU_SELECT))? else {
            return Ok(MenuChoice::Exit);
        };
        match sel.trim() {
            "1" => return Ok(MenuChoice::Consumption),
            "2" => return Ok(MenuChoice::Price),
            "3" => return Ok(MenuChoice::ToggleVat),
            "0" => return Ok(MenuChoice::Exit),
            _ => console.println(&tr.t(keys::INVALID_SELECTION_RETRY))?,
        }
    }
}

/// 사용량 입력. 입력 문자열은 그대로 상태에 넘기며 해석 실패는 0 kWh로 계산된다.
pub fn handle_consumption<R: BufRead, W: Write>(
    tr: &Translator,
    console: &mut Console<R, W>,
    state: &mut CalculatorState,
) -> Result<(), AppError> {
    if let Some(text) = console.read_line(&tr.t(keys::PROMPT_CONSUMPTION))? {
        state.apply(InputEvent::ConsumptionEdited(text));
    }
    Ok(())
}

/// 단가 입력. 숫자가 아니면 다시 묻고, 범위 밖 값은 경계로 고정한다.
pub fn handle_price<R: BufRead, W: Write>(
    tr: &Translator,
    console: &mut Console<R, W>,
    state: &mut CalculatorState,
) -> Result<(), AppError> {
    loop {
        let Some(text) = console.read_line(&tr.t(keys::PROMPT_PRICE))? else {
            return Ok(());
        };
        match parse_price(&text) {
            Some(price) => {
                state.apply(InputEvent::PriceSet(price));
                return Ok(());
            }
            None => console.println(&tr.t(keys::INVALID_PRICE))?,
        }
    }
}

/// CLI 단가 문자열을 해석한다(센트 단위 반올림 + 범위 고정).
pub fn parse_price(text: &str) -> Option<UnitPrice> {
    parse_decimal(text.trim()).map(|d| UnitPrice::from_decimal(&d))
}

/// 현재 입력과 결과를 출력한다.
pub fn print_status<R: BufRead, W: Write>(
    tr: &Translator,
    console: &mut Console<R, W>,
    state: &CalculatorState,
    details: bool,
) -> Result<(), AppError> {
    for line in status_lines(tr, state, details) {
        console.println(&line)?;
    }
    Ok(())
}

/// 결과 출력 줄을 만든다. `details`이면 사용량/단가/세전/세후 금액을 함께 보여준다.
pub fn status_lines(tr: &Translator, state: &CalculatorState, details: bool) -> Vec<String> {
    let mut lines = Vec::new();
    if details {
        let b = state.breakdown();
        lines.push(fill_template(
            &tr.t(keys::STATUS_CONSUMPTION),
            &[("value", b.consumption_kwh.to_string())],
        ));
        lines.push(fill_template(
            &tr.t(keys::CALC_PRICE_LABEL),
            &[("price", state.price_label())],
        ));
        lines.push(fill_template(
            &tr.t(keys::STATUS_VAT),
            &[("percent", b.vat.percent().to_string())],
        ));
        lines.push(fill_template(
            &tr.t(keys::RESULT_PRE_TAX),
            &[("value", b.pre_tax.to_string())],
        ));
        lines.push(fill_template(
            &tr.t(keys::RESULT_WITH_VAT),
            &[
                ("percent", b.vat.percent().to_string()),
                ("value", b.with_vat.to_string()),
            ],
        ));
    }
    lines.push(fill_template(
        &tr.t(keys::RESULT_COST),
        &[("cost", format::format_cost(&state.cost()))],
    ));
    lines
}
