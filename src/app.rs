use std::io::{BufRead, Write};

use thiserror::Error;

use crate::electricity::{CalculatorState, InputEvent};
use crate::i18n::{keys, Translator};
use crate::ui_cli::{self, Console, MenuChoice};

/// 애플리케이션 실행 중 발생 가능한 오류를 표현한다.
#[derive(Debug, Error)]
pub enum AppError {
    /// 파일/터미널 입출력 오류
    #[error("입출력 오류: {0}")]
    Io(#[from] std::io::Error),
    /// 설정 저장/로드 오류
    #[error("설정 오류: {0}")]
    Config(#[from] crate::config::ConfigError),
}

/// 대화형 CLI의 메인 루프를 실행한다. 입력이 바뀔 때마다 결과를 다시 출력한다.
pub fn run<R: BufRead, W: Write>(
    tr: &Translator,
    console: &mut Console<R, W>,
    state: &mut CalculatorState,
) -> Result<(), AppError> {
    ui_cli::print_status(tr, console, state, false)?;
    loop {
        match ui_cli::main_menu(tr, console)? {
            MenuChoice::Consumption => ui_cli::handle_consumption(tr, console, state)?,
            MenuChoice::Price => ui_cli::handle_price(tr, console, state)?,
            MenuChoice::ToggleVat => {
                let next = state.vat().toggled();
                state.apply(InputEvent::Vat10Toggled(next.is_vat10()));
            }
            MenuChoice::Exit => {
                console.println(&tr.t(keys::APP_EXIT))?;
                break;
            }
        }
        ui_cli::print_status(tr, console, state, true)?;
    }
    Ok(())
}

/// 한 번 계산하고 결과만 출력한다.
pub fn run_once<W: Write>(
    tr: &Translator,
    out: &mut W,
    state: &CalculatorState,
    details: bool,
) -> Result<(), AppError> {
    for line in ui_cli::status_lines(tr, state, details) {
        writeln!(out, "{line}")?;
    }
    Ok(())
}
