use std::io;
use std::process::ExitCode;

use clap::Parser;
use cost_of_electricity::app::{self, AppError};
use cost_of_electricity::electricity::{CalculatorState, InputEvent};
use cost_of_electricity::ui_cli::{self, Console};
use cost_of_electricity::{config, i18n, logging};

/// 전기 요금 계산기 CLI. `--consumption`이 있으면 한 번 계산하고, 없으면 대화형으로 실행한다.
#[derive(Debug, Parser)]
#[command(version, about = "Estimate the cost of electricity consumption")]
struct Args {
    /// Consumption in kWh (unparseable text counts as 0)
    #[arg(short, long, allow_hyphen_values = true)]
    consumption: Option<String>,

    /// Price per kWh in euros, clamped to -0.05..=1.00 and rounded to cents
    #[arg(short, long, allow_hyphen_values = true, value_parser = parse_price_arg)]
    price: Option<cost_of_electricity::units::UnitPrice>,

    /// Use 24% VAT instead of 10%
    #[arg(long)]
    vat24: bool,

    /// Print the pre-tax and with-VAT amounts as well
    #[arg(long)]
    details: bool,

    /// Language (auto/en-us/ko-kr)
    #[arg(short = 'L', long, default_value = "auto")]
    lang: String,

    /// Raise the log level (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn parse_price_arg(s: &str) -> Result<cost_of_electricity::units::UnitPrice, String> {
    ui_cli::parse_price(s).ok_or_else(|| format!("not a decimal number: {s}"))
}

/// 프로그램의 엔트리 포인트. 설정을 로드한 뒤 CLI 애플리케이션을 실행한다.
fn main() -> ExitCode {
    let args = Args::parse();
    match try_run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!("{err}");
            ExitCode::FAILURE
        }
    }
}

fn try_run(args: Args) -> Result<(), AppError> {
    let cfg = config::load_or_default();
    let level = cfg
        .as_ref()
        .map(|c| c.log_level)
        .unwrap_or_default()
        .raised_by(args.verbose);
    logging::init(level);
    let cfg = cfg?;
    tracing::info!(version = env!("CARGO_PKG_VERSION"), "starting");

    let lang = i18n::resolve_language(&args.lang, Some(cfg.language.as_str()));
    let tr = i18n::Translator::new_with_pack(&lang, cfg.locale_dir.as_deref());

    let mut state = CalculatorState::new();
    if let Some(price) = args.price {
        state.apply(InputEvent::PriceSet(price));
    }
    state.apply(InputEvent::Vat10Toggled(!args.vat24));

    match args.consumption {
        Some(text) => {
            state.apply(InputEvent::ConsumptionEdited(text));
            app::run_once(&tr, &mut io::stdout(), &state, args.details)
        }
        None => app::run(&tr, &mut Console::stdio(), &mut state),
    }
}
