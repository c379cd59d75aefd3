use std::collections::HashMap;
use std::fs;
use std::path::Path;
use sys_locale::get_locale;

/// 문자열 키를 모아두는 네임스페이스.
pub mod keys {
    pub const APP_EXIT: &str = "general.app_exit";

    pub const CALC_TITLE: &str = "calc.title";
    pub const CALC_CONSUMPTION_LABEL: &str = "calc.consumption_label";
    pub const CALC_PRICE_LABEL: &str = "calc.price_label";
    pub const CALC_VAT_LABEL: &str = "calc.vat_label";

    pub const MAIN_MENU_TITLE: &str = "main_menu.title";
    pub const MAIN_MENU_CONSUMPTION: &str = "main_menu.consumption";
    pub const MAIN_MENU_PRICE: &str = "main_menu.price";
    pub const MAIN_MENU_VAT: &str = "main_menu.vat";
    pub const MAIN_MENU_EXIT: &str = "main_menu.exit";
    pub const PROMPT_MENU_SELECT: &str = "prompt.menu_select";
    pub const INVALID_SELECTION_RETRY: &str = "error.invalid_selection_retry";

    pub const PROMPT_CONSUMPTION: &str = "prompt.consumption";
    pub const PROMPT_PRICE: &str = "prompt.price";
    pub const INVALID_PRICE: &str = "error.invalid_price";

    pub const STATUS_CONSUMPTION: &str = "status.consumption";
    pub const STATUS_VAT: &str = "status.vat";
    pub const RESULT_COST: &str = "result.cost";
    pub const RESULT_PRE_TAX: &str = "result.pre_tax";
    pub const RESULT_WITH_VAT: &str = "result.with_vat";

    pub const GUI_SETTINGS_TITLE: &str = "gui.settings.title";
    pub const GUI_SETTINGS_LANGUAGE: &str = "gui.settings.language";
    pub const GUI_SETTINGS_THEME: &str = "gui.settings.theme";
    pub const GUI_SETTINGS_SAVE: &str = "gui.settings.save";
    pub const GUI_SETTINGS_SAVED: &str = "gui.settings.saved";
    pub const GUI_SETTINGS_SAVE_FAILED: &str = "gui.settings.save_failed";
    pub const GUI_THEME_SYSTEM: &str = "gui.theme.system";
    pub const GUI_THEME_LIGHT: &str = "gui.theme.light";
    pub const GUI_THEME_DARK: &str = "gui.theme.dark";
}

/// 런타임 언어 번들을 제공한다.
#[derive(Debug, Clone, Default)]
pub struct Translator {
    overrides: Option<HashMap<String, String>>,
}

impl Translator {
    /// 내장 영어 문자열만 사용하는 번역기.
    pub fn english() -> Self {
        Self { overrides: None }
    }

    /// 언어 코드 + 언어팩 디렉터리(locales/ 등)를 받아서 번역기를 생성한다.
    /// 디렉터리가 없거나 파일이 없으면 내장 문자열만 사용한다.
    pub fn new_with_pack(lang_code: &str, pack_dir: Option<&str>) -> Self {
        let overrides = pack_dir
            .and_then(|dir| load_overrides(dir, lang_code))
            .or_else(|| load_overrides("locales", lang_code))
            .or_else(|| built_in_pack(lang_code));
        if overrides.is_none() {
            tracing::debug!(lang = lang_code, "no language pack found, using built-in strings");
        }
        Self { overrides }
    }

    /// 키를 조회해 문자열을 반환한다. 언어팩에 없으면 None.
    pub fn lookup(&self, key: &str) -> Option<String> {
        self.overrides.as_ref().and_then(|m| m.get(key).cloned())
    }

    /// 번역을 가져온다. 언어팩에 없으면 내장 영어 문자열, 그것도 없으면 키를 그대로 돌려준다.
    pub fn t(&self, key: &str) -> String {
        self.lookup(key)
            .or_else(|| en(key).map(str::to_string))
            .unwrap_or_else(|| key.to_string())
    }
}

/// CLI 플래그/설정/시스템 순으로 언어 코드를 결정한다.
pub fn resolve_language(cli_arg: &str, config_lang: Option<&str>) -> String {
    normalize_lang(cli_arg)
        .or_else(|| config_lang.and_then(normalize_lang))
        .or_else(detect_system_language)
        .unwrap_or_else(|| "en-us".to_string())
}

fn normalize_lang(code: &str) -> Option<String> {
    let c = code.trim().to_lowercase();
    match c.as_str() {
        "auto" | "" => None,
        "ko" | "ko-kr" => Some("ko-kr".into()),
        "en" | "en-us" | "en-uk" => Some("en-us".into()),
        other if other.starts_with("ko") => Some("ko-kr".into()),
        other if other.starts_with("en") => Some("en-us".into()),
        _ => None,
    }
}

fn normalize_locale_string(loc: &str) -> Option<String> {
    let lang = loc
        .split(['.', '_', '-'])
        .next()
        .unwrap_or_default()
        .to_lowercase();
    normalize_lang(&lang)
}

/// 시스템 로케일에서 언어를 추정한다.
pub fn detect_system_language() -> Option<String> {
    if let Some(code) = get_locale().as_deref().and_then(normalize_locale_string) {
        return Some(code);
    }
    ["LC_ALL", "LANG"]
        .iter()
        .filter_map(|var| std::env::var(var).ok())
        .find_map(|v| normalize_locale_string(&v))
}

/// TOML 기반 언어팩을 로드한다. 형식: key = "value" 로 구성된 플랫 맵 또는 중첩 테이블.
fn load_overrides(dir: &str, lang: &str) -> Option<HashMap<String, String>> {
    let try_load = |code: &str| -> Option<HashMap<String, String>> {
        let path = Path::new(dir).join(format!("{code}.toml"));
        let content = fs::read_to_string(path).ok()?;
        parse_toml_to_map(&content)
    };

    // 1) full code (e.g., en-us)
    if let Some(map) = try_load(lang) {
        return Some(map);
    }
    // 2) base code (e.g., en)
    let (base, _) = lang.split_once(['-', '_'])?;
    try_load(base)
}

fn parse_toml_to_map(src: &str) -> Option<HashMap<String, String>> {
    let value: toml::Value = toml::from_str(src).ok()?;
    let table = value.as_table()?;
    let mut map = HashMap::new();

    fn walk(prefix: &str, val: &toml::Value, out: &mut HashMap<String, String>) {
        match val {
            toml::Value::String(s) => {
                out.insert(prefix.to_string(), s.to_string());
            }
            toml::Value::Table(t) => {
                for (k, v) in t {
                    let key = if prefix.is_empty() {
                        k.clone()
                    } else {
                        format!("{prefix}.{k}")
                    };
                    walk(&key, v, out);
                }
            }
            _ => {}
        }
    }

    for (k, v) in table {
        walk(k, v, &mut map);
    }

    if map.is_empty() {
        None
    } else {
        Some(map)
    }
}

/// 내장 언어팩(파일이 없어도 동작하도록 빌드 시 포함).
fn built_in_pack(lang: &str) -> Option<HashMap<String, String>> {
    match lang.to_lowercase().as_str() {
        "en-us" | "en" => parse_toml_to_map(include_str!("../locales/en-us.toml")),
        "ko-kr" | "ko" => parse_toml_to_map(include_str!("../locales/ko-kr.toml")),
        _ => None,
    }
}

fn en(key: &str) -> Option<&'static str> {
    use keys::*;
    let s = match key {
        APP_EXIT => "Bye.",
        CALC_TITLE => "Cost of electricity",
        CALC_CONSUMPTION_LABEL => "Consumption in kWh",
        CALC_PRICE_LABEL => "Price/kWh {price}",
        CALC_VAT_LABEL => "VAT 10% (otherwise calculated with VAT 24%)",
        MAIN_MENU_TITLE => "\n=== Cost of electricity ===",
        MAIN_MENU_CONSUMPTION => "1) Enter consumption",
        MAIN_MENU_PRICE => "2) Set price per kWh",
        MAIN_MENU_VAT => "3) Toggle VAT 10% / 24%",
        MAIN_MENU_EXIT => "0) Exit",
        PROMPT_MENU_SELECT => "Select: ",
        INVALID_SELECTION_RETRY => "Invalid selection, try again.",
        PROMPT_CONSUMPTION => "Consumption in kWh: ",
        PROMPT_PRICE => "Price per kWh (-0.05 .. 1.00): ",
        INVALID_PRICE => "Enter a number such as 0.12.",
        STATUS_CONSUMPTION => "Consumption: {value} kWh",
        STATUS_VAT => "VAT: {percent}%",
        RESULT_COST => "Cost: {cost}",
        RESULT_PRE_TAX => "Pre-tax: {value} €",
        RESULT_WITH_VAT => "With VAT {percent}%: {value} €",
        GUI_SETTINGS_TITLE => "Settings",
        GUI_SETTINGS_LANGUAGE => "Language",
        GUI_SETTINGS_THEME => "Theme",
        GUI_SETTINGS_SAVE => "Save",
        GUI_SETTINGS_SAVED => "Settings saved.",
        GUI_SETTINGS_SAVE_FAILED => "Saving settings failed: {error}",
        GUI_THEME_SYSTEM => "System",
        GUI_THEME_LIGHT => "Light",
        GUI_THEME_DARK => "Dark",
        _ => return None,
    };
    Some(s)
}
