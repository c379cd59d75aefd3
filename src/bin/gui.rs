#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

//! eframe/egui 기반 데스크톱 GUI 진입점.

use cost_of_electricity::{
    config::{self, ThemeChoice},
    electricity::{CalculatorState, InputEvent},
    format::fill_template,
    i18n::{self, keys},
    logging,
    units::UnitPrice,
};
use eframe::{egui, App, Frame};
use image::GenericImageView;
use std::{env, fs, path::Path};

const LANGUAGE_OPTIONS: &[(&str, &str)] = &[("auto", "Auto"), ("en-us", "English"), ("ko-kr", "한국어")];

fn main() -> Result<(), eframe::Error> {
    // CLI 언어 옵션 처리: --lang xx 또는 --lang=xx (xx: auto/en-us/ko-kr)
    let mut cli_lang: Option<String> = None;
    let args: Vec<String> = env::args().collect();
    let mut i = 1;
    while i < args.len() {
        let a = &args[i];
        if let Some(val) = a.strip_prefix("--lang=") {
            cli_lang = Some(val.to_string());
        } else if (a == "--lang" || a == "-L") && i + 1 < args.len() {
            cli_lang = Some(args[i + 1].clone());
            i += 1;
        }
        i += 1;
    }

    let app_cfg = match config::load_or_default() {
        Ok(cfg) => {
            logging::init(cfg.log_level);
            cfg
        }
        Err(e) => {
            let cfg = config::Config::default();
            logging::init(cfg.log_level);
            tracing::warn!("config unavailable, using defaults: {e}");
            cfg
        }
    };
    tracing::info!(version = env!("CARGO_PKG_VERSION"), "starting GUI");

    let mut viewport = egui::ViewportBuilder::default().with_inner_size([380.0, 420.0]);
    if let Some(icon) = load_app_icon() {
        viewport = viewport.with_icon(icon);
    }
    let options = eframe::NativeOptions {
        viewport,
        ..Default::default()
    };
    eframe::run_native(
        "Cost of electricity",
        options,
        Box::new(move |_cc| Box::new(GuiApp::new(app_cfg, cli_lang.as_deref()))),
    )
}

fn load_app_icon() -> Option<egui::IconData> {
    let search = ["icon.png", "assets/icon.png", "../assets/icon.png"];
    let path = search.iter().find(|p| Path::new(*p).exists())?;
    let bytes = fs::read(path).ok()?;
    let img = image::load_from_memory(&bytes).ok()?;
    let (w, h) = img.dimensions();
    Some(egui::IconData {
        rgba: img.to_rgba8().into_raw(),
        width: w,
        height: h,
    })
}

struct GuiApp {
    config: config::Config,
    tr: i18n::Translator,
    state: CalculatorState,
    show_settings_modal: bool,
    settings_status: Option<String>,
}

impl GuiApp {
    fn new(config: config::Config, cli_lang: Option<&str>) -> Self {
        let lang = i18n::resolve_language(cli_lang.unwrap_or("auto"), Some(config.language.as_str()));
        let tr = i18n::Translator::new_with_pack(&lang, config.locale_dir.as_deref());
        Self {
            config,
            tr,
            state: CalculatorState::new(),
            show_settings_modal: false,
            settings_status: None,
        }
    }

    fn apply(&mut self, event: InputEvent) {
        self.state.apply(event);
    }

    fn reload_translator(&mut self) {
        let lang = i18n::resolve_language(&self.config.language, None);
        self.tr = i18n::Translator::new_with_pack(&lang, self.config.locale_dir.as_deref());
    }

    fn apply_theme(&self, ctx: &egui::Context) {
        match self.config.theme {
            ThemeChoice::Light => ctx.set_visuals(egui::Visuals::light()),
            ThemeChoice::Dark => ctx.set_visuals(egui::Visuals::dark()),
            ThemeChoice::System => {}
        }
    }

    fn calculator_ui(&mut self, ui: &mut egui::Ui) {
        ui.add_space(4.0);
        ui.label(egui::RichText::new(self.tr.t(keys::CALC_TITLE)).strong());
        ui.add_space(10.0);

        ui.label(self.tr.t(keys::CALC_CONSUMPTION_LABEL));
        let mut consumption = self.state.consumption_text().to_string();
        let edit = ui.add(
            egui::TextEdit::singleline(&mut consumption)
                .hint_text(self.tr.t(keys::CALC_CONSUMPTION_LABEL))
                .desired_width(f32::INFINITY),
        );
        if edit.changed() {
            self.apply(InputEvent::ConsumptionEdited(consumption));
        }

        ui.add_space(12.0);
        ui.label(fill_template(
            &self.tr.t(keys::CALC_PRICE_LABEL),
            &[("price", self.state.price_label())],
        ));
        let mut slider_value = self.state.unit_price().as_f32();
        let slider = ui.add(
            egui::Slider::new(&mut slider_value, UnitPrice::slider_range()).show_value(false),
        );
        if slider.changed() {
            self.apply(InputEvent::PriceSlid(slider_value));
        }

        ui.add_space(8.0);
        let mut vat10 = self.state.vat10_selected();
        if ui.checkbox(&mut vat10, self.tr.t(keys::CALC_VAT_LABEL)).changed() {
            self.apply(InputEvent::Vat10Toggled(vat10));
        }

        ui.add_space(16.0);
        ui.vertical_centered(|ui| {
            egui::Frame::group(ui.style())
                .inner_margin(egui::Margin::same(10.0))
                .show(ui, |ui| {
                    ui.label(egui::RichText::new(self.state.result_label()).size(18.0));
                });
        });
    }

    fn settings_window(&mut self, ctx: &egui::Context) {
        let mut open = self.show_settings_modal;
        let mut language_changed = false;
        let mut save_clicked = false;
        egui::Window::new(self.tr.t(keys::GUI_SETTINGS_TITLE))
            .collapsible(false)
            .resizable(false)
            .open(&mut open)
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.label(self.tr.t(keys::GUI_SETTINGS_LANGUAGE));
                    let current = LANGUAGE_OPTIONS
                        .iter()
                        .find(|(code, _)| *code == self.config.language)
                        .map_or(self.config.language.as_str(), |(_, label)| *label)
                        .to_string();
                    egui::ComboBox::from_id_source("language")
                        .selected_text(current)
                        .show_ui(ui, |ui| {
                            for (code, label) in LANGUAGE_OPTIONS {
                                if ui
                                    .selectable_value(&mut self.config.language, code.to_string(), *label)
                                    .changed()
                                {
                                    language_changed = true;
                                }
                            }
                        });
                });
                ui.horizontal(|ui| {
                    ui.label(self.tr.t(keys::GUI_SETTINGS_THEME));
                    ui.radio_value(&mut self.config.theme, ThemeChoice::System, self.tr.t(keys::GUI_THEME_SYSTEM));
                    ui.radio_value(&mut self.config.theme, ThemeChoice::Light, self.tr.t(keys::GUI_THEME_LIGHT));
                    ui.radio_value(&mut self.config.theme, ThemeChoice::Dark, self.tr.t(keys::GUI_THEME_DARK));
                });
                ui.separator();
                if ui.button(self.tr.t(keys::GUI_SETTINGS_SAVE)).clicked() {
                    save_clicked = true;
                }
                if let Some(status) = &self.settings_status {
                    ui.small(status);
                }
            });
        self.show_settings_modal = open;

        if language_changed {
            self.reload_translator();
        }
        if save_clicked {
            self.settings_status = Some(match self.config.save() {
                Ok(()) => self.tr.t(keys::GUI_SETTINGS_SAVED),
                Err(e) => {
                    tracing::error!("saving config failed: {e}");
                    fill_template(
                        &self.tr.t(keys::GUI_SETTINGS_SAVE_FAILED),
                        &[("error", e.to_string())],
                    )
                }
            });
        }
    }
}

impl App for GuiApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut Frame) {
        self.apply_theme(ctx);

        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.heading(self.tr.t(keys::CALC_TITLE));
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.button(self.tr.t(keys::GUI_SETTINGS_TITLE)).clicked() {
                        self.show_settings_modal = true;
                        self.settings_status = None;
                    }
                });
            });
        });

        if self.show_settings_modal {
            self.settings_window(ctx);
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            self.calculator_ui(ui);
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app() -> GuiApp {
        GuiApp::new(config::Config::default(), Some("en-us"))
    }

    #[test]
    fn starts_with_initial_screen_values() {
        let app = app();
        assert_eq!(app.state.unit_price(), UnitPrice::DEFAULT);
        assert!(app.state.vat10_selected());
        assert_eq!(app.state.result_label(), "0 €");
    }

    #[test]
    fn slider_drag_snaps_and_recomputes() {
        let mut app = app();
        app.apply(InputEvent::ConsumptionEdited("100".into()));
        app.apply(InputEvent::PriceSlid(0.1049));
        assert_eq!(app.state.unit_price().cents(), 10);
        assert_eq!(app.state.result_label(), "11 €");
    }

    #[test]
    fn text_field_is_backed_by_calculator_state() {
        let mut app = app();
        app.apply(InputEvent::ConsumptionEdited("12.5".into()));
        assert_eq!(app.state.consumption_text(), "12.5");
        app.apply(InputEvent::ConsumptionEdited("12.5x".into()));
        assert_eq!(app.state.consumption_text(), "12.5x");
        assert_eq!(app.state.result_label(), "0 €");
    }

    #[test]
    fn language_reload_switches_strings() {
        let mut app = app();
        assert_eq!(app.tr.t(keys::CALC_TITLE), "Cost of electricity");
        app.config.language = "ko-kr".into();
        app.reload_translator();
        assert_eq!(app.tr.t(keys::CALC_TITLE), "전기 요금");
    }
}
