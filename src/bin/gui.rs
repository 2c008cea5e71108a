#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

//! eframe/egui 기반 데스크톱 GUI 진입점.

use eframe::{egui, App, Frame};
use egui_plot::{Line, Plot, PlotPoints};
use rfd::FileDialog;
use std::{fs, path::Path};

use wind_turbine_toolbox::{
    aero, config, curves,
    i18n::{self, keys, Translator},
    report, solver,
    solver::DesignSummary,
    types::{Constraints, Env, GeneratorType, TurbineConfig},
};

fn main() -> Result<(), eframe::Error> {
    let viewport = egui::ViewportBuilder::default().with_inner_size([720.0, 600.0]);
    let native = eframe::NativeOptions {
        viewport,
        ..Default::default()
    };
    let app_cfg = config::load_or_default().unwrap_or_default();
    eframe::run_native(
        "Wind Turbine Toolbox",
        native,
        Box::new(move |cc| {
            setup_fonts(&cc.egui_ctx);
            Box::new(GuiApp::new(app_cfg.clone()))
        }),
    )
}

/// 한글 표시를 위해 시스템에서 CJK 폰트를 찾아 등록한다.
/// 찾지 못하면 egui 기본 폰트를 그대로 사용한다.
fn setup_fonts(ctx: &egui::Context) {
    let candidates = [
        "C:\\Windows\\Fonts\\malgun.ttf",
        "/usr/share/fonts/truetype/nanum/NanumGothic.ttf",
        "/usr/share/fonts/opentype/noto/NotoSansCJK-Regular.ttc",
        "/System/Library/Fonts/AppleSDGothicNeo.ttc",
    ];
    for cand in candidates {
        if Path::new(cand).exists() {
            if let Ok(bytes) = fs::read(cand) {
                let mut fonts = egui::FontDefinitions::default();
                fonts
                    .font_data
                    .insert("cjk".to_string(), egui::FontData::from_owned(bytes));
                fonts
                    .families
                    .entry(egui::FontFamily::Proportional)
                    .or_default()
                    .insert(0, "cjk".to_string());
                fonts
                    .families
                    .entry(egui::FontFamily::Monospace)
                    .or_default()
                    .insert(0, "cjk".to_string());
                ctx.set_fonts(fonts);
                return;
            }
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum Tab {
    Design,
    Curves,
    Settings,
}

struct GuiApp {
    config: config::Config,
    tr: Translator,
    lang_input: String,
    tab: Tab,
    // 설계 입력
    wattage: f64,
    air_density: f64,
    wind_speed: f64,
    blade_radius: f64,
    num_blades: u8,
    generator: GeneratorType,
    // 결과
    summary: Option<DesignSummary>,
    error: Option<String>,
    save_status: Option<String>,
    settings_status: Option<String>,
}

impl GuiApp {
    fn new(config: config::Config) -> Self {
        let lang_code = i18n::resolve_language("auto", Some(config.language.as_str()));
        let tr = Translator::new(&lang_code);
        let d = config.defaults.clone();
        Self {
            lang_input: config.language.clone(),
            config,
            tr,
            tab: Tab::Design,
            wattage: d.target_wattage,
            air_density: d.air_density,
            wind_speed: d.wind_speed,
            blade_radius: d.blade_radius,
            num_blades: d.num_blades,
            generator: d.generator_type,
            summary: None,
            error: None,
            save_status: None,
            settings_status: None,
        }
    }

    fn turbine_config(&self) -> TurbineConfig {
        TurbineConfig {
            target_wattage: self.wattage,
            env: Env {
                air_density: self.air_density,
                wind_speed: self.wind_speed,
            },
            constraints: Constraints {
                blade_radius: self.blade_radius,
                num_blades: self.num_blades,
                generator_type: self.generator,
            },
        }
    }

    fn design_tab(&mut self, ui: &mut egui::Ui) {
        let tr = self.tr;
        egui::Grid::new("design_inputs")
            .num_columns(2)
            .spacing([12.0, 6.0])
            .show(ui, |ui| {
                ui.label(tr.t(keys::LABEL_TARGET_WATTAGE));
                ui.add(
                    egui::DragValue::new(&mut self.wattage)
                        .speed(1.0)
                        .clamp_range(0.0..=1.0e9),
                );
                ui.end_row();

                ui.label(tr.t(keys::LABEL_AIR_DENSITY));
                ui.add(
                    egui::DragValue::new(&mut self.air_density)
                        .speed(0.005)
                        .clamp_range(0.0..=10.0),
                );
                ui.end_row();

                ui.label(tr.t(keys::LABEL_WIND_SPEED));
                ui.add(
                    egui::DragValue::new(&mut self.wind_speed)
                        .speed(0.1)
                        .clamp_range(0.0..=50.0),
                );
                ui.end_row();

                ui.label(tr.t(keys::LABEL_BLADE_RADIUS));
                ui.add(
                    egui::DragValue::new(&mut self.blade_radius)
                        .speed(0.01)
                        .clamp_range(0.0..=20.0),
                );
                ui.end_row();

                ui.label(tr.t(keys::LABEL_NUM_BLADES));
                ui.add(egui::DragValue::new(&mut self.num_blades).clamp_range(1..=8));
                ui.end_row();

                ui.label(tr.t(keys::LABEL_GENERATOR));
                egui::ComboBox::from_id_source("generator_type")
                    .selected_text(self.generator.as_str())
                    .show_ui(ui, |ui| {
                        ui.selectable_value(
                            &mut self.generator,
                            GeneratorType::Brushless,
                            GeneratorType::Brushless.as_str(),
                        );
                        ui.selectable_value(
                            &mut self.generator,
                            GeneratorType::Brushed,
                            GeneratorType::Brushed.as_str(),
                        );
                    });
                ui.end_row();
            });

        ui.add_space(8.0);
        if ui.button(tr.t(keys::BTN_GENERATE)).clicked() {
            self.save_status = None;
            match solver::solve(&self.turbine_config()) {
                Ok(summary) => {
                    self.summary = Some(summary);
                    self.error = None;
                }
                Err(e) => {
                    self.summary = None;
                    self.error = Some(e.to_string());
                }
            }
        }

        if let Some(err) = &self.error {
            ui.add_space(8.0);
            ui.colored_label(
                egui::Color32::from_rgb(200, 60, 60),
                format!("{}: {err}", tr.t(keys::ERROR_PREFIX)),
            );
        }

        if let Some(summary) = self.summary {
            ui.add_space(8.0);
            ui.separator();
            ui.heading(tr.t(keys::SUMMARY_HEADING));
            egui::Grid::new("design_result")
                .num_columns(2)
                .spacing([12.0, 4.0])
                .show(ui, |ui| {
                    ui.label(tr.t(keys::FIELD_ROTOR_AREA));
                    ui.label(format!("{:.4}", summary.rotor_area));
                    ui.end_row();
                    ui.label(tr.t(keys::FIELD_BLADE_LENGTH));
                    ui.label(format!("{:.4}", summary.blade_length));
                    ui.end_row();
                    ui.label(tr.t(keys::FIELD_TSR));
                    ui.label(format!("{:.4}", summary.tsr));
                    ui.end_row();
                    ui.label(tr.t(keys::FIELD_RPM));
                    ui.label(format!("{:.1}", summary.rpm));
                    ui.end_row();
                    ui.label(tr.t(keys::FIELD_GEAR_RATIO));
                    ui.label(format!("{:.3}", summary.gear_ratio));
                    ui.end_row();
                    ui.label(tr.t(keys::FIELD_GENERATOR));
                    ui.label(summary.generator_type.as_str());
                    ui.end_row();
                    ui.label(tr.t(keys::FIELD_CUT_IN));
                    ui.label(format!("{:.1}", summary.cut_in));
                    ui.end_row();
                    ui.label(tr.t(keys::FIELD_CUT_OUT));
                    ui.label(format!("{:.1}", summary.cut_out));
                    ui.end_row();
                });

            ui.add_space(6.0);
            if ui.button(tr.t(keys::BTN_SAVE_JSON)).clicked() {
                if let Some(path) = FileDialog::new()
                    .set_file_name("summary.json")
                    .add_filter("JSON", &["json"])
                    .save_file()
                {
                    let result = report::write_summary_json(&path, &summary).and_then(|()| {
                        report::write_summary_csv(&report::csv_sibling_path(&path), &summary)
                    });
                    match result {
                        Ok(()) => {
                            self.save_status = Some(format!(
                                "{} {}",
                                tr.t(keys::MSG_SAVED),
                                path.display()
                            ));
                        }
                        Err(e) => self.error = Some(e.to_string()),
                    }
                }
            }
            if let Some(status) = &self.save_status {
                ui.label(status.clone());
            }
        }
    }

    fn curves_tab(&mut self, ui: &mut egui::Ui) {
        let tr = self.tr;
        let input = curves::PowerCurveInput {
            blade_radius: self.blade_radius,
            air_density: self.air_density,
            cut_in: solver::CUT_IN_M_PER_S,
            cut_out: solver::CUT_OUT_M_PER_S,
        };

        ui.label(tr.t(keys::CURVE_POWER_TITLE));
        let power = curves::power_curve(&input, 0.0, solver::CUT_OUT_M_PER_S, 200);
        let power_points: PlotPoints = power
            .iter()
            .map(|p| [p.wind_speed_m_per_s, p.power_w])
            .collect();
        Plot::new("power_curve")
            .height(220.0)
            .allow_scroll(false)
            .show(ui, |plot_ui| {
                plot_ui.line(Line::new(power_points).name(tr.t(keys::SERIES_POWER)));
            });

        ui.add_space(10.0);
        ui.label(tr.t(keys::CURVE_CP_TITLE));
        let cp = curves::cp_curve(100);
        let cp_points: PlotPoints = cp.iter().map(|p| [p.tsr, p.cp]).collect();
        Plot::new("cp_curve")
            .height(220.0)
            .allow_scroll(false)
            .show(ui, |plot_ui| {
                plot_ui.line(Line::new(cp_points).name(tr.t(keys::SERIES_CP)));
            });

        ui.add_space(10.0);
        ui.label(tr.t(keys::CURVE_RPM_TITLE));
        let rpm = curves::rpm_curve(
            aero::peak_cp_tsr(),
            self.blade_radius,
            solver::CUT_IN_M_PER_S,
            solver::CUT_OUT_M_PER_S,
            200,
        );
        let rpm_points: PlotPoints = rpm
            .iter()
            .map(|p| [p.wind_speed_m_per_s, p.rpm])
            .collect();
        Plot::new("rpm_curve")
            .height(220.0)
            .allow_scroll(false)
            .show(ui, |plot_ui| {
                plot_ui.line(Line::new(rpm_points).name(tr.t(keys::SERIES_RPM)));
            });
    }

    fn settings_tab(&mut self, ui: &mut egui::Ui) {
        let tr = self.tr;
        ui.horizontal(|ui| {
            ui.label(tr.t(keys::SETTINGS_LANGUAGE));
            ui.text_edit_singleline(&mut self.lang_input);
        });
        ui.small(tr.t(keys::SETTINGS_DEFAULTS_NOTE));
        ui.add_space(6.0);
        if ui.button(tr.t(keys::SETTINGS_SAVE)).clicked() {
            self.config.language = self.lang_input.trim().to_string();
            let lang_code =
                i18n::resolve_language("auto", Some(self.config.language.as_str()));
            self.tr = Translator::new(&lang_code);
            match self.config.save() {
                Ok(()) => self.settings_status = Some(self.tr.t(keys::SETTINGS_SAVED).to_string()),
                Err(e) => self.settings_status = Some(e.to_string()),
            }
        }
        if let Some(status) = &self.settings_status {
            ui.label(status.clone());
        }
    }
}

impl App for GuiApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            let tr = self.tr;
            ui.horizontal(|ui| {
                ui.selectable_value(&mut self.tab, Tab::Design, tr.t(keys::TAB_DESIGN));
                ui.selectable_value(&mut self.tab, Tab::Curves, tr.t(keys::TAB_CURVES));
                ui.selectable_value(&mut self.tab, Tab::Settings, tr.t(keys::TAB_SETTINGS));
            });
            ui.separator();
            match self.tab {
                Tab::Design => self.design_tab(ui),
                Tab::Curves => self.curves_tab(ui),
                Tab::Settings => self.settings_tab(ui),
            }
        });
    }
}
