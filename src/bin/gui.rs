#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

//! eframe/egui 기반 데스크톱 GUI 진입점. 비교 시리즈를 레이더 차트로 그린다.

use eframe::{egui, App, Frame};
use material_comparison_toolbox::{
    app,
    catalogue::Catalogue,
    comparison::{self, ChartSeries},
    config, export,
};
use rfd::FileDialog;
use std::f32::consts::{FRAC_PI_2, TAU};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

const RINGS: usize = 4;

const PALETTE: [egui::Color32; 9] = [
    egui::Color32::from_rgb(31, 119, 180),
    egui::Color32::from_rgb(255, 127, 14),
    egui::Color32::from_rgb(44, 160, 44),
    egui::Color32::from_rgb(214, 39, 40),
    egui::Color32::from_rgb(148, 103, 189),
    egui::Color32::from_rgb(140, 86, 75),
    egui::Color32::from_rgb(227, 119, 194),
    egui::Color32::from_rgb(127, 127, 127),
    egui::Color32::from_rgb(188, 189, 34),
];

fn main() -> Result<(), eframe::Error> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let app_cfg = config::load_or_default().unwrap_or_else(|e| {
        error!("설정 로드 실패, 기본값 사용: {e}");
        config::Config::default()
    });
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size([1100.0, 760.0]),
        ..Default::default()
    };
    eframe::run_native(
        "Material Comparison Toolbox",
        options,
        Box::new(move |_cc| Box::new(GuiApp::new(app_cfg))),
    )
}

struct GuiApp {
    config: config::Config,
    catalogue: Option<Catalogue>,
    material_on: Vec<bool>,
    property_on: Vec<bool>,
    series: Vec<ChartSeries>,
    status: Option<String>,
}

impl GuiApp {
    fn new(config: config::Config) -> Self {
        let mut gui = Self {
            config,
            catalogue: None,
            material_on: Vec::new(),
            property_on: Vec::new(),
            series: Vec::new(),
            status: None,
        };
        match app::open_catalogue(&gui.config) {
            Ok(cat) => {
                gui.material_on = cat
                    .names()
                    .map(|n| {
                        gui.config.materials.is_empty()
                            || gui.config.materials.iter().any(|m| m.eq_ignore_ascii_case(n))
                    })
                    .collect();
                gui.property_on = cat
                    .schema()
                    .keys()
                    .map(|k| {
                        gui.config.properties.is_empty()
                            || gui.config.properties.iter().any(|p| p == k)
                    })
                    .collect();
                gui.catalogue = Some(cat);
                gui.recompute();
            }
            Err(e) => gui.status = Some(format!("Catalogue error: {e}")),
        }
        gui
    }

    fn selected_names(&self) -> Vec<String> {
        let Some(cat) = &self.catalogue else {
            return Vec::new();
        };
        cat.names()
            .zip(&self.material_on)
            .filter(|(_, on)| **on)
            .map(|(n, _)| n.to_string())
            .collect()
    }

    fn selected_keys(&self) -> Vec<String> {
        let Some(cat) = &self.catalogue else {
            return Vec::new();
        };
        cat.schema()
            .keys()
            .zip(&self.property_on)
            .filter(|(_, on)| **on)
            .map(|(k, _)| k.to_string())
            .collect()
    }

    fn recompute(&mut self) {
        let Some(cat) = &self.catalogue else {
            return;
        };
        let names = self.selected_names();
        let keys = self.selected_keys();
        self.series.clear();
        if names.is_empty() || keys.is_empty() {
            self.status = Some("Select at least one material and one property.".into());
            return;
        }
        let result = cat
            .select(&names)
            .map_err(|e| e.to_string())
            .and_then(|selected| {
                comparison::compare(selected, &keys, &self.config.normalization)
                    .map_err(|e| e.to_string())
            });
        match result {
            Ok(series) => {
                info!(series = series.len(), axes = keys.len(), "레이더 차트 갱신");
                self.series = series;
                self.status = None;
            }
            Err(e) => self.status = Some(e),
        }
    }

    fn export_csv(&mut self) {
        let Some(cat) = &self.catalogue else {
            return;
        };
        let Some(path) = FileDialog::new()
            .add_filter("CSV", &["csv"])
            .set_file_name(self.config.table_path.to_string_lossy())
            .save_file()
        else {
            return;
        };
        let names = self.selected_names();
        let result = cat
            .select(&names)
            .map_err(|e| e.to_string())
            .and_then(|selected| {
                export::save_table_csv(selected, &path).map_err(|e| e.to_string())
            });
        self.status = Some(match result {
            Ok(()) => format!("Saved {}", path.display()),
            Err(e) => e,
        });
    }

    fn export_json(&mut self) {
        let Some(path) = FileDialog::new()
            .add_filter("JSON", &["json"])
            .set_file_name(self.config.series_path.to_string_lossy())
            .save_file()
        else {
            return;
        };
        self.status = Some(match export::save_series_json(&self.series, &path) {
            Ok(()) => format!("Saved {}", path.display()),
            Err(e) => e.to_string(),
        });
    }

    fn ui_selection(&mut self, ui: &mut egui::Ui) {
        let Some(cat) = &self.catalogue else {
            return;
        };
        let mut changed = false;
        ui.heading("Materials");
        for (i, name) in cat.names().enumerate() {
            let color = PALETTE[i % PALETTE.len()];
            ui.horizontal(|ui| {
                changed |= ui.checkbox(&mut self.material_on[i], "").changed();
                ui.colored_label(color, name);
            });
        }
        ui.separator();
        ui.heading("Properties");
        for (i, d) in cat.schema().descriptors().iter().enumerate() {
            let units = d.units.as_deref().unwrap_or("");
            changed |= ui
                .checkbox(&mut self.property_on[i], d.label.as_str())
                .on_hover_text(format!("{} [{units}]", d.key))
                .changed();
        }
        if changed {
            self.recompute();
        }
    }
}

impl App for GuiApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut Frame) {
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.heading("Material comparison");
                ui.separator();
                if ui.button("Export CSV").clicked() {
                    self.export_csv();
                }
                if ui.button("Export JSON").clicked() {
                    self.export_json();
                }
                if let Some(status) = &self.status {
                    ui.separator();
                    ui.label(status.as_str());
                }
            });
        });

        egui::SidePanel::left("selection")
            .resizable(true)
            .default_width(260.0)
            .show(ctx, |ui| {
                egui::ScrollArea::vertical()
                    .auto_shrink([false; 2])
                    .show(ui, |ui| self.ui_selection(ui));
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            let upper = self.config.normalization.upper() as f32;
            draw_radar(ui, &self.series, &self.material_on, upper);
        });
    }
}

/// 축마다 `[0, upper]`를 반지름에 대응시켜 시리즈를 채운 다각형으로 그린다.
/// 값이 없는 축은 꼭짓점에서 빼고 축 끝에 빈 원으로 표시한다.
fn draw_radar(ui: &mut egui::Ui, series: &[ChartSeries], material_on: &[bool], upper: f32) {
    let Some(first) = series.first() else {
        return;
    };
    let axes = first.axis_labels.len();
    if axes == 0 || upper <= 0.0 {
        return;
    }
    let (response, painter) = ui.allocate_painter(ui.available_size(), egui::Sense::hover());
    let rect = response.rect;
    let center = rect.center();
    let radius = rect.width().min(rect.height()) * 0.36;
    let grid = egui::Stroke::new(1.0, ui.visuals().weak_text_color());
    let text_color = ui.visuals().text_color();
    let small = egui::FontId::proportional(11.0);

    let direction = |axis: usize| {
        let angle = -FRAC_PI_2 + TAU * axis as f32 / axes as f32;
        egui::vec2(angle.cos(), angle.sin())
    };

    painter.text(
        rect.center_top() + egui::vec2(0.0, 8.0),
        egui::Align2::CENTER_TOP,
        "Material comparison",
        egui::FontId::proportional(16.0),
        text_color,
    );

    // 반경 축: 링마다 정규화 값을 적는다.
    for ring in 1..=RINGS {
        let fraction = ring as f32 / RINGS as f32;
        painter.circle_stroke(center, radius * fraction, grid);
        painter.text(
            center + egui::vec2(4.0, -radius * fraction),
            egui::Align2::LEFT_BOTTOM,
            format!("{:.2}", upper * fraction),
            small.clone(),
            ui.visuals().weak_text_color(),
        );
    }
    for (axis, label) in first.axis_labels.iter().enumerate() {
        let dir = direction(axis);
        painter.line_segment([center, center + dir * radius], grid);
        painter.text(
            center + dir * (radius + 18.0),
            egui::Align2::CENTER_CENTER,
            label,
            small.clone(),
            text_color,
        );
    }

    // 팔레트 색을 체크박스 순서와 맞추기 위해 선택된 재료의 원래 인덱스를 쓴다.
    let color_slots: Vec<usize> = material_on
        .iter()
        .enumerate()
        .filter(|(_, on)| **on)
        .map(|(i, _)| i)
        .collect();
    let mut legend_pos = rect.left_top() + egui::vec2(8.0, 8.0);
    for (n, s) in series.iter().enumerate() {
        let slot = color_slots.get(n).copied().unwrap_or(n);
        let color = PALETTE[slot % PALETTE.len()];
        let stroke = egui::Stroke::new(2.0, color);

        let points: Vec<egui::Pos2> = s
            .plotted()
            .map(|(axis, v)| center + direction(axis) * (v as f32 / upper).max(0.0) * radius)
            .collect();
        let missing = s.missing_axes();
        for &axis in &missing {
            let marker = center + direction(axis) * (radius + 4.0 + 5.0 * n as f32);
            painter.circle_stroke(marker, 3.0, egui::Stroke::new(1.5, color));
        }
        match points.len() {
            0 => {}
            1 => {
                painter.circle_filled(points[0], 3.0, color);
            }
            _ => {
                painter.add(fill_shape(center, &points, color.gamma_multiply(0.25)));
                painter.add(egui::Shape::closed_line(points, stroke));
            }
        }

        let legend = if !missing.is_empty() {
            format!("{} ({} missing)", s.label, missing.len())
        } else {
            s.label.clone()
        };
        painter.text(legend_pos, egui::Align2::LEFT_TOP, legend, small.clone(), color);
        legend_pos.y += 14.0;
    }
}

/// 중심에서 꼭짓점으로 뻗는 삼각형 부채꼴로 다각형 내부를 채운다.
/// 레이더 다각형은 중심에 대해 별 모양이라 오목해도 올바르게 채워진다.
fn fill_shape(center: egui::Pos2, points: &[egui::Pos2], color: egui::Color32) -> egui::Shape {
    let mut mesh = egui::Mesh::default();
    mesh.colored_vertex(center, color);
    for p in points {
        mesh.colored_vertex(*p, color);
    }
    let n = points.len() as u32;
    for i in 0..n {
        mesh.add_triangle(0, 1 + i, 1 + (i + 1) % n);
    }
    egui::Shape::mesh(mesh)
}
