#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

//! eframe/egui desktop GUI entry point.

use clap::Parser;
use eframe::{egui, App, Frame};
use egui_plot::{Legend, Line, LineStyle, MarkerShape, Plot, PlotPoint, Points, Text, VLine};
use rfd::FileDialog;
use std::collections::TryReserveError;
use std::path::Path;
use eoq_calculator::{
    config, export,
    inventory::{self, CostPoint, EoqError, EoqResult, InventoryParameters},
    logging,
    report::{self, Labels},
};

const TOTAL_COLOR: egui::Color32 = egui::Color32::from_rgb(31, 119, 180);
const HOLDING_COLOR: egui::Color32 = egui::Color32::from_rgb(44, 160, 44);
const ORDERING_COLOR: egui::Color32 = egui::Color32::from_rgb(214, 39, 40);
const EOQ_COLOR: egui::Color32 = egui::Color32::from_rgb(255, 127, 14);

/// Upper bound of the demand field [unit/year]
const MAX_DEMAND: f64 = 1e12;
/// Upper bound of the cost fields [currency]
const MAX_COST: f64 = 1e15;

/// Command-line overrides for the initial inputs.
#[derive(Debug, Parser)]
#[command(name = "eoq_calculator", version, about = "Economic order quantity calculator (GUI)")]
struct Args {
    /// Annual demand D [unit/year]
    #[arg(long)]
    demand: Option<f64>,
    /// Fixed cost per order S
    #[arg(long)]
    order_cost: Option<f64>,
    /// Holding cost per unit per year H
    #[arg(long)]
    holding_cost: Option<f64>,
    /// Debug-level logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<(), eframe::Error> {
    let args = Args::parse();
    logging::init(args.verbose);

    let mut app_cfg = config::load_or_default().unwrap_or_else(|e| {
        tracing::warn!("using default settings: {e}");
        config::Config::default()
    });
    if let Some(d) = args.demand {
        app_cfg.defaults.demand = d;
    }
    if let Some(s) = args.order_cost {
        app_cfg.defaults.order_cost = s;
    }
    if let Some(h) = args.holding_cost {
        app_cfg.defaults.holding_cost = h;
    }

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("EOQ Calculator")
            .with_inner_size(egui::vec2(1100.0, 780.0)),
        ..Default::default()
    };
    eframe::run_native(
        "EOQ Calculator",
        options,
        Box::new(move |_cc| Box::new(GuiApp::new(app_cfg))),
    )
}

fn label_with_tip(ui: &mut egui::Ui, text: &str, tip: &str) -> egui::Response {
    ui.label(text).on_hover_text(tip)
}

fn heading_with_tip(ui: &mut egui::Ui, text: &str, tip: &str) -> egui::Response {
    ui.heading(text).on_hover_text(tip)
}

/// Plot-ready copy of the cost curves for one set of inputs.
///
/// Above `sample_limit` samples the curve is thinned to an even stride that
/// keeps the first and last quantity.
#[derive(Debug, Clone)]
struct ChartSeries {
    total: Vec<[f64; 2]>,
    holding: Vec<[f64; 2]>,
    ordering: Vec<[f64; 2]>,
    optimum: CostPoint,
    show_markers: bool,
}

impl ChartSeries {
    fn build(
        params: InventoryParameters,
        sample_limit: usize,
        marker_limit: usize,
    ) -> Result<Self, TryReserveError> {
        let curve = params.cost_curve();
        let n = curve.len();
        let step = chart_step(n, sample_limit);
        let points = n.div_ceil(step).saturating_add(1);
        let mut total = Vec::new();
        let mut holding = Vec::new();
        let mut ordering = Vec::new();
        total.try_reserve_exact(points)?;
        holding.try_reserve_exact(points)?;
        ordering.try_reserve_exact(points)?;

        let mut last_q = 0;
        let mut push = |s: inventory::CostCurveSample| {
            let q = s.quantity as f64;
            total.push([q, s.total_cost]);
            holding.push([q, s.holding_cost]);
            ordering.push([q, s.ordering_cost]);
        };
        for s in curve.clone().step_by(step) {
            last_q = s.quantity;
            push(s);
        }
        if let Some(s) = curve.last().filter(|s| s.quantity != last_q) {
            push(s);
        }
        Ok(Self {
            total,
            holding,
            ordering,
            optimum: inventory::optimal_point(&params),
            show_markers: step == 1 && n <= marker_limit,
        })
    }
}

/// Stride between plotted samples so that at most about `limit` are kept.
fn chart_step(len: usize, limit: usize) -> usize {
    len.div_ceil(limit.max(1)).max(1)
}

/// Inputs a cached chart was built from.
#[derive(Debug, Clone, Copy, PartialEq)]
struct ChartKey {
    params: InventoryParameters,
    sample_limit: usize,
    marker_limit: usize,
}

#[derive(Debug)]
struct ChartCache {
    key: ChartKey,
    series: Result<ChartSeries, String>,
}

fn cap(value: f64, max: f64) -> f64 {
    if value > max {
        max
    } else {
        value
    }
}

struct GuiApp {
    config: config::Config,
    demand: f64,
    order_cost: f64,
    holding_cost: f64,
    chart: Option<ChartCache>,
    chart_marker_limit: usize,
    chart_sample_limit: usize,
    show_formula_modal: bool,
    show_settings_modal: bool,
    show_interpretation: bool,
    currency_input: String,
    quantity_input: String,
    settings_status: Option<String>,
    export_status: Option<String>,
}

impl GuiApp {
    fn new(config: config::Config) -> Self {
        let defaults = config.defaults;
        Self {
            currency_input: config.currency_label.clone(),
            quantity_input: config.quantity_label.clone(),
            chart_marker_limit: config.scatter_point_limit,
            chart_sample_limit: config.chart_sample_limit,
            config,
            demand: cap(defaults.demand, MAX_DEMAND),
            order_cost: cap(defaults.order_cost, MAX_COST),
            holding_cost: cap(defaults.holding_cost, MAX_COST),
            chart: None,
            show_formula_modal: false,
            show_settings_modal: false,
            show_interpretation: true,
            settings_status: None,
            export_status: None,
        }
    }

    fn params(&self) -> Result<InventoryParameters, EoqError> {
        InventoryParameters::new(self.demand, self.order_cost, self.holding_cost)
    }

    /// Rebuilds the chart series only when the inputs or the chart limits changed.
    fn refresh_chart(&mut self, params: InventoryParameters) -> Result<&ChartSeries, &str> {
        let key = ChartKey {
            params,
            sample_limit: self.chart_sample_limit,
            marker_limit: self.chart_marker_limit,
        };
        if self.chart.as_ref().map_or(true, |c| c.key != key) {
            tracing::debug!(?params, sample_limit = key.sample_limit, "rebuilding cost curves");
            let series = ChartSeries::build(params, key.sample_limit, key.marker_limit).map_err(|e| {
                tracing::warn!("chart allocation failed: {e}");
                format!("Chart unavailable: {e}")
            });
            self.chart = Some(ChartCache { key, series });
        }
        match &self.chart {
            Some(c) => c.series.as_ref().map_err(String::as_str),
            None => Err("Chart unavailable"),
        }
    }

    fn reset_inputs(&mut self) {
        self.demand = cap(self.config.defaults.demand, MAX_DEMAND);
        self.order_cost = cap(self.config.defaults.order_cost, MAX_COST);
        self.holding_cost = cap(self.config.defaults.holding_cost, MAX_COST);
    }

    fn ui_inputs(&mut self, ui: &mut egui::Ui) {
        let currency = self.config.currency_label.clone();
        ui.heading("Input parameters");
        ui.add_space(8.0);
        egui::Grid::new("input_grid")
            .num_columns(1)
            .spacing([12.0, 6.0])
            .show(ui, |ui| {
                label_with_tip(ui, "Annual demand (unit)", "D: units required per year");
                ui.end_row();
                ui.add(egui::DragValue::new(&mut self.demand).clamp_range(1.0..=MAX_DEMAND).speed(1.0));
                ui.end_row();
                label_with_tip(
                    ui,
                    &format!("Cost per order ({currency})"),
                    "S: fixed cost of placing one order",
                );
                ui.end_row();
                ui.add(egui::DragValue::new(&mut self.order_cost).clamp_range(1.0..=MAX_COST).speed(10.0));
                ui.end_row();
                label_with_tip(
                    ui,
                    &format!("Holding cost per unit per year ({currency})"),
                    "H: cost of storing one unit for a year",
                );
                ui.end_row();
                ui.add(egui::DragValue::new(&mut self.holding_cost).clamp_range(1.0..=MAX_COST).speed(10.0));
                ui.end_row();
            });
        ui.add_space(8.0);
        if ui.button("Reset to defaults").clicked() {
            self.reset_inputs();
        }
        if ui.button("Use as defaults").clicked() {
            self.config.defaults.demand = self.demand;
            self.config.defaults.order_cost = self.order_cost;
            self.config.defaults.holding_cost = self.holding_cost;
            self.settings_status = Some(save_status(&self.config));
        }
    }

    fn ui_results(&mut self, ui: &mut egui::Ui, params: &InventoryParameters, result: &EoqResult) {
        let labels = Labels::from_config(&self.config);
        let q = labels.quantity;
        heading_with_tip(ui, "EOQ result", "EOQ = sqrt(2DS / H)");
        egui::Grid::new("result_grid")
            .num_columns(2)
            .spacing([24.0, 6.0])
            .striped(true)
            .show(ui, |ui| {
                ui.label("Economic order quantity (EOQ)");
                ui.strong(format!("{:.2} {q}", result.eoq));
                ui.end_row();
                ui.label("Orders per year");
                ui.strong(format!("{:.2}", result.orders_per_year));
                ui.end_row();
                ui.label("Cost per order");
                ui.label(labels.money(params.order_cost(), 2));
                ui.end_row();
                ui.label(format!("Holding cost per {q} per year"));
                ui.label(labels.money(params.holding_cost(), 2));
                ui.end_row();
                ui.label("Total ordering cost");
                ui.label(labels.money(result.ordering_cost_total, 2));
                ui.end_row();
                ui.label("Total holding cost");
                ui.label(labels.money(result.holding_cost_total, 2));
                ui.end_row();
                ui.label("Total inventory cost");
                ui.strong(labels.money(result.total_cost, 2));
                ui.end_row();
            });
        ui.add_space(6.0);
        ui.checkbox(&mut self.show_interpretation, "Interpretation");
        if self.show_interpretation {
            let text = format!(
                "{}{}",
                report::interpretation(params, result, labels),
                report::chart_key()
            );
            ui.add(egui::Label::new(egui::RichText::new(text).small()).wrap(true));
        }
    }

    fn ui_chart(&mut self, ui: &mut egui::Ui, params: InventoryParameters, result: EoqResult) {
        let annotation = report::chart_annotation(&result, Labels::from_config(&self.config));
        let y_label = format!("Cost ({})", self.config.currency_label);
        let x_label = format!("Order quantity ({})", self.config.quantity_label);
        let offset = params.demand() * 0.05;

        ui.heading("Total cost vs order quantity");
        let chart = match self.refresh_chart(params) {
            Ok(chart) => chart,
            Err(msg) => {
                ui.colored_label(ui.visuals().error_fg_color, msg);
                return;
            }
        };
        Plot::new("eoq_chart")
            .legend(Legend::default())
            .x_axis_label(x_label)
            .y_axis_label(y_label)
            .show_grid(true)
            .height(420.0)
            .show(ui, |plot_ui| {
                plot_ui.line(Line::new(chart.total.clone()).name("Total cost").color(TOTAL_COLOR));
                plot_ui.line(
                    Line::new(chart.holding.clone())
                        .name("Holding cost")
                        .color(HOLDING_COLOR)
                        .style(LineStyle::dashed_loose()),
                );
                plot_ui.line(
                    Line::new(chart.ordering.clone())
                        .name("Ordering cost")
                        .color(ORDERING_COLOR)
                        .style(LineStyle::dashed_loose()),
                );
                if chart.show_markers {
                    for (series, color, name) in [
                        (&chart.total, TOTAL_COLOR, "Total cost"),
                        (&chart.holding, HOLDING_COLOR, "Holding cost"),
                        (&chart.ordering, ORDERING_COLOR, "Ordering cost"),
                    ] {
                        plot_ui.points(Points::new(series.clone()).radius(1.5).color(color).name(name));
                    }
                }
                plot_ui.vline(
                    VLine::new(chart.optimum.quantity)
                        .name(format!("EOQ ≈ {:.0}", chart.optimum.quantity))
                        .color(EOQ_COLOR)
                        .style(LineStyle::dotted_dense()),
                );
                plot_ui.points(
                    Points::new(vec![[chart.optimum.quantity, chart.optimum.total_cost]])
                        .shape(MarkerShape::Cross)
                        .radius(6.0)
                        .color(EOQ_COLOR)
                        .name("Optimal EOQ point"),
                );
                plot_ui.text(
                    Text::new(
                        PlotPoint::new(chart.optimum.quantity + offset, chart.optimum.total_cost),
                        annotation,
                    )
                    .anchor(egui::Align2::LEFT_CENTER),
                );
            });
    }

    fn export_csv(&mut self, params: InventoryParameters) {
        let dir = Path::new(&self.config.export_dir);
        let mut dialog = FileDialog::new()
            .add_filter("CSV", &["csv"])
            .set_file_name("eoq_cost_curve.csv");
        if dir.is_dir() {
            dialog = dialog.set_directory(dir);
        }
        let Some(path) = dialog.save_file() else {
            return;
        };
        self.export_status = Some(match export::write_cost_curve_csv(&path, params.cost_curve()) {
            Ok(rows) => format!("Exported {rows} rows to {}", path.display()),
            Err(e) => {
                tracing::warn!("export failed: {e}");
                format!("Export error: {e}")
            }
        });
    }

    fn ui_settings(&mut self, ctx: &egui::Context) {
        let mut open = self.show_settings_modal;
        egui::Window::new("Settings")
            .collapsible(false)
            .resizable(true)
            .open(&mut open)
            .show(ctx, |ui| {
                ui.label("Currency label");
                ui.text_edit_singleline(&mut self.currency_input);
                ui.label("Quantity label");
                ui.text_edit_singleline(&mut self.quantity_input);
                ui.separator();
                ui.label("Draw per-sample markers up to");
                ui.add(egui::Slider::new(&mut self.chart_marker_limit, 0..=20_000).suffix(" samples"));
                ui.label("Plot at most");
                ui.add(
                    egui::Slider::new(&mut self.chart_sample_limit, 1_000..=1_000_000)
                        .logarithmic(true)
                        .suffix(" samples"),
                );
                ui.separator();
                if ui.button("Save settings").clicked() {
                    self.config.currency_label = self.currency_input.trim().to_string();
                    self.config.quantity_label = self.quantity_input.trim().to_string();
                    self.config.scatter_point_limit = self.chart_marker_limit;
                    self.config.chart_sample_limit = self.chart_sample_limit;
                    self.settings_status = Some(save_status(&self.config));
                }
                if let Some(msg) = &self.settings_status {
                    ui.label(msg);
                }
            });
        self.show_settings_modal = open;
    }
}

fn save_status(cfg: &config::Config) -> String {
    match cfg.save() {
        Ok(()) => "Saved.".into(),
        Err(e) => {
            tracing::warn!("saving settings failed: {e}");
            format!("Save error: {e}")
        }
    }
}

impl App for GuiApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut Frame) {
        let params = self.params();

        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.heading("EOQ Calculator");
                ui.label(" | Economic Order Quantity");
                ui.separator();
                if ui.button("Formula reference").clicked() {
                    self.show_formula_modal = true;
                }
                if ui.button("Settings").clicked() {
                    self.show_settings_modal = true;
                }
                let export_btn = ui.add_enabled(params.is_ok(), egui::Button::new("Export curve (CSV)"));
                if export_btn.clicked() {
                    if let Ok(p) = params {
                        self.export_csv(p);
                    }
                }
                if let Some(msg) = &self.export_status {
                    ui.label(msg);
                }
            });
        });

        if self.show_settings_modal {
            self.ui_settings(ctx);
        }

        if self.show_formula_modal {
            egui::Window::new("Formula reference")
                .collapsible(true)
                .resizable(true)
                .open(&mut self.show_formula_modal)
                .show(ctx, |ui| {
                    ui.style_mut().wrap = Some(true);
                    ui.heading("EOQ = sqrt(2 · D · S / H)");
                    ui.label("D = annual demand (unit), S = cost per order, H = holding cost per unit per year.");
                    ui.separator();
                    ui.label("Orders per year = D / EOQ");
                    ui.label("Total ordering cost = (D / EOQ) · S");
                    ui.label("Total holding cost = (EOQ / 2) · H");
                    ui.label("Total inventory cost = ordering + holding");
                    ui.separator();
                    ui.label("Chart: holding(q) = (q/2)·H, ordering(q) = (D/q)·S for q = 1..D; both are equal at the EOQ.");
                });
        }

        egui::SidePanel::left("inputs")
            .resizable(true)
            .min_width(180.0)
            .default_width(240.0)
            .show(ctx, |ui| {
                self.ui_inputs(ui);
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .auto_shrink([false; 2])
                .show(ui, |ui| match params {
                    Ok(p) => {
                        let result = p.compute();
                        self.ui_results(ui, &p, &result);
                        ui.separator();
                        self.ui_chart(ui, p, result);
                    }
                    Err(e) => {
                        ui.colored_label(ui.visuals().error_fg_color, e.to_string());
                    }
                });
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_app_starts_from_configured_defaults() {
        let app = GuiApp::new(config::Config::default());
        assert_eq!(app.demand, 1000.0);
        assert_eq!(app.order_cost, 50_000.0);
        assert_eq!(app.holding_cost, 2000.0);
        assert!(app.params().is_ok());
    }

    #[test]
    fn series_has_one_point_per_unit_of_demand() {
        let p = InventoryParameters::new(5.0, 10.0, 2.0).unwrap();
        let chart = ChartSeries::build(p, 1000, 100).unwrap();
        assert_eq!(chart.total.len(), 5);
        assert_eq!(chart.total[0], [1.0, 51.0]);
        assert_eq!(chart.holding[4], [5.0, 5.0]);
        assert_eq!(chart.ordering[4], [5.0, 10.0]);
        assert!(chart.show_markers);
    }

    #[test]
    fn markers_are_dropped_above_the_limit() {
        let p = InventoryParameters::new(500.0, 10.0, 2.0).unwrap();
        assert!(!ChartSeries::build(p, 1000, 100).unwrap().show_markers);
    }

    #[test]
    fn huge_demand_is_thinned_to_the_sample_limit() {
        let p = InventoryParameters::new(1e20, 1.0, 1.0).unwrap();
        let chart = ChartSeries::build(p, 500, 100).unwrap();
        assert!(chart.total.len() <= 501, "len={}", chart.total.len());
        assert_eq!(chart.total[0][0], 1.0);
        assert_eq!(chart.total.last().map(|pt| pt[0]), Some((u64::MAX - 1) as f64));
        assert!(!chart.show_markers);
        assert_eq!(chart.holding.len(), chart.total.len());
    }

    #[test]
    fn thinned_series_keeps_both_ends() {
        let p = InventoryParameters::new(1001.0, 10.0, 2.0).unwrap();
        let chart = ChartSeries::build(p, 100, 2000).unwrap();
        assert_eq!(chart.total.first().map(|pt| pt[0]), Some(1.0));
        assert_eq!(chart.total.last().map(|pt| pt[0]), Some(1001.0));
        assert!(chart.total.len() <= 101);
        assert!(!chart.show_markers);
    }

    #[test]
    fn oversized_defaults_are_capped_to_the_field_range() {
        let mut cfg = config::Config::default();
        cfg.defaults.demand = 1e300;
        cfg.defaults.holding_cost = f64::MAX;
        let app = GuiApp::new(cfg);
        assert_eq!(app.demand, MAX_DEMAND);
        assert_eq!(app.order_cost, 50_000.0);
        assert_eq!(app.holding_cost, MAX_COST);
    }

    #[test]
    fn chart_is_rebuilt_only_when_inputs_change() {
        let mut app = GuiApp::new(config::Config::default());
        let p = app.params().unwrap();
        let first = app.refresh_chart(p).unwrap().total.as_ptr();
        let again = app.refresh_chart(p).unwrap().total.as_ptr();
        assert_eq!(first, again);
        app.demand = 10.0;
        let p2 = app.params().unwrap();
        assert_eq!(app.refresh_chart(p2).unwrap().total.len(), 10);
        app.chart_sample_limit = 4;
        assert!(app.refresh_chart(p2).unwrap().total.len() <= 5);
    }

    #[test]
    fn optimum_sits_on_the_eoq() {
        let p = InventoryParameters::new(1000.0, 50_000.0, 2000.0).unwrap();
        let chart = ChartSeries::build(p, 1000, 0).unwrap();
        assert!((chart.optimum.quantity - p.compute().eoq).abs() < 1e-12);
    }
}
