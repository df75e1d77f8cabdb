//! Facility Charts
//!
//! Static visualizations of facility throughput drawn on HTML5 Canvas.
//! The datasets are fixed; drawing happens once per mount.

use leptos::*;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

/// Shared palette
const ACCENT: &str = "#ff6b4a";
const GREEN: &str = "#4ade80";
const BLUE: &str = "#3b82f6";
const AMBER: &str = "#ff9933";
const TICK_COLOR: &str = "#8892b0";
const GRID_COLOR: &str = "rgba(255, 255, 255, 0.1)";
const PANEL_BG: &str = "#0a0e1a";

/// Chart margins
const MARGIN_LEFT: f64 = 60.0;
const MARGIN_RIGHT: f64 = 20.0;
const MARGIN_TOP: f64 = 20.0;
const MARGIN_BOTTOM: f64 = 40.0;

/// Daily processed mass in kg over the last seven sols
pub const SOL_LABELS: [&str; 7] = [
    "Sol 1", "Sol 2", "Sol 3", "Sol 4", "Sol 5", "Sol 6", "Sol 7",
];
pub const PROCESSED_MASS_KG: [f64; 7] = [2500.0, 3100.0, 3600.0, 4000.0, 3800.0, 4500.0, 5100.0];

/// System efficiency per sol, percent
pub const EFFICIENCY_PCT: [f64; 7] = [85.0, 88.0, 92.0, 94.0, 91.0, 95.0, 94.0];

/// Waste composition, percent of intake
pub const WASTE_MIX: [(&str, f64, &str); 3] = [
    ("Organic Waste (35%)", 35.0, ACCENT),
    ("Inorganic Polymers (45%)", 45.0, GREEN),
    ("Hazardous Materials (20%)", 20.0, AMBER),
];

/// Recovered resources, percent of output
pub const RESOURCE_RECOVERY: [(&str, f64, &str); 4] = [
    ("Water Recovered (40%)", 40.0, ACCENT),
    ("Oxygen Generated (25%)", 25.0, GREEN),
    ("Metals Separated (15%)", 15.0, BLUE),
    ("Structural Material (20%)", 20.0, AMBER),
];

/// Processed-mass trend (line)
#[component]
pub fn TrendsChart() -> impl IntoView {
    let canvas_ref = create_node_ref::<html::Canvas>();

    create_effect(move |_| {
        if let Some(canvas) = canvas_ref.get() {
            draw_trends(&canvas);
        }
    });

    view! {
        <div>
            <canvas node_ref=canvas_ref width="640" height="320" class="w-full rounded-lg" />
            <ChartLegend entries=vec![("Processed Mass (kg)", ACCENT)] />
        </div>
    }
}

/// Waste composition (donut)
#[component]
pub fn WasteMixChart() -> impl IntoView {
    let canvas_ref = create_node_ref::<html::Canvas>();

    create_effect(move |_| {
        if let Some(canvas) = canvas_ref.get() {
            draw_waste_mix(&canvas);
        }
    });

    let legend: Vec<_> = WASTE_MIX.iter().map(|(label, _, color)| (*label, *color)).collect();
    view! {
        <div>
            <canvas node_ref=canvas_ref width="640" height="320" class="w-full rounded-lg" />
            <ChartLegend entries=legend />
        </div>
    }
}

/// System efficiency per sol (bar)
#[component]
pub fn EfficiencyChart() -> impl IntoView {
    let canvas_ref = create_node_ref::<html::Canvas>();

    create_effect(move |_| {
        if let Some(canvas) = canvas_ref.get() {
            draw_efficiency(&canvas);
        }
    });

    view! {
        <div>
            <canvas node_ref=canvas_ref width="640" height="320" class="w-full rounded-lg" />
            <ChartLegend entries=vec![("Efficiency (%)", GREEN)] />
        </div>
    }
}

/// Resource recovery shares (polar area)
#[component]
pub fn RecoveryChart() -> impl IntoView {
    let canvas_ref = create_node_ref::<html::Canvas>();

    create_effect(move |_| {
        if let Some(canvas) = canvas_ref.get() {
            draw_recovery(&canvas);
        }
    });

    let legend: Vec<_> = RESOURCE_RECOVERY
        .iter()
        .map(|(label, _, color)| (*label, *color))
        .collect();
    view! {
        <div>
            <canvas node_ref=canvas_ref width="640" height="320" class="w-full rounded-lg" />
            <ChartLegend entries=legend />
        </div>
    }
}

/// Legend row of colored dots with labels
#[component]
fn ChartLegend(entries: Vec<(&'static str, &'static str)>) -> impl IntoView {
    view! {
        <div class="flex justify-center flex-wrap gap-4 mt-4">
            {entries
                .into_iter()
                .map(|(label, color)| {
                    view! {
                        <div class="flex items-center space-x-2">
                            <div
                                class="w-3 h-3 rounded-full"
                                style=format!("background-color: {}", color)
                            />
                            <span class="text-sm text-gray-300">{label}</span>
                        </div>
                    }
                })
                .collect_view()}
        </div>
    }
}

fn context_2d(canvas: &HtmlCanvasElement) -> Option<CanvasRenderingContext2d> {
    canvas
        .get_context("2d")
        .ok()
        .flatten()?
        .dyn_into::<CanvasRenderingContext2d>()
        .ok()
}

/// Horizontal grid lines with y-axis tick labels, zero at the baseline
fn draw_value_grid(ctx: &CanvasRenderingContext2d, width: f64, height: f64, y_max: f64) {
    let chart_height = height - MARGIN_TOP - MARGIN_BOTTOM;

    for i in 0..=5 {
        let y = MARGIN_TOP + (i as f64 / 5.0) * chart_height;

        ctx.set_stroke_style_str(GRID_COLOR);
        ctx.set_line_width(1.0);
        ctx.begin_path();
        ctx.move_to(MARGIN_LEFT, y);
        ctx.line_to(width - MARGIN_RIGHT, y);
        ctx.stroke();

        let value = y_max - (i as f64 / 5.0) * y_max;
        ctx.set_fill_style_str(TICK_COLOR);
        ctx.set_font("12px sans-serif");
        let _ = ctx.fill_text(&format!("{:.0}", value), 8.0, y + 4.0);
    }
}

/// Category labels along the x-axis
fn draw_category_labels(ctx: &CanvasRenderingContext2d, width: f64, height: f64, labels: &[&str]) {
    let chart_width = width - MARGIN_LEFT - MARGIN_RIGHT;
    let slot = chart_width / labels.len() as f64;

    ctx.set_fill_style_str(TICK_COLOR);
    ctx.set_font("12px sans-serif");
    for (i, label) in labels.iter().enumerate() {
        let x = MARGIN_LEFT + (i as f64 + 0.5) * slot - 15.0;
        let _ = ctx.fill_text(label, x, height - 10.0);
    }
}

fn draw_trends(canvas: &HtmlCanvasElement) {
    let Some(ctx) = context_2d(canvas) else { return };
    let width = canvas.width() as f64;
    let height = canvas.height() as f64;
    let chart_width = width - MARGIN_LEFT - MARGIN_RIGHT;
    let chart_height = height - MARGIN_TOP - MARGIN_BOTTOM;

    ctx.set_fill_style_str(PANEL_BG);
    ctx.fill_rect(0.0, 0.0, width, height);

    let y_max = PROCESSED_MASS_KG.iter().fold(f64::NEG_INFINITY, |a, &v| a.max(v)) * 1.1;
    draw_value_grid(&ctx, width, height, y_max);
    draw_category_labels(&ctx, width, height, &SOL_LABELS);

    let slot = chart_width / PROCESSED_MASS_KG.len() as f64;
    let points: Vec<(f64, f64)> = PROCESSED_MASS_KG
        .iter()
        .enumerate()
        .map(|(i, &v)| {
            let x = MARGIN_LEFT + (i as f64 + 0.5) * slot;
            let y = MARGIN_TOP + (1.0 - v / y_max) * chart_height;
            (x, y)
        })
        .collect();

    // Translucent area under the line
    let baseline = MARGIN_TOP + chart_height;
    ctx.set_fill_style_str("rgba(255, 107, 74, 0.1)");
    ctx.begin_path();
    ctx.move_to(points[0].0, baseline);
    for &(x, y) in &points {
        ctx.line_to(x, y);
    }
    ctx.line_to(points[points.len() - 1].0, baseline);
    ctx.close_path();
    ctx.fill();

    // The line itself
    ctx.set_stroke_style_str(ACCENT);
    ctx.set_line_width(2.0);
    ctx.begin_path();
    for (i, &(x, y)) in points.iter().enumerate() {
        if i == 0 {
            ctx.move_to(x, y);
        } else {
            ctx.line_to(x, y);
        }
    }
    ctx.stroke();

    // Data points
    ctx.set_fill_style_str(ACCENT);
    for &(x, y) in &points {
        ctx.begin_path();
        let _ = ctx.arc(x, y, 3.0, 0.0, std::f64::consts::TAU);
        ctx.fill();
    }
}

fn draw_efficiency(canvas: &HtmlCanvasElement) {
    let Some(ctx) = context_2d(canvas) else { return };
    let width = canvas.width() as f64;
    let height = canvas.height() as f64;
    let chart_width = width - MARGIN_LEFT - MARGIN_RIGHT;
    let chart_height = height - MARGIN_TOP - MARGIN_BOTTOM;

    ctx.set_fill_style_str(PANEL_BG);
    ctx.fill_rect(0.0, 0.0, width, height);

    // Percent scale, capped at 100
    let y_max = 100.0;
    draw_value_grid(&ctx, width, height, y_max);
    draw_category_labels(&ctx, width, height, &SOL_LABELS);

    let slot = chart_width / EFFICIENCY_PCT.len() as f64;
    for (i, &value) in EFFICIENCY_PCT.iter().enumerate() {
        let bar_width = slot * 0.7;
        let bar_height = value / y_max * chart_height;
        let x = MARGIN_LEFT + (i as f64 + 0.15) * slot;
        let y = MARGIN_TOP + chart_height - bar_height;

        ctx.set_fill_style_str(GREEN);
        ctx.fill_rect(x, y, bar_width, bar_height);
        ctx.set_stroke_style_str(BLUE);
        ctx.set_line_width(1.0);
        ctx.stroke_rect(x, y, bar_width, bar_height);
    }
}

fn draw_waste_mix(canvas: &HtmlCanvasElement) {
    let Some(ctx) = context_2d(canvas) else { return };
    let width = canvas.width() as f64;
    let height = canvas.height() as f64;

    ctx.set_fill_style_str(PANEL_BG);
    ctx.fill_rect(0.0, 0.0, width, height);

    let cx = width / 2.0;
    let cy = height / 2.0;
    let radius = width.min(height) / 2.0 - 20.0;

    let total: f64 = WASTE_MIX.iter().map(|(_, value, _)| value).sum();
    let mut start = -std::f64::consts::FRAC_PI_2;
    for (_, value, color) in WASTE_MIX {
        let sweep = value / total * std::f64::consts::TAU;
        ctx.begin_path();
        ctx.move_to(cx, cy);
        let _ = ctx.arc(cx, cy, radius, start, start + sweep);
        ctx.close_path();
        ctx.set_fill_style_str(color);
        ctx.fill();
        start += sweep;
    }

    // Cut the hole
    ctx.begin_path();
    let _ = ctx.arc(cx, cy, radius * 0.55, 0.0, std::f64::consts::TAU);
    ctx.set_fill_style_str(PANEL_BG);
    ctx.fill();
}

fn draw_recovery(canvas: &HtmlCanvasElement) {
    let Some(ctx) = context_2d(canvas) else { return };
    let width = canvas.width() as f64;
    let height = canvas.height() as f64;

    ctx.set_fill_style_str(PANEL_BG);
    ctx.fill_rect(0.0, 0.0, width, height);

    let cx = width / 2.0;
    let cy = height / 2.0;
    let radius = width.min(height) / 2.0 - 24.0;
    let max = RESOURCE_RECOVERY
        .iter()
        .fold(f64::NEG_INFINITY, |a, &(_, v, _)| a.max(v));

    // Radial grid rings
    ctx.set_stroke_style_str(GRID_COLOR);
    ctx.set_line_width(1.0);
    for i in 1..=4 {
        ctx.begin_path();
        let _ = ctx.arc(cx, cy, radius * i as f64 / 4.0, 0.0, std::f64::consts::TAU);
        ctx.stroke();
    }

    // Equal-angle slices with radius scaled to value
    let sweep = std::f64::consts::TAU / RESOURCE_RECOVERY.len() as f64;
    let mut start = -std::f64::consts::FRAC_PI_2;
    for (_, value, color) in RESOURCE_RECOVERY {
        let r = radius * value / max;
        ctx.begin_path();
        ctx.move_to(cx, cy);
        let _ = ctx.arc(cx, cy, r, start, start + sweep);
        ctx.close_path();
        ctx.set_global_alpha(0.7);
        ctx.set_fill_style_str(color);
        ctx.fill();
        ctx.set_global_alpha(1.0);
        ctx.set_stroke_style_str(color);
        ctx.stroke();
        start += sweep;
    }

    // Ring tick labels
    ctx.set_fill_style_str(TICK_COLOR);
    ctx.set_font("10px sans-serif");
    for i in 1..=4 {
        let value = max * i as f64 / 4.0;
        let y = cy - radius * i as f64 / 4.0;
        let _ = ctx.fill_text(&format!("{:.0}", value), cx + 4.0, y + 3.0);
    }
}
