//! Trend Chart Component
//!
//! Area chart for one bound trend series, drawn on an HTML5 canvas. A card
//! whose series bound to the empty-state marker renders a "No data"
//! placeholder instead of an empty chart.

use leptos::*;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::model::render::{short_date, TrendData, TrendView};
use crate::model::TimePoint;
use crate::theme;

/// Card wrapper dispatching between chart and empty state
#[component]
pub fn TrendCard(trend: TrendView) -> impl IntoView {
    match trend.data {
        TrendData::Series(points) => view! {
            <TrendChart title=trend.title color=trend.color points=points />
        }
        .into_view(),
        TrendData::NoData => view! {
            <div class="trend-card">
                <h3>{trend.title}</h3>
                <p class="no-data">"No data"</p>
            </div>
        }
        .into_view(),
    }
}

/// Area chart for a non-empty, already sorted and truncated series
#[component]
fn TrendChart(
    title: &'static str,
    color: &'static str,
    points: Vec<TimePoint>,
) -> impl IntoView {
    let canvas_ref = create_node_ref::<html::Canvas>();
    let points = store_value(points);

    // Draw once the canvas is mounted.
    create_effect(move |_| {
        if let Some(canvas) = canvas_ref.get() {
            points.with_value(|points| draw_area_chart(&canvas, points, color));
        }
    });

    view! {
        <div class="trend-card">
            <h3>{title}</h3>
            <canvas node_ref=canvas_ref width="320" height="160" class="trend-canvas" />
        </div>
    }
}

/// Draw the area chart on canvas. `points` is guaranteed non-empty.
fn draw_area_chart(canvas: &HtmlCanvasElement, points: &[TimePoint], color: &str) {
    let ctx = match canvas.get_context("2d") {
        Ok(Some(ctx)) => match ctx.dyn_into::<CanvasRenderingContext2d>() {
            Ok(ctx) => ctx,
            Err(_) => return,
        },
        _ => return,
    };

    let width = canvas.width() as f64;
    let height = canvas.height() as f64;

    // Margins
    let margin_left = 40.0;
    let margin_right = 10.0;
    let margin_top = 10.0;
    let margin_bottom = 24.0;

    let chart_width = width - margin_left - margin_right;
    let chart_height = height - margin_top - margin_bottom;
    let baseline = margin_top + chart_height;

    // Clear canvas
    ctx.set_fill_style(&theme::SLATE.into());
    ctx.fill_rect(0.0, 0.0, width, height);

    // Y range with padding
    let mut y_min = f64::INFINITY;
    let mut y_max = f64::NEG_INFINITY;
    for point in points {
        y_min = y_min.min(point.value);
        y_max = y_max.max(point.value);
    }
    let y_range = y_max - y_min;
    let y_padding = if y_range > 0.0 { y_range * 0.1 } else { 1.0 };
    y_min -= y_padding;
    y_max += y_padding;

    // Points are evenly spaced on x, category-axis style.
    let x_step = if points.len() > 1 {
        chart_width / (points.len() - 1) as f64
    } else {
        0.0
    };
    let x_at = |i: usize| {
        if points.len() > 1 {
            margin_left + i as f64 * x_step
        } else {
            margin_left + chart_width / 2.0
        }
    };
    let y_at = |value: f64| margin_top + ((y_max - value) / (y_max - y_min)) * chart_height;

    // Grid and y-axis labels
    ctx.set_stroke_style(&"#334155".into());
    ctx.set_line_width(1.0);
    ctx.set_font("10px sans-serif");
    for i in 0..=3 {
        let y = margin_top + (i as f64 / 3.0) * chart_height;
        ctx.begin_path();
        ctx.move_to(margin_left, y);
        ctx.line_to(width - margin_right, y);
        ctx.stroke();

        let value = y_max - (i as f64 / 3.0) * (y_max - y_min);
        ctx.set_fill_style(&theme::MUTED.into());
        let _ = ctx.fill_text(&format!("{:.1}", value), 4.0, y + 3.0);
    }

    // Area fill
    ctx.begin_path();
    ctx.move_to(x_at(0), baseline);
    for (i, point) in points.iter().enumerate() {
        ctx.line_to(x_at(i), y_at(point.value));
    }
    ctx.line_to(x_at(points.len() - 1), baseline);
    ctx.close_path();
    ctx.set_global_alpha(0.2);
    ctx.set_fill_style(&color.into());
    ctx.fill();
    ctx.set_global_alpha(1.0);

    // Series line
    ctx.set_stroke_style(&color.into());
    ctx.set_line_width(2.0);
    ctx.begin_path();
    for (i, point) in points.iter().enumerate() {
        if i == 0 {
            ctx.move_to(x_at(i), y_at(point.value));
        } else {
            ctx.line_to(x_at(i), y_at(point.value));
        }
    }
    ctx.stroke();

    // X-axis labels: first and last date, century digits dropped
    ctx.set_fill_style(&theme::MUTED.into());
    let first = short_date(&points[0].date);
    let _ = ctx.fill_text(first, margin_left, height - 8.0);
    if points.len() > 1 {
        let last = short_date(&points[points.len() - 1].date);
        let x = width - margin_right - 7.0 * last.len() as f64;
        let _ = ctx.fill_text(last, x.max(margin_left), height - 8.0);
    }
}
