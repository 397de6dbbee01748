//! Chart rendering for report sections: CSS bars, SVG donuts, metric cards.

use dioxus::prelude::*;

use crate::core::format;
use crate::dashboard::sections::{ChartKind, SectionReport, ValueUnit};

/// Soft pastel palette cycled across chart entries.
pub const PALETTE: [&str; 6] = [
    "#A8E6CF", // mint
    "#FFD3B6", // peach
    "#AEC6CF", // blue-gray
    "#FFF5BA", // soft yellow
    "#FFB6B9", // pink
    "#C7CEEA", // lavender
];

fn palette_color(index: usize) -> &'static str {
    PALETTE[index % PALETTE.len()]
}

fn format_value(unit: ValueUnit, value: f64) -> String {
    match unit {
        ValueUnit::Count => format::format_count(value),
        ValueUnit::Percent => format::format_percent(value),
        ValueUnit::Mean => format::format_decimal(value, 2),
    }
}

#[component]
pub fn SectionChart(report: SectionReport) -> Element {
    match report.chart {
        ChartKind::Bar => render_bars(&report, false),
        ChartKind::BarHorizontal => render_bars(&report, true),
        ChartKind::Donut => render_donut(&report),
        ChartKind::Cards => render_cards(&report),
        ChartKind::Metric => render_metric(&report),
    }
}

#[derive(Clone)]
struct BarEntry {
    label: String,
    value_text: String,
    fill_style: String,
}

fn render_bars(report: &SectionReport, horizontal: bool) -> Element {
    let max = report
        .entries
        .iter()
        .map(|(_, v)| *v)
        .fold(f64::EPSILON, f64::max);

    let bars: Vec<BarEntry> = report
        .entries
        .iter()
        .enumerate()
        .map(|(index, (label, value))| {
            let extent = value / max * 100.0;
            let dimension = if horizontal { "width" } else { "height" };
            BarEntry {
                label: label.clone(),
                value_text: format_value(report.unit, *value),
                fill_style: format!(
                    "{dimension}: {extent:.1}%; background: {};",
                    palette_color(index)
                ),
            }
        })
        .collect();

    let orientation = if horizontal {
        "section-chart__bars--horizontal"
    } else {
        "section-chart__bars--vertical"
    };

    rsx! {
        div { class: "section-chart__bars {orientation}",
            for bar in bars.into_iter() {
                div { class: "section-chart__bar",
                    span { class: "section-chart__bar-value", "{bar.value_text}" }
                    div { class: "section-chart__bar-track",
                        div { class: "section-chart__bar-fill", style: "{bar.fill_style}" }
                    }
                    span { class: "section-chart__bar-label", "{bar.label}" }
                }
            }
        }
    }
}

#[derive(Clone)]
struct DonutSegment {
    dasharray: String,
    dashoffset: String,
    color: &'static str,
}

#[derive(Clone)]
struct LegendEntry {
    label: String,
    value_text: String,
    swatch_style: String,
}

fn render_donut(report: &SectionReport) -> Element {
    // Donut geometry: r=46 inside a 120x120 viewBox, segments drawn with
    // dash arrays over the circumference, rotated so 12 o'clock is the start.
    const RADIUS: f64 = 46.0;
    let circumference = 2.0 * std::f64::consts::PI * RADIUS;
    let total: f64 = report.entries.iter().map(|(_, v)| *v).sum();

    let mut segments: Vec<DonutSegment> = Vec::new();
    let mut cursor = 0.0;
    for (index, (_, value)) in report.entries.iter().enumerate() {
        let fraction = if total > 0.0 { value / total } else { 0.0 };
        segments.push(DonutSegment {
            dasharray: format!("{:.3} {:.3}", fraction * circumference, circumference),
            dashoffset: format!("{:.3}", -(cursor * circumference)),
            color: palette_color(index),
        });
        cursor += fraction;
    }

    let legend: Vec<LegendEntry> = report
        .entries
        .iter()
        .enumerate()
        .map(|(index, (label, value))| LegendEntry {
            label: label.clone(),
            value_text: format_value(report.unit, *value),
            swatch_style: format!("background: {};", palette_color(index)),
        })
        .collect();

    rsx! {
        div { class: "section-chart__donut",
            svg {
                view_box: "0 0 120 120",
                class: "section-chart__donut-svg",
                role: "img",
                for segment in segments.into_iter() {
                    circle {
                        cx: "60",
                        cy: "60",
                        r: "46",
                        fill: "none",
                        stroke: "{segment.color}",
                        stroke_width: "16",
                        stroke_dasharray: "{segment.dasharray}",
                        stroke_dashoffset: "{segment.dashoffset}",
                        transform: "rotate(-90 60 60)",
                    }
                }
            }
            ul { class: "section-chart__legend",
                for entry in legend.into_iter() {
                    li { class: "section-chart__legend-item",
                        span { class: "section-chart__legend-swatch", style: "{entry.swatch_style}" }
                        span { class: "section-chart__legend-label", "{entry.label}" }
                        span { class: "section-chart__legend-value", "{entry.value_text}" }
                    }
                }
            }
        }
    }
}

#[derive(Clone)]
struct CardEntry {
    label: String,
    count_text: String,
    share_text: String,
    tint_style: String,
}

fn render_cards(report: &SectionReport) -> Element {
    let total: f64 = report.entries.iter().map(|(_, v)| *v).sum();

    let cards: Vec<CardEntry> = report
        .entries
        .iter()
        .enumerate()
        .map(|(index, (label, value))| CardEntry {
            label: label.clone(),
            count_text: format!("{} respondents", format::format_count(*value)),
            share_text: format!(
                "{} of total",
                format::format_percent(value / total.max(1.0) * 100.0)
            ),
            tint_style: format!("background: {};", palette_color(index)),
        })
        .collect();

    rsx! {
        div { class: "section-chart__cards",
            for card in cards.into_iter() {
                div { class: "section-chart__card", style: "{card.tint_style}",
                    span { class: "section-chart__card-label", "{card.label}" }
                    strong { class: "section-chart__card-value", "{card.count_text}" }
                    span { class: "section-chart__card-meta", "{card.share_text}" }
                }
            }
        }
    }
}

fn render_metric(report: &SectionReport) -> Element {
    let stats: Vec<(String, String)> = report
        .entries
        .iter()
        .map(|(label, value)| (format_value(report.unit, *value), label.clone()))
        .collect();

    rsx! {
        div { class: "section-chart__metric",
            for (value_text, label) in stats.into_iter() {
                span { class: "section-chart__metric-value", "{value_text}" }
                span { class: "section-chart__metric-label", "{label}" }
            }
        }
    }
}
