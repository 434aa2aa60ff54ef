//! Render adapter: orbit diagram and time panel.
//!
//! Converts the pure geometry into egui_plot line/polygon/text items and
//! formats the UTC/local/Julian-date readout. Nothing here owns state; the
//! app shell passes the current phase angle and time sample in on every
//! frame.

use crate::orbit::{ellipse_points, marker_segments, OrbitalParameters};
use crate::timebase::TimeSample;
use eframe::egui;
use egui_plot::{Line, PlotPoint, Points, Polygon, Text};
use std::f64::consts::TAU;

const TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.3f";

const ORBIT_COLOR: egui::Color32 = egui::Color32::from_rgb(100, 160, 255);
const MARKER_COLOR: egui::Color32 = egui::Color32::from_rgb(150, 150, 150);
const SUN_FILL: egui::Color32 = egui::Color32::from_rgb(255, 215, 0);
const SUN_STROKE: egui::Color32 = egui::Color32::from_rgb(255, 160, 0);

fn circle_points(cx: f64, cy: f64, r: f64, n: usize) -> Vec<[f64; 2]> {
    (0..=n)
        .map(|i| {
            let a = TAU * i as f64 / n as f64;
            [cx + r * a.cos(), cy + r * a.sin()]
        })
        .collect()
}

/// Draws the orbit loop, the sun at the focus, and the three marker axes
/// into the plot. `sun_radius` and the marker arm are in plot units.
pub fn draw_orbit_diagram(
    plot_ui: &mut egui_plot::PlotUi,
    params: &OrbitalParameters,
    phase: f64,
    ellipse_n: usize,
    arm: f64,
    show_labels: bool,
) {
    let dark_mode = plot_ui.ctx().style().visuals.dark_mode;
    let label_color = if dark_mode {
        egui::Color32::WHITE
    } else {
        egui::Color32::BLACK
    };

    let mut orbit = ellipse_points(params, phase, ellipse_n);
    if let Some(&first) = orbit.first() {
        orbit.push(first);
    }
    plot_ui.line(Line::new("", orbit).color(ORBIT_COLOR).width(1.5));

    for segment in marker_segments(params, phase, arm) {
        plot_ui.line(
            Line::new("", vec![segment.minus, segment.plus])
                .color(MARKER_COLOR)
                .width(1.0),
        );
        if show_labels {
            for (anchor, label) in [
                (segment.plus, segment.plus_label),
                (segment.minus, segment.minus_label),
            ] {
                plot_ui.text(
                    Text::new(
                        "",
                        PlotPoint::new(anchor[0], anchor[1]),
                        egui::RichText::new(label).size(12.0),
                    )
                    .color(label_color),
                );
            }
        }
    }

    let sun_radius = arm * 0.04;
    plot_ui.polygon(
        Polygon::new("", circle_points(0.0, 0.0, sun_radius, 30))
            .fill_color(SUN_FILL)
            .stroke(egui::Stroke::new(1.5, SUN_STROKE)),
    );
    // Single point at the focus so the sun stays visible at any zoom.
    plot_ui.points(
        Points::new("", vec![[0.0, 0.0]])
            .color(SUN_STROKE)
            .radius(2.0)
            .filled(true),
    );
}

/// UTC / local / Julian-date readout, with an explicit flag when the
/// startup clock synchronization did not happen.
pub fn draw_time_panel(ui: &mut egui::Ui, sample: &TimeSample, refresh_interval_s: f64) {
    let utc_line = format!("UTC:   {}", sample.utc.format(TIME_FORMAT));
    let loc_line = format!(
        "Local: {} (UTC {:+05})",
        sample.local.format(TIME_FORMAT),
        sample.local_offset_seconds / 36,
    );
    let jd_line = format!("JD:    {:.6}", sample.julian_date);

    ui.label(egui::RichText::new(utc_line).monospace());
    ui.label(egui::RichText::new(loc_line).monospace());
    ui.horizontal(|ui| {
        ui.label(egui::RichText::new(jd_line).monospace());
        if !sample.synchronized {
            ui.label(
                egui::RichText::new("UNSYNCHRONIZED")
                    .monospace()
                    .color(egui::Color32::from_rgb(230, 130, 60)),
            );
        }
    });
    ui.label(
        egui::RichText::new(format!(
            "refresh {refresh_interval_s:.0}s (+/- adjust, L labels, Esc quit)"
        ))
        .monospace()
        .weak(),
    );
}
