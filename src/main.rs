//! Application shell and eframe integration.
//!
//! Wires the pure orbit/time/drag modules into an egui window: startup
//! clock synchronization, the timer-driven time refresh, keyboard handling,
//! and the plot whose drag gesture rotates the whole diagram.

mod config;
mod drawing;
mod interact;
mod orbit;
mod timebase;

use config::{
    AppConfig, EARTH_APHELION_GM, EARTH_LONGITUDE_OF_PERIAPSIS_DEG, EARTH_PERIHELION_GM,
};
use eframe::egui;
use egui_plot::Plot;
use interact::DragController;
use nalgebra::Vector2;
use orbit::OrbitalParameters;
use timebase::{ClockSource, TimeSample};

use std::time::{Duration, Instant};

struct App {
    cfg: AppConfig,
    params: OrbitalParameters,
    /// Rotation of the whole diagram, radians, unbounded.
    phase: f64,
    drag: DragController,
    clock: ClockSource,
    sample: TimeSample,
    last_refresh: Instant,
    refresh_interval_s: f64,
    show_labels: bool,
}

impl App {
    fn new(cfg: AppConfig, params: OrbitalParameters, clock: ClockSource) -> Self {
        let sample = clock.now();
        let refresh_interval_s = cfg.refresh_interval_s;
        Self {
            cfg,
            params,
            phase: 0.0,
            drag: DragController::new(),
            clock,
            sample,
            last_refresh: Instant::now(),
            refresh_interval_s,
            show_labels: true,
        }
    }

    fn handle_keys(&mut self, ctx: &egui::Context) {
        let (plus, minus, labels, quit) = ctx.input(|i| {
            (
                i.key_pressed(egui::Key::Plus) || i.key_pressed(egui::Key::Equals),
                i.key_pressed(egui::Key::Minus),
                i.key_pressed(egui::Key::L),
                i.key_pressed(egui::Key::Escape),
            )
        });
        if plus {
            self.refresh_interval_s += 1.0;
        }
        if minus {
            self.refresh_interval_s = (self.refresh_interval_s - 1.0).max(1.0);
        }
        if labels {
            self.show_labels = !self.show_labels;
        }
        if quit {
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
        }
    }

    /// Fixed-interval time refresh, independent of the frame rate.
    fn refresh_time(&mut self, ctx: &egui::Context) {
        let elapsed = self.last_refresh.elapsed().as_secs_f64();
        if elapsed >= self.refresh_interval_s {
            self.sample = self.clock.now();
            self.last_refresh = Instant::now();
            ctx.request_repaint_after(Duration::from_secs_f64(self.refresh_interval_s));
        } else {
            ctx.request_repaint_after(Duration::from_secs_f64(
                self.refresh_interval_s - elapsed,
            ));
        }
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.handle_keys(ctx);
        self.refresh_time(ctx);

        egui::TopBottomPanel::top("time_panel").show(ctx, |ui| {
            drawing::draw_time_panel(ui, &self.sample, self.refresh_interval_s);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            let arm = self.params.aphelion * self.cfg.marker_arm_scale;
            let margin = arm * 1.15;
            let params = self.params;
            let phase = self.phase;
            let ellipse_n = self.cfg.ellipse_points;
            let show_labels = self.show_labels;

            let plot = Plot::new("orbit")
                .data_aspect(1.0)
                .show_axes(false)
                .show_grid(false)
                .show_x(false)
                .show_y(false)
                .allow_drag(false)
                .allow_zoom(false)
                .allow_scroll(false)
                .allow_boxed_zoom(false)
                .cursor_color(egui::Color32::TRANSPARENT);

            let response = plot.show(ui, |plot_ui| {
                plot_ui.set_plot_bounds(egui_plot::PlotBounds::from_min_max(
                    [-margin, -margin],
                    [margin, margin],
                ));
                drawing::draw_orbit_diagram(plot_ui, &params, phase, ellipse_n, arm, show_labels);
            });

            // Drag handling: plot coordinates are centered on the sun, so
            // the pointer position is already the vector the controller
            // expects.
            let r = &response.response;
            let pointer = r.interact_pointer_pos().map(|pos| {
                let p = response.transform.value_from_position(pos);
                Vector2::new(p.x, p.y)
            });
            if r.drag_started() {
                if let Some(p) = pointer {
                    self.drag.begin(self.phase, p);
                }
            } else if r.dragged() {
                if let Some(new_phase) = pointer.and_then(|p| self.drag.drag_to(p)) {
                    self.phase = new_phase;
                }
            }
            if r.drag_stopped() {
                self.drag.end();
            }
        });
    }
}

fn main() -> eframe::Result<()> {
    env_logger::init();

    let cfg = AppConfig::default();

    let params = match OrbitalParameters::new(
        EARTH_APHELION_GM,
        EARTH_PERIHELION_GM,
        EARTH_LONGITUDE_OF_PERIAPSIS_DEG.to_radians(),
    ) {
        Ok(p) => p,
        Err(e) => {
            log::error!("invalid orbit configuration: {e}");
            std::process::exit(1);
        }
    };

    // One-shot synchronization before the event loop; on failure the app
    // runs unsynchronized and the time panel says so.
    let clock = match ClockSource::synchronize(&cfg.ntp_server) {
        Ok(c) => c,
        Err(e) => {
            log::warn!("continuing with unsynchronized clock: {e}");
            ClockSource::unsynchronized()
        }
    };

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size(cfg.window_size),
        ..Default::default()
    };

    eframe::run_native(
        "Orbit Clock",
        options,
        Box::new(move |_cc| Ok(Box::new(App::new(cfg, params, clock)))),
    )
}
