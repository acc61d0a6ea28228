//! Example: Embedding the widget in a host application
//!
//! What it demonstrates
//! - Using `VizPanel` directly inside your own eframe app instead of the
//!   standalone `run_geomprob()` window.
//! - Reading the model state from the host (the derived distance and
//!   intersection result are shown in a host-side header).
//!
//! How to run
//! ```bash
//! cargo run --example embedded
//! ```

use eframe::egui;
use geomprob::{FeatureFlags, VizConfig, VizPanel};

struct HostApp {
    viz: VizPanel,
}

impl HostApp {
    fn new() -> Self {
        // Keep the widget minimal; the host renders its own status.
        let cfg = VizConfig {
            features: FeatureFlags {
                status_line: false,
                caption: false,
                ..FeatureFlags::default()
            },
            ..VizConfig::default()
        };
        Self {
            viz: VizPanel::with_config(&cfg),
        }
    }
}

impl eframe::App for HostApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::top("host_header").show(ctx, |ui| {
            let derived = self.viz.state().derived();
            ui.horizontal(|ui| {
                ui.heading("Host dashboard");
                ui.separator();
                ui.label(format!(
                    "distance {:.3} · nearest side {} · bisector {}",
                    derived.distance,
                    derived.nearest.label(),
                    if derived.intersects { "hits" } else { "misses" },
                ));
            });
        });
        egui::CentralPanel::default().show(ctx, |ui| {
            self.viz.ui(ui);
        });
    }
}

fn main() -> eframe::Result<()> {
    env_logger::init();
    eframe::run_native(
        "Embedded geomprob widget",
        eframe::NativeOptions::default(),
        Box::new(|cc| {
            let mut fonts = egui::FontDefinitions::default();
            egui_phosphor::add_to_fonts(&mut fonts, egui_phosphor::Variant::Regular);
            cc.egui_ctx.set_fonts(fonts);
            Ok(Box::new(HostApp::new()))
        }),
    )
}
