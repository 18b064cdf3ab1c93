//! Interactive demo of the page zoom model: a settings panel driving a
//! [`ZoomController`] over a RON-file-backed store.

mod store;
mod ui;

use std::path::PathBuf;

use clap::Parser;
use eframe::egui;
use egui_toast::{Toast, ToastKind, ToastOptions, Toasts};
use log::error;
use page_zoom::constants::{LEGACY_MAX_BAR, SLIDER_MAX_BAR};
use page_zoom::convert::format_percent;
use page_zoom::{ContextId, ScaleAdjustment, SurfaceId, ZoomController, ZoomError, ZoomUpdate};
use store::RonStore;

/// Settings-panel demo for the page zoom value model.
#[derive(Parser)]
#[command(version, about)]
struct Args {
    /// Path of the RON zoom store; defaults to the platform config dir.
    #[arg(long)]
    store: Option<PathBuf>,
    /// Use the legacy 0..=100 seek bar range instead of the 0..=250 slider.
    #[arg(long)]
    legacy_bar: bool,
    /// OS text scale multiplier snapshotted at startup.
    #[arg(long, default_value_t = 1.0)]
    system_scale: f32,
    /// Extra multiplier for a desktop-layout surface.
    #[arg(long, default_value_t = 1.0)]
    desktop_scale: f64,
    /// Persist factors without the scale corrections.
    #[arg(long)]
    no_os_adjustment: bool,
}

/// The demo shows a single surface in a single browsing context.
const DEMO_SURFACE: SurfaceId = SurfaceId(1);
const DEMO_CONTEXT: ContextId = ContextId(1);

struct PageZoomApp {
    controller: ZoomController<RonStore>,
    update: ZoomUpdate,
    percent: String,
    adjustment: ScaleAdjustment,
    toasts: Toasts,
}

impl PageZoomApp {
    fn new(args: &Args) -> Result<Self, ZoomError> {
        let path = args.store.clone().unwrap_or_else(store::default_store_path);

        let mut toasts = Toasts::new()
            .anchor(egui::Align2::RIGHT_TOP, (-10.0, 10.0))
            .direction(egui::Direction::TopDown);

        let ron_store = match RonStore::load(path.clone()) {
            Ok(ron_store) => ron_store,
            Err(err) => {
                error!("{err}");
                toasts.add(Toast {
                    kind: ToastKind::Error,
                    text: err.to_string().into(),
                    options: ToastOptions::default()
                        .duration_in_seconds(10.0)
                        .show_icon(true),
                    ..Default::default()
                });
                RonStore::empty(path)
            }
        };

        let adjustment = ScaleAdjustment {
            system_scale: args.system_scale,
            desktop_scale: args.desktop_scale,
            enabled: !args.no_os_adjustment,
        };
        let max_bar = if args.legacy_bar {
            LEGACY_MAX_BAR
        } else {
            SLIDER_MAX_BAR
        };

        let controller = ZoomController::initialize(
            ron_store,
            DEMO_SURFACE,
            DEMO_CONTEXT,
            adjustment,
            max_bar,
        )?;
        let update = controller.current()?;
        let percent = format_percent(controller.level()?);

        Ok(Self {
            controller,
            update,
            percent,
            adjustment,
            toasts,
        })
    }

    /// Applies the outcome of a controller operation to the UI state, or
    /// surfaces the failure as a toast.
    fn apply(&mut self, result: Result<ZoomUpdate, ZoomError>) {
        match result {
            Ok(update) => {
                self.update = update;
                if let Ok(level) = self.controller.level() {
                    self.percent = format_percent(level);
                }
            }
            Err(err) => {
                error!("zoom operation failed: {err}");
                self.toasts.add(Toast {
                    kind: ToastKind::Error,
                    text: err.to_string().into(),
                    options: ToastOptions::default()
                        .duration_in_seconds(8.0)
                        .show_icon(true),
                    ..Default::default()
                });
            }
        }
    }
}

impl eframe::App for PageZoomApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.show_settings(ctx);
        self.toasts.show(ctx);
    }
}

fn main() -> eframe::Result {
    env_logger::init();
    let args = Args::parse();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size([480.0, 240.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Page zoom",
        options,
        Box::new(move |_cc| Ok(Box::new(PageZoomApp::new(&args)?))),
    )
}
