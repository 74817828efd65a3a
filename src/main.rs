mod app;
mod session;
mod theme;
mod ui;

use app::FormbenchApp;
use eframe::egui;
use session::store::AppStore;
use theme::Theme;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let store = AppStore::open_default();
    log::info!("using app store at {}", store.path().display());
    let app = FormbenchApp::new(store);

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1280.0, 800.0])
            .with_min_inner_size([1024.0, 640.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Formbench",
        native_options,
        Box::new(move |creation_context| {
            Theme::default().apply_visuals(&creation_context.egui_ctx);
            Ok(Box::new(app))
        }),
    )?;

    Ok(())
}
