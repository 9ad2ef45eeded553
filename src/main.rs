use lfpm::application::bootstrap::{StorageBootstrap, start_session};
use lfpm::config::Config;
use lfpm::infrastructure::InMemoryKeyValueStore;
use lfpm::infrastructure::observability::{LogFeed, init_tracing};
use lfpm::interfaces::app::LfpmApp;
use std::sync::Arc;
use tracing::{error, info};

fn main() -> anyhow::Result<()> {
    // 0. Load Env (before starting anything)
    dotenvy::dotenv().ok();

    // 1. Logging (Stdout + UI)
    let (log_tx, log_rx) = crossbeam_channel::unbounded();
    init_tracing(log_tx);

    info!("Initializing LFPM Trading System...");

    let config = Config::from_env()?;

    // 2. Runtime for storage and the autosave task. The UI owns the main thread.
    let rt = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;

    let session = rt.block_on(async {
        let store = match StorageBootstrap::init(&config.storage).await {
            Ok(store) => store,
            Err(e) => {
                error!(
                    "Failed to initialize storage: {:#}. Changes will not be saved.",
                    e
                );
                Arc::new(InMemoryKeyValueStore::new())
            }
        };
        start_session(store, &config.storage.state_key).await
    });
    let autosave = session.autosave_handle();

    info!("Checklist state ready. Launching UI.");

    // 3. Run UI (Blocks Main Thread)
    let app = LfpmApp::new(session, LogFeed::new(log_rx, config.ui.log_lines));
    let native_options = eframe::NativeOptions {
        viewport: eframe::egui::ViewportBuilder::default()
            .with_inner_size([config.ui.window_width, config.ui.window_height])
            .with_title("LFPM Trading System"),
        ..Default::default()
    };

    let ui_result = eframe::run_native(
        "LFPM Trading System",
        native_options,
        Box::new(|_cc| Ok(Box::new(app))),
    );

    // 4. Let pending snapshots settle before the runtime goes away
    if let Err(e) = rt.block_on(autosave.flush()) {
        error!("Failed to flush pending checklist state: {:#}", e);
    }

    ui_result.map_err(|e| anyhow::anyhow!("Eframe error: {}", e))?;
    info!("Shutdown complete.");
    Ok(())
}
