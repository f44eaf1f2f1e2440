#![warn(clippy::all, rust_2018_idioms)]
#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")] // hide console window on Windows in release

use std::sync::Mutex;

use anyhow::Context;
use tracing_subscriber::prelude::*;

use promptdash::app::catalog::PromptCatalog;
use promptdash::app::config::{parse_launch_args, AppConfig, Settings};
use promptdash::PromptApp;

fn log_dir() -> Option<std::path::PathBuf> {
    directories::ProjectDirs::from("com", "", "promptdash")
        .map(|proj_dirs| proj_dirs.data_dir().join("logs"))
}

fn open_log_file(log_path: &std::path::Path) -> std::io::Result<std::fs::File> {
    let file = std::fs::OpenOptions::new()
        .append(true)
        .create(true)
        .open(log_path)?;

    // Owner read/write only
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        let mut perms = file.metadata()?.permissions();
        perms.set_mode(0o600);
        std::fs::set_permissions(log_path, perms)?;
    }

    Ok(file)
}

fn init_logging(default_filter: &str) -> anyhow::Result<()> {
    // RUST_LOG overrides the configured filter
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .or_else(|_| tracing_subscriber::EnvFilter::builder().parse(default_filter))
        .context("Failed to parse log filter")?;

    let log_file = log_dir().and_then(|dir| {
        std::fs::create_dir_all(&dir).ok()?;
        let log_path = dir.join("promptdash.log");
        match open_log_file(&log_path) {
            Ok(file) => Some((log_path, file)),
            Err(e) => {
                eprintln!("Failed to open log file {:?}: {}", log_path, e);
                None
            }
        }
    });

    let (log_path, file_layer, stderr_layer) = match log_file {
        Some((path, file)) => (
            Some(path),
            Some(
                tracing_subscriber::fmt::layer()
                    .with_writer(Mutex::new(file))
                    .with_ansi(false), // No ANSI colors in file
            ),
            None,
        ),
        None => (
            None,
            None,
            Some(tracing_subscriber::fmt::layer().with_writer(std::io::stderr)),
        ),
    };

    let subscriber = tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .with(stderr_layer);

    tracing::subscriber::set_global_default(subscriber)
        .context("Failed to set tracing subscriber")?;

    // Bridge log crate events (eframe, egui, winit and our log_* macros) to tracing.
    // Must run after the subscriber is installed.
    tracing_log::LogTracer::init().context("Failed to initialize log-to-tracing bridge")?;

    match log_path {
        Some(path) => tracing::info!("Logging initialized to: {:?}", path),
        None => tracing::info!("Logging to stderr"),
    }
    tracing::info!("Log filter: {}", default_filter);
    Ok(())
}

fn setup_panic_handler() {
    // Writes panic info to a crash log even if logging isn't initialized yet
    std::panic::set_hook(Box::new(|panic_info| {
        let crash_msg = format!(
            "Prompt Dash crashed!\n\
             Panic occurred at: {}\n\
             Details: {}\n\
             Backtrace:\n{:?}\n",
            panic_info
                .location()
                .map(|l| format!("{}:{}:{}", l.file(), l.line(), l.column()))
                .unwrap_or_else(|| "unknown location".to_string()),
            panic_info
                .payload()
                .downcast_ref::<&str>()
                .copied()
                .or_else(|| panic_info.payload().downcast_ref::<String>().map(|s| s.as_str()))
                .unwrap_or("unknown panic"),
            std::backtrace::Backtrace::force_capture()
        );

        eprintln!("\n{}", crash_msg);

        let Some(dir) = log_dir() else {
            return;
        };
        let _ = std::fs::create_dir_all(&dir);
        let crash_log_path = dir.join("crash.log");

        if let Ok(mut file) = std::fs::OpenOptions::new()
            .append(true)
            .create(true)
            .open(&crash_log_path)
        {
            use std::io::Write;
            let timestamp = chrono::Local::now().format("%Y-%m-%d %H:%M:%S");
            let _ = writeln!(file, "\n=== CRASH at {} ===\n{}", timestamp, crash_msg);
            eprintln!("Crash log written to: {:?}", crash_log_path);
        }
    }));
}

fn main() -> anyhow::Result<()> {
    setup_panic_handler();

    let args: Vec<String> = std::env::args().collect();
    let launch = parse_launch_args(&args);

    // Settings decide the log filter, so their errors are reported once logging is up
    let settings_result = Settings::load(launch.settings_path.as_deref());
    let settings = settings_result.as_ref().cloned().unwrap_or_default();
    let config = AppConfig::resolve(&launch, &settings);

    init_logging(&config.log_filter)?;

    tracing::info!("promptdash starting, args: {:?}", args);
    if let Err(e) = &settings_result {
        tracing::warn!("Failed to load settings, using defaults: {:#}", e);
    }

    let catalog = PromptCatalog::load_or_embedded(&config.dataset)?;
    tracing::info!(
        "Catalog ready: {} prompts, {} languages",
        catalog.len(),
        catalog.languages().len()
    );

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([900.0, 700.0])
            .with_min_inner_size([400.0, 300.0]),
        ..Default::default()
    };

    let initial_address = config.initial_address.clone();
    eframe::run_native(
        "Prompt Dash",
        native_options,
        Box::new(move |cc| Ok(Box::new(PromptApp::new(cc, catalog, &initial_address)))),
    )
    .map_err(|e| anyhow::anyhow!("Failed to run the UI: {}", e))?;

    Ok(())
}
