use std::fs::create_dir_all;
use std::path::PathBuf;
use std::sync::Mutex;

use chrono::Local;
use tracing::{debug, error, info};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::error::{AdminError, AdminResult};

lazy_static::lazy_static! {
    static ref LOG_FILE: Mutex<Option<PathBuf>> = Mutex::new(None);
    static ref LOG_GUARD: Mutex<Option<WorkerGuard>> = Mutex::new(None);
}

pub fn log_dir() -> PathBuf {
    dirs::cache_dir()
        .unwrap_or_else(|| PathBuf::from("/tmp"))
        .join("admin-console")
        .join("logs")
}

/// Route all `tracing` output to a timestamped file. Nothing goes to the
/// terminal, which belongs to the CLI output or the TUI.
pub fn init_logging() -> AdminResult<PathBuf> {
    let dir = log_dir();
    create_dir_all(&dir)?;

    let file_name = format!("admin-{}.log", Local::now().format("%Y%m%d-%H%M%S"));
    let log_file = dir.join(&file_name);

    let appender = tracing_appender::rolling::never(&dir, &file_name);
    let (writer, guard) = tracing_appender::non_blocking(appender);

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(writer)
                .with_ansi(false),
        )
        .try_init()
        .map_err(|e| AdminError::ConfigError(format!("Failed to initialise logging: {}", e)))?;

    if let Ok(mut slot) = LOG_GUARD.lock() {
        *slot = Some(guard);
    }
    if let Ok(mut slot) = LOG_FILE.lock() {
        *slot = Some(log_file.clone());
    }

    info!(path = %log_file.display(), "logging initialized");
    Ok(log_file)
}

pub fn log_panic_info(info: &std::panic::PanicInfo<'_>) {
    let mut message = String::from("PANIC: ");

    if let Some(location) = info.location() {
        message.push_str(&format!(
            "at {}:{}:{} - ",
            location.file(),
            location.line(),
            location.column()
        ));
    }

    if let Some(s) = info.payload().downcast_ref::<&str>() {
        message.push_str(s);
    } else if let Some(s) = info.payload().downcast_ref::<String>() {
        message.push_str(s);
    } else {
        message.push_str("Unknown panic payload");
    }

    error!("{}", message);

    let backtrace = std::backtrace::Backtrace::capture();
    debug!("Backtrace:\n{}", backtrace);
}

pub fn install_panic_hook() {
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        log_panic_info(info);
        default_hook(info);
    }));
}

pub fn get_log_file_path() -> Option<PathBuf> {
    LOG_FILE.lock().ok().and_then(|path| path.clone())
}
