use std::fs;

use anyhow::Context;
use anyhow::Result;
use tracing::Level;
use tracing::event;
use tracing_appender::non_blocking::NonBlocking;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::Registry;
use tracing_subscriber::filter::EnvFilter;
use tracing_subscriber::filter::Filtered;
use tracing_subscriber::fmt::Layer;
use tracing_subscriber::fmt::format::Format;
use tracing_subscriber::fmt::format::Json;
use tracing_subscriber::fmt::format::JsonFields;
use tracing_subscriber::fmt::{self};
use tracing_subscriber::prelude::*;
use tracing_subscriber::reload;
use tracing_subscriber::reload::Handle;

type LogLayer =
    Filtered<Layer<Registry, JsonFields, Format<Json>, NonBlocking>, EnvFilter, Registry>;

#[derive(Clone, Debug)]
pub struct LogHandles {
    pub file_handle: Handle<LogLayer, Registry>,
}

/// Wires the JSON file layer. Stale log files are cleared first so one run
/// maps to one log. The returned guard flushes the non-blocking writer on
/// drop; keep it alive for the lifetime of the process.
pub fn setup_logging() -> Result<(LogHandles, WorkerGuard)> {
    let log_dir = dotenvy::var("ROTA_LOG_DIR")
        .context("the ROTA_LOG_DIR environment variable has to be set")?;

    for log_file in fs::read_dir(&log_dir)
        .with_context(|| format!("the log directory {log_dir} was not readable"))?
    {
        let path = log_file?.path();
        if path.is_file()
            && path
                .extension()
                .is_some_and(|extension| extension == "log")
        {
            fs::remove_file(&path)
                .with_context(|| format!("stale log file {} was not removable", path.display()))?;
        }
    }

    let file_appender = tracing_appender::rolling::never(log_dir, "rota.developer.log");
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let file_layer = fmt::layer()
        .with_writer(non_blocking)
        .json()
        .with_file(true)
        .with_thread_ids(true)
        .with_line_number(true)
        .with_current_span(true)
        .with_filter(EnvFilter::from_env("ROTA_TRACING_LEVEL"));

    let (file_layer, file_handle) = reload::Layer::new(file_layer);

    tracing_subscriber::registry().with(file_layer).init();

    event!(Level::INFO, "logging started");

    Ok((LogHandles { file_handle }, guard))
}
