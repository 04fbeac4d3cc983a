// src/logging/logger.rs

use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::{fmt, EnvFilter, Registry};

use crate::error::{AdapterError, Result};

/// 为宿主安装全局 tracing 订阅器：按小时滚动的 JSON 日志文件，级别由 `RUST_LOG` 控制。
///
/// 返回的 `WorkerGuard` 需要由调用方持有，drop 时刷盘。
/// 宿主已有自己的订阅器时不必调用，适配器只通过 `tracing` 宏输出事件。
pub fn init_tracing(log_dir: &str, file_name: &str) -> Result<WorkerGuard> {
    let log_file = rolling::hourly(log_dir, file_name);
    let (non_blocking, guard) = tracing_appender::non_blocking(log_file);
    let subscriber = Registry::default()
        .with(EnvFilter::from_default_env())
        .with(fmt::layer().json().with_writer(non_blocking));
    tracing::subscriber::set_global_default(subscriber)
        .map_err(|e| AdapterError::Logging(e.to_string()))?;
    Ok(guard)
}
