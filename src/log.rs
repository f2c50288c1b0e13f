// src/log.rs
use std::io::Write;
use std::sync::Once;

use chrono::Local;
use env_logger::Builder;
use ::log::LevelFilter;

static INIT: Once = Once::new();

/// Install the process-wide logger. Safe to call more than once.
pub fn init() {
    INIT.call_once(|| {
        let result = Builder::new()
            .format(|buf, record| {
                writeln!(
                    buf,
                    "{} [{}] - {}",
                    Local::now().format("%Y-%m-%d %H:%M:%S"),
                    record.level(),
                    record.args()
                )
            })
            .filter(None, LevelFilter::Info)
            .try_init();

        if result.is_ok() {
            ::log::debug!("Logger initialized");
        }
    });
}

/// Info-level logging
#[macro_export]
macro_rules! logf {
    ($($arg:tt)*) => {
        ::log::info!($($arg)*)
    };
}

/// Debug-level logging
#[macro_export]
macro_rules! logd {
    ($($arg:tt)*) => {
        ::log::debug!($($arg)*)
    };
}

/// Error-level logging
#[macro_export]
macro_rules! loge {
    ($($arg:tt)*) => {
        ::log::error!($($arg)*)
    };
}
