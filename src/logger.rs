use chrono::Local;
use colored::*;
use env_logger::{Builder, Env};
use log::info;
use std::env as stdenv;
use std::io::Write;
use std::path::Path;

use crate::VERSION;

pub fn setup_logger() {
    let this_script_name = Path::new(&stdenv::args().next().unwrap_or_default())
        .file_name()
        .unwrap_or_default()
        .to_str()
        .unwrap_or_default()
        .to_owned();
    // RUST_LOG=trace collapses the tag so the file:line prefix stays readable
    let trace_mode = matches!(stdenv::var("RUST_LOG"), Ok(val) if val.to_lowercase() == "trace");
    let tag = format!("{}_{}", this_script_name, VERSION);

    Builder::from_env(Env::default().default_filter_or("info"))
        .format(move |buf, record| {
            let level = match record.level() {
                log::Level::Error => format!("{}", record.level()).red(),
                log::Level::Warn => format!(" {}", record.level()).yellow(),
                log::Level::Info => format!(" {}", record.level()).green(),
                log::Level::Debug => format!("{}", record.level()).blue(),
                log::Level::Trace => format!("{}", record.level()).purple(),
            };
            let file = record.file().unwrap_or("unknown");
            let line = record.line().map_or(0, |l| l);

            if trace_mode {
                writeln!(buf, "{}:{} {}: {}", file, line, level, record.args())
            } else {
                writeln!(
                    buf,
                    "{}:{} [{} {}]{}: {}",
                    file,
                    line,
                    tag.dimmed(),
                    format!("{}", Local::now().format("%Y%m%d %H:%M:%S")).purple(),
                    level,
                    record.args()
                )
            }
        })
        .init();
    info!("Logger initialized");
}
