use env_logger::WriteStyle;
use log::{Level, LevelFilter};
use std::io::Write;

/// Our own messages at info and up, everyone else's at warn; `RUST_LOG` overrides both
pub(crate) fn try_init() -> Result<(), log::SetLoggerError> {
    env_logger::builder()
        .format(|buf, record| {
            let level = record.level();
            if level <= Level::Info {
                writeln!(buf, "[DRIFT | {level}] {}", record.args())
            } else {
                writeln!(buf, "[DRIFT | {level} | {}] {}", record.target(), record.args())
            }
        })
        .write_style(WriteStyle::Always)
        .filter_level(LevelFilter::Warn)
        .filter_module(env!("CARGO_PKG_NAME"), LevelFilter::Info)
        .parse_default_env()
        .try_init()
}
