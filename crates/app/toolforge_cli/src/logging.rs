use flexi_logger::{DeferredNow, Logger};
use log::Record;

use crate::Error;

/// Terse `LEVEL message` lines, written to stderr so redirected stdout
/// stays clean.
fn cli_format(
    w: &mut dyn std::io::Write,
    _now: &mut DeferredNow,
    record: &Record,
) -> Result<(), std::io::Error> {
    write!(w, "{:<5} {}", record.level(), record.args())
}

pub fn init() -> Result<(), Error> {
    Logger::try_with_env_or_str("info")?
        .format(cli_format)
        .start()?;

    Ok(())
}
