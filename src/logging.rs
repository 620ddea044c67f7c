use std::fs::File;
use std::io;
use std::path::Path;

use simplelog::{ColorChoice, Config, LevelFilter, TermLogger, TerminalMode, WriteLogger};

/// Installs the global logger: a file logger when `log_file` is given,
/// stderr otherwise. A second call is ignored.
pub fn init(level: LevelFilter, log_file: Option<&Path>) -> io::Result<()> {
    let result = match log_file {
        Some(path) => WriteLogger::init(level, Config::default(), File::create(path)?),
        None => TermLogger::init(
            level,
            Config::default(),
            TerminalMode::Stderr,
            ColorChoice::Auto,
        ),
    };

    if result.is_err() {
        log::debug!("logger already initialised");
    }
    Ok(())
}
