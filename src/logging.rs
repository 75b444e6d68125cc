use fern::colors::{Color, ColoredLevelConfig};
use log::{LevelFilter, SetLoggerError};

/// Installs a stdout logger at the given level.
///
/// Can only succeed once per process, later calls return the error from
/// the `log` crate.
pub fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
    let colours = ColoredLevelConfig::new()
        .info(Color::Green)
        .debug(Color::Blue)
        .trace(Color::Magenta);

    fern::Dispatch::new()
        .format(move |out, message, record| {
            out.finish(format_args!(
                "{} | {} | {:<5} - {}",
                chrono::Local::now().format("[%Y-%m-%d][%H:%M:%S]"),
                record.target(),
                colours.color(record.level()),
                message,
            ))
        })
        .level(level)
        .chain(std::io::stdout())
        .apply()
}
