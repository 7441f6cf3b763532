use log::LevelFilter;

/// Log level chosen by the number of `-v` flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LogLevel(LevelFilter);

impl LogLevel {
    pub fn from_verbosity(verbosity: u8) -> Self {
        Self(match verbosity {
            0 => LevelFilter::Error,
            1 => LevelFilter::Info,
            _ => LevelFilter::Debug,
        })
    }

    pub fn filter(self) -> LevelFilter {
        self.0
    }
}

/// Install the logger. `RUST_LOG`, if set, takes precedence over `level`.
pub fn init(level: LogLevel) {
    env_logger::Builder::new()
        .filter_level(level.filter())
        .format_timestamp(None)
        .parse_default_env()
        .init();
}
