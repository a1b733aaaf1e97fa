use ::log::{debug, LevelFilter, SetLoggerError};
use log4rs::{
    append::{
        console::{ConsoleAppender, Target},
        file::FileAppender,
    },
    config::{runtime::ConfigErrors, Appender, Config as LogConfig, Root},
    encode::pattern::PatternEncoder,
    Handle,
};
use snafu::{ResultExt, Snafu};

use crate::config::Config;

const CONSOLE_PATTERN: &str = "{d(%m-%d %T)} [{h({l})}] {m}{n}";
const FILE_PATTERN: &str = "{d(%Y-%m-%d %T)} [{l}] {t} {m}{n}";

#[derive(Snafu, Debug)]
pub enum Error {
    #[snafu(display("unknown log level: {level}"))]
    Level { level: String },

    #[snafu(display("cannot open log file: {source}"))]
    LogFile { source: std::io::Error },

    #[snafu(display("log4rs config: {source}"))]
    Build { source: ConfigErrors },

    #[snafu(display("logger already set: {source}"))]
    SetLogger { source: SetLoggerError },
}
type Result<T> = std::result::Result<T, Error>;

/// Accepts `off`, `error`, `warn`, `info`, `debug` and `trace`, ignoring case.
pub fn parse_level(level: &str) -> Result<LevelFilter> {
    level.parse().map_err(|_| LevelSnafu { level }.build())
}

pub fn build_config(config: &Config) -> Result<LogConfig> {
    let level = parse_level(&config.log_level)?;

    let stderr = ConsoleAppender::builder()
        .target(Target::Stderr)
        .encoder(Box::new(PatternEncoder::new(CONSOLE_PATTERN)))
        .build();
    let mut builder =
        LogConfig::builder().appender(Appender::builder().build("stderr", Box::new(stderr)));
    let mut root = Root::builder().appender("stderr");

    if !config.log_file.is_empty() {
        let file = FileAppender::builder()
            .encoder(Box::new(PatternEncoder::new(FILE_PATTERN)))
            .build(&config.log_file)
            .context(LogFileSnafu)?;
        builder = builder.appender(Appender::builder().build("file", Box::new(file)));
        root = root.appender("file");
    }

    builder.build(root.build(level)).context(BuildSnafu)
}

/// Install the global logger. Can only succeed once per process.
pub fn init_log4rs(config: &Config) -> Result<Handle> {
    let handle = log4rs::init_config(build_config(config)?).context(SetLoggerSnafu)?;
    debug!("logger initialized: level {}", config.log_level);
    Ok(handle)
}
