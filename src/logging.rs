use fern::colors::{Color, ColoredLevelConfig};
use log::info;
use sentry::ClientInitGuard;
use crate::config::structs::configuration::Configuration;

pub fn parse_log_level(level: &str) -> Option<log::LevelFilter> {
    match level {
        "off" => Some(log::LevelFilter::Off),
        "trace" => Some(log::LevelFilter::Trace),
        "debug" => Some(log::LevelFilter::Debug),
        "info" => Some(log::LevelFilter::Info),
        "warn" => Some(log::LevelFilter::Warn),
        "error" => Some(log::LevelFilter::Error),
        _ => None
    }
}

/// Installs the process-wide fern dispatcher and returns the configured level.
///
/// The dispatcher itself accepts everything; the configured level only becomes
/// the `log` crate's max level, so decorated loggers can be made more verbose at
/// runtime.
pub fn setup_logging(config: &Configuration) -> log::LevelFilter
{
    let level = match parse_log_level(config.log_level.as_str()) {
        Some(level) => level,
        None => {
            panic!("Unknown log level encountered: '{}'", config.log_level.as_str());
        }
    };

    let colors = ColoredLevelConfig::new()
        .trace(Color::Cyan)
        .debug(Color::Magenta)
        .info(Color::Green)
        .warn(Color::Yellow)
        .error(Color::Red);

    if let Err(_err) = fern::Dispatch::new()
        .format(move |out, message, record| {
            out.finish(format_args!(
                "{} [{:width$}][{}] {}",
                chrono::Local::now().format("%Y-%m-%d %H:%M:%S%.9f"),
                colors.color(record.level()),
                record.target(),
                message,
                width = 5
            ))
        })
        .level(log::LevelFilter::Trace)
        .chain(std::io::stdout())
        .apply()
    {
        panic!("Failed to initialize logging.")
    }
    log::set_max_level(level);
    info!("logging initialized.");
    level
}

pub fn setup_sentry(config: &Configuration) -> Option<ClientInitGuard>
{
    if !config.sentry_config.enabled {
        return None;
    }
    let guard = sentry::init((config.sentry_config.dsn.clone(), sentry::ClientOptions {
        release: sentry::release_name!(),
        debug: config.sentry_config.debug,
        sample_rate: config.sentry_config.sample_rate,
        max_breadcrumbs: config.sentry_config.max_breadcrumbs,
        attach_stacktrace: config.sentry_config.attach_stacktrace,
        send_default_pii: config.sentry_config.send_default_pii,
        traces_sample_rate: config.sentry_config.traces_sample_rate,
        session_mode: sentry::SessionMode::Request,
        auto_session_tracking: true,
        ..Default::default()
    }));
    info!("sentry initialized (enabled: {}).", guard.is_enabled());
    Some(guard)
}
