use chrono::Local;
use tracing_subscriber::fmt::format::Writer;
use tracing_subscriber::fmt::{FmtContext, FormatEvent, FormatFields};
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::EnvFilter;

pub const DEFAULT_LOG_LEVEL: &str = "info";
pub const APP_CODE: &str = "sub2api-sdk";

/// Test logger. Safe to call from every test; only the first call installs the subscriber.
pub fn init_test_log() {
    let _ = tracing_subscriber::fmt()
        .pretty()
        .with_max_level(tracing::Level::INFO)
        .with_test_writer()
        .try_init();
}

/// Installs the global subscriber. `RUST_LOG` overrides `level`.
pub fn init_log(level: Option<&str>) -> Result<(), crate::Error> {
    let level = level.unwrap_or(DEFAULT_LOG_LEVEL);
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(true)
        .with_level(true)
        .event_format(CustomEventFormat)
        .try_init()
        .map_err(|e| crate::Error::Other(e.to_string()))?;

    tracing::info!("[init log] Init log success");
    Ok(())
}

// time, app code, level, target, then the event fields
struct CustomEventFormat;

impl<S, N> FormatEvent<S, N> for CustomEventFormat
where
    S: tracing::Subscriber + for<'lookup> LookupSpan<'lookup>,
    N: for<'writer> FormatFields<'writer> + 'static,
{
    fn format_event(
        &self,
        ctx: &FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &tracing::Event<'_>,
    ) -> std::fmt::Result {
        let meta = event.metadata();

        write!(writer, "{} ", Local::now().format("%Y-%m-%d %H:%M:%S"))?;
        write!(writer, "{} ", APP_CODE)?;
        write!(writer, "{} ", meta.level())?;
        write!(writer, "{} ", meta.target())?;

        ctx.field_format().format_fields(writer.by_ref(), event)?;

        writeln!(writer)
    }
}
