//! Tracing setup for edgewalk
//!
//! Traversals emit debug events for seeding and completion and trace events
//! per expanded node, each inside an `edge_bfs` or `generic_edge_bfs` span.

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Trace-level event carrying the time elapsed since `$start`
#[macro_export]
macro_rules! trace_time {
    ($start:expr, $name:expr $(, $field:ident = $value:expr)*) => {
        tracing::trace!(elapsed = ?$start.elapsed(), $($field = $value,)* $name)
    };
}

/// Install a stderr subscriber.
///
/// `level` may be a bare level or a full filter directive; without one,
/// `verbose` picks `debug` over `warn`. `EDGEWALK_LOG`, then `RUST_LOG`,
/// overrides the computed filter. JSON output includes the enclosing spans.
pub fn init_tracing(
    verbose: bool,
    level: Option<&str>,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let level = match (verbose, level) {
        (_, Some(level)) => level,
        (true, None) => "debug",
        (false, None) => "warn",
    };

    let filter = EnvFilter::try_from_env("EDGEWALK_LOG")
        .or_else(|_| EnvFilter::try_from_default_env())
        .unwrap_or_else(|_| EnvFilter::new(filter_directive(level)));
    let layer = fmt::layer().with_writer(std::io::stderr).with_ansi(false);
    let registry = tracing_subscriber::registry().with(filter);

    if json {
        registry.with(layer.json().with_span_list(true)).try_init()?;
    } else {
        registry.with(layer.compact().with_target(false)).try_init()?;
    }
    Ok(())
}

/// Filter directive for a bare level, covering both edgewalk crates.
/// Anything containing `=` is taken as a directive already.
pub fn filter_directive(level: &str) -> String {
    if level.contains('=') {
        level.to_string()
    } else {
        format!("edgewalk={},edgewalk_core={}", level, level)
    }
}
