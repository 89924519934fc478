//! Latency profiling for the search entry points.
//!
//! Functions marked with `instrument` are timed per call when the crate is
//! built with `--features instrumentation`. Without the feature none of this
//! is compiled.

use std::collections::BTreeMap;
use std::fmt::Write;
use std::sync::Mutex;
use std::time::{Duration, Instant};

use tracing::span;
use tracing_subscriber::layer::{Context, SubscriberExt};
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::Layer;

/// Accumulated time inside one span name.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
struct SpanTiming {
    calls: u64,
    total: Duration,
}

impl SpanTiming {
    fn record(&mut self, elapsed: Duration) {
        self.calls += 1;
        self.total += elapsed;
    }

    fn mean(&self) -> Duration {
        match u32::try_from(self.calls) {
            Ok(0) => Duration::ZERO,
            Ok(calls) => self.total / calls,
            Err(_) => Duration::from_secs_f64(self.total.as_secs_f64() / self.calls as f64),
        }
    }
}

static TIMING_DATA: Mutex<BTreeMap<&'static str, SpanTiming>> = Mutex::new(BTreeMap::new());

/// Tracing layer that accumulates the time spent inside each span.
struct TimingLayer;

impl<S> Layer<S> for TimingLayer
where
    S: tracing::Subscriber + for<'a> LookupSpan<'a>,
{
    fn on_enter(&self, id: &span::Id, ctx: Context<'_, S>) {
        if let Some(span) = ctx.span(id) {
            span.extensions_mut().insert(Instant::now());
        }
    }

    fn on_exit(&self, id: &span::Id, ctx: Context<'_, S>) {
        if let Some(span) = ctx.span(id) {
            let started = span.extensions_mut().remove::<Instant>();
            if let (Some(start), Ok(mut data)) = (started, TIMING_DATA.lock()) {
                data.entry(span.name()).or_default().record(start.elapsed());
            }
        }
    }
}

/// Installs the timing layer as the global subscriber.
///
/// With `RUST_LOG` unset or `off` spans are only timed. Any other value also
/// prints span events filtered by `RUST_LOG`.
pub fn init_tracing() {
    use tracing_subscriber::{fmt, EnvFilter};

    let env_filter = std::env::var("RUST_LOG").unwrap_or_default();

    let result = if env_filter.is_empty() || env_filter == "off" {
        let subscriber = tracing_subscriber::registry()
            .with(EnvFilter::new("trace"))
            .with(TimingLayer);
        tracing::subscriber::set_global_default(subscriber)
    } else {
        let fmt_layer = fmt::layer().with_target(false).with_level(false).compact();
        let subscriber = tracing_subscriber::registry()
            .with(EnvFilter::from_default_env())
            .with(TimingLayer)
            .with(fmt_layer);
        tracing::subscriber::set_global_default(subscriber)
    };

    if let Err(err) = result {
        eprintln!("Failed to set tracing subscriber: {}", err);
    }
}

/// One line per span name, in name order, then the summed time.
fn timing_report(timings: &BTreeMap<&'static str, SpanTiming>) -> String {
    let mut report = format!(
        "{:<32} {:>10} {:>14} {:>14}\n",
        "span", "calls", "total", "mean"
    );
    for (name, timing) in timings {
        let _ = writeln!(
            report,
            "{:<32} {:>10} {:>14} {:>14}",
            name,
            timing.calls,
            format!("{:.3?}", timing.total),
            format!("{:.3?}", timing.mean()),
        );
    }
    let total: Duration = timings.values().map(|timing| timing.total).sum();
    let _ = writeln!(report, "all spans: {:.3?}", total);
    report
}

/// Prints call counts and latencies per instrumented function to stderr.
pub fn print_timing_statistics() {
    let Ok(timings) = TIMING_DATA.lock() else {
        return;
    };
    if timings.is_empty() {
        eprintln!("no spans were timed");
    } else {
        eprint!("\n{}", timing_report(&timings));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_span_timing_mean() {
        let mut timing = SpanTiming::default();
        assert_eq!(Duration::ZERO, timing.mean());

        timing.record(Duration::from_micros(30));
        timing.record(Duration::from_micros(10));

        assert_eq!(2, timing.calls);
        assert_eq!(Duration::from_micros(40), timing.total);
        assert_eq!(Duration::from_micros(20), timing.mean());
    }

    #[test]
    fn test_timing_report_lists_spans_by_name() {
        let mut timings = BTreeMap::new();
        timings.insert(
            "search",
            SpanTiming {
                calls: 1,
                total: Duration::from_millis(5),
            },
        );
        timings.insert(
            "alpha_beta",
            SpanTiming {
                calls: 4,
                total: Duration::from_millis(2),
            },
        );

        let report = timing_report(&timings);
        let lines: Vec<&str> = report.lines().collect();

        assert_eq!(4, lines.len());
        assert!(lines[1].starts_with("alpha_beta"));
        assert!(lines[2].starts_with("search"));
        assert_eq!("all spans: 7.000ms", lines[3]);
    }
}
