//! The profiling registry and its report writer

use chrono::Utc;
use dashmap::DashMap;
use once_cell::sync::Lazy;
use std::fs::OpenOptions;
use std::io::{BufWriter, Write};
use std::path::Path;
use std::sync::Arc;
use std::time::{Duration, Instant};

/// The process-wide registry instance
static GLOBAL: Lazy<Arc<Profiler>> = Lazy::new(|| Arc::new(Profiler::new()));

/// Accumulated timing for one (target, operation) pair
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OperationStats {
    /// How many times the operation was invoked
    pub calls: u64,

    /// Elapsed wall-clock time summed across all invocations
    pub total: Duration,
}

/// Accumulates elapsed-time measurements per (target type, operation)
///
/// Safe for concurrent recording from any number of callers. The process-wide
/// instance is reached through [`Profiler::global`]; standalone instances can
/// be created for tests.
#[derive(Debug, Default)]
pub struct Profiler {
    records: DashMap<(String, String), OperationStats>,
}

impl Profiler {
    /// Creates an empty, standalone registry
    pub fn new() -> Self {
        Self::default()
    }

    /// The process-wide registry
    pub fn global() -> Arc<Profiler> {
        Arc::clone(&GLOBAL)
    }

    /// Adds one invocation's elapsed time to the running totals
    pub fn record(&self, target: &str, operation: &str, elapsed: Duration) {
        let mut entry = self
            .records
            .entry((target.to_string(), operation.to_string()))
            .or_default();
        entry.calls += 1;
        entry.total += elapsed;
    }

    /// Starts a timer that records into this registry when dropped
    ///
    /// Dropping on every exit path means the measurement lands even when the
    /// timed call panics, preserving the underlying operation's
    /// success/failure semantics.
    pub fn start(&self, target: &str, operation: &str) -> ProfileTimer<'_> {
        ProfileTimer {
            profiler: self,
            target: target.to_string(),
            operation: operation.to_string(),
            started: Instant::now(),
        }
    }

    /// Current stats for one (target, operation) pair, if any were recorded
    pub fn stats(&self, target: &str, operation: &str) -> Option<OperationStats> {
        self.records
            .get(&(target.to_string(), operation.to_string()))
            .map(|entry| entry.clone())
    }

    /// Writes the accumulated data as a plain text report
    pub fn write_data(&self, writer: &mut impl Write) -> std::io::Result<()> {
        writeln!(writer, "Run at {}", Utc::now().to_rfc2822())?;

        let mut rows: Vec<((String, String), OperationStats)> = self
            .records
            .iter()
            .map(|entry| (entry.key().clone(), entry.value().clone()))
            .collect();
        rows.sort_by(|a, b| a.0.cmp(&b.0));

        for ((target, operation), stats) in rows {
            writeln!(
                writer,
                "{}#{} called {} times, took {}ms in total",
                target,
                operation,
                stats.calls,
                stats.total.as_millis()
            )?;
        }

        writeln!(writer)?;
        Ok(())
    }

    /// Writes the report to the given path, appending to an existing file
    pub fn write_data_to_path(&self, path: &Path) -> std::io::Result<()> {
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        let mut writer = BufWriter::new(file);
        self.write_data(&mut writer)?;
        writer.flush()
    }
}

/// Records the time between its creation and its drop
pub struct ProfileTimer<'a> {
    profiler: &'a Profiler,
    target: String,
    operation: String,
    started: Instant,
}

impl Drop for ProfileTimer<'_> {
    fn drop(&mut self) {
        self.profiler
            .record(&self.target, &self.operation, self.started.elapsed());
    }
}
