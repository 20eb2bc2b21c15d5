//! Per-command size accounting for the transform pipeline.
//!
//! Tracks, for each direction and command id, how many payload bytes went
//! into the transform and how many came out, so operators can see which
//! commands actually benefit from compression. Accounting is observability
//! only and never affects codec correctness; recording cannot fail (an
//! unseen command starts from zero).
//!
//! The table is an owned collaborator passed to the pipeline by `&mut`,
//! not ambient global state: exclusive access is enforced by ownership,
//! and callers that share one table across threads put it behind a lock.

use std::collections::HashMap;

use serde::Serialize;
use wireforge_proto::{Direction, command_name};

/// Raw vs transformed byte totals for one command id.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SizeCounters {
    /// Payload bytes on the raw side of the transform.
    pub raw: u64,
    /// Payload bytes on the wire side of the transform.
    pub transformed: u64,
}

impl SizeCounters {
    /// Percent of raw bytes saved by the transform; negative when the
    /// transform expanded the payload, 0 when nothing was recorded.
    pub fn percent_saved(self) -> i64 {
        if self.raw == 0 {
            return 0;
        }
        (self.raw as i64 - self.transformed as i64) * 100 / self.raw as i64
    }
}

/// Accumulated per-command transform statistics for both directions.
#[derive(Debug, Clone, Default)]
pub struct TransformMetrics {
    to_server: HashMap<u16, SizeCounters>,
    to_client: HashMap<u16, SizeCounters>,
}

/// One command's row in a [`TransformReport`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportEntry {
    /// Command id.
    pub command: u16,
    /// Registry name for the id, `"UNKNOWN"` if unregistered.
    pub name: &'static str,
    /// Cumulative raw bytes.
    pub raw: u64,
    /// Cumulative transformed bytes.
    pub transformed: u64,
    /// Percent saved, negative on expansion.
    pub percent_saved: i64,
}

/// Per-direction statistics snapshot, ordered by command id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TransformReport {
    /// Direction label (`to_server` / `to_client`).
    pub direction: &'static str,
    /// One entry per command that saw traffic.
    pub entries: Vec<ReportEntry>,
}

impl TransformMetrics {
    /// Empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one transform's sizes to a command's totals.
    pub fn record(&mut self, direction: Direction, command: u16, raw: u64, transformed: u64) {
        let entry = self.table_mut(direction).entry(command).or_default();
        entry.raw += raw;
        entry.transformed += transformed;
    }

    /// Totals for one command, zero if never recorded.
    pub fn get(&self, direction: Direction, command: u16) -> SizeCounters {
        self.table(direction).get(&command).copied().unwrap_or_default()
    }

    /// Snapshot one direction, skipping commands with no raw traffic,
    /// ordered by command id.
    pub fn report(&self, direction: Direction) -> TransformReport {
        let mut entries: Vec<ReportEntry> = self
            .table(direction)
            .iter()
            .filter(|(_, counters)| counters.raw > 0)
            .map(|(&command, counters)| ReportEntry {
                command,
                name: command_name(direction, command),
                raw: counters.raw,
                transformed: counters.transformed,
                percent_saved: counters.percent_saved(),
            })
            .collect();
        entries.sort_by_key(|e| e.command);
        TransformReport { direction: direction.label(), entries }
    }

    /// Log both directions' reports through `tracing`.
    pub fn emit(&self) {
        for direction in [Direction::ToServer, Direction::ToClient] {
            for entry in self.report(direction).entries {
                tracing::info!(
                    direction = direction.label(),
                    command = entry.command,
                    name = entry.name,
                    raw = entry.raw,
                    transformed = entry.transformed,
                    percent_saved = entry.percent_saved,
                    "transform totals"
                );
            }
        }
    }

    fn table(&self, direction: Direction) -> &HashMap<u16, SizeCounters> {
        match direction {
            Direction::ToServer => &self.to_server,
            Direction::ToClient => &self.to_client,
        }
    }

    fn table_mut(&mut self, direction: Direction) -> &mut HashMap<u16, SizeCounters> {
        match direction {
            Direction::ToServer => &mut self.to_server,
            Direction::ToClient => &mut self.to_client,
        }
    }
}
