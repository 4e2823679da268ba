//! Simulator: owns the configuration and the parsed trace, and replays it.
//!
//! Each run builds its own frame table, so runs never share counters. When OPT is among
//! the requested policies the future-access index is built once and lent to every run.

use crate::common::{SimError, SimResult, TraceRecord};
use crate::config::{Config, EvictionPolicy};
use crate::paging::FrameTable;
use crate::paging::future::FutureAccessIndex;
use crate::sim::loader;
use crate::stats::SimStats;

/// Feeds `records` through `table` in order, using each record's position as its timestamp.
///
/// # Returns
///
/// The number of records replayed.
///
/// # Errors
///
/// Propagates the first error raised by the table.
pub fn replay<I>(table: &mut FrameTable<'_>, records: I) -> SimResult<u64>
where
    I: IntoIterator<Item = TraceRecord>,
{
    let mut accesses = 0;
    for (index, record) in records.into_iter().enumerate() {
        let _hit = table.query(record.addr, record.kind, index)?;
        accesses += 1;
    }
    Ok(accesses)
}

/// Top-level simulator: run configuration plus the trace it replays.
#[derive(Debug, Clone)]
pub struct Simulator {
    config: Config,
    trace: Vec<TraceRecord>,
}

impl Simulator {
    /// Creates a simulator over an already parsed trace.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::InvalidConfig`] if `config` fails validation.
    pub fn new(config: Config, trace: Vec<TraceRecord>) -> SimResult<Self> {
        config.validate()?;
        Ok(Self { config, trace })
    }

    /// Creates a simulator that loads the trace named by `config.trace_file`.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::InvalidConfig`] if no trace file is configured, otherwise any
    /// error from loading the trace.
    pub fn from_config(config: Config) -> SimResult<Self> {
        config.validate()?;
        let path = config
            .trace_file
            .as_deref()
            .ok_or_else(|| SimError::InvalidConfig("no trace file configured".to_string()))?;
        let trace = loader::load_trace(path)?;
        Self::new(config, trace)
    }

    /// Run configuration.
    pub const fn config(&self) -> &Config {
        &self.config
    }

    /// Parsed trace records, in replay order.
    pub fn trace(&self) -> &[TraceRecord] {
        &self.trace
    }

    /// Builds the future-access index for this trace.
    pub fn future_index(&self) -> FutureAccessIndex {
        FutureAccessIndex::build(&self.trace, self.config.offset_bits)
    }

    /// Runs the configured policy.
    ///
    /// # Errors
    ///
    /// Propagates any error raised during replay.
    pub fn run(&self) -> SimResult<SimStats> {
        self.run_policy(self.config.policy)
    }

    /// Runs `policy` over the trace, building the future-access index only if it needs one.
    ///
    /// # Errors
    ///
    /// Propagates any error raised during replay.
    pub fn run_policy(&self, policy: EvictionPolicy) -> SimResult<SimStats> {
        let future = policy.requires_future_index().then(|| self.future_index());
        self.run_with_index(policy, future.as_ref())
    }

    /// Runs every policy in `policies` over the same trace, in order.
    ///
    /// # Errors
    ///
    /// Stops at the first failing run and returns its error.
    pub fn compare(&self, policies: &[EvictionPolicy]) -> SimResult<Vec<SimStats>> {
        let future = policies
            .iter()
            .any(|p| p.requires_future_index())
            .then(|| self.future_index());
        policies
            .iter()
            .map(|&policy| self.run_with_index(policy, future.as_ref()))
            .collect()
    }

    /// Runs `policy` with a caller-supplied future-access index.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::MissingFutureIndex`] for OPT without an index, otherwise
    /// propagates any error raised during replay.
    pub fn run_with_index(
        &self,
        policy: EvictionPolicy,
        future: Option<&FutureAccessIndex>,
    ) -> SimResult<SimStats> {
        let config = Config {
            policy,
            ..self.config.clone()
        };
        let mut table = FrameTable::from_config(&config, future)?;
        tracing::debug!(
            %policy,
            frames = config.frames,
            records = self.trace.len(),
            "starting replay"
        );

        let accesses = replay(&mut table, self.trace.iter().copied())?;
        let stats = SimStats::from_table(&table, accesses);
        tracing::debug!(
            %policy,
            page_faults = stats.page_faults,
            writes_to_disk = stats.writes_to_disk,
            "replay finished"
        );
        Ok(stats)
    }
}
