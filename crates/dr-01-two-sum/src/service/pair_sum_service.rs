//! Pair-Sum Service
//!
//! Applies configuration limits, runs the domain finder and reports to the
//! injected metrics recorder.

use std::sync::Arc;
use std::time::Instant;

use drill_telemetry::{drill_span, log_event};

use crate::domain::{find_pair_indices, find_pair_indices_lazy, PairIndices, PairSumConfig};
use crate::error::PairSumError;
use crate::events::{FindPairRequest, FindPairResponse};
use crate::metrics::{MetricsRecorder, NoOpMetrics};
use crate::ports::PairSumApi;

/// Drill tag carried by every span and event from this service
const DRILL: &str = "two-sum";

/// Pair-Sum Service implementation
///
/// Implements the `PairSumApi` port. Holds no per-search state, so one
/// instance can serve concurrent callers.
pub struct PairSumService<M: MetricsRecorder> {
    /// Metrics sink
    metrics: Arc<M>,
    /// Limits and tuning
    config: PairSumConfig,
}

impl PairSumService<NoOpMetrics> {
    /// Create a service with default configuration and no metrics
    pub fn without_metrics() -> Self {
        Self::new(Arc::new(NoOpMetrics))
    }
}

impl<M: MetricsRecorder> PairSumService<M> {
    /// Create a new service with default configuration
    pub fn new(metrics: Arc<M>) -> Self {
        Self {
            metrics,
            config: PairSumConfig::default(),
        }
    }

    /// Create with custom configuration
    pub fn with_config(metrics: Arc<M>, config: PairSumConfig) -> Result<Self, PairSumError> {
        config.validate()?;
        Ok(Self { metrics, config })
    }

    /// Active configuration
    pub fn config(&self) -> &PairSumConfig {
        &self.config
    }

    /// Shared metrics recorder
    pub fn metrics(&self) -> &Arc<M> {
        &self.metrics
    }

    fn search(&self, sequence: &[i64], target: i64) -> Option<PairIndices> {
        let _span = drill_span!(
            "pair_search",
            drill = DRILL,
            len = sequence.len(),
            target = target
        )
        .entered();

        let start = Instant::now();
        let result = if self.config.preallocate_seen_map {
            find_pair_indices(sequence, target)
        } else {
            find_pair_indices_lazy(sequence, target)
        };
        self.metrics
            .record_search(sequence.len(), result.is_some(), start.elapsed());

        match result {
            Some(pair) => log_event!(
                debug,
                DRILL,
                "Pair found",
                first = pair.first,
                second = pair.second
            ),
            None => log_event!(debug, DRILL, "No pair found"),
        }
        result
    }
}

impl<M: MetricsRecorder> PairSumApi for PairSumService<M> {
    fn find_pair(
        &self,
        sequence: &[i64],
        target: i64,
    ) -> Result<Option<PairIndices>, PairSumError> {
        if let Err(e) = self.config.check_len(sequence.len()) {
            log_event!(warn, DRILL, "Rejected pair-sum search", error = %e);
            self.metrics.record_rejected();
            return Err(e);
        }
        Ok(self.search(sequence, target))
    }

    fn handle(&self, request: &FindPairRequest) -> Result<FindPairResponse, PairSumError> {
        let sequence = match request.sequence() {
            Ok(sequence) => sequence,
            Err(e) => {
                log_event!(
                    warn,
                    DRILL,
                    "Rejected pair-sum request",
                    correlation_id = request.correlation_id,
                    error = %e
                );
                self.metrics.record_rejected();
                return Err(e);
            }
        };

        let indices = self.find_pair(sequence, request.target)?;
        Ok(FindPairResponse {
            correlation_id: request.correlation_id,
            indices,
        })
    }
}
