//! Concurrent quote fan-out.

use crate::adapter::AdapterError;
use crate::error::FailureKind;
use crate::registry::RegisteredPlatform;
use futures::FutureExt;
use quoter_config::AggregationSettings;
use quoter_types::{PlatformDescriptor, SwapRequest, Trade};
use serde::Serialize;
use std::panic::AssertUnwindSafe;
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinSet;
use tracing::{debug, info, warn};

/// The outcome of one platform's attempt at quoting a request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum AttemptOutcome {
	/// The platform contributed a candidate.
	Quoted,
	/// The platform contributed nothing; the kind says why.
	Failed(FailureKind),
}

/// Diagnostic record for one selected platform.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlatformAttempt {
	pub platform: PlatformDescriptor,
	pub outcome: AttemptOutcome,
}

/// Everything one aggregation call produced: the candidates, in platform
/// registration order, plus one attempt record per selected platform.
///
/// At most one candidate per platform by construction. Not yet ranked;
/// ranking is selection policy and lives elsewhere.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AggregationResult {
	trades: Vec<Trade>,
	attempts: Vec<PlatformAttempt>,
}

impl AggregationResult {
	pub fn new(trades: Vec<Trade>, attempts: Vec<PlatformAttempt>) -> Self {
		Self { trades, attempts }
	}

	pub fn trades(&self) -> &[Trade] {
		&self.trades
	}

	pub fn attempts(&self) -> &[PlatformAttempt] {
		&self.attempts
	}

	pub fn into_parts(self) -> (Vec<Trade>, Vec<PlatformAttempt>) {
		(self.trades, self.attempts)
	}
}

/// Fans a swap request out to the selected platforms and collects whatever
/// arrives before the shared deadline.
///
/// Holds no mutable state across calls; every call is independent.
pub struct Aggregator {
	global_timeout: Duration,
	source_timeout: Duration,
	grace_period: Duration,
}

impl Aggregator {
	pub fn new(settings: &AggregationSettings) -> Self {
		Self {
			global_timeout: settings.global_timeout(),
			source_timeout: settings.source_timeout(),
			grace_period: settings.grace_period(),
		}
	}

	/// Dispatches one concurrent unit of work per selected platform and
	/// waits for all of them or for the deadline, whichever comes first.
	///
	/// Each unit is isolated: an erroring, empty-handed or slow adapter is
	/// recorded as a failure and never disturbs its siblings. Tasks still
	/// pending once the deadline plus a bounded grace period has elapsed
	/// are aborted and recorded as timed out. Candidates come back in the
	/// registration order of their platform regardless of completion
	/// order.
	pub async fn aggregate(
		&self,
		request: &SwapRequest,
		selected: Vec<RegisteredPlatform>,
		timeout_override: Option<Duration>,
	) -> AggregationResult {
		let global_timeout = timeout_override.unwrap_or(self.global_timeout);
		let source_timeout = self.source_timeout.min(global_timeout);

		debug!(
			platforms = selected.len(),
			timeout_ms = global_timeout.as_millis() as u64,
			"dispatching quote requests"
		);

		let mut tasks: JoinSet<(usize, Result<Trade, FailureKind>)> = JoinSet::new();
		for (index, entry) in selected.iter().enumerate() {
			let request = request.clone();
			let adapter = Arc::clone(entry.adapter());
			let platform = entry.descriptor().name().to_string();

			tasks.spawn(async move {
				debug!(%platform, "querying source");
				let computation = AssertUnwindSafe(adapter.compute_trade(&request)).catch_unwind();
				let outcome = match tokio::time::timeout(source_timeout, computation).await {
					Ok(Ok(Ok(trade))) => Ok(trade),
					Ok(Ok(Err(AdapterError::NoRoute))) => Err(FailureKind::NoRoute),
					Ok(Ok(Err(e))) => Err(FailureKind::Adapter(e.to_string())),
					Ok(Err(_panic)) => {
						Err(FailureKind::Adapter("adapter panicked".to_string()))
					}
					Err(_) => Err(FailureKind::Timeout),
				};
				if let Err(kind) = &outcome {
					warn!(%platform, %kind, "source contributed no candidate");
				}
				(index, outcome)
			});
		}

		// Each unit owns its result slot exclusively until it reports in,
		// so collection needs no locking.
		let mut slots: Vec<Option<Result<Trade, FailureKind>>> =
			(0..selected.len()).map(|_| None).collect();
		let hard_deadline =
			tokio::time::Instant::now() + global_timeout + self.grace_period;

		loop {
			match tokio::time::timeout_at(hard_deadline, tasks.join_next()).await {
				Ok(Some(Ok((index, outcome)))) => slots[index] = Some(outcome),
				Ok(Some(Err(join_error))) => {
					// Only reachable through task cancellation; panics are
					// caught inside the unit.
					warn!(error = %join_error, "quote task did not complete");
				}
				Ok(None) => break,
				Err(_) => {
					warn!(
						timeout_ms = global_timeout.as_millis() as u64,
						"aggregation deadline elapsed, aborting pending sources"
					);
					tasks.abort_all();
					break;
				}
			}
		}

		let mut trades = Vec::new();
		let mut attempts = Vec::with_capacity(selected.len());
		for (entry, slot) in selected.iter().zip(slots) {
			let outcome = match slot {
				Some(Ok(trade)) => match validate_candidate(request, &trade) {
					Ok(()) => {
						trades.push(trade);
						AttemptOutcome::Quoted
					}
					Err(kind) => AttemptOutcome::Failed(kind),
				},
				Some(Err(kind)) => AttemptOutcome::Failed(kind),
				// Aborted past the deadline without reporting in.
				None => AttemptOutcome::Failed(FailureKind::Timeout),
			};
			attempts.push(PlatformAttempt {
				platform: entry.descriptor().clone(),
				outcome,
			});
		}

		info!(
			candidates = trades.len(),
			attempted = attempts.len(),
			"quote aggregation completed"
		);

		AggregationResult { trades, attempts }
	}
}

/// A candidate's legs must carry the request's currency pair; anything
/// else is an adapter bug and is demoted to a failure record.
fn validate_candidate(request: &SwapRequest, trade: &Trade) -> Result<(), FailureKind> {
	if trade.input_amount().currency() != request.currency_in()
		|| trade.output_amount().currency() != request.currency_out()
	{
		return Err(FailureKind::Adapter(
			"candidate does not match the request's currency pair".to_string(),
		));
	}
	Ok(())
}
