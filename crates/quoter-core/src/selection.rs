//! Best-execution selection over aggregated candidates.

use crate::aggregation::{AggregationResult, PlatformAttempt};
use crate::compare::best_price_first;
use quoter_types::Trade;
use serde::Serialize;
use thiserror::Error;

/// Outcome of a selection over an empty candidate list.
///
/// Carries the per-platform attempt records so the caller can tell "no
/// liquidity anywhere" apart from "every source errored". An expected,
/// normal outcome, modeled as a typed error so callers cannot ignore it.
#[derive(Debug, Clone, PartialEq, Error, Serialize)]
#[error("no route found across {} attempted platform(s)", .attempts.len())]
pub struct NoRouteFound {
	pub attempts: Vec<PlatformAttempt>,
}

/// Returns the candidate with the best execution price, or [`NoRouteFound`]
/// when no platform quoted.
///
/// Exact price ties resolve to the earliest-registered platform.
pub fn select_best(result: AggregationResult) -> Result<Trade, NoRouteFound> {
	let (trades, attempts) = result.into_parts();
	let mut best: Option<Trade> = None;
	for trade in trades {
		// Strictly-better only, so the earliest-registered tie survives.
		if best_price_first(Some(&trade), best.as_ref()) == std::cmp::Ordering::Less {
			best = Some(trade);
		}
	}
	best.ok_or(NoRouteFound { attempts })
}

/// Returns up to `n` candidates, best execution price first.
///
/// Failed platforms never appear in the ranked list; they are visible only
/// through the result's attempt records. The sort is stable, so exact ties
/// keep registration order.
pub fn select_ranked(result: &AggregationResult, n: usize) -> Vec<Trade> {
	let mut ranked = result.trades().to_vec();
	ranked.sort_by(|a, b| best_price_first(Some(a), Some(b)));
	ranked.truncate(n);
	ranked
}
