//! Total order over candidate trades.

use quoter_types::Trade;
use std::cmp::Ordering;

/// Comparator for ranking candidates: higher execution price sorts first,
/// absent candidates sort after all present ones, absent equals absent.
///
/// Two candidates with the same exact price compare equal; the comparator
/// deliberately does not break ties, so callers wanting a deterministic
/// full order must feed candidates in a stable order (registration order)
/// and use a stable sort.
pub fn best_price_first(a: Option<&Trade>, b: Option<&Trade>) -> Ordering {
	match (a, b) {
		(Some(a), Some(b)) => b.execution_price().cmp(a.execution_price()),
		(Some(_), None) => Ordering::Less,
		(None, Some(_)) => Ordering::Greater,
		(None, None) => Ordering::Equal,
	}
}
