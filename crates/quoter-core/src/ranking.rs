//! Bounded ordered insertion.

use std::cmp::Ordering;

/// Inserts `item` into `items`, keeping the vector sorted ascending by
/// `cmp` and capped at `max_size` elements, retaining the greatest.
///
/// Returns the element that did not make the cut: the incoming item when
/// the set is full and the item does not strictly outrank the current
/// minimum (rejected up front, no shifting), or the evicted minimum when
/// the insertion pushed the set over capacity. `None` means the set simply
/// grew.
///
/// Equal elements are inserted after their peers, so feeding items in a
/// meaningful order (e.g. registration order) keeps ties in that order.
///
/// Not thread-safe by design; use within a single unit of execution. Used
/// for final top-K ranking and for bounding route-search fan-out inside
/// multi-hop adapters.
///
/// # Panics
///
/// `max_size == 0` or `items.len() > max_size` on entry is a programmer
/// error and panics.
pub fn sorted_insert<T, F>(items: &mut Vec<T>, item: T, max_size: usize, mut cmp: F) -> Option<T>
where
	F: FnMut(&T, &T) -> Ordering,
{
	assert!(max_size > 0, "sorted_insert: max_size must be positive");
	assert!(
		items.len() <= max_size,
		"sorted_insert: items exceed max_size before insertion"
	);

	if items.len() == max_size && cmp(&item, &items[0]) != Ordering::Greater {
		return Some(item);
	}

	let index = items.partition_point(|probe| cmp(probe, &item) != Ordering::Greater);
	items.insert(index, item);

	if items.len() > max_size {
		Some(items.remove(0))
	} else {
		None
	}
}
