//! The sync engine: the atomic hand-off from the write epoch to the read epoch.
//!
//! [`drain_one_kind`] is the whole contract for a single kind; [`crate::graph::SceneGraph::sync`]
//! just calls it once per registered kind, in a fixed order, while holding the render lock.

use crate::buffer::ChangeBuffer;
use crate::handle::HandleAllocator;
use crate::kind::{NodeKind, WritePayload};
use crate::store::RenderStore;

/// Counts of what a [`drain_one_kind`] call did, for the trace/debug logs `sync()` emits.
#[derive(Debug, Clone, Copy, Default)]
pub struct DrainStats {
	pub flushed: usize,
	pub deleted: usize,
}

/// Drains `buffer`'s touched handles in snapshot order and, for each:
///
/// - if marked deleted, frees it at `allocator` and invalidates its render slot at the
///   generation the allocator reports back (never a generation this function invents itself —
///   the allocator remains the single source of truth for what's live);
/// - otherwise, flushes it into `store`, creating or refreshing the render slot.
///
/// Never fails: a stale or already-freed handle reaching here as a "delete" is a no-op at the
/// allocator, and `store.clear` on an out-of-range index just grows the store.
pub(crate) fn drain_one_kind<K: NodeKind>(
	allocator: &mut HandleAllocator,
	buffer: &mut ChangeBuffer<K>,
	store: &mut RenderStore<K>,
) -> DrainStats {
	let mut stats = DrainStats::default();

	for change in buffer.snapshot() {
		if change.deleted() {
			let index = change.handle().index();
			allocator.free(change.handle());
			store.clear(index, allocator.generation(index));
			stats.deleted += 1;
		} else {
			change.flush(store);
			stats.flushed += 1;
		}
	}

	stats
}
