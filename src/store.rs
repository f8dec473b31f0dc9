//! The per-kind render store: a generation-indexed slot array holding the stable render-side
//! view, written only by the sync engine and read only by the render thread.

use derive_where::derive_where;

use crate::handle::NodeHandle;
use crate::kind::NodeKind;

/// Sparse mapping from index to `K::Read`, with a parallel generation shadow used to validate
/// lookups against [`crate::handle::HandleAllocator`] without touching the allocator itself.
#[derive_where(Debug; K::Read: std::fmt::Debug)]
#[derive_where(Default)]
pub struct RenderStore<K: NodeKind> {
	items: Vec<K::Read>,
	generations: Vec<u16>,
}

impl<K: NodeKind> RenderStore<K> {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn with_capacity(capacity: usize) -> Self {
		Self {
			items: Vec::with_capacity(capacity),
			generations: Vec::with_capacity(capacity),
		}
	}

	fn grow_to(&mut self, len: usize) {
		if len > self.items.len() {
			self.items.resize_with(len, Default::default);
			self.generations.resize(len, 0);
		}
	}

	/// Creates or reuses the slot for `handle`, resetting it to default whenever the stored
	/// generation doesn't already match (a fresh slot, or an entity revived at this index under
	/// a new generation). This is the only way flush materializes render-side state.
	pub fn ensure(&mut self, handle: NodeHandle) -> &mut K::Read {
		let index = handle.index_usize();
		self.grow_to(index + 1);

		if self.generations[index] != handle.generation() {
			self.items[index] = Default::default();
			self.generations[index] = handle.generation();
		}

		&mut self.items[index]
	}

	/// Generation-checked lookup: absent if `handle` is out of range or stale, even if the same
	/// index now holds a different, live entity.
	pub fn try_get(&self, handle: NodeHandle) -> Option<&K::Read> {
		let index = handle.index_usize();
		if self.generations.get(index).copied()? != handle.generation() {
			return None;
		}
		self.items.get(index)
	}

	/// Invalidates the slot at `index` and stamps it with `new_generation`. Called by the sync
	/// engine after a deletion has been committed at the allocator.
	pub fn clear(&mut self, index: u64, new_generation: u16) {
		let index = index as usize;
		self.grow_to(index + 1);
		self.items[index] = Default::default();
		self.generations[index] = new_generation;
	}
}

#[cfg(test)]
mod test {
	use super::*;
	use crate::nodes::Container;

	fn handle_at(index: u64, generation: u16) -> NodeHandle {
		NodeHandle::from_raw((index << 16) | generation as u64)
	}

	#[test]
	fn try_get_is_absent_before_ensure() {
		let store = RenderStore::<Container>::new();
		assert!(store.try_get(handle_at(0, 0)).is_none());
	}

	#[test]
	fn ensure_then_try_get_round_trips() {
		let mut store = RenderStore::<Container>::new();
		let h = handle_at(3, 0);
		store.ensure(h).x = 10.0;

		assert_eq!(store.try_get(h).unwrap().x, 10.0);
	}

	#[test]
	fn stale_generation_is_absent_even_at_same_index() {
		let mut store = RenderStore::<Container>::new();
		let h0 = handle_at(0, 0);
		store.ensure(h0).x = 1.0;

		store.clear(0, 1);

		assert!(store.try_get(h0).is_none());

		let h1 = handle_at(0, 1);
		assert_eq!(store.try_get(h1).unwrap().x, 0.0);
	}

	#[test]
	fn ensure_resets_slot_on_generation_change() {
		let mut store = RenderStore::<Container>::new();
		let h0 = handle_at(5, 0);
		store.ensure(h0).x = 42.0;

		let h1 = handle_at(5, 1);
		assert_eq!(store.ensure(h1).x, 0.0);
	}
}
