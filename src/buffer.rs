//! The per-kind change buffer: a dense, dirty-coalescing store of pending write-side mutations.
//!
//! Owned exclusively by the update thread. There is no locking here — the single-writer
//! contract documented on [`crate::graph::SceneGraph`] is what makes that sound, not anything in
//! this type.

use derive_where::derive_where;

use crate::handle::NodeHandle;
use crate::kind::{NodeKind, WritePayload};

/// Dense-by-index storage chosen over a hash map: indices come from a monotone allocator and are
/// dense in practice, so this gives `O(1)` access on the hot write path without hashing.
#[derive_where(Debug; K::Write: std::fmt::Debug)]
#[derive_where(Default)]
pub struct ChangeBuffer<K: NodeKind> {
	items: Vec<K::Write>,
	dirty: Vec<bool>,
	touched: Vec<usize>,
}

impl<K: NodeKind> ChangeBuffer<K> {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn with_capacity(capacity: usize) -> Self {
		Self {
			items: Vec::with_capacity(capacity),
			dirty: Vec::with_capacity(capacity),
			touched: Vec::new(),
		}
	}

	fn grow_to(&mut self, len: usize) {
		if len > self.items.len() {
			self.items.resize_with(len, Default::default);
			self.dirty.resize(len, false);
		}
	}

	/// Returns the write payload for `handle`, reset to default and stamped with `handle` on
	/// first access this epoch (invariant B3). Repeated calls within the same epoch return the
	/// same slot, so the caller's successive field writes coalesce last-write-wins (invariant
	/// I4).
	pub fn access(&mut self, handle: NodeHandle) -> &mut K::Write {
		let index = handle.index_usize();
		self.grow_to(index + 1);

		if !self.dirty[index] {
			self.dirty[index] = true;
			self.touched.push(index);
			self.items[index] = Default::default();
			self.items[index].set_handle(handle);
		}

		&mut self.items[index]
	}

	/// Drains the touched slots in insertion order (invariant I5), leaving the buffer logically
	/// empty for the next epoch. Destructive by design: there is no way to observe this epoch's
	/// writes twice.
	pub fn snapshot(&mut self) -> Vec<K::Write> {
		let mut out = Vec::with_capacity(self.touched.len());

		for &index in &self.touched {
			out.push(std::mem::take(&mut self.items[index]));
			self.dirty[index] = false;
		}
		self.touched.clear();

		out
	}

	pub fn is_empty(&self) -> bool {
		self.touched.is_empty()
	}
}

#[cfg(test)]
mod test {
	use super::*;
	use crate::kind::WritePayload;
	use crate::nodes::container::ContainerWrite;
	use crate::nodes::Container;

	fn handle_at(index: u64) -> NodeHandle {
		NodeHandle::from_raw(index << 16)
	}

	#[test]
	fn access_resets_slot_on_first_touch_only() {
		let mut buf = ChangeBuffer::<Container>::new();
		let h = handle_at(0);

		buf.access(h).x = 1.0;
		buf.access(h).x = 2.0;
		buf.access(h).y = 7.0;

		let snap = buf.snapshot();
		assert_eq!(snap.len(), 1);
		assert_eq!(snap[0].x, 2.0);
		assert_eq!(snap[0].y, 7.0);
	}

	#[test]
	fn snapshot_preserves_insertion_order() {
		let mut buf = ChangeBuffer::<Container>::new();
		let (h2, h0, h1) = (handle_at(2), handle_at(0), handle_at(1));

		buf.access(h2);
		buf.access(h0);
		buf.access(h1);

		let snap = buf.snapshot();
		let handles: Vec<_> = snap.iter().map(ContainerWrite::handle).collect();
		assert_eq!(handles, vec![h2, h0, h1]);
	}

	#[test]
	fn snapshot_is_destructive() {
		let mut buf = ChangeBuffer::<Container>::new();
		buf.access(handle_at(0)).x = 5.0;

		assert_eq!(buf.snapshot().len(), 1);
		assert!(buf.is_empty());
		assert_eq!(buf.snapshot().len(), 0);
	}

	#[test]
	fn deletion_dominates_field_writes() {
		let mut buf = ChangeBuffer::<Container>::new();
		let h = handle_at(0);

		{
			let w = buf.access(h);
			w.x = 1.0;
			w.deleted = true;
			w.y = 2.0;
		}

		let snap = buf.snapshot();
		assert!(snap[0].deleted);
	}
}
