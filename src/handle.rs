//! Opaque node handles and the allocator that mints and recycles them.
//!
//! A [`NodeHandle`] packs a dense slot index and a reuse generation into a single `u64` so that
//! equality, hashing, and the stale-handle check are all one comparison. See [`HandleAllocator`]
//! for the free-list policy.

use std::fmt;

use bytemuck::{Pod, Zeroable};

/// Bit width of the generation field. The remaining high bits hold the index.
const GENERATION_BITS: u32 = 16;
const GENERATION_MASK: u64 = (1 << GENERATION_BITS) - 1;

/// An opaque handle to a node, valid only while its generation matches the allocator's.
///
/// Layout: `(index << 16) | generation`. Cheap to copy, compare, and hash.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Pod, Zeroable)]
#[repr(transparent)]
pub struct NodeHandle(u64);

impl NodeHandle {
	pub fn from_raw(raw: u64) -> Self {
		Self(raw)
	}

	pub fn raw(self) -> u64 {
		self.0
	}

	fn new(index: u64, generation: u16) -> Self {
		Self((index << GENERATION_BITS) | generation as u64)
	}

	/// The dense slot index this handle addresses.
	pub fn index(self) -> u64 {
		self.0 >> GENERATION_BITS
	}

	/// The index, truncated to `usize`, for direct `Vec` indexing.
	pub fn index_usize(self) -> usize {
		self.index() as usize
	}

	pub fn generation(self) -> u16 {
		(self.0 & GENERATION_MASK) as u16
	}
}

impl fmt::Debug for NodeHandle {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("NodeHandle")
			.field("index", &self.index())
			.field("generation", &self.generation())
			.finish()
	}
}

/// Mints [`NodeHandle`]s, recycling freed indices and bumping their generation so that stale
/// handles can be detected by comparison alone.
///
/// Owns the only authoritative copy of "what generation is live at index `i`". The render store
/// mirrors this table per-kind; [`HandleAllocator::generation`] is the source of truth sync
/// reconciles against.
#[derive(Debug, Default)]
pub struct HandleAllocator {
	generations: Vec<u16>,
	free: Vec<u64>,
	next_index: u64,
}

impl HandleAllocator {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn with_capacity(capacity: usize) -> Self {
		Self {
			generations: Vec::with_capacity(capacity),
			free: Vec::new(),
			next_index: 0,
		}
	}

	/// Mints a new handle, popping the free list (LIFO, for cache locality on recently-freed
	/// slots) before growing the backing table.
	pub fn allocate(&mut self) -> NodeHandle {
		let index = if let Some(index) = self.free.pop() {
			index
		} else {
			let index = self.next_index;
			self.next_index += 1;
			index
		};

		if index as usize >= self.generations.len() {
			self.generations.resize(index as usize + 1, 0);
		}

		NodeHandle::new(index, self.generations[index as usize])
	}

	/// Frees `handle`. A no-op if `handle` is stale or out of range — double-free and
	/// stale-free are both idempotent by construction.
	pub fn free(&mut self, handle: NodeHandle) {
		let index = handle.index();
		let Some(slot) = self.generations.get_mut(index as usize) else {
			return;
		};

		if *slot != handle.generation() {
			return;
		}

		*slot = slot.wrapping_add(1);
		self.free.push(index);
	}

	/// The live generation at `index`, or `0` if `index` has never been allocated.
	pub fn generation(&self, index: u64) -> u16 {
		self.generations
			.get(index as usize)
			.copied()
			.unwrap_or(0)
	}

	/// `true` iff `handle`'s generation matches the live generation at its index.
	pub fn is_current(&self, handle: NodeHandle) -> bool {
		self.generation(handle.index()) == handle.generation()
	}
}

#[cfg(test)]
mod test {
	use super::*;

	#[test]
	fn round_trips_index_and_generation() {
		let h = NodeHandle::new(1234, 56);
		assert_eq!(h.index(), 1234);
		assert_eq!(h.generation(), 56);
		assert_eq!(NodeHandle::from_raw(h.raw()), h);
	}

	#[test]
	fn allocate_yields_distinct_handles() {
		let mut alloc = HandleAllocator::new();
		let a = alloc.allocate();
		let b = alloc.allocate();
		assert_ne!(a, b);
	}

	#[test]
	fn free_then_allocate_bumps_generation_and_reuses_index() {
		let mut alloc = HandleAllocator::new();
		let a = alloc.allocate();
		alloc.free(a);
		let b = alloc.allocate();

		assert_eq!(a.index(), b.index());
		assert_eq!(b.generation(), a.generation() + 1);
		assert!(!alloc.is_current(a));
		assert!(alloc.is_current(b));
	}

	#[test]
	fn double_free_is_idempotent() {
		let mut alloc = HandleAllocator::new();
		let a = alloc.allocate();
		alloc.free(a);
		let gen_after_first = alloc.generation(a.index());
		alloc.free(a);
		assert_eq!(alloc.generation(a.index()), gen_after_first);
	}

	#[test]
	fn free_of_unknown_handle_is_a_no_op() {
		let mut alloc = HandleAllocator::new();
		alloc.free(NodeHandle::new(9999, 0));
		assert_eq!(alloc.generation(9999), 0);
	}

	#[test]
	fn generation_wraps_after_many_reuse_cycles() {
		let mut alloc = HandleAllocator::new();
		let mut h = alloc.allocate();
		for _ in 0..(u16::MAX as u32 + 5) {
			alloc.free(h);
			h = alloc.allocate();
		}
		assert_eq!(h.generation(), 4);
	}
}
