//! The node handle surface: the public entry point higher layers (frontend wrappers, the
//! render-thread traversal) are expected to use.
//!
//! [`SceneGraph::new`] returns a `(SceneGraph, RenderHandle)` pair, deliberately shaped like
//! `std::sync::mpsc::channel`: the `SceneGraph` half is the update thread's — it owns the change
//! buffers and the handle allocator outright, with no locking, because the spec requires exactly
//! one writer. The `RenderHandle` half is `Clone + Send + Sync` and is all the render thread ever
//! needs: a lock over the render store and nothing else. Nothing else is reachable from it, so
//! there is no way for a render-thread caller to reach the change buffer or the allocator — the
//! "the update thread must not touch the render store directly, and vice versa" rule is
//! structural, not a comment.

use std::sync::Arc;

use log::{debug, trace};
use parking_lot::{Mutex, MutexGuard};

use crate::buffer::ChangeBuffer;
use crate::error::SceneGraphError;
use crate::handle::{HandleAllocator, NodeHandle};
use crate::kind::NodeKind;
use crate::nodes::{Container, Shape, ShapeRect, Text};
use crate::store::RenderStore;
use crate::sync::drain_one_kind;

/// Capacity-planning knobs for [`SceneGraph::new`]. There is nothing here but a size hint — no
/// persisted state, no file format, no environment variables; see the crate docs.
#[derive(Debug, Clone, Copy, Default)]
pub struct SceneGraphConfig {
	expected_nodes: usize,
}

impl SceneGraphConfig {
	/// Pre-reserves storage for roughly `expected_nodes` live handles across every kind. A
	/// `Default` config (`expected_nodes: 0`) behaves identically to never specifying one —
	/// everything still grows on demand.
	pub fn new(expected_nodes: usize) -> Result<Self, SceneGraphError> {
		if expected_nodes > isize::MAX as usize {
			return Err(SceneGraphError::CapacityOverflow {
				requested: expected_nodes,
			});
		}

		Ok(Self { expected_nodes })
	}
}

#[derive(Debug, Default)]
struct Buffers {
	container: ChangeBuffer<Container>,
	text: ChangeBuffer<Text>,
	shape: ChangeBuffer<Shape>,
	shape_rect: ChangeBuffer<ShapeRect>,
}

impl Buffers {
	fn with_capacity(capacity: usize) -> Self {
		Self {
			container: ChangeBuffer::with_capacity(capacity),
			text: ChangeBuffer::with_capacity(capacity),
			shape: ChangeBuffer::with_capacity(capacity),
			shape_rect: ChangeBuffer::with_capacity(capacity),
		}
	}

	fn is_empty(&self) -> bool {
		self.container.is_empty()
			&& self.text.is_empty()
			&& self.shape.is_empty()
			&& self.shape_rect.is_empty()
	}
}

#[derive(Debug, Default)]
struct RenderTables {
	container: RenderStore<Container>,
	text: RenderStore<Text>,
	shape: RenderStore<Shape>,
	shape_rect: RenderStore<ShapeRect>,
}

impl RenderTables {
	fn with_capacity(capacity: usize) -> Self {
		Self {
			container: RenderStore::with_capacity(capacity),
			text: RenderStore::with_capacity(capacity),
			shape: RenderStore::with_capacity(capacity),
			shape_rect: RenderStore::with_capacity(capacity),
		}
	}
}

/// Resolves a [`NodeKind`] to its change buffer on a [`SceneGraph`] and its render store on a
/// [`RenderGuard`], so `access_data::<K>` and `try_get_render::<K>` have one generic body apiece
/// instead of four hand-duplicated methods. This is the closed-kind-set stand-in for the
/// reference source's templated per-type singletons (see DESIGN.md) — every method is routed
/// through the two public handle types rather than any private storage type, so there is no
/// meaningful way to implement this for a fifth kind from outside the crate: a foreign type
/// would have nowhere to keep its buffer or store.
pub trait KindSlot: NodeKind {
	#[doc(hidden)]
	fn buffer_mut(graph: &mut SceneGraph) -> &mut ChangeBuffer<Self>;

	#[doc(hidden)]
	fn render_store(guard: &RenderGuard<'_>) -> &RenderStore<Self>;
}

impl KindSlot for Container {
	fn buffer_mut(graph: &mut SceneGraph) -> &mut ChangeBuffer<Self> {
		&mut graph.buffers.container
	}

	fn render_store(guard: &RenderGuard<'_>) -> &RenderStore<Self> {
		&guard.0.container
	}
}

impl KindSlot for Text {
	fn buffer_mut(graph: &mut SceneGraph) -> &mut ChangeBuffer<Self> {
		&mut graph.buffers.text
	}

	fn render_store(guard: &RenderGuard<'_>) -> &RenderStore<Self> {
		&guard.0.text
	}
}

impl KindSlot for Shape {
	fn buffer_mut(graph: &mut SceneGraph) -> &mut ChangeBuffer<Self> {
		&mut graph.buffers.shape
	}

	fn render_store(guard: &RenderGuard<'_>) -> &RenderStore<Self> {
		&guard.0.shape
	}
}

impl KindSlot for ShapeRect {
	fn buffer_mut(graph: &mut SceneGraph) -> &mut ChangeBuffer<Self> {
		&mut graph.buffers.shape_rect
	}

	fn render_store(guard: &RenderGuard<'_>) -> &RenderStore<Self> {
		&guard.0.shape_rect
	}
}

/// The update thread's handle onto the scene: allocates and frees handles, accepts mutations,
/// and drives `sync()`. Not meant to be shared across threads — get a [`RenderHandle`] from
/// [`SceneGraph::new`] for the render thread's side of the hand-off.
#[derive(Debug)]
pub struct SceneGraph {
	allocator: HandleAllocator,
	buffers: Buffers,
	render: Arc<Mutex<RenderTables>>,
}

impl SceneGraph {
	/// Constructs a fresh scene graph and its render-thread counterpart.
	pub fn new(config: SceneGraphConfig) -> (Self, RenderHandle) {
		let render = Arc::new(Mutex::new(RenderTables::with_capacity(config.expected_nodes)));

		let graph = Self {
			allocator: HandleAllocator::with_capacity(config.expected_nodes),
			buffers: Buffers::with_capacity(config.expected_nodes),
			render: render.clone(),
		};

		(graph, RenderHandle(render))
	}

	/// Mints a new handle.
	pub fn allocate_handle(&mut self) -> NodeHandle {
		self.allocator.allocate()
	}

	/// The update-side mutation entry point. Returns the coalescing write payload for `handle`;
	/// repeated calls within the same epoch return the same slot, so later field writes simply
	/// overwrite earlier ones (see [`crate::buffer::ChangeBuffer::access`]).
	///
	/// Calling this with a stale `handle` is not checked in release builds — see the error
	/// handling notes on [`crate::kind::WritePayload`] — but trips a `debug_assert!` in debug
	/// builds.
	pub fn access_data<K: KindSlot>(&mut self, handle: NodeHandle) -> &mut K::Write {
		debug_assert!(
			self.allocator.is_current(handle),
			"access_data called with a stale handle: {handle:?}",
		);

		K::buffer_mut(self).access(handle)
	}

	/// Drains every kind's change buffer under the render lock, applying deletions and flushes
	/// in fixed registration order (`Container, Text, Shape, ShapeRect`). A no-op, beyond
	/// acquiring and releasing the lock, if nothing was touched this epoch.
	pub fn sync(&mut self) {
		if self.buffers.is_empty() {
			trace!("sync: no pending changes");
		}

		let mut tables = self.render.lock();

		let container =
			drain_one_kind(&mut self.allocator, &mut self.buffers.container, &mut tables.container);
		let text = drain_one_kind(&mut self.allocator, &mut self.buffers.text, &mut tables.text);
		let shape = drain_one_kind(&mut self.allocator, &mut self.buffers.shape, &mut tables.shape);
		let shape_rect = drain_one_kind(
			&mut self.allocator,
			&mut self.buffers.shape_rect,
			&mut tables.shape_rect,
		);

		trace!(
			"sync: container={container:?} text={text:?} shape={shape:?} shape_rect={shape_rect:?}"
		);
		debug!(
			"sync: flushed={} deleted={}",
			container.flushed + text.flushed + shape.flushed + shape_rect.flushed,
			container.deleted + text.deleted + shape.deleted + shape_rect.deleted,
		);
	}
}

/// The render thread's handle onto the scene. `Clone + Send + Sync`; cheap to clone (an `Arc`
/// bump). Carries nothing but the render lock — see the module docs for why that's load-bearing.
#[derive(Debug, Clone)]
pub struct RenderHandle(Arc<Mutex<RenderTables>>);

impl RenderHandle {
	/// Acquires the render lock for the duration of a traversal. `sync()` blocks on the same
	/// lock, so a render pass holding this guard is guaranteed to see either the pre-sync or the
	/// post-sync state of the whole store, never a mix (invariant I6).
	pub fn lock(&self) -> RenderGuard<'_> {
		RenderGuard(self.0.lock())
	}
}

/// A locked view of the render store. Borrows the lock for its lifetime; drop it to let `sync()`
/// (or another reader) through.
pub struct RenderGuard<'a>(MutexGuard<'a, RenderTables>);

impl RenderGuard<'_> {
	/// Generation-checked lookup. Absent for a stale or never-allocated handle, or for a handle
	/// belonging to a different kind than `K` — both collapse to the same "not found" result,
	/// which is the spec's intended fail-closed behavior for kind mismatches.
	pub fn try_get_render<K: KindSlot>(&self, handle: NodeHandle) -> Option<&K::Read> {
		K::render_store(self).try_get(handle)
	}
}
