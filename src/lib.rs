//! A synchronization core for a retained-mode scene graph split across an update thread and a
//! render thread.
//!
//! The update thread owns a [`graph::SceneGraph`]: it allocates [`handle::NodeHandle`]s, writes
//! node fields through [`graph::SceneGraph::access_data`], and periodically calls
//! [`graph::SceneGraph::sync`] to hand a coalesced batch of changes to the render side. The
//! render thread only ever sees a [`graph::RenderHandle`], obtained once from
//! [`graph::SceneGraph::new`] and cloned as needed, which can only lock the render store for
//! reading — there is no path from it back to the change buffers or the handle allocator.
//!
//! The node kind set is closed: [`nodes::Container`], [`nodes::Text`], [`nodes::Shape`], and
//! [`nodes::ShapeRect`]. See [`kind`] for why that's a deliberate simplification over an open
//! registry, and `DESIGN.md` at the repository root for the rest of the grounding.

pub mod buffer;
pub mod error;
pub mod graph;
pub mod handle;
pub mod kind;
pub mod nodes;
pub mod store;
pub mod sync;

pub use error::SceneGraphError;
pub use graph::{KindSlot, RenderGuard, RenderHandle, SceneGraph, SceneGraphConfig};
pub use handle::NodeHandle;
pub use kind::{NodeKind, WritePayload};
