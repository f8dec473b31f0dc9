//! The node-kind type registry.
//!
//! The kind set is closed at compile time: four node kinds (see [`crate::nodes`]), each pairing a
//! write-side payload with a read-side payload through this trait. There is no runtime registry
//! of kinds to look up — `K: NodeKind` is resolved at the call site by the compiler, so
//! `access_data::<Container>(h)` and `access_data::<Text>(h)` share one generic method body
//! instead of four hand-duplicated ones.

use crate::handle::NodeHandle;
use crate::store::RenderStore;

/// A family of nodes sharing a write payload type and a read payload type.
pub trait NodeKind: Sized + 'static {
	/// The update-side mutation record for this kind. Coalesces writes within one epoch.
	type Write: WritePayload<Self>;
	/// The render-side projection for this kind, read only by the render thread under the lock.
	type Read: Default;
}

/// The write payload of a node kind.
///
/// Every concrete payload (`ContainerWrite`, `TextWrite`, ...) always carries the owning handle
/// and a `deleted` flag on top of its kind-specific fields; this trait is how the sync engine
/// gets at those without knowing the concrete type.
pub trait WritePayload<K: NodeKind<Write = Self>>: Default {
	fn handle(&self) -> NodeHandle;

	fn set_handle(&mut self, handle: NodeHandle);

	/// Whether this change, as coalesced, represents a deletion. Deletion dominates: if any
	/// `access_data` call in the epoch set `deleted = true`, this returns `true` regardless of
	/// other field writes (invariant I8).
	fn deleted(&self) -> bool;

	/// Copies this payload's fields into the render store, creating or refreshing the slot.
	/// Must not read any other kind's store.
	fn flush(&self, store: &mut RenderStore<K>);
}
