use crate::handle::NodeHandle;
use crate::kind::{NodeKind, WritePayload};
use crate::store::RenderStore;

/// Marker type for the container kind. Holds no data itself — see [`ContainerWrite`] and
/// [`ContainerRead`].
pub struct Container;

impl NodeKind for Container {
	type Write = ContainerWrite;
	type Read = ContainerRead;
}

/// Update-side payload for a container node.
#[derive(Debug, Clone)]
pub struct ContainerWrite {
	pub handle: NodeHandle,
	pub x: f32,
	pub y: f32,
	pub visible: bool,
	pub deleted: bool,
	pub children: Vec<NodeHandle>,
}

impl Default for ContainerWrite {
	fn default() -> Self {
		Self {
			handle: NodeHandle::from_raw(0),
			x: 0.0,
			y: 0.0,
			visible: true,
			deleted: false,
			children: Vec::new(),
		}
	}
}

impl WritePayload<Container> for ContainerWrite {
	fn handle(&self) -> NodeHandle {
		self.handle
	}

	fn set_handle(&mut self, handle: NodeHandle) {
		self.handle = handle;
	}

	fn deleted(&self) -> bool {
		self.deleted
	}

	fn flush(&self, store: &mut RenderStore<Container>) {
		let render = store.ensure(self.handle);
		render.x = self.x;
		render.y = self.y;
		render.visible = self.visible;
		// Replaced by value, order preserved, no deduplication — the container does not
		// validate that its children are still alive; that's a render-time lookup concern.
		render.children.clear();
		render.children.extend_from_slice(&self.children);
	}
}

/// Render-side projection of a container node.
#[derive(Debug, Clone, Default)]
pub struct ContainerRead {
	pub x: f32,
	pub y: f32,
	pub visible: bool,
	pub children: Vec<NodeHandle>,
}
