use crate::handle::NodeHandle;
use crate::kind::{NodeKind, WritePayload};
use crate::store::RenderStore;

pub struct Shape;

impl NodeKind for Shape {
	type Write = ShapeWrite;
	type Read = ShapeRead;
}

#[derive(Debug, Clone)]
pub struct ShapeWrite {
	pub handle: NodeHandle,
	pub x: f32,
	pub y: f32,
	pub visible: bool,
	pub deleted: bool,
}

impl Default for ShapeWrite {
	fn default() -> Self {
		Self {
			handle: NodeHandle::from_raw(0),
			x: 0.0,
			y: 0.0,
			visible: true,
			deleted: false,
		}
	}
}

impl WritePayload<Shape> for ShapeWrite {
	fn handle(&self) -> NodeHandle {
		self.handle
	}

	fn set_handle(&mut self, handle: NodeHandle) {
		self.handle = handle;
	}

	fn deleted(&self) -> bool {
		self.deleted
	}

	fn flush(&self, store: &mut RenderStore<Shape>) {
		let render = store.ensure(self.handle);
		render.x = self.x;
		render.y = self.y;
		render.visible = self.visible;
	}
}

#[derive(Debug, Clone, Default)]
pub struct ShapeRead {
	pub x: f32,
	pub y: f32,
	pub visible: bool,
}
