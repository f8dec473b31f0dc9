use crate::handle::NodeHandle;
use crate::kind::{NodeKind, WritePayload};
use crate::store::RenderStore;

pub struct ShapeRect;

impl NodeKind for ShapeRect {
	type Write = ShapeRectWrite;
	type Read = ShapeRectRead;
}

#[derive(Debug, Clone)]
pub struct ShapeRectWrite {
	pub handle: NodeHandle,
	pub x: f32,
	pub y: f32,
	pub visible: bool,
	pub deleted: bool,
	pub width: f32,
	pub height: f32,
}

impl Default for ShapeRectWrite {
	fn default() -> Self {
		Self {
			handle: NodeHandle::from_raw(0),
			x: 0.0,
			y: 0.0,
			visible: true,
			deleted: false,
			width: 0.0,
			height: 0.0,
		}
	}
}

impl WritePayload<ShapeRect> for ShapeRectWrite {
	fn handle(&self) -> NodeHandle {
		self.handle
	}

	fn set_handle(&mut self, handle: NodeHandle) {
		self.handle = handle;
	}

	fn deleted(&self) -> bool {
		self.deleted
	}

	fn flush(&self, store: &mut RenderStore<ShapeRect>) {
		let render = store.ensure(self.handle);
		render.x = self.x;
		render.y = self.y;
		render.visible = self.visible;
		render.width = self.width;
		render.height = self.height;
	}
}

#[derive(Debug, Clone, Default)]
pub struct ShapeRectRead {
	pub x: f32,
	pub y: f32,
	pub visible: bool,
	pub width: f32,
	pub height: f32,
}
