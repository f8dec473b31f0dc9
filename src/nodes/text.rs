use crate::handle::NodeHandle;
use crate::kind::{NodeKind, WritePayload};
use crate::store::RenderStore;

pub struct Text;

impl NodeKind for Text {
	type Write = TextWrite;
	type Read = TextRead;
}

#[derive(Debug, Clone)]
pub struct TextWrite {
	pub handle: NodeHandle,
	pub x: f32,
	pub y: f32,
	pub visible: bool,
	pub deleted: bool,
	pub text: String,
}

impl Default for TextWrite {
	fn default() -> Self {
		Self {
			handle: NodeHandle::from_raw(0),
			x: 0.0,
			y: 0.0,
			visible: true,
			deleted: false,
			text: String::new(),
		}
	}
}

impl WritePayload<Text> for TextWrite {
	fn handle(&self) -> NodeHandle {
		self.handle
	}

	fn set_handle(&mut self, handle: NodeHandle) {
		self.handle = handle;
	}

	fn deleted(&self) -> bool {
		self.deleted
	}

	fn flush(&self, store: &mut RenderStore<Text>) {
		let render = store.ensure(self.handle);
		render.x = self.x;
		render.y = self.y;
		render.visible = self.visible;
		render.text.clear();
		render.text.push_str(&self.text);
	}
}

#[derive(Debug, Clone, Default)]
pub struct TextRead {
	pub x: f32,
	pub y: f32,
	pub visible: bool,
	pub text: String,
}
