//! Sketches the frontend-wrapper contract described for external collaborators: a thin owning
//! handle that maps setter calls onto `access_data` and expresses deletion by flipping
//! `deleted` before the wrapper is dropped. The core itself knows nothing about this type.

use scene_sync_core::graph::SceneGraph;
use scene_sync_core::nodes::{Container, Text};
use scene_sync_core::{NodeHandle, SceneGraphConfig};

struct ContainerHandle<'a> {
	handle: NodeHandle,
	graph: &'a mut SceneGraph,
}

impl<'a> ContainerHandle<'a> {
	fn new(graph: &'a mut SceneGraph) -> Self {
		let handle = graph.allocate_handle();
		Self { handle, graph }
	}

	fn set_position(&mut self, x: f32, y: f32) {
		let write = self.graph.access_data::<Container>(self.handle);
		write.x = x;
		write.y = y;
	}

	fn set_children(&mut self, children: Vec<NodeHandle>) {
		self.graph.access_data::<Container>(self.handle).children = children;
	}

	fn delete(self) {
		self.graph.access_data::<Container>(self.handle).deleted = true;
	}
}

fn main() {
	let (mut graph, render) = SceneGraph::new(SceneGraphConfig::new(16).unwrap());

	let child = graph.allocate_handle();
	graph.access_data::<Text>(child).text = "hello".to_string();

	let mut root = ContainerHandle::new(&mut graph);
	root.set_position(10.0, 20.0);
	root.set_children(vec![child]);
	let root_handle = root.handle;

	graph.sync();

	{
		let view = render.lock();
		let root_read = view.try_get_render::<Container>(root_handle).unwrap();
		println!("root at ({}, {}) with {} children", root_read.x, root_read.y, root_read.children.len());

		for child in &root_read.children {
			match view.try_get_render::<Text>(*child) {
				Some(text) => println!("  child text: {:?}", text.text),
				None => println!("  child missing (deleted or wrong kind)"),
			}
		}
	}

	graph.access_data::<Text>(child).deleted = true;
	graph.sync();

	let view = render.lock();
	assert!(view.try_get_render::<Text>(child).is_none());
	println!("after deletion, child lookup is absent as expected");
}
