use criterion::{black_box, criterion_group, criterion_main, Criterion};
use scene_sync_core::graph::{SceneGraph, SceneGraphConfig};
use scene_sync_core::nodes::{Container, Text};

fn criterion_benchmark(c: &mut Criterion) {
	c.bench_function("access_data_container", |c| {
		let (mut graph, _render) = SceneGraph::new(SceneGraphConfig::new(1024).unwrap());
		let handle = graph.allocate_handle();

		c.iter(|| {
			let w = graph.access_data::<Container>(handle);
			w.x += 1.0;
			black_box(w.x);
		});
	});

	c.bench_function("sync_1000_touched_nodes", |c| {
		c.iter_batched(
			|| {
				let (mut graph, render) = SceneGraph::new(SceneGraphConfig::new(1024).unwrap());
				let handles: Vec<_> = (0..1000).map(|_| graph.allocate_handle()).collect();
				for handle in &handles {
					graph.access_data::<Text>(*handle).text = "hello".to_string();
				}
				(graph, render, handles)
			},
			|(mut graph, _render, _handles)| {
				graph.sync();
			},
			criterion::BatchSize::SmallInput,
		);
	});
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
