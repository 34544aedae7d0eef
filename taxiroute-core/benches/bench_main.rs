use criterion::{Criterion, black_box, criterion_group, criterion_main};
use taxiroute_core::prelude::*;

/// Square grid with edges in both directions, `side * side` nodes
fn grid_graph(side: i64) -> TaxiwayGraph {
    let mut graph = TaxiwayGraph::new();
    for row in 0..side {
        for col in 0..side {
            let node = row * side + col;
            let length = 10.0 + ((row * 7 + col * 3) % 11) as f64;
            if col + 1 < side {
                graph.add_edge(node, node + 1, length).unwrap();
                graph.add_edge(node + 1, node, length).unwrap();
            }
            if row + 1 < side {
                graph.add_edge(node, node + side, length).unwrap();
                graph.add_edge(node + side, node, length).unwrap();
            }
        }
    }
    graph
}

fn bench_shortest_path(c: &mut Criterion) {
    let side = 100;
    let graph = grid_graph(side);
    let corner = side * side - 1;

    c.bench_function("shortest_path_grid_100", |b| {
        b.iter(|| shortest_path(black_box(&graph), black_box(0), black_box(corner)));
    });

    let model = AirportModel::new(graph, DelayPredictor::Unavailable);
    let request = RouteRequest {
        start: 0,
        end: corner,
        time_of_day: 8,
        traffic_level: 2,
        weather: "clear".to_string(),
    };
    c.bench_function("estimate_route_grid_100", |b| {
        b.iter(|| estimate_route(black_box(&model), black_box(&request)));
    });
}

criterion_group!(benches, bench_shortest_path);
criterion_main!(benches);
