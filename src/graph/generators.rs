use crate::graph::{DirectedGraph, VertexId};
use crate::Result;
use ordered_float::OrderedFloat;
use rand::prelude::*;
use std::collections::HashSet;

/// Builds the classic five vertex example graph and returns it with its source `s`
///
/// Edges: s->t:10, s->y:5, y->t:3, y->x:9, y->z:2, t->y:2, t->x:1, x->z:4,
/// z->s:7, z->x:6. Shortest distances from `s` are s=0, y=5, z=7, t=8, x=9.
pub fn sample_graph() -> Result<(DirectedGraph<u32>, VertexId)> {
    let mut graph = DirectedGraph::with_capacity(5);
    let s = graph.add_vertex("s");
    let t = graph.add_vertex("t");
    let x = graph.add_vertex("x");
    let y = graph.add_vertex("y");
    let z = graph.add_vertex("z");

    graph.connect(s, t, 10)?;
    graph.connect(s, y, 5)?;
    graph.connect(t, x, 1)?;
    graph.connect(t, y, 2)?;
    graph.connect(y, t, 3)?;
    graph.connect(y, x, 9)?;
    graph.connect(y, z, 2)?;
    graph.connect(x, z, 4)?;
    graph.connect(z, s, 7)?;
    graph.connect(z, x, 6)?;

    Ok((graph, s))
}

/// Generates a random directed graph with about `edge_factor * n` edges
///
/// Weights are drawn from `0..=max_weight`. Self-loops and repeated pairs are
/// skipped, so adjacency lists and the edge set always agree. The same seed
/// always yields the same graph.
pub fn random_graph(
    n: usize,
    edge_factor: f64,
    max_weight: u32,
    seed: u64,
) -> Result<DirectedGraph<u32>> {
    let mut graph = DirectedGraph::with_capacity(n);
    let mut rng = StdRng::seed_from_u64(seed);

    for i in 0..n {
        graph.add_vertex(format!("v{}", i));
    }
    if n < 2 {
        return Ok(graph);
    }

    let num_edges = (edge_factor * n as f64) as usize;
    let mut seen = HashSet::with_capacity(num_edges);

    for _ in 0..num_edges {
        let u = rng.gen_range(0..n);
        let v = rng.gen_range(0..n);
        if u != v && seen.insert((u, v)) {
            let weight = rng.gen_range(0..=max_weight);
            graph.connect(VertexId(u), VertexId(v), weight)?;
        }
    }

    Ok(graph)
}

/// Generates a `width * height` grid where every cell links to its eight neighbors
///
/// Straight moves cost 1.0 and diagonal moves 1.4. Vertex `y * width + x`
/// is the cell at column `x`, row `y`.
pub fn grid_graph(width: usize, height: usize) -> Result<DirectedGraph<OrderedFloat<f64>>> {
    let mut graph = DirectedGraph::with_capacity(width * height);

    for y in 0..height {
        for x in 0..width {
            graph.add_vertex(format!("({},{})", x, y));
        }
    }

    let directions = [
        // Cardinal directions (N, E, S, W)
        (0, -1, 1.0),
        (1, 0, 1.0),
        (0, 1, 1.0),
        (-1, 0, 1.0),
        // Diagonal directions (NE, SE, SW, NW)
        (1, -1, 1.4),
        (1, 1, 1.4),
        (-1, 1, 1.4),
        (-1, -1, 1.4),
    ];

    for y in 0..height {
        for x in 0..width {
            let vertex = VertexId(y * width + x);

            for (dx, dy, cost) in directions {
                let nx = x as i64 + dx;
                let ny = y as i64 + dy;

                if nx >= 0 && ny >= 0 && nx < width as i64 && ny < height as i64 {
                    let neighbor = VertexId(ny as usize * width + nx as usize);
                    graph.connect(vertex, neighbor, OrderedFloat(cost))?;
                }
            }
        }
    }

    Ok(graph)
}
