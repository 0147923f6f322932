use springview_graph::{index_graph, layout_graph};
use springview_model::{Edge, Graph};

fn graph(vertices: &[&str], edges: &[(&str, &str)]) -> Graph {
    Graph {
        vertices: vertices.iter().map(|id| id.to_string()).collect(),
        edges: edges
            .iter()
            .map(|(from, to)| Edge {
                from: from.to_string(),
                to: to.to_string(),
            })
            .collect(),
    }
}

#[test]
fn index_includes_ids_only_seen_in_edges() {
    let index = index_graph(&graph(&["A"], &[("A", "B"), ("B", "C")]));
    assert_eq!(index.ids, vec!["A", "B", "C"]);
    assert_eq!(index.links, vec![(0, 1), (1, 2)]);
}

#[test]
fn index_dedupes_repeated_links() {
    let source = graph(&["A", "B"], &[("A", "B"), ("A", "B")]);
    let index = index_graph(&source);
    assert_eq!(source.edges.len(), 2);
    assert_eq!(index.links, vec![(0, 1)]);
}

#[test]
fn index_of_empty_graph_is_empty() {
    let index = index_graph(&graph(&[], &[]));
    assert!(index.ids.is_empty());
    assert!(index.links.is_empty());
}

#[test]
fn layout_is_deterministic_for_a_seed() {
    let index = index_graph(&graph(&["A", "B", "C", "D"], &[("A", "B"), ("B", "C")]));
    let first = layout_graph(&index, 42);
    let second = layout_graph(&index, 42);
    assert_eq!(first, second);

    let other_seed = layout_graph(&index, 7);
    assert_ne!(first, other_seed);
}

#[test]
fn layout_positions_are_bounded_and_finite() {
    let index = index_graph(&graph(
        &["A", "B", "C", "D", "E"],
        &[("A", "B"), ("B", "C"), ("C", "D"), ("D", "E"), ("E", "A")],
    ));
    let scene = layout_graph(&index, 42);

    for node in &scene.nodes {
        for coordinate in node.position {
            assert!(coordinate.is_finite());
            assert!(coordinate.abs() <= 1.0 + 1e-3);
        }
    }
}

#[test]
fn layout_keeps_distinct_nodes_apart() {
    let index = index_graph(&graph(&["A", "B", "C", "D"], &[("A", "B"), ("C", "D")]));
    let scene = layout_graph(&index, 42);

    for (i, a) in scene.nodes.iter().enumerate() {
        for b in scene.nodes.iter().skip(i + 1) {
            let dx = a.position[0] - b.position[0];
            let dy = a.position[1] - b.position[1];
            assert!((dx * dx + dy * dy).sqrt() > 1e-3);
        }
    }
}

#[test]
fn layout_scene_edges_follow_links() {
    let index = index_graph(&graph(&[], &[("B", "A"), ("B", "A"), ("A", "A")]));
    let scene = layout_graph(&index, 42);

    let pairs: Vec<(&str, &str)> = scene
        .edges
        .iter()
        .map(|edge| (edge.from.as_str(), edge.to.as_str()))
        .collect();
    assert_eq!(pairs, vec![("A", "A"), ("B", "A")]);
}

#[test]
fn layout_of_empty_graph_is_empty_scene() {
    let scene = layout_graph(&index_graph(&graph(&[], &[])), 42);
    assert!(scene.nodes.is_empty());
    assert!(scene.edges.is_empty());
}

#[test]
fn layout_of_single_node_sits_at_the_origin() {
    let scene = layout_graph(&index_graph(&graph(&["only"], &[])), 42);
    assert_eq!(scene.nodes.len(), 1);
    assert_eq!(scene.nodes[0].position, [0.0, 0.0]);
}
