use springview_model::{Graph, GraphIndex};
use std::collections::{HashMap, HashSet};

/// Builds the directed graph structure behind a parsed description.
/// Ids are the union of declared vertices and edge endpoints, so an edge
/// can introduce nodes the file never declared. Links are deduplicated:
/// a repeated edge in the sequence is a single connection here.
pub fn index_graph(graph: &Graph) -> GraphIndex {
    let mut id_set: HashSet<&str> = graph.vertices.iter().map(String::as_str).collect();
    for edge in &graph.edges {
        id_set.insert(edge.from.as_str());
        id_set.insert(edge.to.as_str());
    }

    let mut ids: Vec<String> = id_set.into_iter().map(str::to_string).collect();
    ids.sort();

    let index_of: HashMap<&str, usize> = ids
        .iter()
        .enumerate()
        .map(|(index, id)| (id.as_str(), index))
        .collect();

    let mut seen: HashSet<(usize, usize)> = HashSet::new();
    let mut links: Vec<(usize, usize)> = Vec::new();
    for edge in &graph.edges {
        let pair = (index_of[edge.from.as_str()], index_of[edge.to.as_str()]);
        if seen.insert(pair) {
            links.push(pair);
        }
    }
    links.sort_unstable();

    GraphIndex { ids, links }
}
