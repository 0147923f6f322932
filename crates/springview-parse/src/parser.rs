use anyhow::{anyhow, Result};
use springview_model::{Edge, Graph};
use std::collections::HashSet;

/// Parses the line-oriented graph format: `vertex <id>` and
/// `edge <from> <to>`, one record per line. Blank lines and unknown record
/// kinds are skipped; a record missing a required token is an error.
pub fn parse_graph(text: &str) -> Result<Graph> {
    let mut vertices: HashSet<String> = HashSet::new();
    let mut edges: Vec<Edge> = Vec::new();

    for line in text.lines() {
        let mut tokens = line.split_whitespace();
        let Some(kind) = tokens.next() else {
            continue;
        };

        match kind {
            "vertex" => {
                let id = tokens
                    .next()
                    .ok_or_else(|| anyhow!("vertex record missing id: {line:?}"))?;
                vertices.insert(id.to_string());
            }
            "edge" => {
                let from = tokens
                    .next()
                    .ok_or_else(|| anyhow!("edge record missing source: {line:?}"))?;
                let to = tokens
                    .next()
                    .ok_or_else(|| anyhow!("edge record missing destination: {line:?}"))?;
                edges.push(Edge {
                    from: from.to_string(),
                    to: to.to_string(),
                });
            }
            _ => {}
        }
    }

    Ok(Graph { vertices, edges })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_record_kinds_are_ignored() {
        let graph = parse_graph("comment this line means nothing\nvertex A\n").unwrap();
        assert_eq!(graph.vertices.len(), 1);
        assert!(graph.edges.is_empty());
    }

    #[test]
    fn extra_tokens_are_ignored() {
        let graph = parse_graph("edge A B trailing junk\n").unwrap();
        assert_eq!(graph.edges.len(), 1);
        assert_eq!(graph.edges[0].from, "A");
        assert_eq!(graph.edges[0].to, "B");
    }

    #[test]
    fn vertex_record_requires_an_id() {
        assert!(parse_graph("vertex\n").is_err());
    }
}
