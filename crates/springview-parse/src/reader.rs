use crate::parser::parse_graph;
use anyhow::{Context, Result};
use springview_model::Graph;
use std::fs;
use std::path::Path;

pub fn read_graph(path: &Path) -> Result<Graph> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("failed to read graph file {:?}", path))?;
    parse_graph(&contents)
}
