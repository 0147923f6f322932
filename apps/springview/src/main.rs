use anyhow::{anyhow, Result};
use chrono::{SecondsFormat, Utc};
use clap::Parser;
use serde::Serialize;
use springview_graph::{index_graph, layout_graph};
use springview_parse::read_graph;
use springview_render::{render_scene, write_png, RenderSettings};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::Command;
use std::time::{SystemTime, UNIX_EPOCH};

const LAYOUT_SEED: u64 = 42;

#[derive(Parser)]
#[command(
    name = "springview",
    version,
    about = "Draw a directed graph described in a plain text file"
)]
struct Cli {
    /// Graph description file (`vertex <id>` and `edge <from> <to>` lines)
    #[arg(default_value = "graph.txt")]
    input: PathBuf,

    /// Output image path
    #[arg(long, default_value = "graph.png")]
    out: PathBuf,

    /// Skip opening the image in the system viewer
    #[arg(long)]
    no_open: bool,

    /// Write a JSON run summary to this path
    #[arg(long)]
    receipt: Option<PathBuf>,
}

#[derive(Serialize)]
struct RunReceipt {
    version: String,
    started_at_utc: String,
    finished_at_utc: String,
    input: PathBuf,
    output: PathBuf,
    vertices: usize,
    edges: usize,
    seed: u64,
    host: HostInfo,
}

#[derive(Serialize)]
struct HostInfo {
    os: String,
    arch: String,
}

fn main() {
    if let Err(err) = run() {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let started_at_utc = Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true);

    let graph = read_graph(&cli.input)?;
    if graph.vertices.is_empty() && graph.edges.is_empty() {
        eprintln!("warning: {:?} describes an empty graph", cli.input);
    }

    let index = index_graph(&graph);
    let scene = layout_graph(&index, LAYOUT_SEED);
    let image = render_scene(&scene, &RenderSettings::default());
    write_png(&cli.out, &image).map_err(|err| anyhow!("failed to write {:?}: {}", cli.out, err))?;
    eprintln!(
        "wrote {:?} ({} vertices, {} edges)",
        cli.out,
        index.ids.len(),
        graph.edges.len()
    );

    if let Some(receipt_path) = &cli.receipt {
        let finished_at_utc = Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true);
        let receipt = RunReceipt {
            version: env!("CARGO_PKG_VERSION").to_string(),
            started_at_utc,
            finished_at_utc,
            input: cli.input.clone(),
            output: cli.out.clone(),
            vertices: index.ids.len(),
            edges: graph.edges.len(),
            seed: LAYOUT_SEED,
            host: HostInfo {
                os: std::env::consts::OS.to_string(),
                arch: std::env::consts::ARCH.to_string(),
            },
        };
        write_json(receipt_path, &receipt)?;
    }

    if !cli.no_open {
        open_file(&cli.out)?;
    }

    Ok(())
}

fn open_file(path: &Path) -> Result<()> {
    let mut cmd = if cfg!(target_os = "macos") {
        let mut cmd = Command::new("open");
        cmd.arg(path);
        cmd
    } else if cfg!(target_os = "linux") {
        let mut cmd = Command::new("xdg-open");
        cmd.arg(path);
        cmd
    } else {
        return Err(anyhow!("opening a viewer is not supported on this OS"));
    };

    let status = cmd
        .status()
        .map_err(|err| anyhow!("failed to launch viewer: {err}"))?;
    if status.success() {
        Ok(())
    } else {
        Err(anyhow!("viewer exited with status: {status}"))
    }
}

fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    let json = serde_json::to_vec_pretty(value)?;
    atomic_write(path, &json)
}

fn atomic_write(path: &Path, data: &[u8]) -> Result<()> {
    let parent = path.parent().unwrap_or_else(|| Path::new("."));
    if !parent.as_os_str().is_empty() {
        fs::create_dir_all(parent)
            .map_err(|err| anyhow!("failed to create output directory {:?}: {}", parent, err))?;
    }

    let tmp_path = temp_path(path);
    let mut file = fs::File::create(&tmp_path)
        .map_err(|err| anyhow!("failed to create temp file {:?}: {}", tmp_path, err))?;
    file.write_all(data)
        .map_err(|err| anyhow!("failed to write temp file {:?}: {}", tmp_path, err))?;
    file.sync_all()
        .map_err(|err| anyhow!("failed to sync temp file {:?}: {}", tmp_path, err))?;

    if let Err(err) = fs::rename(&tmp_path, path) {
        let _ = fs::remove_file(&tmp_path);
        return Err(anyhow!("failed to replace output {:?}: {}", path, err));
    }

    if let Ok(dir) = fs::File::open(parent) {
        let _ = dir.sync_all();
    }

    Ok(())
}

fn temp_path(path: &Path) -> PathBuf {
    let parent = path.parent().unwrap_or_else(|| Path::new("."));
    let file_name = path
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or("output");
    let stamp = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_nanos();
    let pid = std::process::id();
    let tmp_name = format!(".{}.part-{}-{}", file_name, pid, stamp);
    parent.join(tmp_name)
}
