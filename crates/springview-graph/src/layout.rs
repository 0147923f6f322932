use springview_model::{GraphIndex, Scene, SceneEdge, SceneNode};

const ITERATIONS: u32 = 50;
// Optimal pairwise distance; larger values spread the nodes out.
const SPREAD: f32 = 1.5;
const INITIAL_TEMPERATURE: f32 = 0.1;
const MIN_DISTANCE: f32 = 0.01;

/// Computes a Fruchterman-Reingold force-directed layout. Initial positions
/// come from a generator seeded with `seed`, drawn in sorted-id order, so
/// equal inputs and seeds give equal scenes. The result is centered on the
/// origin with the largest absolute coordinate scaled to 1.
pub fn layout_graph(index: &GraphIndex, seed: u64) -> Scene {
    if index.ids.is_empty() {
        return Scene {
            nodes: Vec::new(),
            edges: Vec::new(),
        };
    }

    let n = index.ids.len();
    let mut rng = Rng::new(seed);
    let mut positions: Vec<[f32; 2]> = (0..n)
        .map(|_| [rng.next_f32(), rng.next_f32()])
        .collect();

    let mut temperature = INITIAL_TEMPERATURE;
    let cooling = temperature / (ITERATIONS as f32 + 1.0);

    for _ in 0..ITERATIONS {
        let mut displacement = vec![[0.0f32; 2]; n];

        for i in 0..n {
            for j in (i + 1)..n {
                let dx = positions[i][0] - positions[j][0];
                let dy = positions[i][1] - positions[j][1];
                let distance = (dx * dx + dy * dy).sqrt().max(MIN_DISTANCE);
                let force = SPREAD * SPREAD / distance;
                let ux = dx / distance;
                let uy = dy / distance;
                displacement[i][0] += ux * force;
                displacement[i][1] += uy * force;
                displacement[j][0] -= ux * force;
                displacement[j][1] -= uy * force;
            }
        }

        for &(a, b) in &index.links {
            if a == b {
                continue;
            }
            let dx = positions[a][0] - positions[b][0];
            let dy = positions[a][1] - positions[b][1];
            let distance = (dx * dx + dy * dy).sqrt().max(MIN_DISTANCE);
            let force = distance * distance / SPREAD;
            let ux = dx / distance;
            let uy = dy / distance;
            displacement[a][0] -= ux * force;
            displacement[a][1] -= uy * force;
            displacement[b][0] += ux * force;
            displacement[b][1] += uy * force;
        }

        for i in 0..n {
            let dx = displacement[i][0];
            let dy = displacement[i][1];
            let length = (dx * dx + dy * dy).sqrt();
            if length > 0.0 {
                let step = length.min(temperature);
                positions[i][0] += dx / length * step;
                positions[i][1] += dy / length * step;
            }
        }

        temperature -= cooling;
    }

    center_and_rescale(&mut positions);

    let nodes: Vec<SceneNode> = index
        .ids
        .iter()
        .zip(positions)
        .map(|(id, position)| SceneNode {
            id: id.clone(),
            position,
        })
        .collect();

    let edges: Vec<SceneEdge> = index
        .links
        .iter()
        .map(|&(a, b)| SceneEdge {
            from: index.ids[a].clone(),
            to: index.ids[b].clone(),
        })
        .collect();

    Scene { nodes, edges }
}

fn center_and_rescale(positions: &mut [[f32; 2]]) {
    let n = positions.len() as f32;
    let cx = positions.iter().map(|p| p[0]).sum::<f32>() / n;
    let cy = positions.iter().map(|p| p[1]).sum::<f32>() / n;
    for position in positions.iter_mut() {
        position[0] -= cx;
        position[1] -= cy;
    }

    let max_abs = positions
        .iter()
        .flat_map(|p| [p[0].abs(), p[1].abs()])
        .fold(0.0f32, f32::max);
    if max_abs > 0.0 {
        for position in positions.iter_mut() {
            position[0] /= max_abs;
            position[1] /= max_abs;
        }
    }
}

struct Rng {
    state: u64,
}

impl Rng {
    fn new(seed: u64) -> Self {
        let state = if seed == 0 { 0xdeadbeefcafebabe } else { seed };
        Self { state }
    }

    fn next_u32(&mut self) -> u32 {
        self.state = self
            .state
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1);
        (self.state >> 32) as u32
    }

    fn next_f32(&mut self) -> f32 {
        let value = self.next_u32();
        value as f32 / u32::MAX as f32
    }
}
