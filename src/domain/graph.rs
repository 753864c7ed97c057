//! Knowledge graph sample data and a force-directed layout

use serde::{Deserialize, Serialize};
use strum::Display;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Serialize, Deserialize)]
#[strum(serialize_all = "lowercase")]
pub enum NodeKind {
    Hub,
    Event,
    Place,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GraphNode {
    pub id: u32,
    pub kind: NodeKind,
}

/// Undirected edge between two node indices.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GraphLink {
    pub source: usize,
    pub target: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KnowledgeGraph {
    pub nodes: Vec<GraphNode>,
    pub links: Vec<GraphLink>,
}

impl KnowledgeGraph {
    pub fn sample() -> Self {
        use NodeKind::*;
        let kinds = [
            Hub, Hub, Hub, Hub, Event, Event, Place, Place, Event, Place, Event, Place, Event,
            Place, Event,
        ];
        let nodes = kinds
            .iter()
            .enumerate()
            .map(|(i, kind)| GraphNode {
                id: i as u32 + 1,
                kind: *kind,
            })
            .collect();
        let links = [
            (0, 1),
            (1, 2),
            (2, 3),
            (0, 2),
            (0, 4),
            (0, 5),
            (0, 6),
            (0, 7),
            (1, 8),
            (1, 9),
            (1, 10),
            (2, 11),
            (2, 12),
            (2, 13),
            (2, 14),
            (3, 11),
            (3, 12),
            (3, 13),
        ]
        .into_iter()
        .map(|(source, target)| GraphLink { source, target })
        .collect();

        Self { nodes, links }
    }

    pub fn degree(&self, node: usize) -> usize {
        self.links
            .iter()
            .filter(|link| link.source == node || link.target == node)
            .count()
    }
}

/// Tunables for [`force_layout`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ForceParams {
    pub iterations: usize,
    pub initial_temperature: f64,
    pub gravity: f64,
}

impl Default for ForceParams {
    fn default() -> Self {
        Self {
            iterations: 300,
            initial_temperature: 0.1,
            gravity: 0.05,
        }
    }
}

const MIN_DISTANCE: f64 = 0.01;
const MARGIN: f64 = 0.05;

/// Fruchterman–Reingold layout in the unit square.
///
/// Nodes start evenly spaced on a circle so the result is deterministic. The
/// output is rescaled to fill `[MARGIN, 1 - MARGIN]` on both axes.
pub fn force_layout(graph: &KnowledgeGraph, params: ForceParams) -> Vec<(f64, f64)> {
    let n = graph.nodes.len();
    if n == 0 {
        return Vec::new();
    }
    let k = (1.0 / n as f64).sqrt();
    let mut positions: Vec<(f64, f64)> = (0..n)
        .map(|i| {
            let angle = std::f64::consts::TAU * i as f64 / n as f64;
            (0.5 + 0.4 * angle.cos(), 0.5 + 0.4 * angle.sin())
        })
        .collect();

    for step in 0..params.iterations {
        let temperature =
            params.initial_temperature * (1.0 - step as f64 / params.iterations as f64);
        let mut displacement = vec![(0.0f64, 0.0f64); n];

        for i in 0..n {
            for j in (i + 1)..n {
                let (dx, dy) = delta(positions[i], positions[j]);
                let distance = dx.hypot(dy).max(MIN_DISTANCE);
                let force = k * k / distance;
                let (fx, fy) = (dx / distance * force, dy / distance * force);
                displacement[i].0 += fx;
                displacement[i].1 += fy;
                displacement[j].0 -= fx;
                displacement[j].1 -= fy;
            }
        }

        for link in &graph.links {
            let (dx, dy) = delta(positions[link.source], positions[link.target]);
            let distance = dx.hypot(dy).max(MIN_DISTANCE);
            let force = distance * distance / k;
            let (fx, fy) = (dx / distance * force, dy / distance * force);
            displacement[link.source].0 -= fx;
            displacement[link.source].1 -= fy;
            displacement[link.target].0 += fx;
            displacement[link.target].1 += fy;
        }

        for (position, (mut dx, mut dy)) in positions.iter_mut().zip(displacement) {
            dx += (0.5 - position.0) * params.gravity;
            dy += (0.5 - position.1) * params.gravity;
            let length = dx.hypot(dy);
            if length > 0.0 {
                let limited = length.min(temperature);
                position.0 += dx / length * limited;
                position.1 += dy / length * limited;
            }
        }
    }

    normalize(positions)
}

fn delta(a: (f64, f64), b: (f64, f64)) -> (f64, f64) {
    (a.0 - b.0, a.1 - b.1)
}

fn normalize(positions: Vec<(f64, f64)>) -> Vec<(f64, f64)> {
    let (min_x, max_x) = extent(positions.iter().map(|p| p.0));
    let (min_y, max_y) = extent(positions.iter().map(|p| p.1));
    let scale = |v: f64, min: f64, max: f64| {
        if max - min > f64::EPSILON {
            MARGIN + (v - min) / (max - min) * (1.0 - 2.0 * MARGIN)
        } else {
            0.5
        }
    };
    positions
        .into_iter()
        .map(|(x, y)| (scale(x, min_x, max_x), scale(y, min_y, max_y)))
        .collect()
}

fn extent(values: impl Iterator<Item = f64>) -> (f64, f64) {
    values.fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
        (lo.min(v), hi.max(v))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_graph_shape() {
        let graph = KnowledgeGraph::sample();
        assert_eq!(graph.nodes.len(), 15);
        assert_eq!(graph.links.len(), 18);
        assert_eq!(graph.degree(0), 6);
        assert_eq!(graph.degree(14), 1);
        assert!(graph
            .links
            .iter()
            .all(|link| link.source < 15 && link.target < 15));
    }

    #[test]
    fn test_layout_is_deterministic_and_in_unit_square() {
        let graph = KnowledgeGraph::sample();
        let first = force_layout(&graph, ForceParams::default());
        let second = force_layout(&graph, ForceParams::default());

        assert_eq!(first, second);
        assert_eq!(first.len(), graph.nodes.len());
        for (x, y) in &first {
            assert!(x.is_finite() && y.is_finite());
            assert!((0.0..=1.0).contains(x), "x = {x}");
            assert!((0.0..=1.0).contains(y), "y = {y}");
        }
    }

    #[test]
    fn test_layout_of_empty_and_single_node_graphs() {
        let empty = KnowledgeGraph {
            nodes: vec![],
            links: vec![],
        };
        assert!(force_layout(&empty, ForceParams::default()).is_empty());

        let single = KnowledgeGraph {
            nodes: vec![GraphNode {
                id: 1,
                kind: NodeKind::Hub,
            }],
            links: vec![],
        };
        assert_eq!(
            force_layout(&single, ForceParams::default()),
            vec![(0.5, 0.5)]
        );
    }
}
