use std::str::FromStr;
use serde::Deserialize;
use super::edge::Edge;
use super::router::Router;
use crate::algorithm::base::graph::WeightedGraph;
use crate::resource::ResourceManager;
use crate::utils::error::Error;


/// Per-link span counts of the 14-router NSF network.
const NSF_LINKS: [(usize, usize, usize); 21] = [
    (0, 1, 11), (0, 2, 12), (0, 3, 16), (1, 2, 12), (1, 7, 28),
    (2, 5, 19), (3, 4, 6), (3, 10, 21), (4, 5, 7), (4, 6, 7),
    (5, 9, 13), (5, 13, 29), (6, 7, 7), (7, 8, 7), (8, 9, 9),
    (8, 11, 5), (8, 12, 8), (10, 11, 8), (10, 13, 10), (11, 12, 8),
    (12, 13, 6),
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TopologyKind {
    NSF,
    Mesh,
    Mesh6x6,
    Mesh8x8,
    Mesh10x10,
}

impl TopologyKind {
    pub fn name(&self) -> &'static str {
        match self {
            TopologyKind::NSF       => "NSF",
            TopologyKind::Mesh      => "Mesh",
            TopologyKind::Mesh6x6   => "Mesh6x6",
            TopologyKind::Mesh8x8   => "Mesh8x8",
            TopologyKind::Mesh10x10 => "Mesh10x10",
        }
    }
}

impl FromStr for TopologyKind {
    type Err = Error;
    fn from_str(name: &str) -> Result<Self, Error> {
        match name {
            "NSF"       => Ok(TopologyKind::NSF),
            "Mesh"      => Ok(TopologyKind::Mesh),
            "Mesh6x6"   => Ok(TopologyKind::Mesh6x6),
            "Mesh8x8"   => Ok(TopologyKind::Mesh8x8),
            "Mesh10x10" => Ok(TopologyKind::Mesh10x10),
            _           => Err(Error::UnknownTopology(name.to_owned())),
        }
    }
}

/// Which edge attribute weighs the routing graph.
#[derive(Clone, Copy, Debug)]
pub enum Metric {
    Hops,
    Spans,
}

/// Weighting policy for the destination-choice table.
#[derive(Clone, Copy, Debug, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DestDistribution {
    Distance,
    InverseDistance,
    Uniform,
}

/// Router arena for one simulated network. Every cross-reference is a
/// plain index into `routers`; edges live inside their source router.
#[derive(Clone, Debug)]
pub struct Topology {
    pub kind: TopologyKind,
    pub routers: Vec<Router>,
    pub wavelengths: usize,
}

impl Topology {
    pub fn build(kind: TopologyKind, wavelengths: usize) -> Self {
        match kind {
            TopologyKind::NSF       => Self::nsf(wavelengths),
            TopologyKind::Mesh      => Self::mesh(kind, 5, wavelengths),
            TopologyKind::Mesh6x6   => Self::mesh(kind, 6, wavelengths),
            TopologyKind::Mesh8x8   => Self::mesh(kind, 8, wavelengths),
            TopologyKind::Mesh10x10 => Self::mesh(kind, 10, wavelengths),
        }
    }
    fn nsf(wavelengths: usize) -> Self {
        let mut topology = Topology::empty(TopologyKind::NSF, 14, wavelengths);
        for &(end0, end1, spans) in NSF_LINKS.iter() {
            topology.link(end0, end1, spans);
        }
        topology
    }
    fn mesh(kind: TopologyKind, side: usize, wavelengths: usize) -> Self {
        let mut topology = Topology::empty(kind, side * side, wavelengths);
        for row in 0..side {
            for col in 0..side {
                let here = row * side + col;
                if col + 1 < side {
                    topology.link(here, here + 1, 1);
                }
                if row + 1 < side {
                    topology.link(here, here + side, 1);
                }
            }
        }
        topology
    }
    fn empty(kind: TopologyKind, routers: usize, wavelengths: usize) -> Self {
        let routers = (0..routers)
            .map(|index| Router::new(index, routers))
            .collect();
        Topology { kind, routers, wavelengths }
    }
    fn link(&mut self, end0: usize, end1: usize, spans: usize) {
        let wavelengths = self.wavelengths;
        self.routers[end0].add_edge(Edge::new(end0, end1, spans, wavelengths));
        self.routers[end1].add_edge(Edge::new(end1, end0, spans, wavelengths));
    }

    pub fn routers(&self) -> usize {
        self.routers.len()
    }
    pub fn router(&self, index: usize) -> &Router {
        &self.routers[index]
    }
    pub fn router_mut(&mut self, index: usize) -> &mut Router {
        &mut self.routers[index]
    }
    pub fn edge_between(&self, source: usize, destination: usize) -> &Edge {
        self.routers[source].edge_to(destination)
            .expect("edge not found")
    }

    /// Projects the topology onto a routing graph under the given metric.
    pub fn weighted_graph(&self, metric: Metric) -> WeightedGraph {
        let mut graph = WeightedGraph::new(self.routers.len());
        for router in self.routers.iter() {
            for edge in router.edges.iter() {
                let weight = match metric {
                    Metric::Hops  => 1.0,
                    Metric::Spans => edge.spans() as f64,
                };
                graph.set_weight(edge.source, edge.destination, weight);
            }
        }
        graph
    }

    pub fn distribute_workstations(&mut self, total: usize) {
        let count = self.routers.len();
        for nth in 0..total {
            self.routers[nth % count].workstations += 1;
        }
    }

    /// Rebuilds every router's destination-choice table from the span
    /// distances under the configured weighting policy.
    pub fn generate_probabilities(&mut self, policy: DestDistribution,
                                  resource: &ResourceManager) {
        let count = self.routers.len();
        for here in 0..count {
            let weights: Vec<f64> = (0..count)
                .map(|dest| match (dest == here, policy) {
                    (true, _)                              => 0.0,
                    (_, DestDistribution::Distance)        =>
                        resource.span_distance(here, dest),
                    (_, DestDistribution::InverseDistance) =>
                        1.0 / resource.span_distance(here, dest),
                    (_, DestDistribution::Uniform)         => 1.0,
                })
                .collect();
            self.routers[here].set_destination_probs(cumulative(weights));
        }
    }

    /// Rebuilds the pheromone-weighted edge-choice table of one router
    /// toward `dest`: `tau^alpha * eta^beta` per outgoing edge, where
    /// `eta` is 1 for a direct edge and otherwise the inverse span
    /// distance from the edge's far end to `dest`.
    pub fn generate_aco_probs(&mut self, here: usize, dest: usize,
                              resource: &ResourceManager,
                              alpha: f64, beta: f64) {
        let router = &self.routers[here];
        let weights: Vec<f64> = router.edges.iter()
            .map(|edge| {
                let tau = edge.pheromone();
                let eta = match edge.destination == dest {
                    true  => 1.0,
                    false => 1.0 / resource.span_distance(edge.destination, dest),
                };
                tau.powf(alpha) * eta.powf(beta)
            })
            .collect();
        self.routers[here].set_aco_probs(cumulative(weights));
    }

    /// First-fit search for one wavelength free on every hop of `path`.
    pub fn common_wavelength(&self, path: &[usize]) -> Option<usize> {
        (0..self.wavelengths).find(|&wavelength| {
            path.windows(2).all(|hop| {
                self.edge_between(hop[0], hop[1]).is_free(wavelength)
            })
        })
    }
    pub fn reserve(&mut self, path: &[usize], wavelength: usize) {
        for hop in path_hops(path) {
            let slot = self.routers[hop.0].edge_slot(hop.1)
                .expect("edge not found");
            self.routers[hop.0].edges[slot].reserve(wavelength);
        }
    }
    pub fn release(&mut self, path: &[usize], wavelength: usize) {
        for hop in path_hops(path) {
            let slot = self.routers[hop.0].edge_slot(hop.1)
                .expect("edge not found");
            self.routers[hop.0].edges[slot].release(wavelength);
        }
    }
    pub fn path_spans(&self, path: &[usize]) -> usize {
        path.windows(2)
            .map(|hop| self.edge_between(hop[0], hop[1]).spans())
            .sum()
    }
    pub fn deposit(&mut self, path: &[usize], amount: f64) {
        for hop in path_hops(path) {
            let slot = self.routers[hop.0].edge_slot(hop.1)
                .expect("edge not found");
            self.routers[hop.0].edges[slot].deposit(amount);
        }
    }
    pub fn evaporate_all(&mut self, rho: f64) {
        for router in self.routers.iter_mut() {
            for edge in router.edges.iter_mut() {
                edge.evaporate(rho);
            }
        }
    }
}

fn path_hops(path: &[usize]) -> Vec<(usize, usize)> {
    path.windows(2).map(|hop| (hop[0], hop[1])).collect()
}

/// Normalizes weights into a cumulative distribution; the last entry is
/// forced to exactly 1.0 to absorb floating-point drift.
fn cumulative(weights: Vec<f64>) -> Vec<f64> {
    let total: f64 = weights.iter().sum();
    debug_assert!(total > 0.0);
    let mut running = 0.0;
    let mut table: Vec<f64> = weights.into_iter()
        .map(|weight| {
            running += weight / total;
            running
        })
        .collect();
    if let Some(last) = table.last_mut() {
        *last = 1.0;
    }
    table
}
