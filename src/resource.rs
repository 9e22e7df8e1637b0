use hashbrown::HashMap;
use crate::algorithm::base::graph::WeightedGraph;
use crate::algorithm::base::tree::ShortestPathTree;
use crate::algorithm::base::yens::{DirectedPath, KShortestPaths};
use crate::network::{Metric, Topology};
use crate::MAX_K;

const Q_BASE: f64 = 8.0;
const Q_SPAN_PENALTY: f64 = 0.04;
const Q_DRIFT: f64 = 0.01;


/// Read-only routing oracle owned by one worker: the span-weighted
/// routing graph, the precomputed all-pairs span-distance table
/// (indexed `from * routers + to`), a route cache, and the black-box
/// signal-quality estimates.
pub struct ResourceManager {
    routers: usize,
    graph: WeightedGraph,
    span_distance: Vec<f64>,
    cache: HashMap<(usize, usize), Vec<DirectedPath>>,
}

impl ResourceManager {
    pub fn new(topology: &Topology) -> Self {
        let routers = topology.routers();
        let graph = topology.weighted_graph(Metric::Spans);
        let mut span_distance = vec![0.0; routers * routers];
        let mut reversed = graph.clone();
        reversed.reverse();
        for root in 0..routers {
            let tree = ShortestPathTree::construct(&reversed, root);
            for from in 0..routers {
                span_distance[from * routers + root] = tree.distance(from);
            }
        }
        ResourceManager { routers, graph, span_distance, cache: HashMap::new() }
    }

    pub fn span_distance(&self, from: usize, to: usize) -> f64 {
        self.span_distance[from * self.routers + to]
    }

    /// Up to [`MAX_K`] loopless candidate routes, cached per pair.
    pub fn k_shortest_paths(&mut self, source: usize, dest: usize)
        -> &[DirectedPath] {
        let ends = (source, dest);
        if !self.cache.contains_key(&ends) {
            let paths = KShortestPaths::compute(&self.graph, source, dest, MAX_K);
            self.cache.insert(ends, paths);
        }
        &self.cache[&ends]
    }

    /// Q-factor estimate at setup time, linear in the path's span count.
    pub fn initial_q(&self, spans: usize) -> f64 {
        Q_BASE - Q_SPAN_PENALTY * spans as f64
    }
    /// Degraded Q-factor after `elapsed` logical time, plus caller jitter.
    pub fn sampled_q(&self, initial: f64, elapsed: f64, jitter: f64) -> f64 {
        initial - Q_DRIFT * elapsed + jitter
    }
}
