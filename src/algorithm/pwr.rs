use rand::Rng;
use rand_chacha::ChaChaRng;
use super::Selector;
use crate::network::Topology;
use crate::resource::ResourceManager;


/// Probability-weighted routing: one draw over the K cheapest
/// candidates, each weighted by the inverse of its cost.
pub struct PWR;

impl PWR {
    pub fn new() -> Self {
        PWR
    }
}

impl Selector for PWR {
    fn select(&mut self, source: usize, dest: usize, _topology: &mut Topology,
              resource: &mut ResourceManager, rng: &mut ChaChaRng)
        -> Option<Vec<usize>> {
        let paths = resource.k_shortest_paths(source, dest);
        if paths.is_empty() {
            return None;
        }
        let weights: Vec<f64> = paths.iter()
            .map(|path| 1.0 / path.cost)
            .collect();
        let total: f64 = weights.iter().sum();
        let draw = rng.gen_range(0.0..1.0) * total;
        let mut running = 0.0;
        for (path, weight) in paths.iter().zip(weights) {
            running += weight;
            if draw < running {
                return Some(path.vertices.clone());
            }
        }
        paths.last().map(|path| path.vertices.clone())
    }
    fn reinforce(&mut self, _topology: &mut Topology, _path: &[usize],
                 _established: bool) {
    }
}
