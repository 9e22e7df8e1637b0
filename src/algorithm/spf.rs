use rand_chacha::ChaChaRng;
use super::Selector;
use crate::network::Topology;
use crate::resource::ResourceManager;


/// Shortest-path-first: always the single cheapest candidate.
pub struct SPF;

impl SPF {
    pub fn new() -> Self {
        SPF
    }
}

impl Selector for SPF {
    fn select(&mut self, source: usize, dest: usize, _topology: &mut Topology,
              resource: &mut ResourceManager, _rng: &mut ChaChaRng)
        -> Option<Vec<usize>> {
        resource.k_shortest_paths(source, dest)
            .first()
            .map(|path| path.vertices.clone())
    }
    fn reinforce(&mut self, _topology: &mut Topology, _path: &[usize],
                 _established: bool) {
    }
}


#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use super::*;
    use crate::network::TopologyKind;

    #[test]
    fn it_takes_the_cheapest_route() {
        let mut topology = Topology::build(TopologyKind::NSF, 21);
        let mut resource = ResourceManager::new(&topology);
        let mut rng = ChaChaRng::seed_from_u64(1);
        let mut spf = SPF::new();
        let path = spf.select(0, 1, &mut topology, &mut resource, &mut rng)
            .unwrap();
        assert_eq!(path, vec![0, 1]);
    }
}
