use rand::Rng;
use rand_chacha::ChaChaRng;
use super::Selector;
use crate::network::Topology;
use crate::resource::ResourceManager;
use crate::utils::config::Parameters;


/// Ant-colony routing: a hop-by-hop walk over the pheromone-weighted
/// edge-choice tables, abandoned on a revisit or when the hop budget
/// (the router count) runs out. Successful attempts deposit pheromone
/// along the route; every attempt evaporates the whole topology.
pub struct ACO {
    alpha: f64,
    beta: f64,
    rho: f64,
}

impl ACO {
    pub fn new(params: &Parameters) -> Self {
        ACO {
            alpha: params.aco_alpha,
            beta: params.aco_beta,
            rho: params.aco_rho,
        }
    }
}

impl Selector for ACO {
    fn select(&mut self, source: usize, dest: usize, topology: &mut Topology,
              resource: &mut ResourceManager, rng: &mut ChaChaRng)
        -> Option<Vec<usize>> {
        let budget = topology.routers();
        let mut visited = vec![false; budget];
        let mut path = vec![source];
        let mut current = source;
        visited[source] = true;

        for _hop in 0..budget {
            topology.generate_aco_probs(current, dest, resource,
                                        self.alpha, self.beta);
            let slot = topology.router(current)
                .choose_edge(rng.gen_range(0.0..1.0));
            let next = topology.router(current).edges[slot].destination;
            if visited[next] {
                return None;
            }
            visited[next] = true;
            path.push(next);
            if next == dest {
                return Some(path);
            }
            current = next;
        }
        None
    }
    fn reinforce(&mut self, topology: &mut Topology, path: &[usize],
                 established: bool) {
        if established && path.len() > 1 {
            let spans = topology.path_spans(path) as f64;
            topology.deposit(path, 1.0 / spans);
        }
        topology.evaporate_all(self.rho);
    }
}


#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use super::*;
    use crate::network::TopologyKind;

    fn params() -> Parameters {
        Parameters::default()
    }

    #[test]
    fn it_walks_hop_by_hop_to_the_destination() {
        let mut topology = Topology::build(TopologyKind::NSF, 21);
        let mut resource = ResourceManager::new(&topology);
        let mut rng = ChaChaRng::seed_from_u64(3);
        let mut aco = ACO::new(&params());
        let mut reached = 0;
        for _ in 0..50 {
            if let Some(path) = aco.select(0, 13, &mut topology,
                                           &mut resource, &mut rng) {
                assert_eq!(path.first(), Some(&0));
                assert_eq!(path.last(), Some(&13));
                assert!(path.len() <= topology.routers());
                reached += 1;
            }
        }
        assert!(reached > 0);
    }
    #[test]
    fn it_evaporates_even_without_a_route() {
        let mut topology = Topology::build(TopologyKind::NSF, 21);
        let mut aco = ACO::new(&params());
        let before = topology.edge_between(0, 1).pheromone();
        aco.reinforce(&mut topology, &[], false);
        assert!(topology.edge_between(0, 1).pheromone() < before);
    }
    #[test]
    fn it_reinforces_successful_routes() {
        let mut topology = Topology::build(TopologyKind::NSF, 21);
        let mut aco = ACO::new(&params());
        let before = topology.edge_between(0, 1).pheromone();
        aco.reinforce(&mut topology, &[0, 1], true);
        let reinforced = topology.edge_between(0, 1).pheromone();
        let idle = topology.edge_between(0, 2).pheromone();
        assert!(reinforced > idle);
        assert!(idle < before);
    }
}
