use super::edge::Edge;


/// One optical router: its outgoing edges, an adjacency lookup from
/// destination router to edge slot, and the two cumulative probability
/// tables regenerated by the topology whenever pheromones or the
/// destination policy change. Failure counters grow monotonically and
/// reset only at report checkpoints.
#[derive(Clone, Debug, Default)]
pub struct Router {
    pub index: usize,
    pub edges: Vec<Edge>,
    adjacency: Vec<Option<usize>>,
    destination_probs: Vec<f64>,
    aco_probs: Vec<f64>,
    pub quality_failures: usize,
    pub wave_failures: usize,
    pub workstations: usize,
    pub attempts_from: usize,
    pub attempts_to: usize,
    pub successes_from: usize,
    pub successes_to: usize,
    pub total_q_from: f64,
    pub total_q_to: f64,
}

impl Router {
    pub fn new(index: usize, routers: usize) -> Self {
        Router {
            index,
            adjacency: vec![None; routers],
            ..Default::default()
        }
    }
    pub fn add_edge(&mut self, edge: Edge) {
        debug_assert_eq!(edge.source, self.index);
        self.adjacency[edge.destination] = Some(self.edges.len());
        self.edges.push(edge);
    }
    /// Slot of the outgoing edge reaching `destination` directly.
    pub fn edge_slot(&self, destination: usize) -> Option<usize> {
        self.adjacency[destination]
    }
    pub fn edge_to(&self, destination: usize) -> Option<&Edge> {
        self.adjacency[destination].map(|slot| &self.edges[slot])
    }

    pub fn set_destination_probs(&mut self, cumulative: Vec<f64>) {
        debug_assert_eq!(cumulative.last(), Some(&1.0));
        self.destination_probs = cumulative;
    }
    /// First router whose cumulative probability strictly exceeds `p`.
    /// `p` below the first entry maps to router 0; zero-width intervals
    /// (the router itself among them) are never selected.
    pub fn generate_destination(&self, p: f64) -> usize {
        debug_assert!(!self.destination_probs.is_empty());
        self.destination_probs.iter()
            .position(|&cumulative| p < cumulative)
            .unwrap_or(self.destination_probs.len() - 1)
    }

    pub fn set_aco_probs(&mut self, cumulative: Vec<f64>) {
        debug_assert_eq!(cumulative.last(), Some(&1.0));
        self.aco_probs = cumulative;
    }
    pub fn aco_probs(&self) -> &[f64] {
        &self.aco_probs
    }
    /// First edge slot with `p <= cumulative`; slot 0 owns the inclusive
    /// lower boundary.
    pub fn choose_edge(&self, p: f64) -> usize {
        debug_assert!(!self.aco_probs.is_empty());
        self.aco_probs.iter()
            .position(|&cumulative| p <= cumulative)
            .unwrap_or(self.aco_probs.len() - 1)
    }

    pub fn reset_failures(&mut self) {
        self.quality_failures = 0;
        self.wave_failures = 0;
    }
    pub fn reset_statistics(&mut self) {
        self.workstations = 0;
        self.attempts_from = 0;
        self.attempts_to = 0;
        self.successes_from = 0;
        self.successes_to = 0;
        self.total_q_from = 0.0;
        self.total_q_to = 0.0;
        for edge in self.edges.iter_mut() {
            edge.reset_usage();
        }
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    #[test]
    fn it_selects_destinations_at_table_boundaries() {
        let mut router = Router::new(0, 4);
        router.set_destination_probs(vec![0.0, 0.5, 0.75, 1.0]);
        assert_eq!(router.generate_destination(0.0), 1);
        assert_eq!(router.generate_destination(0.4), 1);
        assert_eq!(router.generate_destination(0.5), 2);
        assert_eq!(router.generate_destination(0.999), 3);
    }
    #[test]
    fn it_chooses_edges_with_inclusive_lower_boundary() {
        let mut router = Router::new(0, 3);
        router.add_edge(Edge::new(0, 1, 1, 2));
        router.add_edge(Edge::new(0, 2, 1, 2));
        router.set_aco_probs(vec![0.25, 1.0]);
        assert_eq!(router.choose_edge(0.1), 0);
        assert_eq!(router.choose_edge(0.25), 0);
        assert_eq!(router.choose_edge(0.5), 1);
        assert_eq!(router.choose_edge(1.0), 1);
    }
    #[test]
    fn it_maps_destinations_to_edge_slots() {
        let mut router = Router::new(1, 4);
        router.add_edge(Edge::new(1, 3, 2, 2));
        router.add_edge(Edge::new(1, 0, 1, 2));
        assert_eq!(router.edge_slot(3), Some(0));
        assert_eq!(router.edge_slot(0), Some(1));
        assert_eq!(router.edge_slot(2), None);
    }
}
