pub const DISCONNECT: f64 = f64::INFINITY;


/// Adjacency-matrix directed graph with real edge weights.
///
/// `DISCONNECT` marks an absent edge. The deviation search clones this
/// graph and mutates only the clone; callers keep the original intact.
#[derive(Clone, Debug)]
pub struct WeightedGraph {
    weights: Vec<f64>,
    vertices: usize,
    edges: usize,
}

impl WeightedGraph {
    pub fn new(vertices: usize) -> Self {
        let weights = vec![DISCONNECT; vertices * vertices];
        WeightedGraph { weights, vertices, edges: 0 }
    }
    pub fn vertices(&self) -> usize {
        self.vertices
    }
    pub fn edges(&self) -> usize {
        self.edges
    }
    pub fn weight(&self, from: usize, to: usize) -> f64 {
        debug_assert!(from < self.vertices && to < self.vertices);
        self.weights[from * self.vertices + to]
    }
    pub fn set_weight(&mut self, from: usize, to: usize, weight: f64) {
        debug_assert!(from < self.vertices && to < self.vertices);
        let slot = &mut self.weights[from * self.vertices + to];
        match (*slot < DISCONNECT, weight < DISCONNECT) {
            (false, true) => self.edges += 1,
            (true, false) => self.edges -= 1,
            _             => (),
        }
        *slot = weight;
    }
    /// Swaps every `(i, j)`/`(j, i)` weight pair in place.
    pub fn reverse(&mut self) {
        for i in 0..self.vertices {
            for j in 0..i {
                self.weights.swap(i * self.vertices + j, j * self.vertices + i);
            }
        }
    }
    pub fn cost_along(&self, path: &[usize]) -> f64 {
        path.windows(2)
            .map(|hop| self.weight(hop[0], hop[1]))
            .sum()
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    #[test]
    fn it_maintains_edge_counter() {
        let mut graph = WeightedGraph::new(3);
        graph.set_weight(0, 1, 1.0);
        graph.set_weight(1, 2, 2.0);
        assert_eq!(graph.edges(), 2);
        graph.set_weight(0, 1, 3.0);
        assert_eq!(graph.edges(), 2);
        graph.set_weight(0, 1, DISCONNECT);
        assert_eq!(graph.edges(), 1);
    }
    #[test]
    fn it_reverses_in_place() {
        let mut graph = WeightedGraph::new(3);
        graph.set_weight(0, 1, 1.0);
        graph.set_weight(1, 2, 2.0);
        graph.reverse();
        assert_eq!(graph.weight(1, 0), 1.0);
        assert_eq!(graph.weight(2, 1), 2.0);
        assert_eq!(graph.weight(0, 1), DISCONNECT);
        graph.reverse();
        assert_eq!(graph.weight(0, 1), 1.0);
    }
}
