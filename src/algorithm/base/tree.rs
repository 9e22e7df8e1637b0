use super::graph::{WeightedGraph, DISCONNECT};
use super::heap::DistanceQueue;


/// Single-root distance/next-hop tree over a [`WeightedGraph`].
///
/// Constructed on a reversed graph rooted at the routing target, so
/// `distance(v)` reads as the cost from `v` to the target and
/// `next_hop(v)` as the next vertex toward it. The deviation search
/// patches both point-wise instead of rebuilding; after any patch it
/// keeps `distance(v) <= distance(h) + weight(v, h)` for `h = next_hop(v)`.
#[derive(Clone, Debug)]
pub struct ShortestPathTree {
    distance: Vec<f64>,
    next_hop: Vec<Option<usize>>,
}

impl ShortestPathTree {
    pub fn construct(graph: &WeightedGraph, root: usize) -> Self {
        let count = graph.vertices();
        let mut tree = ShortestPathTree {
            distance: vec![DISCONNECT; count],
            next_hop: vec![None; count],
        };
        let mut queue = DistanceQueue::new();
        let mut settled = vec![false; count];
        tree.distance[root] = 0.0;
        queue.relax(root, 0.0);

        while let Some((vertex, dist)) = queue.pop() {
            settled[vertex] = true;
            for next in 0..count {
                let weight = graph.weight(vertex, next);
                if weight >= DISCONNECT || settled[next] { continue }
                let relaxed = dist + weight;
                if relaxed < tree.distance[next] {
                    tree.distance[next] = relaxed;
                    tree.next_hop[next] = Some(vertex);
                    queue.relax(next, relaxed);
                }
            }
        }
        tree
    }
    pub fn distance(&self, vertex: usize) -> f64 {
        self.distance[vertex]
    }
    pub fn set_distance(&mut self, vertex: usize, distance: f64) {
        self.distance[vertex] = distance;
    }
    pub fn next_hop(&self, vertex: usize) -> Option<usize> {
        self.next_hop[vertex]
    }
    pub fn set_next_hop(&mut self, vertex: usize, hop: usize) {
        self.next_hop[vertex] = Some(hop);
    }
}
