use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;
use hashbrown::HashMap;
use ordered_float::OrderedFloat;
use super::graph::{WeightedGraph, DISCONNECT};
use super::tree::ShortestPathTree;


/// A loopless route from source to target with its total edge cost.
/// Orders ascending by cost, ties broken by insertion id.
#[derive(Clone, Debug)]
pub struct DirectedPath {
    pub id: usize,
    pub cost: f64,
    pub vertices: Vec<usize>,
}

impl Ord for DirectedPath {
    fn cmp(&self, other: &Self) -> Ordering {
        OrderedFloat(self.cost).cmp(&OrderedFloat(other.cost))
            .then(self.id.cmp(&other.id))
    }
}
impl PartialOrd for DirectedPath {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
impl PartialEq for DirectedPath {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}
impl Eq for DirectedPath {}


/// Top-K loopless shortest paths by deviation search.
///
/// Each extracted result spawns candidates on a disposable clone of the
/// graph: the extracted path's vertices are disconnected wholesale, a
/// distance-to-target tree is rebuilt over the remainder, then edges are
/// restored walking backward to the deviation node, patching the tree
/// incrementally and splicing a candidate wherever a finite completion
/// appears. The caller's graph is never mutated.
pub struct KShortestPaths<'a> {
    graph: &'a WeightedGraph,
    source: usize,
    target: usize,
    results: Vec<DirectedPath>,
    candidates: BinaryHeap<Reverse<DirectedPath>>,
    deviation: HashMap<usize, usize>,
    next_id: usize,
}

impl<'a> KShortestPaths<'a> {
    pub fn compute(graph: &WeightedGraph, source: usize, target: usize,
                   k: usize) -> Vec<DirectedPath> {
        if k == 0 || source == target {
            return vec![];
        }
        let mut search = KShortestPaths {
            graph,
            source,
            target,
            results: vec![],
            candidates: BinaryHeap::new(),
            deviation: HashMap::new(),
            next_id: 1,
        };
        search.seed();
        search.run(k);
        search.results
    }

    fn seed(&mut self) {
        let mut reversed = self.graph.clone();
        reversed.reverse();
        let tree = ShortestPathTree::construct(&reversed, self.target);
        if tree.distance(self.source) >= DISCONNECT {
            return;  // target unreachable
        }
        let vertices = chain_to_target(&tree, self.source, self.target);
        let cost = self.graph.cost_along(&vertices);
        self.candidates.push(Reverse(DirectedPath { id: 0, cost, vertices }));
        self.deviation.insert(0, self.source);
    }

    fn run(&mut self, k: usize) {
        while let Some(Reverse(path)) = self.candidates.pop() {
            self.results.push(path.clone());
            if self.results.len() == k {
                break;
            }
            let deviated = self.deviation[&path.id];
            let mut inter = self.graph.clone();
            let mut tree = self.cost_to_target(&mut inter, &path.vertices);

            let verts = &path.vertices;
            let mut i = verts.len() - 2;
            while verts[i] != deviated {
                self.restore_edges(&mut inter, &mut tree, verts,
                                   verts[i], verts[i + 1], false);
                i -= 1;
            }
            self.restore_edges(&mut inter, &mut tree, verts,
                               deviated, verts[i + 1], true);
        }
    }

    /// Disconnects every extracted-path vertex except the target, then
    /// rebuilds the tree rooted at the target over the reversed remainder.
    fn cost_to_target(&self, inter: &mut WeightedGraph, vertices: &[usize])
        -> ShortestPathTree {
        let count = inter.vertices();
        for &vertex in &vertices[..vertices.len() - 1] {
            for next in 0..count {
                if inter.weight(vertex, next) < DISCONNECT {
                    inter.set_weight(vertex, next, DISCONNECT);
                }
            }
        }
        inter.reverse();
        let tree = ShortestPathTree::construct(inter, self.target);
        inter.reverse();
        tree
    }

    fn restore_edges(&mut self, inter: &mut WeightedGraph,
                     tree: &mut ShortestPathTree, vertices: &[usize],
                     start: usize, end: usize, at_deviation: bool) {
        let count = inter.vertices();
        let mut updated = false;

        // restore the off-path arcs leaving `start`
        for next in 0..count {
            if next == end || next == start {
                continue;
            }
            let weight = self.graph.weight(start, next);
            if weight >= DISCONNECT {
                continue;
            }
            if at_deviation && self.edge_has_been_used(start, next) {
                continue;
            }
            inter.set_weight(start, next, weight);
            let onward = tree.distance(next);
            if onward < DISCONNECT && weight + onward < tree.distance(start) {
                tree.set_distance(start, weight + onward);
                tree.set_next_hop(start, next);
                updated = true;
            }
        }

        if tree.distance(start) < DISCONNECT {
            if updated {
                self.relax_predecessors(inter, tree, start);
            }
            self.splice_candidate(tree, vertices, start);
        }

        // restore the on-path arc itself
        let weight = self.graph.weight(start, end);
        inter.set_weight(start, end, weight);
        if tree.distance(start) > weight + tree.distance(end) {
            tree.set_distance(start, weight + tree.distance(end));
            tree.set_next_hop(start, end);
            self.relax_predecessors(inter, tree, start);
        }
    }

    fn splice_candidate(&mut self, tree: &ShortestPathTree,
                        vertices: &[usize], start: usize) {
        let prefix = vertices.iter().take_while(|&&v| v != start).cloned();
        let suffix = chain_to_target(tree, start, self.target);
        let spliced: Vec<usize> = prefix.chain(suffix).collect();
        debug_assert_eq!(spliced.last(), Some(&self.target));
        let cost = self.graph.cost_along(&spliced);
        let id = self.next_id;
        self.next_id += 1;
        self.candidates.push(Reverse(DirectedPath { id, cost, vertices: spliced }));
        self.deviation.insert(id, start);
    }

    /// Bounded work-list relaxation, pushing an improved distance back
    /// through every affected predecessor.
    fn relax_predecessors(&self, inter: &WeightedGraph,
                          tree: &mut ShortestPathTree, from: usize) {
        let count = inter.vertices();
        let mut worklist = vec![from];
        let mut position = 0;
        while position < worklist.len() {
            let current = worklist[position];
            position += 1;
            for vertex in 0..count {
                let weight = inter.weight(vertex, current);
                if weight < DISCONNECT
                    && tree.distance(vertex) > tree.distance(current) + weight {
                    tree.set_distance(vertex, tree.distance(current) + weight);
                    tree.set_next_hop(vertex, current);
                    if !worklist.contains(&vertex) {
                        worklist.push(vertex);
                    }
                }
            }
        }
    }

    /// Checked against previously emitted results only, never in-flight
    /// candidates, regardless of how much prefix they share.
    fn edge_has_been_used(&self, start: usize, end: usize) -> bool {
        self.results.iter().any(|path| {
            path.vertices.iter()
                .position(|&v| v == start)
                .and_then(|at| path.vertices.get(at + 1))
                == Some(&end)
        })
    }
}

fn chain_to_target(tree: &ShortestPathTree, from: usize, target: usize)
    -> Vec<usize> {
    let mut vertices = vec![from];
    let mut current = from;
    while current != target {
        match tree.next_hop(current) {
            Some(hop) => {
                vertices.push(hop);
                current = hop;
            }
            None => break,
        }
    }
    vertices
}


#[cfg(test)]
mod tests {
    use itertools::Itertools;
    use super::*;

    fn chain_graph() -> WeightedGraph {
        let mut graph = WeightedGraph::new(4);
        graph.set_weight(0, 1, 1.0);
        graph.set_weight(1, 2, 1.0);
        graph.set_weight(0, 2, 5.0);
        graph.set_weight(2, 3, 1.0);
        graph
    }
    fn braided_graph() -> WeightedGraph {
        let mut graph = WeightedGraph::new(5);
        graph.set_weight(0, 1, 1.0);
        graph.set_weight(1, 4, 1.0);
        graph.set_weight(0, 2, 2.0);
        graph.set_weight(2, 1, 1.0);
        graph.set_weight(1, 3, 1.0);
        graph.set_weight(3, 4, 1.0);
        graph
    }

    #[test]
    fn it_ranks_the_two_shortest_routes() {
        let graph = chain_graph();
        let paths = KShortestPaths::compute(&graph, 0, 3, 2);
        assert_eq!(paths.len(), 2);
        assert_eq!(paths[0].vertices, vec![0, 1, 2, 3]);
        assert_eq!(paths[0].cost, 3.0);
        assert_eq!(paths[1].vertices, vec![0, 2, 3]);
        assert_eq!(paths[1].cost, 6.0);
    }
    #[test]
    fn it_returns_empty_for_unreachable_target() {
        let mut graph = WeightedGraph::new(4);
        graph.set_weight(0, 1, 1.0);
        graph.set_weight(3, 2, 1.0);
        assert!(KShortestPaths::compute(&graph, 0, 3, 5).is_empty());
    }
    #[test]
    fn it_never_mutates_the_callers_graph() {
        let graph = chain_graph();
        let edges = graph.edges();
        KShortestPaths::compute(&graph, 0, 3, 4);
        assert_eq!(graph.edges(), edges);
        assert_eq!(graph.weight(0, 1), 1.0);
        assert_eq!(graph.weight(0, 2), 5.0);
    }
    #[test]
    fn it_enumerates_every_simple_route_in_order() {
        let graph = braided_graph();
        let paths = KShortestPaths::compute(&graph, 0, 4, 10);
        let routes: Vec<_> = paths.iter()
            .map(|p| (p.vertices.clone(), p.cost))
            .collect();
        assert_eq!(routes, vec![
            (vec![0, 1, 4], 2.0),
            (vec![0, 1, 3, 4], 3.0),
            (vec![0, 2, 1, 4], 4.0),
            (vec![0, 2, 1, 3, 4], 5.0),
        ]);
    }
    #[test]
    fn it_yields_loopless_paths_valid_in_the_original_graph() {
        let graph = braided_graph();
        for path in KShortestPaths::compute(&graph, 0, 4, 10) {
            assert!(path.vertices.iter().all_unique());
            for hop in path.vertices.windows(2) {
                assert!(graph.weight(hop[0], hop[1]) < DISCONNECT);
            }
        }
    }
    #[test]
    fn it_is_deterministic_across_identical_queries() {
        let graph = braided_graph();
        let first = KShortestPaths::compute(&graph, 0, 4, 10);
        let second = KShortestPaths::compute(&graph, 0, 4, 10);
        let ids = |paths: &[DirectedPath]| paths.iter()
            .map(|p| (p.id, p.vertices.clone()))
            .collect::<Vec<_>>();
        assert_eq!(ids(&first), ids(&second));
    }
    // The deviation-node restore skips any edge already traversed by an
    // emitted result, whatever prefix that result took to reach it. On
    // this graph the skip is exactly what keeps duplicates of [0, 1, 4]
    // and [0, 1, 3, 4] out of the candidate set; keep the behavior pinned.
    #[test]
    fn it_withholds_edges_used_by_emitted_results_at_the_deviation_node() {
        let graph = braided_graph();
        let paths = KShortestPaths::compute(&graph, 0, 4, 10);
        assert_eq!(paths.len(), 4);
        assert!(paths.iter().map(|p| &p.vertices).all_unique());
    }
}
