// visitation.rs
// ──────────────────────────────────────────────────────────────────────────────
// Per-traversal bookkeeping layered over an immutable `Graph`: which vertices
// have been reached and how many parallel edges between each pair have been
// used.  A `Visitation` borrows its graph, so any number of traversals can run
// side by side without sharing state, and the graph cannot change under them.
// ──────────────────────────────────────────────────────────────────────────────
use super::graph::Graph;
use crate::walk::Walk;

/// Mutable visitation state for one traversal of a [`Graph`].
///
/// Edge counters are signed so that replaying an invalid walk shows up as a
/// negative unvisited count instead of wrapping around.
#[derive(Clone, Debug)]
pub struct Visitation<'g> {
    graph: &'g Graph,
    visited_vertex: Vec<bool>,
    unvisited_vertex_degree: Vec<i64>,
    visited_edges: Vec<i64>,
    unvisited_edges: Vec<i64>,
}

impl<'g> Visitation<'g> {
    /// Creates a pristine visitation of `graph`.
    pub fn new(graph: &'g Graph) -> Self {
        let order = graph.total_vertices();
        let mut visitation = Self {
            graph,
            visited_vertex: vec![false; order],
            unvisited_vertex_degree: vec![0; order],
            visited_edges: vec![0; order * order],
            unvisited_edges: vec![0; order * order],
        };
        visitation.reset();
        visitation
    }

    pub fn graph(&self) -> &'g Graph {
        self.graph
    }

    /// Restores the pristine state: nothing visited, every edge unvisited.
    pub fn reset(&mut self) {
        let graph = self.graph;
        self.visited_vertex.fill(false);
        self.visited_edges.fill(0);
        for (slot, &degree) in self
            .unvisited_vertex_degree
            .iter_mut()
            .zip(graph.degrees())
        {
            *slot = degree as i64;
        }
        for (slot, &count) in self
            .unvisited_edges
            .iter_mut()
            .zip(graph.all_edges().rows().flatten())
        {
            *slot = i64::from(count);
        }
    }

    fn index(&self, a: usize, b: usize) -> Option<usize> {
        let order = self.graph.total_vertices();
        if a < order && b < order {
            Some(a * order + b)
        } else {
            None
        }
    }

    /// Marks one edge between `a` and `b` as visited.
    ///
    /// Both `(a, b)` and `(b, a)` are updated; a self-loop is updated once.
    /// Unknown vertices are ignored.
    pub fn visit_edge(&mut self, a: usize, b: usize) {
        self.shift_edge(a, b, 1);
    }

    /// Undoes one [`Visitation::visit_edge`] between `a` and `b`.
    pub fn unvisit_edge(&mut self, a: usize, b: usize) {
        self.shift_edge(a, b, -1);
    }

    fn shift_edge(&mut self, a: usize, b: usize, delta: i64) {
        let (Some(forward), Some(backward)) = (self.index(a, b), self.index(b, a)) else {
            return;
        };
        self.visited_edges[forward] += delta;
        self.unvisited_edges[forward] -= delta;
        if a != b {
            self.visited_edges[backward] += delta;
            self.unvisited_edges[backward] -= delta;
        }
        // Each endpoint loses one unit of unvisited degree, a loop loses two.
        self.unvisited_vertex_degree[a] -= delta;
        self.unvisited_vertex_degree[b] -= delta;
    }

    /// Marks `vertex` as visited. Unknown vertices are ignored.
    pub fn mark_visited(&mut self, vertex: usize) {
        if let Some(slot) = self.visited_vertex.get_mut(vertex) {
            *slot = true;
        }
    }

    /// Marks `vertex` as unvisited. Unknown vertices are ignored.
    pub fn mark_unvisited(&mut self, vertex: usize) {
        if let Some(slot) = self.visited_vertex.get_mut(vertex) {
            *slot = false;
        }
    }

    pub fn is_visited(&self, vertex: usize) -> bool {
        self.visited_vertex.get(vertex).copied().unwrap_or(false)
    }

    /// `true` when every vertex of the graph has been visited.
    pub fn all_visited(&self) -> bool {
        self.visited_vertex.iter().all(|&visited| visited)
    }

    pub fn visited_edges_between(&self, a: usize, b: usize) -> i64 {
        self.index(a, b).map_or(0, |i| self.visited_edges[i])
    }

    pub fn unvisited_edges_between(&self, a: usize, b: usize) -> i64 {
        self.index(a, b).map_or(0, |i| self.unvisited_edges[i])
    }

    /// Degree of `vertex` counting only unvisited edges.
    pub fn unvisited_degree_of(&self, vertex: usize) -> i64 {
        self.unvisited_vertex_degree
            .get(vertex)
            .copied()
            .unwrap_or(0)
    }

    /// Depth-first visit of the vertices reachable from `start`.
    ///
    /// Each reached vertex is marked visited and, when `walk` is given,
    /// appended to it in preorder. Neighbours are tried in ascending index
    /// order. Only vertex marks change; edge counters are left alone.
    /// An unknown `start` is ignored.
    pub fn depth_first_visit(&mut self, start: usize, mut walk: Option<&mut Walk>) {
        let graph = self.graph;
        let order = graph.total_vertices();
        if start >= order {
            return;
        }
        let edges = graph.all_edges();

        // (vertex, next neighbour to try)
        let mut stack: Vec<(usize, usize)> = Vec::new();
        self.enter(start, walk.as_deref_mut());
        stack.push((start, 0));

        while let Some((vertex, cursor)) = stack.last_mut() {
            let vertex = *vertex;
            let next = (*cursor..order).find(|&candidate| {
                edges.get(vertex, candidate) > 0 && !self.visited_vertex[candidate]
            });
            match next {
                Some(neighbor) => {
                    *cursor = neighbor + 1;
                    self.enter(neighbor, walk.as_deref_mut());
                    stack.push((neighbor, 0));
                }
                None => {
                    stack.pop();
                }
            }
        }
    }

    fn enter(&mut self, vertex: usize, walk: Option<&mut Walk>) {
        self.visited_vertex[vertex] = true;
        if let Some(walk) = walk {
            walk.append(vertex);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn graph(rows: &[&[i64]]) -> Graph {
        Graph::from_matrix(rows.iter().map(|r| r.to_vec()).collect()).unwrap()
    }

    #[test]
    fn fresh_visitation_mirrors_topology() {
        let g = graph(&[&[1, 2], &[2, 0]]);
        let v = g.visitation();
        assert_eq!(v.unvisited_edges_between(0, 1), 2);
        assert_eq!(v.unvisited_edges_between(0, 0), 1);
        assert_eq!(v.visited_edges_between(0, 1), 0);
        assert_eq!(v.unvisited_degree_of(0), 4);
        assert!(!v.is_visited(0));
    }

    #[test]
    fn visit_edge_is_symmetric() {
        let g = graph(&[&[0, 2], &[2, 0]]);
        let mut v = g.visitation();
        v.visit_edge(0, 1);
        assert_eq!(v.visited_edges_between(0, 1), 1);
        assert_eq!(v.visited_edges_between(1, 0), 1);
        assert_eq!(v.unvisited_edges_between(1, 0), 1);
        assert_eq!(v.unvisited_degree_of(0), 1);
        assert_eq!(v.unvisited_degree_of(1), 1);

        v.unvisit_edge(1, 0);
        assert_eq!(v.visited_edges_between(0, 1), 0);
        assert_eq!(v.unvisited_edges_between(0, 1), 2);
        assert_eq!(v.unvisited_degree_of(1), 2);
    }

    #[test]
    fn self_loop_updates_once() {
        let g = graph(&[&[2]]);
        let mut v = g.visitation();
        v.visit_edge(0, 0);
        assert_eq!(v.visited_edges_between(0, 0), 1);
        assert_eq!(v.unvisited_edges_between(0, 0), 1);
        assert_eq!(v.unvisited_degree_of(0), 2);
    }

    #[test]
    fn over_visiting_goes_negative() {
        let g = graph(&[&[0, 1], &[1, 0]]);
        let mut v = g.visitation();
        v.visit_edge(0, 1);
        v.visit_edge(1, 0);
        assert_eq!(v.unvisited_edges_between(0, 1), -1);
    }

    #[test]
    fn out_of_range_is_ignored() {
        let g = graph(&[&[0, 1], &[1, 0]]);
        let mut v = g.visitation();
        v.visit_edge(0, 7);
        v.unvisit_edge(7, 7);
        v.mark_visited(3);
        v.mark_unvisited(3);
        assert_eq!(v.unvisited_edges_between(0, 1), 1);
        assert!(!v.is_visited(3));
        assert_eq!(v.unvisited_edges_between(0, 7), 0);
    }

    #[test]
    fn reset_twice_equals_reset_once() {
        let g = graph(&[&[0, 1, 1], &[1, 0, 1], &[1, 1, 0]]);
        let mut v = g.visitation();
        v.visit_edge(0, 1);
        v.mark_visited(2);

        v.reset();
        let once = (
            v.visited_vertex.clone(),
            v.unvisited_vertex_degree.clone(),
            v.visited_edges.clone(),
            v.unvisited_edges.clone(),
        );
        v.reset();
        let twice = (
            v.visited_vertex.clone(),
            v.unvisited_vertex_degree.clone(),
            v.visited_edges.clone(),
            v.unvisited_edges.clone(),
        );
        assert_eq!(once, twice);
        assert!(!v.is_visited(2));
        assert_eq!(v.unvisited_edges_between(0, 1), 1);
    }

    #[test]
    fn depth_first_visit_marks_component_only() {
        let g = graph(&[&[0, 1, 0, 0], &[1, 0, 0, 0], &[0, 0, 0, 1], &[0, 0, 1, 0]]);
        let mut v = g.visitation();
        let mut walk = Walk::with_capacity(4);
        v.depth_first_visit(2, Some(&mut walk));
        assert_eq!(walk.vertices(), &[2, 3]);
        assert!(v.is_visited(2) && v.is_visited(3));
        assert!(!v.is_visited(0) && !v.is_visited(1));
        assert!(!v.all_visited());
        assert_eq!(v.unvisited_edges_between(2, 3), 1);
    }

    #[test]
    fn mark_and_unmark() {
        let g = graph(&[&[0]]);
        let mut v = g.visitation();
        v.mark_visited(0);
        assert!(v.all_visited());
        v.mark_unvisited(0);
        assert!(!v.all_visited());
    }
}
