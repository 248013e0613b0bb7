use crate::core::{id::IdType, Neighbors};

use super::VisitSet;

// Plain stack traversal: a vertex is marked visited when it is popped for the
// first time, so a vertex pushed several times (diamonds, parallel edges) is
// expanded only once. This is not a strict DFS discovery order, which none of
// the algorithms built on top of it need.
pub(crate) struct RawVisit<I, S> {
    pub stack: Vec<I>,
    pub visited: S,
}

impl<I: IdType, S: VisitSet<I>> RawVisit<I, S> {
    pub fn new(visited: S) -> Self {
        Self {
            stack: Vec::new(),
            visited,
        }
    }

    pub fn start(&mut self, root: I) {
        self.stack.clear();
        self.stack.push(root);
    }

    pub fn reset(&mut self) {
        self.stack.clear();
        self.visited.reset_visited();
    }

    pub fn next<G>(&mut self, graph: &G) -> Option<I>
    where
        G: Neighbors<VertexId = I>,
    {
        while let Some(v) = self.stack.pop() {
            if !self.visited.visit(v.clone()) {
                continue;
            }

            for u in graph.neighbors(&v) {
                if !self.visited.is_visited(&u) {
                    self.stack.push(u);
                }
            }

            return Some(v);
        }

        None
    }
}
