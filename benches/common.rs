#![allow(dead_code)]

use fastrand::Rng;
use petgraph::prelude::*;
use vertex_walk::storage::AdjList;

pub const RANDOM_SEED: u64 = 0xef6f79ed30ba75a;

pub struct RandomEdges {
    v: usize,
    w: usize,
    n: usize,
    p: f32,
}

impl RandomEdges {
    pub fn new(vertex_count: usize, p: f32) -> Self {
        Self {
            v: 1,
            w: usize::MAX,
            n: vertex_count,
            p,
        }
    }

    pub fn next_edge(&mut self, rng: &mut Rng) -> Option<(usize, usize)> {
        // Efficient generation of large random networks
        // http://vlado.fmf.uni-lj.si/pub/networks/doc/ms/rndgen.pdf

        let Self { v, w, .. } = self;
        let n = self.n;
        let p = self.p;

        if *v >= n {
            return None;
        }

        let r = rng.f32();
        *w = w.wrapping_add(1) + ((1.0 - r).log10() / (1.0 - p).log10()).floor() as usize;

        while *w >= *v && *v < n {
            *w -= *v;
            *v += 1;
        }

        if *v < n {
            // Random orientation so that directed cycles appear.
            if rng.bool() {
                Some((*v, *w))
            } else {
                Some((*w, *v))
            }
        } else {
            None
        }
    }
}

pub struct RandomGraph {
    pub values: Vec<u32>,
    pub edges: Vec<(usize, usize)>,
}

impl RandomGraph {
    pub fn new(vertex_count: usize, density: f32, rng: &mut Rng) -> Self {
        let values = (0..vertex_count).map(|_| rng.u32(0..1000)).collect();

        let mut edges = Vec::new();
        let mut random = RandomEdges::new(vertex_count, density);
        while let Some(edge) = random.next_edge(rng) {
            edges.push(edge);
        }

        Self { values, edges }
    }

    pub fn adj_list(&self) -> AdjList<u32> {
        let mut graph = AdjList::with_capacity(self.values.len());
        graph.extend_with_vertices(self.values.iter().copied());
        graph.extend_with_edges(self.edges.iter().copied());
        graph
    }

    pub fn petgraph(&self) -> petgraph::Graph<u32, (), petgraph::Directed> {
        let mut graph = petgraph::Graph::with_capacity(self.values.len(), self.edges.len());

        for value in &self.values {
            graph.add_node(*value);
        }

        for &(u, v) in &self.edges {
            graph.add_edge(NodeIndex::new(u), NodeIndex::new(v), ());
        }

        graph
    }
}
