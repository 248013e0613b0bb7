mod common;

use common::{RandomGraph, RANDOM_SEED};
use fastrand::Rng;
use petgraph::prelude::*;
use vertex_walk::{
    algo::{max, reachable, IncreasingPath},
    core::id::{IdType, VertexId},
    visit::{Dfs, TypedBitSet, Visitor},
};

fn main() {
    divan::main();
}

#[divan::bench(consts = [100, 1000, 10000], args = [0.001, 0.01])]
fn reachable_random<const N: usize>(bencher: divan::Bencher, density: f32) {
    let graph = RandomGraph::new(N, density, &mut Rng::with_seed(RANDOM_SEED)).adj_list();
    let start = VertexId::from_usize(0);

    bencher.bench(|| reachable(&graph, Some(&start)));
}

#[divan::bench(consts = [100, 1000, 10000], args = [0.001, 0.01])]
fn dfs_bit_set_random<const N: usize>(bencher: divan::Bencher, density: f32) {
    let graph = RandomGraph::new(N, density, &mut Rng::with_seed(RANDOM_SEED)).adj_list();
    let start = VertexId::from_usize(0);

    bencher.bench(|| {
        let mut dfs = Dfs::with_visit_set(TypedBitSet::<VertexId>::with_capacity(N));
        dfs.start(start).into_iter(&graph).count()
    });
}

#[divan::bench(consts = [100, 1000, 10000], args = [0.001, 0.01])]
fn petgraph_dfs_random<const N: usize>(bencher: divan::Bencher, density: f32) {
    let graph = RandomGraph::new(N, density, &mut Rng::with_seed(RANDOM_SEED)).petgraph();
    let start = NodeIndex::new(0);

    bencher.bench(|| {
        let mut dfs = petgraph::visit::Dfs::new(&graph, start);
        let mut count = 0;
        while dfs.next(&graph).is_some() {
            count += 1;
        }
        count
    });
}

#[divan::bench(consts = [100, 1000, 10000], args = [0.001, 0.01])]
fn max_random<const N: usize>(bencher: divan::Bencher, density: f32) {
    let graph = RandomGraph::new(N, density, &mut Rng::with_seed(RANDOM_SEED)).adj_list();
    let start = VertexId::from_usize(0);

    bencher.bench(|| max(&graph, Some(&start)));
}

#[divan::bench(consts = [100, 1000, 10000], args = [0.001, 0.01])]
fn increasing_path_random<const N: usize>(bencher: divan::Bencher, density: f32) {
    let graph = RandomGraph::new(N, density, &mut Rng::with_seed(RANDOM_SEED)).adj_list();
    let start = VertexId::from_usize(0);
    let end = VertexId::from_usize(N - 1);

    bencher.bench(|| IncreasingPath::on(&graph).from(&start).to(&end).run());
}
