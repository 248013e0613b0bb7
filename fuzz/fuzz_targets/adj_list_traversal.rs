#![no_main]

use libfuzzer_sys::fuzz_target;

use vertex_walk::{infra::testing::check_traversal, storage::AdjList};

fuzz_target!(|graph: AdjList<i8>| {
    check_traversal(&graph)
        .as_ref()
        .map_err(ToString::to_string)
        .unwrap();
});
