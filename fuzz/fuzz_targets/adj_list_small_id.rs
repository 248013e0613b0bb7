#![no_main]

use libfuzzer_sys::fuzz_target;

use vertex_walk::{core::id::VertexId, infra::testing::check_traversal, storage::AdjList};

// With u8 IDs the vertex capacity is reached easily.
fuzz_target!(|graph: AdjList<u8, VertexId<u8>>| {
    check_traversal(&graph)
        .as_ref()
        .map_err(ToString::to_string)
        .unwrap();
});
