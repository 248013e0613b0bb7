use arbitrary::{Arbitrary, Unstructured};

use crate::{
    core::{id::IntegerIdType, VertexSet},
    storage::AdjList,
};

#[derive(Debug, Arbitrary, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Index(pub usize);

impl Index {
    pub fn get(&self, m: usize) -> Option<usize> {
        if m > 0 {
            Some(self.0 % m)
        } else {
            None
        }
    }
}

// Vertices first, then edges between them, with endpoints folded into the
// range of existing vertices. Edges generated for an empty graph are dropped.
impl<'a, V, I> Arbitrary<'a> for AdjList<V, I>
where
    V: Arbitrary<'a>,
    I: IntegerIdType,
{
    fn arbitrary(u: &mut Unstructured<'a>) -> arbitrary::Result<Self> {
        let vertices: Vec<V> = u.arbitrary()?;
        let mut graph = Self::with_capacity(vertices.len());

        for vertex in vertices {
            if graph.try_add_vertex(vertex).is_err() {
                break;
            }
        }

        let n = graph.vertex_count();
        let edges: Vec<(Index, Index)> = u.arbitrary()?;

        for (src, dst) in edges {
            if let (Some(src), Some(dst)) = (src.get(n), dst.get(n)) {
                graph.add_edge(&I::from_usize(src), &I::from_usize(dst));
            }
        }

        Ok(graph)
    }
}

#[cfg(test)]
mod tests {
    use crate::core::{GraphBase, Neighbors};

    use super::*;

    #[test]
    fn edges_stay_in_range() {
        let data = (0..=255u8).cycle().take(2048).collect::<Vec<_>>();
        let mut u = Unstructured::new(&data);

        let graph = AdjList::<i8>::arbitrary(&mut u).unwrap();

        for v in graph.vertex_ids() {
            assert!(graph.neighbors(&v).all(|w| graph.contains_vertex(&w)));
        }
    }

    #[test]
    fn index_folds() {
        assert_eq!(Index(7).get(3), Some(1));
        assert_eq!(Index(7).get(0), None);
    }
}
