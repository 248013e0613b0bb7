use crate::core::{
    error::{InvalidArgumentError, InvalidArgumentKind},
    GraphBase, GraphRef, Neighbors,
};

use super::{dfs::dfs, IncreasingPath};

/// Builder for [`IncreasingPath`].
pub struct IncreasingPathBuilder<'a, G>
where
    G: GraphBase,
{
    graph: &'a G,
    start: Option<&'a G::VertexId>,
    end: Option<&'a G::VertexId>,
}

impl<G> IncreasingPath<G>
where
    G: GraphBase,
{
    /// Starts building the algorithm on the given graph.
    pub fn on(graph: &G) -> IncreasingPathBuilder<'_, G> {
        IncreasingPathBuilder {
            graph,
            start: None,
            end: None,
        }
    }
}

impl<'a, G> IncreasingPathBuilder<'a, G>
where
    G: GraphBase,
{
    /// Sets the vertex the path starts in.
    pub fn from(self, start: &'a G::VertexId) -> Self {
        Self {
            start: Some(start),
            ..self
        }
    }

    /// Sets the vertex the path ends in.
    pub fn to(self, end: &'a G::VertexId) -> Self {
        Self {
            end: Some(end),
            ..self
        }
    }

    /// Runs the search.
    ///
    /// Fails if the start or the end was not set or is not in the graph. The
    /// start is checked first.
    pub fn run<V>(self) -> Result<IncreasingPath<G>, InvalidArgumentError>
    where
        G: Neighbors + GraphRef<V>,
        V: PartialOrd,
    {
        let start = self
            .start
            .filter(|start| self.graph.contains_vertex(start))
            .ok_or(InvalidArgumentError::new(InvalidArgumentKind::StartAbsent))?;

        let end = self
            .end
            .filter(|end| self.graph.contains_vertex(end))
            .ok_or(InvalidArgumentError::new(InvalidArgumentKind::EndAbsent))?;

        let path = dfs(self.graph, start, end);

        tracing::debug!(
            start = ?start,
            end = ?end,
            found = path.is_some(),
            length = path.as_ref().map_or(0, |path| path.len()),
            "increasing path search finished"
        );

        Ok(IncreasingPath { path })
    }
}
