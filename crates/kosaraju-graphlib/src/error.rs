use crate::graph::{EdgeId, VertexId};

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("both endpoints are required: {vertex} is not a vertex of this graph")]
    MissingEndpoint { vertex: VertexId },

    #[error("vertex {vertex} is not an endpoint of edge {edge}")]
    NotAnEndpoint { edge: EdgeId, vertex: VertexId },

    #[error("edge {edge} does not belong to this graph")]
    UnknownEdge { edge: EdgeId },

    #[error("vertex factory is required")]
    MissingVertexFactory,
}
