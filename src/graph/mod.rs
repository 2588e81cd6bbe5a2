//! Representation of the graphs drawn on the board
//! as well as the mutation operations the click layer
//! drives and the geometric pick query it needs.
use custom_debug_derive::Debug;

use crate::debug::{adjacency_fmt, opt_fmt};

mod colouring;
mod isomorphism;

pub type Colour = usize;
pub type VertexIndex = usize;

/// Hard cap on vertices per graph. The adjacency matrix
/// is allocated at this size once and never grows.
pub const MAX_VERTICES: usize = 20;

/// Euclidean distance within which a click counts as
/// hitting a vertex. Matches the drawn vertex radius.
pub const PICK_RADIUS: f64 = 10.0;

/// Screen position of a vertex. The algorithms never
/// interpret it; only equality and distance are used.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    pub x: f64,
    pub y: f64,
}

impl Placement {
    pub fn new(x: f64, y: f64) -> Self {
        Placement { x, y }
    }

    pub fn distance_to(&self, other: &Placement) -> f64 {
        ((self.x - other.x).powi(2) + (self.y - other.y).powi(2)).sqrt()
    }
}

#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum GraphError {
    #[error("graph already holds the maximum of {0} vertices")]
    CapacityExceeded(usize),
    #[error("no edge possible between {0} and {1}")]
    InvalidEdge(VertexIndex, VertexIndex),
    #[error("colouring budget must be at least 1, got {0}")]
    InvalidColouringBudget(usize),
}

/// Fixed capacity graph with a colouring budget chosen at creation.
/// Vertices are identified by their creation order; indices at or
/// beyond [size](Graph::size) are inert in the adjacency matrix.
#[derive(Debug, Clone)]
pub struct Graph {
    k: usize,
    vertices: Vec<Placement>,
    #[debug(with = "adjacency_fmt")]
    adjacency: Vec<Vec<bool>>,
    #[debug(with = "opt_fmt")]
    colouring: Option<Vec<Colour>>,
}

impl Graph {
    pub fn new(k: usize) -> Result<Self, GraphError> {
        if k < 1 {
            return Err(GraphError::InvalidColouringBudget(k));
        }

        Ok(Graph {
            k,
            vertices: Vec::new(),
            adjacency: vec![vec![false; MAX_VERTICES]; MAX_VERTICES],
            colouring: None,
        })
    }

    pub fn size(&self) -> usize {
        self.vertices.len()
    }

    pub fn colouring_budget(&self) -> usize {
        self.k
    }

    /// The colouring found by the last successful
    /// [is_colourable](Graph::is_colourable) call.
    pub fn colouring(&self) -> Option<&[Colour]> {
        self.colouring.as_deref()
    }

    /// Append a new vertex and return its index.
    pub fn create_vertex(&mut self, placement: Placement) -> Result<VertexIndex, GraphError> {
        if self.vertices.len() == MAX_VERTICES {
            return Err(GraphError::CapacityExceeded(MAX_VERTICES));
        }

        self.vertices.push(placement);
        Ok(self.vertices.len() - 1)
    }

    /// Connect two existing, distinct vertices. Re-adding
    /// an existing edge is a no-op; self-loops are rejected.
    pub fn create_edge(&mut self, start: VertexIndex, end: VertexIndex) -> Result<(), GraphError> {
        if start == end || start >= self.size() || end >= self.size() {
            return Err(GraphError::InvalidEdge(start, end));
        }

        self.adjacency[start][end] = true;
        self.adjacency[end][start] = true;
        Ok(())
    }

    pub fn lookup_edge(&self, start: VertexIndex, end: VertexIndex) -> bool {
        self.adjacency[start][end]
    }

    /// First vertex in creation order within [PICK_RADIUS] of the
    /// given point, if any. Pure hit-test for the click layer.
    pub fn find_vertex_at(&self, placement: &Placement) -> Option<VertexIndex> {
        self.vertices
            .iter()
            .position(|location| location.distance_to(placement) <= PICK_RADIUS)
    }
}
