//! Board session that owns the graphs, routes clicks and
//! tracks the two-phase edge drawing gesture.
use crate::graph::{Graph, Placement, VertexIndex};
use crate::Error;

/// The board never holds more than two graphs; the second
/// one only exists for isomorphism comparisons.
pub const MAX_GRAPHS: usize = 2;

/// Explicit state of the edge drawing gesture. A first click
/// on a vertex arms it, a second click on a vertex completes
/// the edge, any click on empty space cancels it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EdgeGesture {
    Idle,
    PendingFrom(VertexIndex),
}

/// What a click did, for the presentation layer to display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickOutcome {
    VertexCreated(VertexIndex),
    EdgeStarted(VertexIndex),
    EdgeCreated(VertexIndex, VertexIndex),
}

#[derive(Debug)]
pub struct Board {
    graphs: Vec<Graph>,
    active: usize,
    gesture: EdgeGesture,
}

impl Board {
    /// A board always starts with one graph, so there is
    /// always an active graph to route clicks to.
    pub fn new(k: usize) -> Result<Self, Error> {
        Ok(Board {
            graphs: vec![Graph::new(k)?],
            active: 0,
            gesture: EdgeGesture::Idle,
        })
    }

    pub fn create_graph(&mut self, k: usize) -> Result<(), Error> {
        if self.graphs.len() == MAX_GRAPHS {
            return Err(Error::BoardFull);
        }

        self.graphs.push(Graph::new(k)?);
        Ok(())
    }

    pub fn graph_count(&self) -> usize {
        self.graphs.len()
    }

    pub fn gesture(&self) -> EdgeGesture {
        self.gesture
    }

    pub fn active_graph(&self) -> &Graph {
        &self.graphs[self.active]
    }

    pub fn active_graph_mut(&mut self) -> &mut Graph {
        &mut self.graphs[self.active]
    }

    /// Both graphs for an isomorphism comparison, once two exist.
    pub fn graph_pair(&self) -> Option<(&Graph, &Graph)> {
        match self.graphs.as_slice() {
            [first, second] => Some((first, second)),
            _ => None,
        }
    }

    /// Switch the active graph. A pending edge gesture is
    /// cancelled since its vertex index only has meaning in
    /// the graph it was picked in. Returns the new selector.
    pub fn toggle_active(&mut self) -> usize {
        if self.graphs.len() > 1 {
            self.active = 1 - self.active;
            self.gesture = EdgeGesture::Idle;
        }
        self.active
    }

    /// Route one click. Empty space always creates a vertex and
    /// cancels any pending edge; a hit on a vertex either arms
    /// the gesture or completes the edge.
    pub fn handle_click(&mut self, placement: Placement) -> Result<ClickOutcome, Error> {
        match (self.active_graph().find_vertex_at(&placement), self.gesture) {
            (None, _) => {
                self.gesture = EdgeGesture::Idle;
                let index = self.active_graph_mut().create_vertex(placement)?;
                Ok(ClickOutcome::VertexCreated(index))
            }
            (Some(hit), EdgeGesture::Idle) => {
                self.gesture = EdgeGesture::PendingFrom(hit);
                Ok(ClickOutcome::EdgeStarted(hit))
            }
            (Some(hit), EdgeGesture::PendingFrom(armed)) => {
                self.gesture = EdgeGesture::Idle;
                self.active_graph_mut().create_edge(armed, hit)?;
                Ok(ClickOutcome::EdgeCreated(armed, hit))
            }
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::graph::GraphError;

    #[test]
    fn clicks_build_vertices_and_edges() -> Result<(), Error> {
        let mut board = Board::new(2)?;

        assert_eq!(
            ClickOutcome::VertexCreated(0),
            board.handle_click(Placement::new(100.0, 100.0))?
        );
        assert_eq!(
            ClickOutcome::VertexCreated(1),
            board.handle_click(Placement::new(300.0, 100.0))?
        );

        // Arm on vertex 0, complete on vertex 1.
        assert_eq!(
            ClickOutcome::EdgeStarted(0),
            board.handle_click(Placement::new(102.0, 101.0))?
        );
        assert_eq!(EdgeGesture::PendingFrom(0), board.gesture());
        assert_eq!(
            ClickOutcome::EdgeCreated(0, 1),
            board.handle_click(Placement::new(299.0, 100.0))?
        );
        assert_eq!(EdgeGesture::Idle, board.gesture());
        assert!(board.active_graph().lookup_edge(0, 1));
        Ok(())
    }

    #[test]
    fn empty_space_cancels_pending_edge() -> Result<(), Error> {
        let mut board = Board::new(2)?;
        board.handle_click(Placement::new(100.0, 100.0))?;
        board.handle_click(Placement::new(100.0, 100.0))?;
        assert_eq!(EdgeGesture::PendingFrom(0), board.gesture());

        // Far from any vertex: new vertex, gesture dropped.
        assert_eq!(
            ClickOutcome::VertexCreated(1),
            board.handle_click(Placement::new(500.0, 400.0))?
        );
        assert_eq!(EdgeGesture::Idle, board.gesture());
        assert!(!board.active_graph().lookup_edge(0, 1));
        Ok(())
    }

    #[test]
    fn double_click_on_same_vertex_rejects_self_loop() -> Result<(), Error> {
        let mut board = Board::new(2)?;
        board.handle_click(Placement::new(100.0, 100.0))?;
        board.handle_click(Placement::new(100.0, 100.0))?;

        let result = board.handle_click(Placement::new(101.0, 100.0));
        assert!(matches!(
            result,
            Err(Error::GraphError(GraphError::InvalidEdge(0, 0)))
        ));
        // The failed completion still clears the gesture.
        assert_eq!(EdgeGesture::Idle, board.gesture());
        Ok(())
    }

    #[test]
    fn at_most_two_graphs() -> Result<(), Error> {
        let mut board = Board::new(2)?;
        board.create_graph(3)?;
        assert_eq!(2, board.graph_count());
        assert!(matches!(board.create_graph(4), Err(Error::BoardFull)));
        Ok(())
    }

    #[test]
    fn toggle_switches_graphs_and_cancels_gesture() -> Result<(), Error> {
        let mut board = Board::new(2)?;

        // With a single graph toggling is a no-op.
        assert_eq!(0, board.toggle_active());

        board.create_graph(3)?;
        board.handle_click(Placement::new(100.0, 100.0))?;
        board.handle_click(Placement::new(100.0, 100.0))?;
        assert_eq!(EdgeGesture::PendingFrom(0), board.gesture());

        assert_eq!(1, board.toggle_active());
        assert_eq!(EdgeGesture::Idle, board.gesture());
        assert_eq!(3, board.active_graph().colouring_budget());
        assert_eq!(0, board.active_graph().size());

        assert_eq!(0, board.toggle_active());
        assert_eq!(1, board.active_graph().size());
        Ok(())
    }

    #[test]
    fn graph_pair_requires_two_graphs() -> Result<(), Error> {
        let mut board = Board::new(2)?;
        assert!(board.graph_pair().is_none());

        board.create_graph(2)?;
        board.handle_click(Placement::new(100.0, 100.0))?;
        let (first, second) = board.graph_pair().unwrap();
        assert_eq!(1, first.size());
        assert_eq!(0, second.size());
        Ok(())
    }
}
