//! Exact k-colouring search by exhaustive enumeration.
//! Colourings are tried in base-k order, vertex 0 being
//! the least significant digit, so the reported colouring
//! is the first valid one in that order.
use super::{Colour, Graph};

impl Graph {
    /// Decide whether the graph admits a proper colouring with
    /// at most k colours. On success the first valid colouring
    /// in enumeration order is stored and can be read through
    /// [colouring](Graph::colouring); on failure any previous
    /// colouring is cleared.
    ///
    /// Runs through up to k^n candidate colourings and checks
    /// every vertex pair for each, so O(k^n * n^2) in the worst
    /// case. Blocking and uncancellable, acceptable for graphs
    /// within [MAX_VERTICES](super::MAX_VERTICES).
    pub fn is_colourable(&mut self) -> bool {
        let mut trial = vec![0; self.size()];

        loop {
            if self.is_proper(&trial) {
                self.colouring = Some(trial);
                return true;
            }

            if !next_colouring(&mut trial, self.k) {
                break;
            }
        }

        self.colouring = None;
        false
    }

    /// A colouring is proper iff no edge joins two vertices
    /// of the same colour. The empty colouring is proper.
    fn is_proper(&self, trial: &[Colour]) -> bool {
        for x in 0..trial.len() {
            for y in (x + 1)..trial.len() {
                if self.adjacency[x][y] && trial[x] == trial[y] {
                    return false;
                }
            }
        }

        true
    }
}

/// Advance to the next colouring in base-k order, carrying
/// from vertex 0 upwards. Returns false once all k^n have
/// been visited. Iterating this way never has to compute
/// k^n itself, which could overflow for large budgets.
fn next_colouring(trial: &mut [Colour], k: usize) -> bool {
    for digit in trial.iter_mut() {
        *digit += 1;
        if *digit < k {
            return true;
        }
        *digit = 0;
    }

    false
}
