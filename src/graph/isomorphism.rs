//! Exact isomorphism test by exhaustive search over all
//! vertex relabellings. No invariant shortcuts; the trial
//! space is only pruned by the vertex count check.
use itertools::Itertools;
use rayon::iter::{ParallelBridge, ParallelIterator};

use super::{Graph, VertexIndex};

impl Graph {
    /// Decide whether some bijection of vertex indices maps this
    /// graph's edge set exactly onto the other's. Tries all n!
    /// permutations, O(n! * n^2) in the worst case.
    ///
    /// The permutation trials carry no result state besides the
    /// boolean, so they are checked across the rayon pool.
    pub fn is_isomorphic_to(&self, other: &Graph) -> bool {
        let n = self.size();
        if n != other.size() {
            return false;
        }

        (0..n)
            .permutations(n)
            .par_bridge()
            .any(|relabelling| self.matches_relabelling(other, &relabelling))
    }

    /// Check one candidate bijection: every adjacency entry of
    /// self must equal the corresponding relabelled entry of other.
    fn matches_relabelling(&self, other: &Graph, relabelling: &[VertexIndex]) -> bool {
        for x in 0..self.size() {
            for y in 0..self.size() {
                if self.adjacency[x][y] != other.adjacency[relabelling[x]][relabelling[y]] {
                    return false;
                }
            }
        }

        true
    }
}
