//! Optimization statistics collection for SCCP
//!
//! Tracks and reports metrics about the SCCP optimization process.

use std::fmt;

/// Statistics tracked during SCCP optimization.
///
/// All counters are cumulative across multiple function optimizations.
#[derive(Debug, Clone, Default)]
pub struct OptimizationStats {
    /// Number of instruction/terminator operands replaced by a proven constant.
    pub constants_propagated: usize,
    /// Number of conditional branches or switches resolved to unconditional jumps.
    pub branches_resolved: usize,
    /// Number of phi nodes whose incoming list was pruned to reachable predecessors.
    pub phi_nodes_simplified: usize,
    /// Number of basic blocks removed because they were never proven executable.
    pub blocks_marked_unreachable: usize,
    /// Number of worklist steps the fixpoint engine took to converge (last function).
    pub iterations: usize,
}

impl fmt::Display for OptimizationStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "SCCP Stats: {} constants, {} branches, {} phis, {} unreachable blocks, {} iterations",
            self.constants_propagated,
            self.branches_resolved,
            self.phi_nodes_simplified,
            self.blocks_marked_unreachable,
            self.iterations
        )
    }
}
