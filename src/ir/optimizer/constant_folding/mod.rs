//! Constant Folding Optimizer with Sparse Conditional Constant Propagation (SCCP)
//!
//! This module implements the Wegman-Zadeck SCCP algorithm for constant propagation
//! and dead code identification in SSA-form intermediate representation.
//!
//! # Algorithm Overview
//!
//! The SCCP algorithm operates on a three-level lattice system to track compile-time value states:
//!
//! ```text
//!           Top (⊤)
//!          /  |  \
//!    Const  Const  ...
//!          \  |  /
//!        Bottom (⊥)
//! ```
//!
//! - **Top (⊤)**: no evidence yet the value is non-constant (optimistic starting assumption)
//! - **Constant**: proven to always evaluate to the same compile-time value
//! - **Bottom (⊥)**: proven to vary at runtime, or its defining code is unreachable
//!
//! # Invariants
//!
//! 1. **Monotonicity**: lattice values only ever descend (Top → Constant → Bottom), never climb back
//! 2. **SSA preservation**: rewriting never changes the LHS of an assignment
//! 3. **Dominance**: definitions dominate uses before and after transformation
//! 4. **Convergence**: fixed-point iteration terminates within `max_iterations`
//!
//! # Phases
//!
//! 1. **Initialization**: parameters seed at `Bottom`, everything else starts at `Top`, the
//!    entry block's self-edge seeds the flow worklist
//! 2. **Propagation**: drain the flow and SSA worklists until both are empty
//! 3. **Rewriting**: substitute proven-constant operands, fold resolved branches, and prune
//!    blocks that were never proven executable
//!
//! # Example
//!
//! ```rust,ignore
//! use jsavrs::ir::optimizer::constant_folding::ConstantFoldingOptimizer;
//!
//! let mut optimizer = ConstantFoldingOptimizer::default();
//! let stats = optimizer.optimize_function(&mut function);
//! println!("Propagated {} constants", stats.constants_propagated);
//! ```

pub mod environment;
pub mod evaluator;
pub mod executable_edges;
pub mod fixpoint;
pub mod lattice;
pub mod optimizer;
pub mod rewriter;
pub mod stats;
pub mod worklist;

pub use environment::Environment;
pub use fixpoint::analyze;
pub use lattice::{ConstantValue, LatticeValue};
pub use optimizer::{ConstantFoldingOptimizer, SCCPConfig};
pub use stats::OptimizationStats;
