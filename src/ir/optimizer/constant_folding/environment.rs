//! Per-function analysis state for sparse conditional constant propagation.
//!
//! Tracks the lattice value of every SSA value, which CFG edges and blocks
//! have been proven executable, and the def-use edges needed to requeue
//! dependent instructions when a value's lattice state changes.

use std::collections::{HashMap, HashSet};

use petgraph::graph::NodeIndex;

use crate::ir::optimizer::dead_code_elimination::InstructionIndex;
use crate::ir::{Function, Instruction, InstructionKind, Terminator, TerminatorKind, Value, ValueId, ValueKind};

use super::executable_edges::ExecutableEdges;
use super::lattice::{ConstantValue, LatticeValue};

/// Analysis state accumulated while running the fixpoint loop over a function.
///
/// Maps each SSA value to its current lattice state, tracks which CFG edges
/// and blocks have been proven reachable, and records def-use edges so a
/// changed value can requeue every instruction that reads it.
pub struct Environment {
    lattice: HashMap<ValueId, LatticeValue>,
    executable: ExecutableEdges,
    uses: HashMap<ValueId, Vec<InstructionIndex>>,
    handled_blocks: HashSet<NodeIndex>,
}

impl Drop for Environment {
    fn drop(&mut self) {
        self.lattice.clear();
        self.uses.clear();
        self.handled_blocks.clear();
    }
}

impl Environment {
    pub fn new() -> Self {
        Self {
            lattice: HashMap::new(),
            executable: ExecutableEdges::new(),
            uses: HashMap::new(),
            handled_blocks: HashSet::new(),
        }
    }

    /// Seeds formal parameters as `Bottom`.
    ///
    /// A parameter's actual argument is unknown without interprocedural
    /// analysis, and nothing in the function ever "defines" it, so it would
    /// otherwise sit at the optimistic `Top` default forever. Starting it at
    /// `Bottom` matches the textbook SCCP initialization and is what keeps
    /// expressions built from parameters from being folded.
    pub fn seed_parameters(&mut self, function: &Function) {
        for (name, ty) in &function.parameters {
            let value = Value::new_local(name.clone(), ty.clone());
            self.lattice.insert(value.id, LatticeValue::Bottom);
        }
    }

    /// Builds the def-use index: for every SSA value, the instructions that
    /// read it. Used to requeue dependent sites when a value's lattice state
    /// changes.
    pub fn index_ssa_edges(&mut self, function: &Function) {
        for block_idx in function.cfg.graph().node_indices() {
            let block = &function.cfg.graph()[block_idx];

            for (inst_offset, instruction) in block.instructions.iter().enumerate() {
                let site = InstructionIndex { block_idx, inst_offset };
                extract_used_values_ref(instruction, &mut |value| {
                    self.uses.entry(value.id).or_default().push(site);
                });
            }

            let term_site = InstructionIndex { block_idx, inst_offset: block.instructions.len() };
            extract_terminator_uses_ref(&block.terminator, &mut |value| {
                self.uses.entry(value.id).or_default().push(term_site);
            });
        }
    }

    /// Returns the current lattice state of a value identity, defaulting to
    /// `Top` for values not yet touched by the analysis.
    #[must_use]
    pub fn get(&self, id: ValueId) -> LatticeValue {
        self.lattice.get(&id).cloned().unwrap_or(LatticeValue::Top)
    }

    /// Resolves an operand to its lattice state. Immediates are already
    /// known constants and never consult the lattice map.
    #[must_use]
    pub fn value_lattice(&self, value: &Value) -> LatticeValue {
        if let ValueKind::Immediate(imm) = &value.kind {
            return ConstantValue::from_immediate(imm).map_or(LatticeValue::Bottom, LatticeValue::Constant);
        }
        self.get(value.id)
    }

    /// Merges `proposed` into a value's current lattice state. Returns
    /// `true` if the state actually changed, signaling that dependent uses
    /// must be requeued.
    pub fn update(&mut self, id: ValueId, proposed: LatticeValue) -> bool {
        let current = self.get(id);
        let merged = current.meet(&proposed);
        if merged == current {
            false
        } else {
            self.lattice.insert(id, merged);
            true
        }
    }

    /// Returns the instructions that read a given value, for requeueing.
    #[must_use]
    pub fn uses_of(&self, id: ValueId) -> &[InstructionIndex] {
        self.uses.get(&id).map_or(&[], Vec::as_slice)
    }

    /// Returns every value this analysis assigned a lattice state to.
    pub fn lattice_entries(&self) -> impl Iterator<Item = (ValueId, &LatticeValue)> {
        self.lattice.iter().map(|(id, value)| (*id, value))
    }

    pub fn mark_edge_executable(&mut self, pred: NodeIndex, succ: NodeIndex) -> bool {
        self.executable.mark_edge_executable(pred.index(), succ.index())
    }

    pub fn mark_block_executable(&mut self, block: NodeIndex) {
        self.executable.mark_block_executable(block.index());
    }

    #[must_use]
    pub fn is_block_executable(&self, block: NodeIndex) -> bool {
        self.executable.is_block_executable(block.index())
    }

    #[must_use]
    pub fn is_edge_executable(&self, pred: NodeIndex, succ: NodeIndex) -> bool {
        self.executable.is_edge_executable(pred.index(), succ.index())
    }

    #[must_use]
    pub fn executable_blocks(&self) -> HashSet<NodeIndex> {
        self.executable.executable_blocks().iter().map(|&idx| NodeIndex::new(idx)).collect()
    }

    /// Marks a block as having had its non-phi instructions and terminator
    /// visited. Returns `true` the first time (the caller should then visit
    /// the block's body); subsequent calls return `false` since only phi
    /// nodes need revisiting when a later incoming edge becomes executable.
    pub fn mark_block_handled(&mut self, block: NodeIndex) -> bool {
        self.handled_blocks.insert(block)
    }
}

impl Default for Environment {
    fn default() -> Self {
        Self::new()
    }
}

/// Extracts all values used by an instruction using a callback to avoid allocations.
#[inline]
fn extract_used_values_ref<F>(instruction: &Instruction, callback: &mut F)
where
    F: FnMut(&Value),
{
    match &instruction.kind {
        InstructionKind::Binary { left, right, .. } => {
            callback(left);
            callback(right);
        }
        InstructionKind::Unary { operand, .. } => callback(operand),
        InstructionKind::Load { src, .. } => callback(src),
        InstructionKind::Store { value, dest } => {
            callback(value);
            callback(dest);
        }
        InstructionKind::Call { func, args, .. } => {
            callback(func);
            for arg in args {
                callback(arg);
            }
        }
        InstructionKind::GetElementPtr { base, index, .. } => {
            callback(base);
            callback(index);
        }
        InstructionKind::Cast { value, .. } => callback(value),
        InstructionKind::Phi { incoming, .. } => {
            for (v, _) in incoming {
                callback(v);
            }
        }
        InstructionKind::Vector { operands, .. } => {
            for operand in operands {
                callback(operand);
            }
        }
        InstructionKind::Alloca { .. } => {}
    }
}

/// Extracts all values used by a terminator using a callback to avoid allocations.
#[inline]
fn extract_terminator_uses_ref<F>(terminator: &Terminator, callback: &mut F)
where
    F: FnMut(&Value),
{
    match &terminator.kind {
        TerminatorKind::Return { value, .. } => callback(value),
        TerminatorKind::ConditionalBranch { condition, .. } => callback(condition),
        TerminatorKind::IndirectBranch { address, .. } => callback(address),
        TerminatorKind::Switch { value, cases, .. } => {
            callback(value);
            for (v, _) in cases {
                callback(v);
            }
        }
        TerminatorKind::Branch { .. } | TerminatorKind::Unreachable => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ir::IrType;

    #[test]
    fn get_defaults_to_top_for_unknown_value() {
        let env = Environment::new();
        let value = Value::new_temporary("0".to_string(), IrType::I32);
        assert_eq!(env.get(value.id), LatticeValue::Top);
    }

    #[test]
    fn update_meets_with_current_state() {
        let mut env = Environment::new();
        let value = Value::new_temporary("0".to_string(), IrType::I32);

        assert!(env.update(value.id, LatticeValue::Constant(ConstantValue::I32(5))));
        assert_eq!(env.get(value.id), LatticeValue::Constant(ConstantValue::I32(5)));

        // Same constant again: no change.
        assert!(!env.update(value.id, LatticeValue::Constant(ConstantValue::I32(5))));

        // Conflicting constant: degrades to Bottom, reports a change.
        assert!(env.update(value.id, LatticeValue::Constant(ConstantValue::I32(9))));
        assert_eq!(env.get(value.id), LatticeValue::Bottom);
    }

    #[test]
    fn value_lattice_resolves_immediates_without_lookup() {
        let env = Environment::new();
        let imm = Value::new_immediate(crate::ir::ImmediateValue::I32(42));
        assert_eq!(env.value_lattice(&imm), LatticeValue::Constant(ConstantValue::I32(42)));
    }

    #[test]
    fn seed_parameters_starts_at_bottom() {
        let mut env = Environment::new();
        let function = Function::new("f", vec![("x".to_string(), IrType::I32)], IrType::I32);
        env.seed_parameters(&function);
        let param = Value::new_local("x".to_string(), IrType::I32);
        assert_eq!(env.get(param.id), LatticeValue::Bottom);
    }
}
