//! Fixpoint dataflow engine implementing sparse conditional constant propagation.
//!
//! Runs the dual-worklist algorithm (Wegman & Zadeck): a flow worklist of
//! control-flow edges just proven executable, and an SSA worklist of
//! def-use edges whose operand just became more precise. Draining both to
//! empty reaches the fixpoint.

use std::collections::HashMap;

use petgraph::graph::NodeIndex;

use crate::ir::optimizer::dead_code_elimination::InstructionIndex;
use crate::ir::{BasicBlock, Function, Instruction, InstructionKind, IrType, Terminator, TerminatorKind, Value, ValueId};

use super::environment::Environment;
use super::evaluator::{evaluate_binary_op, evaluate_unary_op};
use super::lattice::{ConstantValue, LatticeValue};
use super::worklist::{FlowWorkList, SSAWorkList};

/// Runs the SCCP fixpoint over `function`, returning the resulting
/// environment (lattice map + reachability) and the number of worklist
/// items actually processed before convergence (or before the iteration
/// cap cut the analysis short).
#[must_use]
pub fn analyze(function: &Function, max_iterations: usize) -> (Environment, usize) {
    let mut env = Environment::new();
    env.seed_parameters(function);
    env.index_ssa_edges(function);

    let Some(entry_idx) = function.cfg.get_entry_block_index() else {
        return (env, 0);
    };

    let label_index = build_label_index(function);

    let mut flow_list = FlowWorkList::new();
    let mut ssa_list = SSAWorkList::new();

    // Bootstraps the loop: the entry block has no real predecessor, so a
    // self-loop edge lets `process_flow_edge` be the single code path that
    // marks a block executable and schedules its contents, rather than
    // special-casing the initial visit.
    flow_list.enqueue(entry_idx.index(), entry_idx.index());

    let mut steps = 0usize;
    loop {
        if let Some((pred, succ)) = flow_list.dequeue() {
            steps += 1;
            process_flow_edge(
                function,
                &mut env,
                &mut flow_list,
                &mut ssa_list,
                &label_index,
                NodeIndex::new(pred),
                NodeIndex::new(succ),
            );
        } else if let Some((block_idx, inst_offset)) = ssa_list.dequeue() {
            steps += 1;
            process_ssa_site(
                function,
                &mut env,
                &mut flow_list,
                &mut ssa_list,
                &label_index,
                InstructionIndex { block_idx: NodeIndex::new(block_idx), inst_offset },
            );
        } else {
            break;
        }

        if steps >= max_iterations {
            eprintln!(
                "Warning: SCCP did not converge for function '{}' after {} worklist steps",
                function.name, max_iterations
            );
            break;
        }
    }

    (env, steps)
}

fn build_label_index(function: &Function) -> HashMap<String, NodeIndex> {
    function.cfg.graph().node_indices().map(|idx| (function.cfg.graph()[idx].label.to_string(), idx)).collect()
}

fn process_flow_edge(
    function: &Function, env: &mut Environment, flow_list: &mut FlowWorkList, ssa_list: &mut SSAWorkList,
    label_index: &HashMap<String, NodeIndex>, pred: NodeIndex, succ: NodeIndex,
) {
    if !env.mark_edge_executable(pred, succ) {
        return;
    }
    visit_block(function, env, flow_list, ssa_list, label_index, succ);
}

fn process_ssa_site(
    function: &Function, env: &mut Environment, flow_list: &mut FlowWorkList, ssa_list: &mut SSAWorkList,
    label_index: &HashMap<String, NodeIndex>, site: InstructionIndex,
) {
    if !env.is_block_executable(site.block_idx) {
        return;
    }
    let block = &function.cfg.graph()[site.block_idx];

    if site.inst_offset == block.instructions.len() {
        visit_terminator(env, flow_list, label_index, site.block_idx, &block.terminator);
        return;
    }

    let instruction = &block.instructions[site.inst_offset];
    if let InstructionKind::Phi { incoming, .. } = &instruction.kind {
        let Some(result) = &instruction.result else { return };
        let new_value = evaluate_phi(env, label_index, site.block_idx, incoming);
        if env.update(result.id, new_value) {
            requeue_uses(env, ssa_list, result.id);
        }
        return;
    }

    visit_instruction(env, ssa_list, instruction);
}

fn visit_block(
    function: &Function, env: &mut Environment, flow_list: &mut FlowWorkList, ssa_list: &mut SSAWorkList,
    label_index: &HashMap<String, NodeIndex>, block_idx: NodeIndex,
) {
    let block = &function.cfg.graph()[block_idx];

    visit_phis(env, ssa_list, label_index, block_idx, block);

    // Phis are re-evaluated on every incoming edge, but the rest of the
    // block's contents only need to run the first time it becomes reachable.
    if env.mark_block_handled(block_idx) {
        for instruction in &block.instructions {
            if matches!(instruction.kind, InstructionKind::Phi { .. }) {
                continue;
            }
            visit_instruction(env, ssa_list, instruction);
        }
        visit_terminator(env, flow_list, label_index, block_idx, &block.terminator);
    }
}

fn visit_phis(
    env: &mut Environment, ssa_list: &mut SSAWorkList, label_index: &HashMap<String, NodeIndex>, block_idx: NodeIndex,
    block: &BasicBlock,
) {
    for instruction in &block.instructions {
        let InstructionKind::Phi { incoming, .. } = &instruction.kind else { continue };
        let Some(result) = &instruction.result else { continue };

        let new_value = evaluate_phi(env, label_index, block_idx, incoming);
        if env.update(result.id, new_value) {
            requeue_uses(env, ssa_list, result.id);
        }
    }
}

/// Evaluates a phi node's result as the meet of its operands, but only over
/// the operands arriving along proven-executable incoming edges. Operands
/// from edges not yet known executable are ignored rather than treated as
/// Bottom, preserving the optimistic starting assumption.
fn evaluate_phi(
    env: &Environment, label_index: &HashMap<String, NodeIndex>, block_idx: NodeIndex, incoming: &[(Value, String)],
) -> LatticeValue {
    let mut merged = LatticeValue::Top;
    for (value, pred_label) in incoming {
        let Some(&pred_idx) = label_index.get(pred_label) else { continue };
        if !env.is_edge_executable(pred_idx, block_idx) {
            continue;
        }
        merged = merged.meet(&env.value_lattice(value));
    }
    merged
}

fn visit_instruction(env: &mut Environment, ssa_list: &mut SSAWorkList, instruction: &Instruction) {
    let Some(result) = &instruction.result else { return };
    let new_value = evaluate_instruction(env, &instruction.kind);
    if env.update(result.id, new_value) {
        requeue_uses(env, ssa_list, result.id);
    }
}

fn evaluate_instruction(env: &Environment, kind: &InstructionKind) -> LatticeValue {
    match kind {
        InstructionKind::Binary { op, left, right, .. } => {
            evaluate_binary_op(op, &env.value_lattice(left), &env.value_lattice(right))
        }
        InstructionKind::Unary { op, operand, .. } => evaluate_unary_op(op, &env.value_lattice(operand)),
        InstructionKind::Cast { value, to_ty, .. } => evaluate_cast(&env.value_lattice(value), to_ty),
        InstructionKind::Phi { .. }
        | InstructionKind::Alloca { .. }
        | InstructionKind::Store { .. }
        | InstructionKind::Load { .. }
        | InstructionKind::Call { .. }
        | InstructionKind::GetElementPtr { .. }
        | InstructionKind::Vector { .. } => LatticeValue::Bottom,
    }
}

fn evaluate_cast(operand: &LatticeValue, to_ty: &IrType) -> LatticeValue {
    match operand {
        LatticeValue::Bottom => LatticeValue::Bottom,
        LatticeValue::Top => LatticeValue::Top,
        LatticeValue::Constant(c) => cast_constant(c, to_ty),
    }
}

/// Folds a numeric cast, dispatching on whether the source is an integer or
/// a float so that integer narrowing/widening stays exact. Routing every
/// cast through `f64` (as a prior version of this function did) corrupts
/// integer casts: `f64` can't represent the full range of `i64`/`u64`, and
/// Rust's float->int `as` saturates instead of wrapping, so an int->int
/// cast folded that way silently disagrees with the target's real `as`
/// semantics. Integer sources are instead widened exactly into `i128` and
/// narrowed back with `as`, which truncates to the low bits the same way a
/// direct int->int `as` cast would; only a genuinely float-typed source or
/// target goes through `f64`.
fn cast_constant(value: &ConstantValue, to_ty: &IrType) -> LatticeValue {
    match value {
        ConstantValue::Bool(_) | ConstantValue::Char(_) => LatticeValue::Bottom,
        ConstantValue::F32(_) | ConstantValue::F64(_) => cast_from_float(value, to_ty),
        _ => cast_from_int(value, to_ty),
    }
}

/// Widens any integer `ConstantValue` into `i128` without loss: sign-extended
/// for signed sources, zero-extended for unsigned ones, so every original bit
/// pattern's low bits survive intact for the narrowing cast that follows.
fn int_to_i128(value: &ConstantValue) -> i128 {
    match *value {
        ConstantValue::I8(v) => i128::from(v),
        ConstantValue::I16(v) => i128::from(v),
        ConstantValue::I32(v) => i128::from(v),
        ConstantValue::I64(v) => i128::from(v),
        ConstantValue::U8(v) => i128::from(v),
        ConstantValue::U16(v) => i128::from(v),
        ConstantValue::U32(v) => i128::from(v),
        ConstantValue::U64(v) => i128::from(v),
        ConstantValue::F32(_) | ConstantValue::F64(_) | ConstantValue::Bool(_) | ConstantValue::Char(_) => {
            unreachable!("int_to_i128 called on a non-integer constant")
        }
    }
}

#[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss, clippy::cast_possible_wrap, clippy::cast_sign_loss)]
fn cast_from_int(value: &ConstantValue, to_ty: &IrType) -> LatticeValue {
    let pivot = int_to_i128(value);
    let folded = match to_ty {
        IrType::I8 => ConstantValue::I8(pivot as i8),
        IrType::I16 => ConstantValue::I16(pivot as i16),
        IrType::I32 => ConstantValue::I32(pivot as i32),
        IrType::I64 => ConstantValue::I64(pivot as i64),
        IrType::U8 => ConstantValue::U8(pivot as u8),
        IrType::U16 => ConstantValue::U16(pivot as u16),
        IrType::U32 => ConstantValue::U32(pivot as u32),
        IrType::U64 => ConstantValue::U64(pivot as u64),
        IrType::F32 => ConstantValue::F32(pivot as f32),
        IrType::F64 => ConstantValue::F64(pivot as f64),
        _ => return LatticeValue::Bottom,
    };

    LatticeValue::Constant(folded)
}

#[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap, clippy::cast_sign_loss)]
fn cast_from_float(value: &ConstantValue, to_ty: &IrType) -> LatticeValue {
    let as_f64 = match *value {
        ConstantValue::F32(v) => f64::from(v),
        ConstantValue::F64(v) => v,
        _ => unreachable!("cast_from_float called on a non-float constant"),
    };

    let folded = match to_ty {
        IrType::I8 => ConstantValue::I8(as_f64 as i8),
        IrType::I16 => ConstantValue::I16(as_f64 as i16),
        IrType::I32 => ConstantValue::I32(as_f64 as i32),
        IrType::I64 => ConstantValue::I64(as_f64 as i64),
        IrType::U8 => ConstantValue::U8(as_f64 as u8),
        IrType::U16 => ConstantValue::U16(as_f64 as u16),
        IrType::U32 => ConstantValue::U32(as_f64 as u32),
        IrType::U64 => ConstantValue::U64(as_f64 as u64),
        IrType::F32 => ConstantValue::F32(as_f64 as f32),
        IrType::F64 => ConstantValue::F64(as_f64),
        _ => return LatticeValue::Bottom,
    };

    LatticeValue::Constant(folded)
}

fn visit_terminator(
    env: &mut Environment, flow_list: &mut FlowWorkList, label_index: &HashMap<String, NodeIndex>, block_idx: NodeIndex,
    terminator: &Terminator,
) {
    for target_label in determine_executable_targets(env, terminator) {
        if let Some(&target_idx) = label_index.get(&target_label) {
            flow_list.enqueue(block_idx.index(), target_idx.index());
        }
    }
}

/// Determines which of a terminator's targets are proven reachable given
/// the current lattice state of its condition/scrutinee. A condition that
/// hasn't resolved to a constant yet conservatively keeps every target
/// live, matching the "unreachable code must be proven, not assumed" rule.
fn determine_executable_targets(env: &Environment, terminator: &Terminator) -> Vec<String> {
    match &terminator.kind {
        TerminatorKind::Branch { label } => vec![label.to_string()],
        TerminatorKind::ConditionalBranch { condition, true_label, false_label } => {
            match env.value_lattice(condition) {
                LatticeValue::Constant(ConstantValue::Bool(true)) => vec![true_label.to_string()],
                LatticeValue::Constant(ConstantValue::Bool(false)) => vec![false_label.to_string()],
                // A boolean condition can never settle on a non-bool constant; treat that
                // as proof of non-constancy rather than silently picking a branch.
                LatticeValue::Constant(_) | LatticeValue::Bottom => {
                    vec![true_label.to_string(), false_label.to_string()]
                }
                // No evidence yet: neither target is proven reachable. Revisited once the
                // condition's lattice state changes and this terminator is requeued.
                LatticeValue::Top => Vec::new(),
            }
        }
        TerminatorKind::Switch { value, default_label, cases, .. } => match env.value_lattice(value) {
            LatticeValue::Constant(scrutinee) => {
                let matched_case = cases.iter().find_map(|(case_value, label)| match env.value_lattice(case_value) {
                    LatticeValue::Constant(case_const) if case_const == scrutinee => Some(label.clone()),
                    _ => None,
                });
                vec![matched_case.unwrap_or_else(|| default_label.clone())]
            }
            LatticeValue::Bottom => {
                let mut targets: Vec<String> = cases.iter().map(|(_, label)| label.clone()).collect();
                targets.push(default_label.clone());
                targets
            }
            LatticeValue::Top => Vec::new(),
        },
        TerminatorKind::IndirectBranch { possible_labels, .. } => possible_labels.clone(),
        TerminatorKind::Return { .. } | TerminatorKind::Unreachable => Vec::new(),
    }
}

fn requeue_uses(env: &Environment, ssa_list: &mut SSAWorkList, id: ValueId) {
    for site in env.uses_of(id) {
        ssa_list.enqueue(site.block_idx.index(), site.inst_offset);
    }
}
