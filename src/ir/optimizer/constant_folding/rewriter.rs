//! CFG rewriting phase of SCCP.
//!
//! Consumes the [`Environment`] produced by [`super::fixpoint::analyze`] and applies it to the
//! function: constant operands are substituted in place, terminators whose condition resolved
//! to a constant collapse to an unconditional branch, phi incoming lists are pruned to
//! predecessors actually proven executable, phis are moved to the head of their block, and
//! blocks the analysis never proved executable are removed from the CFG.

use std::collections::HashSet;
use std::sync::Arc;

use petgraph::graph::NodeIndex;

use crate::ir::{BasicBlock, Function, Instruction, InstructionKind, Terminator, TerminatorKind, Value, ValueKind};

use super::environment::Environment;
use super::lattice::LatticeValue;
use super::stats::OptimizationStats;

/// Rewrites `function` in place using the final state of `env`.
///
/// Only blocks `env` proved executable are rewritten; every other block is dropped from the
/// CFG along with its edges.
pub fn rewrite(function: &mut Function, env: &Environment) -> OptimizationStats {
    let mut stats = OptimizationStats::default();

    let node_indices: Vec<NodeIndex> = function.cfg.graph().node_indices().collect();
    let reachable_labels: HashSet<Arc<str>> = node_indices
        .iter()
        .filter(|&&idx| env.is_block_executable(idx))
        .map(|&idx| function.cfg.graph()[idx].label.clone())
        .collect();

    for &idx in &node_indices {
        if !env.is_block_executable(idx) {
            continue;
        }
        let block = &mut function.cfg.graph_mut()[idx];
        rewrite_block(block, env, &reachable_labels, &mut stats);
    }

    // Labels must be collected before any `remove_block` call: the CFG is a
    // non-stable `DiGraph`, so removing a node swaps the last node into the
    // freed slot and invalidates every higher `NodeIndex`. Indexing the graph
    // by `idx` after a removal would read the wrong block or go out of bounds.
    let unreachable_labels: Vec<Arc<str>> = node_indices
        .iter()
        .filter(|&&idx| !env.is_block_executable(idx))
        .map(|&idx| function.cfg.graph()[idx].label.clone())
        .collect();

    for label in &unreachable_labels {
        if function.cfg.remove_block(label) {
            stats.blocks_marked_unreachable += 1;
        }
    }

    stats
}

fn rewrite_block(block: &mut BasicBlock, env: &Environment, reachable_labels: &HashSet<Arc<str>>, stats: &mut OptimizationStats) {
    for instruction in &mut block.instructions {
        if let InstructionKind::Phi { incoming, .. } = &mut instruction.kind {
            let before = incoming.len();
            incoming.retain(|(_, pred_label)| reachable_labels.iter().any(|l| l.as_ref() == pred_label));
            if incoming.len() != before {
                stats.phi_nodes_simplified += 1;
            }
        }
        substitute_instruction_operands(instruction, env, stats);
    }

    move_phis_to_head(block);

    rewrite_terminator(&mut block.terminator, env, stats);
}

/// Moves every `Phi` instruction to the front of the block, preserving relative order
/// within each group. Defensive against a rewrite pass that could otherwise leave a phi
/// behind a regular instruction it doesn't actually depend on.
fn move_phis_to_head(block: &mut BasicBlock) {
    let (phis, rest): (Vec<Instruction>, Vec<Instruction>) =
        block.instructions.drain(..).partition(|inst| matches!(inst.kind, InstructionKind::Phi { .. }));
    block.instructions = phis;
    block.instructions.extend(rest);
}

fn substitute_instruction_operands(instruction: &mut Instruction, env: &Environment, stats: &mut OptimizationStats) {
    match &mut instruction.kind {
        InstructionKind::Binary { left, right, .. } => {
            substitute(left, env, stats);
            substitute(right, env, stats);
        }
        InstructionKind::Unary { operand, .. } => substitute(operand, env, stats),
        InstructionKind::Load { src, .. } => substitute(src, env, stats),
        InstructionKind::Store { value, dest } => {
            substitute(value, env, stats);
            substitute(dest, env, stats);
        }
        InstructionKind::Call { args, .. } => {
            for arg in args {
                substitute(arg, env, stats);
            }
        }
        InstructionKind::GetElementPtr { base, index, .. } => {
            substitute(base, env, stats);
            substitute(index, env, stats);
        }
        InstructionKind::Cast { value, .. } => substitute(value, env, stats),
        InstructionKind::Phi { incoming, .. } => {
            for (value, _) in incoming {
                substitute(value, env, stats);
            }
        }
        InstructionKind::Vector { operands, .. } => {
            for operand in operands {
                substitute(operand, env, stats);
            }
        }
        InstructionKind::Alloca { .. } => {}
    }
}

/// Replaces `value` with an immediate if the analysis proved it constant. Immediates are
/// already concrete and are left untouched.
fn substitute(value: &mut Value, env: &Environment, stats: &mut OptimizationStats) {
    if matches!(value.kind, ValueKind::Immediate(_)) {
        return;
    }
    if let LatticeValue::Constant(c) = env.get(value.id) {
        *value = Value::new_immediate(c.to_immediate());
        stats.constants_propagated += 1;
    }
}

fn rewrite_terminator(terminator: &mut Terminator, env: &Environment, stats: &mut OptimizationStats) {
    match &terminator.kind {
        TerminatorKind::ConditionalBranch { condition, true_label, false_label } => {
            if let LatticeValue::Constant(c) = env.value_lattice(condition) {
                if let Some(b) = c.as_bool() {
                    let label = if b { true_label.clone() } else { false_label.clone() };
                    let span = terminator.debug_info.source_span.clone();
                    *terminator = Terminator::new(TerminatorKind::Branch { label }, span);
                    stats.branches_resolved += 1;
                    return;
                }
            }
        }
        TerminatorKind::Switch { value, default_label, cases, .. } => {
            if let LatticeValue::Constant(scrutinee) = env.value_lattice(value) {
                let matched = cases.iter().find_map(|(case_value, label)| match env.value_lattice(case_value) {
                    LatticeValue::Constant(case_const) if case_const == scrutinee => Some(label.clone()),
                    _ => None,
                });
                let target = matched.unwrap_or_else(|| default_label.clone());
                let span = terminator.debug_info.source_span.clone();
                *terminator = Terminator::new(TerminatorKind::Branch { label: target.into() }, span);
                stats.branches_resolved += 1;
                return;
            }
        }
        _ => {}
    }
    substitute_terminator_operands(terminator, env, stats);
}

fn substitute_terminator_operands(terminator: &mut Terminator, env: &Environment, stats: &mut OptimizationStats) {
    match &mut terminator.kind {
        TerminatorKind::Return { value, .. } => substitute(value, env, stats),
        TerminatorKind::ConditionalBranch { condition, .. } => substitute(condition, env, stats),
        TerminatorKind::IndirectBranch { address, .. } => substitute(address, env, stats),
        TerminatorKind::Switch { value, cases, .. } => {
            substitute(value, env, stats);
            for (case_value, _) in cases {
                substitute(case_value, env, stats);
            }
        }
        TerminatorKind::Branch { .. } | TerminatorKind::Unreachable => {}
    }
}
