// src/ir/function.rs
use super::{basic_block::BasicBlock, cfg::ControlFlowGraph, types::IrType};
use std::{collections::HashMap, fmt};

/// Represents a function in IR, holding its signature, local variable table
/// and control-flow graph of basic blocks.
#[derive(Debug, Clone)]
pub struct Function {
    pub name: String,
    pub parameters: Vec<(String, IrType)>,
    pub return_type: IrType,
    pub cfg: ControlFlowGraph,
    pub local_vars: HashMap<String, IrType>,
}

impl Function {
    pub fn new(name: &str, params: Vec<(String, IrType)>, return_type: IrType) -> Self {
        Self {
            name: name.to_string(),
            parameters: params,
            return_type,
            cfg: ControlFlowGraph::new("entry".into()),
            local_vars: HashMap::new(),
        }
    }

    /// Adds a block to the function's control-flow graph. If the function
    /// has no blocks yet, this block also becomes the entry point.
    pub fn add_block(&mut self, block: BasicBlock) {
        if self.cfg.get_entry_block_index().is_none() {
            self.cfg.entry_label = block.label.clone();
        }
        self.cfg.add_block(block);
    }

    pub fn add_local(&mut self, name: String, ty: IrType) {
        self.local_vars.insert(name, ty);
    }

    /// Connects two blocks, given by label, with a control-flow edge.
    pub fn add_edge(&mut self, from: &str, to: &str) {
        self.cfg.connect_blocks(from, to);
    }
}

impl fmt::Display for Function {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let params_str =
            self.parameters.iter().map(|(name, ty)| format!("{name}: {ty}")).collect::<Vec<_>>().join(", ");

        writeln!(f, "function {} ({}) -> {}:", self.name, params_str, self.return_type)?;

        for node_idx in self.cfg.dfs_post_order().collect::<Vec<_>>().into_iter().rev() {
            if let Some(block) = self.cfg.graph().node_weight(node_idx) {
                writeln!(f, "{block}\n")?;
            }
        }

        Ok(())
    }
}
