//src/ir/value.rs
use super::types::IrType;
use std::collections::hash_map::DefaultHasher;
use std::fmt;
use std::hash::{Hash, Hasher};

/// Identity of a [`Value`] for use as a map key in dataflow analyses.
///
/// Derived deterministically from the value's [`ValueKind`] so that two
/// [`Value`]s built from the same name/kind (e.g. the same SSA temporary
/// referenced at two different use sites) compare equal without threading
/// a global counter through IR construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ValueId(u64);

impl fmt::Display for ValueId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Value {
    pub id: ValueId,
    pub kind: ValueKind,
    pub ty: IrType,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ValueKind {
    Immediate(ImmediateValue),
    Local(String),
    Global(String),
    Temporary(String),
}

#[derive(Debug, Clone, PartialEq)]
pub enum ImmediateValue {
    I8(i8),
    I16(i16),
    I32(i32),
    I64(i64),
    U8(u8),
    U16(u16),
    U32(u32),
    U64(u64),
    F32(f32),
    F64(f64),
    Bool(bool),
    Char(char),
    String(String),
}

/// Hashes an [`ImmediateValue`] by its bit pattern.
///
/// `ImmediateValue` is not `Eq`/`Hash` because `f32`/`f64` aren't, so
/// [`ValueId`] derivation hashes floats via `to_bits` instead.
fn hash_immediate(imm: &ImmediateValue, hasher: &mut DefaultHasher) {
    std::mem::discriminant(imm).hash(hasher);
    match imm {
        ImmediateValue::I8(v) => v.hash(hasher),
        ImmediateValue::I16(v) => v.hash(hasher),
        ImmediateValue::I32(v) => v.hash(hasher),
        ImmediateValue::I64(v) => v.hash(hasher),
        ImmediateValue::U8(v) => v.hash(hasher),
        ImmediateValue::U16(v) => v.hash(hasher),
        ImmediateValue::U32(v) => v.hash(hasher),
        ImmediateValue::U64(v) => v.hash(hasher),
        ImmediateValue::F32(v) => v.to_bits().hash(hasher),
        ImmediateValue::F64(v) => v.to_bits().hash(hasher),
        ImmediateValue::Bool(v) => v.hash(hasher),
        ImmediateValue::Char(v) => v.hash(hasher),
        ImmediateValue::String(v) => v.hash(hasher),
    }
}

fn hash_kind(kind: &ValueKind) -> ValueId {
    let mut hasher = DefaultHasher::new();
    std::mem::discriminant(kind).hash(&mut hasher);
    match kind {
        ValueKind::Immediate(imm) => hash_immediate(imm, &mut hasher),
        ValueKind::Local(name) | ValueKind::Global(name) | ValueKind::Temporary(name) => name.hash(&mut hasher),
    }
    ValueId(hasher.finish())
}

impl Value {
    pub fn new_immediate(imm: ImmediateValue) -> Self {
        let ty = match &imm {
            ImmediateValue::I8(_) => IrType::I8,
            ImmediateValue::I16(_) => IrType::I16,
            ImmediateValue::I32(_) => IrType::I32,
            ImmediateValue::I64(_) => IrType::I64,
            ImmediateValue::U8(_) => IrType::U8,
            ImmediateValue::U16(_) => IrType::U16,
            ImmediateValue::U32(_) => IrType::U32,
            ImmediateValue::U64(_) => IrType::U64,
            ImmediateValue::F32(_) => IrType::F32,
            ImmediateValue::F64(_) => IrType::F64,
            ImmediateValue::Bool(_) => IrType::Bool,
            ImmediateValue::Char(_) => IrType::Char,
            ImmediateValue::String(_) => IrType::String,
        };
        let kind = ValueKind::Immediate(imm);
        let id = hash_kind(&kind);
        Value { id, kind, ty }
    }

    pub fn new_local(name: String, ty: IrType) -> Self {
        let kind = ValueKind::Local(name);
        let id = hash_kind(&kind);
        Value { id, kind, ty }
    }

    pub fn new_temporary(id: String, ty: IrType) -> Self {
        let kind = ValueKind::Temporary(id);
        let value_id = hash_kind(&kind);
        Value { id: value_id, kind, ty }
    }

    pub fn new_global(name: String, ty: IrType) -> Self {
        let kind = ValueKind::Global(name);
        let id = hash_kind(&kind);
        Value { id, kind, ty }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            ValueKind::Immediate(imm) => write!(f, "{imm}"),
            ValueKind::Local(name) => write!(f, "%{name}"),
            ValueKind::Global(name) => write!(f, "@{name}"),
            ValueKind::Temporary(id) => write!(f, "t{id}"),
        }
    }
}

impl fmt::Display for ImmediateValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ImmediateValue::I8(i) => write!(f, "{i}i8"),
            ImmediateValue::I16(i) => write!(f, "{i}i16"),
            ImmediateValue::I32(i) => write!(f, "{i}i32"),
            ImmediateValue::I64(i) => write!(f, "{i}i64"),
            ImmediateValue::U8(u) => write!(f, "{u}u8"),
            ImmediateValue::U16(u) => write!(f, "{u}u16"),
            ImmediateValue::U32(u) => write!(f, "{u}u32"),
            ImmediateValue::U64(u) => write!(f, "{u}u64"),
            ImmediateValue::F32(flt) => write!(f, "{flt}f32"),
            ImmediateValue::F64(flt) => write!(f, "{flt}f64"),
            ImmediateValue::Bool(b) => write!(f, "{b}"),
            ImmediateValue::Char(c) => write!(f, "'{c}'"),
            ImmediateValue::String(s) => write!(f, "\"{}\"", s.escape_default()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_temporary_name_yields_same_id() {
        let a = Value::new_temporary("7".to_string(), IrType::I32);
        let b = Value::new_temporary("7".to_string(), IrType::I32);
        assert_eq!(a.id, b.id);
    }

    #[test]
    fn distinct_locals_yield_distinct_ids() {
        let a = Value::new_local("x".to_string(), IrType::I32);
        let b = Value::new_local("y".to_string(), IrType::I32);
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn immediate_and_temporary_with_same_name_differ() {
        let imm = Value::new_immediate(ImmediateValue::I32(7));
        let temp = Value::new_temporary("7".to_string(), IrType::I32);
        assert_ne!(imm.id, temp.id);
    }
}
