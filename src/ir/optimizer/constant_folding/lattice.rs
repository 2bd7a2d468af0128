//! Lattice value representation for SCCP analysis
//!
//! Implements the three-level flat lattice (Top, Constant, Bottom) used to
//! track the compile-time state of an SSA value during sparse conditional
//! constant propagation.

use crate::ir::{ImmediateValue, IrType};

/// Represents the compile-time state of an SSA value in the lattice.
///
/// The lattice ordering is: Top > Constant(c) > Bottom. Values only ever
/// move *down* the lattice as analysis gathers more evidence:
/// - Top (⊤): no evidence yet (optimistic starting assumption)
/// - Constant(c): proven to always evaluate to the same compile-time value
/// - Bottom (⊥): proven to vary at runtime, or provably unreachable
#[derive(Debug, Clone, PartialEq)]
pub enum LatticeValue {
    /// Top (⊤): optimistic default — no evidence this value is non-constant.
    Top,
    /// Proven compile-time constant value.
    Constant(ConstantValue),
    /// Bottom (⊥): proven to be non-constant (or the defining code is unreachable).
    Bottom,
}

/// Constant value representation for all IR scalar types.
#[derive(Debug, Clone, PartialEq)]
pub enum ConstantValue {
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
}

impl LatticeValue {
    /// Computes the lattice meet (greatest lower bound) of two values.
    ///
    /// Used both to merge phi operands and to detect whether a proposed
    /// new value for a variable is actually more precise than its current
    /// one (meet must equal the new value, per monotonicity).
    ///
    /// - meet(Top, x) = meet(x, Top) = x
    /// - meet(Bottom, x) = meet(x, Bottom) = Bottom
    /// - meet(Constant(a), Constant(a)) = Constant(a)
    /// - meet(Constant(a), Constant(b)) where a != b = Bottom
    #[must_use]
    pub fn meet(&self, other: &Self) -> Self {
        match (self, other) {
            (Self::Top, x) | (x, Self::Top) => x.clone(),
            (Self::Bottom, _) | (_, Self::Bottom) => Self::Bottom,
            (Self::Constant(a), Self::Constant(b)) => {
                if a == b { Self::Constant(a.clone()) } else { Self::Bottom }
            }
        }
    }

    /// Returns true if this value is a proven constant.
    #[must_use]
    pub const fn is_constant(&self) -> bool {
        matches!(self, Self::Constant(_))
    }

    /// Returns the constant value if this is `Constant`, otherwise `None`.
    #[must_use]
    pub const fn as_constant(&self) -> Option<&ConstantValue> {
        match self {
            Self::Constant(val) => Some(val),
            _ => None,
        }
    }

    /// Returns true if this value is `Top` (no evidence yet).
    #[must_use]
    pub const fn is_top(&self) -> bool {
        matches!(self, Self::Top)
    }

    /// Returns true if this value is `Bottom` (proven non-constant).
    #[must_use]
    pub const fn is_bottom(&self) -> bool {
        matches!(self, Self::Bottom)
    }

    /// Returns true if `other` is strictly lower than or equal to `self`
    /// in the lattice order (used to assert monotonicity of a transition).
    #[must_use]
    pub fn descends_to(&self, other: &Self) -> bool {
        matches!(
            (self, other),
            (Self::Top, _) | (Self::Constant(_), Self::Constant(_) | Self::Bottom) | (Self::Bottom, Self::Bottom)
        )
    }
}

impl ConstantValue {
    /// Gets the IR type of this constant value.
    #[must_use]
    pub const fn get_type(&self) -> IrType {
        match self {
            Self::I8(_) => IrType::I8,
            Self::I16(_) => IrType::I16,
            Self::I32(_) => IrType::I32,
            Self::I64(_) => IrType::I64,
            Self::U8(_) => IrType::U8,
            Self::U16(_) => IrType::U16,
            Self::U32(_) => IrType::U32,
            Self::U64(_) => IrType::U64,
            Self::F32(_) => IrType::F32,
            Self::F64(_) => IrType::F64,
            Self::Bool(_) => IrType::Bool,
            Self::Char(_) => IrType::Char,
        }
    }

    /// Checks if two constant values have matching types.
    #[must_use]
    pub fn types_match(&self, other: &Self) -> bool {
        std::mem::discriminant(self) == std::mem::discriminant(other)
    }

    /// Attempts to extract a boolean value.
    #[must_use]
    pub const fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Attempts to extract an i32 value.
    #[must_use]
    pub const fn as_i32(&self) -> Option<i32> {
        match self {
            Self::I32(v) => Some(*v),
            _ => None,
        }
    }

    /// Converts this constant back into an IR immediate value.
    #[must_use]
    pub fn to_immediate(&self) -> crate::ir::ImmediateValue {
        use crate::ir::ImmediateValue as Imm;
        match *self {
            Self::I8(v) => Imm::I8(v),
            Self::I16(v) => Imm::I16(v),
            Self::I32(v) => Imm::I32(v),
            Self::I64(v) => Imm::I64(v),
            Self::U8(v) => Imm::U8(v),
            Self::U16(v) => Imm::U16(v),
            Self::U32(v) => Imm::U32(v),
            Self::U64(v) => Imm::U64(v),
            Self::F32(v) => Imm::F32(v),
            Self::F64(v) => Imm::F64(v),
            Self::Bool(v) => Imm::Bool(v),
            Self::Char(v) => Imm::Char(v),
        }
    }

    /// Converts an IR immediate value into a constant, when the immediate's
    /// type is representable in the lattice.
    ///
    /// Immediate operands are already known at every program point — they
    /// never need a lookup in the environment's lattice map. `String`
    /// immediates have no lattice representation and fold to `None`.
    #[must_use]
    pub fn from_immediate(imm: &ImmediateValue) -> Option<Self> {
        Some(match *imm {
            ImmediateValue::I8(v) => Self::I8(v),
            ImmediateValue::I16(v) => Self::I16(v),
            ImmediateValue::I32(v) => Self::I32(v),
            ImmediateValue::I64(v) => Self::I64(v),
            ImmediateValue::U8(v) => Self::U8(v),
            ImmediateValue::U16(v) => Self::U16(v),
            ImmediateValue::U32(v) => Self::U32(v),
            ImmediateValue::U64(v) => Self::U64(v),
            ImmediateValue::F32(v) => Self::F32(v),
            ImmediateValue::F64(v) => Self::F64(v),
            ImmediateValue::Bool(v) => Self::Bool(v),
            ImmediateValue::Char(v) => Self::Char(v),
            ImmediateValue::String(_) => return None,
        })
    }
}
