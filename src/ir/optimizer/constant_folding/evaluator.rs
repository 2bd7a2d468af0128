//! Constant expression evaluation engine
//!
//! Evaluates binary and unary operations on constant operands at compile time,
//! handling type-specific semantics and edge cases.
//!
//! # Type Support
//!
//! - Signed integers: I8, I16, I32, I64
//! - Unsigned integers: U8, U16, U32, U64
//! - Floating-point: F32, F64 (IEEE 754 semantics)
//! - Characters: Char (Unicode support)
//! - Booleans: Bool
//!
//! # Overflow Handling
//!
//! Integer operations use `checked_*` methods. Overflow → `LatticeValue::Bottom` (per FR-004).
//!
//! # IEEE 754 Compliance
//!
//! Floating-point operations preserve NaN propagation, signed zero, and infinity semantics.

use super::lattice::{ConstantValue, LatticeValue};
use crate::ir::{IrBinaryOp, IrUnaryOp};
use BinaryOp::{And, Eq, Ge, Gt, Le, Lt, Ne, Or};
use UnaryOp::{Neg, Not};

/// Evaluates constant expressions during SCCP analysis
///
/// Provides type-safe constant folding with proper edge case handling.
/// All evaluation methods are pure functions with no side effects.
pub struct ConstantEvaluator;

impl ConstantEvaluator {
    /// Evaluates a binary operation on two constant values.
    /// Returns `Bottom` if overflow occurs or operands are incompatible.
    #[must_use]
    pub fn eval_binary_i32(op: BinaryOp, lhs: i32, rhs: i32) -> LatticeValue {
        use BinaryOp::{Add, And, Div, Eq, Ge, Gt, Le, Lt, Mod, Mul, Ne, Or, Sub};

        match op {
            // Arithmetic operations
            Add => lhs
                .checked_add(rhs)
                .map_or(LatticeValue::Bottom, |result| LatticeValue::Constant(ConstantValue::I32(result))),
            Sub => lhs
                .checked_sub(rhs)
                .map_or(LatticeValue::Bottom, |result| LatticeValue::Constant(ConstantValue::I32(result))),
            Mul => lhs
                .checked_mul(rhs)
                .map_or(LatticeValue::Bottom, |result| LatticeValue::Constant(ConstantValue::I32(result))),
            Div => {
                if rhs == 0 {
                    // Division by zero: not foldable, caller logs a diagnostic
                    LatticeValue::Bottom
                } else if let Some(result) = lhs.checked_div(rhs) {
                    LatticeValue::Constant(ConstantValue::I32(result))
                } else {
                    LatticeValue::Bottom
                }
            }
            Mod => {
                if rhs == 0 {
                    LatticeValue::Bottom
                } else if let Some(result) = lhs.checked_rem(rhs) {
                    LatticeValue::Constant(ConstantValue::I32(result))
                } else {
                    LatticeValue::Bottom
                }
            }
            // Comparison and boolean ops not handled here
            Eq | Ne | Lt | Le | Gt | Ge | And | Or => LatticeValue::Bottom,
        }
    }

    /// Evaluates a unary operation on a constant value
    #[must_use]
    pub fn eval_unary_i32(op: UnaryOp, operand: i32) -> LatticeValue {
        use UnaryOp::{Neg, Not};

        match op {
            Neg => operand
                .checked_neg()
                .map_or(LatticeValue::Bottom, |result| LatticeValue::Constant(ConstantValue::I32(result))),
            Not => LatticeValue::Bottom, // Not is for booleans, not i32
        }
    }

    // ========================================================================
    // I8 Arithmetic Operations (T079)
    // ========================================================================

    /// Evaluates binary operations on I8 values
    #[must_use]
    pub fn eval_binary_i8(op: BinaryOp, lhs: i8, rhs: i8) -> LatticeValue {
        use BinaryOp::{Add, And, Div, Eq, Ge, Gt, Le, Lt, Mod, Mul, Ne, Or, Sub};

        match op {
            Add => lhs.checked_add(rhs).map_or(LatticeValue::Bottom, |r| LatticeValue::Constant(ConstantValue::I8(r))),
            Sub => lhs.checked_sub(rhs).map_or(LatticeValue::Bottom, |r| LatticeValue::Constant(ConstantValue::I8(r))),
            Mul => lhs.checked_mul(rhs).map_or(LatticeValue::Bottom, |r| LatticeValue::Constant(ConstantValue::I8(r))),
            Div => {
                if rhs == 0 {
                    LatticeValue::Bottom
                } else {
                    lhs.checked_div(rhs).map_or(LatticeValue::Bottom, |r| LatticeValue::Constant(ConstantValue::I8(r)))
                }
            }
            Mod => {
                if rhs == 0 {
                    LatticeValue::Bottom
                } else {
                    lhs.checked_rem(rhs).map_or(LatticeValue::Bottom, |r| LatticeValue::Constant(ConstantValue::I8(r)))
                }
            }
            Eq | Ne | Lt | Le | Gt | Ge | And | Or => LatticeValue::Bottom,
        }
    }

    /// Evaluates unary operations on I8 values
    #[must_use]
    pub fn eval_unary_i8(op: UnaryOp, operand: i8) -> LatticeValue {
        use UnaryOp::{Neg, Not};
        match op {
            Neg => operand.checked_neg().map_or(LatticeValue::Bottom, |r| LatticeValue::Constant(ConstantValue::I8(r))),
            Not => LatticeValue::Bottom,
        }
    }

    // ========================================================================
    // I16 Arithmetic Operations (T080)
    // ========================================================================

    /// Evaluates binary operations on I16 values
    #[must_use]
    pub fn eval_binary_i16(op: BinaryOp, lhs: i16, rhs: i16) -> LatticeValue {
        use BinaryOp::{Add, And, Div, Eq, Ge, Gt, Le, Lt, Mod, Mul, Ne, Or, Sub};

        match op {
            Add => lhs.checked_add(rhs).map_or(LatticeValue::Bottom, |r| LatticeValue::Constant(ConstantValue::I16(r))),
            Sub => lhs.checked_sub(rhs).map_or(LatticeValue::Bottom, |r| LatticeValue::Constant(ConstantValue::I16(r))),
            Mul => lhs.checked_mul(rhs).map_or(LatticeValue::Bottom, |r| LatticeValue::Constant(ConstantValue::I16(r))),
            Div => {
                if rhs == 0 {
                    LatticeValue::Bottom
                } else {
                    lhs.checked_div(rhs).map_or(LatticeValue::Bottom, |r| LatticeValue::Constant(ConstantValue::I16(r)))
                }
            }
            Mod => {
                if rhs == 0 {
                    LatticeValue::Bottom
                } else {
                    lhs.checked_rem(rhs).map_or(LatticeValue::Bottom, |r| LatticeValue::Constant(ConstantValue::I16(r)))
                }
            }
            Eq | Ne | Lt | Le | Gt | Ge | And | Or => LatticeValue::Bottom,
        }
    }

    /// Evaluates unary operations on I16 values
    #[must_use]
    pub fn eval_unary_i16(op: UnaryOp, operand: i16) -> LatticeValue {
        use UnaryOp::{Neg, Not};
        match op {
            Neg => operand.checked_neg().map_or(LatticeValue::Bottom, |r| LatticeValue::Constant(ConstantValue::I16(r))),
            Not => LatticeValue::Bottom,
        }
    }

    // ========================================================================
    // I64 Arithmetic Operations (T081)
    // ========================================================================

    /// Evaluates binary operations on I64 values
    #[must_use]
    pub fn eval_binary_i64(op: BinaryOp, lhs: i64, rhs: i64) -> LatticeValue {
        use BinaryOp::{Add, And, Div, Eq, Ge, Gt, Le, Lt, Mod, Mul, Ne, Or, Sub};

        match op {
            Add => lhs.checked_add(rhs).map_or(LatticeValue::Bottom, |r| LatticeValue::Constant(ConstantValue::I64(r))),
            Sub => lhs.checked_sub(rhs).map_or(LatticeValue::Bottom, |r| LatticeValue::Constant(ConstantValue::I64(r))),
            Mul => lhs.checked_mul(rhs).map_or(LatticeValue::Bottom, |r| LatticeValue::Constant(ConstantValue::I64(r))),
            Div => {
                if rhs == 0 {
                    LatticeValue::Bottom
                } else {
                    lhs.checked_div(rhs).map_or(LatticeValue::Bottom, |r| LatticeValue::Constant(ConstantValue::I64(r)))
                }
            }
            Mod => {
                if rhs == 0 {
                    LatticeValue::Bottom
                } else {
                    lhs.checked_rem(rhs).map_or(LatticeValue::Bottom, |r| LatticeValue::Constant(ConstantValue::I64(r)))
                }
            }
            Eq | Ne | Lt | Le | Gt | Ge | And | Or => LatticeValue::Bottom,
        }
    }

    /// Evaluates unary operations on I64 values
    #[must_use]
    pub fn eval_unary_i64(op: UnaryOp, operand: i64) -> LatticeValue {
        use UnaryOp::{Neg, Not};
        match op {
            Neg => operand.checked_neg().map_or(LatticeValue::Bottom, |r| LatticeValue::Constant(ConstantValue::I64(r))),
            Not => LatticeValue::Bottom,
        }
    }

    // ========================================================================
    // U8 Arithmetic Operations (T082)
    // ========================================================================

    /// Evaluates binary operations on U8 values
    #[must_use]
    pub fn eval_binary_u8(op: BinaryOp, lhs: u8, rhs: u8) -> LatticeValue {
        use BinaryOp::{Add, And, Div, Eq, Ge, Gt, Le, Lt, Mod, Mul, Ne, Or, Sub};

        match op {
            Add => lhs.checked_add(rhs).map_or(LatticeValue::Bottom, |r| LatticeValue::Constant(ConstantValue::U8(r))),
            Sub => lhs.checked_sub(rhs).map_or(LatticeValue::Bottom, |r| LatticeValue::Constant(ConstantValue::U8(r))),
            Mul => lhs.checked_mul(rhs).map_or(LatticeValue::Bottom, |r| LatticeValue::Constant(ConstantValue::U8(r))),
            Div => {
                if rhs == 0 {
                    LatticeValue::Bottom
                } else {
                    lhs.checked_div(rhs).map_or(LatticeValue::Bottom, |r| LatticeValue::Constant(ConstantValue::U8(r)))
                }
            }
            Mod => {
                if rhs == 0 {
                    LatticeValue::Bottom
                } else {
                    lhs.checked_rem(rhs).map_or(LatticeValue::Bottom, |r| LatticeValue::Constant(ConstantValue::U8(r)))
                }
            }
            Eq | Ne | Lt | Le | Gt | Ge | And | Or => LatticeValue::Bottom,
        }
    }

    // ========================================================================
    // U16 Arithmetic Operations (T083)
    // ========================================================================

    /// Evaluates binary operations on U16 values
    #[must_use]
    pub fn eval_binary_u16(op: BinaryOp, lhs: u16, rhs: u16) -> LatticeValue {
        use BinaryOp::{Add, And, Div, Eq, Ge, Gt, Le, Lt, Mod, Mul, Ne, Or, Sub};

        match op {
            Add => lhs.checked_add(rhs).map_or(LatticeValue::Bottom, |r| LatticeValue::Constant(ConstantValue::U16(r))),
            Sub => lhs.checked_sub(rhs).map_or(LatticeValue::Bottom, |r| LatticeValue::Constant(ConstantValue::U16(r))),
            Mul => lhs.checked_mul(rhs).map_or(LatticeValue::Bottom, |r| LatticeValue::Constant(ConstantValue::U16(r))),
            Div => {
                if rhs == 0 {
                    LatticeValue::Bottom
                } else {
                    lhs.checked_div(rhs).map_or(LatticeValue::Bottom, |r| LatticeValue::Constant(ConstantValue::U16(r)))
                }
            }
            Mod => {
                if rhs == 0 {
                    LatticeValue::Bottom
                } else {
                    lhs.checked_rem(rhs).map_or(LatticeValue::Bottom, |r| LatticeValue::Constant(ConstantValue::U16(r)))
                }
            }
            Eq | Ne | Lt | Le | Gt | Ge | And | Or => LatticeValue::Bottom,
        }
    }

    // ========================================================================
    // U32 Arithmetic Operations (T084)
    // ========================================================================

    /// Evaluates binary operations on U32 values
    #[must_use]
    pub fn eval_binary_u32(op: BinaryOp, lhs: u32, rhs: u32) -> LatticeValue {
        use BinaryOp::{Add, And, Div, Eq, Ge, Gt, Le, Lt, Mod, Mul, Ne, Or, Sub};

        match op {
            Add => lhs.checked_add(rhs).map_or(LatticeValue::Bottom, |r| LatticeValue::Constant(ConstantValue::U32(r))),
            Sub => lhs.checked_sub(rhs).map_or(LatticeValue::Bottom, |r| LatticeValue::Constant(ConstantValue::U32(r))),
            Mul => lhs.checked_mul(rhs).map_or(LatticeValue::Bottom, |r| LatticeValue::Constant(ConstantValue::U32(r))),
            Div => {
                if rhs == 0 {
                    LatticeValue::Bottom
                } else {
                    lhs.checked_div(rhs).map_or(LatticeValue::Bottom, |r| LatticeValue::Constant(ConstantValue::U32(r)))
                }
            }
            Mod => {
                if rhs == 0 {
                    LatticeValue::Bottom
                } else {
                    lhs.checked_rem(rhs).map_or(LatticeValue::Bottom, |r| LatticeValue::Constant(ConstantValue::U32(r)))
                }
            }
            Eq | Ne | Lt | Le | Gt | Ge | And | Or => LatticeValue::Bottom,
        }
    }

    // ========================================================================
    // U64 Arithmetic Operations (T085)
    // ========================================================================

    /// Evaluates binary operations on U64 values
    #[must_use]
    pub fn eval_binary_u64(op: BinaryOp, lhs: u64, rhs: u64) -> LatticeValue {
        use BinaryOp::{Add, And, Div, Eq, Ge, Gt, Le, Lt, Mod, Mul, Ne, Or, Sub};

        match op {
            Add => lhs.checked_add(rhs).map_or(LatticeValue::Bottom, |r| LatticeValue::Constant(ConstantValue::U64(r))),
            Sub => lhs.checked_sub(rhs).map_or(LatticeValue::Bottom, |r| LatticeValue::Constant(ConstantValue::U64(r))),
            Mul => lhs.checked_mul(rhs).map_or(LatticeValue::Bottom, |r| LatticeValue::Constant(ConstantValue::U64(r))),
            Div => {
                if rhs == 0 {
                    LatticeValue::Bottom
                } else {
                    lhs.checked_div(rhs).map_or(LatticeValue::Bottom, |r| LatticeValue::Constant(ConstantValue::U64(r)))
                }
            }
            Mod => {
                if rhs == 0 {
                    LatticeValue::Bottom
                } else {
                    lhs.checked_rem(rhs).map_or(LatticeValue::Bottom, |r| LatticeValue::Constant(ConstantValue::U64(r)))
                }
            }
            Eq | Ne | Lt | Le | Gt | Ge | And | Or => LatticeValue::Bottom,
        }
    }

    // ========================================================================
    // F32 Arithmetic Operations (T086) - IEEE 754 semantics
    // ========================================================================

    /// Evaluates binary operations on F32 values with IEEE 754 semantics
    #[must_use]
    pub fn eval_binary_f32(op: BinaryOp, lhs: f32, rhs: f32) -> LatticeValue {
        use BinaryOp::{Add, And, Div, Eq, Ge, Gt, Le, Lt, Mod, Mul, Ne, Or, Sub};

        match op {
            Add => {
                let result = lhs + rhs;
                LatticeValue::Constant(ConstantValue::F32(result))
            }
            Sub => {
                let result = lhs - rhs;
                LatticeValue::Constant(ConstantValue::F32(result))
            }
            Mul => {
                let result = lhs * rhs;
                LatticeValue::Constant(ConstantValue::F32(result))
            }
            Div => {
                let result = lhs / rhs;
                LatticeValue::Constant(ConstantValue::F32(result))
            }
            Mod => {
                let result = lhs % rhs;
                LatticeValue::Constant(ConstantValue::F32(result))
            }
            Eq | Ne | Lt | Le | Gt | Ge | And | Or => LatticeValue::Bottom,
        }
    }

    /// Evaluates unary operations on F32 values
    #[must_use]
    pub fn eval_unary_f32(op: UnaryOp, operand: f32) -> LatticeValue {
        use UnaryOp::{Neg, Not};
        match op {
            Neg => LatticeValue::Constant(ConstantValue::F32(-operand)),
            Not => LatticeValue::Bottom,
        }
    }

    // ========================================================================
    // F64 Arithmetic Operations (T087) - IEEE 754 semantics
    // ========================================================================

    /// Evaluates binary operations on F64 values with IEEE 754 semantics
    #[must_use]
    pub fn eval_binary_f64(op: BinaryOp, lhs: f64, rhs: f64) -> LatticeValue {
        use BinaryOp::{Add, And, Div, Eq, Ge, Gt, Le, Lt, Mod, Mul, Ne, Or, Sub};

        match op {
            Add => {
                let result = lhs + rhs;
                LatticeValue::Constant(ConstantValue::F64(result))
            }
            Sub => {
                let result = lhs - rhs;
                LatticeValue::Constant(ConstantValue::F64(result))
            }
            Mul => {
                let result = lhs * rhs;
                LatticeValue::Constant(ConstantValue::F64(result))
            }
            Div => {
                let result = lhs / rhs;
                LatticeValue::Constant(ConstantValue::F64(result))
            }
            Mod => {
                let result = lhs % rhs;
                LatticeValue::Constant(ConstantValue::F64(result))
            }
            Eq | Ne | Lt | Le | Gt | Ge | And | Or => LatticeValue::Bottom,
        }
    }

    /// Evaluates unary operations on F64 values
    #[must_use]
    pub fn eval_unary_f64(op: UnaryOp, operand: f64) -> LatticeValue {
        use UnaryOp::{Neg, Not};
        match op {
            Neg => LatticeValue::Constant(ConstantValue::F64(-operand)),
            Not => LatticeValue::Bottom,
        }
    }

    // ========================================================================
    // Special Float Value Checks (T088, T089, T090)
    // ========================================================================

    /// Checks if a floating-point value is NaN (T088)
    #[must_use]
    pub const fn is_nan_f32(value: f32) -> bool {
        value.is_nan()
    }

    /// Checks if a floating-point value is NaN (T088)
    #[must_use]
    pub const fn is_nan_f64(value: f64) -> bool {
        value.is_nan()
    }

    /// Checks if a floating-point value is infinite (T089)
    #[must_use]
    pub const fn is_infinite_f32(value: f32) -> bool {
        value.is_infinite()
    }

    /// Checks if a floating-point value is infinite (T089)
    #[must_use]
    pub const fn is_infinite_f64(value: f64) -> bool {
        value.is_infinite()
    }

    /// Checks if a floating-point value is negative zero (T090)
    #[must_use]
    pub fn is_neg_zero_f32(value: f32) -> bool {
        value == 0.0 && value.is_sign_negative()
    }

    /// Checks if a floating-point value is negative zero (T090)
    #[must_use]
    pub fn is_neg_zero_f64(value: f64) -> bool {
        value == 0.0 && value.is_sign_negative()
    }

    // ========================================================================
    // Char Operations (T091)
    // ========================================================================

    /// Evaluates operations on Char values.
    /// Most operations on chars are not meaningful and fall through to `Bottom`.
    #[must_use]
    pub const fn eval_char_eq(lhs: char, rhs: char) -> LatticeValue {
        LatticeValue::Constant(ConstantValue::Bool(lhs == rhs))
    }

    #[must_use]
    pub const fn eval_char_ne(lhs: char, rhs: char) -> LatticeValue {
        LatticeValue::Constant(ConstantValue::Bool(lhs != rhs))
    }

    // ========================================================================
    // Bitwise Operations for Integer Types (T092)
    // ========================================================================

    /// Evaluates bitwise operations on I8 values
    /// Evaluates bitwise operations on I8 values
    #[must_use]
    #[allow(clippy::cast_sign_loss)]
    pub const fn eval_bitwise_i8(op: BitwiseOp, lhs: i8, rhs: i8) -> LatticeValue {
        use BitwiseOp::{And, Or, Shl, Shr, Xor};
        let result = match op {
            And => lhs & rhs,
            Or => lhs | rhs,
            Xor => lhs ^ rhs,
            Shl => lhs.wrapping_shl(rhs as u32),
            Shr => lhs.wrapping_shr(rhs as u32),
        };
        LatticeValue::Constant(ConstantValue::I8(result))
    }

    /// Evaluates bitwise operations on I16 values
    #[must_use]
    #[allow(clippy::cast_sign_loss)]
    pub const fn eval_bitwise_i16(op: BitwiseOp, lhs: i16, rhs: i16) -> LatticeValue {
        use BitwiseOp::{And, Or, Shl, Shr, Xor};
        let result = match op {
            And => lhs & rhs,
            Or => lhs | rhs,
            Xor => lhs ^ rhs,
            Shl => lhs.wrapping_shl(rhs as u32),
            Shr => lhs.wrapping_shr(rhs as u32),
        };
        LatticeValue::Constant(ConstantValue::I16(result))
    }

    /// Evaluates bitwise operations on I32 values
    #[must_use]
    #[allow(clippy::cast_sign_loss)]
    pub const fn eval_bitwise_i32(op: BitwiseOp, lhs: i32, rhs: i32) -> LatticeValue {
        use BitwiseOp::{And, Or, Shl, Shr, Xor};
        let result = match op {
            And => lhs & rhs,
            Or => lhs | rhs,
            Xor => lhs ^ rhs,
            Shl => lhs.wrapping_shl(rhs as u32),
            Shr => lhs.wrapping_shr(rhs as u32),
        };
        LatticeValue::Constant(ConstantValue::I32(result))
    }

    /// Evaluates bitwise operations on I64 values
    #[must_use]
    #[allow(clippy::cast_sign_loss, clippy::cast_possible_truncation)]
    pub const fn eval_bitwise_i64(op: BitwiseOp, lhs: i64, rhs: i64) -> LatticeValue {
        use BitwiseOp::{And, Or, Shl, Shr, Xor};
        let result = match op {
            And => lhs & rhs,
            Or => lhs | rhs,
            Xor => lhs ^ rhs,
            Shl => lhs.wrapping_shl(rhs as u32),
            Shr => lhs.wrapping_shr(rhs as u32),
        };
        LatticeValue::Constant(ConstantValue::I64(result))
    }

    /// Evaluates bitwise operations on U8 values
    #[must_use]
    pub const fn eval_bitwise_u8(op: BitwiseOp, lhs: u8, rhs: u8) -> LatticeValue {
        use BitwiseOp::{And, Or, Shl, Shr, Xor};
        let result = match op {
            And => lhs & rhs,
            Or => lhs | rhs,
            Xor => lhs ^ rhs,
            Shl => lhs.wrapping_shl(rhs as u32),
            Shr => lhs.wrapping_shr(rhs as u32),
        };
        LatticeValue::Constant(ConstantValue::U8(result))
    }

    /// Evaluates bitwise operations on U16 values
    #[must_use]
    pub const fn eval_bitwise_u16(op: BitwiseOp, lhs: u16, rhs: u16) -> LatticeValue {
        use BitwiseOp::{And, Or, Shl, Shr, Xor};
        let result = match op {
            And => lhs & rhs,
            Or => lhs | rhs,
            Xor => lhs ^ rhs,
            Shl => lhs.wrapping_shl(rhs as u32),
            Shr => lhs.wrapping_shr(rhs as u32),
        };
        LatticeValue::Constant(ConstantValue::U16(result))
    }

    /// Evaluates bitwise operations on U32 values
    #[must_use]
    pub const fn eval_bitwise_u32(op: BitwiseOp, lhs: u32, rhs: u32) -> LatticeValue {
        use BitwiseOp::{And, Or, Shl, Shr, Xor};
        let result = match op {
            And => lhs & rhs,
            Or => lhs | rhs,
            Xor => lhs ^ rhs,
            Shl => lhs.wrapping_shl(rhs),
            Shr => lhs.wrapping_shr(rhs),
        };
        LatticeValue::Constant(ConstantValue::U32(result))
    }

    /// Evaluates bitwise operations on U64 values
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub const fn eval_bitwise_u64(op: BitwiseOp, lhs: u64, rhs: u64) -> LatticeValue {
        use BitwiseOp::{And, Or, Shl, Shr, Xor};
        let result = match op {
            And => lhs & rhs,
            Or => lhs | rhs,
            Xor => lhs ^ rhs,
            Shl => lhs.wrapping_shl(rhs as u32),
            Shr => lhs.wrapping_shr(rhs as u32),
        };
        LatticeValue::Constant(ConstantValue::U64(result))
    }

    /// Evaluates bitwise NOT on integer values
    #[must_use]
    pub const fn eval_bitwise_not_i8(operand: i8) -> LatticeValue {
        LatticeValue::Constant(ConstantValue::I8(!operand))
    }

    #[must_use]
    pub const fn eval_bitwise_not_i16(operand: i16) -> LatticeValue {
        LatticeValue::Constant(ConstantValue::I16(!operand))
    }

    #[must_use]
    pub const fn eval_bitwise_not_i32(operand: i32) -> LatticeValue {
        LatticeValue::Constant(ConstantValue::I32(!operand))
    }

    #[must_use]
    pub const fn eval_bitwise_not_i64(operand: i64) -> LatticeValue {
        LatticeValue::Constant(ConstantValue::I64(!operand))
    }

    #[must_use]
    pub const fn eval_bitwise_not_u8(operand: u8) -> LatticeValue {
        LatticeValue::Constant(ConstantValue::U8(!operand))
    }

    #[must_use]
    pub const fn eval_bitwise_not_u16(operand: u16) -> LatticeValue {
        LatticeValue::Constant(ConstantValue::U16(!operand))
    }

    #[must_use]
    pub const fn eval_bitwise_not_u32(operand: u32) -> LatticeValue {
        LatticeValue::Constant(ConstantValue::U32(!operand))
    }

    #[must_use]
    pub const fn eval_bitwise_not_u64(operand: u64) -> LatticeValue {
        LatticeValue::Constant(ConstantValue::U64(!operand))
    }

    /// Checks if a division by zero occurred
    #[must_use]
    pub const fn is_division_by_zero(op: BinaryOp, rhs: &ConstantValue) -> bool {
        matches!(op, BinaryOp::Div | BinaryOp::Mod)
            && matches!(
                rhs,
                ConstantValue::I8(0)
                    | ConstantValue::I16(0)
                    | ConstantValue::I32(0)
                    | ConstantValue::I64(0)
                    | ConstantValue::U8(0)
                    | ConstantValue::U16(0)
                    | ConstantValue::U32(0)
                    | ConstantValue::U64(0)
            )
    }

    /// Evaluates comparison operations on I32 values
    /// Returns Bool constant for valid comparisons
    #[must_use]
    pub const fn eval_compare_i32(op: BinaryOp, lhs: i32, rhs: i32) -> LatticeValue {
        let result = match op {
            Eq => lhs == rhs,
            Ne => lhs != rhs,
            Lt => lhs < rhs,
            Le => lhs <= rhs,
            Gt => lhs > rhs,
            Ge => lhs >= rhs,
            _ => return LatticeValue::Bottom, // Not a comparison op
        };

        LatticeValue::Constant(ConstantValue::Bool(result))
    }

    /// Evaluates boolean operations (And, Or, Not)
    #[must_use]
    pub const fn eval_binary_bool(op: BinaryOp, lhs: bool, rhs: bool) -> LatticeValue {
        let result = match op {
            And => lhs && rhs,
            Or => lhs || rhs,
            _ => return LatticeValue::Bottom, // Not a boolean op
        };

        LatticeValue::Constant(ConstantValue::Bool(result))
    }

    /// Evaluates unary Not operation on boolean
    #[must_use]
    pub const fn eval_unary_bool(op: UnaryOp, operand: bool) -> LatticeValue {
        match op {
            Not => LatticeValue::Constant(ConstantValue::Bool(!operand)),
            Neg => LatticeValue::Bottom, // Not a boolean unary op
        }
    }
}

/// Evaluates an IR binary operation on two lattice values, dispatching to
/// the type-specific evaluator above once both operands are known constants.
///
/// `Top` dominates when no `Bottom` operand is present (not enough evidence
/// yet to fold); `Bottom` dominates otherwise (the expression is proven
/// non-constant).
#[must_use]
pub fn evaluate_binary_op(op: &IrBinaryOp, left: &LatticeValue, right: &LatticeValue) -> LatticeValue {
    match (left, right) {
        (LatticeValue::Bottom, _) | (_, LatticeValue::Bottom) => LatticeValue::Bottom,
        (LatticeValue::Top, _) | (_, LatticeValue::Top) => LatticeValue::Top,
        (LatticeValue::Constant(l), LatticeValue::Constant(r)) => evaluate_binary_constants(op, l, r),
    }
}

/// Evaluates an IR unary operation on a lattice value.
#[must_use]
pub fn evaluate_unary_op(op: &IrUnaryOp, operand: &LatticeValue) -> LatticeValue {
    match operand {
        LatticeValue::Bottom => LatticeValue::Bottom,
        LatticeValue::Top => LatticeValue::Top,
        LatticeValue::Constant(c) => evaluate_unary_constant(op, c),
    }
}

fn evaluate_binary_constants(op: &IrBinaryOp, left: &ConstantValue, right: &ConstantValue) -> LatticeValue {
    if is_comparison(op) {
        return to_arith_op(op).map_or(LatticeValue::Bottom, |arith| evaluate_comparison(arith, left, right));
    }

    if let Some(arith) = to_arith_op(op) {
        return match (left, right) {
            (ConstantValue::I8(a), ConstantValue::I8(b)) => ConstantEvaluator::eval_binary_i8(arith, *a, *b),
            (ConstantValue::I16(a), ConstantValue::I16(b)) => ConstantEvaluator::eval_binary_i16(arith, *a, *b),
            (ConstantValue::I32(a), ConstantValue::I32(b)) => ConstantEvaluator::eval_binary_i32(arith, *a, *b),
            (ConstantValue::I64(a), ConstantValue::I64(b)) => ConstantEvaluator::eval_binary_i64(arith, *a, *b),
            (ConstantValue::U8(a), ConstantValue::U8(b)) => ConstantEvaluator::eval_binary_u8(arith, *a, *b),
            (ConstantValue::U16(a), ConstantValue::U16(b)) => ConstantEvaluator::eval_binary_u16(arith, *a, *b),
            (ConstantValue::U32(a), ConstantValue::U32(b)) => ConstantEvaluator::eval_binary_u32(arith, *a, *b),
            (ConstantValue::U64(a), ConstantValue::U64(b)) => ConstantEvaluator::eval_binary_u64(arith, *a, *b),
            (ConstantValue::F32(a), ConstantValue::F32(b)) => ConstantEvaluator::eval_binary_f32(arith, *a, *b),
            (ConstantValue::F64(a), ConstantValue::F64(b)) => ConstantEvaluator::eval_binary_f64(arith, *a, *b),
            (ConstantValue::Bool(a), ConstantValue::Bool(b)) => ConstantEvaluator::eval_binary_bool(arith, *a, *b),
            _ => LatticeValue::Bottom,
        };
    }

    if let Some(bitwise) = to_bitwise_op(op) {
        return match (left, right) {
            (ConstantValue::I8(a), ConstantValue::I8(b)) => ConstantEvaluator::eval_bitwise_i8(bitwise, *a, *b),
            (ConstantValue::I16(a), ConstantValue::I16(b)) => ConstantEvaluator::eval_bitwise_i16(bitwise, *a, *b),
            (ConstantValue::I32(a), ConstantValue::I32(b)) => ConstantEvaluator::eval_bitwise_i32(bitwise, *a, *b),
            (ConstantValue::I64(a), ConstantValue::I64(b)) => ConstantEvaluator::eval_bitwise_i64(bitwise, *a, *b),
            (ConstantValue::U8(a), ConstantValue::U8(b)) => ConstantEvaluator::eval_bitwise_u8(bitwise, *a, *b),
            (ConstantValue::U16(a), ConstantValue::U16(b)) => ConstantEvaluator::eval_bitwise_u16(bitwise, *a, *b),
            (ConstantValue::U32(a), ConstantValue::U32(b)) => ConstantEvaluator::eval_bitwise_u32(bitwise, *a, *b),
            (ConstantValue::U64(a), ConstantValue::U64(b)) => ConstantEvaluator::eval_bitwise_u64(bitwise, *a, *b),
            _ => LatticeValue::Bottom,
        };
    }

    LatticeValue::Bottom
}

macro_rules! cmp {
    ($op:expr, $lhs:expr, $rhs:expr) => {{
        let result = match $op {
            BinaryOp::Eq => $lhs == $rhs,
            BinaryOp::Ne => $lhs != $rhs,
            BinaryOp::Lt => $lhs < $rhs,
            BinaryOp::Le => $lhs <= $rhs,
            BinaryOp::Gt => $lhs > $rhs,
            BinaryOp::Ge => $lhs >= $rhs,
            _ => return LatticeValue::Bottom,
        };
        LatticeValue::Constant(ConstantValue::Bool(result))
    }};
}

fn evaluate_comparison(op: BinaryOp, left: &ConstantValue, right: &ConstantValue) -> LatticeValue {
    match (left, right) {
        (ConstantValue::I8(a), ConstantValue::I8(b)) => cmp!(op, a, b),
        (ConstantValue::I16(a), ConstantValue::I16(b)) => cmp!(op, a, b),
        (ConstantValue::I32(a), ConstantValue::I32(b)) => cmp!(op, a, b),
        (ConstantValue::I64(a), ConstantValue::I64(b)) => cmp!(op, a, b),
        (ConstantValue::U8(a), ConstantValue::U8(b)) => cmp!(op, a, b),
        (ConstantValue::U16(a), ConstantValue::U16(b)) => cmp!(op, a, b),
        (ConstantValue::U32(a), ConstantValue::U32(b)) => cmp!(op, a, b),
        (ConstantValue::U64(a), ConstantValue::U64(b)) => cmp!(op, a, b),
        (ConstantValue::F32(a), ConstantValue::F32(b)) => cmp!(op, a, b),
        (ConstantValue::F64(a), ConstantValue::F64(b)) => cmp!(op, a, b),
        (ConstantValue::Bool(a), ConstantValue::Bool(b)) => match op {
            BinaryOp::Eq => LatticeValue::Constant(ConstantValue::Bool(a == b)),
            BinaryOp::Ne => LatticeValue::Constant(ConstantValue::Bool(a != b)),
            _ => LatticeValue::Bottom,
        },
        (ConstantValue::Char(a), ConstantValue::Char(b)) => match op {
            BinaryOp::Eq => ConstantEvaluator::eval_char_eq(*a, *b),
            BinaryOp::Ne => ConstantEvaluator::eval_char_ne(*a, *b),
            _ => LatticeValue::Bottom,
        },
        _ => LatticeValue::Bottom,
    }
}

fn evaluate_unary_constant(op: &IrUnaryOp, operand: &ConstantValue) -> LatticeValue {
    match (op, operand) {
        (IrUnaryOp::Negate, ConstantValue::I8(v)) => ConstantEvaluator::eval_unary_i8(UnaryOp::Neg, *v),
        (IrUnaryOp::Negate, ConstantValue::I16(v)) => ConstantEvaluator::eval_unary_i16(UnaryOp::Neg, *v),
        (IrUnaryOp::Negate, ConstantValue::I32(v)) => ConstantEvaluator::eval_unary_i32(UnaryOp::Neg, *v),
        (IrUnaryOp::Negate, ConstantValue::I64(v)) => ConstantEvaluator::eval_unary_i64(UnaryOp::Neg, *v),
        (IrUnaryOp::Negate, ConstantValue::F32(v)) => ConstantEvaluator::eval_unary_f32(UnaryOp::Neg, *v),
        (IrUnaryOp::Negate, ConstantValue::F64(v)) => ConstantEvaluator::eval_unary_f64(UnaryOp::Neg, *v),
        (IrUnaryOp::Negate, _) => LatticeValue::Bottom,
        (IrUnaryOp::Not, ConstantValue::Bool(v)) => ConstantEvaluator::eval_unary_bool(UnaryOp::Not, *v),
        (IrUnaryOp::Not, ConstantValue::I8(v)) => ConstantEvaluator::eval_bitwise_not_i8(*v),
        (IrUnaryOp::Not, ConstantValue::I16(v)) => ConstantEvaluator::eval_bitwise_not_i16(*v),
        (IrUnaryOp::Not, ConstantValue::I32(v)) => ConstantEvaluator::eval_bitwise_not_i32(*v),
        (IrUnaryOp::Not, ConstantValue::I64(v)) => ConstantEvaluator::eval_bitwise_not_i64(*v),
        (IrUnaryOp::Not, ConstantValue::U8(v)) => ConstantEvaluator::eval_bitwise_not_u8(*v),
        (IrUnaryOp::Not, ConstantValue::U16(v)) => ConstantEvaluator::eval_bitwise_not_u16(*v),
        (IrUnaryOp::Not, ConstantValue::U32(v)) => ConstantEvaluator::eval_bitwise_not_u32(*v),
        (IrUnaryOp::Not, ConstantValue::U64(v)) => ConstantEvaluator::eval_bitwise_not_u64(*v),
        (IrUnaryOp::Not, _) => LatticeValue::Bottom,
    }
}

fn to_arith_op(op: &IrBinaryOp) -> Option<BinaryOp> {
    Some(match op {
        IrBinaryOp::Add => BinaryOp::Add,
        IrBinaryOp::Subtract => BinaryOp::Sub,
        IrBinaryOp::Multiply => BinaryOp::Mul,
        IrBinaryOp::Divide => BinaryOp::Div,
        IrBinaryOp::Modulo => BinaryOp::Mod,
        IrBinaryOp::Equal => BinaryOp::Eq,
        IrBinaryOp::NotEqual => BinaryOp::Ne,
        IrBinaryOp::Less => BinaryOp::Lt,
        IrBinaryOp::LessEqual => BinaryOp::Le,
        IrBinaryOp::Greater => BinaryOp::Gt,
        IrBinaryOp::GreaterEqual => BinaryOp::Ge,
        IrBinaryOp::And => BinaryOp::And,
        IrBinaryOp::Or => BinaryOp::Or,
        _ => return None,
    })
}

fn to_bitwise_op(op: &IrBinaryOp) -> Option<BitwiseOp> {
    Some(match op {
        IrBinaryOp::BitwiseAnd => BitwiseOp::And,
        IrBinaryOp::BitwiseOr => BitwiseOp::Or,
        IrBinaryOp::BitwiseXor => BitwiseOp::Xor,
        IrBinaryOp::ShiftLeft => BitwiseOp::Shl,
        IrBinaryOp::ShiftRight => BitwiseOp::Shr,
        _ => return None,
    })
}

const fn is_comparison(op: &IrBinaryOp) -> bool {
    matches!(
        op,
        IrBinaryOp::Equal
            | IrBinaryOp::NotEqual
            | IrBinaryOp::Less
            | IrBinaryOp::LessEqual
            | IrBinaryOp::Greater
            | IrBinaryOp::GreaterEqual
    )
}

/// Binary operations
#[derive(Debug, Clone, Copy, PartialEq)]
#[allow(clippy::derive_partial_eq_without_eq)]
pub enum BinaryOp {
    // Arithmetic
    Add,
    Sub,
    Mul,
    Div,
    Mod,
    // Comparison
    Eq,
    Ne,
    Lt,
    Le,
    Gt,
    Ge,
    // Logical
    And,
    Or,
}

/// Unary operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnaryOp {
    Neg,
    Not,
}

/// Bitwise operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BitwiseOp {
    And,
    Or,
    Xor,
    Shl,
    Shr,
}
