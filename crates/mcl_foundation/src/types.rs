//! Integer types of the mcl language.
//!
//! Every literal carries an [`IntegerType`]. The width and range tables
//! below are static and total over the enumeration.

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A fixed-width integer type.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum IntegerType {
    /// 8-bit signed.
    I8,
    /// 16-bit signed.
    I16,
    /// 32-bit signed.
    I32,
    /// 64-bit signed.
    I64,
    /// 128-bit signed.
    I128,
    /// Pointer-sized signed.
    ISize,
    /// 8-bit unsigned.
    U8,
    /// 16-bit unsigned.
    U16,
    /// 32-bit unsigned.
    U32,
    /// 64-bit unsigned.
    #[default]
    U64,
    /// 128-bit unsigned.
    U128,
    /// Pointer-sized unsigned.
    USize,
}

impl IntegerType {
    /// All integer types, signed first.
    pub const ALL: [Self; 12] = [
        Self::I8,
        Self::I16,
        Self::I32,
        Self::I64,
        Self::I128,
        Self::ISize,
        Self::U8,
        Self::U16,
        Self::U32,
        Self::U64,
        Self::U128,
        Self::USize,
    ];

    /// Returns the width of this type in bytes.
    #[must_use]
    pub const fn size(self) -> usize {
        match self {
            Self::I8 | Self::U8 => 1,
            Self::I16 | Self::U16 => 2,
            Self::I32 | Self::U32 => 4,
            Self::I64 | Self::U64 => 8,
            Self::I128 | Self::U128 => 16,
            Self::ISize | Self::USize => std::mem::size_of::<usize>(),
        }
    }

    /// Returns the width of this type in bits.
    #[must_use]
    pub const fn bits(self) -> u32 {
        // Widths are at most 16 bytes, so this never truncates.
        #[allow(clippy::cast_possible_truncation)]
        let bits = (self.size() * 8) as u32;
        bits
    }

    /// Returns true if this type is signed.
    #[must_use]
    pub const fn is_signed(self) -> bool {
        matches!(
            self,
            Self::I8 | Self::I16 | Self::I32 | Self::I64 | Self::I128 | Self::ISize
        )
    }

    /// Returns the largest value representable by this type.
    #[must_use]
    pub const fn max_value(self) -> u128 {
        if self.is_signed() {
            (1u128 << (self.bits() - 1)) - 1
        } else {
            u128::MAX >> (128 - self.bits())
        }
    }

    /// Returns the smallest value representable by this type.
    #[must_use]
    pub const fn min_value(self) -> i128 {
        if self.is_signed() {
            i128::MIN >> (128 - self.bits())
        } else {
            0
        }
    }

    /// Returns true if `value` lies within this type's range.
    #[must_use]
    pub const fn fits(self, value: u64) -> bool {
        value as u128 <= self.max_value()
    }

    /// Returns the source-level name of this type.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::I8 => "i8",
            Self::I16 => "i16",
            Self::I32 => "i32",
            Self::I64 => "i64",
            Self::I128 => "i128",
            Self::ISize => "isize",
            Self::U8 => "u8",
            Self::U16 => "u16",
            Self::U32 => "u32",
            Self::U64 => "u64",
            Self::U128 => "u128",
            Self::USize => "usize",
        }
    }
}

impl fmt::Display for IntegerType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when a string names no integer type.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown integer type: {0}")]
pub struct UnknownIntegerType(pub String);

impl FromStr for IntegerType {
    type Err = UnknownIntegerType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|ty| ty.name() == s)
            .ok_or_else(|| UnknownIntegerType(s.to_string()))
    }
}
