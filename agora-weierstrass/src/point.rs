use num_bigint::BigInt;

use std::fmt;

/// A curve point in affine coordinates, with the point at infinity as the
/// identity element of the group.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Point {
    Infinity,
    Affine { x: BigInt, y: BigInt },
}

impl Point {
    pub fn affine(x: BigInt, y: BigInt) -> Self {
        Self::Affine { x, y }
    }

    #[inline(always)]
    pub fn is_infinity(&self) -> bool {
        matches!(self, Self::Infinity)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Infinity => write!(f, "infinity"),
            Self::Affine { x, y } => write!(f, "({}, {})", x, y),
        }
    }
}
