#![deny(clippy::all)]
#![deny(clippy::dbg_macro)]

mod curve;
mod modular;
mod point;

pub use curve::Curve;
pub use point::Point;

use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum CurveError {
    #[error("invalid parameters: the curve is singular or the modulus is degenerate")]
    InvalidParameters,
    #[error("generator is not on the curve")]
    GeneratorNotOnCurve,
    #[error("attempted to invert the zero residue")]
    NoInverse,
}
