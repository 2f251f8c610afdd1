use crate::modular;
use crate::point::Point;
use crate::CurveError;

use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::{Signed, Zero};

/// A short-Weierstrass curve `y^2 = x^3 + ax + b` over the prime field `F_p`,
/// together with a distinguished generator point.
///
/// Parameters are validated once at construction and never mutated, so a
/// curve can be shared read-only between any number of callers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Curve {
    a: BigInt,
    b: BigInt,
    p: BigInt,
    generator: Point,
}

impl Curve {
    /// Coefficients are reduced into `[0, p)` before validation. Primality of
    /// `p` is assumed, not checked.
    pub fn new(a: BigInt, b: BigInt, p: BigInt, generator: Point) -> Result<Self, CurveError> {
        if p < BigInt::from(2) {
            return Err(CurveError::InvalidParameters);
        }
        let a = a.mod_floor(&p);
        let b = b.mod_floor(&p);
        // 4a^3 + 27b^2 == 0 means a repeated root, i.e. a singular curve
        let discriminant =
            (BigInt::from(4) * &a * &a * &a + BigInt::from(27) * &b * &b).mod_floor(&p);
        if discriminant.is_zero() {
            return Err(CurveError::InvalidParameters);
        }
        let curve = Self { a, b, p, generator };
        if !curve.is_on_curve(&curve.generator) {
            return Err(CurveError::GeneratorNotOnCurve);
        }
        Ok(curve)
    }

    pub fn a(&self) -> &BigInt {
        &self.a
    }

    pub fn b(&self) -> &BigInt {
        &self.b
    }

    pub fn modulus(&self) -> &BigInt {
        &self.p
    }

    pub fn generator(&self) -> &Point {
        &self.generator
    }

    pub fn is_on_curve(&self, point: &Point) -> bool {
        match point {
            Point::Infinity => true,
            Point::Affine { x, y } => (y * y - (x * x * x + &self.a * x + &self.b))
                .mod_floor(&self.p)
                .is_zero(),
        }
    }

    pub fn mod_inverse(&self, x: &BigInt) -> Result<BigInt, CurveError> {
        modular::mod_inv(x, &self.p)
    }

    /// Additive inverse `(x, -y mod p)` of a point.
    pub fn negate(&self, point: &Point) -> Point {
        match point {
            Point::Infinity => Point::Infinity,
            Point::Affine { x, y } => Point::Affine {
                x: x.clone(),
                y: (-y).mod_floor(&self.p),
            },
        }
    }

    /// Group law on the curve. Total for points on the curve; `NoInverse` can
    /// only surface for degenerate off-curve inputs.
    pub fn point_add(&self, p: &Point, q: &Point) -> Result<Point, CurveError> {
        let (x1, y1) = match p {
            Point::Infinity => return Ok(q.clone()),
            Point::Affine { x, y } => (x, y),
        };
        let (x2, y2) = match q {
            Point::Infinity => return Ok(p.clone()),
            Point::Affine { x, y } => (x, y),
        };

        // Inverse pair (including a doubled point with y == 0): this check
        // must come before the doubling branch, whose slope denominator 2y
        // would be zero.
        if x1 == x2 && (y1 + y2).mod_floor(&self.p).is_zero() {
            return Ok(Point::Infinity);
        }

        let slope = if p == q {
            // tangent at p
            let numerator = BigInt::from(3) * x1 * x1 + &self.a;
            let denominator = self.mod_inverse(&(BigInt::from(2) * y1))?;
            (numerator * denominator).mod_floor(&self.p)
        } else {
            // chord through p and q
            let numerator = y2 - y1;
            let denominator = self.mod_inverse(&(x2 - x1))?;
            (numerator * denominator).mod_floor(&self.p)
        };

        let x3 = (&slope * &slope - x1 - x2).mod_floor(&self.p);
        let y3 = (slope * (x1 - &x3) - y1).mod_floor(&self.p);
        Ok(Point::Affine { x: x3, y: y3 })
    }

    /// Double-and-add scalar multiplication, `O(log k)` point additions.
    ///
    /// A scalar congruent to zero mod `p` collapses to the identity before
    /// the expansion runs; otherwise the raw scalar is expanded bit by bit.
    pub fn scalar_mul(&self, k: &BigInt, point: &Point) -> Result<Point, CurveError> {
        if point.is_infinity() || k.mod_floor(&self.p).is_zero() {
            return Ok(Point::Infinity);
        }
        let mut result = Point::Infinity;
        let mut addend = point.clone();
        let mut k = k.clone();
        while k.is_positive() {
            if k.is_odd() {
                result = self.point_add(&result, &addend)?;
            }
            addend = self.point_add(&addend, &addend)?;
            k >>= 1;
        }
        Ok(result)
    }
}
