use agora_weierstrass::{Curve, CurveError, Point};
use num_bigint::{BigInt, RandBigInt};
use num_traits::One;
use rand_core::{CryptoRng, RngCore};
use thiserror::Error;

#[derive(Error, Debug)]
#[cfg_attr(test, derive(PartialEq, Eq))]
pub enum KeypairError {
    #[error("pubkey-privkey mismatch")]
    InvalidKeypair,
    #[error(transparent)]
    Arithmetic(#[from] CurveError),
}

pub struct Keypair {
    privkey: BigInt,
    pubkey: Point,
}

impl Keypair {
    pub fn new(privkey: BigInt, curve: &Curve) -> Result<Self, KeypairError> {
        let pubkey = curve.scalar_mul(&privkey, curve.generator())?;
        Ok(Self { privkey, pubkey })
    }

    pub fn new_checked(
        privkey: BigInt,
        pubkey: Point,
        curve: &Curve,
    ) -> Result<Self, KeypairError> {
        if pubkey != curve.scalar_mul(&privkey, curve.generator())? {
            Err(KeypairError::InvalidKeypair)
        } else {
            Ok(Self { privkey, pubkey })
        }
    }

    /// Draws the private scalar uniformly from `[1, p - 1]`.
    pub fn random<R: RngCore + CryptoRng>(rng: &mut R, curve: &Curve) -> Result<Self, KeypairError> {
        let privkey = rng.gen_bigint_range(&BigInt::one(), curve.modulus());
        Self::new(privkey, curve)
    }

    pub fn pubkey(&self) -> &Point {
        &self.pubkey
    }

    pub fn privkey(&self) -> &BigInt {
        &self.privkey
    }
}
