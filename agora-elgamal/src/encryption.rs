use agora_weierstrass::{Curve, CurveError, Point};
use num_bigint::{BigInt, RandBigInt};
use num_traits::One;
use rand_core::{CryptoRng, RngCore};
use thiserror::Error;

#[derive(Error, Debug)]
#[cfg_attr(test, derive(PartialEq, Eq))]
pub enum EncryptionError {
    #[error("shared secret is the point at infinity")]
    SharedSecretAtInfinity,
    #[error(transparent)]
    Arithmetic(#[from] CurveError),
}

/// ElGamal ciphertext over curve points: the ephemeral public key `k * G`
/// and the masked plaintext `M + k * pubkey`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Encryption {
    ephemeral_pubkey: Point,
    ciphertext: Point,
}

impl Encryption {
    /// Encrypts `msg` for the holder of the private key behind `pubkey`.
    ///
    /// The plaintext is trusted to be a valid curve point; mapping arbitrary
    /// payloads onto the curve is the caller's concern.
    pub fn new<R: RngCore + CryptoRng>(
        rng: &mut R,
        msg: &Point,
        pubkey: &Point,
        curve: &Curve,
    ) -> Result<Self, EncryptionError> {
        let ephemeral_privkey = rng.gen_bigint_range(&BigInt::one(), curve.modulus());
        let ephemeral_pubkey = curve.scalar_mul(&ephemeral_privkey, curve.generator())?;
        let mask = curve.scalar_mul(&ephemeral_privkey, pubkey)?;
        let ciphertext = curve.point_add(msg, &mask)?;
        Ok(Self {
            ephemeral_pubkey,
            ciphertext,
        })
    }

    /// Strips the mask off the ciphertext. Fails when the shared secret
    /// degenerates to the identity, in which case no mask can be recovered.
    pub fn decrypt(&self, privkey: &BigInt, curve: &Curve) -> Result<Point, EncryptionError> {
        let shared_secret = curve.scalar_mul(privkey, &self.ephemeral_pubkey)?;
        if shared_secret.is_infinity() {
            return Err(EncryptionError::SharedSecretAtInfinity);
        }
        let unmask = curve.negate(&shared_secret);
        Ok(curve.point_add(&self.ciphertext, &unmask)?)
    }

    pub fn ephemeral_pubkey(&self) -> &Point {
        &self.ephemeral_pubkey
    }

    pub fn ciphertext(&self) -> &Point {
        &self.ciphertext
    }
}
