use agora_elgamal::{Encryption, Keypair};
use agora_weierstrass::{Curve, Point};
use num_bigint::BigInt;
use rand::rngs::OsRng;

use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    // y^2 = x^3 + 2x + 3 over F_97 with generator (3, 6)
    let curve = Curve::new(
        BigInt::from(2),
        BigInt::from(3),
        BigInt::from(97),
        Point::affine(BigInt::from(3), BigInt::from(6)),
    )?;

    let mut rng = OsRng;
    let keypair = Keypair::random(&mut rng, &curve)?;
    let plaintext = curve.scalar_mul(&BigInt::from(7), curve.generator())?;

    let encryption = Encryption::new(&mut rng, &plaintext, keypair.pubkey(), &curve)?;
    let decrypted = encryption.decrypt(keypair.privkey(), &curve)?;

    println!("Private key: {}", keypair.privkey());
    println!("Public key: {}", keypair.pubkey());
    println!("Plaintext point: {}", plaintext);
    println!(
        "Ciphertext: ({}, {})",
        encryption.ephemeral_pubkey(),
        encryption.ciphertext()
    );
    println!("Decrypted point: {}", decrypted);
    println!("Decryption correct: {}", decrypted == plaintext);
    Ok(())
}
