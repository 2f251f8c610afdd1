#![deny(clippy::all)]
#![deny(clippy::dbg_macro)]

pub mod encryption;
pub mod keypair;

pub use encryption::{Encryption, EncryptionError};
pub use keypair::{Keypair, KeypairError};
