//! # WARNING
//! This library was made for purely academic purposes, and has not been audited for security!
//! Don't use this in production!
//!# ppzk-keygen
//!
//!This crate provides the key generator of a preprocessing zkSNARK (the BCTV14 flavour of Pinocchio) over a
//!Rank 1 Constraint System. It turns a constraint system, a secret evaluation point and a bundle of blinding scalars
//!into a proving key and a verification key. Proving and verifying are out of scope.
//!
//!The implementation is type generic over any curve that implements `ark_ec::pairing::Pairing`, and is tested with
//!MNT6-753.
//!
//!Errors are handled using the `rootcause` crate, as `Report`s annotated with `.context()` and attachments describing
//!the operands. A degenerate evaluation point is not an error: generation then returns an empty `Keypair`, and the
//!caller retries with fresh randomness.
//!
//!The core types are `circuits::R1CS`, `qap::QapPoint`, `randomness::BlindGreeks`, `keys::ProvingKey`,
//!`keys::VerificationKey` and `keypair::Keypair`.
//!
//!The general flow is:
//!
//!- Define an R1CS, either with `R1CS::new` or from JSON with `R1CS::from_json`
//!- Sample a `LagrangePoint` and `BlindGreeks`
//!- Generate keys with `Keypair::generate`, or `Keypair::generate_with_progress` to observe the 8 major steps
//!- Check `keypair.empty()`; if set, the point was a root of unity of the domain and setup must be retried
//!- Store keys with `keypair.marshal_out(writer)` and load them with `keypair.marshal_in(reader)`
//!

/// Contains the constraint system trait and the R1CS type.
pub mod circuits;
/// Contains the key generation algorithm.
pub mod generator;
/// Contains the keypair type and its encoding.
pub mod keypair;
/// Contains the proving and verification key types.
pub mod keys;
/// Contains progress reporting.
pub mod progress;
/// Contains the QAP instance at an evaluation point.
pub mod qap;
/// Contains the scalar query vectors derived from a QAP.
pub mod query;
/// Contains the setup randomness.
pub mod randomness;
/// Contains fixed-base windowed exponentiation.
pub mod window;
mod helpers;

pub use circuits::{ConstraintSystem, R1CS};
pub use generator::GENERATION_STEPS;
pub use keypair::Keypair;
pub use keys::{KnowledgeCommitment, ProvingKey, VerificationKey};
pub use progress::{LogProgress, NoProgress, ProgressSink};
pub use randomness::{BlindGreeks, LagrangePoint};
