use crate::keys::{ProvingKey, VerificationKey};
use ark_ec::pairing::Pairing;
use ark_serialize::{CanonicalDeserialize, CanonicalSerialize, Read, Write};
use log::warn;
use rootcause::Report;
use rootcause::prelude::ResultExt;

/// A proving key and the verification key generated alongside it.
///
/// An empty keypair is a normal value: it is what generation returns for a
/// degenerate evaluation point and what a failed [`Keypair::marshal_in`] leaves
/// behind. Equality compares the proving keys first, then the verification keys.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Keypair<E: Pairing> {
    pk: ProvingKey<E>,
    vk: VerificationKey<E>,
}

impl<E: Pairing> Default for Keypair<E> {
    fn default() -> Self {
        Keypair {
            pk: ProvingKey::default(),
            vk: VerificationKey::default(),
        }
    }
}

impl<E: Pairing> Keypair<E> {
    /// Reassembles a keypair from stored halves.
    pub fn from_parts(pk: ProvingKey<E>, vk: VerificationKey<E>) -> Self {
        Keypair { pk, vk }
    }

    pub fn into_parts(self) -> (ProvingKey<E>, VerificationKey<E>) {
        (self.pk, self.vk)
    }

    pub fn pk(&self) -> &ProvingKey<E> {
        &self.pk
    }

    pub fn vk(&self) -> &VerificationKey<E> {
        &self.vk
    }

    pub fn clear(&mut self) {
        self.pk.clear();
        self.vk.clear();
    }

    /// True unless both halves are populated.
    pub fn empty(&self) -> bool {
        self.pk.empty() || self.vk.empty()
    }

    /// Writes the proving key then the verification key, compressed.
    pub fn marshal_out<W: Write>(&self, mut writer: W) -> Result<(), Report> {
        self.pk
            .serialize_compressed(&mut writer)
            .context("Failed to write proving key")?;
        self.vk
            .serialize_compressed(&mut writer)
            .context("Failed to write verification key")?;
        Ok(())
    }

    /// Replaces this keypair with one read from `reader`.
    ///
    /// Points are validated as they are read. If either half fails to parse the
    /// keypair is cleared, so no partially read key is ever observable.
    pub fn marshal_in<R: Read>(&mut self, mut reader: R) -> Result<(), Report> {
        let parsed = Self::read_parts(&mut reader);

        match parsed {
            Ok((pk, vk)) => {
                self.pk = pk;
                self.vk = vk;
                Ok(())
            }
            Err(err) => {
                warn!("Discarding keypair after failed read");
                self.clear();
                Err(err)
            }
        }
    }

    fn read_parts<R: Read>(mut reader: R) -> Result<(ProvingKey<E>, VerificationKey<E>), Report> {
        let pk = ProvingKey::deserialize_compressed(&mut reader)
            .context("Failed to read proving key")?;
        let vk = VerificationKey::deserialize_compressed(&mut reader)
            .context("Failed to read verification key")?;
        Ok((pk, vk))
    }

    /// Encoded size in bytes of [`Keypair::marshal_out`].
    pub fn marshal_size(&self) -> usize {
        self.pk.compressed_size() + self.vk.compressed_size()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::circuits::R1CS;
    use crate::circuits::tests::{product_circuit, square_circuit};
    use crate::randomness::{BlindGreeks, LagrangePoint};
    use ark_mnt6_753::{Fr, MNT6_753};
    use rand::SeedableRng;

    fn init() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    fn keypair(r1cs: &R1CS<Fr>, seed: u64) -> Result<Keypair<MNT6_753>, Report> {
        let mut rng = rand::rngs::StdRng::seed_from_u64(seed);
        let point = LagrangePoint::random(&mut rng);
        let blind = BlindGreeks::random(&mut rng);
        Keypair::generate(r1cs, 1, &point, &blind)
    }

    fn marshal(keypair: &Keypair<MNT6_753>) -> Result<Vec<u8>, Report> {
        let mut bytes = Vec::new();
        keypair.marshal_out(&mut bytes)?;
        Ok(bytes)
    }

    #[test]
    fn marshal_round_trip() -> Result<(), Report> {
        init();
        let original = keypair(&product_circuit(), 1)?;
        let bytes = marshal(&original)?;
        assert_eq!(bytes.len(), original.marshal_size());

        let mut restored = Keypair::default();
        restored.marshal_in(&bytes[..])?;
        assert!(!restored.empty());
        assert_eq!(restored, original);
        Ok(())
    }

    #[test]
    fn round_trip_through_parts() -> Result<(), Report> {
        let original = keypair(&square_circuit(), 2)?;
        let (pk, vk) = original.clone().into_parts();
        let rebuilt = Keypair::from_parts(pk, vk);
        assert_eq!(rebuilt, original);

        let mut restored = Keypair::default();
        restored.marshal_in(&marshal(&rebuilt)?[..])?;
        assert_eq!(restored, original);
        Ok(())
    }

    #[test]
    fn empty_keypair_round_trips_as_empty() -> Result<(), Report> {
        let empty = Keypair::<MNT6_753>::default();
        let mut restored = keypair(&square_circuit(), 3)?;
        restored.marshal_in(&marshal(&empty)?[..])?;
        assert!(restored.empty());
        assert_eq!(restored, empty);
        Ok(())
    }

    #[test]
    fn truncated_input_clears_keypair() -> Result<(), Report> {
        init();
        let original = keypair(&square_circuit(), 4)?;
        let bytes = marshal(&original)?;

        for cut in [0, 1, bytes.len() / 2, bytes.len() - 1] {
            let mut target = original.clone();
            let err = target.marshal_in(&bytes[..cut]).unwrap_err();
            assert!(format!("{:?}", err).contains("Failed to read"));
            assert!(target.empty());
            assert_eq!(target, Keypair::default());
        }
        Ok(())
    }

    #[test]
    fn truncated_verification_key_clears_proving_key_too() -> Result<(), Report> {
        let original = keypair(&square_circuit(), 5)?;
        let bytes = marshal(&original)?;
        let pk_size = original.pk().compressed_size();

        let mut target = Keypair::<MNT6_753>::default();
        let err = target.marshal_in(&bytes[..pk_size + 4]).unwrap_err();
        assert!(format!("{:?}", err).contains("Failed to read verification key"));
        assert!(target.pk().empty());
        assert!(target.empty());
        Ok(())
    }

    #[test]
    fn corrupted_point_clears_keypair() -> Result<(), Report> {
        let original = keypair(&square_circuit(), 6)?;
        let mut bytes = marshal(&original)?;

        // skip the length prefix of the A family and garble its first point
        let point_size = original.pk().a()[0].base().compressed_size();
        bytes[8..8 + point_size].fill(0xff);

        let mut target = original.clone();
        assert!(target.marshal_in(&bytes[..]).is_err());
        assert!(target.empty());
        Ok(())
    }

    #[test]
    fn clear_is_idempotent() -> Result<(), Report> {
        let mut keypair = keypair(&square_circuit(), 7)?;
        assert!(!keypair.empty());
        keypair.clear();
        assert!(keypair.empty());
        keypair.clear();
        assert!(keypair.empty());
        assert_eq!(keypair, Keypair::default());
        Ok(())
    }

    #[test]
    fn half_populated_keypair_is_empty() -> Result<(), Report> {
        let (pk, vk) = keypair(&square_circuit(), 8)?.into_parts();
        assert!(Keypair::<MNT6_753>::from_parts(pk.clone(), Default::default()).empty());
        assert!(Keypair::<MNT6_753>::from_parts(Default::default(), vk.clone()).empty());
        assert!(!Keypair::<MNT6_753>::from_parts(pk, vk).empty());
        Ok(())
    }

    #[test]
    fn inequality_is_negated_equality() -> Result<(), Report> {
        let full = keypair(&square_circuit(), 9)?;
        let other = keypair(&square_circuit(), 10)?;
        let empty = Keypair::<MNT6_753>::default();

        let values = [&full, &other, &empty, &Keypair::default()];
        for left in values {
            for right in values {
                assert_eq!(left != right, !(left == right));
            }
        }
        assert_eq!(full, full.clone());
        assert_ne!(full, other);
        assert_ne!(full, empty);
        assert_eq!(empty, Keypair::default());
        Ok(())
    }
}
