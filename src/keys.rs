use ark_ec::AffineRepr;
use ark_ec::pairing::Pairing;
use ark_serialize::{CanonicalDeserialize, CanonicalSerialize};

/// A commitment in two forms: `r * v * G` and `alpha * r * v * H`.
///
/// The prover must produce matching linear combinations of both halves, which
/// the verifier checks with a pairing against `alpha * G2`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, CanonicalSerialize, CanonicalDeserialize)]
pub struct KnowledgeCommitment<G: AffineRepr, H: AffineRepr> {
    base: G,
    alpha: H,
}

impl<G: AffineRepr, H: AffineRepr> KnowledgeCommitment<G, H> {
    pub fn new(base: G, alpha: H) -> Self {
        KnowledgeCommitment { base, alpha }
    }

    pub fn base(&self) -> &G {
        &self.base
    }

    pub fn alpha(&self) -> &H {
        &self.alpha
    }
}

/// Proving key: the five committed query families.
#[derive(Clone, Debug, PartialEq, Eq, CanonicalSerialize, CanonicalDeserialize)]
pub struct ProvingKey<E: Pairing> {
    /// `rA * A_i(t)`, alpha form blinded by `alphaA`, both in G1
    a: Vec<KnowledgeCommitment<E::G1Affine, E::G1Affine>>,
    /// `rB * B_i(t)` in G2, alpha form in G1
    b: Vec<KnowledgeCommitment<E::G2Affine, E::G1Affine>>,
    /// `rC * C_i(t)`, alpha form blinded by `alphaC`, both in G1
    c: Vec<KnowledgeCommitment<E::G1Affine, E::G1Affine>>,
    /// `t^i` in G1
    h: Vec<E::G1Affine>,
    /// `beta * (rA * A_i(t) + rB * B_i(t) + rC * C_i(t))` in G1
    k: Vec<E::G1Affine>,
}

impl<E: Pairing> Default for ProvingKey<E> {
    fn default() -> Self {
        ProvingKey {
            a: Vec::new(),
            b: Vec::new(),
            c: Vec::new(),
            h: Vec::new(),
            k: Vec::new(),
        }
    }
}

impl<E: Pairing> ProvingKey<E> {
    pub fn new(
        a: Vec<KnowledgeCommitment<E::G1Affine, E::G1Affine>>,
        b: Vec<KnowledgeCommitment<E::G2Affine, E::G1Affine>>,
        c: Vec<KnowledgeCommitment<E::G1Affine, E::G1Affine>>,
        h: Vec<E::G1Affine>,
        k: Vec<E::G1Affine>,
    ) -> Self {
        ProvingKey { a, b, c, h, k }
    }

    pub fn a(&self) -> &[KnowledgeCommitment<E::G1Affine, E::G1Affine>] {
        &self.a
    }

    pub fn b(&self) -> &[KnowledgeCommitment<E::G2Affine, E::G1Affine>] {
        &self.b
    }

    pub fn c(&self) -> &[KnowledgeCommitment<E::G1Affine, E::G1Affine>] {
        &self.c
    }

    pub fn h(&self) -> &[E::G1Affine] {
        &self.h
    }

    pub fn k(&self) -> &[E::G1Affine] {
        &self.k
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// A generated key has entries in every family, so any empty family means
    /// the key was never populated.
    pub fn empty(&self) -> bool {
        self.a.is_empty()
            || self.b.is_empty()
            || self.c.is_empty()
            || self.h.is_empty()
            || self.k.is_empty()
    }
}

/// Verification key: seven fixed elements and the input-consistency vector.
#[derive(Clone, Debug, PartialEq, Eq, CanonicalSerialize, CanonicalDeserialize)]
pub struct VerificationKey<E: Pairing> {
    alpha_a_g2: E::G2Affine,
    alpha_b_g1: E::G1Affine,
    alpha_c_g2: E::G2Affine,
    gamma_g2: E::G2Affine,
    beta_gamma_g1: E::G1Affine,
    beta_gamma_g2: E::G2Affine,
    /// `Z(t) * rC * G2`
    rc_z_g2: E::G2Affine,
    /// `rA * A_i(t) * G1` for the constant wire and each public input
    ic: Vec<E::G1Affine>,
}

impl<E: Pairing> Default for VerificationKey<E> {
    fn default() -> Self {
        VerificationKey {
            alpha_a_g2: E::G2Affine::zero(),
            alpha_b_g1: E::G1Affine::zero(),
            alpha_c_g2: E::G2Affine::zero(),
            gamma_g2: E::G2Affine::zero(),
            beta_gamma_g1: E::G1Affine::zero(),
            beta_gamma_g2: E::G2Affine::zero(),
            rc_z_g2: E::G2Affine::zero(),
            ic: Vec::new(),
        }
    }
}

impl<E: Pairing> VerificationKey<E> {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        alpha_a_g2: E::G2Affine,
        alpha_b_g1: E::G1Affine,
        alpha_c_g2: E::G2Affine,
        gamma_g2: E::G2Affine,
        beta_gamma_g1: E::G1Affine,
        beta_gamma_g2: E::G2Affine,
        rc_z_g2: E::G2Affine,
        ic: Vec<E::G1Affine>,
    ) -> Self {
        VerificationKey {
            alpha_a_g2,
            alpha_b_g1,
            alpha_c_g2,
            gamma_g2,
            beta_gamma_g1,
            beta_gamma_g2,
            rc_z_g2,
            ic,
        }
    }

    pub fn alpha_a_g2(&self) -> &E::G2Affine {
        &self.alpha_a_g2
    }

    pub fn alpha_b_g1(&self) -> &E::G1Affine {
        &self.alpha_b_g1
    }

    pub fn alpha_c_g2(&self) -> &E::G2Affine {
        &self.alpha_c_g2
    }

    pub fn gamma_g2(&self) -> &E::G2Affine {
        &self.gamma_g2
    }

    pub fn beta_gamma_g1(&self) -> &E::G1Affine {
        &self.beta_gamma_g1
    }

    pub fn beta_gamma_g2(&self) -> &E::G2Affine {
        &self.beta_gamma_g2
    }

    pub fn rc_z_g2(&self) -> &E::G2Affine {
        &self.rc_z_g2
    }

    pub fn ic(&self) -> &[E::G1Affine] {
        &self.ic
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// The consistency vector always covers at least the constant wire.
    pub fn empty(&self) -> bool {
        self.ic.is_empty()
    }
}
