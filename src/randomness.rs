use crate::helpers::rand_nonzero_scalar;
use ark_ff::Field;
use rand::Rng;

/// The secret point at which the QAP polynomials are evaluated.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LagrangePoint<F: Field> {
    point: F,
}

impl<F: Field> LagrangePoint<F> {
    pub fn new(point: F) -> Self {
        LagrangePoint { point }
    }

    pub fn random<T: Rng>(rng: &mut T) -> Self {
        Self::new(rand_nonzero_scalar(rng))
    }

    pub fn point(&self) -> F {
        self.point
    }
}

/// Blinding scalars for one keypair, with the products the generator consumes
/// precomputed.
///
/// `beta` only ever appears multiplied by another secret, so it is not kept.
/// Reusing a bundle for a second keypair breaks the scheme's secrecy.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BlindGreeks<F: Field> {
    r_a: F,
    r_b: F,
    r_c: F,
    alpha_a: F,
    alpha_b: F,
    alpha_c: F,
    gamma: F,
    alpha_a_r_a: F,
    alpha_b_r_b: F,
    alpha_c_r_c: F,
    beta_r_a: F,
    beta_r_b: F,
    beta_r_c: F,
    beta_gamma: F,
}

impl<F: Field> BlindGreeks<F> {
    /// Derives `rC = rA * rB` and every product from the atomic secrets.
    pub fn new(r_a: F, r_b: F, alpha_a: F, alpha_b: F, alpha_c: F, beta: F, gamma: F) -> Self {
        let r_c = r_a * r_b;
        BlindGreeks {
            r_a,
            r_b,
            r_c,
            alpha_a,
            alpha_b,
            alpha_c,
            gamma,
            alpha_a_r_a: alpha_a * r_a,
            alpha_b_r_b: alpha_b * r_b,
            alpha_c_r_c: alpha_c * r_c,
            beta_r_a: beta * r_a,
            beta_r_b: beta * r_b,
            beta_r_c: beta * r_c,
            beta_gamma: beta * gamma,
        }
    }

    pub fn random<T: Rng>(rng: &mut T) -> Self {
        Self::new(
            rand_nonzero_scalar(rng),
            rand_nonzero_scalar(rng),
            rand_nonzero_scalar(rng),
            rand_nonzero_scalar(rng),
            rand_nonzero_scalar(rng),
            rand_nonzero_scalar(rng),
            rand_nonzero_scalar(rng),
        )
    }

    pub fn r_a(&self) -> F {
        self.r_a
    }

    pub fn r_b(&self) -> F {
        self.r_b
    }

    pub fn r_c(&self) -> F {
        self.r_c
    }

    pub fn alpha_a(&self) -> F {
        self.alpha_a
    }

    pub fn alpha_b(&self) -> F {
        self.alpha_b
    }

    pub fn alpha_c(&self) -> F {
        self.alpha_c
    }

    pub fn gamma(&self) -> F {
        self.gamma
    }

    pub fn alpha_a_r_a(&self) -> F {
        self.alpha_a_r_a
    }

    pub fn alpha_b_r_b(&self) -> F {
        self.alpha_b_r_b
    }

    pub fn alpha_c_r_c(&self) -> F {
        self.alpha_c_r_c
    }

    pub fn beta_r_a(&self) -> F {
        self.beta_r_a
    }

    pub fn beta_r_b(&self) -> F {
        self.beta_r_b
    }

    pub fn beta_r_c(&self) -> F {
        self.beta_r_c
    }

    pub fn beta_gamma(&self) -> F {
        self.beta_gamma
    }
}
