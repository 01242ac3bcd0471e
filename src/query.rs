use crate::circuits::ConstraintSystem;
use crate::helpers::count_non_zero;
use crate::qap::QapPoint;
use ark_ff::FftField;
use itertools::izip;

/// Scalar A, B and C query vectors for a QAP at a point.
///
/// One entry per wire, followed by a single `Z(t)` entry the prover uses to
/// randomize its commitments.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QueryAbc<F: FftField> {
    a: Vec<F>,
    b: Vec<F>,
    c: Vec<F>,
}

impl<F: FftField> QueryAbc<F> {
    pub fn new<S: ConstraintSystem<F>>(qap: &QapPoint<'_, F, S>) -> Self {
        let mut wires = qap.evaluate_wires();
        let z = qap.compute_z();
        wires.a.push(z);
        wires.b.push(z);
        wires.c.push(z);

        QueryAbc {
            a: wires.a,
            b: wires.b,
            c: wires.c,
        }
    }

    pub fn vec_a(&self) -> &[F] {
        &self.a
    }

    pub fn vec_b(&self) -> &[F] {
        &self.b
    }

    pub fn vec_c(&self) -> &[F] {
        &self.c
    }
}

/// Powers `t^0, t^1, .., t^d` of the evaluation point for the quotient polynomial.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QueryH<F: FftField> {
    h: Vec<F>,
}

impl<F: FftField> QueryH<F> {
    pub fn new<S: ConstraintSystem<F>>(qap: &QapPoint<'_, F, S>) -> Self {
        let t = qap.point();
        let mut h = Vec::with_capacity(qap.degree() + 1);
        let mut power = F::one();
        for _ in 0..=qap.degree() {
            h.push(power);
            power *= t;
        }
        QueryH { h }
    }

    pub fn vec(&self) -> &[F] {
        &self.h
    }
}

/// Input-consistency coefficients `r_a * A[0..=num_inputs]`.
pub fn query_ic<F: FftField, S: ConstraintSystem<F>>(
    qap: &QapPoint<'_, F, S>,
    abc: &QueryAbc<F>,
    r_a: F,
) -> Vec<F> {
    abc.a[..=qap.num_inputs()]
        .iter()
        .map(|a_i| *a_i * r_a)
        .collect()
}

/// The A query with the input-consistency entries zeroed. Those wires are
/// committed through the verification key instead.
pub fn query_a_without_ic<F: FftField, S: ConstraintSystem<F>>(
    qap: &QapPoint<'_, F, S>,
    abc: &QueryAbc<F>,
) -> Vec<F> {
    let mut a = abc.a.clone();
    a[..=qap.num_inputs()].fill(F::zero());
    a
}

/// `beta*rA*A[i] + beta*rB*B[i] + beta*rC*C[i]` per wire, then the three
/// `Z(t)` terms scaled by `beta*rA`, `beta*rB` and `beta*rC`.
pub fn query_k<F: FftField, S: ConstraintSystem<F>>(
    qap: &QapPoint<'_, F, S>,
    abc: &QueryAbc<F>,
    beta_r_a: F,
    beta_r_b: F,
    beta_r_c: F,
) -> Vec<F> {
    let wires = qap.num_variables() + 1;
    let z = qap.compute_z();

    let mut k = Vec::with_capacity(wires + 3);
    k.extend(
        izip!(&abc.a[..wires], &abc.b[..wires], &abc.c[..wires])
            .map(|(a_i, b_i, c_i)| beta_r_a * a_i + beta_r_b * b_i + beta_r_c * c_i),
    );
    k.push(beta_r_a * z);
    k.push(beta_r_b * z);
    k.push(beta_r_c * z);
    k
}

/// Scalar multiplications against the G1 generator over the whole key.
pub fn g1_exp_count<F: FftField, S: ConstraintSystem<F>>(
    qap: &QapPoint<'_, F, S>,
    abc: &QueryAbc<F>,
    h: &QueryH<F>,
) -> usize {
    let ic = qap.num_inputs() + 1;
    let non_zero_a = count_non_zero(&abc.a[ic..]);

    ic + 2 * (non_zero_a + count_non_zero(&abc.c))
        + count_non_zero(&abc.b)
        + count_non_zero(h.vec())
        + qap.num_variables()
        + 4
}

/// Scalar multiplications against the G2 generator; only the B query lives there.
pub fn g2_exp_count<F: FftField>(abc: &QueryAbc<F>) -> usize {
    count_non_zero(&abc.b)
}
