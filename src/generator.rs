use crate::circuits::ConstraintSystem;
use crate::keypair::Keypair;
use crate::keys::{KnowledgeCommitment, ProvingKey, VerificationKey};
use crate::progress::{NoProgress, ProgressSink};
use crate::qap::QapPoint;
use crate::query::{
    QueryAbc, QueryH, g1_exp_count, g2_exp_count, query_a_without_ic, query_ic, query_k,
};
use crate::randomness::{BlindGreeks, LagrangePoint};
use crate::window::WindowTable;
use ark_ec::pairing::Pairing;
use ark_ec::{CurveGroup, PrimeGroup};
use ark_ff::PrimeField;
use log::debug;
use rootcause::Report;
use rootcause::prelude::ResultExt;

/// Major steps reported by [`Keypair::generate_with_progress`].
pub const GENERATION_STEPS: usize = 8;

/// Commits `vec` twice: scaled by `r` against `base_table`, and by `alpha_r`
/// against `alpha_table`.
fn commit_abc<F, B, A>(
    vec: &[F],
    r: F,
    alpha_r: F,
    base_table: &WindowTable<B>,
    alpha_table: &WindowTable<A>,
    progress: &mut dyn ProgressSink,
) -> Vec<KnowledgeCommitment<B::Affine, A::Affine>>
where
    F: PrimeField,
    B: CurveGroup<ScalarField = F>,
    A: CurveGroup<ScalarField = F>,
{
    let base_scalars: Vec<F> = vec.iter().map(|v| *v * r).collect();
    let alpha_scalars: Vec<F> = vec.iter().map(|v| *v * alpha_r).collect();

    let bases = base_table.batch_mul(&base_scalars, progress);
    let alphas = alpha_table.batch_mul(&alpha_scalars, progress);

    bases
        .into_iter()
        .zip(alphas)
        .map(|(base, alpha)| KnowledgeCommitment::new(base, alpha))
        .collect()
}

impl<E: Pairing> Keypair<E> {
    /// Generates a keypair without progress reporting.
    ///
    /// See [`Keypair::generate_with_progress`].
    pub fn generate<S: ConstraintSystem<E::ScalarField>>(
        system: &S,
        num_inputs: usize,
        point: &LagrangePoint<E::ScalarField>,
        blind: &BlindGreeks<E::ScalarField>,
    ) -> Result<Self, Report> {
        Self::generate_with_progress(system, num_inputs, point, blind, &mut NoProgress)
    }

    /// Runs the trusted setup for `system` with `num_inputs` public inputs.
    ///
    /// If `point` is a root of the domain's vanishing polynomial the result is an
    /// empty keypair and the caller should retry with a fresh point. Errors are
    /// only returned when no QAP can be built for the system at all.
    ///
    /// `progress` is told about [`GENERATION_STEPS`] major steps up front and
    /// receives one `major(true)` before each of them.
    pub fn generate_with_progress<S: ConstraintSystem<E::ScalarField>>(
        system: &S,
        num_inputs: usize,
        point: &LagrangePoint<E::ScalarField>,
        blind: &BlindGreeks<E::ScalarField>,
        progress: &mut dyn ProgressSink,
    ) -> Result<Self, Report> {
        progress.major_steps(GENERATION_STEPS);

        let qap = QapPoint::new(system, num_inputs, point.point())
            .context("Instantiating QAP at the evaluation point")?;
        if qap.weak_point() {
            debug!("Evaluation point is a root of the vanishing polynomial");
            return Ok(Self::default());
        }

        let abc = QueryAbc::new(&qap);
        let h_query = QueryH::new(&qap);

        progress.major(true);
        let g1_table = WindowTable::<E::G1>::new(g1_exp_count(&qap, &abc, &h_query), progress);
        debug!("Built G1 window table");

        progress.major(true);
        let g2_table = WindowTable::<E::G2>::new(g2_exp_count(&abc), progress);
        debug!("Built G2 window table");

        progress.major(true);
        let ic = g1_table.batch_mul(&query_ic(&qap, &abc, blind.r_a()), progress);

        progress.major(true);
        let a = commit_abc(
            &query_a_without_ic(&qap, &abc),
            blind.r_a(),
            blind.alpha_a_r_a(),
            &g1_table,
            &g1_table,
            progress,
        );
        debug!("Committed A query");

        // B lives in G2 so that it pairs against A and C
        progress.major(true);
        let b = commit_abc(
            abc.vec_b(),
            blind.r_b(),
            blind.alpha_b_r_b(),
            &g2_table,
            &g1_table,
            progress,
        );
        debug!("Committed B query");

        progress.major(true);
        let c = commit_abc(
            abc.vec_c(),
            blind.r_c(),
            blind.alpha_c_r_c(),
            &g1_table,
            &g1_table,
            progress,
        );
        debug!("Committed C query");

        progress.major(true);
        let h = g1_table.batch_mul(h_query.vec(), progress);
        debug!("Committed H query");

        progress.major(true);
        let k = g1_table.batch_mul(
            &query_k(
                &qap,
                &abc,
                blind.beta_r_a(),
                blind.beta_r_b(),
                blind.beta_r_c(),
            ),
            progress,
        );
        debug!("Committed K query");

        let pk = ProvingKey::new(a, b, c, h, k);

        let g1 = E::G1::generator();
        let g2 = E::G2::generator();
        let vk = VerificationKey::new(
            (g2 * blind.alpha_a()).into_affine(),
            (g1 * blind.alpha_b()).into_affine(),
            (g2 * blind.alpha_c()).into_affine(),
            (g2 * blind.gamma()).into_affine(),
            (g1 * blind.beta_gamma()).into_affine(),
            (g2 * blind.beta_gamma()).into_affine(),
            ((g2 * blind.r_c()) * qap.compute_z()).into_affine(),
            ic,
        );

        Ok(Keypair::from_parts(pk, vk))
    }
}
