use crate::progress::ProgressSink;
use ark_ec::CurveGroup;
use ark_ec::scalar_mul::BatchMulPreprocessing;
use log::debug;

/// Precomputed multiples of a group generator for fast fixed-base scalar
/// multiplication.
///
/// The window width grows with the number of multiplications the table is
/// built for.
pub struct WindowTable<G: CurveGroup> {
    table: BatchMulPreprocessing<G>,
}

impl<G: CurveGroup> WindowTable<G> {
    /// Builds a table sized for `count` multiplications against `G::generator()`.
    pub fn new(count: usize, progress: &mut dyn ProgressSink) -> Self {
        debug!("Window table for {} multiplications", count);
        progress.minor_steps(1);
        let table = BatchMulPreprocessing::new(G::generator(), count);
        progress.minor();

        WindowTable { table }
    }

    /// Multiplies the generator by every scalar, in order.
    pub fn batch_mul(
        &self,
        scalars: &[G::ScalarField],
        progress: &mut dyn ProgressSink,
    ) -> Vec<G::Affine> {
        progress.minor_steps(1);
        let points = self.table.batch_mul(scalars);
        progress.minor();
        points
    }
}
