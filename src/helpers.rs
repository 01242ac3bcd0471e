use ark_ff::Field;
use rand::Rng;

/// Samples a uniformly random field element by rejection over random byte strings.
pub fn rand_scalar<T, S>(rng: &mut T) -> S
where
    T: Rng,
    S: Field,
{
    let mut bytes = [0; 256];
    loop {
        rng.fill_bytes(&mut bytes);
        if let Some(out) = S::from_random_bytes(&bytes) {
            return out;
        }
    }
}

/// Like `rand_scalar`, but never returns zero. Blinding factors must be invertible.
pub fn rand_nonzero_scalar<T, S>(rng: &mut T) -> S
where
    T: Rng,
    S: Field,
{
    loop {
        let out: S = rand_scalar(rng);
        if !out.is_zero() {
            return out;
        }
    }
}

/// Number of entries that would contribute a non-trivial group element.
pub fn count_non_zero<F: Field>(values: &[F]) -> usize {
    values.iter().filter(|value| !value.is_zero()).count()
}
