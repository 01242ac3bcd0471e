use ark_ff::Field;
use rootcause::prelude::ResultExt;
use rootcause::{Report, bail, report};
use serde::Deserialize;

/// Per-wire values of the A, B and C linear combinations at an evaluation point.
///
/// Index 0 is the constant-one wire, followed by public inputs, then private wires.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WireEvaluations<F: Field> {
    pub a: Vec<F>,
    pub b: Vec<F>,
    pub c: Vec<F>,
}

/// Anything the key generator can turn into a QAP.
///
/// A constraint system only needs to report its shape and fold its coefficients
/// against a vector of Lagrange basis evaluations, one per constraint.
pub trait ConstraintSystem<F: Field> {
    fn num_constraints(&self) -> usize;

    /// Number of wires, not counting the constant-one wire.
    fn num_variables(&self) -> usize;

    /// For every wire `i`, computes `sum_j coeff(i, j) * lagrange[j]` over the
    /// constraints `j` for each of the three matrices.
    ///
    /// `lagrange` has at least `num_constraints()` entries.
    fn evaluate_wires(&self, lagrange: &[F]) -> WireEvaluations<F>;
}

/// A rank 1 constraint system `<L, w> * <R, w> = <O, w>`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct R1CS<F: Field> {
    /// Column-wise, i.e. a vec of columns
    l: Vec<Vec<F>>,
    /// Column-wise, i.e. a vec of columns
    r: Vec<Vec<F>>,
    /// Column-wise, i.e. a vec of columns
    o: Vec<Vec<F>>,
}

/// JSON form of an [`R1CS`]: three column-wise matrices of small integers.
#[derive(Deserialize)]
struct R1csDescription {
    l: Vec<Vec<u64>>,
    r: Vec<Vec<u64>>,
    o: Vec<Vec<u64>>,
}

impl<F: Field> R1CS<F> {
    /// Builds an R1CS from column-wise matrices. Column 0 is the constant-one wire.
    pub fn new<T>(l: Vec<Vec<T>>, r: Vec<Vec<T>>, o: Vec<Vec<T>>) -> Result<Self, Report>
    where
        T: Into<F>,
    {
        if l.is_empty() {
            bail!("R1CS needs at least the constant wire column")
        }
        if l.len() != r.len() || l.len() != o.len() {
            return Err(report!("R1CS matrices have different numbers of wires")
                .attach(format!("L: {}, R: {}, O: {}", l.len(), r.len(), o.len())));
        }

        let num_constraints = l[0].len();
        for (name, matrix) in [("L", &l), ("R", &r), ("O", &o)] {
            if let Some(wire) = matrix
                .iter()
                .position(|column| column.len() != num_constraints)
            {
                return Err(report!("R1CS column has wrong number of constraints")
                    .attach(format!("matrix: {}, wire: {}", name, wire))
                    .attach(format!("expected: {}", num_constraints)));
            }
        }

        let convert = |matrix: Vec<Vec<T>>| -> Vec<Vec<F>> {
            matrix
                .into_iter()
                .map(|column| column.into_iter().map(Into::into).collect())
                .collect()
        };

        Ok(R1CS {
            l: convert(l),
            r: convert(r),
            o: convert(o),
        })
    }

    /// Parses `{"l": [[..]], "r": [[..]], "o": [[..]]}`.
    pub fn from_json(json: &str) -> Result<Self, Report> {
        let description: R1csDescription =
            serde_json::from_str(json).context("Malformed R1CS description")?;
        Self::new(description.l, description.r, description.o)
    }

    fn fold(matrix: &[Vec<F>], lagrange: &[F]) -> Vec<F> {
        matrix
            .iter()
            .map(|column| {
                column
                    .iter()
                    .zip(lagrange)
                    .filter(|(coefficient, _)| !coefficient.is_zero())
                    .map(|(coefficient, basis)| *coefficient * basis)
                    .sum::<F>()
            })
            .collect()
    }
}

impl<F: Field> ConstraintSystem<F> for R1CS<F> {
    fn num_constraints(&self) -> usize {
        self.l.first().map_or(0, Vec::len)
    }

    fn num_variables(&self) -> usize {
        self.l.len() - 1
    }

    fn evaluate_wires(&self, lagrange: &[F]) -> WireEvaluations<F> {
        WireEvaluations {
            a: Self::fold(&self.l, lagrange),
            b: Self::fold(&self.r, lagrange),
            c: Self::fold(&self.o, lagrange),
        }
    }
}
