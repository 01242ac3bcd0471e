use crate::circuits::{ConstraintSystem, WireEvaluations};
use ark_ff::FftField;
use ark_poly::{EvaluationDomain, GeneralEvaluationDomain};
use log::debug;
use rootcause::{Report, report};

/// A constraint system reduced to a QAP and pinned to a single evaluation point.
///
/// The evaluation domain holds one point per constraint plus one per public input
/// and one for the constant wire, so that public inputs are bound by extra
/// `input * 1 = 0` style consistency rows.
pub struct QapPoint<'a, F: FftField, S: ConstraintSystem<F>> {
    system: &'a S,
    num_inputs: usize,
    domain: GeneralEvaluationDomain<F>,
    point: F,
    z: F,
}

impl<'a, F: FftField, S: ConstraintSystem<F>> QapPoint<'a, F, S> {
    pub fn new(system: &'a S, num_inputs: usize, point: F) -> Result<Self, Report> {
        if num_inputs > system.num_variables() {
            return Err(report!("More public inputs than wires")
                .attach(format!("inputs: {}", num_inputs))
                .attach(format!("wires: {}", system.num_variables())));
        }

        let rows = system.num_constraints() + num_inputs + 1;
        let domain = GeneralEvaluationDomain::<F>::new(rows).ok_or_else(|| {
            report!("No evaluation domain of the required size").attach(format!("rows: {}", rows))
        })?;
        let z = domain.evaluate_vanishing_polynomial(point);

        debug!(
            "QAP over {} constraints, {} inputs, domain size {}",
            system.num_constraints(),
            num_inputs,
            domain.size()
        );

        Ok(QapPoint {
            system,
            num_inputs,
            domain,
            point,
            z,
        })
    }

    /// True when the point is a root of the vanishing polynomial; every Lagrange
    /// basis polynomial but one is then zero and the keys would be degenerate.
    pub fn weak_point(&self) -> bool {
        self.z.is_zero()
    }

    /// `Z(point)`, the vanishing polynomial of the domain at the evaluation point.
    pub fn compute_z(&self) -> F {
        self.z
    }

    pub fn point(&self) -> F {
        self.point
    }

    pub fn domain(&self) -> &GeneralEvaluationDomain<F> {
        &self.domain
    }

    /// Domain size, which bounds the degree of the quotient polynomial.
    pub fn degree(&self) -> usize {
        self.domain.size()
    }

    pub fn num_inputs(&self) -> usize {
        self.num_inputs
    }

    pub fn num_constraints(&self) -> usize {
        self.system.num_constraints()
    }

    pub fn num_variables(&self) -> usize {
        self.system.num_variables()
    }

    pub fn lagrange_coefficients(&self) -> Vec<F> {
        self.domain.evaluate_all_lagrange_coefficients(self.point)
    }

    /// Per-wire `A(t)`, `B(t)`, `C(t)` including the input-consistency rows, which
    /// follow the constraint rows in the domain and only touch A.
    pub fn evaluate_wires(&self) -> WireEvaluations<F> {
        let lagrange = self.lagrange_coefficients();
        let num_constraints = self.num_constraints();
        let mut wires = self.system.evaluate_wires(&lagrange[..num_constraints]);

        for wire in 0..=self.num_inputs {
            wires.a[wire] += lagrange[num_constraints + wire];
        }
        wires
    }
}
