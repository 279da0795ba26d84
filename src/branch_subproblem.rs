use crate::constraint::{Constraint, ConstraintType};
use crate::error::SolveError;
use crate::subproblemsolvers::clarabel_lp::ClarabelLPSolver;
use crate::variable::LinearExpr;
use ndarray::Array1;
use sprs::{CsMat, TriMat};

/// Solver ready form of a relaxation: maximize `c'x` s.t. `A_eq x = b_eq` and `A_ub x <= b_ub`
#[derive(Clone, Debug)]
pub struct LinearProgram {
    pub c: Array1<f64>,
    pub a_eq: CsMat<f64>,
    pub b_eq: Array1<f64>,
    pub a_ub: CsMat<f64>,
    pub b_ub: Array1<f64>,
}

impl LinearProgram {
    /// Assembles the sparse matrices, `>=` rows are negated into `<=` rows
    pub fn from_constraints(
        num_x: usize,
        constraints: &[&Constraint],
        objective: &LinearExpr,
    ) -> Self {
        let num_eq = constraints
            .iter()
            .filter(|c| c.constraint_type() == ConstraintType::Equal)
            .count();
        let num_ub = constraints.len() - num_eq;

        let mut a_eq = TriMat::new((num_eq, num_x));
        let mut a_ub = TriMat::new((num_ub, num_x));
        let mut b_eq = Array1::<f64>::zeros(num_eq);
        let mut b_ub = Array1::<f64>::zeros(num_ub);

        let mut eq_row = 0;
        let mut ub_row = 0;

        for constraint in constraints {
            let (sign, rhs) = match constraint.constraint_type() {
                ConstraintType::Equal => {
                    for &(i, coef) in constraint.expr().terms() {
                        a_eq.add_triplet(eq_row, i, coef);
                    }
                    b_eq[eq_row] = constraint.rhs();
                    eq_row += 1;
                    continue;
                }
                ConstraintType::LessThan => (1.0, constraint.rhs()),
                ConstraintType::GreaterThan => (-1.0, -constraint.rhs()),
            };

            for &(i, coef) in constraint.expr().terms() {
                a_ub.add_triplet(ub_row, i, sign * coef);
            }
            b_ub[ub_row] = rhs;
            ub_row += 1;
        }

        // duplicate terms are summed by the triplet conversion
        let mut c = Array1::<f64>::zeros(num_x);
        for &(i, coef) in objective.terms() {
            c[i] += coef;
        }

        Self {
            c,
            a_eq: a_eq.to_csc(),
            b_eq,
            a_ub: a_ub.to_csc(),
            b_ub,
        }
    }

    pub fn num_x(&self) -> usize {
        self.c.len()
    }

    pub fn num_eq(&self) -> usize {
        self.b_eq.len()
    }

    pub fn num_ub(&self) -> usize {
        self.b_ub.len()
    }

    pub fn objective_value(&self, x: &Array1<f64>) -> f64 {
        self.c.dot(x)
    }
}

/// Optimal point of a relaxation and its objective value
#[derive(Clone, Debug, PartialEq)]
pub struct Relaxation {
    pub objective_value: f64,
    pub solution: Array1<f64>,
}

pub type SubProblemResult = Result<Relaxation, SolveError>;

/// The continuous solver used on every node. Implementations only need to solve a linear program
/// to optimality or report how they failed.
pub trait SubProblemSolver {
    fn solve(&self, program: &LinearProgram) -> SubProblemResult;
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum SubProblemSelection {
    #[default]
    Clarabel,
}

pub fn get_sub_problem_solver(
    sub_problem_selection: SubProblemSelection,
) -> Box<dyn SubProblemSolver> {
    match sub_problem_selection {
        SubProblemSelection::Clarabel => Box::new(ClarabelLPSolver::new()),
    }
}
