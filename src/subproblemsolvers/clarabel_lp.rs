use crate::branch_subproblem::{LinearProgram, Relaxation, SubProblemResult, SubProblemSolver};
use crate::error::SolveError;
use clarabel::algebra::CscMatrix;
use clarabel::solver::{
    DefaultSettings, DefaultSolver, IPSolver, NonnegativeConeT, SolverStatus, SupportedConeT,
    ZeroConeT,
};
use ndarray::Array1;
use sprs::{CsMat, TriMat};

/// Solves the node LPs with the Clarabel interior point solver.
///
/// Clarabel minimizes `1/2 x'Px + q'x` s.t. `Ax + s = b`, `s` in a product of cones, so the LP is
/// handed over as `q = -c`, `P = 0` and the stacked `[A_eq; A_ub]` with a zero cone for the
/// equality rows and a nonnegative cone for the inequality rows.
#[derive(Clone, Debug, Default)]
pub struct ClarabelLPSolver {
    pub max_iter: Option<u32>,
}

impl ClarabelLPSolver {
    pub const fn new() -> Self {
        Self { max_iter: None }
    }

    pub fn make_cb_form(p0: &CsMat<f64>) -> CscMatrix {
        let (t, y, u) = p0.to_csc().into_raw_storage();
        CscMatrix::new(p0.rows(), p0.cols(), t, y, u)
    }

    /// Stacks the equality rows on top of the inequality rows
    fn stack_constraints(program: &LinearProgram) -> (CsMat<f64>, Vec<f64>) {
        let num_eq = program.num_eq();
        let num_rows = num_eq + program.num_ub();

        let mut a = TriMat::new((num_rows, program.num_x()));
        for (&val, (i, j)) in &program.a_eq {
            a.add_triplet(i, j, val);
        }
        for (&val, (i, j)) in &program.a_ub {
            a.add_triplet(num_eq + i, j, val);
        }

        let b = program
            .b_eq
            .iter()
            .chain(program.b_ub.iter())
            .copied()
            .collect();

        (a.to_csc(), b)
    }

    fn map_status(status: &SolverStatus) -> Result<(), SolveError> {
        match status {
            SolverStatus::Solved | SolverStatus::AlmostSolved => Ok(()),
            SolverStatus::PrimalInfeasible | SolverStatus::AlmostPrimalInfeasible => {
                Err(SolveError::Infeasible)
            }
            SolverStatus::DualInfeasible | SolverStatus::AlmostDualInfeasible => {
                Err(SolveError::Unbounded)
            }
            SolverStatus::MaxIterations | SolverStatus::MaxTime => {
                Err(SolveError::IterationLimit(format!("{status:?}")))
            }
            other => Err(SolveError::Numerical(format!("{other:?}"))),
        }
    }
}

impl SubProblemSolver for ClarabelLPSolver {
    fn solve(&self, program: &LinearProgram) -> SubProblemResult {
        // generate default settings
        let mut settings = DefaultSettings {
            verbose: false,
            ..Default::default()
        };
        if let Some(max_iter) = self.max_iter {
            settings.max_iter = max_iter;
        }

        let num_x = program.num_x();

        // an LP has no quadratic term
        let p = Self::make_cb_form(&TriMat::<f64>::new((num_x, num_x)).to_csc());
        let q = program.c.iter().map(|c| -c).collect::<Vec<f64>>();

        let (a, b) = Self::stack_constraints(program);
        let a_clara = Self::make_cb_form(&a);

        // clarabel does not accept empty cones
        let mut cones: Vec<SupportedConeT<f64>> = Vec::with_capacity(2);
        if program.num_eq() > 0 {
            cones.push(ZeroConeT(program.num_eq()));
        }
        if program.num_ub() > 0 {
            cones.push(NonnegativeConeT(program.num_ub()));
        }

        // set up the solver with the matrices
        let mut solver = DefaultSolver::new(&p, &q, &a_clara, &b, &cones, settings);

        // solve the optimization problem
        solver.solve();

        Self::map_status(&solver.solution.status)?;

        let solution = Array1::from(solver.solution.x.clone());
        if solution.iter().any(|v| !v.is_finite()) {
            return Err(SolveError::Numerical(
                "solver returned a non-finite point".to_string(),
            ));
        }

        Ok(Relaxation {
            objective_value: program.objective_value(&solution),
            solution,
        })
    }
}
