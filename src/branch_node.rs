use crate::branch_subproblem::{LinearProgram, Relaxation, SubProblemSolver};
use crate::branchbound_utils::is_near_integer;
use crate::constraint::{Constraint, ConstraintSet};
use crate::error::{MipError, MipResult, SolveError};
use crate::problem::MipProblem;
use crate::variable::{LinearExpr, Variable};
use ndarray::Array1;
use std::rc::Rc;

/// Struct the describes the branch and bound tree nodes.
///
/// A node is the problem plus the bounds its ancestors branched on. The constraint set is shared
/// with the parent, and the built LP and its relaxation are cached on the node so that a node is
/// solved at most once. Children start unbuilt and unsolved.
#[derive(Clone)]
pub struct SubproblemNode {
    problem: Rc<MipProblem>,
    constraints: ConstraintSet,
    program: Option<LinearProgram>,
    relaxation: Option<Relaxation>,
    depth: usize,
}

impl SubproblemNode {
    pub fn root(problem: Rc<MipProblem>) -> Self {
        let constraints = ConstraintSet::new(problem.constraints().to_vec());
        Self {
            problem,
            constraints,
            program: None,
            relaxation: None,
            depth: 0,
        }
    }

    pub fn problem(&self) -> &MipProblem {
        &self.problem
    }

    pub const fn constraints(&self) -> &ConstraintSet {
        &self.constraints
    }

    pub const fn depth(&self) -> usize {
        self.depth
    }

    /// Builds the maximization LP of this node, reusing it if it was already built
    pub fn build(&mut self) -> &LinearProgram {
        let problem = &self.problem;
        let constraints = &self.constraints;
        self.program.get_or_insert_with(|| {
            LinearProgram::from_constraints(
                problem.num_x(),
                &constraints.to_vec(),
                &LinearExpr::variable(problem.objective_variable()),
            )
        })
    }

    /// Solves the relaxation with `solver` and caches it, returning the relaxation value.
    ///
    /// # Errors
    ///
    /// Passes on the solver's [`SolveError`], the node is left unsolved in that case.
    pub fn solve(&mut self, solver: &dyn SubProblemSolver) -> Result<f64, SolveError> {
        if let Some(relaxation) = &self.relaxation {
            return Ok(relaxation.objective_value);
        }

        let relaxation = solver.solve(self.build())?;
        let value = relaxation.objective_value;
        self.relaxation = Some(relaxation);
        Ok(value)
    }

    pub const fn is_solved(&self) -> bool {
        self.relaxation.is_some()
    }

    pub const fn relaxation(&self) -> Option<&Relaxation> {
        self.relaxation.as_ref()
    }

    pub fn objective_value(&self) -> Option<f64> {
        self.relaxation.as_ref().map(|r| r.objective_value)
    }

    pub fn solution(&self) -> Option<&Array1<f64>> {
        self.relaxation.as_ref().map(|r| &r.solution)
    }

    /// Value of `x` in the last solve, `None` before the node is solved
    pub fn value(&self, x: &Variable) -> Option<f64> {
        if !self.problem.contains(x) {
            return None;
        }
        self.solution().map(|s| s[x.index()])
    }

    /// Checks if all integer variables are within `tolerance` of an integer. The objective
    /// variable is continuous and never checked. An unsolved node is not integral.
    pub fn is_integral(&self, tolerance: f64) -> bool {
        let Some(solution) = self.solution() else {
            return false;
        };

        self.problem
            .integer_variables()
            .all(|x| is_near_integer(solution[x.index()], tolerance))
    }

    /// Makes a child with `x <= floor(x*)`
    ///
    /// # Errors
    ///
    /// Returns [`MipError::UnsolvedBranch`] if the node has not been solved and
    /// [`MipError::UnknownVariable`] if `x` is not a variable of the problem.
    pub fn branch_floor(&self, x: &Variable) -> MipResult<Self> {
        let value = self.branch_value(x)?;
        Ok(self.child(Constraint::upper_bound(x, value.floor())))
    }

    /// Makes a child with `x >= ceil(x*)`
    ///
    /// # Errors
    ///
    /// Returns [`MipError::UnsolvedBranch`] if the node has not been solved and
    /// [`MipError::UnknownVariable`] if `x` is not a variable of the problem.
    pub fn branch_ceil(&self, x: &Variable) -> MipResult<Self> {
        let value = self.branch_value(x)?;
        Ok(self.child(Constraint::lower_bound(x, value.ceil())))
    }

    fn branch_value(&self, x: &Variable) -> MipResult<f64> {
        if !self.problem.contains(x) {
            return Err(MipError::UnknownVariable {
                variable: x.name().to_string(),
            });
        }

        self.value(x).ok_or_else(|| MipError::UnsolvedBranch {
            variable: x.name().to_string(),
        })
    }

    fn child(&self, bound: Constraint) -> Self {
        Self {
            problem: Rc::clone(&self.problem),
            constraints: self.constraints.with(bound),
            program: None,
            relaxation: None,
            depth: self.depth + 1,
        }
    }
}
