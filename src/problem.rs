use crate::constraint::Constraint;
use crate::error::{MipError, MipResult};
use crate::variable::{LinearExpr, Variable, VariableKind};
use ndarray::Array1;
use sprs::CsMat;
use std::collections::HashSet;

/// A mixed-integer linear program in maximization form.
///
/// The last declared variable is always the objective variable `z`, which is continuous and tied
/// to the objective expression with `z - objective == 0`, so the relaxation objective is simply
/// `maximize z`. [`ProblemBuilder::build`] enforces this layout.
#[derive(Debug, Clone)]
pub struct MipProblem {
    variables: Vec<Variable>,
    constraints: Vec<Constraint>,
    objective: LinearExpr,
    objective_variable: Variable,
}

impl MipProblem {
    pub fn num_x(&self) -> usize {
        self.variables.len()
    }

    pub fn variables(&self) -> &[Variable] {
        &self.variables
    }

    /// The constraints of the root relaxation, including the objective tie
    pub fn constraints(&self) -> &[Constraint] {
        &self.constraints
    }

    /// The user objective expression
    pub const fn objective(&self) -> &LinearExpr {
        &self.objective
    }

    pub const fn objective_variable(&self) -> &Variable {
        &self.objective_variable
    }

    /// Variables the search has to make integral, in declaration order
    pub fn integer_variables(&self) -> impl Iterator<Item = &Variable> {
        self.variables.iter().filter(|x| x.is_integer())
    }

    pub fn variable(&self, name: &str) -> Option<&Variable> {
        self.variables.iter().find(|x| x.name == name)
    }

    /// Checks that a handle was issued by this problem
    pub fn contains(&self, x: &Variable) -> bool {
        self.variables.get(x.index).is_some_and(|v| v == x)
    }

    /// Evaluates the objective expression at a point given in declaration order
    pub fn eval(&self, x: &Array1<f64>) -> f64 {
        self.objective.eval(x)
    }

    /// Checks constraint satisfaction and integrality of a full assignment
    pub fn is_feasible(&self, x: &Array1<f64>, tolerance: f64) -> bool {
        if x.len() != self.num_x() {
            return false;
        }

        let integral = self
            .integer_variables()
            .all(|v| (x[v.index] - x[v.index].round()).abs() <= tolerance);

        integral && self.constraints.iter().all(|c| c.check(x, tolerance))
    }

    /// Builds `max c'x s.t. Ax <= b, x >= 0, x integer`.
    ///
    /// Variables are named `x0..x{n-1}` and the objective variable `z`.
    ///
    /// # Errors
    ///
    /// Returns [`MipError::InvalidProblem`] if the dimensions of `c`, `a` and `b` disagree.
    pub fn from_standard_form(c: &Array1<f64>, a: &CsMat<f64>, b: &Array1<f64>) -> MipResult<Self> {
        if a.cols() != c.len() || a.rows() != b.len() {
            return Err(MipError::InvalidProblem(format!(
                "A is {}x{} but c has {} entries and b has {}",
                a.rows(),
                a.cols(),
                c.len(),
                b.len()
            )));
        }

        let mut builder = ProblemBuilder::new();
        let xs = (0..c.len())
            .map(|i| builder.add_variable(&format!("x{i}")))
            .collect::<Vec<_>>();

        // one <= row per row of A, CSR makes rows cheap to walk
        let a_csr = a.to_csr();
        for (row, row_vec) in a_csr.outer_iterator().enumerate() {
            let expr = row_vec
                .iter()
                .fold(LinearExpr::new(), |expr, (col, &val)| expr.term(&xs[col], val));
            builder.add_constraint(Constraint::less_than(expr, b[row]));
        }

        for x in &xs {
            builder.add_constraint(Constraint::lower_bound(x, 0.0));
        }

        let objective = xs
            .iter()
            .zip(c.iter())
            .fold(LinearExpr::new(), |expr, (x, &coef)| expr.term(x, coef));
        builder.maximize("z", objective);

        builder.build()
    }
}

/// Incrementally declares variables and constraints of a [`MipProblem`]
#[derive(Debug, Default)]
pub struct ProblemBuilder {
    variables: Vec<Variable>,
    constraints: Vec<Constraint>,
    objective: Option<(Variable, LinearExpr)>,
}

impl ProblemBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Declares an integer variable
    pub fn add_variable(&mut self, name: &str) -> Variable {
        self.declare(name, VariableKind::Integer)
    }

    /// Declares a continuous variable, exempt from integrality
    pub fn add_continuous_variable(&mut self, name: &str) -> Variable {
        self.declare(name, VariableKind::Continuous)
    }

    pub fn add_constraint(&mut self, constraint: Constraint) -> &mut Self {
        self.constraints.push(constraint);
        self
    }

    pub fn add_constraints<I>(&mut self, constraints: I) -> &mut Self
    where
        I: IntoIterator<Item = Constraint>,
    {
        self.constraints.extend(constraints);
        self
    }

    /// Declares the objective variable `name` as the last variable and sets `maximize objective`.
    ///
    /// No variable may be declared after this call.
    pub fn maximize(&mut self, name: &str, objective: LinearExpr) -> Variable {
        let z = self.declare(name, VariableKind::Continuous);
        self.objective = Some((z.clone(), objective));
        z
    }

    fn declare(&mut self, name: &str, kind: VariableKind) -> Variable {
        let x = Variable::new(name, self.variables.len(), kind);
        self.variables.push(x.clone());
        x
    }

    /// Validates the model and produces the problem.
    ///
    /// # Errors
    ///
    /// Returns [`MipError::InvalidProblem`] if no objective was set, if variables were declared
    /// after the objective variable, if names repeat, if the objective references its own
    /// variable, if any constraint references an undeclared variable or if a coefficient is not
    /// finite.
    pub fn build(self) -> MipResult<MipProblem> {
        let Some((objective_variable, objective)) = self.objective else {
            return Err(MipError::InvalidProblem(
                "no objective was set, call maximize".to_string(),
            ));
        };

        let num_x = self.variables.len();
        if objective_variable.index + 1 != num_x {
            return Err(MipError::InvalidProblem(format!(
                "objective variable `{objective_variable}` must be the last declared variable"
            )));
        }

        let mut names = HashSet::new();
        for x in &self.variables {
            if !names.insert(x.name.as_str()) {
                return Err(MipError::InvalidProblem(format!(
                    "variable name `{x}` is declared twice"
                )));
            }
        }

        if objective
            .terms()
            .iter()
            .any(|&(i, _)| i == objective_variable.index)
        {
            return Err(MipError::InvalidProblem(
                "the objective cannot reference the objective variable".to_string(),
            ));
        }

        // z - objective == constant
        let tie = Constraint::equal(
            objective
                .clone()
                .negate()
                .term(&objective_variable, 1.0),
            0.0,
        );

        let mut constraints = self.constraints;
        constraints.push(tie);

        for c in &constraints {
            if c.expr.max_index().is_some_and(|i| i >= num_x) {
                return Err(MipError::InvalidProblem(
                    "a constraint references an undeclared variable".to_string(),
                ));
            }

            let finite = c.rhs.is_finite() && c.expr.terms().iter().all(|(_, v)| v.is_finite());
            if !finite {
                return Err(MipError::InvalidProblem(
                    "constraint coefficients must be finite".to_string(),
                ));
            }
        }

        Ok(MipProblem {
            variables: self.variables,
            constraints,
            objective,
            objective_variable,
        })
    }
}
