use ndarray::Array1;
use std::fmt;

/// Whether the search has to drive a variable to an integer value
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum VariableKind {
    #[default]
    Integer,
    Continuous,
}

/// Handle to a decision variable of a [`crate::problem::MipProblem`].
///
/// The handle does not carry a value; values live on solved nodes and are read with
/// [`crate::branch_node::SubproblemNode::value`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Variable {
    pub(crate) name: String,
    pub(crate) index: usize,
    pub(crate) kind: VariableKind,
}

impl Variable {
    pub(crate) fn new(name: &str, index: usize, kind: VariableKind) -> Self {
        Self {
            name: name.to_string(),
            index,
            kind,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Position of the variable in declaration order, which is also its column in the LP
    pub const fn index(&self) -> usize {
        self.index
    }

    pub const fn kind(&self) -> VariableKind {
        self.kind
    }

    pub fn is_integer(&self) -> bool {
        self.kind == VariableKind::Integer
    }
}

impl fmt::Display for Variable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// A sparse affine expression `sum(a_i * x_i) + constant`
#[derive(Clone, Debug, PartialEq, Default)]
pub struct LinearExpr {
    terms: Vec<(usize, f64)>,
    constant: f64,
}

impl LinearExpr {
    pub fn new() -> Self {
        Self::default()
    }

    /// The expression `1.0 * x`
    pub fn variable(x: &Variable) -> Self {
        Self::new().term(x, 1.0)
    }

    pub fn from_terms(terms: &[(&Variable, f64)]) -> Self {
        terms
            .iter()
            .fold(Self::new(), |expr, &(x, coef)| expr.term(x, coef))
    }

    /// Adds `coef * x` to the expression, repeated variables are summed when the LP is built
    #[must_use]
    pub fn term(mut self, x: &Variable, coef: f64) -> Self {
        self.terms.push((x.index, coef));
        self
    }

    #[must_use]
    pub fn constant(mut self, constant: f64) -> Self {
        self.constant += constant;
        self
    }

    /// Returns `-self`
    #[must_use]
    pub fn negate(mut self) -> Self {
        for (_, coef) in &mut self.terms {
            *coef = -*coef;
        }
        self.constant = -self.constant;
        self
    }

    pub fn terms(&self) -> &[(usize, f64)] {
        &self.terms
    }

    pub const fn constant_term(&self) -> f64 {
        self.constant
    }

    /// Largest variable index referenced, if any
    pub fn max_index(&self) -> Option<usize> {
        self.terms.iter().map(|&(i, _)| i).max()
    }

    /// Evaluates the expression at a point given in declaration order
    pub fn eval(&self, x: &Array1<f64>) -> f64 {
        self.terms
            .iter()
            .fold(self.constant, |acc, &(i, coef)| acc + coef * x[i])
    }
}
