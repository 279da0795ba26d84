use crate::variable::{LinearExpr, Variable};
use ndarray::Array1;
use std::rc::Rc;

/// Enum for the relation of a constraint's expression to its right hand side
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ConstraintType {
    LessThan,
    GreaterThan,
    Equal,
}

/// An immutable linear relation `expr (<=|>=|==) rhs`
#[derive(Clone, Debug, PartialEq)]
pub struct Constraint {
    pub(crate) expr: LinearExpr,
    pub(crate) constr_type: ConstraintType,
    pub(crate) rhs: f64,
}

impl Constraint {
    /// Creates a new constraint, any constant in the expression is moved to the right hand side
    pub fn new(expr: LinearExpr, constraint_type: ConstraintType, rhs: f64) -> Self {
        let shift = expr.constant_term();
        Self {
            expr: expr.constant(-shift),
            constr_type: constraint_type,
            rhs: rhs - shift,
        }
    }

    pub fn less_than(expr: LinearExpr, rhs: f64) -> Self {
        Self::new(expr, ConstraintType::LessThan, rhs)
    }

    pub fn greater_than(expr: LinearExpr, rhs: f64) -> Self {
        Self::new(expr, ConstraintType::GreaterThan, rhs)
    }

    pub fn equal(expr: LinearExpr, rhs: f64) -> Self {
        Self::new(expr, ConstraintType::Equal, rhs)
    }

    /// `x <= value`
    pub fn upper_bound(x: &Variable, value: f64) -> Self {
        Self::less_than(LinearExpr::variable(x), value)
    }

    /// `x >= value`
    pub fn lower_bound(x: &Variable, value: f64) -> Self {
        Self::greater_than(LinearExpr::variable(x), value)
    }

    pub const fn constraint_type(&self) -> ConstraintType {
        self.constr_type
    }

    pub const fn expr(&self) -> &LinearExpr {
        &self.expr
    }

    pub const fn rhs(&self) -> f64 {
        self.rhs
    }

    /// Checks if a point satisfies the constraint up to an absolute tolerance
    pub fn check(&self, x: &Array1<f64>, tolerance: f64) -> bool {
        let lhs = self.expr.eval(x);
        match self.constr_type {
            ConstraintType::LessThan => lhs <= self.rhs + tolerance,
            ConstraintType::GreaterThan => lhs >= self.rhs - tolerance,
            ConstraintType::Equal => (lhs - self.rhs).abs() <= tolerance,
        }
    }
}

struct ConstraintCell {
    constraint: Constraint,
    parent: Option<Rc<ConstraintCell>>,
}

/// Persistent, structurally shared constraint list.
///
/// The problem constraints are held once behind an `Rc`, and every bound added by branching is
/// a cell pointing at its parent's cells. Adding a constraint never touches the set it was
/// derived from, so sibling nodes share everything up to their common ancestor.
#[derive(Clone)]
pub struct ConstraintSet {
    base: Rc<[Constraint]>,
    added: Option<Rc<ConstraintCell>>,
    num_added: usize,
}

impl ConstraintSet {
    pub fn new(constraints: Vec<Constraint>) -> Self {
        Self {
            base: constraints.into(),
            added: None,
            num_added: 0,
        }
    }

    /// Returns a new set with one more constraint, leaving `self` unchanged
    #[must_use]
    pub fn with(&self, constraint: Constraint) -> Self {
        Self {
            base: Rc::clone(&self.base),
            added: Some(Rc::new(ConstraintCell {
                constraint,
                parent: self.added.clone(),
            })),
            num_added: self.num_added + 1,
        }
    }

    pub fn len(&self) -> usize {
        self.base.len() + self.num_added
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of constraints added on top of the problem constraints
    pub const fn num_added(&self) -> usize {
        self.num_added
    }

    /// The constraints added by branching, oldest first
    pub fn added(&self) -> Vec<&Constraint> {
        let mut added = Vec::with_capacity(self.num_added);
        let mut cell = self.added.as_deref();
        while let Some(c) = cell {
            added.push(&c.constraint);
            cell = c.parent.as_deref();
        }
        added.reverse();
        added
    }

    /// All constraints, problem constraints first and then added ones oldest first
    pub fn to_vec(&self) -> Vec<&Constraint> {
        let mut all = self.base.iter().collect::<Vec<_>>();
        all.extend(self.added());
        all
    }

    /// True if both sets hold the same problem constraints without a copy
    pub fn shares_base_with(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.base, &other.base)
    }
}

impl Drop for ConstraintSet {
    // unlink the chain iteratively so deep trees don't recurse on drop
    fn drop(&mut self) {
        let mut next = self.added.take();
        while let Some(cell) = next {
            match Rc::try_unwrap(cell) {
                Ok(mut cell) => next = cell.parent.take(),
                Err(_) => break,
            }
        }
    }
}
