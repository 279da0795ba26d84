//! Error types for the branch and bound solver.

use thiserror::Error;

/// Failure reported by a relaxation solve. Every kind prunes the node, but they are kept
/// separate so that a numerical failure is not mistaken for a proof of infeasibility.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SolveError {
    /// The relaxation has no feasible point
    #[error("relaxation is infeasible")]
    Infeasible,

    /// The relaxation objective is unbounded above
    #[error("relaxation is unbounded")]
    Unbounded,

    /// The continuous solver stopped on an iteration or time limit
    #[error("relaxation solve hit a limit: {0}")]
    IterationLimit(String),

    /// The continuous solver failed for numerical reasons or rejected the problem
    #[error("relaxation solve failed: {0}")]
    Numerical(String),
}

/// Errors raised by misuse of the modeling or node API.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MipError {
    /// Problem validation failed
    #[error("invalid problem: {0}")]
    InvalidProblem(String),

    /// Branching was requested on a node that has not been solved
    #[error("cannot branch on `{variable}`: the node has no solved value for it")]
    UnsolvedBranch { variable: String },

    /// A variable handle that does not belong to the problem
    #[error("unknown variable `{variable}`")]
    UnknownVariable { variable: String },

    /// Branching was requested on a node whose integer variables are all integral
    #[error("no fractional integer variable to branch on")]
    NoBranchingVariable,

    /// Solve failure surfaced through an API that does not recover from it
    #[error(transparent)]
    Solve(#[from] SolveError),
}

pub type MipResult<T> = Result<T, MipError>;
