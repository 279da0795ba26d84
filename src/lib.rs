//! Branch and bound for mixed-integer linear programs.
//!
//! The search relaxes integrality, solves the continuous relaxation of each node with a
//! [`branch_subproblem::SubProblemSolver`] (Clarabel by default), and splits on a fractional
//! variable until the frontier is empty.
//!
//! ```rust
//! use theseus::branchbound::{BBSolver, SearchStatus};
//! use theseus::constraint::Constraint;
//! use theseus::problem::ProblemBuilder;
//! use theseus::solver_options::SolverOptions;
//! use theseus::variable::LinearExpr;
//!
//! let mut builder = ProblemBuilder::new();
//! let x1 = builder.add_variable("x1");
//! let x2 = builder.add_variable("x2");
//! builder.add_constraints([
//!     Constraint::less_than(LinearExpr::from_terms(&[(&x1, 1.0), (&x2, 2.0)]), 4.0),
//!     Constraint::upper_bound(&x1, 3.0),
//!     Constraint::lower_bound(&x1, 0.0),
//!     Constraint::lower_bound(&x2, 0.0),
//! ]);
//! builder.maximize("z", LinearExpr::from_terms(&[(&x1, 1.0), (&x2, 1.0)]));
//! let problem = builder.build().unwrap();
//!
//! let mut options = SolverOptions::new();
//! options.verbose = 0;
//! let result = BBSolver::new(problem, options).solve();
//!
//! assert_eq!(result.status, SearchStatus::Optimal);
//! assert!((result.objective_value - 3.0).abs() < 1e-6);
//! ```

pub mod branch_node;
pub mod branch_stratagy;
pub mod branch_subproblem;
pub mod branchbound;
pub mod branchbound_utils;
pub mod branchboundlogger;
pub mod constraint;
pub mod error;
pub mod frontier;
pub mod problem;
pub mod solver_options;
pub mod subproblemsolvers;
pub mod variable;
