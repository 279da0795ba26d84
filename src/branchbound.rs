use crate::problem::MipProblem;
use ndarray::Array1;
use std::rc::Rc;

use crate::branch_node::SubproblemNode;
use crate::branch_stratagy::BranchStrategy;
use crate::branch_subproblem::{get_sub_problem_solver, SubProblemSolver};
use crate::branchbound_utils::get_current_time;
use crate::branchboundlogger::SolverOutputLogger;
use crate::error::{MipError, MipResult, SolveError};
use crate::frontier::Frontier;
use crate::solver_options::SolverOptions;
use crate::variable::Variable;

/// Struct for the B&B Solver.
///
/// The search is a maximization: the incumbent starts at negative infinity, a popped node is
/// pruned when its relaxation value is not above the incumbent by more than the objective
/// tolerance, and children are pushed with the incumbent value at the time they were created as
/// their priority.
///
/// Pruning compares against the live incumbent, not against a bound stored with each node at
/// push time, so the exploration order decides how much of the tree is cut.
pub struct BBSolver {
    pub problem: Rc<MipProblem>,
    pub best_solution: Option<Array1<f64>>,
    pub best_solution_value: f64,
    pub frontier: Frontier,
    pub stats: SearchStatistics,
    pub time_start: f64,
    pub branch_strategy: BranchStrategy,
    pub subproblem_solver: Box<dyn SubProblemSolver>,
    pub options: SolverOptions,
    pub solver_logger: SolverOutputLogger,
}

/// Counters of a search run
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SearchStatistics {
    /// nodes popped from the frontier
    pub nodes_visited: usize,
    /// calls made to the relaxation solver
    pub nodes_solved: usize,
    /// relaxations the solver proved infeasible
    pub nodes_infeasible: usize,
    /// relaxations lost to any other solver failure (unbounded, limits, numerics)
    pub nodes_failed: usize,
    pub nodes_dominated: usize,
    pub nodes_branched: usize,
    pub nodes_abandoned: usize,
    /// objective value of every incumbent update, in order
    pub incumbent_trace: Vec<f64>,
}

/// What processing one node produced
pub enum NodeOutcome {
    Unsolved(SolveError),
    Dominated(f64),
    Integral(Array1<f64>, f64),
    Branched(SubproblemNode, SubproblemNode),
    Abandoned(MipError),
}

pub enum NodeLoggingAction {
    Processed,
    Solved,
}

pub struct ProcessNodeState {
    pub outcome: NodeOutcome,
    pub logging: NodeLoggingAction,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SearchStatus {
    /// The frontier was exhausted with an incumbent
    Optimal,
    /// The frontier was exhausted without an incumbent and every pruned relaxation was proven
    /// infeasible
    Infeasible,
    /// The frontier was exhausted without an incumbent after at least one relaxation failed for a
    /// reason other than infeasibility, so infeasibility is not proven
    SolverFailure,
    TimeLimit,
    NodeLimit,
}

/// Outcome of a run. Without an incumbent the objective value stays at negative infinity and
/// every value is `None`, check [`SolverResult::is_feasible`] before reading them.
#[derive(Clone, Debug)]
pub struct SolverResult {
    pub status: SearchStatus,
    pub objective_value: f64,
    pub values: Vec<Option<f64>>,
    pub statistics: SearchStatistics,
}

impl SolverResult {
    pub fn is_feasible(&self) -> bool {
        self.objective_value > f64::NEG_INFINITY
    }

    /// The incumbent as a dense vector in declaration order
    pub fn solution(&self) -> Option<Array1<f64>> {
        self.values.iter().copied().collect::<Option<Vec<f64>>>().map(Array1::from)
    }

    pub fn value(&self, x: &Variable) -> Option<f64> {
        self.values.get(x.index()).copied().flatten()
    }
}

impl BBSolver {
    /// Creates a new B&B solver
    pub fn new(problem: MipProblem, options: SolverOptions) -> Self {
        let subproblem_solver = get_sub_problem_solver(options.sub_problem_solver);
        Self::with_sub_problem_solver(problem, options, subproblem_solver)
    }

    /// Creates a new B&B solver that solves the relaxations with a caller supplied solver
    pub fn with_sub_problem_solver(
        problem: MipProblem,
        options: SolverOptions,
        subproblem_solver: Box<dyn SubProblemSolver>,
    ) -> Self {
        let branch_strategy = BranchStrategy::get_branch_strategy(&options.branch_strategy);
        let output_level = options.verbose;

        Self {
            problem: Rc::new(problem),
            best_solution: None,
            best_solution_value: f64::NEG_INFINITY,
            frontier: Frontier::new(),
            stats: SearchStatistics::default(),
            time_start: get_current_time(),
            branch_strategy,
            subproblem_solver,
            options,
            solver_logger: SolverOutputLogger::new(output_level),
        }
    }

    /// Starts the search from a known integral solution
    ///
    /// # Errors
    ///
    /// Returns [`MipError::InvalidProblem`] if the point does not satisfy every constraint or is
    /// not integral.
    pub fn warm_start(&mut self, initial_solution: Array1<f64>) -> MipResult<()> {
        if !self
            .problem
            .is_feasible(&initial_solution, self.options.integrality_tolerance)
        {
            return Err(MipError::InvalidProblem(
                "warm start point is not an integral feasible solution".to_string(),
            ));
        }

        let value = initial_solution[self.problem.objective_variable().index()];
        self.update_solution_if_better(&initial_solution, value);
        self.solver_logger.output_warm_start_info(self);
        Ok(())
    }

    /// The main solve function of the B&B algorithm
    pub fn solve(&mut self) -> SolverResult {
        // Reset start time as it can be different from the time we created the solver instance
        self.time_start = get_current_time();

        // set up the output of the solver
        self.solver_logger.output_header(self);

        // the root is solved before it enters the frontier, and its relaxation value is its key
        let mut root = SubproblemNode::root(Rc::clone(&self.problem));
        self.stats.nodes_solved += 1;
        match root.solve(self.subproblem_solver.as_ref()) {
            Ok(value) => {
                log::debug!("root relaxation value {value}");
                self.frontier.push(value, root);
            }
            Err(err) => {
                log::debug!("root relaxation failed: {err}");
                self.record_solve_failure(&err);
            }
        }

        // until we have hit a termination condition, we will keep iterating
        let status = loop {
            if let Some(status) = self.termination_condition() {
                break status;
            }

            let Some(entry) = self.frontier.pop() else {
                continue;
            };
            self.stats.nodes_visited += 1;

            let state = self.process_node(entry.node);
            self.apply_logging_action(&state.logging);
            self.apply_outcome(state.outcome);

            // display the line, if verbose
            self.solver_logger.generate_output_line(self);
        };

        match status {
            SearchStatus::Infeasible => log::info!("no feasible solution found"),
            SearchStatus::SolverFailure => log::warn!(
                "no feasible solution found, {} relaxations failed without proving infeasibility",
                self.stats.nodes_failed
            ),
            _ => {}
        }

        // display the exit line
        self.solver_logger.generate_exit_line(self, status);

        self.make_result(status)
    }

    /// Solves the node if needed and decides whether it is discarded, accepted or split
    pub fn process_node(&self, mut node: SubproblemNode) -> ProcessNodeState {
        let logging = if node.is_solved() {
            NodeLoggingAction::Processed
        } else {
            NodeLoggingAction::Solved
        };

        // a failed solve only ever loses this node
        let value = match node.solve(self.subproblem_solver.as_ref()) {
            Ok(value) => value,
            Err(err) => {
                return ProcessNodeState {
                    outcome: NodeOutcome::Unsolved(err),
                    logging,
                }
            }
        };

        // prune anything that does not strictly improve on the incumbent
        if value <= self.best_solution_value + self.options.objective_tolerance {
            return ProcessNodeState {
                outcome: NodeOutcome::Dominated(value),
                logging,
            };
        }

        if node.is_integral(self.options.integrality_tolerance) {
            if let Some(solution) = node.solution() {
                return ProcessNodeState {
                    outcome: NodeOutcome::Integral(solution.clone(), value),
                    logging,
                };
            }
        }

        let outcome = match self.branch(&node) {
            Ok((floor_branch, ceil_branch)) => NodeOutcome::Branched(floor_branch, ceil_branch),
            Err(err) => NodeOutcome::Abandoned(err),
        };

        ProcessNodeState { outcome, logging }
    }

    // apply the logging action to the solver
    pub fn apply_logging_action(&mut self, action: &NodeLoggingAction) {
        match action {
            NodeLoggingAction::Processed => {}
            NodeLoggingAction::Solved => {
                self.stats.nodes_solved += 1;
            }
        }
    }

    pub fn apply_outcome(&mut self, outcome: NodeOutcome) {
        match outcome {
            NodeOutcome::Unsolved(err) => {
                log::debug!("pruned, relaxation failed: {err}");
                self.record_solve_failure(&err);
            }
            NodeOutcome::Dominated(value) => {
                log::trace!(
                    "pruned, relaxation value {value} does not beat {}",
                    self.best_solution_value
                );
                self.stats.nodes_dominated += 1;
            }
            NodeOutcome::Integral(solution, value) => {
                self.update_solution_if_better(&solution, value);
            }
            NodeOutcome::Branched(floor_branch, ceil_branch) => {
                // children are keyed by the incumbent, they have no relaxation value yet
                let priority = self.best_solution_value;
                self.frontier.push(priority, floor_branch);
                self.frontier.push(priority, ceil_branch);
                self.stats.nodes_branched += 1;
            }
            NodeOutcome::Abandoned(err) => {
                log::warn!("abandoned node: {err}");
                self.stats.nodes_abandoned += 1;
            }
        }
    }

    fn record_solve_failure(&mut self, err: &SolveError) {
        match err {
            SolveError::Infeasible => self.stats.nodes_infeasible += 1,
            SolveError::Unbounded | SolveError::IterationLimit(_) | SolveError::Numerical(_) => {
                self.stats.nodes_failed += 1;
            }
        }
    }

    /// update the best solution if better than the current best solution
    pub fn update_solution_if_better(&mut self, solution: &Array1<f64>, solution_value: f64) {
        if solution_value > self.best_solution_value {
            self.best_solution = Some(solution.clone());
            self.best_solution_value = solution_value;
            self.stats.incumbent_trace.push(solution_value);

            log::debug!("new incumbent {solution_value}");
            self.solver_logger.output_new_incumbent(self);
        }
    }

    /// Checks for termination conditions of the B&B algorithm, such as time limit or no more nodes
    pub fn termination_condition(&self) -> Option<SearchStatus> {
        // check if we have no more nodes to process
        if self.frontier.is_empty() {
            return Some(if self.best_solution.is_some() {
                SearchStatus::Optimal
            } else if self.stats.nodes_failed > 0 {
                SearchStatus::SolverFailure
            } else {
                SearchStatus::Infeasible
            });
        }

        // check if we violated the time limit
        if get_current_time() - self.time_start > self.options.max_time {
            return Some(SearchStatus::TimeLimit);
        }

        if self.stats.nodes_visited >= self.options.max_nodes {
            return Some(SearchStatus::NodeLimit);
        }

        None
    }

    /// Branch selection, then the floor and ceiling children of the node
    ///
    /// # Errors
    ///
    /// Returns [`MipError::NoBranchingVariable`] if the node has no fractional integer variable,
    /// and [`MipError::UnsolvedBranch`] if it is not solved.
    pub fn branch(&self, node: &SubproblemNode) -> MipResult<(SubproblemNode, SubproblemNode)> {
        let Some(branch_var) = self.branch_strategy.make_branch(self, node) else {
            return Err(MipError::NoBranchingVariable);
        };

        log::trace!(
            "branching on {branch_var} = {:?} at depth {}",
            node.value(&branch_var),
            node.depth()
        );

        Ok((node.branch_floor(&branch_var)?, node.branch_ceil(&branch_var)?))
    }

    fn make_result(&self, status: SearchStatus) -> SolverResult {
        let values = self.best_solution.as_ref().map_or_else(
            || vec![None; self.problem.num_x()],
            |solution| solution.iter().copied().map(Some).collect(),
        );

        SolverResult {
            status,
            objective_value: self.best_solution_value,
            values,
            statistics: self.stats.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::branch_stratagy::BranchStrategySelection;
    use crate::branch_subproblem::{LinearProgram, SubProblemResult};
    use crate::constraint::Constraint;
    use crate::problem::ProblemBuilder;
    use crate::subproblemsolvers::clarabel_lp::ClarabelLPSolver;
    use crate::tests::{
        brute_force, make_infeasible_problem, make_random_problem, make_single_variable_problem,
        make_test_prng, make_two_variable_problem,
    };
    use crate::variable::LinearExpr;
    use std::cell::RefCell;

    pub fn get_default_solver_options() -> SolverOptions {
        let mut options = SolverOptions::new();
        options.verbose = 0;
        options
    }

    /// Passes through to clarabel and records every LP it is handed
    struct RecordingSolver {
        inner: ClarabelLPSolver,
        calls: Rc<RefCell<Vec<(Vec<f64>, Option<f64>)>>>,
    }

    impl SubProblemSolver for RecordingSolver {
        fn solve(&self, program: &LinearProgram) -> SubProblemResult {
            let result = self.inner.solve(program);
            let value = result.as_ref().ok().map(|r| r.objective_value);
            self.calls.borrow_mut().push((program.b_ub.to_vec(), value));
            result
        }
    }

    /// Fails every LP after the first one
    struct FailingSolver {
        inner: ClarabelLPSolver,
        calls: RefCell<usize>,
    }

    impl SubProblemSolver for FailingSolver {
        fn solve(&self, program: &LinearProgram) -> SubProblemResult {
            *self.calls.borrow_mut() += 1;
            if *self.calls.borrow() > 1 {
                return Err(SolveError::Numerical("injected".to_string()));
            }
            self.inner.solve(program)
        }
    }

    /// Returns the same error for every LP
    struct ErrorSolver {
        error: SolveError,
    }

    impl SubProblemSolver for ErrorSolver {
        fn solve(&self, _program: &LinearProgram) -> SubProblemResult {
            Err(self.error.clone())
        }
    }

    fn recorded_run(problem: MipProblem) -> (SolverResult, Vec<(Vec<f64>, Option<f64>)>) {
        let calls = Rc::new(RefCell::new(Vec::new()));
        let recorder = RecordingSolver {
            inner: ClarabelLPSolver::new(),
            calls: Rc::clone(&calls),
        };
        let mut solver = BBSolver::with_sub_problem_solver(
            problem,
            get_default_solver_options(),
            Box::new(recorder),
        );
        let result = solver.solve();
        let calls = calls.borrow().clone();
        (result, calls)
    }

    #[test]
    pub fn branch_bound_test() {
        let problem = make_two_variable_problem();
        let mut solver = BBSolver::new(problem, get_default_solver_options());
        let result = solver.solve();

        assert_eq!(result.status, SearchStatus::Optimal);
        assert!((result.objective_value - 3.0).abs() < 1e-6);

        // root, floor child (x1 = 3, x2 = 0, new incumbent), ceil child (ties it and is pruned)
        let solution = result.solution().unwrap();
        assert!((solution[0] - 3.0).abs() < 1e-4);
        assert!(solution[1].abs() < 1e-4);
        assert!((solution[2] - 3.0).abs() < 1e-4);

        assert_eq!(result.statistics.nodes_solved, 3);
        assert_eq!(result.statistics.nodes_visited, 3);
        assert_eq!(result.statistics.nodes_branched, 1);
        assert_eq!(result.statistics.nodes_dominated, 1);
        assert_eq!(result.statistics.incumbent_trace.len(), 1);
    }

    #[test]
    pub fn matches_brute_force_on_two_variable_problem() {
        let problem = make_two_variable_problem();
        let (expected, _) = brute_force(&problem, 0, 4);

        let result = BBSolver::new(problem, get_default_solver_options()).solve();

        assert!((result.objective_value - expected).abs() < 1e-6);
    }

    #[test]
    pub fn infeasible_root_terminates() {
        let problem = make_infeasible_problem();
        let num_x = problem.num_x();
        let mut solver = BBSolver::new(problem, get_default_solver_options());
        let result = solver.solve();

        assert_eq!(result.status, SearchStatus::Infeasible);
        assert!(!result.is_feasible());
        assert_eq!(result.objective_value, f64::NEG_INFINITY);
        assert_eq!(result.values, vec![None; num_x]);
        assert_eq!(result.solution(), None);
        assert_eq!(result.statistics.nodes_solved, 1);
        assert_eq!(result.statistics.nodes_visited, 0);
        assert_eq!(result.statistics.nodes_infeasible, 1);
    }

    #[test]
    pub fn integral_root_solves_once() {
        let problem = make_single_variable_problem(3.0);
        let x = problem.variables()[0].clone();
        let (result, calls) = recorded_run(problem);

        assert_eq!(calls.len(), 1);
        assert_eq!(result.status, SearchStatus::Optimal);
        assert_eq!(result.statistics.nodes_branched, 0);
        assert!((result.objective_value - 3.0).abs() < 1e-6);
        assert!((result.value(&x).unwrap() - 3.0).abs() < 1e-4);
        assert_eq!(result.statistics.incumbent_trace.len(), 1);
    }

    #[test]
    pub fn runs_are_deterministic() {
        let mut prng = make_test_prng();
        let problem = make_random_problem(&mut prng, 4, 3);

        let (first, first_calls) = recorded_run(problem.clone());
        let (second, second_calls) = recorded_run(problem);

        assert_eq!(first_calls, second_calls);
        assert_eq!(first.values, second.values);
        assert_eq!(first.objective_value, second.objective_value);
        assert_eq!(first.statistics, second.statistics);
    }

    #[test]
    pub fn random_problems_match_brute_force() {
        let mut prng = make_test_prng();

        for _ in 0..8 {
            let problem = make_random_problem(&mut prng, 3, 3);
            let (expected, _) = brute_force(&problem, 0, 4);
            let tolerance = 1e-4;

            let result = BBSolver::new(problem.clone(), get_default_solver_options()).solve();

            assert_eq!(result.status, SearchStatus::Optimal);
            assert!((result.objective_value - expected).abs() < 1e-5);

            // the returned point is integral and feasible
            let solution = result.solution().unwrap();
            assert!(problem.is_feasible(&solution, tolerance));
            assert!((problem.eval(&solution) - result.objective_value).abs() < 1e-5);
        }
    }

    #[test]
    pub fn incumbent_only_improves() {
        let mut prng = make_test_prng();

        for _ in 0..5 {
            let problem = make_random_problem(&mut prng, 4, 3);
            let result = BBSolver::new(problem, get_default_solver_options()).solve();
            let trace = &result.statistics.incumbent_trace;

            assert!(!trace.is_empty());
            assert!(trace.windows(2).all(|w| w[1] > w[0]));
            assert_eq!(trace.last().copied(), Some(result.objective_value));
        }
    }

    #[test]
    pub fn solve_failures_only_prune_the_node() {
        let problem = make_two_variable_problem();
        let failing = FailingSolver {
            inner: ClarabelLPSolver::new(),
            calls: RefCell::new(0),
        };
        let options = get_default_solver_options();
        let mut solver = BBSolver::with_sub_problem_solver(problem, options, Box::new(failing));
        let result = solver.solve();

        // both children fail, the search still finishes but infeasibility is not claimed
        assert_eq!(result.status, SearchStatus::SolverFailure);
        assert_eq!(result.statistics.nodes_failed, 2);
        assert_eq!(result.statistics.nodes_infeasible, 0);
        assert_eq!(result.statistics.nodes_branched, 1);
        assert!(!result.is_feasible());
    }

    #[test]
    pub fn unbounded_root_is_not_reported_infeasible() {
        let problem = make_two_variable_problem();
        let num_x = problem.num_x();
        let error_solver = ErrorSolver {
            error: SolveError::Unbounded,
        };
        let options = get_default_solver_options();
        let result =
            BBSolver::with_sub_problem_solver(problem, options, Box::new(error_solver)).solve();

        assert_eq!(result.status, SearchStatus::SolverFailure);
        assert_eq!(result.statistics.nodes_failed, 1);
        assert_eq!(result.statistics.nodes_infeasible, 0);
        assert_eq!(result.statistics.nodes_visited, 0);
        assert_eq!(result.values, vec![None; num_x]);
    }

    #[test]
    pub fn infeasible_root_from_any_solver_is_infeasible() {
        let error_solver = ErrorSolver {
            error: SolveError::Infeasible,
        };
        let problem = make_two_variable_problem();
        let options = get_default_solver_options();
        let result =
            BBSolver::with_sub_problem_solver(problem, options, Box::new(error_solver)).solve();

        assert_eq!(result.status, SearchStatus::Infeasible);
        assert_eq!(result.statistics.nodes_infeasible, 1);
        assert_eq!(result.statistics.nodes_failed, 0);
    }

    #[test]
    pub fn integral_node_has_nothing_to_branch() {
        let solver = BBSolver::new(make_single_variable_problem(3.0), get_default_solver_options());
        let mut root = SubproblemNode::root(Rc::clone(&solver.problem));
        root.solve(solver.subproblem_solver.as_ref()).unwrap();

        assert_eq!(solver.branch(&root).err(), Some(MipError::NoBranchingVariable));
    }

    #[test]
    pub fn dominated_nodes_are_never_branched() {
        let mut prng = make_test_prng();
        let problem = make_random_problem(&mut prng, 4, 3);
        let mut solver = BBSolver::new(problem, get_default_solver_options());
        let result = solver.solve();
        let stats = &result.statistics;

        // every visited node ends in exactly one of the outcomes
        assert_eq!(
            stats.nodes_visited,
            stats.nodes_infeasible
                + stats.nodes_failed
                + stats.nodes_dominated
                + stats.nodes_branched
                + stats.nodes_abandoned
                + stats.incumbent_trace.len()
        );
        // every branch pushed exactly two children and all of them were visited
        assert_eq!(stats.nodes_visited, 1 + 2 * stats.nodes_branched);
    }

    #[test]
    pub fn pruning_uses_strict_improvement() {
        let problem = make_two_variable_problem();
        let solver = BBSolver::new(problem, get_default_solver_options());

        let mut root = SubproblemNode::root(Rc::clone(&solver.problem));
        root.solve(solver.subproblem_solver.as_ref()).unwrap();
        let x2 = solver.problem.variable("x2").unwrap().clone();
        let ceil = root.branch_ceil(&x2).unwrap();

        // the ceil child relaxes to 3, an incumbent of 3 prunes it
        let mut solver = solver;
        solver.best_solution = Some(Array1::from_vec(vec![3.0, 0.0, 3.0]));
        solver.best_solution_value = 3.0;

        let state = solver.process_node(ceil);
        assert!(matches!(state.outcome, NodeOutcome::Dominated(_)));
        assert!(matches!(state.logging, NodeLoggingAction::Solved));

        // a solved root above the incumbent is branched
        let state = solver.process_node(root);
        assert!(matches!(state.outcome, NodeOutcome::Branched(_, _)));
        assert!(matches!(state.logging, NodeLoggingAction::Processed));
    }

    #[test]
    pub fn node_limit_stops_early() {
        let problem = make_two_variable_problem();
        let mut options = get_default_solver_options();
        options.max_nodes = 1;
        let result = BBSolver::new(problem, options).solve();

        assert_eq!(result.status, SearchStatus::NodeLimit);
        assert_eq!(result.statistics.nodes_visited, 1);
        assert!(!result.is_feasible());
    }

    #[test]
    pub fn time_limit_stops_early() {
        let problem = make_two_variable_problem();
        let mut options = get_default_solver_options();
        options.max_time = -1.0;
        let result = BBSolver::new(problem, options).solve();

        assert_eq!(result.status, SearchStatus::TimeLimit);
        assert_eq!(result.statistics.nodes_visited, 0);
    }

    #[test]
    pub fn warm_start_prunes_equal_nodes() {
        let problem = make_two_variable_problem();
        let mut solver = BBSolver::new(problem, get_default_solver_options());

        assert!(solver
            .warm_start(Array1::from_vec(vec![0.0, 2.0, 1.0]))
            .is_err());
        solver
            .warm_start(Array1::from_vec(vec![2.0, 1.0, 3.0]))
            .unwrap();

        let result = solver.solve();

        // the root is branched, both children tie the warm start and are pruned
        assert_eq!(result.status, SearchStatus::Optimal);
        assert_eq!(result.values, vec![Some(2.0), Some(1.0), Some(3.0)]);
        assert_eq!(result.statistics.nodes_dominated, 2);
    }

    #[test]
    pub fn branch_bound_most_fractional_branching() {
        setup_and_solve_problem(BranchStrategySelection::MostFractional);
    }

    #[test]
    pub fn branch_bound_random_branching() {
        setup_and_solve_problem(BranchStrategySelection::Random);
    }

    #[test]
    pub fn branch_bound_first_fractional_branching() {
        setup_and_solve_problem(BranchStrategySelection::FirstFractional);
    }

    pub fn setup_and_solve_problem(branch: BranchStrategySelection) {
        let mut prng = make_test_prng();

        for _ in 0..4 {
            let problem = make_random_problem(&mut prng, 3, 4);
            let (expected, _) = brute_force(&problem, 0, 4);

            let mut options = get_default_solver_options();
            options.branch_strategy = branch;

            let result = BBSolver::new(problem, options).solve();

            assert!((result.objective_value - expected).abs() < 1e-5);
        }
    }

    #[test]
    pub fn continuous_variables_are_not_branched() {
        // max x + y, x + y <= 2.5, x <= 1.5, x integer, y continuous
        let mut builder = ProblemBuilder::new();
        let x = builder.add_variable("x");
        let y = builder.add_continuous_variable("y");
        builder.add_constraints([
            Constraint::less_than(LinearExpr::from_terms(&[(&x, 1.0), (&y, 1.0)]), 2.5),
            Constraint::less_than(LinearExpr::from_terms(&[(&x, 1.0), (&y, 2.0)]), 3.5),
            Constraint::upper_bound(&x, 1.5),
            Constraint::lower_bound(&x, 0.0),
            Constraint::lower_bound(&y, 0.0),
        ]);
        builder.maximize("z", LinearExpr::from_terms(&[(&x, 2.0), (&y, 1.0)]));
        let problem = builder.build().unwrap();

        let result = BBSolver::new(problem, get_default_solver_options()).solve();

        // x = 1, y = 1.25 is optimal with value 3.25
        assert_eq!(result.status, SearchStatus::Optimal);
        assert!((result.objective_value - 3.25).abs() < 1e-5);
        assert!((result.value(&x).unwrap() - 1.0).abs() < 1e-4);
        assert!((result.value(&y).unwrap() - 1.25).abs() < 1e-4);
    }
}
