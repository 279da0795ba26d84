use crate::branchbound::{BBSolver, SearchStatus};
use crate::branchbound_utils::get_current_time;

/// This is the main logic behind the solver output
///
/// It has varying levels of output, where 0 means nothing is displayed to the screen, and each
/// additional level includes everything previous
///
/// 0 - Nothing
/// 1 - Header, Iteration Log, and Finish
/// 2 - Each New Incumbent
///
/// Node level events go through the `log` facade instead, independent of this level.
pub struct SolverOutputLogger {
    pub output_level: usize,
}

impl SolverOutputLogger {
    pub const fn new(level: usize) -> Self {
        Self {
            output_level: level,
        }
    }

    pub fn output_header(&self, solver_instance: &BBSolver) {
        if self.output_level < 1 {
            return;
        }

        let version_number = env!("CARGO_PKG_VERSION");
        let num_variables = solver_instance.problem.num_x();
        let num_integer = solver_instance.problem.integer_variables().count();
        let num_constraints = solver_instance.problem.constraints().len();

        println!("Theseus: A Rust-based Branch and Bound Solver for MILP");
        println!("Version number {version_number}");
        println!("Problem size: {num_variables} ({num_integer} integer)");
        println!("Constraints: {num_constraints}");

        println!("------------------------------------------------------");
        println!("Nodes Visited | Nodes Solved | Frontier | Best Solution");
    }

    pub fn generate_output_line(&self, solver_instance: &BBSolver) {
        if let Some(line) = self.progress_line(solver_instance) {
            println!("{line}");
        }
    }

    /// One row of the iteration table, `None` below level 1
    pub fn progress_line(&self, solver_instance: &BBSolver) -> Option<String> {
        if self.output_level < 1 {
            return None;
        }

        let nodes_visited = solver_instance.stats.nodes_visited;
        let nodes_solved = solver_instance.stats.nodes_solved;
        let frontier = solver_instance.frontier.len();
        let best_solution = solver_instance.best_solution_value;
        Some(format!("{nodes_visited} | {nodes_solved} | {frontier} | {best_solution}"))
    }

    pub fn output_new_incumbent(&self, solver_instance: &BBSolver) {
        if self.output_level < 2 {
            return;
        }

        let value = solver_instance.best_solution_value;
        let nodes_visited = solver_instance.stats.nodes_visited;
        println!("New incumbent {value} after {nodes_visited} nodes");
    }

    pub fn generate_exit_line(&self, solver_instance: &BBSolver, status: SearchStatus) {
        for line in self.exit_lines(solver_instance, status) {
            println!("{line}");
        }
    }

    /// The summary printed when the search stops, empty below level 1
    pub fn exit_lines(&self, solver_instance: &BBSolver, status: SearchStatus) -> Vec<String> {
        if self.output_level < 1 {
            return Vec::new();
        }

        let stats = &solver_instance.stats;
        let current_time = get_current_time();
        let time_passed = current_time - solver_instance.time_start;

        let mut lines = vec![
            "------------------------------------------------------".to_string(),
            format!("Branch and Bound Solver Finished: {status:?}"),
        ];
        match &solver_instance.best_solution {
            Some(solution) => {
                lines.push(format!("Best Solution: {solution}"));
                let value = solver_instance.best_solution_value;
                lines.push(format!("Best Solution Value: {value}"));
            }
            None => lines.push("No feasible solutions".to_string()),
        }
        lines.push(format!("Nodes Visited: {}", stats.nodes_visited));
        lines.push(format!("Nodes Solved: {}", stats.nodes_solved));
        lines.push(format!(
            "Pruned: {} infeasible, {} failed, {} dominated",
            stats.nodes_infeasible, stats.nodes_failed, stats.nodes_dominated
        ));
        lines.push(format!("Time to Solve: {time_passed}"));
        lines.push("------------------------------------------------------".to_string());
        lines
    }

    pub fn output_warm_start_info(&self, solver_instance: &BBSolver) {
        if self.output_level < 1 {
            return;
        }

        let solution_value = solver_instance.best_solution_value;
        println!("------------------------------------------------------");
        println!("Warm Start Information");
        println!("Objective: {solution_value}");
    }
}
