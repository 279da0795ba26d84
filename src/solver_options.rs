use crate::branch_stratagy::BranchStrategySelection;
use crate::branch_subproblem::SubProblemSelection;

/// Options for the B&B solver for run time
#[derive(Clone, Debug)]
pub struct SolverOptions {
    pub branch_strategy: BranchStrategySelection,
    pub sub_problem_solver: SubProblemSelection,
    /// Absolute distance to the nearest integer accepted as integral
    pub integrality_tolerance: f64,
    /// Improvement a relaxation needs over the incumbent to be explored, absorbs solver noise on
    /// ties
    pub objective_tolerance: f64,
    /// Seconds, checked between nodes only. A solve in progress is never interrupted.
    pub max_time: f64,
    pub max_nodes: usize,
    pub seed: u64,
    pub verbose: usize,
}

impl Default for SolverOptions {
    fn default() -> Self {
        Self::new()
    }
}

impl SolverOptions {
    pub const fn new() -> Self {
        Self {
            branch_strategy: BranchStrategySelection::FirstFractional,
            sub_problem_solver: SubProblemSelection::Clarabel,
            integrality_tolerance: 1E-4,
            objective_tolerance: 1E-6,
            max_time: f64::INFINITY,
            max_nodes: usize::MAX,
            seed: 0,
            verbose: 1,
        }
    }

    pub fn set_branch_strategy(&mut self, strategy: Option<String>) {
        if let Some(s) = strategy {
            match s.as_str() {
                "FirstFractional" => {
                    self.branch_strategy = BranchStrategySelection::FirstFractional;
                }
                "MostFractional" => self.branch_strategy = BranchStrategySelection::MostFractional,
                "Random" => self.branch_strategy = BranchStrategySelection::Random,
                _ => {}
            }
        }
    }

    pub fn set_sub_problem_strategy(&mut self, strategy: Option<String>) {
        // unknown names leave the selection alone, as for the branch strategy
        if let Some("Clarabel") = strategy.as_deref() {
            self.sub_problem_solver = SubProblemSelection::Clarabel;
        }
    }
}
