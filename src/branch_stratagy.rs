use crate::branch_node::SubproblemNode;
use crate::branchbound::BBSolver;
use crate::branchbound_utils::fractionality;
use crate::variable::Variable;
use smolprng::{JsfLarge, PRNG};

pub enum BranchStrategy {
    FirstFractional,
    MostFractional,
    Random,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum BranchStrategySelection {
    #[default]
    FirstFractional,
    MostFractional,
    Random,
}

impl BranchStrategy {
    /// Picks the one variable to branch on, `None` if the node is unsolved or integral
    pub fn make_branch(&self, bb_solver: &BBSolver, node: &SubproblemNode) -> Option<Variable> {
        let tolerance = bb_solver.options.integrality_tolerance;
        match self {
            Self::FirstFractional => first_fractional(node, tolerance),
            Self::MostFractional => most_fractional(node, tolerance),
            Self::Random => random(bb_solver, node, tolerance),
        }
    }

    pub const fn get_branch_strategy(branch_strategy_selection: &BranchStrategySelection) -> Self {
        match branch_strategy_selection {
            BranchStrategySelection::FirstFractional => Self::FirstFractional,
            BranchStrategySelection::MostFractional => Self::MostFractional,
            BranchStrategySelection::Random => Self::Random,
        }
    }
}

/// Integer variables whose value is further than `tolerance` from an integer, in declaration order
fn fractional_variables(node: &SubproblemNode, tolerance: f64) -> Vec<(&Variable, f64)> {
    let Some(solution) = node.solution() else {
        return Vec::new();
    };

    node.problem()
        .integer_variables()
        .map(|x| (x, fractionality(solution[x.index()])))
        .filter(|&(_, frac)| frac > tolerance)
        .collect()
}

/// Scans the variables in declaration order and returns the first fractional one
pub fn first_fractional(node: &SubproblemNode, tolerance: f64) -> Option<Variable> {
    fractional_variables(node, tolerance)
        .first()
        .map(|&(x, _)| x.clone())
}

/// Branches on the variable closest to one half, the earliest one on ties
pub fn most_fractional(node: &SubproblemNode, tolerance: f64) -> Option<Variable> {
    let mut best: Option<(&Variable, f64)> = None;

    for (x, frac) in fractional_variables(node, tolerance) {
        if best.map_or(true, |(_, best_frac)| frac > best_frac) {
            best = Some((x, frac));
        }
    }

    best.map(|(x, _)| x.clone())
}

/// Picks a fractional variable at random, seeded by the options seed and the node count so a run
/// is reproducible
pub fn random(solver: &BBSolver, node: &SubproblemNode, tolerance: f64) -> Option<Variable> {
    let candidates = fractional_variables(node, tolerance);
    if candidates.is_empty() {
        return None;
    }

    // generate a prng
    let seed = solver.options.seed.wrapping_add(solver.stats.nodes_visited as u64);
    let mut prng = PRNG {
        generator: JsfLarge::from(seed),
    };

    let index = (prng.gen_u64() % candidates.len() as u64) as usize;
    Some(candidates[index].0.clone())
}
