use std::fmt;

use dotroute_core::PointId;

/// Errors reported by the planners and the route helpers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlanError {
    /// The point set has no elements.
    EmptyInput,
    /// A start, goal or route id is not part of the point set.
    UnknownReference(PointId),
    /// Two points in the set share an id.
    DuplicateId(PointId),
    /// A point has a NaN or infinite coordinate.
    NonFiniteCoordinate(PointId),
    /// The frontier ran dry before the goal was reached.
    NoPathFound { start: PointId, goal: PointId },
    /// The search expanded `limit` nodes without reaching the goal.
    BudgetExceeded { limit: usize },
}

impl fmt::Display for PlanError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyInput => write!(f, "point set is empty"),
            Self::UnknownReference(id) => write!(f, "point {id} is not in the point set"),
            Self::DuplicateId(id) => write!(f, "point id {id} appears more than once"),
            Self::NonFiniteCoordinate(id) => {
                write!(f, "point {id} has a non-finite coordinate")
            }
            Self::NoPathFound { start, goal } => {
                write!(f, "no path from {start} to {goal}")
            }
            Self::BudgetExceeded { limit } => {
                write!(f, "search budget of {limit} expansions exceeded")
            }
        }
    }
}

impl std::error::Error for PlanError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_point() {
        assert_eq!(
            PlanError::UnknownReference(PointId(9)).to_string(),
            "point #9 is not in the point set"
        );
        assert_eq!(
            PlanError::NoPathFound {
                start: PointId(0),
                goal: PointId(4)
            }
            .to_string(),
            "no path from #0 to #4"
        );
    }
}
