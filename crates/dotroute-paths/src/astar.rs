use dotroute_core::{Point, PointId};

use crate::error::PlanError;
use crate::frontier::Frontier;
use crate::graph::{CompleteGraph, StraightLine};
use crate::route::Route;
use crate::traits::{AstarPather, Heuristic, PlanRequest, RoutePlanner};

/// Limits applied to a single search.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchConfig {
    /// Maximum number of node expansions before giving up with
    /// [`PlanError::BudgetExceeded`]. `None` means unlimited.
    pub max_expansions: Option<usize>,
}

// Per-node search bookkeeping, indexed like the pather's nodes.
#[derive(Clone)]
struct Node {
    g: f64,
    parent: Option<usize>,
    open: bool,
}

impl Default for Node {
    fn default() -> Self {
        Self {
            g: f64::INFINITY,
            parent: None,
            open: false,
        }
    }
}

/// Compute the cheapest path from node `from` to node `to` using A*.
///
/// Returns the full path (including both endpoints), `Ok(None)` if the
/// frontier empties first or either endpoint is out of range, and
/// [`PlanError::BudgetExceeded`] when `config.max_expansions` runs out.
pub fn astar_path<P: AstarPather>(
    pather: &P,
    from: usize,
    to: usize,
    config: &SearchConfig,
) -> Result<Option<Vec<usize>>, PlanError> {
    let n = pather.node_count();
    if from >= n || to >= n {
        return Ok(None);
    }
    if from == to {
        return Ok(Some(vec![from]));
    }

    let mut nodes = vec![Node::default(); n];
    nodes[from] = Node {
        g: 0.0,
        parent: None,
        open: true,
    };

    let mut open = Frontier::new();
    open.push(pather.estimate(from, to), from);

    let mut nbuf = Vec::with_capacity(n);
    let mut expanded = 0usize;

    let found = 'search: loop {
        let Some(current) = open.pop() else {
            break 'search false;
        };

        let ci = current.node;

        // Skip stale entries.
        if !nodes[ci].open {
            continue;
        }

        if ci == to {
            break 'search true;
        }

        if let Some(limit) = config.max_expansions {
            if expanded >= limit {
                log::warn!("A* gave up after {limit} expansions");
                return Err(PlanError::BudgetExceeded { limit });
            }
        }
        expanded += 1;

        nodes[ci].open = false;
        let current_g = nodes[ci].g;
        log::trace!("expand node {ci} g={current_g:.3} f={:.3}", current.f);

        nbuf.clear();
        pather.neighbors(ci, &mut nbuf);

        for &ni in nbuf.iter() {
            if ni >= n {
                continue;
            }
            let tentative_g = current_g + pather.cost(ci, ni);

            let node = &mut nodes[ni];
            if tentative_g >= node.g {
                continue;
            }

            node.g = tentative_g;
            node.parent = Some(ci);
            node.open = true;

            open.push(tentative_g + pather.estimate(ni, to), ni);
        }
    };

    if !found {
        log::debug!("A* exhausted the frontier after {expanded} expansions");
        return Ok(None);
    }

    // Reconstruct path.
    let mut path = vec![to];
    let mut ci = to;
    while let Some(parent) = nodes[ci].parent {
        path.push(parent);
        ci = parent;
    }
    path.reverse();
    log::debug!(
        "A* reached goal in {expanded} expansions, cost {:.3}, {} entries left queued",
        nodes[to].g,
        open.len()
    );
    Ok(Some(path))
}

// Run `astar_path` and name the resulting nodes through `id`. An exhausted
// frontier becomes `NoPathFound` between the two endpoint ids.
fn astar_route<P: AstarPather>(
    pather: &P,
    from: usize,
    to: usize,
    config: &SearchConfig,
    id: impl Fn(usize) -> PointId,
) -> Result<Route, PlanError> {
    let path = astar_path(pather, from, to, config)?.ok_or_else(|| PlanError::NoPathFound {
        start: id(from),
        goal: id(to),
    })?;
    Ok(path.into_iter().map(id).collect())
}

/// Best-first (A*) planner from a start point to a goal point over the
/// complete Euclidean graph.
///
/// With the default [`StraightLine`] heuristic the first time the goal is
/// popped its cost is optimal. Routes are open: no closing edge is scored.
#[derive(Debug, Clone)]
pub struct InformedSearch<H = StraightLine> {
    pub config: SearchConfig,
    pub heuristic: H,
}

impl Default for InformedSearch {
    fn default() -> Self {
        Self::new(SearchConfig::default())
    }
}

impl InformedSearch<StraightLine> {
    pub fn new(config: SearchConfig) -> Self {
        Self {
            config,
            heuristic: StraightLine,
        }
    }
}

impl<H: Heuristic> InformedSearch<H> {
    /// Use a custom heuristic.
    pub fn with_heuristic(config: SearchConfig, heuristic: H) -> Self {
        Self { config, heuristic }
    }
}

impl<H: Heuristic> RoutePlanner for InformedSearch<H> {
    fn plan(&self, points: &[Point], request: PlanRequest) -> Result<Route, PlanError> {
        let graph = CompleteGraph::with_heuristic(points, &self.heuristic)?;
        let start = graph.idx(request.start)?;
        let goal = match request.goal {
            Some(id) => graph.idx(id)?,
            None => graph.last(),
        };

        astar_route(&graph, start, goal, &self.config, |i| graph.id(i))
    }

    fn closes_loop(&self) -> bool {
        false
    }
}
