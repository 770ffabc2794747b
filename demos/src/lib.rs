//! Shared driver for the `dotroute` command-line demo.
//!
//! Scatters dots on a playfield, runs the selected planners over them and,
//! when a hand-drawn walk is supplied, scores it against the greedy tour.

use std::error::Error;
use std::fmt::Write as _;

use clap::{Parser, ValueEnum};
use dotroute_core::{Bounds, DotGen, DotGenConfig, Point, PointId};
use dotroute_paths::{
    InformedSearch, NearestNeighbor, PlanRequest, PlannedRoute, RoutePlanner, RouteScore,
    SearchConfig, Walk,
};
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::Serialize;

/// Which planners to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum PlannerKind {
    /// Greedy nearest-neighbor tour.
    Nearest,
    /// A* search from the start to the goal.
    Informed,
    /// Both of the above.
    Both,
}

/// Command-line arguments.
#[derive(Debug, Parser)]
#[command(name = "dotroute", about = "Plan routes through randomly scattered dots")]
pub struct Args {
    /// Number of dots to scatter.
    #[arg(long, default_value_t = 5)]
    pub dots: usize,
    /// Seed for reproducible playfields.
    #[arg(long)]
    pub seed: Option<u64>,
    #[arg(long, default_value_t = 800)]
    pub width: u32,
    #[arg(long, default_value_t = 600)]
    pub height: u32,
    /// Keep dots this far from the playfield edges.
    #[arg(long, default_value_t = 20)]
    pub margin: u32,
    #[arg(long, value_enum, default_value_t = PlannerKind::Both)]
    pub planner: PlannerKind,
    /// Goal dot id for the informed search (defaults to the last dot).
    #[arg(long)]
    pub goal: Option<u32>,
    /// Give up the informed search after this many expansions.
    #[arg(long)]
    pub max_expansions: Option<usize>,
    /// Dot ids clicked by the player, in order, e.g. `--walk 3,1,4,2,0`.
    #[arg(long, value_delimiter = ',')]
    pub walk: Vec<u32>,
    /// Print the report as JSON.
    #[arg(long)]
    pub json: bool,
}

impl Args {
    fn dot_config(&self) -> DotGenConfig {
        DotGenConfig {
            width: self.width,
            height: self.height,
            margin: self.margin,
            count: self.dots,
        }
    }

    fn planners(&self) -> Vec<(&'static str, Box<dyn RoutePlanner>)> {
        let search = SearchConfig {
            max_expansions: self.max_expansions,
        };
        let mut out: Vec<(&'static str, Box<dyn RoutePlanner>)> = Vec::new();
        if matches!(self.planner, PlannerKind::Nearest | PlannerKind::Both) {
            out.push(("nearest-neighbor", Box::new(NearestNeighbor)));
        }
        if matches!(self.planner, PlannerKind::Informed | PlannerKind::Both) {
            out.push(("informed-search", Box::new(InformedSearch::new(search))));
        }
        out
    }
}

/// One planner's result.
#[derive(Debug, Clone, Serialize)]
pub struct NamedPlan {
    pub planner: &'static str,
    #[serde(flatten)]
    pub plan: PlannedRoute,
}

/// Everything the demo computed.
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    pub dots: Vec<Point>,
    /// Smallest rectangle holding every dot.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extent: Option<Bounds>,
    /// Dots that landed on the spot of an earlier dot.
    pub stacked: usize,
    pub plans: Vec<NamedPlan>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub score: Option<RouteScore>,
}

/// Count dots sharing their position with an earlier dot.
pub fn stacked_dots(dots: &[Point]) -> usize {
    dots.iter()
        .enumerate()
        .filter(|&(i, d)| dots[..i].iter().any(|e| e.coincides(*d)))
        .count()
}

/// Generate the playfield and run the requested planners.
pub fn run(args: &Args) -> Result<Report, Box<dyn Error>> {
    let config = args.dot_config();
    let dots = match args.seed {
        Some(seed) => DotGen::new(config, StdRng::seed_from_u64(seed)).generate()?,
        None => DotGen::new(config, rand::rng()).generate()?,
    };
    log::info!("scattered {} dots inside {}", dots.len(), config.bounds());
    let extent = Bounds::enclosing(&dots);
    if let Some(extent) = extent {
        log::debug!("dots span {extent}");
    }
    let stacked = stacked_dots(&dots);
    if stacked > 0 {
        log::warn!("{stacked} dots share a spot with an earlier dot");
    }

    let start = dots.first().map(|d| d.id).unwrap_or_default();
    let mut request = PlanRequest::from(start);
    if let Some(goal) = args.goal {
        request = request.to(PointId(goal));
    }

    let mut plans = Vec::new();
    for (name, planner) in args.planners() {
        let plan = planner.plan_scored(&dots, request)?;
        log::info!("{name}: {:.2} over {} dots", plan.distance, plan.route.len());
        plans.push(NamedPlan {
            planner: name,
            plan,
        });
    }

    let score = if args.walk.is_empty() {
        None
    } else {
        let mut walk = Walk::new(&dots, start)?;
        for &id in &args.walk {
            walk.visit(PointId(id))?;
        }
        if !walk.is_closed() {
            log::warn!("walk does not end at the start dot {start}");
        }
        let optimal = NearestNeighbor.plan_scored(&dots, request)?;
        Some(walk.score(optimal.distance))
    };

    Ok(Report {
        dots,
        extent,
        stacked,
        plans,
        score,
    })
}

/// Human-readable rendering of a [`Report`].
pub fn render(report: &Report) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "dots:");
    for d in &report.dots {
        let _ = writeln!(out, "  {d}");
    }
    if let Some(extent) = &report.extent {
        let _ = writeln!(out, "extent: {extent}");
    }
    if report.stacked > 0 {
        let _ = writeln!(out, "stacked dots: {}", report.stacked);
    }
    for p in &report.plans {
        let shape = if p.plan.closed { "closed" } else { "open" };
        let _ = writeln!(out, "{}: {} ({shape})", p.planner, p.plan.route);
        let _ = writeln!(out, "  distance: {:.2}", p.plan.distance);
    }
    if let Some(score) = &report.score {
        let _ = writeln!(out, "route distance: {:.2}", score.player);
        let _ = writeln!(out, "optimal distance: {:.2}", score.optimal);
        if let Some(diff) = score.difference() {
            let _ = writeln!(out, "difference: {diff:.2}");
        }
    }
    out
}

/// Install the `env_logger` backend, defaulting to `info`.
pub fn init_logging() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use dotroute_core::GenError;
    use dotroute_paths::PlanError;

    fn args(extra: &[&str]) -> Args {
        let mut argv = vec!["dotroute", "--seed", "42"];
        argv.extend_from_slice(extra);
        Args::try_parse_from(argv).unwrap()
    }

    #[test]
    fn defaults() {
        let a = args(&[]);
        assert_eq!(a.dots, 5);
        assert_eq!(a.planner, PlannerKind::Both);
        assert_eq!(a.dot_config(), DotGenConfig::default());
        assert!(a.walk.is_empty());
    }

    #[test]
    fn both_planners_run() {
        let report = run(&args(&["--dots", "8"])).unwrap();
        assert_eq!(report.dots.len(), 8);
        let names: Vec<_> = report.plans.iter().map(|p| p.planner).collect();
        assert_eq!(names, vec!["nearest-neighbor", "informed-search"]);

        let tour = &report.plans[0].plan;
        assert!(tour.closed);
        assert_eq!(tour.route.len(), 8);

        let path = &report.plans[1].plan;
        assert!(!path.closed);
        assert_eq!(path.route.start(), Some(PointId(0)));
        assert_eq!(path.route.end(), Some(PointId(7)));
        assert!(path.distance <= tour.distance);
    }

    #[test]
    fn seeded_runs_repeat() {
        let a = run(&args(&["--dots", "12"])).unwrap();
        let b = run(&args(&["--dots", "12"])).unwrap();
        assert_eq!(render(&a), render(&b));
    }

    #[test]
    fn walk_is_scored() {
        let report = run(&args(&["--planner", "nearest", "--walk", "4,2,3,1,0"])).unwrap();
        let score = report.score.unwrap();
        assert!((score.optimal - report.plans[0].plan.distance).abs() < 1e-9);
        assert!(score.player > 0.0);
        assert!(render(&report).contains("route distance:"));
    }

    #[test]
    fn unknown_goal_is_an_error() {
        let err = run(&args(&["--planner", "informed", "--goal", "99"])).unwrap_err();
        assert_eq!(
            err.downcast_ref::<PlanError>(),
            Some(&PlanError::UnknownReference(PointId(99)))
        );
    }

    #[test]
    fn extent_covers_every_dot() {
        let a = args(&["--dots", "30"]);
        let report = run(&a).unwrap();
        let extent = report.extent.unwrap();
        assert!(report.dots.iter().all(|d| extent.contains(*d)));
        let field = a.dot_config().bounds();
        assert!(extent.min_x >= field.min_x && extent.max_x <= field.max_x);
        assert!(extent.min_y >= field.min_y && extent.max_y <= field.max_y);
        assert!(render(&report).contains(&format!("extent: {extent}")));
    }

    #[test]
    fn stacked_dots_are_counted() {
        let dots = [
            Point::new(0, 20.0, 20.0),
            Point::new(1, 40.0, 20.0),
            Point::new(2, 20.0, 20.0),
            Point::new(3, 20.0, 20.0),
        ];
        assert_eq!(stacked_dots(&dots), 2);
        assert_eq!(stacked_dots(&dots[..2]), 0);

        // A playfield with a single spot stacks every dot after the first.
        let report = run(&args(&[
            "--dots", "4", "--width", "40", "--height", "40", "--planner", "nearest",
        ]))
        .unwrap();
        assert_eq!(report.stacked, 3);
        assert_eq!(report.extent, Some(Bounds::new(20.0, 20.0, 20.0, 20.0)));
        assert!(render(&report).contains("stacked dots: 3"));
    }

    #[test]
    fn oversized_margin_is_an_error() {
        let err = run(&args(&[
            "--width",
            "4294967295",
            "--height",
            "4294967295",
            "--margin",
            "3000000000",
        ]))
        .unwrap_err();
        assert!(matches!(
            err.downcast_ref::<GenError>(),
            Some(GenError::NoRoom { .. })
        ));
    }

    #[test]
    fn json_report() {
        let report = run(&args(&["--dots", "3", "--planner", "informed"])).unwrap();
        let v: serde_json::Value = serde_json::to_value(&report).unwrap();
        assert_eq!(v["dots"].as_array().map(Vec::len), Some(3));
        assert_eq!(v["plans"][0]["planner"], "informed-search");
        assert_eq!(v["plans"][0]["closed"], false);
        assert!(v.get("score").is_none());
        assert_eq!(v["stacked"], 0);
        assert!(v["extent"]["min_x"].is_f64());
    }
}
