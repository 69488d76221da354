use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand};
use hull::api::{Algo, CollinearPolicy, Degeneracy, Hull, HullCfg, StepPhase};
use nalgebra::Point2;
use serde::Serialize;
use serde_json::json;
use std::path::Path;
use tracing_subscriber::fmt::SubscriberBuilder;

mod input;
mod provenance;

use input::{load_points, Source};

#[derive(Parser)]
#[command(name = "hull")]
#[command(about = "Compute, cross-check and export planar convex hulls")]
struct Cmd {
    /// Optional free-form tag; propagated to outputs and logs
    #[arg(long)]
    tag: Option<String>,

    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Compute a hull and write it (plus optional construction steps) as JSON
    Run {
        /// graham | jarvis
        #[arg(long, default_value = "graham")]
        algo: String,
        #[command(flatten)]
        source: SourceArgs,
        #[command(flatten)]
        policy: PolicyArgs,
        /// Record every intermediate hull for external rendering
        #[arg(long)]
        steps: bool,
        #[arg(long)]
        out: String,
    },
    /// Run both builders on the same points and fail if they disagree
    Compare {
        #[command(flatten)]
        source: SourceArgs,
        #[command(flatten)]
        policy: PolicyArgs,
    },
    /// Print a small provenance JSON block
    Report,
}

#[derive(Args)]
struct SourceArgs {
    /// Point table (.csv or .parquet) with integer columns `x`, `y`
    #[arg(long)]
    input: Option<String>,
    /// Number of random points when no input file is given
    #[arg(long, default_value_t = 30)]
    n: usize,
    /// Seed for the random draw
    #[arg(long, default_value_t = 42)]
    seed: u64,
    /// Lower corner of the sampling square [lo, hi)²
    #[arg(long, default_value_t = -300, allow_hyphen_values = true)]
    lo: i32,
    /// Upper corner of the sampling square [lo, hi)²
    #[arg(long, default_value_t = 300, allow_hyphen_values = true)]
    hi: i32,
}

impl SourceArgs {
    fn source(&self) -> Source {
        match &self.input {
            Some(path) => Source::File(path.clone()),
            None => Source::Random {
                n: self.n,
                seed: self.seed,
                lo: self.lo,
                hi: self.hi,
            },
        }
    }
}

#[derive(Args)]
struct PolicyArgs {
    /// Keep points lying inside hull edges
    #[arg(long)]
    include_collinear: bool,
}

impl PolicyArgs {
    fn cfg(&self) -> HullCfg {
        if self.include_collinear {
            HullCfg::including_collinear()
        } else {
            HullCfg::default()
        }
    }
}

fn main() -> Result<()> {
    SubscriberBuilder::default().with_target(false).init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Run {
            algo,
            source,
            policy,
            steps,
            out,
        } => {
            let algo = parse_algo(&algo)?;
            run(algo, &source.source(), policy.cfg(), steps, &out, cmd.tag)
        }
        Action::Compare { source, policy } => {
            compare(&source.source(), policy.cfg(), cmd.tag).map(|_| ())
        }
        Action::Report => report(cmd.tag),
    }
}

fn parse_algo(name: &str) -> Result<Algo> {
    match Algo::from_name(name) {
        Some(algo) => Ok(algo),
        None => bail!("unknown algorithm {name:?} (expected graham or jarvis)"),
    }
}

#[derive(Serialize)]
struct StepRecord {
    index: usize,
    phase: &'static str,
    vertices: Vec<[i32; 2]>,
}

#[derive(Serialize)]
struct RunRecord {
    algo: &'static str,
    policy: &'static str,
    source: String,
    input: Vec<[i32; 2]>,
    hull: Vec<[i32; 2]>,
    degeneracy: Option<&'static str>,
    twice_area: i128,
    #[serde(skip_serializing_if = "Option::is_none")]
    steps: Option<Vec<StepRecord>>,
}

fn coords(points: &[Point2<i32>]) -> Vec<[i32; 2]> {
    points.iter().map(|p| [p.x, p.y]).collect()
}

fn policy_name(cfg: HullCfg) -> &'static str {
    match cfg.collinear {
        CollinearPolicy::Exclude => "exclude",
        CollinearPolicy::Include => "include",
    }
}

fn degeneracy_name(hull: &Hull<i32>) -> Option<&'static str> {
    hull.degeneracy().map(|d| match d {
        Degeneracy::SinglePoint => "single_point",
        Degeneracy::Collinear => "collinear",
    })
}

fn run(
    algo: Algo,
    source: &Source,
    cfg: HullCfg,
    record_steps: bool,
    out: &str,
    tag: Option<String>,
) -> Result<()> {
    let points = load_points(source)?;
    tracing::info!(algo = algo.name(), source = %source.describe(), n = points.len(), tag = ?tag, "run");

    let mut steps: Vec<StepRecord> = Vec::new();
    let hull = algo
        .run_with(&points, cfg, |step| {
            if record_steps {
                steps.push(StepRecord {
                    index: step.index,
                    phase: step.phase.name(),
                    vertices: step.iter().map(|p| [p.x, p.y]).collect(),
                });
            }
        })
        .with_context(|| format!("{} on {}", algo.name(), source.describe()))?;
    tracing::info!(
        h = hull.len(),
        steps = steps.len(),
        degeneracy = ?hull.degeneracy(),
        "hull_done"
    );

    let record = RunRecord {
        algo: algo.name(),
        policy: policy_name(cfg),
        source: source.describe(),
        input: coords(&points),
        hull: coords(hull.vertices()),
        degeneracy: degeneracy_name(&hull),
        twice_area: hull.twice_area(),
        steps: record_steps.then_some(steps),
    };

    let out_path = Path::new(out);
    if let Some(parent) = out_path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    std::fs::write(out_path, serde_json::to_vec_pretty(&record)?)
        .with_context(|| format!("writing {out}"))?;

    let payload = provenance::Payload::new(json!({
        "algo": algo.name(),
        "policy": policy_name(cfg),
        "source": source.describe(),
        "steps": record_steps,
    }))
    .tagged(tag);
    let prov = provenance::write_sidecar(out_path, payload)?;
    tracing::info!(out, provenance = %prov.display(), "written");
    Ok(())
}

/// Returns the agreed hull.
fn compare(source: &Source, cfg: HullCfg, tag: Option<String>) -> Result<Hull<i32>> {
    let points = load_points(source)?;
    tracing::info!(source = %source.describe(), n = points.len(), tag = ?tag, "compare");

    let mut upper = 0usize;
    let mut lower = 0usize;
    let graham = Algo::Graham.run_with(&points, cfg, |step| match step.phase {
        StepPhase::Upper => upper += 1,
        StepPhase::Lower => lower += 1,
        StepPhase::Wrap => {}
    })?;
    let mut wraps = 0usize;
    let jarvis = Algo::Jarvis.run_with(&points, cfg, |_| wraps += 1)?;
    tracing::info!(h = graham.len(), upper, lower, "graham");
    tracing::info!(h = jarvis.len(), wraps, "jarvis");

    if graham != jarvis {
        bail!(
            "builders disagree on {}: graham={:?} jarvis={:?}",
            source.describe(),
            coords(graham.vertices()),
            coords(jarvis.vertices())
        );
    }
    tracing::info!(h = graham.len(), degeneracy = ?graham.degeneracy(), "agree");
    Ok(graham)
}

fn report(tag: Option<String>) -> Result<()> {
    let payload = provenance::Payload::new(json!({})).tagged(tag);
    let obj = provenance::block(&payload, &[]);
    println!("{}", serde_json::to_string_pretty(&obj)?);
    Ok(())
}
