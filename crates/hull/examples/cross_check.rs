//! Run both builders on a few random clouds and print what they found.
//!
//! Usage:
//!   cargo run -p hull --example cross_check -- 30
//!   cargo run -p hull --example cross_check -- 200 include
//!
//! Prints one line per sample with the hull size and whether the builders agree.

use hull::api::{
    draw_points, Algo, CloudReplay, HullCfg, PointCloudCfg, PointCount, StepPhase,
};

fn main() {
    let n = std::env::args()
        .nth(1)
        .and_then(|s| s.parse::<usize>().ok())
        .unwrap_or(30);
    let cfg = match std::env::args().nth(2).as_deref() {
        Some("include") => HullCfg::including_collinear(),
        _ => HullCfg::default(),
    };
    let cloud = PointCloudCfg {
        count: PointCount::Fixed(n),
        ..PointCloudCfg::default()
    };
    for index in 0..5 {
        let pts = draw_points(cloud, CloudReplay { seed: 42, index });
        let mut upper = 0usize;
        let mut lower = 0usize;
        let graham = Algo::Graham.run_with(&pts, cfg, |step| match step.phase {
            StepPhase::Upper => upper += 1,
            StepPhase::Lower => lower += 1,
            StepPhase::Wrap => {}
        });
        let jarvis = Algo::Jarvis.run(&pts, cfg);
        match (graham, jarvis) {
            (Ok(g), Ok(j)) => println!(
                "sample {index}: n={}, h={}, steps={upper}+{lower}, agree={}",
                pts.len(),
                g.len(),
                g == j
            ),
            (g, j) => eprintln!("sample {index}: graham={g:?} jarvis={j:?}"),
        }
    }
}
