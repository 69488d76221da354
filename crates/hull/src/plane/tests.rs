use super::*;
use nalgebra::Point2;
use proptest::prelude::*;

type Builder = fn(&[Point<i32>], HullCfg) -> Result<Hull<i32>, HullError>;

fn graham(points: &[Point<i32>], cfg: HullCfg) -> Result<Hull<i32>, HullError> {
    graham_scan_hull_with(points, cfg, |_| {})
}

fn jarvis(points: &[Point<i32>], cfg: HullCfg) -> Result<Hull<i32>, HullError> {
    jarvis_march_hull_with(points, cfg, |_| {})
}

const BUILDERS: [(&str, Builder); 2] = [("graham", graham), ("jarvis", jarvis)];

fn pts(coords: &[(i32, i32)]) -> Vec<Point<i32>> {
    coords.iter().map(|&(x, y)| Point2::new(x, y)).collect()
}

#[test]
fn square_corners_are_all_kept() {
    let input = pts(&[(0, 0), (0, 2), (2, 2), (2, 0)]);
    for (name, build) in BUILDERS {
        let hull = build(&input, HullCfg::default()).unwrap();
        assert_eq!(
            hull.vertices(),
            &pts(&[(0, 0), (2, 0), (2, 2), (0, 2)])[..],
            "{name}"
        );
    }
}

#[test]
fn interior_point_is_dropped() {
    let input = pts(&[(0, 0), (0, 2), (2, 2), (2, 0), (1, 1)]);
    for (name, build) in BUILDERS {
        let hull = build(&input, HullCfg::default()).unwrap();
        assert_eq!(hull.len(), 4, "{name}");
        assert!(!hull.vertices().contains(&Point2::new(1, 1)), "{name}");
    }
}

#[test]
fn collinear_middle_point_is_dropped() {
    let input = pts(&[(0, 0), (1, 1), (2, 2)]);
    for (name, build) in BUILDERS {
        let hull = build(&input, HullCfg::default()).unwrap();
        assert_eq!(hull.vertices(), &pts(&[(0, 0), (2, 2)])[..], "{name}");
        assert_eq!(hull.degeneracy(), Some(Degeneracy::Collinear), "{name}");
    }
}

#[test]
fn single_point_is_its_own_hull() {
    for (name, build) in BUILDERS {
        let hull = build(&pts(&[(5, 5)]), HullCfg::default()).unwrap();
        assert_eq!(hull.vertices(), &pts(&[(5, 5)])[..], "{name}");
        assert_eq!(hull.degeneracy(), Some(Degeneracy::SinglePoint), "{name}");
    }
}

#[test]
fn two_points_are_their_own_hull() {
    for (name, build) in BUILDERS {
        let hull = build(&pts(&[(0, 0), (1, 1)]), HullCfg::default()).unwrap();
        assert_eq!(hull.vertices(), &pts(&[(0, 0), (1, 1)])[..], "{name}");
    }
}

#[test]
fn empty_input_is_rejected() {
    for (name, build) in BUILDERS {
        assert_eq!(
            build(&[], HullCfg::default()),
            Err(HullError::InvalidInputSize {
                got: 0,
                required: 1
            }),
            "{name}"
        );
    }
    assert!(graham_scan_hull::<i32>(&[]).is_err());
    assert!(jarvis_march_hull::<i32>(&[]).is_err());
}

#[test]
fn include_policy_keeps_edge_points() {
    let input = pts(&[(0, 0), (1, 0), (2, 0), (2, 1), (2, 2), (1, 1), (0, 2), (0, 1)]);
    let cfg = HullCfg::including_collinear();
    for (name, build) in BUILDERS {
        let hull = build(&input, cfg).unwrap();
        assert_eq!(
            hull.vertices(),
            &pts(&[(0, 0), (1, 0), (2, 0), (2, 1), (2, 2), (0, 2), (0, 1)])[..],
            "{name}"
        );
        assert!(hull.is_convex(), "{name}");
    }
}

#[test]
fn include_policy_on_a_segment_lists_each_point_once() {
    let input = pts(&[(2, 2), (0, 0), (3, 3), (1, 1), (2, 2)]);
    for (name, build) in BUILDERS {
        let hull = build(&input, HullCfg::including_collinear()).unwrap();
        assert_eq!(
            hull.vertices(),
            &pts(&[(0, 0), (1, 1), (2, 2), (3, 3)])[..],
            "{name}"
        );
    }
}

#[test]
fn other_coordinate_types() {
    let small: Vec<Point<i8>> = vec![
        Point2::new(-128, -128),
        Point2::new(127, -128),
        Point2::new(127, 127),
        Point2::new(0, 0),
    ];
    assert_eq!(graham_scan_hull(&small).unwrap().len(), 3);
    assert_eq!(
        graham_scan_hull(&small).unwrap(),
        jarvis_march_hull(&small).unwrap()
    );
    let wide: Vec<Point<u32>> = vec![
        Point2::new(0, 0),
        Point2::new(u32::MAX, 0),
        Point2::new(u32::MAX, u32::MAX),
        Point2::new(0, u32::MAX),
        Point2::new(u32::MAX / 2, u32::MAX / 2),
    ];
    let g = graham_scan_hull(&wide).unwrap();
    assert_eq!(g.len(), 4);
    assert_eq!(g, jarvis_march_hull(&wide).unwrap());
}

#[test]
fn random_clouds_agree() {
    use super::rand::{draw_points, PointCloudCfg, ReplayToken};
    for index in 0..20 {
        let input = draw_points(PointCloudCfg::default(), ReplayToken { seed: 42, index });
        let g = graham_scan_hull(&input).unwrap();
        let j = jarvis_march_hull(&input).unwrap();
        assert_eq!(g, j, "index {index}");
        assert!(input.iter().all(|q| g.encloses(q)));
    }
}

#[test]
fn graham_handles_large_all_on_hull_input() {
    // Every point of (k, k²) is a vertex; a per-step copy would make this quadratic.
    let input: Vec<Point<u32>> = (0..60_000u32).map(|k| Point2::new(k, k * k)).collect();
    let mut steps = 0usize;
    let hull = graham_scan_hull_with(&input, HullCfg::default(), |step| {
        steps += 1;
        assert!(step.len() <= input.len() + 2);
    })
    .unwrap();
    assert_eq!(hull.len(), input.len());
    assert_eq!(steps, 2 * (input.len() - 2));
    assert!(hull.is_convex());
}

fn cloud(max_len: usize, span: i32) -> impl Strategy<Value = Vec<Point<i32>>> {
    prop::collection::vec((-span..span, -span..span), 1..max_len)
        .prop_map(|v| v.into_iter().map(|(x, y)| Point2::new(x, y)).collect())
}

/// Small span on purpose: collinear triples and duplicates show up often.
fn crowded() -> impl Strategy<Value = Vec<Point<i32>>> {
    cloud(30, 4)
}

proptest! {
    #[test]
    fn hull_is_subset_and_encloses_input(input in cloud(60, 100)) {
        for (_, build) in BUILDERS {
            let hull = build(&input, HullCfg::default()).unwrap();
            prop_assert!(hull.vertices().iter().all(|v| input.contains(v)));
            prop_assert!(input.iter().all(|q| hull.encloses(q)));
        }
    }

    #[test]
    fn hull_is_strictly_convex_and_starts_lowest(input in crowded()) {
        let lowest = input.iter().min_by(|a, b| (a.x, a.y).cmp(&(b.x, b.y))).copied();
        for (_, build) in BUILDERS {
            let hull = build(&input, HullCfg::default()).unwrap();
            prop_assert_eq!(hull.vertices().first().copied(), lowest);
            let v = hull.vertices();
            let h = v.len();
            if h >= 3 {
                for k in 0..h {
                    prop_assert!(cross(&v[k], &v[(k + 1) % h], &v[(k + 2) % h]) > 0);
                }
            }
            for (k, a) in v.iter().enumerate() {
                prop_assert!(!v[k + 1..].contains(a));
            }
        }
    }

    #[test]
    fn builders_agree(input in crowded()) {
        prop_assert_eq!(
            graham_scan_hull(&input).unwrap(),
            jarvis_march_hull(&input).unwrap()
        );
        let cfg = HullCfg::including_collinear();
        prop_assert_eq!(graham(&input, cfg).unwrap(), jarvis(&input, cfg).unwrap());
    }

    #[test]
    fn hull_of_hull_is_itself(input in crowded()) {
        for cfg in [HullCfg::default(), HullCfg::including_collinear()] {
            for (_, build) in BUILDERS {
                let hull = build(&input, cfg).unwrap();
                let again = build(hull.vertices(), cfg).unwrap();
                prop_assert_eq!(again, hull);
            }
        }
    }

    #[test]
    fn repeated_runs_are_identical_and_input_is_untouched(input in cloud(40, 20)) {
        let before = input.clone();
        for (_, build) in BUILDERS {
            let a = build(&input, HullCfg::default()).unwrap();
            let b = build(&input, HullCfg::default()).unwrap();
            prop_assert_eq!(a, b);
        }
        prop_assert_eq!(input, before);
    }

    #[test]
    fn include_policy_adds_every_boundary_point(input in crowded()) {
        let strict = graham_scan_hull(&input).unwrap();
        let full = graham(&input, HullCfg::including_collinear()).unwrap();
        prop_assert!(strict.vertices().iter().all(|v| full.vertices().contains(v)));
        prop_assert!(input.iter().all(|q| full.encloses(q)));
        prop_assert!(full.is_convex());
        if strict.len() >= 3 {
            // Points on the strict boundary are exactly the ones kept.
            for q in &input {
                let on_edge = strict.edges().any(|(a, b)| {
                    is_collinear(a, b, q)
                        && (a.x.min(b.x)..=a.x.max(b.x)).contains(&q.x)
                        && (a.y.min(b.y)..=a.y.max(b.y)).contains(&q.y)
                });
                prop_assert_eq!(on_edge, full.vertices().contains(q));
            }
        }
    }

    #[test]
    fn steps_are_emitted_in_order(input in cloud(40, 50)) {
        let mut seen = Vec::new();
        let hull = graham_scan_hull_with(&input, HullCfg::default(), |step| {
            seen.push((step.index, step.phase));
        }).unwrap();
        prop_assert!(seen.iter().enumerate().all(|(k, (i, _))| k == *i));
        let uppers = seen.iter().filter(|(_, p)| *p == StepPhase::Upper).count();
        let first_lower = seen.iter().position(|(_, p)| *p == StepPhase::Lower);
        if let Some(pos) = first_lower {
            prop_assert_eq!(pos, uppers);
        }

        let mut sizes = Vec::new();
        let wrapped = jarvis_march_hull_with(&input, HullCfg::default(), |step| {
            sizes.push(step.len());
        });
        prop_assert!(sizes.iter().enumerate().all(|(k, len)| *len == k + 2));
        prop_assert_eq!(wrapped.unwrap(), hull);
    }
}
