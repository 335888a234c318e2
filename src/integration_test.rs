#[cfg(test)]
mod integration_tests {
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    use crate::{BoundaryPolicy, Bounds, Point, QuadTree, QuadTreeConfig};

    fn sorted(mut points: Vec<Point>) -> Vec<Point> {
        points.sort_by(|a, b| a.x.total_cmp(&b.x).then(a.y.total_cmp(&b.y)));
        points
    }

    fn brute_force(points: &[Point], region: &Bounds) -> Vec<Point> {
        points.iter().copied().filter(|&p| region.contains(p)).collect()
    }

    fn random_region<R: Rng>(rng: &mut R, extent: f64) -> Bounds {
        let min_x = rng.random_range(-10.0..extent);
        let min_y = rng.random_range(-10.0..extent);
        let w = rng.random_range(0.0..extent / 2.0);
        let h = rng.random_range(0.0..extent / 2.0);
        Bounds::from_coords(min_x, min_y, min_x + w, min_y + h)
    }

    fn check_against_brute_force(config: QuadTreeConfig, seed: u64) {
        let mut rng = StdRng::seed_from_u64(seed);
        let universe = Bounds::from_coords(0.0, 0.0, 1000.0, 1000.0);
        let mut tree = QuadTree::with_config(universe, config).expect("valid config");

        let mut stored = Vec::new();
        for _ in 0..2_000 {
            // Some points fall outside the universe on purpose.
            let p = Point::new(
                rng.random_range(-50.0..1050.0),
                rng.random_range(-50.0..1050.0),
            );
            if tree.insert(p) {
                assert!(universe.contains(p), "accepted {p} outside the universe");
                stored.push(p);
            } else {
                assert!(!universe.contains(p), "rejected {p} inside the universe");
            }
        }
        assert_eq!(tree.len(), stored.len());

        for _ in 0..200 {
            let region = random_region(&mut rng, 1000.0);
            let expected = sorted(brute_force(&stored, &region));
            let actual = sorted(tree.overlap_query(&region));
            assert_eq!(actual, expected, "query {region} disagrees with a linear scan");
        }
    }

    #[test]
    fn test_random_queries_match_linear_scan() {
        for seed in [1, 7, 42] {
            check_against_brute_force(QuadTreeConfig::default(), seed);
        }
    }

    #[test]
    fn test_random_queries_match_linear_scan_half_open() {
        let config = QuadTreeConfig::default()
            .with_capacity(8)
            .with_boundary_policy(BoundaryPolicy::HalfOpen);
        check_against_brute_force(config, 99);
    }

    #[test]
    fn test_random_queries_match_linear_scan_capacity_one() {
        check_against_brute_force(QuadTreeConfig::default().with_capacity(1), 3);
    }

    #[test]
    fn test_every_point_finds_itself() {
        let mut rng = StdRng::seed_from_u64(5);
        let mut tree =
            QuadTree::new(Bounds::from_coords(0.0, 0.0, 100.0, 100.0), 4).expect("valid capacity");
        let points: Vec<Point> = (0..500)
            .map(|_| Point::new(rng.random_range(0.0..100.0), rng.random_range(0.0..100.0)))
            .collect();
        assert_eq!(tree.insert_all(points.iter().copied()), points.len());

        for &p in &points {
            let hits = tree.overlap_query(&Bounds::new(p, p));
            assert!(hits.contains(&p), "{p} not returned by its own point query");
        }
    }

    #[test]
    fn test_grid_points_on_split_lines_are_not_duplicated() {
        // Integer grid on a power-of-two universe: many points land on split lines.
        for policy in [BoundaryPolicy::Inclusive, BoundaryPolicy::HalfOpen] {
            let config = QuadTreeConfig::default()
                .with_capacity(2)
                .with_boundary_policy(policy);
            let universe = Bounds::from_coords(0.0, 0.0, 64.0, 64.0);
            let mut tree = QuadTree::with_config(universe, config).expect("valid config");

            let mut count = 0_usize;
            for x in 0..=64_u32 {
                for y in (0..=64_u32).step_by(8) {
                    assert!(tree.insert(Point::new(f64::from(x), f64::from(y))));
                    count += 1;
                }
            }

            let all = tree.overlap_query(&universe);
            assert_eq!(all.len(), count, "{policy:?}: each insert stored exactly once");
            assert_eq!(tree.iter().count(), count);

            let line = tree.overlap_query(&Bounds::from_coords(32.0, 0.0, 32.0, 64.0));
            assert_eq!(line.len(), 9, "{policy:?}: column x=32 holds 9 points");
        }
    }

    #[test]
    fn test_extreme_universe() {
        // Same setup as the benchmark: huge root, points in a small corner.
        let max = f64::from(f32::MAX);
        let mut tree = QuadTree::new(Bounds::from_coords(-max, -max, max, max), 4)
            .expect("valid capacity");

        let mut rng = StdRng::seed_from_u64(11);
        let points: Vec<Point> = (0..1_000)
            .map(|_| Point::new(rng.random_range(0.0..1000.0), rng.random_range(0.0..1000.0)))
            .collect();
        assert_eq!(tree.insert_all(points.iter().copied()), points.len());

        let region = Bounds::from_coords(10.0, 10.0, 100.0, 100.0);
        assert_eq!(
            sorted(tree.overlap_query(&region)),
            sorted(brute_force(&points, &region))
        );
    }

    #[test]
    fn test_query_order_is_deterministic() {
        let build = || {
            let mut rng = StdRng::seed_from_u64(21);
            let mut tree = QuadTree::new(Bounds::from_coords(0.0, 0.0, 10.0, 10.0), 3)
                .expect("valid capacity");
            for _ in 0..300 {
                let p = Point::new(rng.random_range(0.0..10.0), rng.random_range(0.0..10.0));
                assert!(tree.insert(p));
            }
            tree
        };
        let region = Bounds::from_coords(2.0, 2.0, 7.0, 7.0);
        assert_eq!(build().overlap_query(&region), build().overlap_query(&region));
    }
}
