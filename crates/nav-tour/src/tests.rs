//! Unit tests for nav-tour.

use nav_core::{SimRng, Vec3};
use nav_spatial::{GridPlacement, NavNode};

use crate::{LoopPath, TourError};

// ── Helpers ───────────────────────────────────────────────────────────────────

/// The three-corner tour used throughout the controller tests.
fn corner_tour() -> LoopPath {
    LoopPath::from_grid(&[(0, 0), (10, 0), (10, 10)], GridPlacement::new(1.0, 0.0)).unwrap()
}

// ── LoopPath ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod loop_path {
    use super::*;

    #[test]
    fn starts_on_first_waypoint() {
        let tour = corner_tour();
        assert_eq!(tour.cursor(), 0);
        assert_eq!(tour.current(), NavNode::new(Vec3::planar(0.0, 0.0)));
        assert_eq!(tour.peek_next(), NavNode::new(Vec3::planar(10.0, 0.0)));
    }

    #[test]
    fn next_wraps_after_last() {
        let mut tour = corner_tour();
        assert_eq!(tour.next().position(), Vec3::planar(10.0, 0.0));
        assert_eq!(tour.next().position(), Vec3::planar(10.0, 10.0));
        assert_eq!(tour.next().position(), Vec3::planar(0.0, 0.0));
        assert_eq!(tour.cursor(), 0);
    }

    #[test]
    fn len_calls_to_next_return_to_start() {
        let mut rng = SimRng::new(11);
        for n in 1..=12 {
            let points: Vec<Vec3> = (0..n)
                .map(|i| Vec3::planar((i * 7 % 13) as f32, (i * 3) as f32 - 10.0))
                .collect();
            let mut tour = LoopPath::from_points(points).unwrap();
            tour.randomize_start(&mut rng);
            let start = tour.current();
            for _ in 0..tour.len() {
                tour.next();
            }
            assert_eq!(tour.current(), start, "tour of {n} waypoints");
        }
    }

    #[test]
    fn single_waypoint_tour_stays_put() {
        let mut tour = LoopPath::from_points(vec![Vec3::new(3.0, 1.0, 4.0)]).unwrap();
        assert_eq!(tour.next(), tour.current());
        assert_eq!(tour.lap_length(), 0.0);
    }

    #[test]
    fn empty_input_is_fatal() {
        assert!(matches!(LoopPath::from_points(vec![]), Err(TourError::Empty)));
        assert!(matches!(LoopPath::from_grid(&[], GridPlacement::default()), Err(TourError::Empty)));
    }

    #[test]
    fn non_finite_waypoint_is_fatal() {
        let points = vec![Vec3::planar(0.0, 0.0), Vec3::new(f32::NAN, 0.0, 1.0)];
        let err = LoopPath::from_points(points).unwrap_err();
        assert!(matches!(err, TourError::NonFinite { index: 1, .. }), "{err}");

        let bad_spacing = GridPlacement::new(f32::NAN, 0.0);
        let err = LoopPath::from_grid(&[(1, 1)], bad_spacing).unwrap_err();
        assert!(matches!(err, TourError::NonFinite { index: 0, .. }));

        let err = LoopPath::from_points(vec![Vec3::new(0.0, f32::INFINITY, 0.0)]).unwrap_err();
        assert!(matches!(err, TourError::NonFinite { .. }));
    }

    #[test]
    fn grid_and_point_forms_are_equivalent() {
        let placement = GridPlacement::new(150.0, 12.0);
        let grid = LoopPath::from_grid(&[(1, 2), (3, 4)], placement).unwrap();
        let points = LoopPath::from_points(vec![
            Vec3::new(150.0, 12.0, 300.0),
            Vec3::new(450.0, 12.0, 600.0),
        ])
        .unwrap();
        assert_eq!(grid, points);
    }

    #[test]
    fn randomize_start_is_seeded() {
        let cells: Vec<(i32, i32)> = (0..20).map(|i| (i, 0)).collect();
        let mut a = LoopPath::from_grid(&cells, GridPlacement::default()).unwrap();
        let mut b = a.clone();
        a.randomize_start(&mut SimRng::new(99));
        b.randomize_start(&mut SimRng::new(99));
        assert_eq!(a.cursor(), b.cursor());
        assert!(a.cursor() < 20);
    }

    #[test]
    fn lap_length_includes_closing_leg() {
        // 10 + 10 + sqrt(200)
        let expected = 20.0 + 200f32.sqrt();
        assert!((corner_tour().lap_length() - expected).abs() < 1e-4);
    }
}

// ── CSV loaders ───────────────────────────────────────────────────────────────

#[cfg(test)]
mod loader {
    use std::io::Cursor;

    use super::*;
    use crate::{load_grid_tour_reader, load_point_tour_reader};

    #[test]
    fn grid_csv_round_trip() {
        let csv = "col,row\n0,0\n10,0\n10,10\n";
        let tour = load_grid_tour_reader(Cursor::new(csv), GridPlacement::new(1.0, 0.0)).unwrap();
        assert_eq!(tour, corner_tour());
    }

    #[test]
    fn point_csv_keeps_height() {
        let csv = "x,y,z\n0.0,5.0,0.0\n10.0,7.5,0.0\n";
        let tour = load_point_tour_reader(Cursor::new(csv)).unwrap();
        assert_eq!(tour.len(), 2);
        assert_eq!(tour.nodes()[1].position(), Vec3::new(10.0, 7.5, 0.0));
    }

    #[test]
    fn header_only_is_empty() {
        let err = load_grid_tour_reader(Cursor::new("col,row\n"), GridPlacement::default()).unwrap_err();
        assert!(matches!(err, TourError::Empty));
    }

    #[test]
    fn malformed_row_is_parse_error() {
        let err = load_grid_tour_reader(Cursor::new("col,row\n1,north\n"), GridPlacement::default())
            .unwrap_err();
        assert!(matches!(err, TourError::Parse(_)));
    }

    #[test]
    fn non_finite_point_rejected() {
        let err = load_point_tour_reader(Cursor::new("x,y,z\n1,0,0\nNaN,0,0\n")).unwrap_err();
        assert!(matches!(err, TourError::NonFinite { index: 1, .. }));
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = crate::load_point_tour_csv(std::path::Path::new("/nonexistent/tour.csv")).unwrap_err();
        assert!(matches!(err, TourError::Io(_)));
    }
}

// ── Deserialization ───────────────────────────────────────────────────────────

#[cfg(all(test, feature = "serde"))]
mod deserialize {
    use super::*;

    #[test]
    fn round_trip_keeps_cursor() {
        let mut tour = corner_tour();
        tour.next();
        let json = serde_json::to_string(&tour).unwrap();
        let back: LoopPath = serde_json::from_str(&json).unwrap();
        assert_eq!(back, tour);
        assert_eq!(back.cursor(), 1);
    }

    #[test]
    fn empty_tour_is_rejected() {
        let err = serde_json::from_str::<LoopPath>(r#"{"nodes":[],"cursor":0}"#).unwrap_err();
        assert!(err.to_string().contains("no waypoints"), "{err}");
    }

    #[test]
    fn cursor_past_end_is_rejected() {
        let json = r#"{"nodes":[{"position":{"x":0.0,"y":0.0,"z":0.0}}],"cursor":3}"#;
        let err = serde_json::from_str::<LoopPath>(json).unwrap_err();
        assert!(err.to_string().contains("out of range"), "{err}");
    }
}
