// Property tests for geometry, reference-frame selection and consolidation
mod common;

use proptest::prelude::*;

use common::squat_trajectory;
use form_check_engine::models::AngleSeries;
use form_check_engine::services::geometry::angle_at;
use form_check_engine::services::reference_frame::{find_extended_frame, find_last_extended_frame};
use form_check_engine::services::{MovementAnalyzer, SquatAnalyzer, WarningConsolidator};
use form_check_engine::{Point2D, Warning};

fn point() -> impl Strategy<Value = Point2D> {
    (-500i32..500, -500i32..500).prop_map(|(x, y)| Point2D::new(x as f64, y as f64))
}

/// Angles on a 0.1° grid so distinct values never collide after rounding
fn angle_series() -> impl Strategy<Value = Vec<f64>> {
    prop::collection::vec((0u32..=1800).prop_map(|tenths| tenths as f64 / 10.0), 1..60)
}

fn raw_warnings() -> impl Strategy<Value = Vec<Warning>> {
    prop::collection::vec((0usize..400, 0usize..3), 0..80).prop_map(|raw| {
        raw.into_iter()
            .map(|(frame, kind)| Warning::new(frame, format!("fault {}", kind)))
            .collect()
    })
}

proptest! {
    #[test]
    fn angle_is_bounded_and_symmetric(a in point(), vertex in point(), c in point()) {
        prop_assume!(a != vertex && c != vertex);

        let forward = angle_at(a, vertex, c).unwrap();
        let backward = angle_at(c, vertex, a).unwrap();

        prop_assert!((0.0..=180.0).contains(&forward));
        prop_assert!((forward - backward).abs() < 1e-9);
    }

    #[test]
    fn coincident_vertex_is_rejected(a in point(), c in point()) {
        prop_assert!(angle_at(a, a, c).is_err());
        prop_assert!(angle_at(c, a, a).is_err());
    }

    #[test]
    fn extended_frame_is_earliest_maximum(angles in angle_series()) {
        let series = AngleSeries::new(angles.clone());
        let frame = find_extended_frame(&series).unwrap();
        let best = angles.iter().cloned().fold(f64::MIN, f64::max);

        prop_assert_eq!(angles[frame], best);
        prop_assert!(angles[..frame].iter().all(|&a| a < best));
    }

    #[test]
    fn last_extended_frame_is_latest_maximum(angles in angle_series()) {
        let series = AngleSeries::new(angles.clone());
        let first = find_extended_frame(&series).unwrap();
        let last = find_last_extended_frame(&series).unwrap();

        prop_assert!(first <= last);
        prop_assert_eq!(angles[last], angles[first]);
        prop_assert!(angles[last + 1..].iter().all(|&a| a < angles[last]));
    }

    #[test]
    fn rise_then_fall_peaks_at_the_top(rise in 1usize..30, fall in 1usize..30) {
        let angles: Vec<f64> = (0..rise)
            .map(|i| 90.0 + i as f64)
            .chain((0..fall).map(|i| 90.0 + rise as f64 - 1.0 - (i + 1) as f64))
            .collect();
        let frame = find_extended_frame(&AngleSeries::new(angles)).unwrap();
        prop_assert_eq!(frame, rise - 1);
    }

    #[test]
    fn constant_series_picks_first_frame(tenths in 0u32..=1800, len in 1usize..50) {
        let series = AngleSeries::new(vec![tenths as f64 / 10.0; len]);
        prop_assert_eq!(find_extended_frame(&series).unwrap(), 0);
        prop_assert_eq!(find_last_extended_frame(&series).unwrap(), len - 1);
    }

    #[test]
    fn consolidation_keeps_spaced_subset(raw in raw_warnings(), window in 0usize..60) {
        let consolidator = WarningConsolidator::new(window);
        let kept = consolidator.consolidate(&raw);

        prop_assert!(kept.len() <= raw.len());
        prop_assert!(kept.iter().all(|w| raw.contains(w)));
        for pair in kept.windows(2) {
            prop_assert!(pair[1].frame >= pair[0].frame + window);
        }

        // The earliest raw warning always survives
        if let Some(earliest) = raw.iter().min_by_key(|w| w.frame) {
            prop_assert_eq!(&kept[0], earliest);
        }

        // Everything dropped sits inside the window of a kept warning before it
        for warning in raw.iter().filter(|w| !kept.contains(w)) {
            prop_assert!(kept
                .iter()
                .any(|k| k.frame <= warning.frame && warning.frame - k.frame < window));
        }
    }

    #[test]
    fn consolidation_is_idempotent(raw in raw_warnings(), window in 0usize..60) {
        let consolidator = WarningConsolidator::new(window);
        let once = consolidator.consolidate(&raw);
        prop_assert_eq!(consolidator.consolidate(&once), once);
    }

    #[test]
    fn squat_analysis_is_deterministic(
        frames in prop::collection::vec((1.0f64..180.0, 0.0f64..180.0, 50.0f64..250.0), 1..40)
    ) {
        let hip: Vec<f64> = frames.iter().map(|f| f.0).collect();
        let knee: Vec<f64> = frames.iter().map(|f| f.1).collect();
        let torso: Vec<f64> = frames.iter().map(|f| f.2).collect();
        let trajectory = squat_trajectory(&hip, &knee, &torso);

        let analyzer = SquatAnalyzer::default();
        let first = analyzer.analyze(&trajectory).unwrap();
        let second = analyzer.analyze(&trajectory).unwrap();

        prop_assert_eq!(&first, &second);
        prop_assert!(first.iter().all(|w| w.frame < frames.len()));
        prop_assert!(first.windows(2).all(|pair| pair[0].frame < pair[1].frame));
    }
}
