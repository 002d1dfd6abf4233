// Shared fixtures for form-check-engine integration tests
#![allow(dead_code)]

use std::sync::Once;

use form_check_engine::models::{
    AngleSeries, JointAngles, JointSeries, JointTrajectories, LandmarkFrame, LateralSeries,
    Point2D, Trajectory,
};

static INIT: Once = Once::new();

/// Initialize test logging
pub fn init_test_logging() {
    INIT.call_once(|| {
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .with_test_writer()
            .init();
    });
}

/// Midpoint joints of a subject plus how far each paired landmark sits from
/// its midpoint horizontally
#[derive(Debug, Clone)]
pub struct Skeleton {
    pub shoulder: Point2D,
    pub elbow: Point2D,
    pub wrist: Point2D,
    pub hip: Point2D,
    pub knee: Point2D,
    pub ankle: Point2D,
    pub half_width: f64,
    pub elbow_half_width: f64,
}

impl Skeleton {
    /// Expand into a full 17-landmark COCO frame
    pub fn frame(&self) -> LandmarkFrame {
        let side = |p: Point2D, half: f64| {
            (Point2D::new(p.x - half, p.y), Point2D::new(p.x + half, p.y))
        };
        let (left_shoulder, right_shoulder) = side(self.shoulder, self.half_width);
        let (left_elbow, right_elbow) = side(self.elbow, self.elbow_half_width);
        let (left_wrist, right_wrist) = side(self.wrist, self.elbow_half_width);
        let (left_hip, right_hip) = side(self.hip, self.half_width);
        let (left_knee, right_knee) = side(self.knee, self.half_width);
        let nose = self.shoulder - Point2D::new(0.0, 60.0);

        LandmarkFrame::new(vec![
            nose,
            nose + Point2D::new(-8.0, -8.0),
            nose + Point2D::new(8.0, -8.0),
            nose + Point2D::new(-16.0, 0.0),
            nose + Point2D::new(16.0, 0.0),
            left_shoulder,
            right_shoulder,
            left_elbow,
            right_elbow,
            left_wrist,
            right_wrist,
            left_hip,
            right_hip,
            left_knee,
            right_knee,
            self.ankle,
            self.ankle,
        ])
    }
}

/// Side-on lower-body pose producing the requested hip and knee angles with a
/// shoulder-to-hip distance of `torso`
pub fn lower_body_pose(hip_angle: f64, knee_angle: f64, torso: f64) -> Skeleton {
    const THIGH: f64 = 150.0;
    const SHIN: f64 = 150.0;

    let hip = Point2D::new(300.0, 400.0);
    let shoulder = hip - Point2D::new(0.0, torso);

    let theta = hip_angle.to_radians();
    let knee = hip + Point2D::new(THIGH * theta.sin(), -THIGH * theta.cos());

    // Rotate the knee->hip direction by the knee angle to aim the shin
    let (ux, uy) = (-theta.sin(), theta.cos());
    let phi = knee_angle.to_radians();
    let shin = Point2D::new(ux * phi.cos() - uy * phi.sin(), ux * phi.sin() + uy * phi.cos());
    let ankle = knee + Point2D::new(SHIN * shin.x, SHIN * shin.y);

    let elbow = shoulder + Point2D::new(20.0, 100.0);
    let wrist = elbow + Point2D::new(20.0, 90.0);

    Skeleton {
        shoulder,
        elbow,
        wrist,
        hip,
        knee,
        ankle,
        half_width: 20.0,
        elbow_half_width: 20.0,
    }
}

/// Lifter on a bench. Shoulders at y = 300, 80px apart. Elbows either locked
/// out above the shoulders or lowered just below them, spread by
/// `elbow_half_width` either side of the midline.
pub fn bench_pose(locked_out: bool, elbow_half_width: f64) -> Skeleton {
    let shoulder = Point2D::new(300.0, 300.0);
    let (elbow, wrist) = if locked_out {
        (Point2D::new(300.0, 220.0), Point2D::new(300.0, 140.0))
    } else {
        (Point2D::new(300.0, 320.0), Point2D::new(300.0, 250.0))
    };

    Skeleton {
        shoulder,
        elbow,
        wrist,
        hip: Point2D::new(300.0, 500.0),
        knee: Point2D::new(300.0, 600.0),
        ankle: Point2D::new(300.0, 700.0),
        half_width: 40.0,
        elbow_half_width,
    }
}

/// Trajectory for angle-level scenarios: hip/knee angles and torso lengths are
/// given directly, every other series is held at a neutral constant
pub fn squat_trajectory(hip: &[f64], knee: &[f64], torso: &[f64]) -> Trajectory {
    let len = hip.len();
    let fixed = |x: f64, y: f64| JointSeries::new(vec![Point2D::new(x, y); len]);

    let shoulder = torso.iter().map(|t| Point2D::new(300.0, 400.0 - t)).collect();

    let joints = JointTrajectories {
        shoulder: JointSeries::new(shoulder),
        elbow: fixed(320.0, 300.0),
        wrist: fixed(340.0, 390.0),
        hip: fixed(300.0, 400.0),
        knee: fixed(330.0, 550.0),
        ankle: fixed(310.0, 700.0),
    };
    let angles = JointAngles {
        hip: AngleSeries::new(hip.to_vec()),
        shoulder: AngleSeries::new(vec![15.0; len]),
        knee: AngleSeries::new(knee.to_vec()),
        arm: AngleSeries::new(vec![170.0; len]),
    };
    let lateral = LateralSeries {
        left_shoulder: fixed(280.0, 200.0),
        right_shoulder: fixed(320.0, 200.0),
        left_elbow: fixed(300.0, 300.0),
        right_elbow: fixed(340.0, 300.0),
    };

    Trajectory::from_parts(joints, angles, lateral).expect("aligned fixture series")
}
