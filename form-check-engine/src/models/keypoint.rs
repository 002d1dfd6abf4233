/// Landmark models for pose-estimation output
///
/// Frames arrive from the pose estimator as arrays of 2D pixel coordinates
/// indexed by the COCO keypoint layout.
use serde::{Deserialize, Serialize};
use std::ops::{Add, Sub};

use crate::error::{AnalysisError, Result};

/// 2D point (or displacement) in image-pixel space
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(from = "[f64; 2]", into = "[f64; 2]")]
pub struct Point2D {
    pub x: f64,
    pub y: f64,
}

impl Point2D {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn dot(self, other: Self) -> f64 {
        self.x * other.x + self.y * other.y
    }

    /// Euclidean length of the point treated as a vector
    pub fn norm(self) -> f64 {
        self.dot(self).sqrt()
    }

    /// Calculate Euclidean distance to another point
    pub fn distance_to(self, other: Self) -> f64 {
        (other - self).norm()
    }
}

impl Add for Point2D {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self::new(self.x + other.x, self.y + other.y)
    }
}

impl Sub for Point2D {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self::new(self.x - other.x, self.y - other.y)
    }
}

impl From<[f64; 2]> for Point2D {
    fn from([x, y]: [f64; 2]) -> Self {
        Self::new(x, y)
    }
}

impl From<Point2D> for [f64; 2] {
    fn from(point: Point2D) -> Self {
        [point.x, point.y]
    }
}

/// COCO keypoint indices for joint calculations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CocoKeypoint {
    Nose = 0,
    LeftEye = 1,
    RightEye = 2,
    LeftEar = 3,
    RightEar = 4,
    LeftShoulder = 5,
    RightShoulder = 6,
    LeftElbow = 7,
    RightElbow = 8,
    LeftWrist = 9,
    RightWrist = 10,
    LeftHip = 11,
    RightHip = 12,
    LeftKnee = 13,
    RightKnee = 14,
    LeftAnkle = 15,
    RightAnkle = 16,
}

impl CocoKeypoint {
    /// Number of landmarks in a complete frame
    pub const COUNT: usize = 17;

    /// Get keypoint name
    pub fn name(&self) -> &'static str {
        match self {
            Self::Nose => "nose",
            Self::LeftEye => "left_eye",
            Self::RightEye => "right_eye",
            Self::LeftEar => "left_ear",
            Self::RightEar => "right_ear",
            Self::LeftShoulder => "left_shoulder",
            Self::RightShoulder => "right_shoulder",
            Self::LeftElbow => "left_elbow",
            Self::RightElbow => "right_elbow",
            Self::LeftWrist => "left_wrist",
            Self::RightWrist => "right_wrist",
            Self::LeftHip => "left_hip",
            Self::RightHip => "right_hip",
            Self::LeftKnee => "left_knee",
            Self::RightKnee => "right_knee",
            Self::LeftAnkle => "left_ankle",
            Self::RightAnkle => "right_ankle",
        }
    }

    pub fn index(&self) -> usize {
        *self as usize
    }

    /// Get all keypoints in array order
    pub fn all() -> [Self; Self::COUNT] {
        [
            Self::Nose,
            Self::LeftEye,
            Self::RightEye,
            Self::LeftEar,
            Self::RightEar,
            Self::LeftShoulder,
            Self::RightShoulder,
            Self::LeftElbow,
            Self::RightElbow,
            Self::LeftWrist,
            Self::RightWrist,
            Self::LeftHip,
            Self::RightHip,
            Self::LeftKnee,
            Self::RightKnee,
            Self::LeftAnkle,
            Self::RightAnkle,
        ]
    }
}

/// All landmarks detected for the subject in a single frame
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LandmarkFrame {
    landmarks: Vec<Point2D>,
}

impl LandmarkFrame {
    pub fn new(landmarks: Vec<Point2D>) -> Self {
        Self { landmarks }
    }

    /// Look up a landmark; `frame` is only used to label the error
    pub fn get(&self, frame: usize, keypoint: CocoKeypoint) -> Result<Point2D> {
        self.landmarks
            .get(keypoint.index())
            .copied()
            .ok_or(AnalysisError::MalformedFrame {
                frame,
                landmark: keypoint.name(),
                found: self.landmarks.len(),
            })
    }

    pub fn len(&self) -> usize {
        self.landmarks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.landmarks.is_empty()
    }
}

impl From<Vec<Point2D>> for LandmarkFrame {
    fn from(landmarks: Vec<Point2D>) -> Self {
        Self::new(landmarks)
    }
}

/// Ordered landmark frames for one video, as handed over by the pose estimator.
///
/// Deserializes from either a bare array of frames or an object carrying the
/// frames plus the source frame rate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "SequenceRepr")]
pub struct LandmarkSequence {
    pub frames: Vec<LandmarkFrame>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub frame_rate: Option<f64>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum SequenceRepr {
    Bare(Vec<LandmarkFrame>),
    Described {
        frames: Vec<LandmarkFrame>,
        #[serde(default)]
        frame_rate: Option<f64>,
    },
}

impl From<SequenceRepr> for LandmarkSequence {
    fn from(repr: SequenceRepr) -> Self {
        match repr {
            SequenceRepr::Bare(frames) => Self {
                frames,
                frame_rate: None,
            },
            SequenceRepr::Described { frames, frame_rate } => Self { frames, frame_rate },
        }
    }
}

impl LandmarkSequence {
    pub fn new(frames: Vec<LandmarkFrame>) -> Self {
        Self {
            frames,
            frame_rate: None,
        }
    }

    pub fn with_frame_rate(mut self, frame_rate: f64) -> Self {
        self.frame_rate = Some(frame_rate);
        self
    }

    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }
}
