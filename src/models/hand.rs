// Data models for hand tracking

use serde::{Deserialize, Serialize};

/// Number of landmarks in a single hand result.
pub const HAND_LANDMARK_COUNT: usize = 21;

// ==============================================================================
// Landmark
// ==============================================================================

/// A normalized 2D hand landmark.
///
/// Coordinates are relative to image width/height, each in [0, 1].
/// On the wire a landmark is a two-element array `[x, y]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "[f64; 2]", into = "[f64; 2]")]
pub struct Landmark {
    pub x: f64,
    pub y: f64,
}

impl Landmark {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn is_normalized(&self) -> bool {
        (0.0..=1.0).contains(&self.x) && (0.0..=1.0).contains(&self.y)
    }
}

impl From<[f64; 2]> for Landmark {
    fn from(pair: [f64; 2]) -> Self {
        Self {
            x: pair[0],
            y: pair[1],
        }
    }
}

impl From<Landmark> for [f64; 2] {
    fn from(landmark: Landmark) -> Self {
        [landmark.x, landmark.y]
    }
}

/// Hand landmark indices (21 total). The index encodes anatomical
/// meaning, so landmark order in a result is significant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum HandLandmark {
    Wrist = 0,
    ThumbCmc = 1,
    ThumbMcp = 2,
    ThumbIp = 3,
    ThumbTip = 4,
    IndexFingerMcp = 5,
    IndexFingerPip = 6,
    IndexFingerDip = 7,
    IndexFingerTip = 8,
    MiddleFingerMcp = 9,
    MiddleFingerPip = 10,
    MiddleFingerDip = 11,
    MiddleFingerTip = 12,
    RingFingerMcp = 13,
    RingFingerPip = 14,
    RingFingerDip = 15,
    RingFingerTip = 16,
    PinkyMcp = 17,
    PinkyPip = 18,
    PinkyDip = 19,
    PinkyTip = 20,
}

// ==============================================================================
// Hand Result
// ==============================================================================

/// One detected hand: 21 landmarks in anatomical order plus two scalar
/// metrics. Field names follow the channel wire format.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HandResult {
    pub landmarks: Vec<Landmark>,
    pub hand_size: f64,
    pub confidence: f64,
}

impl HandResult {
    /// Landmark for a named anatomical point.
    pub fn landmark(&self, which: HandLandmark) -> Option<&Landmark> {
        self.landmarks.get(which as usize)
    }

    /// True when the result has the full landmark set and every value
    /// is inside its documented range.
    pub fn is_well_formed(&self) -> bool {
        self.landmarks.len() == HAND_LANDMARK_COUNT
            && self.landmarks.iter().all(Landmark::is_normalized)
            && (0.0..=1.0).contains(&self.confidence)
    }
}

// ==============================================================================
// Camera Frame
// ==============================================================================

/// A raw camera frame handed to a tracking backend.
///
/// The current channel contract does not carry image data, so handlers
/// pass `None` at the backend seam; the type exists for the real
/// inference integration.
#[derive(Debug, Clone)]
pub struct CameraFrame {
    pub data: Vec<u8>,
    pub width: u32,
    pub height: u32,
}

// ==============================================================================
// Configuration
// ==============================================================================

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TrackerConfig {
    /// Maximum number of hands to report per frame
    pub max_hands: u32,
    /// Minimum confidence for detection (0.0-1.0)
    pub min_detection_confidence: f32,
    /// Minimum confidence for tracking (0.0-1.0)
    pub min_tracking_confidence: f32,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            max_hands: 2,
            min_detection_confidence: 0.5,
            min_tracking_confidence: 0.5,
        }
    }
}

impl TrackerConfig {
    pub fn validate(&self) -> Result<(), String> {
        if self.max_hands == 0 {
            return Err("max_hands must be at least 1".to_string());
        }
        for (name, value) in [
            ("min_detection_confidence", self.min_detection_confidence),
            ("min_tracking_confidence", self.min_tracking_confidence),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(format!("{} must be between 0.0 and 1.0, got {}", name, value));
            }
        }
        Ok(())
    }
}

// ==============================================================================
// Error Types
// ==============================================================================

#[derive(Debug, thiserror::Error)]
pub enum TrackerError {
    #[error("Tracking backend not initialized")]
    NotInitialized,

    #[error("Invalid frame: {0}")]
    InvalidFrame(String),

    #[error("Inference failed: {0}")]
    InferenceFailed(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

pub type TrackerResult<T> = Result<T, TrackerError>;
