// Hand tracking backend seam
// Provides an abstraction over hand landmark inference so the channel
// contract stays fixed while the engine behind it is swapped out

use crate::models::hand::{
    CameraFrame, HandResult, Landmark, TrackerConfig, TrackerError, TrackerResult,
    HAND_LANDMARK_COUNT,
};

/// Hand tracking backend trait.
///
/// `detect_hands` takes an optional frame because the current channel
/// contract carries no image data; a real inference backend will
/// require `Some`.
pub trait HandTrackingBackend: Send + Sync {
    /// Initialize the backend
    fn new(config: &TrackerConfig) -> TrackerResult<Self>
    where
        Self: Sized;

    /// Run detection, returning zero or more hands ordered by
    /// detection confidence
    fn detect_hands(&self, frame: Option<&CameraFrame>) -> TrackerResult<Vec<HandResult>>;

    /// Check if the backend is ready to serve detections
    fn is_initialized(&self) -> bool;

    /// Get backend info
    fn backend_info(&self) -> String;
}

// ==============================================================================
// Placeholder Backend
// ==============================================================================

/// Normalized (x, y) per landmark index, wrist through pinky tip.
const PLACEHOLDER_LANDMARKS: [(f64, f64); HAND_LANDMARK_COUNT] = [
    (0.50, 0.80), // wrist
    (0.45, 0.75), // thumb: cmc, mcp, ip, tip
    (0.40, 0.70),
    (0.35, 0.65),
    (0.30, 0.60),
    (0.45, 0.55), // index finger: mcp, pip, dip, tip
    (0.45, 0.45),
    (0.45, 0.35),
    (0.45, 0.25),
    (0.50, 0.55), // middle finger
    (0.50, 0.43),
    (0.50, 0.33),
    (0.50, 0.23),
    (0.55, 0.57), // ring finger
    (0.55, 0.47),
    (0.55, 0.37),
    (0.55, 0.27),
    (0.60, 0.60), // pinky
    (0.60, 0.52),
    (0.60, 0.44),
    (0.60, 0.36),
];

const PLACEHOLDER_HAND_SIZE: f64 = 0.15;
const PLACEHOLDER_CONFIDENCE: f64 = 0.95;

/// Stand-in backend that reports one synthetic hand with fixed
/// coordinates.
///
/// This exists so host-side code can be developed and tested against a
/// stable result shape before a real inference engine is integrated.
/// The values must stay identical across every platform the bridge
/// ships on.
pub struct PlaceholderTracker {
    config: TrackerConfig,
}

impl PlaceholderTracker {
    /// The one synthetic hand this backend ever reports.
    pub fn reference_hand() -> HandResult {
        HandResult {
            landmarks: PLACEHOLDER_LANDMARKS
                .iter()
                .map(|&(x, y)| Landmark::new(x, y))
                .collect(),
            hand_size: PLACEHOLDER_HAND_SIZE,
            confidence: PLACEHOLDER_CONFIDENCE,
        }
    }
}

impl HandTrackingBackend for PlaceholderTracker {
    fn new(config: &TrackerConfig) -> TrackerResult<Self> {
        config
            .validate()
            .map_err(TrackerError::InvalidConfig)?;

        Ok(Self {
            config: config.clone(),
        })
    }

    fn detect_hands(&self, _frame: Option<&CameraFrame>) -> TrackerResult<Vec<HandResult>> {
        // One hand, regardless of input; max_hands still caps the
        // report so config behaves the same as with a real backend
        let hands = vec![Self::reference_hand()];
        Ok(hands
            .into_iter()
            .take(self.config.max_hands as usize)
            .collect())
    }

    fn is_initialized(&self) -> bool {
        true
    }

    fn backend_info(&self) -> String {
        format!(
            "placeholder (fixed coordinates, max_hands={})",
            self.config.max_hands
        )
    }
}
