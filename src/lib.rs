pub mod channel;
pub mod core;
pub mod models;
pub mod platform;

use crate::channel::{ChannelError, MethodCall, MethodChannel, MethodHandler, MethodReply};
use crate::core::config::BridgeConfig;
use crate::core::hand_tracker::{HandTrackingBackend, PlaceholderTracker};
use crate::core::video_export::VideoExporter;
use crate::platform::PhotoLibrary;
use async_trait::async_trait;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::Arc;

/// Channel carrying hand landmark detection calls.
pub const HAND_CHANNEL: &str = "com.nuyna.mediapipe/hands";
/// Channel carrying video export calls.
pub const VIDEO_CHANNEL: &str = "com.uteshpa.nuyna/video_saver";

pub const DETECT_HAND_LANDMARKS: &str = "detectHandLandmarks";
pub const SAVE_VIDEO_WITHOUT_METADATA: &str = "saveVideoWithoutMetadata";

/// Answers `detectHandLandmarks` with whatever the tracking backend
/// reports, as a JSON array of hand results.
struct DetectHandLandmarksHandler {
    backend: Arc<dyn HandTrackingBackend>,
}

#[async_trait]
impl MethodHandler for DetectHandLandmarksHandler {
    async fn handle(&self, _call: &MethodCall) -> MethodReply {
        // Arguments are ignored: the channel contract carries no image yet
        match self.backend.detect_hands(None) {
            Ok(hands) => match serde_json::to_value(&hands) {
                Ok(value) => MethodReply::Success(value),
                Err(e) => MethodReply::Error(ChannelError::new("INTERNAL", e.to_string())),
            },
            Err(e) => MethodReply::Error(ChannelError::new("DETECTION_FAILED", e.to_string())),
        }
    }
}

/// Answers `saveVideoWithoutMetadata`. The host only needs a success
/// flag, so the asset record stays on this side.
struct SaveVideoHandler {
    exporter: VideoExporter,
}

#[async_trait]
impl MethodHandler for SaveVideoHandler {
    async fn handle(&self, call: &MethodCall) -> MethodReply {
        match self.exporter.save_without_metadata(&call.arguments).await {
            Ok(_asset) => MethodReply::Success(Value::Bool(true)),
            Err(e) => MethodReply::Error(e.into()),
        }
    }
}

/// The bridge's whole surface: both method channels, routed by name.
///
/// The host shell owns the transport; it hands each incoming call to
/// `dispatch` and forwards the single reply back to the caller.
pub struct NativeBridge {
    channels: HashMap<String, MethodChannel>,
}

impl NativeBridge {
    /// Build the bridge from configuration, using the placeholder
    /// tracking backend and this platform's photo library.
    pub fn new(config: &BridgeConfig) -> Result<Self, Box<dyn std::error::Error>> {
        config.validate()?;

        let backend = Arc::new(PlaceholderTracker::new(&config.tracker)?);
        let library = platform::system_photo_library(&config.library_path)?;

        Ok(Self::with_parts(backend, library))
    }

    /// Build the bridge from explicit collaborators.
    pub fn with_parts(
        backend: Arc<dyn HandTrackingBackend>,
        library: Arc<dyn PhotoLibrary>,
    ) -> Self {
        let mut hand = MethodChannel::new(HAND_CHANNEL);
        hand.register(
            DETECT_HAND_LANDMARKS,
            Arc::new(DetectHandLandmarksHandler { backend }),
        );

        let mut video = MethodChannel::new(VIDEO_CHANNEL);
        video.register(
            SAVE_VIDEO_WITHOUT_METADATA,
            Arc::new(SaveVideoHandler {
                exporter: VideoExporter::new(library),
            }),
        );

        let mut channels = HashMap::new();
        for channel in [hand, video] {
            channels.insert(channel.name().to_string(), channel);
        }

        Self { channels }
    }

    pub fn channel(&self, name: &str) -> Option<&MethodChannel> {
        self.channels.get(name)
    }

    pub fn channel_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.channels.keys().map(String::as_str).collect();
        names.sort();
        names
    }

    /// Route a host call addressed to a channel. A channel this bridge
    /// does not carry gets the same reply as an unknown method.
    pub async fn dispatch(&self, channel: &str, call: &MethodCall) -> MethodReply {
        match self.channels.get(channel) {
            Some(c) => c.invoke(call).await,
            None => MethodReply::NotImplemented,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::FolderPhotoLibrary;
    use serde_json::json;
    use std::path::PathBuf;

    fn bridge_with_library(tag: &str) -> (NativeBridge, FolderPhotoLibrary) {
        let root = std::env::temp_dir().join(format!("nuyna_test_bridge_{}", tag));
        let _ = std::fs::remove_dir_all(&root);

        let backend =
            Arc::new(PlaceholderTracker::new(&Default::default()).expect("valid config"));
        let library = Arc::new(FolderPhotoLibrary::new(&root).expect("library root"));
        let assets = FolderPhotoLibrary::new(&root).expect("library view");

        (NativeBridge::with_parts(backend, library), assets)
    }

    #[tokio::test]
    async fn test_detect_hand_landmarks_reply_matches_contract() {
        let (bridge, _) = bridge_with_library("landmarks");

        // Arguments, valid or junk, never change the reply
        let call = MethodCall::new(DETECT_HAND_LANDMARKS, json!({"anything": [1, 2, 3]}));
        let reply = bridge.dispatch(HAND_CHANNEL, &call).await;

        let expected = json!([{
            "landmarks": [
                [0.5, 0.8], [0.45, 0.75], [0.4, 0.7], [0.35, 0.65], [0.3, 0.6],
                [0.45, 0.55], [0.45, 0.45], [0.45, 0.35], [0.45, 0.25],
                [0.5, 0.55], [0.5, 0.43], [0.5, 0.33], [0.5, 0.23],
                [0.55, 0.57], [0.55, 0.47], [0.55, 0.37], [0.55, 0.27],
                [0.6, 0.6], [0.6, 0.52], [0.6, 0.44], [0.6, 0.36]
            ],
            "handSize": 0.15,
            "confidence": 0.95
        }]);
        assert_eq!(reply, MethodReply::Success(expected));
    }

    #[tokio::test]
    async fn test_unknown_method_is_not_implemented() {
        let (bridge, _) = bridge_with_library("unknown_method");

        let reply = bridge
            .dispatch(HAND_CHANNEL, &MethodCall::bare("startCalibration"))
            .await;
        assert_eq!(reply, MethodReply::NotImplemented);

        let reply = bridge
            .dispatch(VIDEO_CHANNEL, &MethodCall::bare("deleteVideo"))
            .await;
        assert_eq!(reply, MethodReply::NotImplemented);
    }

    #[tokio::test]
    async fn test_unknown_channel_is_not_implemented() {
        let (bridge, _) = bridge_with_library("unknown_channel");

        let reply = bridge
            .dispatch("com.nuyna.mediapipe/face", &MethodCall::bare(DETECT_HAND_LANDMARKS))
            .await;
        assert_eq!(reply, MethodReply::NotImplemented);
    }

    #[tokio::test]
    async fn test_save_video_requires_file_path() {
        let (bridge, assets) = bridge_with_library("save_invalid");

        let call = MethodCall::new(SAVE_VIDEO_WITHOUT_METADATA, json!({}));
        let reply = bridge.dispatch(VIDEO_CHANNEL, &call).await;

        assert_eq!(reply.error_code(), Some("INVALID_ARGUMENT"));
        assert_eq!(assets.assets().unwrap().len(), 0);
    }

    #[tokio::test]
    async fn test_save_video_reports_missing_file() {
        let (bridge, assets) = bridge_with_library("save_missing");

        let call = MethodCall::new(
            SAVE_VIDEO_WITHOUT_METADATA,
            json!({"filePath": "/nuyna/no/such/clip.mp4"}),
        );
        let reply = bridge.dispatch(VIDEO_CHANNEL, &call).await;

        assert_eq!(reply.error_code(), Some("FILE_NOT_FOUND"));
        assert_eq!(assets.assets().unwrap().len(), 0);
    }

    #[tokio::test]
    async fn test_save_video_end_to_end() {
        let (bridge, assets) = bridge_with_library("save_ok");

        let source = std::env::temp_dir().join("nuyna_test_bridge_clip.mp4");
        std::fs::write(&source, b"fake video bytes").unwrap();

        let call = MethodCall::new(
            SAVE_VIDEO_WITHOUT_METADATA,
            json!({"filePath": source.to_str().unwrap()}),
        );
        let reply = bridge.dispatch(VIDEO_CHANNEL, &call).await;

        assert_eq!(reply, MethodReply::Success(Value::Bool(true)));

        let imported = assets.assets().unwrap();
        assert_eq!(imported.len(), 1, "exactly one new asset");
        assert_eq!(
            std::fs::read(&imported[0]).unwrap(),
            b"fake video bytes"
        );
        // Source survives the save
        assert_eq!(std::fs::read(&source).unwrap(), b"fake video bytes");

        let _ = std::fs::remove_file(&source);
        let _ = std::fs::remove_dir_all(PathBuf::from(assets.root()));
    }

    #[tokio::test]
    async fn test_bridge_carries_both_channels() {
        let (bridge, _) = bridge_with_library("channels");

        assert_eq!(bridge.channel_names(), vec![HAND_CHANNEL, VIDEO_CHANNEL]);
        assert!(bridge
            .channel(HAND_CHANNEL)
            .unwrap()
            .has_method(DETECT_HAND_LANDMARKS));
        assert!(bridge
            .channel(VIDEO_CHANNEL)
            .unwrap()
            .has_method(SAVE_VIDEO_WITHOUT_METADATA));
    }
}
