/// Example program to save a video file into the photo library
/// Run with: cargo run --example test_video_export -- /path/to/clip.mp4

use nuyna_bridge::channel::{MethodCall, MethodReply};
use nuyna_bridge::core::config::BridgeConfig;
use nuyna_bridge::{NativeBridge, SAVE_VIDEO_WITHOUT_METADATA, VIDEO_CHANNEL};
use serde_json::json;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== Video Export Test ===\n");

    let file_path = match std::env::args().nth(1) {
        Some(path) => path,
        None => {
            eprintln!("Usage: cargo run --example test_video_export -- <video file>");
            std::process::exit(1);
        }
    };

    let config = BridgeConfig::default();
    let bridge = NativeBridge::new(&config)?;

    println!("Saving: {}", file_path);
    let call = MethodCall::new(SAVE_VIDEO_WITHOUT_METADATA, json!({ "filePath": file_path }));

    match bridge.dispatch(VIDEO_CHANNEL, &call).await {
        MethodReply::Success(value) => {
            println!("  Saved: {}", value);
            println!("  The source file is untouched; the library holds a copy.");
        }
        MethodReply::Error(e) => {
            println!("  Failed: {} ({})", e.message, e.code);
        }
        MethodReply::NotImplemented => {
            println!("  Video export is not available on this build.");
        }
    }

    Ok(())
}
