/// Example program to exercise both method channels end to end
/// Run with: cargo run --example test_bridge

use nuyna_bridge::channel::{MethodCall, MethodReply};
use nuyna_bridge::core::config::BridgeConfig;
use nuyna_bridge::{NativeBridge, DETECT_HAND_LANDMARKS, HAND_CHANNEL, VIDEO_CHANNEL};
use serde_json::json;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== Native Bridge Test ===\n");

    let config = BridgeConfig::default();
    let bridge = NativeBridge::new(&config)?;

    println!("Channels:");
    for name in bridge.channel_names() {
        println!("  {}", name);
    }
    println!();

    // Landmark detection
    println!("Calling {}...", DETECT_HAND_LANDMARKS);
    let call = MethodCall::bare(DETECT_HAND_LANDMARKS);
    match bridge.dispatch(HAND_CHANNEL, &call).await {
        MethodReply::Success(value) => {
            let hands = value.as_array().map(|a| a.len()).unwrap_or(0);
            println!("  Hands detected: {}", hands);
            if let Some(hand) = value.get(0) {
                let landmarks = hand["landmarks"].as_array().map(|a| a.len()).unwrap_or(0);
                println!("  Landmarks: {}", landmarks);
                println!("  Hand size: {}", hand["handSize"]);
                println!("  Confidence: {}", hand["confidence"]);
                println!("  Wrist: {}", hand["landmarks"][0]);
            }
        }
        other => println!("  Unexpected reply: {:?}", other),
    }
    println!();

    // Unknown method probing
    println!("Calling an unregistered method...");
    let reply = bridge
        .dispatch(HAND_CHANNEL, &MethodCall::bare("startCalibration"))
        .await;
    println!("  Reply: {:?}", reply);
    println!();

    // Video export without a file, to show the structured error
    println!("Calling saveVideoWithoutMetadata with no arguments...");
    let call = MethodCall::new("saveVideoWithoutMetadata", json!({}));
    match bridge.dispatch(VIDEO_CHANNEL, &call).await {
        MethodReply::Error(e) => println!("  Error: {} ({})", e.message, e.code),
        other => println!("  Unexpected reply: {:?}", other),
    }

    Ok(())
}
