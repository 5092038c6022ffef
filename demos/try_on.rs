use fashionai::{
    logger::{self, LoggerConfig},
    save_image, AspectRatio, GeminiConfig, GenerationRequest, ImagePayload, OperationMode,
    Resolution, StudioClient,
};
use std::env;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    match dotenv::dotenv() {
        Ok(_) => log::info!("✅ .env file loaded"),
        Err(_) => log::warn!("⚠️  No .env file found"),
    }
    logger::init_with_config(LoggerConfig::development().with_module("try_on"))?;

    let model_photo = env::args().nth(1).unwrap_or_else(|| "model.jpg".to_string());
    let garment_photo = env::args().nth(2).unwrap_or_else(|| "garment.png".to_string());

    let client = StudioClient::new(GeminiConfig::from_env())?;
    let request = GenerationRequest::new(
        OperationMode::TryOn,
        vec![
            ImagePayload::from_file(&model_photo)?,
            ImagePayload::from_file(&garment_photo)?,
        ],
    )
    .with_user_text("Soft smile, looking at the camera")
    .with_presets(["minimalist concrete studio, neutral tones"])
    .with_strict(true)
    .with_format(AspectRatio::Portrait, Resolution::High);

    let result = client.generate(request).await;
    match result.image_data_uri() {
        Some(data_uri) => {
            let path = save_image(data_uri, ".", OperationMode::TryOn)?;
            println!("Saved {}", path.display());
            println!("{}", result.composed_prompt().unwrap_or_default());
        }
        None => println!("Generation failed: {}", result.error().unwrap_or_default()),
    }

    Ok(())
}
