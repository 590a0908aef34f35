use fieldgen::{FieldContext, FieldHandler, TextField};
use serde_json::json;
use std::env;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    match dotenv::dotenv() {
        Ok(_) => log::info!("✅ .env file loaded successfully"),
        Err(_) => log::warn!("⚠️  No .env file found, using system environment variables"),
    }

    fieldgen::logger::init_with_config(
        fieldgen::logger::LoggerConfig::development()
            .with_level(fieldgen::logger::LogLevel::Debug),
    )?;

    log::info!("🔍 Checking backend environment...");

    let endpoint = match env::var("FIELDGEN_API_ENDPOINT") {
        Ok(endpoint) => {
            log::info!("FIELDGEN_API_ENDPOINT: {}", endpoint);
            endpoint
        }
        Err(_) => {
            log::error!("❌ FIELDGEN_API_ENDPOINT not set");
            return Err("FIELDGEN_API_ENDPOINT is required".into());
        }
    };

    let api_key = match env::var("FIELDGEN_API_KEY") {
        Ok(key) => {
            log::info!("✅ API key found ({} chars)", key.len());
            key
        }
        Err(_) => {
            log::error!("❌ FIELDGEN_API_KEY not set");
            return Err("FIELDGEN_API_KEY is required".into());
        }
    };

    let prompt = env::args()
        .nth(1)
        .unwrap_or_else(|| "Write a one-line greeting.".to_string());

    let params = json!({
        "apiEndpoint": endpoint,
        "apiKey": api_key,
        "prompt": prompt,
        "modelId": {"value": "gemini-2.5-flash"},
        "thinkingLevel": {"value": "LOW"},
    });

    let context = FieldContext {
        log_id: Some("demo".into()),
        ..Default::default()
    };

    let output = TextField::new().execute(params, &context).await;
    println!("{}", serde_json::to_string_pretty(&output)?);

    Ok(())
}
