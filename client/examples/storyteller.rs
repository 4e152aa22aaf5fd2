use anyhow::Result;
use rotom_client::{Client, ClientConfig, ContentKind, GenerateOptions};
use rotom_dex::markdown;

#[tokio::main]
async fn main() -> Result<()> {
    let pokemon = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "bulbasaur".to_string());

    let client = Client::with_config(ClientConfig::from_env())?;
    let options = GenerateOptions {
        tone: std::env::var("ROTOM_TONE").ok(),
        max_length: Some(400),
        format: Some("markdown".to_string()),
        ..GenerateOptions::default()
    };

    println!("Generating a story for {}...", pokemon);
    let story = client
        .generate(ContentKind::Story, &pokemon, &options)
        .await?;

    println!("\n# {}\n", story.title);
    if std::env::var("ROTOM_HTML").is_ok() {
        println!("{}", markdown::to_html(&story.content));
    } else {
        println!("{}", story.content);
    }

    Ok(())
}
