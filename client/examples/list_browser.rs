use anyhow::Result;
use rotom_client::{Client, ClientConfig, ListAccumulator};

const PAGE_SIZE: u32 = 20;
const MAX_PAGES: u32 = 5;

#[tokio::main]
async fn main() -> Result<()> {
    let client = Client::with_config(ClientConfig::from_env())?;
    let mut listing = ListAccumulator::new();

    for page_index in 0..MAX_PAGES {
        let page = client
            .pokemon_list(PAGE_SIZE, page_index * PAGE_SIZE)
            .await?;
        let appended = listing.merge(&page);
        println!(
            "Page {}: {} new, {} collected (of {:?})",
            page_index + 1,
            appended,
            listing.len(),
            listing.total(),
        );

        if listing.is_complete() {
            break;
        }
    }

    for entry in listing.entries() {
        println!("  {}", entry.name);
    }

    Ok(())
}
