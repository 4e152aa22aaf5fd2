use anyhow::Result;
use rotom_client::{Client, ClientConfig};
use rotom_dex::display::format_stat_value;
use rotom_dex::{StatAttribute, compare};

const BAR_WIDTH: usize = 24;

#[tokio::main]
async fn main() -> Result<()> {
    let names: Vec<String> = std::env::args().skip(1).collect();
    let names = if names.is_empty() {
        vec!["bulbasaur".to_string(), "charmander".to_string()]
    } else {
        names
    };

    let client = Client::with_config(ClientConfig::from_env())?;

    let mut pokemons = Vec::new();
    for name in &names {
        println!("Fetching {}...", name);
        pokemons.push(client.pokemon(name).await?);
    }

    let comparison = compare(&pokemons)?;
    let stats = &comparison.stat_comparison;

    for attr in StatAttribute::ALL {
        println!("\n{}", attr.label());

        let normalized = match attr {
            StatAttribute::Height => &stats.normalized_values.height,
            StatAttribute::Weight => &stats.normalized_values.weight,
            StatAttribute::BaseExperience => &stats.normalized_values.base_experience,
        };
        let highest = stats.highest[attr.key()];
        let lowest = stats.lowest[attr.key()];

        for pokemon in &comparison.pokemons {
            let value = attr.value_of(pokemon);
            let filled = (normalized[&pokemon.id] * BAR_WIDTH as f64).round() as usize;
            let marker = if pokemon.id == highest {
                " (highest)"
            } else if pokemon.id == lowest {
                " (lowest)"
            } else {
                ""
            };

            println!(
                "  {:>12} {:>8} [{}{}]{}",
                pokemon.name,
                format_stat_value(attr, value),
                "#".repeat(filled),
                " ".repeat(BAR_WIDTH - filled),
                marker,
            );
        }
    }

    println!("\nType matchups");
    for pokemon in &comparison.pokemons {
        let eff = &comparison.type_effectiveness[&pokemon.id];
        println!(
            "  {:>12}  strong vs: {}  weak vs: {}",
            pokemon.name,
            eff.strong_against.join(", "),
            eff.weak_against.join(", "),
        );
    }

    Ok(())
}
