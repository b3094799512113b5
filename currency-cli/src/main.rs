//! Currency CLI
//!
//! Command-line interface for the Currency API.

use anyhow::Result;
use clap::{Parser, Subcommand};
use rust_decimal::Decimal;

use currency_client::CurrencyClient;
use currency_types::UpdateCurrencyRequest;

#[derive(Parser)]
#[command(name = "currency")]
#[command(author, version, about = "Currency API CLI client", long_about = None)]
struct Cli {
    /// Base URL of the Currency API
    #[arg(
        long,
        env = "CURRENCY_API_URL",
        default_value = "http://localhost:3000"
    )]
    api_url: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Currency record operations
    Currency {
        #[command(subcommand)]
        action: CurrencyCommands,
    },
    /// Convert an amount between two currencies
    Convert {
        #[arg(long)]
        from: String,
        #[arg(long)]
        to: String,
        #[arg(long)]
        amount: String,
    },
    /// Word utilities
    Words {
        #[command(subcommand)]
        action: WordCommands,
    },
    /// Check API health
    Health,
}

#[derive(Subcommand)]
enum CurrencyCommands {
    /// Get a currency by acronym
    Get { acronym: String },
    /// List all currencies
    List,
    /// Create a currency
    Create {
        /// Three-letter code, e.g. BRL
        acronym: String,
        #[arg(long)]
        name: String,
        /// Price of one unit in the reference currency
        #[arg(long)]
        price: Decimal,
    },
    /// Update the name and/or price of a currency
    Update {
        acronym: String,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        price: Option<Decimal>,
    },
    /// Delete a currency
    Delete { acronym: String },
}

#[derive(Subcommand)]
enum WordCommands {
    /// Sort words (asc, desc; anything else keeps the input order)
    Sort {
        #[arg(long, default_value = "asc")]
        order: String,
        #[arg(required = true)]
        words: Vec<String>,
    },
    /// Count the vowels of each word
    Vowels {
        #[arg(required = true)]
        words: Vec<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let client = CurrencyClient::new(&cli.api_url);

    match cli.command {
        Commands::Health => {
            let healthy = client.health().await?;
            if healthy {
                println!("✓ API is healthy");
            } else {
                println!("✗ API is not healthy");
                std::process::exit(1);
            }
        }

        Commands::Currency { action } => match action {
            CurrencyCommands::Get { acronym } => match client.get_currency(&acronym).await? {
                Some(currency) => println!("{}", serde_json::to_string_pretty(&currency)?),
                None => {
                    println!("✗ No currency {acronym}");
                    std::process::exit(1);
                }
            },
            CurrencyCommands::List => {
                let currencies = client.list_currencies().await?;
                println!("{}", serde_json::to_string_pretty(&currencies)?);
            }
            CurrencyCommands::Create {
                acronym,
                name,
                price,
            } => {
                let id = client.create_currency(&acronym, &name, price).await?;
                println!("{id}");
            }
            CurrencyCommands::Update {
                acronym,
                name,
                price,
            } => {
                let req = UpdateCurrencyRequest {
                    name,
                    dolar_price_reference: price,
                };
                if client.update_currency(&acronym, &req).await? {
                    println!("✓ {acronym} updated");
                } else {
                    println!("✗ {acronym} not modified");
                    std::process::exit(1);
                }
            }
            CurrencyCommands::Delete { acronym } => {
                client.delete_currency(&acronym).await?;
                println!("✓ {acronym} deleted");
            }
        },

        Commands::Convert { from, to, amount } => {
            let converted = client.convert(&from, &to, &amount).await?;
            println!("{converted}");
        }

        Commands::Words { action } => match action {
            WordCommands::Sort { order, words } => {
                let sorted = client.sort_words(words, &order).await?;
                println!("{}", serde_json::to_string_pretty(&sorted)?);
            }
            WordCommands::Vowels { words } => {
                let counts = client.count_vowels(words).await?;
                println!("{}", serde_json::to_string_pretty(&counts)?);
            }
        },
    }

    Ok(())
}
