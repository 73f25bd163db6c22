use clap::{Parser, Subcommand};
use miette::{IntoDiagnostic, Result};
use mintproxy::application::engine::PaymentEngine;
use mintproxy::domain::catalog::Catalog;
use mintproxy::domain::ports::OrderStoreBox;
use mintproxy::infrastructure::in_memory::InMemoryOrderStore;
#[cfg(feature = "storage-rocksdb")]
use mintproxy::infrastructure::rocksdb::RocksDbOrderStore;
use mintproxy::interfaces::csv::order_writer::OrderWriter;
use std::fs::File;
use std::io;
use std::path::PathBuf;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to persistent database (optional). If provided, uses RocksDB.
    #[arg(long)]
    db_path: Option<PathBuf>,

    /// Catalog JSON file overriding the builtin region/country directory.
    #[arg(long)]
    catalog: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the region/country catalog
    Catalog,
    /// Create a pending order for a catalog selection
    Create {
        region: String,
        country: String,
        /// Number of proxies (clamped to 1-20; anything unparsable means 1)
        #[arg(long)]
        quantity: Option<String>,
    },
    /// Show the current state of an order
    Status { order_id: String },
    /// Confirm a verified payment and issue credentials (admin)
    Confirm { order_id: String },
    /// Delete an order (admin)
    Delete { order_id: String },
    /// List all orders, newest first (admin)
    List,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    let catalog = match &cli.catalog {
        Some(path) => {
            let file = File::open(path).into_diagnostic()?;
            Catalog::from_reader(file).into_diagnostic()?
        }
        None => Catalog::builtin(),
    };

    let store: OrderStoreBox = match cli.db_path {
        #[cfg(feature = "storage-rocksdb")]
        Some(path) => Box::new(RocksDbOrderStore::open(path).into_diagnostic()?),
        #[cfg(not(feature = "storage-rocksdb"))]
        Some(_) => {
            return Err(miette::miette!(
                "this build has no persistent storage; rebuild with --features storage-rocksdb"
            ));
        }
        None => Box::new(InMemoryOrderStore::new()),
    };

    let engine = PaymentEngine::new(catalog.clone(), store);

    match cli.command {
        Command::Catalog => {
            for (region_id, region) in catalog.iter() {
                for (country_id, listing) in &region.countries {
                    println!("{region_id},{country_id},{},{}", listing.name, listing.price);
                }
            }
        }
        Command::Create {
            region,
            country,
            quantity,
        } => {
            let requested = quantity.as_deref().and_then(|q| q.parse::<i64>().ok());
            let order = engine
                .create_order(&region, &country, requested)
                .await
                .into_diagnostic()?;
            println!(
                "{}",
                serde_json::to_string_pretty(&order).into_diagnostic()?
            );
        }
        Command::Status { order_id } => match engine.query_order(&order_id).await.into_diagnostic()? {
            Some(view) => println!("{}", serde_json::to_string_pretty(&view).into_diagnostic()?),
            None => println!("no order found for {order_id}"),
        },
        Command::Confirm { order_id } => {
            let order = engine.confirm(&order_id).await.into_diagnostic()?;
            println!(
                "{}",
                serde_json::to_string_pretty(&order).into_diagnostic()?
            );
        }
        Command::Delete { order_id } => {
            engine.delete_order(&order_id).await.into_diagnostic()?;
            println!("order {order_id} deleted");
        }
        Command::List => {
            let orders = engine.list_orders().await.into_diagnostic()?;
            let stdout = io::stdout();
            let mut writer = OrderWriter::new(stdout.lock());
            writer.write_orders(&orders).into_diagnostic()?;
        }
    }

    Ok(())
}
