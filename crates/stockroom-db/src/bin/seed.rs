//! # Seed Data Generator
//!
//! Populates a database with demo products for development.
//!
//! ## Usage
//! ```bash
//! # Generate 50 products (default)
//! cargo run -p stockroom-db --bin seed
//!
//! # Generate custom amount into a specific file
//! cargo run -p stockroom-db --bin seed -- --count 200 --db ./data/inventory.db
//! ```
//!
//! Roughly one product in five is generated below the low-stock threshold so
//! the warning lines show up in the inventory screen.

use std::env;
use stockroom_core::{Money, NewProduct, LOW_STOCK_THRESHOLD};
use stockroom_db::{Database, DbConfig};

/// Base product names
const NAMES: &[&str] = &[
    "Widget",
    "Gadget",
    "Sprocket",
    "Bolt",
    "Nut",
    "Washer",
    "Bracket",
    "Hinge",
    "Spring",
    "Gear",
    "Pulley",
    "Bearing",
];

/// Size variants with a price addon in cents
const SIZES: &[(&str, i64)] = &[("S", 0), ("M", 75), ("L", 150), ("XL", 300)];

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = env::args().collect();

    let mut count: usize = 50;
    let mut db_path = String::from("./stockroom_dev.db");

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--count" | "-c" => {
                if let Some(value) = args.get(i + 1) {
                    count = value.parse().unwrap_or(50);
                    i += 1;
                }
            }
            "--db" | "-d" => {
                if let Some(value) = args.get(i + 1) {
                    db_path = value.clone();
                    i += 1;
                }
            }
            "--help" | "-h" => {
                println!("Stockroom Seed Data Generator");
                println!();
                println!("Usage: seed [OPTIONS]");
                println!();
                println!("Options:");
                println!("  -c, --count <N>    Number of products to generate (default: 50)");
                println!("  -d, --db <PATH>    Database file path (default: ./stockroom_dev.db)");
                println!("  -h, --help         Show this help message");
                return Ok(());
            }
            _ => {}
        }
        i += 1;
    }

    println!("Stockroom Seed Data Generator");
    println!("=============================");
    println!("Database: {}", db_path);
    println!("Products: {}", count);
    println!();

    let db = Database::new(DbConfig::new(&db_path)).await?;

    println!("✓ Connected to database");
    println!("✓ Migrations applied");

    let existing = db.products().count().await?;
    if existing > 0 {
        println!("⚠ Database already has {} products", existing);
        println!("  Skipping seed to avoid duplicates.");
        println!("  Delete the database file to regenerate.");
        return Ok(());
    }

    let start = std::time::Instant::now();
    let mut generated = 0;
    let mut low_stock = 0;

    for seed in 0..count {
        let product = generate_product(seed);
        if product.quantity < LOW_STOCK_THRESHOLD {
            low_stock += 1;
        }

        if let Err(e) = db.products().insert(&product).await {
            eprintln!("Failed to insert {}: {}", product.name, e);
            continue;
        }

        generated += 1;
    }

    println!();
    println!(
        "✓ Generated {} products ({} low stock) in {:?}",
        generated,
        low_stock,
        start.elapsed()
    );

    db.close().await;
    Ok(())
}

/// Generates a single deterministic demo product.
fn generate_product(seed: usize) -> NewProduct {
    let name = NAMES[seed % NAMES.len()];
    let (size, price_addon) = SIZES[(seed / NAMES.len()) % SIZES.len()];
    let batch = seed / (NAMES.len() * SIZES.len());

    // Every fifth product lands below the threshold
    let quantity = if seed % 5 == 0 {
        (seed % 5) as i64 + (seed / 5 % 4) as i64
    } else {
        10 + (seed * 7 % 90) as i64
    };

    let base_cents = 99 + (seed * 37 % 1900) as i64;

    let name = if batch == 0 {
        format!("{} {}", name, size)
    } else {
        format!("{} {} #{}", name, size, batch + 1)
    };

    NewProduct {
        name,
        quantity,
        price: Money::from_cents(base_cents + price_addon),
    }
}
