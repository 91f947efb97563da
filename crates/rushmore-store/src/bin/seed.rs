//! # Seed Order Generator
//!
//! Appends sample orders to an order file for development.
//!
//! ## Usage
//! ```bash
//! # Append 25 orders (default) to ./pizza_orders.json
//! cargo run -p rushmore-store --bin seed
//!
//! # Custom amount and file
//! cargo run -p rushmore-store --bin seed -- --count 200 --file ./demo_orders.json
//!
//! # Stats as JSON, for scripts
//! cargo run -p rushmore-store --bin seed -- --json
//! ```
//!
//! ## Generated Orders
//! The output is deterministic: order `n` picks its pizza, customer, unit
//! and quantity from `n`, and is stamped one minute after order `n - 1`.
//! Every order goes through the same session and pricing code the console
//! uses, so the file looks exactly like a day of real orders.

use std::env;

use chrono::{Duration, NaiveDate, NaiveDateTime};
use rushmore_core::session::Step;
use rushmore_core::{Catalog, OrderRecord, OrderSession};
use rushmore_store::{FileBackend, OrderStore, DEFAULT_ORDERS_FILE};

/// Customers for sample data.
const CUSTOMERS: &[&str] = &[
    "ada lovelace",
    "grace hopper",
    "alan turing",
    "katherine johnson",
    "edsger dijkstra",
    "barbara liskov",
    "donald knuth",
    "margaret hamilton",
];

/// Quantities cycle through every discount tier.
const BOX_QUANTITIES: &[u32] = &[1, 2, 4, 5, 7, 9, 10, 12];
const SLICE_QUANTITIES: &[u32] = &[1, 2, 3, 6, 8, 16];

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = env::args().collect();

    let mut count: usize = 25;
    let mut path = String::from(DEFAULT_ORDERS_FILE);
    let mut json = false;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--count" | "-c" => {
                if i + 1 < args.len() {
                    count = args[i + 1].parse().unwrap_or(25);
                    i += 1;
                }
            }
            "--file" | "-f" => {
                if i + 1 < args.len() {
                    path = args[i + 1].clone();
                    i += 1;
                }
            }
            "--json" => json = true,
            "--help" | "-h" => {
                println!("RushMore Pizza Seed Order Generator");
                println!();
                println!("Usage: seed [OPTIONS]");
                println!();
                println!("Options:");
                println!("  -c, --count <N>     Number of orders to append (default: 25)");
                println!("  -f, --file <PATH>   Order file path (default: ./{DEFAULT_ORDERS_FILE})");
                println!("      --json          Print the final stats as JSON");
                println!("  -h, --help          Show this help message");
                return Ok(());
            }
            _ => {}
        }
        i += 1;
    }

    println!("RushMore Pizza Seed Order Generator");
    println!("===================================");
    println!("File:   {}", path);
    println!("Orders: {}", count);
    println!();

    let catalog = Catalog::standard();
    let mut store = OrderStore::new(FileBackend::new(&path));
    let start = seed_start();

    let mut written = 0;
    for n in 0..count {
        let created_at = start + Duration::minutes(n as i64);
        let record = match sample_order(&catalog, n, created_at) {
            Ok(record) => record,
            Err(e) => {
                eprintln!("Skipping order {}: {}", n, e);
                continue;
            }
        };

        let outcome = store.append(&record)?;
        if outcome.recovered_from_corrupt {
            println!("⚠ Existing file was corrupt and has been replaced");
        }
        written += 1;
    }

    let stats = store.stats()?;
    if json {
        println!("{}", serde_json::to_string_pretty(&stats)?);
        return Ok(());
    }

    println!("✓ Appended {} orders", written);
    println!("  Orders in file: {}", stats.total_orders);
    println!(
        "  Most ordered:   {} ({} times)",
        stats.most_ordered.name, stats.most_ordered.count
    );
    println!("  Revenue:        {}", stats.total_revenue);

    Ok(())
}

/// 2024-01-01 11:00:00, the first seeded timestamp.
fn seed_start() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 1, 1)
        .and_then(|d| d.and_hms_opt(11, 0, 0))
        .unwrap_or_default()
}

/// Runs one scripted order through a session.
fn sample_order(
    catalog: &Catalog,
    n: usize,
    created_at: NaiveDateTime,
) -> Result<OrderRecord, Box<dyn std::error::Error>> {
    let item = &catalog.items()[n % catalog.items().len()];
    let customer = CUSTOMERS[(n * 3) % CUSTOMERS.len()];

    let (unit, quantity) = if n % 3 == 2 {
        ("S", SLICE_QUANTITIES[(n / 3) % SLICE_QUANTITIES.len()])
    } else {
        ("B", BOX_QUANTITIES[(n * 5) % BOX_QUANTITIES.len()])
    };

    let mut session = OrderSession::new(item);
    advanced(session.submit_name(customer)?)?;
    advanced(session.submit_unit(unit)?)?;
    advanced(session.submit_quantity(&quantity.to_string())?)?;

    session.price()?;
    Ok(session.record(created_at)?)
}

fn advanced(step: Step) -> Result<(), Box<dyn std::error::Error>> {
    match step {
        Step::Advanced => Ok(()),
        other => Err(format!("scripted input rejected: {other:?}").into()),
    }
}
