//! Console walkthrough of the catalog domain: construction, discounts,
//! descriptions, and age queries for each category.

use anyhow::Result;
use chrono::{TimeZone, Utc};
use tracing_subscriber::EnvFilter;

use portside_catalog::{Category, Product};
use portside_core::{Clock, SystemClock, ValidationError};

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init();
}

fn show(product: &Product, clock: &impl Clock) {
    println!("{}", product.describe());
    match product.age_in_days(clock) {
        Some(days) => println!("Days old: {days}"),
        None => println!("Days old: n/a"),
    }
}

fn main() -> Result<()> {
    init_tracing();
    tracing::info!("catalog demo starting");
    let clock = SystemClock;

    println!("=== Land ===");
    let mut apple = Product::new(
        Category::Land,
        "Apple",
        100,
        Utc.with_ymd_and_hms(2025, 7, 1, 0, 0, 0).unwrap(),
    )?;
    show(&apple, &clock);
    apple.apply_discount(10);
    show(&apple, &clock); // [Land] Apple costs $90

    println!("\n=== Sea ===");
    let mut tuna = Product::new(
        Category::Sea,
        "Tuna",
        200,
        Utc.with_ymd_and_hms(2025, 7, 10, 0, 0, 0).unwrap(),
    )?;
    show(&tuna, &clock);
    tuna.apply_discount(5);
    show(&tuna, &clock); // [Sea] Tuna costs $190

    println!("\n=== Digital ===");
    let mut ebook = Product::new(
        Category::Digital,
        "E-Book",
        50,
        Utc.with_ymd_and_hms(2025, 3, 1, 0, 0, 0).unwrap(),
    )?;
    show(&ebook, &clock);
    ebook.apply_discount(20);
    show(&ebook, &clock); // [Digital] E-Book costs $40

    println!("\n=== Validation ===");
    let bad = Product::new(Category::Land, "X", 10, clock.now());
    match bad {
        Err(err @ ValidationError::NameTooShort { .. }) => {
            println!("Validation failed: {err}");
        }
        other => anyhow::bail!("expected a name validation failure, got {other:?}"),
    }

    Ok(())
}
