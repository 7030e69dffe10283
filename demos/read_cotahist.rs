// ============================================================================
// Read COTAHIST Example
// ============================================================================
//
// Usage:
//   cargo run --example read_cotahist --features logging -- COTAHIST_D02012020.TXT
//   cat COTAHIST_D02012020.TXT | cargo run --example read_cotahist --features logging
//
// Set RUST_LOG=cotahist=debug to see header/trailer events.
// ============================================================================

use cotahist::prelude::*;
use rust_decimal::Decimal;
use std::collections::BTreeMap;
use std::io::{self, BufRead};
use std::sync::Arc;

fn show(value: Option<Decimal>) -> String {
    value.map(|v| v.to_string()).unwrap_or_else(|| "-".to_string())
}

fn summarize<R: BufRead>(reader: HistoricalQuotesReader<R>) {
    let mut reader = reader.with_event_handler(Arc::new(LoggingEventHandler));
    let mut by_market: BTreeMap<String, u64> = BTreeMap::new();

    for bulletin in reader.by_ref() {
        *by_market.entry(bulletin.market_type.to_string()).or_default() += 1;

        if bulletin.market_type.is_option() {
            println!(
                "{} {:<12} strike={:>10} maturity={}",
                bulletin.exchange_date,
                bulletin.ticker,
                show(bulletin.strike_price),
                bulletin
                    .maturity_date
                    .map(|d| d.to_string())
                    .unwrap_or_default(),
            );
        } else {
            println!(
                "{} {:<12} open={:>10} close={:>10} volume={}",
                bulletin.exchange_date,
                bulletin.ticker,
                show(bulletin.quote.open),
                show(bulletin.quote.close),
                show(bulletin.total_volume),
            );
        }
    }

    let stats = reader.stats();
    println!("\n=== Summary ===");
    println!("Lines read: {}", stats.lines_read);
    println!("Records:    {}", stats.records);
    println!("Skipped:    {}", stats.skipped);
    for (market, count) in &by_market {
        println!("  market {}: {}", market, count);
    }
}

fn main() -> Result<(), ReadError> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("cotahist=info")),
        )
        .init();

    match std::env::args().nth(1) {
        Some(path) => summarize(HistoricalQuotesReader::open(path)?),
        None => summarize(HistoricalQuotesReader::new(io::stdin().lock())),
    }

    Ok(())
}
