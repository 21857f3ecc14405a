//! hire-check - classify input values from the command line
//!
//! Reads one value per line from stdin and writes one JSON object per line to
//! stdout describing how the portal's validators see it.

use anyhow::{Context, Result};
use hire_portal_core::validation::{
    bucket_for, is_valid_email, is_valid_philippine_phone_number, normalize_phone_number,
};
use hire_portal_core::Config;
use serde::Serialize;
use std::io::{self, BufRead, Write};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Serialize)]
struct CheckReport<'a> {
    input: &'a str,
    valid_email: bool,
    valid_phone: bool,
    canonical_phone: Option<String>,
    bucket: usize,
}

fn check(input: &str, buckets: usize) -> CheckReport<'_> {
    CheckReport {
        input,
        valid_email: is_valid_email(input),
        valid_phone: is_valid_philippine_phone_number(input),
        canonical_phone: normalize_phone_number(input),
        bucket: bucket_for(input, buckets),
    }
}

fn main() -> Result<()> {
    let config = match Config::from_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    // Initialize logging (stderr only so stdout stays machine-readable)
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level.as_str()));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    info!(
        buckets = config.hash_bucket_count,
        select_all_check = %config.select_all_check,
        "Starting hire-check"
    );

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = stdout.lock();
    let mut checked = 0usize;

    for line in stdin.lock().lines() {
        let line = line.context("Failed to read stdin")?;
        let value = line.trim_end_matches('\r');
        if value.trim().is_empty() {
            continue;
        }

        let report = check(value, config.hash_bucket_count);
        if let Err(e) = serde_json::to_writer(&mut out, &report) {
            error!("Failed to encode report: {}", e);
            return Err(e.into());
        }
        writeln!(out).context("Failed to write stdout")?;
        checked += 1;
    }

    info!(checked, "hire-check finished");
    Ok(())
}
