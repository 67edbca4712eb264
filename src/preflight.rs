use anyhow::Result;
use colored::Colorize;

use crate::aws::client::KinesisClient;
use crate::region;
use crate::region::RegionSpec;

/// Account-level service limits, as seen by the new client.
#[derive(Debug, PartialEq)]
pub struct LimitsReport {
    pub shard_limit: i32,
    pub open_shard_count: i32,
    pub on_demand_stream_count: i32,
    pub on_demand_stream_count_limit: i32,
}

/// Drives a DescribeLimits call through the handle, proving the credentials
/// and region actually work end to end.
pub async fn check_limits<K: KinesisClient>(client: &K) -> Result<LimitsReport> {
    let output = client.describe_limits().await?;

    Ok(LimitsReport {
        shard_limit: output.shard_limit(),
        open_shard_count: output.open_shard_count(),
        on_demand_stream_count: output.on_demand_stream_count(),
        on_demand_stream_count_limit: output.on_demand_stream_count_limit(),
    })
}

/// Collects every stream name visible to the handle, following pagination
/// tokens until exhausted.
pub async fn stream_names<K: KinesisClient>(client: &K) -> Result<Vec<String>> {
    let mut names: Vec<String> = Vec::new();
    let mut next_token: Option<String> = None;

    loop {
        let output = client.list_streams(next_token.as_deref()).await?;

        names.extend(output.stream_names().iter().cloned());

        match output.next_token() {
            Some(token) => next_token = Some(token.to_string()),
            None => break,
        }
    }

    Ok(names)
}

pub fn print_limits(report: &LimitsReport, no_color: bool) {
    println!("{}", header("Account limits", no_color));
    println!("  shard limit:              {}", report.shard_limit);
    println!("  open shards:              {}", report.open_shard_count);
    println!("  on-demand streams:        {}", report.on_demand_stream_count);
    println!(
        "  on-demand stream limit:   {}",
        report.on_demand_stream_count_limit
    );
}

pub fn print_streams(names: &[String], no_color: bool) {
    println!("{}", header(&format_nb_streams(names.len()), no_color));

    for name in names {
        println!("{}", name);
    }
}

pub fn print_regions() {
    for region in region::known_regions() {
        println!(
            "{:<16} {:<28} {}",
            region.id,
            region.display_name,
            region.endpoint()
        );
    }
}

pub fn print_target(region: &RegionSpec, endpoint_override: Option<&str>, no_color: bool) {
    let endpoint = endpoint_override
        .map(str::to_string)
        .unwrap_or_else(|| region.endpoint());

    let status = if no_color {
        "ok".to_string()
    } else {
        "ok".green().to_string()
    };

    println!("{} {} ({})", status, region.display_name, endpoint);
}

pub fn format_nb_streams(count: usize) -> String {
    match count {
        1 => "1 stream visible".to_string(),
        _ => format!("{} streams visible", count),
    }
}

fn header(text: &str, no_color: bool) -> String {
    if no_color {
        text.to_string()
    } else {
        text.bold().to_string()
    }
}
