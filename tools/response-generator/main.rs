use clap::Parser;
use flowquery::taxonomy::{FlowDirection, FlowTarget};
use rand::Rng;
use rand::rngs::ThreadRng;
use serde_json::{Value, json};
use std::fs;

/// A CLI tool to generate mock top-N flow aggregation responses
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// The path to write the generated JSON file to
    #[arg(short, long, default_value = "generated_response.json")]
    output: String,

    /// The flow target the buckets are keyed by
    #[arg(long, default_value = "source")]
    target: FlowTarget,

    /// The flow direction, which selects the bucket aggregation name
    #[arg(long, default_value = "uniDirectional")]
    direction: FlowDirection,

    /// The minimum number of buckets to generate
    #[arg(long, default_value_t = 0)]
    min: usize,

    /// The maximum number of buckets to generate
    #[arg(long, default_value_t = 20)]
    max: usize,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let mut rng = rand::rng();

    if cli.min > cli.max {
        eprintln!(
            "Error: --min ({}) cannot be greater than --max ({})",
            cli.min, cli.max
        );
        std::process::exit(1);
    }

    let count = rng.random_range(cli.min..=cli.max);
    let mut buckets: Vec<Value> = (0..count)
        .map(|_| generate_bucket(&mut rng, cli.target))
        .collect();
    // The engine returns buckets already ordered; mimic a bytes-desc sort.
    buckets.sort_by_key(|b| std::cmp::Reverse(b["bytes"]["value"].as_u64().unwrap_or(0)));

    let aggregation_key = match cli.direction {
        FlowDirection::UniDirectional => "top_uni_flow",
        FlowDirection::BiDirectional => "top_bi_flow",
    };
    let total = count + rng.random_range(0..=count * 3);
    let response = json!({
        "took": rng.random_range(1..50),
        "timed_out": false,
        "hits": { "max_score": null, "hits": [] },
        "aggregations": {
            "top_n_flow_count": { "value": total },
            aggregation_key: {
                "doc_count_error_upper_bound": 0,
                "sum_other_doc_count": 0,
                "buckets": buckets,
            },
        },
    });

    fs::write(&cli.output, serde_json::to_string_pretty(&response)?)?;
    println!(
        "Generated {} '{}' bucket(s) for target '{}' into '{}'",
        count, aggregation_key, cli.target, cli.output
    );

    Ok(())
}

fn generate_bucket(rng: &mut ThreadRng, target: FlowTarget) -> Value {
    let ip = format!(
        "10.{}.{}.{}",
        rng.random_range(0..=255),
        rng.random_range(0..=255),
        rng.random_range(1..=254)
    );
    let packets: u64 = rng.random_range(1..10_000);
    let bytes = packets * rng.random_range(40..1_500);
    let domain_count = rng.random_range(0..=3);
    let domains: Vec<Value> = (0..domain_count)
        .map(|i| {
            json!({
                "key": format!("host{}.{}.example.com", i, target),
                "doc_count": rng.random_range(1..100),
                "timestamp": { "value": 1_700_000_000_000u64 - i as u64 * 60_000 },
            })
        })
        .collect();
    let direction = if rng.random_bool(0.5) {
        "outbound"
    } else {
        "inbound"
    };

    json!({
        "key": ip,
        "doc_count": rng.random_range(1..500),
        "bytes": { "value": bytes },
        "packets": { "value": packets },
        "ip_count": { "value": rng.random_range(1..50) },
        "direction": {
            "buckets": [
                { "key": direction, "doc_count": 1 }
            ]
        },
        "domain": { "buckets": domains },
    })
}
