use clap::{Parser, ValueEnum};
use flowquery::prelude::*;
use std::fs;
use std::io::{self, Write};
use std::time::Instant;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum OutputFormat {
    Pretty,
    Compact,
}

/// Builds top-N network flow aggregation queries
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Path to the flow request JSON file
    request_path: Option<String>,
    /// Optional path to a search response JSON file to format against the built query
    response_path: Option<String>,

    /// Path to the source configuration JSON file
    #[arg(short, long)]
    config: Option<String>,

    /// How to print the query document
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Pretty)]
    format: OutputFormat,

    /// Run in interactive mode to be prompted for inputs
    #[arg(short = 'i', long, help = "Run in interactive 'human' mode")]
    human: bool,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => SourceConfiguration::from_file(path)
            .unwrap_or_else(|e| exit_with_error(&format!("Failed to load configuration: {}", e))),
        None => SourceConfiguration::default(),
    };

    let request = if cli.human {
        run_interactive(&config)
    } else {
        let request_path = cli.request_path.clone().unwrap_or_else(|| {
            exit_with_error("Request path is required in non-interactive mode.");
        });
        load_request(&request_path, &config)
    };

    run_build(&request, cli.response_path.as_deref(), cli.format);
}

fn load_request(path: &str, config: &SourceConfiguration) -> FlowRequest {
    let json = fs::read_to_string(path)
        .unwrap_or_else(|e| exit_with_error(&format!("Failed to read request file '{}': {}", path, e)));
    FlowRequestParams::from_json(&json)
        .and_then(|params| params.into_flow_request(config))
        .unwrap_or_else(|e| exit_with_error(&format!("Invalid flow request: {}", e)))
}

fn run_build(request: &FlowRequest, response_path: Option<&str>, format: OutputFormat) {
    let builder = QueryBuilder::default();

    let build_start = Instant::now();
    let query = builder
        .build(request)
        .unwrap_or_else(|e| exit_with_error(&format!("Query build failed: {}", e)));
    tracing::info!(
        aggregation = query.aggregations().top_flow.key(),
        elapsed = ?build_start.elapsed(),
        "query built"
    );

    let rendered = match format {
        OutputFormat::Pretty => inspect_dsl(&query),
        OutputFormat::Compact => serde_json::to_string(&query),
    }
    .unwrap_or_else(|e| exit_with_error(&format!("Failed to serialize query: {}", e)));
    println!("{}", rendered);

    let Some(response_path) = response_path else {
        return;
    };
    let response_json = fs::read_to_string(response_path).unwrap_or_else(|e| {
        exit_with_error(&format!(
            "Failed to read response file '{}': {}",
            response_path, e
        ))
    });
    let data = format_response(request, &query, &response_json)
        .unwrap_or_else(|e| exit_with_error(&format!("Failed to format response: {}", e)));

    println!("\n--- Top {} Flows ({}) ---", request.flow_target, request.flow_direction);
    for edge in &data.edges {
        let node = &edge.node;
        println!(
            "{:<40} bytes={:<12} packets={:<10} peers={:<6} domains=[{}]",
            node.endpoint.ip,
            node.network.bytes,
            node.network.packets,
            node.endpoint.count,
            node.endpoint.domain.join(", ")
        );
    }
    println!("-----------------------------");
    println!("Total Count:          {}", data.total_count);
    println!("Fake Total Count:     {}", data.page_info.fake_total_count);
    println!(
        "More Pages:           {}",
        data.page_info.show_more_pages_indicator
    );
}

/// Prompts for every request field, falling back to defaults from the configuration.
fn run_interactive(config: &SourceConfiguration) -> FlowRequest {
    println!("--- flowquery Interactive Mode ---");

    let flow_target: FlowTarget = prompt_parsed("Flow target (source/destination/client/server)", "source");
    let flow_direction: FlowDirection =
        prompt_parsed("Flow direction (uniDirectional/biDirectional)", "uniDirectional");
    let sort = FlowSort {
        field: prompt_parsed("Sort field (bytes/packets/ipCount)", "bytes"),
        direction: prompt_parsed("Sort direction (asc/desc)", "desc"),
    };
    let limit: usize = prompt_parsed("Rows per page", "10");
    let from: i64 = prompt_parsed("Range start (epoch ms)", "0");
    let to: i64 = prompt_parsed("Range end (epoch ms)", "9999999999999");

    let index_default = if config.default_index.is_empty() {
        "packetbeat-*".to_string()
    } else {
        config.default_index.join(",")
    };
    let default_index = prompt_for_input("Index patterns (comma separated)", Some(index_default.as_str()))
        .split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect();
    let filter = prompt_for_input("Filter query JSON (optional)", None);

    FlowRequest {
        default_index,
        filter_query: (!filter.is_empty()).then_some(FilterQuery::Text(filter)),
        flow_direction,
        flow_target,
        sort,
        pagination: Pagination::first_page(limit, 5),
        timestamp_field_name: config.fields.timestamp.clone(),
        time_range: TimeRange { from, to },
    }
}

fn prompt_parsed<T>(prompt_text: &str, default: &str) -> T
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    loop {
        let input = prompt_for_input(prompt_text, Some(default));
        match input.parse() {
            Ok(value) => break value,
            Err(e) => println!("Invalid value: {}", e),
        }
    }
}

/// A helper function to prompt the user and read a line of input.
fn prompt_for_input(prompt_text: &str, default: Option<&str>) -> String {
    let mut line = String::new();
    let default_prompt = default.map_or("".to_string(), |d| format!(" [default: {}]", d));

    print!("> {}{}: ", prompt_text, default_prompt);
    if let Err(e) = io::stdout().flush() {
        exit_with_error(&format!("Failed to flush stdout: {}", e));
    }

    if let Err(e) = io::stdin().read_line(&mut line) {
        exit_with_error(&format!("Failed to read line: {}", e));
    }
    let trimmed = line.trim().to_string();

    if trimmed.is_empty() {
        default.unwrap_or("").to_string()
    } else {
        trimmed
    }
}

fn exit_with_error(message: &str) -> ! {
    eprintln!("\nError: {}", message);
    std::process::exit(1);
}
