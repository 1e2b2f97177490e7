use clap::{Parser, Subcommand};
use jidou::prelude::*;
use std::fs;
use std::time::Instant;
use tracing_subscriber::EnvFilter;

/// Validate automation flows and inspect their execution paths
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Optional engine config JSON (type mappings, limits)
    #[arg(short, long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Validate a flow and list every problem found
    Validate {
        /// Path to the flow JSON file
        flow_path: String,
    },
    /// Print the global order and each trigger's execution path
    Paths {
        flow_path: String,
        /// Optional records JSON to resolve triggers, conditions and actions
        #[arg(short, long)]
        records: Option<String>,
    },
    /// Resolve every trigger and check its conditions against a state snapshot
    Check {
        flow_path: String,
        #[arg(short, long)]
        records: String,
        #[arg(short, long)]
        state: String,
    },
    /// Validate a flow and write its execution plan
    Plan {
        flow_path: String,
        #[arg(short, long, default_value = "flow.plan")]
        output: String,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let engine = build_engine(cli.config.as_deref());

    match cli.command {
        Command::Validate { flow_path } => run_validate(&engine, &flow_path),
        Command::Paths { flow_path, records } => run_paths(&engine, &flow_path, records.as_deref()),
        Command::Check {
            flow_path,
            records,
            state,
        } => run_check(&engine, &flow_path, &records, &state),
        Command::Plan { flow_path, output } => run_plan(&engine, &flow_path, &output),
    }
}

fn build_engine(config_path: Option<&str>) -> FlowEngine {
    let Some(path) = config_path else {
        return FlowEngine::new();
    };
    let config = EngineConfig::from_file(path)
        .unwrap_or_else(|e| exit_with_error(&format!("Failed to load config: {}", e)));
    FlowEngine::builder().with_config(config).build()
}

fn load_flow(path: &str) -> FlowDefinition {
    let json = fs::read_to_string(path)
        .unwrap_or_else(|e| exit_with_error(&format!("Failed to read flow file '{}': {}", path, e)));
    FlowDefinition::from_json_str(&json).unwrap_or_else(|e| exit_with_error(&e.to_string()))
}

fn load_graph(engine: &FlowEngine, path: &str) -> FlowGraph {
    let flow = load_flow(path);
    engine
        .decode(&flow)
        .unwrap_or_else(|| exit_with_error("Flow has no nodes or edges"))
}

fn load_records(path: &str) -> EntityCollections {
    RecordSet::from_file(path)
        .map(EntityCollections::from)
        .unwrap_or_else(|e| exit_with_error(&format!("Failed to load records from '{}': {}", path, e)))
}

fn run_validate(engine: &FlowEngine, flow_path: &str) {
    let flow = load_flow(flow_path);
    let start = Instant::now();
    let errors = engine.validate(&flow);
    let duration = start.elapsed();

    if errors.is_empty() {
        println!("Flow is valid ({:?})", duration);
        return;
    }

    println!("Flow has {} problem(s) ({:?}):", errors.len(), duration);
    for error in &errors {
        println!("  - [{:?}] {}", error.kind(), error);
    }
    std::process::exit(2);
}

fn run_paths(engine: &FlowEngine, flow_path: &str, records_path: Option<&str>) {
    let graph = load_graph(engine, flow_path);

    match engine.order(&graph) {
        Ok(order) => println!("Order: {}", order.join(" -> ")),
        Err(e) => println!("Order: unavailable ({})", e),
    }

    let records = records_path.map(load_records);
    for trigger in graph.triggers() {
        println!("\nTrigger '{}':", trigger.id());
        print!(
            "{}",
            DisplayPath {
                graph: &graph,
                root: trigger.id(),
            }
        );

        if let Some(records) = &records {
            match engine.resolve_bundle(&graph, trigger.id(), records) {
                Ok(bundle) => {
                    let json = serde_json::to_string_pretty(&bundle)
                        .unwrap_or_else(|e| exit_with_error(&e.to_string()));
                    println!("{}", json);
                }
                Err(e) => println!("  -> {}", e),
            }
        }
    }
}

fn run_check(engine: &FlowEngine, flow_path: &str, records_path: &str, state_path: &str) {
    let graph = load_graph(engine, flow_path);
    let records = load_records(records_path);
    let state = DeviceState::from_file(state_path).unwrap_or_else(|e| {
        exit_with_error(&format!("Failed to load state from '{}': {}", state_path, e))
    });

    for bundle in engine.resolve_bundles(&graph, &records) {
        let outcomes = bundle.check_conditions(&state);
        let met = outcomes.iter().all(|o| o.met);
        // Dry run: assume every action would succeed.
        let actions = bundle.actions.len();
        let status = ExecutionStatus::classify(bundle.path_valid, met, actions, actions);

        println!("\nTrigger '{}': projected {}", bundle.trigger_node_id, status);
        for outcome in &outcomes {
            let marker = if outcome.met { "met" } else { "not met" };
            println!("  condition {} {}: {}", outcome.condition_id, marker, outcome.reason);
        }
        if met && bundle.path_valid {
            println!("  -> would run {} action(s)", actions);
        }
    }
}

fn run_plan(engine: &FlowEngine, flow_path: &str, output: &str) {
    let flow = load_flow(flow_path);
    let plan = engine
        .plan(&flow)
        .unwrap_or_else(|e| exit_with_error(&e.to_string()));
    plan.save(output)
        .unwrap_or_else(|e| exit_with_error(&e.to_string()));
    println!(
        "Wrote plan with {} trigger path(s) to '{}'",
        plan.paths.len(),
        output
    );
}

fn exit_with_error(message: &str) -> ! {
    eprintln!("\nError: {}", message);
    std::process::exit(1);
}
