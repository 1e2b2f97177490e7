use clap::Parser;
use jidou::prelude::*;
use rand::Rng;
use rand::rngs::ThreadRng;
use std::fs;

/// A CLI tool to generate random automation flows for exercising the validator
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// The path to write the generated flow JSON to
    #[arg(short, long, default_value = "generated_flow.json")]
    output: String,

    /// Optional path to also write matching trigger/condition/action records
    #[arg(short, long)]
    records: Option<String>,

    #[arg(long, default_value_t = 2)]
    triggers: usize,

    #[arg(long, default_value_t = 4)]
    conditions: usize,

    #[arg(long, default_value_t = 4)]
    actions: usize,

    /// Add an action -> condition back edge, making the flow cyclic
    #[arg(long)]
    cycle: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let mut rng = rand::rng();

    if cli.triggers == 0 || cli.conditions == 0 || cli.actions == 0 {
        eprintln!("Error: --triggers, --conditions and --actions must all be at least 1");
        std::process::exit(1);
    }

    println!(
        "Generating flow ({} triggers, {} conditions, {} actions{})...",
        cli.triggers,
        cli.conditions,
        cli.actions,
        if cli.cycle { ", with cycle" } else { "" }
    );

    let flow = generate_flow(&mut rng, &cli);
    fs::write(&cli.output, serde_json::to_string_pretty(&flow)?)?;
    println!("Successfully generated and saved flow to '{}'", cli.output);

    if let Some(path) = &cli.records {
        let records = generate_records(&mut rng, &cli);
        fs::write(path, serde_json::to_string_pretty(&records)?)?;
        println!("Successfully generated and saved records to '{}'", path);
    }

    Ok(())
}

/// Builds a layered flow: every trigger feeds one or more conditions, every
/// condition feeds one or more actions.
fn generate_flow(rng: &mut ThreadRng, cli: &Cli) -> FlowDefinition {
    let mut nodes = Vec::new();
    let mut edges = Vec::new();

    for t in 1..=cli.triggers {
        nodes.push(FlowNodeDefinition::new(format!("trigger-{}", t), "stateChangeTrigger"));
    }
    for c in 1..=cli.conditions {
        nodes.push(FlowNodeDefinition::new(format!("condition-{}", c), "valueCondition"));
    }
    for a in 1..=cli.actions {
        nodes.push(FlowNodeDefinition::new(format!("action-{}", a), "deviceAction"));
    }

    for t in 1..=cli.triggers {
        for c in pick_targets(rng, cli.conditions) {
            edges.push(FlowEdgeDefinition::new(format!("trigger-{}", t), format!("condition-{}", c)));
        }
    }
    for c in 1..=cli.conditions {
        for a in pick_targets(rng, cli.actions) {
            edges.push(FlowEdgeDefinition::new(format!("condition-{}", c), format!("action-{}", a)));
        }
    }

    if cli.cycle {
        let a = rng.random_range(1..=cli.actions);
        let c = rng.random_range(1..=cli.conditions);
        edges.push(FlowEdgeDefinition::new(format!("action-{}", a), format!("condition-{}", c)));
    }

    FlowDefinition::new(nodes, edges)
}

/// Picks a non-empty random subset of `1..=count`.
fn pick_targets(rng: &mut ThreadRng, count: usize) -> Vec<usize> {
    let mut picked: Vec<usize> = (1..=count).filter(|_| rng.random_bool(0.4)).collect();
    if picked.is_empty() {
        picked.push(rng.random_range(1..=count));
    }
    picked
}

fn generate_records(rng: &mut ThreadRng, cli: &Cli) -> RecordSet {
    let fields = ["temperature", "humidity", "battery", "power"];

    let triggers = (1..=cli.triggers)
        .map(|t| Trigger {
            id: t as EntityId,
            kind: TriggerKind::StateChange {
                device_id: rng.random_range(1..=10),
                field: fields[rng.random_range(0..fields.len())].to_string(),
            },
        })
        .collect();

    let operators = ["<", "<=", "=", ">=", ">", "!="];
    let conditions = (1..=cli.conditions)
        .map(|c| Condition {
            id: c as EntityId,
            device_id: Some(rng.random_range(1..=10)),
            field: fields[rng.random_range(0..fields.len())].to_string(),
            operator: operators[rng.random_range(0..operators.len())].to_string(),
            value: Value::Number(rng.random_range(0..100) as f64),
        })
        .collect();

    let actions = (1..=cli.actions)
        .map(|a| Action {
            id: a as EntityId,
            kind: ActionKind::DeviceCommand {
                device_id: rng.random_range(1..=10),
                command: if rng.random_bool(0.5) { "on" } else { "off" }.to_string(),
                payload: serde_json::Value::Null,
            },
        })
        .collect();

    println!("-> Generated records.");
    RecordSet {
        triggers,
        conditions,
        actions,
    }
}
