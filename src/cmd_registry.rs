//! Registry inspection subcommands.

use anyhow::Context;
use serde_json::{json, Value};

use pagebuilder_core::HostApp;
use pagebuilder_protocols::Namespace;

use crate::cli::Commands;

/// Handle a subcommand against a bootstrapped host.
pub(crate) fn handle_command(host: &HostApp, command: Commands) -> anyhow::Result<()> {
    match command {
        Commands::Namespaces { format } => list_namespaces(host, &format),
        Commands::List {
            namespace,
            ordered,
            format,
        } => list_types(host, &namespace, ordered, &format),
        Commands::Show { namespace, key } => show_type(host, &namespace, &key),
        Commands::Dispatch { event } => dispatch_event(host, &event),
    }
}

fn parse_namespace(name: &str) -> anyhow::Result<Namespace> {
    name.parse::<Namespace>()
        .with_context(|| format!("Invalid namespace: {}", name))
}

/// List namespaces with their type counts.
fn list_namespaces(host: &HostApp, format: &str) -> anyhow::Result<()> {
    let snapshot = host.registry().snapshot();

    match format {
        "json" => {
            let namespaces: Vec<Value> = snapshot
                .iter()
                .map(|(namespace, keys)| json!({"namespace": namespace, "types": keys}))
                .collect();
            println!("{}", serde_json::to_string_pretty(&namespaces)?);
        }
        _ => {
            println!("{:<20} {:<6} {}", "NAMESPACE", "TYPES", "KEYS");
            println!("{}", "-".repeat(70));
            for (namespace, keys) in snapshot {
                println!("{:<20} {:<6} {}", namespace.as_str(), keys.len(), keys.join(", "));
            }
        }
    }

    Ok(())
}

/// List the types of one namespace.
fn list_types(host: &HostApp, name: &str, ordered: bool, format: &str) -> anyhow::Result<()> {
    let namespace = parse_namespace(name)?;
    let entries = if ordered {
        host.registry().get_ordered_list(&namespace)?
    } else {
        host.registry().get_all(&namespace)?
    };

    if entries.is_empty() {
        println!("No types registered in {}.", namespace);
        return Ok(());
    }

    match format {
        "json" => {
            let descriptors: Vec<Value> = entries.iter().map(|entry| entry.describe()).collect();
            println!("{}", serde_json::to_string_pretty(&descriptors)?);
        }
        _ => {
            println!("{:<20} {:<30} {}", "TYPE", "LABEL", "ORDER");
            println!("{}", "-".repeat(60));
            for entry in entries {
                println!("{:<20} {:<30} {}", entry.type_key(), entry.label(), entry.order());
            }
        }
    }

    Ok(())
}

/// Show the full descriptor of a type.
fn show_type(host: &HostApp, name: &str, key: &str) -> anyhow::Result<()> {
    let namespace = parse_namespace(name)?;
    let entry = host.registry().get(&namespace, key)?;

    println!("{}: {}", entry.kind(), entry.label());
    println!("{}", "=".repeat(50));
    println!("{}", serde_json::to_string_pretty(&entry.describe())?);
    Ok(())
}

/// Dispatch one realtime event and print the resulting state.
fn dispatch_event(host: &HostApp, raw: &str) -> anyhow::Result<()> {
    let handled = host
        .realtime()
        .dispatch_json(raw)
        .context("Failed to dispatch realtime event")?;
    if handled == 0 {
        println!("No handler registered for this event.");
    }
    println!("{}", serde_json::to_string_pretty(&host.store().snapshot())?);
    Ok(())
}
