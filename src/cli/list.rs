//! `mcpcfg list` - show the configured MCP servers
//!
//! Read-only: no backup is taken and nothing is written. For Claude
//! configurations, project-scoped server tables are printed below the
//! top-level one.

use anyhow::Result;
use clap::Args;
use serde_json::{Map, Value};

use super::common::resolve_target;
use crate::config::ConfigDocument;

/// List the configured MCP servers.
#[derive(Args)]
pub struct ListCommand {
    /// Target tool: claude or cursor
    #[arg(long, default_value = "claude")]
    tool: String,

    /// Configuration file to read instead of the tool's default location
    #[arg(long)]
    path: Option<String>,
}

impl ListCommand {
    pub fn execute(self) -> Result<()> {
        let (flavor, path) = resolve_target(&self.tool, self.path.as_deref())?;

        if !path.exists() {
            println!("No {} configuration file found at {}", flavor.name(), path.display());
            return Ok(());
        }

        let document = ConfigDocument::load_or_default(&path)?;

        let project_tables: Vec<(&String, &Map<String, Value>)> = document
            .projects
            .iter()
            .flatten()
            .filter_map(|(project, value)| {
                value
                    .get("mcpServers")
                    .and_then(Value::as_object)
                    .filter(|servers| !servers.is_empty())
                    .map(|servers| (project, servers))
            })
            .collect();

        if document.mcp_servers.is_empty() && project_tables.is_empty() {
            println!("No MCP servers configured in {}", path.display());
            return Ok(());
        }

        if !document.mcp_servers.is_empty() {
            println!("MCP servers ({}):", path.display());
            print_server_table(&document.mcp_servers);
        }

        for (project, servers) in project_tables {
            println!();
            println!("Project {project}:");
            print_server_table(servers);
        }

        Ok(())
    }
}

fn print_server_table(servers: &Map<String, Value>) {
    let rows: Vec<(String, String, String)> = servers
        .iter()
        .map(|(name, value)| {
            let command = value
                .get("command")
                .and_then(Value::as_str)
                .unwrap_or("-")
                .to_string();
            let args = value
                .get("args")
                .and_then(Value::as_array)
                .map(|args| {
                    args.iter()
                        .filter_map(Value::as_str)
                        .collect::<Vec<_>>()
                        .join(" ")
                })
                .unwrap_or_default();
            (name.clone(), command, args)
        })
        .collect();

    let name_width = column_width("Name", rows.iter().map(|r| r.0.as_str()));
    let command_width = column_width("Command", rows.iter().map(|r| r.1.as_str()));
    let args_width = column_width("Args", rows.iter().map(|r| r.2.as_str()));

    let bar = |w: usize| "─".repeat(w + 2);
    println!("╭{}┬{}┬{}╮", bar(name_width), bar(command_width), bar(args_width));
    println!(
        "│ {:<name_width$} │ {:<command_width$} │ {:<args_width$} │",
        "Name", "Command", "Args"
    );
    println!("├{}┼{}┼{}┤", bar(name_width), bar(command_width), bar(args_width));
    for (name, command, args) in &rows {
        println!("│ {name:<name_width$} │ {command:<command_width$} │ {args:<args_width$} │");
    }
    println!("╰{}┴{}┴{}╯", bar(name_width), bar(command_width), bar(args_width));
}

fn column_width<'a>(header: &str, values: impl Iterator<Item = &'a str>) -> usize {
    values
        .map(str::len)
        .chain(std::iter::once(header.len()))
        .max()
        .unwrap_or(0)
}
