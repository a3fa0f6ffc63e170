//! # multiple-responses
//!
//! Reads a service description and the template compiled for it, runs the
//! deployment lifecycle with the responses plugin registered, and writes
//! the amended template.
//!
//! ```bash
//! multiple-responses \
//!     --service .serverless/service.json \
//!     --template .serverless/cloudformation-template-update-stack.json \
//!     --output amended.json
//! ```

mod cli;

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use clap::Parser;
use serde::de::DeserializeOwned;
use tracing::{error, info};

use cli::Cli;
use multiple_responses::framework::TracingSink;
use multiple_responses::lifecycle::{setup_tracing, Lifecycle};
use multiple_responses::model::{Service, ServiceDefinition, Template};
use multiple_responses::plugin::{PluginConfig, ResponsesPlugin};

fn main() {
    setup_tracing();

    if let Err(e) = run(Cli::parse()) {
        error!("{e:#}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = match &cli.config {
        Some(path) => PluginConfig::load(path)?,
        None => PluginConfig::default(),
    }
    .with_overrides(cli.hook, cli.strict);

    let definition: ServiceDefinition = read_json(&cli.service)?;
    let template: Template = read_json(&cli.template)?;
    if template.resources().is_none() {
        anyhow::bail!("{} has no Resources section", cli.template.display());
    }
    let mut service = Service::new(definition.functions, template);

    let mut lifecycle = Lifecycle::new();
    lifecycle.register(ResponsesPlugin::initialize(config));
    lifecycle.run_all(&mut service, &mut TracingSink)?;

    let rendered = serde_json::to_string_pretty(&service.template)?;
    match &cli.output {
        Some(path) => {
            fs::write(path, rendered + "\n")
                .with_context(|| format!("failed to write {}", path.display()))?;
            info!(output = %path.display(), "Wrote amended template");
        }
        None => println!("{rendered}"),
    }
    Ok(())
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let raw = fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))?;
    serde_json::from_str(&raw).with_context(|| format!("failed to parse {}", path.display()))
}
