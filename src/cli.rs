use std::path::PathBuf;

use clap::Parser;

use multiple_responses::framework::LifecycleEvent;

#[derive(Parser)]
#[command(name = "multiple-responses")]
#[command(about = "Apply per-route response definitions to a compiled API Gateway template")]
#[command(version)]
pub struct Cli {
    /// Service description (JSON) declaring functions and their http events
    #[arg(short, long, env = "MULTIPLE_RESPONSES_SERVICE")]
    pub service: PathBuf,

    /// Compiled CloudFormation template (JSON) to amend
    #[arg(short, long, env = "MULTIPLE_RESPONSES_TEMPLATE")]
    pub template: PathBuf,

    /// Where to write the amended template (default: stdout)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Plugin config file (JSON)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Fail when any endpoint could not be reconciled
    #[arg(long)]
    pub strict: bool,

    /// Lifecycle event the plugin hooks (e.g. before:deploy:deploy)
    #[arg(long)]
    pub hook: Option<LifecycleEvent>,
}
