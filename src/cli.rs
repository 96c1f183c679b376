use clap::Parser;
use std::path::PathBuf;

/// HappyForm - turn a natural-language prompt into a live HTML form
#[derive(Parser, Debug, Clone)]
#[command(name = "happyform", version, about, long_about = None)]
pub struct Cli {
    /// Path to the configuration file
    #[arg(short, long, env = "HAPPYFORM_CONFIG", default_value = "happyform.toml")]
    pub config: PathBuf,

    /// Server host address
    #[arg(long, env = "HAPPYFORM_HOST")]
    pub host: Option<String>,

    /// Server port
    #[arg(long, env = "HAPPYFORM_PORT")]
    pub port: Option<u16>,

    /// Base URL of the form generation service
    #[arg(long, env = "HAPPYFORM_API_URL")]
    pub api_url: Option<String>,

    /// Generate a single form from this prompt, print it as HTML and exit
    #[arg(short, long)]
    pub prompt: Option<String>,

    /// Write the generated HTML here instead of stdout (with --prompt)
    #[arg(short, long, requires = "prompt")]
    pub output: Option<PathBuf>,
}
