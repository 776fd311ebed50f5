//! Sigdoc CLI - render documentation signatures from a declaration model

use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use sigdoc_core::signature::Dialect;
use sigdoc_core::{ContentNode, ModelFile, Platform, SignatureConfig};
use tracing::{debug, info, Level};
use tracing_subscriber::FmtSubscriber;

#[derive(Parser)]
#[command(name = "sigdoc")]
#[command(version = sigdoc_core::VERSION)]
#[command(about = "Render Kotlin and Java signatures from a declaration model", long_about = None)]
struct Cli {
    /// Path to the model JSON file
    model: PathBuf,

    /// Signature language
    #[arg(long, value_enum, default_value_t = DialectArg::Kotlin)]
    dialect: DialectArg,

    /// TOML file overriding the rendering conventions
    #[arg(long)]
    config: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum, default_value_t = Format::Text)]
    format: Format,

    /// Skip the per-platform coverage check of the model
    #[arg(long)]
    no_validate: bool,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum DialectArg {
    Kotlin,
    Java,
}

impl From<DialectArg> for Dialect {
    fn from(arg: DialectArg) -> Self {
        match arg {
            DialectArg::Kotlin => Dialect::Kotlin,
            DialectArg::Java => Dialect::Java,
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    /// One line per signature, followed by its platforms
    Text,
    /// The content tree as JSON
    Json,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose)?;

    let output = run(&cli)?;
    let mut stdout = std::io::stdout().lock();
    stdout
        .write_all(output.as_bytes())
        .context("Failed to write output")?;
    Ok(())
}

fn init_logging(verbose: u8) -> Result<()> {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .context("Failed to install log subscriber")
}

fn run(cli: &Cli) -> Result<String> {
    let model = load_model(&cli.model)?;
    if !cli.no_validate {
        model
            .validate()
            .with_context(|| format!("Invalid model '{}'", cli.model.display()))?;
    }
    let config = match &cli.config {
        Some(path) => load_config(path)?,
        None => SignatureConfig::default(),
    };

    let dialect = Dialect::from(cli.dialect);
    info!(%dialect, declarations = model.declarations.len(), "rendering signatures");
    let provider = dialect.provider(&config);
    let nodes: Vec<ContentNode> = model
        .declarations
        .iter()
        .map(|declaration| provider.signature(declaration))
        .collect();

    match cli.format {
        Format::Text => Ok(text_output(&nodes)),
        Format::Json => {
            let mut json =
                serde_json::to_string_pretty(&nodes).context("Failed to serialize content")?;
            json.push('\n');
            Ok(json)
        }
    }
}

fn load_model(path: &Path) -> Result<ModelFile> {
    let source = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read model '{}'", path.display()))?;
    let model = ModelFile::parse(&source)
        .with_context(|| format!("Failed to load model '{}'", path.display()))?;
    debug!(path = %path.display(), declarations = model.declarations.len(), "model loaded");
    Ok(model)
}

fn load_config(path: &Path) -> Result<SignatureConfig> {
    let source = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config '{}'", path.display()))?;
    SignatureConfig::parse(&source)
        .with_context(|| format!("Failed to load config '{}'", path.display()))
}

/// `signature [platform, ...]`, one line per signature node
fn text_output(nodes: &[ContentNode]) -> String {
    let mut out = String::new();
    for node in nodes {
        for symbol in node.symbols() {
            let text = symbol.plain_text().replace('\u{a0}', " ");
            let platforms: Vec<&str> = symbol.platforms().iter().map(Platform::as_str).collect();
            out.push_str(&format!("{text} [{}]\n", platforms.join(", ")));
        }
    }
    out
}
