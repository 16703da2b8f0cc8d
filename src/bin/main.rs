use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use typed_params::{config, Schema};

/// Decode a URL's query string against a descriptor schema and print the
/// result as JSON.
#[derive(Parser, Debug)]
#[command(name = "typed-params", version)]
struct Cli {
    /// URL to decode (defaults to TYPED_PARAMS_URL, then a built-in example)
    url: Option<String>,

    /// JSON object of name -> descriptor (defaults to TYPED_PARAMS_SCHEMA)
    #[arg(long)]
    schema: Option<String>,

    /// Pretty-print the JSON output
    #[arg(long)]
    pretty: bool,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_new(config::log_filter())
                .unwrap_or_else(|_| EnvFilter::new(config::DEFAULT_LOG_FILTER)),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let url = cli.url.unwrap_or_else(config::demo_url);
    let schema_text = cli.schema.unwrap_or_else(config::demo_schema);

    let schema = Schema::from_json(&schema_text).context("compiling schema")?;
    tracing::debug!(
        fields = schema.len(),
        descriptors = ?schema.iter().map(|(name, field)| format!("{}: {}", name, field)).collect::<Vec<_>>(),
        "schema compiled"
    );

    match schema.parse(&url) {
        Ok(parsed) => {
            tracing::info!(url = %url, fields = parsed.len(), "query decoded");
            let out = if cli.pretty {
                serde_json::to_string_pretty(&parsed)?
            } else {
                serde_json::to_string(&parsed)?
            };
            println!("{}", out);
            Ok(())
        }
        Err(err) => {
            tracing::error!(
                url = %url,
                field = err.field().unwrap_or_default(),
                raw = err.coercion().map(|c| c.raw()).unwrap_or_default(),
                "{}",
                err
            );
            Err(anyhow::Error::new(err).context(format!("decoding {}", url)))
        }
    }
}
