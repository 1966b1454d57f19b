//! Phrase Align - one-shot alignment of two phrase lists.
//!
//! Reads the two phrase blocks from the configured input file and writes
//! the pairing to the configured output file. Settings come from the YAML
//! file named by `PHRASE_ALIGN_CONFIG` (a `.env` file is honoured), or from
//! the defaults: `input.txt` in, `output.txt` out.

use anyhow::Context;
use phrase_align::AlignConfig;
use tracing_subscriber::EnvFilter;

const CONFIG_ENV: &str = "PHRASE_ALIGN_CONFIG";

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = load_config()?;
    init_tracing(&config);

    let alignment = phrase_align::run(&config).with_context(|| {
        format!(
            "aligning {} into {}",
            config.input.display(),
            config.output.display()
        )
    })?;

    tracing::info!(
        pairs = alignment.pairs.len(),
        unmatched = alignment.unmatched.len(),
        "done"
    );
    Ok(())
}

fn load_config() -> anyhow::Result<AlignConfig> {
    match std::env::var_os(CONFIG_ENV) {
        Some(path) => AlignConfig::from_file(&path)
            .with_context(|| format!("loading config from {}", path.to_string_lossy())),
        None => Ok(AlignConfig::default()),
    }
}

fn init_tracing(config: &AlignConfig) {
    // RUST_LOG wins over the configured level.
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr);

    if config.log_json {
        builder.json().init();
    } else {
        builder.init();
    }
}
