use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use log::{error, info, LevelFilter};

use css_property_apis::{Generator, GeneratorConfig, GeneratorOptions};

/// Generate the CSS property descriptor table and per-class API stubs
#[derive(Debug, Parser)]
#[command(name = "css_property_apis", version, about)]
struct Cli {
    /// Property schema (.json, .json5, .yaml, .yml or .toml)
    schema: PathBuf,

    /// Directory receiving the generated files
    #[arg(short, long)]
    output_dir: PathBuf,

    /// TOML file with generator settings
    #[arg(long)]
    config: Option<PathBuf>,

    /// Directory of *.tmpl files overriding the built-in templates
    #[arg(long)]
    template_dir: Option<PathBuf>,

    /// Prefix for auto-derived class names
    #[arg(long)]
    class_prefix: Option<String>,

    /// Only generate the named artifact (repeatable)
    #[arg(long = "only", value_name = "ARTIFACT")]
    only: Vec<String>,

    /// Print the artifact names and exit
    #[arg(long)]
    list: bool,

    /// Rewrite files even when their content is unchanged
    #[arg(long)]
    force: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    fn options(&self) -> Result<GeneratorOptions> {
        let mut options = GeneratorOptions::default();

        if let Some(path) = &self.config {
            let config = GeneratorConfig::load(path)
                .with_context(|| format!("Failed to load config {}", path.display()))?;
            options = options.merge(config);
        }

        if let Some(dir) = &self.template_dir {
            options.template_dir = Some(dir.clone());
        }
        if let Some(prefix) = &self.class_prefix {
            options.class_prefix = prefix.clone();
        }
        if !self.only.is_empty() {
            options.only = self.only.clone();
        }
        if self.force {
            options.write_if_changed = false;
        }

        Ok(options)
    }

    fn log_level(&self) -> LevelFilter {
        match self.verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    }
}

fn run(cli: &Cli) -> Result<()> {
    let generator = Generator::new(cli.options()?, &cli.output_dir);

    if cli.list {
        let plan = generator.plan(&cli.schema)?;
        for name in plan.artifact_names() {
            println!("{}", name);
        }
        return Ok(());
    }

    let result = generator.run(&cli.schema)?;
    info!(
        "{} API classes, {} artifacts ({} written, {} unchanged)",
        result.descriptors.len(),
        result.artifacts.len(),
        result.stats.written,
        result.stats.unchanged
    );
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    env_logger::Builder::new()
        .filter_level(cli.log_level())
        .parse_default_env()
        .init();

    run(&cli).inspect_err(|e| error!("Generation failed: {:#}", e))
}
