// scripts/generate.rs
use clap::Parser;
use jump_sde::math_utils::Timer;
use jump_sde::output::{self, RunManifest};
use jump_sde::scenarios::config::{GeneratorConfig, ScenarioConfig};
use jump_sde::scenarios::{self, SlideSet};
use jump_sde::SdeResult;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{error, info, Level};

#[derive(Parser, Debug)]
#[command(author, version, about = "Generate jump-diffusion sample paths for the slide visualizations")]
struct Args {
    /// Output JSON file
    #[arg(long, default_value = "data.json")]
    out: PathBuf,

    /// Comma-separated slide numbers (1-5)
    #[arg(long, value_delimiter = ',', default_values_t = vec![1u8, 2, 3, 4, 5])]
    slides: Vec<u8>,

    /// Worker threads (default: one per CPU)
    #[arg(long)]
    threads: Option<usize>,

    /// JSON file overriding scenario parameters
    #[arg(long)]
    config: Option<PathBuf>,

    /// Also write <out>.manifest.json
    #[arg(long)]
    manifest: bool,

    /// Log at debug level
    #[arg(short, long)]
    verbose: bool,
}

fn run(args: Args) -> SdeResult<()> {
    let scenarios = match &args.config {
        Some(path) => ScenarioConfig::from_json_file(path)?,
        None => ScenarioConfig::default(),
    };
    let config = GeneratorConfig {
        out: args.out,
        slides: SlideSet::from_numbers(&args.slides)?,
        threads: args.threads,
        manifest: args.manifest,
        scenarios,
    };

    let timer = Timer::new();
    let records = scenarios::generate(&config)?;
    output::write_records_json(&config.out, &records)?;

    if config.manifest {
        let manifest = RunManifest::new(
            config.slides.numbers(),
            records.len(),
            config.scenarios.seeds(config.slides),
        );
        output::write_json(&output::manifest_path(&config.out), &manifest)?;
    }

    info!(
        records = records.len(),
        elapsed_ms = timer.elapsed_ms(),
        "done"
    );
    Ok(())
}

fn main() -> ExitCode {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_max_level(if args.verbose { Level::DEBUG } else { Level::INFO })
        .init();

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("generation failed: {}", e);
            ExitCode::FAILURE
        }
    }
}
