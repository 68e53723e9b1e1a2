extern crate rust_raycaster as root;

use root::parsing::config::Config;
use root::parsing::{construct_world, load_config};
#[cfg(feature = "preview")]
use root::renderer::PreviewRenderer;
use root::renderer::{NaiveRenderer, Renderer};

use anyhow::{Context, Result};
use structopt::StructOpt;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use std::process::ExitCode;

#[derive(Debug, StructOpt)]
#[structopt(rename_all = "kebab-case")]
struct Opt {
    #[structopt(long)]
    pub scene_file: Option<String>,
    #[structopt(long, default_value = "data/config.toml")]
    pub config_file: String,
    /// Output file name, without extension. Overrides the config.
    #[structopt(long)]
    pub output: Option<String>,
    #[structopt(short = "n", long)]
    pub dry_run: bool,
    /// Show the result in a window after rendering.
    #[cfg(feature = "preview")]
    #[structopt(long)]
    pub preview: bool,
    /// Used when RUST_LOG is not set.
    #[structopt(long, default_value = "info")]
    pub log_level: String,
}

#[cfg(feature = "preview")]
fn construct_renderer(opts: &Opt) -> Box<dyn Renderer> {
    if opts.preview {
        Box::new(PreviewRenderer::new())
    } else {
        Box::new(NaiveRenderer::new())
    }
}

#[cfg(not(feature = "preview"))]
fn construct_renderer(_opts: &Opt) -> Box<dyn Renderer> {
    Box::new(NaiveRenderer::new())
}

fn run(opts: Opt) -> Result<()> {
    let mut config: Config = load_config(&opts.config_file)?;

    // override scene file and output name based on provided command line arguments
    if let Some(scene_file) = opts.scene_file.clone() {
        config.scene_file = scene_file;
    }
    if let Some(output) = opts.output.clone() {
        config.render_settings.filename = output;
    }

    let world = construct_world(&config.scene_file)
        .with_context(|| format!("fatal error parsing world from {}", config.scene_file))?;

    if opts.dry_run {
        info!("dry run, skipping render");
        return Ok(());
    }
    construct_renderer(&opts).render(&world, &config)
}

fn main() -> ExitCode {
    let opts = Opt::from_args();
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&opts.log_level))
        .unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    match run(opts) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{:?}", err);
            ExitCode::FAILURE
        }
    }
}
