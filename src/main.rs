use anyhow::Result;
use clap::Parser;

fn main() -> Result<()> {
    env_logger::init();
    let cfg = fractal_drift::config::Config::parse();
    fractal_drift::app::run(cfg)
}
