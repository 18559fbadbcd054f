use anyhow::Result;
use clap::Parser;
use dashboard_restyle::config::{Args, Config};
use dashboard_restyle::driver;

fn main() -> Result<()> {
    let args = Args::parse();
    let env = env_logger::Env::default().default_filter_or(args.log_level.as_str());
    env_logger::Builder::from_env(env).init();

    let config = Config::from_args(args)?;
    driver::run(&config)?;

    Ok(())
}
