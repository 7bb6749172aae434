use anyhow::{Context, Result};
use clap::Parser;
use torus_life_core::{Session, SessionConfig};
use tracing::info;
use tracing_subscriber::EnvFilter;

mod gui;
mod render;

#[derive(Parser, Debug)]
#[command(name = "torus-life")]
#[command(about = "Conway's Game of Life on a toroidal grid", version)]
struct Args {
    /// Number of cells along each edge of the board
    #[arg(short = 'n', long, default_value_t = 64)]
    grid_size: usize,

    /// Rendered size of one cell in pixels
    #[arg(short = 's', long, default_value_t = 5)]
    cell_size: u32,

    /// Tick at a fixed slow delay for manual inspection
    #[arg(short, long)]
    debug: bool,

    /// Delay between ticks in seconds
    #[arg(short = 't', long, default_value_t = 0.03)]
    tick_delay: f64,

    /// Colour cells by how long they have been alive
    #[arg(short, long)]
    color: bool,

    /// Kill cells alive for more than this many ticks (0 = unlimited)
    #[arg(short = 'k', long, default_value_t = 0)]
    age_cap: u32,

    /// Restart with a fresh board once this many ticks have passed (0 = never)
    #[arg(short = 'r', long, default_value_t = 0)]
    step_cap: usize,

    /// Seed the board RNG for a reproducible session
    #[arg(long)]
    seed: Option<u64>,

    /// Print the resolved configuration as JSON and exit
    #[arg(long)]
    dump_config: bool,
}

impl Args {
    fn session_config(&self) -> SessionConfig {
        SessionConfig {
            grid_size: self.grid_size,
            cell_px: self.cell_size,
            tick_delay: self.tick_delay,
            debug: self.debug,
            color: self.color,
            age_cap: self.age_cap,
            step_cap: self.step_cap,
            seed: self.seed,
        }
    }
}

fn main() -> Result<()> {
    let args = Args::parse();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let config = args.session_config();
    if args.dump_config {
        println!("{}", serde_json::to_string_pretty(&config)?);
        return Ok(());
    }

    let session = Session::new(config).context("invalid configuration")?;
    info!(
        grid_size = session.config().grid_size,
        surface_px = session.config().surface_side(),
        "session ready"
    );
    println!("Controls: R - restart, Esc - quit");
    gui::run(session)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_mirror_the_session_config_defaults() {
        let args = Args::try_parse_from(["torus-life"]).expect("bare invocation should parse");
        let config = args.session_config();
        let defaults = SessionConfig::default();
        assert_eq!(config.grid_size, defaults.grid_size);
        assert_eq!(config.cell_px, defaults.cell_px);
        assert_eq!(config.tick_delay, defaults.tick_delay);
        assert_eq!(config.age_cap, defaults.age_cap);
        assert_eq!(config.step_cap, defaults.step_cap);
        assert_eq!(config.seed, None);
        assert!(!config.debug);
        assert!(!config.color);
    }

    #[test]
    fn short_flags_populate_the_config() {
        let args = Args::try_parse_from([
            "torus-life",
            "-n",
            "32",
            "-s",
            "3",
            "-t",
            "0.1",
            "-k",
            "20",
            "-r",
            "500",
            "-d",
            "-c",
        ])
        .expect("short flags should parse");
        let config = args.session_config();
        assert_eq!(config.grid_size, 32);
        assert_eq!(config.cell_px, 3);
        assert_eq!(config.tick_delay, 0.1);
        assert_eq!(config.age_cap, 20);
        assert_eq!(config.step_cap, 500);
        assert!(config.debug);
        assert!(config.color);
    }

    #[test]
    fn seed_flag_is_optional_and_long_only() {
        let args =
            Args::try_parse_from(["torus-life", "--seed", "42"]).expect("seed flag should parse");
        assert_eq!(args.session_config().seed, Some(42));
    }
}
