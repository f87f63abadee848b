use std::path::Path;

use numjumble::{solve, spell_digits, JumbleConfig};
use tracing_subscriber::EnvFilter;

const SAMPLES: [&str; 2] = ["oaadnggeghthwhtohtthrtthehe", "othrene"];

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    // Prefer a config file in the working directory if there is one.
    let config_path = Path::new("numjumble.toml");
    let config = if config_path.exists() {
        JumbleConfig::load_toml(config_path)?
    } else {
        JumbleConfig::default()
    };
    tracing::info!(strategy = ?config.strategy, strip_noise = config.base().strip_noise, "configured");

    for sample in SAMPLES {
        match solve(sample, &config) {
            Some(number) => println!(
                "{} -> {} ({})",
                sample,
                number,
                spell_digits(&number).join(" ")
            ),
            None => println!("{} -> (no number found)", sample),
        }
    }
    Ok(())
}
