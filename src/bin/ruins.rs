use eyre::Result;
use log::{info, warn};

use synacor_coins::Monument;

fn main() -> Result<()> {
    color_eyre::install()?;
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    // _ + _ * _^2 + _^3 - _ = 399
    let monument = Monument::ruins();

    let solution = match monument.solve() {
        Some(solution) => solution,
        None => {
            warn!(
                "no ordering of {:?} reaches {}",
                monument.values(),
                monument.target()
            );
            return Ok(());
        }
    };

    println!("{}", solution);

    for (slot, coin) in solution.coins()?.iter().enumerate() {
        info!("slot {}: use {}", slot + 1, coin);
    }

    Ok(())
}
