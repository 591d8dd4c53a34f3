mod coin;
mod error;
mod monument;
mod permutations;

pub use coin::Coin;
pub use error::Error;
pub use monument::{Arrangement, Monument, COINS, TARGET};
pub use permutations::Permutations;
