use std::{convert::TryFrom, fmt};

use crate::Error;

/*
Things of interest here:
- red coin
- corroded coin
- shiny coin
- concave coin
- blue coin
*/

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Coin {
    Red,
    Corroded,
    Shiny,
    Concave,
    Blue,
}

impl Coin {
    pub const ALL: [Coin; 5] = [
        Coin::Red,
        Coin::Corroded,
        Coin::Shiny,
        Coin::Concave,
        Coin::Blue,
    ];

    /// What the coin is worth in the monument's equation.
    pub fn value(self) -> i64 {
        match self {
            Coin::Red => 2,
            Coin::Corroded => 3,
            Coin::Shiny => 5,
            Coin::Concave => 7,
            Coin::Blue => 9,
        }
    }
}

impl TryFrom<i64> for Coin {
    type Error = Error;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Coin::ALL
            .iter()
            .copied()
            .find(|coin| coin.value() == value)
            .ok_or(Error::UnknownCoin(value))
    }
}

impl fmt::Display for Coin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Coin::Red => f.pad("red coin"),
            Coin::Corroded => f.pad("corroded coin"),
            Coin::Shiny => f.pad("shiny coin"),
            Coin::Concave => f.pad("concave coin"),
            Coin::Blue => f.pad("blue coin"),
        }
    }
}
