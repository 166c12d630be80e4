use std::str::FromStr;

/// Representation for the probability of choosing `true`.
pub type PolarityLean = f64;

/// Variant polarities to give a decision.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum Polarity {
    /// Always decide an atom is false.
    Negative = 0,

    /// Always decide an atom is true.
    Positive,

    /// Decide an atom has the value it last held, and false if it has never held a value.
    Saved,

    /// Decide an atom is true with probability [polarity_lean](crate::config::Config::polarity_lean).
    Random,
}

impl std::fmt::Display for Polarity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Negative => write!(f, "Negative"),
            Self::Positive => write!(f, "Positive"),
            Self::Saved => write!(f, "Saved"),
            Self::Random => write!(f, "Random"),
        }
    }
}

impl Polarity {
    /// The minimum Polarity type.
    pub const MIN: Polarity = Polarity::Negative;

    /// The maximum Polarity type.
    pub const MAX: Polarity = Polarity::Random;
}

impl FromStr for Polarity {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Negative" => Ok(Self::Negative),
            "Positive" => Ok(Self::Positive),
            "Saved" => Ok(Self::Saved),
            "Random" => Ok(Self::Random),
            _unknown_string => Err(()),
        }
    }
}

#[cfg(test)]
mod polarity_tests {
    use super::*;

    #[test]
    fn string_round_trip() {
        for polarity in [
            Polarity::Negative,
            Polarity::Positive,
            Polarity::Saved,
            Polarity::Random,
        ] {
            assert_eq!(Polarity::from_str(&polarity.to_string()), Ok(polarity));
        }
        assert!(Polarity::from_str("Sideways").is_err());
    }
}
