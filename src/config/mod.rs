/*!
Configuration of a context.

All configuration for a context is contained in a [Config], given when the context is [created](crate::context::Context::from_config).

The default configuration is deterministic:
- Decisions are made on the lowest atom without a value, with [negative](Polarity::Negative) polarity.
- There are no limits on a solve.
- Derivations of learned clauses are recorded.

```rust
# use cdcl_sat::config::{Config, Polarity};
let mut config = Config::default();
config.polarity.value = Polarity::Random;
config.polarity_lean.value = 0.75;
config.conflict_limit = Some(10_000);
```
*/

mod config_option;
pub use config_option::ConfigOption;

mod polarity;
pub use polarity::{Polarity, PolarityLean};

/// The primary configuration structure.
#[derive(Clone, Debug)]
pub struct Config {
    /// The polarity given to an atom chosen for a decision, when no [custom decider](crate::procedures::decision::Decider) is set.
    pub polarity: ConfigOption<Polarity>,

    /// The probability of choosing `true` for a decision with [random](Polarity::Random) polarity.
    pub polarity_lean: ConfigOption<PolarityLean>,

    /// Record the [derivation](crate::db::clause::Derivation) of each learned clause.
    pub record_derivations: ConfigOption<bool>,

    /// Stop a solve (with an unknown result) after this many conflicts.
    pub conflict_limit: Option<usize>,

    /// Stop a solve (with an unknown result) after this much time has passed.
    pub time_limit: Option<std::time::Duration>,

    /// The seed for the source of randomness of a context.
    pub seed: u64,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            polarity: ConfigOption {
                name: "polarity",
                min: Polarity::MIN,
                max: Polarity::MAX,
                value: Polarity::Negative,
            },

            polarity_lean: ConfigOption {
                name: "polarity_lean",
                min: 0.0,
                max: 1.0,
                value: 0.5,
            },

            record_derivations: ConfigOption {
                name: "record_derivations",
                min: false,
                max: true,
                value: true,
            },

            conflict_limit: None,

            time_limit: None,

            seed: 0,
        }
    }
}
