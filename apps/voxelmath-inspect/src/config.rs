//! Command-line configuration.

use anyhow::{bail, Context};
use voxelmath_core::Vector3;

/// What to compute.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Command {
    /// Pitch/yaw/roll to quaternion and back.
    Euler { pitch: f32, yaw: f32, roll: f32 },
    /// Shortest rotation from one direction to another.
    Between { from: Vector3, to: Vector3 },
    /// Print usage.
    Help,
}

/// Inspector configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct InspectConfig {
    pub command: Command,
    /// Decimal places in printed output.
    pub precision: usize,
}

impl Default for InspectConfig {
    fn default() -> Self {
        Self {
            command: Command::Help,
            precision: 4,
        }
    }
}

impl InspectConfig {
    /// Create a config running the given command.
    pub fn new(command: Command) -> Self {
        Self {
            command,
            ..Default::default()
        }
    }

    /// Set the number of printed decimal places.
    #[must_use]
    pub fn with_precision(mut self, precision: usize) -> Self {
        self.precision = precision;
        self
    }

    /// Parse arguments, not including the program name.
    pub fn from_args<I>(args: I) -> anyhow::Result<Self>
    where
        I: IntoIterator<Item = String>,
    {
        let mut precision = Self::default().precision;
        let mut positional = Vec::new();
        let mut args = args.into_iter();

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "-h" | "--help" => return Ok(Self::default()),
                "-p" | "--precision" => {
                    let value = args.next().context("--precision requires a value")?;
                    precision = value
                        .parse()
                        .with_context(|| format!("invalid precision {value:?}"))?;
                }
                _ => positional.push(arg),
            }
        }

        let Some((name, rest)) = positional.split_first() else {
            return Ok(Self::default().with_precision(precision));
        };

        let command = match (name.as_str(), rest) {
            ("euler", [pitch, yaw, roll]) => Command::Euler {
                pitch: parse_angle("pitch", pitch)?,
                yaw: parse_angle("yaw", yaw)?,
                roll: parse_angle("roll", roll)?,
            },
            ("euler", _) => bail!("usage: euler <PITCH> <YAW> <ROLL>"),
            ("between", [from, to]) => Command::Between {
                from: from.parse().context("invalid FROM vector")?,
                to: to.parse().context("invalid TO vector")?,
            },
            ("between", _) => bail!("usage: between <X,Y,Z> <X,Y,Z>"),
            (other, _) => bail!("unknown command {other:?}"),
        };

        Ok(Self::new(command).with_precision(precision))
    }
}

fn parse_angle(name: &str, value: &str) -> anyhow::Result<f32> {
    value
        .parse()
        .with_context(|| format!("invalid {name} angle {value:?}"))
}
