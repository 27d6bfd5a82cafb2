//! Efficacy ratings against adults and nymphs.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use strum::{Display, EnumIter, EnumString, IntoStaticStr};

use crate::error::Error;

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    EnumString,
    EnumIter,
    IntoStaticStr,
    Display,
)]
pub enum Efficacy {
    Poor,
    Good,
    Excellent,
}

impl Efficacy {
    pub fn as_str(&self) -> &'static str {
        self.into()
    }
}

/// Rating as printed on the label: a single grade or a span such as
/// "Good to Excellent".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EffectRating {
    Single(Efficacy),
    Range(Efficacy, Efficacy),
}

impl EffectRating {
    const RANGE_SEPARATOR: &'static str = " to ";
}

impl fmt::Display for EffectRating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Single(e) => f.write_str(e.as_str()),
            Self::Range(from, to) => {
                write!(f, "{}{}{}", from, Self::RANGE_SEPARATOR, to)
            }
        }
    }
}

impl FromStr for EffectRating {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || Error::InvalidValue {
            field: "effect rating",
            value: s.to_string(),
        };

        match s.trim().split_once(Self::RANGE_SEPARATOR) {
            Some((from, to)) => {
                let from: Efficacy = from.trim().parse().map_err(|_| invalid())?;
                let to: Efficacy = to.trim().parse().map_err(|_| invalid())?;
                // Ranges read low to high
                if from > to {
                    return Err(invalid());
                }
                Ok(Self::Range(from, to))
            }
            None => s.trim().parse().map(Self::Single).map_err(|_| invalid()),
        }
    }
}

impl Serialize for EffectRating {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for EffectRating {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
