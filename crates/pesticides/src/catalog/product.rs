use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::efficacy::EffectRating;
use crate::error::Error;

/// Pre-harvest interval: whole days, or a label exception printed verbatim
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PreHarvestInterval {
    Days(u32),
    Exception(Cow<'static, str>),
}

impl PreHarvestInterval {
    pub const UNTIL_DRY: Self = Self::Exception(Cow::Borrowed("Until spray has dried"));
    pub const UP_TO_HARVEST: Self = Self::Exception(Cow::Borrowed("Up to day of harvest"));
}

impl fmt::Display for PreHarvestInterval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Days(d) => write!(f, "{}", d),
            Self::Exception(text) => f.write_str(text),
        }
    }
}

impl FromStr for PreHarvestInterval {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(Error::InvalidValue {
                field: "pre-harvest interval",
                value: s.to_string(),
            });
        }

        Ok(match trimmed.parse::<u32>() {
            Ok(days) => Self::Days(days),
            Err(_) => Self::Exception(Cow::Owned(s.to_string())),
        })
    }
}

impl Serialize for PreHarvestInterval {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Days(d) => serializer.serialize_u32(*d),
            Self::Exception(text) => serializer.serialize_str(text),
        }
    }
}

struct PhiVisitor;

impl Visitor<'_> for PhiVisitor {
    type Value = PreHarvestInterval;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a number of days or an interval description")
    }

    // csv infers scalar types from the raw field; anything that is not a
    // u32 ends up as an exception, same as FromStr.
    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Self::Value, E> {
        self.visit_str(&v.to_string())
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Self::Value, E> {
        self.visit_str(&v.to_string())
    }

    fn visit_u128<E: de::Error>(self, v: u128) -> Result<Self::Value, E> {
        self.visit_str(&v.to_string())
    }

    fn visit_i128<E: de::Error>(self, v: i128) -> Result<Self::Value, E> {
        self.visit_str(&v.to_string())
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<Self::Value, E> {
        self.visit_str(&v.to_string())
    }

    fn visit_bool<E: de::Error>(self, v: bool) -> Result<Self::Value, E> {
        self.visit_str(&v.to_string())
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
        v.parse().map_err(E::custom)
    }
}

impl<'de> Deserialize<'de> for PreHarvestInterval {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(PhiVisitor)
    }
}

/// One pesticide product row
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    #[serde(rename = "Product")]
    pub name: Cow<'static, str>,
    #[serde(rename = "Active Ingredient")]
    pub active_ingredient: Cow<'static, str>,
    #[serde(rename = "Use Restrictions")]
    pub use_restrictions: Cow<'static, str>,
    #[serde(rename = "EPA Reg No.")]
    pub epa_reg_no: Cow<'static, str>,
    #[serde(rename = "IRAC Group")]
    pub irac_group: Cow<'static, str>,
    #[serde(rename = "Rate/A")]
    pub rate_per_acre: f64,
    #[serde(rename = "REI (hours)")]
    pub rei_hours: u32,
    #[serde(rename = "PHI (days)")]
    pub phi: PreHarvestInterval,
    #[serde(rename = "Effect on Adults")]
    pub effect_on_adults: EffectRating,
    #[serde(rename = "Effect on Nymphs")]
    pub effect_on_nymphs: EffectRating,
}

impl Product {
    /// Build a product from static label data
    #[allow(clippy::too_many_arguments)] // One argument per column
    pub const fn new(
        name: &'static str,
        active_ingredient: &'static str,
        use_restrictions: &'static str,
        epa_reg_no: &'static str,
        irac_group: &'static str,
        rate_per_acre: f64,
        rei_hours: u32,
        phi: PreHarvestInterval,
        effect_on_adults: EffectRating,
        effect_on_nymphs: EffectRating,
    ) -> Self {
        Self {
            name: Cow::Borrowed(name),
            active_ingredient: Cow::Borrowed(active_ingredient),
            use_restrictions: Cow::Borrowed(use_restrictions),
            epa_reg_no: Cow::Borrowed(epa_reg_no),
            irac_group: Cow::Borrowed(irac_group),
            rate_per_acre,
            rei_hours,
            phi,
            effect_on_adults,
            effect_on_nymphs,
        }
    }

    /// Individual IRAC mode-of-action codes ("3A, 4A" -> "3A", "4A")
    pub fn irac_codes(&self) -> impl Iterator<Item = &str> {
        self.irac_group
            .split(',')
            .map(str::trim)
            .filter(|code| !code.is_empty())
    }
}
