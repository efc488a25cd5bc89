//! User facing configuration and validated parameter changes.
use crate::{
    core::layout::{Layout, LayoutParams},
    pure::{geometry::Insets, TagSet},
    Error, Result,
};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// The main user facing configuration details.
///
/// Every screen is given its own copy of the configured tags, each starting out with the
/// first configured layout and the default layout parameters.
///
/// # Example
/// ```
/// use trellis::{Config, Layout};
///
/// let config = Config {
///     tags: vec!["web".into(), "dev".into(), "chat".into()],
///     layouts: vec![Layout::Tile, Layout::Max],
///     ..Default::default()
/// };
///
/// assert!(config.validate().is_ok());
/// ```
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// The names of the tags created for each screen
    pub tags: Vec<String>,
    /// The layouts that can be cycled through on each tag, the first being the default
    pub layouts: Vec<Layout>,
    /// The initial master width factor of each tag
    pub mwfact: f64,
    /// The initial number of master clients of each tag
    pub nmaster: u32,
    /// The initial number of stack columns of each tag
    pub ncol: u32,
    /// The border width in pixels given to newly managed clients
    pub border_width: u32,
    /// Space left empty around the edges of each screen
    pub padding: Insets,
    /// The lower bound that `mwfact` is clamped to when changed
    pub mwfact_min: f64,
    /// The upper bound that `mwfact` is clamped to when changed
    pub mwfact_max: f64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            tags: (1..=9).map(|n| n.to_string()).collect(),
            layouts: vec![
                Layout::Tile,
                Layout::TileLeft,
                Layout::BStack,
                Layout::BStackPortrait,
                Layout::FairH,
                Layout::FairV,
                Layout::Spiral,
                Layout::Dwindle,
                Layout::Magnifier,
                Layout::Max,
                Layout::Floating,
            ],
            mwfact: 0.5,
            nmaster: 1,
            ncol: 1,
            border_width: 1,
            padding: Insets::default(),
            mwfact_min: 0.1,
            mwfact_max: 0.9,
        }
    }
}

impl Config {
    /// Check that the values in this config can be safely passed on to layouts.
    pub fn validate(&self) -> Result<()> {
        for f in [self.mwfact, self.mwfact_min, self.mwfact_max] {
            if !(f > 0.0 && f < 1.0) {
                return Err(Error::InvalidMwfact(f));
            }
        }

        if self.mwfact_min > self.mwfact_max {
            return Err(Error::Raw(format!(
                "mwfact_min ({}) is greater than mwfact_max ({})",
                self.mwfact_min, self.mwfact_max
            )));
        }

        if self.ncol == 0 {
            return Err(Error::InvalidNcol);
        }

        if self.tags.len() > TagSet::MAX_TAGS {
            return Err(Error::TooManyTags {
                n: self.tags.len(),
                max: TagSet::MAX_TAGS,
            });
        }

        if self.tags.is_empty() {
            return Err(Error::Raw("at least one tag name is required".to_string()));
        }

        if self.layouts.is_empty() {
            return Err(Error::Raw("at least one layout is required".to_string()));
        }

        Ok(())
    }

    /// The [LayoutParams] given to each tag when it is created.
    pub fn default_params(&self) -> LayoutParams {
        LayoutParams {
            mwfact: self.mwfact.clamp(self.mwfact_min, self.mwfact_max),
            nmaster: self.nmaster,
            ncol: self.ncol.max(1),
        }
    }
}

/// A requested change to a numeric layout parameter.
///
/// Changes are written the same way as key binding arguments: a leading `+` or `-` marks
/// the value as relative to the current value, anything else replaces it outright.
/// ```
/// use trellis::core::config::Change;
///
/// assert_eq!("+0.05".parse::<Change>().unwrap(), Change::Relative(0.05));
/// assert_eq!("-1".parse::<Change>().unwrap(), Change::Relative(-1.0));
/// assert_eq!("3".parse::<Change>().unwrap(), Change::Absolute(3.0));
/// assert!("three".parse::<Change>().is_err());
/// ```
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Change {
    /// Replace the current value
    Absolute(f64),
    /// Offset the current value
    Relative(f64),
}

impl Change {
    /// Parse a change from a key binding style argument.
    pub fn parse(s: &str) -> Result<Self> {
        let s = s.trim();
        let relative = s.starts_with('+') || s.starts_with('-');

        let v: f64 = s
            .parse()
            .map_err(|_| Error::InvalidValue(s.to_string()))?;

        if !v.is_finite() {
            return Err(Error::InvalidValue(s.to_string()));
        }

        Ok(if relative {
            Change::Relative(v)
        } else {
            Change::Absolute(v)
        })
    }

    /// Apply this change to `current`, returning the new value.
    pub fn apply(&self, current: f64) -> f64 {
        match *self {
            Change::Absolute(v) => v,
            Change::Relative(d) => current + d,
        }
    }

    /// Flip the direction of a relative change, absolute changes are left untouched.
    pub fn inverted(&self) -> Self {
        match *self {
            Change::Relative(d) => Change::Relative(-d),
            abs => abs,
        }
    }
}

impl FromStr for Change {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Change::parse(s)
    }
}
