use std::{fmt, str::FromStr};

use num_derive::{FromPrimitive, ToPrimitive};
use time::Date;

use crate::{id::Id, time::Timestamp};

#[rustfmt::skip]
#[derive(Debug, Clone, Copy, PartialEq, Eq, FromPrimitive, ToPrimitive)]
pub enum SendType {
    Onsight  = 0,
    Redpoint = 1,
    Send     = 2,
    Abandon  = 3,
    Flash    = 4,
}

#[derive(Debug)]
pub struct SendTypeParseError;

impl FromStr for SendType {
    type Err = SendTypeParseError;
    fn from_str(s: &str) -> Result<SendType, Self::Err> {
        match &*s.to_lowercase() {
            "onsight" => Ok(SendType::Onsight),
            "redpoint" => Ok(SendType::Redpoint),
            "send" => Ok(SendType::Send),
            "abandon" => Ok(SendType::Abandon),
            "flash" => Ok(SendType::Flash),
            _ => Err(SendTypeParseError),
        }
    }
}

impl SendType {
    pub const fn label(self) -> &'static str {
        match self {
            SendType::Onsight => "Onsight send",
            SendType::Redpoint => "Redpoint send",
            SendType::Send => "Fell/hung and finished route",
            SendType::Abandon => "Abandoned ascent",
            SendType::Flash => "Flash",
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            SendType::Onsight => "onsight",
            SendType::Redpoint => "redpoint",
            SendType::Send => "send",
            SendType::Abandon => "abandon",
            SendType::Flash => "flash",
        }
    }

    pub const fn all() -> [SendType; 5] {
        [
            SendType::Onsight,
            SendType::Redpoint,
            SendType::Send,
            SendType::Abandon,
            SendType::Flash,
        ]
    }
}

impl fmt::Display for SendType {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        f.write_str(self.as_str())
    }
}

/// A personal route rating between 0 and 5 stars.
#[derive(Debug, Default, Clone, Copy, Eq, PartialEq, PartialOrd, Ord)]
pub struct RatingValue(i8);

impl RatingValue {
    pub fn new<I: Into<i8>>(val: I) -> Self {
        let new = Self(val.into());
        debug_assert!(new.is_valid());
        new
    }

    pub const fn min() -> Self {
        Self(0)
    }

    pub const fn max() -> Self {
        Self(5)
    }

    pub fn clamp(self) -> Self {
        Self(self.0.max(Self::min().0).min(Self::max().0))
    }

    pub fn is_valid(self) -> bool {
        self >= Self::min() && self <= Self::max()
    }
}

impl From<i8> for RatingValue {
    fn from(from: i8) -> Self {
        Self(from)
    }
}

impl From<RatingValue> for i8 {
    fn from(from: RatingValue) -> Self {
        from.0
    }
}

impl From<RatingValue> for f64 {
    fn from(from: RatingValue) -> Self {
        f64::from(from.0)
    }
}

impl fmt::Display for RatingValue {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        write!(f, "{}", self.0)
    }
}

/// The average of all rating values of a route's ascents.
#[derive(Debug, Default, Clone, Copy, PartialEq, PartialOrd)]
pub struct AvgRatingValue(f64);

impl AvgRatingValue {
    pub const fn min() -> Self {
        Self(0.0)
    }

    pub const fn max() -> Self {
        Self(5.0)
    }

    pub fn is_valid(self) -> bool {
        self >= Self::min() && self <= Self::max()
    }
}

impl From<f64> for AvgRatingValue {
    fn from(from: f64) -> Self {
        Self(from)
    }
}

impl From<AvgRatingValue> for f64 {
    fn from(from: AvgRatingValue) -> Self {
        from.0
    }
}

impl From<RatingValue> for AvgRatingValue {
    fn from(from: RatingValue) -> Self {
        f64::from(i8::from(from)).into()
    }
}

impl fmt::Display for AvgRatingValue {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        write!(f, "{:.1}", self.0)
    }
}

#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ascent {
    pub id         : Id,
    pub route_id   : Id,
    pub user_id    : Id,
    pub sent_on    : Date,
    pub send_type  : SendType,
    pub rating     : RatingValue,
    pub comment    : Option<String>,
    pub created_at : Timestamp,
}
