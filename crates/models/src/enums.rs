use std::fmt;
use std::marker::PhantomData;

use sea_orm::entity::prelude::*;
use serde::de::{self, Deserializer, Visitor};
use serde::{Deserialize, Serialize};

/// Kind of order; stored as its integer discriminant.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, EnumIter, DeriveActiveEnum, Serialize)]
#[sea_orm(rs_type = "i32", db_type = "Integer")]
pub enum OrderType {
    #[default]
    #[sea_orm(num_value = 0)]
    None,
    #[sea_orm(num_value = 1)]
    Standard,
    #[sea_orm(num_value = 2)]
    Express,
    #[sea_orm(num_value = 3)]
    Subscription,
}

/// Staff role; stored as its integer discriminant.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, EnumIter, DeriveActiveEnum, Serialize)]
#[sea_orm(rs_type = "i32", db_type = "Integer")]
pub enum JobType {
    #[default]
    #[sea_orm(num_value = 0)]
    None,
    #[sea_orm(num_value = 1)]
    Worker,
    #[sea_orm(num_value = 2)]
    Manager,
    #[sea_orm(num_value = 3)]
    Administrator,
}

impl OrderType {
    pub fn name(self) -> &'static str {
        match self {
            OrderType::None => "None",
            OrderType::Standard => "Standard",
            OrderType::Express => "Express",
            OrderType::Subscription => "Subscription",
        }
    }
}

impl JobType {
    pub fn name(self) -> &'static str {
        match self {
            JobType::None => "None",
            JobType::Worker => "Worker",
            JobType::Manager => "Manager",
            JobType::Administrator => "Administrator",
        }
    }
}

impl fmt::Display for OrderType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { f.write_str(self.name()) }
}

impl fmt::Display for JobType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { f.write_str(self.name()) }
}

/// Enums written out by variant name but read from either the name or the
/// integer discriminant (`"Standard"` and `1` are the same value).
trait WireEnum: ActiveEnum<Value = i32> {
    const NAMES: &'static [&'static str];
    fn from_name(name: &str) -> Option<Self>;
}

impl WireEnum for OrderType {
    const NAMES: &'static [&'static str] = &["None", "Standard", "Express", "Subscription"];

    fn from_name(name: &str) -> Option<Self> {
        match name {
            "None" => Some(OrderType::None),
            "Standard" => Some(OrderType::Standard),
            "Express" => Some(OrderType::Express),
            "Subscription" => Some(OrderType::Subscription),
            _ => None,
        }
    }
}

impl WireEnum for JobType {
    const NAMES: &'static [&'static str] = &["None", "Worker", "Manager", "Administrator"];

    fn from_name(name: &str) -> Option<Self> {
        match name {
            "None" => Some(JobType::None),
            "Worker" => Some(JobType::Worker),
            "Manager" => Some(JobType::Manager),
            "Administrator" => Some(JobType::Administrator),
            _ => None,
        }
    }
}

struct WireVisitor<T>(PhantomData<T>);

impl<'de, T: WireEnum> Visitor<'de> for WireVisitor<T> {
    type Value = T;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "an integer discriminant or one of {:?}", T::NAMES)
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<T, E> {
        i32::try_from(v)
            .ok()
            .and_then(|n| T::try_from_value(&n).ok())
            .ok_or_else(|| E::invalid_value(de::Unexpected::Signed(v), &self))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<T, E> {
        i32::try_from(v)
            .ok()
            .and_then(|n| T::try_from_value(&n).ok())
            .ok_or_else(|| E::invalid_value(de::Unexpected::Unsigned(v), &self))
    }

    // path and query values always arrive as strings
    fn visit_str<E: de::Error>(self, v: &str) -> Result<T, E> {
        if let Ok(n) = v.parse::<i64>() {
            return self.visit_i64(n);
        }
        T::from_name(v).ok_or_else(|| E::unknown_variant(v, T::NAMES))
    }
}

impl<'de> Deserialize<'de> for OrderType {
    fn deserialize<D: Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
        d.deserialize_any(WireVisitor(PhantomData))
    }
}

impl<'de> Deserialize<'de> for JobType {
    fn deserialize<D: Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
        d.deserialize_any(WireVisitor(PhantomData))
    }
}
