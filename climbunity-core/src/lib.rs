//! # climbunity-core
//!
//! Use cases and data access contracts of the Climbunity application.

pub mod entities {
    pub use climbunity_entities::{
        appointment::*, ascent::*, email::*, id::*, password::*, route::*, style::*, tag::*,
        time::*, user::*, venue::*,
    };
}

pub mod gateways;
pub mod rating;
pub mod repositories;
pub mod usecases;
pub mod util;
