use anyhow::anyhow;
use diesel::{
    self,
    prelude::{Connection as DieselConnection, *},
    result::{DatabaseErrorKind, Error as DieselError},
};

use climbunity_core::{
    entities::*,
    repositories::{self as repo, *},
};

use super::{models, schema, util, *};

mod appointment;
mod ascent;
mod project;
mod route;
mod style;
mod tag;
mod user;
mod venue;

type Result<T> = std::result::Result<T, repo::Error>;

pub fn from_diesel_err(err: DieselError) -> repo::Error {
    match err {
        DieselError::NotFound => repo::Error::NotFound,
        DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => {
            repo::Error::AlreadyExists
        }
        _ => repo::Error::Other(err.into()),
    }
}

fn load_date(value: &str) -> Result<time::Date> {
    parse_date(value).map_err(|err| anyhow!("Invalid stored date {value}: {err}").into())
}

fn load_send_type(value: i16) -> Result<SendType> {
    use num_traits::FromPrimitive as _;
    SendType::from_i16(value).ok_or_else(|| anyhow!("Invalid send type: {value}").into())
}
