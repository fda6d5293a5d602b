#[macro_use]
extern crate log;

mod create_appointment;
mod create_route;
mod delete_route;
mod delete_venue;
mod update_route;

pub mod prelude {
    pub use super::{
        create_appointment::*, create_route::*, delete_route::*, delete_venue::*, update_route::*,
    };
}

pub mod error;

pub type Result<T> = std::result::Result<T, error::AppError>;

pub(crate) use climbunity_core::{entities::*, usecases};

pub(crate) mod sqlite {
    pub use climbunity_db_sqlite::Connections;
}

#[cfg(test)]
pub(crate) mod tests;
