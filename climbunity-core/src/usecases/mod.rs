mod create_appointment;
mod create_new_route;
mod create_new_user;
mod create_new_venue;
mod delete_appointment;
mod delete_ascent;
mod delete_route;
mod delete_venue;
mod error;
mod join_appointment;
mod log_ascent;
mod login;
mod projects;
mod update_route;
mod update_user_profile;
mod update_venue;

#[cfg(test)]
pub mod tests;

type Result<T> = std::result::Result<T, Error>;

pub use self::{
    create_appointment::*, create_new_route::*, create_new_user::*, create_new_venue::*,
    delete_appointment::*, delete_ascent::*, delete_route::*, delete_venue::*, error::Error,
    join_appointment::*, log_ascent::*, login::*, projects::*, update_route::*,
    update_user_profile::*, update_venue::*,
};

mod prelude {
    pub use super::error::Error;
    pub type Result<T> = std::result::Result<T, Error>;
    pub use crate::{entities::*, repositories::Error as RepoError, repositories::*};
}
use self::prelude::*;

pub fn get_user<R: UserRepo>(repo: &R, id: &str) -> Result<User> {
    Ok(repo.get_user(id)?)
}

pub fn get_venue<R: VenueRepo>(repo: &R, id: &str) -> Result<Venue> {
    Ok(repo.get_venue(id)?)
}

pub fn get_route<R: RouteRepo>(repo: &R, id: &str) -> Result<Route> {
    Ok(repo.get_route(id)?)
}

pub fn get_appointment<R: AppointmentRepo>(repo: &R, id: &str) -> Result<Appointment> {
    Ok(repo.get_appointment(id)?)
}

/// Normalize a list of style or tag labels: trimmed, lowercase,
/// sorted and free of duplicates and empty entries.
pub fn prepare_label_list<'a>(labels: impl IntoIterator<Item = &'a str>) -> Vec<String> {
    let mut labels: Vec<_> = labels
        .into_iter()
        .filter_map(|l| match l.trim() {
            l if l.is_empty() => None,
            l => Some(l.to_lowercase()),
        })
        .collect();
    labels.sort_unstable();
    labels.dedup();
    labels
}

#[cfg(test)]
mod label_tests {
    use super::*;

    #[test]
    fn prepare_labels() {
        let labels = prepare_label_list(vec![" Boulder", "lead", "boulder", "", "  "]);
        assert_eq!(labels, vec!["boulder", "lead"]);
    }
}
