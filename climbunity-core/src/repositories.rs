// Low-level database access traits.
// Each repository is responsible for a single entity and
// its relationships. Related entities are only referenced
// by their id and never modified or loaded by another
// repository.

use std::io;

use thiserror::Error;

use crate::entities::*;

#[derive(Debug, Error)]
pub enum Error {
    #[error("The requested object could not be found")]
    NotFound,
    #[error("The object already exists")]
    AlreadyExists,
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

type Result<T> = std::result::Result<T, Error>;

pub trait UserRepo {
    fn create_user(&self, user: &User) -> Result<()>;
    fn update_user(&self, user: &User) -> Result<()>;

    fn get_user(&self, id: &str) -> Result<User>;
    fn try_get_user_by_username(&self, username: &str) -> Result<Option<User>>;
    fn try_get_user_by_email(&self, email: &EmailAddress) -> Result<Option<User>>;

    fn all_users(&self) -> Result<Vec<User>>;
    fn count_users(&self) -> Result<usize>;
}

pub trait VenueRepo {
    fn create_venue(&self, venue: &Venue) -> Result<()>;
    fn update_venue(&self, venue: &Venue) -> Result<()>;

    fn get_venue(&self, id: &str) -> Result<Venue>;
    fn all_venues(&self) -> Result<Vec<Venue>>;
    fn count_venues(&self) -> Result<usize>;

    // Deletes the venue row only. Dependent routes, ascents and
    // appointments are deleted by the corresponding use case first.
    fn delete_venue(&self, id: &str) -> Result<()>;
}

pub trait RouteRepo {
    fn create_route(&self, route: &Route) -> Result<()>;
    // Replaces the stored style and tag sets with the given ones.
    fn update_route(&self, route: &Route) -> Result<()>;

    fn get_route(&self, id: &str) -> Result<Route>;
    fn routes_at_venue(&self, venue_id: &str) -> Result<Vec<Route>>;
    fn all_routes(&self) -> Result<Vec<Route>>;

    // Deletes the route together with its style, tag and project
    // association rows. Dependent ascents are deleted by the use case.
    fn delete_route(&self, id: &str) -> Result<()>;
}

pub trait AscentRepo {
    fn create_ascent(&self, ascent: &Ascent) -> Result<()>;

    fn get_ascent(&self, id: &str) -> Result<Ascent>;
    fn ascents_of_route(&self, route_id: &str) -> Result<Vec<Ascent>>;
    fn ascents_of_user(&self, user_id: &str) -> Result<Vec<Ascent>>;

    fn delete_ascent(&self, id: &str) -> Result<()>;
    fn delete_ascents_of_route(&self, route_id: &str) -> Result<usize>;
}

pub trait AppointmentRepo {
    fn create_appointment(&self, appointment: &Appointment) -> Result<()>;

    fn get_appointment(&self, id: &str) -> Result<Appointment>;
    fn appointments_at_venue(&self, venue_id: &str) -> Result<Vec<Appointment>>;
    fn appointments_of_user(&self, user_id: &str) -> Result<Vec<Appointment>>;

    // Adding an existing attendant is a no-op.
    fn add_appointment_attendant(&self, id: &str, user_id: &str) -> Result<()>;

    // Clears the attendant set before deleting the row.
    fn delete_appointment(&self, id: &str) -> Result<()>;
    fn delete_appointments_at_venue(&self, venue_id: &str) -> Result<usize>;
}

pub trait ProjectRepo {
    // Adding a route twice is a no-op.
    fn add_project(&self, user_id: &str, route_id: &str) -> Result<()>;
    // Returns the number of removed rows (zero for a non-member).
    fn remove_project(&self, user_id: &str, route_id: &str) -> Result<usize>;

    fn project_route_ids_of_user(&self, user_id: &str) -> Result<Vec<Id>>;
    fn projecting_user_ids_of_route(&self, route_id: &str) -> Result<Vec<Id>>;
}

pub trait StyleRepo {
    fn create_style_if_it_does_not_exist(&self, style: &Style) -> Result<()>;
    fn all_styles(&self) -> Result<Vec<Style>>;
    fn count_styles(&self) -> Result<usize>;
}

pub trait TagRepo {
    fn create_tag_if_it_does_not_exist(&self, tag: &Tag) -> Result<()>;
    fn all_tags(&self) -> Result<Vec<Tag>>;
    fn count_tags(&self) -> Result<usize>;
}
