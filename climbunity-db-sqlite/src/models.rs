#![allow(clippy::extra_unused_lifetimes)]

// NOTE:
// All timestamps with the `_at` postfix are stored
// as unix timestamps in seconds. Calendar dates with
// the `_on` postfix are stored as ISO 8601 strings.

use super::schema::*;

#[derive(Insertable, AsChangeset)]
#[diesel(table_name = users)]
pub struct NewUser<'a> {
    pub id: &'a str,
    pub username: &'a str,
    pub email: &'a str,
    pub password: &'a str,
    pub first_name: &'a str,
    pub last_name: &'a str,
    pub address: &'a str,
    pub has_gear: bool,
    pub is_admin: bool,
}

impl<'a> From<&'a climbunity_core::entities::User> for NewUser<'a> {
    fn from(from: &'a climbunity_core::entities::User) -> Self {
        Self {
            id: from.id.as_str(),
            username: &from.username,
            email: from.email.as_str(),
            password: from.password.as_ref(),
            first_name: &from.first_name,
            last_name: &from.last_name,
            address: &from.address,
            has_gear: from.has_gear,
            is_admin: from.is_admin,
        }
    }
}

#[derive(Queryable)]
pub struct UserEntity {
    pub rowid: i64,
    pub id: String,
    pub username: String,
    pub email: String,
    pub password: String,
    pub first_name: String,
    pub last_name: String,
    pub address: String,
    pub has_gear: bool,
    pub is_admin: bool,
}

#[derive(Insertable)]
#[diesel(table_name = user_styles)]
pub struct NewUserStyle<'a> {
    pub user_rowid: i64,
    pub style_label: &'a str,
}

// Unset optional fields must clear the stored value on update.
#[derive(Insertable, AsChangeset)]
#[diesel(table_name = venues, treat_none_as_null = true)]
pub struct NewVenue<'a> {
    pub id: &'a str,
    pub name: &'a str,
    pub address: &'a str,
    pub opening_hours: Option<&'a str>,
    pub description: Option<&'a str>,
}

impl<'a> From<&'a climbunity_core::entities::Venue> for NewVenue<'a> {
    fn from(from: &'a climbunity_core::entities::Venue) -> Self {
        Self {
            id: from.id.as_str(),
            name: &from.name,
            address: &from.address,
            opening_hours: from.opening_hours.as_deref(),
            description: from.description.as_deref(),
        }
    }
}

#[derive(Queryable)]
pub struct VenueEntity {
    pub rowid: i64,
    pub id: String,
    pub name: String,
    pub address: String,
    pub opening_hours: Option<String>,
    pub description: Option<String>,
}

#[derive(Insertable, AsChangeset)]
#[diesel(table_name = routes, treat_none_as_null = true)]
pub struct NewRoute<'a> {
    pub id: &'a str,
    pub venue_rowid: i64,
    pub setter_rowid: Option<i64>,
    pub name: &'a str,
    pub grade: &'a str,
    pub photo: &'a str,
    pub set_on: Option<String>,
    pub takedown_on: Option<String>,
}

#[derive(Queryable)]
pub struct RouteEntity {
    pub rowid: i64,
    pub id: String,
    pub name: String,
    pub grade: String,
    pub photo: String,
    pub set_on: Option<String>,
    pub takedown_on: Option<String>,
    // Joined columns
    pub venue_id: String,
    pub setter_id: Option<String>,
}

#[derive(Insertable)]
#[diesel(table_name = route_styles)]
pub struct NewRouteStyle<'a> {
    pub route_rowid: i64,
    pub style_label: &'a str,
}

#[derive(Insertable)]
#[diesel(table_name = route_tags)]
pub struct NewRouteTag<'a> {
    pub route_rowid: i64,
    pub tag_label: &'a str,
}

#[derive(Insertable)]
#[diesel(table_name = user_projects)]
pub struct NewUserProject {
    pub user_rowid: i64,
    pub route_rowid: i64,
}

#[derive(Insertable)]
#[diesel(table_name = ascents)]
pub struct NewAscent<'a> {
    pub id: &'a str,
    pub route_rowid: i64,
    pub user_rowid: i64,
    pub sent_on: String,
    pub send_type: i16,
    pub rating: i16,
    pub comment: Option<&'a str>,
    pub created_at: i64,
}

#[derive(Queryable)]
pub struct AscentEntity {
    pub rowid: i64,
    pub id: String,
    pub sent_on: String,
    pub send_type: i16,
    pub rating: i16,
    pub comment: Option<String>,
    pub created_at: i64,
    // Joined columns
    pub route_id: String,
    pub user_id: String,
}

#[derive(Insertable)]
#[diesel(table_name = appointments)]
pub struct NewAppointment<'a> {
    pub id: &'a str,
    pub created_by: i64,
    pub venue_rowid: i64,
    pub scheduled_at: i64,
    pub created_at: i64,
}

#[derive(Queryable)]
pub struct AppointmentEntity {
    pub rowid: i64,
    pub id: String,
    pub scheduled_at: i64,
    pub created_at: i64,
    // Joined columns
    pub created_by: String,
    pub venue_id: String,
}

#[derive(Insertable)]
#[diesel(table_name = appointment_attendants)]
pub struct NewAppointmentAttendant {
    pub appointment_rowid: i64,
    pub user_rowid: i64,
}

#[derive(Insertable)]
#[diesel(table_name = styles)]
pub struct NewStyle<'a> {
    pub label: &'a str,
}

#[derive(Insertable)]
#[diesel(table_name = tags)]
pub struct NewTag<'a> {
    pub label: &'a str,
}
