use maud::Markup;
use rocket::{
    self,
    form::Form,
    get, post,
    request::FlashMessage,
    response::{Flash, Redirect},
    FromForm,
};

use super::{login_redirect, view};
use crate::web::{guards::*, sqlite::Connections, Result};
use climbunity_core::{
    repositories::{AppointmentRepo, AscentRepo, ProjectRepo, RouteRepo, StyleRepo, UserRepo, VenueRepo},
    usecases,
};

#[derive(FromForm)]
pub struct ProfileForm {
    pub(crate) first_name: String,
    pub(crate) last_name: String,
    pub(crate) address: String,
    pub(crate) has_gear: bool,
    pub(crate) styles: Vec<String>,
}

#[get("/users")]
pub fn get_users(db: Connections, auth: Auth) -> Result<Markup> {
    let account_username = auth.account_username().ok().map(ToOwned::to_owned);
    let db = db.shared()?;
    let users = db.all_users()?;
    Ok(view::all_users(account_username.as_deref(), &users))
}

#[get("/profile/<user_id>")]
pub fn get_profile(
    db: Connections,
    auth: Auth,
    user_id: &str,
    flash: Option<FlashMessage>,
) -> Result<Markup> {
    let account_username = auth.account_username().ok().map(ToOwned::to_owned);
    let db = db.shared()?;
    let user = usecases::get_user(&db, user_id)?;
    let ascents = db.ascents_of_user(user_id)?;
    let mut ascended_routes = Vec::with_capacity(ascents.len());
    for ascent in &ascents {
        ascended_routes.push(db.get_route(ascent.route_id.as_str())?);
    }
    let mut projects = Vec::new();
    for route_id in db.project_route_ids_of_user(user_id)? {
        projects.push(db.get_route(route_id.as_str())?);
    }
    let mut appointments = Vec::new();
    for appointment in db.appointments_of_user(user_id)? {
        let venue = db.get_venue(appointment.venue_id.as_str())?;
        appointments.push((appointment, venue));
    }
    let is_own_profile = account_username.as_deref() == Some(user.username.as_str());
    Ok(view::user_profile(
        account_username.as_deref(),
        flash,
        &user,
        &ascents,
        &ascended_routes,
        &projects,
        &appointments,
        is_own_profile,
    ))
}

#[allow(clippy::result_large_err)]
#[get("/edit_profile/<user_id>")]
pub fn get_edit_profile(
    db: Connections,
    account: Option<Account>,
    user_id: &str,
    flash: Option<FlashMessage>,
) -> std::result::Result<Result<Markup>, Redirect> {
    let Some(account) = account else {
        return Err(login_redirect(&format!("/edit_profile/{user_id}")));
    };
    Ok((|| {
        let db = db.shared()?;
        let user = usecases::get_user(&db, user_id)?;
        if user.username != account.username() {
            return Err(crate::web::error::ParameterError::Forbidden.into());
        }
        let styles = db.all_styles()?;
        Ok(view::edit_profile(flash, &user, &styles))
    })())
}

#[allow(clippy::result_large_err)]
#[post("/edit_profile/<user_id>", data = "<form>")]
pub fn post_edit_profile(
    db: Connections,
    account: Option<Account>,
    user_id: &str,
    form: Form<ProfileForm>,
) -> std::result::Result<Redirect, Flash<Redirect>> {
    let Some(account) = account else {
        return Ok(login_redirect(&format!("/edit_profile/{user_id}")));
    };
    let Ok(db) = db.exclusive() else {
        return Err(Flash::error(
            Redirect::to(format!("/profile/{user_id}")),
            "We are so sorry! An internal server error has occurred. Please try again later.",
        ));
    };
    let logged_in = match account.user(&db) {
        Ok(user) => user,
        Err(_) => return Ok(login_redirect(&format!("/edit_profile/{user_id}"))),
    };
    let form = form.into_inner();
    let update = usecases::UpdateUserProfile {
        first_name: form.first_name,
        last_name: form.last_name,
        address: form.address,
        has_gear: form.has_gear,
        styles: form.styles,
    };
    match usecases::update_user_profile(&db, &logged_in, user_id, update) {
        Err(_) => Err(Flash::error(
            Redirect::to(format!("/profile/{user_id}")),
            "Failed to edit the profile.",
        )),
        Ok(()) => Ok(Redirect::to(format!("/profile/{user_id}"))),
    }
}
