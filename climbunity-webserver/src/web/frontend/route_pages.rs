use maud::Markup;
use rocket::{
    self,
    form::Form,
    get, post,
    request::FlashMessage,
    response::{Flash, Redirect},
    uri, FromForm,
};

use super::{login_redirect, view, EmbeddedImages};
use crate::web::{guards::*, sqlite::Connections, Result};
use climbunity_application::prelude as flows;
use climbunity_core::{
    entities::*,
    rating::Rated,
    repositories::{AscentRepo, ProjectRepo, RouteRepo, StyleRepo, TagRepo, UserRepo, VenueRepo},
    usecases,
};

#[derive(FromForm)]
pub struct RouteForm {
    pub(crate) name: String,
    pub(crate) venue_id: String,
    pub(crate) setter_id: Option<String>,
    pub(crate) grade: String,
    pub(crate) photo: Option<String>,
    pub(crate) route_set_date: Option<String>,
    pub(crate) route_takedown_date: Option<String>,
    pub(crate) styles: Vec<String>,
    pub(crate) tags: Vec<String>,
}

fn parse_route_form(form: RouteForm) -> std::result::Result<usecases::NewRoute, &'static str> {
    let RouteForm {
        name,
        venue_id,
        setter_id,
        grade,
        photo,
        route_set_date,
        route_takedown_date,
        styles,
        tags,
    } = form;
    let set_on = route_set_date
        .filter(|s| !s.is_empty())
        .map(|s| parse_date(&s))
        .transpose()
        .map_err(|_| "Invalid route set date.")?;
    let takedown_on = route_takedown_date
        .filter(|s| !s.is_empty())
        .map(|s| parse_date(&s))
        .transpose()
        .map_err(|_| "Invalid route takedown date.")?;
    Ok(usecases::NewRoute {
        venue_id: venue_id.into(),
        setter_id: setter_id.filter(|s| !s.is_empty()).map(Into::into),
        name,
        grade,
        photo: photo.filter(|s| !s.is_empty()),
        set_on,
        takedown_on,
        styles,
        tags,
    })
}

#[allow(clippy::result_large_err)]
#[get("/new_route")]
pub fn get_new_route(
    db: Connections,
    account: Option<Account>,
    flash: Option<FlashMessage>,
) -> std::result::Result<Result<Markup>, Redirect> {
    let Some(account) = account else {
        return Err(login_redirect("/new_route"));
    };
    Ok((|| {
        let db = db.shared()?;
        let venues = db.all_venues()?;
        let users = db.all_users()?;
        let styles = db.all_styles()?;
        let tags = db.all_tags()?;
        Ok(view::new_route(
            account.username(),
            flash,
            &venues,
            &users,
            &styles,
            &tags,
        ))
    })())
}

#[allow(clippy::result_large_err)]
#[post("/new_route", data = "<form>")]
pub fn post_new_route(
    db: Connections,
    account: Option<Account>,
    form: Form<RouteForm>,
) -> std::result::Result<Redirect, Flash<Redirect>> {
    if account.is_none() {
        return Ok(login_redirect("/new_route"));
    }
    let new_route = match parse_route_form(form.into_inner()) {
        Ok(new_route) => new_route,
        Err(msg) => return Err(Flash::error(Redirect::to(uri!(get_new_route)), msg)),
    };
    match flows::create_route(&db, &EmbeddedImages, new_route) {
        Err(_) => Err(Flash::error(
            Redirect::to(uri!(get_new_route)),
            "Failed to create the route.",
        )),
        Ok(id) => Ok(Redirect::to(format!("/route/{id}"))),
    }
}

#[get("/route/<id>")]
pub fn get_route(
    db: Connections,
    auth: Auth,
    id: &str,
    flash: Option<FlashMessage>,
) -> Result<Markup> {
    let account_username = auth.account_username().ok().map(ToOwned::to_owned);
    let db = db.shared()?;
    let route = usecases::get_route(&db, id)?;
    let venue = usecases::get_venue(&db, route.venue_id.as_str())?;
    let setter = route
        .setter_id
        .as_ref()
        .map(|setter_id| db.get_user(setter_id.as_str()))
        .transpose()?;
    let ascents = db.ascents_of_route(id)?;
    let avg_rating = route.avg_rating(&ascents);
    let mut ascents_with_usernames = Vec::with_capacity(ascents.len());
    for ascent in ascents {
        let username = db.get_user(ascent.user_id.as_str())?.username;
        ascents_with_usernames.push((ascent, username));
    }
    // Whether the logged-in user has this route on their project list.
    let is_project = if let Some(username) = &account_username {
        db.try_get_user_by_username(username)?
            .map(|user| {
                db.project_route_ids_of_user(user.id.as_str())
                    .map(|ids| ids.contains(&route.id))
            })
            .transpose()?
            .unwrap_or(false)
    } else {
        false
    };
    Ok(view::route_detail(
        account_username.as_deref(),
        flash,
        &route,
        &venue,
        setter.as_ref(),
        &ascents_with_usernames,
        avg_rating,
        is_project,
    ))
}

#[allow(clippy::result_large_err)]
#[post("/route/<id>", data = "<form>")]
pub fn post_route(
    db: Connections,
    account: Option<Account>,
    id: &str,
    form: Form<RouteForm>,
) -> std::result::Result<Redirect, Flash<Redirect>> {
    if account.is_none() {
        return Ok(login_redirect(&format!("/route/{id}")));
    }
    let update = match parse_route_form(form.into_inner()) {
        Ok(update) => update,
        Err(msg) => return Err(Flash::error(Redirect::to(format!("/route/{id}")), msg)),
    };
    match flows::update_route(&db, &EmbeddedImages, id, update) {
        Err(_) => Err(Flash::error(
            Redirect::to(format!("/route/{id}")),
            "Failed to edit the route.",
        )),
        Ok(()) => Ok(Redirect::to(format!("/route/{id}"))),
    }
}

#[allow(clippy::result_large_err)]
#[post("/delete_route/<id>")]
pub fn post_delete_route(
    db: Connections,
    account: Option<Account>,
    id: &str,
) -> std::result::Result<Redirect, Flash<Redirect>> {
    if account.is_none() {
        return Ok(login_redirect(&format!("/route/{id}")));
    }
    let venue_id = {
        let Ok(shared_db) = db.shared() else {
            return Err(Flash::error(
                Redirect::to(format!("/route/{id}")),
                "We are so sorry! An internal server error has occurred. Please try again later.",
            ));
        };
        match usecases::get_route(&shared_db, id) {
            Ok(route) => route.venue_id,
            Err(_) => {
                return Err(Flash::error(
                    Redirect::to(uri!(super::get_index)),
                    "Failed to delete the route.",
                ))
            }
        }
    };
    match flows::delete_route(&db, id) {
        Err(_) => Err(Flash::error(
            Redirect::to(format!("/route/{id}")),
            "Failed to delete the route.",
        )),
        Ok(()) => Ok(Redirect::to(format!("/venue/{venue_id}"))),
    }
}
