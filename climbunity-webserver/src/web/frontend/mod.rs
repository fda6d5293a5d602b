use std::{ffi::OsStr, path::PathBuf};

use maud::Markup;
use rocket::{
    self, get,
    http::ContentType,
    request::FlashMessage,
    response::content::RawCss,
    routes, Route, State,
};
use rust_embed::RustEmbed;

use crate::web::{guards::*, sqlite, Result};
use climbunity_core::{
    gateways::assets::AssetGateway,
    repositories::{RouteRepo, VenueRepo},
};

mod appointments;
mod ascents;
mod login;
mod profiles;
mod projects;
mod register;
mod route_pages;
mod venues;
mod view;

const MAIN_CSS: &str = include_str!("main.css");

/// Route photos shipped with the application binary.
#[derive(RustEmbed)]
#[folder = "static/img/"]
struct ImageAsset;

pub(crate) struct EmbeddedImages;

impl AssetGateway for EmbeddedImages {
    fn has_image(&self, file_name: &str) -> bool {
        ImageAsset::get(file_name).is_some()
    }
}

pub fn routes() -> Vec<Route> {
    routes![
        get_index,
        get_main_css,
        get_image,
        login::get_login,
        login::post_login,
        login::post_logout,
        register::get_signup,
        register::post_signup,
        venues::get_new_venue,
        venues::post_new_venue,
        venues::get_venue,
        venues::post_venue,
        venues::post_delete_venue,
        route_pages::get_new_route,
        route_pages::post_new_route,
        route_pages::get_route,
        route_pages::post_route,
        route_pages::post_delete_route,
        ascents::get_log_ascent,
        ascents::post_log_ascent,
        ascents::post_delete_ascent,
        projects::post_add_to_project_list,
        projects::post_remove_from_project_list,
        appointments::get_new_appointment,
        appointments::post_new_appointment,
        appointments::post_join_appointment,
        appointments::post_delete_appointment,
        profiles::get_users,
        profiles::get_profile,
        profiles::get_edit_profile,
        profiles::post_edit_profile,
    ]
}

/// Redirect target for handlers that require a login.
pub(crate) fn login_redirect(next: &str) -> rocket::response::Redirect {
    rocket::response::Redirect::to(format!("/login?next={next}"))
}

#[get("/")]
pub fn get_index(
    db: sqlite::Connections,
    auth: Auth,
    version: &State<Version>,
    flash: Option<FlashMessage>,
) -> Result<Markup> {
    let account_username = auth.account_username().ok().map(ToOwned::to_owned);
    let db = db.shared()?;
    let venues = db.all_venues()?;
    let routes = db.all_routes()?;
    Ok(view::home(
        account_username.as_deref(),
        flash,
        &venues,
        &routes,
        version.0,
    ))
}

#[get("/main.css")]
pub fn get_main_css() -> RawCss<&'static str> {
    RawCss(MAIN_CSS)
}

#[get("/static/img/<file..>")]
pub fn get_image(file: PathBuf) -> Option<(ContentType, Vec<u8>)> {
    let filename = file.display().to_string();
    let asset = ImageAsset::get(&filename)?;
    let content_type = file
        .extension()
        .and_then(OsStr::to_str)
        .and_then(ContentType::from_extension)
        .unwrap_or(ContentType::Bytes);
    Some((content_type, asset.data.into_owned()))
}
