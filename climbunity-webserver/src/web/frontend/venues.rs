use maud::Markup;
use rocket::{
    self,
    form::Form,
    get, post,
    request::FlashMessage,
    response::{Flash, Redirect},
    uri, FromForm,
};

use super::{login_redirect, view};
use crate::web::{guards::*, sqlite::Connections, Result};
use climbunity_application::prelude as flows;
use climbunity_core::{
    repositories::{RouteRepo, VenueRepo},
    usecases::{self, Error as ParameterError},
};

#[derive(FromForm)]
pub struct VenueForm {
    pub(crate) name: String,
    pub(crate) address: String,
    pub(crate) open_hours: Option<String>,
    pub(crate) description: Option<String>,
}

impl From<VenueForm> for usecases::NewVenue {
    fn from(from: VenueForm) -> Self {
        let VenueForm {
            name,
            address,
            open_hours,
            description,
        } = from;
        Self {
            name,
            address,
            opening_hours: open_hours,
            description,
        }
    }
}

#[allow(clippy::result_large_err)]
#[get("/new_venue")]
pub fn get_new_venue(
    account: Option<Account>,
    flash: Option<FlashMessage>,
) -> std::result::Result<Markup, Redirect> {
    let Some(account) = account else {
        return Err(login_redirect("/new_venue"));
    };
    Ok(view::new_venue(account.username(), flash))
}

#[allow(clippy::result_large_err)]
#[post("/new_venue", data = "<form>")]
pub fn post_new_venue(
    db: Connections,
    account: Option<Account>,
    form: Form<VenueForm>,
) -> std::result::Result<Redirect, Flash<Redirect>> {
    if account.is_none() {
        return Ok(login_redirect("/new_venue"));
    }
    let Ok(db) = db.exclusive() else {
        return Err(Flash::error(
            Redirect::to(uri!(get_new_venue)),
            "We are so sorry! An internal server error has occurred. Please try again later.",
        ));
    };
    match usecases::create_new_venue(&db, form.into_inner().into()) {
        Err(err) => {
            let msg = match err {
                ParameterError::Name => "You need to enter a venue name.",
                ParameterError::Address => {
                    "You need to enter a street address or general location."
                }
                _ => "We are so sorry, something went wrong :(",
            };
            Err(Flash::error(Redirect::to(uri!(get_new_venue)), msg))
        }
        Ok(id) => Ok(Redirect::to(format!("/venue/{id}"))),
    }
}

#[get("/venue/<id>")]
pub fn get_venue(
    db: Connections,
    auth: Auth,
    id: &str,
    flash: Option<FlashMessage>,
) -> Result<Markup> {
    let account_username = auth.account_username().ok().map(ToOwned::to_owned);
    let db = db.shared()?;
    let venue = usecases::get_venue(&db, id)?;
    let routes = db.routes_at_venue(id)?;
    Ok(view::venue_detail(
        account_username.as_deref(),
        flash,
        &venue,
        &routes,
    ))
}

#[allow(clippy::result_large_err)]
#[post("/venue/<id>", data = "<form>")]
pub fn post_venue(
    db: Connections,
    account: Option<Account>,
    id: &str,
    form: Form<VenueForm>,
) -> std::result::Result<Redirect, Flash<Redirect>> {
    if account.is_none() {
        return Ok(login_redirect(&format!("/venue/{id}")));
    }
    let Ok(db) = db.exclusive() else {
        return Err(Flash::error(
            Redirect::to(format!("/venue/{id}")),
            "We are so sorry! An internal server error has occurred. Please try again later.",
        ));
    };
    match usecases::update_venue(&db, id, form.into_inner().into()) {
        Err(_) => Err(Flash::error(
            Redirect::to(format!("/venue/{id}")),
            "Failed to edit the venue.",
        )),
        Ok(()) => Ok(Redirect::to(format!("/venue/{id}"))),
    }
}

#[allow(clippy::result_large_err)]
#[post("/delete_venue/<id>")]
pub fn post_delete_venue(
    db: Connections,
    account: Option<Account>,
    id: &str,
) -> std::result::Result<Redirect, Flash<Redirect>> {
    if account.is_none() {
        return Ok(login_redirect(&format!("/venue/{id}")));
    }
    match flows::delete_venue(&db, id) {
        Err(_) => Err(Flash::error(
            Redirect::to(format!("/venue/{id}")),
            "Failed to delete the venue.",
        )),
        Ok(()) => Ok(Redirect::to(uri!(super::get_index))),
    }
}
