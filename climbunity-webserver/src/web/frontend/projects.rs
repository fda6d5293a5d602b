use rocket::{
    self, post,
    response::{Flash, Redirect},
};

use super::login_redirect;
use crate::web::{guards::*, sqlite::Connections};
use climbunity_core::usecases;

#[allow(clippy::result_large_err)]
#[post("/add_to_project_list/<route_id>")]
pub fn post_add_to_project_list(
    db: Connections,
    account: Option<Account>,
    route_id: &str,
) -> std::result::Result<Redirect, Flash<Redirect>> {
    let Some(account) = account else {
        return Ok(login_redirect(&format!("/route/{route_id}")));
    };
    let Ok(db) = db.exclusive() else {
        return Err(Flash::error(
            Redirect::to(format!("/route/{route_id}")),
            "We are so sorry! An internal server error has occurred. Please try again later.",
        ));
    };
    let user = match account.user(&db) {
        Ok(user) => user,
        Err(_) => return Ok(login_redirect(&format!("/route/{route_id}"))),
    };
    match usecases::add_project(&db, &user.id, route_id) {
        Err(_) => Err(Flash::error(
            Redirect::to(format!("/route/{route_id}")),
            "Failed to add the route to your project list.",
        )),
        Ok(()) => Ok(Redirect::to(format!("/route/{route_id}"))),
    }
}

#[allow(clippy::result_large_err)]
#[post("/remove_from_project_list/<route_id>")]
pub fn post_remove_from_project_list(
    db: Connections,
    account: Option<Account>,
    route_id: &str,
) -> std::result::Result<Redirect, Flash<Redirect>> {
    let Some(account) = account else {
        return Ok(login_redirect(&format!("/route/{route_id}")));
    };
    let Ok(db) = db.exclusive() else {
        return Err(Flash::error(
            Redirect::to(format!("/route/{route_id}")),
            "We are so sorry! An internal server error has occurred. Please try again later.",
        ));
    };
    let user = match account.user(&db) {
        Ok(user) => user,
        Err(_) => return Ok(login_redirect(&format!("/route/{route_id}"))),
    };
    match usecases::remove_project(&db, &user.id, route_id) {
        Err(_) => Err(Flash::error(
            Redirect::to(format!("/route/{route_id}")),
            "Failed to remove the route from your project list.",
        )),
        Ok(()) => Ok(Redirect::to(format!("/profile/{}", user.id))),
    }
}
