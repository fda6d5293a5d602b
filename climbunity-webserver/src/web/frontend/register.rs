use maud::Markup;
use rocket::{
    self,
    form::Form,
    get,
    http::{Cookie, CookieJar, SameSite},
    post,
    request::FlashMessage,
    response::{Flash, Redirect},
    uri, FromForm,
};

use super::view;
use crate::web::{guards::*, sqlite::Connections, Result};
use climbunity_core::{
    entities::EmailAddress,
    repositories::StyleRepo,
    usecases::{self, Error as ParameterError},
};

#[derive(FromForm)]
pub struct SignUpForm {
    pub(crate) username: String,
    pub(crate) password: String,
    pub(crate) email: String,
    pub(crate) first_name: String,
    pub(crate) last_name: String,
    pub(crate) address: String,
    pub(crate) has_gear: bool,
    pub(crate) styles: Vec<String>,
    pub(crate) next: Option<String>,
}

#[get("/signup")]
pub fn get_signup(db: Connections, flash: Option<FlashMessage>) -> Result<Markup> {
    let db = db.shared()?;
    let styles = db.all_styles()?;
    Ok(view::signup(flash, &styles))
}

#[allow(clippy::result_large_err)]
#[post("/signup", data = "<form>")]
pub fn post_signup(
    db: Connections,
    form: Form<SignUpForm>,
    cookies: &CookieJar<'_>,
) -> std::result::Result<Redirect, Flash<Redirect>> {
    let form = form.into_inner();
    let Ok(db) = db.exclusive() else {
        return Err(Flash::error(
            Redirect::to(uri!(get_signup)),
            "We are so sorry! An internal server error has occurred. Please try again later.",
        ));
    };
    let Ok(email) = form.email.parse::<EmailAddress>() else {
        return Err(Flash::error(
            Redirect::to(uri!(get_signup)),
            "You must input a valid email address.",
        ));
    };
    let new_user = usecases::NewUser {
        username: form.username.clone(),
        email,
        password: form.password,
        first_name: form.first_name,
        last_name: form.last_name,
        address: form.address,
        has_gear: form.has_gear,
        styles: form.styles,
    };
    match usecases::create_new_user(&db, new_user) {
        Err(err) => {
            let msg = match err {
                ParameterError::UserExists => {
                    "That username is taken. Please choose a different one."
                }
                ParameterError::EmailAddressExists => {
                    "That email address is already associated with an account."
                }
                ParameterError::Username => "The username is invalid.",
                ParameterError::EmailAddress => "You must input a valid email address.",
                ParameterError::Password => "The password is too short.",
                _ => "We are so sorry, something went wrong :(",
            };
            Err(Flash::error(Redirect::to(uri!(get_signup)), msg))
        }
        Ok(_) => {
            // Signing up also logs the new user in.
            cookies.add_private(
                Cookie::build((COOKIE_USER_KEY, form.username))
                    .http_only(true)
                    .same_site(SameSite::Lax),
            );
            let target = form
                .next
                .filter(|n| n.starts_with('/'))
                .unwrap_or_else(|| "/".to_string());
            Ok(Redirect::to(target))
        }
    }
}
