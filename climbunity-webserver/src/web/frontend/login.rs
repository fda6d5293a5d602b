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
use crate::web::{guards::*, sqlite::Connections};
use climbunity_core::usecases::{self, Error as ParameterError};

#[derive(FromForm)]
pub struct LoginCredentials<'r> {
    pub(crate) username: &'r str,
    pub(crate) password: &'r str,
    pub(crate) next: Option<&'r str>,
}

#[allow(clippy::result_large_err)]
#[get("/login?<next>")]
pub fn get_login(
    account: Option<Account>,
    next: Option<String>,
    flash: Option<FlashMessage>,
) -> std::result::Result<Markup, Redirect> {
    if account.is_some() {
        Err(Redirect::to(uri!(super::get_index)))
    } else {
        Ok(view::login(flash, next.as_deref()))
    }
}

#[allow(clippy::result_large_err)]
#[post("/login", data = "<credentials>")]
pub fn post_login(
    db: Connections,
    credentials: Form<LoginCredentials>,
    cookies: &CookieJar<'_>,
) -> std::result::Result<Redirect, Flash<Redirect>> {
    let Ok(db) = db.shared() else {
        return Err(Flash::error(
            Redirect::to(uri!(get_login(next = Option::<&str>::None))),
            "We are so sorry! An internal server error has occurred. Please try again later.",
        ));
    };
    let login = usecases::Credentials {
        username: credentials.username,
        password: credentials.password,
    };
    match usecases::login_with_username(&db, &login) {
        Err(err) => {
            let msg = match err {
                // Which usernames exist is not revealed to the login form.
                ParameterError::UserDoesNotExist | ParameterError::Credentials => {
                    "Invalid username or password."
                }
                _ => "We are so sorry, something went wrong :(",
            };
            Err(Flash::error(
                Redirect::to(uri!(get_login(next = Option::<&str>::None))),
                msg,
            ))
        }
        Ok(user) => {
            cookies.add_private(
                Cookie::build((COOKIE_USER_KEY, user.username))
                    .http_only(true)
                    .same_site(SameSite::Lax),
            );
            let target = credentials
                .next
                .filter(|n| n.starts_with('/'))
                .unwrap_or("/");
            Ok(Redirect::to(target.to_string()))
        }
    }
}

#[post("/logout")]
pub fn post_logout(cookies: &CookieJar<'_>) -> Flash<Redirect> {
    cookies.remove_private(COOKIE_USER_KEY);
    Flash::success(
        Redirect::to(uri!(super::get_index)),
        "You have successfully logged out.",
    )
}
