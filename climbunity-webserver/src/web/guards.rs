use rocket::{
    self,
    http::Status,
    outcome::try_outcome,
    request::{FromRequest, Outcome, Request},
};

use crate::web::error::{Error, ParameterError, Result};
use climbunity_core::{entities::User, repositories::UserRepo};

pub const COOKIE_USER_KEY: &str = "climbunity-user";

#[derive(Debug)]
pub struct Version(pub &'static str);

/// Request context with the optionally logged-in account.
#[derive(Debug)]
pub struct Auth {
    account_username: Option<String>,
}

impl Auth {
    pub fn account_username(&self) -> Result<&str> {
        self.account_username
            .as_deref()
            .ok_or_else(|| ParameterError::Unauthorized.into())
    }

    fn account_username_from_cookie(request: &Request) -> Option<String> {
        request
            .cookies()
            .get_private(COOKIE_USER_KEY)
            .and_then(|cookie| cookie.value().parse().ok())
    }
}

#[rocket::async_trait]
impl<'r> FromRequest<'r> for Auth {
    type Error = ();
    async fn from_request(request: &'r Request<'_>) -> Outcome<Self, Self::Error> {
        let account_username = Self::account_username_from_cookie(request);
        Outcome::Success(Self { account_username })
    }
}

/// A logged-in account. Handlers that require authentication take
/// this guard; anonymous requests fail with `401 Unauthorized`
/// unless the handler accepts an `Option<Account>` and redirects
/// to the login page itself.
#[derive(Debug)]
pub struct Account(String);

impl Account {
    pub fn username(&self) -> &str {
        &self.0
    }

    pub fn user<R: UserRepo>(&self, repo: &R) -> Result<User> {
        repo.try_get_user_by_username(self.username())
            .map_err(Error::from)?
            .ok_or_else(|| ParameterError::Unauthorized.into())
    }
}

#[rocket::async_trait]
impl<'r> FromRequest<'r> for Account {
    type Error = ();
    async fn from_request(request: &'r Request<'_>) -> Outcome<Self, Self::Error> {
        let auth = try_outcome!(Auth::from_request(request).await);
        match auth.account_username() {
            Ok(username) => Outcome::Success(Account(username.to_owned())),
            _ => Outcome::Error((Status::Unauthorized, ())),
        }
    }
}
