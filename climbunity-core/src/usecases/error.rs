use thiserror::Error;

use crate::repositories;

#[derive(Debug, Error)]
pub enum Error {
    #[error("The username is invalid")]
    Username,
    #[error("Invalid email address")]
    EmailAddress,
    #[error("Invalid password")]
    Password,
    #[error("The username is already taken")]
    UserExists,
    #[error("The email address is already taken")]
    EmailAddressExists,
    #[error("The user does not exist")]
    UserDoesNotExist,
    #[error("Invalid credentials")]
    Credentials,
    #[error("The name must not be empty")]
    Name,
    #[error("The address must not be empty")]
    Address,
    #[error("The grade is invalid")]
    Grade,
    #[error("Unknown climbing style")]
    Style,
    #[error("Invalid tag")]
    Tag,
    #[error("Rating value out of range")]
    RatingValue,
    #[error("Invalid send type")]
    SendType,
    #[error("The comment is too long")]
    Comment,
    #[error("The appointment date is not in the future")]
    AppointmentDate,
    #[error("This is not allowed")]
    Forbidden,
    #[error("This is not allowed without auth")]
    Unauthorized,
    #[error(transparent)]
    Repo(#[from] repositories::Error),
}

impl From<climbunity_entities::password::ParseError> for Error {
    fn from(_: climbunity_entities::password::ParseError) -> Self {
        Self::Password
    }
}

impl From<climbunity_entities::email::EmailAddressParseError> for Error {
    fn from(_: climbunity_entities::email::EmailAddressParseError) -> Self {
        Self::EmailAddress
    }
}

impl From<climbunity_entities::ascent::SendTypeParseError> for Error {
    fn from(_: climbunity_entities::ascent::SendTypeParseError) -> Self {
        Self::SendType
    }
}
