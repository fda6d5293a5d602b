use crate::{email::EmailAddress, id::Id, password::Password};

#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id         : Id,
    pub username   : String,
    pub email      : EmailAddress,
    pub password   : Password,
    pub first_name : String,
    pub last_name  : String,
    pub address    : String,
    pub has_gear   : bool,
    pub is_admin   : bool,
    /// Labels of the climbing styles this user practices.
    pub styles     : Vec<String>,
}

impl User {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
            .trim()
            .to_string()
    }
}
