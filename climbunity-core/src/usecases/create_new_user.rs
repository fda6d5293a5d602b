use super::prelude::*;
use crate::util::validate;

#[derive(Debug, Clone)]
pub struct NewUser {
    pub username: String,
    pub email: EmailAddress,
    pub password: String,
    pub first_name: String,
    pub last_name: String,
    pub address: String,
    pub has_gear: bool,
    pub styles: Vec<String>,
}

pub fn create_new_user<R>(repo: &R, u: NewUser) -> Result<Id>
where
    R: UserRepo + StyleRepo,
{
    let password = u.password.parse::<Password>()?;
    if !validate::is_valid_username(&u.username) {
        return Err(Error::Username);
    }
    if !validate::is_valid_email(u.email.as_str()) {
        return Err(Error::EmailAddress);
    }
    // Checked before the insert in addition to the unique
    // constraints of the storage layer.
    if repo.try_get_user_by_username(&u.username)?.is_some() {
        return Err(Error::UserExists);
    }
    if repo.try_get_user_by_email(&u.email)?.is_some() {
        return Err(Error::EmailAddressExists);
    }
    let styles = super::prepare_label_list(u.styles.iter().map(String::as_str));
    validate_styles(repo, &styles)?;
    let new_user = User {
        id: Id::new(),
        username: u.username,
        email: u.email,
        password,
        first_name: u.first_name,
        last_name: u.last_name,
        address: u.address,
        has_gear: u.has_gear,
        is_admin: false,
        styles,
    };
    log::debug!("Creating new user: username = {}", new_user.username);
    repo.create_user(&new_user)?;
    Ok(new_user.id)
}

pub(crate) fn validate_styles<R: StyleRepo>(repo: &R, styles: &[String]) -> Result<()> {
    let known = repo.all_styles()?;
    for label in styles {
        if !known.iter().any(|s| &s.label == label) {
            return Err(Error::Style);
        }
    }
    Ok(())
}
