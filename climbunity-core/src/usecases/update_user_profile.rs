use super::prelude::*;

#[derive(Debug, Clone)]
pub struct UpdateUserProfile {
    pub first_name: String,
    pub last_name: String,
    pub address: String,
    pub has_gear: bool,
    pub styles: Vec<String>,
}

/// Only the account owner may edit a profile.
pub fn update_user_profile<R>(
    repo: &R,
    logged_in: &User,
    user_id: &str,
    update: UpdateUserProfile,
) -> Result<()>
where
    R: UserRepo + StyleRepo,
{
    if logged_in.id.as_str() != user_id {
        return Err(Error::Forbidden);
    }
    let mut user = repo.get_user(user_id)?;
    let styles = super::prepare_label_list(update.styles.iter().map(String::as_str));
    super::validate_styles(repo, &styles)?;
    user.first_name = update.first_name;
    user.last_name = update.last_name;
    user.address = update.address;
    user.has_gear = update.has_gear;
    // The style set is replaced, not extended.
    user.styles = styles;
    repo.update_user(&user)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{
        super::{create_new_user, tests::MockDb, NewUser},
        *,
    };

    fn create_user(db: &MockDb, username: &str) -> User {
        create_new_user(
            db,
            NewUser {
                username: username.into(),
                email: EmailAddress::new_unchecked(format!("{username}@bar.io")),
                password: "secret123".into(),
                first_name: "Jo".into(),
                last_name: "Climber".into(),
                address: "old address".into(),
                has_gear: false,
                styles: vec![],
            },
        )
        .unwrap();
        db.try_get_user_by_username(username).unwrap().unwrap()
    }

    fn update() -> UpdateUserProfile {
        UpdateUserProfile {
            first_name: "Joanna".into(),
            last_name: "Climber".into(),
            address: "new address".into(),
            has_gear: true,
            styles: vec!["lead".into()],
        }
    }

    #[test]
    fn owner_can_edit_profile() {
        let db = MockDb::default();
        db.create_style_if_it_does_not_exist(&Style {
            label: "lead".into(),
        })
        .unwrap();
        let user = create_user(&db, "me1");
        update_user_profile(&db, &user, user.id.as_str(), update()).unwrap();
        let stored = db.get_user(user.id.as_str()).unwrap();
        assert_eq!(stored.first_name, "Joanna");
        assert_eq!(stored.address, "new address");
        assert!(stored.has_gear);
        assert_eq!(stored.styles, vec!["lead".to_string()]);
    }

    #[test]
    fn other_users_must_not_edit_profile() {
        let db = MockDb::default();
        let owner = create_user(&db, "me1");
        let other = create_user(&db, "me2");
        assert!(matches!(
            update_user_profile(&db, &other, owner.id.as_str(), update())
                .err()
                .unwrap(),
            Error::Forbidden
        ));
    }
}
