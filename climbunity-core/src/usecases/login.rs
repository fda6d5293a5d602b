use super::prelude::*;

pub struct Credentials<'a> {
    pub username: &'a str,
    pub password: &'a str,
}

pub fn login_with_username<R>(repo: &R, login: &Credentials) -> Result<User>
where
    R: UserRepo,
{
    match repo.try_get_user_by_username(login.username)? {
        Some(user) => {
            if user.password.verify(login.password) {
                Ok(user)
            } else {
                Err(Error::Credentials)
            }
        }
        None => Err(Error::UserDoesNotExist),
    }
}

#[cfg(test)]
mod tests {
    use super::{
        super::{create_new_user, tests::MockDb, NewUser},
        *,
    };

    fn setup() -> MockDb {
        let db = MockDb::default();
        create_new_user(
            &db,
            NewUser {
                username: "me1".into(),
                email: EmailAddress::new_unchecked("me1@bar.io".into()),
                password: "password123".into(),
                first_name: "Me".into(),
                last_name: "One".into(),
                address: "somewhere".into(),
                has_gear: true,
                styles: vec![],
            },
        )
        .unwrap();
        db
    }

    #[test]
    fn login_with_valid_credentials() {
        let db = setup();
        let user = login_with_username(
            &db,
            &Credentials {
                username: "me1",
                password: "password123",
            },
        )
        .unwrap();
        assert_eq!(user.username, "me1");
    }

    #[test]
    fn login_with_unknown_username() {
        let db = setup();
        assert!(matches!(
            login_with_username(
                &db,
                &Credentials {
                    username: "nobody",
                    password: "password123",
                }
            )
            .err()
            .unwrap(),
            Error::UserDoesNotExist
        ));
    }

    #[test]
    fn login_with_wrong_password() {
        let db = setup();
        assert!(matches!(
            login_with_username(
                &db,
                &Credentials {
                    username: "me1",
                    password: "wrong password",
                }
            )
            .err()
            .unwrap(),
            Error::Credentials
        ));
    }
}
