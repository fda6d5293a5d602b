use super::*;

impl UserRepo for DbReadOnly<'_> {
    fn create_user(&self, _user: &User) -> Result<()> {
        unreachable!();
    }
    fn update_user(&self, _user: &User) -> Result<()> {
        unreachable!();
    }

    fn get_user(&self, id: &str) -> Result<User> {
        get_user(&mut self.conn.borrow_mut(), id)
    }
    fn try_get_user_by_username(&self, username: &str) -> Result<Option<User>> {
        try_get_user_by_username(&mut self.conn.borrow_mut(), username)
    }
    fn try_get_user_by_email(&self, email: &EmailAddress) -> Result<Option<User>> {
        try_get_user_by_email(&mut self.conn.borrow_mut(), email)
    }

    fn all_users(&self) -> Result<Vec<User>> {
        all_users(&mut self.conn.borrow_mut())
    }
    fn count_users(&self) -> Result<usize> {
        count_users(&mut self.conn.borrow_mut())
    }
}

impl UserRepo for DbReadWrite<'_> {
    fn create_user(&self, user: &User) -> Result<()> {
        create_user(&mut self.conn.borrow_mut(), user)
    }
    fn update_user(&self, user: &User) -> Result<()> {
        update_user(&mut self.conn.borrow_mut(), user)
    }

    fn get_user(&self, id: &str) -> Result<User> {
        get_user(&mut self.conn.borrow_mut(), id)
    }
    fn try_get_user_by_username(&self, username: &str) -> Result<Option<User>> {
        try_get_user_by_username(&mut self.conn.borrow_mut(), username)
    }
    fn try_get_user_by_email(&self, email: &EmailAddress) -> Result<Option<User>> {
        try_get_user_by_email(&mut self.conn.borrow_mut(), email)
    }

    fn all_users(&self) -> Result<Vec<User>> {
        all_users(&mut self.conn.borrow_mut())
    }
    fn count_users(&self) -> Result<usize> {
        count_users(&mut self.conn.borrow_mut())
    }
}

impl UserRepo for DbConnection<'_> {
    fn create_user(&self, user: &User) -> Result<()> {
        create_user(&mut self.conn.borrow_mut(), user)
    }
    fn update_user(&self, user: &User) -> Result<()> {
        update_user(&mut self.conn.borrow_mut(), user)
    }

    fn get_user(&self, id: &str) -> Result<User> {
        get_user(&mut self.conn.borrow_mut(), id)
    }
    fn try_get_user_by_username(&self, username: &str) -> Result<Option<User>> {
        try_get_user_by_username(&mut self.conn.borrow_mut(), username)
    }
    fn try_get_user_by_email(&self, email: &EmailAddress) -> Result<Option<User>> {
        try_get_user_by_email(&mut self.conn.borrow_mut(), email)
    }

    fn all_users(&self) -> Result<Vec<User>> {
        all_users(&mut self.conn.borrow_mut())
    }
    fn count_users(&self) -> Result<usize> {
        count_users(&mut self.conn.borrow_mut())
    }
}

pub(crate) fn resolve_user_rowid(conn: &mut SqliteConnection, id: &str) -> Result<i64> {
    use schema::users::dsl;
    dsl::users
        .select(dsl::rowid)
        .filter(dsl::id.eq(id))
        .first::<i64>(conn)
        .map_err(from_diesel_err)
}

fn load_user_styles(conn: &mut SqliteConnection, user_rowid: i64) -> Result<Vec<String>> {
    use schema::user_styles::dsl;
    dsl::user_styles
        .select(dsl::style_label)
        .filter(dsl::user_rowid.eq(user_rowid))
        .order_by(dsl::style_label)
        .load(conn)
        .map_err(from_diesel_err)
}

fn into_user(conn: &mut SqliteConnection, entity: models::UserEntity) -> Result<User> {
    let styles = load_user_styles(conn, entity.rowid)?;
    let models::UserEntity {
        id,
        username,
        email,
        password,
        first_name,
        last_name,
        address,
        has_gear,
        is_admin,
        ..
    } = entity;
    Ok(User {
        id: id.into(),
        username,
        email: EmailAddress::new_unchecked(email),
        password: Password::from(password),
        first_name,
        last_name,
        address,
        has_gear,
        is_admin,
        styles,
    })
}

fn create_user(conn: &mut SqliteConnection, u: &User) -> Result<()> {
    let new_user = models::NewUser::from(u);
    conn.transaction::<_, DieselError, _>(|conn| {
        diesel::insert_into(schema::users::table)
            .values(&new_user)
            .execute(conn)?;
        let rowid = schema::users::table
            .select(schema::users::dsl::rowid)
            .filter(schema::users::dsl::id.eq(new_user.id))
            .first::<i64>(conn)?;
        let styles: Vec<_> = u
            .styles
            .iter()
            .map(|label| models::NewUserStyle {
                user_rowid: rowid,
                style_label: label,
            })
            .collect();
        diesel::insert_or_ignore_into(schema::user_styles::table)
            .values(&styles)
            .execute(conn)?;
        Ok(())
    })
    .map_err(from_diesel_err)?;
    Ok(())
}

fn update_user(conn: &mut SqliteConnection, u: &User) -> Result<()> {
    use schema::{user_styles::dsl as us_dsl, users::dsl};
    let rowid = resolve_user_rowid(conn, u.id.as_str())?;
    let new_user = models::NewUser::from(u);
    conn.transaction::<_, DieselError, _>(|conn| {
        diesel::update(dsl::users.filter(dsl::rowid.eq(rowid)))
            .set(&new_user)
            .execute(conn)?;
        let old_styles: Vec<String> = us_dsl::user_styles
            .select(us_dsl::style_label)
            .filter(us_dsl::user_rowid.eq(rowid))
            .load(conn)?;
        let styles_diff = util::labels_diff(&old_styles, &u.styles);
        diesel::delete(
            us_dsl::user_styles
                .filter(us_dsl::user_rowid.eq(rowid))
                .filter(us_dsl::style_label.eq_any(&styles_diff.deleted)),
        )
        .execute(conn)?;
        {
            let new_styles: Vec<_> = styles_diff
                .added
                .iter()
                .map(|label| models::NewUserStyle {
                    user_rowid: rowid,
                    style_label: label,
                })
                .collect();
            diesel::insert_or_ignore_into(us_dsl::user_styles)
                .values(&new_styles)
                .execute(conn)?;
        }
        Ok(())
    })
    .map_err(from_diesel_err)?;
    Ok(())
}

fn get_user(conn: &mut SqliteConnection, id: &str) -> Result<User> {
    use schema::users::dsl;
    let entity = dsl::users
        .filter(dsl::id.eq(id))
        .first::<models::UserEntity>(conn)
        .map_err(from_diesel_err)?;
    into_user(conn, entity)
}

fn try_get_user_by_username(
    conn: &mut SqliteConnection,
    username: &str,
) -> Result<Option<User>> {
    use schema::users::dsl;
    let entity = dsl::users
        .filter(dsl::username.eq(username))
        .first::<models::UserEntity>(conn)
        .optional()
        .map_err(from_diesel_err)?;
    entity.map(|entity| into_user(conn, entity)).transpose()
}

fn try_get_user_by_email(
    conn: &mut SqliteConnection,
    email: &EmailAddress,
) -> Result<Option<User>> {
    use schema::users::dsl;
    let entity = dsl::users
        .filter(dsl::email.eq(email.as_str()))
        .first::<models::UserEntity>(conn)
        .optional()
        .map_err(from_diesel_err)?;
    entity.map(|entity| into_user(conn, entity)).transpose()
}

fn all_users(conn: &mut SqliteConnection) -> Result<Vec<User>> {
    use schema::users::dsl;
    let entities = dsl::users
        .load::<models::UserEntity>(conn)
        .map_err(from_diesel_err)?;
    let mut users = Vec::with_capacity(entities.len());
    for entity in entities {
        users.push(into_user(conn, entity)?);
    }
    Ok(users)
}

fn count_users(conn: &mut SqliteConnection) -> Result<usize> {
    use schema::users::dsl;
    Ok(dsl::users
        .select(diesel::dsl::count(dsl::rowid))
        .first::<i64>(conn)
        .map_err(from_diesel_err)? as usize)
}
