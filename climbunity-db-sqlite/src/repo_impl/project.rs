use super::{route::resolve_route_rowid, user::resolve_user_rowid, *};

impl ProjectRepo for DbReadOnly<'_> {
    fn add_project(&self, _user_id: &str, _route_id: &str) -> Result<()> {
        unreachable!();
    }
    fn remove_project(&self, _user_id: &str, _route_id: &str) -> Result<usize> {
        unreachable!();
    }

    fn project_route_ids_of_user(&self, user_id: &str) -> Result<Vec<Id>> {
        project_route_ids_of_user(&mut self.conn.borrow_mut(), user_id)
    }
    fn projecting_user_ids_of_route(&self, route_id: &str) -> Result<Vec<Id>> {
        projecting_user_ids_of_route(&mut self.conn.borrow_mut(), route_id)
    }
}

impl ProjectRepo for DbReadWrite<'_> {
    fn add_project(&self, user_id: &str, route_id: &str) -> Result<()> {
        add_project(&mut self.conn.borrow_mut(), user_id, route_id)
    }
    fn remove_project(&self, user_id: &str, route_id: &str) -> Result<usize> {
        remove_project(&mut self.conn.borrow_mut(), user_id, route_id)
    }

    fn project_route_ids_of_user(&self, user_id: &str) -> Result<Vec<Id>> {
        project_route_ids_of_user(&mut self.conn.borrow_mut(), user_id)
    }
    fn projecting_user_ids_of_route(&self, route_id: &str) -> Result<Vec<Id>> {
        projecting_user_ids_of_route(&mut self.conn.borrow_mut(), route_id)
    }
}

impl ProjectRepo for DbConnection<'_> {
    fn add_project(&self, user_id: &str, route_id: &str) -> Result<()> {
        add_project(&mut self.conn.borrow_mut(), user_id, route_id)
    }
    fn remove_project(&self, user_id: &str, route_id: &str) -> Result<usize> {
        remove_project(&mut self.conn.borrow_mut(), user_id, route_id)
    }

    fn project_route_ids_of_user(&self, user_id: &str) -> Result<Vec<Id>> {
        project_route_ids_of_user(&mut self.conn.borrow_mut(), user_id)
    }
    fn projecting_user_ids_of_route(&self, route_id: &str) -> Result<Vec<Id>> {
        projecting_user_ids_of_route(&mut self.conn.borrow_mut(), route_id)
    }
}

fn add_project(conn: &mut SqliteConnection, user_id: &str, route_id: &str) -> Result<()> {
    let user_rowid = resolve_user_rowid(conn, user_id)?;
    let route_rowid = resolve_route_rowid(conn, route_id)?;
    diesel::insert_or_ignore_into(schema::user_projects::table)
        .values(&models::NewUserProject {
            user_rowid,
            route_rowid,
        })
        .execute(conn)
        .map_err(from_diesel_err)?;
    Ok(())
}

fn remove_project(conn: &mut SqliteConnection, user_id: &str, route_id: &str) -> Result<usize> {
    use schema::user_projects::dsl;
    let user_rowid = resolve_user_rowid(conn, user_id)?;
    let route_rowid = resolve_route_rowid(conn, route_id)?;
    diesel::delete(
        dsl::user_projects
            .filter(dsl::user_rowid.eq(user_rowid))
            .filter(dsl::route_rowid.eq(route_rowid)),
    )
    .execute(conn)
    .map_err(from_diesel_err)
}

fn project_route_ids_of_user(conn: &mut SqliteConnection, user_id: &str) -> Result<Vec<Id>> {
    use schema::{routes::dsl as r_dsl, user_projects::dsl as up_dsl};
    let user_rowid = resolve_user_rowid(conn, user_id)?;
    Ok(up_dsl::user_projects
        .inner_join(r_dsl::routes)
        .select(r_dsl::id)
        .filter(up_dsl::user_rowid.eq(user_rowid))
        .order_by(r_dsl::name)
        .load::<String>(conn)
        .map_err(from_diesel_err)?
        .into_iter()
        .map(Into::into)
        .collect())
}

fn projecting_user_ids_of_route(conn: &mut SqliteConnection, route_id: &str) -> Result<Vec<Id>> {
    use schema::{user_projects::dsl as up_dsl, users::dsl as u_dsl};
    let route_rowid = resolve_route_rowid(conn, route_id)?;
    Ok(up_dsl::user_projects
        .inner_join(u_dsl::users)
        .select(u_dsl::id)
        .filter(up_dsl::route_rowid.eq(route_rowid))
        .order_by(u_dsl::username)
        .load::<String>(conn)
        .map_err(from_diesel_err)?
        .into_iter()
        .map(Into::into)
        .collect())
}
