use super::{route::resolve_route_rowid, user::resolve_user_rowid, *};

impl AscentRepo for DbReadOnly<'_> {
    fn create_ascent(&self, _ascent: &Ascent) -> Result<()> {
        unreachable!();
    }

    fn get_ascent(&self, id: &str) -> Result<Ascent> {
        get_ascent(&mut self.conn.borrow_mut(), id)
    }
    fn ascents_of_route(&self, route_id: &str) -> Result<Vec<Ascent>> {
        ascents_of_route(&mut self.conn.borrow_mut(), route_id)
    }
    fn ascents_of_user(&self, user_id: &str) -> Result<Vec<Ascent>> {
        ascents_of_user(&mut self.conn.borrow_mut(), user_id)
    }

    fn delete_ascent(&self, _id: &str) -> Result<()> {
        unreachable!();
    }
    fn delete_ascents_of_route(&self, _route_id: &str) -> Result<usize> {
        unreachable!();
    }
}

impl AscentRepo for DbReadWrite<'_> {
    fn create_ascent(&self, ascent: &Ascent) -> Result<()> {
        create_ascent(&mut self.conn.borrow_mut(), ascent)
    }

    fn get_ascent(&self, id: &str) -> Result<Ascent> {
        get_ascent(&mut self.conn.borrow_mut(), id)
    }
    fn ascents_of_route(&self, route_id: &str) -> Result<Vec<Ascent>> {
        ascents_of_route(&mut self.conn.borrow_mut(), route_id)
    }
    fn ascents_of_user(&self, user_id: &str) -> Result<Vec<Ascent>> {
        ascents_of_user(&mut self.conn.borrow_mut(), user_id)
    }

    fn delete_ascent(&self, id: &str) -> Result<()> {
        delete_ascent(&mut self.conn.borrow_mut(), id)
    }
    fn delete_ascents_of_route(&self, route_id: &str) -> Result<usize> {
        delete_ascents_of_route(&mut self.conn.borrow_mut(), route_id)
    }
}

impl AscentRepo for DbConnection<'_> {
    fn create_ascent(&self, ascent: &Ascent) -> Result<()> {
        create_ascent(&mut self.conn.borrow_mut(), ascent)
    }

    fn get_ascent(&self, id: &str) -> Result<Ascent> {
        get_ascent(&mut self.conn.borrow_mut(), id)
    }
    fn ascents_of_route(&self, route_id: &str) -> Result<Vec<Ascent>> {
        ascents_of_route(&mut self.conn.borrow_mut(), route_id)
    }
    fn ascents_of_user(&self, user_id: &str) -> Result<Vec<Ascent>> {
        ascents_of_user(&mut self.conn.borrow_mut(), user_id)
    }

    fn delete_ascent(&self, id: &str) -> Result<()> {
        delete_ascent(&mut self.conn.borrow_mut(), id)
    }
    fn delete_ascents_of_route(&self, route_id: &str) -> Result<usize> {
        delete_ascents_of_route(&mut self.conn.borrow_mut(), route_id)
    }
}

fn into_ascent(entity: models::AscentEntity) -> Result<Ascent> {
    use num_traits::FromPrimitive as _;
    let models::AscentEntity {
        id,
        sent_on,
        send_type,
        rating,
        comment,
        created_at,
        route_id,
        user_id,
        ..
    } = entity;
    let sent_on = load_date(&sent_on)?;
    let send_type = load_send_type(send_type)?;
    let rating = i8::from_i16(rating)
        .map(RatingValue::from)
        .ok_or_else(|| anyhow!("Invalid rating: {rating}"))?;
    Ok(Ascent {
        id: id.into(),
        route_id: route_id.into(),
        user_id: user_id.into(),
        sent_on,
        send_type,
        rating,
        comment,
        created_at: Timestamp::from_seconds(created_at),
    })
}

fn create_ascent(conn: &mut SqliteConnection, a: &Ascent) -> Result<()> {
    use num_traits::ToPrimitive as _;
    let route_rowid = resolve_route_rowid(conn, a.route_id.as_str())?;
    let user_rowid = resolve_user_rowid(conn, a.user_id.as_str())?;
    let new_ascent = models::NewAscent {
        id: a.id.as_str(),
        route_rowid,
        user_rowid,
        sent_on: format_date(a.sent_on),
        send_type: a
            .send_type
            .to_i16()
            .ok_or_else(|| anyhow!("Invalid send type: {:?}", a.send_type))?,
        rating: i8::from(a.rating).into(),
        comment: a.comment.as_deref(),
        created_at: a.created_at.into_seconds(),
    };
    diesel::insert_into(schema::ascents::table)
        .values(&new_ascent)
        .execute(conn)
        .map_err(from_diesel_err)?;
    Ok(())
}

fn get_ascent(conn: &mut SqliteConnection, id: &str) -> Result<Ascent> {
    use schema::{ascents::dsl as a_dsl, routes::dsl as r_dsl, users::dsl as u_dsl};
    let entity = a_dsl::ascents
        .inner_join(r_dsl::routes)
        .inner_join(u_dsl::users)
        .select((
            a_dsl::rowid,
            a_dsl::id,
            a_dsl::sent_on,
            a_dsl::send_type,
            a_dsl::rating,
            a_dsl::comment,
            a_dsl::created_at,
            r_dsl::id,
            u_dsl::id,
        ))
        .filter(a_dsl::id.eq(id))
        .first::<models::AscentEntity>(conn)
        .map_err(from_diesel_err)?;
    into_ascent(entity)
}

fn ascents_of_route(conn: &mut SqliteConnection, route_id: &str) -> Result<Vec<Ascent>> {
    use schema::{ascents::dsl as a_dsl, routes::dsl as r_dsl, users::dsl as u_dsl};
    let entities = a_dsl::ascents
        .inner_join(r_dsl::routes)
        .inner_join(u_dsl::users)
        .select((
            a_dsl::rowid,
            a_dsl::id,
            a_dsl::sent_on,
            a_dsl::send_type,
            a_dsl::rating,
            a_dsl::comment,
            a_dsl::created_at,
            r_dsl::id,
            u_dsl::id,
        ))
        .filter(r_dsl::id.eq(route_id))
        .order_by(a_dsl::sent_on.desc())
        .load::<models::AscentEntity>(conn)
        .map_err(from_diesel_err)?;
    entities.into_iter().map(into_ascent).collect()
}

fn ascents_of_user(conn: &mut SqliteConnection, user_id: &str) -> Result<Vec<Ascent>> {
    use schema::{ascents::dsl as a_dsl, routes::dsl as r_dsl, users::dsl as u_dsl};
    let entities = a_dsl::ascents
        .inner_join(r_dsl::routes)
        .inner_join(u_dsl::users)
        .select((
            a_dsl::rowid,
            a_dsl::id,
            a_dsl::sent_on,
            a_dsl::send_type,
            a_dsl::rating,
            a_dsl::comment,
            a_dsl::created_at,
            r_dsl::id,
            u_dsl::id,
        ))
        .filter(u_dsl::id.eq(user_id))
        .order_by(a_dsl::sent_on.desc())
        .load::<models::AscentEntity>(conn)
        .map_err(from_diesel_err)?;
    entities.into_iter().map(into_ascent).collect()
}

fn delete_ascent(conn: &mut SqliteConnection, id: &str) -> Result<()> {
    use schema::ascents::dsl;
    let deleted = diesel::delete(dsl::ascents.filter(dsl::id.eq(id)))
        .execute(conn)
        .map_err(from_diesel_err)?;
    if deleted == 0 {
        return Err(repo::Error::NotFound);
    }
    Ok(())
}

fn delete_ascents_of_route(conn: &mut SqliteConnection, route_id: &str) -> Result<usize> {
    use schema::ascents::dsl;
    let route_rowid = resolve_route_rowid(conn, route_id)?;
    diesel::delete(dsl::ascents.filter(dsl::route_rowid.eq(route_rowid)))
        .execute(conn)
        .map_err(from_diesel_err)
}
