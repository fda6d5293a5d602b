use super::*;

impl VenueRepo for DbReadOnly<'_> {
    fn create_venue(&self, _venue: &Venue) -> Result<()> {
        unreachable!();
    }
    fn update_venue(&self, _venue: &Venue) -> Result<()> {
        unreachable!();
    }

    fn get_venue(&self, id: &str) -> Result<Venue> {
        get_venue(&mut self.conn.borrow_mut(), id)
    }
    fn all_venues(&self) -> Result<Vec<Venue>> {
        all_venues(&mut self.conn.borrow_mut())
    }
    fn count_venues(&self) -> Result<usize> {
        count_venues(&mut self.conn.borrow_mut())
    }

    fn delete_venue(&self, _id: &str) -> Result<()> {
        unreachable!();
    }
}

impl VenueRepo for DbReadWrite<'_> {
    fn create_venue(&self, venue: &Venue) -> Result<()> {
        create_venue(&mut self.conn.borrow_mut(), venue)
    }
    fn update_venue(&self, venue: &Venue) -> Result<()> {
        update_venue(&mut self.conn.borrow_mut(), venue)
    }

    fn get_venue(&self, id: &str) -> Result<Venue> {
        get_venue(&mut self.conn.borrow_mut(), id)
    }
    fn all_venues(&self) -> Result<Vec<Venue>> {
        all_venues(&mut self.conn.borrow_mut())
    }
    fn count_venues(&self) -> Result<usize> {
        count_venues(&mut self.conn.borrow_mut())
    }

    fn delete_venue(&self, id: &str) -> Result<()> {
        delete_venue(&mut self.conn.borrow_mut(), id)
    }
}

impl VenueRepo for DbConnection<'_> {
    fn create_venue(&self, venue: &Venue) -> Result<()> {
        create_venue(&mut self.conn.borrow_mut(), venue)
    }
    fn update_venue(&self, venue: &Venue) -> Result<()> {
        update_venue(&mut self.conn.borrow_mut(), venue)
    }

    fn get_venue(&self, id: &str) -> Result<Venue> {
        get_venue(&mut self.conn.borrow_mut(), id)
    }
    fn all_venues(&self) -> Result<Vec<Venue>> {
        all_venues(&mut self.conn.borrow_mut())
    }
    fn count_venues(&self) -> Result<usize> {
        count_venues(&mut self.conn.borrow_mut())
    }

    fn delete_venue(&self, id: &str) -> Result<()> {
        delete_venue(&mut self.conn.borrow_mut(), id)
    }
}

pub(crate) fn resolve_venue_rowid(conn: &mut SqliteConnection, id: &str) -> Result<i64> {
    use schema::venues::dsl;
    dsl::venues
        .select(dsl::rowid)
        .filter(dsl::id.eq(id))
        .first::<i64>(conn)
        .map_err(from_diesel_err)
}

impl From<models::VenueEntity> for Venue {
    fn from(from: models::VenueEntity) -> Self {
        let models::VenueEntity {
            id,
            name,
            address,
            opening_hours,
            description,
            ..
        } = from;
        Self {
            id: id.into(),
            name,
            address,
            opening_hours,
            description,
        }
    }
}

fn create_venue(conn: &mut SqliteConnection, v: &Venue) -> Result<()> {
    let new_venue = models::NewVenue::from(v);
    diesel::insert_into(schema::venues::table)
        .values(&new_venue)
        .execute(conn)
        .map_err(from_diesel_err)?;
    Ok(())
}

fn update_venue(conn: &mut SqliteConnection, v: &Venue) -> Result<()> {
    use schema::venues::dsl;
    let new_venue = models::NewVenue::from(v);
    diesel::update(dsl::venues.filter(dsl::id.eq(new_venue.id)))
        .set(&new_venue)
        .execute(conn)
        .map_err(from_diesel_err)?;
    Ok(())
}

fn get_venue(conn: &mut SqliteConnection, id: &str) -> Result<Venue> {
    use schema::venues::dsl;
    Ok(dsl::venues
        .filter(dsl::id.eq(id))
        .first::<models::VenueEntity>(conn)
        .map_err(from_diesel_err)?
        .into())
}

fn all_venues(conn: &mut SqliteConnection) -> Result<Vec<Venue>> {
    use schema::venues::dsl;
    Ok(dsl::venues
        .order_by(dsl::name)
        .load::<models::VenueEntity>(conn)
        .map_err(from_diesel_err)?
        .into_iter()
        .map(Into::into)
        .collect())
}

fn count_venues(conn: &mut SqliteConnection) -> Result<usize> {
    use schema::venues::dsl;
    Ok(dsl::venues
        .select(diesel::dsl::count(dsl::rowid))
        .first::<i64>(conn)
        .map_err(from_diesel_err)? as usize)
}

fn delete_venue(conn: &mut SqliteConnection, id: &str) -> Result<()> {
    use schema::venues::dsl;
    let deleted = diesel::delete(dsl::venues.filter(dsl::id.eq(id)))
        .execute(conn)
        .map_err(from_diesel_err)?;
    if deleted == 0 {
        return Err(repo::Error::NotFound);
    }
    Ok(())
}
