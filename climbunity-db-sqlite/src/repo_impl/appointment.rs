use super::{user::resolve_user_rowid, venue::resolve_venue_rowid, *};

impl AppointmentRepo for DbReadOnly<'_> {
    fn create_appointment(&self, _appointment: &Appointment) -> Result<()> {
        unreachable!();
    }

    fn get_appointment(&self, id: &str) -> Result<Appointment> {
        get_appointment(&mut self.conn.borrow_mut(), id)
    }
    fn appointments_at_venue(&self, venue_id: &str) -> Result<Vec<Appointment>> {
        appointments_at_venue(&mut self.conn.borrow_mut(), venue_id)
    }
    fn appointments_of_user(&self, user_id: &str) -> Result<Vec<Appointment>> {
        appointments_of_user(&mut self.conn.borrow_mut(), user_id)
    }

    fn add_appointment_attendant(&self, _id: &str, _user_id: &str) -> Result<()> {
        unreachable!();
    }

    fn delete_appointment(&self, _id: &str) -> Result<()> {
        unreachable!();
    }
    fn delete_appointments_at_venue(&self, _venue_id: &str) -> Result<usize> {
        unreachable!();
    }
}

impl AppointmentRepo for DbReadWrite<'_> {
    fn create_appointment(&self, appointment: &Appointment) -> Result<()> {
        create_appointment(&mut self.conn.borrow_mut(), appointment)
    }

    fn get_appointment(&self, id: &str) -> Result<Appointment> {
        get_appointment(&mut self.conn.borrow_mut(), id)
    }
    fn appointments_at_venue(&self, venue_id: &str) -> Result<Vec<Appointment>> {
        appointments_at_venue(&mut self.conn.borrow_mut(), venue_id)
    }
    fn appointments_of_user(&self, user_id: &str) -> Result<Vec<Appointment>> {
        appointments_of_user(&mut self.conn.borrow_mut(), user_id)
    }

    fn add_appointment_attendant(&self, id: &str, user_id: &str) -> Result<()> {
        add_appointment_attendant(&mut self.conn.borrow_mut(), id, user_id)
    }

    fn delete_appointment(&self, id: &str) -> Result<()> {
        delete_appointment(&mut self.conn.borrow_mut(), id)
    }
    fn delete_appointments_at_venue(&self, venue_id: &str) -> Result<usize> {
        delete_appointments_at_venue(&mut self.conn.borrow_mut(), venue_id)
    }
}

impl AppointmentRepo for DbConnection<'_> {
    fn create_appointment(&self, appointment: &Appointment) -> Result<()> {
        create_appointment(&mut self.conn.borrow_mut(), appointment)
    }

    fn get_appointment(&self, id: &str) -> Result<Appointment> {
        get_appointment(&mut self.conn.borrow_mut(), id)
    }
    fn appointments_at_venue(&self, venue_id: &str) -> Result<Vec<Appointment>> {
        appointments_at_venue(&mut self.conn.borrow_mut(), venue_id)
    }
    fn appointments_of_user(&self, user_id: &str) -> Result<Vec<Appointment>> {
        appointments_of_user(&mut self.conn.borrow_mut(), user_id)
    }

    fn add_appointment_attendant(&self, id: &str, user_id: &str) -> Result<()> {
        add_appointment_attendant(&mut self.conn.borrow_mut(), id, user_id)
    }

    fn delete_appointment(&self, id: &str) -> Result<()> {
        delete_appointment(&mut self.conn.borrow_mut(), id)
    }
    fn delete_appointments_at_venue(&self, venue_id: &str) -> Result<usize> {
        delete_appointments_at_venue(&mut self.conn.borrow_mut(), venue_id)
    }
}

fn resolve_appointment_rowid(conn: &mut SqliteConnection, id: &str) -> Result<i64> {
    use schema::appointments::dsl;
    dsl::appointments
        .select(dsl::rowid)
        .filter(dsl::id.eq(id))
        .first::<i64>(conn)
        .map_err(from_diesel_err)
}

fn load_attendants(conn: &mut SqliteConnection, appointment_rowid: i64) -> Result<Vec<Id>> {
    use schema::{appointment_attendants::dsl as aa_dsl, users::dsl as u_dsl};
    Ok(aa_dsl::appointment_attendants
        .inner_join(u_dsl::users)
        .select(u_dsl::id)
        .filter(aa_dsl::appointment_rowid.eq(appointment_rowid))
        .order_by(aa_dsl::user_rowid)
        .load::<String>(conn)
        .map_err(from_diesel_err)?
        .into_iter()
        .map(Into::into)
        .collect())
}

fn into_appointment(
    conn: &mut SqliteConnection,
    entity: models::AppointmentEntity,
) -> Result<Appointment> {
    let attendants = load_attendants(conn, entity.rowid)?;
    let models::AppointmentEntity {
        id,
        scheduled_at,
        created_at,
        created_by,
        venue_id,
        ..
    } = entity;
    Ok(Appointment {
        id: id.into(),
        created_by: created_by.into(),
        venue_id: venue_id.into(),
        scheduled_at: Timestamp::from_seconds(scheduled_at),
        created_at: Timestamp::from_seconds(created_at),
        attendants,
    })
}

fn create_appointment(conn: &mut SqliteConnection, a: &Appointment) -> Result<()> {
    let created_by = resolve_user_rowid(conn, a.created_by.as_str())?;
    let venue_rowid = resolve_venue_rowid(conn, a.venue_id.as_str())?;
    let mut attendant_rowids = Vec::with_capacity(a.attendants.len());
    for attendant in &a.attendants {
        attendant_rowids.push(resolve_user_rowid(conn, attendant.as_str())?);
    }
    let new_appointment = models::NewAppointment {
        id: a.id.as_str(),
        created_by,
        venue_rowid,
        scheduled_at: a.scheduled_at.into_seconds(),
        created_at: a.created_at.into_seconds(),
    };
    conn.transaction::<_, DieselError, _>(|conn| {
        diesel::insert_into(schema::appointments::table)
            .values(&new_appointment)
            .execute(conn)?;
        let rowid = schema::appointments::table
            .select(schema::appointments::dsl::rowid)
            .filter(schema::appointments::dsl::id.eq(new_appointment.id))
            .first::<i64>(conn)?;
        let attendants: Vec<_> = attendant_rowids
            .iter()
            .map(|user_rowid| models::NewAppointmentAttendant {
                appointment_rowid: rowid,
                user_rowid: *user_rowid,
            })
            .collect();
        diesel::insert_or_ignore_into(schema::appointment_attendants::table)
            .values(&attendants)
            .execute(conn)?;
        Ok(())
    })
    .map_err(from_diesel_err)?;
    Ok(())
}

fn get_appointment(conn: &mut SqliteConnection, id: &str) -> Result<Appointment> {
    use schema::{appointments::dsl as a_dsl, users::dsl as u_dsl, venues::dsl as v_dsl};
    let entity = a_dsl::appointments
        .inner_join(u_dsl::users)
        .inner_join(v_dsl::venues)
        .select((
            a_dsl::rowid,
            a_dsl::id,
            a_dsl::scheduled_at,
            a_dsl::created_at,
            u_dsl::id,
            v_dsl::id,
        ))
        .filter(a_dsl::id.eq(id))
        .first::<models::AppointmentEntity>(conn)
        .map_err(from_diesel_err)?;
    into_appointment(conn, entity)
}

fn appointments_at_venue(conn: &mut SqliteConnection, venue_id: &str) -> Result<Vec<Appointment>> {
    use schema::{appointments::dsl as a_dsl, users::dsl as u_dsl, venues::dsl as v_dsl};
    let entities = a_dsl::appointments
        .inner_join(u_dsl::users)
        .inner_join(v_dsl::venues)
        .select((
            a_dsl::rowid,
            a_dsl::id,
            a_dsl::scheduled_at,
            a_dsl::created_at,
            u_dsl::id,
            v_dsl::id,
        ))
        .filter(v_dsl::id.eq(venue_id))
        .order_by(a_dsl::scheduled_at)
        .load::<models::AppointmentEntity>(conn)
        .map_err(from_diesel_err)?;
    let mut appointments = Vec::with_capacity(entities.len());
    for entity in entities {
        appointments.push(into_appointment(conn, entity)?);
    }
    Ok(appointments)
}

fn appointments_of_user(conn: &mut SqliteConnection, user_id: &str) -> Result<Vec<Appointment>> {
    use schema::{
        appointment_attendants::dsl as aa_dsl, appointments::dsl as a_dsl, users::dsl as u_dsl,
        venues::dsl as v_dsl,
    };
    let user_rowid = resolve_user_rowid(conn, user_id)?;
    let appointment_rowids = aa_dsl::appointment_attendants
        .select(aa_dsl::appointment_rowid)
        .filter(aa_dsl::user_rowid.eq(user_rowid))
        .load::<i64>(conn)
        .map_err(from_diesel_err)?;
    let entities = a_dsl::appointments
        .inner_join(u_dsl::users)
        .inner_join(v_dsl::venues)
        .select((
            a_dsl::rowid,
            a_dsl::id,
            a_dsl::scheduled_at,
            a_dsl::created_at,
            u_dsl::id,
            v_dsl::id,
        ))
        .filter(a_dsl::rowid.eq_any(appointment_rowids))
        .order_by(a_dsl::scheduled_at)
        .load::<models::AppointmentEntity>(conn)
        .map_err(from_diesel_err)?;
    let mut appointments = Vec::with_capacity(entities.len());
    for entity in entities {
        appointments.push(into_appointment(conn, entity)?);
    }
    Ok(appointments)
}

fn add_appointment_attendant(
    conn: &mut SqliteConnection,
    id: &str,
    user_id: &str,
) -> Result<()> {
    let appointment_rowid = resolve_appointment_rowid(conn, id)?;
    let user_rowid = resolve_user_rowid(conn, user_id)?;
    diesel::insert_or_ignore_into(schema::appointment_attendants::table)
        .values(&models::NewAppointmentAttendant {
            appointment_rowid,
            user_rowid,
        })
        .execute(conn)
        .map_err(from_diesel_err)?;
    Ok(())
}

fn delete_appointment(conn: &mut SqliteConnection, id: &str) -> Result<()> {
    use schema::{appointment_attendants::dsl as aa_dsl, appointments::dsl};
    let rowid = resolve_appointment_rowid(conn, id)?;
    conn.transaction::<_, DieselError, _>(|conn| {
        diesel::delete(
            aa_dsl::appointment_attendants.filter(aa_dsl::appointment_rowid.eq(rowid)),
        )
        .execute(conn)?;
        diesel::delete(dsl::appointments.filter(dsl::rowid.eq(rowid))).execute(conn)?;
        Ok(())
    })
    .map_err(from_diesel_err)?;
    Ok(())
}

fn delete_appointments_at_venue(
    conn: &mut SqliteConnection,
    venue_id: &str,
) -> Result<usize> {
    use schema::{appointment_attendants::dsl as aa_dsl, appointments::dsl};
    let venue_rowid = resolve_venue_rowid(conn, venue_id)?;
    let rowids = dsl::appointments
        .select(dsl::rowid)
        .filter(dsl::venue_rowid.eq(venue_rowid))
        .load::<i64>(conn)
        .map_err(from_diesel_err)?;
    conn.transaction::<_, DieselError, _>(|conn| {
        diesel::delete(
            aa_dsl::appointment_attendants.filter(aa_dsl::appointment_rowid.eq_any(&rowids)),
        )
        .execute(conn)?;
        diesel::delete(dsl::appointments.filter(dsl::rowid.eq_any(&rowids))).execute(conn)
    })
    .map_err(from_diesel_err)
}
