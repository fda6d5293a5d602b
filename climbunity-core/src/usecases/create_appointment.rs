use super::prelude::*;

#[derive(Debug, Clone)]
pub struct NewAppointment {
    pub venue_id: Id,
    pub scheduled_at: Timestamp,
    /// Additional guests besides the creator.
    pub guests: Vec<Id>,
}

pub fn create_appointment<R>(repo: &R, created_by: &Id, a: NewAppointment) -> Result<Id>
where
    R: AppointmentRepo + VenueRepo + UserRepo,
{
    // Checked at creation time only. An appointment is not
    // invalidated when "now" later passes it.
    if a.scheduled_at <= Timestamp::now() {
        return Err(Error::AppointmentDate);
    }
    let venue = repo.get_venue(a.venue_id.as_str())?;
    let creator = repo.get_user(created_by.as_str())?;
    let mut attendants = vec![creator.id.clone()];
    for guest_id in &a.guests {
        let guest = repo.get_user(guest_id.as_str())?;
        if !attendants.contains(&guest.id) {
            attendants.push(guest.id);
        }
    }
    let new_appointment = Appointment {
        id: Id::new(),
        created_by: creator.id,
        venue_id: venue.id,
        scheduled_at: a.scheduled_at,
        created_at: Timestamp::now(),
        attendants,
    };
    log::debug!(
        "Creating new appointment at venue {} for {}",
        new_appointment.venue_id,
        new_appointment.scheduled_at
    );
    repo.create_appointment(&new_appointment)?;
    Ok(new_appointment.id)
}

#[cfg(test)]
pub mod tests {
    use super::{
        super::{
            create_new_route::tests::create_venue, create_new_user, tests::MockDb, NewUser,
        },
        *,
    };
    use time::{Duration, OffsetDateTime};

    pub fn create_user(db: &MockDb, username: &str) -> Id {
        create_new_user(
            db,
            NewUser {
                username: username.into(),
                email: EmailAddress::new_unchecked(format!("{username}@bar.io")),
                password: "secret123".into(),
                first_name: "Jo".into(),
                last_name: "Climber".into(),
                address: "somewhere".into(),
                has_gear: false,
                styles: vec![],
            },
        )
        .unwrap()
    }

    pub fn in_one_hour() -> Timestamp {
        Timestamp::from(OffsetDateTime::now_utc() + Duration::hours(1))
    }

    #[test]
    fn create_appointment_in_the_future() {
        let db = MockDb::default();
        let venue_id = create_venue(&db);
        let creator = create_user(&db, "me1");
        let id = create_appointment(
            &db,
            &creator,
            NewAppointment {
                venue_id: venue_id.clone(),
                scheduled_at: in_one_hour(),
                guests: vec![],
            },
        )
        .unwrap();
        let appointment = db.get_appointment(id.as_str()).unwrap();
        assert_eq!(appointment.created_by, creator);
        assert_eq!(appointment.venue_id, venue_id);
        // The creator attends from the start.
        assert_eq!(appointment.attendants, vec![creator]);
    }

    #[test]
    fn reject_past_or_present_dates() {
        let db = MockDb::default();
        let venue_id = create_venue(&db);
        let creator = create_user(&db, "me1");
        let now = Timestamp::now();
        for scheduled_at in [
            Timestamp::from_seconds(now.into_seconds() - 3600),
            Timestamp::from_seconds(now.into_seconds() - 1),
            now,
        ] {
            assert!(matches!(
                create_appointment(
                    &db,
                    &creator,
                    NewAppointment {
                        venue_id: venue_id.clone(),
                        scheduled_at,
                        guests: vec![],
                    }
                )
                .err()
                .unwrap(),
                Error::AppointmentDate
            ));
        }
        assert!(db
            .appointments_of_user(creator.as_str())
            .unwrap()
            .is_empty());
    }

    #[test]
    fn one_second_in_the_future_succeeds() {
        let db = MockDb::default();
        let venue_id = create_venue(&db);
        let creator = create_user(&db, "me1");
        let scheduled_at = Timestamp::from_seconds(Timestamp::now().into_seconds() + 1);
        assert!(create_appointment(
            &db,
            &creator,
            NewAppointment {
                venue_id,
                scheduled_at,
                guests: vec![],
            }
        )
        .is_ok());
    }

    #[test]
    fn guests_become_attendants() {
        let db = MockDb::default();
        let venue_id = create_venue(&db);
        let creator = create_user(&db, "me1");
        let guest = create_user(&db, "me2");
        let id = create_appointment(
            &db,
            &creator,
            NewAppointment {
                venue_id,
                scheduled_at: in_one_hour(),
                guests: vec![guest.clone(), creator.clone()],
            },
        )
        .unwrap();
        let appointment = db.get_appointment(id.as_str()).unwrap();
        // The creator is not duplicated.
        assert_eq!(appointment.attendants, vec![creator, guest]);
    }

    #[test]
    fn reject_unknown_guests() {
        let db = MockDb::default();
        let venue_id = create_venue(&db);
        let creator = create_user(&db, "me1");
        assert!(matches!(
            create_appointment(
                &db,
                &creator,
                NewAppointment {
                    venue_id,
                    scheduled_at: in_one_hour(),
                    guests: vec![Id::new()],
                }
            )
            .err()
            .unwrap(),
            Error::Repo(RepoError::NotFound)
        ));
    }
}
