use super::prelude::*;

/// Deletes a venue together with all routes set there, all ascents
/// logged on those routes and all appointments booked at the venue.
///
/// Must run within a single transaction so that a partial failure
/// never leaves orphaned rows behind.
pub fn delete_venue<R>(repo: &R, id: &str) -> Result<()>
where
    R: VenueRepo + RouteRepo + AscentRepo + AppointmentRepo,
{
    let venue = repo.get_venue(id)?;
    let deleted = repo.delete_appointments_at_venue(venue.id.as_str())?;
    log::debug!("Deleted {deleted} appointments at venue {}", venue.id);
    for route in repo.routes_at_venue(venue.id.as_str())? {
        repo.delete_ascents_of_route(route.id.as_str())?;
        repo.delete_route(route.id.as_str())?;
    }
    repo.delete_venue(venue.id.as_str())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{
        super::{
            create_appointment, create_new_route,
            create_new_route::tests::{create_venue, new_route, NoImages},
            log_ascent,
            tests::MockDb,
            NewAppointment, NewAscent,
        },
        *,
    };
    use time::{Duration, OffsetDateTime};

    fn create_user(db: &MockDb, username: &str) -> Id {
        super::super::create_new_user(
            db,
            super::super::NewUser {
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

    #[test]
    fn delete_venue_cascades() {
        let db = MockDb::default();
        let venue_id = create_venue(&db);
        let user_id = create_user(&db, "me1");

        let route_a = create_new_route(&db, &NoImages, new_route(&venue_id, "Silence")).unwrap();
        let route_b = create_new_route(&db, &NoImages, new_route(&venue_id, "Biographie")).unwrap();
        for route_id in [&route_a, &route_b] {
            log_ascent(
                &db,
                &user_id,
                route_id.as_str(),
                NewAscent {
                    sent_on: time::macros::date!(2022 - 02 - 02),
                    send_type: "redpoint".into(),
                    rating: 4,
                    comment: None,
                },
            )
            .unwrap();
        }
        let scheduled_at = Timestamp::from(OffsetDateTime::now_utc() + Duration::hours(1));
        create_appointment(
            &db,
            &user_id,
            NewAppointment {
                venue_id: venue_id.clone(),
                scheduled_at,
                guests: vec![],
            },
        )
        .unwrap();

        delete_venue(&db, venue_id.as_str()).unwrap();

        // No rows referencing the venue remain.
        assert!(matches!(
            db.get_venue(venue_id.as_str()).err().unwrap(),
            RepoError::NotFound
        ));
        assert!(db.routes_at_venue(venue_id.as_str()).unwrap().is_empty());
        assert!(db.ascents_of_route(route_a.as_str()).unwrap().is_empty());
        assert!(db.ascents_of_route(route_b.as_str()).unwrap().is_empty());
        assert!(db
            .appointments_at_venue(venue_id.as_str())
            .unwrap()
            .is_empty());
        assert!(db
            .appointments_of_user(user_id.as_str())
            .unwrap()
            .is_empty());
    }

    #[test]
    fn delete_unknown_venue() {
        let db = MockDb::default();
        assert!(matches!(
            delete_venue(&db, "no-such-id").err().unwrap(),
            Error::Repo(RepoError::NotFound)
        ));
    }
}
