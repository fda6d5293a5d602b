use time::{Duration, OffsetDateTime};

use climbunity_core::gateways::assets::{AssetGateway, DEFAULT_ROUTE_IMAGE};
use climbunity_core::repositories::*;

use super::{prelude::*, *};

struct NoImages;

impl AssetGateway for NoImages {
    fn has_image(&self, _: &str) -> bool {
        false
    }
}

fn setup() -> sqlite::Connections {
    let connections = climbunity_db_sqlite::Connections::init(":memory:", 1).unwrap();
    climbunity_db_sqlite::run_embedded_database_migrations(connections.exclusive().unwrap());
    connections
}

fn register_user(connections: &sqlite::Connections, username: &str) -> Id {
    let db = connections.exclusive().unwrap();
    usecases::create_new_user(
        &db,
        usecases::NewUser {
            username: username.into(),
            email: EmailAddress::new_unchecked(format!("{username}@localhost.fake")),
            password: "password123".into(),
            first_name: "Jo".into(),
            last_name: "Climber".into(),
            address: "somewhere".into(),
            has_gear: false,
            styles: vec![],
        },
    )
    .unwrap()
}

fn create_venue(connections: &sqlite::Connections) -> Id {
    let db = connections.exclusive().unwrap();
    usecases::create_new_venue(
        &db,
        usecases::NewVenue {
            name: "Rock Oasis".into(),
            address: "Dundas and Carlaw".into(),
            opening_hours: None,
            description: None,
        },
    )
    .unwrap()
}

fn new_route(venue_id: &Id, name: &str) -> usecases::NewRoute {
    usecases::NewRoute {
        venue_id: venue_id.clone(),
        setter_id: None,
        name: name.into(),
        grade: "V4".into(),
        photo: None,
        set_on: None,
        takedown_on: None,
        styles: vec![],
        tags: vec![],
    }
}

#[test]
fn create_route_with_unresolved_photo() {
    let connections = setup();
    let venue_id = create_venue(&connections);
    let mut route = new_route(&venue_id, "Silence");
    route.photo = Some("missing.png".into());
    let id = create_route(&connections, &NoImages, route).unwrap();
    let stored = connections.shared().unwrap().get_route(id.as_str()).unwrap();
    assert_eq!(stored.photo, DEFAULT_ROUTE_IMAGE);
    assert_eq!(stored.venue_id, venue_id);
}

#[test]
fn update_route_replaces_association_sets() {
    let connections = setup();
    let venue_id = create_venue(&connections);
    let mut route = new_route(&venue_id, "Silence");
    route.styles = vec!["boulder".into()];
    route.tags = vec!["crimpy".into()];
    let id = create_route(&connections, &NoImages, route).unwrap();

    let mut edit = new_route(&venue_id, "Silence");
    edit.styles = vec!["lead".into()];
    edit.tags = vec!["overhang".into()];
    update_route(&connections, &NoImages, id.as_str(), edit).unwrap();

    let stored = connections.shared().unwrap().get_route(id.as_str()).unwrap();
    assert_eq!(stored.styles, vec!["lead".to_string()]);
    assert_eq!(stored.tags, vec!["overhang".to_string()]);
}

#[test]
fn delete_venue_leaves_no_orphans() {
    let connections = setup();
    let venue_id = create_venue(&connections);
    let user_id = register_user(&connections, "me1");

    let route_a = create_route(&connections, &NoImages, new_route(&venue_id, "Silence")).unwrap();
    let route_b =
        create_route(&connections, &NoImages, new_route(&venue_id, "Biographie")).unwrap();
    {
        let db = connections.exclusive().unwrap();
        for route_id in [&route_a, &route_b] {
            usecases::log_ascent(
                &db,
                &user_id,
                route_id.as_str(),
                usecases::NewAscent {
                    sent_on: time::macros::date!(2022 - 02 - 02),
                    send_type: "redpoint".into(),
                    rating: 4,
                    comment: None,
                },
            )
            .unwrap();
        }
    }
    let scheduled_at = Timestamp::from(OffsetDateTime::now_utc() + Duration::hours(1));
    create_appointment(
        &connections,
        &user_id,
        usecases::NewAppointment {
            venue_id: venue_id.clone(),
            scheduled_at,
            guests: vec![],
        },
    )
    .unwrap();

    delete_venue(&connections, venue_id.as_str()).unwrap();

    let db = connections.shared().unwrap();
    assert!(matches!(
        db.get_venue(venue_id.as_str()).err().unwrap(),
        Error::NotFound
    ));
    assert!(db.routes_at_venue(venue_id.as_str()).unwrap().is_empty());
    for route_id in [&route_a, &route_b] {
        assert!(matches!(
            db.get_route(route_id.as_str()).err().unwrap(),
            Error::NotFound
        ));
    }
    assert!(db
        .appointments_of_user(user_id.as_str())
        .unwrap()
        .is_empty());
    assert!(db.ascents_of_user(user_id.as_str()).unwrap().is_empty());
}

#[test]
fn delete_route_removes_project_memberships() {
    let connections = setup();
    let venue_id = create_venue(&connections);
    let user_id = register_user(&connections, "me1");
    let route_id = create_route(&connections, &NoImages, new_route(&venue_id, "Silence")).unwrap();
    {
        let db = connections.exclusive().unwrap();
        usecases::add_project(&db, &user_id, route_id.as_str()).unwrap();
    }
    delete_route(&connections, route_id.as_str()).unwrap();
    let db = connections.shared().unwrap();
    assert!(db
        .project_route_ids_of_user(user_id.as_str())
        .unwrap()
        .is_empty());
}

#[test]
fn create_appointment_in_the_past_stores_nothing() {
    let connections = setup();
    let venue_id = create_venue(&connections);
    let user_id = register_user(&connections, "me1");
    let err = create_appointment(
        &connections,
        &user_id,
        usecases::NewAppointment {
            venue_id,
            scheduled_at: Timestamp::from_seconds(Timestamp::now().into_seconds() - 1),
            guests: vec![],
        },
    )
    .err()
    .unwrap();
    assert!(matches!(
        err,
        error::AppError::Business(error::BError::Parameter(
            usecases::Error::AppointmentDate
        ))
    ));
    let db = connections.shared().unwrap();
    assert!(db
        .appointments_of_user(user_id.as_str())
        .unwrap()
        .is_empty());
}
