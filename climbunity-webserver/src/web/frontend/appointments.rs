use maud::Markup;
use rocket::{
    self,
    form::Form,
    get, post,
    request::FlashMessage,
    response::{Flash, Redirect},
    uri, FromForm,
};

use super::{login_redirect, view};
use crate::web::{guards::*, sqlite::Connections, Result};
use climbunity_application::prelude as flows;
use climbunity_core::{
    entities::*,
    repositories::{UserRepo, VenueRepo},
    usecases::{self, Error as ParameterError},
};

#[derive(FromForm)]
pub struct AppointmentForm {
    pub(crate) appointment_datetime: String,
    pub(crate) venue_id: String,
    pub(crate) guests: Vec<String>,
}

#[allow(clippy::result_large_err)]
#[get("/new_appointment")]
pub fn get_new_appointment(
    db: Connections,
    account: Option<Account>,
    flash: Option<FlashMessage>,
) -> std::result::Result<Result<Markup>, Redirect> {
    let Some(account) = account else {
        return Err(login_redirect("/new_appointment"));
    };
    Ok((|| {
        let db = db.shared()?;
        let venues = db.all_venues()?;
        let users = db.all_users()?;
        Ok(view::new_appointment(
            account.username(),
            flash,
            &venues,
            &users,
        ))
    })())
}

#[allow(clippy::result_large_err)]
#[post("/new_appointment", data = "<form>")]
pub fn post_new_appointment(
    db: Connections,
    account: Option<Account>,
    form: Form<AppointmentForm>,
) -> std::result::Result<Redirect, Flash<Redirect>> {
    let Some(account) = account else {
        return Ok(login_redirect("/new_appointment"));
    };
    let form = form.into_inner();
    let Ok(scheduled_at) = parse_datetime_local(&form.appointment_datetime) else {
        return Err(Flash::error(
            Redirect::to(uri!(get_new_appointment)),
            "Invalid appointment date and time.",
        ));
    };
    let user = {
        let Ok(shared_db) = db.shared() else {
            return Err(Flash::error(
                Redirect::to(uri!(get_new_appointment)),
                "We are so sorry! An internal server error has occurred. Please try again later.",
            ));
        };
        match account.user(&shared_db) {
            Ok(user) => user,
            Err(_) => return Ok(login_redirect("/new_appointment")),
        }
    };
    let new_appointment = usecases::NewAppointment {
        venue_id: form.venue_id.into(),
        scheduled_at,
        guests: form.guests.into_iter().map(Into::into).collect(),
    };
    match flows::create_appointment(&db, &user.id, new_appointment) {
        Err(err) => {
            let msg = match err {
                climbunity_application::error::AppError::Business(
                    climbunity_application::error::BError::Parameter(
                        ParameterError::AppointmentDate,
                    ),
                ) => "The appointment date cannot be in the past!",
                _ => "Failed to create the appointment.",
            };
            Err(Flash::error(Redirect::to(uri!(get_new_appointment)), msg))
        }
        Ok(_) => Ok(Redirect::to(format!("/profile/{}", user.id))),
    }
}

#[allow(clippy::result_large_err)]
#[post("/join_appointment/<id>")]
pub fn post_join_appointment(
    db: Connections,
    account: Option<Account>,
    id: &str,
) -> std::result::Result<Redirect, Flash<Redirect>> {
    let Some(account) = account else {
        return Ok(login_redirect("/"));
    };
    let Ok(db) = db.exclusive() else {
        return Err(Flash::error(
            Redirect::to("/"),
            "We are so sorry! An internal server error has occurred. Please try again later.",
        ));
    };
    let user = match account.user(&db) {
        Ok(user) => user,
        Err(_) => return Ok(login_redirect("/")),
    };
    match usecases::join_appointment(&db, &user.id, id) {
        Err(_) => Err(Flash::error(
            Redirect::to(format!("/profile/{}", user.id)),
            "Failed to join the appointment.",
        )),
        Ok(()) => Ok(Redirect::to(format!("/profile/{}", user.id))),
    }
}

#[allow(clippy::result_large_err)]
#[post("/delete_appointment/<id>")]
pub fn post_delete_appointment(
    db: Connections,
    account: Option<Account>,
    id: &str,
) -> std::result::Result<Redirect, Flash<Redirect>> {
    let Some(account) = account else {
        return Ok(login_redirect("/"));
    };
    let Ok(db) = db.exclusive() else {
        return Err(Flash::error(
            Redirect::to("/"),
            "We are so sorry! An internal server error has occurred. Please try again later.",
        ));
    };
    let user = match account.user(&db) {
        Ok(user) => user,
        Err(_) => return Ok(login_redirect("/")),
    };
    match usecases::delete_appointment(&db, &user, id) {
        Err(_) => Err(Flash::error(
            Redirect::to(format!("/profile/{}", user.id)),
            "Failed to delete the appointment.",
        )),
        Ok(()) => Ok(Redirect::to(format!("/profile/{}", user.id))),
    }
}

#[cfg(test)]
mod tests {
    use rocket::http::Status as HttpStatus;
    use time::{Duration, OffsetDateTime};

    use super::*;
    use crate::web::tests::{login_user, prelude::*, register_user};
    use climbunity_core::repositories::AppointmentRepo;

    fn setup() -> (Client, Connections) {
        let (client, db) = crate::web::tests::rocket_test_setup(vec![("/", super::super::routes())]);
        (client, db)
    }

    fn create_venue(pool: &Connections) -> Id {
        let db = pool.exclusive().unwrap();
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

    fn tomorrow_datetime_local() -> String {
        let tomorrow = OffsetDateTime::now_utc() + Duration::days(1);
        format!(
            "{:04}-{:02}-{:02}T12:00",
            tomorrow.year(),
            u8::from(tomorrow.month()),
            tomorrow.day()
        )
    }

    #[test]
    fn create_join_and_delete_appointment() {
        let (client, pool) = setup();
        let venue_id = create_venue(&pool);
        register_user(&pool, "me1", "password123");
        register_user(&pool, "me2", "password123");

        // User A creates an appointment.
        login_user(&client, "me1", "password123");
        let res = client
            .post("/new_appointment")
            .header(ContentType::Form)
            .body(format!(
                "appointment_datetime={}&venue_id={venue_id}",
                tomorrow_datetime_local()
            ))
            .dispatch();
        assert_eq!(res.status(), HttpStatus::SeeOther);
        let appointment_id = {
            let db = pool.shared().unwrap();
            let appointments = db.appointments_at_venue(venue_id.as_str()).unwrap();
            assert_eq!(appointments.len(), 1);
            assert_eq!(appointments[0].attendants.len(), 1);
            appointments[0].id.clone()
        };

        // User B joins it.
        client.post("/logout").dispatch();
        login_user(&client, "me2", "password123");
        let res = client
            .post(format!("/join_appointment/{appointment_id}"))
            .dispatch();
        assert_eq!(res.status(), HttpStatus::SeeOther);
        {
            let db = pool.shared().unwrap();
            let appointment = db.get_appointment(appointment_id.as_str()).unwrap();
            // Creator + joiner
            assert_eq!(appointment.attendants.len(), 2);
        }

        // Only the creator may delete it.
        let res = client
            .post(format!("/delete_appointment/{appointment_id}"))
            .dispatch();
        assert_eq!(res.status(), HttpStatus::SeeOther);
        {
            let db = pool.shared().unwrap();
            assert!(db.get_appointment(appointment_id.as_str()).is_ok());
        }
        client.post("/logout").dispatch();
        login_user(&client, "me1", "password123");
        let res = client
            .post(format!("/delete_appointment/{appointment_id}"))
            .dispatch();
        assert_eq!(res.status(), HttpStatus::SeeOther);
        let db = pool.shared().unwrap();
        assert!(db.get_appointment(appointment_id.as_str()).is_err());
        // Both users' appointment sets are empty afterwards.
        for username in ["me1", "me2"] {
            let user = db.try_get_user_by_username(username).unwrap().unwrap();
            assert!(db
                .appointments_of_user(user.id.as_str())
                .unwrap()
                .is_empty());
        }
    }

    #[test]
    fn reject_past_appointment_date() {
        let (client, pool) = setup();
        let venue_id = create_venue(&pool);
        register_user(&pool, "me1", "password123");
        login_user(&client, "me1", "password123");
        let res = client
            .post("/new_appointment")
            .header(ContentType::Form)
            .body(format!(
                "appointment_datetime=2020-01-01T12:00&venue_id={venue_id}"
            ))
            .dispatch();
        assert_eq!(res.status(), HttpStatus::SeeOther);
        for h in res.headers().iter() {
            if h.name.as_str() == "Location" {
                assert_eq!(h.value, "/new_appointment");
            }
        }
        let db = pool.shared().unwrap();
        assert!(db
            .appointments_at_venue(venue_id.as_str())
            .unwrap()
            .is_empty());
    }
}
