use maud::Markup;
use rocket::{
    self,
    form::Form,
    get, post,
    request::FlashMessage,
    response::{Flash, Redirect},
    FromForm,
};

use super::{login_redirect, view};
use crate::web::{guards::*, sqlite::Connections, Result};
use climbunity_core::{
    entities::*,
    usecases::{self, Error as ParameterError},
};

#[derive(FromForm)]
pub struct AscentForm {
    pub(crate) ascent_date: String,
    pub(crate) ascent_type: String,
    pub(crate) rating: i8,
    pub(crate) comments: Option<String>,
}

#[allow(clippy::result_large_err)]
#[get("/log_ascent/<route_id>")]
pub fn get_log_ascent(
    db: Connections,
    account: Option<Account>,
    route_id: &str,
    flash: Option<FlashMessage>,
) -> std::result::Result<Result<Markup>, Redirect> {
    let Some(account) = account else {
        return Err(login_redirect(&format!("/log_ascent/{route_id}")));
    };
    Ok((|| {
        let db = db.shared()?;
        let route = usecases::get_route(&db, route_id)?;
        let venue = usecases::get_venue(&db, route.venue_id.as_str())?;
        Ok(view::log_ascent(account.username(), flash, &route, &venue))
    })())
}

#[allow(clippy::result_large_err)]
#[post("/log_ascent/<route_id>", data = "<form>")]
pub fn post_log_ascent(
    db: Connections,
    account: Option<Account>,
    route_id: &str,
    form: Form<AscentForm>,
) -> std::result::Result<Redirect, Flash<Redirect>> {
    let Some(account) = account else {
        return Ok(login_redirect(&format!("/log_ascent/{route_id}")));
    };
    let form = form.into_inner();
    let back = format!("/log_ascent/{route_id}");
    let Ok(sent_on) = parse_date(&form.ascent_date) else {
        return Err(Flash::error(Redirect::to(back), "Invalid ascent date."));
    };
    let Ok(db) = db.exclusive() else {
        return Err(Flash::error(
            Redirect::to(back),
            "We are so sorry! An internal server error has occurred. Please try again later.",
        ));
    };
    let user = match account.user(&db) {
        Ok(user) => user,
        Err(_) => return Ok(login_redirect(&back)),
    };
    let new_ascent = usecases::NewAscent {
        sent_on,
        send_type: form.ascent_type,
        rating: form.rating,
        comment: form.comments,
    };
    match usecases::log_ascent(&db, &user.id, route_id, new_ascent) {
        Err(err) => {
            let msg = match err {
                ParameterError::RatingValue => "The rating must be between 0 and 5.",
                ParameterError::SendType => "Invalid type of ascent.",
                ParameterError::Comment => "Please limit comments to 1000 characters.",
                _ => "Failed to log the ascent.",
            };
            Err(Flash::error(Redirect::to(back), msg))
        }
        Ok(_) => Ok(Redirect::to(format!("/route/{route_id}"))),
    }
}

#[allow(clippy::result_large_err)]
#[post("/delete_ascent/<id>")]
pub fn post_delete_ascent(
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
    match usecases::delete_ascent(&db, &user, id) {
        Err(_) => Err(Flash::error(
            Redirect::to(format!("/profile/{}", user.id)),
            "Failed to delete the ascent.",
        )),
        Ok(()) => Ok(Redirect::to(format!("/profile/{}", user.id))),
    }
}

#[cfg(test)]
mod tests {
    use rocket::http::Status as HttpStatus;

    use super::*;
    use crate::web::tests::{login_user, prelude::*, register_user};
    use climbunity_core::repositories::{AscentRepo, UserRepo};

    fn setup() -> (Client, Connections) {
        let (client, db) = crate::web::tests::rocket_test_setup(vec![("/", super::super::routes())]);
        (client, db)
    }

    fn create_route(pool: &Connections) -> Id {
        let db = pool.exclusive().unwrap();
        let venue_id = usecases::create_new_venue(
            &db,
            usecases::NewVenue {
                name: "Rock Oasis".into(),
                address: "Dundas and Carlaw".into(),
                opening_hours: None,
                description: None,
            },
        )
        .unwrap();
        usecases::create_new_route(
            &db,
            &super::super::EmbeddedImages,
            usecases::NewRoute {
                venue_id,
                setter_id: None,
                name: "Silence".into(),
                grade: "9c".into(),
                photo: None,
                set_on: None,
                takedown_on: None,
                styles: vec![],
                tags: vec![],
            },
        )
        .unwrap()
    }

    #[test]
    fn log_ascent_requires_login() {
        let (client, pool) = setup();
        let route_id = create_route(&pool);
        let res = client
            .post(format!("/log_ascent/{route_id}"))
            .header(ContentType::Form)
            .body("ascent_date=2022-02-02&ascent_type=onsight&rating=5")
            .dispatch();
        assert_eq!(res.status(), HttpStatus::SeeOther);
        for h in res.headers().iter() {
            if h.name.as_str() == "Location" {
                assert_eq!(h.value, format!("/login?next=/log_ascent/{route_id}"));
            }
        }
        let db = pool.shared().unwrap();
        assert!(db.ascents_of_route(route_id.as_str()).unwrap().is_empty());
    }

    #[test]
    fn log_and_read_back_ascent() {
        let (client, pool) = setup();
        let route_id = create_route(&pool);
        register_user(&pool, "me1", "password123");
        login_user(&client, "me1", "password123");
        let res = client
            .post(format!("/log_ascent/{route_id}"))
            .header(ContentType::Form)
            .body("ascent_date=2022-02-02&ascent_type=onsight&rating=5")
            .dispatch();
        assert_eq!(res.status(), HttpStatus::SeeOther);
        let db = pool.shared().unwrap();
        let ascents = db.ascents_of_route(route_id.as_str()).unwrap();
        assert_eq!(ascents.len(), 1);
        assert_eq!(ascents[0].sent_on, time::macros::date!(2022 - 02 - 02));
        assert_eq!(ascents[0].send_type, SendType::Onsight);
        assert_eq!(ascents[0].rating, RatingValue::from(5));
    }

    #[test]
    fn reject_out_of_range_rating() {
        let (client, pool) = setup();
        let route_id = create_route(&pool);
        register_user(&pool, "me1", "password123");
        login_user(&client, "me1", "password123");
        let res = client
            .post(format!("/log_ascent/{route_id}"))
            .header(ContentType::Form)
            .body("ascent_date=2022-02-02&ascent_type=onsight&rating=6")
            .dispatch();
        assert_eq!(res.status(), HttpStatus::SeeOther);
        for h in res.headers().iter() {
            if h.name.as_str() == "Location" {
                assert_eq!(h.value, format!("/log_ascent/{route_id}"));
            }
        }
        let db = pool.shared().unwrap();
        assert!(db.ascents_of_route(route_id.as_str()).unwrap().is_empty());
    }

    #[test]
    fn owner_deletes_own_ascent() {
        let (client, pool) = setup();
        let route_id = create_route(&pool);
        register_user(&pool, "me1", "password123");
        login_user(&client, "me1", "password123");
        client
            .post(format!("/log_ascent/{route_id}"))
            .header(ContentType::Form)
            .body("ascent_date=2022-02-02&ascent_type=flash&rating=4")
            .dispatch();
        let ascent_id = {
            let db = pool.shared().unwrap();
            db.ascents_of_route(route_id.as_str()).unwrap()[0].id.clone()
        };
        let res = client.post(format!("/delete_ascent/{ascent_id}")).dispatch();
        assert_eq!(res.status(), HttpStatus::SeeOther);
        let db = pool.shared().unwrap();
        assert!(db.ascents_of_route(route_id.as_str()).unwrap().is_empty());
        // Redirects to the owner's profile.
        let user = db.try_get_user_by_username("me1").unwrap().unwrap();
        drop(db);
        let res = client.get(format!("/profile/{}", user.id)).dispatch();
        assert_eq!(res.status(), HttpStatus::Ok);
    }
}
