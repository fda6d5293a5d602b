use time::Date;

use super::prelude::*;
use crate::gateways::assets::{self, AssetGateway};

pub const MAX_GRADE_LEN: usize = 10;

#[derive(Debug, Clone)]
pub struct NewRoute {
    pub venue_id: Id,
    pub setter_id: Option<Id>,
    pub name: String,
    pub grade: String,
    pub photo: Option<String>,
    pub set_on: Option<Date>,
    pub takedown_on: Option<Date>,
    pub styles: Vec<String>,
    pub tags: Vec<String>,
}

pub fn create_new_route<R>(repo: &R, assets: &dyn AssetGateway, r: NewRoute) -> Result<Id>
where
    R: RouteRepo + VenueRepo + UserRepo + StyleRepo + TagRepo,
{
    let (styles, tags) = validate_route_params(repo, &r)?;
    // The referenced venue (and setter, if any) must exist.
    repo.get_venue(r.venue_id.as_str())?;
    if let Some(ref setter_id) = r.setter_id {
        repo.get_user(setter_id.as_str())?;
    }
    for label in &tags {
        repo.create_tag_if_it_does_not_exist(&Tag {
            label: label.clone(),
        })?;
    }
    let photo = assets::resolve_image(assets, r.photo.as_deref());
    let new_route = Route {
        id: Id::new(),
        venue_id: r.venue_id,
        setter_id: r.setter_id,
        name: r.name,
        grade: r.grade,
        photo,
        set_on: r.set_on,
        takedown_on: r.takedown_on,
        styles,
        tags,
    };
    log::debug!("Creating new route: name = {}", new_route.name);
    repo.create_route(&new_route)?;
    Ok(new_route.id)
}

pub(crate) fn validate_route_params<R>(
    repo: &R,
    r: &NewRoute,
) -> Result<(Vec<String>, Vec<String>)>
where
    R: StyleRepo,
{
    if r.name.trim().is_empty() {
        return Err(Error::Name);
    }
    if r.grade.len() > MAX_GRADE_LEN {
        return Err(Error::Grade);
    }
    let styles = super::prepare_label_list(r.styles.iter().map(String::as_str));
    super::validate_styles(repo, &styles)?;
    let tags = super::prepare_label_list(r.tags.iter().map(String::as_str));
    Ok((styles, tags))
}

#[cfg(test)]
pub mod tests {
    use super::{
        super::{create_new_venue, tests::MockDb, NewVenue},
        *,
    };

    pub struct NoImages;

    impl AssetGateway for NoImages {
        fn has_image(&self, _: &str) -> bool {
            false
        }
    }

    pub fn create_venue(db: &MockDb) -> Id {
        create_new_venue(
            db,
            NewVenue {
                name: "Rock Oasis".into(),
                address: "Dundas and Carlaw".into(),
                opening_hours: None,
                description: None,
            },
        )
        .unwrap()
    }

    pub fn new_route(venue_id: &Id, name: &str) -> NewRoute {
        NewRoute {
            venue_id: venue_id.clone(),
            setter_id: None,
            name: name.into(),
            grade: "5.11a".into(),
            photo: None,
            set_on: None,
            takedown_on: None,
            styles: vec![],
            tags: vec![],
        }
    }

    #[test]
    fn create_route_at_existing_venue() {
        let db = MockDb::default();
        let venue_id = create_venue(&db);
        let id = create_new_route(&db, &NoImages, new_route(&venue_id, "Silence")).unwrap();
        let route = db.get_route(id.as_str()).unwrap();
        assert_eq!(route.name, "Silence");
        assert_eq!(route.venue_id, venue_id);
    }

    #[test]
    fn create_route_at_unknown_venue() {
        let db = MockDb::default();
        let r = new_route(&Id::new(), "Silence");
        assert!(matches!(
            create_new_route(&db, &NoImages, r).err().unwrap(),
            Error::Repo(RepoError::NotFound)
        ));
    }

    #[test]
    fn create_route_with_overlong_grade() {
        let db = MockDb::default();
        let venue_id = create_venue(&db);
        let mut r = new_route(&venue_id, "Silence");
        r.grade = "far too long for a grade".into();
        assert!(matches!(
            create_new_route(&db, &NoImages, r).err().unwrap(),
            Error::Grade
        ));
    }

    #[test]
    fn unresolved_photo_falls_back_to_placeholder() {
        let db = MockDb::default();
        let venue_id = create_venue(&db);
        let mut r = new_route(&venue_id, "Silence");
        r.photo = Some("does-not-exist.png".into());
        let id = create_new_route(&db, &NoImages, r).unwrap();
        let route = db.get_route(id.as_str()).unwrap();
        assert_eq!(route.photo, assets::DEFAULT_ROUTE_IMAGE);
    }

    #[test]
    fn unknown_tags_are_created_on_the_fly() {
        let db = MockDb::default();
        let venue_id = create_venue(&db);
        let mut r = new_route(&venue_id, "Silence");
        r.tags = vec!["Crimpy".into(), "overhang".into()];
        create_new_route(&db, &NoImages, r).unwrap();
        assert_eq!(db.count_tags().unwrap(), 2);
    }
}
