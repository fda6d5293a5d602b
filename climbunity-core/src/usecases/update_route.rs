use super::prelude::*;
use super::NewRoute;
use crate::gateways::assets::{self, AssetGateway};

pub fn update_route<R>(repo: &R, assets: &dyn AssetGateway, id: &str, r: NewRoute) -> Result<()>
where
    R: RouteRepo + VenueRepo + UserRepo + StyleRepo + TagRepo,
{
    let (styles, tags) = super::validate_route_params(repo, &r)?;
    repo.get_venue(r.venue_id.as_str())?;
    if let Some(ref setter_id) = r.setter_id {
        repo.get_user(setter_id.as_str())?;
    }
    for label in &tags {
        repo.create_tag_if_it_does_not_exist(&Tag {
            label: label.clone(),
        })?;
    }
    let mut route = repo.get_route(id)?;
    route.venue_id = r.venue_id;
    route.setter_id = r.setter_id;
    route.name = r.name;
    route.grade = r.grade;
    route.photo = assets::resolve_image(assets, r.photo.as_deref());
    route.set_on = r.set_on;
    route.takedown_on = r.takedown_on;
    // Re-submitting the edit form replaces the association sets
    // instead of appending to them.
    route.styles = styles;
    route.tags = tags;
    repo.update_route(&route)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{
        super::{
            create_new_route,
            create_new_route::tests::{create_venue, new_route, NoImages},
            tests::MockDb,
        },
        *,
    };

    #[test]
    fn edit_replaces_style_and_tag_sets() {
        let db = MockDb::default();
        for label in ["boulder", "lead"] {
            db.create_style_if_it_does_not_exist(&Style {
                label: label.into(),
            })
            .unwrap();
        }
        let venue_id = create_venue(&db);
        let mut r = new_route(&venue_id, "Silence");
        r.styles = vec!["boulder".into()];
        r.tags = vec!["crimpy".into()];
        let id = create_new_route(&db, &NoImages, r).unwrap();

        let mut edit = new_route(&venue_id, "Silence");
        edit.styles = vec!["lead".into()];
        edit.tags = vec!["overhang".into(), "pumpy".into()];
        update_route(&db, &NoImages, id.as_str(), edit).unwrap();

        let stored = db.get_route(id.as_str()).unwrap();
        assert_eq!(stored.styles, vec!["lead".to_string()]);
        assert_eq!(
            stored.tags,
            vec!["overhang".to_string(), "pumpy".to_string()]
        );
    }

    #[test]
    fn edit_unknown_route() {
        let db = MockDb::default();
        let venue_id = create_venue(&db);
        let r = new_route(&venue_id, "Silence");
        assert!(matches!(
            update_route(&db, &NoImages, "no-such-id", r).err().unwrap(),
            Error::Repo(RepoError::NotFound)
        ));
    }
}
