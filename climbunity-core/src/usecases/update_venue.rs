use super::prelude::*;
use super::NewVenue;

pub fn update_venue<R: VenueRepo>(repo: &R, id: &str, v: NewVenue) -> Result<()> {
    if v.name.trim().is_empty() {
        return Err(Error::Name);
    }
    if v.address.trim().is_empty() {
        return Err(Error::Address);
    }
    let mut venue = repo.get_venue(id)?;
    venue.name = v.name;
    venue.address = v.address;
    venue.opening_hours = v.opening_hours.filter(|s| !s.trim().is_empty());
    venue.description = v.description.filter(|s| !s.trim().is_empty());
    repo.update_venue(&venue)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{
        super::{create_new_venue, tests::MockDb},
        *,
    };

    #[test]
    fn update_existing_venue() {
        let db = MockDb::default();
        let id = create_new_venue(
            &db,
            NewVenue {
                name: "Rock Oasis".into(),
                address: "Dundas and Carlaw".into(),
                opening_hours: None,
                description: None,
            },
        )
        .unwrap();
        update_venue(
            &db,
            id.as_str(),
            NewVenue {
                name: "Rock Oasis East".into(),
                address: "Dundas and Carlaw".into(),
                opening_hours: None,
                description: Some("bouldering only".into()),
            },
        )
        .unwrap();
        let venue = db.get_venue(id.as_str()).unwrap();
        assert_eq!(venue.name, "Rock Oasis East");
        assert_eq!(venue.description.as_deref(), Some("bouldering only"));
    }

    #[test]
    fn update_unknown_venue() {
        let db = MockDb::default();
        let venue = NewVenue {
            name: "Rock Oasis".into(),
            address: "Dundas and Carlaw".into(),
            opening_hours: None,
            description: None,
        };
        assert!(matches!(
            update_venue(&db, "no-such-id", venue).err().unwrap(),
            Error::Repo(RepoError::NotFound)
        ));
    }
}
