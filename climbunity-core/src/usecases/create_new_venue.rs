use super::prelude::*;

#[derive(Debug, Clone)]
pub struct NewVenue {
    pub name: String,
    pub address: String,
    pub opening_hours: Option<String>,
    pub description: Option<String>,
}

pub fn create_new_venue<R: VenueRepo>(repo: &R, v: NewVenue) -> Result<Id> {
    if v.name.trim().is_empty() {
        return Err(Error::Name);
    }
    if v.address.trim().is_empty() {
        return Err(Error::Address);
    }
    let new_venue = Venue {
        id: Id::new(),
        name: v.name,
        address: v.address,
        opening_hours: v.opening_hours.filter(|s| !s.trim().is_empty()),
        description: v.description.filter(|s| !s.trim().is_empty()),
    };
    log::debug!("Creating new venue: name = {}", new_venue.name);
    repo.create_venue(&new_venue)?;
    Ok(new_venue.id)
}
