use std::{cell::RefCell, result};

use super::prelude::*;

type RepoResult<T> = result::Result<T, RepoError>;

trait IdRef {
    fn id(&self) -> &str;
}

impl IdRef for User {
    fn id(&self) -> &str {
        self.id.as_str()
    }
}

impl IdRef for Venue {
    fn id(&self) -> &str {
        self.id.as_str()
    }
}

impl IdRef for Route {
    fn id(&self) -> &str {
        self.id.as_str()
    }
}

impl IdRef for Ascent {
    fn id(&self) -> &str {
        self.id.as_str()
    }
}

impl IdRef for Appointment {
    fn id(&self) -> &str {
        self.id.as_str()
    }
}

fn get<T: Clone + IdRef>(objects: &[T], id: &str) -> RepoResult<T> {
    match objects.iter().find(|x| x.id() == id) {
        Some(x) => Ok(x.clone()),
        None => Err(RepoError::NotFound),
    }
}

fn create<T: Clone + IdRef>(objects: &mut Vec<T>, e: T) -> RepoResult<()> {
    if objects.iter().any(|x| x.id() == e.id()) {
        return Err(RepoError::AlreadyExists);
    }
    objects.push(e);
    Ok(())
}

fn update<T: Clone + IdRef>(objects: &mut Vec<T>, e: &T) -> RepoResult<()> {
    if let Some(pos) = objects.iter().position(|x| x.id() == e.id()) {
        objects[pos] = e.clone();
    } else {
        return Err(RepoError::NotFound);
    }
    Ok(())
}

fn delete<T: Clone + IdRef>(objects: &mut Vec<T>, id: &str) -> RepoResult<()> {
    if let Some(pos) = objects.iter().position(|x| x.id() == id) {
        objects.remove(pos);
    } else {
        return Err(RepoError::NotFound);
    }
    Ok(())
}

#[derive(Default)]
pub struct MockDb {
    pub users: RefCell<Vec<User>>,
    pub venues: RefCell<Vec<Venue>>,
    pub routes: RefCell<Vec<Route>>,
    pub ascents: RefCell<Vec<Ascent>>,
    pub appointments: RefCell<Vec<Appointment>>,
    // (user id, route id)
    pub projects: RefCell<Vec<(String, String)>>,
    pub styles: RefCell<Vec<Style>>,
    pub tags: RefCell<Vec<Tag>>,
}

impl UserRepo for MockDb {
    fn create_user(&self, user: &User) -> RepoResult<()> {
        create(&mut self.users.borrow_mut(), user.clone())
    }
    fn update_user(&self, user: &User) -> RepoResult<()> {
        update(&mut self.users.borrow_mut(), user)
    }

    fn get_user(&self, id: &str) -> RepoResult<User> {
        get(&self.users.borrow(), id)
    }
    fn try_get_user_by_username(&self, username: &str) -> RepoResult<Option<User>> {
        Ok(self
            .users
            .borrow()
            .iter()
            .find(|u| u.username == username)
            .cloned())
    }
    fn try_get_user_by_email(&self, email: &EmailAddress) -> RepoResult<Option<User>> {
        Ok(self
            .users
            .borrow()
            .iter()
            .find(|u| &u.email == email)
            .cloned())
    }

    fn all_users(&self) -> RepoResult<Vec<User>> {
        Ok(self.users.borrow().clone())
    }
    fn count_users(&self) -> RepoResult<usize> {
        Ok(self.users.borrow().len())
    }
}

impl VenueRepo for MockDb {
    fn create_venue(&self, venue: &Venue) -> RepoResult<()> {
        create(&mut self.venues.borrow_mut(), venue.clone())
    }
    fn update_venue(&self, venue: &Venue) -> RepoResult<()> {
        update(&mut self.venues.borrow_mut(), venue)
    }

    fn get_venue(&self, id: &str) -> RepoResult<Venue> {
        get(&self.venues.borrow(), id)
    }
    fn all_venues(&self) -> RepoResult<Vec<Venue>> {
        Ok(self.venues.borrow().clone())
    }
    fn count_venues(&self) -> RepoResult<usize> {
        Ok(self.venues.borrow().len())
    }

    fn delete_venue(&self, id: &str) -> RepoResult<()> {
        delete(&mut self.venues.borrow_mut(), id)
    }
}

impl RouteRepo for MockDb {
    fn create_route(&self, route: &Route) -> RepoResult<()> {
        create(&mut self.routes.borrow_mut(), route.clone())
    }
    fn update_route(&self, route: &Route) -> RepoResult<()> {
        update(&mut self.routes.borrow_mut(), route)
    }

    fn get_route(&self, id: &str) -> RepoResult<Route> {
        get(&self.routes.borrow(), id)
    }
    fn routes_at_venue(&self, venue_id: &str) -> RepoResult<Vec<Route>> {
        Ok(self
            .routes
            .borrow()
            .iter()
            .filter(|r| r.venue_id.as_str() == venue_id)
            .cloned()
            .collect())
    }
    fn all_routes(&self) -> RepoResult<Vec<Route>> {
        Ok(self.routes.borrow().clone())
    }

    fn delete_route(&self, id: &str) -> RepoResult<()> {
        delete(&mut self.routes.borrow_mut(), id)?;
        self.projects.borrow_mut().retain(|(_, r)| r != id);
        Ok(())
    }
}

impl AscentRepo for MockDb {
    fn create_ascent(&self, ascent: &Ascent) -> RepoResult<()> {
        create(&mut self.ascents.borrow_mut(), ascent.clone())
    }

    fn get_ascent(&self, id: &str) -> RepoResult<Ascent> {
        get(&self.ascents.borrow(), id)
    }
    fn ascents_of_route(&self, route_id: &str) -> RepoResult<Vec<Ascent>> {
        Ok(self
            .ascents
            .borrow()
            .iter()
            .filter(|a| a.route_id.as_str() == route_id)
            .cloned()
            .collect())
    }
    fn ascents_of_user(&self, user_id: &str) -> RepoResult<Vec<Ascent>> {
        Ok(self
            .ascents
            .borrow()
            .iter()
            .filter(|a| a.user_id.as_str() == user_id)
            .cloned()
            .collect())
    }

    fn delete_ascent(&self, id: &str) -> RepoResult<()> {
        delete(&mut self.ascents.borrow_mut(), id)
    }
    fn delete_ascents_of_route(&self, route_id: &str) -> RepoResult<usize> {
        let mut ascents = self.ascents.borrow_mut();
        let count = ascents.len();
        ascents.retain(|a| a.route_id.as_str() != route_id);
        Ok(count - ascents.len())
    }
}

impl AppointmentRepo for MockDb {
    fn create_appointment(&self, appointment: &Appointment) -> RepoResult<()> {
        create(&mut self.appointments.borrow_mut(), appointment.clone())
    }

    fn get_appointment(&self, id: &str) -> RepoResult<Appointment> {
        get(&self.appointments.borrow(), id)
    }
    fn appointments_at_venue(&self, venue_id: &str) -> RepoResult<Vec<Appointment>> {
        Ok(self
            .appointments
            .borrow()
            .iter()
            .filter(|a| a.venue_id.as_str() == venue_id)
            .cloned()
            .collect())
    }
    fn appointments_of_user(&self, user_id: &str) -> RepoResult<Vec<Appointment>> {
        Ok(self
            .appointments
            .borrow()
            .iter()
            .filter(|a| a.attendants.iter().any(|id| id.as_str() == user_id))
            .cloned()
            .collect())
    }

    fn add_appointment_attendant(&self, id: &str, user_id: &str) -> RepoResult<()> {
        let mut appointments = self.appointments.borrow_mut();
        let appointment = appointments
            .iter_mut()
            .find(|a| a.id.as_str() == id)
            .ok_or(RepoError::NotFound)?;
        if !appointment.attendants.iter().any(|a| a.as_str() == user_id) {
            appointment.attendants.push(user_id.into());
        }
        Ok(())
    }

    fn delete_appointment(&self, id: &str) -> RepoResult<()> {
        delete(&mut self.appointments.borrow_mut(), id)
    }
    fn delete_appointments_at_venue(&self, venue_id: &str) -> RepoResult<usize> {
        let mut appointments = self.appointments.borrow_mut();
        let count = appointments.len();
        appointments.retain(|a| a.venue_id.as_str() != venue_id);
        Ok(count - appointments.len())
    }
}

impl ProjectRepo for MockDb {
    fn add_project(&self, user_id: &str, route_id: &str) -> RepoResult<()> {
        let mut projects = self.projects.borrow_mut();
        if !projects
            .iter()
            .any(|(u, r)| u == user_id && r == route_id)
        {
            projects.push((user_id.to_string(), route_id.to_string()));
        }
        Ok(())
    }
    fn remove_project(&self, user_id: &str, route_id: &str) -> RepoResult<usize> {
        let mut projects = self.projects.borrow_mut();
        let count = projects.len();
        projects.retain(|(u, r)| !(u == user_id && r == route_id));
        Ok(count - projects.len())
    }

    fn project_route_ids_of_user(&self, user_id: &str) -> RepoResult<Vec<Id>> {
        Ok(self
            .projects
            .borrow()
            .iter()
            .filter(|(u, _)| u == user_id)
            .map(|(_, r)| Id::from(r.as_str()))
            .collect())
    }
    fn projecting_user_ids_of_route(&self, route_id: &str) -> RepoResult<Vec<Id>> {
        Ok(self
            .projects
            .borrow()
            .iter()
            .filter(|(_, r)| r == route_id)
            .map(|(u, _)| Id::from(u.as_str()))
            .collect())
    }
}

impl StyleRepo for MockDb {
    fn create_style_if_it_does_not_exist(&self, style: &Style) -> RepoResult<()> {
        let mut styles = self.styles.borrow_mut();
        if !styles.iter().any(|s| s.label == style.label) {
            styles.push(style.clone());
        }
        Ok(())
    }
    fn all_styles(&self) -> RepoResult<Vec<Style>> {
        Ok(self.styles.borrow().clone())
    }
    fn count_styles(&self) -> RepoResult<usize> {
        Ok(self.styles.borrow().len())
    }
}

impl TagRepo for MockDb {
    fn create_tag_if_it_does_not_exist(&self, tag: &Tag) -> RepoResult<()> {
        let mut tags = self.tags.borrow_mut();
        if !tags.iter().any(|t| t.label == tag.label) {
            tags.push(tag.clone());
        }
        Ok(())
    }
    fn all_tags(&self) -> RepoResult<Vec<Tag>> {
        Ok(self.tags.borrow().clone())
    }
    fn count_tags(&self) -> RepoResult<usize> {
        Ok(self.tags.borrow().len())
    }
}
