use super::prelude::*;

/// Adds a route to the user's project (wishlist) set.
/// Re-adding an existing project is a no-op.
pub fn add_project<R>(repo: &R, user_id: &Id, route_id: &str) -> Result<()>
where
    R: ProjectRepo + RouteRepo,
{
    let route = repo.get_route(route_id)?;
    repo.add_project(user_id.as_str(), route.id.as_str())?;
    Ok(())
}

/// Removes a route from the user's project set.
/// Removing a route that is not a member is a no-op, not an error.
pub fn remove_project<R>(repo: &R, user_id: &Id, route_id: &str) -> Result<()>
where
    R: ProjectRepo,
{
    let removed = repo.remove_project(user_id.as_str(), route_id)?;
    if removed == 0 {
        log::debug!("Route {route_id} was not on the project list of user {user_id}");
    }
    Ok(())
}
