use super::prelude::*;

/// Deletes a route and everything that references it.
///
/// Dependent ascents are removed first so that no orphans
/// remain if the surrounding transaction commits.
pub fn delete_route<R>(repo: &R, id: &str) -> Result<()>
where
    R: RouteRepo + AscentRepo,
{
    // Fails early if the route does not exist.
    let route = repo.get_route(id)?;
    let deleted = repo.delete_ascents_of_route(route.id.as_str())?;
    log::debug!("Deleted {deleted} ascents of route {}", route.id);
    repo.delete_route(route.id.as_str())?;
    Ok(())
}
