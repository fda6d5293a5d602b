use super::*;

/// Deletes a route and its dependent ascents all-or-nothing.
pub fn delete_route(connections: &sqlite::Connections, id: &str) -> Result<()> {
    let mut connection = connections.exclusive()?;
    connection.transaction(|conn| {
        usecases::delete_route(conn, id).map_err(|err| {
            warn!("Failed to delete route {id}: {err}");
            err
        })
    })?;
    Ok(())
}
