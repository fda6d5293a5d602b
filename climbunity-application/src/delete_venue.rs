use super::*;

/// Deletes a venue with all dependent routes, ascents and
/// appointments. Either every row change commits or none does.
pub fn delete_venue(connections: &sqlite::Connections, id: &str) -> Result<()> {
    let mut connection = connections.exclusive()?;
    connection.transaction(|conn| {
        usecases::delete_venue(conn, id).map_err(|err| {
            warn!("Failed to delete venue {id}: {err}");
            err
        })
    })?;
    Ok(())
}
