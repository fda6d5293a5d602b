use climbunity_core::gateways::assets::AssetGateway;

use super::*;
use usecases::NewRoute;

/// Creates a route together with its style and tag associations
/// within a single transaction.
pub fn create_route(
    connections: &sqlite::Connections,
    assets: &dyn AssetGateway,
    new_route: NewRoute,
) -> Result<Id> {
    let mut connection = connections.exclusive()?;
    let id = connection.transaction(|conn| {
        usecases::create_new_route(conn, assets, new_route).map_err(|err| {
            warn!("Failed to store newly created route: {err}");
            err
        })
    })?;
    Ok(id)
}
