use climbunity_core::gateways::assets::AssetGateway;

use super::*;
use usecases::NewRoute;

pub fn update_route(
    connections: &sqlite::Connections,
    assets: &dyn AssetGateway,
    id: &str,
    update: NewRoute,
) -> Result<()> {
    let mut connection = connections.exclusive()?;
    connection.transaction(|conn| {
        usecases::update_route(conn, assets, id, update).map_err(|err| {
            warn!("Failed to update route {id}: {err}");
            err
        })
    })?;
    Ok(())
}
