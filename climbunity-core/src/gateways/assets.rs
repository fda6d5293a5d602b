/// Access to the static image assets shipped with the application.
///
/// Route photos are stored as references into this asset collection,
/// never as arbitrary URLs.
pub trait AssetGateway {
    fn has_image(&self, file_name: &str) -> bool;
}

/// Fallback image for routes whose photo reference does not resolve.
pub const DEFAULT_ROUTE_IMAGE: &str = "no_image.jpeg";

pub fn resolve_image(gw: &dyn AssetGateway, file_name: Option<&str>) -> String {
    match file_name {
        Some(name) if gw.has_image(name) => name.to_string(),
        _ => DEFAULT_ROUTE_IMAGE.to_string(),
    }
}
