/// A climbing discipline, e.g. bouldering or lead climbing.
///
/// Styles are a label-keyed reference table that participates in
/// two independent associations: the styles a user practices and
/// the styles a route can be climbed in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Style {
    pub label: String,
}
