/// A route feature label, e.g. "crimpy" or "overhang".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tag {
    pub label: String,
}
