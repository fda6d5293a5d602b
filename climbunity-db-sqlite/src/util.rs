#[derive(Debug, Default, PartialEq, Eq)]
pub struct LabelsDiff<'a> {
    pub added: Vec<&'a str>,
    pub deleted: Vec<&'a str>,
}

/// Difference between a stored and a submitted set of association
/// labels. Used to replace the stored set with a minimal number of
/// row changes.
pub fn labels_diff<'a>(old: &'a [String], new: &'a [String]) -> LabelsDiff<'a> {
    let added = new
        .iter()
        .filter(|n| !old.iter().any(|o| o == *n))
        .map(String::as_str)
        .collect();
    let deleted = old
        .iter()
        .filter(|o| !new.iter().any(|n| n == *o))
        .map(String::as_str)
        .collect();
    LabelsDiff { added, deleted }
}
