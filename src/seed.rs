use anyhow::Result;

use climbunity_core::{
    entities::{Style, Tag},
    repositories::{StyleRepo, TagRepo},
};

const DEFAULT_STYLES: &[&str] = &["boulder", "toprope", "lead", "trad", "speed", "ice"];

const DEFAULT_TAGS: &[&str] = &[
    "crimpy",
    "slab",
    "overhang",
    "dyno",
    "jugs",
    "pockets",
    "technical",
    "pumpy",
];

/// Inserts the default taxonomies. Labels that already exist are
/// left untouched, so re-seeding is harmless.
pub fn seed_taxonomies(connections: &climbunity_db_sqlite::Connections) -> Result<()> {
    let db = connections.exclusive()?;
    for label in DEFAULT_STYLES {
        db.create_style_if_it_does_not_exist(&Style {
            label: (*label).to_string(),
        })?;
    }
    for label in DEFAULT_TAGS {
        db.create_tag_if_it_does_not_exist(&Tag {
            label: (*label).to_string(),
        })?;
    }
    log::info!(
        "Seeded {} styles and {} tags",
        DEFAULT_STYLES.len(),
        DEFAULT_TAGS.len()
    );
    Ok(())
}
