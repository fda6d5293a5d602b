#[macro_use]
extern crate log;

use climbunity_db_sqlite::Connections;

mod web;

pub async fn run(connections: Connections, version: &'static str) {
    web::run(connections, version).await;
}
