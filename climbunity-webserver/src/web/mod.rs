use rocket::{config::Config as RocketCfg, Rocket, Route};

mod error;
mod frontend;
mod guards;
mod sqlite;


pub(crate) use self::error::{Error, Result};

pub(crate) struct InstanceOptions {
    mounts: Vec<(&'static str, Vec<Route>)>,
    rocket_cfg: Option<RocketCfg>,
    version: &'static str,
}

pub(crate) fn rocket_instance(
    options: InstanceOptions,
    db: sqlite::Connections,
) -> Rocket<rocket::Build> {
    let InstanceOptions {
        mounts,
        rocket_cfg,
        version,
    } = options;

    info!("Initialization finished");

    let r = match rocket_cfg {
        Some(cfg) => rocket::custom(cfg),
        None => rocket::build(),
    };

    let version = guards::Version(version);

    let mut instance = r.manage(db).manage(version);

    for (m, r) in mounts {
        instance = instance.mount(m, r);
    }
    instance
}

fn mounts() -> Vec<(&'static str, Vec<Route>)> {
    vec![("/", frontend::routes())]
}

pub async fn run(db: climbunity_db_sqlite::Connections, version: &'static str) {
    let options = InstanceOptions {
        mounts: mounts(),
        rocket_cfg: None,
        version,
    };
    let instance = rocket_instance(options, db.into());
    if let Err(err) = instance.launch().await {
        log::error!("Unable to run web server: {err}");
    }
}
