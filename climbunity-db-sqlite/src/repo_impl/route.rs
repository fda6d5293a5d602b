use super::{user::resolve_user_rowid, venue::resolve_venue_rowid, *};

impl RouteRepo for DbReadOnly<'_> {
    fn create_route(&self, _route: &Route) -> Result<()> {
        unreachable!();
    }
    fn update_route(&self, _route: &Route) -> Result<()> {
        unreachable!();
    }

    fn get_route(&self, id: &str) -> Result<Route> {
        get_route(&mut self.conn.borrow_mut(), id)
    }
    fn routes_at_venue(&self, venue_id: &str) -> Result<Vec<Route>> {
        routes_at_venue(&mut self.conn.borrow_mut(), venue_id)
    }
    fn all_routes(&self) -> Result<Vec<Route>> {
        all_routes(&mut self.conn.borrow_mut())
    }

    fn delete_route(&self, _id: &str) -> Result<()> {
        unreachable!();
    }
}

impl RouteRepo for DbReadWrite<'_> {
    fn create_route(&self, route: &Route) -> Result<()> {
        create_route(&mut self.conn.borrow_mut(), route)
    }
    fn update_route(&self, route: &Route) -> Result<()> {
        update_route(&mut self.conn.borrow_mut(), route)
    }

    fn get_route(&self, id: &str) -> Result<Route> {
        get_route(&mut self.conn.borrow_mut(), id)
    }
    fn routes_at_venue(&self, venue_id: &str) -> Result<Vec<Route>> {
        routes_at_venue(&mut self.conn.borrow_mut(), venue_id)
    }
    fn all_routes(&self) -> Result<Vec<Route>> {
        all_routes(&mut self.conn.borrow_mut())
    }

    fn delete_route(&self, id: &str) -> Result<()> {
        delete_route(&mut self.conn.borrow_mut(), id)
    }
}

impl RouteRepo for DbConnection<'_> {
    fn create_route(&self, route: &Route) -> Result<()> {
        create_route(&mut self.conn.borrow_mut(), route)
    }
    fn update_route(&self, route: &Route) -> Result<()> {
        update_route(&mut self.conn.borrow_mut(), route)
    }

    fn get_route(&self, id: &str) -> Result<Route> {
        get_route(&mut self.conn.borrow_mut(), id)
    }
    fn routes_at_venue(&self, venue_id: &str) -> Result<Vec<Route>> {
        routes_at_venue(&mut self.conn.borrow_mut(), venue_id)
    }
    fn all_routes(&self) -> Result<Vec<Route>> {
        all_routes(&mut self.conn.borrow_mut())
    }

    fn delete_route(&self, id: &str) -> Result<()> {
        delete_route(&mut self.conn.borrow_mut(), id)
    }
}

pub(crate) fn resolve_route_rowid(conn: &mut SqliteConnection, id: &str) -> Result<i64> {
    use schema::routes::dsl;
    dsl::routes
        .select(dsl::rowid)
        .filter(dsl::id.eq(id))
        .first::<i64>(conn)
        .map_err(from_diesel_err)
}

fn load_route_styles(conn: &mut SqliteConnection, route_rowid: i64) -> Result<Vec<String>> {
    use schema::route_styles::dsl;
    dsl::route_styles
        .select(dsl::style_label)
        .filter(dsl::route_rowid.eq(route_rowid))
        .order_by(dsl::style_label)
        .load(conn)
        .map_err(from_diesel_err)
}

fn load_route_tags(conn: &mut SqliteConnection, route_rowid: i64) -> Result<Vec<String>> {
    use schema::route_tags::dsl;
    dsl::route_tags
        .select(dsl::tag_label)
        .filter(dsl::route_rowid.eq(route_rowid))
        .order_by(dsl::tag_label)
        .load(conn)
        .map_err(from_diesel_err)
}

fn into_route(conn: &mut SqliteConnection, entity: models::RouteEntity) -> Result<Route> {
    let styles = load_route_styles(conn, entity.rowid)?;
    let tags = load_route_tags(conn, entity.rowid)?;
    let models::RouteEntity {
        id,
        name,
        grade,
        photo,
        set_on,
        takedown_on,
        venue_id,
        setter_id,
        ..
    } = entity;
    let set_on = set_on.as_deref().map(load_date).transpose()?;
    let takedown_on = takedown_on.as_deref().map(load_date).transpose()?;
    Ok(Route {
        id: id.into(),
        venue_id: venue_id.into(),
        setter_id: setter_id.map(Into::into),
        name,
        grade,
        photo,
        set_on,
        takedown_on,
        styles,
        tags,
    })
}

fn into_new_route<'a>(conn: &mut SqliteConnection, r: &'a Route) -> Result<models::NewRoute<'a>> {
    let venue_rowid = resolve_venue_rowid(conn, r.venue_id.as_str())?;
    let setter_rowid = r
        .setter_id
        .as_ref()
        .map(|id| resolve_user_rowid(conn, id.as_str()))
        .transpose()?;
    Ok(models::NewRoute {
        id: r.id.as_str(),
        venue_rowid,
        setter_rowid,
        name: &r.name,
        grade: &r.grade,
        photo: &r.photo,
        set_on: r.set_on.map(format_date),
        takedown_on: r.takedown_on.map(format_date),
    })
}

fn create_route(conn: &mut SqliteConnection, r: &Route) -> Result<()> {
    let new_route = into_new_route(conn, r)?;
    conn.transaction::<_, DieselError, _>(|conn| {
        diesel::insert_into(schema::routes::table)
            .values(&new_route)
            .execute(conn)?;
        let rowid = schema::routes::table
            .select(schema::routes::dsl::rowid)
            .filter(schema::routes::dsl::id.eq(new_route.id))
            .first::<i64>(conn)?;
        let styles: Vec<_> = r
            .styles
            .iter()
            .map(|label| models::NewRouteStyle {
                route_rowid: rowid,
                style_label: label,
            })
            .collect();
        diesel::insert_or_ignore_into(schema::route_styles::table)
            .values(&styles)
            .execute(conn)?;
        let tags: Vec<_> = r
            .tags
            .iter()
            .map(|label| models::NewRouteTag {
                route_rowid: rowid,
                tag_label: label,
            })
            .collect();
        diesel::insert_or_ignore_into(schema::route_tags::table)
            .values(&tags)
            .execute(conn)?;
        Ok(())
    })
    .map_err(from_diesel_err)?;
    Ok(())
}

fn update_route(conn: &mut SqliteConnection, r: &Route) -> Result<()> {
    use schema::{route_styles::dsl as rs_dsl, route_tags::dsl as rt_dsl, routes::dsl};
    let rowid = resolve_route_rowid(conn, r.id.as_str())?;
    let new_route = into_new_route(conn, r)?;
    conn.transaction::<_, DieselError, _>(|conn| {
        diesel::update(dsl::routes.filter(dsl::rowid.eq(rowid)))
            .set(&new_route)
            .execute(conn)?;
        // Replace the stored style set
        let old_styles: Vec<String> = rs_dsl::route_styles
            .select(rs_dsl::style_label)
            .filter(rs_dsl::route_rowid.eq(rowid))
            .load(conn)?;
        let styles_diff = util::labels_diff(&old_styles, &r.styles);
        diesel::delete(
            rs_dsl::route_styles
                .filter(rs_dsl::route_rowid.eq(rowid))
                .filter(rs_dsl::style_label.eq_any(&styles_diff.deleted)),
        )
        .execute(conn)?;
        {
            let new_styles: Vec<_> = styles_diff
                .added
                .iter()
                .map(|label| models::NewRouteStyle {
                    route_rowid: rowid,
                    style_label: label,
                })
                .collect();
            diesel::insert_or_ignore_into(rs_dsl::route_styles)
                .values(&new_styles)
                .execute(conn)?;
        }
        // Replace the stored tag set
        let old_tags: Vec<String> = rt_dsl::route_tags
            .select(rt_dsl::tag_label)
            .filter(rt_dsl::route_rowid.eq(rowid))
            .load(conn)?;
        let tags_diff = util::labels_diff(&old_tags, &r.tags);
        diesel::delete(
            rt_dsl::route_tags
                .filter(rt_dsl::route_rowid.eq(rowid))
                .filter(rt_dsl::tag_label.eq_any(&tags_diff.deleted)),
        )
        .execute(conn)?;
        {
            let new_tags: Vec<_> = tags_diff
                .added
                .iter()
                .map(|label| models::NewRouteTag {
                    route_rowid: rowid,
                    tag_label: label,
                })
                .collect();
            diesel::insert_or_ignore_into(rt_dsl::route_tags)
                .values(&new_tags)
                .execute(conn)?;
        }
        Ok(())
    })
    .map_err(from_diesel_err)?;
    Ok(())
}

fn get_route(conn: &mut SqliteConnection, id: &str) -> Result<Route> {
    use schema::{routes::dsl as r_dsl, users::dsl as u_dsl, venues::dsl as v_dsl};
    let entity = r_dsl::routes
        .inner_join(v_dsl::venues)
        .left_outer_join(u_dsl::users)
        .select((
            r_dsl::rowid,
            r_dsl::id,
            r_dsl::name,
            r_dsl::grade,
            r_dsl::photo,
            r_dsl::set_on,
            r_dsl::takedown_on,
            v_dsl::id,
            u_dsl::id.nullable(),
        ))
        .filter(r_dsl::id.eq(id))
        .first::<models::RouteEntity>(conn)
        .map_err(from_diesel_err)?;
    into_route(conn, entity)
}

fn routes_at_venue(conn: &mut SqliteConnection, venue_id: &str) -> Result<Vec<Route>> {
    use schema::{routes::dsl as r_dsl, users::dsl as u_dsl, venues::dsl as v_dsl};
    let entities = r_dsl::routes
        .inner_join(v_dsl::venues)
        .left_outer_join(u_dsl::users)
        .select((
            r_dsl::rowid,
            r_dsl::id,
            r_dsl::name,
            r_dsl::grade,
            r_dsl::photo,
            r_dsl::set_on,
            r_dsl::takedown_on,
            v_dsl::id,
            u_dsl::id.nullable(),
        ))
        .filter(v_dsl::id.eq(venue_id))
        .order_by(r_dsl::name)
        .load::<models::RouteEntity>(conn)
        .map_err(from_diesel_err)?;
    let mut routes = Vec::with_capacity(entities.len());
    for entity in entities {
        routes.push(into_route(conn, entity)?);
    }
    Ok(routes)
}

fn all_routes(conn: &mut SqliteConnection) -> Result<Vec<Route>> {
    use schema::{routes::dsl as r_dsl, users::dsl as u_dsl, venues::dsl as v_dsl};
    let entities = r_dsl::routes
        .inner_join(v_dsl::venues)
        .left_outer_join(u_dsl::users)
        .select((
            r_dsl::rowid,
            r_dsl::id,
            r_dsl::name,
            r_dsl::grade,
            r_dsl::photo,
            r_dsl::set_on,
            r_dsl::takedown_on,
            v_dsl::id,
            u_dsl::id.nullable(),
        ))
        .order_by(r_dsl::name)
        .load::<models::RouteEntity>(conn)
        .map_err(from_diesel_err)?;
    let mut routes = Vec::with_capacity(entities.len());
    for entity in entities {
        routes.push(into_route(conn, entity)?);
    }
    Ok(routes)
}

fn delete_route(conn: &mut SqliteConnection, id: &str) -> Result<()> {
    use schema::{
        route_styles::dsl as rs_dsl, route_tags::dsl as rt_dsl, routes::dsl,
        user_projects::dsl as up_dsl,
    };
    let rowid = resolve_route_rowid(conn, id)?;
    conn.transaction::<_, DieselError, _>(|conn| {
        diesel::delete(rs_dsl::route_styles.filter(rs_dsl::route_rowid.eq(rowid)))
            .execute(conn)?;
        diesel::delete(rt_dsl::route_tags.filter(rt_dsl::route_rowid.eq(rowid))).execute(conn)?;
        diesel::delete(up_dsl::user_projects.filter(up_dsl::route_rowid.eq(rowid)))
            .execute(conn)?;
        diesel::delete(dsl::routes.filter(dsl::rowid.eq(rowid))).execute(conn)?;
        Ok(())
    })
    .map_err(from_diesel_err)?;
    Ok(())
}
