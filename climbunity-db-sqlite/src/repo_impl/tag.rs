use super::*;

impl TagRepo for DbReadOnly<'_> {
    fn create_tag_if_it_does_not_exist(&self, _tag: &Tag) -> Result<()> {
        unreachable!();
    }
    fn all_tags(&self) -> Result<Vec<Tag>> {
        all_tags(&mut self.conn.borrow_mut())
    }
    fn count_tags(&self) -> Result<usize> {
        count_tags(&mut self.conn.borrow_mut())
    }
}

impl TagRepo for DbReadWrite<'_> {
    fn create_tag_if_it_does_not_exist(&self, tag: &Tag) -> Result<()> {
        create_tag_if_it_does_not_exist(&mut self.conn.borrow_mut(), tag)
    }
    fn all_tags(&self) -> Result<Vec<Tag>> {
        all_tags(&mut self.conn.borrow_mut())
    }
    fn count_tags(&self) -> Result<usize> {
        count_tags(&mut self.conn.borrow_mut())
    }
}

impl TagRepo for DbConnection<'_> {
    fn create_tag_if_it_does_not_exist(&self, tag: &Tag) -> Result<()> {
        create_tag_if_it_does_not_exist(&mut self.conn.borrow_mut(), tag)
    }
    fn all_tags(&self) -> Result<Vec<Tag>> {
        all_tags(&mut self.conn.borrow_mut())
    }
    fn count_tags(&self) -> Result<usize> {
        count_tags(&mut self.conn.borrow_mut())
    }
}

fn create_tag_if_it_does_not_exist(conn: &mut SqliteConnection, t: &Tag) -> Result<()> {
    diesel::insert_or_ignore_into(schema::tags::table)
        .values(&models::NewTag { label: &t.label })
        .execute(conn)
        .map_err(from_diesel_err)?;
    Ok(())
}

fn all_tags(conn: &mut SqliteConnection) -> Result<Vec<Tag>> {
    use schema::tags::dsl;
    Ok(dsl::tags
        .select(dsl::label)
        .order_by(dsl::label)
        .load::<String>(conn)
        .map_err(from_diesel_err)?
        .into_iter()
        .map(|label| Tag { label })
        .collect())
}

fn count_tags(conn: &mut SqliteConnection) -> Result<usize> {
    use schema::tags::dsl;
    Ok(dsl::tags
        .select(diesel::dsl::count(dsl::label))
        .first::<i64>(conn)
        .map_err(from_diesel_err)? as usize)
}
