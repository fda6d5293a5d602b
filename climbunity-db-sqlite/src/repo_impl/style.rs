use super::*;

impl StyleRepo for DbReadOnly<'_> {
    fn create_style_if_it_does_not_exist(&self, _style: &Style) -> Result<()> {
        unreachable!();
    }
    fn all_styles(&self) -> Result<Vec<Style>> {
        all_styles(&mut self.conn.borrow_mut())
    }
    fn count_styles(&self) -> Result<usize> {
        count_styles(&mut self.conn.borrow_mut())
    }
}

impl StyleRepo for DbReadWrite<'_> {
    fn create_style_if_it_does_not_exist(&self, style: &Style) -> Result<()> {
        create_style_if_it_does_not_exist(&mut self.conn.borrow_mut(), style)
    }
    fn all_styles(&self) -> Result<Vec<Style>> {
        all_styles(&mut self.conn.borrow_mut())
    }
    fn count_styles(&self) -> Result<usize> {
        count_styles(&mut self.conn.borrow_mut())
    }
}

impl StyleRepo for DbConnection<'_> {
    fn create_style_if_it_does_not_exist(&self, style: &Style) -> Result<()> {
        create_style_if_it_does_not_exist(&mut self.conn.borrow_mut(), style)
    }
    fn all_styles(&self) -> Result<Vec<Style>> {
        all_styles(&mut self.conn.borrow_mut())
    }
    fn count_styles(&self) -> Result<usize> {
        count_styles(&mut self.conn.borrow_mut())
    }
}

fn create_style_if_it_does_not_exist(conn: &mut SqliteConnection, s: &Style) -> Result<()> {
    diesel::insert_or_ignore_into(schema::styles::table)
        .values(&models::NewStyle { label: &s.label })
        .execute(conn)
        .map_err(from_diesel_err)?;
    Ok(())
}

fn all_styles(conn: &mut SqliteConnection) -> Result<Vec<Style>> {
    use schema::styles::dsl;
    Ok(dsl::styles
        .select(dsl::label)
        .order_by(dsl::label)
        .load::<String>(conn)
        .map_err(from_diesel_err)?
        .into_iter()
        .map(|label| Style { label })
        .collect())
}

fn count_styles(conn: &mut SqliteConnection) -> Result<usize> {
    use schema::styles::dsl;
    Ok(dsl::styles
        .select(diesel::dsl::count(dsl::label))
        .first::<i64>(conn)
        .map_err(from_diesel_err)? as usize)
}
