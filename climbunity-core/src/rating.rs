use crate::entities::*;

pub trait Rated {
    fn avg_rating(&self, ascents: &[Ascent]) -> AvgRatingValue;
}

impl Rated for Route {
    fn avg_rating(&self, ascents: &[Ascent]) -> AvgRatingValue {
        debug_assert!(ascents.iter().all(|a| a.route_id == self.id));
        avg_rating(ascents)
    }
}

fn avg_rating(ascents: &[Ascent]) -> AvgRatingValue {
    if ascents.is_empty() {
        return Default::default();
    }
    let sum: f64 = ascents.iter().map(|a| f64::from(a.rating)).sum();
    AvgRatingValue::from(sum / ascents.len() as f64)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ascent(route_id: &Id, rating: i8) -> Ascent {
        Ascent {
            id: Id::new(),
            route_id: route_id.clone(),
            user_id: Id::new(),
            sent_on: time::macros::date!(2022 - 02 - 02),
            send_type: SendType::Send,
            rating: RatingValue::from(rating),
            comment: None,
            created_at: Timestamp::now(),
        }
    }

    #[test]
    fn avg_rating_of_no_ascents_is_zero() {
        let route_id = Id::new();
        let route = Route {
            id: route_id,
            venue_id: Id::new(),
            setter_id: None,
            name: "Silence".into(),
            grade: "9c".into(),
            photo: "no_image.jpeg".into(),
            set_on: None,
            takedown_on: None,
            styles: vec![],
            tags: vec![],
        };
        assert_eq!(route.avg_rating(&[]), AvgRatingValue::from(0.0));
    }

    #[test]
    fn avg_rating_of_ascents() {
        let route_id = Id::new();
        let route = Route {
            id: route_id.clone(),
            venue_id: Id::new(),
            setter_id: None,
            name: "Silence".into(),
            grade: "9c".into(),
            photo: "no_image.jpeg".into(),
            set_on: None,
            takedown_on: None,
            styles: vec![],
            tags: vec![],
        };
        let ascents = vec![
            ascent(&route_id, 5),
            ascent(&route_id, 4),
            ascent(&route_id, 3),
        ];
        assert_eq!(route.avg_rating(&ascents), AvgRatingValue::from(4.0));
    }
}
