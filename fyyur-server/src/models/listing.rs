//! Grouping and partitioning for list and detail pages

use std::collections::BTreeMap;

use chrono::NaiveDateTime;

/// Venues sharing a city and state
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Area<T> {
    pub city: String,
    pub state: String,
    pub venues: Vec<T>,
}

/// Group items by `(city, state)`.
///
/// Each area holds exactly the items located there, in input order.
/// Areas are ordered by state, then city.
pub fn group_by_area<T, F>(items: Vec<T>, location: F) -> Vec<Area<T>>
where
    F: Fn(&T) -> (&str, &str),
{
    let mut areas: BTreeMap<(String, String), Vec<T>> = BTreeMap::new();
    for item in items {
        let (city, state) = location(&item);
        let key = (state.to_owned(), city.to_owned());
        areas.entry(key).or_default().push(item);
    }

    areas
        .into_iter()
        .map(|((state, city), venues)| Area {
            city,
            state,
            venues,
        })
        .collect()
}

/// Shows split around a reference time
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShowSplit<T> {
    pub past: Vec<T>,
    pub upcoming: Vec<T>,
}

impl<T> ShowSplit<T> {
    pub fn past_count(&self) -> usize {
        self.past.len()
    }

    pub fn upcoming_count(&self) -> usize {
        self.upcoming.len()
    }
}

/// Split shows into past (`start < now`) and upcoming (`start >= now`).
///
/// Every item lands in exactly one side; relative order is kept.
pub fn partition_shows<T, F>(shows: Vec<T>, now: NaiveDateTime, start_time: F) -> ShowSplit<T>
where
    F: Fn(&T) -> NaiveDateTime,
{
    let (past, upcoming) = shows.into_iter().partition(|s| start_time(s) < now);
    ShowSplit { past, upcoming }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn day(d: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 1, d)
            .unwrap()
            .and_hms_opt(20, 0, 0)
            .unwrap()
    }

    #[test]
    fn groups_hold_only_local_venues() {
        let venues = vec![
            ("The Musical Hop", "San Francisco", "CA"),
            ("The Dueling Pianos Bar", "New York", "NY"),
            ("Park Square Live Music & Coffee", "San Francisco", "CA"),
        ];

        let areas = group_by_area(venues, |v| (v.1, v.2));
        assert_eq!(areas.len(), 2);

        assert_eq!(areas[0].state, "CA");
        assert_eq!(areas[0].city, "San Francisco");
        let names: Vec<_> = areas[0].venues.iter().map(|v| v.0).collect();
        assert_eq!(names, vec!["The Musical Hop", "Park Square Live Music & Coffee"]);

        assert_eq!(areas[1].state, "NY");
        assert_eq!(areas[1].venues.len(), 1);
    }

    #[test]
    fn same_city_different_state_are_distinct() {
        let venues = vec![("a", "Portland", "OR"), ("b", "Portland", "ME")];
        let areas = group_by_area(venues, |v| (v.1, v.2));
        assert_eq!(areas.len(), 2);
        assert_eq!(areas[0].state, "ME");
    }

    #[test]
    fn partition_counts() {
        let shows = vec![day(1), day(5), day(10), day(20)];
        let split = partition_shows(shows, day(10), |t| *t);
        assert_eq!(split.past, vec![day(1), day(5)]);
        assert_eq!(split.upcoming, vec![day(10), day(20)]);
        assert_eq!(split.past_count(), 2);
        assert_eq!(split.upcoming_count(), 2);
    }

    #[test]
    fn partition_empty() {
        let split = partition_shows(Vec::<NaiveDateTime>::new(), day(1), |t| *t);
        assert_eq!(split.past_count() + split.upcoming_count(), 0);
    }
}
