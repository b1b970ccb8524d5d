//! Venue pages

use std::fmt::Write;

use super::{escape, external_link, image, Page};
use crate::db::repos::{VenueDetail, VenueShow, VenueSummary};
use crate::models::{format_start_time, Area, SearchResults};

/// Venues grouped by city and state.
pub fn list(areas: &[Area<VenueSummary>]) -> Page {
    let mut body = String::from("<h1>Venues</h1>\n");
    if areas.is_empty() {
        body.push_str("<p>No venues listed yet.</p>\n");
    }
    for area in areas {
        let _ = writeln!(
            body,
            "<h2>{}, {}</h2>\n<ul>",
            escape(&area.city),
            escape(&area.state)
        );
        for venue in &area.venues {
            push_summary(&mut body, venue);
        }
        body.push_str("</ul>\n");
    }
    Page::new("Venues", body)
}

/// Venue search results.
pub fn search(results: &SearchResults<VenueSummary>, term: &str) -> Page {
    let mut body = String::new();
    let _ = writeln!(
        body,
        "<h1>Number of search results for \"{}\": {}</h1>\n<ul>",
        escape(term),
        results.count
    );
    for venue in &results.data {
        push_summary(&mut body, venue);
    }
    body.push_str("</ul>\n");
    Page::new("Venue Search", body)
}

/// Venue detail with past and upcoming shows.
pub fn detail(detail: &VenueDetail) -> Page {
    let venue = &detail.venue;
    let mut body = String::new();

    let _ = writeln!(
        body,
        "<h1>{}</h1>\n<p class=\"subtitle\">ID: {}</p>",
        escape(&venue.name),
        venue.id
    );
    let _ = writeln!(
        body,
        "<p class=\"genres\">{}</p>",
        venue
            .genres
            .iter()
            .map(|g| escape(g))
            .collect::<Vec<_>>()
            .join(" &middot; ")
    );
    let _ = writeln!(body, "<p>{}</p>", escape(&venue.address));
    let _ = writeln!(
        body,
        "<p>{}, {}</p>",
        escape(&venue.city),
        escape(&venue.state)
    );
    if let Some(phone) = &venue.phone {
        let _ = writeln!(body, "<p>{}</p>", escape(phone));
    }
    body.push_str(&external_link(venue.website.as_deref(), "Website"));
    body.push_str(&external_link(venue.facebook_link.as_deref(), "Facebook"));

    if venue.seeking_talent {
        let _ = writeln!(
            body,
            "<div class=\"seeking\"><p>Currently seeking talent</p><p>{}</p></div>",
            escape(venue.seeking_description.as_deref().unwrap_or_default())
        );
    } else {
        body.push_str("<p>Not currently seeking talent</p>\n");
    }
    body.push_str(&image(venue.image_link.as_deref(), &venue.name));

    push_shows(&mut body, "Upcoming", &detail.shows.upcoming);
    push_shows(&mut body, "Past", &detail.shows.past);

    let _ = writeln!(
        body,
        "<p><a href=\"/venues/{}/edit\">Edit venue</a></p>",
        venue.id
    );

    Page::new(venue.name.clone(), body)
}

fn push_summary(body: &mut String, venue: &VenueSummary) {
    let _ = writeln!(
        body,
        "<li><a href=\"/venues/{}\">{}</a> <small>{} upcoming shows</small></li>",
        venue.id,
        escape(&venue.name),
        venue.num_upcoming_shows
    );
}

fn push_shows(body: &mut String, heading: &str, shows: &[VenueShow]) {
    let _ = writeln!(body, "<h2>{} {}</h2>\n<ul>", shows.len(), heading);
    for show in shows {
        let _ = writeln!(
            body,
            "<li>{}<a href=\"/artists/{}\">{}</a> <time>{}</time></li>",
            image(show.artist_image_link.as_deref(), &show.artist_name),
            show.artist_id,
            escape(&show.artist_name),
            format_start_time(&show.start_time)
        );
    }
    body.push_str("</ul>\n");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::repos::Venue;
    use crate::models::{group_by_area, partition_shows};
    use chrono::NaiveDate;

    fn summary(id: i32, name: &str, city: &str, state: &str) -> VenueSummary {
        VenueSummary {
            id,
            name: name.into(),
            city: city.into(),
            state: state.into(),
            num_upcoming_shows: 0,
        }
    }

    #[test]
    fn list_renders_each_area_once() {
        let venues = vec![
            summary(1, "The Musical Hop", "San Francisco", "CA"),
            summary(3, "Park Square Live Music & Coffee", "San Francisco", "CA"),
            summary(2, "The Dueling Pianos Bar", "New York", "NY"),
        ];
        let areas = group_by_area(venues, |v| (v.city.as_str(), v.state.as_str()));
        let page = list(&areas);

        assert_eq!(page.body.matches("<h2>").count(), 2);
        assert!(page.body.contains("Park Square Live Music &amp; Coffee"));
        assert!(page.body.contains(r#"<a href="/venues/2">"#));
    }

    #[test]
    fn search_shows_count_and_term() {
        let results = SearchResults::from(vec![summary(1, "The Musical Hop", "San Francisco", "CA")]);
        let page = search(&results, "hop");
        assert!(page.body.contains("Number of search results for \"hop\": 1"));
    }

    #[test]
    fn detail_lists_both_sides() {
        let at = |d| {
            NaiveDate::from_ymd_opt(2030, 1, d)
                .unwrap()
                .and_hms_opt(20, 0, 0)
                .unwrap()
        };
        let show = |d| VenueShow {
            artist_id: 5,
            artist_name: "Matt Quevedo".into(),
            artist_image_link: None,
            start_time: at(d),
        };
        let venue_detail = VenueDetail {
            venue: Venue {
                id: 1,
                name: "The Musical Hop".into(),
                city: "San Francisco".into(),
                state: "CA".into(),
                address: "1015 Folsom Street".into(),
                phone: None,
                website: None,
                facebook_link: None,
                image_link: None,
                genres: vec!["Jazz".into()],
                seeking_talent: false,
                seeking_description: None,
            },
            shows: partition_shows(vec![show(1), show(2), show(20)], at(10), |s| s.start_time),
        };

        let page = detail(&venue_detail);
        assert!(page.body.contains("<h2>1 Upcoming</h2>"));
        assert!(page.body.contains("<h2>2 Past</h2>"));
        assert!(page.body.contains("01/20/2030, 20:00"));
    }
}
