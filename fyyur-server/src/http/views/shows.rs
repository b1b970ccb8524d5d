//! Shows page

use std::fmt::Write;

use super::{escape, image, Page};
use crate::db::repos::ShowListing;
use crate::models::format_start_time;

/// Every show with its venue and artist.
pub fn list(shows: &[ShowListing]) -> Page {
    let mut body = String::from("<h1>Shows</h1>\n<ul>\n");
    for show in shows {
        let _ = writeln!(
            body,
            "<li>{}<time>{}</time> <a href=\"/artists/{}\">{}</a> playing at <a href=\"/venues/{}\">{}</a></li>",
            image(show.artist_image_link.as_deref(), &show.artist_name),
            format_start_time(&show.start_time),
            show.artist_id,
            escape(&show.artist_name),
            show.venue_id,
            escape(&show.venue_name)
        );
    }
    body.push_str("</ul>\n");
    Page::new("Shows", body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn renders_both_links() {
        let shows = vec![ShowListing {
            venue_id: 1,
            venue_name: "The Musical Hop".into(),
            artist_id: 4,
            artist_name: "Guns N Petals".into(),
            artist_image_link: None,
            start_time: NaiveDate::from_ymd_opt(2019, 5, 21)
                .unwrap()
                .and_hms_opt(21, 30, 0)
                .unwrap(),
        }];
        let page = list(&shows);
        assert!(page.body.contains(r#"<a href="/artists/4">Guns N Petals</a>"#));
        assert!(page.body.contains(r#"<a href="/venues/1">The Musical Hop</a>"#));
        assert!(page.body.contains("05/21/2019, 21:30"));
    }
}
