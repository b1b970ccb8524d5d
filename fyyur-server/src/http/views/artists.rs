//! Artist pages

use std::fmt::Write;

use super::{escape, external_link, image, Page};
use crate::db::repos::{ArtistDetail, ArtistShow, ArtistSummary};
use crate::models::{format_start_time, SearchResults};

/// All artists, already ordered by name.
pub fn list(artists: &[ArtistSummary]) -> Page {
    let mut body = String::from("<h1>Artists</h1>\n<ul>\n");
    for artist in artists {
        push_summary(&mut body, artist);
    }
    body.push_str("</ul>\n");
    Page::new("Artists", body)
}

/// Artist search results.
pub fn search(results: &SearchResults<ArtistSummary>, term: &str) -> Page {
    let mut body = String::new();
    let _ = writeln!(
        body,
        "<h1>Number of search results for \"{}\": {}</h1>\n<ul>",
        escape(term),
        results.count
    );
    for artist in &results.data {
        push_summary(&mut body, artist);
    }
    body.push_str("</ul>\n");
    Page::new("Artist Search", body)
}

/// Artist detail with past and upcoming shows.
pub fn detail(detail: &ArtistDetail) -> Page {
    let artist = &detail.artist;
    let mut body = String::new();

    let _ = writeln!(
        body,
        "<h1>{}</h1>\n<p class=\"subtitle\">ID: {}</p>",
        escape(&artist.name),
        artist.id
    );
    let genres: Vec<String> = artist.genres.iter().map(|g| escape(g)).collect();
    let _ = writeln!(body, "<p class=\"genres\">{}</p>", genres.join(" &middot; "));
    let _ = writeln!(
        body,
        "<p>{}, {}</p>",
        escape(&artist.city),
        escape(&artist.state)
    );
    if let Some(phone) = &artist.phone {
        let _ = writeln!(body, "<p>{}</p>", escape(phone));
    }
    body.push_str(&external_link(artist.website.as_deref(), "Website"));
    body.push_str(&external_link(artist.facebook_link.as_deref(), "Facebook"));

    if artist.seeking_talent {
        let _ = writeln!(
            body,
            "<div class=\"seeking\"><p>Currently seeking performance venues</p><p>{}</p></div>",
            escape(artist.seeking_description.as_deref().unwrap_or_default())
        );
    } else {
        body.push_str("<p>Not currently seeking performance venues</p>\n");
    }
    body.push_str(&image(artist.image_link.as_deref(), &artist.name));

    push_shows(&mut body, "Upcoming", &detail.shows.upcoming);
    push_shows(&mut body, "Past", &detail.shows.past);

    let _ = writeln!(
        body,
        "<p><a href=\"/artists/{}/edit\">Edit artist</a></p>",
        artist.id
    );

    Page::new(artist.name.clone(), body)
}

fn push_summary(body: &mut String, artist: &ArtistSummary) {
    let _ = writeln!(
        body,
        "<li><a href=\"/artists/{}\">{}</a> <small>{} upcoming shows</small></li>",
        artist.id,
        escape(&artist.name),
        artist.num_upcoming_shows
    );
}

fn push_shows(body: &mut String, heading: &str, shows: &[ArtistShow]) {
    let _ = writeln!(body, "<h2>{} {}</h2>\n<ul>", shows.len(), heading);
    for show in shows {
        let _ = writeln!(
            body,
            "<li>{}<a href=\"/venues/{}\">{}</a> <time>{}</time></li>",
            image(show.venue_image_link.as_deref(), &show.venue_name),
            show.venue_id,
            escape(&show.venue_name),
            format_start_time(&show.start_time)
        );
    }
    body.push_str("</ul>\n");
}
