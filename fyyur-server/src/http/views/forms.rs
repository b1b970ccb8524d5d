//! Create and edit forms
//!
//! Forms render from raw [`FormFields`] so a rejected submission comes back
//! exactly as typed, and edit pages pre-fill from the stored record.

use std::fmt::Write;

use chrono::Local;

use super::{escape, Page};
use crate::db::repos::{Artist, ArtistSummary, Venue, VenueSummary};
use crate::models::show::FORM_TIME_FORMAT;
use crate::models::us_state::STATE_CODES;
use crate::models::{FormFields, Genre};

/// Which entity a profile form describes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProfileKind {
    Venue,
    Artist,
}

impl ProfileKind {
    fn label(&self) -> &'static str {
        match self {
            Self::Venue => "venue",
            Self::Artist => "artist",
        }
    }
}

/// Venue or artist form.
///
/// `action` is the POST target; `error` is shown above the fields.
pub fn profile_form(
    kind: ProfileKind,
    title: &str,
    action: &str,
    values: &FormFields,
    error: Option<&str>,
) -> Page {
    let mut body = String::new();
    let _ = writeln!(body, "<h1>{}</h1>", escape(title));
    push_error(&mut body, error);
    let _ = writeln!(body, r#"<form method="post" action="{}">"#, escape(action));

    text_input(&mut body, values, "name", "Name", true);
    text_input(&mut body, values, "city", "City", true);
    state_select(&mut body, values);
    if kind == ProfileKind::Venue {
        text_input(&mut body, values, "address", "Address", true);
    }
    text_input(&mut body, values, "phone", "Phone", false);
    genre_select(&mut body, values);
    text_input(&mut body, values, "facebook_link", "Facebook link", false);
    text_input(&mut body, values, "image_link", "Image link", false);
    text_input(&mut body, values, "website", "Website", false);

    let seeking_label = match kind {
        ProfileKind::Venue => "Looking for talent",
        ProfileKind::Artist => "Looking for venues",
    };
    let checked = if values.checkbox("seeking_talent") { " checked" } else { "" };
    let _ = writeln!(
        body,
        r#"<label><input type="checkbox" name="seeking_talent" value="y"{checked}> {seeking_label}</label>"#
    );
    text_input(&mut body, values, "seeking_description", "Seeking description", false);

    let _ = writeln!(
        body,
        r#"<button type="submit">Save {}</button>"#,
        kind.label()
    );
    body.push_str("</form>\n");

    Page::new(title, body)
}

/// Show scheduling form with venue and artist pickers.
pub fn show_form(
    values: &FormFields,
    error: Option<&str>,
    artists: &[ArtistSummary],
    venues: &[VenueSummary],
) -> Page {
    let mut body = String::from("<h1>List a new show</h1>\n");
    push_error(&mut body, error);
    body.push_str(r#"<form method="post" action="/shows/create">"#);
    body.push('\n');

    let artist_options: Vec<(String, String)> = artists
        .iter()
        .map(|a| (a.id.to_string(), a.name.clone()))
        .collect();
    id_select(&mut body, values, "artist_id", "Artist", &artist_options);

    let venue_options: Vec<(String, String)> = venues
        .iter()
        .map(|v| (v.id.to_string(), v.name.clone()))
        .collect();
    id_select(&mut body, values, "venue_id", "Venue", &venue_options);

    let default_time = Local::now().naive_local().format(FORM_TIME_FORMAT).to_string();
    let start_time = values.get("start_time").unwrap_or(default_time.as_str());
    let _ = writeln!(
        body,
        r#"<label>Start time <input name="start_time" value="{}" required></label>"#,
        escape(start_time)
    );

    body.push_str("<button type=\"submit\">Create show</button>\n</form>\n");
    Page::new("New Show", body)
}

/// Current venue values for the edit form.
pub fn venue_fields(venue: &Venue) -> FormFields {
    let mut pairs = profile_pairs(
        &venue.name,
        &venue.city,
        &venue.state,
        [
            ("phone", &venue.phone),
            ("website", &venue.website),
            ("facebook_link", &venue.facebook_link),
            ("image_link", &venue.image_link),
            ("seeking_description", &venue.seeking_description),
        ],
        &venue.genres,
        venue.seeking_talent,
    );
    pairs.push(("address".into(), venue.address.clone()));
    FormFields::new(pairs)
}

/// Current artist values for the edit form.
pub fn artist_fields(artist: &Artist) -> FormFields {
    FormFields::new(profile_pairs(
        &artist.name,
        &artist.city,
        &artist.state,
        [
            ("phone", &artist.phone),
            ("website", &artist.website),
            ("facebook_link", &artist.facebook_link),
            ("image_link", &artist.image_link),
            ("seeking_description", &artist.seeking_description),
        ],
        &artist.genres,
        artist.seeking_talent,
    ))
}

fn profile_pairs(
    name: &str,
    city: &str,
    state: &str,
    optional: [(&str, &Option<String>); 5],
    genres: &[String],
    seeking_talent: bool,
) -> Vec<(String, String)> {
    let mut pairs = vec![
        ("name".to_owned(), name.to_owned()),
        ("city".to_owned(), city.to_owned()),
        ("state".to_owned(), state.to_owned()),
    ];
    for (key, value) in optional {
        if let Some(value) = value {
            pairs.push((key.to_owned(), value.clone()));
        }
    }
    for genre in genres {
        pairs.push(("genres".to_owned(), genre.clone()));
    }
    if seeking_talent {
        pairs.push(("seeking_talent".to_owned(), "y".to_owned()));
    }
    pairs
}

fn push_error(body: &mut String, error: Option<&str>) {
    if let Some(error) = error {
        let _ = writeln!(body, r#"<p class="error">{}</p>"#, escape(error));
    }
}

fn text_input(body: &mut String, values: &FormFields, name: &str, label: &str, required: bool) {
    let value = values.get(name).unwrap_or_default();
    let required = if required { " required" } else { "" };
    let _ = writeln!(
        body,
        r#"<label>{label} <input name="{name}" value="{}"{required}></label>"#,
        escape(value)
    );
}

fn state_select(body: &mut String, values: &FormFields) {
    let current = values.get("state").unwrap_or_default().to_ascii_uppercase();
    body.push_str("<label>State <select name=\"state\" required>\n");
    for code in STATE_CODES {
        let selected = if code == current { " selected" } else { "" };
        let _ = writeln!(body, r#"<option value="{code}"{selected}>{code}</option>"#);
    }
    body.push_str("</select></label>\n");
}

fn genre_select(body: &mut String, values: &FormFields) {
    let chosen = values.all("genres");
    body.push_str("<label>Genres <select name=\"genres\" multiple required>\n");
    for genre in Genre::ALL {
        let label = genre.as_str();
        let selected = if chosen.contains(&label) { " selected" } else { "" };
        let _ = writeln!(
            body,
            r#"<option value="{0}"{selected}>{0}</option>"#,
            escape(label)
        );
    }
    body.push_str("</select></label>\n");
}

fn id_select(
    body: &mut String,
    values: &FormFields,
    name: &str,
    label: &str,
    options: &[(String, String)],
) {
    let current = values.get(name).unwrap_or_default();
    let _ = writeln!(body, r#"<label>{label} <select name="{name}" required>"#);
    for (id, text) in options {
        let selected = if id == current { " selected" } else { "" };
        let _ = writeln!(
            body,
            r#"<option value="{id}"{selected}>{} (#{id})</option>"#,
            escape(text)
        );
    }
    body.push_str("</select></label>\n");
}
