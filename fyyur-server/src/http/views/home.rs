//! Landing page

use super::Page;

pub fn home() -> Page {
    Page::new(
        "Home",
        r#"<h1>Fyyur</h1>
<p>Find a venue for your next gig, or the act for your next night.</p>
<ul>
<li><a href="/venues/create">Post a venue</a></li>
<li><a href="/artists/create">Post an artist</a></li>
<li><a href="/shows/create">Post a show</a></li>
</ul>
"#
        .to_owned(),
    )
}
