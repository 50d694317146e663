use axum::response::Html;

/// Escapes text for use in element content and quoted attribute values.
pub fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#x27;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

fn flash_block(flashes: &[String]) -> String {
    if flashes.is_empty() {
        return String::new();
    }
    let items: String = flashes
        .iter()
        .map(|message| format!(r#"<div class="alert">{}</div>"#, escape(message)))
        .collect();
    format!(r#"<div class="flashes">{}</div>"#, items)
}

/// Wraps a page body in the shared chrome: navigation, search boxes and the
/// flash messages produced by this request.
pub fn page(title: &str, flashes: &[String], body: &str) -> Html<String> {
    Html(format!(
        r#"<!doctype html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>{title} | Stagehand</title>
</head>
<body>
<nav>
<a href="/">Stagehand</a>
<a href="/venues">Venues</a>
<a href="/artists">Artists</a>
<a href="/shows">Shows</a>
<form method="post" action="/venues/search"><input name="search_term" placeholder="Find a venue"></form>
<form method="post" action="/artists/search"><input name="search_term" placeholder="Find an artist"></form>
</nav>
{flashes}
<main>
{body}
</main>
</body>
</html>
"#,
        title = escape(title),
        flashes = flash_block(flashes),
        body = body,
    ))
}

pub fn genre_badges(genres: &[String]) -> String {
    genres
        .iter()
        .map(|genre| format!(r#"<span class="genre">{}</span>"#, escape(genre)))
        .collect()
}

/// `<a>` to an optional external link, or nothing.
pub fn external_link(label: &str, href: &Option<String>) -> String {
    match href {
        Some(href) => format!(
            r#"<p><a href="{}" target="_blank">{}</a></p>"#,
            escape(href),
            escape(label)
        ),
        None => String::new(),
    }
}

pub fn image(href: &Option<String>, alt: &str) -> String {
    match href {
        Some(href) => format!(r#"<img src="{}" alt="{}">"#, escape(href), escape(alt)),
        None => String::new(),
    }
}
