//! Page template
//!
//! The page is head + one `bookbox` per book + footer, concatenated.

use crate::config::PageSettings;
use crate::error::{AppResult, RenderError};
use crate::models::Book;
use crate::services::review::{escape_html, review_to_html};

/// Render the whole page
///
/// # Arguments
/// - `books`: already sorted, rendered in the given order
/// - `settings`: page chrome
///
/// # Returns
/// The complete HTML document
pub fn render_page(books: &[Book], settings: &PageSettings) -> AppResult<String> {
    validate_settings(settings)?;

    let mut html = render_head(settings);
    for book in books {
        html.push_str(&render_book(book));
    }
    html.push_str(&render_footer(settings));

    Ok(html)
}

/// Settings the page cannot do without
pub fn validate_settings(settings: &PageSettings) -> AppResult<()> {
    let required = [
        ("title", &settings.title),
        ("heading", &settings.heading),
        ("library_url", &settings.library_url),
    ];

    for (field, value) in required {
        if value.trim().is_empty() {
            return Err(RenderError::EmptySetting { field }.into());
        }
    }

    Ok(())
}

/// Document head, navigation and the opening of the main column
pub fn render_head(settings: &PageSettings) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{title}</title>
    <link rel="icon" type="image/x-icon" href="{favicon}">
    <link rel="stylesheet" href="{stylesheet}">
</head>
<body>
    <div class="topnav">
        <a href="{home}">Home</a>
        <a href="{blog}">Blog</a>
        <a class="active" href="{books}">Books</a>
    </div>
    <header>
        <h1>{heading}</h1>
    </header>
    <div class="content">
        <div class="sidebar"></div>
        <div class="main">
"#,
        title = escape_html(&settings.title),
        favicon = escape_html(&settings.favicon_href),
        stylesheet = escape_html(&settings.stylesheet_href),
        home = escape_html(&settings.home_href),
        blog = escape_html(&settings.blog_href),
        books = escape_html(&settings.books_href),
        heading = escape_html(&settings.heading),
    )
}

/// One `bookbox` fragment
pub fn render_book(book: &Book) -> String {
    format!(
        r#"
<div class="bookbox">
    <strong>{}</strong> by {}<br/>
    My rating: {}<br /><br />
    {}
</div>
"#,
        escape_html(&book.title),
        escape_html(&book.author),
        book.stars,
        review_to_html(&book.review_text),
    )
}

/// Library link and closing tags
pub fn render_footer(settings: &PageSettings) -> String {
    format!(
        r#"
<a href="{url}">{text}</a>
        </div>
        <div class="sidebar"></div>
    </div>
</body>
</html>
"#,
        url = escape_html(&settings.library_url),
        text = escape_html(&settings.library_link_text),
    )
}
