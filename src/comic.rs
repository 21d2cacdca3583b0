//! Comic record and its HTML rendering

use serde::{Deserialize, Serialize};

/// Document-type marker written before the rendered fragments
pub const DOCTYPE: &str = "<!doctype html>";

/// A single fetched comic
///
/// Field names follow the xkcd `info.0.json` format.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comic {
    #[serde(rename = "safe_title")]
    pub title: String,
    #[serde(rename = "img")]
    pub image: String,
}

impl Comic {
    pub fn new(title: impl Into<String>, image: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            image: image.into(),
        }
    }

    /// Render the comic as a self-contained HTML fragment
    pub fn render(&self) -> String {
        format!(
            "<div>\n<h3>{}</h3>\n<img src=\"{}\">\n</div>\n",
            self.title, self.image
        )
    }
}

/// Render a full page: doctype followed by each comic in order
pub fn render_page<'a>(comics: impl IntoIterator<Item = &'a Comic>) -> String {
    comics
        .into_iter()
        .fold(DOCTYPE.to_string(), |mut page, comic| {
            page.push_str(&comic.render());
            page
        })
}
