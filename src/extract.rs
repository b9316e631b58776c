use scraper::{ElementRef, Html, Selector};

use crate::error::ExtractionError;

const TITLE: &str = "h1.post-title";
const ACCOUNT: &str = "a.post-account";
const IMAGES: &str = "div.post-images";
const ZOOM: &str = "a.zoom";

/// What the blog layout tells us about an album.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlbumPage {
    pub title: String,
    pub uploader: String,
    pub image_refs: Vec<String>,
}

pub fn extract(html: &str) -> Result<AlbumPage, ExtractionError> {
    let document = Html::parse_document(html);

    let title = first(&document, TITLE)?.text().collect::<String>();
    let uploader = first(&document, ACCOUNT)?
        .text()
        .collect::<String>()
        .trim()
        .to_owned();

    let container = first(&document, IMAGES)?;
    let image_refs = container
        .select(&selector(ZOOM))
        .enumerate()
        .map(|(i, anchor)| {
            anchor
                .value()
                .attr("href")
                .map(String::from)
                .ok_or(ExtractionError::MissingHref { index: i + 1 })
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(AlbumPage { title, uploader, image_refs })
}

fn first<'a>(document: &'a Html, css: &'static str) -> Result<ElementRef<'a>, ExtractionError> {
    let selector = selector(css);
    document
        .select(&selector)
        .next()
        .ok_or(ExtractionError::MissingElement { selector: css })
}

fn selector(css: &'static str) -> Selector {
    // only ever called with the constants above
    Selector::parse(css).unwrap()
}
