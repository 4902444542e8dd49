//! Shelf documents in XML, delegated to quick-xml's serde support.

use crate::book::BookRecord;
use anyhow::{Context, Result};
use quick_xml::se::Serializer;
use serde::{Deserialize, Serialize};

/// Wire shape of a `<BookShelf>` document.
#[derive(Debug, Deserialize, Serialize)]
#[serde(rename = "BookShelf")]
struct ShelfDoc {
    #[serde(rename = "Book", default)]
    books: Vec<BookElem>,
}

#[derive(Debug, Deserialize, Serialize)]
struct BookElem {
    #[serde(default)]
    title: String,
    #[serde(rename = "publishedYear", default)]
    published_year: u32,
    #[serde(rename = "numberOfPages", default)]
    number_of_pages: u32,
    #[serde(default)]
    authors: Authors,
}

#[derive(Debug, Default, Deserialize, Serialize)]
struct Authors {
    #[serde(default)]
    author: Vec<String>,
}

impl From<BookElem> for BookRecord {
    fn from(elem: BookElem) -> Self {
        Self {
            title: elem.title,
            published_year: elem.published_year,
            number_of_pages: elem.number_of_pages,
            authors: elem.authors.author,
        }
    }
}

impl From<&BookRecord> for BookElem {
    fn from(book: &BookRecord) -> Self {
        Self {
            title: book.title.clone(),
            published_year: book.published_year,
            number_of_pages: book.number_of_pages,
            authors: Authors {
                author: book.authors.clone(),
            },
        }
    }
}

/// Parse every `<Book>` under the shelf root.
///
/// A malformed document is a single parse failure; no partial records come
/// back. Missing child elements degrade to empty values.
pub fn read_books(xml: &str) -> Result<Vec<BookRecord>> {
    let doc: ShelfDoc = quick_xml::de::from_str(xml).context("Failed to parse shelf XML")?;
    Ok(doc.books.into_iter().map(BookRecord::from).collect())
}

/// Append `book` to the shelf and re-serialize the whole document with
/// indentation.
pub fn append_book(xml: &str, book: &BookRecord) -> Result<String> {
    let mut doc: ShelfDoc = quick_xml::de::from_str(xml).context("Failed to parse shelf XML")?;
    doc.books.push(BookElem::from(book));

    let mut out = String::new();
    let mut ser = Serializer::new(&mut out);
    ser.indent(' ', 4);
    doc.serialize(ser)
        .context("Failed to serialize shelf XML")?;
    Ok(out)
}
