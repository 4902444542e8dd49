//! The book-shelf demo: print the built-in sample documents, append one new
//! record to each, and print the updated shelves.

use crate::book::BookRecord;
use crate::{json, xml};
use anyhow::Result;

/// Three-book sample shelf, XML form.
pub const SAMPLE_XML: &str = r#"<BookShelf>
    <Book>
        <title>Java Programming</title>
        <publishedYear>2020</publishedYear>
        <numberOfPages>450</numberOfPages>
        <authors>
            <author>John Doe</author>
            <author>Jane Smith</author>
        </authors>
    </Book>
    <Book>
        <title>Python Basics</title>
        <publishedYear>2019</publishedYear>
        <numberOfPages>320</numberOfPages>
        <authors>
            <author>Alice Johnson</author>
        </authors>
    </Book>
    <Book>
        <title>Data Structures</title>
        <publishedYear>2021</publishedYear>
        <numberOfPages>600</numberOfPages>
        <authors>
            <author>Robert Brown</author>
            <author>Emily Davis</author>
            <author>Michael Wilson</author>
        </authors>
    </Book>
</BookShelf>
"#;

/// The same three books, JSON form.
pub const SAMPLE_JSON: &str = r#"{
  "books": [
    {
      "title": "Java Programming",
      "publishedYear": 2020,
      "numberOfPages": 450,
      "authors": ["John Doe", "Jane Smith"]
    },
    {
      "title": "Python Basics",
      "publishedYear": 2019,
      "numberOfPages": 320,
      "authors": ["Alice Johnson"]
    },
    {
      "title": "Data Structures",
      "publishedYear": 2021,
      "numberOfPages": 600,
      "authors": ["Robert Brown", "Emily Davis", "Michael Wilson"]
    }
  ]
}
"#;

/// The record the demo appends to both shelves.
pub fn new_arrival() -> BookRecord {
    BookRecord {
        title: "Advanced Algorithms".to_string(),
        published_year: 2022,
        number_of_pages: 780,
        authors: vec!["Sarah Miller".to_string(), "David Taylor".to_string()],
    }
}

/// Which sample document the demo runs over.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShelfFormat {
    Xml,
    Json,
}

/// Run the demo: print both shelves, append [`new_arrival`] to each, print
/// the updated shelves. `format` restricts the run to one document format.
pub fn run(format: Option<ShelfFormat>) -> Result<()> {
    let xml_on = format != Some(ShelfFormat::Json);
    let json_on = format != Some(ShelfFormat::Xml);

    println!("=== ORIGINAL DATA ===");
    if xml_on {
        println!("\nXML Format:");
        print_records(&xml::read_books(SAMPLE_XML)?);
    }
    if json_on {
        println!("\nJSON Format:");
        print_records(&json::read_books(SAMPLE_JSON));
    }

    println!("\n=== ADDING NEW BOOKS ===");
    let arrival = new_arrival();
    if xml_on {
        let updated = xml::append_book(SAMPLE_XML, &arrival)?;
        println!("\nUPDATED XML (4 books total):");
        print_records(&xml::read_books(&updated)?);
    }
    if json_on {
        let updated = json::append_book(SAMPLE_JSON, &arrival);
        println!("\nUPDATED JSON (4 books total):");
        print_records(&json::read_books(&updated));
    }

    Ok(())
}

fn print_records(records: &[BookRecord]) {
    println!("Total books found: {}", records.len());
    for (i, book) in records.iter().enumerate() {
        println!("\nBook #{}", i + 1);
        println!("Title: {}", book.title);
        println!("Published Year: {}", book.published_year);
        println!("Number of Pages: {}", book.number_of_pages);
        println!("Authors: {}", book.authors.join(", "));
    }
}
