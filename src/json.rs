//! Shelf documents in JSON, read with a hand-rolled scanner.
//!
//! No JSON library here: book objects are split by brace depth and a value
//! ends at the first `,`, `}` or `]` outside a quoted string. Braces inside
//! string values are not tracked; the document shape is fixed and known, so
//! the scanner stays deliberately minimal.

use crate::book::BookRecord;

/// Parse every book object out of the document's books array.
///
/// Lookups degrade silently: a document without a books array yields no
/// records, and a missing field yields an empty value instead of an error.
pub fn read_books(json: &str) -> Vec<BookRecord> {
    let Some(list) = book_list(json) else {
        return Vec::new();
    };

    split_objects(list)
        .into_iter()
        .map(|obj| BookRecord {
            title: field_value(obj, "title"),
            published_year: field_value(obj, "publishedYear").parse().unwrap_or(0),
            number_of_pages: field_value(obj, "numberOfPages").parse().unwrap_or(0),
            authors: author_values(obj),
        })
        .collect()
}

/// Append `book` as the last element of the books array.
///
/// The new object's shape is fixed, so this is a textual splice just before
/// the final `]` rather than a structural edit. A document without a closing
/// `]` comes back unchanged.
pub fn append_book(json: &str, book: &BookRecord) -> String {
    let Some(insert_at) = json.rfind(']') else {
        return json.to_string();
    };

    let authors = book
        .authors
        .iter()
        .map(|a| format!("\"{a}\""))
        .collect::<Vec<_>>()
        .join(", ");
    let entry = format!(
        ",\n    {{\n      \"title\": \"{}\",\n      \"publishedYear\": {},\n      \"numberOfPages\": {},\n      \"authors\": [{}]\n    }}",
        book.title, book.published_year, book.number_of_pages, authors
    );

    format!("{}{}{}", &json[..insert_at], entry, &json[insert_at..])
}

/// Slice of the document between the outer `[` and the last `]`.
fn book_list(json: &str) -> Option<&str> {
    let start = json.find('[')?;
    let end = json.rfind(']')?;
    (start < end).then(|| &json[start + 1..end])
}

/// Split the list into top-level `{...}` objects by brace depth.
fn split_objects(list: &str) -> Vec<&str> {
    let mut objects = Vec::new();
    let mut depth = 0usize;
    let mut start = None;

    for (i, c) in list.char_indices() {
        match c {
            '{' => {
                if depth == 0 {
                    start = Some(i);
                }
                depth += 1;
            }
            '}' => {
                depth = depth.saturating_sub(1);
                if depth == 0 {
                    if let Some(s) = start.take() {
                        objects.push(&list[s..=i]);
                    }
                }
            }
            _ => {}
        }
    }

    objects
}

/// Extract a scalar field's raw text, surrounding quotes stripped.
///
/// Returns the empty string when the field is absent.
fn field_value(obj: &str, field: &str) -> String {
    let pattern = format!("\"{field}\":");
    let Some(found) = obj.find(&pattern) else {
        return String::new();
    };

    let start = found + pattern.len();
    let value = obj[start..value_end(obj, start)].trim();
    value
        .strip_prefix('"')
        .and_then(|v| v.strip_suffix('"'))
        .unwrap_or(value)
        .to_string()
}

/// Byte offset of the first top-level delimiter (`,`, `}` or `]`) at or after
/// `start`. Quote state toggles on each unescaped `"`, so delimiters inside a
/// quoted string never terminate the value.
fn value_end(s: &str, start: usize) -> usize {
    let mut in_quotes = false;
    let mut prev = '\0';

    for (i, c) in s[start..].char_indices() {
        if c == '"' && prev != '\\' {
            in_quotes = !in_quotes;
        } else if !in_quotes && matches!(c, ',' | '}' | ']') {
            return start + i;
        }
        prev = c;
    }

    s.len()
}

/// Collect the quoted strings between the first `[` and the first `]` after
/// the `authors` key, tracking quote state the same way [`value_end`] does.
fn author_values(obj: &str) -> Vec<String> {
    let Some(key) = obj.find("\"authors\":") else {
        return Vec::new();
    };
    let Some(open) = obj[key..].find('[') else {
        return Vec::new();
    };
    let start = key + open + 1;
    let Some(close) = obj[start..].find(']') else {
        return Vec::new();
    };
    let content = &obj[start..start + close];

    let mut authors = Vec::new();
    let mut in_quote = false;
    let mut quote_start = 0;
    let mut prev = '\0';

    for (i, c) in content.char_indices() {
        if c == '"' && prev != '\\' {
            if in_quote {
                authors.push(content[quote_start..i].to_string());
            } else {
                quote_start = i + 1;
            }
            in_quote = !in_quote;
        }
        prev = c;
    }

    authors
}
