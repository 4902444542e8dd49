/// A single book parsed out of a shelf document.
///
/// Records are plain data: they exist for the duration of a print or append
/// operation and carry no identity beyond their position in the source list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookRecord {
    pub title: String,
    pub published_year: u32,
    pub number_of_pages: u32,
    /// May be empty, never absent.
    pub authors: Vec<String>,
}
