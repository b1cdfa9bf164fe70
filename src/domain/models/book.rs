use serde::Deserialize;

/// Metadata for a book (the vendor's container for one user's uploaded
/// documents). Only widget-created books are eligible for downloads.
#[derive(Debug, Clone, Deserialize)]
pub struct BookInfo {
    pub book_type: String,
}

impl BookInfo {
    /// Documents uploaded through unrelated channels land in books of other
    /// types and must not be processed by the webhook.
    pub fn is_widget_book(&self) -> bool {
        self.book_type == "WIDGET"
    }
}
