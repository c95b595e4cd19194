use serde::Deserialize;

/// Listing record for one email, as served by the `/emails` endpoint. The
/// body is only ever displayed truncated; the full content comes from the
/// detail endpoint.
#[derive(Clone, PartialEq, Eq, Deserialize)]
pub struct EmailSummary {
    pub id: u64,
    pub subject: String,
    pub from: String,
    pub date: String,
    pub body: String,
}

/// Full message content, fetched lazily when a card is opened. The server
/// sends more fields; only these are shown.
#[derive(Clone, PartialEq, Eq, Deserialize)]
pub struct EmailDetail {
    pub id: u64,
    pub subject: String,
    pub body: String,
}

/// One page of results plus the metadata to navigate the rest.
#[derive(Clone, PartialEq, Eq, Deserialize)]
pub struct EmailList {
    pub emails: Vec<EmailSummary>,
    pub total: u64,
    pub page: u32,
    pub per_page: u32,
    pub total_pages: u32,
}

/// Search criteria forwarded verbatim to the server, empty values included.
#[derive(Clone, PartialEq, Eq, Default)]
pub struct Filters {
    pub search: String,
    pub sender: String,
    pub from_date: String,
    pub to_date: String,
}
