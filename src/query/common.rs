//! Shared query infrastructure: the [`Query`] trait and [`QueryCommon`]
//! paging fields.

use url::Url;

/// Page size emitted when none is set.
pub const DEFAULT_FIRST: i64 = 20;

/// Trait implemented by all query builders. Provides URL serialization and
/// shared builder methods for cursor pagination.
pub trait Query {
    /// Appends this query's parameters to the given URL, returning the
    /// modified URL.
    fn add_to_url(&self, url: &Url) -> Url;

    /// Returns a mutable reference to the common query fields.
    fn get_common(&mut self) -> &mut QueryCommon;

    /// Sets the pagination cursor, resuming after the page that returned it.
    fn with_after(mut self, cursor: &str) -> Self
    where
        Self: Sized,
    {
        self.get_common().after = Some(cursor.to_string());
        self
    }

    /// Sets the number of results per page. The API accepts at most 1000;
    /// larger values are passed through unchanged for the service to reject.
    fn with_first(mut self, first: i64) -> Self
    where
        Self: Sized,
    {
        self.get_common().first = Some(first);
        self
    }
}

/// Paging fields shared by all list queries.
#[derive(Clone, Default)]
pub struct QueryCommon {
    /// Cursor returned by a previous page. `None` starts from the beginning.
    pub after: Option<String>,
    /// Results per page. `None` emits the service default of 20.
    pub first: Option<i64>,
}

impl QueryCommon {
    /// Appends the common paging parameters to the URL. An unset page size
    /// still emits `first=20` so every request states its page size.
    pub fn add_to_url(&self, url: &Url) -> Url {
        let mut url = url.clone();
        url.query_pairs_mut()
            .append_pair("first", &self.first.unwrap_or(DEFAULT_FIRST).to_string());
        if let Some(after) = &self.after {
            url.query_pairs_mut().append_pair("after", after.as_str());
        };
        url
    }
}
