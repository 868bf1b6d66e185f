//! Copy-on-write context builder.

use std::collections::{BTreeMap, BTreeSet};
use std::sync::Arc;

use crate::context::data::ContextData;

/// An immutable logging context.
///
/// Every `with_*`/`without_*` call copies the current snapshot, applies its
/// change to the copy and returns a new `LogContext`. Holders of the original
/// keep observing the original values.
///
/// ```
/// use context_logger::LogContext;
///
/// let base = LogContext::empty().with_tags(["api"]);
/// let enriched = base.with_tags(["database"]);
///
/// assert_eq!(base.tags().len(), 1);
/// assert_eq!(enriched.tags().len(), 2);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LogContext {
    data: Arc<ContextData>,
}

/// Create a context from optional initial data.
///
/// `None` yields an empty context.
pub fn create_context(initial: Option<ContextData>) -> LogContext {
    initial.map(LogContext::new).unwrap_or_default()
}

impl LogContext {
    /// Wrap owned data in a new context.
    pub fn new(data: ContextData) -> Self {
        Self {
            data: Arc::new(data),
        }
    }

    /// A context with no tags, metadata, category or session id.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Create a context from borrowed data. The data is copied.
    pub fn from_data(data: &ContextData) -> Self {
        Self::new(data.clone())
    }

    pub fn with_category(&self, category: impl Into<String>) -> Self {
        let mut data = self.copy_data();
        data.category = Some(category.into());
        Self::new(data)
    }

    pub fn with_session_id(&self, session_id: impl Into<String>) -> Self {
        let mut data = self.copy_data();
        data.session_id = Some(session_id.into());
        Self::new(data)
    }

    /// Add tags (set union). Tags already present are left as they are.
    pub fn with_tags<I, S>(&self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut data = self.copy_data();
        data.tags.extend(tags.into_iter().map(Into::into));
        Self::new(data)
    }

    /// Remove tags (set difference). Absent tags are ignored.
    pub fn without_tags<I, S>(&self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut data = self.copy_data();
        for tag in tags {
            data.tags.remove(tag.as_ref());
        }
        Self::new(data)
    }

    /// Insert or overwrite metadata entries.
    pub fn with_metadata<I, K, V>(&self, entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let mut data = self.copy_data();
        data.metadata
            .extend(entries.into_iter().map(|(k, v)| (k.into(), v.into())));
        Self::new(data)
    }

    /// Remove metadata keys. Absent keys are ignored.
    pub fn without_metadata<I, S>(&self, keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut data = self.copy_data();
        for key in keys {
            data.metadata.remove(key.as_ref());
        }
        Self::new(data)
    }

    pub fn tags(&self) -> &BTreeSet<String> {
        &self.data.tags
    }

    pub fn category(&self) -> Option<&str> {
        self.data.category.as_deref()
    }

    pub fn metadata(&self) -> &BTreeMap<String, String> {
        &self.data.metadata
    }

    pub fn session_id(&self) -> Option<&str> {
        self.data.session_id.as_deref()
    }

    /// The underlying snapshot.
    pub fn data(&self) -> &ContextData {
        &self.data
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Deep copy of the snapshot; the result shares nothing with `self`.
    fn copy_data(&self) -> ContextData {
        ContextData::clone(&self.data)
    }
}

impl From<ContextData> for LogContext {
    fn from(data: ContextData) -> Self {
        Self::new(data)
    }
}
