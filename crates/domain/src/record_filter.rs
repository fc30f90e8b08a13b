use crate::{DnsRecord, RecordType};

/// Keyword that disables type filtering.
pub const ALL_TYPES: &str = "All";

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum TypeFilter {
    #[default]
    All,
    Only(RecordType),
}

impl TypeFilter {
    pub fn parse(raw: Option<&str>) -> Self {
        match raw {
            None | Some(ALL_TYPES) => TypeFilter::All,
            Some(t) => TypeFilter::Only(RecordType::from(t)),
        }
    }

    pub fn matches(&self, record_type: &RecordType) -> bool {
        match self {
            TypeFilter::All => true,
            TypeFilter::Only(t) => t == record_type,
        }
    }
}

/// Read-side filter for listing records.
///
/// Type and search term are ANDed. The search term is a case-insensitive
/// substring test against hostname or value; an empty term matches everything.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordFilter {
    pub record_type: TypeFilter,
    search_term: String,
}

impl RecordFilter {
    pub fn new(record_type: TypeFilter, search_term: &str) -> Self {
        Self {
            record_type,
            search_term: search_term.to_lowercase(),
        }
    }

    pub fn from_query(record_type: Option<&str>, search_term: Option<&str>) -> Self {
        Self::new(TypeFilter::parse(record_type), search_term.unwrap_or(""))
    }

    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    pub fn matches(&self, record: &DnsRecord) -> bool {
        self.record_type.matches(&record.record_type) && self.matches_search(record)
    }

    fn matches_search(&self, record: &DnsRecord) -> bool {
        self.search_term.is_empty()
            || record.hostname.to_lowercase().contains(&self.search_term)
            || record.value.to_lowercase().contains(&self.search_term)
    }
}
