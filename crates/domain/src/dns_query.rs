use super::RecordType;
use std::sync::Arc;

/// A client question: the queried name exactly as it arrived on the wire
/// (case and trailing dot preserved) and the record type the client asked for.
#[derive(Debug, Clone)]
pub struct DnsQuery {
    pub domain: Arc<str>,
    pub record_type: RecordType,
}

impl DnsQuery {
    pub fn new(domain: impl Into<Arc<str>>, record_type: RecordType) -> Self {
        Self {
            domain: domain.into(),
            record_type,
        }
    }
}
