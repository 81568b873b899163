//! DNS Message Builder
//!
//! Constructs DNS messages in wire format using `hickory-proto`: outgoing
//! questions for upstream servers and the responses sent back to clients.

use hickory_proto::op::{Message, MessageType, OpCode, Query};
use hickory_proto::rr::{DNSClass, Name, Record, RecordType};
use hickory_proto::serialize::binary::{BinEncodable, BinEncoder};
use loopdns_domain::DomainError;

/// Largest datagram exchanged in either direction (no EDNS0).
pub const MAX_DATAGRAM_SIZE: usize = 512;

/// Builds DNS messages in wire format
pub struct MessageBuilder;

impl MessageBuilder {
    /// Build an A question for `domain` and return its id with the wire bytes.
    ///
    /// The question carries a random id and the RD flag, the same shape a
    /// stub resolver would send.
    pub fn build_query_with_id(domain: &str) -> Result<(u16, Vec<u8>), DomainError> {
        // from_ascii keeps the spelling, from_str would fold it to lowercase
        let name = Name::from_ascii(domain).map_err(|e| {
            DomainError::InvalidDomainName(format!("Invalid domain '{}': {}", domain, e))
        })?;

        let mut query = Query::new();
        query.set_name(name);
        query.set_query_type(RecordType::A);
        query.set_query_class(DNSClass::IN);

        let id = fastrand::u16(..);

        let mut message = Message::new(id, MessageType::Query, OpCode::Query);
        message.set_recursion_desired(true);
        message.add_query(query);

        let bytes = Self::serialize_message(&message)?;
        Ok((id, bytes))
    }

    /// Build the client-facing response for `request`.
    ///
    /// The id and RD flag are copied from the request, QR, AA and RA are
    /// always set, the question is echoed, and every answer record is
    /// re-owned by the name the client asked for.
    pub fn build_response(request: &Message, answers: &[Record]) -> Result<Message, DomainError> {
        let query = request.queries().first().ok_or_else(|| {
            DomainError::InvalidDnsMessage("request has no question".to_string())
        })?;

        let mut response = Message::new(request.id(), MessageType::Response, OpCode::Query);
        response.set_authoritative(true);
        response.set_recursion_available(true);
        response.set_recursion_desired(request.recursion_desired());
        response.add_query(query.clone());

        for record in answers {
            let mut record = record.clone();
            record.set_name(query.name().clone());
            response.add_answer(record);
        }

        Ok(response)
    }

    /// Serialize a Message to wire format bytes
    pub fn serialize_message(message: &Message) -> Result<Vec<u8>, DomainError> {
        let mut buf = Vec::with_capacity(MAX_DATAGRAM_SIZE);
        let mut encoder = BinEncoder::new(&mut buf);

        message.emit(&mut encoder).map_err(|e| {
            DomainError::InvalidDnsMessage(format!("Failed to serialize DNS message: {}", e))
        })?;

        Ok(buf)
    }
}
