use hickory_proto::op::Message;
use hickory_proto::rr::{Name, RData};
use loopdns_domain::DomainError;
use std::net::Ipv4Addr;
use tracing::debug;

/// What one upstream reply tells the iterative walk to do next.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplyKind {
    /// The answer set aliases the name; restart for the target.
    Alias(Name),

    /// The answer set carries an A record; the walk is done.
    Answer,

    /// No usable answer, the first authority record names this server.
    Referral(Name),

    /// Nothing to follow.
    Dead,
}

pub struct ResponseParser;

impl ResponseParser {
    pub fn parse(response_bytes: &[u8]) -> Result<Message, DomainError> {
        let message = Message::from_vec(response_bytes).map_err(|e| {
            DomainError::InvalidDnsResponse(format!("Failed to parse DNS response: {}", e))
        })?;

        debug!(
            id = message.id(),
            rcode = ?message.response_code(),
            answers = message.answers().len(),
            authority = message.name_servers().len(),
            "DNS response parsed"
        );

        Ok(message)
    }

    /// CNAME wins over A when both are present; only the first authority
    /// record is ever consulted for a referral.
    pub fn classify(message: &Message) -> ReplyKind {
        let answers = message.answers();

        if let Some(target) = answers.iter().find_map(|record| match record.data() {
            RData::CNAME(cname) => Some(cname.0.clone()),
            _ => None,
        }) {
            return ReplyKind::Alias(target);
        }

        if answers
            .iter()
            .any(|record| matches!(record.data(), RData::A(_)))
        {
            return ReplyKind::Answer;
        }

        match message.name_servers().first().map(|record| record.data()) {
            Some(RData::NS(ns)) => ReplyKind::Referral(ns.0.clone()),
            _ => ReplyKind::Dead,
        }
    }

    pub fn first_ipv4(message: &Message) -> Option<Ipv4Addr> {
        message.answers().iter().find_map(|record| match record.data() {
            RData::A(a) => Some(a.0),
            _ => None,
        })
    }

    /// Smallest TTL across the answer set, `None` when it is empty.
    pub fn min_answer_ttl(message: &Message) -> Option<u32> {
        message.answers().iter().map(|record| record.ttl()).min()
    }
}
