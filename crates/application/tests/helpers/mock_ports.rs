#![allow(dead_code)]

use async_trait::async_trait;
use hickory_proto::op::{Message, MessageType, OpCode};
use hickory_proto::rr::rdata::{A, CNAME};
use hickory_proto::rr::{Name, RData, Record};
use loopdns_application::ports::{DnsResolver, ResponseCachePort};
use loopdns_domain::{DnsQuery, DomainError, RecordType};
use std::collections::{HashMap, VecDeque};
use std::net::Ipv4Addr;
use std::str::FromStr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

pub fn a_record(owner: &str, ip: &str) -> Record {
    let ip: Ipv4Addr = ip.parse().unwrap();
    Record::from_rdata(Name::from_str(owner).unwrap(), 300, RData::A(A(ip)))
}

pub fn cname_record(owner: &str, target: &str) -> Record {
    Record::from_rdata(
        Name::from_str(owner).unwrap(),
        300,
        RData::CNAME(CNAME(Name::from_str(target).unwrap())),
    )
}

pub fn response_with(answers: Vec<Record>) -> Message {
    let mut message = Message::new(0x1234, MessageType::Response, OpCode::Query);
    for record in answers {
        message.add_answer(record);
    }
    message
}

#[derive(Clone, Default)]
pub struct MockDnsResolver {
    responses: Arc<Mutex<HashMap<String, Message>>>,
    sequences: Arc<Mutex<HashMap<String, VecDeque<Message>>>>,
    seen_types: Arc<Mutex<Vec<RecordType>>>,
    call_count: Arc<AtomicUsize>,
    delay: Option<Duration>,
}

impl MockDnsResolver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_delay(delay: Duration) -> Self {
        Self {
            delay: Some(delay),
            ..Self::default()
        }
    }

    pub fn set_response(&self, domain: &str, message: Message) {
        self.responses
            .lock()
            .unwrap()
            .insert(domain.to_string(), message);
    }

    /// Each call for `domain` takes the next message; once drained the
    /// fixed response from `set_response` applies.
    pub fn set_response_sequence(&self, domain: &str, messages: Vec<Message>) {
        self.sequences
            .lock()
            .unwrap()
            .insert(domain.to_string(), messages.into());
    }

    pub fn seen_types(&self) -> Vec<RecordType> {
        self.seen_types.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.call_count.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl DnsResolver for MockDnsResolver {
    async fn resolve(&self, query: &DnsQuery) -> Result<Message, DomainError> {
        self.call_count.fetch_add(1, Ordering::SeqCst);
        self.seen_types.lock().unwrap().push(query.record_type);

        let next = self
            .sequences
            .lock()
            .unwrap()
            .get_mut(query.domain.as_ref())
            .and_then(VecDeque::pop_front);

        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }

        if let Some(message) = next {
            return Ok(message);
        }

        self.responses
            .lock()
            .unwrap()
            .get(query.domain.as_ref())
            .cloned()
            .ok_or_else(|| DomainError::TransportTimeout {
                server: "mock".to_string(),
            })
    }

    fn mode_name(&self) -> &'static str {
        "mock"
    }
}

#[derive(Default)]
pub struct InMemoryResponseCache {
    entries: Mutex<HashMap<String, Message>>,
    stores: AtomicUsize,
}

impl InMemoryResponseCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn store_count(&self) -> usize {
        self.stores.load(Ordering::SeqCst)
    }
}

impl ResponseCachePort for InMemoryResponseCache {
    fn lookup(&self, name: &str) -> Option<Message> {
        self.entries.lock().unwrap().get(name).cloned()
    }

    fn store(&self, name: &str, message: Message) {
        self.stores.fetch_add(1, Ordering::SeqCst);
        self.entries
            .lock()
            .unwrap()
            .insert(name.to_string(), message);
    }

    fn len(&self) -> usize {
        self.entries.lock().unwrap().len()
    }
}
