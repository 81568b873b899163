#![allow(dead_code)]

use async_trait::async_trait;
use hickory_proto::op::{Message, MessageType, OpCode};
use hickory_proto::rr::rdata::{A, CNAME, NS, SOA};
use hickory_proto::rr::{Name, RData, Record};
use loopdns_application::ports::UpstreamQuery;
use loopdns_domain::{DomainError, ServerEndpoint};
use std::collections::HashMap;
use std::net::{IpAddr, Ipv4Addr};
use std::sync::Mutex;
use std::time::Duration;

/// Case-preserving, unlike `Name::from_str`.
pub fn name(s: &str) -> Name {
    Name::from_ascii(s).unwrap()
}

pub fn ip(s: &str) -> IpAddr {
    s.parse().unwrap()
}

pub fn a_record(owner: &str, addr: &str) -> Record {
    let addr: Ipv4Addr = addr.parse().unwrap();
    Record::from_rdata(name(owner), 300, RData::A(A(addr)))
}

pub fn cname_record(owner: &str, target: &str) -> Record {
    Record::from_rdata(name(owner), 300, RData::CNAME(CNAME(name(target))))
}

pub fn ns_record(zone: &str, target: &str) -> Record {
    Record::from_rdata(name(zone), 172800, RData::NS(NS(name(target))))
}

pub fn soa_record(zone: &str) -> Record {
    Record::from_rdata(
        name(zone),
        300,
        RData::SOA(SOA::new(
            name(&format!("ns1.{}", zone)),
            name(&format!("hostmaster.{}", zone)),
            1,
            3600,
            900,
            604800,
            300,
        )),
    )
}

pub fn answer(records: Vec<Record>) -> Message {
    let mut message = Message::new(0x4242, MessageType::Response, OpCode::Query);
    for record in records {
        message.add_answer(record);
    }
    message
}

pub fn authority(records: Vec<Record>) -> Message {
    let mut message = Message::new(0x4242, MessageType::Response, OpCode::Query);
    for record in records {
        message.add_name_server(record);
    }
    message
}

/// In-memory upstream: replies are scripted per (server ip, question name)
/// and every question asked is logged in order. Unscripted questions time out.
#[derive(Default)]
pub struct ScriptedUpstream {
    replies: Mutex<HashMap<(IpAddr, String), Message>>,
    log: Mutex<Vec<(IpAddr, String)>>,
}

impl ScriptedUpstream {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on(&self, server: &str, domain: &str, reply: Message) -> &Self {
        self.replies
            .lock()
            .unwrap()
            .insert((ip(server), domain.to_string()), reply);
        self
    }

    pub fn log(&self) -> Vec<(IpAddr, String)> {
        self.log.lock().unwrap().clone()
    }

    pub fn asked(&self, server: &str) -> usize {
        let server = ip(server);
        self.log
            .lock()
            .unwrap()
            .iter()
            .filter(|(ip, _)| *ip == server)
            .count()
    }
}

#[async_trait]
impl UpstreamQuery for ScriptedUpstream {
    async fn query(
        &self,
        domain: &str,
        server: ServerEndpoint,
        _timeout: Duration,
    ) -> Result<Message, DomainError> {
        self.log
            .lock()
            .unwrap()
            .push((server.ip(), domain.to_string()));

        self.replies
            .lock()
            .unwrap()
            .get(&(server.ip(), domain.to_string()))
            .cloned()
            .ok_or_else(|| DomainError::TransportTimeout {
                server: server.to_string(),
            })
    }
}
