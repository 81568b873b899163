//! loopdns Infrastructure Layer: wire codec, UDP transport, resolvers,
//! response cache and the datagram listener.
pub mod dns;
