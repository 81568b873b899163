//! loopdns Application Layer: ports and the per-request use case.
pub mod ports;
pub mod use_cases;
