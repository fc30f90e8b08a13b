//! Zonekeeper Application Layer
//!
//! Ports describe what the use cases need from the outside world; the use
//! cases implement one operation each against those ports.
pub mod ports;
pub mod services;
pub mod use_cases;
