//! IP Tracker: public IP address tracker
//!
//! A library for recording the host's public IP address in a local
//! history and notifying a Discord webhook when it changes.

pub mod address;
pub mod config;
pub mod detect;
pub mod history;
pub mod time;
pub mod transport;
pub mod webhook;
