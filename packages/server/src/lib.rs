// Price Comparison Service - API Core
//
// Forwards a product search (text and/or image) and a list of allowed vendors
// to a generative model and relays the synthesized price comparison.
//
// Request flow: domains/intake -> domains/comparison -> server/routes

pub mod config;
pub mod domains;
pub mod kernel;
pub mod server;

pub use config::*;
