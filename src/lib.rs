//! Tabi - Conversational wellness assistant backend
//!
//! Routes each chat message to one of eight wellness coach personas (or the
//! general companion), asks for missing goal details, lets the model create
//! goals through tool calls, and titles conversations.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
