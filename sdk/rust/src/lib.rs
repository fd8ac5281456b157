//! Client for the contact relay's public endpoint.

mod client;

pub use client::{ContactClient, ContactForm, SubmitBody, SubmitResponse};
