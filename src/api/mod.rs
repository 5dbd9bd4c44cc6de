/// Artworks REST API client
///
/// This module handles:
/// - Building requests for one page of artworks (client.rs)
/// - Decoding the `{ data, pagination }` envelope (client.rs)
/// - The error taxonomy for failed fetches (error.rs)

mod client;
mod error;

pub use client::Client;
pub use error::RequestError;
