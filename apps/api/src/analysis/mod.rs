// Resume analysis feature.
// Implements: upload text extraction, the analyze-and-store pipeline and the
// history endpoints.

pub mod extract;
pub mod handlers;
pub mod sample;
pub mod service;
