//! State management for the landing page.

mod lead;
mod router;

pub use lead::{LeadFormState, Toast, TOAST_DURATION};
pub use router::{LandingRouter, Route};
