pub mod api;
pub mod cli;
pub mod controller;
pub mod error;
pub mod view;

pub use api::{HttpSummaryApi, SummaryApi};
pub use controller::{SubmitOutcome, SummaryController};
pub use error::ClientError;
pub use view::{render, Screen, ViewState};
