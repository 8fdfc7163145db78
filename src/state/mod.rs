//! Application state module

mod app_state;
mod countdown;
mod forms;
mod record;
mod submission;

pub use app_state::*;
pub use countdown::*;
pub use forms::*;
pub use record::*;
pub use submission::*;
