// Core business logic module
// Contains the account contract and the session controller

pub mod session;
pub mod traits;

pub use session::{Outcome, Session, SessionConfig, SwitchPolicy};
pub use traits::AccountOperations;
