//! A text-driven coffee machine.
//!
//! [`CoffeeMachine`] is fed one line at a time and answers with a prompt
//! and an optional [`Reply`]; [`session::run`] wires it to any reader and
//! writer.

pub mod config;
pub mod error;
pub mod logger;
pub mod model;
pub mod session;

pub use config::MachineConfig;
pub use error::SessionError;
pub use model::action::{Action, Reply};
pub use model::machine::CoffeeMachine;
pub use model::state::State;
