/// Resources, recipes and the input state machine
pub mod action;
pub mod ledger;
pub mod machine;
pub mod recipe;
pub mod state;
