use std::fmt;
use std::str::FromStr;

use crate::error::{Result, SessionError};

use super::ledger::{Shortage, Snapshot};
use super::machine::CoffeeMachine;
use super::recipe;
use super::state::State;

/// Commands accepted from the main menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Buy,
    Fill,
    Take,
    Remaining,
    Exit,
}

impl FromStr for Action {
    type Err = SessionError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "buy" => Ok(Action::Buy),
            "fill" => Ok(Action::Fill),
            "take" => Ok(Action::Take),
            "remaining" => Ok(Action::Remaining),
            "exit" => Ok(Action::Exit),
            _ => Err(SessionError::InvalidAction(s.to_string())),
        }
    }
}

/// What the machine says back after a line has been handled
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// A cup of the named coffee was made
    Making(String),
    Shortage(Shortage),
    /// Money handed out by `take`
    Gave(u32),
    Report(Snapshot),
}

impl fmt::Display for Reply {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Reply::Making(_) => f.write_str("I have enough resources, making you a coffee!"),
            Reply::Shortage(shortage) => fmt::Display::fmt(shortage, f),
            Reply::Gave(amount) => write!(f, "I gave you ${}", amount),
            Reply::Report(snapshot) => fmt::Display::fmt(snapshot, f),
        }
    }
}

/// Run `action` against the machine with the line that triggered it.
///
/// `buy` and `fill` span several lines: the first call from the main menu
/// only moves to the sub-prompt, later calls consume the customer's answer.
pub fn apply(action: Action, machine: &mut CoffeeMachine, input: &str) -> Result<Option<Reply>> {
    match action {
        Action::Buy => buy(machine, input),
        Action::Fill => fill(machine, input),
        Action::Take => Ok(Some(Reply::Gave(machine.ledger.take_money()))),
        Action::Remaining => Ok(Some(Reply::Report(machine.ledger.snapshot()))),
        Action::Exit => {
            machine.state = State::Done;
            Ok(None)
        }
    }
}

fn buy(machine: &mut CoffeeMachine, input: &str) -> Result<Option<Reply>> {
    match machine.state {
        State::ChoosingAction => {
            machine.state = State::ChoosingCoffee;
            Ok(None)
        }
        State::ChoosingCoffee => {
            if input == "back" {
                machine.state = State::ChoosingAction;
                return Ok(None);
            }

            let id = parse_number(input)?;
            let coffee = recipe::find(&machine.recipes, id)
                .ok_or_else(|| SessionError::InvalidNumber(input.to_string()))?;

            let reply = match machine.ledger.shortage_for(coffee) {
                Some(shortage) => Reply::Shortage(shortage),
                None => {
                    machine.ledger.apply_purchase(coffee);
                    Reply::Making(coffee.name.clone())
                }
            };
            machine.state = State::ChoosingAction;
            Ok(Some(reply))
        }
        _ => Err(SessionError::InvalidState),
    }
}

fn fill(machine: &mut CoffeeMachine, input: &str) -> Result<Option<Reply>> {
    if machine.state == State::ChoosingAction {
        machine.state = State::FillWater;
        return Ok(None);
    }

    let (resource, next) = machine.state.fill_step().ok_or(SessionError::InvalidState)?;
    let amount = parse_number(input)?;
    machine
        .ledger
        .fill(resource, amount)
        .ok_or_else(|| SessionError::InvalidNumber(input.to_string()))?;
    machine.state = next;
    Ok(None)
}

fn parse_number(input: &str) -> Result<u32> {
    input
        .parse::<u32>()
        .map_err(|_| SessionError::InvalidNumber(input.to_string()))
}
