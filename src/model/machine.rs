use crate::config::MachineConfig;
use crate::error::{Result, SessionError};

use super::action::{self, Action, Reply};
use super::ledger::{Ledger, Snapshot};
use super::recipe::{self, Recipe};
use super::state::State;

/// A coffee machine driven one line of text at a time.
///
/// The caller shows [`CoffeeMachine::prompt`], reads a line, hands it to
/// [`CoffeeMachine::consume`] and prints whatever comes back, until the
/// machine reaches [`State::Done`].
#[derive(Debug, Clone)]
pub struct CoffeeMachine {
    pub(crate) ledger: Ledger,
    pub(crate) recipes: Vec<Recipe>,
    pub(crate) state: State,
}

impl CoffeeMachine {
    /// A machine with the factory stock and the standard menu
    pub fn new() -> Self {
        Self::from_config(MachineConfig::default())
    }

    /// A machine with custom starting stock and the standard menu
    pub fn from_config(config: MachineConfig) -> Self {
        CoffeeMachine {
            ledger: config.stock,
            recipes: recipe::default_catalog(),
            state: State::ChoosingAction,
        }
    }

    pub fn prompt(&self) -> &'static str {
        self.state.prompt()
    }

    /// Interpret one line of input in the current state.
    ///
    /// On error nothing changes; the caller decides whether to stop or
    /// ask again.
    pub fn consume(&mut self, line: &str) -> Result<Option<Reply>> {
        let input = line.trim();
        let action = match self.state {
            State::Done => return Err(SessionError::InvalidState),
            State::ChoosingAction => input.parse::<Action>()?,
            State::ChoosingCoffee => Action::Buy,
            State::FillWater | State::FillMilk | State::FillBeans | State::FillCups => {
                Action::Fill
            }
        };
        action::apply(action, self, input)
    }

    pub fn state(&self) -> State {
        self.state
    }

    pub fn is_done(&self) -> bool {
        self.state.is_done()
    }

    pub fn snapshot(&self) -> Snapshot {
        self.ledger.snapshot()
    }

    pub fn recipes(&self) -> &[Recipe] {
        &self.recipes
    }
}

impl Default for CoffeeMachine {
    fn default() -> Self {
        Self::new()
    }
}
