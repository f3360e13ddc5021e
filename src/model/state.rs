use super::ledger::Resource;

/// Where the machine is in its conversation with the customer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum State {
    ChoosingAction,
    ChoosingCoffee,
    FillWater,
    FillMilk,
    FillBeans,
    FillCups,
    /// Terminal; no more input is accepted
    Done,
}

impl State {
    /// Text shown before reading the next line. Empty once the session is over.
    pub fn prompt(&self) -> &'static str {
        match self {
            State::ChoosingAction => "Write action (buy, fill, take, remaining, exit): > ",
            State::ChoosingCoffee => {
                "What do you want to buy? 1 - espresso, 2 - latte, 3 - cappuccino, back - to main menu: > "
            }
            State::FillWater => "Write how many ml of water do you want to add: > ",
            State::FillMilk => "Write how many ml of milk do you want to add: > ",
            State::FillBeans => "Write how many grams of coffee beans do you want to add: > ",
            State::FillCups => "Write how many disposable cups of coffee do you want to add: > ",
            State::Done => "",
        }
    }

    /// The resource collected in this fill step and the step that follows it
    pub fn fill_step(&self) -> Option<(Resource, State)> {
        match self {
            State::FillWater => Some((Resource::Water, State::FillMilk)),
            State::FillMilk => Some((Resource::Milk, State::FillBeans)),
            State::FillBeans => Some((Resource::Beans, State::FillCups)),
            State::FillCups => Some((Resource::Cups, State::ChoosingAction)),
            _ => None,
        }
    }

    pub fn is_done(&self) -> bool {
        matches!(self, State::Done)
    }
}
