use std::fmt;

use serde::{Deserialize, Serialize};

use super::recipe::Recipe;

/// A consumable the machine can run out of and be refilled with
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resource {
    Water,
    Milk,
    Beans,
    Cups,
}

impl Resource {
    /// How the machine names this resource when it runs short
    pub fn describe(&self) -> &'static str {
        match self {
            Resource::Water => "water",
            Resource::Milk => "milk",
            Resource::Beans => "coffee beans",
            Resource::Cups => "disposable cups of coffee",
        }
    }
}

/// The first resource that blocked a purchase
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Shortage(pub Resource);

impl fmt::Display for Shortage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Sorry, not enough resources! I need more {}", self.0.describe())
    }
}

/// Read-only copy of the ledger, used for the `remaining` report
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Snapshot {
    pub water: u32,
    pub milk: u32,
    pub beans: u32,
    pub cups: u32,
    pub money: u32,
}

impl fmt::Display for Snapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "The coffee machine has:")?;
        writeln!(f, "{} ml of water", self.water)?;
        writeln!(f, "{} ml of milk", self.milk)?;
        writeln!(f, "{} g of coffee beans", self.beans)?;
        writeln!(f, "{} disposable cups", self.cups)?;
        write!(f, "${} of money", self.money)
    }
}

/// Stock and cash held by the machine.
///
/// Every counter is unsigned. Purchases are only applied after
/// [`Ledger::shortage_for`] comes back empty, so nothing underflows;
/// refills that would overflow are refused.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Ledger {
    water: u32,
    milk: u32,
    beans: u32,
    cups: u32,
    money: u32,
}

impl Default for Ledger {
    fn default() -> Self {
        Ledger::new(400, 540, 120, 9, 550)
    }
}

impl Ledger {
    pub fn new(water: u32, milk: u32, beans: u32, cups: u32, money: u32) -> Self {
        Ledger {
            water,
            milk,
            beans,
            cups,
            money,
        }
    }

    /// First missing ingredient for one cup of `recipe`.
    /// Checked in order: water, milk, beans, then at least one cup.
    pub fn shortage_for(&self, recipe: &Recipe) -> Option<Shortage> {
        if self.water < recipe.water {
            Some(Shortage(Resource::Water))
        } else if self.milk < recipe.milk {
            Some(Shortage(Resource::Milk))
        } else if self.beans < recipe.beans {
            Some(Shortage(Resource::Beans))
        } else if self.cups < 1 {
            Some(Shortage(Resource::Cups))
        } else {
            None
        }
    }

    pub fn can_afford(&self, recipe: &Recipe) -> bool {
        self.shortage_for(recipe).is_none()
    }

    /// Make one cup. The caller must have checked [`Ledger::can_afford`].
    pub fn apply_purchase(&mut self, recipe: &Recipe) {
        self.water -= recipe.water;
        self.milk -= recipe.milk;
        self.beans -= recipe.beans;
        self.cups -= 1;
        self.money = self.money.saturating_add(recipe.price);
    }

    /// Add `amount` of one resource, returning the new level.
    /// `None` if the level would pass `u32::MAX`; the ledger is untouched then.
    pub fn fill(&mut self, resource: Resource, amount: u32) -> Option<u32> {
        let slot = match resource {
            Resource::Water => &mut self.water,
            Resource::Milk => &mut self.milk,
            Resource::Beans => &mut self.beans,
            Resource::Cups => &mut self.cups,
        };
        *slot = slot.checked_add(amount)?;
        Some(*slot)
    }

    /// Empty the till, returning what was in it
    pub fn take_money(&mut self) -> u32 {
        std::mem::take(&mut self.money)
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            water: self.water,
            milk: self.milk,
            beans: self.beans,
            cups: self.cups,
            money: self.money,
        }
    }
}
