/// Ingredient and price profile for one cup of a coffee type
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Recipe {
    /// Number the customer types to pick this coffee
    pub id: u32,
    pub name: String,
    /// Millilitres of water per cup
    pub water: u32,
    /// Millilitres of milk per cup
    pub milk: u32,
    /// Grams of coffee beans per cup
    pub beans: u32,
    /// Price per cup, in whole dollars
    pub price: u32,
}

impl Recipe {
    pub fn new(id: u32, name: &str, water: u32, milk: u32, beans: u32, price: u32) -> Self {
        Recipe {
            id,
            name: name.to_string(),
            water,
            milk,
            beans,
            price,
        }
    }

    pub fn espresso() -> Self {
        Recipe::new(1, "espresso", 250, 0, 16, 4)
    }

    pub fn latte() -> Self {
        Recipe::new(2, "latte", 350, 75, 20, 7)
    }

    pub fn cappuccino() -> Self {
        Recipe::new(3, "cappuccino", 200, 100, 12, 6)
    }
}

/// The standard menu, in menu order
pub fn default_catalog() -> Vec<Recipe> {
    vec![Recipe::espresso(), Recipe::latte(), Recipe::cappuccino()]
}

/// Look a recipe up by the id shown on the menu
pub fn find(catalog: &[Recipe], id: u32) -> Option<&Recipe> {
    catalog.iter().find(|r| r.id == id)
}
