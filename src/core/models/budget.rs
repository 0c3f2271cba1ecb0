use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BudgetItem {
    /// Budgeted amount for the line item.
    pub bgt: f64,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Budget {
    pub spend: Vec<BudgetItem>,
}

impl Budget {
    pub fn new(amounts: &[f64]) -> Self {
        Self {
            spend: amounts.iter().map(|&bgt| BudgetItem { bgt }).collect(),
        }
    }

    pub fn spend(&self) -> &[BudgetItem] {
        &self.spend
    }
}
