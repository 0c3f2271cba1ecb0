// src/core/runway.rs

use std::collections::BTreeSet;

use crate::core::models::{Account, Budget};

pub const ACCOUNT_NOT_FOUND_MESSAGE: &str = "That account cannot be found";

/// Sum of every budgeted spend line.
pub fn sum_expenses(budget: &Budget) -> f64 {
    budget.spend().iter().map(|item| item.bgt).sum()
}

/// Whole months the balance covers, truncated toward zero.
///
/// Zero or negative expenses are not rejected, so the result can be
/// infinite, NaN or negative.
pub fn runway_months(balance: f64, monthly_expenses: f64) -> f64 {
    // Adding 0.0 turns a truncated -0.0 into 0.0.
    (balance / monthly_expenses).trunc() + 0.0
}

pub fn runway(accounts: &[Account], selected_ids: &BTreeSet<String>, monthly_expenses: f64) -> String {
    let selected: Vec<&Account> = accounts
        .iter()
        .filter(|account| selected_ids.contains(account.id()))
        .collect();

    if selected.is_empty() {
        return ACCOUNT_NOT_FOUND_MESSAGE.to_string();
    }

    let balance: f64 = selected.iter().map(|account| account.current_balance()).sum();
    format!(
        "Your emergency fund has a runway of {} months.",
        runway_months(balance, monthly_expenses)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_accounts() -> Vec<Account> {
        vec![
            Account::new("a1", "Savings", "Big Bank", 6000.0),
            Account::new("a2", "Money Market", "Small Bank", 3000.0),
            Account::new("a3", "Checking", "Big Bank", 1250.0),
        ]
    }

    fn ids(ids: &[&str]) -> BTreeSet<String> {
        ids.iter().map(|id| id.to_string()).collect()
    }

    #[test]
    fn test_sum_expenses() {
        let budget = Budget::new(&[1200.0, 450.5, 349.5]);
        assert_eq!(sum_expenses(&budget), 2000.0);
    }

    #[test]
    fn test_sum_expenses_empty_budget() {
        assert_eq!(sum_expenses(&Budget::default()), 0.0);
    }

    #[test]
    fn test_runway_multiple_accounts() {
        let message = runway(&test_accounts(), &ids(&["a1", "a2"]), 3000.0);
        assert_eq!(message, "Your emergency fund has a runway of 3 months.");
    }

    #[test]
    fn test_runway_single_account() {
        let message = runway(&test_accounts(), &ids(&["a1"]), 3000.0);
        assert_eq!(message, "Your emergency fund has a runway of 2 months.");
    }

    #[test]
    fn test_runway_truncates_partial_months() {
        let message = runway(&test_accounts(), &ids(&["a1", "a3"]), 2000.0);
        assert_eq!(message, "Your emergency fund has a runway of 3 months.");
    }

    #[test]
    fn test_runway_ignores_unknown_ids_when_some_match() {
        let message = runway(&test_accounts(), &ids(&["a2", "gone"]), 1000.0);
        assert_eq!(message, "Your emergency fund has a runway of 3 months.");
    }

    #[test]
    fn test_runway_account_not_found() {
        for expenses in [3000.0, 0.0, -10.0] {
            assert_eq!(runway(&test_accounts(), &ids(&["zzz"]), expenses), ACCOUNT_NOT_FOUND_MESSAGE);
        }
        assert_eq!(runway(&test_accounts(), &BTreeSet::new(), 3000.0), ACCOUNT_NOT_FOUND_MESSAGE);
        assert_eq!(runway(&[], &ids(&["a1"]), 3000.0), ACCOUNT_NOT_FOUND_MESSAGE);
    }

    #[test]
    fn test_runway_months_unguarded_expenses() {
        assert_eq!(runway_months(6000.0, 0.0), f64::INFINITY);
        assert_eq!(runway_months(6000.0, -2000.0), -3.0);
        assert!(runway_months(0.0, 0.0).is_nan());
        assert_eq!(runway_months(-500.0, 1000.0).to_string(), "0");
    }

    #[test]
    fn test_runway_zero_expenses_message() {
        let message = runway(&test_accounts(), &ids(&["a1"]), 0.0);
        assert_eq!(message, "Your emergency fund has a runway of inf months.");
    }
}
