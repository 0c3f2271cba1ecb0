use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// The emergency fund selection saved between runs.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct UserPreferences {
    pub account_ids: BTreeSet<String>,
    pub monthly_expenses: f64,
}

/// On-disk shape of the preference file. Either field may be missing when
/// the file was written by hand or by an older version.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct StoredPreferences {
    #[serde(default)]
    pub account_ids: Option<BTreeSet<String>>,
    #[serde(default)]
    pub monthly_expenses: Option<f64>,
}

impl UserPreferences {
    pub fn new<I, S>(account_ids: I, monthly_expenses: f64) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            account_ids: account_ids.into_iter().map(Into::into).collect(),
            monthly_expenses,
        }
    }
}

impl StoredPreferences {
    /// Both fields present. Values are not range checked.
    pub fn is_valid(&self) -> bool {
        self.account_ids.is_some() && self.monthly_expenses.is_some()
    }

    pub fn into_preferences(self) -> Option<UserPreferences> {
        match (self.account_ids, self.monthly_expenses) {
            (Some(account_ids), Some(monthly_expenses)) => Some(UserPreferences { account_ids, monthly_expenses }),
            _ => None,
        }
    }
}

impl From<UserPreferences> for StoredPreferences {
    fn from(prefs: UserPreferences) -> Self {
        Self {
            account_ids: Some(prefs.account_ids),
            monthly_expenses: Some(prefs.monthly_expenses),
        }
    }
}
