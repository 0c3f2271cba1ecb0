use serde::{Deserialize, Deserializer, Serialize};

/// A linked account as reported by the aggregation service.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    #[serde(deserialize_with = "deserialize_account_id")]
    pub account_id: String,
    #[serde(default)]
    pub account_name: String,
    #[serde(default)]
    pub fi_login_display_name: String,
    pub current_balance: f64,
}

impl Account {
    pub fn new(account_id: &str, account_name: &str, fi_login_display_name: &str, current_balance: f64) -> Self {
        Self {
            account_id: account_id.to_string(),
            account_name: account_name.to_string(),
            fi_login_display_name: fi_login_display_name.to_string(),
            current_balance,
        }
    }

    pub fn id(&self) -> &str {
        &self.account_id
    }

    pub fn name(&self) -> &str {
        &self.account_name
    }

    pub fn display_name(&self) -> &str {
        &self.fi_login_display_name
    }

    pub fn current_balance(&self) -> f64 {
        self.current_balance
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawAccountId {
    Text(String),
    Number(i64),
}

// The service sends numeric ids for some institutions.
fn deserialize_account_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match RawAccountId::deserialize(deserializer)? {
        RawAccountId::Text(id) => id,
        RawAccountId::Number(id) => id.to_string(),
    })
}
