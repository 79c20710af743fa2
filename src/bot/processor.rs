use std::collections::HashMap;

use serde::{Deserialize, Deserializer};
use serde_json::{Number, Value};

/* Processor holds the payout data and the logic over it.
 * The handler only ever reads from the index built here, and the api module
 * only ever hands raw entries over to it.
 */

// Placeholder username for payouts with no associated creator.
pub const UNKNOWN_USERNAME: &str = "__unknown__";

/* The leaderboard reports user ids either as strings or as JSON numbers.
 * Anything else is kept as Unknown, which resolves to no id at all.
 */
#[derive(Deserialize, Clone, Debug, PartialEq)]
#[serde(untagged)]
pub enum UserId {
    Text(String),
    Numeric(Number),
    Unknown(Value),
}

impl Default for UserId {
    fn default() -> Self {
        UserId::Unknown(Value::Null)
    }
}

impl UserId {
    // Resolves the id to the text shown to users.
    pub fn resolve(&self) -> Option<String> {
        match self {
            UserId::Text(id) => Some(id.clone()),
            UserId::Numeric(number) => {
                if let Some(id) = number.as_u64() {
                    Some(id.to_string())
                } else if let Some(id) = number.as_i64() {
                    Some(id.to_string())
                } else {
                    number.as_f64().map(|id| format!("{:.0}", id.round()))
                }
            }
            UserId::Unknown(_) => None,
        }
    }
}

// An explicit null decodes the same as a missing field.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[derive(Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(default)]
pub struct PayoutEntry {
    #[serde(deserialize_with = "null_as_default")]
    pub rank: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub username: String,
    pub user_id: UserId,
    #[serde(deserialize_with = "null_as_default")]
    pub gross_earning: f64,
    #[serde(rename = "pfp", deserialize_with = "null_as_default")]
    pub avatar_url: String,
}

/* Payouts keyed by lowercase username.
 * Built once at startup and only read afterwards.
 */
#[derive(Clone, Debug, Default)]
pub struct PayoutIndex {
    payouts: HashMap<String, PayoutEntry>,
}

impl PayoutIndex {
    /* Builds the index from the leaderboard entries, in order.
     * Entries for the unknown placeholder are skipped, and usernames that only
     * differ in case collapse into one key, keeping the last entry seen.
     */
    pub fn from_entries(entries: Vec<PayoutEntry>) -> PayoutIndex {
        let mut payouts = HashMap::with_capacity(entries.len());
        for entry in entries {
            if entry.username == UNKNOWN_USERNAME {
                continue;
            }
            payouts.insert(entry.username.to_lowercase(), entry);
        }

        PayoutIndex { payouts }
    }

    // Case-insensitive lookup of a creator's payout.
    pub fn find(&self, username: &str) -> Option<&PayoutEntry> {
        self.payouts.get(&username.to_lowercase())
    }

    pub fn len(&self) -> usize {
        self.payouts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.payouts.is_empty()
    }
}
