//! Normalized transaction records

use chrono::{DateTime, Utc};

/// Lending-protocol operation recorded against a wallet
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Action {
    Deposit,
    Borrow,
    Repay,
    RedeemUnderlying,
    LiquidationCall,
    /// Any other action name; still counts as wallet activity
    Other(String),
}

impl Action {
    /// Map a raw protocol action name onto an Action
    pub fn parse(name: &str) -> Self {
        match name {
            "deposit" => Action::Deposit,
            "borrow" => Action::Borrow,
            "repay" => Action::Repay,
            "redeemunderlying" => Action::RedeemUnderlying,
            "liquidationcall" => Action::LiquidationCall,
            other => Action::Other(other.to_string()),
        }
    }

    /// Protocol name of this action
    pub fn as_str(&self) -> &str {
        match self {
            Action::Deposit => "deposit",
            Action::Borrow => "borrow",
            Action::Repay => "repay",
            Action::RedeemUnderlying => "redeemunderlying",
            Action::LiquidationCall => "liquidationcall",
            Action::Other(name) => name,
        }
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One normalized wallet action
///
/// `amount` and `timestamp` are `None` when the raw value could not be parsed;
/// the record is kept so it still counts toward the wallet's activity.
#[derive(Debug, Clone, PartialEq)]
pub struct TransactionRecord {
    pub wallet_address: String,
    pub action: Action,
    pub amount: Option<f64>,
    pub token_symbol: String,
    pub timestamp: Option<DateTime<Utc>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_action_parse_known() {
        assert_eq!(Action::parse("deposit"), Action::Deposit);
        assert_eq!(Action::parse("redeemunderlying"), Action::RedeemUnderlying);
        assert_eq!(Action::parse("liquidationcall"), Action::LiquidationCall);
    }

    #[test]
    fn test_action_parse_other_keeps_name() {
        let action = Action::parse("flashloan");
        assert_eq!(action, Action::Other("flashloan".to_string()));
        assert_eq!(action.to_string(), "flashloan");
    }
}
