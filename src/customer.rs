use crate::amount::format_amount;

/// A balance-holding account. Both values are fixed once the account is created.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Account {
    Savings { balance: f64, interest_rate: f64 },
    Checking { balance: f64, overdraft: f64 },
}

impl Account {
    pub fn balance(&self) -> f64 {
        match *self {
            Account::Savings { balance, .. } | Account::Checking { balance, .. } => balance,
        }
    }

    /// The variant-specific value: interest rate for savings, overdraft for checking.
    pub fn parameter(&self) -> f64 {
        match *self {
            Account::Savings { interest_rate, .. } => interest_rate,
            Account::Checking { overdraft, .. } => overdraft,
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Account::Savings { .. } => "savings",
            Account::Checking { .. } => "checking",
        }
    }

    /// Human readable summary, e.g. `Savings (Interest rate: 3.5)`.
    pub fn type_descriptor(&self) -> String {
        match *self {
            Account::Savings { interest_rate, .. } => {
                format!("Savings (Interest rate: {})", format_amount(interest_rate))
            }
            Account::Checking { overdraft, .. } => {
                format!("Checking (Overdraft: {})", format_amount(overdraft))
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Customer {
    first_name: String,
    last_name: String,
    accounts: Vec<Account>,
}

impl Customer {
    pub fn new(first_name: impl Into<String>, last_name: impl Into<String>, accounts: Vec<Account>) -> Self {
        Customer {
            first_name: first_name.into(),
            last_name: last_name.into(),
            accounts,
        }
    }

    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    /// `"<last>, <first>"`, the name shown in listings and report headers.
    pub fn full_name(&self) -> String {
        format!("{}, {}", self.last_name, self.first_name)
    }

    /// Accounts in the order they appeared in the data file.
    pub fn accounts(&self) -> &[Account] {
        &self.accounts
    }
}
