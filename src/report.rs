use std::io;
use serde::Serialize;
use crate::amount::format_amount;
use crate::customer::{Account, Customer};

const SEPARATOR: &str = "------------------------------\n";

fn write_account_blocks(out: &mut String, accounts: &[Account]) {
    for (index, account) in accounts.iter().enumerate() {
        out.push_str(&format!(
            "Account {}:\n  Type: {}\n  Balance: ${}\n\n",
            index + 1,
            account.type_descriptor(),
            format_amount(account.balance())
        ));
    }
}

/// Account blocks for a single customer, numbered from 1.
/// The customer's full name is shown separately as the header.
pub fn customer_report(customer: &Customer) -> String {
    let mut out = String::new();
    write_account_blocks(&mut out, customer.accounts());
    out
}

/// Every customer in order, each followed by a separator line.
pub fn full_report(customers: &[Customer]) -> String {
    let mut out = String::new();
    for customer in customers {
        out.push_str(&format!("Customer: {}\n", customer.full_name()));
        write_account_blocks(&mut out, customer.accounts());
        out.push_str(SEPARATOR);
    }
    out
}

#[derive(Debug, Serialize)]
struct AccountRecord<'a> {
    last_name: &'a str,
    first_name: &'a str,
    account: usize,
    #[serde(rename = "type")]
    account_type: &'static str,
    balance: f64,
    parameter: f64,
}

/// Writes one CSV row per account of the given customers.
pub fn write_accounts_csv<'a, W: io::Write>(
    customers: impl IntoIterator<Item = &'a Customer>,
    writer: W,
) -> csv::Result<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    for customer in customers {
        for (index, account) in customer.accounts().iter().enumerate() {
            csv_writer.serialize(AccountRecord {
                last_name: customer.last_name(),
                first_name: customer.first_name(),
                account: index + 1,
                account_type: account.kind(),
                balance: account.balance(),
                parameter: account.parameter(),
            })?;
        }
    }
    csv_writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_customers() -> Vec<Customer> {
        vec![
            Customer::new("John", "Smith", vec![Account::Savings { balance: 250.5, interest_rate: 2.1 }]),
            Customer::new("Jane", "Doe", vec![Account::Checking { balance: 100.0, overdraft: 50.0 }]),
        ]
    }

    #[test]
    fn test_savings_account_block() {
        let customer = Customer::new("John", "Smith", vec![Account::Savings { balance: 250.5, interest_rate: 2.1 }]);
        let report = customer_report(&customer);

        assert_eq!(report, "Account 1:\n  Type: Savings (Interest rate: 2.1)\n  Balance: $250.5\n\n");
        assert!(report.ends_with("  Type: Savings (Interest rate: 2.1)\n  Balance: $250.5\n\n"));
    }

    #[test]
    fn test_customer_report_numbers_accounts() {
        let customer = Customer::new("John", "Smith", vec![
            Account::Savings { balance: 100.0, interest_rate: 3.5 },
            Account::Checking { balance: 20.0, overdraft: 300.0 },
        ]);

        assert_eq!(
            customer_report(&customer),
            "Account 1:\n  Type: Savings (Interest rate: 3.5)\n  Balance: $100.0\n\n\
             Account 2:\n  Type: Checking (Overdraft: 300.0)\n  Balance: $20.0\n\n"
        );
    }

    #[test]
    fn test_customer_without_accounts() {
        let customer = Customer::new("John", "Smith", Vec::new());
        assert_eq!(customer_report(&customer), "");
        assert_eq!(full_report(&[customer]), "Customer: Smith, John\n------------------------------\n");
    }

    #[test]
    fn test_full_report_restarts_numbering() {
        let report = full_report(&two_customers());

        assert_eq!(
            report,
            "Customer: Smith, John\n\
             Account 1:\n  Type: Savings (Interest rate: 2.1)\n  Balance: $250.5\n\n\
             ------------------------------\n\
             Customer: Doe, Jane\n\
             Account 1:\n  Type: Checking (Overdraft: 50.0)\n  Balance: $100.0\n\n\
             ------------------------------\n"
        );
        assert_eq!(report.matches("Account 1:").count(), 2);
        assert!(!report.contains("Account 2:"));
    }

    #[test]
    fn test_full_report_of_nothing_is_empty() {
        assert_eq!(full_report(&[]), "");
    }

    #[test]
    fn test_accounts_csv() {
        let mut out = Vec::new();
        write_accounts_csv(&two_customers(), &mut out).unwrap();

        assert_eq!(
            String::from_utf8(out).unwrap(),
            "last_name,first_name,account,type,balance,parameter\n\
             Smith,John,1,savings,250.5,2.1\n\
             Doe,Jane,1,checking,100.0,50.0\n"
        );
    }
}
