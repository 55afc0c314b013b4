use std::fs;
use std::path::Path;
use log::{info, trace, warn};
use crate::customer::{Account, Customer};
use crate::error::LoadError;

fn is_line_break(c: char) -> bool {
    matches!(c, '\n' | '\r' | '\u{85}' | '\u{2028}' | '\u{2029}')
}

/// Field separators are ASCII whitespace only; other Unicode spaces stay inside a token.
fn is_field_separator(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\x0B' | '\x0C' | '\r')
}

fn split_fields(line: &str) -> Vec<&str> {
    line.split(is_field_separator).filter(|field| !field.is_empty()).collect()
}

/// Walks the input one line at a time, tracking 1-based line numbers for error messages.
/// `\r\n`, a lone `\r` and `\n` all end a line.
struct LineReader<'a> {
    rest: &'a str,
    line_no: usize,
}

impl<'a> LineReader<'a> {
    fn new(input: &'a str) -> Self {
        LineReader { rest: input, line_no: 0 }
    }

    fn next_raw(&mut self) -> Option<&'a str> {
        if self.rest.is_empty() {
            return None;
        }
        match self.rest.char_indices().find(|&(_, c)| is_line_break(c)) {
            Some((index, c)) => {
                let line = &self.rest[..index];
                let mut next = index + c.len_utf8();
                if c == '\r' && self.rest[next..].starts_with('\n') {
                    next += 1;
                }
                self.rest = &self.rest[next..];
                Some(line)
            }
            None => {
                let line = self.rest;
                self.rest = "";
                Some(line)
            }
        }
    }

    fn next_line(&mut self) -> Result<(usize, &'a str), LoadError> {
        self.line_no += 1;
        match self.next_raw() {
            Some(line) => Ok((self.line_no, line.trim_matches(|c: char| c <= ' '))),
            None => Err(LoadError::format(self.line_no, "unexpected end of file")),
        }
    }
}

/// Accepts decimal numbers with an optional exponent and `d`/`f` suffix, plus the exact
/// spellings `Infinity` and `NaN`. Words such as `inf` or `nan` are rejected.
fn parse_number(line_no: usize, token: &str, what: &str) -> Result<f64, LoadError> {
    let invalid = || LoadError::format(line_no, format!("{} {:?} is not a number", what, token));

    let (negative, unsigned) = match token.as_bytes().first() {
        Some(b'-') => (true, &token[1..]),
        Some(b'+') => (false, &token[1..]),
        _ => (false, token),
    };
    let magnitude = match unsigned {
        "Infinity" => f64::INFINITY,
        "NaN" => f64::NAN,
        _ => {
            if !unsigned.starts_with(|c: char| c.is_ascii_digit() || c == '.') {
                return Err(invalid());
            }
            let digits = unsigned
                .strip_suffix(['d', 'D', 'f', 'F'])
                .unwrap_or(unsigned);
            digits.parse::<f64>().map_err(|_| invalid())?
        }
    };
    Ok(if negative { -magnitude } else { magnitude })
}

fn parse_count(line_no: usize, token: &str, what: &str) -> Result<i32, LoadError> {
    token
        .parse::<i32>()
        .map_err(|_| LoadError::format(line_no, format!("{} {:?} is not an integer", what, token)))
}

/// Reads and parses the customer file at `path`.
pub fn load_customers(path: &Path) -> Result<Vec<Customer>, LoadError> {
    let content = fs::read_to_string(path)?;
    let customers = parse_customers(&content)?;
    info!("Loaded {} customers from {}", customers.len(), path.display());
    Ok(customers)
}

/// Parses the customer file format: a customer count, then for each customer a
/// `<first> <last> <accounts>` header followed by that many `<S|C> <balance> <param>` lines.
///
/// Malformed header lines drop the customer, short account lines and unknown account
/// types drop the account. Bad numbers and missing lines fail the whole load.
pub fn parse_customers(input: &str) -> Result<Vec<Customer>, LoadError> {
    let mut reader = LineReader::new(input);

    let (line_no, count_line) = reader.next_line()?;
    let customer_count = parse_count(line_no, count_line, "customer count")?;

    let mut customers = Vec::new();
    for _ in 0..customer_count {
        let (line_no, header) = reader.next_line()?;
        let fields = split_fields(header);
        if fields.len() < 3 {
            warn!("Line {}: customer header {:?} has fewer than 3 fields. Skipping customer.", line_no, header);
            continue;
        }

        let account_count = parse_count(line_no, fields[2], "account count")?;
        let mut accounts = Vec::new();
        for _ in 0..account_count {
            let (line_no, account_line) = reader.next_line()?;
            if let Some(account) = parse_account(line_no, account_line)? {
                accounts.push(account);
            }
        }

        trace!("Line {}: customer {} {} with {} accounts", line_no, fields[0], fields[1], accounts.len());
        customers.push(Customer::new(fields[0], fields[1], accounts));
    }

    Ok(customers)
}

fn parse_account(line_no: usize, line: &str) -> Result<Option<Account>, LoadError> {
    let fields = split_fields(line);
    if fields.len() < 3 {
        warn!("Line {}: account line {:?} has fewer than 3 fields. Skipping account.", line_no, line);
        return Ok(None);
    }

    let balance = parse_number(line_no, fields[1], "balance")?;
    let parameter = parse_number(line_no, fields[2], "account parameter")?;

    match fields[0] {
        "S" => Ok(Some(Account::Savings { balance, interest_rate: parameter })),
        "C" => Ok(Some(Account::Checking { balance, overdraft: parameter })),
        other => {
            warn!("Line {}: unknown account type {:?}. Skipping account.", line_no, other);
            Ok(None)
        }
    }
}
