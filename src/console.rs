//! Operator console: a text menu over any line-based input and output
//!
//! The console holds no business rules. It collects requests, hands them to
//! a [`Bank`] and renders whatever comes back.

use bigdecimal::BigDecimal;
use std::io::{self, BufRead, Write};
use std::str::FromStr;

use crate::config::ConsoleConfig;
use crate::ledger::Bank;
use crate::traits::AccountStorage;
use crate::types::*;

/// Entries of the main menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    CreateAccount,
    DisplayInfo,
    Deposit,
    Withdraw,
    CalculateInterest,
    Exit,
}

impl MenuChoice {
    /// Parse a menu selection typed by the operator
    pub fn from_input(input: &str) -> Option<Self> {
        match input.trim() {
            "1" => Some(MenuChoice::CreateAccount),
            "2" => Some(MenuChoice::DisplayInfo),
            "3" => Some(MenuChoice::Deposit),
            "4" => Some(MenuChoice::Withdraw),
            "5" => Some(MenuChoice::CalculateInterest),
            "6" => Some(MenuChoice::Exit),
            _ => None,
        }
    }
}

/// Format an amount rounded to `scale` places, without trailing zeros
pub fn format_amount(amount: &BigDecimal, scale: i64) -> String {
    let text = amount.round(scale).to_string();
    if text.contains('.') {
        text.trim_end_matches('0').trim_end_matches('.').to_string()
    } else {
        text
    }
}

/// Render the outcome of a deposit
pub fn render_deposit(result: &BankResult<BigDecimal>, scale: i64) -> String {
    match result {
        Ok(_) => "Amount deposited successfully.".to_string(),
        Err(BankError::InvalidAmount(_)) => "Invalid deposit amount.".to_string(),
        Err(err) => render_error(err, scale),
    }
}

/// Render the outcome of a withdrawal
pub fn render_withdrawal(result: &BankResult<Withdrawal>, scale: i64) -> String {
    match result {
        Ok(Withdrawal::Debited { .. }) => "Withdrawal successful.".to_string(),
        Ok(Withdrawal::Overdrawn {
            overdraft_used,
            remaining_overdraft,
            ..
        }) => format!(
            "Withdrawal successful using overdraft: {}\nRemaining Overdraft Limit: {}",
            format_amount(overdraft_used, scale),
            format_amount(remaining_overdraft, scale)
        ),
        Err(BankError::InvalidAmount(_)) => "Invalid withdrawal amount.".to_string(),
        Err(err) => render_error(err, scale),
    }
}

/// Render an account snapshot
pub fn render_info(info: &AccountInfo, scale: i64) -> String {
    let mut lines = vec![
        format!("Account Number: {}", info.id),
        format!("Account Holder: {}", info.holder_name),
        format!("Balance: {}", format_amount(&info.balance, scale)),
    ];

    if info.kind == AccountKind::FixedDeposit {
        if let Some(term_months) = info.term_months {
            lines.push(format!("Term: {} months", term_months));
        }
        if let Some(rate) = &info.interest_rate {
            lines.push(format!("Interest Rate: {}%", format_amount(rate, scale)));
        }
    }

    lines.join("\n")
}

/// Render an interest quote
pub fn render_interest(quote: &InterestQuote, scale: i64) -> String {
    match quote {
        InterestQuote::Savings(amount) => {
            format!("Savings Interest: {}", format_amount(amount, scale))
        }
        InterestQuote::FixedDeposit(amount) => {
            format!("Fixed Deposit Interest: {}", format_amount(amount, scale))
        }
        InterestQuote::NotEarned => "Checking accounts do not earn interest.".to_string(),
    }
}

/// Render a failure for the operator
pub fn render_error(err: &BankError, scale: i64) -> String {
    match err {
        BankError::InsufficientFunds { balance } => format!(
            "ATM ERROR: Insufficient Balance!\nYour Current Balance: {}\nTransaction Declined.",
            format_amount(balance, scale)
        ),
        BankError::OverdraftExceeded {
            balance,
            overdraft_limit,
        } => format!(
            "ATM ERROR: Overdraft Limit Exceeded!\nYour Current Balance: {}\nOverdraft Limit: {}\nTransaction Declined.",
            format_amount(balance, scale),
            format_amount(overdraft_limit, scale)
        ),
        BankError::MaturityNotReached => "Cannot withdraw before maturity of term.".to_string(),
        BankError::AccountNotFound(_) => "Account not found!".to_string(),
        BankError::InvalidVariant(_) => "Invalid type!".to_string(),
        other => other.to_string(),
    }
}

/// Interactive menu bound to an input and an output stream
pub struct Console<R, W> {
    input: R,
    output: W,
    config: ConsoleConfig,
}

impl<R: BufRead, W: Write> Console<R, W> {
    /// Create a new console
    pub fn new(input: R, output: W, config: ConsoleConfig) -> Self {
        Self {
            input,
            output,
            config,
        }
    }

    /// Give back the output stream
    pub fn into_output(self) -> W {
        self.output
    }

    /// Run the menu until the operator exits or input ends
    pub fn run<S: AccountStorage>(&mut self, bank: &mut Bank<S>) -> io::Result<()> {
        loop {
            self.print_menu()?;
            let Some(choice) = self.prompt("Enter your choice: ")? else {
                break;
            };

            let finished = match MenuChoice::from_input(&choice) {
                Some(MenuChoice::CreateAccount) => self.create_account(bank)?,
                Some(MenuChoice::DisplayInfo) => self.display_info(bank)?,
                Some(MenuChoice::Deposit) => self.deposit(bank)?,
                Some(MenuChoice::Withdraw) => self.withdraw(bank)?,
                Some(MenuChoice::CalculateInterest) => self.calculate_interest(bank)?,
                Some(MenuChoice::Exit) => {
                    self.say("Thank you for using our banking system.")?;
                    break;
                }
                None => {
                    self.say("Invalid choice. Try again.")?;
                    false
                }
            };

            // A step returns true when input ran out in the middle of it
            if finished {
                break;
            }
        }

        self.output.flush()
    }

    fn print_menu(&mut self) -> io::Result<()> {
        let title = self.config.title.clone();
        self.say(&title)?;
        for line in [
            "1. Create Account",
            "2. Display Account Info",
            "3. Deposit",
            "4. Withdraw",
            "5. Calculate Interest",
            "6. Exit",
        ] {
            self.say(line)?;
        }
        Ok(())
    }

    fn create_account<S: AccountStorage>(&mut self, bank: &mut Bank<S>) -> io::Result<bool> {
        self.say("Select Account Type:")?;
        self.say("1. Savings")?;
        self.say("2. Checking")?;
        self.say("3. Fixed Deposit")?;
        let Some(tag) = self.prompt("Enter your choice: ")? else {
            return Ok(true);
        };
        let kind = match AccountKind::from_str(&tag) {
            Ok(kind) => kind,
            Err(err) => {
                let message = render_error(&err, self.config.display_scale);
                self.say(&message)?;
                return Ok(false);
            }
        };

        let Some(mut id) = self.prompt("Enter Account Number: ")? else {
            return Ok(true);
        };
        if id.is_empty() {
            id = bank.registry().generate_id();
            self.say(&format!("Generated Account Number: {}", id))?;
        }
        let Some(holder_name) = self.prompt("Enter Account Holder Name: ")? else {
            return Ok(true);
        };
        let Some(initial_balance) = self.prompt_number::<BigDecimal>("Enter Initial Balance: ")?
        else {
            return Ok(true);
        };

        let mut params = VariantParams::default();
        match kind {
            AccountKind::Savings => {
                let Some(rate) = self.prompt_number::<BigDecimal>("Enter Interest Rate (%): ")?
                else {
                    return Ok(true);
                };
                params.interest_rate = Some(rate);
            }
            AccountKind::Checking => {
                let Some(limit) = self.prompt_number::<BigDecimal>("Enter Overdraft Limit: ")? else {
                    return Ok(true);
                };
                params.overdraft_limit = Some(limit);
            }
            AccountKind::FixedDeposit => {
                let Some(term) = self.prompt_number::<u32>("Enter Term (months): ")? else {
                    return Ok(true);
                };
                let Some(rate) = self.prompt_number::<BigDecimal>("Enter Interest Rate (%): ")?
                else {
                    return Ok(true);
                };
                params.term_months = Some(term);
                params.interest_rate = Some(rate);
            }
        }

        match bank.create_account(kind, id, holder_name, initial_balance, params) {
            Ok(_) => self.say("Account created successfully.")?,
            Err(err) => {
                let message = render_error(&err, self.config.display_scale);
                self.say(&format!("Account creation failed: {}", message))?;
            }
        }
        Ok(false)
    }

    fn display_info<S: AccountStorage>(&mut self, bank: &Bank<S>) -> io::Result<bool> {
        let Some(id) = self.prompt("Enter Account Number: ")? else {
            return Ok(true);
        };
        self.say("--------------------------")?;
        let message = match bank.show_info(&id) {
            Ok(info) => render_info(&info, self.config.display_scale),
            Err(err) => render_error(&err, self.config.display_scale),
        };
        self.say(&message)?;
        Ok(false)
    }

    fn deposit<S: AccountStorage>(&mut self, bank: &mut Bank<S>) -> io::Result<bool> {
        let Some(id) = self.prompt("Enter Account Number: ")? else {
            return Ok(true);
        };
        // A miss is reported before asking for the amount
        if bank.find_account(&id).is_none() {
            self.say("Account not found!")?;
            return Ok(false);
        }
        let Some(amount) = self.prompt_number::<BigDecimal>("Enter amount to deposit: ")? else {
            return Ok(true);
        };
        let message = render_deposit(&bank.deposit(&id, &amount), self.config.display_scale);
        self.say(&message)?;
        Ok(false)
    }

    fn withdraw<S: AccountStorage>(&mut self, bank: &mut Bank<S>) -> io::Result<bool> {
        let Some(id) = self.prompt("Enter Account Number: ")? else {
            return Ok(true);
        };
        if bank.find_account(&id).is_none() {
            self.say("Account not found!")?;
            return Ok(false);
        }
        let Some(amount) = self.prompt_number::<BigDecimal>("Enter amount to withdraw: ")? else {
            return Ok(true);
        };
        let message = render_withdrawal(&bank.withdraw(&id, &amount), self.config.display_scale);
        self.say(&message)?;
        Ok(false)
    }

    fn calculate_interest<S: AccountStorage>(&mut self, bank: &Bank<S>) -> io::Result<bool> {
        let Some(id) = self.prompt("Enter Account Number: ")? else {
            return Ok(true);
        };
        let message = match bank.show_interest(&id) {
            Ok(quote) => render_interest(&quote, self.config.display_scale),
            Err(err) => render_error(&err, self.config.display_scale),
        };
        self.say(&message)?;
        Ok(false)
    }

    /// Prompt until the operator enters something that parses as `T`
    fn prompt_number<T: FromStr>(&mut self, prompt: &str) -> io::Result<Option<T>> {
        loop {
            let Some(text) = self.prompt(prompt)? else {
                return Ok(None);
            };
            match text.parse::<T>() {
                Ok(value) => return Ok(Some(value)),
                Err(_) => self.say("Please enter a valid number.")?,
            }
        }
    }

    /// Print a prompt and read one trimmed line; `None` at end of input
    fn prompt(&mut self, prompt: &str) -> io::Result<Option<String>> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            writeln!(self.output)?;
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    fn say(&mut self, line: &str) -> io::Result<()> {
        writeln!(self.output, "{}", line)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::MemoryStorage;

    fn run_session(bank: &mut Bank<MemoryStorage>, script: &str) -> String {
        let mut console = Console::new(script.as_bytes(), Vec::new(), ConsoleConfig::default());
        console.run(bank).unwrap();
        String::from_utf8(console.into_output()).unwrap()
    }

    #[test]
    fn test_menu_choice_parsing() {
        assert_eq!(MenuChoice::from_input(" 4 "), Some(MenuChoice::Withdraw));
        assert_eq!(MenuChoice::from_input("7"), None);
        assert_eq!(MenuChoice::from_input("exit"), None);
    }

    #[test]
    fn test_format_amount() {
        assert_eq!(format_amount(&BigDecimal::from(50), 2), "50");
        assert_eq!(
            format_amount(&BigDecimal::from_str("12.5").unwrap(), 2),
            "12.5"
        );
        assert_eq!(
            format_amount(&BigDecimal::from_str("3.14159").unwrap(), 2),
            "3.14"
        );
        assert_eq!(format_amount(&BigDecimal::from(1200), 2), "1200");
    }

    #[test]
    fn test_render_withdrawal_messages() {
        let overdrawn = Ok(Withdrawal::Overdrawn {
            amount: BigDecimal::from(120),
            overdraft_used: BigDecimal::from(20),
            remaining_overdraft: BigDecimal::from(30),
        });
        assert_eq!(
            render_withdrawal(&overdrawn, 2),
            "Withdrawal successful using overdraft: 20\nRemaining Overdraft Limit: 30"
        );

        let declined = Err(BankError::OverdraftExceeded {
            balance: BigDecimal::from(100),
            overdraft_limit: BigDecimal::from(50),
        });
        let text = render_withdrawal(&declined, 2);
        assert!(text.starts_with("ATM ERROR: Overdraft Limit Exceeded!"));
        assert!(text.contains("Overdraft Limit: 50"));
        assert!(text.ends_with("Transaction Declined."));

        assert_eq!(
            render_withdrawal(&Err(BankError::InvalidAmount(BigDecimal::from(0))), 2),
            "Invalid withdrawal amount."
        );
    }

    #[test]
    fn test_render_fixed_deposit_info() {
        let account = Account::new(
            "fd-9".to_string(),
            "Mohan".to_string(),
            BigDecimal::from(1200),
            AccountTerms::FixedDeposit {
                term_months: 12,
                interest_rate: BigDecimal::from(6),
            },
        );
        assert_eq!(
            render_info(&account.info(), 2),
            "Account Number: fd-9\nAccount Holder: Mohan\nBalance: 1200\nTerm: 12 months\nInterest Rate: 6%"
        );
    }

    #[test]
    fn test_session_create_deposit_withdraw() {
        let mut bank = Bank::new(MemoryStorage::new());
        let script = "1\n1\nS-1\nNeha Rao\n1000\n5\n3\nS-1\n250\n4\nS-1\n5000\n5\nS-1\n6\n";

        let output = run_session(&mut bank, script);

        assert!(output.contains("Account created successfully."));
        assert!(output.contains("Amount deposited successfully."));
        assert!(output.contains("ATM ERROR: Insufficient Balance!"));
        assert!(output.contains("Your Current Balance: 1250"));
        assert!(output.contains("Savings Interest: 62.5"));
        assert!(output.ends_with("Thank you for using our banking system.\n"));
        assert_eq!(
            bank.find_account("S-1").unwrap().balance,
            BigDecimal::from(1250)
        );
    }

    #[test]
    fn test_session_reports_missing_account_without_prompting_amount() {
        let mut bank = Bank::new(MemoryStorage::new());
        let output = run_session(&mut bank, "3\nghost\n6\n");

        assert!(output.contains("Account not found!"));
        assert!(!output.contains("Enter amount to deposit"));
    }

    #[test]
    fn test_session_rejects_unknown_type_and_choice() {
        let mut bank = Bank::new(MemoryStorage::new());
        let output = run_session(&mut bank, "1\n9\n8\n6\n");

        assert!(output.contains("Invalid type!"));
        assert!(!output.contains("Account created successfully."));
        assert!(output.contains("Invalid choice. Try again."));
        assert!(bank.registry().is_empty());
    }

    #[test]
    fn test_session_reprompts_bad_numbers_and_ends_on_eof() {
        let mut bank = Bank::new(MemoryStorage::new());
        let script = "1\n2\nC-1\nOm\nlots\n100\n50\n4\nC-1\n120\n";

        let output = run_session(&mut bank, script);

        assert!(output.contains("Please enter a valid number."));
        assert!(output.contains("Withdrawal successful using overdraft: 20"));
        assert!(output.contains("Remaining Overdraft Limit: 30"));
        assert!(!output.contains("Thank you"));
    }

    #[test]
    fn test_session_generates_account_number() {
        let mut bank = Bank::new(MemoryStorage::new());
        let output = run_session(&mut bank, "1\n3\n\nPriya\n1200\n12\n6\n6\n");

        assert!(output.contains("Generated Account Number: ACC-"));
        let accounts = bank.list_accounts();
        let info = &accounts[0];
        assert_eq!(info.kind, AccountKind::FixedDeposit);
        assert_eq!(info.term_months, Some(12));
    }
}
