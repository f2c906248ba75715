mod config;
mod menu;
mod prompt;

use menu::MenuOption;

use bbl::services::TellerService;
use bbl::Result;

fn main() -> Result {
    config::configure_app()?;

    log::debug!("Application configured. Opening the branch...");

    let mut teller = bbl::build_teller_service();

    run_menu_loop(&mut teller)?;

    log::debug!("Branch closed.");

    Ok(())
}

fn run_menu_loop(teller: &mut TellerService) -> Result {
    loop {
        println!("{}", menu::MENU);

        let input = match prompt::read_line("=> ")? {
            // Closed stdin behaves like quit
            None => break,
            Some(input) => input,
        };

        let option = match MenuOption::parse(&input) {
            Ok(option) => option,
            Err(e) => {
                println!("{e}");
                continue;
            }
        };

        log::debug!("Selected menu option: {option:?}");

        if option == MenuOption::Quit {
            break;
        }

        // Domain and parse failures are messages, never fatal
        if let Err(e) = run_option(teller, option) {
            println!("{e}");
        }
    }

    Ok(())
}

fn run_option(teller: &mut TellerService, option: MenuOption) -> Result {
    match option {
        MenuOption::Deposit => run_deposit(teller)?,
        MenuOption::Withdraw => run_withdraw(teller)?,
        MenuOption::Statement => run_statement(teller)?,
        MenuOption::NewCustomer => run_new_customer(teller)?,
        MenuOption::NewAccount => run_new_account(teller)?,
        MenuOption::ListAccounts => run_list_accounts(teller),
        MenuOption::Quit => {}
    }

    Ok(())
}

fn run_deposit(teller: &mut TellerService) -> Result {
    let legal_id = match prompt::read_legal_id("Customer legal ID: ")? {
        None => return Ok(()),
        Some(legal_id) => legal_id,
    };

    let amount = match prompt::read_money("Amount: ")? {
        None => return Ok(()),
        Some(amount) => amount,
    };

    teller.deposit(&legal_id, amount)?;

    println!("Deposit completed successfully.");

    Ok(())
}

fn run_withdraw(teller: &mut TellerService) -> Result {
    let legal_id = match prompt::read_legal_id("Customer legal ID: ")? {
        None => return Ok(()),
        Some(legal_id) => legal_id,
    };

    let amount = match prompt::read_money("Amount: ")? {
        None => return Ok(()),
        Some(amount) => amount,
    };

    teller.withdraw(&legal_id, amount)?;

    println!("Withdrawal completed successfully.");

    Ok(())
}

fn run_statement(teller: &mut TellerService) -> Result {
    let legal_id = match prompt::read_legal_id("Customer legal ID: ")? {
        None => return Ok(()),
        Some(legal_id) => legal_id,
    };

    let statement = teller.statement(&legal_id)?;

    println!("\n============== STATEMENT ==============");
    println!("{statement}");
    println!("=======================================");

    Ok(())
}

fn run_new_customer(teller: &mut TellerService) -> Result {
    let legal_id = match prompt::read_legal_id("Legal ID (digits only): ")? {
        None => return Ok(()),
        Some(legal_id) => legal_id,
    };

    let name = match prompt::read_line("Full name: ")? {
        None => return Ok(()),
        Some(name) => name,
    };

    let birth_date = match prompt::read_date("Birth date (dd-mm-yyyy): ")? {
        None => return Ok(()),
        Some(birth_date) => birth_date,
    };

    let address = match prompt::read_line("Address: ")? {
        None => return Ok(()),
        Some(address) => address,
    };

    teller.register_customer(legal_id, name, birth_date, address)?;

    println!("Customer registered successfully.");

    Ok(())
}

fn run_new_account(teller: &mut TellerService) -> Result {
    let legal_id = match prompt::read_legal_id("Customer legal ID: ")? {
        None => return Ok(()),
        Some(legal_id) => legal_id,
    };

    let number = teller.open_account(&legal_id)?;

    println!("Account {number} opened successfully.");

    Ok(())
}

fn run_list_accounts(teller: &TellerService) {
    let summaries = teller.account_summaries();

    if summaries.is_empty() {
        println!("No accounts opened yet.");
        return;
    }

    for summary in summaries {
        println!("{}", "=".repeat(40));
        println!("{summary}");
    }

    println!("{}", "=".repeat(40));
}
