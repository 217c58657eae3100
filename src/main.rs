use anyhow::Result;
use log::debug;
use std::env;

use expense_ledger::config::Config;
use expense_ledger::tools::{InvokableTool, Tool};

fn main() -> Result<()> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        eprintln!("Usage: expense_ledger <add_expense DATE CATEGORY AMOUNT PAYMENT_METHOD | list_expenses | prompt_add_expense>");
        std::process::exit(1);
    }

    let tool = match Tool::parse(&args[1], &args[2..]) {
        Ok(tool) => tool,
        Err(err) => {
            eprintln!("{}", err);
            std::process::exit(1);
        },
    };

    let config = Config::from_current_exe()?;
    debug!("invoking {} on {}", tool.name(), config.ledger_path.display());
    println!("{}", tool.invoke(&config.ledger()));

    Ok(())
}
