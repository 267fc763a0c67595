//! Stockroom console client
//!
//! A line-based menu over the item register: listing, lookup, registration,
//! stock adjustment, pricing and discount operations, and a replenishment
//! check. Validation failures are printed and the menu resumes.

#![expect(
    clippy::print_stdout,
    clippy::print_stderr,
    reason = "interactive console client"
)]

use std::{
    io::{self, BufRead},
    process::ExitCode,
    str::FromStr,
};

use clap::Parser;

use stockroom::{
    categories::Category,
    fixtures::InventoryFixture,
    register::ItemRegister,
    report::write_items_table,
};

/// Startup options for the console client.
#[derive(Debug, Parser)]
#[command(name = "stockroom", about = "Warehouse item register", long_about = None)]
struct Cli {
    /// Fixture set to seed the register with
    #[arg(short, long, default_value = "demo")]
    fixture: String,

    /// Start with an empty register instead of a fixture set
    #[arg(long)]
    empty: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(error) = run(&cli) {
        eprintln!("{error}");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}

fn run(cli: &Cli) -> Result<(), String> {
    let mut register = if cli.empty {
        ItemRegister::new()
    } else {
        seed_register(&cli.fixture)?
    };

    let stdin = io::stdin();
    let mut console = Console::new(stdin.lock());

    loop {
        let Some(line) = console.prompt(MENU)? else {
            break;
        };

        let Ok(choice) = line.trim().parse::<u32>() else {
            println!("\nYou must enter a valid number. Try again.");
            continue;
        };

        match choice {
            1 => see_all_items(&register),
            2 => find_item_by_number(&mut console, &register)?,
            3 => find_items_by_category(&mut console, &register)?,
            4 => register_item(&mut console, &mut register)?,
            5 => increase_storage(&mut console, &mut register)?,
            6 => decrease_storage(&mut console, &mut register)?,
            7 => remove_item(&mut console, &mut register)?,
            8 => add_discount(&mut console, &mut register)?,
            9 => remove_discount(&mut console, &mut register)?,
            10 => change_price(&mut console, &mut register)?,
            11 => change_description(&mut console, &mut register)?,
            12 => check_for_restock(&register)?,
            13 => {
                println!("\nYou have exited the program.");
                break;
            }
            _ => println!("\nYou have entered an invalid number. Try again with a number between 1 and 13."),
        }
    }

    Ok(())
}

const MENU: &str = "
Choose what you want to do, and enter the number.
1.  See all items in storage.
2.  Find item by item number.
3.  Find items by category.
4.  Register a new item.
5.  Increase the storage of an item.
6.  Decrease the storage of an item.
7.  Remove an item from storage.
8.  Add discount on an item.
9.  Remove discount from an item.
10. Change the price of an item.
11. Change the description of an item.
12. Check which items need replenishment.
13. Exit.";

fn seed_register(fixture: &str) -> Result<ItemRegister, String> {
    let loaded = InventoryFixture::from_set(fixture)
        .map_err(|error| format!("failed to load fixture set {fixture}: {error}"))?;

    loaded
        .build_register()
        .map_err(|error| format!("failed to seed register from fixture set {fixture}: {error}"))
}

/// Line-based prompting over an input stream.
///
/// Every prompt returns `None` when the stream is closed, which unwinds the
/// current menu action and ends the program cleanly.
#[derive(Debug)]
struct Console<R> {
    lines: io::Lines<R>,
}

impl<R: BufRead> Console<R> {
    fn new(reader: R) -> Self {
        Self {
            lines: reader.lines(),
        }
    }

    fn prompt(&mut self, message: &str) -> Result<Option<String>, String> {
        println!("{message}");

        match self.lines.next() {
            Some(Ok(line)) => Ok(Some(line)),
            Some(Err(error)) => Err(format!("failed to read input: {error}")),
            None => Ok(None),
        }
    }

    /// Prompts until the line parses, re-prompting on bad input.
    fn prompt_parse<T: FromStr>(&mut self, message: &str) -> Result<Option<T>, String> {
        let mut message = message;

        loop {
            let Some(line) = self.prompt(message)? else {
                return Ok(None);
            };

            match line.trim().parse() {
                Ok(value) => return Ok(Some(value)),
                Err(_) => message = "\nYou must enter a valid number. Try again.",
            }
        }
    }

    fn prompt_category(&mut self, message: &str) -> Result<Option<u8>, String> {
        println!("{message}");

        for category in Category::ALL {
            println!(" {}. {}", category.number(), category.name());
        }

        self.prompt_parse("")
    }
}

fn see_all_items(register: &ItemRegister) {
    if register.is_empty() {
        println!("\nNo items registered.");
    } else {
        println!("\nAll items in storage:\n");
        print!("{register}");
    }
}

fn find_item_by_number<R: BufRead>(
    console: &mut Console<R>,
    register: &ItemRegister,
) -> Result<(), String> {
    println!("\nYou have chosen to find item by item number.");

    let Some(item_number) = console.prompt("Type in the item number.")? else {
        return Ok(());
    };

    match register.item_by_number(&item_number) {
        Some(item) => print!("\n{item}"),
        None => println!("\nItem with that item number does not exist."),
    }

    Ok(())
}

fn find_items_by_category<R: BufRead>(
    console: &mut Console<R>,
    register: &ItemRegister,
) -> Result<(), String> {
    println!("\nYou have chosen to find items by category.");

    let Some(number) = console.prompt_category("Type in the category number for the items.")?
    else {
        return Ok(());
    };

    let Some(category) = Category::from_number(number) else {
        println!("\nYou must enter a category number between 1 and 4.");
        return Ok(());
    };

    let items = register.items_by_category(category);

    if items.is_empty() {
        println!("\nNo registered items with that category number.");
    } else {
        println!("\nAll items in the category {category}:");
        write_items_table(io::stdout().lock(), &items).map_err(|error| error.to_string())?;
    }

    Ok(())
}

fn register_item<R: BufRead>(
    console: &mut Console<R>,
    register: &mut ItemRegister,
) -> Result<(), String> {
    println!("\nYou have chosen to register an item.");

    let Some(item_number) = console.prompt("Enter an item number.")? else {
        return Ok(());
    };
    let Some(description) = console.prompt("Enter an item description.")? else {
        return Ok(());
    };
    let Some(price) = console.prompt_parse("Enter a price for the item as a whole number.")? else {
        return Ok(());
    };
    let Some(brand_name) = console.prompt("Enter a brand name for the item.")? else {
        return Ok(());
    };
    let Some(weight) = console.prompt_parse("Enter a weight for the item in kilograms.")? else {
        return Ok(());
    };
    let Some(length) = console.prompt_parse("Enter a length for the item in metres.")? else {
        return Ok(());
    };
    let Some(height) = console.prompt_parse("Enter a height for the item in metres.")? else {
        return Ok(());
    };
    let Some(color) = console.prompt("Enter a color for the item.")? else {
        return Ok(());
    };
    let Some(amount) = console.prompt_parse("Enter the amount in storage of the item.")? else {
        return Ok(());
    };
    let Some(category) =
        console.prompt_category("Enter a category number between 1 and 4 for the item.")?
    else {
        return Ok(());
    };

    let result = register.register_item(
        &item_number,
        &description,
        price,
        &brand_name,
        weight,
        length,
        height,
        &color,
        amount,
        category,
    );

    match result {
        Ok(()) => println!("\nItem registered."),
        Err(error) => println!("\n{error}"),
    }

    Ok(())
}

fn increase_storage<R: BufRead>(
    console: &mut Console<R>,
    register: &mut ItemRegister,
) -> Result<(), String> {
    println!("\nYou have chosen to increase the storage.");

    let Some(item_number) = console.prompt("Type in the item number.")? else {
        return Ok(());
    };
    let Some(amount) = console.prompt_parse("Enter the amount you want to increase by.")? else {
        return Ok(());
    };

    match register.increase_storage(&item_number, amount) {
        Ok(true) => println!("\nStorage increased."),
        Ok(false) => println!("\nItem with that item number does not exist."),
        Err(error) => println!("\n{error}"),
    }

    Ok(())
}

fn decrease_storage<R: BufRead>(
    console: &mut Console<R>,
    register: &mut ItemRegister,
) -> Result<(), String> {
    println!("\nYou have chosen to decrease the storage.");

    let Some(item_number) = console.prompt("Type in the item number.")? else {
        return Ok(());
    };
    let Some(amount) = console.prompt_parse("Enter the amount you want to decrease by.")? else {
        return Ok(());
    };

    match register.decrease_storage(&item_number, amount) {
        Ok(true) => println!("\nStorage decreased."),
        Ok(false) => println!("\nItem with that item number does not exist."),
        Err(error) => println!("\n{error}"),
    }

    Ok(())
}

fn remove_item<R: BufRead>(
    console: &mut Console<R>,
    register: &mut ItemRegister,
) -> Result<(), String> {
    println!("\nYou have chosen to remove an item from storage.");

    let Some(item_number) = console.prompt("Type in the item number.")? else {
        return Ok(());
    };

    if register.remove_item(&item_number) {
        println!(
            "\nItem with item number {} has been removed from storage.",
            item_number.trim().to_uppercase()
        );
    } else {
        println!("\nItem with that item number does not exist.");
    }

    Ok(())
}

fn add_discount<R: BufRead>(
    console: &mut Console<R>,
    register: &mut ItemRegister,
) -> Result<(), String> {
    println!("\nYou have chosen to add a discount to an item.");

    let Some(item_number) = console.prompt("Type in the item number.")? else {
        return Ok(());
    };
    let Some(percent) = console.prompt_parse("Enter the discount in percent.")? else {
        return Ok(());
    };

    match register.add_discount(&item_number, percent) {
        Ok(true) => println!("\nDiscount applied."),
        Ok(false) => println!("\nItem with that item number does not exist."),
        Err(error) => println!("\n{error}"),
    }

    Ok(())
}

fn remove_discount<R: BufRead>(
    console: &mut Console<R>,
    register: &mut ItemRegister,
) -> Result<(), String> {
    println!("\nYou have chosen to remove discount from an item.");

    let Some(item_number) = console.prompt("Type in the item number.")? else {
        return Ok(());
    };

    match register.reset_price_to_before_discount(&item_number) {
        Ok(true) => println!("\nDiscount removed."),
        Ok(false) => println!("\nItem with that item number has no discount to be removed."),
        Err(error) => println!("\n{error}"),
    }

    Ok(())
}

fn change_price<R: BufRead>(
    console: &mut Console<R>,
    register: &mut ItemRegister,
) -> Result<(), String> {
    println!("\nYou have chosen to change the price of the item.");

    let Some(item_number) = console.prompt("Type in the item number.")? else {
        return Ok(());
    };
    let Some(new_price) = console.prompt_parse("Enter the new price as a whole number.")? else {
        return Ok(());
    };

    match register.change_price(&item_number, new_price) {
        Ok(true) => println!("\nPrice changed."),
        Ok(false) => println!("\nItem with that item number does not exist."),
        Err(error) => println!("\n{error}"),
    }

    Ok(())
}

fn change_description<R: BufRead>(
    console: &mut Console<R>,
    register: &mut ItemRegister,
) -> Result<(), String> {
    println!("\nYou have chosen to change the description of the item.");

    let Some(item_number) = console.prompt("Type in the item number.")? else {
        return Ok(());
    };
    let Some(description) = console.prompt("Enter the new description.")? else {
        return Ok(());
    };

    match register.change_description(&item_number, &description) {
        Ok(true) => println!("\nDescription changed."),
        Ok(false) => println!("\nItem with that item number does not exist."),
        Err(error) => println!("\n{error}"),
    }

    Ok(())
}

fn check_for_restock(register: &ItemRegister) -> Result<(), String> {
    println!("\nYou have chosen to see all items that need replenishment.");

    let items = register.items_needing_restock();

    if items.is_empty() {
        println!("\nNo items need replenishment.");
    } else {
        println!("\n{} items need replenishment.", items.len());
        write_items_table(io::stdout().lock(), &items).map_err(|error| error.to_string())?;
    }

    Ok(())
}
