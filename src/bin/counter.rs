use clap::Parser;
use serde::Serialize;
use serde_json::json;
use std::io::{self, BufRead, Write};

/// Quick-service counter till: ring items up by menu number, print the bill.
#[derive(Parser, Debug)]
#[command(name = "counter")]
#[command(about = "counter till that takes an order by menu number and prints the bill", version, long_about = None)]
struct Cli {
    #[arg(long, default_value_t = 1, help = "Table the order is rung up for.")]
    table: u8,
    #[arg(long, help = "Print the bill as JSON instead of the text receipt.")]
    json: bool,
}

#[derive(Debug, Clone, Serialize)]
struct MenuItem {
    name: &'static str,
    price_cents: u32,
}

const MENU: [MenuItem; 4] = [
    MenuItem {
        name: "Burger",
        price_cents: 599,
    },
    MenuItem {
        name: "Pizza",
        price_cents: 899,
    },
    MenuItem {
        name: "Salad",
        price_cents: 399,
    },
    MenuItem {
        name: "Soda",
        price_cents: 199,
    },
];

fn main() -> Result<(), anyhow::Error> {
    let args = Cli::parse();

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut input = stdin.lock();
    let mut out = stdout.lock();

    display_menu(&mut out)?;
    let order = place_order(&mut input, &mut out)?;
    generate_bill(&order, args.table, args.json, &mut out)?;
    Ok(())
}

fn display_menu<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "Menu:")?;
    for (index, item) in MENU.iter().enumerate() {
        writeln!(
            out,
            "{}) {} - {}",
            index,
            item.name,
            format_cents(item.price_cents)
        )?;
    }
    writeln!(out)
}

/// Ring up zero-based menu numbers until `q` (or end of input). Anything that
/// is not an in-range number is reported and skipped.
fn place_order<R, W>(input: &mut R, out: &mut W) -> io::Result<Vec<MenuItem>>
where
    R: BufRead,
    W: Write,
{
    let mut order = Vec::new();
    let mut line = String::new();
    loop {
        write!(
            out,
            "Enter the item number to add to the order (or 'q' to finish): "
        )?;
        out.flush()?;
        line.clear();
        if input.read_line(&mut line)? == 0 {
            break;
        }
        let token = line.trim();
        if token.is_empty() {
            continue;
        }
        if token == "q" {
            break;
        }
        match token.parse::<usize>().ok().and_then(|index| MENU.get(index)) {
            Some(item) => {
                order.push(item.clone());
                writeln!(out, "{} added to the order.", item.name)?;
            }
            None => writeln!(out, "{} is not a menu number.", token)?,
        }
    }
    Ok(order)
}

fn generate_bill<W: Write>(order: &[MenuItem], table: u8, as_json: bool, out: &mut W) -> io::Result<()> {
    let total = order.iter().map(|item| item.price_cents).sum::<u32>();
    if as_json {
        return writeln!(
            out,
            "{:#}",
            json!({
                "table_id": table,
                "items": order,
                "total_cents": total,
            })
        );
    }
    writeln!(out, "\nBill:")?;
    for item in order {
        writeln!(out, "{} - {}", item.name, format_cents(item.price_cents))?;
    }
    writeln!(out, "Total: {}", format_cents(total))
}

fn format_cents(cents: u32) -> String {
    format!("${}.{:02}", cents / 100, cents % 100)
}
