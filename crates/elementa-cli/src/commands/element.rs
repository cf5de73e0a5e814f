use crate::cli::{ElementArgs, ElementsArgs};
use crate::error::{CliError, Result};
use crate::utils::parser::{ElementQuery, parse_element_query};
use elementa::core::data::elements;
use elementa::core::models::element::Element;
use tracing::debug;

pub fn run_show(args: ElementArgs) -> Result<()> {
    let element = find(&args.query)?;
    debug!("Element query '{}' matched {}", args.query, element.symbol);
    println!("{}", element);
    println!("  Category:     {}", element.category);
    println!("  Atomic mass:  {:.4} g/mol", element.atomic_mass);
    println!(
        "  Metal:        {}",
        if element.category.is_metal() { "yes" } else { "no" }
    );
    Ok(())
}

pub fn run_list(args: ElementsArgs) -> Result<()> {
    let selected: Vec<&Element> = match args.category {
        Some(category) => elements::by_category(category).collect(),
        None => elements::all().iter().collect(),
    };
    for element in &selected {
        println!("{}", format_row(element));
    }
    println!("{} element(s)", selected.len());
    Ok(())
}

pub fn find(query: &str) -> Result<&'static Element> {
    let found = match parse_element_query(query) {
        ElementQuery::Number(n) => elements::by_number(n),
        ElementQuery::Symbol(symbol) => elements::by_symbol(symbol),
    };
    found.ok_or_else(|| CliError::Argument(format!("No element matches '{}'", query)))
}

fn format_row(element: &Element) -> String {
    format!(
        "{:>3}  {:<3} {:<14} {:>9.3}  {}",
        element.atomic_number, element.symbol, element.name, element.atomic_mass, element.category
    )
}
