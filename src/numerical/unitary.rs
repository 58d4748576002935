//! Unitary cost solver: "1 pen costs 10 ... 4 pens"
//!
//! The unit price comes from one of two phrasings, tried in order:
//!
//! 1. `1 <item> cost(s) <price>`
//! 2. `cost of 1 <item> is <price>`
//!
//! The quantity is the first `<n> <item>(s)` with `n != 1`. A question that
//! names no such quantity fails with the unitary hint; a bare number is
//! never taken as a count.

use std::sync::LazyLock;

use regex::Regex;

use super::{numbers_in, parse_number, plural, MicroSolver, NumericalSolution, Step, NUMBER};
use crate::classifier::NumericalSubtype;
use crate::solver::{SolveError, SolveOutcome};

static ONE_ITEM_COSTS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(r"\b1\s+([a-z]+)\s+costs?\s+({NUMBER})"))
        .expect("unit cost pattern is valid")
});

static COST_OF_ONE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(r"cost\s+of\s+1\s+([a-z]+)\s+is\s+({NUMBER})"))
        .expect("cost-of-one pattern is valid")
});

/// Item name and price of a single unit
#[derive(Debug, Clone, PartialEq)]
struct UnitPrice {
    item: String,
    price: f64,
}

fn unit_price(text: &str) -> Option<UnitPrice> {
    [&*ONE_ITEM_COSTS, &*COST_OF_ONE].iter().find_map(|pattern| {
        let caps = pattern.captures(text)?;
        Some(UnitPrice {
            item: caps[1].to_string(),
            price: parse_number(&caps[2])?,
        })
    })
}

fn quantity_of(text: &str, item: &str) -> Option<f64> {
    let pattern = Regex::new(&format!(r"({NUMBER})\s+{}s?", regex::escape(item))).ok()?;
    let quantity = pattern
        .captures_iter(text)
        .filter_map(|caps| parse_number(&caps[1]))
        .find(|&n| n != 1.0);
    quantity
}

/// Multiplies a unit price by a quantity in five scenes.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnitaryCostSolver;

impl MicroSolver for UnitaryCostSolver {
    fn subtype(&self) -> NumericalSubtype {
        NumericalSubtype::UnitaryCost
    }

    fn solve(&self, text: &str) -> SolveOutcome<NumericalSolution> {
        if numbers_in(text).len() < 2 {
            return Err(SolveError::unitary_format());
        }

        let UnitPrice { item, price } = unit_price(text).ok_or_else(SolveError::unitary_format)?;
        let qty = quantity_of(text, &item).ok_or_else(SolveError::unitary_format)?;

        let total = price * qty;

        let steps = vec![
            Step::new(1, "Let us understand the information.", format!("1 {item} = {price}")),
            Step::new(
                2,
                "We need to find the cost of multiple items.",
                format!("Find cost of {}", plural(qty, &item)),
            ),
            Step::new(
                3,
                format!("Since 1 costs {price}, we multiply by {qty}."),
                format!("{price} × {qty}"),
            ),
            Step::new(4, "Perform the multiplication.", format!("{price} × {qty} = {total}")),
            Step::new(5, "This is the final answer.", format!("Total: {total}")),
        ];

        Ok(NumericalSolution {
            subtype: NumericalSubtype::UnitaryCost,
            answer: total,
            steps,
        })
    }
}
