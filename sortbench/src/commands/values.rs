use clap::Parser;
use seqsort::{Algorithm, Element};

use crate::report;

/// Sort values given on the command line
#[derive(Parser)]
pub struct ValuesArgs {
    /// Values to sort. Integers, floats and strings are detected per value
    #[arg(conflicts_with = "json")]
    pub values: Vec<String>,
    /// A JSON array of numbers and/or strings to sort instead
    #[arg(long)]
    pub json: Option<String>,
}

impl ValuesArgs {
    fn elements(&self) -> anyhow::Result<Vec<Element>> {
        if let Some(json) = &self.json {
            return Ok(serde_json::from_str(json)?);
        }
        let elements = self
            .values
            .iter()
            .map(|v| v.parse::<Element>())
            .collect::<Result<Vec<_>, _>>()?;
        Ok(elements)
    }

    pub fn run(&self, algorithm: Algorithm) -> anyhow::Result<()> {
        let elements = self.elements()?;
        println!("Original values: {}", report::format_list(&elements));
        let (sorted, elapsed) = report::timed_sort(algorithm, &elements)?;
        println!("Sorted values: {}", report::format_list(&sorted));
        println!("Time taken: {}", report::format_millis(elapsed));
        Ok(())
    }
}
