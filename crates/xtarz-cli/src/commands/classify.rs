//! Topic classification command.

use anyhow::Result;
use clap::Args;
use xtarz_core::category;

use crate::output;

#[derive(Args)]
pub struct ClassifyArgs {
    /// Topics to classify
    #[arg(required = true)]
    pub topics: Vec<String>,
}

pub fn execute(args: ClassifyArgs) -> Result<()> {
    let rows: Vec<_> = args
        .topics
        .iter()
        .map(|topic| {
            let keyword = category::matched_keyword(topic).map(|(_, k)| k);
            (topic.as_str(), category::classify(topic), keyword)
        })
        .collect();

    output::print_classification_table(&rows);
    Ok(())
}
