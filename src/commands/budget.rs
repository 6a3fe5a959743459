use crate::calculator::{DealTerms, estimate_max_budget};
use crate::error::Result;
use crate::format::format_currency;

pub fn run(terms: &DealTerms) -> Result<()> {
    let estimate = estimate_max_budget(terms)?;

    println!(
        "Integration sales: {}",
        format_currency(estimate.integration_sales)
    );
    println!(
        "Full video sales:  {}",
        format_currency(estimate.full_video_sales)
    );
    println!("Total sales:       {}", format_currency(estimate.total_sales));
    println!("Max budget:        {}", format_currency(estimate.max_budget));

    if terms.commission {
        println!("\nMax quote with 5% commission for a 5x ROAS.");
    } else {
        println!("\nMax quote without commission for a 5x ROAS.");
    }

    Ok(())
}
