use crate::calculator::{DealTerms, Verdict, estimate_roas};
use crate::error::Result;
use crate::format::format_currency;

pub fn run(terms: &DealTerms, quote: f64) -> Result<()> {
    let estimate = estimate_roas(terms, quote)?;

    println!(
        "Integration sales: {}",
        format_currency(estimate.integration_sales)
    );
    println!(
        "Full video sales:  {}",
        format_currency(estimate.full_video_sales)
    );
    println!("Total sales:       {}", format_currency(estimate.total_sales));
    println!("Total cost:        {}", format_currency(estimate.total_cost));
    println!("CPM:               {}", format_currency(estimate.cpm));
    println!("ROAS:              {:.1}x", estimate.roas);

    let verdict = match estimate.verdict {
        Verdict::Good => "Great deal! ROAS is 5x or higher.",
        Verdict::Warning => "Okay deal, but below the 5x target.",
        Verdict::Bad => "Poor ROAS - consider renegotiating.",
    };
    println!("\n{verdict}");

    Ok(())
}
