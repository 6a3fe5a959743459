use serde::Serialize;

use crate::channel::VideoType;
use crate::error::{Error, Result};

/// Assumed sales per view for a 15s integration spot.
pub const INTEGRATION_SPV: f64 = 0.03;
/// Assumed sales per view for a dedicated full video.
pub const FULL_VIDEO_SPV: f64 = 0.13;
/// Assumed sales per view for a short.
pub const SHORTS_SPV: f64 = 0.01;
/// Return-on-ad-spend multiple a deal should clear.
pub const TARGET_ROAS: f64 = 5.0;
/// Agency commission as a share of total sales.
pub const COMMISSION_RATE: f64 = 0.05;

/// Inputs shared by both calculator modes.
#[derive(Debug, Clone, Copy)]
pub struct DealTerms {
    pub average_views: f64,
    pub integration_count: u32,
    /// Number of full videos in Long mode; number of shorts in Shorts mode.
    pub full_count: u32,
    pub video_type: VideoType,
    pub commission: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Verdict {
    Good,
    Warning,
    Bad,
}

impl Verdict {
    fn for_roas(roas: f64) -> Self {
        if roas >= TARGET_ROAS {
            Verdict::Good
        } else if roas >= 3.0 {
            Verdict::Warning
        } else {
            Verdict::Bad
        }
    }
}

/// Manual-mode result: what a quoted deal is expected to return.
#[derive(Debug, Serialize)]
pub struct RoasEstimate {
    pub integration_sales: f64,
    pub full_video_sales: f64,
    pub total_sales: f64,
    pub total_cost: f64,
    pub cpm: f64,
    pub roas: f64,
    pub verdict: Verdict,
}

/// Reverse-mode result: the largest quote that still clears [`TARGET_ROAS`].
#[derive(Debug, Serialize)]
pub struct BudgetEstimate {
    pub integration_sales: f64,
    pub full_video_sales: f64,
    pub total_sales: f64,
    pub max_budget: f64,
}

fn expected_sales(terms: &DealTerms) -> (f64, f64) {
    match terms.video_type {
        VideoType::Shorts => (
            0.0,
            terms.average_views * SHORTS_SPV * f64::from(terms.full_count),
        ),
        VideoType::Long => (
            terms.average_views * INTEGRATION_SPV * f64::from(terms.integration_count),
            terms.average_views * FULL_VIDEO_SPV * f64::from(terms.full_count),
        ),
    }
}

/// Estimate sales, cost, CPM, and ROAS for a deal at the given quote.
///
/// Inputs are validated before any arithmetic runs; a non-positive average
/// view count or quote is rejected with a user-facing message.
pub fn estimate_roas(terms: &DealTerms, quote: f64) -> Result<RoasEstimate> {
    if terms.average_views <= 0.0 {
        return Err(Error::Validation("Please enter average views.".to_string()));
    }
    if quote <= 0.0 {
        return Err(Error::Validation(
            "Please enter the creator's quote.".to_string(),
        ));
    }

    let (integration_sales, full_video_sales) = expected_sales(terms);
    let total_sales = integration_sales + full_video_sales;

    let commission = if terms.commission {
        total_sales * COMMISSION_RATE
    } else {
        0.0
    };
    let total_cost = quote + commission;

    let total_videos = match terms.video_type {
        VideoType::Shorts => terms.full_count,
        VideoType::Long => terms.integration_count + terms.full_count,
    };
    let cpm = if total_videos > 0 {
        quote / (terms.average_views / 1000.0) / f64::from(total_videos)
    } else {
        0.0
    };

    let roas = if total_cost > 0.0 {
        total_sales / total_cost
    } else {
        0.0
    };

    Ok(RoasEstimate {
        integration_sales,
        full_video_sales,
        total_sales,
        total_cost,
        cpm,
        roas,
        verdict: Verdict::for_roas(roas),
    })
}

/// Estimate the maximum sustainable quote for the target ROAS.
///
/// Solves `total_sales / (budget + commission) = TARGET_ROAS` for the budget,
/// with commission taken as 5% of total sales rather than of the resulting
/// cost — an approximation that slightly undershoots the exact inverse when
/// commission is enabled.
pub fn estimate_max_budget(terms: &DealTerms) -> Result<BudgetEstimate> {
    if terms.average_views <= 0.0 {
        return Err(Error::Validation("Please enter average views.".to_string()));
    }

    let (integration_sales, full_video_sales) = expected_sales(terms);
    let total_sales = integration_sales + full_video_sales;

    let max_budget = if terms.commission {
        total_sales / TARGET_ROAS - total_sales * COMMISSION_RATE
    } else {
        total_sales / TARGET_ROAS
    };

    Ok(BudgetEstimate {
        integration_sales,
        full_video_sales,
        total_sales,
        max_budget,
    })
}
