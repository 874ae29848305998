/// quick start - EMI and schedule for a 20 year home loan
use home_loan_rs::{compute_schedule, format_currency, FormattingContext, LoanParameters};
use rust_decimal_macros::dec;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 50 lakh at 8.5% for 20 years
    let params = LoanParameters::from_percent(dec!(5000000), dec!(8.5), 20, dec!(0));
    let result = compute_schedule(&params)?;

    let ctx = FormattingContext::indian_rupee();
    println!("EMI: {}", format_currency(&ctx, result.baseline_emi));
    println!("Total payment: {}", format_currency(&ctx, result.total_payment));
    println!("Total interest: {}", format_currency(&ctx, result.total_interest));
    println!("Paid off in {}", result.payoff_summary());

    // first year
    for record in result.schedule.iter().take(12) {
        println!("{}", record);
    }

    Ok(())
}
