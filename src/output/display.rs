//! Display functions for command results

use super::formatters::create_progress_bar;
use crate::commands::SimulationResult;
use colored::Colorize;

/// Print the summary of a simulation run
pub fn print_simulation_result(result: &SimulationResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "SIMULATION RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    let rate = result.match_rate() * 100.0;
    let bar = create_progress_bar(rate, 100.0, 30);

    println!("\n📊 {}", "Outcome:".bright_cyan().bold());
    println!("   Policy:           {}", result.policy.name());
    println!("   Games played:     {}", result.games);
    println!(
        "   Chains met:       {}",
        result.matches.to_string().bright_yellow().bold()
    );
    println!("   Match rate:       [{}] {rate:.1}%", bar.green());
    println!("   Mean L3 size:     {:.1}", result.mean_l3_size);
    println!("   Mean R1 size:     {:.1}", result.mean_r1_size);
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());

    if result.examples.is_empty() {
        println!("\n{}", "No chains met in this run.".yellow());
        return;
    }

    println!("\n🔗 {}", "Example chains:".bright_cyan().bold());
    for (i, chain) in result.examples.iter().enumerate() {
        println!(
            "   {}. {}",
            (i + 1).to_string().bright_black(),
            chain.bright_white()
        );
    }
}
