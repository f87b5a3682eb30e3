mod cli;

use clap::Parser;
use cli::{Cli, Commands, RunArgs};
use colored::Colorize;
use wxss_fix::passes::{self, Pass};
use wxss_fix::{config, output, runner};

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Patch(args) => run(&passes::compat::CompatPatcher, args),

        Commands::Repair(args) => run(&passes::repair::CommentRepair, args),

        Commands::ListRules => {
            let rules = passes::all_rules();
            println!("{}", "Built-in Rules".bold().underline());
            println!();

            let mut current_pass = "";
            for rule in &rules {
                if rule.pass != current_pass {
                    if !current_pass.is_empty() {
                        println!();
                    }
                    let description = passes::find_pass(rule.pass)
                        .map(|p| p.description())
                        .unwrap_or_default();
                    println!("  {}  {}", rule.pass.bold(), description.dimmed());
                    current_pass = rule.pass;
                }

                println!(
                    "    {id:<26} {message}",
                    id = rule.id,
                    message = rule.message,
                );
            }

            println!();
            println!("  Total: {} rules", rules.len());
        }

        Commands::Explain { rule_id } => {
            let rules = passes::all_rules();
            match rules.iter().find(|r| r.id == rule_id) {
                Some(rule) => {
                    println!("{}", rule.id.bold());
                    println!();
                    println!("  Pass:         {}", rule.pass);
                    println!("  Description:  {}", rule.message);
                    println!("  Pattern:      {}", rule.pattern);
                    println!("  Before:       {}", rule.before);
                    println!("  After:        {}", rule.after);
                }
                None => {
                    eprintln!("Unknown rule: {rule_id}");
                    eprintln!("Use 'wxss-fix list-rules' to see all available rules.");
                    std::process::exit(2);
                }
            }
        }
    }
}

/// Runs one pass over `args.path` and exits with the run's status.
///
/// Exit codes: 0 when every file was processed, 1 when at least one file
/// could not be read or written, 2 for usage and configuration errors.
fn run(pass: &dyn Pass, args: RunArgs) -> ! {
    if !args.path.exists() {
        eprintln!("Error: path does not exist: {}", args.path.display());
        std::process::exit(2);
    }

    let mut config = config::Config::load(args.config.as_deref()).unwrap_or_else(|e| {
        eprintln!("Error: {e}");
        std::process::exit(2);
    });

    if let Some(ext) = args.ext {
        config.discovery.extension = ext;
        config.discovery.normalize();
        if config.discovery.extension.is_empty() {
            eprintln!("Error: --ext must not be empty");
            std::process::exit(2);
        }
    }

    let report = runner::run_pass(&args.path, pass, &config, args.dry_run);

    match args.format {
        output::OutputFormat::Pretty => print!("{}", output::format_report(&report, &args.format)),
        output::OutputFormat::Json => println!("{}", output::format_report(&report, &args.format)),
    }

    for failed in report.files.iter().filter(|f| f.error.is_some()) {
        eprintln!(
            "Warning: {}: {}",
            failed.path.display(),
            failed.error.as_deref().unwrap_or_default()
        );
    }

    std::process::exit(if report.succeeded() { 0 } else { 1 });
}
