use std::io::{self, Write};
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use revline::grade::{CaseResult, CaseStatus, GradeEvent, GradeReport, Grader, GradingConfig};
use revline::{logging, run, Error, Variant};

mod cli;
use cli::display::{
    error_text, fail_label, pass_label, points_colored, row, section_bot, section_top,
};
use cli::{Cli, Commands};

fn main() -> anyhow::Result<ExitCode> {
    logging::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Reverse { variant } => {
            reverse(variant.into())?;
            Ok(ExitCode::SUCCESS)
        }
        Commands::Grade { config } => grade(&config),
    }
}

fn reverse(variant: Variant) -> anyhow::Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    run(variant, &mut stdin.lock(), &mut stdout.lock())
        .with_context(|| format!("{} reverse failed", variant))?;
    Ok(())
}

fn grade(config_path: &str) -> anyhow::Result<ExitCode> {
    let config = GradingConfig::load(config_path)
        .with_context(|| format!("Could not read the autograding configuration at {}", config_path))?;

    let report = Grader::new(config).run(|event| match event {
        GradeEvent::Started(test) => println!("📝 {}", test.name),
        GradeEvent::Finished(result) => {
            print_result(result);
            println!("\n");
        }
    });

    print_summary(&report);
    io::stdout().flush().context("flushing report")?;

    Ok(if report.all_passed() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

fn print_result(result: &CaseResult) {
    if let Some(setup) = &result.setup_stdout {
        print!("{}", setup);
    }
    match &result.status {
        CaseStatus::Passed { stdout } => println!("{}{}", stdout, pass_label(&result.name)),
        CaseStatus::Failed { stdout } => println!("{}{}", stdout, fail_label(&result.name)),
        // A failed command's stderr already ends with its own newline
        CaseStatus::SetupFailed(Error::CommandFailed { stderr })
        | CaseStatus::Errored(Error::CommandFailed { stderr }) => {
            println!("{}{}", stderr, fail_label(&result.name));
        }
        CaseStatus::SetupFailed(e) | CaseStatus::Errored(e) => {
            println!("{}\n{}", error_text(&e.to_string()), fail_label(&result.name));
        }
    }
}

fn print_summary(report: &GradeReport) {
    section_top("Summary");
    row(&format!(
        " Passed {}/{}",
        report.passed_count(),
        report.results.len()
    ));
    row(&format!(
        " Points {}",
        points_colored(report.points, report.total_points)
    ));
    section_bot();

    if report.all_passed() {
        println!("{}", pass_label("All tests pass"));
    }
    println!("Points {}/{}", report.points, report.total_points);
}
