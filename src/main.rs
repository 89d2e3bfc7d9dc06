use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use coursepulse_engine::analysis::feedback::{CourseFeedback, CourseId, FeedbackCsvImporter};
use coursepulse_engine::analysis::report::views::CourseFeedbackSummary;
use coursepulse_engine::analysis::report::CourseFeedbackReport;
use coursepulse_engine::analysis::scoring::{priority_score, FactorScores, WeightVector};
use coursepulse_engine::config::AppConfig;
use coursepulse_engine::error::AppError;
use coursepulse_engine::telemetry;
use tracing::info;

#[derive(Parser, Debug)]
#[command(
    name = "Coursepulse",
    about = "Rank course improvement actions from learner feedback exports",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Aggregate a feedback export into ranked action items per course
    Actions(ActionsArgs),
    /// Score one recommendation's factor sub-scores with the configured weights
    Score(ScoreArgs),
}

#[derive(Args, Debug)]
struct ActionsArgs {
    /// Feedback CSV export to analyze
    #[arg(long)]
    feedback_csv: PathBuf,
    /// Restrict output to one course code
    #[arg(long)]
    course: Option<String>,
    /// Emit the summaries as JSON instead of text
    #[arg(long)]
    json: bool,
}

#[derive(Args, Debug)]
struct ScoreArgs {
    /// Impact sub-score (0-100)
    #[arg(long)]
    impact: f64,
    /// Urgency sub-score (0-100)
    #[arg(long)]
    urgency: f64,
    /// Effort sub-score (0-100, higher = more expensive to fix)
    #[arg(long)]
    effort: f64,
    /// Strategic-alignment sub-score (0-100)
    #[arg(long)]
    strategic: f64,
    /// Trend sub-score (0-100)
    #[arg(long)]
    trend: f64,
    /// Override the configured impact weight
    #[arg(long)]
    weight_impact: Option<f64>,
    /// Override the configured urgency weight
    #[arg(long)]
    weight_urgency: Option<f64>,
    /// Override the configured effort weight
    #[arg(long)]
    weight_effort: Option<f64>,
    /// Override the configured strategic weight
    #[arg(long)]
    weight_strategic: Option<f64>,
    /// Override the configured trend weight
    #[arg(long)]
    weight_trend: Option<f64>,
}

fn main() {
    if let Err(err) = run_cli() {
        eprintln!("application error: {err}");
        std::process::exit(1);
    }
}

fn run_cli() -> Result<(), AppError> {
    let cli = Cli::parse();
    let config = AppConfig::load()?;
    telemetry::init(&config.telemetry)?;

    match cli.command {
        Command::Actions(args) => run_actions(args),
        Command::Score(args) => run_score(args, &config),
    }
}

fn run_actions(args: ActionsArgs) -> Result<(), AppError> {
    let imported = FeedbackCsvImporter::from_path(&args.feedback_csv)?;
    let filter = args.course.as_deref().map(CourseId::normalized);

    let selected: Vec<CourseFeedback> = imported
        .into_iter()
        .filter(|feedback| filter.as_ref().map_or(true, |course| &feedback.course == course))
        .collect();

    if selected.is_empty() {
        println!("No feedback found for the requested course(s).");
        return Ok(());
    }

    info!(courses = selected.len(), "aggregating feedback");

    for feedback in &selected {
        let summary = CourseFeedbackReport::build(feedback).summary();
        if args.json {
            println!("{}", serde_json::to_string_pretty(&summary)?);
        } else {
            render_course_summary(&summary);
        }
    }

    Ok(())
}

fn run_score(args: ScoreArgs, config: &AppConfig) -> Result<(), AppError> {
    let weights = merged_weights(&args, &config.weights);
    let factors = FactorScores {
        impact: args.impact,
        urgency: args.urgency,
        effort: args.effort,
        strategic: args.strategic,
        trend: args.trend,
    };

    let score = priority_score(&factors, &weights)?;

    println!("Priority score: {score}");
    println!(
        "Weights: impact {}, urgency {}, effort {}, strategic {}, trend {}",
        weights.impact, weights.urgency, weights.effort, weights.strategic, weights.trend
    );
    Ok(())
}

fn merged_weights(args: &ScoreArgs, defaults: &WeightVector) -> WeightVector {
    WeightVector {
        impact: args.weight_impact.unwrap_or(defaults.impact),
        urgency: args.weight_urgency.unwrap_or(defaults.urgency),
        effort: args.weight_effort.unwrap_or(defaults.effort),
        strategic: args.weight_strategic.unwrap_or(defaults.strategic),
        trend: args.weight_trend.unwrap_or(defaults.trend),
    }
}

fn render_course_summary(summary: &CourseFeedbackSummary) {
    println!("\nCourse {}", summary.course.0);
    println!(
        "Reviews: {} (average rating {:.1}, {} show-stopper(s))",
        summary.total_reviews, summary.average_rating, summary.show_stoppers
    );

    if summary.severity_mix.is_empty() {
        println!("\nSeverity mix: none");
    } else {
        println!("\nSeverity mix");
        for entry in &summary.severity_mix {
            println!("- {}: {}", entry.severity_label, entry.count);
        }
    }

    if summary.action_items.is_empty() {
        println!("\nAction items: none");
        return;
    }

    println!("\nAction items");
    for item in &summary.action_items {
        println!(
            "- [{}] {} (impact {}, effort {}, priority {:.2})",
            item.priority_label, item.description, item.impact, item.effort, item.priority_score
        );
        for solution in &item.suggested_solutions {
            println!("  * {solution}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn score_args() -> ScoreArgs {
        ScoreArgs {
            impact: 80.0,
            urgency: 60.0,
            effort: 30.0,
            strategic: 50.0,
            trend: 40.0,
            weight_impact: None,
            weight_urgency: None,
            weight_effort: None,
            weight_strategic: None,
            weight_trend: None,
        }
    }

    #[test]
    fn merged_weights_fall_back_to_configured_defaults() {
        let defaults = WeightVector::default();
        let weights = merged_weights(&score_args(), &defaults);
        assert_eq!(weights, defaults);
    }

    #[test]
    fn merged_weights_apply_partial_overrides() {
        let mut args = score_args();
        args.weight_effort = Some(9.0);
        let defaults = WeightVector::default();
        let weights = merged_weights(&args, &defaults);
        assert_eq!(weights.effort, 9.0);
        assert_eq!(weights.impact, defaults.impact);
    }
}
