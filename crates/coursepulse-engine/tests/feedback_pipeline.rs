//! End-to-end coverage of the feedback pipeline: CSV export in, classified
//! and ranked action items out, all through the public facade.

use std::io::Cursor;

use coursepulse_engine::analysis::classify::IssueCategory;
use coursepulse_engine::analysis::feedback::{CourseId, FeedbackCsvImporter};
use coursepulse_engine::analysis::report::CourseFeedbackReport;

const HEADER: &str =
    "Course,Rating,Positive Feedback,Improvement Feedback,Show Stopper Feedback,Show Stopper,Submitted At\n";

fn import(rows: &str) -> Vec<coursepulse_engine::analysis::feedback::CourseFeedback> {
    FeedbackCsvImporter::from_reader(Cursor::new(format!("{HEADER}{rows}")))
        .expect("fixture export parses")
}

fn technical_rows(count: usize) -> String {
    (0..count)
        .map(|n| format!("RUST-101,2,,Video keeps freezing in lesson {n},,no,2026-01-10\n"))
        .collect()
}

fn quiet_rows(count: usize) -> String {
    (0..count)
        .map(|_| "RUST-101,5,Great course,,,no,2026-01-11\n".to_string())
        .collect()
}

#[test]
fn export_flows_through_to_ranked_action_items() {
    let rows = format!("{}{}", technical_rows(6), quiet_rows(4));
    let imported = import(&rows);
    assert_eq!(imported.len(), 1);

    let report = CourseFeedbackReport::build(&imported[0]);
    let summary = report.summary();

    assert_eq!(summary.total_reviews, 10);
    let technical = summary
        .action_items
        .iter()
        .find(|item| item.category == IssueCategory::Technical)
        .expect("technical action item");

    // Six of ten reviews: impact floor(6)+2 = 8, effort floor(8*1.2) = 9.
    assert_eq!(technical.count, 6);
    assert_eq!(technical.impact, 8);
    assert_eq!(technical.effort, 9);
    assert_eq!(technical.priority_label, "medium");
    assert!(!technical.suggested_solutions.is_empty());
    assert_eq!(technical.examples.len(), 3);
}

#[test]
fn courses_are_reported_independently() {
    let rows = "RUST-101,2,,The examples are outdated,,no,\n\
                SQL-200,1,,,Grader is down for everyone,yes,\n\
                RUST-101,4,Solid pacing,,,no,\n";
    let imported = import(rows);
    assert_eq!(imported.len(), 2);

    let rust = CourseFeedbackReport::build(&imported[0]).summary();
    assert_eq!(rust.course, CourseId("RUST-101".to_string()));
    assert_eq!(rust.total_reviews, 2);
    assert_eq!(rust.show_stoppers, 0);
    assert!(rust
        .action_items
        .iter()
        .any(|item| item.category == IssueCategory::Content));

    let sql = CourseFeedbackReport::build(&imported[1]).summary();
    assert_eq!(sql.course, CourseId("SQL-200".to_string()));
    assert_eq!(sql.show_stoppers, 1);
    assert_eq!(sql.severity_mix[0].severity_label, "Critical");
}

#[test]
fn action_items_rank_cheap_widespread_fixes_first() {
    // Everyone complains about outdated content; one person hit a crash.
    let rows = "RUST-101,3,,Outdated material in every module,,no,\n\
                RUST-101,3,,Outdated screenshots too,,no,\n\
                RUST-101,3,,So outdated it hurts,,no,\n\
                RUST-101,2,,The editor crashed once,,no,\n";
    let imported = import(rows);
    let report = CourseFeedbackReport::build(&imported[0]);

    let items = report.action_items();
    assert!(items.len() >= 2);
    assert_eq!(items[0].category, IssueCategory::Content);
    for pair in items.windows(2) {
        assert!(pair[0].priority_score >= pair[1].priority_score);
    }
}

#[test]
fn empty_course_set_produces_no_reports() {
    let imported = import("");
    assert!(imported.is_empty());
}
