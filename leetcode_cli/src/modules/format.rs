//! Output rendering for fetched questions and user statistics. Every format
//! is a pure function from domain entities to a string; file writing happens
//! in the command layer.

use crate::modules::utils::{column_widths, terminal_width, truncate_with_ellipsis};
use anyhow::Result;
use clap::ValueEnum;
use leetcode_cli_libs::types::{Question, UserInfo};
use serde_json::{json, Value};
use std::collections::BTreeMap;
use std::fmt::Write;

#[derive(Debug, ValueEnum, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Table,
    Summary,
    Wide,
    Json,
    Csv,
}

pub fn render(format: OutputFormat, questions: &[Question]) -> Result<String> {
    let rendered = match format {
        OutputFormat::Table => format_table(questions),
        OutputFormat::Summary => format_summary(questions, terminal_width()),
        OutputFormat::Wide => format_wide(questions, terminal_width()),
        OutputFormat::Json => serde_json::to_string_pretty(&export_document(questions))?,
        OutputFormat::Csv => format_csv(questions),
    };
    Ok(rendered)
}

/// One block per question with labeled fields.
pub fn format_table(questions: &[Question]) -> String {
    if questions.is_empty() {
        return String::from("No questions found.");
    }

    let rule = "=".repeat(60);
    let mut out = String::new();
    for (i, q) in questions.iter().enumerate() {
        let topics = if q.topics.is_empty() {
            String::from("None")
        } else {
            q.topics.join(", ")
        };

        let _ = writeln!(out, "{}", rule);
        let _ = writeln!(out, "Question #{}", i + 1);
        let _ = writeln!(out, "ID             : {}", q.id);
        let _ = writeln!(out, "Title          : {}", q.title);
        let _ = writeln!(out, "Difficulty     : {}", q.difficulty);
        let _ = writeln!(out, "Status         : {}", q.status_label());
        let _ = writeln!(out, "Topics         : {}", topics);
        let _ = writeln!(out, "Acceptance Rate: {:.1}%", q.acceptance_rate);
        let _ = writeln!(out, "Paid Only      : {}", if q.is_paid_only { "Yes" } else { "No" });
        let _ = writeln!(out, "URL            : {}", q.url());
        let _ = writeln!(out);
    }
    let _ = writeln!(out, "{}", rule);
    let _ = write!(out, "Total Questions: {}", questions.len());
    out
}

/// One line per question, title column sized to the terminal.
pub fn format_summary(questions: &[Question], terminal_width: usize) -> String {
    if questions.is_empty() {
        return String::from("No questions found.");
    }

    let w = column_widths(terminal_width);
    let rule = "-".repeat(w.total());
    let mut out = String::new();

    let _ = writeln!(
        out,
        "{:<idw$} {:<titlew$} {:<diffw$} {:<statusw$} {:<ratew$}",
        "ID",
        "Title",
        "Difficulty",
        "Status",
        "Rate",
        idw = w.id,
        titlew = w.title,
        diffw = w.difficulty,
        statusw = w.status,
        ratew = w.rate,
    );
    let _ = writeln!(out, "{}", rule);

    for q in questions {
        let _ = writeln!(
            out,
            "{:<idw$} {:<titlew$} {:<diffw$} {:<statusw$} {:<ratew$}",
            truncate_with_ellipsis(&q.id, w.id),
            truncate_with_ellipsis(&q.title, w.title),
            q.difficulty.as_str(),
            truncate_with_ellipsis(q.status_label(), w.status),
            format!("{:.1}%", q.acceptance_rate),
            idw = w.id,
            titlew = w.title,
            diffw = w.difficulty,
            statusw = w.status,
            ratew = w.rate,
        );
    }

    let _ = writeln!(out, "{}", rule);
    let _ = write!(out, "Total Questions: {}", questions.len());
    out
}

/// Summary layout extended with topics and the problem URL. Title and topics
/// share the width left over by the fixed columns.
pub fn format_wide(questions: &[Question], terminal_width: usize) -> String {
    if questions.is_empty() {
        return String::from("No questions found.");
    }

    const ID: usize = 6;
    const DIFFICULTY: usize = 10;
    const STATUS: usize = 12;
    const RATE: usize = 8;
    const SEPARATORS: usize = 6;
    const MIN_TITLE: usize = 20;
    const MIN_TOPICS: usize = 16;

    let remaining = terminal_width.saturating_sub(ID + DIFFICULTY + STATUS + RATE + SEPARATORS);
    let title_w = (remaining * 3 / 5).max(MIN_TITLE);
    let topics_w = remaining.saturating_sub(title_w).max(MIN_TOPICS);
    let rule_width = ID + title_w + DIFFICULTY + STATUS + RATE + topics_w + SEPARATORS;
    let rule = "-".repeat(rule_width);

    let mut out = String::new();
    let _ = writeln!(
        out,
        "{:<ID$} {:<title_w$} {:<DIFFICULTY$} {:<STATUS$} {:<RATE$} {:<topics_w$} {}",
        "ID", "Title", "Difficulty", "Status", "Rate", "Topics", "URL",
    );
    let _ = writeln!(out, "{}", rule);

    for q in questions {
        let topics = if q.topics.is_empty() {
            String::from("None")
        } else {
            q.topics.join(", ")
        };
        let _ = writeln!(
            out,
            "{:<ID$} {:<title_w$} {:<DIFFICULTY$} {:<STATUS$} {:<RATE$} {:<topics_w$} {}",
            truncate_with_ellipsis(&q.id, ID),
            truncate_with_ellipsis(&q.title, title_w),
            q.difficulty.as_str(),
            truncate_with_ellipsis(q.status_label(), STATUS),
            format!("{:.1}%", q.acceptance_rate),
            truncate_with_ellipsis(&topics, topics_w),
            q.url(),
        );
    }

    let _ = writeln!(out, "{}", rule);
    let _ = write!(out, "Total Questions: {}", questions.len());
    out
}

fn export_record(q: &Question) -> Value {
    json!({
        "id": q.id,
        "title": q.title,
        "difficulty": q.difficulty.as_str(),
        "status": q.status.map(|status| status.as_str()),
        "topics": q.topics,
        "acceptance_rate": q.acceptance_rate,
        "is_paid_only": q.is_paid_only,
        "frequency": q.frequency,
        "url": q.url(),
    })
}

fn export_document(questions: &[Question]) -> Value {
    json!({
        "total_count": questions.len(),
        "questions": questions.iter().map(export_record).collect::<Vec<_>>(),
    })
}

fn csv_field(value: &str) -> String {
    if value.contains(',') || value.contains('"') || value.contains('\n') || value.contains('\r') {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}

pub fn format_csv(questions: &[Question]) -> String {
    if questions.is_empty() {
        return String::from("No questions found.");
    }

    let mut out = String::from("ID,Title,Difficulty,Status,Topics,Acceptance Rate,Paid Only,URL\n");
    for q in questions {
        let topics = q.topics.join("; ");
        let fields = [
            csv_field(&q.id),
            csv_field(&q.title),
            csv_field(q.difficulty.as_str()),
            csv_field(q.status_label()),
            csv_field(&topics),
            format!("{}", q.acceptance_rate),
            format!("{}", q.is_paid_only),
            csv_field(&q.url()),
        ];
        out.push_str(&fields.join(","));
        out.push('\n');
    }
    out
}

pub fn format_user_info(user: &UserInfo) -> String {
    let mut out = format!("User: {}", user.username);
    if !user.solved_counts.is_empty() {
        out.push_str("\nSolved Problems:");
        for (difficulty, count) in &user.solved_counts {
            let _ = write!(out, "\n  {}: {}", difficulty, count);
        }
        let _ = write!(out, "\n  Total: {}", user.total_solved());
    }
    out
}

/// Counts and percentages by difficulty and by status, sorted by label.
pub fn format_statistics(questions: &[Question]) -> String {
    if questions.is_empty() {
        return String::from("No questions to analyze.");
    }

    let mut difficulty_counts: BTreeMap<&str, usize> = BTreeMap::new();
    let mut status_counts: BTreeMap<&str, usize> = BTreeMap::new();
    for q in questions {
        *difficulty_counts.entry(q.difficulty.as_str()).or_default() += 1;
        *status_counts.entry(q.status_label()).or_default() += 1;
    }

    let total = questions.len();
    let mut out = String::from("Question Statistics:\n");
    out.push_str(&"-".repeat(30));

    out.push_str("\nBy Difficulty:");
    for (difficulty, count) in &difficulty_counts {
        let percentage = (*count as f64 / total as f64) * 100.0;
        let _ = write!(out, "\n  {}: {} ({:.1}%)", difficulty, count, percentage);
    }

    out.push_str("\n\nBy Status:");
    for (status, count) in &status_counts {
        let percentage = (*count as f64 / total as f64) * 100.0;
        let _ = write!(out, "\n  {}: {} ({:.1}%)", status, count, percentage);
    }

    let _ = write!(out, "\n\nTotal Questions: {}", total);
    out
}

#[cfg(test)]
mod test {
    use super::*;
    use leetcode_cli_libs::filter::{Difficulty, QuestionStatus};

    fn sample_questions() -> Vec<Question> {
        vec![
            Question {
                id: String::from("1"),
                title: String::from("Two Sum"),
                title_slug: String::from("two-sum"),
                difficulty: Difficulty::Easy,
                status: Some(QuestionStatus::Solved),
                topics: vec![String::from("Array"), String::from("Hash Table")],
                acceptance_rate: 51.3,
                is_paid_only: false,
                frequency: Some(0.8),
            },
            Question {
                id: String::from("4"),
                title: String::from("Median of Two Sorted Arrays"),
                title_slug: String::from("median-of-two-sorted-arrays"),
                difficulty: Difficulty::Hard,
                status: None,
                topics: vec![],
                acceptance_rate: 38.2,
                is_paid_only: true,
                frequency: None,
            },
        ]
    }

    #[test]
    fn test_table_lists_every_field() {
        let out = format_table(&sample_questions());

        assert!(out.contains("Question #1"));
        assert!(out.contains("ID             : 1"));
        assert!(out.contains("Title          : Two Sum"));
        assert!(out.contains("Status         : SOLVED"));
        assert!(out.contains("Topics         : Array, Hash Table"));
        assert!(out.contains("Acceptance Rate: 51.3%"));
        assert!(out.contains("Status         : Not Attempted"));
        assert!(out.contains("Topics         : None"));
        assert!(out.contains("Paid Only      : Yes"));
        assert!(out.contains("URL            : https://leetcode.com/problems/two-sum"));
        assert!(out.ends_with("Total Questions: 2"));
    }

    #[test]
    fn test_summary_uses_terminal_width() {
        let out = format_summary(&sample_questions(), 80);
        let mut lines = out.lines();

        let header = lines.next().unwrap();
        assert!(header.starts_with("ID"));
        assert!(header.contains("Title"));
        assert!(header.contains("Rate"));
        assert_eq!(lines.next().unwrap(), "-".repeat(80));
        assert!(out.contains("Two Sum"));
        assert!(out.ends_with("Total Questions: 2"));
    }

    #[test]
    fn test_summary_truncates_long_titles_on_narrow_terminal() {
        let out = format_summary(&sample_questions(), 40);
        // Narrow terminal clamps the title column at its minimum of 20.
        assert!(out.contains("Median of Two Sor..."));
    }

    #[test]
    fn test_wide_includes_topics_and_url() {
        let out = format_wide(&sample_questions(), 140);
        assert!(out.contains("Topics"));
        assert!(out.contains("Array, Hash Table"));
        assert!(out.contains("https://leetcode.com/problems/median-of-two-sorted-arrays"));
    }

    #[test]
    fn test_json_document_shape() {
        let doc = export_document(&sample_questions());

        assert_eq!(doc["total_count"], 2);
        let first = &doc["questions"][0];
        assert_eq!(first["id"], "1");
        assert_eq!(first["difficulty"], "Easy");
        assert_eq!(first["status"], "SOLVED");
        assert_eq!(first["url"], "https://leetcode.com/problems/two-sum");
        let second = &doc["questions"][1];
        assert_eq!(second["status"], Value::Null);
        assert_eq!(second["frequency"], Value::Null);
        assert_eq!(second["topics"], json!([]));
    }

    #[test]
    fn test_csv_escapes_and_joins_topics() {
        let mut questions = sample_questions();
        questions[0].title = String::from("Sum, \"quoted\"");
        let out = format_csv(&questions);
        let mut lines = out.lines();

        assert_eq!(
            lines.next().unwrap(),
            "ID,Title,Difficulty,Status,Topics,Acceptance Rate,Paid Only,URL"
        );
        let row = lines.next().unwrap();
        assert!(row.contains("\"Sum, \"\"quoted\"\"\""));
        assert!(row.contains("Array; Hash Table"));
        assert!(row.contains("51.3"));
    }

    #[test]
    fn test_user_info_rendering() {
        let user = UserInfo {
            username: String::from("alice"),
            solved_counts: vec![
                (Difficulty::Easy, 50),
                (Difficulty::Medium, 30),
                (Difficulty::Hard, 10),
            ],
        };

        let out = format_user_info(&user);
        assert_eq!(
            out,
            "User: alice\nSolved Problems:\n  Easy: 50\n  Medium: 30\n  Hard: 10\n  Total: 90"
        );
    }

    #[test]
    fn test_user_info_without_counts() {
        let user = UserInfo {
            username: String::from("bob"),
            solved_counts: vec![],
        };
        assert_eq!(format_user_info(&user), "User: bob");
    }

    #[test]
    fn test_statistics_counts_and_percentages() {
        let out = format_statistics(&sample_questions());

        assert!(out.starts_with("Question Statistics:"));
        assert!(out.contains("  Easy: 1 (50.0%)"));
        assert!(out.contains("  Hard: 1 (50.0%)"));
        assert!(out.contains("  SOLVED: 1 (50.0%)"));
        assert!(out.contains("  Not Attempted: 1 (50.0%)"));
        assert!(out.ends_with("Total Questions: 2"));
    }

    #[test]
    fn test_empty_inputs() {
        assert_eq!(format_table(&[]), "No questions found.");
        assert_eq!(format_summary(&[], 80), "No questions found.");
        assert_eq!(format_csv(&[]), "No questions found.");
        assert_eq!(format_statistics(&[]), "No questions to analyze.");
    }
}
