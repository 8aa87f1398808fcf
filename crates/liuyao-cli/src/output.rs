//! Output formatting for the CLI.

use crate::config::{Notation, OutputFormat};
use crate::error::Result;
use colored::*;
use liuyao_domain::{Branch, Element, Relation, StrengthScore};
use liuyao_quantify::{QuantificationReport, StrengthIndex};
use serde_json::json;
use tabled::{
    builder::Builder,
    settings::{object::Rows, Alignment, Modify, Style},
};

/// Output formatter.
pub struct Formatter {
    format: OutputFormat,
    color_enabled: bool,
    notation: Notation,
}

impl Formatter {
    /// Create a new formatter.
    pub fn new(format: OutputFormat, color_enabled: bool, notation: Notation) -> Self {
        Self {
            format,
            color_enabled,
            notation,
        }
    }

    /// Format a single strength score.
    pub fn format_score(&self, month: Branch, day: Branch, target: Branch, score: StrengthScore) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(&json!({
                "month": month,
                "day": day,
                "target": target,
                "month_score": score.month,
                "day_score": score.day,
                "total": score.total(),
            }))?),
            OutputFormat::Quiet => Ok(score.total().to_string()),
            OutputFormat::Table => {
                let mut builder = Builder::default();
                builder.push_record(["", "Branch", "Element", "Relation", "Score"]);
                for (label, reference, points) in [("Month", month, score.month), ("Day", day, score.day)] {
                    let relation = reference.element().relation_to(target.element());
                    builder.push_record([
                        label.to_string(),
                        self.branch(reference).to_string(),
                        self.element(reference.element()).to_string(),
                        relation.describe().to_string(),
                        self.signed(points),
                    ]);
                }
                builder.push_record([
                    "Target".to_string(),
                    self.branch(target).to_string(),
                    self.element(target.element()).to_string(),
                    "total".to_string(),
                    self.signed(score.total()),
                ]);
                Ok(self.render(builder))
            }
        }
    }

    /// Format a quantification report.
    pub fn format_report(&self, report: &QuantificationReport) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(report)?),
            OutputFormat::Quiet => {
                let totals: Vec<String> = std::iter::once(&report.useful_spirit)
                    .chain(report.moving_lines.iter())
                    .map(|index| index.total().to_string())
                    .collect();
                Ok(totals.join("\n"))
            }
            OutputFormat::Table => {
                let mut builder = Builder::default();
                builder.push_record(["Line", "Branch", "Element", "Month", "Day", "Total"]);
                self.push_index(&mut builder, "Useful spirit".to_string(), &report.useful_spirit);
                for (i, line) in report.moving_lines.iter().enumerate() {
                    self.push_index(&mut builder, format!("Moving line {}", i + 1), line);
                }

                let header = format!(
                    "Month {} ({})  Day {} ({})",
                    self.branch(report.month),
                    self.element(report.month.element()),
                    self.branch(report.day),
                    self.element(report.day.element()),
                );
                Ok(format!(
                    "{}\n{}\n{}",
                    header,
                    self.render(builder),
                    self.info(&report.summary())
                ))
            }
        }
    }

    /// Format the branch table.
    pub fn format_branches(&self) -> Result<String> {
        match self.format {
            OutputFormat::Json => {
                let rows: Vec<serde_json::Value> = Branch::ALL
                    .iter()
                    .map(|b| json!({ "branch": b, "pinyin": b.pinyin(), "element": b.element() }))
                    .collect();
                Ok(serde_json::to_string_pretty(&rows)?)
            }
            OutputFormat::Quiet => Ok(Branch::ALL.iter().map(|b| self.branch(*b)).collect::<Vec<_>>().join(" ")),
            OutputFormat::Table => {
                let mut builder = Builder::default();
                builder.push_record(["Branch", "Pinyin", "Element"]);
                for b in Branch::ALL {
                    builder.push_record([b.hanzi(), b.pinyin(), self.element(b.element())]);
                }
                Ok(self.render(builder))
            }
        }
    }

    /// Format an element relation.
    pub fn format_relation(&self, reference: Element, target: Element, relation: Relation) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(&json!({
                "reference": reference,
                "target": target,
                "relation": relation,
                "points": relation.points(),
            }))?),
            OutputFormat::Quiet => Ok(relation.points().to_string()),
            OutputFormat::Table => Ok(format!(
                "{} → {}: {} ({})",
                self.element(reference),
                self.element(target),
                relation.describe(),
                self.signed(relation.points())
            )),
        }
    }

    /// Format a success message.
    pub fn success(&self, message: &str) -> String {
        self.colorize(&format!("✓ {}", message), "green")
    }

    /// Format an error message.
    pub fn error(&self, message: &str) -> String {
        self.colorize(&format!("✗ {}", message), "red")
    }

    /// Format an info message.
    pub fn info(&self, message: &str) -> String {
        self.colorize(&format!("ℹ {}", message), "blue")
    }

    /// Format a warning message.
    pub fn warning(&self, message: &str) -> String {
        self.colorize(&format!("⚠ {}", message), "yellow")
    }

    fn push_index(&self, builder: &mut Builder, label: String, index: &StrengthIndex) {
        builder.push_record([
            label,
            self.branch(index.branch).to_string(),
            self.element(index.branch.element()).to_string(),
            self.signed(index.month_score()),
            self.signed(index.day_score()),
            self.signed(index.total()),
        ]);
    }

    fn render(&self, builder: Builder) -> String {
        let mut table = builder.build();
        table
            .with(Style::rounded())
            .with(Modify::new(Rows::first()).with(Alignment::center()));
        table.to_string()
    }

    fn branch(&self, branch: Branch) -> &'static str {
        match self.notation {
            Notation::Hanzi => branch.hanzi(),
            Notation::Pinyin => branch.pinyin(),
        }
    }

    fn element(&self, element: Element) -> &'static str {
        match self.notation {
            Notation::Hanzi => element.hanzi(),
            Notation::Pinyin => element.as_str(),
        }
    }

    /// Signed score, green when positive and red when negative.
    fn signed(&self, value: i32) -> String {
        let text = format!("{:+}", value);
        match value.signum() {
            1 => self.colorize(&text, "green"),
            -1 => self.colorize(&text, "red"),
            _ => text,
        }
    }

    /// Colorize text if color is enabled.
    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.color_enabled {
            return text.to_string();
        }

        match color {
            "red" => text.red().to_string(),
            "green" => text.green().to_string(),
            "blue" => text.blue().to_string(),
            "yellow" => text.yellow().to_string(),
            _ => text.to_string(),
        }
    }
}
