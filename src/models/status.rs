//! Status values and their display style.

use ansi_term::{Colour, Style};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Status {
    InProgress,
    OnHold,
    Completed,
    Planned,
    Other(String),
}

/// Display style: a class name plus the terminal style used for badges.
#[derive(Debug, Clone, PartialEq)]
pub struct StatusStyle {
    pub class: String,
    pub style: Style,
}

impl Status {
    /// Choices offered by the project form, first one is the default.
    pub const PROJECT_CHOICES: [Status; 4] = [
        Status::InProgress,
        Status::OnHold,
        Status::Completed,
        Status::Planned,
    ];

    /// Choices offered by the sprint goal form, first one is the default.
    pub const SPRINT_CHOICES: [Status; 4] = [
        Status::InProgress,
        Status::Planned,
        Status::Completed,
        Status::OnHold,
    ];

    pub fn parse(s: &str) -> Self {
        match s {
            "In Progress" => Status::InProgress,
            "On Hold" => Status::OnHold,
            "Completed" => Status::Completed,
            "Planned" => Status::Planned,
            other => Status::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Status::InProgress => "In Progress",
            Status::OnHold => "On Hold",
            Status::Completed => "Completed",
            Status::Planned => "Planned",
            Status::Other(s) => s,
        }
    }

    /// `status-in-progress`, `status-on-hold`, ... derived from the literal text.
    pub fn class(&self) -> String {
        format!("status-{}", self.as_str().to_lowercase().replace(' ', "-"))
    }

    pub fn style(&self) -> StatusStyle {
        let style = match self {
            Status::InProgress => Colour::RGB(21, 101, 192).bold(),
            Status::OnHold => Colour::RGB(239, 108, 0).bold(),
            Status::Completed => Colour::RGB(46, 125, 50).bold(),
            Status::Planned => Colour::RGB(123, 31, 162).bold(),
            Status::Other(_) => Style::new(),
        };
        StatusStyle {
            class: self.class(),
            style,
        }
    }

    /// `[In Progress]`, painted with the status style.
    pub fn badge(&self) -> String {
        self.style()
            .style
            .paint(format!("[{}]", self.as_str()))
            .to_string()
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
