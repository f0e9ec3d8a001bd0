//! Challenge-quiz collaborator
//!
//! Loads a JSON document of topics with worked examples and exercises, tracks
//! which topic is shown, and checks submitted solutions. Challenge panels get
//! the rendered markup; the layout core only provides the container.

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::util::escape_html;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChallengeDocument {
    pub topics: Vec<Topic>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Topic {
    pub topic: String,
    pub description: String,
    pub example: Example,
    pub exercise: Exercise,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Example {
    /// Source lines
    pub code: Vec<String>,
    pub explanation: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Exercise {
    pub prompt: String,
    /// Expected solution, one entry per line
    pub solution: Vec<String>,
}

/// Result of checking a submitted solution
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Correct,
    Incorrect,
}

impl Verdict {
    pub fn message(&self) -> &'static str {
        match self {
            Verdict::Correct => "Correct! Well done!",
            Verdict::Incorrect => "Incorrect. Try again!",
        }
    }
}

/// Parse a challenge document from JSON text
pub fn parse_document(json: &str) -> Result<ChallengeDocument> {
    serde_json::from_str(json).context("Malformed challenge document")
}

/// Load a challenge document from a file path or an http(s) URL
pub fn load_document(source: &str) -> Result<ChallengeDocument> {
    let text = if source.starts_with("http://") || source.starts_with("https://") {
        reqwest::blocking::get(source)
            .with_context(|| format!("Failed to fetch {}", source))?
            .error_for_status()?
            .text()
            .with_context(|| format!("Failed to read body of {}", source))?
    } else {
        std::fs::read_to_string(Path::new(source))
            .with_context(|| format!("Failed to read {}", source))?
    };
    parse_document(&text)
}

// ============================================================================
// State
// ============================================================================

#[derive(Debug, Clone, Default)]
pub struct ChallengeState {
    pub document: Option<ChallengeDocument>,
    /// Index of the topic currently shown
    pub current: usize,
    /// Outcome of the last submission for the current topic
    pub feedback: Option<Verdict>,
}

impl ChallengeState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Install a freshly loaded document, keeping the position when possible
    pub fn set_document(&mut self, document: ChallengeDocument) {
        let last = document.topics.len().saturating_sub(1);
        self.current = self.current.min(last);
        self.document = Some(document);
        self.feedback = None;
    }

    pub fn current_topic(&self) -> Option<&Topic> {
        self.document.as_ref()?.topics.get(self.current)
    }

    pub fn has_previous(&self) -> bool {
        self.document.is_some() && self.current > 0
    }

    pub fn has_next(&self) -> bool {
        self.document
            .as_ref()
            .is_some_and(|doc| self.current + 1 < doc.topics.len())
    }

    /// Go to the next topic. Returns false at the last one.
    pub fn next(&mut self) -> bool {
        if !self.has_next() {
            return false;
        }
        self.current += 1;
        self.feedback = None;
        true
    }

    /// Go to the previous topic. Returns false at the first one.
    pub fn previous(&mut self) -> bool {
        if !self.has_previous() {
            return false;
        }
        self.current -= 1;
        self.feedback = None;
        true
    }

    /// Check a solution for the current topic.
    /// Surrounding whitespace is ignored; lines are compared joined by `\n`.
    pub fn submit(&mut self, solution: &str) -> Option<Verdict> {
        let expected = self.current_topic()?.exercise.solution.join("\n");
        let verdict = if solution.trim() == expected.trim() {
            Verdict::Correct
        } else {
            Verdict::Incorrect
        };
        self.feedback = Some(verdict);
        Some(verdict)
    }

    /// Render the current topic as panel markup (empty until loaded)
    pub fn render_html(&self) -> String {
        let Some(topic) = self.current_topic() else {
            return String::new();
        };

        let mut out = format!(
            "<h3>{}</h3>\n<p>{}</p>\n<h4>Example:</h4>\n<pre class=\"code-block\"><code>{}</code></pre>\n<p>{}</p>\n<h4>Exercise:</h4>\n<p>{}</p>\n<textarea class=\"solution\" rows=\"5\" cols=\"50\"></textarea>\n<button class=\"submit-solution\">Submit Solution</button>\n<h4>Feedback:</h4>\n<pre class=\"challenge-output\">{}</pre>\n",
            escape_html(&topic.topic),
            escape_html(&topic.description),
            escape_html(&topic.example.code.join("\n")),
            escape_html(&topic.example.explanation),
            escape_html(&topic.exercise.prompt),
            self.feedback.map(|v| v.message()).unwrap_or_default(),
        );
        if self.has_previous() {
            out.push_str("<button class=\"prev-challenge\">Previous Challenge</button>\n");
        }
        if self.has_next() {
            out.push_str("<button class=\"next-challenge\">Next Challenge</button>\n");
        }
        out
    }
}
