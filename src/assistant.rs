// ABOUTME: Keyword-driven glucose assistant answering questions about an analyzed day
// ABOUTME: Records question/answer turns into a transcript serializable as JSON
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::errors::AppResult;
use crate::meal_plan::ChatMessage;
use crate::models::MacroTargets;
use chrono::{DateTime, Utc};
use nutriai_intelligence::glucose::GlucoseAnalysis;

const USAGE_HINT: &str = "Ask about spikes, lows, macros, or recommendation.";

/// Answer a free-text question about the day
///
/// Keywords are matched case-insensitively in priority order: "spike", "low",
/// "macro", "recommendation". Spike and low answers describe the most recent event.
#[must_use]
pub fn answer(question: &str, analysis: &GlucoseAnalysis, macros: &MacroTargets) -> String {
    let question = question.to_lowercase();

    if question.contains("spike") {
        analysis.spikes.last().map_or_else(
            || "No spikes were recorded today.".to_owned(),
            |spike| {
                format!(
                    "You had a glucose spike from {} to {} with a +{} mg/dL increase.",
                    spike.from_time, spike.to_time, spike.delta
                )
            },
        )
    } else if question.contains("low") {
        analysis.lows.last().map_or_else(
            || "No glucose lows today.".to_owned(),
            |low| {
                format!(
                    "You had a low at {} with {} mg/dL. Try a protein+fat snack.",
                    low.time, low.value
                )
            },
        )
    } else if question.contains("macro") {
        format!(
            "Today's macros are: Protein {}g, Carbs {}g, Fat {}g.",
            macros.protein_g, macros.carbs_g, macros.fat_g
        )
    } else if question.contains("recommendation") {
        analysis.recommendation.clone()
    } else {
        USAGE_HINT.to_owned()
    }
}

/// Conversation with the assistant for one user
#[derive(Debug, Clone)]
pub struct ChatTranscript {
    user_id: String,
    started_at: DateTime<Utc>,
    messages: Vec<ChatMessage>,
}

impl ChatTranscript {
    /// Start an empty transcript now
    #[must_use]
    pub fn new(user_id: impl Into<String>) -> Self {
        Self::started_at(user_id, Utc::now())
    }

    /// Start an empty transcript at a given instant
    #[must_use]
    pub fn started_at(user_id: impl Into<String>, started_at: DateTime<Utc>) -> Self {
        Self {
            user_id: user_id.into(),
            started_at,
            messages: Vec::new(),
        }
    }

    /// Ask a question, record both turns, and return the reply
    pub fn ask(
        &mut self,
        question: &str,
        analysis: &GlucoseAnalysis,
        macros: &MacroTargets,
    ) -> &str {
        let reply = answer(question, analysis, macros);
        let reply_index = self.messages.len() + 1;
        self.messages.push(ChatMessage::user(question));
        self.messages.push(ChatMessage::assistant(reply));
        &self.messages[reply_index].content
    }

    /// Recorded turns in order
    #[must_use]
    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    /// Suggested log file name, `<user>_<YYYY-MM-DD_HH-MM-SS>.json`
    #[must_use]
    pub fn file_name(&self) -> String {
        format!(
            "{}_{}.json",
            self.user_id,
            self.started_at.format("%Y-%m-%d_%H-%M-%S")
        )
    }

    /// Turns as a pretty-printed JSON array
    ///
    /// # Errors
    ///
    /// Returns `SERIALIZATION_ERROR` if serialization fails
    pub fn to_json(&self) -> AppResult<String> {
        Ok(serde_json::to_string_pretty(&self.messages)?)
    }
}
