// ABOUTME: Meal-plan prompt construction from baseline or adjusted macro targets
// ABOUTME: Chat message types and the chat-completion collaborator boundary
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Meal-plan generation
//!
//! Targets are rendered into a two-message conversation (system role plus user
//! request) and handed to a [`ChatCompletionService`]. The service itself is an
//! external collaborator; this module only shapes its input and checks its output.

use crate::config::DEFAULT_CHAT_MODEL;
use crate::errors::{AppError, AppResult};
use crate::models::{BaselineMacros, BiometricSnapshot, DietType};
use crate::planner::DailyPlan;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

const DIETITIAN_ROLE: &str =
    "You are a sports dietitian that builds daily meal plans based on macros.";
const PERFORMANCE_ROLE: &str = "You are a high-performance nutritionist.";

// ============================================================================
// Message Types
// ============================================================================

/// Role of a message in the conversation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageRole {
    /// System instruction message
    System,
    /// User input message
    User,
    /// Assistant response message
    Assistant,
}

impl MessageRole {
    /// Convert to string representation for API calls
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::System => "system",
            Self::User => "user",
            Self::Assistant => "assistant",
        }
    }
}

/// A single message in a chat conversation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    /// Role of the message sender
    pub role: MessageRole,
    /// Content of the message
    pub content: String,
}

impl ChatMessage {
    /// Create a new chat message
    #[must_use]
    pub fn new(role: MessageRole, content: impl Into<String>) -> Self {
        Self {
            role,
            content: content.into(),
        }
    }

    /// Create a system message
    #[must_use]
    pub fn system(content: impl Into<String>) -> Self {
        Self::new(MessageRole::System, content)
    }

    /// Create a user message
    #[must_use]
    pub fn user(content: impl Into<String>) -> Self {
        Self::new(MessageRole::User, content)
    }

    /// Create an assistant message
    #[must_use]
    pub fn assistant(content: impl Into<String>) -> Self {
        Self::new(MessageRole::Assistant, content)
    }
}

/// Chat completion request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatRequest {
    /// Conversation messages
    pub messages: Vec<ChatMessage>,
    /// Model identifier
    pub model: String,
}

/// External chat-completion backend
#[async_trait]
pub trait ChatCompletionService: Send + Sync {
    /// Backend identifier (e.g. "openai")
    fn name(&self) -> &'static str;

    /// Complete the conversation and return the assistant's text
    ///
    /// # Errors
    ///
    /// Returns `EXTERNAL_SERVICE_ERROR` or `EXTERNAL_SERVICE_UNAVAILABLE` when
    /// the backend fails
    async fn complete(&self, request: &ChatRequest) -> AppResult<String>;
}

// ============================================================================
// Prompts
// ============================================================================

/// A meal-plan request ready to send
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MealPlanPrompt {
    system: String,
    user: String,
    model: String,
}

impl MealPlanPrompt {
    /// Four-meal plan for baseline targets
    #[must_use]
    pub fn from_baseline(diet_type: DietType, macros: &BaselineMacros) -> Self {
        let user = format!(
            "I need a daily meal plan for a {} diet with the following macros:\n\
             Protein: {}g\n\
             Carbs: {}g\n\
             Fat: {}g\n\
             Provide 4 meals for the day, including breakfast, lunch, dinner, and a snack.",
            diet_type.label(),
            macros.protein_g,
            macros.carbs_g,
            macros.fat_g,
        );
        Self {
            system: DIETITIAN_ROLE.to_owned(),
            user,
            model: DEFAULT_CHAT_MODEL.to_owned(),
        }
    }

    /// Performance plan for adjusted targets, with the day's context
    #[must_use]
    pub fn from_adjusted(
        plan: &DailyPlan,
        biometrics: &BiometricSnapshot,
        glucose_values: &[u32],
    ) -> Self {
        let macros = &plan.adjusted;
        let user = format!(
            "Create a 1-day performance meal plan using {:.0} kcal, {}g protein, {}g carbs, {}g fat. \
             User had {} hours sleep, strain score {}, and recovery score {}. \
             Glucose values: {glucose_values:?}. Adjust for blood sugar balance and performance.",
            macros.calories,
            macros.protein_g,
            macros.carbs_g,
            macros.fat_g,
            biometrics.sleep_hours,
            biometrics.strain,
            biometrics.recovery,
        );
        Self {
            system: PERFORMANCE_ROLE.to_owned(),
            user,
            model: DEFAULT_CHAT_MODEL.to_owned(),
        }
    }

    /// Use a different model
    #[must_use]
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Model to request
    #[must_use]
    pub fn model(&self) -> &str {
        &self.model
    }

    /// System then user message
    #[must_use]
    pub fn messages(&self) -> Vec<ChatMessage> {
        vec![
            ChatMessage::system(self.system.as_str()),
            ChatMessage::user(self.user.as_str()),
        ]
    }

    /// Request for a chat-completion backend
    #[must_use]
    pub fn to_request(&self) -> ChatRequest {
        ChatRequest {
            messages: self.messages(),
            model: self.model.clone(),
        }
    }
}

/// Ask a chat-completion backend for a meal plan
///
/// # Errors
///
/// Propagates backend errors, and returns `EXTERNAL_SERVICE_ERROR` when the
/// backend answers with only whitespace
#[instrument(skip_all, fields(service = service.name(), model = prompt.model()))]
pub async fn generate_meal_plan(
    service: &dyn ChatCompletionService,
    prompt: &MealPlanPrompt,
) -> AppResult<String> {
    let response = service.complete(&prompt.to_request()).await?;
    let plan = response.trim();
    if plan.is_empty() {
        return Err(AppError::external_service(
            service.name(),
            "returned an empty meal plan",
        ));
    }
    debug!(chars = plan.len(), "Received meal plan");
    Ok(plan.to_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_baseline_prompt_roles_and_order() {
        let prompt =
            MealPlanPrompt::from_baseline(DietType::LowCarb, &BaselineMacros::new(2000.0, 150, 75, 120));
        let messages = prompt.messages();
        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0].role, MessageRole::System);
        assert_eq!(messages[1].role, MessageRole::User);
        assert!(messages[1].content.contains("Low Carb diet"));
        assert!(messages[1].content.contains("Carbs: 75g"));
        assert_eq!(prompt.model(), DEFAULT_CHAT_MODEL);
    }
}
