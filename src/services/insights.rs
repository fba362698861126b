use crate::domain::metrics::UserMetrics;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Info,
    Success,
    Warning,
}

impl Severity {
    pub fn icon(&self) -> &'static str {
        match self {
            Self::Info => "ℹ️",
            Self::Success => "✅",
            Self::Warning => "⚠️",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Info => "info",
            Self::Success => "success",
            Self::Warning => "warning",
        }
    }
}

/// A single user-facing recommendation, tagged for display.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Advisory {
    pub message: String,
    pub severity: Severity,
}

impl Advisory {
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            severity: Severity::Info,
        }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            severity: Severity::Success,
        }
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            severity: Severity::Warning,
        }
    }
}

pub const INVALID_INPUT_MESSAGE: &str =
    "Please enter valid data. Your weight should be between 30 and 200 kg.";

pub const ALL_CLEAR_MESSAGE: &str =
    "You are on a great path! Your data suggests a healthy balance. Keep up the positive habits!";

/// Map validated metrics to their two insights: weight first, stress second.
/// Pure and deterministic; each rule is a first-match-wins threshold band.
pub fn personalized_insights(metrics: &UserMetrics) -> Vec<Advisory> {
    vec![
        weight_insight(metrics.weight),
        stress_insight(metrics.stress_level),
    ]
}

fn weight_insight(weight: f64) -> Advisory {
    if weight >= 90.0 {
        Advisory::info(
            "Your current body weight is a bit high. Incorporating more physical activity \
             like walking or jogging could be beneficial for your long-term health.",
        )
    } else if weight >= 70.0 {
        Advisory::info(
            "Your body weight is within a healthy range. Focus on maintaining a balanced \
             diet and regular exercise to stay on track.",
        )
    } else {
        Advisory::info(
            "You are at a healthy weight. Continue your healthy habits, and consider \
             activities like strength training to build muscle.",
        )
    }
}

fn stress_insight(stress_level: i16) -> Advisory {
    if stress_level >= 8 {
        Advisory::info(
            "Your reported stress level is very high. Make time for mindfulness, deep \
             breathing exercises, or a relaxing hobby to manage your mental well-being.",
        )
    } else if stress_level >= 5 {
        Advisory::info(
            "Your stress level is moderate. Try to find a healthy outlet, like light \
             exercise or social activities, to prevent burnout.",
        )
    } else {
        Advisory::info(
            "Your stress level is low. This is a great sign! Continue to prioritize \
             self-care and activities that help you relax.",
        )
    }
}
