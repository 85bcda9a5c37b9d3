use skepesis_core::models::{LearningStyle, ThinkingSpeed};

/// Dominant learning style and its narrative.
///
/// First match wins: exploratory (curiosity > 70), calibrated
/// (alignment > 80), confident (average confidence > 75), else analytical.
pub fn learning_style(
    curiosity: f64,
    alignment: f64,
    avg_confidence: f64,
) -> (LearningStyle, &'static str) {
    if curiosity > 70.0 {
        (
            LearningStyle::Exploratory,
            "You're a curious explorer who thrives on discovery and uncertainty.",
        )
    } else if alignment > 80.0 {
        (
            LearningStyle::Calibrated,
            "You have exceptional self-awareness about your knowledge.",
        )
    } else if avg_confidence > 75.0 {
        (
            LearningStyle::Confident,
            "You trust your abilities and make bold decisions.",
        )
    } else {
        (
            LearningStyle::Analytical,
            "You approach learning systematically and thoughtfully.",
        )
    }
}

pub fn style_name(style: LearningStyle) -> &'static str {
    match style {
        LearningStyle::Analytical => "analytical",
        LearningStyle::Exploratory => "exploratory",
        LearningStyle::Calibrated => "calibrated",
        LearningStyle::Confident => "confident",
    }
}

/// Concrete improvement suggestions.
pub fn improvement_suggestions(
    curiosity: f64,
    alignment: f64,
    consistency: f64,
    accuracy: f64,
) -> Vec<String> {
    let mut suggestions = Vec::new();
    if curiosity < 40.0 {
        suggestions.push(
            "Try exploring topics where you're less certain - growth happens at the edge of comfort."
                .to_string(),
        );
    }
    if alignment < 70.0 {
        suggestions.push(
            "Practice metacognition: pause before answering to assess 'How sure am I really?'"
                .to_string(),
        );
    }
    if consistency < 60.0 {
        suggestions.push(
            "Your approach varies widely - experiment with a more consistent strategy.".to_string(),
        );
    }
    if accuracy < 60.0 {
        suggestions.push(
            "Focus on understanding concepts deeply rather than memorizing answers.".to_string(),
        );
    }
    suggestions
}

/// Inputs to the reflection prompt selection.
#[derive(Debug, Clone, Copy)]
pub struct PromptSignals {
    pub accuracy: f64,
    pub alignment: f64,
    pub curiosity: f64,
    pub thinking_speed: ThinkingSpeed,
}

/// Personalized reflection questions, at most `limit`.
pub fn reflection_prompts(signals: PromptSignals, limit: usize) -> Vec<String> {
    let mut prompts = Vec::new();

    if signals.accuracy > 80.0 {
        prompts.push("What strategies helped you succeed? How can you apply them to new topics?");
    } else {
        prompts.push("Which questions made you pause? What would you do differently next time?");
    }

    if signals.alignment < 60.0 {
        prompts.push(
            "When you felt confident, what made you so sure? Were there warning signs you missed?",
        );
    } else if signals.alignment > 85.0 {
        prompts.push("You have strong self-awareness! How did you develop this calibration?");
    }

    if signals.curiosity > 70.0 {
        prompts.push("You show exploratory learning! How does uncertainty feel when you're learning?");
    }

    match signals.thinking_speed {
        ThinkingSpeed::Quick => {
            prompts.push("You're a fast thinker! Would slowing down reveal new insights?")
        }
        ThinkingSpeed::Deliberate => {
            prompts.push("You're thorough! Does your careful approach ever hold you back?")
        }
        ThinkingSpeed::Moderate => {}
    }

    prompts.into_iter().take(limit).map(str::to_string).collect()
}
