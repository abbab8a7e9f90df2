//! Keyword Classifier - Offline rule-based fallback
//!
//! Used when no gateway API key is configured, and by tests. Rule-based,
//! designed to be swappable with the hosted classifier behind the same
//! port.

use async_trait::async_trait;

use crate::domain::entities::PatternInsight;
use crate::domain::errors::PipelineError;
use crate::domain::value_objects::Mood;
use crate::ports::classifier::{
    Classification, MoodClassifier, PatternContext, SummaryContext, SummaryNarrative,
};

/// Rule-based classifier matching mood keywords in the entry text
#[derive(Debug, Clone, Default)]
pub struct KeywordClassifier;

impl KeywordClassifier {
    pub fn new() -> Self {
        Self
    }
}

fn keywords(mood: Mood) -> &'static [&'static str] {
    match mood {
        Mood::Happy => &["happy", "glad", "joy", "wonderful", "smile", "great day"],
        Mood::Sad => &["sad", "down", "cry", "miss", "lonely", "blue"],
        Mood::Angry => &["angry", "furious", "mad", "annoyed", "unfair"],
        Mood::Anxious => &["anxious", "worried", "nervous", "scared", "overwhelmed"],
        Mood::Excited => &["excited", "aced", "thrilled", "can't wait", "amazing"],
        Mood::Calm => &["calm", "peaceful", "quiet", "relaxed", "settled"],
        Mood::Confused => &["confused", "unsure", "lost", "don't know", "torn"],
        Mood::Motivated => &["motivated", "determined", "focused", "ready", "goal"],
    }
}

fn supportive_line(mood: Mood) -> &'static str {
    match mood {
        Mood::Happy => "It's lovely to hear some brightness in your day. Hold on to what made it good.",
        Mood::Sad => "It's okay to feel heavy sometimes. Be gentle with yourself today.",
        Mood::Angry => "That frustration sounds real. Give yourself room to cool off before deciding anything.",
        Mood::Anxious => "Worry can be loud, but it isn't the whole story. One small step at a time.",
        Mood::Excited => "That energy is wonderful. Enjoy the moment, you earned it.",
        Mood::Calm => "A settled mind is worth noticing. Take a second to appreciate the quiet.",
        Mood::Confused => "Not having the answer yet is fine. Clarity usually comes in pieces.",
        Mood::Motivated => "That drive will carry you far. Point it at the thing that matters most.",
    }
}

#[async_trait]
impl MoodClassifier for KeywordClassifier {
    async fn classify(&self, text: &str) -> Result<Classification, PipelineError> {
        let lowered = text.to_lowercase();
        let mut best = (Mood::Calm, 0usize);
        for mood in Mood::ALL {
            let hits = keywords(mood)
                .iter()
                .filter(|kw| lowered.contains(*kw))
                .count();
            if hits > best.1 {
                best = (mood, hits);
            }
        }

        let (mood, hits) = best;
        let confidence = if hits == 0 {
            40.0
        } else {
            (55.0 + 10.0 * hits as f32).min(95.0)
        };
        Ok(Classification {
            mood,
            confidence,
            reasoning: Some(if hits == 0 {
                "No mood keywords matched; defaulting to calm.".to_string()
            } else {
                format!("Matched {} keyword(s) for {}.", hits, mood)
            }),
        })
    }

    async fn elaborate(&self, mood: Mood, _text: &str) -> Result<String, PipelineError> {
        Ok(supportive_line(mood).to_string())
    }

    async fn summarize(
        &self,
        context: &SummaryContext,
    ) -> Result<SummaryNarrative, PipelineError> {
        let insights = vec![
            format!(
                "Your dominant mood was {} across {} entries.",
                context.dominant_mood, context.entry_count
            ),
            format!(
                "Average classification confidence was {:.0}%.",
                context.average_confidence
            ),
            format!(
                "You logged {} distinct moods this week.",
                context.distribution.iter().count()
            ),
        ];
        let recommendations = if context.dominant_mood.is_positive() {
            vec![
                "Keep doing what worked this week.".to_string(),
                "Note what contributed to the good days.".to_string(),
                "Share a highlight with someone close.".to_string(),
            ]
        } else {
            vec![
                "Schedule one small thing you enjoy.".to_string(),
                "Try journaling earlier in the day.".to_string(),
                "Consider talking it through with someone you trust.".to_string(),
            ]
        };
        Ok(SummaryNarrative {
            insights,
            recommendations,
        })
    }

    async fn patterns(
        &self,
        context: &PatternContext,
    ) -> Result<Vec<PatternInsight>, PipelineError> {
        let total = context.distribution.total().max(1) as f32;
        let mut insights: Vec<PatternInsight> = context
            .distribution
            .iter()
            .filter(|(_, count)| *count >= 2)
            .take(5)
            .map(|(mood, count)| PatternInsight {
                pattern: format!("Recurring {}", mood),
                frequency: (count as f32 / total * 100.0).round(),
                description: format!(
                    "{} showed up in {} of your recent entries.",
                    mood, count
                ),
                recommendation: if mood.is_positive() {
                    "Lean into the situations that bring this out.".to_string()
                } else {
                    "Watch for the situations that set this off.".to_string()
                },
                timeframe: "recent entries".to_string(),
            })
            .collect();

        if insights.is_empty() {
            insights.push(PatternInsight {
                pattern: "Varied moods".to_string(),
                frequency: 0.0,
                description: "No single mood repeated enough to call a pattern yet.".to_string(),
                recommendation: "Keep logging; patterns need a few more entries.".to_string(),
                timeframe: "recent entries".to_string(),
            });
        }

        Ok(insights)
    }

    fn provider_name(&self) -> &str {
        "keyword"
    }
}
