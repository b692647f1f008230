//! Rule-based sentiment scoring for entry notes.
//!
//! The scoring capability is a trait so any compatible implementation
//! (rule-based, statistical, or an external service) can be substituted
//! without touching the store or the reports.

use once_cell::sync::Lazy;
use std::collections::HashMap;
use strum_macros::AsRefStr;

use crate::journal::Entry;

/// Fixed neutral polarity.
pub const NEUTRAL: f64 = 0.0;

/// How many of the most recent entries feed the trend average.
const TREND_WINDOW: usize = 7;

const POSITIVE_THRESHOLD: f64 = 0.3;
const NEGATIVE_THRESHOLD: f64 = -0.3;

/// Polarity in [-1.0, 1.0], subjectivity in [0.0, 1.0].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Sentiment {
    pub polarity: f64,
    pub subjectivity: f64,
}

impl Sentiment {
    pub const NEUTRAL: Sentiment = Sentiment {
        polarity: NEUTRAL,
        subjectivity: 0.0,
    };
}

pub trait SentimentModel {
    /// Scores free text. Empty or whitespace-only text scores the fixed
    /// neutral pair; implementations degrade to neutral rather than fail.
    fn score(&self, text: &str) -> Sentiment;
}

/// Words that flip the polarity of the next scored word.
const NEGATIONS: &[&str] = &["not", "never", "no"];

/// Word weights in [-1.0, 1.0].
static LEXICON: Lazy<HashMap<&'static str, f64>> = Lazy::new(|| {
    HashMap::from([
        ("amazing", 0.8),
        ("angry", -0.8),
        ("anxious", -0.6),
        ("awful", -1.0),
        ("bad", -0.7),
        ("calm", 0.3),
        ("excited", 0.7),
        ("exhausted", -0.6),
        ("fine", 0.2),
        ("fun", 0.6),
        ("good", 0.7),
        ("grateful", 0.8),
        ("great", 0.8),
        ("happy", 0.8),
        ("hate", -0.8),
        ("hated", -0.8),
        ("horrible", -1.0),
        ("joy", 0.8),
        ("lonely", -0.7),
        ("love", 0.5),
        ("loved", 0.6),
        ("miserable", -0.9),
        ("nice", 0.6),
        ("okay", 0.2),
        ("proud", 0.7),
        ("relaxed", 0.5),
        ("sad", -0.8),
        ("stressed", -0.7),
        ("terrible", -1.0),
        ("tired", -0.4),
        ("upset", -0.6),
        ("wonderful", 0.9),
        ("worried", -0.6),
    ])
});

/// Built-in rule-based scorer.
///
/// Polarity is the mean weight of lexicon words found in the text (a
/// preceding negation flips the hit's sign); subjectivity is the fraction
/// of tokens that hit the lexicon. No hits means neutral.
pub struct LexiconModel;

impl SentimentModel for LexiconModel {
    fn score(&self, text: &str) -> Sentiment {
        let mut tokens = 0usize;
        let mut hits = 0usize;
        let mut sum = 0.0;
        let mut negated = false;

        for raw in text.split_whitespace() {
            let word: String = raw
                .trim_matches(|c: char| !c.is_alphanumeric())
                .to_lowercase();
            if word.is_empty() {
                continue;
            }
            tokens += 1;
            if NEGATIONS.contains(&word.as_str()) {
                negated = true;
                continue;
            }
            if let Some(weight) = LEXICON.get(word.as_str()) {
                sum += if negated { -weight } else { *weight };
                hits += 1;
            }
            negated = false;
        }

        if hits == 0 {
            return Sentiment::NEUTRAL;
        }
        Sentiment {
            polarity: (sum / hits as f64).clamp(-1.0, 1.0),
            subjectivity: (hits as f64 / tokens as f64).min(1.0),
        }
    }
}

/// Average `sentiment_score` over the last [`TREND_WINDOW`] entries in the
/// given sequence order. Missing scores count as neutral; an empty slice is
/// neutral.
pub fn recent_trend(entries: &[Entry]) -> f64 {
    if entries.is_empty() {
        return NEUTRAL;
    }
    let recent = &entries[entries.len().saturating_sub(TREND_WINDOW)..];
    let sum: f64 = recent
        .iter()
        .map(|e| e.sentiment_score.unwrap_or(NEUTRAL))
        .sum();
    sum / recent.len() as f64
}

/// Three-way classification of an average sentiment.
#[derive(Clone, Copy, Debug, PartialEq, Eq, AsRefStr)]
pub enum TrendLabel {
    Positive,
    Negative,
    Neutral,
}

impl TrendLabel {
    /// Suggestion message shown to the journaler.
    pub fn suggestion(&self) -> &'static str {
        match self {
            TrendLabel::Positive => {
                "Positive trend - Keep up the good vibes! Suggested mood: Happy/Energetic"
            }
            TrendLabel::Negative => {
                "Negative trend - Consider self-care. Suggested mood: Sad/Anxious"
            }
            TrendLabel::Neutral => {
                "Neutral trend - Balanced day ahead. Suggested mood: Calm/Neutral"
            }
        }
    }
}

pub fn suggest(avg_sentiment: f64) -> TrendLabel {
    if avg_sentiment > POSITIVE_THRESHOLD {
        TrendLabel::Positive
    } else if avg_sentiment < NEGATIVE_THRESHOLD {
        TrendLabel::Negative
    } else {
        TrendLabel::Neutral
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mk_entry(score: Option<f64>) -> Entry {
        Entry {
            date: "2024-01-01".to_string(),
            mood: "Neutral".to_string(),
            notes: String::new(),
            sentiment_score: score,
        }
    }

    #[test]
    fn empty_text_scores_the_fixed_neutral_pair() {
        assert_eq!(LexiconModel.score(""), Sentiment::NEUTRAL);
        assert_eq!(LexiconModel.score("   \t\n"), Sentiment::NEUTRAL);
    }

    #[test]
    fn text_without_lexicon_hits_is_neutral() {
        assert_eq!(LexiconModel.score("went to the office today"), Sentiment::NEUTRAL);
    }

    #[test]
    fn positive_text_scores_positive() {
        let s = LexiconModel.score("Had a great day, the walk was wonderful.");
        assert!(s.polarity > 0.3);
        assert!(s.subjectivity > 0.0 && s.subjectivity <= 1.0);
    }

    #[test]
    fn negative_text_scores_negative() {
        let s = LexiconModel.score("Terrible night, I felt sad and anxious.");
        assert!(s.polarity < -0.3);
    }

    #[test]
    fn negation_flips_the_following_word() {
        let plain = LexiconModel.score("good");
        let negated = LexiconModel.score("not good");
        assert!(plain.polarity > 0.0);
        assert!(negated.polarity < 0.0);
        assert_eq!(negated.polarity, -plain.polarity);
    }

    #[test]
    fn punctuation_and_case_do_not_matter() {
        let s = LexiconModel.score("GREAT!!!");
        assert!(s.polarity > 0.0);
    }

    #[test]
    fn trend_is_neutral_for_an_empty_sequence() {
        assert_eq!(recent_trend(&[]), NEUTRAL);
    }

    #[test]
    fn trend_averages_only_the_last_seven_entries() {
        // Entry 0 carries an extreme score that must not be included.
        let mut entries = vec![mk_entry(Some(-1.0))];
        entries.extend(std::iter::repeat_n(mk_entry(Some(0.7)), 7));
        let avg = recent_trend(&entries);
        assert!((avg - 0.7).abs() < 1e-9);
    }

    #[test]
    fn trend_defaults_missing_scores_to_neutral() {
        let entries = vec![mk_entry(Some(0.8)), mk_entry(None)];
        let avg = recent_trend(&entries);
        assert!((avg - 0.4).abs() < 1e-9);
    }

    #[test]
    fn suggest_classifies_around_the_fixed_thresholds() {
        assert_eq!(suggest(0.31), TrendLabel::Positive);
        assert_eq!(suggest(0.3), TrendLabel::Neutral);
        assert_eq!(suggest(0.0), TrendLabel::Neutral);
        assert_eq!(suggest(-0.3), TrendLabel::Neutral);
        assert_eq!(suggest(-0.31), TrendLabel::Negative);
    }

    #[test]
    fn labels_render_their_names() {
        assert_eq!(TrendLabel::Positive.as_ref(), "Positive");
        assert_eq!(TrendLabel::Neutral.as_ref(), "Neutral");
    }
}
