//! # word-timestamps
//!
//! Estimates word-level timestamps by distributing the total audio duration
//! across whitespace-delimited words proportionally to their character count.
//!
//! This is an approximation: no acoustic signal or model-internal duration
//! information is consulted. It exists so captions can be aligned without
//! reaching into the synthesis backend's duration predictor.

use caption_core::WordTimestamp;

/// Estimate per-word timing for `text` spread over `total_duration` seconds.
///
/// Words are the whitespace-delimited tokens of `text`, preserved in order
/// with no normalization of punctuation or case. Each word is allotted a
/// share of `total_duration` proportional to its character count. Returns an
/// empty sequence when there are no words.
///
/// Start and end bounds are rounded to 3 decimals independently while the
/// running accumulator keeps full precision, so adjacent entries may show
/// sub-millisecond gaps or overlaps after rounding.
pub fn estimate_word_timestamps(text: &str, total_duration: f64) -> Vec<WordTimestamp> {
    let words: Vec<&str> = text.split_whitespace().collect();
    if words.is_empty() {
        return Vec::new();
    }

    let total_chars: usize = words.iter().map(|w| w.chars().count()).sum();
    if total_chars == 0 {
        return Vec::new();
    }

    let mut timestamps = Vec::with_capacity(words.len());
    let mut current_time = 0.0f64;

    for word in words {
        let word_duration = (word.chars().count() as f64 / total_chars as f64) * total_duration;
        timestamps.push(WordTimestamp {
            word: word.to_string(),
            start_time: round3(current_time),
            end_time: round3(current_time + word_duration),
        });
        current_time += word_duration;
    }

    timestamps
}

/// Round to 3 decimal places.
fn round3(value: f64) -> f64 {
    (value * 1000.0).round() / 1000.0
}
