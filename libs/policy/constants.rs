// Probability bounds enforced by the Suggestion setter
pub const MIN_PROBABILITY: f64 = 0.0;
pub const MAX_PROBABILITY: f64 = 1.0;

// Prediction round defaults
pub const DEFAULT_MAX_PARTIAL_PREDICTION_SIZE: usize = 10;
pub const DEFAULT_COMBINATION_POLICY: &str = "meritocracy";

/// Named interpolation weight profile for the smoothed n-gram predictor
///
/// The deltas are ordered by ascending n-gram order (unigram first) and are
/// expected to sum to 1.0 so interpolated probabilities stay within [0,1].
#[derive(Debug, Clone, PartialEq)]
pub struct SmoothingProfile {
    pub name: &'static str,
    pub deltas: &'static [f64],
}

/// Trigram smoothing leaning heavily on the trigram estimate, falling back
/// to bigram and unigram mass for sparse contexts
pub const TRIGRAM_DEFAULT: SmoothingProfile = SmoothingProfile {
    name: "trigram-default",
    deltas: &[0.01, 0.1, 0.89],
};

/// Bigram smoothing with a stronger unigram floor, suited to small corpora
pub const BIGRAM_SMALL_CORPUS: SmoothingProfile = SmoothingProfile {
    name: "bigram-small-corpus",
    deltas: &[0.2, 0.8],
};

/// Get a smoothing profile by name
pub fn get_smoothing_profile(name: &str) -> Option<&'static SmoothingProfile> {
    match name {
        "trigram-default" => Some(&TRIGRAM_DEFAULT),
        "bigram-small-corpus" => Some(&BIGRAM_SMALL_CORPUS),
        _ => None,
    }
}

/// List all built-in smoothing profiles
pub fn available_profiles() -> Vec<&'static SmoothingProfile> {
    vec![&TRIGRAM_DEFAULT, &BIGRAM_SMALL_CORPUS]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn profiles_sum_to_one() {
        for profile in available_profiles() {
            let sum: f64 = profile.deltas.iter().sum();
            assert!(
                (sum - 1.0).abs() < 1e-9,
                "profile {} deltas sum to {}",
                profile.name,
                sum
            );
        }
    }

    #[test]
    fn profile_lookup_by_name() {
        assert_eq!(
            get_smoothing_profile("trigram-default"),
            Some(&TRIGRAM_DEFAULT)
        );
        assert_eq!(get_smoothing_profile("unknown"), None);
    }
}
