use anyhow::{bail, Result};

/// English letter frequencies (a-z), for the chi-square comparison.
const ENGLISH_FREQ: [f64; 26] = [
    0.08167, 0.01492, 0.02782, 0.04253, 0.12702, 0.02228, 0.02015, 0.06094,
    0.06966, 0.00153, 0.00772, 0.04025, 0.02406, 0.06749, 0.07507, 0.01929,
    0.00095, 0.05987, 0.06327, 0.09056, 0.02758, 0.00978, 0.02360, 0.00150,
    0.01974, 0.00074,
];

/// Statistical profile of a text: letter frequencies, index of
/// coincidence, chi-square against English, printable ratio.
pub fn run(text: &str) -> Result<String> {
    if text.is_empty() {
        bail!("Text is empty");
    }

    let counts = letter_counts(text);
    let total: u64 = counts.iter().sum();
    if total == 0 {
        bail!("No alphabetic characters to analyze");
    }

    let mut output = String::new();
    output.push_str("Classical Text Cryptanalysis\n");
    output.push_str("============================\n\n");
    output.push_str(&format!("Characters: {}\n", text.chars().count()));
    output.push_str(&format!("Letters analyzed: {}\n\n", total));

    output.push_str("Letter Frequency\n");
    output.push_str("----------------\n");
    for (index, &count) in counts.iter().enumerate() {
        if count == 0 {
            continue;
        }
        let letter = (b'a' + index as u8) as char;
        output.push_str(&format!(
            "  {}: {:>4} ({:.1}%)\n",
            letter,
            count,
            count as f64 / total as f64 * 100.0
        ));
    }
    output.push('\n');

    let ioc = index_of_coincidence(&counts, total);
    output.push_str(&format!("Index of Coincidence: {:.4}\n", ioc));
    output.push_str(&format!("  Interpretation: {}\n\n", interpret_ioc(ioc)));

    let chi = chi_square_vs_english(&counts, total);
    output.push_str(&format!("Chi-Square vs English: {:.2}\n", chi));
    output.push_str(&format!("  Interpretation: {}\n\n", interpret_chi(chi)));

    let printable = text
        .chars()
        .filter(|c| (' '..='~').contains(c))
        .count() as f64
        / text.chars().count() as f64;
    output.push_str(&format!("Printable ASCII: {:.1}%\n", printable * 100.0));

    Ok(output)
}

fn letter_counts(text: &str) -> [u64; 26] {
    let mut counts = [0u64; 26];
    for c in text.chars() {
        if c.is_ascii_alphabetic() {
            counts[(c.to_ascii_lowercase() as u8 - b'a') as usize] += 1;
        }
    }
    counts
}

/// Probability that two letters drawn at random from the text are
/// equal. English prose sits near 0.066; uniformly random letters near
/// 0.038.
fn index_of_coincidence(counts: &[u64; 26], total: u64) -> f64 {
    if total < 2 {
        return 0.0;
    }
    let pairs: u64 = counts.iter().map(|&n| n * n.saturating_sub(1)).sum();
    pairs as f64 / (total * (total - 1)) as f64
}

fn interpret_ioc(ioc: f64) -> &'static str {
    if ioc >= 0.06 {
        "Resembles natural language - monoalphabetic substitution or transposition"
    } else if ioc >= 0.045 {
        "Flattened distribution - possibly polyalphabetic (Vigenère)"
    } else {
        "Near-uniform distribution - polyalphabetic with a long key, or not letter-based"
    }
}

fn chi_square_vs_english(counts: &[u64; 26], total: u64) -> f64 {
    let mut chi = 0.0;
    for (index, &count) in counts.iter().enumerate() {
        let expected = total as f64 * ENGLISH_FREQ[index];
        let diff = count as f64 - expected;
        chi += diff * diff / expected;
    }
    chi
}

fn interpret_chi(chi: f64) -> &'static str {
    if chi < 50.0 {
        "Close to English letter frequencies - likely plaintext or transposition"
    } else if chi < 150.0 {
        "Some divergence from English - possibly shifted frequencies"
    } else {
        "Far from English letter frequencies - substitution likely"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stats_report_sections() {
        let report = run("The quick brown fox jumps over the lazy dog").unwrap();
        assert!(report.contains("Letter Frequency"));
        assert!(report.contains("Index of Coincidence"));
        assert!(report.contains("Chi-Square vs English"));
        assert!(report.contains("Printable ASCII: 100.0%"));
    }

    #[test]
    fn test_empty_text_is_rejected() {
        assert!(run("").is_err());
        assert!(run("12345 !!!").is_err());
    }

    #[test]
    fn test_ioc_of_single_repeated_letter_is_one() {
        let counts = letter_counts("aaaa");
        assert!((index_of_coincidence(&counts, 4) - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_ioc_of_english_prose_is_high() {
        let text = "it was the best of times it was the worst of times it was \
                    the age of wisdom it was the age of foolishness";
        let counts = letter_counts(text);
        let total = counts.iter().sum();
        let ioc = index_of_coincidence(&counts, total);
        assert!(ioc > 0.06, "expected English-like IoC, got {}", ioc);
    }

    #[test]
    fn test_chi_square_prefers_english_over_shifted() {
        let english = "the quick brown fox jumps over the lazy dog and runs away";
        let english_counts = letter_counts(english);
        let english_total: u64 = english_counts.iter().sum();

        let shifted = cipherkit::ciphers::caesar::encrypt(english, 7);
        let shifted_counts = letter_counts(&shifted);
        let shifted_total: u64 = shifted_counts.iter().sum();

        let english_chi = chi_square_vs_english(&english_counts, english_total);
        let shifted_chi = chi_square_vs_english(&shifted_counts, shifted_total);
        assert!(english_chi < shifted_chi);
    }
}
