use anyhow::Result;
use cipherkit::brute::{caesar_scan, rail_fence_scan, xor_scan};
use cipherkit::key::XorKeyKind;

pub struct ScanOptions {
    pub all: bool,
}

impl Default for ScanOptions {
    fn default() -> Self {
        Self { all: false }
    }
}

/// Run every applicable brute-force scan over the ciphertext and report
/// the candidates. The XOR scan only applies when the input parses as a
/// byte sequence.
pub fn run(ciphertext: &str, options: &ScanOptions) -> Result<String> {
    let mut output = String::new();
    output.push_str("Keyspace Scan\n");
    output.push_str("=============\n\n");
    output.push_str(&format!("Input: {}\n", ciphertext));
    output.push_str(&format!("Length: {} characters\n\n", ciphertext.chars().count()));

    // Caesar: all 26 shifts
    output.push_str("Caesar shifts (0-25)\n");
    output.push_str("--------------------\n");
    let candidates = caesar_scan(ciphertext);
    let mut shown = 0;
    for candidate in &candidates {
        if options.all || candidate.plausible {
            output.push_str(&format!("Key {:2}: {}\n", candidate.key, candidate.plaintext));
            shown += 1;
        }
    }
    if shown == 0 {
        output.push_str("No plausible candidates.\n");
    }
    output.push('\n');

    // Rail Fence: every rail count the text allows
    output.push_str("Rail Fence rail counts\n");
    output.push_str("----------------------\n");
    let candidates = rail_fence_scan(ciphertext);
    if candidates.is_empty() {
        output.push_str("Text too short to scan.\n");
    } else {
        let mut shown = 0;
        for candidate in &candidates {
            if options.all || candidate.plausible {
                output.push_str(&format!(
                    "Rails {:2}: {}\n",
                    candidate.rails, candidate.plaintext
                ));
                shown += 1;
            }
        }
        if shown == 0 {
            output.push_str("No plausible candidates.\n");
        }
    }
    output.push('\n');

    // XOR byte keys, when the input is a byte sequence
    output.push_str("XOR byte keys (0-255)\n");
    output.push_str("---------------------\n");
    match xor_scan(ciphertext, XorKeyKind::Byte) {
        Ok(candidates) => {
            let mut shown = 0;
            for candidate in &candidates {
                if candidate.printable {
                    output.push_str(&format!(
                        "Key {:3} (0x{:02X}): {}\n",
                        candidate.key,
                        candidate.key,
                        String::from_utf8_lossy(&candidate.plaintext)
                    ));
                    shown += 1;
                }
            }
            if shown == 0 {
                output.push_str("No printable candidates.\n");
            }
        }
        Err(_) => {
            output.push_str("Input is not a byte sequence, skipped.\n");
        }
    }

    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use cipherkit::ciphers::caesar;

    #[test]
    fn test_scan_surfaces_caesar_candidate() {
        let ciphertext = caesar::encrypt("the quick brown fox", 5);
        let report = run(&ciphertext, &ScanOptions::default()).unwrap();
        assert!(report.contains("the quick brown fox"));
    }

    #[test]
    fn test_scan_skips_xor_for_plain_text() {
        let report = run("not a byte sequence", &ScanOptions::default()).unwrap();
        assert!(report.contains("Input is not a byte sequence, skipped."));
    }

    #[test]
    fn test_scan_runs_xor_for_byte_sequence() {
        let report = run("1,2,3", &ScanOptions::default()).unwrap();
        assert!(report.contains("XOR byte keys"));
        assert!(!report.contains("skipped"));
    }
}
