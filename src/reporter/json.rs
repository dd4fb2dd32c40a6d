//! JSON reporter for machine-readable output

use crate::{BreakResult, DecodeReport, Shift, ShiftCandidate};
use serde::Serialize;

/// Reporter for JSON output
pub struct JsonReporter {
    /// Whether to pretty-print JSON
    pretty: bool,
}

impl JsonReporter {
    /// Create a new JSON reporter
    pub fn new() -> Self {
        Self { pretty: false }
    }

    /// Enable pretty-printing
    pub fn pretty(mut self) -> Self {
        self.pretty = true;
        self
    }

    /// Report both strategy results with the agreement flag
    pub fn report(&self, report: &DecodeReport, candidates: Option<&[ShiftCandidate]>) -> String {
        self.to_json(&JsonDecodeOutput {
            report,
            agree: report.agree(),
            top_candidates: candidates,
        })
    }

    /// Report one strategy result
    pub fn report_result(&self, result: &BreakResult, candidates: Option<&[ShiftCandidate]>) -> String {
        self.to_json(&JsonResultOutput {
            result,
            top_candidates: candidates,
        })
    }

    /// Report an encoding
    pub fn report_encoded(&self, plaintext: &str, shift: Shift, ciphertext: &str) -> String {
        self.to_json(&JsonEncodeOutput {
            plaintext,
            shift,
            ciphertext,
        })
    }

    fn to_json<T: Serialize>(&self, value: &T) -> String {
        if self.pretty {
            serde_json::to_string_pretty(value).unwrap_or_else(|_| "{}".to_string())
        } else {
            serde_json::to_string(value).unwrap_or_else(|_| "{}".to_string())
        }
    }
}

impl Default for JsonReporter {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsonDecodeOutput<'a> {
    #[serde(flatten)]
    report: &'a DecodeReport,
    agree: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    top_candidates: Option<&'a [ShiftCandidate]>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsonResultOutput<'a> {
    #[serde(flatten)]
    result: &'a BreakResult,
    #[serde(skip_serializing_if = "Option::is_none")]
    top_candidates: Option<&'a [ShiftCandidate]>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsonEncodeOutput<'a> {
    plaintext: &'a str,
    shift: Shift,
    ciphertext: &'a str,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{decode_both, CipherBreaker, Strategy};

    #[test]
    fn test_report_includes_agreement() {
        let report = decode_both(&crate::encode("it is the end", 3));
        let json = JsonReporter::new().report(&report, None);
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["agree"], true);
        assert_eq!(value["bruteForce"]["shift"], 3);
        assert_eq!(value["frequency"]["strategy"], "frequency");
        assert_eq!(value["bruteForce"]["strategy"], "brute-force");
        assert!(value.get("topCandidates").is_none());
    }

    #[test]
    fn test_report_result_with_candidates() {
        let breaker = CipherBreaker::new();
        let ciphertext = crate::encode("to be or not", 20);
        let result = breaker.break_with(&ciphertext, Strategy::BruteForce);
        let ranked = breaker.rank(&ciphertext);
        let json = JsonReporter::new()
            .pretty()
            .report_result(&result, Some(&ranked[..2]));
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["shift"], 20);
        assert_eq!(value["plaintext"], "to be or not");
        assert_eq!(value["fellBack"], false);
        assert_eq!(value["topCandidates"].as_array().unwrap().len(), 2);
        assert!(json.contains('\n'));
    }

    #[test]
    fn test_report_encoded() {
        let json = JsonReporter::new().report_encoded("abc", Shift::new(-1), "zab");
        assert_eq!(json, r#"{"plaintext":"abc","shift":25,"ciphertext":"zab"}"#);
    }
}
