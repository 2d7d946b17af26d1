// URL risk scoring
// Five independent heuristics combined into a weighted 0-100 risk score

use lazy_static::lazy_static;
use regex::Regex;
use thiserror::Error;
use tracing::{debug, error};

use crate::models::analysis::{
    AnalysisResult, LinkVerdict, RiskStatus, SecurityChecks, ThreatBreakdown,
};
use crate::utils::url_validator::{parse_analyzable_url, ParsedUrl};

// =============================================================================
// CONSTANTS
// =============================================================================

/// Words phishing kits like to put in hostnames
pub const SUSPICIOUS_DOMAIN_KEYWORDS: &[&str] = &[
    "verify", "update", "confirm", "reset", "login", "secure", "account",
];

/// Shortener domains that hide the real destination
pub const URL_SHORTENERS: &[&str] = &["bit.ly", "tinyurl.com", "short.link", "goo.gl"];

/// Weights for each sub-score. Must sum to 1.0.
pub const CHECK_WEIGHTS: CheckWeights = CheckWeights {
    domain_reputation: 0.25,
    ssl_certificate: 0.20,
    url_pattern: 0.25,
    content_analysis: 0.20,
    visual_similarity: 0.10,
};

const KEYWORD_DOMAIN_SCORE: u8 = 65;
const CLEAN_DOMAIN_SCORE: u8 = 20;
const PLAINTEXT_SCHEME_SCORE: u8 = 70;
const ENCRYPTED_SCHEME_SCORE: u8 = 10;

// Page fetching and screenshot comparison are not wired in yet
const CONTENT_ANALYSIS_SCORE: u8 = 15;
const VISUAL_SIMILARITY_SCORE: u8 = 10;

const UNUSUAL_AUTHORITY_PENALTY: u8 = 20;
const IPV4_HOST_PENALTY: u8 = 40;
const LONG_URL_PENALTY: u8 = 15;
const SHORTENER_PENALTY: u8 = 30;
const ENCODED_OR_USERINFO_PENALTY: u8 = 25;
const LONG_URL_THRESHOLD: usize = 100;

const MAX_SCORE: u8 = 100;

/// Quick check: any of these anywhere in the URL flags it
const QUICK_CHECK_FLAG_WORDS: &[&str] = &["login", "verify"];
/// Quick check: a URL without this word is flagged too
const QUICK_CHECK_TRUST_WORD: &str = "secure";

lazy_static! {
    /// Anything besides letters, digits, dots and hyphens in the authority
    static ref UNUSUAL_AUTHORITY_CHARS: Regex =
        Regex::new(r"[^a-zA-Z0-9.-]").expect("Invalid authority pattern regex");
}

// =============================================================================
// TYPES
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CheckWeights {
    pub domain_reputation: f64,
    pub ssl_certificate: f64,
    pub url_pattern: f64,
    pub content_analysis: f64,
    pub visual_similarity: f64,
}

impl CheckWeights {
    pub fn sum(&self) -> f64 {
        self.domain_reputation
            + self.ssl_certificate
            + self.url_pattern
            + self.content_analysis
            + self.visual_similarity
    }

    /// Weighted sum of the sub-scores, before rounding
    pub fn apply(&self, checks: &SecurityChecks) -> f64 {
        checks.domain_reputation as f64 * self.domain_reputation
            + checks.ssl_certificate as f64 * self.ssl_certificate
            + checks.url_pattern as f64 * self.url_pattern
            + checks.content_analysis as f64 * self.content_analysis
            + checks.visual_similarity as f64 * self.visual_similarity
    }
}

#[derive(Error, Debug, PartialEq)]
pub enum AnalysisError {
    #[error("Sub-score {check} out of range: {value}")]
    SubScoreOutOfRange { check: &'static str, value: u8 },

    #[error("Weighted risk score is not finite: {0}")]
    NonFiniteScore(f64),
}

// =============================================================================
// URL ANALYZER
// =============================================================================

/// Rule-based URL scorer.
///
/// Holds the keyword tables; everything else is a pure function of the URL,
/// so one instance is shared by all requests.
#[derive(Debug, Clone)]
pub struct UrlAnalyzer {
    suspicious_keywords: Vec<String>,
    shorteners: Vec<String>,
}

impl Default for UrlAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl UrlAnalyzer {
    pub fn new() -> Self {
        Self::with_tables(SUSPICIOUS_DOMAIN_KEYWORDS, URL_SHORTENERS)
    }

    /// Analyzer with custom keyword and shortener lists (matched lowercase)
    pub fn with_tables(keywords: &[&str], shorteners: &[&str]) -> Self {
        Self {
            suspicious_keywords: keywords.iter().map(|k| k.to_lowercase()).collect(),
            shorteners: shorteners.iter().map(|s| s.to_lowercase()).collect(),
        }
    }

    /// Analyze a URL. Never fails: malformed input yields the invalid-URL
    /// result and internal errors yield the degraded error result.
    pub fn analyze(&self, url: &str) -> AnalysisResult {
        let parsed = match parse_analyzable_url(url) {
            Ok(parsed) => parsed,
            Err(e) => {
                debug!("Rejecting malformed URL {:?}: {}", url, e);
                return invalid_url_result(url);
            },
        };

        match self.try_analyze(&parsed) {
            Ok(result) => {
                debug!(
                    "Analyzed {} -> {} ({:?})",
                    url, result.risk_score, result.status
                );
                result
            },
            Err(e) => {
                error!("Error analyzing URL {}: {}", url, e);
                analysis_error_result(url)
            },
        }
    }

    fn try_analyze(&self, parsed: &ParsedUrl<'_>) -> Result<AnalysisResult, AnalysisError> {
        let checks = self.run_checks(parsed);
        let risk_score = calculate_risk_score(&checks)?;
        let threats = categorize_threats(&checks, risk_score);
        let status = RiskStatus::from_score(risk_score);

        Ok(AnalysisResult {
            url: parsed.raw().to_string(),
            risk_score,
            status,
            checks,
            threats,
            details: status.details().to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        })
    }

    /// Compute all five sub-scores for a validated URL
    pub fn run_checks(&self, parsed: &ParsedUrl<'_>) -> SecurityChecks {
        SecurityChecks {
            domain_reputation: self.check_domain_reputation(parsed),
            ssl_certificate: check_ssl_certificate(parsed),
            url_pattern: self.check_url_pattern(parsed),
            content_analysis: CONTENT_ANALYSIS_SCORE,
            visual_similarity: VISUAL_SIMILARITY_SCORE,
        }
    }

    /// 65 when the authority contains a phishing keyword, else 20
    pub fn check_domain_reputation(&self, parsed: &ParsedUrl<'_>) -> u8 {
        let authority = parsed.authority().to_lowercase();
        let hit = self
            .suspicious_keywords
            .iter()
            .find(|keyword| authority.contains(keyword.as_str()));

        match hit {
            Some(keyword) => {
                debug!("Suspicious keyword '{}' in {}", keyword, authority);
                KEYWORD_DOMAIN_SCORE
            },
            None => CLEAN_DOMAIN_SCORE,
        }
    }

    /// Additive structural penalties, capped at 100
    pub fn check_url_pattern(&self, parsed: &ParsedUrl<'_>) -> u8 {
        let raw = parsed.raw();
        let lowered = raw.to_lowercase();
        let mut score: u16 = 0;

        if UNUSUAL_AUTHORITY_CHARS.is_match(parsed.authority()) {
            score += UNUSUAL_AUTHORITY_PENALTY as u16;
        }

        if parsed.is_ipv4_host() {
            score += IPV4_HOST_PENALTY as u16;
        }

        if raw.chars().count() > LONG_URL_THRESHOLD {
            score += LONG_URL_PENALTY as u16;
        }

        if self.shorteners.iter().any(|s| lowered.contains(s.as_str())) {
            score += SHORTENER_PENALTY as u16;
        }

        if raw.contains('%') || raw.contains('@') {
            score += ENCODED_OR_USERINFO_PENALTY as u16;
        }

        score.min(MAX_SCORE as u16) as u8
    }
}

/// 70 for any scheme other than https, else 10.
/// Certificate validity is not checked.
pub fn check_ssl_certificate(parsed: &ParsedUrl<'_>) -> u8 {
    if parsed.is_https() {
        ENCRYPTED_SCHEME_SCORE
    } else {
        PLAINTEXT_SCHEME_SCORE
    }
}

// =============================================================================
// AGGREGATION
// =============================================================================

/// `clamp(round(weighted sum), 0, 100)`
pub fn calculate_risk_score(checks: &SecurityChecks) -> Result<u8, AnalysisError> {
    for (check, value) in checks.as_array() {
        if value > MAX_SCORE {
            return Err(AnalysisError::SubScoreOutOfRange { check, value });
        }
    }

    let weighted = CHECK_WEIGHTS.apply(checks);
    if !weighted.is_finite() {
        return Err(AnalysisError::NonFiniteScore(weighted));
    }

    Ok(weighted.round().clamp(0.0, MAX_SCORE as f64) as u8)
}

/// Split the verdict into four category percentages.
///
/// Raw buckets are normalized with the largest-remainder method so the
/// percentages always add up to exactly 100 (or are all 0 when every bucket
/// is empty). Remainder ties favor the earlier bucket.
pub fn categorize_threats(checks: &SecurityChecks, risk_score: u8) -> ThreatBreakdown {
    let risk = risk_score as u32;
    let buckets: [u32; 4] = [
        (checks.domain_reputation as u32
            + checks.url_pattern as u32
            + checks.visual_similarity as u32)
            / 3,
        (checks.content_analysis as u32 + checks.ssl_certificate as u32) / 2,
        (risk / 2).min(50),
        100u32.saturating_sub(risk),
    ];

    let total: u32 = buckets.iter().sum();
    if total == 0 {
        return ThreatBreakdown {
            phishing: 0,
            malware: 0,
            suspicious: 0,
            safe: 0,
        };
    }

    let mut shares = [0u32; 4];
    let mut remainders = [(0u32, 0usize); 4];
    for (i, bucket) in buckets.iter().enumerate() {
        let scaled = bucket * 100;
        shares[i] = scaled / total;
        remainders[i] = (scaled % total, i);
    }

    let mut leftover = 100 - shares.iter().sum::<u32>();
    remainders.sort_by(|a, b| b.0.cmp(&a.0).then(a.1.cmp(&b.1)));
    for (_, i) in remainders {
        if leftover == 0 {
            break;
        }
        shares[i] += 1;
        leftover -= 1;
    }

    ThreatBreakdown {
        phishing: shares[0] as u8,
        malware: shares[1] as u8,
        suspicious: shares[2] as u8,
        safe: shares[3] as u8,
    }
}

/// Keyword-only verdict for the quick check endpoint.
///
/// Looks at the whole lowercased URL, not just the host: a URL is flagged
/// when it mentions `login` or `verify`, or when it does not mention
/// `secure` at all.
pub fn quick_verdict(url: &str) -> LinkVerdict {
    let lowered = url.to_lowercase();
    let flagged = QUICK_CHECK_FLAG_WORDS
        .iter()
        .any(|word| lowered.contains(*word))
        || !lowered.contains(QUICK_CHECK_TRUST_WORD);

    if flagged {
        LinkVerdict::Phishing
    } else {
        LinkVerdict::Safe
    }
}

// =============================================================================
// FIXED RESULTS
// =============================================================================

/// Returned for input that is not an absolute URL with a host
pub fn invalid_url_result(url: &str) -> AnalysisResult {
    AnalysisResult {
        url: url.to_string(),
        risk_score: 95,
        status: RiskStatus::Dangerous,
        checks: SecurityChecks {
            domain_reputation: 10,
            ssl_certificate: 15,
            url_pattern: 90,
            content_analysis: 0,
            visual_similarity: 0,
        },
        threats: ThreatBreakdown {
            phishing: 0,
            malware: 0,
            suspicious: 100,
            safe: 0,
        },
        details: "Invalid URL format".to_string(),
        timestamp: chrono::Utc::now().to_rfc3339(),
    }
}

/// Returned when scoring itself failed
pub fn analysis_error_result(url: &str) -> AnalysisResult {
    AnalysisResult {
        url: url.to_string(),
        risk_score: 50,
        status: RiskStatus::Suspicious,
        checks: SecurityChecks::uniform(50),
        threats: ThreatBreakdown {
            phishing: 25,
            malware: 25,
            suspicious: 25,
            safe: 25,
        },
        details: "Error during analysis".to_string(),
        timestamp: chrono::Utc::now().to_rfc3339(),
    }
}
