use codefp::{
    builtin_references, fingerprint_text, jaccard, sanitize, similarity, Fingerprint,
    MatchConfig, Matcher, PerceptualConfig, ReferenceSource, SanitizeConfig,
};

const ALPHABET: &str = "abcdefghijklmnopqrstuvwxyz0123456789";

fn sanitized_of_len(n: usize) -> &'static str {
    &ALPHABET[..n]
}

#[test]
fn case_whitespace_and_comments_do_not_change_fingerprint() {
    let plain = "function f(){return 1;}";
    let noisy = "FUNCTION F ( ) { // note\n RETURN 1 ; }";
    assert_eq!(sanitize(plain), sanitize(noisy));
    assert_eq!(fingerprint_text(plain), fingerprint_text(noisy));

    let long_plain =
        "function sum(values){let total=0;for(const v of values){total+=v;}return total;}";
    let long_noisy = r#"
        /* accumulate */
        FUNCTION Sum( Values ) {
            LET total = 0;            // running total
            for (const v OF values) { TOTAL += V; }
            return Total;
        }
    "#;
    let fp = fingerprint_text(long_plain);
    assert!(!fp.is_empty());
    assert_eq!(fp, fingerprint_text(long_noisy));
}

#[test]
fn self_similarity_is_one() {
    for entry in builtin_references() {
        assert_eq!(similarity(&entry.content, &entry.content), 1.0, "{}", entry.id);
    }
}

#[test]
fn similarity_is_symmetric() {
    let refs = builtin_references();
    for a in &refs {
        for b in &refs {
            assert_eq!(similarity(&a.content, &b.content), similarity(&b.content, &a.content));
        }
    }
}

#[test]
fn empty_input_floor() {
    let empty = fingerprint_text("");
    assert!(empty.is_empty());
    let other = fingerprint_text(&builtin_references()[0].content);
    assert_eq!(jaccard(&empty, &other), 0.0);
    assert_eq!(jaccard(&Fingerprint::new(), &Fingerprint::new()), 0.0);
}

#[test]
fn short_text_boundaries() {
    let cfg = PerceptualConfig::default();
    assert_eq!(cfg.min_fingerprint_len(), 29);

    assert!(fingerprint_text(sanitized_of_len(19)).is_empty());
    assert!(fingerprint_text(sanitized_of_len(20)).is_empty());
    assert!(fingerprint_text(sanitized_of_len(28)).is_empty());
    assert_eq!(fingerprint_text(sanitized_of_len(29)).len(), 1);
    assert!(!fingerprint_text(sanitized_of_len(36)).is_empty());
}

#[test]
fn identical_submission_is_flagged_with_entry_name() {
    let matcher = Matcher::with_defaults(builtin_references()).unwrap();
    for entry in builtin_references() {
        let result = matcher.match_submission(&entry.content);
        assert_eq!(result.score, 1.0);
        assert!(result.is_flagged);
        assert_eq!(result.matched_name(), Some(entry.name.as_str()));
        assert_eq!(result.score_percent(), 100.0);
    }
}

#[test]
fn unrelated_submission_is_not_flagged() {
    let matcher = Matcher::with_defaults(builtin_references()).unwrap();
    let submission = "SELECT customer_name, SUM(order_total) FROM orders \
                      GROUP BY customer_name HAVING COUNT(*) > 5 ORDER BY 2 DESC;";
    let result = matcher.match_submission(submission);
    assert!(result.score < 0.1);
    assert!(!result.is_flagged);
    assert!(result.matched_entry.is_none());
}

#[test]
fn ties_resolve_to_earliest_entry() {
    let body = "while (queue.length > 0) { const node = queue.shift(); visit(node); }";
    let sources = vec![
        ReferenceSource::new("first", "First Copy", body),
        ReferenceSource::new("second", "Second Copy", body),
    ];
    let matcher = Matcher::with_defaults(sources).unwrap();
    let result = matcher.match_submission(body);
    assert!(result.is_flagged);
    assert_eq!(result.matched_entry.map(|e| e.id()), Some("first"));
}

#[test]
fn custom_threshold_applies() {
    let matcher = Matcher::from_sources(
        &SanitizeConfig::default(),
        &PerceptualConfig::default(),
        MatchConfig::default().with_flag_threshold(1.0),
        builtin_references(),
    )
    .unwrap();
    // A perfect score does not exceed a threshold of 1.0.
    let result = matcher.match_submission(&builtin_references()[1].content);
    assert_eq!(result.score, 1.0);
    assert!(!result.is_flagged);
    assert!(result.matched_entry.is_none());
}
