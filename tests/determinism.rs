use codefp::{
    fingerprint_text, hash_kgram, DigestAlgorithm, FingerprintEngine, PerceptualConfig,
    SanitizeConfig,
};

const SOURCE: &str = r#"
function bubbleSort(arr) {
    let len = arr.length;
    for (let i = 0; i < len; i++) {
        for (let j = 0; j < len - 1; j++) {
            if (arr[j] > arr[j + 1]) {
                let tmp = arr[j];
                arr[j] = arr[j + 1];
                arr[j + 1] = tmp;
            }
        }
    }
    return arr;
}
"#;

#[test]
fn repeated_calls_produce_identical_fingerprints() {
    let first = fingerprint_text(SOURCE);
    assert!(!first.is_empty());
    for _ in 0..5 {
        assert_eq!(fingerprint_text(SOURCE), first);
    }
}

#[test]
fn independently_built_engines_agree() {
    let a = FingerprintEngine::default();
    let b = FingerprintEngine::new(&SanitizeConfig::default(), &PerceptualConfig::default())
        .expect("default configs are valid");
    assert_eq!(a.fingerprint(SOURCE), b.fingerprint(SOURCE));
}

#[test]
fn parallel_hashing_matches_sequential() {
    let sequential = FingerprintEngine::default();
    let parallel = FingerprintEngine::new(
        &SanitizeConfig::default(),
        &PerceptualConfig::default().with_parallel(true),
    )
    .expect("valid config");
    assert_eq!(sequential.fingerprint(SOURCE), parallel.fingerprint(SOURCE));
}

#[test]
fn hash_values_are_stable_across_runs() {
    // Fixed digest vectors; a change here invalidates every stored fingerprint.
    assert_eq!(hash_kgram("", DigestAlgorithm::Md5), 0xd41d_8cd9);
    assert_eq!(hash_kgram("abc", DigestAlgorithm::Md5), 0x9001_5098);
    assert_eq!(hash_kgram("abc", DigestAlgorithm::Sha256), 0xba78_16bf);
}

#[test]
fn digest_choice_changes_fingerprint() {
    let md5 = FingerprintEngine::default();
    let sha = FingerprintEngine::new(
        &SanitizeConfig::default(),
        &PerceptualConfig::default().with_digest(DigestAlgorithm::Sha256),
    )
    .expect("valid config");
    assert_ne!(md5.fingerprint(SOURCE), sha.fingerprint(SOURCE));
}
