use std::fs;

use chrono::{DateTime, Local, TimeZone};
use qrstamp::{
    Clock, EncodingScheme, Error, QrDecoder, QrGenerator, QrstampConfig, char_to_millis,
    char_to_time, split_payload,
};

/// 2024-04-05T19:34:38.901Z
const FIXED_MILLIS: i64 = 1_712_345_678_901;

struct FixedClock(DateTime<Local>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Local> {
        self.0
    }
}

fn fixed_clock() -> FixedClock {
    FixedClock(Local.timestamp_millis_opt(FIXED_MILLIS).unwrap())
}

const FRIENDS_TOML: &str = r#"
[[friends]]
id = "abcd1234"
name = "Alice"

[[friends]]
id = "edfg5678"
name = "Bob"
"#;

fn load_config(dir: &std::path::Path) -> QrstampConfig {
    let path = dir.join("qrstamp.toml");
    fs::write(&path, FRIENDS_TOML).expect("write config");
    QrstampConfig::from_file(&path).expect("load config")
}

fn scan_and_decode(scheme: EncodingScheme, expected: [&str; 2]) {
    let workdir = tempfile::tempdir().expect("tempdir");
    let config = load_config(workdir.path());
    let out = workdir.path().join("img");
    fs::create_dir(&out).expect("create output dir");

    let generator = QrGenerator::new(&out, scheme).expect("generator");
    let generated = generator
        .create_all(&config.friends, &fixed_clock())
        .expect("create codes");
    assert_eq!(generated.len(), 2);

    for (code, expected) in generated.iter().zip(expected) {
        let text = QrDecoder::new().decode_file(&code.path).expect("scan png");
        assert_eq!(text, expected);

        let payload = split_payload(&text, scheme, &config.friend_ids()).expect("split payload");
        assert_eq!(payload.friend_id, code.friend.id);

        let millis = char_to_millis(&payload.code, scheme.dictionary()).expect("decode");
        assert_eq!(millis, FIXED_MILLIS);
    }
}

#[test]
fn v4_codes_scan_back_to_their_creation_time() {
    scan_and_decode(
        EncodingScheme::V4,
        ["4,abcd1234,BHBCDEFGHIJAB", "4,edfg5678,BHBCDEFGHIJAB"],
    );
}

#[test]
fn v5_codes_scan_back_to_their_creation_time() {
    scan_and_decode(
        EncodingScheme::V5,
        ["4,abcd1234CKSNTQCKFEG", "4,edfg5678CKSNTQCKFEG"],
    );
}

#[test]
fn file_names_carry_the_local_generation_time() {
    let workdir = tempfile::tempdir().expect("tempdir");
    let config = load_config(workdir.path());
    let generator = QrGenerator::new(workdir.path(), EncodingScheme::V4).expect("generator");
    let clock = FixedClock(Local.with_ymd_and_hms(2024, 4, 5, 14, 30, 12).unwrap());

    let generated = generator
        .create_all(&config.friends, &clock)
        .expect("create codes");

    assert_eq!(
        generated[0].path,
        workdir.path().join("Alice20240405143012.png")
    );
    assert_eq!(generated[1].path, workdir.path().join("Bob20240405143012.png"));
    assert!(generated.iter().all(|code| code.path.exists()));
}

#[test]
fn v4_payload_layout_matches_scanning_app() {
    let workdir = tempfile::tempdir().expect("tempdir");
    let config = load_config(workdir.path());
    let generator = QrGenerator::new(workdir.path(), EncodingScheme::V4).expect("generator");

    let generated = generator
        .create_all(&config.friends[..1], &fixed_clock())
        .expect("create code");
    let text = QrDecoder::new()
        .decode_file(&generated[0].path)
        .expect("scan png");

    let fields: Vec<&str> = text.split(',').collect();
    assert_eq!(fields.len(), 3);
    assert_eq!(fields[0], "4");
    assert_eq!(fields[1], "abcd1234");
    assert_eq!(fields[2], "BHBCDEFGHIJAB");
}

#[test]
fn decoding_rejects_foreign_symbols() {
    let dict = EncodingScheme::V4.dictionary();
    assert!(matches!(
        char_to_time("AAAAAAAAAB?DE", dict),
        Err(Error::Decode { symbol: '?', .. })
    ));
}

#[test]
fn version_six_is_unsupported() {
    assert!(matches!(
        EncodingScheme::try_from(6u8),
        Err(Error::UnsupportedVersion(6))
    ));
}
