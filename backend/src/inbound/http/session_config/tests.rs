//! Unit tests for session configuration parsing.

use std::collections::HashMap;
use std::io::Write;

use super::*;
use mockable::MockEnv;
use rstest::{fixture, rstest};
use tempfile::NamedTempFile;

fn key_file(len: usize) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("create temp key file");
    file.write_all(&vec![b'k'; len]).expect("write key bytes");
    file
}

fn path_of(file: &NamedTempFile) -> String {
    file.path().to_string_lossy().into_owned()
}

fn mock_env(vars: HashMap<&'static str, String>) -> MockEnv {
    let mut env = MockEnv::new();
    env.expect_string()
        .times(0..)
        .returning(move |key| vars.get(key).cloned());
    env
}

#[fixture]
fn release_key() -> NamedTempFile {
    key_file(SESSION_KEY_MIN_LEN)
}

fn release_vars(key: &NamedTempFile) -> HashMap<&'static str, String> {
    HashMap::from([
        (KEY_FILE_ENV, path_of(key)),
        (COOKIE_SECURE_ENV, "1".to_owned()),
        (SAMESITE_ENV, "Strict".to_owned()),
        (ALLOW_EPHEMERAL_ENV, "0".to_owned()),
    ])
}

#[rstest]
fn release_accepts_complete_configuration(release_key: NamedTempFile) {
    let env = mock_env(release_vars(&release_key));

    let settings =
        session_settings_from_env(&env, BuildMode::Release).expect("complete configuration");

    assert!(settings.cookie_secure);
    assert_eq!(settings.same_site, SameSite::Strict);
}

#[rstest]
#[case(COOKIE_SECURE_ENV)]
#[case(SAMESITE_ENV)]
#[case(ALLOW_EPHEMERAL_ENV)]
fn release_rejects_missing_toggle(release_key: NamedTempFile, #[case] missing: &'static str) {
    let mut vars = release_vars(&release_key);
    vars.remove(missing);

    let err = session_settings_from_env(&mock_env(vars), BuildMode::Release)
        .err()
        .expect("missing toggle");

    assert!(matches!(err, SessionConfigError::MissingEnv { name } if name == missing));
}

#[rstest]
#[case(COOKIE_SECURE_ENV, "maybe")]
#[case(SAMESITE_ENV, "Sometimes")]
#[case(ALLOW_EPHEMERAL_ENV, "")]
fn release_rejects_malformed_toggle(
    release_key: NamedTempFile,
    #[case] name: &'static str,
    #[case] value: &str,
) {
    let mut vars = release_vars(&release_key);
    vars.insert(name, value.to_owned());

    let err = session_settings_from_env(&mock_env(vars), BuildMode::Release)
        .err()
        .expect("malformed toggle");

    assert!(matches!(err, SessionConfigError::InvalidEnv { name: got, .. } if got == name));
}

#[rstest]
fn release_rejects_same_site_none_without_secure(release_key: NamedTempFile) {
    let mut vars = release_vars(&release_key);
    vars.insert(COOKIE_SECURE_ENV, "0".to_owned());
    vars.insert(SAMESITE_ENV, "None".to_owned());

    let err = session_settings_from_env(&mock_env(vars), BuildMode::Release)
        .err()
        .expect("insecure SameSite=None");

    assert!(matches!(err, SessionConfigError::InsecureSameSiteNone));
}

#[rstest]
fn release_rejects_ephemeral_keys(release_key: NamedTempFile) {
    let mut vars = release_vars(&release_key);
    vars.insert(ALLOW_EPHEMERAL_ENV, "yes".to_owned());

    let err = session_settings_from_env(&mock_env(vars), BuildMode::Release)
        .err()
        .expect("ephemeral key in release");

    assert!(matches!(err, SessionConfigError::EphemeralNotAllowed));
}

#[rstest]
fn release_rejects_short_key() {
    let short = key_file(SESSION_KEY_MIN_LEN - 1);
    let err = session_settings_from_env(&mock_env(release_vars(&short)), BuildMode::Release)
        .err()
        .expect("short key");

    assert!(matches!(
        err,
        SessionConfigError::KeyTooShort { length, .. } if length == SESSION_KEY_MIN_LEN - 1
    ));
}

#[rstest]
fn release_rejects_unreadable_key(release_key: NamedTempFile) {
    let mut vars = release_vars(&release_key);
    vars.insert(KEY_FILE_ENV, "/nonexistent/tourbook/session_key".to_owned());

    let err = session_settings_from_env(&mock_env(vars), BuildMode::Release)
        .err()
        .expect("unreadable key");

    assert!(matches!(err, SessionConfigError::KeyRead { .. }));
}

#[rstest]
fn debug_falls_back_to_defaults() {
    let vars = HashMap::from([(KEY_FILE_ENV, "/nonexistent/tourbook/session_key".to_owned())]);

    let settings =
        session_settings_from_env(&mock_env(vars), BuildMode::Debug).expect("debug defaults");

    assert!(settings.cookie_secure);
    assert_eq!(settings.same_site, SameSite::Lax);
}

#[rstest]
fn debug_tolerates_malformed_values() {
    let vars = HashMap::from([
        (KEY_FILE_ENV, "/nonexistent/tourbook/session_key".to_owned()),
        (COOKIE_SECURE_ENV, "perhaps".to_owned()),
        (SAMESITE_ENV, "None".to_owned()),
    ]);

    let settings =
        session_settings_from_env(&mock_env(vars), BuildMode::Debug).expect("debug tolerance");

    assert!(settings.cookie_secure);
    assert_eq!(settings.same_site, SameSite::None);
}

#[rstest]
#[case("1", Some(true))]
#[case("Yes", Some(true))]
#[case(" false ", Some(false))]
#[case("y", None)]
fn parses_boolean_toggles(#[case] raw: &str, #[case] expected: Option<bool>) {
    assert_eq!(parse_bool(raw), expected);
}
