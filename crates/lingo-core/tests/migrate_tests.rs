use lingo_core::{Session, migrate_legacy_config_to};
use lingo_test_utils::{MockApi, ProjectFixture};
use pretty_assertions::assert_eq;

const CREDENTIALS: &str = "\
    [https://app.example.com]\n\
    api_hostname = https://api.example.com\n\
    hostname = https://app.example.com\n\
    username = api\n\
    password = apassword\n";

const TWO_ORGS: &str = r#"{"data": [
    {"type": "organizations", "id": "o:org", "attributes": {"slug": "org"}},
    {"type": "organizations", "id": "o:org2", "attributes": {"slug": "org2"}}
]}"#;

const PROJECT_HIT: &str = r#"{"data": [{
    "type": "projects",
    "id": "o:org:p:projslug",
    "attributes": {"name": "Proj Name", "slug": "projslug"}
}]}"#;

const EMPTY: &str = r#"{"data": []}"#;

fn resolving_api() -> MockApi {
    MockApi::new()
        .respond("/organizations", TWO_ORGS)
        .respond(&MockApi::projects_path("o:org", "projslug"), PROJECT_HIT)
        .respond(&MockApi::projects_path("o:org2", "projslug"), EMPTY)
}

fn migrate(session: &mut Session, api: &MockApi) -> (Option<lingo_fs::NormalizedPath>, String) {
    let mut out = Vec::new();
    let backup = migrate_legacy_config_to(session, api, &mut out).unwrap();
    (backup, String::from_utf8(out).unwrap())
}

#[test]
fn test_successful_migration() {
    let fixture = ProjectFixture::new();
    fixture.write_credentials(CREDENTIALS);
    fixture.write_config(
        "\
        [main]\n\
        host = https://app.example.com\n\
        [projslug.ares]\n\
        file_filter = locale/<lang>.po\n\
        minimum_perc = 0\n\
        source_file = locale/en.po\n\
        source_lang = en\n\
        type = PO\n\
        trans.pt-pt = locale/other/pt_PT/en.po\n\
        trans.fr_CA = locale/other/fr_CA/ui.po\n",
    );

    let mut session = Session::load(&fixture.root()).unwrap();
    assert_eq!(session.config.resources[0].organization_slug, "");
    assert_eq!(
        session.active_host().unwrap().token.as_deref(),
        Some("apassword")
    );

    let (backup, output) = migrate(&mut session, &resolving_api());
    assert!(backup.is_some());
    assert_eq!(output, "");

    let reloaded = Session::load(&fixture.root()).unwrap();
    let resource = &reloaded.config.resources[0];
    assert_eq!(resource.organization_slug, "org");
    assert_eq!(resource.canonical_id(), "o:org:p:projslug:r:ares");
    assert_eq!(resource.overrides.len(), 2);
    assert_eq!(resource.source_file, "locale/en.po");
    assert_eq!(resource.minimum_percentage, 0);
}

#[test]
fn test_migration_constructs_missing_source_file() {
    let fixture = ProjectFixture::new();
    fixture.write_credentials(CREDENTIALS);
    fixture.write_config(
        "\
        [main]\n\
        host = https://app.example.com\n\
        [projslug.ares]\n\
        file_filter = locale/<lang>.po\n\
        minimum_perc = 0\n\
        source_lang = en\n\
        type = PO\n\
        trans.pt-pt = locale/other/pt_PT/en.po\n\
        trans.fr_CA = locale/other/fr_CA/ui.po\n",
    );
    fixture.write_file("locale/en.po", "msgid \"\"\nmsgstr \"\"\n");

    let mut session = Session::load(&fixture.root()).unwrap();
    let (_, output) = migrate(&mut session, &resolving_api());
    assert_eq!(output, "");

    let reloaded = Session::load(&fixture.root()).unwrap();
    let resource = &reloaded.config.resources[0];
    assert_eq!(resource.organization_slug, "org");
    assert_eq!(resource.source_file, "locale/en.po");
    assert_eq!(resource.overrides.len(), 2);
}

#[test]
fn test_missing_source_file_stays_empty() {
    let fixture = ProjectFixture::new();
    fixture.write_credentials(CREDENTIALS);
    fixture.write_config(
        "\
        [main]\n\
        host = https://app.example.com\n\
        [projslug.ares]\n\
        file_filter = locale/<lang>.po\n\
        source_lang = en\n\
        type = PO\n",
    );
    // no locale/en.po on disk

    let mut session = Session::load(&fixture.root()).unwrap();
    migrate(&mut session, &resolving_api());

    let reloaded = Session::load(&fixture.root()).unwrap();
    assert_eq!(reloaded.config.resources[0].organization_slug, "org");
    assert_eq!(reloaded.config.resources[0].source_file, "");
}

#[test]
fn test_unsupported_username_scheme_reports_missing_token() {
    let fixture = ProjectFixture::new();
    fixture.write_credentials(&CREDENTIALS.replace("username = api", "username = tk"));
    fixture.write_config(
        "\
        [main]\n\
        host = https://app.example.com\n\
        [projslug.ares]\n\
        file_filter = locale/<lang>.po\n\
        source_lang = en\n\
        type = PO\n",
    );

    let mut session = Session::load(&fixture.root()).unwrap();
    let api = MockApi::new().respond("/organizations", EMPTY);
    let (backup, output) = migrate(&mut session, &api);

    assert!(backup.is_none());
    assert!(output.contains("API token not found."));
    assert_eq!(session.config.resources[0].organization_slug, "");
    assert!(fixture.backup_files().is_empty());
}

#[test]
fn test_missing_credentials_document_reports_token_needed() {
    let fixture = ProjectFixture::new();
    fixture.write_config(
        "\
        [main]\n\
        host = https://app.example.com\n\
        [projslug.ares]\n\
        file_filter = locale/<lang>.po\n\
        source_lang = en\n\
        type = PO\n",
    );

    let mut session = Session::load(&fixture.root()).unwrap();
    let api = MockApi::new().respond("/organizations", EMPTY);
    let (backup, output) = migrate(&mut session, &api);

    assert!(backup.is_none());
    assert!(output.contains("Please provide an API token to continue."));
    assert!(fixture.backup_files().is_empty());
}

#[test]
fn test_partial_failure_keeps_legacy_section() {
    let fixture = ProjectFixture::new();
    fixture.write_credentials(CREDENTIALS);
    fixture.write_config(
        "\
        [main]\n\
        host = https://app.example.com\n\
        [projslug1.ares]\n\
        file_filter = locale/<lang>.po\n\
        minimum_perc = 10\n\
        source_file = locale/en.po\n\
        source_lang = en\n\
        type = PO\n\
        [projslug2.ares2]\n\
        file_filter = locale/<lang>.po\n\
        minimum_perc = 0\n\
        source_file = locale/en.po\n\
        source_lang = en\n\
        type = PO\n",
    );

    let api = MockApi::new()
        .respond("/organizations", TWO_ORGS)
        .respond(&MockApi::projects_path("o:org", "projslug1"), EMPTY)
        .respond(&MockApi::projects_path("o:org2", "projslug1"), EMPTY)
        .respond(
            &MockApi::projects_path("o:org", "projslug2"),
            r#"{"data": [{
                "type": "projects",
                "id": "o:org:p:projslug2",
                "attributes": {"name": "Proj Name 2", "slug": "projslug2"}
            }]}"#,
        );

    let mut session = Session::load(&fixture.root()).unwrap();
    let (backup, output) = migrate(&mut session, &api);

    assert!(backup.is_some());
    assert!(output.contains("Could not migrate resource `ares`"));

    let content = fixture.read_config();
    assert!(content.contains("[projslug1.ares]"));
    assert!(content.contains("[o:org:p:projslug2:r:ares2]"));
    assert!(content.contains("minimum_perc = 10"));
    assert!(content.contains("minimum_perc = 0"));
}

#[test]
fn test_diagnostics_follow_resource_order() {
    let fixture = ProjectFixture::new();
    fixture.write_credentials(CREDENTIALS);
    fixture.write_config(
        "\
        [main]\n\
        host = https://app.example.com\n\
        [gone1.first]\n\
        type = PO\n\
        [gone2.second]\n\
        type = PO\n",
    );

    let api = MockApi::new()
        .respond("/organizations", TWO_ORGS)
        .respond(&MockApi::projects_path("o:org", "gone1"), EMPTY)
        .respond(&MockApi::projects_path("o:org2", "gone1"), EMPTY)
        .respond(&MockApi::projects_path("o:org", "gone2"), EMPTY)
        .respond(&MockApi::projects_path("o:org2", "gone2"), EMPTY);

    let mut session = Session::load(&fixture.root()).unwrap();
    let (_, output) = migrate(&mut session, &api);

    let first = output.find("Could not migrate resource `first`").unwrap();
    let second = output.find("Could not migrate resource `second`").unwrap();
    assert!(first < second);
}

#[test]
fn test_backup_contains_original_document() {
    let fixture = ProjectFixture::new();
    fixture.write_credentials(CREDENTIALS);
    fixture.write_config(
        "\
        [main]\n\
        host = https://app.example.com\n\
        [projslug.ares]\n\
        file_filter = locale/<lang>.po\n\
        minimum_perc = 0\n\
        source_file = locale/en.po\n\
        source_lang = en\n\
        type = PO\n",
    );

    let mut session = Session::load(&fixture.root()).unwrap();
    let (backup, _) = migrate(&mut session, &resolving_api());
    let backup = backup.unwrap();

    let backup_content = std::fs::read_to_string(backup.to_native()).unwrap();
    assert!(backup_content.contains("[projslug.ares]"));

    let live_content = fixture.read_config();
    assert!(live_content.contains("o:org:p:projslug:r:ares"));
    assert!(!live_content.contains("[projslug.ares]"));
}

#[test]
fn test_migration_is_idempotent() {
    let fixture = ProjectFixture::new();
    fixture.write_credentials(CREDENTIALS);
    fixture.write_config(
        "\
        [main]\n\
        host = https://app.example.com\n\
        [projslug.ares]\n\
        file_filter = locale/<lang>.po\n\
        source_lang = en\n\
        type = PO\n",
    );

    let mut session = Session::load(&fixture.root()).unwrap();
    migrate(&mut session, &resolving_api());
    let after_first = fixture.read_config();

    // Second run: everything is canonical, so the API is never asked to
    // resolve anything and no diagnostics appear.
    let mut session = Session::load(&fixture.root()).unwrap();
    let silent_api = MockApi::new();
    let (backup, output) = migrate(&mut session, &silent_api);

    assert!(backup.is_some());
    assert_eq!(output, "");
    assert_eq!(fixture.read_config(), after_first);
}

#[test]
fn test_transport_failure_aborts_run() {
    let fixture = ProjectFixture::new();
    fixture.write_credentials(CREDENTIALS);
    fixture.write_config(
        "\
        [main]\n\
        host = https://app.example.com\n\
        [projslug.ares]\n\
        type = PO\n",
    );

    // Malformed body surfaces as a decode error from the listing.
    let api = MockApi::new().respond("/organizations", "not json");

    let mut session = Session::load(&fixture.root()).unwrap();
    let mut out = Vec::new();
    let result = migrate_legacy_config_to(&mut session, &api, &mut out);

    assert!(result.is_err());
    assert!(fixture.backup_files().is_empty());
}
