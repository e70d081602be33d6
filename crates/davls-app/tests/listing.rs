//! End-to-end tests for the listing command: file in, rendered listing out.

use std::io::Write;

use davls_app::cli::{Command, Input, ListArgs};
use davls_app::error::AppError;
use davls_app::listing::{load_document, run};
use davls_core::config::{OutputFormat, Settings};
use davls_rfc::rfc::dav::core::FileEntry;

const NEXTCLOUD_LISTING: &str = r#"<?xml version="1.0"?>
<d:multistatus xmlns:d="DAV:" xmlns:oc="http://owncloud.org/ns">
 <d:response>
  <d:href>/remote.php/dav/files/alice/Photos/</d:href>
  <d:propstat>
   <d:prop>
    <d:getlastmodified>Fri, 05 Jan 2024 12:00:00 GMT</d:getlastmodified>
    <d:resourcetype><d:collection/></d:resourcetype>
   </d:prop>
   <d:status>HTTP/1.1 200 OK</d:status>
  </d:propstat>
 </d:response>
 <d:response>
  <d:href>/remote.php/dav/files/alice/Photos/Summer%202023/</d:href>
  <d:propstat>
   <d:prop>
    <d:getlastmodified>Fri, 05 Jan 2024 12:30:00 GMT</d:getlastmodified>
    <d:resourcetype><d:collection/></d:resourcetype>
   </d:prop>
   <d:status>HTTP/1.1 200 OK</d:status>
  </d:propstat>
 </d:response>
 <d:response>
  <d:href>/remote.php/dav/files/alice/Photos/beach.jpg</d:href>
  <d:propstat>
   <d:prop>
    <d:getlastmodified>Sat, 06 Jan 2024 09:15:00 GMT</d:getlastmodified>
    <d:getcontentlength>524288</d:getcontentlength>
    <d:resourcetype/>
   </d:prop>
   <d:status>HTTP/1.1 200 OK</d:status>
  </d:propstat>
 </d:response>
</d:multistatus>"#;

fn default_settings() -> Settings {
    Settings::build(Settings::defaults().unwrap()).unwrap()
}

fn write_fixture() -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(NEXTCLOUD_LISTING.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

#[test_log::test]
fn table_listing_from_file() {
    let fixture = write_fixture();
    let command = Command::parse([
        fixture.path().display().to_string(),
        "remote.php/dav/files/alice/Photos".to_string(),
    ])
    .unwrap();
    let Command::List(args) = command else {
        panic!("expected list command");
    };

    let document = load_document(&args.input).unwrap();
    let mut out = Vec::new();
    let count = run(&args, &default_settings(), &document, &mut out).unwrap();

    assert_eq!(count, 2);
    let table = String::from_utf8(out).unwrap();
    let lines: Vec<&str> = table.lines().collect();
    assert_eq!(
        lines,
        [
            "d      0 2024-01-05 12:30 Summer 2023/",
            "- 524288 2024-01-06 09:15 beach.jpg",
        ]
    );
}

#[test]
fn json_listing_uses_configured_defaults() {
    let fixture = write_fixture();
    let settings = Settings::build(
        Settings::defaults()
            .unwrap()
            .set_override("listing.format", "json")
            .unwrap()
            .set_override("listing.query_path", "/remote.php/dav/files/alice/Photos/")
            .unwrap(),
    )
    .unwrap();
    let args = ListArgs {
        input: Input::File(fixture.path().to_path_buf()),
        query_path: None,
        format: None,
    };

    let document = load_document(&args.input).unwrap();
    let mut out = Vec::new();
    run(&args, &settings, &document, &mut out).unwrap();

    let entries: Vec<FileEntry> = serde_json::from_slice(&out).unwrap();
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].name, "Summer 2023");
    assert_eq!(entries[0].path, "/remote.php/dav/files/alice/Photos/Summer 2023/");
    assert!(entries[0].is_dir);
    assert_eq!(entries[1].name, "beach.jpg");
    assert_eq!(entries[1].size, 524_288);
    assert_eq!(entries[1].modified, "Sat, 06 Jan 2024 09:15:00 GMT");
}

#[test]
fn command_line_overrides_configuration() {
    let settings = default_settings();
    let args = ListArgs {
        input: Input::Stdin,
        query_path: Some("/elsewhere".to_string()),
        format: Some(OutputFormat::Json),
    };

    let mut out = Vec::new();
    let count = run(&args, &settings, NEXTCLOUD_LISTING, &mut out).unwrap();

    // Nothing matches /elsewhere, so the Photos collection is listed too.
    assert_eq!(count, 3);
    let entries: Vec<FileEntry> = serde_json::from_slice(&out).unwrap();
    assert_eq!(entries[0].name, "Photos");
}

#[test]
fn empty_document_lists_nothing() {
    let mut out = Vec::new();
    let args = ListArgs {
        input: Input::Stdin,
        query_path: None,
        format: None,
    };

    let count = run(&args, &default_settings(), "", &mut out).unwrap();

    assert_eq!(count, 0);
    assert!(out.is_empty());
}

#[test]
fn missing_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let input = Input::File(dir.path().join("missing.xml"));

    let err = load_document(&input).unwrap_err();
    assert!(matches!(err, AppError::Io(_)));
}
