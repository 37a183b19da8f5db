mod common;

use common::FakeFetcher;
use std::io::{self, Write};
use std::sync::{Arc, Mutex};
use workshop_catalog::apis::{StoreClient, WorkshopClient};
use workshop_catalog::constants::{STORE_APP_URL, WORKSHOP_ITEM_URL};
use workshop_catalog::error::ErrorKind;
use workshop_catalog::types::Lookup;

fn store(fetcher: FakeFetcher) -> StoreClient {
    StoreClient::new(Arc::new(fetcher), STORE_APP_URL)
}

fn workshop(fetcher: FakeFetcher) -> WorkshopClient {
    WorkshopClient::new(Arc::new(fetcher), WORKSHOP_ITEM_URL)
}

#[tokio::test]
async fn test_game_name_strips_discount_banner() {
    let client = store(FakeFetcher::new().with_game("431960", "Save 50% on Example Game on Steam"));
    let name = client.resolve_game("431960").await.unwrap();
    assert_eq!(name, Lookup::Found("Example Game".to_string()));
}

#[tokio::test]
async fn test_game_landing_page_is_not_found() {
    let client = store(FakeFetcher::new().with_game("1", "Welcome to Steam"));
    assert_eq!(client.resolve_game("1").await.unwrap(), Lookup::NotFound);
}

#[tokio::test]
async fn test_game_fetch_failure_is_transport_error() {
    let client = store(FakeFetcher::new());
    let err = client.resolve_game("2").await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Transport);
}

#[tokio::test]
async fn test_mod_record_with_details() {
    let client = workshop(FakeFetcher::new().with_mod(
        "1234",
        "Steam Workshop::Cool Map",
        &[
            ("File Size", "12.3 MB"),
            ("Posted", "3 Jan, 2020 @ 4:05pm"),
            ("Updated", "9 Feb @ 10:00am"),
        ],
    ));

    let record = client.resolve_mod("1234").await.unwrap().found().unwrap();
    assert_eq!(record.id, "1234");
    assert_eq!(record.mod_name, "Cool Map");
    assert_eq!(record.attributes.len(), 3);
    assert_eq!(record.attributes["file_size"], "12.3 MB");
    assert_eq!(record.attributes["posted"], "3 Jan, 2020 @ 4:05pm");
    assert_eq!(record.attributes["updated"], "9 Feb @ 10:00am");
}

#[tokio::test]
async fn test_mod_error_page_is_not_found() {
    let client = workshop(FakeFetcher::new().with_mod("9", "Steam Community :: Error", &[]));
    assert_eq!(client.resolve_mod("9").await.unwrap(), Lookup::NotFound);
}

#[tokio::test]
async fn test_mod_with_mismatched_details_truncates() {
    let body = r#"<html><head><title>Steam Workshop::Lopsided</title></head><body>
        <div class="detailsStatLeft">File Size </div>
        <div class="detailsStatLeft">Posted </div>
        <div class="detailsStatLeft">Updated </div>
        <div class="detailsStatRight">4 MB</div>
        </body></html>"#;
    let client = workshop(FakeFetcher::new().with_raw_mod_page("77", body));

    let record = client.resolve_mod("77").await.unwrap().found().unwrap();
    assert_eq!(record.mod_name, "Lopsided");
    assert_eq!(record.attributes.len(), 1);
    assert_eq!(record.attributes["file_size"], "4 MB");
}

#[tokio::test]
async fn test_mod_detail_cannot_overwrite_record_keys() {
    let client = workshop(FakeFetcher::new().with_mod(
        "55",
        "Steam Workshop::Real Name",
        &[("Mod Name", "Impostor"), ("ID", "0"), ("File Size", "2 MB")],
    ));

    let record = client.resolve_mod("55").await.unwrap().found().unwrap();
    assert_eq!(record.id, "55");
    assert_eq!(record.mod_name, "Real Name");
    let keys: Vec<_> = record.attributes.keys().map(String::as_str).collect();
    assert_eq!(keys, vec!["file_size"]);
}

/// Collects formatted log output in memory.
#[derive(Clone, Default)]
struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

impl Write for CapturedLogs {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[tokio::test]
async fn test_progress_lines_carry_no_tab_indentation() {
    let logs = CapturedLogs::default();
    let writer = logs.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_ansi(false)
        .with_writer(move || writer.clone())
        .finish();
    let _guard = tracing::subscriber::set_default(subscriber);

    let client = workshop(
        FakeFetcher::new()
            .with_mod("1234", "Steam Workshop::Cool Map", &[("File Size", "12.3 MB")])
            .with_mod("999", "Steam Community :: Error", &[]),
    );
    client.resolve_mod("1234").await.unwrap();
    client.resolve_mod("999").await.unwrap();
    store(FakeFetcher::new().with_game("1", "Welcome to Steam"))
        .resolve_game("1")
        .await
        .unwrap();

    let output = String::from_utf8(logs.0.lock().unwrap().clone()).unwrap();
    assert!(output.contains("1234 - Cool Map"));
    assert!(output.contains("file_size: 12.3 MB"));
    assert!(output.contains("Invalid mod 999"));
    assert!(output.contains("Invalid game 1"));
    assert!(!output.contains('\t'));
}
