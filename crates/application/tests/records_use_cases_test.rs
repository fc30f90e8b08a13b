use zonekeeper_application::ports::SimulatedOperation;
use zonekeeper_domain::{
    AuditLevel, BatchStatus, DnsRecord, DomainError, RecordDraft, RecordFilter, RecordKey,
    RecordUpdate,
};

mod helpers;
use helpers::Harness;

// ============================================================================
// ListRecordsUseCase
// ============================================================================

#[tokio::test]
async fn test_list_with_type_filter_returns_single_a_record() {
    let h = Harness::new();

    let records = h
        .list
        .execute("example.com", &RecordFilter::from_query(Some("A"), None))
        .await
        .unwrap();

    assert_eq!(records, vec![DnsRecord::new("www", "A", "192.168.1.100")]);
    assert_eq!(h.audit.levels(), vec![AuditLevel::Info]);
    assert!(h.audit.last().unwrap().message.contains("Fetched 1 records"));
}

#[tokio::test]
async fn test_list_unknown_zone_is_warning() {
    let h = Harness::new();

    let result = h.list.execute("nope.local", &RecordFilter::default()).await;

    assert_eq!(result, Err(DomainError::ZoneNotFound("nope.local".to_string())));
    assert_eq!(h.audit.levels(), vec![AuditLevel::Warning]);
}

// ============================================================================
// AddRecordUseCase
// ============================================================================

#[tokio::test]
async fn test_add_then_search_returns_new_record() {
    let h = Harness::new();

    let added = h
        .add
        .execute("example.com", RecordDraft::new("new", "A", "10.0.0.1"))
        .await
        .unwrap();
    assert_eq!(added, DnsRecord::new("new", "A", "10.0.0.1"));

    let found = h
        .list
        .execute("example.com", &RecordFilter::from_query(None, Some("new")))
        .await
        .unwrap();
    assert_eq!(found, vec![added]);
}

#[tokio::test]
async fn test_add_appends_at_end() {
    let h = Harness::new();

    h.add
        .execute("example.com", RecordDraft::new("last", "TXT", "hello"))
        .await
        .unwrap();

    let records = h.zones.records("example.com").await;
    assert_eq!(records.len(), 6);
    assert_eq!(records.last().unwrap().hostname, "last");
}

#[tokio::test]
async fn test_repeated_add_creates_duplicates() {
    let h = Harness::new();
    let draft = RecordDraft::new("www", "A", "192.168.1.100");

    h.add.execute("example.com", draft.clone()).await.unwrap();
    h.add.execute("example.com", draft).await.unwrap();

    let matching = h
        .zones
        .records("example.com")
        .await
        .into_iter()
        .filter(|r| r == &DnsRecord::new("www", "A", "192.168.1.100"))
        .count();
    assert_eq!(matching, 3);
}

#[tokio::test]
async fn test_add_missing_field_leaves_no_audit_entry() {
    let h = Harness::new();
    let draft = RecordDraft {
        hostname: Some("x".into()),
        record_type: Some("A".into()),
        value: None,
    };

    let result = h.add.execute("example.com", draft).await;

    assert!(matches!(result, Err(DomainError::Validation(_))));
    assert_eq!(h.audit.count(), 0);
    assert!(h.delay.calls().is_empty());
    assert_eq!(h.zones.records("example.com").await.len(), 5);
}

#[tokio::test]
async fn test_add_validates_before_checking_zone() {
    let h = Harness::new();

    let result = h.add.execute("nope.local", RecordDraft::default()).await;

    assert!(matches!(result, Err(DomainError::Validation(_))));
}

#[tokio::test]
async fn test_add_to_unknown_zone() {
    let h = Harness::new();

    let result = h
        .add
        .execute("nope.local", RecordDraft::new("a", "A", "1.1.1.1"))
        .await;

    assert!(matches!(result, Err(DomainError::ZoneNotFound(_))));
    assert_eq!(h.audit.levels(), vec![AuditLevel::Warning]);
}

#[tokio::test]
async fn test_add_pauses_once() {
    let h = Harness::new();

    h.add
        .execute("example.com", RecordDraft::new("a", "A", "1.1.1.1"))
        .await
        .unwrap();

    assert_eq!(h.delay.calls(), vec![SimulatedOperation::Write]);
}

// ============================================================================
// UpdateRecordUseCase
// ============================================================================

#[tokio::test]
async fn test_update_rewrites_value_in_place() {
    let h = Harness::new();

    h.update
        .execute(
            "example.com",
            RecordUpdate::new("www", "A", "192.168.1.100", "192.168.1.200"),
        )
        .await
        .unwrap();

    let records = h.zones.records("example.com").await;
    assert_eq!(records[0], DnsRecord::new("www", "A", "192.168.1.200"));
    assert_eq!(h.audit.levels(), vec![AuditLevel::Info]);
}

#[tokio::test]
async fn test_update_with_stale_old_value_is_record_not_found() {
    let h = Harness::new();
    let update = RecordUpdate::new("www", "A", "192.168.1.100", "192.168.1.200");

    h.update.execute("example.com", update.clone()).await.unwrap();
    let second = h.update.execute("example.com", update).await;

    assert!(matches!(second, Err(DomainError::RecordNotFound(_))));
    assert_eq!(h.audit.levels(), vec![AuditLevel::Info, AuditLevel::Error]);
}

#[tokio::test]
async fn test_update_only_first_duplicate() {
    let h = Harness::new();
    h.add
        .execute("example.com", RecordDraft::new("www", "A", "192.168.1.100"))
        .await
        .unwrap();

    h.update
        .execute(
            "example.com",
            RecordUpdate::new("www", "A", "192.168.1.100", "10.9.9.9"),
        )
        .await
        .unwrap();

    let records = h.zones.records("example.com").await;
    assert_eq!(records[0].value, "10.9.9.9");
    assert_eq!(records[5].value, "192.168.1.100");
}

#[tokio::test]
async fn test_update_matching_is_case_sensitive() {
    let h = Harness::new();

    let result = h
        .update
        .execute(
            "example.com",
            RecordUpdate::new("WWW", "A", "192.168.1.100", "10.0.0.1"),
        )
        .await;

    assert!(matches!(result, Err(DomainError::RecordNotFound(_))));
}

#[tokio::test]
async fn test_update_requires_all_fields() {
    let h = Harness::new();
    let mut update = RecordUpdate::new("www", "A", "192.168.1.100", "10.0.0.1");
    update.old_value = None;

    let result = h.update.execute("example.com", update).await;

    assert!(matches!(result, Err(DomainError::Validation(_))));
    assert_eq!(h.audit.count(), 0);
}

// ============================================================================
// DeleteRecordsUseCase
// ============================================================================

#[tokio::test]
async fn test_delete_partial_success() {
    let h = Harness::new();

    let report = h
        .delete
        .execute(
            "example.com",
            vec![
                RecordKey::new("www", "A", "192.168.1.100"),
                RecordKey::new("ghost", "A", "9.9.9.9"),
            ],
        )
        .await
        .unwrap();

    assert_eq!(report.deleted_count, 1);
    assert_eq!(report.failed.len(), 1);
    assert_eq!(report.failed[0].record.hostname, "ghost");
    assert_eq!(report.failed[0].error, DomainError::DeletionFailed);
    assert_eq!(report.status(), BatchStatus::Partial);
    assert_eq!(h.audit.levels(), vec![AuditLevel::Info, AuditLevel::Error]);
    assert_eq!(h.zones.records("example.com").await.len(), 4);
}

#[tokio::test]
async fn test_delete_never_added_leaves_zone_unchanged() {
    let h = Harness::new();

    let report = h
        .delete
        .execute("example.com", vec![RecordKey::new("ghost", "A", "9.9.9.9")])
        .await
        .unwrap();

    assert_eq!(report.deleted_count, 0);
    assert_eq!(report.failed.len(), 1);
    assert_eq!(h.zones.records("example.com").await.len(), 5);
}

#[tokio::test]
async fn test_delete_removes_all_duplicates_counts_once() {
    let h = Harness::new();
    h.add
        .execute("example.com", RecordDraft::new("www", "A", "192.168.1.100"))
        .await
        .unwrap();

    let report = h
        .delete
        .execute(
            "example.com",
            vec![RecordKey::new("www", "A", "192.168.1.100")],
        )
        .await
        .unwrap();

    assert_eq!(report.deleted_count, 1);
    assert_eq!(report.status(), BatchStatus::Complete);
    assert_eq!(h.zones.records("example.com").await.len(), 4);
}

#[tokio::test]
async fn test_delete_same_key_twice_second_fails() {
    let h = Harness::new();
    let key = RecordKey::new("mail", "MX", "mail.example.com");

    let report = h
        .delete
        .execute("example.com", vec![key.clone(), key])
        .await
        .unwrap();

    assert_eq!(report.deleted_count, 1);
    assert_eq!(report.failed.len(), 1);
}

#[tokio::test]
async fn test_delete_empty_batch_is_validation_error() {
    let h = Harness::new();

    let result = h.delete.execute("example.com", vec![]).await;

    assert!(matches!(result, Err(DomainError::Validation(_))));
    assert_eq!(h.audit.count(), 0);
}

#[tokio::test]
async fn test_delete_pauses_per_record() {
    let h = Harness::new();

    h.delete
        .execute(
            "sub.example.com",
            vec![
                RecordKey::new("dev", "A", "192.168.1.101"),
                RecordKey::new("test", "A", "192.168.1.102"),
            ],
        )
        .await
        .unwrap();

    assert_eq!(
        h.delay.calls(),
        vec![SimulatedOperation::Delete, SimulatedOperation::Delete]
    );
    assert!(h.zones.records("sub.example.com").await.is_empty());
}
