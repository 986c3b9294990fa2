use std::sync::Arc;
use std::thread;

use tessera_core::traits::IAuditSink;
use tessera_core::{SafetyAuditRecord, SensitivityTier, SourceTypeRegistry, TesseraConfig};
use tessera_privacy::audit_log::AuditLine;
use tessera_privacy::{InMemoryAuditLog, JsonlAuditLog, PatternScrubber, SafetyGate};
use test_fixtures::builders::raw_unit;

fn record(unit_id: &str) -> SafetyAuditRecord {
    SafetyAuditRecord {
        unit_id: unit_id.to_string(),
        tier: SensitivityTier::Sensitive,
        entities_found: 2,
        entity_types: vec!["EMAIL".to_string(), "PHONE".to_string()],
        secrets_found: 0,
        was_scrubbed: true,
    }
}

#[test]
fn jsonl_log_appends_one_line_per_record() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("audit.jsonl");

    let log = JsonlAuditLog::open(&path).unwrap();
    log.append(&record("a")).unwrap();
    log.append(&record("b")).unwrap();

    let lines: Vec<AuditLine> = JsonlAuditLog::read_all(&path).unwrap();
    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0].record, record("a"));
    assert_eq!(lines[1].record.unit_id, "b");
    assert!(lines[0].recorded_at <= lines[1].recorded_at);

    let raw = std::fs::read_to_string(&path).unwrap();
    let first: serde_json::Value = serde_json::from_str(raw.lines().next().unwrap()).unwrap();
    assert_eq!(first["tier"], "SENSITIVE");
    assert_eq!(first["unit_id"], "a");
}

#[test]
fn reopening_appends_instead_of_truncating() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("audit.jsonl");

    JsonlAuditLog::open(&path).unwrap().append(&record("first")).unwrap();
    JsonlAuditLog::open(&path).unwrap().append(&record("second")).unwrap();

    let ids: Vec<String> = JsonlAuditLog::read_all(&path)
        .unwrap()
        .into_iter()
        .map(|l| l.record.unit_id)
        .collect();
    assert_eq!(ids, vec!["first", "second"]);
}

#[test]
fn concurrent_writers_never_interleave_lines() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("audit.jsonl");
    let log = Arc::new(JsonlAuditLog::open(&path).unwrap());

    let handles: Vec<_> = (0..8)
        .map(|t| {
            let log = Arc::clone(&log);
            thread::spawn(move || {
                for i in 0..25 {
                    log.append(&record(&format!("t{t}-{i}"))).unwrap();
                }
            })
        })
        .collect();
    for h in handles {
        h.join().unwrap();
    }

    assert_eq!(JsonlAuditLog::read_all(&path).unwrap().len(), 200);
}

#[test]
fn in_memory_log_keeps_append_order() {
    let log = InMemoryAuditLog::new();
    assert!(log.is_empty());
    log.append(&record("x")).unwrap();
    log.append(&record("y")).unwrap();
    let ids: Vec<_> = log.records().into_iter().map(|r| r.unit_id).collect();
    assert_eq!(ids, vec!["x", "y"]);
}

#[test]
fn gate_writes_to_the_jsonl_log() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("audit.jsonl");
    let gate = SafetyGate::new(
        Arc::new(SourceTypeRegistry::builtin()),
        Arc::new(PatternScrubber::new()),
        Arc::new(JsonlAuditLog::open(&path).unwrap()),
    );

    gate.certify(raw_unit("docs/a.md", "markdown_doc", "ops@corp.io")).unwrap();
    let scrubbed = gate
        .certify(raw_unit("slack://c/5", "chat_message", "ops@corp.io"))
        .unwrap();

    let lines = JsonlAuditLog::read_all(&path).unwrap();
    assert_eq!(lines.len(), 1);
    assert_eq!(lines[0].record.unit_id, scrubbed.id());
    assert_eq!(lines[0].record.entity_types, vec!["EMAIL"]);
}

#[test]
fn configured_gate_uses_the_audit_path_and_extra_source_types() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("gate-audit.jsonl");
    let config = TesseraConfig::from_toml(&format!(
        r#"
        [privacy]
        audit_log_path = '{}'

        [[source_types]]
        name = "pager_alert"
        tier = "sensitive"
        category = "runbook"
        chunker = "markdown"
        tokenizer = "natural_language"
        "#,
        path.display()
    ))
    .unwrap();
    let gate = SafetyGate::from_config(&config).unwrap();

    let unit = gate
        .certify(raw_unit("pd://alert/9", "pager_alert", "paged ops@corp.io"))
        .unwrap();
    assert_eq!(unit.text(), "paged [EMAIL]");
    assert_eq!(unit.tier(), SensitivityTier::Sensitive);

    let lines = JsonlAuditLog::read_all(&path).unwrap();
    assert_eq!(lines.len(), 1);
    assert_eq!(lines[0].record.tier, SensitivityTier::Sensitive);
}

#[test]
fn configured_gate_rejects_unknown_tiers() {
    let config = TesseraConfig::from_toml(
        r#"
        [[source_types]]
        name = "fax"
        tier = "secret"
        category = "docs"
        chunker = "markdown"
        tokenizer = "natural_language"
        "#,
    )
    .unwrap();
    assert!(SafetyGate::from_config(&config).err().unwrap().is_configuration());
}
