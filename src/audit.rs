/// Audit logging for pipeline runs
///
/// Records each stage of a run (rule loading, script emission, live
/// verification, report persistence) as structured events, giving an
/// operator a machine-readable trail of what the tool did to which
/// artifacts and when.
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tokio::io::AsyncWriteExt;

/// Types of auditable events
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventType {
    LoadRules,
    EmitScript,
    VerifyRules,
    WriteReport,
}

/// A single audit log entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditEvent {
    /// When the event occurred (UTC)
    pub timestamp: chrono::DateTime<chrono::Utc>,

    /// Type of event
    pub event_type: EventType,

    /// Whether the operation succeeded
    pub success: bool,

    /// Additional structured data about the event
    pub details: serde_json::Value,

    /// Error message if operation failed
    pub error: Option<String>,
}

impl AuditEvent {
    /// Creates a new audit event
    pub fn new(
        event_type: EventType,
        success: bool,
        details: serde_json::Value,
        error: Option<String>,
    ) -> Self {
        Self {
            timestamp: chrono::Utc::now(),
            event_type,
            success,
            details,
            error,
        }
    }
}

/// Audit log writer
pub struct AuditLog {
    log_path: PathBuf,
}

impl AuditLog {
    /// Creates an audit log instance pointing at the fixed audit file
    pub fn new() -> Self {
        Self {
            log_path: PathBuf::from(crate::paths::AUDIT_FILE),
        }
    }

    /// Creates an audit log instance with an explicit path
    #[allow(dead_code)]
    pub fn with_path(log_path: PathBuf) -> Self {
        Self { log_path }
    }

    /// Appends an event to the audit log
    ///
    /// Events are written as JSON-lines format (one JSON object per line)
    ///
    /// # Errors
    ///
    /// Returns `Err` if file cannot be opened or written
    pub async fn log(&self, event: AuditEvent) -> std::io::Result<()> {
        let json = serde_json::to_string(&event)?;

        let mut file = tokio::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.log_path)
            .await?;

        file.write_all(json.as_bytes()).await?;
        file.write_all(b"\n").await?;
        file.sync_all().await?;

        Ok(())
    }

    /// Reads the most recent events from the log
    ///
    /// # Errors
    ///
    /// Returns `Err` if file cannot be read
    #[allow(dead_code)]
    pub async fn read_recent(&self, count: usize) -> std::io::Result<Vec<AuditEvent>> {
        let content = tokio::fs::read_to_string(&self.log_path).await?;

        let events: Vec<AuditEvent> = content
            .lines()
            .rev()
            .take(count)
            .filter_map(|line| serde_json::from_str(line).ok())
            .collect();

        Ok(events)
    }
}

impl Default for AuditLog {
    fn default() -> Self {
        Self::new()
    }
}

/// Logs a rule-loading step
pub async fn log_load(rule_count: usize, success: bool, error: Option<String>) {
    let event = AuditEvent::new(
        EventType::LoadRules,
        success,
        serde_json::json!({
            "rule_count": rule_count,
        }),
        error,
    );

    if let Err(e) = AuditLog::new().log(event).await {
        tracing::warn!("Failed to write audit log: {}", e);
    }
}

/// Logs a script-emission step
pub async fn log_emit(script: &str, command_count: usize, success: bool, error: Option<String>) {
    let event = AuditEvent::new(
        EventType::EmitScript,
        success,
        serde_json::json!({
            "script": script,
            "command_count": command_count,
        }),
        error,
    );

    if let Err(e) = AuditLog::new().log(event).await {
        tracing::warn!("Failed to write audit log: {}", e);
    }
}

/// Logs a verification step
pub async fn log_verify(
    rule_count: usize,
    found: usize,
    not_found: usize,
    unrecognized: usize,
    success: bool,
    error: Option<String>,
) {
    let event = AuditEvent::new(
        EventType::VerifyRules,
        success,
        serde_json::json!({
            "rule_count": rule_count,
            "found": found,
            "not_found": not_found,
            "unrecognized": unrecognized,
        }),
        error,
    );

    if let Err(e) = AuditLog::new().log(event).await {
        tracing::warn!("Failed to write audit log: {}", e);
    }
}

/// Logs a report-persistence step
pub async fn log_report(report: &str, success: bool, error: Option<String>) {
    let event = AuditEvent::new(
        EventType::WriteReport,
        success,
        serde_json::json!({
            "report": report,
        }),
        error,
    );

    if let Err(e) = AuditLog::new().log(event).await {
        tracing::warn!("Failed to write audit log: {}", e);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn audit_event_creation() {
        let event = AuditEvent::new(
            EventType::EmitScript,
            true,
            serde_json::json!({"command_count": 5}),
            None,
        );

        assert!(event.success);
        assert!(event.error.is_none());
        assert_eq!(event.details["command_count"], 5);
    }

    #[test]
    fn event_serialization() {
        let event = AuditEvent::new(
            EventType::VerifyRules,
            false,
            serde_json::json!({"not_found": 2}),
            Some("shell unavailable".to_string()),
        );

        let json = serde_json::to_string(&event).unwrap();
        assert!(json.contains("verify_rules"));
        assert!(json.contains("shell unavailable"));
    }

    #[test]
    fn event_deserialization() {
        let json = r#"{"timestamp":"2024-01-01T00:00:00Z","event_type":"load_rules","success":true,"details":{},"error":null}"#;
        let event: AuditEvent = serde_json::from_str(json).unwrap();

        assert!(event.success);
        assert!(matches!(event.event_type, EventType::LoadRules));
    }

    #[tokio::test]
    async fn events_append_as_json_lines() {
        let dir = tempfile::tempdir().unwrap();
        let log = AuditLog::with_path(dir.path().join("audit.log"));

        log.log(AuditEvent::new(
            EventType::LoadRules,
            true,
            serde_json::json!({"rule_count": 3}),
            None,
        ))
        .await
        .unwrap();
        log.log(AuditEvent::new(
            EventType::WriteReport,
            true,
            serde_json::json!({}),
            None,
        ))
        .await
        .unwrap();

        let events = log.read_recent(10).await.unwrap();
        assert_eq!(events.len(), 2);
        assert!(matches!(events[0].event_type, EventType::WriteReport));
        assert!(matches!(events[1].event_type, EventType::LoadRules));
    }
}
