//! Diagram block construction and page body upsert.
//!
//! The diagram block lives between HTML comment markers inside the page's
//! storage-format body, so repeated runs replace the block in place instead
//! of appending duplicates.

use chrono::{DateTime, Utc};

pub const START_MARKER: &str = "<!-- AUTO-GENERATED-ARCH-DIAGRAMS-START -->";
pub const END_MARKER: &str = "<!-- AUTO-GENERATED-ARCH-DIAGRAMS-END -->";

/// Build the marker-delimited storage-format block embedding both diagrams.
pub fn build_diagram_block(system_png: &str, sequence_png: &str, now: DateTime<Utc>) -> String {
    let timestamp = now.format("%Y-%m-%d %H:%M UTC");
    format!(
        "{START_MARKER}\
         <h2>PlatForge Architecture Diagrams</h2>\
         <p>Auto-updated: {timestamp}</p>\
         <h3>System Architecture</h3>\
         <p><ac:image ac:width=\"1600\"><ri:attachment ri:filename=\"{system_png}\" /></ac:image></p>\
         <h3>Generation Request Sequence</h3>\
         <p><ac:image ac:width=\"1600\"><ri:attachment ri:filename=\"{sequence_png}\" /></ac:image></p>\
         {END_MARKER}"
    )
}

/// Replace the block between the markers, or append `<hr/>` + block when
/// the page carries no block yet.
pub fn upsert_diagram_block(storage: &str, block: &str) -> String {
    if let (Some(start), Some(end_start)) = (storage.find(START_MARKER), storage.find(END_MARKER)) {
        let end = end_start + END_MARKER.len();
        format!("{}{}{}", &storage[..start], block, &storage[end..])
    } else {
        format!("{storage}<hr/>{block}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn block() -> String {
        let now = Utc.with_ymd_and_hms(2024, 5, 1, 12, 30, 0).unwrap();
        build_diagram_block("system.png", "sequence.png", now)
    }

    #[test]
    fn test_block_is_marker_delimited_with_timestamp() {
        let block = block();
        assert!(block.starts_with(START_MARKER));
        assert!(block.ends_with(END_MARKER));
        assert!(block.contains("Auto-updated: 2024-05-01 12:30 UTC"));
        assert!(block.contains("ri:filename=\"system.png\""));
        assert!(block.contains("ri:filename=\"sequence.png\""));
    }

    #[test]
    fn test_upsert_appends_when_no_markers() {
        let storage = "<p>Runbook</p>";
        let updated = upsert_diagram_block(storage, &block());
        assert!(updated.starts_with("<p>Runbook</p><hr/>"));
        assert!(updated.ends_with(END_MARKER));
    }

    #[test]
    fn test_upsert_replaces_existing_block() {
        let storage = format!(
            "<p>before</p>{START_MARKER}<p>stale</p>{END_MARKER}<p>after</p>"
        );
        let updated = upsert_diagram_block(&storage, &block());
        assert!(!updated.contains("stale"));
        assert!(updated.starts_with("<p>before</p>"));
        assert!(updated.ends_with("<p>after</p>"));
        assert_eq!(updated.matches(START_MARKER).count(), 1);
    }

    #[test]
    fn test_upsert_is_idempotent_across_runs() {
        let first = upsert_diagram_block("<p>page</p>", &block());
        let second = upsert_diagram_block(&first, &block());
        assert_eq!(first, second);
    }
}
