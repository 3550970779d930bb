//! Export Integration Tests
//!
//! Verifies that exported documents keep their content intact and carry the
//! naming scheme front ends rely on.

use chrono::{TimeZone, Utc};
use proptest::prelude::*;

use copyforge::models::ledger::SavedOutput;
use copyforge::services::export::{export_generation, export_saved, parse_export};
use copyforge_core::{GenerationInputs, GenerationStats, TemplateId};

fn any_template() -> impl Strategy<Value = TemplateId> {
    prop::sample::select(TemplateId::ALL.to_vec())
}

proptest! {
    #[test]
    fn exported_content_is_recovered(
        id in 1u64..4_000_000_000_000,
        template_id in any_template(),
        content in ".*",
    ) {
        let saved = SavedOutput {
            id,
            template_id,
            content: content.clone(),
            inputs_snapshot: GenerationInputs::default(),
            created_at: Utc.timestamp_millis_opt(id as i64).single().unwrap(),
            stats_snapshot: GenerationStats::default(),
        };
        let doc = export_saved(&saved);
        prop_assert_eq!(doc.filename, format!("saved-output-{}.txt", id));
        prop_assert_eq!(parse_export(&doc.body).unwrap(), content.as_str());
    }

    #[test]
    fn generation_filename_carries_template_and_time(
        ms in 0i64..4_000_000_000_000,
        template_id in any_template(),
    ) {
        let now = Utc.timestamp_millis_opt(ms).single().unwrap();
        let doc = export_generation(template_id, "copy", now);
        prop_assert_eq!(
            doc.filename,
            format!("marketing-copy-{}-{}.txt", template_id.as_str(), ms)
        );
    }
}
