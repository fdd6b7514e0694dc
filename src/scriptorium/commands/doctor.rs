use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::DataStore;

pub fn run<S: DataStore>(store: &S) -> Result<CmdResult> {
    let report = store.doctor()?;
    let mut result = CmdResult::default();

    if report.is_clean() {
        result.add_message(CmdMessage::success("No inconsistencies found."));
        return Ok(result.with_doctor(report));
    }

    result.add_message(CmdMessage::warning("Inconsistencies found:"));
    if !report.missing_content.is_empty() {
        result.add_message(CmdMessage::info(format!(
            "  - {} article(s) listed in meta.json without a content file: {}",
            report.missing_content.len(),
            report.missing_content.join(", ")
        )));
    }
    if !report.orphan_files.is_empty() {
        result.add_message(CmdMessage::info(format!(
            "  - {} content file(s) not listed in meta.json: {}",
            report.orphan_files.len(),
            report.orphan_files.join(", ")
        )));
    }
    if !report.duplicate_ids.is_empty() {
        result.add_message(CmdMessage::info(format!(
            "  - Duplicate ids in meta.json: {}",
            report.duplicate_ids.join(", ")
        )));
    }
    if !report.corrupt_entries.is_empty() {
        result.add_message(CmdMessage::error(format!(
            "  - Unreadable entries (bad id or date): {}",
            report.corrupt_entries.join(", ")
        )));
    }

    Ok(result.with_doctor(report))
}
