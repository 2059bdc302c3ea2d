use crate::commands::{file_entries, tag_entries, CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::DataStore;

/// Every tagged file, ordered by path.
pub fn files<S: DataStore>(store: &S) -> Result<CmdResult> {
    let files = store.load_files()?;
    let paths = files.keys().cloned().collect();
    let mut result = CmdResult::default().with_files(file_entries(paths, &files));
    if result.files.is_empty() {
        result.add_message(CmdMessage::info("No files have been added to taguh yet"));
    }
    Ok(result)
}

/// Every defined tag, ordered by name.
pub fn tags<S: DataStore>(store: &mut S) -> Result<CmdResult> {
    let tags = store.load_tags()?;
    Ok(CmdResult::default().with_tags(tag_entries(tags)))
}
