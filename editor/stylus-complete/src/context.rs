//! Classify the cursor context from the text before it

use crate::types::CandidateGroup;

/// Textual cues for each group, checked in this order; the first hit wins
const CUES: [(CandidateGroup, [&str; 2]); 4] = [
    (CandidateGroup::FunctionAttributes, ["#[", "pub fn"]),
    (CandidateGroup::StorageTypes, ["Storage", "storage"]),
    (CandidateGroup::BlockchainAccessors, ["msg::", "block::"]),
    (CandidateGroup::InterfaceMacros, ["sol!", "sol_"]),
];

/// Decide which group the author is typing in, from the line up to the cursor
pub fn classify(prefix: &str) -> CandidateGroup {
    CUES.iter()
        .find(|(_, cues)| cues.iter().any(|cue| prefix.contains(cue)))
        .map(|(group, _)| *group)
        .unwrap_or(CandidateGroup::GeneralKeywords)
}

/// The part of `line_text` before the cursor.
///
/// `cursor` counts chars from the start of the line; a cursor past the end
/// selects the whole line.
pub fn line_prefix(line_text: &str, cursor: usize) -> &str {
    match line_text.char_indices().nth(cursor) {
        Some((offset, _)) => &line_text[..offset],
        None => line_text,
    }
}

/// The line prefix at a 1-based line and column of `source`
pub fn prefix_at(source: &str, line: u32, column: u32) -> &str {
    let index = line.saturating_sub(1) as usize;
    match source.lines().nth(index) {
        Some(text) => line_prefix(text, column.saturating_sub(1) as usize),
        None => "",
    }
}
