//! Choosing the two versions to compare

use crate::config::VERSIONS_PER_PAGE;
use crate::gem::version::{sort_ascending, sort_descending};
use crate::prompt::{MultiSelect, Prompt, PromptError};

const SELECT_MESSAGE: &str = "Select two versions to compare:";

/// Shows `versions` newest first and asks for exactly two of them.
///
/// Returns the pair ordered oldest first.
pub fn select_two<P: Prompt + ?Sized>(
    prompt: &mut P,
    versions: &[String],
) -> Result<(String, String), PromptError> {
    let choices = sort_descending(versions.to_vec());
    let list = MultiSelect::new(choices.clone())
        .with_min(2)
        .with_max(2)
        .with_per_page(VERSIONS_PER_PAGE);

    let indices = prompt.multi_select(SELECT_MESSAGE, list)?;
    let picked: Vec<String> = indices
        .iter()
        .filter_map(|&i| choices.get(i).cloned())
        .collect();

    match sort_ascending(picked).as_slice() {
        [older, newer] => Ok((older.clone(), newer.clone())),
        other => Err(PromptError::InvalidSelection {
            count: other.len(),
            expected: 2,
        }),
    }
}
