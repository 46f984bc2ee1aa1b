pub mod about;
pub mod experience;
pub mod projects;
pub mod skills;

use sea_orm::prelude::Json;

/// String elements of a JSONB array column; anything else is skipped.
pub(crate) fn json_strings(value: &Json) -> Vec<String> {
    value
        .as_array()
        .map(|items| {
            items
                .iter()
                .filter_map(|item| item.as_str().map(str::to_string))
                .collect()
        })
        .unwrap_or_default()
}
