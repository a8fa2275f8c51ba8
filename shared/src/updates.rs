use std::cmp::Reverse;
use std::collections::HashMap;

use chrono::{DateTime, Utc};

use crate::model::UpdateEvent;
use crate::theme::{ColorTheme, resolve_theme};
use crate::time_format::{format_relative, timestamp_sort_key};

/// Updates newest first. Unparseable timestamps sort as the epoch, after
/// every valid entry; equal keys keep snapshot order.
pub fn sort_updates(updates: &[UpdateEvent]) -> Vec<&UpdateEvent> {
    let mut sorted: Vec<&UpdateEvent> = updates.iter().collect();
    sorted.sort_by_cached_key(|update| Reverse(timestamp_sort_key(&update.timestamp)));
    sorted
}

/// Everything the updates feed renders for one entry.
#[derive(Debug, Clone, PartialEq)]
pub struct UpdateCard {
    pub age: String,
    pub delta: String,
    pub unit: &'static str,
    pub description: String,
    pub member: String,
    pub theme: &'static ColorTheme,
}

impl UpdateCard {
    /// Updates are themed by the earning member's category; podium overrides
    /// only apply to the members list.
    pub fn new(
        update: &UpdateEvent,
        category_keys: &HashMap<String, String>,
        now: DateTime<Utc>,
    ) -> Self {
        let key = category_keys
            .get(&update.member_name)
            .map(String::as_str)
            .unwrap_or_default();
        Self {
            age: format_relative(&update.timestamp, now),
            delta: update.delta.display(),
            unit: update.delta.unit(),
            description: update.description.clone(),
            member: update.member_name.clone(),
            theme: resolve_theme(key, None),
        }
    }
}

/// Sorted, themed feed for the updates view.
pub fn update_cards(
    updates: &[UpdateEvent],
    category_keys: &HashMap<String, String>,
    now: DateTime<Utc>,
) -> Vec<UpdateCard> {
    sort_updates(updates)
        .into_iter()
        .map(|update| UpdateCard::new(update, category_keys, now))
        .collect()
}
