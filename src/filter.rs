use crate::model::Searchable;

/// Items whose search fields contain `query`, ignoring case, in their
/// original order. An empty query keeps everything.
pub fn filter_items<'a, T: Searchable>(items: &'a [T], query: &str) -> Vec<&'a T> {
    let needle = query.to_lowercase();
    if needle.is_empty() {
        return items.iter().collect();
    }

    items
        .iter()
        .filter(|item| {
            item.search_fields()
                .into_iter()
                .any(|field| field.to_lowercase().contains(&needle))
        })
        .collect()
}
