// ABOUTME: Cluster filter validation.
// ABOUTME: Flags filter entries naming clusters the service is not deployed to.

/// Filter entries absent from the deployed-cluster list, in filter order.
///
/// Purely advisory: a bogus filter entry is usually a typo and never blocks
/// the report.
pub fn bogus_filters(filter: Option<&[String]>, deployed_clusters: &[String]) -> Vec<String> {
    match filter {
        Some(entries) => entries
            .iter()
            .filter(|entry| !deployed_clusters.contains(entry))
            .cloned()
            .collect(),
        None => Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn none_filter_has_no_bogus_entries() {
        assert!(bogus_filters(None, &names(&["norcal-prod"])).is_empty());
    }

    #[test]
    fn matching_filter_has_no_bogus_entries() {
        let filter = names(&["norcal-prod"]);
        let deployed = names(&["norcal-prod", "nova-prod"]);
        assert!(bogus_filters(Some(&filter), &deployed).is_empty());
    }

    #[test]
    fn unknown_entries_reported_in_filter_order() {
        let filter = names(&["bogus-b", "norcal-prod", "bogus-a"]);
        let deployed = names(&["norcal-prod"]);
        assert_eq!(
            bogus_filters(Some(&filter), &deployed),
            names(&["bogus-b", "bogus-a"])
        );
    }
}
