//! Expansion of optional query groups (`{?name1,name2}`) in path templates.

use std::fmt::Write;

/// Ordered parameter mapping used to expand a path template.
///
/// A parameter may be unset, hold a single value, or hold several values (expanded as
/// repeated `name=value` pairs).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UriParams {
    entries: Vec<(String, Vec<String>)>,
}

impl UriParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set `name` to `value`; `None` leaves the parameter unset.
    #[must_use]
    pub fn with<V: ToString>(mut self, name: &str, value: Option<V>) -> Self {
        let values = value.map(|v| vec![v.to_string()]).unwrap_or_default();
        self.set(name, values);
        self
    }

    /// Set `name` to every value in `values`; an empty list leaves it unset.
    #[must_use]
    pub fn with_all<V: ToString>(mut self, name: &str, values: &[V]) -> Self {
        self.set(name, values.iter().map(ToString::to_string).collect());
        self
    }

    fn set(&mut self, name: &str, values: Vec<String>) {
        if let Some(entry) = self.entries.iter_mut().find(|(n, _)| n == name) {
            entry.1 = values;
        } else {
            self.entries.push((name.to_string(), values));
        }
    }

    fn values(&self, name: &str) -> &[String] {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map_or(&[][..], |(_, v)| v.as_slice())
    }

    pub fn is_empty(&self) -> bool {
        self.entries.iter().all(|(_, v)| v.is_empty())
    }
}

/// Expand every `{?...}` group in `template`.
///
/// A group whose names are all unset disappears. Otherwise it becomes `?` followed by
/// `&`-joined `name=value` pairs for the set names, in the group's declared order.
/// Values are inserted as-is.
pub fn expand(template: &str, params: &UriParams) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(start) = rest.find("{?") {
        let Some(len) = rest[start..].find('}') else {
            break;
        };
        out.push_str(&rest[..start]);

        let names = &rest[start + 2..start + len];
        let mut query = String::new();
        for name in names.split(',').map(str::trim).filter(|n| !n.is_empty()) {
            for value in params.values(name) {
                let sep = if query.is_empty() { '?' } else { '&' };
                let _ = write!(query, "{sep}{name}={value}");
            }
        }
        out.push_str(&query);

        rest = &rest[start + len + 1..];
    }

    out.push_str(rest);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn group_removed_when_nothing_set() {
        assert_eq!(
            expand("/dns/managed{?rows,page}", &UriParams::new()),
            "/dns/managed"
        );
    }

    #[test]
    fn group_removed_when_all_values_none() {
        let params = UriParams::new()
            .with::<u32>("rows", None)
            .with::<u32>("page", None);
        assert_eq!(expand("/dns/managed{?rows,page}", &params), "/dns/managed");
    }

    #[test]
    fn only_set_parameters_appear() {
        let params = UriParams::new().with("rows", Some(5)).with::<u32>("page", None);
        assert_eq!(
            expand("/dns/managed{?rows,page}", &params),
            "/dns/managed?rows=5"
        );
    }

    #[test]
    fn declared_order_is_preserved() {
        let params = UriParams::new().with("page", Some(2)).with("rows", Some(50));
        assert_eq!(
            expand("/dns/managed{?rows,page}", &params),
            "/dns/managed?rows=50&page=2"
        );
    }

    #[test]
    fn parameters_outside_the_group_are_ignored() {
        let params = UriParams::new().with("other", Some("x"));
        assert_eq!(expand("/dns/soa{?rows,page}", &params), "/dns/soa");
    }

    #[test]
    fn template_without_group_is_unchanged() {
        let params = UriParams::new().with("rows", Some(5));
        assert_eq!(expand("/dns/managed/123", &params), "/dns/managed/123");
    }

    #[test]
    fn multiple_groups_resolved_independently() {
        let params = UriParams::new().with("type", Some("A")).with("page", Some(1));
        assert_eq!(
            expand("/a{?type}/b{?rows}/c{?page}", &params),
            "/a?type=A/b/c?page=1"
        );
    }

    #[test]
    fn repeated_values_expand_to_repeated_pairs() {
        let params = UriParams::new().with_all("ids", &[1, 2, 3]);
        assert_eq!(
            expand("/dns/managed/9/records{?ids}", &params),
            "/dns/managed/9/records?ids=1&ids=2&ids=3"
        );
    }

    #[test]
    fn later_set_overrides_earlier() {
        let params = UriParams::new().with("rows", Some(5)).with::<u32>("rows", None);
        assert!(params.is_empty());
        assert_eq!(expand("/x{?rows}", &params), "/x");
    }

    #[test]
    fn unterminated_group_is_left_alone() {
        let params = UriParams::new().with("rows", Some(5));
        assert_eq!(expand("/x{?rows", &params), "/x{?rows");
    }
}
