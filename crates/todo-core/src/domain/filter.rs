//! Route / Filter
//!
//! The visible list mode, selected by the location fragment
//! (`''`, `#/`, `#/active`, `#/completed`).

use super::query::Query;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Filter {
    #[default]
    All,
    Active,
    Completed,
}

impl Filter {
    /// Map a route segment; anything unrecognized shows everything
    pub fn from_segment(segment: &str) -> Self {
        match segment {
            "active" => Filter::Active,
            "completed" => Filter::Completed,
            _ => Filter::All,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Filter::All => "",
            Filter::Active => "active",
            Filter::Completed => "completed",
        }
    }

    /// Query that fetches the records visible under this filter
    pub fn query(&self) -> Query {
        match self {
            Filter::All => Query::All,
            Filter::Active => Query::Completed(false),
            Filter::Completed => Query::Completed(true),
        }
    }
}

/// Segment after the first `/` of a location fragment, `""` if there is none
pub fn route_segment(fragment: &str) -> &str {
    fragment.split('/').nth(1).unwrap_or("")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_route_segment() {
        assert_eq!(route_segment(""), "");
        assert_eq!(route_segment("#/"), "");
        assert_eq!(route_segment("#/active"), "active");
        assert_eq!(route_segment("#/completed/extra"), "completed");
        assert_eq!(route_segment("#active"), "");
    }

    #[test]
    fn test_from_segment() {
        assert_eq!(Filter::from_segment(""), Filter::All);
        assert_eq!(Filter::from_segment("active"), Filter::Active);
        assert_eq!(Filter::from_segment("completed"), Filter::Completed);
        assert_eq!(Filter::from_segment("Active"), Filter::All);
        assert_eq!(Filter::from_segment("bogus"), Filter::All);
    }

    #[test]
    fn test_query() {
        assert_eq!(Filter::All.query(), Query::All);
        assert_eq!(Filter::Active.query(), Query::Completed(false));
        assert_eq!(Filter::Completed.query(), Query::Completed(true));
    }
}
