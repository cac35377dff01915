//! Route tables and path resolution.
//!
//! # Responsibilities
//! - Map exact paths to locally renderable templates (no server round-trip)
//! - Map path prefixes to templates whose data lives behind the server API
//! - Report unmatched paths explicitly
//!
//! # Design Decisions
//! - Path matching is case-sensitive
//! - Dynamic prefixes include the trailing slash, so "/topics" alone is NoMatch
//! - First matching prefix wins; the table is ordered so a path can never
//!   reach two prefixes anyway

use std::collections::HashMap;
use std::fmt;

/// Identifier of a page template.
///
/// Static templates render from local data alone; dynamic templates render
/// a `ContentPage` fetched from the server API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TemplateId {
    Register,
    Learn,
    Discussion,
    AboutUs,
    RealWorld,
    Applying,
    Challenge,
    WhyPhysics,
    Topic,
    Question,
    Concept,
}

impl TemplateId {
    /// True if this template renders without a server fetch.
    pub fn is_static(self) -> bool {
        !matches!(self, TemplateId::Topic | TemplateId::Question | TemplateId::Concept)
    }

    /// Stable name used in logs and the preview CLI.
    pub fn name(self) -> &'static str {
        match self {
            TemplateId::Register => "register",
            TemplateId::Learn => "learn",
            TemplateId::Discussion => "discussion",
            TemplateId::AboutUs => "about_us",
            TemplateId::RealWorld => "real_world",
            TemplateId::Applying => "applying",
            TemplateId::Challenge => "challenge",
            TemplateId::WhyPhysics => "why_physics",
            TemplateId::Topic => "topic",
            TemplateId::Question => "question",
            TemplateId::Concept => "concept",
        }
    }
}

impl fmt::Display for TemplateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Result of resolving a requested path against the tables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// Exact match; render locally, no network I/O.
    Static(TemplateId),
    /// Prefix match; fetch `api_path` from the server, then render.
    Dynamic {
        template: TemplateId,
        /// Path to request under the API base (the full original path).
        api_path: String,
    },
    /// Neither table knows this path.
    NoMatch,
}

/// The fixed route tables for the site.
#[derive(Debug, Clone)]
pub struct RouteTable {
    statics: HashMap<&'static str, TemplateId>,
    prefixes: Vec<(&'static str, TemplateId)>,
}

const STATIC_ROUTES: &[(&str, TemplateId)] = &[
    ("/register", TemplateId::Register),
    ("/learn", TemplateId::Learn),
    ("/discussion", TemplateId::Discussion),
    ("/about-us", TemplateId::AboutUs),
    ("/real-world", TemplateId::RealWorld),
    ("/applying", TemplateId::Applying),
    ("/challenge", TemplateId::Challenge),
    ("/why-physics", TemplateId::WhyPhysics),
];

const DYNAMIC_ROUTES: &[(&str, TemplateId)] = &[
    ("/topics/", TemplateId::Topic),
    ("/questions/", TemplateId::Question),
    ("/concepts/", TemplateId::Concept),
];

impl RouteTable {
    pub fn new() -> Self {
        Self {
            statics: STATIC_ROUTES.iter().copied().collect(),
            prefixes: DYNAMIC_ROUTES.to_vec(),
        }
    }

    /// Resolve a path. Exact match first, then the ordered prefix scan.
    pub fn resolve(&self, path: &str) -> Resolution {
        if let Some(&template) = self.statics.get(path) {
            return Resolution::Static(template);
        }
        for &(prefix, template) in &self.prefixes {
            if path.starts_with(prefix) {
                return Resolution::Dynamic {
                    template,
                    api_path: path.to_string(),
                };
            }
        }
        Resolution::NoMatch
    }

    /// All static routes in table order, for the preview CLI.
    pub fn static_routes(&self) -> impl Iterator<Item = (&'static str, TemplateId)> + '_ {
        STATIC_ROUTES.iter().copied()
    }

    /// All dynamic prefixes in evaluation order.
    pub fn dynamic_routes(&self) -> impl Iterator<Item = (&'static str, TemplateId)> + '_ {
        self.prefixes.iter().copied()
    }
}

impl Default for RouteTable {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_static_route_resolves() {
        let table = RouteTable::new();
        for &(path, template) in STATIC_ROUTES {
            assert_eq!(table.resolve(path), Resolution::Static(template));
        }
    }

    #[test]
    fn test_dynamic_prefixes_resolve() {
        let table = RouteTable::new();
        assert_eq!(
            table.resolve("/topics/energy"),
            Resolution::Dynamic {
                template: TemplateId::Topic,
                api_path: "/topics/energy".to_string(),
            }
        );
        assert_eq!(
            table.resolve("/questions/q1"),
            Resolution::Dynamic {
                template: TemplateId::Question,
                api_path: "/questions/q1".to_string(),
            }
        );
        assert_eq!(
            table.resolve("/concepts/momentum"),
            Resolution::Dynamic {
                template: TemplateId::Concept,
                api_path: "/concepts/momentum".to_string(),
            }
        );
    }

    #[test]
    fn test_unknown_path_is_no_match() {
        let table = RouteTable::new();
        assert_eq!(table.resolve("/unknown/thing"), Resolution::NoMatch);
        assert_eq!(table.resolve("/"), Resolution::NoMatch);
        assert_eq!(table.resolve(""), Resolution::NoMatch);
    }

    #[test]
    fn test_prefix_requires_trailing_slash() {
        let table = RouteTable::new();
        assert_eq!(table.resolve("/topics"), Resolution::NoMatch);
        assert_eq!(table.resolve("/topicsextra"), Resolution::NoMatch);
    }

    #[test]
    fn test_static_beats_prefix() {
        // No static path shares a dynamic prefix today; lock that in so a
        // future static entry under /topics/ would still resolve exactly.
        let table = RouteTable::new();
        for &(path, _) in STATIC_ROUTES {
            assert!(matches!(table.resolve(path), Resolution::Static(_)));
        }
    }

    #[test]
    fn test_prefixes_are_mutually_exclusive() {
        let table = RouteTable::new();
        for &(prefix, _) in DYNAMIC_ROUTES {
            let matched: Vec<_> = table
                .dynamic_routes()
                .filter(|(p, _)| prefix.starts_with(p))
                .collect();
            assert_eq!(matched.len(), 1, "prefix {prefix} overlaps another");
        }
    }
}
