//! Route table and lookup.
//!
//! # Responsibilities
//! - Compile route definitions into pre-parsed patterns
//! - Reject malformed or conflicting tables at construction
//! - Resolve a path to a view, a redirect, or an explicit not-found
//! - Follow redirects and build paths from named routes
//!
//! # Design Decisions
//! - Immutable after construction (shared without locks)
//! - O(1) lookup for static paths via HashMap
//! - Dynamic patterns scanned in rank order: more literal segments first,
//!   then declaration order
//! - Explicit NotFound rather than a silent default

use std::collections::{HashMap, HashSet};

use crate::config::{NavigationConfig, NavigatorConfig, NotFoundPolicy};
use crate::routing::definition::{RouteDefinition, ViewId};
use crate::routing::error::{HrefError, NavigationError, RouteError, TableError};
use crate::routing::location::{Location, Query};
use crate::routing::matcher::Matcher;
use crate::routing::pattern::{PathPattern, Segment};
use crate::routing::resolution::{
    Navigation, NavigationOutcome, Params, RedirectInstruction, Resolution, ResolvedRoute,
};

#[derive(Debug, Clone)]
enum Target {
    View { view: ViewId, forward_props: bool },
    Redirect(String),
}

#[derive(Debug, Clone)]
struct CompiledRoute {
    definition: RouteDefinition,
    pattern: PathPattern,
    target: Target,
}

impl CompiledRoute {
    fn compile(definition: RouteDefinition) -> Result<Self, RouteError> {
        let pattern = PathPattern::parse(&definition.path)?;

        let target = match (&definition.view, &definition.redirect) {
            (Some(view), None) => Target::View {
                view: view.clone(),
                forward_props: definition.forward_params_as_props,
            },
            (None, Some(to)) => {
                if definition.forward_params_as_props {
                    return Err(RouteError::PropsOnRedirect {
                        path: definition.path.clone(),
                    });
                }
                if !to.starts_with('/') {
                    return Err(RouteError::InvalidRedirect {
                        path: definition.path.clone(),
                        to: to.clone(),
                    });
                }
                Target::Redirect(to.clone())
            }
            _ => {
                return Err(RouteError::InvalidTarget {
                    path: definition.path.clone(),
                })
            }
        };

        Ok(Self {
            definition,
            pattern,
            target,
        })
    }
}

/// The compiled, immutable route table.
#[derive(Debug)]
pub struct RouteTable {
    routes: Vec<CompiledRoute>,
    statics: HashMap<String, usize>,
    dynamics: Vec<usize>,
    names: HashMap<String, usize>,
    options: NavigationConfig,
}

impl RouteTable {
    /// Compile a table from definitions, reporting every problem found.
    pub fn new(
        definitions: impl IntoIterator<Item = RouteDefinition>,
        options: NavigationConfig,
    ) -> Result<Self, TableError> {
        let mut errors = Vec::new();
        let mut routes = Vec::new();

        for definition in definitions {
            match CompiledRoute::compile(definition) {
                Ok(route) => routes.push(route),
                Err(e) => errors.push(e),
            }
        }

        let mut statics = HashMap::new();
        let mut shapes: HashMap<Vec<Option<&str>>, usize> = HashMap::new();
        let mut names = HashMap::new();
        let mut dynamics = Vec::new();

        for (idx, route) in routes.iter().enumerate() {
            if route.pattern.is_static() {
                if statics
                    .insert(route.pattern.as_str().to_string(), idx)
                    .is_some()
                {
                    errors.push(RouteError::DuplicatePath {
                        path: route.pattern.as_str().to_string(),
                    });
                }
            } else {
                match shapes.get(&route.pattern.shape()) {
                    Some(&existing) => errors.push(RouteError::AmbiguousPattern {
                        path: route.pattern.as_str().to_string(),
                        existing: routes[existing].pattern.as_str().to_string(),
                    }),
                    None => {
                        shapes.insert(route.pattern.shape(), idx);
                        dynamics.push(idx);
                    }
                }
            }

            if let Some(name) = &route.definition.name {
                if names.insert(name.clone(), idx).is_some() {
                    errors.push(RouteError::DuplicateName { name: name.clone() });
                }
            }
        }
        drop(shapes);

        match statics.get("/") {
            None => errors.push(RouteError::MissingRoot),
            Some(&idx) if !matches!(routes[idx].target, Target::Redirect(_)) => {
                errors.push(RouteError::RootNotRedirect)
            }
            Some(_) => {}
        }

        if !errors.is_empty() {
            return Err(TableError { errors });
        }

        // Stable sort keeps declaration order among equally ranked patterns.
        dynamics.sort_by_key(|&idx| std::cmp::Reverse(routes[idx].pattern.literal_count()));

        let table = Self {
            routes,
            statics,
            dynamics,
            names,
            options,
        };

        let errors = table.check_redirects();
        if !errors.is_empty() {
            return Err(TableError { errors });
        }

        tracing::debug!(
            routes = table.routes.len(),
            static_routes = table.statics.len(),
            dynamic_routes = table.dynamics.len(),
            "Route table compiled"
        );
        Ok(table)
    }

    /// Compile the routes and navigation options of a full configuration.
    pub fn from_config(config: &NavigatorConfig) -> Result<Self, TableError> {
        Self::new(config.routes.clone(), config.navigation.clone())
    }

    /// Redirect targets must resolve and must not loop. Every chain,
    /// including the one behind the not-found fallback, has to reach a view
    /// within `max_redirects` hops.
    fn check_redirects(&self) -> Vec<RouteError> {
        let limit = self.options.max_redirects;
        let mut errors = Vec::new();
        let mut reported = HashSet::new();

        for (idx, route) in self.routes.iter().enumerate() {
            let Target::Redirect(to) = &route.target else {
                continue;
            };

            if self.resolve(to).is_not_found() {
                errors.push(RouteError::UnresolvableRedirect {
                    path: route.pattern.as_str().to_string(),
                    to: to.clone(),
                });
                continue;
            }

            if reported.contains(&idx) {
                continue;
            }

            let mut chain = vec![route.pattern.as_str().to_string()];
            let mut visited = vec![idx];
            let mut next = to.clone();
            let mut cyclic = false;
            while let Some((hop, target)) = self.redirect_hop(&next) {
                chain.push(self.routes[hop].pattern.as_str().to_string());
                if visited.contains(&hop) {
                    reported.extend(visited.iter().copied());
                    errors.push(RouteError::RedirectCycle { chain: chain.clone() });
                    cyclic = true;
                    break;
                }
                visited.push(hop);
                next = target;
            }

            // One hop per redirect route in the chain.
            if !cyclic && chain.len() > limit {
                errors.push(RouteError::RedirectChainTooLong {
                    path: route.pattern.as_str().to_string(),
                    hops: chain.len(),
                    limit,
                });
            }
        }

        if let NotFoundPolicy::Redirect { to } = &self.options.not_found {
            match self.hops_to_view(to) {
                None => errors.push(RouteError::InvalidFallback { to: to.clone() }),
                // The jump to the fallback is itself a hop.
                Some(hops) if hops + 1 > limit => errors.push(RouteError::FallbackTooLong {
                    to: to.clone(),
                    hops: hops + 1,
                    limit,
                }),
                Some(_) => {}
            }
        }

        errors
    }

    /// If `path` resolves to a redirect route, its index and target.
    fn redirect_hop(&self, path: &str) -> Option<(usize, String)> {
        let location = Location::parse(path, self.options.trailing_slash);
        let (idx, _) = self.find(&location)?;
        match &self.routes[idx].target {
            Target::Redirect(to) => Some((idx, to.clone())),
            Target::View { .. } => None,
        }
    }

    /// Redirects followed from `path` before a view renders, or `None` if it
    /// never reaches one.
    fn hops_to_view(&self, path: &str) -> Option<usize> {
        let mut current = path.to_string();
        for hops in 0..=self.routes.len() {
            match self.resolve(&current) {
                Resolution::Matched(_) => return Some(hops),
                Resolution::Redirect(instruction) => current = instruction.to,
                Resolution::NotFound { .. } => return None,
            }
        }
        None
    }

    fn find(&self, location: &Location) -> Option<(usize, Params)> {
        if let Some(&idx) = self.statics.get(location.path()) {
            return Some((idx, Params::new()));
        }

        let segments = location.segments()?;
        self.dynamics.iter().find_map(|&idx| {
            self.routes[idx]
                .pattern
                .matches(&segments)
                .map(|params| (idx, params))
        })
    }

    /// Resolve one navigation step.
    pub fn resolve(&self, path: &str) -> Resolution {
        self.resolve_location(Location::parse(path, self.options.trailing_slash))
    }

    /// Resolve with extra query context merged after the path's own query.
    pub fn resolve_with_query(&self, path: &str, query: Query) -> Resolution {
        let mut location = Location::parse(path, self.options.trailing_slash);
        location.query_mut().extend(query);
        self.resolve_location(location)
    }

    fn resolve_location(&self, location: Location) -> Resolution {
        let Some((idx, params)) = self.find(&location) else {
            tracing::trace!(path = %location.path(), "No route matched");
            return Resolution::NotFound {
                path: location.path().to_string(),
            };
        };

        let route = &self.routes[idx];
        let (path, query, hash) = location.into_parts();

        match &route.target {
            Target::Redirect(to) => Resolution::Redirect(RedirectInstruction {
                to: carry_over(to, &query, hash.as_deref()),
                from: path,
            }),
            Target::View {
                view,
                forward_props,
            } => {
                let props = if *forward_props {
                    params.clone()
                } else {
                    Params::new()
                };
                Resolution::Matched(ResolvedRoute {
                    name: route.definition.name.clone(),
                    pattern: route.pattern.as_str().to_string(),
                    path,
                    view: view.clone(),
                    params,
                    props,
                    query,
                    hash,
                })
            }
        }
    }

    /// Resolve a path and follow redirects until a view or not-found.
    ///
    /// Each redirect keeps the request's query and fragment unless its target
    /// names its own. With the `redirect` not-found policy, an unmatched path
    /// is sent to the fallback once; the fallback counts as a redirect.
    pub fn navigate(&self, path: &str) -> Result<Navigation, NavigationError> {
        let limit = self.options.max_redirects;
        let mut redirects: Vec<RedirectInstruction> = Vec::new();
        let mut current = path.to_string();
        let mut fallback_used = false;

        loop {
            let instruction = match self.resolve(&current) {
                Resolution::Matched(route) => {
                    tracing::debug!(
                        requested = %path,
                        view = %route.view,
                        redirects = redirects.len(),
                        "Navigation resolved"
                    );
                    return Ok(Navigation {
                        requested: path.to_string(),
                        redirects,
                        outcome: NavigationOutcome::Render(route),
                    });
                }
                Resolution::Redirect(instruction) => instruction,
                Resolution::NotFound { path: missing } => match &self.options.not_found {
                    NotFoundPolicy::Redirect { to } if !fallback_used => {
                        fallback_used = true;
                        RedirectInstruction {
                            from: missing,
                            to: to.clone(),
                        }
                    }
                    _ => {
                        tracing::debug!(requested = %path, path = %missing, "Navigation not found");
                        return Ok(Navigation {
                            requested: path.to_string(),
                            redirects,
                            outcome: NavigationOutcome::NotFound { path: missing },
                        });
                    }
                },
            };

            if redirects.len() >= limit {
                tracing::warn!(requested = %path, limit, "Redirect limit exceeded");
                return Err(NavigationError::TooManyRedirects {
                    path: path.to_string(),
                    limit,
                });
            }
            current = instruction.to.clone();
            redirects.push(instruction);
        }
    }

    /// Build a concrete path for the route named `name`.
    ///
    /// Parameter values are percent-encoded, so the result resolves back to
    /// the same route with the same params.
    pub fn href(&self, name: &str, params: &Params) -> Result<String, HrefError> {
        let idx = self.names.get(name).ok_or_else(|| HrefError::UnknownRoute {
            name: name.to_string(),
        })?;

        let mut out = String::new();
        for segment in self.routes[*idx].pattern.segments() {
            out.push('/');
            match segment {
                Segment::Literal(lit) => out.push_str(lit),
                Segment::Param(param) => {
                    let value = params.get(param).ok_or_else(|| HrefError::MissingParam {
                        route: name.to_string(),
                        param: param.clone(),
                    })?;
                    if value.is_empty() {
                        return Err(HrefError::EmptyParam {
                            route: name.to_string(),
                            param: param.clone(),
                        });
                    }
                    out.push_str(&urlencoding::encode(value));
                }
            }
        }

        if out.is_empty() {
            out.push('/');
        }
        Ok(out)
    }

    /// Definitions in declaration order.
    pub fn routes(&self) -> impl Iterator<Item = &RouteDefinition> {
        self.routes.iter().map(|r| &r.definition)
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    pub fn options(&self) -> &NavigationConfig {
        &self.options
    }

    pub fn not_found_policy(&self) -> &NotFoundPolicy {
        &self.options.not_found
    }
}

/// A redirect target with no query or fragment of its own keeps the ones
/// from the request; a target that names either replaces both.
fn carry_over(to: &str, query: &Query, hash: Option<&str>) -> String {
    if to.contains(|c| c == '?' || c == '#') {
        return to.to_string();
    }

    let mut target = to.to_string();
    if !query.is_empty() {
        target.push('?');
        target.push_str(&query.encode());
    }
    if let Some(hash) = hash {
        target.push('#');
        target.push_str(hash);
    }
    target
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::TrailingSlash;

    fn table(defs: Vec<RouteDefinition>) -> Result<RouteTable, TableError> {
        RouteTable::new(defs, NavigationConfig::default())
    }

    fn base() -> Vec<RouteDefinition> {
        vec![
            RouteDefinition::redirect("/", "/home"),
            RouteDefinition::view("/home", "Home").named("home"),
        ]
    }

    #[test]
    fn test_static_beats_dynamic() {
        let mut defs = base();
        defs.push(RouteDefinition::view("/items/:id", "Item").with_props());
        defs.push(RouteDefinition::view("/items/new", "NewItem"));
        let t = table(defs).unwrap();

        assert_eq!(t.resolve("/items/new").route().unwrap().view.as_str(), "NewItem");
        let item = t.resolve("/items/9");
        assert_eq!(item.route().unwrap().view.as_str(), "Item");
        assert_eq!(item.route().unwrap().props["id"], "9");
    }

    #[test]
    fn test_more_literals_rank_first() {
        let mut defs = base();
        defs.push(RouteDefinition::view("/:section/:id", "Generic"));
        defs.push(RouteDefinition::view("/users/:id", "User"));
        let t = table(defs).unwrap();

        assert_eq!(t.resolve("/users/3").route().unwrap().view.as_str(), "User");
        assert_eq!(t.resolve("/teams/3").route().unwrap().view.as_str(), "Generic");
    }

    #[test]
    fn test_params_without_props() {
        let mut defs = base();
        defs.push(RouteDefinition::view("/items/:id", "Item"));
        let t = table(defs).unwrap();

        let route = t.resolve("/items/4").route().cloned().unwrap();
        assert_eq!(route.params["id"], "4");
        assert!(route.props.is_empty());
    }

    #[test]
    fn test_rejects_duplicate_static_path() {
        let mut defs = base();
        defs.push(RouteDefinition::view("/home", "Other"));
        let err = table(defs).unwrap_err();
        assert!(err.contains(|e| matches!(e, RouteError::DuplicatePath { path } if path == "/home")));
    }

    #[test]
    fn test_rejects_ambiguous_dynamic_shapes() {
        let mut defs = base();
        defs.push(RouteDefinition::view("/items/:id", "A"));
        defs.push(RouteDefinition::view("/items/:slug", "B"));
        let err = table(defs).unwrap_err();
        assert!(err.contains(|e| matches!(e, RouteError::AmbiguousPattern { .. })));
    }

    #[test]
    fn test_collects_all_errors() {
        let defs = vec![
            RouteDefinition::view("/", "Root"),
            RouteDefinition::view("/a/:x/:x", "A"),
            RouteDefinition::view("b", "B"),
            RouteDefinition::view("/c", "C").named("dup"),
            RouteDefinition::view("/d", "D").named("dup"),
        ];
        let err = table(defs).unwrap_err();
        assert!(err.contains(|e| matches!(e, RouteError::RootNotRedirect)));
        assert!(err.contains(|e| matches!(e, RouteError::DuplicateParam { .. })));
        assert!(err.contains(|e| matches!(e, RouteError::MalformedPattern { .. })));
        assert!(err.contains(|e| matches!(e, RouteError::DuplicateName { .. })));
    }

    #[test]
    fn test_rejects_missing_root() {
        let err = table(vec![RouteDefinition::view("/home", "Home")]).unwrap_err();
        assert_eq!(err.errors, vec![RouteError::MissingRoot]);
    }

    #[test]
    fn test_rejects_bad_targets() {
        let mut defs = base();
        let mut both = RouteDefinition::view("/both", "Both");
        both.redirect = Some("/home".into());
        defs.push(both);
        defs.push(RouteDefinition {
            name: None,
            path: "/neither".into(),
            view: None,
            forward_params_as_props: false,
            redirect: None,
        });
        defs.push(RouteDefinition::redirect("/old", "/home").with_props());
        defs.push(RouteDefinition::redirect("/rel", "home"));
        let err = table(defs).unwrap_err();
        assert_eq!(err.errors.len(), 4);
        assert!(err.contains(|e| matches!(e, RouteError::InvalidTarget { path } if path == "/both")));
        assert!(err.contains(|e| matches!(e, RouteError::InvalidTarget { path } if path == "/neither")));
        assert!(err.contains(|e| matches!(e, RouteError::PropsOnRedirect { .. })));
        assert!(err.contains(|e| matches!(e, RouteError::InvalidRedirect { .. })));
    }

    #[test]
    fn test_rejects_unresolvable_redirect() {
        let mut defs = base();
        defs.push(RouteDefinition::redirect("/old", "/gone"));
        let err = table(defs).unwrap_err();
        assert_eq!(
            err.errors,
            vec![RouteError::UnresolvableRedirect {
                path: "/old".into(),
                to: "/gone".into()
            }]
        );
    }

    #[test]
    fn test_rejects_redirect_cycle_once() {
        let defs = vec![
            RouteDefinition::redirect("/", "/a"),
            RouteDefinition::redirect("/a", "/b"),
            RouteDefinition::redirect("/b", "/a"),
        ];
        let err = table(defs).unwrap_err();
        assert_eq!(
            err.errors,
            vec![RouteError::RedirectCycle {
                chain: vec!["/".into(), "/a".into(), "/b".into(), "/a".into()]
            }]
        );
    }

    #[test]
    fn test_redirect_into_dynamic_route() {
        let mut defs = base();
        defs.push(RouteDefinition::view("/items/:id", "Item").with_props());
        defs.push(RouteDefinition::redirect("/featured", "/items/1"));
        let t = table(defs).unwrap();

        let nav = t.navigate("/featured").unwrap();
        assert_eq!(nav.redirects.len(), 1);
        assert_eq!(nav.route().unwrap().props["id"], "1");
    }

    #[test]
    fn test_navigate_follows_chain() {
        let mut defs = base();
        defs.push(RouteDefinition::redirect("/start", "/"));
        let t = table(defs).unwrap();

        let nav = t.navigate("/start").unwrap();
        let hops: Vec<_> = nav.redirects.iter().map(|r| r.to.as_str()).collect();
        assert_eq!(hops, vec!["/", "/home"]);
        assert_eq!(nav.route().unwrap().view.as_str(), "Home");
    }

    #[test]
    fn test_rejects_chain_over_redirect_limit() {
        let mut defs = base();
        defs.push(RouteDefinition::redirect("/start", "/"));
        let options = NavigationConfig {
            max_redirects: 1,
            ..NavigationConfig::default()
        };
        let err = RouteTable::new(defs.clone(), options).unwrap_err();
        assert_eq!(
            err.errors,
            vec![RouteError::RedirectChainTooLong {
                path: "/start".into(),
                hops: 2,
                limit: 1
            }]
        );

        let options = NavigationConfig {
            max_redirects: 2,
            ..NavigationConfig::default()
        };
        let t = RouteTable::new(defs, options).unwrap();
        assert_eq!(t.navigate("/start").unwrap().redirects.len(), 2);
    }

    #[test]
    fn test_rejects_fallback_over_redirect_limit() {
        let options = NavigationConfig {
            max_redirects: 1,
            not_found: NotFoundPolicy::Redirect { to: "/".into() },
            ..NavigationConfig::default()
        };
        let err = RouteTable::new(base(), options).unwrap_err();
        assert_eq!(
            err.errors,
            vec![RouteError::FallbackTooLong {
                to: "/".into(),
                hops: 2,
                limit: 1
            }]
        );

        let options = NavigationConfig {
            max_redirects: 1,
            not_found: NotFoundPolicy::Redirect { to: "/home".into() },
            ..NavigationConfig::default()
        };
        let t = RouteTable::new(base(), options).unwrap();
        assert_eq!(t.navigate("/nope").unwrap().route().unwrap().view.as_str(), "Home");
    }

    #[test]
    fn test_redirect_keeps_query_and_hash() {
        let t = table(base()).unwrap();

        let res = t.resolve("/?next=%2Fhome#top");
        assert_eq!(res.redirect().unwrap().to, "/home?next=%2Fhome#top");

        let nav = t.navigate("/?next=%2Fhome#top").unwrap();
        let route = nav.route().unwrap();
        assert_eq!(route.path, "/home");
        assert_eq!(route.query.get("next"), Some("/home"));
        assert_eq!(route.hash.as_deref(), Some("top"));
    }

    #[test]
    fn test_redirect_with_own_query_replaces_request_query() {
        let mut defs = base();
        defs.push(RouteDefinition::redirect("/promo", "/home?tab=new"));
        let t = table(defs).unwrap();

        let nav = t.navigate("/promo?tab=old#top").unwrap();
        let route = nav.route().unwrap();
        assert_eq!(route.query.get("tab"), Some("new"));
        assert_eq!(route.hash, None);
    }

    #[test]
    fn test_not_found_fallback_policy() {
        let options = NavigationConfig {
            not_found: NotFoundPolicy::Redirect { to: "/".into() },
            ..NavigationConfig::default()
        };
        let t = RouteTable::new(base(), options).unwrap();

        // resolve stays explicit; only navigate applies the policy
        assert!(t.resolve("/nope").is_not_found());
        let nav = t.navigate("/nope").unwrap();
        assert_eq!(nav.redirects[0].from, "/nope");
        assert_eq!(nav.route().unwrap().view.as_str(), "Home");
    }

    #[test]
    fn test_rejects_fallback_without_view() {
        let options = NavigationConfig {
            not_found: NotFoundPolicy::Redirect { to: "/missing".into() },
            ..NavigationConfig::default()
        };
        let err = RouteTable::new(base(), options).unwrap_err();
        assert_eq!(
            err.errors,
            vec![RouteError::InvalidFallback {
                to: "/missing".into()
            }]
        );
    }

    #[test]
    fn test_lenient_trailing_slash() {
        let options = NavigationConfig {
            trailing_slash: TrailingSlash::Lenient,
            ..NavigationConfig::default()
        };
        let t = RouteTable::new(base(), options).unwrap();
        assert_eq!(t.resolve("/home/").route().unwrap().path, "/home");

        let strict = table(base()).unwrap();
        assert!(strict.resolve("/home/").is_not_found());
    }

    #[test]
    fn test_resolve_with_query_context() {
        let t = table(base()).unwrap();
        let extra: Query = [("tab", "recent")].into_iter().collect();
        let res = t.resolve_with_query("/home?page=2", extra);
        let route = res.route().unwrap();
        assert_eq!(route.query.get("page"), Some("2"));
        assert_eq!(route.query.get("tab"), Some("recent"));
    }

    #[test]
    fn test_href() {
        let mut defs = base();
        defs.push(RouteDefinition::view("/items/:id", "Item").named("item"));
        let t = table(defs).unwrap();

        let mut params = Params::new();
        params.insert("id".into(), "a b".into());
        let href = t.href("item", &params).unwrap();
        assert_eq!(href, "/items/a%20b");
        assert_eq!(t.resolve(&href).route().unwrap().params["id"], "a b");

        assert_eq!(t.href("home", &Params::new()).unwrap(), "/home");
        assert!(matches!(
            t.href("item", &Params::new()),
            Err(HrefError::MissingParam { .. })
        ));
        assert!(matches!(
            t.href("nope", &Params::new()),
            Err(HrefError::UnknownRoute { .. })
        ));
        params.insert("id".into(), String::new());
        assert!(matches!(
            t.href("item", &params),
            Err(HrefError::EmptyParam { .. })
        ));
    }

    #[test]
    fn test_table_is_shareable() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<RouteTable>();
    }
}
