//! Route declarations and exact-path matching.
//!
//! A [`RouteTable`] is an ordered list of `(path, view)` declarations. For a
//! given path every declaration whose path is string-equal to it matches, in
//! declaration order. There is no normalization (trailing slashes, case) and
//! no pattern syntax.
//!
//! Duplicate paths are allowed and all of their views render together.
//! [`RouteTable::duplicate_paths`] exists so callers can report them.

#[cfg(test)]
#[path = "matcher_test.rs"]
mod matcher_test;

/// A single path-to-view declaration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Route<V> {
    path: String,
    view: V,
}

impl<V> Route<V> {
    pub fn new(path: impl Into<String>, view: V) -> Self {
        Self { path: path.into(), view }
    }

    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }

    #[must_use]
    pub fn view(&self) -> &V {
        &self.view
    }

    /// Exact, case-sensitive comparison against `path`.
    #[must_use]
    pub fn matches(&self, path: &str) -> bool {
        self.path == path
    }
}

/// Ordered list of route declarations.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RouteTable<V> {
    routes: Vec<Route<V>>,
}

impl<V> Default for RouteTable<V> {
    fn default() -> Self {
        Self { routes: Vec::new() }
    }
}

impl<V> RouteTable<V> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a declaration, builder style.
    #[must_use]
    pub fn route(mut self, path: impl Into<String>, view: V) -> Self {
        self.routes.push(Route::new(path, view));
        self
    }

    /// Append a declaration.
    pub fn push(&mut self, route: Route<V>) {
        self.routes.push(route);
    }

    #[must_use]
    pub fn routes(&self) -> &[Route<V>] {
        &self.routes
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.routes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    /// Views of every declaration whose path equals `path`, in declaration order.
    pub fn matching<'a>(&'a self, path: &'a str) -> impl Iterator<Item = &'a V> + 'a {
        self.routes
            .iter()
            .filter(move |route| route.matches(path))
            .map(Route::view)
    }

    /// Paths declared more than once, each listed once in first-declaration order.
    #[must_use]
    pub fn duplicate_paths(&self) -> Vec<&str> {
        let mut duplicates: Vec<&str> = Vec::new();
        for (i, route) in self.routes.iter().enumerate() {
            let path = route.path();
            if duplicates.contains(&path) {
                continue;
            }
            if self.routes[i + 1..].iter().any(|later| later.matches(path)) {
                duplicates.push(path);
            }
        }
        duplicates
    }
}

impl<P: Into<String>, V> FromIterator<(P, V)> for RouteTable<V> {
    fn from_iter<I: IntoIterator<Item = (P, V)>>(iter: I) -> Self {
        Self {
            routes: iter.into_iter().map(|(path, view)| Route::new(path, view)).collect(),
        }
    }
}

impl<V> IntoIterator for RouteTable<V> {
    type Item = Route<V>;
    type IntoIter = std::vec::IntoIter<Route<V>>;

    fn into_iter(self) -> Self::IntoIter {
        self.routes.into_iter()
    }
}
