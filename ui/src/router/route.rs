use std::collections::HashMap;

use super::error::RouteTableError;

/// One path-to-view association plus its symbolic name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route<V> {
    path: String,
    name: String,
    view: V,
}

impl<V: Copy> Route<V> {
    pub fn new(path: impl Into<String>, name: impl Into<String>, view: V) -> Self {
        Self {
            path: path.into(),
            name: name.into(),
            view,
        }
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn view(&self) -> V {
        self.view
    }
}

/// Immutable, validated set of routes plus the view shown for unknown paths.
///
/// Paths are matched literally, so insertion order only matters for
/// [`RouteTable::routes`], which menus iterate.
#[derive(Debug, Clone)]
pub struct RouteTable<V> {
    routes: Vec<Route<V>>,
    by_path: HashMap<String, usize>,
    by_name: HashMap<String, usize>,
    fallback: V,
}

impl<V: Copy> RouteTable<V> {
    pub fn builder(fallback: V) -> RouteTableBuilder<V> {
        RouteTableBuilder {
            routes: Vec::new(),
            fallback,
        }
    }

    /// Exact, case-sensitive lookup. `None` means not found.
    pub fn resolve(&self, path: &str) -> Option<&Route<V>> {
        self.by_path.get(path).map(|&i| &self.routes[i])
    }

    pub fn resolve_name(&self, name: &str) -> Option<&Route<V>> {
        self.by_name.get(name).map(|&i| &self.routes[i])
    }

    /// `(path, name)` pairs in registration order.
    pub fn routes(&self) -> impl ExactSizeIterator<Item = (&str, &str)> + '_ {
        self.routes.iter().map(|r| (r.path(), r.name()))
    }

    pub fn fallback(&self) -> V {
        self.fallback
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}

pub struct RouteTableBuilder<V> {
    routes: Vec<Route<V>>,
    fallback: V,
}

impl<V: Copy> RouteTableBuilder<V> {
    pub fn route(mut self, path: impl Into<String>, name: impl Into<String>, view: V) -> Self {
        self.routes.push(Route::new(path, name, view));
        self
    }

    pub fn build(self) -> Result<RouteTable<V>, RouteTableError> {
        let mut by_path: HashMap<String, usize> = HashMap::with_capacity(self.routes.len());
        let mut by_name: HashMap<String, usize> = HashMap::with_capacity(self.routes.len());

        for (i, route) in self.routes.iter().enumerate() {
            if !route.path.starts_with('/') {
                return Err(RouteTableError::InvalidPath {
                    path: route.path.clone(),
                    name: route.name.clone(),
                });
            }

            if let Some(&prev) = by_path.get(&route.path) {
                return Err(RouteTableError::DuplicatePath {
                    path: route.path.clone(),
                    first: self.routes[prev].name.clone(),
                    second: route.name.clone(),
                });
            }

            if let Some(&prev) = by_name.get(&route.name) {
                return Err(RouteTableError::DuplicateName {
                    name: route.name.clone(),
                    first_path: self.routes[prev].path.clone(),
                    second_path: route.path.clone(),
                });
            }

            by_path.insert(route.path.clone(), i);
            by_name.insert(route.name.clone(), i);
        }

        Ok(RouteTable {
            routes: self.routes,
            by_path,
            by_name,
            fallback: self.fallback,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum View {
        Home,
        Rect,
        Missing,
    }

    fn table() -> RouteTable<View> {
        RouteTable::builder(View::Missing)
            .route("/", "Home", View::Home)
            .route("/div-rectangles", "DivRectangles", View::Rect)
            .build()
            .unwrap()
    }

    #[test]
    fn every_route_resolves_to_itself() {
        let t = table();
        for (path, name) in t.routes() {
            let r = t.resolve(path).unwrap();
            assert_eq!(r.path(), path);
            assert_eq!(r.name(), name);
        }
    }

    #[test]
    fn resolves_scenario_route() {
        let t = table();
        assert_eq!(
            t.resolve("/div-rectangles"),
            Some(&Route::new("/div-rectangles", "DivRectangles", View::Rect))
        );
        assert_eq!(t.resolve("/missing"), None);
    }

    #[test]
    fn matching_is_literal() {
        let t = table();
        assert_eq!(t.resolve("/div-rectangles/"), None);
        assert_eq!(t.resolve("/Div-Rectangles"), None);
        assert_eq!(t.resolve(""), None);
    }

    #[test]
    fn routes_keep_insertion_order() {
        let t = RouteTable::builder(View::Missing)
            .route("/z", "Zed", View::Rect)
            .route("/a", "Ay", View::Home)
            .build()
            .unwrap();
        let listed: Vec<_> = t.routes().collect();
        assert_eq!(listed, vec![("/z", "Zed"), ("/a", "Ay")]);
        assert_eq!(t.len(), 2);
    }

    #[test]
    fn rejects_duplicate_path() {
        let err = RouteTable::builder(View::Missing)
            .route("/", "Home", View::Home)
            .route("/", "Other", View::Rect)
            .build()
            .unwrap_err();
        assert_eq!(
            err,
            RouteTableError::DuplicatePath {
                path: "/".into(),
                first: "Home".into(),
                second: "Other".into(),
            }
        );
    }

    #[test]
    fn rejects_duplicate_name() {
        let err = RouteTable::builder(View::Missing)
            .route("/", "Home", View::Home)
            .route("/home", "Home", View::Home)
            .build()
            .unwrap_err();
        assert_eq!(
            err,
            RouteTableError::DuplicateName {
                name: "Home".into(),
                first_path: "/".into(),
                second_path: "/home".into(),
            }
        );
    }

    #[test]
    fn rejects_path_without_leading_slash() {
        let err = RouteTable::builder(View::Missing)
            .route("canvas-one", "CanvasOne", View::Rect)
            .build()
            .unwrap_err();
        assert!(matches!(err, RouteTableError::InvalidPath { .. }));
    }

    #[test]
    fn resolves_by_name() {
        let t = table();
        assert_eq!(t.resolve_name("DivRectangles").map(Route::path), Some("/div-rectangles"));
        assert_eq!(t.resolve_name("divrectangles"), None);
        assert_eq!(t.fallback(), View::Missing);
    }

    proptest! {
        #[test]
        fn unregistered_paths_are_not_found(p in "\\PC*") {
            prop_assume!(p != "/" && p != "/div-rectangles");
            prop_assert!(table().resolve(&p).is_none());
        }
    }
}
