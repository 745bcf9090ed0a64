use super::error::NavigationError;
use super::history::History;
use super::route::{Route, RouteTable};

/// Where the application currently is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationState<V> {
    path: String,
    route: Option<Route<V>>,
    view: V,
}

impl<V: Copy> NavigationState<V> {
    pub fn path(&self) -> &str {
        &self.path
    }

    /// `None` when the path matched nothing.
    pub fn route(&self) -> Option<&Route<V>> {
        self.route.as_ref()
    }

    /// The matched route's view, or the table's fallback.
    pub fn view(&self) -> V {
        self.view
    }

    pub fn is_not_found(&self) -> bool {
        self.route.is_none()
    }
}

/// What a successful call to [`Navigator::navigate`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Navigated {
    Route,
    NotFound,
    /// Already at this path; no history entry was added.
    Unchanged,
}

/// Owns the route table, the history it drives and the current state.
#[derive(Debug, Clone)]
pub struct Navigator<V, H> {
    table: RouteTable<V>,
    history: H,
    state: NavigationState<V>,
}

impl<V: Copy, H: History> Navigator<V, H> {
    /// Builds the navigator and adopts whatever location the history shows.
    pub fn new(table: RouteTable<V>, history: H) -> Self {
        let path = history.location();
        let state = Self::state_for(&table, path);
        Self {
            table,
            history,
            state,
        }
    }

    pub fn resolve(&self, path: &str) -> Option<&Route<V>> {
        self.table.resolve(path)
    }

    pub fn resolve_name(&self, name: &str) -> Option<&Route<V>> {
        self.table.resolve_name(name)
    }

    pub fn navigate(&mut self, path: &str) -> Result<Navigated, NavigationError> {
        if path == self.state.path {
            log::debug!("already at {path}");
            return Ok(Navigated::Unchanged);
        }

        // a relative location would land somewhere else in the address bar
        if !path.starts_with('/') {
            log::warn!("{path} is not an absolute path, showing fallback view");
            self.state = NavigationState {
                path: path.to_owned(),
                route: None,
                view: self.table.fallback(),
            };
            return Ok(Navigated::NotFound);
        }

        self.history.push(path)?;
        self.state = Self::state_for(&self.table, path.to_owned());

        if self.state.is_not_found() {
            Ok(Navigated::NotFound)
        } else {
            Ok(Navigated::Route)
        }
    }

    pub fn navigate_named(&mut self, name: &str) -> Result<Navigated, NavigationError> {
        let path = self
            .table
            .resolve_name(name)
            .map(|r| r.path().to_owned())
            .ok_or_else(|| NavigationError::UnknownRouteName(name.to_owned()))?;
        self.navigate(&path)
    }

    /// Re-reads the history's location, e.g. after back/forward.
    pub fn sync(&mut self) -> &NavigationState<V> {
        let path = self.history.location();
        if path != self.state.path {
            self.state = Self::state_for(&self.table, path);
        }
        &self.state
    }

    pub fn current(&self) -> &NavigationState<V> {
        &self.state
    }

    pub fn routes(&self) -> impl ExactSizeIterator<Item = (&str, &str)> + '_ {
        self.table.routes()
    }

    pub fn history(&self) -> &H {
        &self.history
    }

    pub fn history_mut(&mut self) -> &mut H {
        &mut self.history
    }

    fn state_for(table: &RouteTable<V>, path: String) -> NavigationState<V> {
        match table.resolve(&path) {
            Some(route) => {
                log::debug!("{path} -> {}", route.name());
                NavigationState {
                    view: route.view(),
                    route: Some(route.clone()),
                    path,
                }
            }
            None => {
                log::warn!("no route for {path}, showing fallback view");
                NavigationState {
                    view: table.fallback(),
                    route: None,
                    path,
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::router::error::HistoryError;
    use crate::router::history::MemoryHistory;
    use pretty_assertions::assert_eq;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum View {
        Home,
        Rect,
        NotFound,
    }

    fn table() -> RouteTable<View> {
        RouteTable::builder(View::NotFound)
            .route("/", "Home", View::Home)
            .route("/div-rectangles", "DivRectangles", View::Rect)
            .build()
            .unwrap()
    }

    fn navigator_at(path: &str) -> Navigator<View, MemoryHistory> {
        Navigator::new(table(), MemoryHistory::new(path))
    }

    #[test]
    fn starts_at_history_location() {
        let nav = navigator_at("/div-rectangles");
        assert_eq!(nav.current().path(), "/div-rectangles");
        assert_eq!(nav.current().view(), View::Rect);
        assert_eq!(nav.current().route().map(Route::name), Some("DivRectangles"));
    }

    #[test]
    fn starting_on_unknown_path_shows_fallback() {
        let nav = navigator_at("/nope");
        assert!(nav.current().is_not_found());
        assert_eq!(nav.current().view(), View::NotFound);
    }

    #[test]
    fn navigate_to_home() {
        let mut nav = navigator_at("/div-rectangles");
        assert_eq!(nav.navigate("/").unwrap(), Navigated::Route);
        assert_eq!(nav.current().path(), "/");
        assert_eq!(nav.current().view(), View::Home);
        assert_eq!(nav.history().location(), "/");
    }

    #[test]
    fn navigate_to_unknown_path_uses_fallback() {
        let mut nav = navigator_at("/");
        assert_eq!(nav.navigate("/missing").unwrap(), Navigated::NotFound);
        assert_eq!(nav.current().path(), "/missing");
        assert_eq!(nav.current().view(), View::NotFound);
        assert_eq!(nav.current().route(), None);
        assert_eq!(nav.history().location(), "/missing");
    }

    #[test]
    fn navigating_to_current_path_adds_no_entry() {
        let mut nav = navigator_at("/");
        assert_eq!(nav.navigate("/").unwrap(), Navigated::Unchanged);
        assert_eq!(nav.history().entries().len(), 1);
    }

    #[test]
    fn navigate_by_name() {
        let mut nav = navigator_at("/");
        assert_eq!(nav.navigate_named("DivRectangles").unwrap(), Navigated::Route);
        assert_eq!(nav.current().path(), "/div-rectangles");

        let err = nav.navigate_named("Nope").unwrap_err();
        assert_eq!(err, NavigationError::UnknownRouteName("Nope".into()));
        assert_eq!(nav.history().entries().len(), 2);
        assert_eq!(nav.current().path(), "/div-rectangles");
    }

    #[test]
    fn sync_follows_back_button() {
        let mut nav = navigator_at("/");
        nav.navigate("/div-rectangles").unwrap();
        assert!(nav.history_mut().back());

        let state = nav.sync();
        assert_eq!(state.path(), "/");
        assert_eq!(state.view(), View::Home);
        assert_eq!(nav.history().entries().len(), 1);
    }

    #[test]
    fn lists_routes_for_menus() {
        let nav = navigator_at("/");
        let listed: Vec<_> = nav.routes().collect();
        assert_eq!(listed, vec![("/", "Home"), ("/div-rectangles", "DivRectangles")]);
    }

    #[test]
    fn relative_path_is_not_found_and_not_pushed() {
        let mut nav = navigator_at("/");
        assert_eq!(nav.navigate("canvas-one").unwrap(), Navigated::NotFound);
        assert_eq!(nav.current().view(), View::NotFound);
        assert_eq!(nav.current().path(), "canvas-one");
        assert_eq!(nav.history().entries(), ["/".to_owned()]);
    }

    struct RejectingHistory;

    impl History for RejectingHistory {
        fn push(&mut self, path: &str) -> Result<(), HistoryError> {
            Err(HistoryError::PushRejected {
                path: path.to_owned(),
                reason: "SecurityError".into(),
            })
        }

        fn location(&self) -> String {
            "/".into()
        }
    }

    #[test]
    fn rejected_push_leaves_state_alone() {
        let mut nav = Navigator::new(table(), RejectingHistory);
        let err = nav.navigate("/div-rectangles").unwrap_err();
        assert!(matches!(err, NavigationError::History(HistoryError::PushRejected { .. })));
        assert_eq!(nav.current().path(), "/");
        assert_eq!(nav.current().view(), View::Home);
    }
}
