// ui/src/routes.rs
use crate::router::{History, Navigator, RouteTable, RouteTableError};

/// Every view the router can show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Page {
    Home,
    DivRectangles,
    CanvasOne,
    CanvasTwo,
    CanvasThree,
    NotFound,
}

impl Page {
    pub fn title(&self) -> &'static str {
        match self {
            Page::Home => "Home",
            Page::DivRectangles => "Div Rectangles",
            Page::CanvasOne => "Canvas One",
            Page::CanvasTwo => "Canvas Two",
            Page::CanvasThree => "Canvas Three",
            Page::NotFound => "Not Found",
        }
    }
}

pub fn route_table() -> Result<RouteTable<Page>, RouteTableError> {
    RouteTable::builder(Page::NotFound)
        .route("/",               "Home",          Page::Home)
        .route("/div-rectangles", "DivRectangles", Page::DivRectangles)
        .route("/canvas-one",     "CanvasOne",     Page::CanvasOne)
        .route("/canvas-two",     "CanvasTwo",     Page::CanvasTwo)
        .route("/canvas-three",   "CanvasThree",   Page::CanvasThree)
        .build()
}

/// `(path, label)` for every registered route, in table order.
pub fn menu_entries<H: History>(nav: &Navigator<Page, H>) -> Vec<(String, &'static str)> {
    nav.routes()
        .filter_map(|(path, _)| nav.resolve(path).map(|r| (path.to_owned(), r.view().title())))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::router::MemoryHistory;
    use pretty_assertions::assert_eq;

    const ROUTED: [Page; 5] = [
        Page::Home,
        Page::DivRectangles,
        Page::CanvasOne,
        Page::CanvasTwo,
        Page::CanvasThree,
    ];

    #[test]
    fn table_builds() {
        let table = route_table().unwrap();
        assert_eq!(table.len(), ROUTED.len());
        assert_eq!(table.fallback(), Page::NotFound);
    }

    #[test]
    fn each_routed_page_has_one_route() {
        let table = route_table().unwrap();
        for page in ROUTED {
            let hits = table
                .routes()
                .filter(|(path, _)| table.resolve(path).map(|r| r.view()) == Some(page))
                .count();
            assert_eq!(hits, 1, "{page:?}");
        }
        assert!(table.routes().all(|(path, _)| table.resolve(path).unwrap().view() != Page::NotFound));
    }

    #[test]
    fn home_and_rectangles() {
        let mut nav = Navigator::new(route_table().unwrap(), MemoryHistory::new("/canvas-two"));
        assert_eq!(nav.current().view(), Page::CanvasTwo);

        let rect = nav.resolve("/div-rectangles").unwrap();
        assert_eq!(rect.name(), "DivRectangles");
        assert_eq!(rect.view(), Page::DivRectangles);
        assert!(nav.resolve("/missing").is_none());

        nav.navigate("/").unwrap();
        assert_eq!(nav.current().path(), "/");
        assert_eq!(nav.current().view(), Page::Home);
    }

    #[test]
    fn menu_uses_readable_titles() {
        let nav = Navigator::new(route_table().unwrap(), MemoryHistory::default());
        assert_eq!(
            menu_entries(&nav),
            vec![
                ("/".to_owned(), "Home"),
                ("/div-rectangles".to_owned(), "Div Rectangles"),
                ("/canvas-one".to_owned(), "Canvas One"),
                ("/canvas-two".to_owned(), "Canvas Two"),
                ("/canvas-three".to_owned(), "Canvas Three"),
            ]
        );
    }
}
