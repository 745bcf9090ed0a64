//! Client-side routing: a fixed table of literal paths, each naming a view,
//! driven through a [`History`] so the address bar follows navigation
//! without a page reload.

pub mod error;
pub mod history;
pub mod navigator;
pub mod route;

pub use error::{HistoryError, NavigationError, RouteTableError};
pub use history::{History, MemoryHistory};
pub use navigator::{Navigated, NavigationState, Navigator};
pub use route::{Route, RouteTable, RouteTableBuilder};

#[cfg(feature = "web")]
pub use history::BrowserHistory;
