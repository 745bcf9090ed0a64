use leptos::prelude::{AnyView, IntoAny};
use leptos::view;

use crate::app::NavHandle;
use crate::routes::Page;

pub mod canvas;
pub mod div_rectangles;
pub mod home;
pub mod not_found;

use canvas::{CanvasOne, CanvasThree, CanvasTwo};
use div_rectangles::DivRectangles;
use home::Home;
use not_found::NotFound;

impl Page {
    /// Mounts the component behind this page.
    pub fn view(self, nav: NavHandle) -> AnyView {
        match self {
            Page::Home => view! { <Home nav/> }.into_any(),
            Page::DivRectangles => view! { <DivRectangles/> }.into_any(),
            Page::CanvasOne => view! { <CanvasOne/> }.into_any(),
            Page::CanvasTwo => view! { <CanvasTwo/> }.into_any(),
            Page::CanvasThree => view! { <CanvasThree/> }.into_any(),
            Page::NotFound => view! { <NotFound nav/> }.into_any(),
        }
    }
}
