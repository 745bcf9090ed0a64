use leptos::prelude::{
    ClassAttribute, CollectView, ElementChild, Get, Memo, OnAttribute, RwSignal, Update, With,
    WithUntracked,
};
use leptos::{IntoView, component, view};
use leptos_meta::{Title, provide_meta_context};

use crate::render::canvas2d;
use crate::router::{BrowserHistory, History, Navigated, Navigator};
use crate::routes::{Page, menu_entries};

pub type AppNavigator = Navigator<Page, BrowserHistory>;

/// Shared handle to the one navigator the app owns.
pub type NavHandle = RwSignal<AppNavigator>;

/// Follows a route without reloading the page. Subscribers are only
/// notified when the location actually changed.
pub fn go<H>(nav: RwSignal<Navigator<Page, H>>, path: &str)
where
    H: History + Send + Sync + 'static,
{
    nav.maybe_update(|n| match n.navigate(path) {
        Ok(Navigated::Unchanged) => false,
        Ok(_) => true,
        Err(e) => {
            log::error!("navigation to {path} failed: {e}");
            false
        }
    });
}

/// Adopts the history's location after back/forward.
pub fn follow_history<H>(nav: RwSignal<Navigator<Page, H>>)
where
    H: History + Send + Sync + 'static,
{
    nav.maybe_update(|n| {
        let before = n.current().path().to_owned();
        n.sync().path() != before
    });
}

#[component]
pub fn RouteLink(
    nav: NavHandle,
    #[prop(into)] path: String,
    #[prop(into)] label: String,
) -> impl IntoView {
    let target = path.clone();
    let active = path.clone();
    view! {
        <a
            href=path
            class="hover:text-primary"
            class=("font-bold", move || nav.with(|n| n.current().path() == active))
            on:click=move |ev| {
                // plain clicks stay in the app, modified clicks keep browser behaviour
                if ev.ctrl_key() || ev.meta_key() || ev.shift_key() || ev.button() != 0 {
                    return;
                }
                ev.prevent_default();
                go(nav, &target);
            }
        >
            {label}
        </a>
    }
}

#[component]
pub fn App(navigator: AppNavigator) -> impl IntoView {
    provide_meta_context();

    let nav = RwSignal::new(navigator);

    // back / forward
    let listening = canvas2d::window().and_then(|w| {
        canvas2d::add_listener(&w, "popstate", move |_: web_sys::Event| {
            follow_history(nav);
        })
    });
    if let Err(e) = listening {
        log::error!("back/forward will not update the page: {e}");
    }

    let menu = nav.with_untracked(menu_entries);

    // same-page navigations must not remount the page
    let page = Memo::new(move |_| nav.with(|n| n.current().view()));

    view! {
        <Title text=move || format!("{} · shapes", nav.with(|n| n.current().view().title()))/>

        <header class="sticky top-0 bg-surface/85 backdrop-blur">
          <div class="max-w-6xl mx-auto flex justify-between items-center px-6 py-4">
            <span class="text-2xl font-extrabold text-primary">SHAPES</span>
            <nav class="hidden md:flex gap-8 text-text">
              {menu
                  .into_iter()
                  .map(|(path, label)| view! { <RouteLink nav path label/> })
                  .collect_view()}
            </nav>
          </div>
        </header>

        <main class="min-h-screen p-4">
          {move || page.get().view(nav)}
        </main>

        <footer class="bg-surface text-text py-8">
          <div class="max-w-6xl mx-auto px-6">
            <p>{move || nav.with(|n| n.current().path().to_owned())}</p>
          </div>
        </footer>
    }
}
