use leptos::prelude::{ClassAttribute, CollectView, ElementChild, WithUntracked};
use leptos::{IntoView, component, view};

use crate::app::{NavHandle, RouteLink};
use crate::routes::menu_entries;

#[component]
pub fn Home(nav: NavHandle) -> impl IntoView {
    let demos = nav.with_untracked(menu_entries);

    view! {
      <div class="h-full flex items-center justify-center bg-neutral-dark text-slate-900">
        <div class="mx-4 p-10 border rounded-2xl shadow-sm bg-neutral-light max-w-lg w-full">
          <h1 class="text-4xl font-bold mb-2">Shapes Playground</h1>
          <p class="mb-6 text-lg">"Rectangles laid out with divs, cubes drawn on a canvas."</p>

          <ul class="flex flex-col gap-3">
            {demos
                .into_iter()
                .filter(|(path, _)| path != "/")
                .map(|(path, label)| view! { <li><RouteLink nav path label/></li> })
                .collect_view()}
          </ul>
        </div>
      </div>
    }
}
