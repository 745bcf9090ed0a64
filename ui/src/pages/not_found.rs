use leptos::prelude::{ClassAttribute, ElementChild, With};
use leptos::{IntoView, component, view};

use crate::app::{NavHandle, RouteLink};

#[component]
pub fn NotFound(nav: NavHandle) -> impl IntoView {
    view! {
      <div class="max-w-md mx-auto p-6">
        <h2 class="text-xl font-semibold mb-2">"404 – not found"</h2>
        <p class="mb-4">
          "Nothing lives at "
          <code>{move || nav.with(|n| n.current().path().to_owned())}</code>
        </p>
        <RouteLink nav path="/" label="Back home"/>
      </div>
    }
}
