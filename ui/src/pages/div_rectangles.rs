use leptos::prelude::{
    ClassAttribute, CollectView, ElementChild, Get, OnAttribute, RwSignal, StyleAttribute, Update,
};
use leptos::{IntoView, component, view};

use crate::render::rectangles::{Rect, layout};

const COLUMNS: usize = 6;
const CELL: f32 = 80.0;
const GAP: f32 = 12.0;

fn rect_style(r: &Rect) -> String {
    format!(
        "left:{}px;top:{}px;width:{}px;height:{}px;background:hsl({} 70% 60%);",
        r.x, r.y, r.width, r.height, r.hue
    )
}

#[component]
pub fn DivRectangles() -> impl IntoView {
    let count = RwSignal::new(12usize);

    view! {
      <section class="max-w-4xl mx-auto">
        <h2 class="text-xl font-bold mb-4">"Div rectangles"</h2>
        <div class="flex gap-3 mb-6">
          <button class="px-3 py-1 border rounded" on:click=move |_| count.update(|c| *c = c.saturating_sub(1))>"−"</button>
          <span>{move || count.get()}</span>
          <button class="px-3 py-1 border rounded" on:click=move |_| count.update(|c| *c += 1)>"+"</button>
        </div>
        <div class="relative" style=move || {
            let rows = count.get().div_ceil(COLUMNS) as f32;
            format!("height:{}px;", rows * (CELL + GAP))
        }>
          {move || {
              layout(count.get(), COLUMNS, CELL, GAP)
                  .iter()
                  .map(|r| view! { <div class="absolute rounded-md shadow-sm" style=rect_style(r)></div> })
                  .collect_view()
          }}
        </div>
      </section>
    }
}
