use crate::Page;
use leptos::*;
use leptos_router::*;

const TITLE: &str = "Project Red";

#[component]
pub fn NavBar() -> impl IntoView {
    view! {
      <nav class="container mx-auto p-6">
        <div class="flex items-center justify-between">
          <div class="pt-2 font-bold text-red-700">
            <A href = Page::BloodRequest.path()>{ TITLE }</A>
          </div>
          <div class="flex space-x-6">
            <MenuItem page = Page::BloodRequest label = "Request blood" />
            <MenuItem page = Page::DonorProfile label = "Donor profile" />
          </div>
        </div>
      </nav>
    }
}

#[component]
fn MenuItem(page: Page, label: &'static str) -> impl IntoView {
    view! {
      <A href=page.path() class="hover:text-gray-600".to_string()>{ label }</A>
    }
}
