use leptos::*;
use leptos_router::*;

mod components;
mod gateways;

mod pages;
use pages::*;

use components::*;

#[component]
#[must_use]
pub fn App() -> impl IntoView {
    view! {
      <Router>
        <NavBar />
        <main>
          <Routes>
            <Route
              path=Page::BloodRequest.path()
              view=move || view! { <BloodRequest /> }
            />
            <Route
              path=Page::DonorProfile.path()
              view=move || view! { <DonorProfile /> }
            />
          </Routes>
        </main>
      </Router>
    }
}

pub fn run() {
    mount_to_body(|| view! { <App /> });
}
