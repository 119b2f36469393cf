use leptos::*;

use red_entities::{form::HasCoordinates, wkt::WktPoint};

use super::BLOOD_GROUPS;
use crate::components::*;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct DonorProfileForm {
    pub name: String,
    pub phone: String,
    pub blood_group: String,
    pub coordinates: String,
}

impl HasCoordinates for DonorProfileForm {
    fn coordinates(&self) -> &str {
        &self.coordinates
    }
    fn set_coordinates(&mut self, coordinates: String) {
        self.coordinates = coordinates;
    }
}

#[component]
pub fn DonorProfile() -> impl IntoView {
    let (form, set_form) = create_signal(DonorProfileForm::default());

    // -- memos -- //

    let position = create_memo(move |_| {
        form.with(|f| {
            if f.coordinates.is_empty() {
                return None;
            }
            match f.coordinates.parse::<WktPoint>() {
                Ok(point) => Some(point.pos()),
                Err(err) => {
                    log::warn!("Unexpected coordinates '{}': {err}", f.coordinates);
                    None
                }
            }
        })
    });

    // -- callbacks -- //

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        form.with_untracked(|form| log::info!("Save donor profile: {form:?}"));
    };

    view! {
      <section class="container mx-auto p-6">
        <h4 class="text-xl font-semibold mb-6">"Donor profile"</h4>
        <form class="space-y-4" on:submit = on_submit>
          <div>
            <label class="font-bold text-gray-700">"Name"</label>
            <input
              type = "text"
              class = "w-full p-2 border rounded"
              prop:value = move || form.with(|f| f.name.clone())
              on:change = move |ev| {
                let value = event_target_value(&ev);
                set_form.update(|f| f.name = value);
              }
            />
          </div>
          <div>
            <label class="font-bold text-gray-700">"Phone"</label>
            <input
              type = "tel"
              class = "w-full p-2 border rounded"
              prop:value = move || form.with(|f| f.phone.clone())
              on:change = move |ev| {
                let value = event_target_value(&ev);
                set_form.update(|f| f.phone = value);
              }
            />
          </div>
          <div>
            <label class="font-bold text-gray-700">"Blood group"</label>
            <select
              class="w-full p-2 border rounded"
              on:change = move |ev| {
                let value = event_target_value(&ev);
                set_form.update(|f| f.blood_group = value);
              }
            >
              <option value="" selected>"Select"</option>
              { BLOOD_GROUPS.into_iter().map(|group| view! { <option value=group>{ group }</option> }).collect_view() }
            </select>
          </div>
          <LocationField form_state = form.into() update_form_state = set_form />
          { move || position.get().map(|pos| view! {
              <p class="text-sm text-gray-600">
                { format!("Latitude {}, longitude {}", pos.lat(), pos.lng()) }
              </p>
            })
          }
          <button
            type = "submit"
            class = "px-6 py-2.5 font-medium text-xs uppercase rounded shadow-md bg-red-600 text-white"
          >
            "Save"
          </button>
        </form>
      </section>
    }
}
