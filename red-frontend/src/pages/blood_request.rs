use leptos::*;

use red_entities::form::HasCoordinates;

use super::BLOOD_GROUPS;
use crate::components::*;

const URGENCIES: [&str; 3] = ["Low", "Medium", "High"];

#[derive(Debug, Clone, PartialEq)]
pub struct BloodRequestForm {
    pub blood_group: String,
    pub units_required: u32,
    pub urgency: String,
    pub reason: String,
    pub coordinates: String,
}

impl Default for BloodRequestForm {
    fn default() -> Self {
        Self {
            blood_group: String::new(),
            units_required: 1,
            urgency: "Medium".to_string(),
            reason: String::new(),
            coordinates: String::new(),
        }
    }
}

impl HasCoordinates for BloodRequestForm {
    fn coordinates(&self) -> &str {
        &self.coordinates
    }
    fn set_coordinates(&mut self, coordinates: String) {
        self.coordinates = coordinates;
    }
}

#[component]
pub fn BloodRequest() -> impl IntoView {
    let (form, set_form) = create_signal(BloodRequestForm::default());

    let submit_disabled = Signal::derive(move || {
        form.with(|form| form.blood_group.is_empty() || form.coordinates.is_empty())
    });

    // -- callbacks -- //

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        form.with_untracked(|form| log::info!("Submit blood request: {form:?}"));
    };

    view! {
      <section class="container mx-auto p-6">
        <h4 class="text-xl font-semibold mb-6">"Request blood"</h4>
        <form class="space-y-4" on:submit = on_submit>
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
          <div>
            <label class="font-bold text-gray-700">"Units required"</label>
            <input
              type = "number"
              min = "1"
              class = "w-full p-2 border rounded"
              prop:value = move || form.with(|f| f.units_required.to_string())
              on:change = move |ev| {
                let value = event_target_value(&ev);
                match value.parse::<u32>() {
                  Ok(units) if units > 0 => set_form.update(|f| f.units_required = units),
                  _ => log::warn!("Ignoring invalid number of units: {value}"),
                }
              }
            />
          </div>
          <div>
            <label class="font-bold text-gray-700">"Urgency"</label>
            <select
              class="w-full p-2 border rounded"
              on:change = move |ev| {
                let value = event_target_value(&ev);
                set_form.update(|f| f.urgency = value);
              }
            >
              { URGENCIES.into_iter().map(|urgency| view! {
                  <option value=urgency selected=move || form.with(|f| f.urgency == urgency)>{ urgency }</option>
                }).collect_view()
              }
            </select>
          </div>
          <div>
            <label class="font-bold text-gray-700">"Reason"</label>
            <textarea
              class = "w-full p-2 border rounded"
              prop:value = move || form.with(|f| f.reason.clone())
              on:change = move |ev| {
                let value = event_target_value(&ev);
                set_form.update(|f| f.reason = value);
              }
            />
          </div>
          <LocationField form_state = form.into() update_form_state = set_form />
          <button
            type = "submit"
            class = "px-6 py-2.5 font-medium text-xs uppercase rounded shadow-md bg-red-600 text-white disabled:opacity-50"
            prop:disabled = move || submit_disabled.get()
          >
            "Submit request"
          </button>
        </form>
      </section>
    }
}
