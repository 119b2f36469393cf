use leptos::{ev, *};

use red_core::usecases::LocationRequester;
use red_entities::form::HasCoordinates;

use crate::gateways::{AlertNotifier, BrowserGeoLocation, SignalFormState};

const LABEL: &str = "Location";
const PLACEHOLDER: &str = "Click location icon";
const USE_CURRENT_LOCATION: &str = "Use current location";

// Material Design "my_location" icon
const MY_LOCATION_ICON_PATH: &str = "M12 8c-2.21 0-4 1.79-4 4s1.79 4 4 4 4-1.79 4-4-1.79-4-4-4zm8.94 3A8.994 8.994 0 0 0 13 3.06V1h-2v2.06A8.994 8.994 0 0 0 3.06 11H1v2h2.06A8.994 8.994 0 0 0 11 20.94V23h2v-2.06A8.994 8.994 0 0 0 20.94 13H23v-2h-2.06zM12 19c-3.87 0-7-3.13-7-7s3.13-7 7-7 7 3.13 7 7-3.13 7-7 7z";

/// Read-only text field that is filled with the
/// current position of the device when clicked.
///
/// Only the `coordinates` of the form are replaced,
/// as `POINT(<lat> <lng>)`.
#[component]
pub fn LocationField<F>(form_state: Signal<F>, update_form_state: WriteSignal<F>) -> impl IntoView
where
    F: HasCoordinates + 'static,
{
    let requester = store_value(LocationRequester::new(
        BrowserGeoLocation,
        AlertNotifier,
        SignalFormState::new(update_form_state),
    ));

    let coordinates = Signal::derive(move || form_state.with(|form| form.coordinates().to_owned()));

    // -- callbacks -- //

    let request_current_location = move |_: ev::MouseEvent| {
        requester.with_value(|requester| {
            log::debug!("Current location requested ({:?})", requester.state());
            requester.request_current_location();
        });
    };

    view! {
      <div class="relative w-2/3">
        <label class="font-bold text-gray-700">{ LABEL }</label>
        <div class="relative">
          <input
            type = "text"
            name = "coordinates"
            readonly = true
            placeholder = PLACEHOLDER
            class = "w-full p-2 pr-10 border rounded"
            prop:value = move || coordinates.get()
            on:click = request_current_location
          />
          <span
            class = "absolute inset-y-0 right-0 p-3 flex items-center text-gray-700 cursor-pointer border-2"
            title = USE_CURRENT_LOCATION
            on:click = request_current_location
          >
            <MyLocationIcon />
          </span>
        </div>
      </div>
    }
}

#[component]
fn MyLocationIcon() -> impl IntoView {
    view! {
      <svg
        xmlns = "http://www.w3.org/2000/svg"
        width = "25"
        height = "25"
        viewBox = "0 0 24 24"
        fill = "currentColor"
        aria-hidden = "true"
      >
        <path d = MY_LOCATION_ICON_PATH />
      </svg>
    }
}
