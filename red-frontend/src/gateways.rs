//! Browser implementations of the core gateways.

use anyhow::anyhow;
use leptos::{window, SignalUpdate, WriteSignal};
use wasm_bindgen::{prelude::*, JsCast};
use web_sys::{Geolocation, GeolocationPosition, GeolocationPositionError};

use red_core::gateways::{
    FormStateGateway, GeoLocationGateway, Notice, NotificationGateway, OneShot, PositionCallback,
};
use red_entities::{
    form::{CoordinatesPatch, HasCoordinates},
    geo::MapPoint,
    position::{Position, PositionError, PositionErrorCode, PositionOptions},
};

/// `navigator.geolocation` of the current window.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserGeoLocation;

impl BrowserGeoLocation {
    fn geolocation() -> Option<Geolocation> {
        let navigator = window().navigator();
        let geolocation = js_sys::Reflect::get(&navigator, &JsValue::from_str("geolocation")).ok()?;
        if geolocation.is_undefined() || geolocation.is_null() {
            return None;
        }
        geolocation.dyn_into().ok()
    }
}

impl GeoLocationGateway for BrowserGeoLocation {
    fn is_available(&self) -> bool {
        Self::geolocation().is_some()
    }

    fn request_current_position(&self, options: &PositionOptions, callback: PositionCallback) {
        let Some(geolocation) = Self::geolocation() else {
            callback(Err(PositionError::new(
                PositionErrorCode::PositionUnavailable,
                "navigator.geolocation is missing",
            )));
            return;
        };

        OneShot::issue(callback, |one_shot| {
            let on_success = {
                let one_shot = one_shot.clone();
                Closure::once_into_js(move |position: GeolocationPosition| {
                    one_shot.resolve(Ok(position_from_js(&position)));
                })
            };
            let on_error = {
                let one_shot = one_shot.clone();
                Closure::once_into_js(move |err: GeolocationPositionError| {
                    one_shot.resolve(Err(position_error_from_js(&err)));
                })
            };
            geolocation
                .get_current_position_with_error_callback_and_options(
                    on_success.unchecked_ref(),
                    Some(on_error.unchecked_ref()),
                    &js_position_options(options),
                )
                .map_err(js_error)
        });
    }
}

fn position_from_js(position: &GeolocationPosition) -> Position {
    let coords = position.coords();
    Position {
        pos: MapPoint::from_lat_lng_deg(coords.latitude(), coords.longitude()),
        accuracy: Some(coords.accuracy()),
    }
}

fn position_error_from_js(err: &GeolocationPositionError) -> PositionError {
    let code = PositionErrorCode::try_from(err.code()).unwrap_or_else(|err| {
        log::warn!("{err}");
        PositionErrorCode::PositionUnavailable
    });
    PositionError::new(code, err.message())
}

fn js_position_options(options: &PositionOptions) -> web_sys::PositionOptions {
    let js_options = web_sys::PositionOptions::new();
    js_options.set_enable_high_accuracy(options.enable_high_accuracy);
    if let Some(timeout) = options.timeout_millis() {
        js_options.set_timeout(timeout);
    }
    if let Some(maximum_age) = options.maximum_age_millis() {
        js_options.set_maximum_age(maximum_age);
    }
    js_options
}

/// Blocking notices via `window.alert()`.
#[derive(Debug, Clone, Copy, Default)]
pub struct AlertNotifier;

impl NotificationGateway for AlertNotifier {
    fn notify(&self, notice: Notice) {
        if let Err(err) = window().alert_with_message(notice.message()) {
            log::error!("Unable to show notice '{notice}': {}", js_error(err));
        }
    }
}

/// Merges updates into a form signal owned by the caller.
pub struct SignalFormState<F: 'static>(WriteSignal<F>);

impl<F: 'static> SignalFormState<F> {
    pub const fn new(update_form_state: WriteSignal<F>) -> Self {
        Self(update_form_state)
    }
}

impl<F: 'static> Clone for SignalFormState<F> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<F: 'static> Copy for SignalFormState<F> {}

impl<F> FormStateGateway for SignalFormState<F>
where
    F: HasCoordinates + 'static,
{
    fn merge(&self, patch: CoordinatesPatch) {
        self.0.update(|prev| patch.merge_into(prev));
    }
}

fn js_error(err: JsValue) -> anyhow::Error {
    let msg = err
        .dyn_ref::<js_sys::Error>()
        .map(|err| String::from(err.message()))
        .or_else(|| err.as_string())
        .unwrap_or_else(|| format!("{err:?}"));
    anyhow!(msg)
}
