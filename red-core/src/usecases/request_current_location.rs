use std::{cell::Cell, rc::Rc};

use red_entities::{
    form::CoordinatesPatch,
    position::{Position, PositionError, PositionOptions},
    wkt::WktPoint,
};

use super::Error;
use crate::gateways::{FormStateGateway, GeoLocationGateway, NotificationGateway};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestState {
    Idle,
    Requesting,
}

/// Fills the `coordinates` of a form with the current position.
///
/// Requests are neither cancelled nor retried and overlapping
/// requests are not prevented: every request that resolves
/// successfully writes its coordinates, the last one wins.
pub struct LocationRequester<G, N, S> {
    geo: G,
    notifier: N,
    form_state: S,
    options: PositionOptions,
    pending: Rc<Cell<usize>>,
}

impl<G, N, S> LocationRequester<G, N, S>
where
    G: GeoLocationGateway,
    N: NotificationGateway + Clone + 'static,
    S: FormStateGateway + Clone + 'static,
{
    pub fn new(geo: G, notifier: N, form_state: S) -> Self {
        Self {
            geo,
            notifier,
            form_state,
            options: PositionOptions::default(),
            pending: Rc::new(Cell::new(0)),
        }
    }

    #[must_use]
    pub fn with_options(mut self, options: PositionOptions) -> Self {
        self.options = options;
        self
    }

    pub fn options(&self) -> &PositionOptions {
        &self.options
    }

    pub fn state(&self) -> RequestState {
        if self.pending.get() == 0 {
            RequestState::Idle
        } else {
            RequestState::Requesting
        }
    }

    pub fn request_current_location(&self) {
        if !self.geo.is_available() {
            report(&self.notifier, &Error::CapabilityUnavailable);
            return;
        }
        self.pending.set(self.pending.get() + 1);
        log::debug!(
            "Request current position ({} pending)",
            self.pending.get()
        );
        let notifier = self.notifier.clone();
        let form_state = self.form_state.clone();
        let pending = Rc::clone(&self.pending);
        self.geo.request_current_position(
            &self.options,
            Box::new(move |result: Result<Position, PositionError>| {
                pending.set(pending.get().saturating_sub(1));
                match result {
                    Ok(position) => merge_position(&form_state, position),
                    Err(err) => report(&notifier, &Error::from(err)),
                }
            }),
        );
    }
}

fn merge_position<S>(form_state: &S, position: Position)
where
    S: FormStateGateway,
{
    let point = WktPoint::from(position.pos);
    match position.accuracy {
        Some(accuracy) => log::debug!("Received current position: {point} (accuracy: {accuracy} m)"),
        None => log::debug!("Received current position: {point}"),
    }
    form_state.merge(CoordinatesPatch::from(point));
}

fn report<N>(notifier: &N, err: &Error)
where
    N: NotificationGateway,
{
    match err {
        Error::CapabilityUnavailable => log::warn!("{err}"),
        Error::RequestFailed(_) => log::error!("{err}"),
    }
    notifier.notify(err.notice());
}
