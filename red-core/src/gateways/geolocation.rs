use std::{cell::RefCell, fmt, rc::Rc};

use red_entities::position::{Position, PositionError, PositionErrorCode, PositionOptions};

/// Receives the single outcome of a position request.
pub type PositionCallback = Box<dyn FnOnce(Result<Position, PositionError>)>;

pub trait GeoLocationGateway {
    /// `false` if the platform has no location capability at all.
    fn is_available(&self) -> bool;

    /// Issues a one-shot request and returns immediately.
    ///
    /// The callback is invoked exactly once, later on the same thread.
    fn request_current_position(&self, options: &PositionOptions, callback: PositionCallback);
}

impl<T> GeoLocationGateway for Rc<T>
where
    T: GeoLocationGateway + ?Sized,
{
    fn is_available(&self) -> bool {
        (**self).is_available()
    }

    fn request_current_position(&self, options: &PositionOptions, callback: PositionCallback) {
        (**self).request_current_position(options, callback);
    }
}

/// Shares a [`PositionCallback`] between the success and the
/// error handler of a platform request.
///
/// Whichever outcome arrives first consumes the callback.
#[derive(Clone)]
pub struct OneShot(Rc<RefCell<Option<PositionCallback>>>);

impl OneShot {
    pub fn new(callback: PositionCallback) -> Self {
        Self(Rc::new(RefCell::new(Some(callback))))
    }

    /// Issues a request through `issue`.
    ///
    /// If `issue` fails the request resolves as
    /// [`PositionErrorCode::PositionUnavailable`].
    pub fn issue<F, E>(callback: PositionCallback, issue: F)
    where
        F: FnOnce(&OneShot) -> Result<(), E>,
        E: fmt::Display,
    {
        let one_shot = Self::new(callback);
        if let Err(err) = issue(&one_shot) {
            log::warn!("Unable to request current position: {err}");
            one_shot.resolve(Err(PositionError::new(
                PositionErrorCode::PositionUnavailable,
                err.to_string(),
            )));
        }
    }

    /// Returns `false` if an outcome has already been delivered.
    pub fn resolve(&self, result: Result<Position, PositionError>) -> bool {
        let callback = self.0.borrow_mut().take();
        let Some(callback) = callback else {
            log::warn!("Ignoring additional outcome of a position request");
            return false;
        };
        callback(result);
        true
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use red_entities::geo::MapPoint;

    use super::*;

    type Outcomes = Rc<RefCell<Vec<Result<Position, PositionError>>>>;

    fn recording_callback() -> (Outcomes, PositionCallback) {
        let outcomes = Outcomes::default();
        let callback = {
            let outcomes = Rc::clone(&outcomes);
            Box::new(move |result| outcomes.borrow_mut().push(result)) as PositionCallback
        };
        (outcomes, callback)
    }

    fn position() -> Position {
        Position::from(MapPoint::from_lat_lng_deg(1.0, 2.0))
    }

    #[test]
    fn deliver_only_the_first_outcome() {
        let (outcomes, callback) = recording_callback();
        let one_shot = OneShot::new(callback);
        let on_error = one_shot.clone();

        assert!(one_shot.resolve(Ok(position())));
        assert!(!on_error.resolve(Err(PositionError::new(
            PositionErrorCode::Timeout,
            "late"
        ))));
        assert!(!one_shot.resolve(Ok(position())));

        assert_eq!(*outcomes.borrow(), vec![Ok(position())]);
    }

    #[test]
    fn failed_issue_resolves_as_unavailable() {
        let (outcomes, callback) = recording_callback();

        OneShot::issue(callback, |_| Err("SecurityError: insecure origin"));

        assert_eq!(
            *outcomes.borrow(),
            vec![Err(PositionError::new(
                PositionErrorCode::PositionUnavailable,
                "SecurityError: insecure origin"
            ))]
        );
    }

    #[test]
    fn failed_issue_after_synchronous_outcome_is_ignored() {
        let (outcomes, callback) = recording_callback();

        OneShot::issue(callback, |one_shot| {
            one_shot.resolve(Ok(position()));
            Err("thrown afterwards")
        });

        assert_eq!(*outcomes.borrow(), vec![Ok(position())]);
    }

    #[test]
    fn issued_request_stays_pending_until_resolved() {
        let (outcomes, callback) = recording_callback();
        let mut pending = None;

        OneShot::issue(callback, |one_shot| {
            pending = Some(one_shot.clone());
            Ok::<_, String>(())
        });
        assert!(outcomes.borrow().is_empty());

        let one_shot = pending.unwrap();
        assert!(one_shot.resolve(Err(PositionError::new(
            PositionErrorCode::PermissionDenied,
            "denied"
        ))));
        assert_eq!(outcomes.borrow().len(), 1);
    }
}
