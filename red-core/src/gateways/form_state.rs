use red_entities::form::CoordinatesPatch;

/// Write access to form state that is owned by the caller.
pub trait FormStateGateway {
    /// Replaces the `coordinates` field and keeps all other fields.
    fn merge(&self, patch: CoordinatesPatch);
}
