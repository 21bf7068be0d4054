use thiserror::Error;

use crate::data_backend::RestaurantGateway;
use crate::data_types::{GatewayError, RestaurantDraft};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormError {
    #[error("please fill in all fields ({0} is blank)")]
    Missing(&'static str),
}

#[derive(Error, Debug)]
pub enum SubmitError {
    #[error(transparent)]
    Form(#[from] FormError),
    #[error(transparent)]
    Write(#[from] GatewayError),
}

/// The add-restaurant form's field state. Validation runs before any
/// network call; a blank field means no write is ever issued.
#[derive(Debug, Default, Clone)]
pub struct AddRestaurantForm {
    pub name: String,
    pub location: String,
    pub image: String,
}

impl AddRestaurantForm {
    /// All three fields are required; whitespace counts as blank.
    pub fn validate(&self) -> Result<RestaurantDraft, FormError> {
        for (label, value) in [
            ("name", &self.name),
            ("location", &self.location),
            ("image", &self.image),
        ] {
            if value.trim().is_empty() {
                return Err(FormError::Missing(label));
            }
        }
        Ok(RestaurantDraft {
            name: self.name.clone(),
            location: self.location.clone(),
            image: self.image.clone(),
        })
    }

    /// Validate-then-write. Exactly one create request on success, zero on
    /// a validation failure.
    pub async fn submit(&self, gateway: &RestaurantGateway) -> Result<(), SubmitError> {
        let draft = self.validate()?;
        gateway.add_restaurant(&draft).await?;
        Ok(())
    }
}
