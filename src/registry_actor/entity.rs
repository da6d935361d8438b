//! [`ActorEntity`] implementation for [`Registry`].

use super::actions::{RegistryAction, RegistryActionResult};
use crate::registry::validate::required;
use crate::registry::{Registry, RegistryError};
use actor_framework::ActorEntity;

impl ActorEntity for Registry {
    type Action = RegistryAction;
    type ActionResult = RegistryActionResult;
    type Error = RegistryError;

    fn handle_action(
        &mut self,
        action: RegistryAction,
    ) -> Result<RegistryActionResult, RegistryError> {
        match action {
            RegistryAction::Register(params) => {
                let member = self.register(params)?;
                Ok(RegistryActionResult::Register(member.clone()))
            }
            RegistryAction::Authenticate(credentials) => {
                let handle = required(&credentials.handle, "handle")?;
                let secret = required(&credentials.secret, "secret")?;
                let member = self.authenticate(handle, secret)?;
                Ok(RegistryActionResult::Authenticate(member.clone()))
            }
            RegistryAction::AddBook(params) => {
                self.add_book(params).map(RegistryActionResult::AddBook)
            }
            RegistryAction::AddFilm(params) => {
                self.add_film(params).map(RegistryActionResult::AddFilm)
            }
            RegistryAction::Search(query) => {
                let matches = self.search(&query)?.collect();
                Ok(RegistryActionResult::Search(matches))
            }
            RegistryAction::ReviewBook(params) => {
                self.review_book(params).map(RegistryActionResult::ReviewBook)
            }
            RegistryAction::ReviewFilm(params) => {
                self.review_film(params).map(RegistryActionResult::ReviewFilm)
            }
            RegistryAction::Summary => Ok(RegistryActionResult::Summary(self.summary())),
        }
    }
}
