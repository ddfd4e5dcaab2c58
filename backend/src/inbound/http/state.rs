//! Shared HTTP adapter state.
//!
//! Handlers receive this through `web::Data` and only see domain ports, so
//! they can be tested with doubles instead of real storage.

use std::sync::Arc;

use crate::domain::ports::{CashCardCommand, CashCardQuery, LoginService};

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub login: Arc<dyn LoginService>,
    pub cards: Arc<dyn CashCardQuery>,
    pub card_commands: Arc<dyn CashCardCommand>,
}

impl HttpState {
    /// Bundle the ports used by the HTTP handlers.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    ///
    /// use cashcard::domain::{CashCardService, ListingDefaults};
    /// use cashcard::domain::ports::FixtureLoginService;
    /// use cashcard::inbound::http::state::HttpState;
    /// use cashcard::outbound::memory::InMemoryCashCardRepository;
    ///
    /// let service = Arc::new(CashCardService::new(
    ///     Arc::new(InMemoryCashCardRepository::new()),
    ///     ListingDefaults::default(),
    /// ));
    /// let state = HttpState::new(Arc::new(FixtureLoginService), service.clone(), service);
    /// # let _ = state;
    /// ```
    pub fn new(
        login: Arc<dyn LoginService>,
        cards: Arc<dyn CashCardQuery>,
        card_commands: Arc<dyn CashCardCommand>,
    ) -> Self {
        Self {
            login,
            cards,
            card_commands,
        }
    }
}
