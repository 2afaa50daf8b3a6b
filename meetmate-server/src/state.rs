use meetmate_provider_google::FreeBusyClient;

/// Shared application state
///
/// The freeBusy client is injected here rather than constructed inside
/// handlers, so the computation path stays free of globals.
#[derive(Clone)]
pub struct AppState {
    pub freebusy: FreeBusyClient,
}

impl AppState {
    pub fn new() -> Self {
        AppState {
            freebusy: FreeBusyClient::new(),
        }
    }
}
