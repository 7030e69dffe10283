// ============================================================================
// Interfaces Module
// Contains all trait definitions and contracts
// ============================================================================

mod company_directory;
mod event_handler;

pub use company_directory::{
    company_detail_url, service_string, CompanyDirectory, JsonCompanyDirectory, JsonTransport,
    BASE_URL, DEFAULT_LANGUAGE,
};
pub use event_handler::{
    CollectingEventHandler, LoggingEventHandler, NoOpEventHandler, ReaderEvent,
    ReaderEventHandler,
};
