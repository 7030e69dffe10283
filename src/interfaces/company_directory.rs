// ============================================================================
// Company Directory Interface
// Contract for looking up issuer profiles by CVM code
// ============================================================================

use crate::domain::{CompanyDetail, RequestError};
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use serde_json::{json, Value};

/// Language requested from the listed-companies service
pub const DEFAULT_LANGUAGE: &str = "pt-BR";

/// Root of the exchange's listed-companies site
pub const BASE_URL: &str = "https://sistemaswebb3-listados.b3.com.br/";

const COMPANY_DETAIL_PATH: &str = "listedCompaniesProxy/CompanyCall/GetDetail/";

/// Request parameter of the listed-companies proxy: the compact JSON
/// `{"codeCVM":..,"language":..}`, base64-encoded.
pub fn service_string(cvm_code: &str, language: &str) -> String {
    let params = json!({ "codeCVM": cvm_code, "language": language });
    BASE64.encode(params.to_string())
}

/// Full URL of the company-detail endpoint for one issuer
pub fn company_detail_url(cvm_code: &str, language: &str) -> String {
    format!(
        "{}{}{}",
        BASE_URL,
        COMPANY_DETAIL_PATH,
        service_string(cvm_code, language)
    )
}

/// Fetches a JSON document over HTTP(S).
///
/// Implementations own the network concerns (client, timeouts, retries).
/// Transport failures are reported as `RequestError::Transport`.
pub trait JsonTransport: Send + Sync {
    fn get_json(&self, url: &str) -> Result<Value, RequestError>;
}

/// Source of issuer profiles
pub trait CompanyDirectory: Send + Sync {
    /// Look up the profile of the issuer registered under `cvm_code`
    fn company_detail(&self, cvm_code: &str) -> Result<CompanyDetail, RequestError>;
}

/// Directory backed by the listed-companies service
pub struct JsonCompanyDirectory<T> {
    transport: T,
    language: String,
}

impl<T: JsonTransport> JsonCompanyDirectory<T> {
    pub fn new(transport: T) -> Self {
        Self {
            transport,
            language: DEFAULT_LANGUAGE.to_string(),
        }
    }

    /// Builder method: Set the requested language
    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self
    }
}

impl<T: JsonTransport> CompanyDirectory for JsonCompanyDirectory<T> {
    fn company_detail(&self, cvm_code: &str) -> Result<CompanyDetail, RequestError> {
        let url = company_detail_url(cvm_code, &self.language);
        let payload = self.transport.get_json(&url)?;
        let detail = CompanyDetail::from_json(cvm_code, &payload);

        if let Err(err) = &detail {
            tracing::debug!(cvm_code, "company lookup failed: {}", err);
        }
        detail
    }
}
