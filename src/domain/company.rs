// ============================================================================
// Company Profile Domain Model
// Issuer details returned by the exchange's listed-companies service
// ============================================================================

use chrono::NaiveDateTime;
use serde_json::Value;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Format of the `lastDate` field, e.g. "21/05/2024 18:30:00"
pub const LAST_DATE_FORMAT: &str = "%d/%m/%Y %H:%M:%S";

// ============================================================================
// Request Errors
// ============================================================================

/// Failure to obtain a usable company profile
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RequestError {
    /// The service answered with an empty object
    NotFound { cvm_code: String },
    /// An expected key is absent from the payload
    MissingKey { key: &'static str },
    /// A key is present but holds an unusable value
    InvalidValue { key: &'static str },
    /// The transport failed before a payload was received
    Transport(String),
}

impl fmt::Display for RequestError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RequestError::NotFound { cvm_code } => {
                write!(f, "no company found with CVM code {}", cvm_code)
            },
            RequestError::MissingKey { key } => write!(f, "missing key '{}'", key),
            RequestError::InvalidValue { key } => write!(f, "invalid value for key '{}'", key),
            RequestError::Transport(reason) => write!(f, "transport error: {}", reason),
        }
    }
}

impl std::error::Error for RequestError {}

// ============================================================================
// Company Detail
// ============================================================================

/// A ticker/ISIN pair listed under an issuer
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SecurityCode {
    pub code: String,
    pub isin: String,
}

/// Issuer profile
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CompanyDetail {
    /// Brazilian company registry number
    pub cnpj: String,
    /// Securities commission (CVM) code
    pub cvm_code: String,
    pub company_name: String,
    /// Four-letter issuer code, e.g. "PETR"
    pub company_code: String,
    pub trading_name: String,
    pub activity: String,
    pub industry: String,
    pub market: String,
    pub market_indicator: String,
    pub has_bdr: bool,
    pub bdr_type: String,
    pub has_emissions: bool,
    pub has_quotation: bool,
    pub common_institution: String,
    pub preferred_institution: String,
    pub status: String,
    pub website: String,
    pub last_date: NaiveDateTime,
    pub bvmf_category: String,
    pub security_codes: Vec<SecurityCode>,
}

impl CompanyDetail {
    /// Map a listed-companies JSON payload into a profile.
    ///
    /// # Errors
    /// - `NotFound` if the payload is an empty object (or `null`)
    /// - `MissingKey` naming the first required key that is absent
    /// - `InvalidValue` if a key has the wrong JSON type or `lastDate` does
    ///   not match [`LAST_DATE_FORMAT`]
    pub fn from_json(cvm_code: &str, payload: &Value) -> Result<Self, RequestError> {
        let is_empty = match payload {
            Value::Null => true,
            Value::Object(map) => map.is_empty(),
            _ => false,
        };
        if is_empty {
            return Err(RequestError::NotFound {
                cvm_code: cvm_code.to_string(),
            });
        }

        Ok(Self {
            cnpj: str_field(payload, "cnpj")?,
            cvm_code: str_field(payload, "codeCVM")?,
            company_name: str_field(payload, "companyName")?,
            company_code: str_field(payload, "issuingCompany")?,
            trading_name: str_field(payload, "tradingName")?,
            activity: str_field(payload, "activity")?,
            industry: str_field(payload, "industryClassification")?,
            market: str_field(payload, "market")?,
            market_indicator: str_field(payload, "marketIndicator")?,
            has_bdr: bool_field(payload, "hasBDR")?,
            bdr_type: str_field(payload, "typeBDR")?,
            has_emissions: bool_field(payload, "hasEmissions")?,
            has_quotation: bool_field(payload, "hasQuotation")?,
            common_institution: str_field(payload, "institutionCommon")?,
            preferred_institution: str_field(payload, "institutionPreferred")?,
            status: str_field(payload, "status")?,
            website: str_field(payload, "website")?,
            last_date: date_field(payload, "lastDate")?,
            bvmf_category: str_field(payload, "describleCategoryBVMF")?,
            security_codes: security_codes(payload),
        })
    }
}

fn field<'a>(payload: &'a Value, key: &'static str) -> Result<&'a Value, RequestError> {
    payload.get(key).ok_or(RequestError::MissingKey { key })
}

// The service sends nulls for unset text fields; those read as empty strings.
fn str_field(payload: &Value, key: &'static str) -> Result<String, RequestError> {
    match field(payload, key)? {
        Value::String(s) => Ok(s.clone()),
        Value::Null => Ok(String::new()),
        Value::Number(n) => Ok(n.to_string()),
        _ => Err(RequestError::InvalidValue { key }),
    }
}

fn bool_field(payload: &Value, key: &'static str) -> Result<bool, RequestError> {
    field(payload, key)?
        .as_bool()
        .ok_or(RequestError::InvalidValue { key })
}

fn date_field(payload: &Value, key: &'static str) -> Result<NaiveDateTime, RequestError> {
    let raw = field(payload, key)?
        .as_str()
        .ok_or(RequestError::InvalidValue { key })?;
    NaiveDateTime::parse_from_str(raw, LAST_DATE_FORMAT)
        .map_err(|_| RequestError::InvalidValue { key })
}

// `otherCodes` is optional; entries without both keys are dropped.
fn security_codes(payload: &Value) -> Vec<SecurityCode> {
    payload
        .get("otherCodes")
        .and_then(Value::as_array)
        .map(|codes| {
            codes
                .iter()
                .filter_map(|elem| {
                    Some(SecurityCode {
                        code: elem.get("code")?.as_str()?.to_string(),
                        isin: elem.get("isin")?.as_str()?.to_string(),
                    })
                })
                .collect()
        })
        .unwrap_or_default()
}
