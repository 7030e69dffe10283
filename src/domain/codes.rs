// ============================================================================
// Exchange Code Tables
// Enumerations embedded in COTAHIST data records
// ============================================================================

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

// ============================================================================
// Bulletin Type (CODBDI)
// ============================================================================

/// Daily bulletin classification (CODBDI).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum DailyBulletinType {
    StandardLot = 2,
    Sanctioned = 5,
    CourtSupervised = 6,
    ExtrajudicialRecovery = 7,
    JudicialRecovery = 8,
    /// Special temporary administration regime (RAET)
    TemporaryAdministration = 9,
    RightsAndReceipts = 10,
    Intervention = 11,
    RealEstateFunds = 12,
    /// Investment certificates, debentures and public debt securities
    InvestmentCertificates = 14,
    Bonds = 18,
    PrivateBonuses = 22,
    PublicBonds = 26,
    IndexCallOptionExercise = 32,
    IndexPutOptionExercise = 33,
    CallOptionExercise = 38,
    PutOptionExercise = 42,
    UnlistedSecuritiesAuction = 46,
    PrivatizationAuction = 48,
    EconomicRecoveryFundAuction = 49,
    Auction = 50,
    FinorAuction = 51,
    FinamAuction = 52,
    FisetAuction = 53,
    DelinquentSharesAuction = 54,
    CourtOrderSales = 56,
    Others = 58,
    ShareSwap = 60,
    Goal = 61,
    Forward = 62,
    DebenturesUpToThreeYears = 66,
    DebenturesOverThreeYears = 68,
    FutureWithGainRetention = 70,
    FutureWithContinuousMovement = 71,
    IndexCallOptions = 74,
    IndexPutOptions = 75,
    CallOptions = 78,
    PutOptions = 82,
    Bovespafix = 83,
    Somafix = 84,
    RegisteredCashForward = 90,
    OddLot = 96,
    GrandTotal = 99,
}

impl DailyBulletinType {
    pub fn from_code(code: u64) -> Option<Self> {
        use DailyBulletinType::*;

        let kind = match code {
            2 => StandardLot,
            5 => Sanctioned,
            6 => CourtSupervised,
            7 => ExtrajudicialRecovery,
            8 => JudicialRecovery,
            9 => TemporaryAdministration,
            10 => RightsAndReceipts,
            11 => Intervention,
            12 => RealEstateFunds,
            14 => InvestmentCertificates,
            18 => Bonds,
            22 => PrivateBonuses,
            26 => PublicBonds,
            32 => IndexCallOptionExercise,
            33 => IndexPutOptionExercise,
            38 => CallOptionExercise,
            42 => PutOptionExercise,
            46 => UnlistedSecuritiesAuction,
            48 => PrivatizationAuction,
            49 => EconomicRecoveryFundAuction,
            50 => Auction,
            51 => FinorAuction,
            52 => FinamAuction,
            53 => FisetAuction,
            54 => DelinquentSharesAuction,
            56 => CourtOrderSales,
            58 => Others,
            60 => ShareSwap,
            61 => Goal,
            62 => Forward,
            66 => DebenturesUpToThreeYears,
            68 => DebenturesOverThreeYears,
            70 => FutureWithGainRetention,
            71 => FutureWithContinuousMovement,
            74 => IndexCallOptions,
            75 => IndexPutOptions,
            78 => CallOptions,
            82 => PutOptions,
            83 => Bovespafix,
            84 => Somafix,
            90 => RegisteredCashForward,
            96 => OddLot,
            99 => GrandTotal,
            _ => return None,
        };
        Some(kind)
    }

    pub fn code(&self) -> u8 {
        *self as u8
    }
}

impl fmt::Display for DailyBulletinType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}", self.code())
    }
}

// ============================================================================
// Market Type (TPMERC)
// ============================================================================

/// Market segment (TPMERC), carried as a 3-character code in the file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum MarketType {
    /// 010
    Cash,
    /// 012
    CallOptionExercise,
    /// 013
    PutOptionExercise,
    /// 017
    Auction,
    /// 020
    OddLot,
    /// 030
    Forward,
    /// 050
    FutureWithGainRetention,
    /// 060
    FutureWithContinuousMovement,
    /// 070
    CallOptions,
    /// 080
    PutOptions,
}

impl MarketType {
    pub fn from_code(code: &str) -> Option<Self> {
        let market = match code {
            "010" => MarketType::Cash,
            "012" => MarketType::CallOptionExercise,
            "013" => MarketType::PutOptionExercise,
            "017" => MarketType::Auction,
            "020" => MarketType::OddLot,
            "030" => MarketType::Forward,
            "050" => MarketType::FutureWithGainRetention,
            "060" => MarketType::FutureWithContinuousMovement,
            "070" => MarketType::CallOptions,
            "080" => MarketType::PutOptions,
            _ => return None,
        };
        Some(market)
    }

    pub fn code(&self) -> &'static str {
        match self {
            MarketType::Cash => "010",
            MarketType::CallOptionExercise => "012",
            MarketType::PutOptionExercise => "013",
            MarketType::Auction => "017",
            MarketType::OddLot => "020",
            MarketType::Forward => "030",
            MarketType::FutureWithGainRetention => "050",
            MarketType::FutureWithContinuousMovement => "060",
            MarketType::CallOptions => "070",
            MarketType::PutOptions => "080",
        }
    }

    pub fn is_option(&self) -> bool {
        matches!(self, MarketType::CallOptions | MarketType::PutOptions)
    }
}

impl fmt::Display for MarketType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

// ============================================================================
// Strike Price Correction (INDOPC)
// ============================================================================

/// Monetary correction applied to an option's strike price (INDOPC).
///
/// A raw code of `0` means "no correction" and is represented as `None` on
/// the bulletin, not as a variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ContractCorrection {
    UsDollar = 1,
    Tjlp = 2,
    Igpm = 8,
    Urv = 9,
}

impl ContractCorrection {
    pub fn from_code(code: u64) -> Option<Self> {
        match code {
            1 => Some(ContractCorrection::UsDollar),
            2 => Some(ContractCorrection::Tjlp),
            8 => Some(ContractCorrection::Igpm),
            9 => Some(ContractCorrection::Urv),
            _ => None,
        }
    }

    pub fn code(&self) -> u8 {
        *self as u8
    }
}

// ============================================================================
// Quote Size (FATCOT)
// ============================================================================

/// Number of units a quoted price refers to (FATCOT).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum QuoteSize {
    /// Prices quoted per unit
    Unit,
    /// Prices quoted per thousand units
    Thousand,
}

impl QuoteSize {
    pub fn from_code(code: u64) -> Option<Self> {
        match code {
            1 => Some(QuoteSize::Unit),
            1000 => Some(QuoteSize::Thousand),
            _ => None,
        }
    }

    /// Units covered by one quoted price.
    pub fn units(&self) -> u32 {
        match self {
            QuoteSize::Unit => 1,
            QuoteSize::Thousand => 1000,
        }
    }
}
