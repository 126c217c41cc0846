/// Flat platform fee taken from every completed donation, in percent.
pub const PLATFORM_FEE_PERCENT: i64 = 5;

/// How a gross donation divides between the platform and the artist.
/// All amounts in minor currency units.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeeSplit {
    pub gross_cents: i64,
    pub fee_cents: i64,
    pub net_cents: i64,
}

impl FeeSplit {
    /// Split a gross amount: the fee is 5% rounded half-up, the artist gets
    /// the rest. `fee + net == gross` always holds.
    pub fn from_gross(gross_cents: i64) -> Self {
        let fee_cents = (gross_cents * PLATFORM_FEE_PERCENT + 50) / 100;
        Self {
            gross_cents,
            fee_cents,
            net_cents: gross_cents - fee_cents,
        }
    }

    /// A failed payment settles nothing: the attempted gross is recorded,
    /// fee and net stay zero.
    pub fn failed(gross_cents: i64) -> Self {
        Self {
            gross_cents,
            fee_cents: 0,
            net_cents: 0,
        }
    }
}
