//! Reporting period selection

/// Trailing period the statistics screen reports over
///
/// The fixed presets map to their day count directly; `Custom` carries the
/// raw user input and only resolves once it parses to a positive integer.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ReportingPeriod {
    #[default]
    Last7,
    Last15,
    Last30,
    Custom(String),
}

impl ReportingPeriod {
    /// Resolve the selection into a concrete day count
    ///
    /// Returns `None` when the custom input does not parse to an integer
    /// strictly greater than zero; an unresolved period must not produce a
    /// request.
    pub fn resolved_days(&self) -> Option<u32> {
        match self {
            Self::Last7 => Some(7),
            Self::Last15 => Some(15),
            Self::Last30 => Some(30),
            Self::Custom(raw) => raw.trim().parse::<u32>().ok().filter(|days| *days > 0),
        }
    }

    pub fn is_valid(&self) -> bool {
        self.resolved_days().is_some()
    }
}
