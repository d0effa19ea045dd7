//! Business-day convention.

/// How to adjust a date that falls on a non-business day (a weekend or a
/// national holiday).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BusinessDayConvention {
    /// Choose the first business day after the given holiday.
    Following,
    /// Choose the first business day after the given holiday unless it belongs
    /// to a different month; in that case choose the first business day before
    /// the holiday.
    ModifiedFollowing,
    /// Choose the first business day before the given holiday.
    Preceding,
    /// Choose the first business day before the given holiday unless it belongs
    /// to a different month; in that case choose the first business day after
    /// the holiday.
    ModifiedPreceding,
    /// Do not adjust (keep the original date).
    Unadjusted,
    /// Choose the nearest business day.  In case of a tie, use the following
    /// convention.
    Nearest,
    /// End of month: choose the last business day of the same month.
    EndOfMonth,
}

impl std::fmt::Display for BusinessDayConvention {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            BusinessDayConvention::Following => "Following",
            BusinessDayConvention::ModifiedFollowing => "Modified Following",
            BusinessDayConvention::Preceding => "Preceding",
            BusinessDayConvention::ModifiedPreceding => "Modified Preceding",
            BusinessDayConvention::Unadjusted => "Unadjusted",
            BusinessDayConvention::Nearest => "Nearest",
            BusinessDayConvention::EndOfMonth => "End of Month",
        };
        write!(f, "{s}")
    }
}

impl std::str::FromStr for BusinessDayConvention {
    type Err = yamada_core::Error;

    /// Parse the kebab-case name used on the command line and in config
    /// files (`following`, `modified-following`, …).
    fn from_str(s: &str) -> yamada_core::Result<Self> {
        match s {
            "following" => Ok(BusinessDayConvention::Following),
            "modified-following" => Ok(BusinessDayConvention::ModifiedFollowing),
            "preceding" => Ok(BusinessDayConvention::Preceding),
            "modified-preceding" => Ok(BusinessDayConvention::ModifiedPreceding),
            "unadjusted" => Ok(BusinessDayConvention::Unadjusted),
            "nearest" => Ok(BusinessDayConvention::Nearest),
            "end-of-month" => Ok(BusinessDayConvention::EndOfMonth),
            _ => Err(yamada_core::Error::parse(s, "business-day convention")),
        }
    }
}
