//! 振替休日: make-up holidays for national holidays that fall on a Sunday.

use std::collections::{BTreeSet, HashSet};

use crate::date::Date;
use crate::weekday::Weekday;

use super::rules::SubstituteRule;
use super::{Holiday, SUBSTITUTE_HOLIDAY};

/// Derive the substitute holidays for `holidays`.
///
/// Each distinct Sunday among the input dates yields at most one
/// substitute, so a Sunday carrying two holiday names is not compensated
/// twice.  The returned records are in chronological order and carry the
/// name [`SUBSTITUTE_HOLIDAY`].
pub fn substitute_holidays(holidays: &[Holiday], rule: SubstituteRule) -> Vec<Holiday> {
    let mut occupied: HashSet<Date> = holidays.iter().map(Holiday::date).collect();
    let sundays: BTreeSet<Date> = holidays
        .iter()
        .map(Holiday::date)
        .filter(|d| d.weekday() == Weekday::Sunday)
        .collect();

    let mut substitutes = Vec::new();
    for sunday in sundays {
        let Ok(mut candidate) = sunday.add_days(1) else {
            continue;
        };
        match rule {
            SubstituteRule::NextDayOnly => {
                if occupied.contains(&candidate) {
                    tracing::debug!(%sunday, %candidate, "next day already a holiday, no substitute");
                    continue;
                }
            }
            SubstituteRule::Cascade => {
                while occupied.contains(&candidate) || candidate.weekday() == Weekday::Sunday {
                    match candidate.add_days(1) {
                        Ok(next) => candidate = next,
                        Err(_) => break,
                    }
                }
                if occupied.contains(&candidate) {
                    continue;
                }
            }
        }
        tracing::debug!(%sunday, substitute = %candidate, "derived substitute holiday");
        occupied.insert(candidate);
        substitutes.push(Holiday::new(candidate, SUBSTITUTE_HOLIDAY));
    }
    substitutes
}
