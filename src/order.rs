//! Month-name ordering for dates.
//!
//! Dates whose month name contains an 'r' (January to April, September to
//! December) come first, oldest to newest. Dates in May, June, July and
//! August come after them, newest to oldest. Over whole years the month
//! sequence is 1 2 3 4 9 10 11 12 8 7 6 5.

use std::cmp::{Ordering, Reverse};

use crate::Date;

/// Sort key equivalent to [`r_month_order`].
///
/// Variant order carries the partition: every `WithR` key is less than every
/// `WithoutR` key. Inside `WithoutR` the date is wrapped in [`Reverse`] so
/// later dates sort first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum RMonthKey {
    WithR(Date),
    WithoutR(Reverse<Date>),
}

impl From<Date> for RMonthKey {
    fn from(date: Date) -> Self {
        if date.has_r() {
            Self::WithR(date)
        } else {
            Self::WithoutR(Reverse(date))
        }
    }
}

impl RMonthKey {
    /// Returns the date this key was built from
    pub const fn date(&self) -> Date {
        match *self {
            Self::WithR(date) | Self::WithoutR(Reverse(date)) => date,
        }
    }
}

/// First stage: dates in r-months before dates in other months.
/// Two dates on the same side compare equal.
pub fn by_r_group(a: &Date, b: &Date) -> Ordering {
    // `true` sorts after `false`, so compare the negated flags
    (!a.has_r()).cmp(&!b.has_r())
}

/// Second stage: ascending inside the r-month group, descending inside the
/// other group. Dates from different groups compare equal here; [`by_r_group`]
/// has already separated them.
pub fn within_group(a: &Date, b: &Date) -> Ordering {
    match (a.has_r(), b.has_r()) {
        (true, true) => a.cmp(b),
        (false, false) => b.cmp(a),
        _ => Ordering::Equal,
    }
}

/// Full comparator: [`by_r_group`] then [`within_group`].
///
/// Total over valid dates and consistent with [`RMonthKey`]. Only exactly
/// equal dates compare `Equal`.
pub fn r_month_order(a: &Date, b: &Date) -> Ordering {
    by_r_group(a, b).then_with(|| within_group(a, b))
}

/// Returns a sorted copy of `dates`; the input is left untouched.
///
/// The sort is stable and duplicates stay adjacent.
///
/// ```
/// use rmonth_sort::{Date, sort_dates};
///
/// let dates: Vec<Date> = ["2005-07-01", "2005-01-02", "2005-01-01", "2005-05-03"]
///     .iter()
///     .map(|s| s.parse::<Date>())
///     .collect::<Result<_, _>>()?;
///
/// let sorted: Vec<String> = sort_dates(&dates).iter().map(ToString::to_string).collect();
/// assert_eq!(sorted, ["2005-01-01", "2005-01-02", "2005-07-01", "2005-05-03"]);
/// # Ok::<(), rmonth_sort::DateError>(())
/// ```
pub fn sort_dates(dates: &[Date]) -> Vec<Date> {
    let mut sorted = dates.to_vec();
    sort_dates_in_place(&mut sorted);
    sorted
}

/// Sorts `dates` in place with the same order as [`sort_dates`].
pub fn sort_dates_in_place(dates: &mut [Date]) {
    tracing::trace!(len = dates.len(), "sorting dates by r-month order");
    dates.sort_by_key(|&date| RMonthKey::from(date));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(year: u16, month: u8, day: u8) -> Date {
        Date::from_ymd(year, month, day).expect("valid date in test")
    }

    fn dates(ymds: &[(u16, u8, u8)]) -> Vec<Date> {
        ymds.iter().map(|&(y, m, d)| date(y, m, d)).collect()
    }

    #[test]
    fn test_documented_example() {
        let input = dates(&[(2005, 7, 1), (2005, 1, 2), (2005, 1, 1), (2005, 5, 3)]);
        let expected = dates(&[(2005, 1, 1), (2005, 1, 2), (2005, 7, 1), (2005, 5, 3)]);
        assert_eq!(sort_dates(&input), expected);
    }

    #[test]
    fn test_summer_months_sort_descending() {
        // None of May..August has an 'r', so all four land in the descending group
        let input = dates(&[(2023, 5, 20), (2023, 6, 8), (2023, 7, 17), (2023, 8, 3)]);
        let expected = dates(&[(2023, 8, 3), (2023, 7, 17), (2023, 6, 8), (2023, 5, 20)]);
        assert_eq!(sort_dates(&input), expected);
    }

    #[test]
    fn test_month_sequence_over_a_year() {
        let input: Vec<Date> = (1..=12).map(|m| date(2023, m, 1)).collect();
        let months: Vec<u8> = sort_dates(&input).iter().map(|d| d.month().get()).collect();
        assert_eq!(months, [1, 2, 3, 4, 9, 10, 11, 12, 8, 7, 6, 5]);
    }

    #[test]
    fn test_input_not_modified() {
        let input = dates(&[(2005, 7, 1), (2005, 1, 2), (2005, 5, 3)]);
        let copy = input.clone();
        let _ = sort_dates(&input);
        assert_eq!(input, copy);
    }

    #[test]
    fn test_empty_and_singleton() {
        assert!(sort_dates(&[]).is_empty());

        let single = [date(2023, 6, 8)];
        assert_eq!(sort_dates(&single), single);
    }

    #[test]
    fn test_duplicates_retained_and_adjacent() {
        let input = dates(&[
            (2023, 6, 8),
            (2023, 1, 1),
            (2023, 6, 8),
            (2023, 1, 1),
            (2023, 7, 4),
        ]);
        let expected = dates(&[
            (2023, 1, 1),
            (2023, 1, 1),
            (2023, 7, 4),
            (2023, 6, 8),
            (2023, 6, 8),
        ]);
        assert_eq!(sort_dates(&input), expected);
    }

    #[test]
    fn test_years_respected_in_each_group() {
        let input = dates(&[(2024, 1, 1), (2023, 12, 31), (2022, 6, 1), (2024, 5, 1)]);
        let expected = dates(&[(2023, 12, 31), (2024, 1, 1), (2024, 5, 1), (2022, 6, 1)]);
        assert_eq!(sort_dates(&input), expected);
    }

    #[test]
    fn test_in_place_matches_copy() {
        let input = dates(&[(2023, 8, 3), (2023, 3, 10), (2023, 5, 20), (2023, 12, 2)]);
        let mut buffer = input.clone();
        sort_dates_in_place(&mut buffer);
        assert_eq!(buffer, sort_dates(&input));
    }

    #[test]
    fn test_by_r_group() {
        let october = date(2023, 10, 12);
        let may = date(2023, 5, 20);
        let march = date(2024, 3, 1);

        assert_eq!(by_r_group(&october, &may), Ordering::Less);
        assert_eq!(by_r_group(&may, &october), Ordering::Greater);
        assert_eq!(by_r_group(&october, &march), Ordering::Equal);
    }

    #[test]
    fn test_within_group() {
        let jan = date(2023, 1, 15);
        let feb = date(2023, 2, 28);
        let may = date(2023, 5, 20);
        let june = date(2023, 6, 8);

        assert_eq!(within_group(&jan, &feb), Ordering::Less);
        assert_eq!(within_group(&may, &june), Ordering::Greater);
        assert_eq!(within_group(&jan, &may), Ordering::Equal);
        assert_eq!(within_group(&jan, &jan), Ordering::Equal);
    }

    #[test]
    fn test_key_agrees_with_comparator() {
        let sample: Vec<Date> = (1..=12)
            .flat_map(|m| [date(2022, m, 1), date(2023, m, 15), date(2023, m, 28)])
            .collect();

        for a in &sample {
            for b in &sample {
                assert_eq!(
                    RMonthKey::from(*a).cmp(&RMonthKey::from(*b)),
                    r_month_order(a, b),
                    "key and comparator disagree on {a} vs {b}"
                );
            }
        }
    }

    #[test]
    fn test_equal_only_for_identical_dates() {
        let a = date(2023, 7, 17);
        let b = date(2023, 7, 17);
        assert_eq!(r_month_order(&a, &b), Ordering::Equal);
        assert_ne!(r_month_order(&a, &date(2023, 7, 18)), Ordering::Equal);
    }

    #[test]
    fn test_key_round_trips_date() {
        for d in [date(2023, 1, 15), date(2023, 7, 17)] {
            assert_eq!(RMonthKey::from(d).date(), d);
        }
    }
}
