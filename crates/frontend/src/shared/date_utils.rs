use chrono::{Datelike, NaiveDate};

const MONTHS_SHORT_FR: [&str; 12] = [
    "Jan.", "Fév.", "Mar.", "Avr.", "Mai", "Juin", "Juil.", "Aoû.", "Sep.", "Oct.", "Nov.", "Déc.",
];

/// Short French date for the bills table, e.g. "4 Avr. 04".
pub fn format_date_short(date: NaiveDate) -> String {
    let month = MONTHS_SHORT_FR[date.month0() as usize];
    format!("{} {} {:02}", date.day(), month, date.year() % 100)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_date_short() {
        let date = NaiveDate::from_ymd_opt(2004, 4, 4).unwrap();
        assert_eq!(format_date_short(date), "4 Avr. 04");
        let date = NaiveDate::from_ymd_opt(2001, 1, 1).unwrap();
        assert_eq!(format_date_short(date), "1 Jan. 01");
        let date = NaiveDate::from_ymd_opt(2002, 12, 31).unwrap();
        assert_eq!(format_date_short(date), "31 Déc. 02");
    }
}
