use crate::config::DateLabels;
use chrono::{Datelike, NaiveDate};

const MONTHS_ES: [&str; 12] = [
    "enero",
    "febrero",
    "marzo",
    "abril",
    "mayo",
    "junio",
    "julio",
    "agosto",
    "septiembre",
    "octubre",
    "noviembre",
    "diciembre",
];

const WEEKDAYS_ES: [&str; 7] = [
    "lunes",
    "martes",
    "miércoles",
    "jueves",
    "viernes",
    "sábado",
    "domingo",
];

pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

/// "miércoles 1 mayo 2024"
pub fn spanish_label(d: NaiveDate) -> String {
    let weekday = WEEKDAYS_ES[d.weekday().num_days_from_monday() as usize];
    let month = MONTHS_ES[d.month0() as usize];
    format!("{} {} {} {}", weekday, d.day(), month, d.year())
}

pub fn label(d: NaiveDate, labels: DateLabels) -> String {
    match labels {
        DateLabels::Es => spanish_label(d),
        DateLabels::Iso => d.format("%Y-%m-%d").to_string(),
    }
}

pub fn month_last_day(y: i32, m: u32) -> Option<u32> {
    match m {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => Some(31),
        4 | 6 | 9 | 11 => Some(30),
        2 => {
            let leap = (y % 4 == 0 && y % 100 != 0) || (y % 400 == 0);
            Some(if leap { 29 } else { 28 })
        }
        _ => None,
    }
}
