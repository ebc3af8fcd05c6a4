use std::ops::RangeInclusive;

/// Show titles used for synthetic assignment and for the manual show picker.
pub const SHOW_CATALOG: [&str; 16] = [
    "Stranger Things",
    "The Crown",
    "Money Heist",
    "Breaking Bad",
    "Wednesday",
    "The Witcher",
    "Dark",
    "Narcos",
    "Black Mirror",
    "You",
    "Ozark",
    "Bridgerton",
    "The Sandman",
    "Sweet Tooth",
    "The Night Agent",
    "Beef",
];

/// Years drawn for synthetic release dates.
pub const YEAR_RANGE: RangeInclusive<u16> = 2015..=2023;

pub fn catalog_titles() -> Vec<String> {
    SHOW_CATALOG.iter().map(|s| s.to_string()).collect()
}
