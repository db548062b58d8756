//! Static datasets used across harnesses.
//!
//! `DEBT_CSV` mirrors the layout of the published spreadsheet export: a title
//! line and a source note above the header, empty cells for missing figures,
//! and the occasional `..` placeholder.

/// Seven rows. Benin (no debt figure) and the unnamed row are incomplete;
/// Tonga's `..` is a value, so it survives the cleanup and normalises to 0.
pub const DEBT_CSV: &str = "\
Debt to China, selected low and middle income countries
Source: International Debt Statistics
Country Name,Country Code,Debt to China,Total debt,GNI,Debt to China as share of GNI,Debt to China as share of total debt
Angola,AGO,21500000000,57000000000,88000000000,24.4,37.7
Benin,BEN,,2900000000,15000000000,,
Djibouti,DJI,1400000000,2600000000,3100000000,45.2,53.8
,XKX,300000000,,,,
Kenya,KEN,7400000000,37000000000,108000000000,6.9,20
Laos,LAO,5000000000,..,18000000000,27.8,
Tonga,TON,..,190000000,500000000,..,..
";

/// Country names kept from [`DEBT_CSV`] after incomplete rows are dropped,
/// in file order.
pub const DEBT_CSV_COMPLETE: &[&str] = &["Angola", "Djibouti", "Kenya", "Laos", "Tonga"];

/// The same shape the data API served: a JSON array of row objects, with
/// numbers already typed and `null` for gaps.
pub const DEBT_JSON: &str = r#"[
  {"Country Name": "Pakistan", "Country Code": "PAK", "Debt to China": 26000000000, "Total debt": 130000000000, "GNI": 340000000000, "Debt to China as share of GNI": 7.6, "Debt to China as share of total debt": 20},
  {"Country Name": "Sri Lanka", "Country Code": "LKA", "Debt to China": "7100000000", "Total debt": null, "GNI": 84000000000, "Debt to China as share of GNI": "8.5", "Debt to China as share of total debt": null},
  {"Country Name": "Zambia", "Country Code": "ZMB", "Debt to China": 5900000000, "GNI": 21000000000, "Debt to China as share of GNI": 28.1}
]"#;

/// Strings that parse in full, with the value they must normalise to.
pub const VALID_NUMERIC: &[(&str, f64)] = &[
    ("0", 0.0),
    ("1", 1.0),
    ("42.5", 42.5),
    ("-17", -17.0),
    ("0.000001", 0.000001),
    ("21500000000", 21_500_000_000.0),
    ("1.5e9", 1.5e9),
    (" 88 ", 88.0),
];

/// Values that carry no leading number and so must normalise to zero.
pub const NON_NUMERIC: &[&str] = &["", "N/A", "..", "-", "n.a.", "NaN", "inf", "   "];
