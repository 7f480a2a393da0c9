use super::*;

#[test]
fn megabytes_round_to_two_decimals() {
    assert_eq!(format_megabytes(1024.0 * 1024.0), "1.00 MB");
    assert_eq!(format_megabytes(2.5 * 1024.0 * 1024.0), "2.50 MB");
}

#[test]
fn small_files_show_fractions() {
    assert_eq!(format_megabytes(512.0 * 1024.0), "0.50 MB");
}

#[test]
fn iso_timestamp_is_reduced_to_date() {
    assert_eq!(format_date("2025-11-02T10:30:00Z"), "2025-11-02");
}

#[test]
fn date_only_strings_pass_through() {
    assert_eq!(format_date("2025-11-02"), "2025-11-02");
    assert_eq!(format_date(""), "");
}
