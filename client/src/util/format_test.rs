use super::*;

#[test]
fn bar_width_uses_percent_value() {
    assert_eq!(bar_width(Percent::clamped(42)), "width: 42%");
}

#[test]
fn readings_format_with_units() {
    assert_eq!(temperature(28.44), "28.4 °C");
    assert_eq!(salinity(35.06), "35.1 PSU");
    assert_eq!(depth(1999.6), "2000 m");
}

#[test]
fn money_switches_to_billions() {
    assert_eq!(money_musd(420.0), "$420M");
    assert_eq!(money_musd(1850.0), "$1.85B");
}

#[test]
fn badge_classes_are_distinct_per_severity() {
    let classes: Vec<&str> = Severity::ALL.into_iter().map(severity_class).collect();
    for (i, a) in classes.iter().enumerate() {
        for b in &classes[i + 1..] {
            assert_ne!(a, b);
        }
    }
}
