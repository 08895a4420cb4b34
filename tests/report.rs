use timebench::FractionFormat;

fn run_to_string(iterations: usize, format: FractionFormat) -> String {
    let mut out = Vec::new();
    timebench::run(iterations, format, &mut out).unwrap();
    String::from_utf8(out).unwrap()
}

#[test]
fn canonical_run_layout() {
    let report = run_to_string(10000, FractionFormat::Plain);
    let lines: Vec<&str> = report.lines().collect();
    assert_eq!(lines.len(), 5);
    assert_eq!(lines[0], "Bench Rust, 10000 iters:");
    assert!(lines[1].starts_with("current raw UTC time (Rust):"));
    assert!(lines[2].starts_with("current zoned local time (Rust):"));
    assert!(lines[3].starts_with("current zoned UTC time (Rust):"));
    assert!(lines[4].starts_with("UTC raw time to object (Rust):"));
}

#[test]
fn plain_values_are_nonnegative_with_nine_fractional_digits() {
    let report = run_to_string(10000, FractionFormat::Plain);
    for line in report.lines().skip(1) {
        let line = line.strip_suffix(" s").unwrap();
        let value = line.split_whitespace().last().unwrap();
        let (_, frac) = value.split_once('.').unwrap();
        assert_eq!(frac.len(), 9, "bad value field in {:?}", line);
        assert!(value.parse::<f64>().unwrap() >= 0.0);
    }
}

#[test]
fn grouped_values_use_underscore_groups() {
    let report = run_to_string(100, FractionFormat::Grouped);
    for line in report.lines().skip(1) {
        let line = line.strip_suffix(" s").unwrap();
        let value = line.split_whitespace().last().unwrap();
        let (_, frac) = value.split_once('.').unwrap();
        let groups: Vec<&str> = frac.split('_').collect();
        assert_eq!(groups.len(), 3, "bad value field in {:?}", line);
        assert!(groups.iter().all(|g| g.len() == 3 && g.chars().all(|c| c.is_ascii_digit())));
    }
}

#[test]
fn single_iteration_run_succeeds() {
    let report = run_to_string(1, FractionFormat::Plain);
    assert_eq!(report.lines().next().unwrap(), "Bench Rust, 1 iters:");
    assert_eq!(report.lines().count(), 5);
}

#[test]
fn zero_iterations_is_an_error() {
    let mut out = Vec::new();
    assert!(timebench::run(0, FractionFormat::Plain, &mut out).is_err());
    assert!(out.is_empty());
}
