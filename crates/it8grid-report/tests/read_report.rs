//! File-level parsing tests.

use std::io::Write;

use approx::assert_abs_diff_eq;
use it8grid_core::{Error, ErrorKind};
use it8grid_report::read_report;

const PROFCHECK_OUTPUT: &str = "\
[2.345678] L22: 0.512000 -1.204000 0.880000 -> 31.205100 -9.870000 -34.110000 should be 30.693100 -8.666000 -34.990000
[0.123456] A1: 0.010000 0.020000 -0.010000 -> 15.010000 0.020000 -0.010000 should be 15.000000 0.000000 0.000000
[6.500000] D14: 1.000000e+00 -2.500000e+00 3.000000e-01 -> 60.000000 20.000000 10.000000 should be 59.000000 22.500000 9.700000
Profile check complete, peak err = 6.500000, avg err = 2.989711
Profile check complete, errors(CIEDE2000): max. = 6.500000, avg. = 2.989711, RMS = 3.921003
";

#[test]
fn test_read_profcheck_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(PROFCHECK_OUTPUT.as_bytes()).unwrap();

    let report = read_report(file.path()).unwrap();
    let ids: Vec<&str> = report.patches.iter().map(|p| p.id.as_str()).collect();
    assert_eq!(ids, ["L22", "A1", "D14"]);

    let d14 = report.patch("D14").unwrap();
    assert_abs_diff_eq!(d14.error[0], 1.0);
    assert_abs_diff_eq!(d14.error[1], -2.5);
    assert_abs_diff_eq!(d14.error[2], 0.3);

    assert_abs_diff_eq!(report.stat.max, 6.5);
    assert_abs_diff_eq!(report.stat.avg, 2.989711);
    assert_abs_diff_eq!(report.stat.rms, 3.921003);
}

#[test]
fn test_missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = read_report(dir.path().join("absent.txt")).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Io);
    assert!(matches!(err, Error::Io(_)));
}
