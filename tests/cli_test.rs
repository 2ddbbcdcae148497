use clap::Parser;
use folio::cli::Args;
use std::ffi::OsString;
use std::path::PathBuf;

fn make_args(args: &[&str]) -> Vec<OsString> {
    let mut res = vec![OsString::from("folio")];
    res.extend(args.iter().map(OsString::from));
    res
}

#[test]
fn test_no_args() {
    let parsed = Args::try_parse_from(make_args(&[])).unwrap();

    assert_eq!(parsed.site_dir, PathBuf::from("."));
    assert_eq!(parsed.output, None);
    assert!(!parsed.verbose);
}

#[test]
fn test_all_flags() {
    let args = make_args(&["--verbose", "--output", "./public_html", "./site"]);
    let parsed = Args::try_parse_from(args).unwrap();

    assert_eq!(parsed.site_dir, PathBuf::from("./site"));
    assert_eq!(parsed.output, Some(PathBuf::from("./public_html")));
    assert!(parsed.verbose);
}

#[test]
fn test_short_flags() {
    let args = make_args(&["-v", "-o", "out"]);
    let parsed = Args::try_parse_from(args).unwrap();

    assert!(parsed.verbose);
    assert_eq!(parsed.output, Some(PathBuf::from("out")));
}

#[test]
fn test_too_many_args() {
    let args = make_args(&["./site", "extra"]);
    assert!(Args::try_parse_from(args).is_err());
}
