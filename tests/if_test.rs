mod common;
use common::*;

#[test]
fn test_if_then_jumps() {
    let mut r = runtime(&[
        "10 LET X = 10",
        "20 IF X > 5 THEN 40",
        "30 PRINT 0",
        "40 PRINT 1",
        "RUN",
    ]);
    assert_eq!(exec(&mut r), "1\n");
}

#[test]
fn test_if_false_advances() {
    let mut r = runtime(&[
        "10 LET X = 1",
        "20 IF X > 5 THEN 40",
        "30 PRINT 0",
        "40 PRINT 1",
        "RUN",
    ]);
    assert_eq!(exec(&mut r), "0\n1\n");
}

#[test]
fn test_if_relations() {
    let mut r = runtime(&[
        "10 IF 2 = 1 + 1 THEN 30",
        "20 PRINT 20",
        "30 IF 2 < 1 THEN 50",
        "40 PRINT 40",
        "50 IF 3 * 2 > 5 THEN 70",
        "60 PRINT 60",
        "70 PRINT 70",
        "RUN",
    ]);
    assert_eq!(exec(&mut r), "40\n70\n");
}

#[test]
fn test_if_divide_by_zero_halts() {
    let mut r = runtime(&["10 IF 1 / 0 = 0 THEN 30", "20 PRINT 2", "30 PRINT 3", "RUN"]);
    assert_eq!(exec(&mut r), "DIVIDE BY ZERO IN 10\n");
    let mut r = runtime(&["10 IF 0 = 1 / 0 THEN 30", "20 PRINT 2", "30 PRINT 3", "RUN"]);
    assert_eq!(exec(&mut r), "DIVIDE BY ZERO IN 10\n");
}

#[test]
fn test_if_undefined_is_skipped() {
    let mut r = runtime(&["10 IF Z = 0 THEN 30", "20 PRINT 2", "30 PRINT 3", "RUN"]);
    assert_eq!(exec(&mut r), "VARIABLE NOT DEFINED IN 10\n2\n3\n");
}

#[test]
fn test_if_both_sides_undefined() {
    let mut r = runtime(&["10 IF P = Q THEN 30", "20 PRINT 2", "30 PRINT 3", "RUN"]);
    assert_eq!(
        exec(&mut r),
        "VARIABLE NOT DEFINED IN 10\nVARIABLE NOT DEFINED IN 10\n2\n3\n"
    );
}

#[test]
fn test_if_missing_target() {
    let mut r = runtime(&["10 IF 1 = 1 THEN 15", "20 PRINT 2", "RUN"]);
    assert_eq!(exec(&mut r), "LINE NUMBER ERROR IN 10\n");
    let mut r = runtime(&["10 IF 1 = 2 THEN 15", "20 PRINT 2", "RUN"]);
    assert_eq!(exec(&mut r), "2\n");
}

#[test]
fn test_then_inside_identifier() {
    let mut r = runtime(&[
        "10 LET ATHENS = 3",
        "20 IF 1 < ATHENS THEN 40",
        "30 PRINT 0",
        "40 PRINT ATHENS",
        "RUN",
    ]);
    assert_eq!(exec(&mut r), "3\n");
}
