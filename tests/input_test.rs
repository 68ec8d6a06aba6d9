mod common;
use basic::mach::Runtime;
use common::*;

#[test]
fn test_input_in_program() {
    let mut r = runtime(&["10 INPUT A", "20 PRINT A + 1", "RUN"]);
    assert_eq!(exec(&mut r), " ? ");
    r.enter("41");
    assert_eq!(exec(&mut r), "42\n");
}

#[test]
fn test_input_reprompts() {
    let mut r = runtime(&["10 INPUT A", "20 PRINT A", "RUN"]);
    assert_eq!(exec(&mut r), " ? ");
    r.enter("twelve");
    assert_eq!(exec(&mut r), "INVALID NUMBER\n ? ");
    r.enter("1.5");
    assert_eq!(exec(&mut r), "INVALID NUMBER\n ? ");
    r.enter("");
    assert_eq!(exec(&mut r), "INVALID NUMBER\n ? ");
    r.enter(" 8");
    assert_eq!(exec(&mut r), "INVALID NUMBER\n ? ");
    r.enter("-12");
    assert_eq!(exec(&mut r), "-12\n");
}

#[test]
fn test_input_direct() {
    let mut r = Runtime::default();
    r.enter("INPUT N");
    assert_eq!(exec(&mut r), " ? ");
    r.enter("7");
    assert_eq!(exec(&mut r), "");
    r.enter("PRINT N * N");
    assert_eq!(exec(&mut r), "49\n");
}

#[test]
fn test_input_interrupted() {
    let mut r = runtime(&["10 INPUT A", "20 PRINT 2", "RUN"]);
    assert_eq!(exec(&mut r), " ? ");
    r.interrupt();
    assert_eq!(exec(&mut r), "BREAK IN 10\n");
    r.enter("PRINT 5");
    assert_eq!(exec(&mut r), "5\n");
}
