//! The framework's own checks, run through the framework itself.
//!
//! Each assertion gets one test that must pass and one that must fail.

use testrunner::registry;
use testrunner::{check, check_false, expect_approx, expect_eq, expect_err, expect_ne, fail};
use testrunner::{must_fail, test_case};

pub fn register() {
    registry::register(test_case!(AssertTrue, { check!(true); }));
    registry::register(must_fail!(AssertTrueFail, { check!(false); }));

    registry::register(test_case!(AssertFalse, { check_false!(false); }));
    registry::register(must_fail!(AssertFalseFail, { check_false!(true); }));

    registry::register(test_case!(ExpectEq, { expect_eq!(42, 42); }));
    registry::register(must_fail!(ExpectEqFail, { expect_eq!('A', 'B'); }));

    registry::register(test_case!(ExpectNe, { expect_ne!(41, 42); }));
    registry::register(must_fail!(ExpectNeFail, { expect_ne!('A', 'A'); }));

    registry::register(test_case!(ExpectThrow, {
        expect_err!("not a number".parse::<i32>());
    }));
    registry::register(must_fail!(ExpectThrowFail, {
        expect_err!("42".parse::<i32>());
    }));

    registry::register(test_case!(ExpectApprox, { expect_approx!(0.1 + 0.2, 0.3); }));
    registry::register(must_fail!(ExpectApproxFail, { expect_approx!(1.0f32, 1.1f32); }));

    registry::register(must_fail!(ForcedFail, { fail!("Forced fail"); }));
}
