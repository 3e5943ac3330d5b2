#![cfg(test)]

use std::borrow::Cow;
use std::cmp::Ordering::{Equal, Greater, Less};

use super::*;

#[test]
fn test_numbers_rank_by_value() {
    assert_eq!(3_i32.rank(&9), Less);
    assert_eq!((-1_i64).rank(&-5), Greater);
    assert_eq!(42_usize.rank(&42), Equal);
    assert_eq!('b'.rank(&'a'), Greater);

    assert_eq!(1.5_f64.rank(&-2.0), Greater);
    assert_eq!(
        f64::NAN.rank(&f64::INFINITY),
        Greater,
        "NaN should rank above infinity under total ordering."
    );
    assert_eq!(0.0_f32.rank(&-0.0), Greater, "Positive zero should outrank negative zero.");
}

#[test]
fn test_text_ranks_by_length() {
    assert_eq!("hi".rank("hello"), Less);
    assert_eq!("zz".rank("aaa"), Less, "Text shouldn't rank lexicographically.");
    assert_eq!("hello".rank("howdy"), Equal);

    assert_eq!(
        "héllo".rank("hello"),
        Equal,
        "Text should rank by characters rather than bytes."
    );

    assert_eq!(String::from("hey").rank(&String::from("hi")), Greater);
    assert_eq!(Box::<str>::from("a").rank(&Box::from("ab")), Less);
    assert_eq!(Cow::Borrowed("abc").rank(&Cow::Owned(String::from("xyz"))), Equal);
    assert_eq!((&"howdy").rank(&&"hi"), Greater);
}
