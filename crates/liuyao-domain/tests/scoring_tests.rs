//! Integration tests for strength scoring
//!
//! These tests exercise the public API the way the quantifier calls it.

use liuyao_domain::{score, score_tokens, Branch, BranchPosition, Element, Relation};

#[test]
fn test_every_branch_pair_follows_points_table() {
    for reference in Branch::ALL {
        for target in Branch::ALL {
            let r = reference.element();
            let t = target.element();
            let expected = if r == t {
                2
            } else if r.generates() == t {
                1
            } else if t.generates() == r {
                -1
            } else if r.destroys() == t {
                -2
            } else {
                assert_eq!(t.destroys(), r, "{} / {} fell through every relation", reference, target);
                1
            };

            let s = score(reference, reference, target);
            assert_eq!(s.month, expected, "month {} -> target {}", reference, target);
            assert_eq!(s.day, expected, "day {} -> target {}", reference, target);
        }
    }
}

#[test]
fn test_typical_reading() {
    // 月建 申, 日辰 卯, 用神 子
    let s = score_tokens("申", "卯", "子").unwrap();
    // Metal generates Water
    assert_eq!(s.month, 1);
    // Water generates Wood, draining the target
    assert_eq!(s.day, -1);
    assert_eq!(s.total(), 0);
}

#[test]
fn test_moving_lines_scored_against_same_frame() {
    let month = Branch::Wu;
    let day = Branch::Xu;
    let totals: Vec<i32> = [Branch::Si, Branch::Hai, Branch::You]
        .into_iter()
        .map(|line| score(month, day, line).total())
        .collect();

    // 巳: same as 午 (+2), Fire generates Earth (-1)
    // 亥: Water destroys Fire (+1), Earth destroys Water (-2)
    // 酉: Fire destroys Metal (-2), Earth generates Metal (+1)
    assert_eq!(totals, vec![1, -1, -1]);
}

#[test]
fn test_pinyin_tokens_accepted() {
    assert_eq!(score_tokens("yin", "zi", "mao"), score_tokens("寅", "子", "卯"));
}

#[test]
fn test_invalid_token_in_any_position() {
    for (args, position) in [
        (["未知", "子", "卯"], BranchPosition::Month),
        (["寅", "", "卯"], BranchPosition::Day),
        (["寅", "子", "木"], BranchPosition::Target),
    ] {
        let err = score_tokens(args[0], args[1], args[2]).unwrap_err();
        assert_eq!(err.position, position);
    }
}

#[test]
fn test_relation_exports() {
    assert_eq!(Element::Water.relation_to(Element::Fire), Relation::Destroys);
    assert_eq!(liuyao_domain::relation(Branch::Zi, Branch::Wu), Relation::Destroys);
}
