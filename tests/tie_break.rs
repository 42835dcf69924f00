use lps_engine::{utils::to_chars, FinderKind, PalindromeFinder};

fn located(kind: FinderKind, s: &str) -> (String, usize) {
    let m = kind.build().find(&to_chars(s));
    (m.text().to_string(), m.start())
}

#[test]
fn equal_odd_palindromes_pick_leftmost() {
    for kind in FinderKind::ALL {
        assert_eq!(located(kind, "abaxcdc"), ("aba".into(), 0), "{kind}");
        assert_eq!(located(kind, "xyzcdcaba"), ("cdc".into(), 3), "{kind}");
    }
}

#[test]
fn equal_even_palindromes_pick_leftmost() {
    for kind in FinderKind::ALL {
        assert_eq!(located(kind, "xaayybbz"), ("aa".into(), 1), "{kind}");
        assert_eq!(located(kind, "abbacddc"), ("abba".into(), 0), "{kind}");
    }
}

#[test]
fn distinct_characters_pick_first() {
    for kind in FinderKind::ALL {
        assert_eq!(located(kind, "ac"), ("a".into(), 0), "{kind}");
        assert_eq!(located(kind, "日本語"), ("日".into(), 0), "{kind}");
    }
}

#[test]
fn longer_palindrome_beats_earlier_shorter_one() {
    for kind in FinderKind::ALL {
        assert_eq!(located(kind, "abaxracecar"), ("racecar".into(), 4), "{kind}");
    }
}
