//! Central Kurdish (Sorani) lexicon.
//!
//! Regular scale words throughout. A hundreds digit of one is "سەد" on its
//! own; the conjunction "و" stands between spaces.

use super::{join_nonempty, Digits, Lexicon};
use crate::types::{Language, Scale};

const AND: &str = " و ";

static DIGITS: Digits = Digits {
    ones: [
        "", "یەک", "دوو", "سێ", "چوار", "پێنج", "شەش", "حەوت", "هەشت", "نۆ",
    ],
    teens: [
        "دە", "یازدە", "دوازدە", "سێزدە", "چواردە", "پازدە", "شازدە", "حەڤدە", "هەژدە", "نۆزدە",
    ],
    tens: [
        "", "", "بیست", "سی", "چل", "پەنجا", "شەست", "حەفتا", "هەشتا", "نەوەد",
    ],
};

pub static KURDISH: Lexicon = Lexicon {
    language: Language::Kurdish,
    zero: "سفر",
    negative: "نێگەتیڤ",
    group_joiner: AND,
    cents_joiner: AND,
    cents_word: "سەنت",
    currency_names: ["دۆلاری ئەمریکی", "دیناری عێراقی"],
    group,
    tens,
    scaled,
};

fn tens(n: u8) -> String {
    DIGITS.below_hundred(n, AND)
}

fn group(n: u16) -> String {
    let head = match usize::from(n / 100) {
        0 => String::new(),
        1 => "سەد".to_string(),
        d => format!("{} سەد", DIGITS.ones[d]),
    };
    join_nonempty([head, tens((n % 100) as u8)], AND)
}

fn scaled(n: u16, scale: Scale) -> String {
    let word = match scale {
        Scale::Thousand => "هەزار",
        Scale::Million => "ملیۆن",
        Scale::Billion => "ملیار",
    };
    format!("{} {}", group(n), word)
}
