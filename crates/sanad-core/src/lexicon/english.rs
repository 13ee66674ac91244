//! English lexicon. No irregular forms; tens and units are hyphenated.

use super::{join_nonempty, Digits, Lexicon};
use crate::types::{Language, Scale};

static DIGITS: Digits = Digits {
    ones: [
        "", "one", "two", "three", "four", "five", "six", "seven", "eight", "nine",
    ],
    teens: [
        "ten",
        "eleven",
        "twelve",
        "thirteen",
        "fourteen",
        "fifteen",
        "sixteen",
        "seventeen",
        "eighteen",
        "nineteen",
    ],
    tens: [
        "", "", "twenty", "thirty", "forty", "fifty", "sixty", "seventy", "eighty", "ninety",
    ],
};

pub static ENGLISH: Lexicon = Lexicon {
    language: Language::English,
    zero: "zero",
    negative: "negative",
    group_joiner: " ",
    cents_joiner: " and ",
    cents_word: "cents",
    currency_names: ["US dollars", "Iraqi dinars"],
    group,
    tens,
    scaled,
};

fn tens(n: u8) -> String {
    DIGITS.below_hundred(n, "-")
}

fn group(n: u16) -> String {
    let hundreds = usize::from(n / 100);
    let rest = (n % 100) as u8;

    let head = if hundreds > 0 {
        format!("{} hundred", DIGITS.ones[hundreds])
    } else {
        String::new()
    };
    join_nonempty([head, tens(rest)], " ")
}

fn scaled(n: u16, scale: Scale) -> String {
    let word = match scale {
        Scale::Thousand => "thousand",
        Scale::Million => "million",
        Scale::Billion => "billion",
    };
    format!("{} {}", group(n), word)
}
